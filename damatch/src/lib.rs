//! # damatch
//!
//! Dictionary-driven maximal matching and multi-pattern search over UTF-8 text.
//!
//! ```
//! use damatch::{Dictionary, Direction, Matcher};
//!
//! let dict = Dictionary::from_readers("北京\n北京大学\n大学\n".as_bytes(), None::<&[u8]>).unwrap();
//! let matcher = Matcher::new(dict);
//!
//! let tokens = matcher.segment("北京大学", Direction::Forward);
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].surface(), "北京大学");
//!
//! let occurrences: Vec<_> = matcher
//!     .parse("北京大学")
//!     .iter()
//!     .map(|t| (t.offset(), t.surface()))
//!     .collect();
//! assert_eq!(occurrences, [(0, "北京"), (0, "北京大学"), (6, "大学")]);
//! ```
#![deny(missing_docs)]

#[cfg(target_pointer_width = "16")]
compile_error!("`target_pointer_width` must be larger than or equal to 32");

pub mod common;
pub mod dictionary;
pub mod errors;
pub mod matcher;
pub mod token;
mod utils;

#[cfg(test)]
mod test_utils;

pub use dictionary::Dictionary;
pub use matcher::{Direction, Matcher};
