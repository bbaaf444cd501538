//! Common settings shared by the library and the tools.
use bincode::config::{self, Fixint, LittleEndian};

/// Default number of common-prefix matches examined at one position.
///
/// Matches beyond this number (i.e., the longest ones) are silently dropped.
pub const DEFAULT_MAX_PREFIX_MATCHES: usize = 1024;

/// Gets the bincode configuration used for dictionary images.
pub fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}
