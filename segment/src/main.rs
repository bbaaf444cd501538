use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use damatch::common::DEFAULT_MAX_PREFIX_MATCHES;
use damatch::token::{CharPositions, Token};
use damatch::{Dictionary, Direction, Matcher};

use clap::Parser;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Mode {
    /// Forward maximal matching.
    Forward,
    /// Backward matching.
    Backward,
    /// All the occurrences of words.
    Parse,
}

#[derive(Parser, Debug)]
#[clap(
    name = "segment",
    about = "Segments each line from stdin with a word list, or finds all the words in it"
)]
struct Args {
    /// Word list, one word per line.
    #[clap(long = "dict_path")]
    dict_path: Option<PathBuf>,

    /// Additional word list merged into the main one.
    #[clap(long = "user_dict_path", requires = "dict_path")]
    user_dict_path: Option<PathBuf>,

    /// Dictionary compiled by `compile`.
    #[clap(long = "compiled_path", conflicts_with = "dict_path")]
    compiled_path: Option<PathBuf>,

    /// What to compute for each line.
    #[clap(short = 'm', long, value_enum, default_value = "forward")]
    mode: Mode,

    /// Maximum number of prefix matches examined at one position.
    #[clap(long = "max_prefix_matches", default_value_t = DEFAULT_MAX_PREFIX_MATCHES)]
    max_prefix_matches: usize,

    /// Words registered before processing (repeatable).
    #[clap(long = "insert")]
    insert: Vec<String>,

    /// Prints character offsets instead of byte offsets.
    #[clap(long = "char_loc")]
    char_loc: bool,

    /// Prints only surfaces separated by spaces.
    #[clap(short = 'w', long)]
    wakachi: bool,

    /// Increases verbosity.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .init();
}

fn load_dictionary(args: &Args) -> Result<Dictionary, Box<dyn Error>> {
    if let Some(compiled_path) = &args.compiled_path {
        eprintln!("Loading the compiled dictionary...");
        return Ok(Dictionary::read(BufReader::new(File::open(compiled_path)?))?);
    }
    match &args.dict_path {
        Some(dict_path) => {
            eprintln!("Loading the dictionary...");
            Ok(Dictionary::from_paths(dict_path, args.user_dict_path.as_ref())?)
        }
        None => {
            log::warn!("No dictionary is given; starting with an empty one");
            Ok(Dictionary::new())
        }
    }
}

fn write_tokens<W>(
    out: &mut W,
    line: &str,
    tokens: &[Token],
    char_loc: bool,
    wakachi: bool,
) -> std::io::Result<()>
where
    W: Write,
{
    if wakachi {
        let surfaces: Vec<_> = tokens.iter().map(|t| t.surface()).collect();
        return writeln!(out, "{}", surfaces.join(" "));
    }
    let positions = char_loc.then(|| CharPositions::new(line));
    for t in tokens {
        let offset = positions
            .as_ref()
            .and_then(|p| p.char_position(t.offset()))
            .unwrap_or(t.offset());
        match t.word_id() {
            Some(word_id) => writeln!(out, "{offset}\t{}\t{word_id}", t.surface())?,
            None => writeln!(out, "{offset}\t{}\t*", t.surface())?,
        }
    }
    writeln!(out, "EOS")
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("Arguments: {:?}", args);

    let dict = load_dictionary(&args)?;
    let mut matcher = Matcher::new(dict).max_prefix_matches(args.max_prefix_matches)?;
    matcher.insert_words(&args.insert)?;
    log::info!("{} words are registered", matcher.num_words());
    eprintln!("Ready to segment");

    let mut out = BufWriter::new(std::io::stdout().lock());
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let tokens = match args.mode {
            Mode::Forward => matcher.segment(&line, Direction::Forward),
            Mode::Backward => matcher.segment(&line, Direction::Backward),
            Mode::Parse => matcher.parse(&line),
        };
        write_tokens(&mut out, &line, &tokens, args.char_loc, args.wakachi)?;
    }
    out.flush()?;

    Ok(())
}
