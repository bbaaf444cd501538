use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use damatch::Dictionary;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "compile",
    about = "A program to compile word lists into a binary dictionary."
)]
struct Args {
    /// Word list, one word per line.
    #[clap(long = "dict_path")]
    dict_path: PathBuf,

    /// Additional word list merged into the main one.
    #[clap(long = "user_dict_path")]
    user_dict_path: Option<PathBuf>,

    /// File to which the binary dictionary is output.
    #[clap(short = 'o', long)]
    output: PathBuf,

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

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("Arguments: {:?}", args);

    eprintln!("Compiling the dictionary...");
    let start = Instant::now();
    let dict = Dictionary::from_paths(&args.dict_path, args.user_dict_path.as_ref())?;
    eprintln!("{} seconds", start.elapsed().as_secs_f64());
    log::info!(
        "{} words, up to {} bytes",
        dict.num_words(),
        dict.max_word_len()
    );

    eprintln!("Writing the dictionary...: {:?}", &args.output);
    let mut writer = BufWriter::new(File::create(&args.output)?);
    let num_bytes = dict.write(&mut writer)?;
    writer.flush()?;
    eprintln!("{} MiB", num_bytes as f64 / (1024. * 1024.));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(u8::MAX), "trace");
    }
}
