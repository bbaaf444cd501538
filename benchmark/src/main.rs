mod timer;

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use damatch::{Dictionary, Direction, Matcher};

use timer::Timer;

use clap::Parser;

const RUNS: usize = 10;
const TRIALS: usize = 10;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Mode {
    Forward,
    Backward,
    Parse,
}

#[derive(Parser, Debug)]
#[clap(name = "benchmark", about = "Measures the time to process lines from stdin.")]
struct Args {
    /// Word list, one word per line.
    #[clap(long = "dict_path", required_unless_present = "compiled_path")]
    dict_path: Option<PathBuf>,

    /// Dictionary compiled by `compile`.
    #[clap(long = "compiled_path", conflicts_with = "dict_path")]
    compiled_path: Option<PathBuf>,

    /// What to compute for each line.
    #[clap(short = 'm', long, value_enum, default_value = "parse")]
    mode: Mode,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let dict = match (&args.dict_path, &args.compiled_path) {
        (_, Some(compiled_path)) => Dictionary::read(BufReader::new(File::open(compiled_path)?))?,
        (Some(dict_path), None) => Dictionary::from_paths(dict_path, None::<&str>)?,
        (None, None) => unreachable!(),
    };
    let matcher = Matcher::new(dict);

    let lines = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()?;

    let measure = |t: &mut Timer| {
        let mut n_matches = 0;
        for _ in 0..RUNS {
            t.start();
            for line in &lines {
                n_matches += match args.mode {
                    Mode::Forward => matcher.segment(line, Direction::Forward).len(),
                    Mode::Backward => matcher.segment(line, Direction::Backward).len(),
                    Mode::Parse => matcher.parse(line).len(),
                };
            }
            t.stop();
        }
        n_matches
    };

    let mut t = Timer::new();

    // Warmup
    let n_matches = measure(&mut t);
    println!("Warmup: {}", t.average());

    let (mut min, mut max, mut avg) = (0.0, 0.0, 0.0);

    for _ in 0..TRIALS {
        t.reset();
        measure(&mut t);
        t.trim();
        min += t.min();
        avg += t.average();
        max += t.max();
    }

    min /= TRIALS as f64;
    avg /= TRIALS as f64;
    max /= TRIALS as f64;

    println!("Number_of_lines: {}", lines.len());
    println!("Number_of_results: {}", n_matches / RUNS);
    println!(
        "Elapsed_seconds_to_process_all_lines: [{},{},{}]",
        min, avg, max
    );

    Ok(())
}
