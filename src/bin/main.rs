#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use fzs::prelude::*;

/// fzs - score candidates against a fuzzy query
///
/// Reads one candidate per line from FILE or stdin and prints the ones matching
/// QUERY, best first. Candidates with equal scores keep their input order.
#[derive(Parser, Debug)]
#[command(name = "fzs", args_override_self = true, version, about)]
struct Cli {
    /// Query to score candidates against, tokens separated by spaces
    #[arg(allow_hyphen_values = true)]
    query: String,

    /// Read candidates from this file instead of stdin
    file: Option<PathBuf>,

    /// Prefix every line with its score and a tab
    #[arg(long, help_heading = "Output")]
    print_score: bool,

    /// Wrap matched bytes in square brackets
    #[arg(long, help_heading = "Output")]
    highlight: bool,

    /// Print at most this many candidates
    #[arg(short, long, help_heading = "Output")]
    limit: Option<usize>,

    #[command(flatten)]
    scoring: ScorerOptions,
}

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        warn!("could not install error report handler: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("fzs: {err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> Cli {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("fzs")));
    args.extend(
        env::var("FZS_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    Cli::parse_from(args)
}

fn read_candidates(reader: impl BufRead) -> io::Result<Vec<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|mut line| {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                line
            })
        })
        .collect()
}

fn real_main() -> Result<i32> {
    let cli = parse_args();
    let scorer = Scorer::new(cli.scoring.clone()).wrap_err("invalid scoring options")?;
    debug!("query {:?} with {:?}", cli.query, scorer.options());

    let candidates = match &cli.file {
        Some(path) => {
            let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
            read_candidates(BufReader::new(file))?
        }
        None => read_candidates(io::stdin().lock())?,
    };
    debug!("read {} candidates", candidates.len());

    let mut matched: Vec<(ScoreType, &[u8])> = candidates
        .iter()
        .map(|line| (scorer.score(line, &cli.query), line.as_slice()))
        .filter(|&(score, _)| score != MISMATCH)
        .collect();
    // stable: equal scores keep the input order
    matched.sort_by(|a, b| b.0.cmp(&a.0));
    if let Some(limit) = cli.limit {
        matched.truncate(limit);
    }
    debug!("{} candidates matched", matched.len());

    let mut stdout = BufWriter::new(io::stdout().lock());
    for &(score, line) in &matched {
        if cli.print_score {
            write!(stdout, "{score}\t")?;
        }
        if cli.highlight {
            stdout.write_all(&wrap_matches(line, &scorer.positions(line, &cli.query)))?;
        } else {
            stdout.write_all(line)?;
        }
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(if matched.is_empty() { 1 } else { 0 })
}
