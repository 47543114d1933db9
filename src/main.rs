use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;

use gaaliguard::{load_terms, MatchEngine};
use tracing_subscriber::EnvFilter;

/// Line-oriented scanner: loads a term list, reads raw lines from stdin, and
/// prints one JSON `ScanReport` per line.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: gaaliguard <terms.csv>  (raw text on stdin, one input per line)");
            process::exit(2);
        }
    };

    let lexicon = load_terms(&path)?;
    let engine = MatchEngine::new(lexicon);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let report = engine.scan(&line);
        serde_json::to_writer(&mut out, &report)?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
