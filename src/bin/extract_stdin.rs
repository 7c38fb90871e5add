//! Reads saved feed HTML from stdin and writes the extracted posts to stdout.
//!
//! Output is CSV by default; pass `--json` for a JSON array of records.

use rs_feedposts::{csv_output, extract_posts_bytes};
use std::io::{self, Read, Write};

fn main() {
    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let records = match extract_posts_bytes(&html) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Extraction failed: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if json {
        serde_json::to_writer_pretty(&mut out, &records)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out))
            .map_err(rs_feedposts::Error::from)
    } else {
        csv_output::write_csv(&records, &mut out)
    };

    if let Err(e) = written {
        eprintln!("Failed to write output: {e}");
        std::process::exit(1);
    }
}
