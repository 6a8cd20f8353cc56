//! fenprep -- dataset scanning CLI.
//!
//! Usage: `fenprep <dataset-dir> [manifest.json]`
//!
//! Scans a dataset directory, validates every filename label, prints a
//! summary to stdout, and optionally writes the summary as a JSON manifest.
//! No images are decoded by the scan.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use fenprep::dataset::manifest::scan_dataset;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: fenprep <dataset-dir> [manifest.json]");
        process::exit(2);
    }

    let dir = Path::new(&args[1]);
    let summary = match scan_dataset(dir) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: failed to scan {}: {}", dir.display(), e);
            process::exit(1);
        }
    };

    println!("total {}", summary.total);
    println!("valid {}", summary.valid);
    println!("malformed {}", summary.malformed.len());
    for entry in &summary.malformed {
        println!("bad {} ({})", entry.path.display(), entry.error);
    }

    if let Some(out) = args.get(2) {
        let json = match serde_json::to_string_pretty(&summary) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: failed to serialize manifest: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = fs::write(out, json) {
            eprintln!("error: failed to write {}: {}", out, e);
            process::exit(1);
        }
    }
}
