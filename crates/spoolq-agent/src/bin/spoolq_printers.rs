//! Writes a starter `printers.json` alias map from the live printer list.
//!
//! The substring heuristics only seed the file; the operator is expected to
//! edit the result.

use std::collections::BTreeMap;
use std::path::PathBuf;

use spoolq::printing::{CupsSpooler, PrintSpooler};

fn pick<'a>(printers: &'a [String], needle: &str) -> &'a str {
    printers
        .iter()
        .find(|p| p.to_lowercase().contains(needle))
        .map(String::as_str)
        .unwrap_or("")
}

fn main() {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("printers.json"));

    let spooler = CupsSpooler::new();
    let printers = match spooler.available_printers() {
        Ok(printers) => printers,
        Err(e) => {
            eprintln!("Failed to list printers: {e}");
            std::process::exit(1);
        }
    };

    println!("Detected printers:");
    for (i, printer) in printers.iter().enumerate() {
        println!("{}. {}", i + 1, printer);
    }

    let aliases = BTreeMap::from([
        ("pos", pick(&printers, "tm")),
        ("office", pick(&printers, "hp")),
        ("kitchen", pick(&printers, "epson")),
    ]);

    let json = serde_json::to_string_pretty(&aliases).expect("alias map serializes");
    if let Err(e) = std::fs::write(&output, format!("{json}\n")) {
        eprintln!("Failed to write {}: {e}", output.display());
        std::process::exit(1);
    }

    println!("\nWrote {}:", output.display());
    println!("{json}");
}
