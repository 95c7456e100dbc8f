//! Print one field of a JSON file, or every field as `key=value` lines.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use textwrench::extract::{value, Document};

#[derive(Debug, Parser)]
#[command(
    name = "get_from_json",
    version,
    about = "Print a field from a JSON file, or all fields as key=value lines"
)]
struct Args {
    /// Path to the JSON file to read.
    file: PathBuf,

    /// Field to print. When omitted, every field is printed.
    field: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let document = Document::load(&args.file)?;

    match &args.field {
        Some(field) => {
            // An absent key prints nothing and still exits 0.
            if let Some(found) = document.get(field) {
                println!("{}", value::render(found));
            }
        }
        None => {
            for (key, val) in document.entries() {
                println!("{}={}", key, value::render(val));
            }
        }
    }

    Ok(())
}
