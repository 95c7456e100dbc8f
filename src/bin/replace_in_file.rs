//! Copy a file line by line, replacing every match of a regex on the way.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use textwrench::replace::{self, Substitution};

#[derive(Debug, Parser)]
#[command(
    name = "replace_in_file",
    version,
    about = "Copy INFILE to OUTFILE, replacing every match of a pattern on each line"
)]
struct Args {
    /// Regular expression to replace.
    #[arg(short, long)]
    from: Option<String>,

    /// Replacement text; may use $1-style capture references.
    #[arg(short, long)]
    to: Option<String>,

    /// Print the file paths and the substitution state before processing.
    #[arg(short, long)]
    verbose: bool,

    /// File to read.
    infile: PathBuf,

    /// File to write (created or truncated).
    outfile: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_diagnostics(&args);
    }

    let substitution = Substitution::new(args.from, args.to)?;
    replace::process(&args.infile, &args.outfile, &substitution)?;

    Ok(())
}

/// One line per path, then which substitution state applies.
///
/// Replacement only happens with both flags present; a one-sided pair gets
/// a notice here instead of an error, and the run copies input through.
fn print_diagnostics(args: &Args) {
    println!("infile: {}", args.infile.display());
    println!("outfile: {}", args.outfile.display());

    match (&args.from, &args.to) {
        (Some(from), Some(to)) => println!("Replacing '{}' with '{}'", from, to),
        (_, None) => println!("No replacement (missing --to argument)"),
        (None, Some(_)) => println!("No replacement (missing --from argument)"),
    }
}
