//! Regex find/replace across the lines of a file.
//!
//! Backs the `replace_in_file` binary: read every line of the input file,
//! run the substitution rule over each, write the result to the output
//! file. The whole input is read before the output file is opened, so a
//! read failure never truncates an existing output file.

mod rule;

pub use rule::{Rule, Substitution};

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Errors that can occur while replacing over a file.
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid --from pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// What a run did. Feeds diagnostics and tests; never printed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read from the input file.
    pub lines: usize,
    /// Lines where the pattern matched at least once.
    pub matched: usize,
}

/// Copies `infile` to `outfile`, applying `substitution` to each line.
///
/// Lines keep their original terminators and are substituted
/// independently, so matches never span a line boundary. The output file
/// is created or truncated in place; there is no backup and no atomicity
/// guarantee, and a write failure can leave a partial file behind.
pub fn process(
    infile: &Path,
    outfile: &Path,
    substitution: &Substitution,
) -> Result<Summary, ReplaceError> {
    let content = fs::read_to_string(infile).map_err(|source| ReplaceError::ReadInput {
        path: infile.to_path_buf(),
        source,
    })?;

    let write_err = |source| ReplaceError::WriteOutput {
        path: outfile.to_path_buf(),
        source,
    };

    let out = File::create(outfile).map_err(write_err)?;
    let mut writer = BufWriter::new(out);

    let mut summary = Summary::default();
    for line in content.split_inclusive('\n') {
        summary.lines += 1;
        let replaced = substitution.apply(line);
        if matches!(replaced, Cow::Owned(_)) {
            summary.matched += 1;
        }
        writer.write_all(replaced.as_bytes()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    tracing::debug!(
        lines = summary.lines,
        matched = summary.matched,
        "replace pass finished"
    );
    Ok(summary)
}
