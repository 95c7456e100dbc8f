//! The substitution rule applied to each input line.

use std::borrow::Cow;

use regex::Regex;

use super::ReplaceError;

/// A compiled find/replace pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, ReplaceError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Replaces every non-overlapping match in `line`, leftmost first.
    ///
    /// The replacement may use `$1`-style capture references (`$$` for a
    /// literal dollar sign).
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(line, self.replacement.as_str())
    }
}

/// How the `--from`/`--to` flag pair resolves for a run.
///
/// Only `Enabled` substitutes. A one-sided pair is not an error: the run
/// still copies every line through unchanged, and only verbose mode
/// mentions the missing half.
#[derive(Debug, Clone)]
pub enum Substitution {
    /// Neither flag given.
    Disabled,
    /// `--to` without `--from`.
    MissingFrom,
    /// `--from` without `--to`.
    MissingTo,
    /// Both flags given and the pattern compiled.
    Enabled(Rule),
}

impl Substitution {
    /// Resolves the optional flag pair into a rule state.
    ///
    /// The pattern is compiled only when both halves are present; a
    /// one-sided `--from` is never even parsed as a regex.
    pub fn new(from: Option<String>, to: Option<String>) -> Result<Self, ReplaceError> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self::Enabled(Rule::new(&from, to)?)),
            (Some(_), None) => Ok(Self::MissingTo),
            (None, Some(_)) => Ok(Self::MissingFrom),
            (None, None) => Ok(Self::Disabled),
        }
    }

    /// Applies the rule to one line; identity in the degenerate states.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            Self::Enabled(rule) => rule.apply(line),
            _ => Cow::Borrowed(line),
        }
    }
}
