//! File-munging helpers behind the `get_from_json` and `replace_in_file`
//! binaries.
//!
//! `extract` loads a JSON document and answers field lookups; `replace`
//! copies a file line by line through an optional regex substitution. The
//! binaries stay thin: argument parsing and printing live there, everything
//! with behavior worth testing lives here.

pub mod extract;
pub mod replace;

pub use extract::{Document, ExtractError};
pub use replace::{ReplaceError, Substitution};
