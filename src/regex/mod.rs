pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;

use std::fmt;

pub use ast::{Atom, GroupType, Pattern, Quantifier, Token};
pub use error::CompileError;
pub use matcher::{match_pattern, search};
pub use parser::parse_regex;

/// Compiles `pattern` into its token sequence and anchor flags.
pub fn compile(pattern: &str) -> Result<Pattern, CompileError> {
    parse_regex(pattern)
}

/// A compiled pattern, ready to be matched against any number of lines.
///
/// Matching backtracks over quantifiers and alternation branches, so its
/// cost is worst-case exponential in the number of quantified groups.
/// There is no built-in step or time limit; callers that run untrusted
/// patterns should bound them externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    source: String,
    pattern: Pattern,
}

impl Regex {
    pub fn new(source: &str) -> Result<Regex, CompileError> {
        let pattern = compile(source)?;
        Ok(Regex {
            source: source.to_owned(),
            pattern,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        search(&self.pattern, text)
    }

    /// Returns the leftmost match in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        match_pattern(text, &self.pattern)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compiles `pattern` and tests it against `text` in one call.
pub fn matches(pattern: &str, text: &str) -> Result<bool, CompileError> {
    Ok(Regex::new(pattern)?.is_match(text))
}
