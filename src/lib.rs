pub mod regex;

pub use regex::{CompileError, Regex, matches};
