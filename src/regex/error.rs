use thiserror::Error;

/// Structural problems found while compiling a pattern. Offsets count chars,
/// not bytes, from the start of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("unsupported escape sequence `{}` at offset {offset}", escape_text(.escape))]
    UnsupportedEscape { escape: Option<char>, offset: usize },

    #[error("bracket expression opened at offset {offset} is never closed")]
    UnterminatedBracket { offset: usize },

    #[error("group opened at offset {offset} is never closed")]
    UnterminatedGroup { offset: usize },

    #[error("quantifier `{quantifier}` at offset {offset} has nothing to repeat")]
    DanglingQuantifier { quantifier: char, offset: usize },

    #[error("anchor `{anchor}` at offset {offset} is not at the start or end of the pattern")]
    MisplacedAnchor { anchor: char, offset: usize },

    #[error("nested group at offset {offset} is not supported")]
    NestedGroup { offset: usize },

    #[error("unmatched `)` at offset {offset}")]
    UnopenedGroup { offset: usize },
}

fn escape_text(escape: &Option<char>) -> String {
    match escape {
        Some(c) => format!("\\{c}"),
        None => "\\".to_string(),
    }
}
