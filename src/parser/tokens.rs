//! Token types for the date pattern lexer.

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of one pattern letter, e.g. `yyyy` is `Field { letter: 'y', width: 4 }`.
    Field { letter: char, width: usize },

    // Literals
    Literal(char),
    QuotedString(String),

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
