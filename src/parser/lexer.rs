//! Lexer for tokenizing date pattern strings.
//!
//! The lexer converts a Unicode date pattern into a stream of tokens that can be
//! processed by the parser. It handles the quoting rules of the pattern syntax:
//! - A run of the same ASCII letter (`yyyy`, `MM`) becomes one Field token
//! - Text between apostrophes (`'at'`) becomes a QuotedString token
//! - Two apostrophes (`''`) are a literal apostrophe, inside or outside quotes
//! - Any other character is a Literal token

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;

        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '\'' => {
                if self.peek_char() == Some('\'') {
                    self.advance();
                    self.advance();
                    Token::Literal('\'')
                } else {
                    self.lex_quoted_string()?
                }
            }
            c if c.is_ascii_alphabetic() => {
                let width = self.count_run(|next| next == c);
                Token::Field { letter: c, width }
            }
            c => {
                self.advance();
                Token::Literal(c)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the character after the current one, if any.
    fn peek_char(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since current char matches).
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes a quoted literal ('...'), where '' stands for one apostrophe.
    fn lex_quoted_string(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') if self.peek_char() == Some('\'') => {
                    content.push('\'');
                    self.advance();
                    self.advance();
                }
                Some('\'') => {
                    self.advance(); // Skip the closing quote
                    return Ok(Token::QuotedString(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(ParseError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
