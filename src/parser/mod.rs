//! Parser for Unicode date patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{DateField, HourCycle, OffsetStyle, Pattern, PatternPart, TextWidth};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a date pattern string into a Pattern.
pub fn parse(pattern: &str) -> Result<Pattern, ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::EmptyPattern);
    }

    let mut parser = Parser::new(pattern);
    parser.parse()
}

/// Parser for date pattern strings.
struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    fn new(pattern: &'a str) -> Self {
        Self {
            lexer: Lexer::new(pattern),
        }
    }

    /// Parse the whole pattern.
    fn parse(&mut self) -> Result<Pattern, ParseError> {
        let mut builder = PatternBuilder::new();

        loop {
            let SpannedToken { token, start, .. } = self.lexer.next_token()?;
            match token {
                Token::Eof => break,
                Token::Literal(ch) => builder.push_literal_char(ch),
                Token::QuotedString(s) => builder.push_literal(&s),
                Token::Field { letter, width } => {
                    let field = field_for(letter, width).ok_or(ParseError::UnknownField {
                        position: start,
                        found: letter,
                    })?;
                    builder.add_field(field);
                }
            }
        }

        Ok(builder.build(self.lexer.input))
    }
}

/// Map a run of one pattern letter to the field it denotes.
fn field_for(letter: char, width: usize) -> Option<DateField> {
    let w = u8::try_from(width).unwrap_or(u8::MAX);

    let field = match letter {
        'G' => DateField::Era(match width {
            1..=3 => TextWidth::Short,
            4 => TextWidth::Full,
            _ => TextWidth::Narrow,
        }),
        'y' => DateField::Year(w),
        'Y' => DateField::WeekYear(w),
        'Q' | 'q' => match width {
            1 | 2 => DateField::Quarter(w),
            3 => DateField::QuarterText(TextWidth::Short),
            4 => DateField::QuarterText(TextWidth::Full),
            _ => DateField::Quarter(1),
        },
        'M' | 'L' => match width {
            1 | 2 => DateField::Month(w),
            3 => DateField::MonthText(TextWidth::Short),
            4 => DateField::MonthText(TextWidth::Full),
            _ => DateField::MonthText(TextWidth::Narrow),
        },
        'w' => DateField::WeekOfYear(w),
        'd' => DateField::Day(w),
        'D' => DateField::DayOfYear(w),
        'E' => DateField::Weekday(match width {
            1..=3 => TextWidth::Short,
            4 => TextWidth::Full,
            _ => TextWidth::Narrow,
        }),
        'a' => DateField::AmPm,
        'H' => DateField::Hour {
            cycle: HourCycle::H23,
            width: w,
        },
        'h' => DateField::Hour {
            cycle: HourCycle::H12,
            width: w,
        },
        'K' => DateField::Hour {
            cycle: HourCycle::H11,
            width: w,
        },
        'k' => DateField::Hour {
            cycle: HourCycle::H24,
            width: w,
        },
        'm' => DateField::Minute(w),
        's' => DateField::Second(w),
        'S' => DateField::Fraction(w),
        'Z' => DateField::ZoneOffset(match width {
            1..=3 => OffsetStyle::Basic { utc_z: false },
            4 => OffsetStyle::Gmt,
            _ => OffsetStyle::Extended { utc_z: true },
        }),
        'X' | 'x' => {
            let utc_z = letter == 'X';
            DateField::ZoneOffset(match width {
                1 => OffsetStyle::Hours { utc_z },
                2 | 4 => OffsetStyle::Basic { utc_z },
                _ => OffsetStyle::Extended { utc_z },
            })
        }
        'z' => DateField::ZoneName(if width >= 4 {
            TextWidth::Full
        } else {
            TextWidth::Short
        }),
        _ => return None,
    };

    Some(field)
}

/// Builder for constructing patterns, merging adjacent literal text.
struct PatternBuilder {
    parts: Vec<PatternPart>,
}

impl PatternBuilder {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn push_literal_char(&mut self, ch: char) {
        match self.parts.last_mut() {
            Some(PatternPart::Literal(s)) => s.push(ch),
            _ => self.parts.push(PatternPart::Literal(ch.to_string())),
        }
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(PatternPart::Literal(s)) => s.push_str(text),
            _ => self.parts.push(PatternPart::Literal(text.to_string())),
        }
    }

    fn add_field(&mut self, field: DateField) {
        self.parts.push(PatternPart::Field(field));
    }

    fn build(self, source: &str) -> Pattern {
        Pattern::from_parts(source, self.parts)
    }
}
