use crate::cursor::TextCursor;
use crate::error::NoMatch;
use crate::parser::{Outcome, Parser};

/// Parser that consumes a single character accepted by a predicate
pub struct Token<F> {
    predicate: F,
}

impl<F> Token<F> {
    pub fn new(predicate: F) -> Self {
        Token { predicate }
    }
}

impl<F> Parser for Token<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let ch = cursor.value()?;
        if (self.predicate)(ch) {
            Ok((ch, cursor.next()))
        } else {
            Err(NoMatch::at(cursor.position()))
        }
    }
}

/// Convenience function to create a Token parser
pub fn token<F>(predicate: F) -> Token<F>
where
    F: Fn(char) -> bool,
{
    Token::new(predicate)
}

/// Parser that matches one specific character
pub struct LiteralChar(char);

impl Parser for LiteralChar {
    type Output = char;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value()? {
            ch if ch == self.0 => Ok((ch, cursor.next())),
            _ => Err(NoMatch::at(cursor.position())),
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn literal_char(expected: char) -> LiteralChar {
    LiteralChar(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_accepts() {
        let data = "7up";
        let cursor = TextCursor::new(data);
        let parser = token(|c| c.is_ascii_digit());

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, '7');
        assert_eq!(cursor.value().unwrap(), 'u');
    }

    #[test]
    fn test_token_rejects_without_consuming() {
        let data = "up";
        let cursor = TextCursor::new(data);
        let parser = token(|c| c.is_ascii_digit());

        let err = parser.parse(cursor).unwrap_err();
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_token_empty_input() {
        let parser = token(|_| true);
        assert!(parser.parse(TextCursor::new("")).is_err());
    }

    #[test]
    fn test_token_unicode() {
        let data = "é!";
        let parser = token(char::is_alphabetic);

        let (ch, cursor) = parser.parse(TextCursor::new(data)).unwrap();
        assert_eq!(ch, 'é');
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_literal_char() {
        let parser = literal_char('a');

        let (ch, cursor) = parser.parse(TextCursor::new("a")).unwrap();
        assert_eq!(ch, 'a');
        assert!(matches!(cursor, TextCursor::EndOfFile { .. }));

        assert!(parser.parse(TextCursor::new("b")).is_err());
    }
}
