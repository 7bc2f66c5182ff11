use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(mapper: F, parser: P) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::token::{literal_char, token};

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Digit(u32),
    }

    #[test]
    fn test_map_char_to_digit() {
        let data = "5";
        let cursor = TextCursor::new(data);
        let parser = token(|c| c.is_ascii_digit()).map(|c| c.to_digit(10));

        let (digit, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(digit, Some(5));
        assert!(matches!(cursor, TextCursor::EndOfFile { .. }));
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let letter = token(char::is_alphabetic).map(Token::Letter);
        let digit = token(|c| c.is_ascii_digit()).map(|c| Token::Digit(c as u32 - '0' as u32));
        let parser = letter.or(digit);

        let (token, _) = parser.parse(TextCursor::new("8")).unwrap();
        assert_eq!(token, Token::Digit(8));
    }

    #[test]
    fn test_map_chaining() {
        let parser = literal_char('x')
            .map(|c| c.to_ascii_uppercase())
            .map(|c| format!("got {c}"));

        let (result, _) = parser.parse(TextCursor::new("x")).unwrap();
        assert_eq!(result, "got X");
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = literal_char('A').map(|c| c as u32);

        let err = parser.parse(TextCursor::new("xyz")).unwrap_err();
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(|c: char| c.len_utf8(), literal_char('é'));

        let (width, _) = parser.parse(TextCursor::new("é")).unwrap();
        assert_eq!(width, 2);
    }
}
