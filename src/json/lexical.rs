//! Scalar rules of the JSON grammar: numbers, keywords and string literals.

use crate::combine::CombineExt;
use crate::joined::joined_text;
use crate::json::value::{Json, Number};
use crate::many::{Many, many};
use crate::map::MapExt;
use crate::one_of::one_of;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::sequence::sequence_all;
use crate::some::some;
use crate::token::{Token, literal_char, token};

/// A single ASCII digit
pub fn digit() -> impl Parser<Output = char> {
    token(|c: char| c.is_ascii_digit())
}

/// One or more digits as an unsigned integer of any size
///
/// Signs, fractions and exponents are not part of the grammar.
pub fn integer() -> impl Parser<Output = Number> {
    joined_text(some(digit())).map(|digits: String| Number::from_digit_run(&digits))
}

/// Zero or more whitespace characters; always succeeds
pub fn whitespace() -> Many<Token<fn(char) -> bool>> {
    many(token(char::is_whitespace as fn(char) -> bool))
}

/// An exact literal string
pub fn keyword(word: &str) -> impl Parser<Output = String> + use<> {
    joined_text(sequence_all(word.chars().map(literal_char)))
}

pub fn null_value() -> impl Parser<Output = Json> {
    keyword("null").map(|_| Json::Null)
}

pub fn bool_value() -> impl Parser<Output = bool> {
    one_of([keyword("true"), keyword("false")]).map(|word| word == "true")
}

/// A double-quoted string
///
/// The only escape is `\"`, which yields a literal quote. Every other
/// character, a lone backslash included, is taken verbatim. The literal ends
/// at the first unescaped quote.
pub fn string_literal() -> impl Parser<Output = String> {
    let escaped_quote = keyword("\\\"").map(|_| '"');
    let plain = token(|c| c != '"');

    literal_char('"')
        .keep_right(joined_text(many(escaped_quote.or(plain))))
        .keep_left(literal_char('"'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::TextCursor;

    #[test]
    fn test_integer() {
        let (value, cursor) = integer().parse(TextCursor::new("123abc")).unwrap();
        assert_eq!(value, Number::from(123));
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_integer_leading_zeros() {
        let (value, _) = integer().parse(TextCursor::new("007")).unwrap();
        assert_eq!(value, Number::from(7));

        let (value, _) = integer().parse(TextCursor::new("0")).unwrap();
        assert_eq!(value.digits(), "0");
    }

    #[test]
    fn test_integer_rejects_sign_and_empty() {
        assert!(integer().parse(TextCursor::new("-1")).is_err());
        assert!(integer().parse(TextCursor::new("")).is_err());
    }

    #[test]
    fn test_integer_has_no_size_limit() {
        let digits = "123456789012345678901234567890";
        let (value, cursor) = integer().parse(TextCursor::new(digits)).unwrap();
        assert_eq!(value.digits(), digits);
        assert_eq!(value.as_u64(), None);
        assert!(cursor.eos());
    }

    #[test]
    fn test_digit_is_ascii_only() {
        assert!(digit().parse(TextCursor::new("٣")).is_err());
    }

    #[test]
    fn test_whitespace() {
        let (spaces, cursor) = whitespace().parse(TextCursor::new(" \t\n x")).unwrap();
        assert_eq!(spaces.len(), 4);
        assert_eq!(cursor.value().unwrap(), 'x');

        let (spaces, _) = whitespace().parse(TextCursor::new("x")).unwrap();
        assert!(spaces.is_empty());
    }

    #[test]
    fn test_keyword() {
        let (word, cursor) = keyword("null").parse(TextCursor::new("nullx")).unwrap();
        assert_eq!(word, "null");
        assert_eq!(cursor.value().unwrap(), 'x');

        assert!(keyword("null").parse(TextCursor::new("nul")).is_err());
    }

    #[test]
    fn test_null_value() {
        let (value, _) = null_value().parse(TextCursor::new("null")).unwrap();
        assert_eq!(value, Json::Null);
    }

    #[test]
    fn test_bool_value() {
        let (value, _) = bool_value().parse(TextCursor::new("true")).unwrap();
        assert!(value);

        let (value, _) = bool_value().parse(TextCursor::new("false")).unwrap();
        assert!(!value);

        assert!(bool_value().parse(TextCursor::new("True")).is_err());
    }

    #[test]
    fn test_string_literal() {
        let (text, cursor) = string_literal().parse(TextCursor::new("\"hej\" rest")).unwrap();
        assert_eq!(text, "hej");
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_string_literal_escaped_quote() {
        let (text, _) = string_literal().parse(TextCursor::new(r#""a\"b""#)).unwrap();
        assert_eq!(text, "a\"b");
    }

    #[test]
    fn test_string_literal_other_escapes_verbatim() {
        let (text, _) = string_literal().parse(TextCursor::new(r#""a\nb\\c""#)).unwrap();
        assert_eq!(text, r"a\nb\\c");
    }

    #[test]
    fn test_string_literal_unterminated() {
        assert!(string_literal().parse(TextCursor::new("\"abc")).is_err());
        assert!(string_literal().parse(TextCursor::new(r#""abc\""#)).is_err());
    }

    #[test]
    fn test_string_literal_empty_and_unicode() {
        let (text, _) = string_literal().parse(TextCursor::new("\"\"")).unwrap();
        assert_eq!(text, "");

        let (text, _) = string_literal().parse(TextCursor::new("\"こんにちは\"")).unwrap();
        assert_eq!(text, "こんにちは");
    }
}
