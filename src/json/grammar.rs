use crate::cursor::TextCursor;
use crate::forward::{Forward, Recursive};
use crate::json::lexical::{bool_value, integer, null_value, string_literal};
use crate::json::structure::{array_value, object_value};
use crate::json::value::Json;
use crate::map::MapExt;
use crate::one_of::one_of;
use crate::parser::{BoxedExt, BoxedParser, Outcome, Parser};
use std::sync::LazyLock;

/// The assembled JSON value rule
///
/// Arrays and objects refer back to the value rule through a forward
/// declaration, which is bound once every alternative exists. A `Grammar`
/// is immutable after construction and can be shared between threads.
pub struct Grammar {
    value: Recursive<Json>,
}

impl Grammar {
    pub fn new() -> Self {
        log::trace!("assembling JSON grammar");

        let value: Forward<Json> = Forward::declare();
        let alternatives: Vec<BoxedParser<Json>> = vec![
            null_value().boxed(),
            bool_value().map(Json::Bool).boxed(),
            integer().map(Json::Number).boxed(),
            string_literal().map(Json::String).boxed(),
            array_value(value.reference()).map(Json::Array).boxed(),
            object_value(value.reference()).map(Json::Object).boxed(),
        ];

        Grammar {
            value: value.define(one_of(alternatives).boxed()),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::new()
    }
}

impl Parser for Grammar {
    type Output = Json;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        self.value.parse(cursor)
    }
}

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(Grammar::new);

/// The process-wide JSON value parser, built on first use
pub fn json_value() -> &'static Grammar {
    &GRAMMAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_scalars() {
        let grammar = Grammar::new();

        let (value, _) = grammar.parse(TextCursor::new("null")).unwrap();
        assert_eq!(value, Json::Null);

        let (value, _) = grammar.parse(TextCursor::new("false")).unwrap();
        assert_eq!(value, Json::Bool(false));

        let (value, _) = grammar.parse(TextCursor::new("42")).unwrap();
        assert_eq!(value, Json::Number(42.into()));

        let (value, _) = grammar.parse(TextCursor::new("\"x\"")).unwrap();
        assert_eq!(value, Json::String("x".into()));
    }

    #[test]
    fn test_nested_values() {
        let grammar = Grammar::new();
        let data = r#"[1, {"key": [true, null]}, []]"#;

        let (value, cursor) = grammar.parse(TextCursor::new(data)).unwrap();
        assert!(cursor.eos());
        assert_eq!(
            value,
            Json::Array(vec![
                Json::Number(1.into()),
                Json::Object(BTreeMap::from([(
                    "key".to_string(),
                    Json::Array(vec![Json::Bool(true), Json::Null]),
                )])),
                Json::Array(vec![]),
            ])
        );
    }

    #[test]
    fn test_stops_after_first_value() {
        let (value, cursor) = json_value().parse(TextCursor::new("1 2")).unwrap();
        assert_eq!(value, Json::Number(1.into()));
        assert_eq!(cursor.rest(), " 2");
    }

    #[test]
    fn test_rejects_unknown_token() {
        assert!(Grammar::new().parse(TextCursor::new("nope")).is_err());
        assert!(Grammar::new().parse(TextCursor::new(" 1")).is_err());
    }

    #[test]
    fn test_shared_between_threads() {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                std::thread::spawn(move || {
                    let data = format!("[{n}, {n}]");
                    let (value, _) = json_value().parse(TextCursor::new(&data)).unwrap();
                    value
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let n = n as u64;
            assert_eq!(
                handle.join().unwrap(),
                Json::Array(vec![Json::Number(n.into()), Json::Number(n.into())])
            );
        }
    }
}
