//! Compound rules of the JSON grammar: arrays and objects.
//!
//! Both take the value parser as an argument, which is how the recursive
//! value rule gets threaded through them.

use crate::combine::{CombineExt, combine};
use crate::json::lexical::{string_literal, whitespace};
use crate::many::many;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::succeed::succeed;
use crate::token::literal_char;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Zero or more `parser` matches separated by `separator`
///
/// Whitespace is allowed on both sides of each separator, but not before the
/// first element or after the last. A trailing separator is left unconsumed.
pub fn separated_by<S, P>(separator: S, parser: P) -> impl Parser<Output = Vec<P::Output>>
where
    S: Parser,
    P: Parser,
    P::Output: Clone,
{
    let parser = Arc::new(parser);
    let rest = many(
        whitespace()
            .keep_right(separator)
            .keep_right(whitespace())
            .keep_right(Arc::clone(&parser)),
    );

    combine(
        |first, rest: Vec<P::Output>| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            items
        },
        parser,
        rest,
    )
    .or(succeed(Vec::new()))
}

/// `[` value, ... `]`
pub fn array_value<V>(value: V) -> impl Parser<Output = Vec<V::Output>>
where
    V: Parser,
    V::Output: Clone,
{
    literal_char('[')
        .keep_right(whitespace())
        .keep_right(separated_by(literal_char(','), value))
        .keep_left(whitespace().keep_right(literal_char(']')))
}

/// `{` "key": value, ... `}`
///
/// Members are folded into a map in document order, so a repeated key keeps
/// the value of its last occurrence.
pub fn object_value<V>(value: V) -> impl Parser<Output = BTreeMap<String, V::Output>>
where
    V: Parser,
    V::Output: Clone,
{
    let key = string_literal().keep_left(whitespace().keep_right(literal_char(':')));
    let member = key.combine(whitespace().keep_right(value), |key, value| (key, value));

    literal_char('{')
        .keep_right(whitespace())
        .keep_right(separated_by(literal_char(','), member).map(|members| {
            let mut object = BTreeMap::new();
            for (key, value) in members {
                object.insert(key, value);
            }
            object
        }))
        .keep_left(whitespace().keep_right(literal_char('}')))
}
