//! # ParsiJSON - Parser Combinators and a JSON Grammar
//!
//! A small parser combinator library and the recursive JSON grammar built on
//! top of it.
//!
//! - **No panics, no exceptions for control flow**: every parser returns an
//!   [`Outcome`], either the value plus the remaining input or [`NoMatch`]
//! - **Immutable cursors**: a [`TextCursor`] is a `Copy` position into the
//!   input; failed parsers never move it, so ordered choice can always retry
//!   from where it started
//! - **Composability**: grammars are plain values assembled from small
//!   parsers, built once and shared freely between threads
//!
//! ```
//! use parsijson::{Json, parse};
//!
//! let value = parse(r#"{"key": [1, 2, 3]}"#).unwrap();
//! assert_eq!(value.get("key").and_then(Json::as_array).map(<[Json]>::len), Some(3));
//! assert!(parse("[1,2,").is_err());
//! ```

pub mod combine;
pub mod complete;
pub mod cursor;
pub mod error;
pub mod forward;
pub mod joined;
pub mod json;
pub mod many;
pub mod map;
pub mod one_of;
pub mod or;
pub mod parser;
pub mod sequence;
pub mod some;
pub mod succeed;
pub mod token;

pub use combine::{CombineExt, combine, keep_left, keep_right};
pub use complete::CompleteExt;
pub use cursor::TextCursor;
pub use error::{NoMatch, ParseError};
pub use forward::{Forward, ForwardRef, Recursive};
pub use joined::joined_text;
pub use json::{Grammar, Json, Number, json_value, parse};
pub use many::many;
pub use map::{MapExt, map};
pub use one_of::one_of;
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, Outcome, Parser};
pub use sequence::sequence_all;
pub use some::some;
pub use succeed::succeed;
pub use token::{literal_char, token};
