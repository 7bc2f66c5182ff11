//! JSON grammar built from the combinators of this crate.
//!
//! The subset understood here is deliberately small: `null`, booleans,
//! unsigned integers of any size, strings whose only escape is `\"`, arrays and objects.
//! The whole document must be a single value with no surrounding whitespace.

pub mod grammar;
pub mod lexical;
pub mod structure;
pub mod value;

pub use grammar::{Grammar, json_value};
pub use value::{Json, Number};

use crate::complete::CompleteExt;
use crate::error::ParseError;
use std::str::FromStr;

/// Parse a complete JSON document
///
/// Succeeds only if the value rule matches and consumes the entire input.
pub fn parse(text: &str) -> Result<Json, ParseError> {
    match json_value().parse_str(text) {
        Ok(value) => {
            log::debug!("accepted JSON document of {} bytes", text.len());
            Ok(value)
        }
        Err(err) => {
            log::debug!("rejected JSON document: {err}");
            Err(err)
        }
    }
}

impl FromStr for Json {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}
