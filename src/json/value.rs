use std::collections::BTreeMap;
use std::fmt;

/// An unsigned integer of any size, kept as its decimal digits
///
/// Leading zeros are dropped, so `007` and `7` are the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    digits: String,
}

impl Number {
    /// `None` unless `digits` is a non-empty run of ASCII digits
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Number::from_digit_run(digits))
    }

    /// Caller guarantees `digits` is a non-empty run of ASCII digits
    pub(crate) fn from_digit_run(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Number {
            digits: digits.to_string(),
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The value as a `u64`, or `None` when it does not fit
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number {
            digits: value.to_string(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// A parsed JSON document
///
/// Numbers are unsigned integers of any size. Object keys are unique; when a
/// document repeats a key, the last occurrence is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Json {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Json>),
    Object(BTreeMap<String, Json>),
}

impl Json {
    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The number as a `u64`; `None` for other variants and for numbers too large to fit
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Json::Number(value) => value.as_u64(),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Json::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Json::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Json>> {
        match self {
            Json::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Look up a member of an object; `None` for missing keys and non-objects
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.as_object().and_then(|members| members.get(key))
    }
}
