use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser that always succeeds without consuming input and returns a copy of its value
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<T> Parser for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T>(value: T) -> Succeed<T>
where
    T: Clone,
{
    Succeed::new(value)
}
