use crate::cursor::TextCursor;
use crate::error::NoMatch;
use std::sync::Arc;

/// Result of running a parser: the value plus the remaining input, or `NoMatch`
pub type Outcome<'code, T> = Result<(T, TextCursor<'code>), NoMatch>;

/// Core parser trait for parser combinators
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the remaining cursor on success,
    /// or Err if the parse fails. Failures never consume input.
    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output>;
}

/// Type-erased parser, for collections of alternatives with different concrete types
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P> Parser for Arc<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}
