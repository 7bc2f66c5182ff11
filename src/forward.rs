use crate::cursor::TextCursor;
use crate::error::NoMatch;
use crate::parser::{BoxedParser, Outcome, Parser};
use std::sync::{Arc, OnceLock, Weak};

/// Forward declaration of a parser, for rules that refer to themselves
///
/// Hand out [`reference`](Forward::reference)s to build the rules that need
/// the declared parser, then [`define`](Forward::define) it once all of them
/// exist. Defining consumes the declaration, so it can never be rebound.
pub struct Forward<T> {
    slot: Arc<OnceLock<BoxedParser<T>>>,
}

impl<T> Forward<T> {
    pub fn declare() -> Self {
        Forward {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// A parser that runs whatever this declaration gets defined as
    pub fn reference(&self) -> ForwardRef<T> {
        ForwardRef {
            slot: Arc::downgrade(&self.slot),
        }
    }

    /// Bind the declaration and return the parser that owns the definition
    pub fn define(self, parser: BoxedParser<T>) -> Recursive<T> {
        let _ = self.slot.set(parser);
        Recursive { slot: self.slot }
    }
}

/// A defined recursive rule
///
/// Owns the definition; references handed out before `define` stay valid
/// for as long as this value is alive.
pub struct Recursive<T> {
    slot: Arc<OnceLock<BoxedParser<T>>>,
}

impl<T> Parser for Recursive<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(cursor),
            None => Err(NoMatch::at(cursor.position())),
        }
    }
}

/// Non-owning handle to a forward-declared parser
///
/// Fails to match if used before the declaration is defined, or after the
/// owning [`Recursive`] was dropped.
pub struct ForwardRef<T> {
    slot: Weak<OnceLock<BoxedParser<T>>>,
}

impl<T> Clone for ForwardRef<T> {
    fn clone(&self) -> Self {
        ForwardRef {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<T> Parser for ForwardRef<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let parser = self.slot.upgrade();
        match parser.as_deref().and_then(OnceLock::get) {
            Some(parser) => parser.parse(cursor),
            None => {
                log::warn!("forward-declared parser used while it is not defined");
                Err(NoMatch::at(cursor.position()))
            }
        }
    }
}
