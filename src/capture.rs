//! Expression capture: `capture(lhs).eq(rhs)` and friends.
//!
//! Capturing is a two-stage process. [`capture`] borrows the left operand and
//! returns a [`Capture`]; one of its relational methods then borrows the right
//! operand, performs the comparison and returns an [`Outcome`]. A capture
//! that is never compared converts into an outcome through [`Truthy`].

use crate::render::{render_binary, Render};

/// Result of evaluating one assertion expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub decomposition: String,
}

impl Outcome {
    pub fn new(passed: bool, decomposition: impl Into<String>) -> Self {
        Self {
            passed,
            decomposition: decomposition.into(),
        }
    }
}

/// Borrowed left operand of an expression awaiting its operator.
pub struct Capture<'a, L: ?Sized> {
    lhs: &'a L,
}

/// Starts decomposing an expression at its left operand.
pub fn capture<L: ?Sized>(lhs: &L) -> Capture<'_, L> {
    Capture { lhs }
}

#[allow(clippy::should_implement_trait)]
impl<L: Render + ?Sized> Capture<'_, L> {
    pub fn eq<R: Render + ?Sized>(self, rhs: &R) -> Outcome
    where
        L: PartialEq<R>,
    {
        self.compare(*self.lhs == *rhs, "==", rhs)
    }

    pub fn ne<R: Render + ?Sized>(self, rhs: &R) -> Outcome
    where
        L: PartialEq<R>,
    {
        self.compare(*self.lhs != *rhs, "!=", rhs)
    }

    pub fn lt<R: Render + ?Sized>(self, rhs: &R) -> Outcome
    where
        L: PartialOrd<R>,
    {
        self.compare(*self.lhs < *rhs, "<", rhs)
    }

    pub fn le<R: Render + ?Sized>(self, rhs: &R) -> Outcome
    where
        L: PartialOrd<R>,
    {
        self.compare(*self.lhs <= *rhs, "<=", rhs)
    }

    pub fn gt<R: Render + ?Sized>(self, rhs: &R) -> Outcome
    where
        L: PartialOrd<R>,
    {
        self.compare(*self.lhs > *rhs, ">", rhs)
    }

    pub fn ge<R: Render + ?Sized>(self, rhs: &R) -> Outcome
    where
        L: PartialOrd<R>,
    {
        self.compare(*self.lhs >= *rhs, ">=", rhs)
    }

    fn compare<R: Render + ?Sized>(&self, passed: bool, op: &str, rhs: &R) -> Outcome {
        Outcome::new(passed, render_binary(self.lhs, op, rhs))
    }
}

/// Values that can stand alone in an assertion without an operator.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<L: Truthy + Render + ?Sized> From<Capture<'_, L>> for Outcome {
    fn from(capture: Capture<'_, L>) -> Self {
        Outcome::new(capture.lhs.truthy(), capture.lhs.render())
    }
}
