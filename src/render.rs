//! Display text for captured operands.
//!
//! Every value that takes part in an assertion is turned into text through
//! [`Render`]. Strings and characters come out quoted, booleans as `true` or
//! `false` and numbers in their usual form, all of which is what `Debug`
//! already produces for the standard types. Values that have no textual
//! representation can be wrapped in [`Opaque`].

use std::cmp::Ordering;
use std::fmt;

/// Placeholder used for values that cannot be displayed.
pub const OPAQUE: &str = "{?}";

/// Converts a captured operand into diagnostic text.
pub trait Render {
    fn render(&self) -> String;
}

impl<T: fmt::Debug + ?Sized> Render for T {
    fn render(&self) -> String {
        format!("{self:?}")
    }
}

/// Wrapper for operands without a `Debug` implementation.
///
/// Comparisons are forwarded to the wrapped values; the rendered text is
/// always [`OPAQUE`].
pub struct Opaque<T>(pub T);

impl<T> Render for Opaque<T> {
    fn render(&self) -> String {
        OPAQUE.to_string()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Opaque<U>> for Opaque<T> {
    fn eq(&self, other: &Opaque<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: PartialOrd<U>, U> PartialOrd<Opaque<U>> for Opaque<T> {
    fn partial_cmp(&self, other: &Opaque<U>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Renders `lhs OP rhs`.
pub fn render_binary<L: Render + ?Sized, R: Render + ?Sized>(lhs: &L, op: &str, rhs: &R) -> String {
    format!("{} {} {}", lhs.render(), op, rhs.render())
}
