//! Assertion macros.
//!
//! `expect!(ctx, a == b)` expands to
//! `expect(ctx, "a == b", || capture(&(a)).eq(&(b)))`; operands are borrowed.
//! The expression is split at its first top-level relational operator
//! (`==`, `!=`, `<=`, `>=`, `<`, `>`); without one it is captured whole and
//! must be [`Truthy`](crate::Truthy). Wrap compound conditions or operands
//! containing `<`/`>` (turbofish, generics) in parentheses.
//!
//! ```
//! use assay::{expect, expect_not, ExecutionContext, Verdict};
//!
//! fn arithmetic(ctx: &mut ExecutionContext<'_>) -> Verdict {
//!     expect!(ctx, 1 + 1 == 2)?;
//!     expect_not!(ctx, 2 < 1)?;
//!     expect!(ctx, (1 < 2 && 2 < 3))
//! }
//! ```

/// Splits an expression into a capture and a comparison.
#[doc(hidden)]
#[macro_export]
macro_rules! decompose {
    (@split [$($lhs:tt)+] == $($rhs:tt)+) => { $crate::capture(&($($lhs)+)).eq(&($($rhs)+)) };
    (@split [$($lhs:tt)+] != $($rhs:tt)+) => { $crate::capture(&($($lhs)+)).ne(&($($rhs)+)) };
    (@split [$($lhs:tt)+] <= $($rhs:tt)+) => { $crate::capture(&($($lhs)+)).le(&($($rhs)+)) };
    (@split [$($lhs:tt)+] >= $($rhs:tt)+) => { $crate::capture(&($($lhs)+)).ge(&($($rhs)+)) };
    (@split [$($lhs:tt)+] < $($rhs:tt)+) => { $crate::capture(&($($lhs)+)).lt(&($($rhs)+)) };
    (@split [$($lhs:tt)+] > $($rhs:tt)+) => { $crate::capture(&($($lhs)+)).gt(&($($rhs)+)) };
    (@split [$($lhs:tt)*] $head:tt $($rest:tt)*) => {
        $crate::decompose!(@split [$($lhs)* $head] $($rest)*)
    };
    (@split [$($lhs:tt)+]) => { $crate::Outcome::from($crate::capture(&($($lhs)+))) };
    ($($expr:tt)+) => { $crate::decompose!(@split [] $($expr)+) };
}

/// Evaluates an expression to `Result<(), Thrown>`: `Err` values whose
/// error type implements `std::error::Error` escape, other values are dropped.
#[doc(hidden)]
#[macro_export]
macro_rules! escaped {
    ($($expr:tt)+) => {{
        let value = { $($expr)+ };
        #[allow(unused_imports)]
        use $crate::assertions::{ErrorValue as _, PlainValue as _};
        $crate::assertions::Evaluated(value).escaped()
    }};
}

/// Asserts that an expression holds.
#[macro_export]
macro_rules! expect {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::assertions::expect($ctx, ::core::stringify!($($expr)+), || $crate::decompose!($($expr)+))
    };
}

/// Asserts that an expression does not hold.
#[macro_export]
macro_rules! expect_not {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::assertions::expect_not($ctx, ::core::stringify!($($expr)+), || $crate::decompose!($($expr)+))
    };
}

/// Asserts that evaluating the expression neither panics nor yields `Err`.
#[macro_export]
macro_rules! expect_no_throw {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::assertions::expect_no_throw($ctx, ::core::stringify!($($expr)+), || $crate::escaped!($($expr)+))
    };
}

/// Asserts that evaluating the expression panics or yields `Err`.
#[macro_export]
macro_rules! expect_throws {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::assertions::expect_throws($ctx, ::core::stringify!($($expr)+), || $crate::escaped!($($expr)+))
    };
}

/// Asserts that evaluating the expression throws exactly `$kind`.
#[macro_export]
macro_rules! expect_throws_as {
    ($ctx:expr, $kind:ty, $($expr:tt)+) => {
        $crate::assertions::expect_throws_as::<$kind, _>(
            $ctx,
            ::core::stringify!($($expr)+),
            ::core::stringify!($kind),
            || $crate::escaped!($($expr)+),
        )
    };
}
