//! Assertion primitives.
//!
//! Each primitive evaluates one expression, records where it was called from
//! and returns a [`Verdict`]. A failing verdict carries the [`Message`] to
//! report; test bodies pass it on with `?` and the runner reports it once.
//! Passing assertions are reported straight away when the context asks for
//! it.
//!
//! The `expect*!` macros are the usual way in: they supply the expression
//! text and, for `expect!`/`expect_not!`, split `a OP b` into a capture.
//! The exception primitives take a closure reporting `Err` values as
//! [`Thrown`]; `Evaluated(value).escaped()` builds one for any value.

use crate::capture::Outcome;
use crate::context::ExecutionContext;
use crate::message::{not_expr, of_type, Failure, Location, Message, Verdict};

pub mod thrown;

pub use thrown::{attempt, evaluate, ErrorValue, Evaluated, PlainValue, Thrown};

/// Passes when the outcome holds.
#[track_caller]
pub fn expect<F>(ctx: &mut ExecutionContext<'_>, expr: &str, eval: F) -> Verdict
where
    F: FnOnce() -> Outcome,
{
    let at = Location::caller();
    let outcome = evaluate(eval).map_err(|thrown| unexpected(at, expr, &thrown))?;
    if !outcome.passed {
        return Err(Failure::new(Message::failed(at, expr, &outcome.decomposition)));
    }
    ctx.report_success(&Message::passed(at, expr, &outcome.decomposition));
    Ok(())
}

/// Passes when the outcome does not hold.
#[track_caller]
pub fn expect_not<F>(ctx: &mut ExecutionContext<'_>, expr: &str, eval: F) -> Verdict
where
    F: FnOnce() -> Outcome,
{
    let at = Location::caller();
    let negated = not_expr(expr);
    let outcome = evaluate(eval).map_err(|thrown| unexpected(at, &negated, &thrown))?;
    let decomposition = not_expr(&outcome.decomposition);
    if outcome.passed {
        return Err(Failure::new(Message::failed(at, &negated, &decomposition)));
    }
    ctx.report_success(&Message::passed(at, &negated, &decomposition));
    Ok(())
}

/// Passes when evaluation neither panics nor reports an escaped error.
#[track_caller]
pub fn expect_no_throw<F>(ctx: &mut ExecutionContext<'_>, expr: &str, eval: F) -> Verdict
where
    F: FnOnce() -> Result<(), Thrown>,
{
    let at = Location::caller();
    attempt(eval).map_err(|thrown| unexpected(at, expr, &thrown))?;
    ctx.report_success(&Message::got_none(at, expr));
    Ok(())
}

/// Passes when evaluation panics or reports an escaped error.
#[track_caller]
pub fn expect_throws<F>(ctx: &mut ExecutionContext<'_>, expr: &str, eval: F) -> Verdict
where
    F: FnOnce() -> Result<(), Thrown>,
{
    let at = Location::caller();
    if attempt(eval).is_ok() {
        return Err(Failure::new(Message::expected(at, expr, "")));
    }
    ctx.report_success(&Message::got(at, expr, ""));
    Ok(())
}

/// Passes when evaluation throws exactly a `K`; `kind` names it in messages.
///
/// Errors of any other type are discarded and count as nothing thrown.
#[track_caller]
pub fn expect_throws_as<K, F>(
    ctx: &mut ExecutionContext<'_>,
    expr: &str,
    kind: &str,
    eval: F,
) -> Verdict
where
    K: 'static,
    F: FnOnce() -> Result<(), Thrown>,
{
    let at = Location::caller();
    match attempt(eval) {
        Err(thrown) if thrown.is::<K>() => {
            ctx.report_success(&Message::got(at, expr, of_type(kind)));
            Ok(())
        }
        _ => Err(Failure::new(Message::expected(at, expr, of_type(kind)))),
    }
}

fn unexpected(at: Location, expr: &str, thrown: &Thrown) -> Failure {
    Failure::new(Message::unexpected(at, expr, thrown.note()))
}
