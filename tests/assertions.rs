// Assertion primitives: verdicts, message kinds and pass reporting.

mod common;

use std::fmt;
use std::num::ParseIntError;

use assay::prelude::*;
use assay::{assertions, Location, MessageKind, Outcome};
use common::in_context;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Overheated;

impl fmt::Display for Overheated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("too hot")
    }
}

impl std::error::Error for Overheated {}

fn overheat() -> Result<(), Overheated> {
    Err(Overheated)
}

fn explode() -> bool {
    std::panic::panic_any(7u32)
}

fn overheat_hard() -> u8 {
    std::panic::panic_any(Overheated)
}

#[test]
fn expect_passes_silently_by_default() {
    let (verdict, output) = in_context("quiet", false, |ctx| expect!(ctx, 2 + 2 == 4));
    assert!(verdict.is_ok());
    assert_eq!(output, "");
}

#[test]
fn expect_failure_carries_decomposition() {
    let (verdict, output) = in_context("sums", false, |ctx| {
        let x = 3;
        expect!(ctx, x + 1 == 5)
    });
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::Failed);
    assert_eq!(message.expression, "x + 1 == 5 for 4 == 5");
    assert_eq!(message.note, "");
    assert!(message.location.file.ends_with("assertions.rs"));
    // failures are reported by the runner, not by the primitive
    assert_eq!(output, "");
}

#[test]
fn expect_records_caller_line() {
    let (verdict, _) = in_context("where", false, |ctx| {
        let (verdict, line) = (expect!(ctx, 1 == 2), line!());
        let at = verdict.unwrap_err().message.location;
        expect!(ctx, at.line == line)
    });
    assert!(verdict.is_ok());
}

#[test]
fn passing_assertions_are_reported_when_asked() {
    let (verdict, output) = in_context("loud", true, |ctx| {
        expect!(ctx, 'a' < 'b')?;
        expect_not!(ctx, "x" == "y")
    });
    assert!(verdict.is_ok());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": passed: loud: 'a' < 'b' for 'a' < 'b'"), "{}", lines[0]);
    assert!(
        lines[1].ends_with(": passed: loud: ! ( \"x\" == \"y\" ) for ! ( \"x\" == \"y\" )"),
        "{}",
        lines[1]
    );
}

#[test]
fn expect_not_fails_on_true_outcome() {
    let (verdict, _) = in_context("negated", false, |ctx| expect_not!(ctx, 1 <= 1));
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::Failed);
    assert_eq!(message.expression, "! ( 1 <= 1 ) for ! ( 1 <= 1 )");
}

#[test]
fn bare_booleans_and_options() {
    let (verdict, _) = in_context("bare", false, |ctx| {
        let found = Some(3);
        expect!(ctx, found)?;
        expect!(ctx, (1 < 2 && 2 < 3))
    });
    assert!(verdict.is_ok());

    let (verdict, _) = in_context("bare", false, |ctx| expect!(ctx, false));
    assert_eq!(verdict.unwrap_err().message.expression, "false for false");
}

#[test]
fn panics_inside_expect_become_unexpected_exceptions() {
    let (verdict, _) = in_context("panics", false, |ctx| {
        let values: Vec<i32> = Vec::new();
        expect!(ctx, values[3] == 1)
    });
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::FailedUnexpectedException);
    assert!(message.expression.ends_with("== 1"), "{}", message.expression);
    assert!(message.note.starts_with("with message \"index out of bounds"), "{}", message.note);
}

#[test]
fn panics_without_text_are_of_unknown_type() {
    let (verdict, _) = in_context("opaque panic", false, |ctx| {
        expect_not!(ctx, explode())
    });
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::FailedUnexpectedException);
    assert_eq!(message.note, "of unknown type");
    assert_eq!(message.expression, "! ( explode() )");
}

#[test]
fn no_throw_reports_errors_with_their_message() {
    let (verdict, output) = in_context("calm", true, |ctx| expect_no_throw!(ctx, "5".parse::<i32>()));
    assert!(verdict.is_ok());
    assert!(output.contains(": passed: got no exception: calm: \"5\""), "{output}");

    let (verdict, _) = in_context("hot", false, |ctx| expect_no_throw!(ctx, overheat()));
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::FailedUnexpectedException);
    assert_eq!(message.note, "with message \"too hot\"");
    assert_eq!(message.expression, "overheat()");
}

#[test]
fn throws_accepts_errors_and_panics() {
    let (verdict, output) = in_context("throws", true, |ctx| {
        let values = vec![1, 2, 3];
        expect_throws!(ctx, overheat())?;
        expect_throws!(ctx, values[3])
    });
    assert!(verdict.is_ok());
    assert_eq!(output.matches("passed: got exception: throws:").count(), 2);

    let (verdict, _) = in_context("throws", false, |ctx| expect_throws!(ctx, "1".parse::<i32>()));
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::FailedExpectedExceptionMissing);
    assert_eq!(message.note, "");
}

#[test]
fn throws_as_matches_exact_kind_only() {
    let (verdict, output) = in_context("kinds", true, |ctx| {
        expect_throws_as!(ctx, ParseIntError, "z".parse::<i32>())?;
        expect_throws_as!(ctx, Overheated, overheat())
    });
    assert!(verdict.is_ok());
    assert!(output.contains("passed: got exception of type ParseIntError: kinds:"), "{output}");
    assert!(output.contains("passed: got exception of type Overheated: kinds: overheat()"));

    // a different error did escape, but it is not the one asked for
    let (verdict, output) =
        in_context("kinds", true, |ctx| expect_throws_as!(ctx, ParseIntError, overheat()));
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::FailedExpectedExceptionMissing);
    assert_eq!(message.note, "of type ParseIntError");
    assert_eq!(output, "");
}

#[test]
fn throws_as_matches_panic_payload_types() {
    let (verdict, _) = in_context("payload", false, |ctx| {
        expect_throws_as!(ctx, Overheated, overheat_hard())
    });
    assert!(verdict.is_ok());
}

#[test]
fn functions_take_explicit_expression_text() {
    let (verdict, _) = in_context("direct", false, |ctx| {
        assertions::expect(ctx, "custom", || Outcome::new(false, "left ~ right"))
    });
    let message = verdict.unwrap_err().message;
    assert_eq!(message.expression, "custom for left ~ right");
    assert_eq!(message.location.file, Location::caller().file);
}

#[test]
fn approximate_comparisons_render_magnitudes() {
    let (verdict, _) = in_context("approx", false, |ctx| expect!(ctx, 10.0 == approx(11.0)));
    assert_eq!(
        verdict.unwrap_err().message.expression,
        "10.0 == approx(11.0) for 10.0 == 11.0"
    );
}

#[test]
fn value_expressions_are_evaluated_for_panics() {
    let (verdict, output) = in_context("values", true, |ctx| {
        let values = vec![1, 2, 3];
        expect_no_throw!(ctx, values.len())?;
        expect_no_throw!(ctx, values[0] + values[2])?;
        expect_throws!(ctx, values[7])
    });
    assert!(verdict.is_ok());
    assert!(output.contains("passed: got no exception: values: values.len()"), "{output}");
    assert_eq!(output.matches("passed: got exception: values: values").count(), 1);

    let (verdict, _) = in_context("values", false, |ctx| {
        let values: Vec<u8> = Vec::new();
        expect_no_throw!(ctx, values[0])
    });
    let message = verdict.unwrap_err().message;
    assert_eq!(message.kind, MessageKind::FailedUnexpectedException);
    assert!(message.note.starts_with("with message \"index out of bounds"), "{}", message.note);

    let (verdict, _) = in_context("values", false, |ctx| expect_throws!(ctx, "word".len()));
    assert_eq!(
        verdict.unwrap_err().message.kind,
        MessageKind::FailedExpectedExceptionMissing
    );
}

#[test]
fn ok_results_and_plain_values_do_not_throw() {
    let (verdict, _) = in_context("results", false, |ctx| {
        expect_no_throw!(ctx, "42".parse::<u16>())?;
        expect_no_throw!(ctx, Some(3))?;
        expect_throws_as!(ctx, Overheated, overheat())
    });
    assert!(verdict.is_ok());
}

#[test]
fn operands_remain_usable_after_assertions() {
    let (verdict, _) = in_context("borrowed", false, |ctx| {
        let text = String::from("abc");
        let words = vec![String::from("a"), String::from("b")];
        expect!(ctx, text == "abc")?;
        expect!(ctx, text.len() == 3)?;
        expect!(ctx, words == vec!["a", "b"])?;
        expect_not!(ctx, words.is_empty())?;
        expect!(ctx, words[1] > text)
    });
    assert!(verdict.is_ok());
}
