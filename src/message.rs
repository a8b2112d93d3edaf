//! Assertion messages and the failure signal carried out of a test body.

use std::fmt;

use thiserror::Error;

/// Where an assertion was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let at = std::panic::Location::caller();
        Self::new(at.file(), at.line())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Classification of a reported assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Failed,
    Passed,
    PassedGotException,
    PassedGotNoException,
    FailedExpectedExceptionMissing,
    FailedUnexpectedException,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Failed => "failed",
            MessageKind::Passed => "passed",
            MessageKind::PassedGotException => "passed: got exception",
            MessageKind::PassedGotNoException => "passed: got no exception",
            MessageKind::FailedExpectedExceptionMissing => "failed: didn't get exception",
            MessageKind::FailedUnexpectedException => "failed: got unexpected exception",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            MessageKind::Failed
                | MessageKind::FailedExpectedExceptionMissing
                | MessageKind::FailedUnexpectedException
        )
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reportable assertion record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub location: Location,
    pub expression: String,
    pub note: String,
}

impl Message {
    pub fn new(
        kind: MessageKind,
        location: Location,
        expression: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            location,
            expression: expression.into(),
            note: note.into(),
        }
    }

    pub fn failed(location: Location, expr: &str, decomposition: &str) -> Self {
        Self::new(MessageKind::Failed, location, with_decomposition(expr, decomposition), "")
    }

    pub fn passed(location: Location, expr: &str, decomposition: &str) -> Self {
        Self::new(MessageKind::Passed, location, with_decomposition(expr, decomposition), "")
    }

    pub fn got_none(location: Location, expr: &str) -> Self {
        Self::new(MessageKind::PassedGotNoException, location, expr, "")
    }

    pub fn got(location: Location, expr: &str, note: impl Into<String>) -> Self {
        Self::new(MessageKind::PassedGotException, location, expr, note)
    }

    pub fn expected(location: Location, expr: &str, note: impl Into<String>) -> Self {
        Self::new(MessageKind::FailedExpectedExceptionMissing, location, expr, note)
    }

    pub fn unexpected(location: Location, expr: &str, note: impl Into<String>) -> Self {
        Self::new(MessageKind::FailedUnexpectedException, location, expr, note)
    }

    /// The note with its leading separator, or nothing.
    pub fn spaced_note(&self) -> String {
        if self.note.is_empty() {
            String::new()
        } else {
            format!(" {}", self.note)
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}: {}", self.kind, self.spaced_note(), self.expression)
    }
}

/// `! ( text )`
pub fn not_expr(text: &str) -> String {
    format!("! ( {text} )")
}

/// `of type Kind`
pub fn of_type(kind: &str) -> String {
    format!("of type {kind}")
}

/// `with message "text"`
pub fn with_message(text: &str) -> String {
    format!("with message \"{text}\"")
}

fn with_decomposition(expr: &str, decomposition: &str) -> String {
    format!("{expr} for {decomposition}")
}

/// A failed assertion, returned out of the test body that made it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    pub message: Message,
}

impl Failure {
    pub fn new(message: Message) -> Self {
        Self { message }
    }
}

impl From<Message> for Failure {
    fn from(message: Message) -> Self {
        Self::new(message)
    }
}

/// What an assertion primitive or a test body returns.
pub type Verdict = Result<(), Failure>;
