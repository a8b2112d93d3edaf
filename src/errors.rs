//! Run-level errors.
//!
//! Assertion failures never show up here: they travel as [`crate::Failure`]
//! values and are consumed at the per-test boundary. `HarnessError` covers
//! what stops a run as a whole; the runner prints it and turns it into a
//! non-zero status, so it never reaches the host as an error value.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// Malformed command-line option or seed.
    #[error("{0} (try option --help)")]
    #[diagnostic(code(assay::usage), help("try option --help"))]
    Usage(String),

    /// A selection pattern that is not a valid regular expression.
    #[error("invalid selection pattern '{pattern}': {source}")]
    #[diagnostic(code(assay::pattern), help("patterns are regular expressions in this run"))]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A test body panicked outside any assertion.
    #[error("test '{test}' panicked: {message}")]
    #[diagnostic(code(assay::fatal))]
    Fatal { test: String, message: String },

    #[error("cannot write report: {0}")]
    #[diagnostic(code(assay::io))]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    pub fn usage(message: impl Into<String>) -> Self {
        HarnessError::Usage(message.into())
    }

    /// Whether the error comes from how the run was invoked.
    pub fn is_usage(&self) -> bool {
        matches!(self, HarnessError::Usage(_) | HarnessError::Pattern { .. })
    }
}
