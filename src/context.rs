//! Per-run state handed to every test body.

use termcolor::WriteColor;

use crate::message::Message;
use crate::report;

/// Output sink, pass-reporting flag and the name of the running test.
///
/// One context is created per run and reused for every selected test. Test
/// bodies borrow it for the duration of their call only.
pub struct ExecutionContext<'o> {
    out: &'o mut dyn WriteColor,
    report_passing: bool,
    testing: String,
}

impl<'o> ExecutionContext<'o> {
    pub fn new(out: &'o mut dyn WriteColor, report_passing: bool) -> Self {
        Self {
            out,
            report_passing,
            testing: String::new(),
        }
    }

    /// Name of the test currently executing.
    pub fn testing(&self) -> &str {
        &self.testing
    }

    pub fn reports_passing(&self) -> bool {
        self.report_passing
    }

    pub fn out(&mut self) -> &mut dyn WriteColor {
        &mut *self.out
    }

    pub(crate) fn enter(&mut self, name: &str) {
        self.testing.clear();
        self.testing.push_str(name);
    }

    /// Reports a successful assertion when passing assertions are wanted.
    pub(crate) fn report_success(&mut self, message: &Message) {
        if !self.report_passing {
            return;
        }
        // Success lines are informational; a broken sink must not fail the test.
        let _ = report::report(&mut *self.out, message, &self.testing);
    }

    /// Reports a failed assertion attributed to the running test.
    pub(crate) fn report_failure(&mut self, message: &Message) -> std::io::Result<()> {
        report::report(&mut *self.out, message, &self.testing)
    }
}
