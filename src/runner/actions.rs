//! The per-test behaviours a run dispatches to.
//!
//! Exactly one action is chosen per run: count, list, time or confirm. The
//! runner hands each selected test to [`Action::perform`], checks
//! [`Action::should_abort`] after every test and calls [`Action::finish`]
//! once iteration ends.

use std::io;
use std::time::{Duration, Instant};

use termcolor::WriteColor;

use crate::cli::args::Options;
use crate::context::ExecutionContext;
use crate::report::pluralise;
use crate::spec::Test;

pub trait Action {
    fn perform(&mut self, test: &Test) -> io::Result<()>;

    fn should_abort(&self) -> bool {
        false
    }

    /// Teardown output, written once after the last performed test.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Failures recorded so far.
    fn failures(&self) -> usize {
        0
    }
}

// ============================================================================
// COUNT / LIST
// ============================================================================

pub struct Count<'o> {
    out: &'o mut dyn WriteColor,
    selected: usize,
}

impl<'o> Count<'o> {
    pub fn new(out: &'o mut dyn WriteColor) -> Self {
        Self { out, selected: 0 }
    }
}

impl Action for Count<'_> {
    fn perform(&mut self, _test: &Test) -> io::Result<()> {
        self.selected += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{} selected {}",
            self.selected,
            pluralise(self.selected, "test")
        )
    }
}

pub struct List<'o> {
    out: &'o mut dyn WriteColor,
}

impl<'o> List<'o> {
    pub fn new(out: &'o mut dyn WriteColor) -> Self {
        Self { out }
    }
}

impl Action for List<'_> {
    fn perform(&mut self, test: &Test) -> io::Result<()> {
        writeln!(self.out, "{}", test.name())
    }
}

// ============================================================================
// TIME
// ============================================================================

/// Runs each test and prints how long it took.
///
/// Assertion failures are counted but not reported.
pub struct Time<'o> {
    ctx: ExecutionContext<'o>,
    abort_on_failure: bool,
    precision: usize,
    failures: usize,
    started: Instant,
}

impl<'o> Time<'o> {
    pub fn new(out: &'o mut dyn WriteColor, options: &Options, precision: usize) -> Self {
        Self {
            ctx: ExecutionContext::new(out, options.report_passing),
            abort_on_failure: options.abort,
            precision,
            failures: 0,
            started: Instant::now(),
        }
    }
}

impl Action for Time<'_> {
    fn perform(&mut self, test: &Test) -> io::Result<()> {
        let started = Instant::now();
        if test.invoke(&mut self.ctx).is_err() {
            self.failures += 1;
        }
        let elapsed = started.elapsed();
        writeln!(
            self.ctx.out(),
            "{:>5.prec$} ms: {}",
            millis(elapsed),
            test.name(),
            prec = self.precision
        )
    }

    fn should_abort(&self) -> bool {
        self.abort_on_failure && self.failures > 0
    }

    fn finish(&mut self) -> io::Result<()> {
        let total = self.started.elapsed().as_secs_f64();
        writeln!(self.ctx.out(), "Elapsed time: {total:.1} s")
    }

    fn failures(&self) -> usize {
        self.failures
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

// ============================================================================
// CONFIRM
// ============================================================================

/// Runs each test and reports its failure, if any.
pub struct Confirm<'o> {
    ctx: ExecutionContext<'o>,
    abort_on_failure: bool,
    selected: usize,
    failures: usize,
}

impl<'o> Confirm<'o> {
    pub fn new(out: &'o mut dyn WriteColor, options: &Options) -> Self {
        Self {
            ctx: ExecutionContext::new(out, options.report_passing),
            abort_on_failure: options.abort,
            selected: 0,
            failures: 0,
        }
    }
}

impl Action for Confirm<'_> {
    fn perform(&mut self, test: &Test) -> io::Result<()> {
        self.selected += 1;
        let Err(failure) = test.invoke(&mut self.ctx) else {
            return Ok(());
        };
        self.failures += 1;
        self.ctx.report_failure(&failure.message)
    }

    fn should_abort(&self) -> bool {
        self.abort_on_failure && self.failures > 0
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.failures == 0 {
            return Ok(());
        }
        writeln!(
            self.ctx.out(),
            "{} out of {} selected {} failed.",
            self.failures,
            self.selected,
            pluralise(self.selected, "test")
        )
    }

    fn failures(&self) -> usize {
        self.failures
    }
}
