//! Execution harness.
//!
//! A run parses its options, orders a local copy of the specification,
//! picks one action and feeds it every selected test in order:
//!
//! 1. **Options**: leading `-` tokens, then selection patterns
//! 2. **Order**: declared, lexical or seeded random
//! 3. **Action**: help, else count > list > time > confirm
//! 4. **Iteration**: select, perform, stop early when the action aborts
//! 5. **Status**: 0 for help/list/count, the failure count otherwise
//!
//! Errors that stop a run (bad options, bad patterns, a panicking test body,
//! a broken sink) are printed as `Error: ...` and yield failures-so-far + 1.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use termcolor::WriteColor;

use crate::assertions::thrown::{catch_quietly, panic_message};
use crate::cli::args::{Options, Order};
use crate::errors::HarnessError;
use crate::select::{MatchMode, Selection};
use crate::spec::{Specification, Test};

pub mod actions;

use actions::{Action, Confirm, Count, List, Time};

/// Host-side settings that are not command-line options.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub match_mode: MatchMode,
    /// Decimal places of per-test milliseconds under `--time`.
    pub time_precision: usize,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Text,
            time_precision: 0,
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl RunConfig {
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_time_precision(mut self, time_precision: usize) -> Self {
        self.time_precision = time_precision;
        self
    }
}

/// A run-stopping error together with the failures counted before it.
struct Interrupted {
    error: HarnessError,
    failures: usize,
}

impl From<HarnessError> for Interrupted {
    fn from(error: HarnessError) -> Self {
        Self { error, failures: 0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs `spec` as directed by `args`, writing to `out`; returns the exit status.
    pub fn run<S: AsRef<str>>(
        &self,
        spec: &Specification,
        args: &[S],
        out: &mut dyn WriteColor,
    ) -> i32 {
        match self.try_run(spec, args, out) {
            Ok(status) => status_code(status),
            Err(Interrupted { error, failures }) => {
                tracing::debug!(%error, failures, "run interrupted");
                // The sink may be what failed; nothing more can be reported then.
                let _ = writeln!(out, "Error: {error}");
                status_code(failures + 1)
            }
        }
    }

    fn try_run<S: AsRef<str>>(
        &self,
        spec: &Specification,
        args: &[S],
        out: &mut dyn WriteColor,
    ) -> Result<usize, Interrupted> {
        let options = Options::from_args(args)?;
        tracing::debug!(?options, "parsed run options");
        if options.help {
            write!(out, "{}", Options::usage()).map_err(HarnessError::from)?;
            return Ok(0);
        }

        let selection = Selection::new(options.patterns.as_slice(), self.config.match_mode)?;
        let tests = order(spec, &options);
        if options.count {
            return execute(&tests, &selection, Count::new(out)).map(|_| 0);
        }
        if options.list {
            return execute(&tests, &selection, List::new(out)).map(|_| 0);
        }
        if options.time {
            let time = Time::new(out, &options, self.config.time_precision);
            return execute(&tests, &selection, time);
        }
        execute(&tests, &selection, Confirm::new(out, &options))
    }
}

/// Runs `spec` with the default configuration.
pub fn run<S: AsRef<str>>(spec: &Specification, args: &[S], out: &mut dyn WriteColor) -> i32 {
    Runner::default().run(spec, args, out)
}

/// The tests of `spec` in run order; `spec` itself is left untouched.
pub fn order<'s>(spec: &'s Specification, options: &Options) -> Vec<&'s Test> {
    let mut tests: Vec<&Test> = spec.iter().collect();
    match options.order {
        Order::Declared => {}
        Order::Lexical => tests.sort_by(|a, b| a.name().cmp(b.name())),
        Order::Random => {
            let seed = options.seed.resolve();
            tracing::info!(seed, "shuffling tests");
            shuffle(&mut tests, seed);
        }
    }
    tests
}

/// Seeded, uniform permutation; equal seeds give equal permutations.
pub fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Feeds the selected tests to `action` until it asks to abort.
fn execute<A: Action>(
    tests: &[&Test],
    selection: &Selection,
    mut action: A,
) -> Result<usize, Interrupted> {
    let interrupted = |error: HarnessError, action: &A| Interrupted {
        error,
        failures: action.failures(),
    };

    for test in tests.iter().filter(|test| selection.select(test.name())) {
        let _span = tracing::debug_span!("test", name = test.name()).entered();
        match catch_quietly(|| action.perform(test)) {
            Ok(written) => written.map_err(|e| interrupted(e.into(), &action))?,
            Err(payload) => {
                let error = HarnessError::Fatal {
                    test: test.name().to_string(),
                    message: panic_message(payload.as_ref())
                        .unwrap_or_else(|| "of unknown type".to_string()),
                };
                return Err(interrupted(error, &action));
            }
        }
        if action.should_abort() {
            tracing::info!(failures = action.failures(), "aborting run after failure");
            break;
        }
    }

    action.finish().map_err(|e| interrupted(e.into(), &action))?;
    Ok(action.failures())
}

fn status_code(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
