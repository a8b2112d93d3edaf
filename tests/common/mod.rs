// Shared helpers for the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use assay::cli::output::OutputBuffer;
use assay::{ExecutionContext, Runner, Specification, Verdict};

/// Output and exit status of one run.
pub struct RunResult {
    pub status: i32,
    pub output: String,
}

impl RunResult {
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

pub fn run_with(spec: &Specification, args: &[&str]) -> RunResult {
    run_with_runner(&Runner::default(), spec, args)
}

pub fn run_with_runner(runner: &Runner, spec: &Specification, args: &[&str]) -> RunResult {
    let mut out = OutputBuffer::new();
    let status = runner.run(spec, args, &mut out);
    RunResult {
        status,
        output: out.buffer,
    }
}

/// Evaluates `body` against a fresh context named `test`; returns its verdict and output.
pub fn in_context<F>(test: &str, report_passing: bool, body: F) -> (Verdict, String)
where
    F: Fn(&mut ExecutionContext<'_>) -> Verdict + 'static,
{
    let mut spec = Specification::new();
    spec.add(test, body);
    let mut out = OutputBuffer::new();
    let verdict = {
        let mut ctx = ExecutionContext::new(&mut out, report_passing);
        spec.tests()[0].invoke(&mut ctx)
    };
    (verdict, out.buffer)
}

/// Counts invocations of registered test bodies.
#[derive(Clone, Default)]
pub struct Calls(Rc<Cell<usize>>);

impl Calls {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A specification of `names` that all pass, recording invocation order.
pub fn recording_spec(names: &[&str], log: Rc<std::cell::RefCell<Vec<String>>>) -> Specification {
    let mut spec = Specification::new();
    for name in names {
        let log = Rc::clone(&log);
        let owned = name.to_string();
        spec.add(*name, move |_| {
            log.borrow_mut().push(owned.clone());
            Ok(())
        });
    }
    spec
}
