//! Assay: a small unit-test harness.
//!
//! Hosts register named test bodies in a [`Specification`] and hand it to
//! [`run`] together with command-line style arguments. Test bodies use the
//! `expect*!` macros (or the functions in [`assertions`]) and return a
//! [`Verdict`]; failures are reported one line each.
//!
//! ```
//! use assay::{expect, run, cli::output::OutputBuffer, Specification};
//!
//! let mut spec = Specification::new();
//! spec.add("ok", |ctx| expect!(ctx, 1 == 1));
//! spec.add("bad", |ctx| expect!(ctx, 1 == 2));
//!
//! let mut out = OutputBuffer::new();
//! assert_eq!(run(&spec, &[] as &[&str], &mut out), 1);
//! assert!(out.as_str().contains("failed: bad: 1 == 2 for 1 == 2"));
//! ```

pub use crate::approx::{approx, Approx};
pub use crate::capture::{capture, Capture, Outcome, Truthy};
pub use crate::context::ExecutionContext;
pub use crate::errors::HarnessError;
pub use crate::message::{Failure, Location, Message, MessageKind, Verdict};
pub use crate::render::{Opaque, Render};
pub use crate::runner::{run, RunConfig, Runner};
pub use crate::select::{select, MatchMode, Selection};
pub use crate::spec::{Specification, Test};

pub mod approx;
pub mod assertions;
pub mod capture;
pub mod cli;
pub mod context;
pub mod errors;
pub mod message;
pub mod render;
pub mod report;
pub mod runner;
pub mod select;
pub mod spec;

mod macros;

pub mod prelude {
    pub use crate::{
        approx, capture, expect, expect_no_throw, expect_not, expect_throws, expect_throws_as,
        ExecutionContext, Specification, Verdict,
    };
}
