//! Host-facing entry points: argument handling, output and logging setup.
//!
//! A host binary typically does:
//!
//! ```rust,no_run
//! use assay::{cli, Specification};
//!
//! let mut spec = Specification::new();
//! spec.add("truth", |ctx| assay::expect!(ctx, true));
//! std::process::exit(cli::main_with(&spec));
//! ```

use std::sync::Once;

use crate::runner::{RunConfig, Runner};
use crate::spec::Specification;

pub mod args;
pub mod output;

static TRACING_INIT: Once = Once::new();

/// Installs a stderr `tracing` subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=assay=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Runs `spec` with the process arguments on standard output.
pub fn main_with(spec: &Specification) -> i32 {
    main_with_config(spec, RunConfig::default())
}

pub fn main_with_config(spec: &Specification, config: RunConfig) -> i32 {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = output::stdout_sink(&config);
    Runner::new(config).run(spec, &args, &mut stdout)
}
