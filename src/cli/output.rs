//! Output sinks for runs.
//!
//! A run writes to any `termcolor::WriteColor`. Hosts running in a terminal
//! use [`stdout_sink`]; tests and programmatic callers collect text in an
//! [`OutputBuffer`].

use std::io;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::runner::RunConfig;

// ============================================================================
// OUTPUT SINKS: OutputBuffer and stdout
// ============================================================================

/// OutputBuffer: collects output into a String, dropping colour requests.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }
}

impl io::Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteColor for OutputBuffer {
    fn supports_color(&self) -> bool {
        false
    }

    fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Standard output, coloured only when the config asks for it.
pub fn stdout_sink(config: &RunConfig) -> StandardStream {
    let choice = if config.use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}
