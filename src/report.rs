//! One-line diagnostics for assertion messages.
//!
//! Format: `<file>:<line>: <kind>[ <note>]: <test>: <expression>`.

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::message::{Message, MessageKind};

/// Writes `message`, attributed to `test`, as a single line.
pub fn report(out: &mut dyn WriteColor, message: &Message, test: &str) -> io::Result<()> {
    write!(out, "{}: ", message.location)?;
    out.set_color(&kind_color(message.kind))?;
    write!(out, "{}", message.kind)?;
    out.reset()?;
    writeln!(out, "{}: {}: {}", message.spaced_note(), test, message.expression)
}

/// `word` or `words`.
pub fn pluralise(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn kind_color(kind: MessageKind) -> ColorSpec {
    let mut spec = ColorSpec::new();
    if kind.is_failure() {
        spec.set_fg(Some(Color::Red)).set_bold(true);
    } else {
        spec.set_fg(Some(Color::Green));
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputBuffer;
    use crate::message::{of_type, Location};

    #[test]
    fn formats_single_line_without_note() {
        let mut out = OutputBuffer::new();
        let message = Message::failed(Location::new("t.rs", 12), "a == b", "1 == 2");
        report(&mut out, &message, "arithmetic").unwrap();
        assert_eq!(out.as_str(), "t.rs:12: failed: arithmetic: a == b for 1 == 2\n");
    }

    #[test]
    fn note_is_prefixed_with_one_space() {
        let mut out = OutputBuffer::new();
        let message = Message::expected(Location::new("t.rs", 3), "parse()", of_type("Oops"));
        report(&mut out, &message, "parsing").unwrap();
        assert_eq!(
            out.as_str(),
            "t.rs:3: failed: didn't get exception of type Oops: parsing: parse()\n"
        );
    }

    #[test]
    fn pluralises_counts() {
        assert_eq!(pluralise(0, "test"), "tests");
        assert_eq!(pluralise(1, "test"), "test");
        assert_eq!(pluralise(2, "test"), "tests");
    }
}
