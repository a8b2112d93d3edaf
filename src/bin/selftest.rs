// Assay self-test: a host program exercising the harness on itself.
// Usage: cargo run --bin selftest -- [options] [test-spec ...]
//
// Tests tagged [.] demonstrate every failure message and only run when
// selected explicitly (for example with "*" or "[.]").

use std::num::ParseIntError;

use assay::prelude::*;
use assay::{cli, select, Opaque, Outcome};

fn specification() -> Specification {
    let mut spec = Specification::new();

    spec.add("Comparisons decompose into both operands", |ctx| {
        let answer = 6 * 7;
        expect!(ctx, answer == 42)?;
        expect!(ctx, answer != 41)?;
        expect!(ctx, answer >= 42)?;
        expect_not!(ctx, answer < 42)?;
        let outcome = capture("a").eq("b");
        expect!(ctx, outcome.decomposition == "\"a\" == \"b\"")
    });

    spec.add("Approximate equality tolerates rounding", |ctx| {
        expect!(ctx, 0.1 + 0.2 == approx(0.3))?;
        expect_not!(ctx, 10.0 == approx(11.0))?;
        expect!(ctx, 0.0009 == approx(0.0).epsilon(1e-3))
    });

    spec.add("Errors are observed as exceptions", |ctx| {
        let digits = vec![1u8, 2, 3];
        expect_no_throw!(ctx, digits.len())?;
        expect_throws!(ctx, digits[9])?;
        expect_no_throw!(ctx, "12".parse::<u8>())?;
        expect_throws!(ctx, "x".parse::<u8>())?;
        expect_throws_as!(ctx, ParseIntError, "300".parse::<u8>())
    });

    spec.add("Selection honours negation and hidden tags", |ctx| {
        expect!(ctx, select("foo bar", &["foo"]))?;
        expect_not!(ctx, select("foo bar", &["!foo"]))?;
        expect_not!(ctx, select("slow [.]", &[] as &[&str]))
    });

    spec.add("Opaque values still compare", |ctx| {
        struct Token(u8);
        impl PartialEq for Token {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        let outcome: Outcome = capture(&Opaque(Token(1))).eq(&Opaque(Token(1)));
        expect!(ctx, outcome.passed)?;
        expect!(ctx, outcome.decomposition == "{?} == {?}")
    });

    spec.add("[.] demo: failed comparison", |ctx| expect!(ctx, 1 + 1 == 3));

    spec.add("[.] demo: unexpected panic", |ctx| {
        let empty: Vec<u8> = Vec::new();
        expect!(ctx, empty[0] == 0)
    });

    spec.add("[.] demo: missing exception", |ctx| {
        expect_throws_as!(ctx, ParseIntError, "7".parse::<u8>())
    });

    spec
}

fn main() {
    let spec = specification();
    std::process::exit(cli::main_with(&spec));
}
