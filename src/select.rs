//! Test selection by name patterns.
//!
//! Patterns are scanned from last to first, so later patterns override
//! earlier ones:
//!
//! - `*` (or `^\*$`) selects everything, hidden tests included;
//! - `!text` rejects names matching `text`;
//! - `text` selects names matching `text`.
//!
//! A negated pattern that does not match provisionally selects and the scan
//! continues; a positive pattern that does not match withdraws that
//! provisional selection. Without any decision the provisional result
//! stands, except for hidden tests (names tagged `[.]` or `[hide]`), which
//! are also what an empty pattern list leaves out.

use regex::Regex;

use crate::errors::HarnessError;

const HIDDEN_TAGS: [&str; 2] = ["[.]", "[hide]"];
const ALWAYS: [&str; 2] = ["*", "^\\*$"];

/// How pattern text is matched against test names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Text,
    /// Regular-expression search.
    Regex,
}

#[derive(Debug, Clone)]
enum Matcher {
    Always,
    Text(String),
    Regex(Regex),
}

impl Matcher {
    fn compile(text: &str, mode: MatchMode) -> Result<Self, HarnessError> {
        match mode {
            MatchMode::Text => Ok(Matcher::Text(text.to_lowercase())),
            MatchMode::Regex => Regex::new(text)
                .map(Matcher::Regex)
                .map_err(|source| HarnessError::Pattern {
                    pattern: text.to_string(),
                    source,
                }),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Always => true,
            Matcher::Text(part) => name.to_lowercase().contains(part.as_str()),
            Matcher::Regex(re) => re.is_match(name),
        }
    }
}

#[derive(Debug, Clone)]
struct Pattern {
    negated: bool,
    matcher: Matcher,
}

/// A compiled, ordered list of selection patterns.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    patterns: Vec<Pattern>,
}

impl Selection {
    /// Compiles `patterns`; only regular-expression mode can fail.
    pub fn new<S: AsRef<str>>(patterns: &[S], mode: MatchMode) -> Result<Self, HarnessError> {
        let patterns = patterns
            .iter()
            .map(|pattern| compile_pattern(pattern.as_ref(), mode))
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the test called `name` runs.
    pub fn select(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return !hidden(name);
        }

        let mut carry = false;
        for pattern in self.patterns.iter().rev() {
            if matches!(pattern.matcher, Matcher::Always) {
                return true;
            }
            let matched = pattern.matcher.matches(name);
            match (pattern.negated, matched) {
                (true, true) => return false,
                (false, true) => return true,
                (true, false) => carry = true,
                (false, false) => carry = false,
            }
        }
        carry && !hidden(name)
    }
}

fn compile_pattern(text: &str, mode: MatchMode) -> Result<Pattern, HarnessError> {
    if ALWAYS.contains(&text) {
        return Ok(Pattern {
            negated: false,
            matcher: Matcher::Always,
        });
    }
    let (negated, rest) = match text.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    Ok(Pattern {
        negated,
        matcher: Matcher::compile(rest, mode)?,
    })
}

/// Whether `name` carries a hidden tag.
pub fn hidden(name: &str) -> bool {
    HIDDEN_TAGS.iter().any(|tag| name.contains(tag))
}

/// Text-mode selection of `name` by `patterns`.
pub fn select<S: AsRef<str>>(name: &str, patterns: &[S]) -> bool {
    Selection::new(patterns, MatchMode::Text)
        .map(|selection| selection.select(name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn empty_patterns_skip_hidden_tests() {
        assert!(select("plain", &NONE));
        assert!(!select("slow [.]", &NONE));
        assert!(!select("[hide] flaky", &NONE));
    }

    #[test]
    fn star_selects_everything() {
        assert!(select("slow [.]", &["*"]));
        assert!(select("anything", &["!any", "*"]));
        assert!(select("[hide]", &["^\\*$"]));
    }

    #[test]
    fn negation_rejects_matches_and_admits_the_rest() {
        assert!(!select("foo bar", &["!foo"]));
        assert!(select("baz", &["!foo"]));
        assert!(!select("baz [.]", &["!foo"]));
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        assert!(select("Parses Numbers", &["numbers"]));
        assert!(!select("Parses Numbers", &["strings"]));
    }

    #[test]
    fn later_patterns_override_earlier_ones() {
        assert!(select("foo bar", &["!foo", "bar"]));
        assert!(!select("foo bar", &["bar", "!foo"]));
        // a positive miss withdraws the provisional selection of a later negation
        assert!(!select("baz", &["foo", "!bar"]));
        assert!(select("foo", &["foo", "!bar"]));
        // consecutive negated misses keep it
        assert!(select("baz", &["!foo", "!bar"]));
    }

    #[test]
    fn regex_mode_searches_names() {
        let selection = Selection::new(&["^pa.*s$", "!numb"], MatchMode::Regex).unwrap();
        assert!(selection.select("parses"));
        assert!(!selection.select("parses numbers"));
        assert!(!selection.select("other"));
        assert!(Selection::new(&["!numb"], MatchMode::Regex).unwrap().select("other"));
    }

    #[test]
    fn invalid_regex_is_reported() {
        let err = Selection::new(&["(unclosed"], MatchMode::Regex).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("(unclosed"));
    }
}
