//! Test registration.
//!
//! A [`Specification`] is an ordered, host-owned list of tests. Registration
//! is an explicit call; the order of calls is the declared test order.

use std::fmt;

use crate::context::ExecutionContext;
use crate::message::Verdict;

type Behavior = Box<dyn Fn(&mut ExecutionContext<'_>) -> Verdict>;

/// A named test body.
pub struct Test {
    name: String,
    behavior: Behavior,
}

impl Test {
    pub fn new<F>(name: impl Into<String>, behavior: F) -> Self
    where
        F: Fn(&mut ExecutionContext<'_>) -> Verdict + 'static,
    {
        Self {
            name: name.into(),
            behavior: Box::new(behavior),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the body with the context attributed to this test.
    pub fn invoke(&self, ctx: &mut ExecutionContext<'_>) -> Verdict {
        ctx.enter(&self.name);
        (self.behavior)(ctx)
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered collection of registered tests.
#[derive(Debug, Default)]
pub struct Specification {
    tests: Vec<Test>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a test; declared order is registration order.
    pub fn add<F>(&mut self, name: impl Into<String>, behavior: F) -> &mut Self
    where
        F: Fn(&mut ExecutionContext<'_>) -> Verdict + 'static,
    {
        self.tests.push(Test::new(name, behavior));
        self
    }

    pub fn push(&mut self, test: Test) -> &mut Self {
        self.tests.push(test);
        self
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Test> {
        self.tests.iter()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl From<Vec<Test>> for Specification {
    fn from(tests: Vec<Test>) -> Self {
        Self { tests }
    }
}

impl FromIterator<Test> for Specification {
    fn from_iter<I: IntoIterator<Item = Test>>(iter: I) -> Self {
        Self {
            tests: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Specification {
    type Item = &'a Test;
    type IntoIter = std::slice::Iter<'a, Test>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter()
    }
}
