//! Approximate floating-point equality.

use std::fmt;

/// Default tolerance: one hundred single-precision machine epsilons.
pub const DEFAULT_EPSILON: f64 = f32::EPSILON as f64 * 100.0;

/// A magnitude compared with a relative tolerance.
///
/// `v == approx(m)` holds when
/// `|v - m| < epsilon * (scale + max(|v|, |m|))`, in either operand order.
#[derive(Clone, Copy, PartialEq)]
pub struct Approx {
    epsilon: f64,
    scale: f64,
    magnitude: f64,
}

/// Shorthand for [`Approx::new`].
pub fn approx(magnitude: f64) -> Approx {
    Approx::new(magnitude)
}

impl Approx {
    pub fn new(magnitude: f64) -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            scale: 1.0,
            magnitude,
        }
    }

    /// A template whose tolerance settings are reused through [`Approx::with`].
    pub fn custom() -> Self {
        Self::new(0.0)
    }

    /// A new approximation of `magnitude` carrying this one's epsilon and scale.
    pub fn with(&self, magnitude: f64) -> Self {
        Self { magnitude, ..*self }
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    fn matches(&self, value: f64) -> bool {
        let margin = self.scale + value.abs().max(self.magnitude.abs());
        (value - self.magnitude).abs() < self.epsilon * margin
    }
}

impl PartialEq<f64> for Approx {
    fn eq(&self, other: &f64) -> bool {
        self.matches(*other)
    }
}

impl PartialEq<Approx> for f64 {
    fn eq(&self, other: &Approx) -> bool {
        other.matches(*self)
    }
}

impl fmt::Debug for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.magnitude)
    }
}

impl fmt::Display for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magnitude)
    }
}
