//! The four-parameter sinusoid model
//!
//! Every estimator in this crate reports its result as a [`Sinusoid`], and
//! test signals are synthesized from one. The model is
//! `y(t) = offset + amplitude * cos(2*pi*frequency*t + phase)`.

use std::f64::consts::PI;

/// Parameters of a single real sinusoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid {
    /// Peak amplitude
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Phase in radians
    pub phase: f64,
    /// Constant (DC) offset
    pub offset: f64,
}

impl Sinusoid {
    /// Create a sinusoid from its four parameters
    pub fn new(amplitude: f64, frequency: f64, phase: f64, offset: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
            offset,
        }
    }

    /// Create a sinusoid with zero offset
    pub fn without_offset(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self::new(amplitude, frequency, phase, 0.0)
    }

    /// Evaluate the model at time `t` (seconds)
    pub fn sample(&self, t: f64) -> f64 {
        self.offset + self.amplitude * (2.0 * PI * self.frequency * t + self.phase).cos()
    }

    /// Signed percentage error of each estimated parameter against `truth`
    ///
    /// Returns `(amplitude, frequency, phase, offset)` errors, each computed
    /// as `100 * (estimated - true) / true`. A parameter whose true value is
    /// zero yields NaN for that slot; callers printing reports should treat
    /// it as "not comparable".
    pub fn percent_error_vs(&self, truth: &Sinusoid) -> (f64, f64, f64, f64) {
        (
            percent_error(self.amplitude, truth.amplitude),
            percent_error(self.frequency, truth.frequency),
            percent_error(self.phase, truth.phase),
            percent_error(self.offset, truth.offset),
        )
    }
}

/// Signed percentage error: `100 * (estimated - actual) / actual`
pub fn percent_error(estimated: f64, actual: f64) -> f64 {
    100.0 * (estimated - actual) / actual
}

/// Wrap a phase angle into `(-pi, pi]`
pub fn wrap_phase(phase: f64) -> f64 {
    let mut p = phase % (2.0 * PI);
    if p > PI {
        p -= 2.0 * PI;
    } else if p <= -PI {
        p += 2.0 * PI;
    }
    p
}
