//! Window functions for spectral analysis
//!
//! Windows reduce spectral leakage when a DFT is evaluated on a signal whose
//! frequency does not land exactly on a bin. The coarse-to-fine peak search
//! applies one of these before scanning, and normalizes amplitude by the
//! window's coherent gain.

use std::f64::consts::PI;

/// Window shapes available for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowShape {
    /// Rectangular window (no windowing)
    Rectangular,
    /// Triangular (Bartlett) window
    Triangular,
    /// Hanning window (raised cosine)
    Hanning,
    /// Hamming window
    #[default]
    Hamming,
    /// Blackman window
    Blackman,
    /// Gaussian window with configurable standard deviation
    Gaussian,
}

impl WindowShape {
    /// Compute the window value at a normalized position
    ///
    /// # Arguments
    /// * `position` - Position in the window, normalized to [-0.5, 0.5]
    ///                where 0 is the center
    /// * `parameter` - Optional parameter (sigma for Gaussian)
    ///
    /// # Returns
    /// The window amplitude at the given position (0.0 to 1.0)
    pub fn value_at(self, position: f64, parameter: Option<f64>) -> f64 {
        if position.abs() > 0.5 {
            return 0.0;
        }

        match self {
            WindowShape::Rectangular => 1.0,

            WindowShape::Triangular => 1.0 - 2.0 * position.abs(),

            WindowShape::Hanning => 0.5 + 0.5 * (2.0 * PI * position).cos(),

            WindowShape::Hamming => 0.54 + 0.46 * (2.0 * PI * position).cos(),

            WindowShape::Blackman => {
                0.42 + 0.5 * (2.0 * PI * position).cos() + 0.08 * (4.0 * PI * position).cos()
            }

            WindowShape::Gaussian => {
                let sigma = parameter.unwrap_or(0.4);
                (-0.5 * (position / sigma).powi(2)).exp()
            }
        }
    }

    /// Generate a complete window of the given size
    ///
    /// Sample `i` is evaluated at the center of its cell, so the first and
    /// last values are slightly above the window's edge value.
    pub fn generate(self, size: usize, parameter: Option<f64>) -> Vec<f64> {
        if size == 0 {
            return Vec::new();
        }

        (0..size)
            .map(|i| {
                let position = (i as f64 + 0.5) / size as f64 - 0.5;
                self.value_at(position, parameter)
            })
            .collect()
    }

    /// Generate a symmetric window (first and last values equal)
    ///
    /// This is the form used by the peak search: sample `i` is evaluated at
    /// `i / (size - 1) - 0.5`, which for Hamming reproduces the textbook
    /// `0.54 - 0.46 * cos(2*pi*i / (size-1))` sequence.
    pub fn generate_symmetric(self, size: usize, parameter: Option<f64>) -> Vec<f64> {
        if size == 0 {
            return Vec::new();
        }
        if size == 1 {
            return vec![1.0];
        }

        (0..size)
            .map(|i| {
                let position = i as f64 / (size - 1) as f64 - 0.5;
                self.value_at(position, parameter)
            })
            .collect()
    }
}

/// Coherent gain of a window: the mean of its values
///
/// A sinusoid at a window's center frequency is attenuated by exactly this
/// factor, so windowed amplitude estimates divide by it.
pub fn coherent_gain(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 1.0;
    }
    window.iter().sum::<f64>() / window.len() as f64
}

/// Equivalent noise bandwidth of a window, relative to rectangular
///
/// Useful for power spectrum normalization.
pub fn equivalent_noise_bandwidth(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 1.0;
    }

    let sum: f64 = window.iter().sum();
    let sum_sq: f64 = window.iter().map(|x| x * x).sum();

    if sum == 0.0 {
        return 1.0;
    }

    let n = window.len() as f64;
    n * sum_sq / (sum * sum)
}
