//! Direct single-frequency DFT evaluation
//!
//! All three DFT-based estimators reduce to evaluating the sum
//! `X = sum_n y[n] * exp(-j*2*pi*f*n/fs)` at one frequency of interest,
//! then reading amplitude and phase off the complex coefficient. Evaluating
//! the sum directly costs O(N) per frequency, which beats a full FFT when
//! only a handful of frequencies are needed.

use num_complex::Complex;
use std::f64::consts::PI;

/// Evaluate the DFT sum at integer bin `k` of an `n_dft`-point transform
///
/// `n_dft` may exceed `samples.len()`: the missing samples are implicit
/// zeros, which is how the zoomed (zero-padded) estimator reaches a finer
/// frequency grid without materializing any padding.
pub fn dft_at_bin(samples: &[f64], k: f64, n_dft: usize) -> Complex<f64> {
    let step = -2.0 * PI * k / n_dft as f64;
    dft_sum(samples, step)
}

/// Evaluate the DFT sum at an arbitrary frequency in Hz
///
/// This is the off-grid form: `X(f) = sum_n y[n] * exp(-j*2*pi*f*n/fs)`.
pub fn dft_at_frequency(samples: &[f64], frequency: f64, sample_rate: f64) -> Complex<f64> {
    let step = -2.0 * PI * frequency / sample_rate;
    dft_sum(samples, step)
}

/// Accumulate `sum_n y[n] * exp(j*step*n)` with a recurrence phasor
///
/// The per-sample rotation is one complex multiply instead of a sin/cos
/// pair, which keeps the grid search affordable.
fn dft_sum(samples: &[f64], step: f64) -> Complex<f64> {
    let rotation = Complex::from_polar(1.0, step);
    let mut phasor = Complex::new(1.0, 0.0);
    let mut acc = Complex::new(0.0, 0.0);

    for &y in samples {
        acc += phasor * y;
        phasor *= rotation;
    }
    acc
}

/// Peak amplitude implied by a single positive-frequency DFT coefficient
///
/// A real sinusoid splits its energy between the positive and negative
/// frequency images, hence the factor of two: `A = 2*|X|/n`.
pub fn amplitude_from_coefficient(x: Complex<f64>, n: usize) -> f64 {
    2.0 * x.norm() / n as f64
}

/// Phase implied by a DFT coefficient, in `(-pi, pi]`
pub fn phase_from_coefficient(x: Complex<f64>) -> f64 {
    x.im.atan2(x.re)
}
