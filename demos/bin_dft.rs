//! Estimate amplitude and phase of a noisy tone at a known frequency bin.
//!
//! Usage: cargo run --example bin_dft

use sinefit_core::sinusoid::percent_error;
use sinefit_core::{BinDftEstimator, Signal, Sinusoid};
use std::f64::consts::PI;

fn main() {
    // 10 Hz tone, amplitude 2, phase pi/4, 1000 samples at 1 kHz
    let truth = Sinusoid::without_offset(2.0, 10.0, PI / 4.0);
    let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
        .add_gaussian_noise(0.1, 1)
        .expect("valid noise sigma");

    let est = BinDftEstimator::new(10.0)
        .estimate(&signal)
        .expect("estimation failed");

    println!(
        "Real amplitude: {:.4}; Estimated amplitude: {:.4}; Error: {:.2}%",
        truth.amplitude,
        est.amplitude,
        percent_error(est.amplitude, truth.amplitude)
    );
    println!(
        "Real phase: {:.4}; Estimated phase: {:.4}; Error: {:.2}%",
        truth.phase,
        est.phase,
        percent_error(est.phase, truth.phase)
    );
}
