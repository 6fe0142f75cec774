//! Fit amplitude and phase at a known frequency by linear least squares.
//!
//! Usage: cargo run --example linear_fit

use sinefit_core::sinusoid::percent_error;
use sinefit_core::{linear_fit, Signal, Sinusoid};
use std::f64::consts::PI;

fn main() {
    let truth = Sinusoid::without_offset(2.0, 10.0, PI / 4.0);
    let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
        .add_gaussian_noise(0.1, 1)
        .expect("valid noise sigma");

    let est = linear_fit(&signal, 10.0).expect("fit failed");

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
