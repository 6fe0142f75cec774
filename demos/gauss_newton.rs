//! Fit all four sinusoid parameters with the Gauss-Newton iteration.
//!
//! Usage: cargo run --example gauss_newton

use sinefit_core::sinusoid::percent_error;
use sinefit_core::{GaussNewtonFit, Signal, Sinusoid};
use std::f64::consts::PI;

fn main() {
    let truth = Sinusoid::new(2.0, 10.555, PI / 4.0, 0.1);
    let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
        .add_gaussian_noise(0.1, 1)
        .expect("valid noise sigma");

    let initial = Sinusoid::new(2.5, 10.6, 0.5, 0.0);
    let fit = GaussNewtonFit::new()
        .fit(&signal, initial)
        .expect("fit failed");
    let est = fit.estimate;

    println!(
        "Real frequency: {:.4}Hz; Estimated peak frequency = {:.4}Hz; Error: {:.2}%",
        truth.frequency,
        est.frequency,
        percent_error(est.frequency, truth.frequency)
    );
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
    println!(
        "Converged: {} after {} iterations (residual norm {:.3e})",
        fit.converged, fit.iterations, fit.residual_norm
    );
}
