//! Find an off-grid tone with the windowed coarse-to-fine DFT search.
//!
//! Usage: cargo run --example peak_search

use sinefit_core::sinusoid::percent_error;
use sinefit_core::{PeakSearch, Signal, Sinusoid};
use std::f64::consts::PI;

fn main() {
    // 10.555 Hz tone: off every plain DFT grid
    let truth = Sinusoid::without_offset(2.0, 10.555, PI / 4.0);
    let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
        .add_gaussian_noise(0.1, 1)
        .expect("valid noise sigma");

    // Hamming window, 4 passes, 0.2 Hz initial step, initial guess 10 Hz
    let est = PeakSearch::new()
        .estimate(&signal, 10.0)
        .expect("search failed");

    println!(
        "Real frequency: {:.4}; Estimated peak frequency = {:.4}; Error: {:.2}%",
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
}
