//! Run every estimator on one noisy tone and emit the results as JSON.
//!
//! Usage: cargo run --example fit_json

use serde::Serialize;
use sinefit_core::{
    linear_fit, BinDftEstimator, GaussNewtonFit, PeakSearch, Signal, Sinusoid, ZoomDftEstimator,
};
use std::f64::consts::PI;

#[derive(Serialize)]
struct Params {
    amplitude: f64,
    frequency: f64,
    phase: f64,
    offset: f64,
}

impl From<Sinusoid> for Params {
    fn from(s: Sinusoid) -> Self {
        Self {
            amplitude: s.amplitude,
            frequency: s.frequency,
            phase: s.phase,
            offset: s.offset,
        }
    }
}

#[derive(Serialize)]
struct Output {
    truth: Params,
    noise_sigma: f64,
    n_samples: usize,
    sample_rate: f64,
    bin_dft: Params,
    peak_search: Params,
    zoom_dft: Params,
    zoom_dft_off_grid: Params,
    linear_fit: Params,
    gauss_newton: Params,
    gauss_newton_converged: bool,
    gauss_newton_iterations: usize,
}

fn main() {
    let truth = Sinusoid::new(2.0, 10.5, PI / 4.0, 0.1);
    let n_samples = 2000;
    let sample_rate = 1000.0;
    let noise_sigma = 0.1;

    let signal = Signal::from_sinusoid(&truth, n_samples, sample_rate)
        .add_gaussian_noise(noise_sigma, 1)
        .expect("valid noise sigma");

    let zoom = ZoomDftEstimator::new(truth.frequency);
    let gn = GaussNewtonFit::new()
        .fit(&signal, Sinusoid::new(2.5, 10.45, 0.5, 0.0))
        .expect("Gauss-Newton fit failed");

    let output = Output {
        truth: truth.into(),
        noise_sigma,
        n_samples,
        sample_rate,
        bin_dft: BinDftEstimator::new(truth.frequency)
            .estimate(&signal)
            .expect("bin DFT failed")
            .into(),
        peak_search: PeakSearch::new()
            .estimate_auto(&signal)
            .expect("peak search failed")
            .into(),
        zoom_dft: zoom.estimate(&signal).expect("zoom DFT failed").into(),
        zoom_dft_off_grid: zoom
            .estimate_off_grid(&signal)
            .expect("zoom DFT failed")
            .into(),
        linear_fit: linear_fit(&signal, truth.frequency)
            .expect("linear fit failed")
            .into(),
        gauss_newton: gn.estimate.into(),
        gauss_newton_converged: gn.converged,
        gauss_newton_iterations: gn.iterations,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
