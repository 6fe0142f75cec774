//! Windowed coarse-to-fine DFT peak search
//!
//! When the signal frequency is unknown and off-grid, a grid search over DFT
//! amplitude finds it to arbitrary precision: scan a neighborhood of an
//! initial guess, move to the frequency of maximum amplitude, shrink the
//! step, and repeat. A window (Hamming by default) is applied first so that
//! spectral leakage from the search frequencies' mismatch does not bury the
//! true peak.

use crate::dft::{dft_at_frequency, phase_from_coefficient};
use crate::utils::Fft;
use crate::window::{coherent_gain, WindowShape};
use crate::{Result, Signal, SinefitError, Sinusoid};

/// Coarse-to-fine frequency search over windowed DFT amplitude
#[derive(Debug, Clone, Copy)]
pub struct PeakSearch {
    /// Window applied before scanning
    window: WindowShape,
    /// Number of refinement passes
    passes: usize,
    /// Frequency step of the first pass, in Hz
    initial_step: f64,
    /// Step shrink factor between passes
    refinement: f64,
}

impl Default for PeakSearch {
    fn default() -> Self {
        Self {
            window: WindowShape::Hamming,
            passes: 4,
            initial_step: 0.2,
            refinement: 10.0,
        }
    }
}

impl PeakSearch {
    /// Create a search with the default configuration
    /// (Hamming window, 4 passes, 0.2 Hz initial step, 10x refinement)
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different window shape
    pub fn with_window(mut self, window: WindowShape) -> Self {
        self.window = window;
        self
    }

    /// Use a different number of refinement passes
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Use a different initial frequency step
    pub fn with_initial_step(mut self, initial_step: f64) -> Self {
        self.initial_step = initial_step;
        self
    }

    /// Final frequency resolution of the search
    pub fn resolution(&self) -> f64 {
        self.initial_step / self.refinement.powi(self.passes.saturating_sub(1) as i32)
    }

    /// Search for the amplitude peak around an initial frequency guess
    ///
    /// Each pass scans 21 frequencies spaced `step` apart, centered on the
    /// best frequency found so far, then divides the step by the refinement
    /// factor. Amplitude is normalized by the window's coherent gain;
    /// phase is read off the winning frequency's DFT coefficient.
    pub fn estimate(&self, signal: &Signal, initial_freq: f64) -> Result<Sinusoid> {
        if signal.is_empty() {
            return Err(SinefitError::InvalidParameter(
                "cannot estimate from an empty signal".to_string(),
            ));
        }
        if self.passes == 0 {
            return Err(SinefitError::InvalidParameter(
                "search needs at least one pass".to_string(),
            ));
        }
        if self.initial_step <= 0.0 || self.refinement <= 1.0 {
            return Err(SinefitError::InvalidParameter(
                "initial step must be positive and refinement greater than 1".to_string(),
            ));
        }

        let n = signal.num_samples();
        let window = self.window.generate_symmetric(n, None);
        let gain = coherent_gain(&window);

        let windowed: Vec<f64> = signal
            .samples()
            .iter()
            .zip(window.iter())
            .map(|(&y, &w)| y * w)
            .collect();

        let mut best_freq = initial_freq;
        let mut best_amp = f64::NEG_INFINITY;
        let mut best_phase = 0.0;
        let mut step = self.initial_step;

        for _ in 0..self.passes {
            let center = best_freq;
            for i in -10..=10 {
                let f = center + i as f64 * step;
                if f <= 0.0 {
                    continue;
                }

                let x = dft_at_frequency(&windowed, f, signal.sample_rate());
                let amp = 2.0 * x.norm() / (n as f64 * gain);

                if amp > best_amp {
                    best_amp = amp;
                    best_freq = f;
                    best_phase = phase_from_coefficient(x);
                }
            }
            step /= self.refinement;
        }

        Ok(Sinusoid::without_offset(best_amp, best_freq, best_phase))
    }

    /// Search without an initial guess, seeding from the FFT magnitude peak
    ///
    /// The coarse guess is the frequency of the largest magnitude-spectrum
    /// bin (DC excluded); the refinement then proceeds as in [`estimate`].
    ///
    /// [`estimate`]: PeakSearch::estimate
    pub fn estimate_auto(&self, signal: &Signal) -> Result<Sinusoid> {
        if signal.is_empty() {
            return Err(SinefitError::InvalidParameter(
                "cannot estimate from an empty signal".to_string(),
            ));
        }

        let n = signal.num_samples();
        let fft_size = n.next_power_of_two();

        let mut fft = Fft::new();
        let magnitudes = fft.magnitude_spectrum(signal.samples(), fft_size);

        // Peak bin, skipping DC
        let (peak_bin, _) = magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .fold((1, 0.0), |(bi, bm), (i, &m)| {
                if m > bm {
                    (i, m)
                } else {
                    (bi, bm)
                }
            });

        let coarse = peak_bin as f64 * signal.sample_rate() / fft_size as f64;
        self.estimate(signal, coarse)
    }
}
