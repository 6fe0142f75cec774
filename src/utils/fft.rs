//! FFT wrapper for spectral analysis
//!
//! This module provides a convenient wrapper around rustfft, used by the
//! peak search to seed its coarse frequency guess from the magnitude
//! spectrum.

use num_complex::Complex;
use rustfft::FftPlanner;

/// FFT processor with cached plans
pub struct Fft {
    planner: FftPlanner<f64>,
}

impl Fft {
    /// Create a new FFT processor
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute FFT of real-valued input
    ///
    /// # Arguments
    /// * `input` - Real-valued input samples
    /// * `output_size` - Size of the FFT (input is zero-padded if shorter)
    ///
    /// # Returns
    /// Complex-valued FFT result of length `output_size`
    pub fn real_fft(&mut self, input: &[f64], output_size: usize) -> Vec<Complex<f64>> {
        let fft_size = output_size.max(input.len());
        let fft = self.planner.plan_fft_forward(fft_size);

        let mut buffer: Vec<Complex<f64>> = input
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
            .take(fft_size)
            .collect();

        fft.process(&mut buffer);
        buffer
    }

    /// Compute magnitude spectrum of real input
    ///
    /// # Returns
    /// Magnitude values for frequencies 0 to Nyquist (fft_size/2 + 1 values)
    pub fn magnitude_spectrum(&mut self, input: &[f64], fft_size: usize) -> Vec<f64> {
        let spectrum = self.real_fft(input, fft_size);

        let n_freqs = fft_size / 2 + 1;
        spectrum[..n_freqs].iter().map(|c| c.norm()).collect()
    }
}

impl Default for Fft {
    fn default() -> Self {
        Self::new()
    }
}
