//! Single-bin DFT estimator
//!
//! When the signal frequency is known in advance, one DFT coefficient at the
//! nearest frequency bin is enough to recover amplitude and phase: the
//! coefficient's magnitude scaled by `2/N` gives the amplitude, and the
//! two-argument arctangent of its imaginary and real parts gives the phase.

use crate::dft::{amplitude_from_coefficient, dft_at_bin, phase_from_coefficient};
use crate::{Result, Signal, SinefitError, Sinusoid};

/// Amplitude/phase estimator for a sinusoid of known frequency
#[derive(Debug, Clone, Copy)]
pub struct BinDftEstimator {
    /// Expected signal frequency in Hz
    frequency: f64,
}

impl BinDftEstimator {
    /// Create an estimator for the given expected frequency
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }

    /// The expected frequency this estimator evaluates at
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Estimate amplitude and phase at the bin nearest the expected frequency
    ///
    /// The reported frequency is the bin's exact frequency, which may differ
    /// from the expected one by up to half the bin spacing `fs/N`.
    ///
    /// # Errors
    /// Returns an error for an empty signal or a frequency outside
    /// `(0, Nyquist]`.
    ///
    /// # Example
    /// ```
    /// use sinefit_core::{BinDftEstimator, Signal, Sinusoid};
    /// use std::f64::consts::PI;
    ///
    /// let truth = Sinusoid::without_offset(2.0, 10.0, PI / 4.0);
    /// let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);
    ///
    /// let est = BinDftEstimator::new(10.0).estimate(&signal).unwrap();
    /// assert!((est.amplitude - 2.0).abs() < 1e-9);
    /// ```
    pub fn estimate(&self, signal: &Signal) -> Result<Sinusoid> {
        if signal.is_empty() {
            return Err(SinefitError::InvalidParameter(
                "cannot estimate from an empty signal".to_string(),
            ));
        }

        let nyquist = signal.sample_rate() / 2.0;
        if self.frequency <= 0.0 || self.frequency > nyquist {
            return Err(SinefitError::InvalidParameter(format!(
                "expected frequency {} Hz outside (0, {}] Hz",
                self.frequency, nyquist
            )));
        }

        let n = signal.num_samples();
        let df = signal.sample_rate() / n as f64;
        let k = (self.frequency / df).round();

        let x = dft_at_bin(signal.samples(), k, n);

        Ok(Sinusoid::without_offset(
            amplitude_from_coefficient(x, n),
            k * df,
            phase_from_coefficient(x),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_noiseless_on_grid_recovery() {
        // The original scenario: A = 2, f = 10 Hz, phi = pi/4, fs = 1000, N = 1000
        let truth = Sinusoid::without_offset(2.0, 10.0, PI / 4.0);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);

        let est = BinDftEstimator::new(10.0).estimate(&signal).unwrap();

        assert_relative_eq!(est.amplitude, 2.0, epsilon = 1e-9);
        assert_relative_eq!(est.frequency, 10.0, epsilon = 1e-9);
        assert_relative_eq!(est.phase, PI / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_noisy_recovery_within_tolerance() {
        let truth = Sinusoid::without_offset(2.0, 10.0, PI / 4.0);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
            .add_gaussian_noise(0.1, 42)
            .unwrap();

        let est = BinDftEstimator::new(10.0).estimate(&signal).unwrap();

        // Sigma 0.1 against amplitude 2 over 1000 samples: well under 1%
        assert!((est.amplitude - 2.0).abs() / 2.0 < 0.01);
        assert!((est.phase - PI / 4.0).abs() < 0.01);
    }

    #[test]
    fn test_off_grid_frequency_snaps_to_bin() {
        let signal = Signal::from_sinusoid(
            &Sinusoid::without_offset(1.0, 10.0, 0.0),
            1000,
            1000.0,
        );

        // 10.3 Hz rounds to bin 10 at df = 1 Hz
        let est = BinDftEstimator::new(10.3).estimate(&signal).unwrap();
        assert_relative_eq!(est.frequency, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_empty_signal() {
        let signal = Signal::from_samples(&[], 1000.0);
        assert!(BinDftEstimator::new(10.0).estimate(&signal).is_err());
    }

    #[test]
    fn test_rejects_super_nyquist_frequency() {
        let signal = Signal::from_samples(&[0.0; 100], 1000.0);
        assert!(BinDftEstimator::new(600.0).estimate(&signal).is_err());
        assert!(BinDftEstimator::new(0.0).estimate(&signal).is_err());
    }
}
