//! Signal type for sampled data representation
//!
//! The Signal type is the fundamental data structure holding real-valued
//! samples at a fixed sample rate. It supports synthesis of test sinusoids,
//! reproducible additive Gaussian noise, and loading from WAV files.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::sinusoid::Sinusoid;
use crate::{Result, SinefitError};

/// Real-valued samples with an associated sample rate
#[derive(Debug, Clone)]
pub struct Signal {
    /// Samples, indexed by time (t[n] = n / sample_rate)
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: f64,
}

impl Signal {
    /// Create a Signal from raw samples
    ///
    /// # Example
    /// ```
    /// use sinefit_core::Signal;
    ///
    /// let signal = Signal::from_samples(&[0.0, 0.5, 1.0, 0.5], 1000.0);
    /// assert_eq!(signal.sample_rate(), 1000.0);
    /// ```
    pub fn from_samples(samples: &[f64], sample_rate: f64) -> Self {
        Self {
            samples: samples.to_vec(),
            sample_rate,
        }
    }

    /// Create a Signal from owned samples (avoids cloning)
    pub fn from_samples_owned(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Synthesize a sinusoid on a uniform sample grid
    ///
    /// Evaluates `y[n] = offset + amplitude * cos(2*pi*frequency*n/sample_rate
    /// + phase)` for `n = 0..n_samples`.
    pub fn from_sinusoid(model: &Sinusoid, n_samples: usize, sample_rate: f64) -> Self {
        let samples: Vec<f64> = (0..n_samples)
            .map(|n| model.sample(n as f64 / sample_rate))
            .collect();

        Self {
            samples,
            sample_rate,
        }
    }

    /// Load a Signal from a WAV file
    ///
    /// Multi-channel files are converted to mono by averaging channels.
    /// Integer samples are normalized to the [-1, 1] range.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded.
    pub fn from_wav<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        let sample_rate = spec.sample_rate as f64;
        let channels = spec.channels as usize;

        let samples: Vec<f64> = match spec.sample_format {
            hound::SampleFormat::Int => {
                let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f64;
                let int_samples = reader
                    .into_samples::<i32>()
                    .collect::<std::result::Result<Vec<i32>, _>>()?;

                if channels == 1 {
                    int_samples.iter().map(|&s| s as f64 / max_value).collect()
                } else {
                    int_samples
                        .chunks(channels)
                        .map(|chunk| {
                            let sum: f64 = chunk.iter().map(|&s| s as f64).sum();
                            sum / (channels as f64 * max_value)
                        })
                        .collect()
                }
            }
            hound::SampleFormat::Float => {
                let float_samples = reader
                    .into_samples::<f32>()
                    .collect::<std::result::Result<Vec<f32>, _>>()?;

                if channels == 1 {
                    float_samples.iter().map(|&s| s as f64).collect()
                } else {
                    float_samples
                        .chunks(channels)
                        .map(|chunk| {
                            let sum: f64 = chunk.iter().map(|&s| s as f64).sum();
                            sum / channels as f64
                        })
                        .collect()
                }
            }
        };

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Add white Gaussian noise with the given standard deviation
    ///
    /// The noise stream is seeded, so the same seed always produces the same
    /// noisy signal. Returns a new Signal; the original is untouched.
    pub fn add_gaussian_noise(&self, sigma: f64, seed: u64) -> Result<Signal> {
        let normal = Normal::new(0.0, sigma).map_err(|e| {
            SinefitError::InvalidParameter(format!("invalid noise sigma {}: {}", sigma, e))
        })?;
        let mut rng = StdRng::seed_from_u64(seed);

        let samples: Vec<f64> = self
            .samples
            .iter()
            .map(|&s| s + normal.sample(&mut rng))
            .collect();

        Ok(Signal {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Get a reference to the samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get the number of samples
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the total duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Get the sample period (time step between samples)
    pub fn dx(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Get the time of sample `index` in seconds
    pub fn time_of(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate
    }

    /// Get the root-mean-square amplitude
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.samples.iter().map(|&s| s * s).sum();
        (sum_sq / self.samples.len() as f64).sqrt()
    }

    /// Get the peak absolute amplitude
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|&s| s.abs()).fold(0.0, f64::max)
    }

    /// Get the mean sample value
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Multiply samples by a constant
    pub fn scale(&self, factor: f64) -> Signal {
        Signal {
            samples: self.samples.iter().map(|&s| s * factor).collect(),
            sample_rate: self.sample_rate,
        }
    }

    /// Add two signals sample-wise
    ///
    /// The signals must share a sample rate. The result has the length of the
    /// longer signal.
    pub fn add(&self, other: &Signal) -> Result<Signal> {
        if (self.sample_rate - other.sample_rate).abs() > 0.01 {
            return Err(SinefitError::InvalidParameter(
                "signals must have the same sample rate".to_string(),
            ));
        }

        let len = self.samples.len().max(other.samples.len());
        let mut result = vec![0.0; len];

        for (i, &s) in self.samples.iter().enumerate() {
            result[i] += s;
        }
        for (i, &s) in other.samples.iter().enumerate() {
            result[i] += s;
        }

        Ok(Signal {
            samples: result,
            sample_rate: self.sample_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_from_samples() {
        let signal = Signal::from_samples(&[0.0, 0.5, 1.0, 0.5, 0.0], 1000.0);

        assert_eq!(signal.sample_rate(), 1000.0);
        assert_eq!(signal.num_samples(), 5);
        assert_relative_eq!(signal.duration(), 0.005, epsilon = 1e-12);
        assert_relative_eq!(signal.time_of(3), 0.003, epsilon = 1e-12);
    }

    #[test]
    fn test_from_sinusoid() {
        let model = Sinusoid::new(2.0, 10.0, PI / 4.0, 0.0);
        let signal = Signal::from_sinusoid(&model, 1000, 1000.0);

        assert_eq!(signal.num_samples(), 1000);
        // First sample is A * cos(phase)
        assert_relative_eq!(signal.samples()[0], 2.0 * (PI / 4.0).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_rms_of_cosine() {
        // RMS of a full-cycle cosine is A / sqrt(2)
        let model = Sinusoid::new(2.0, 10.0, 0.0, 0.0);
        let signal = Signal::from_sinusoid(&model, 1000, 1000.0);

        assert_relative_eq!(signal.rms(), 2.0 / 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_noise_is_reproducible() {
        let model = Sinusoid::new(1.0, 10.0, 0.0, 0.0);
        let clean = Signal::from_sinusoid(&model, 100, 1000.0);

        let a = clean.add_gaussian_noise(0.1, 42).unwrap();
        let b = clean.add_gaussian_noise(0.1, 42).unwrap();
        let c = clean.add_gaussian_noise(0.1, 7).unwrap();

        assert_eq!(a.samples(), b.samples());
        assert_ne!(a.samples(), c.samples());
    }

    #[test]
    fn test_noise_statistics() {
        let silence = Signal::from_samples(&vec![0.0; 20000], 1000.0);
        let noisy = silence.add_gaussian_noise(0.1, 1).unwrap();

        // Zero-mean, sigma = 0.1 within sampling error
        assert!(noisy.mean().abs() < 0.01);
        assert!((noisy.rms() - 0.1).abs() < 0.01);
    }

    #[test]
    fn test_add_rejects_mismatched_rates() {
        let a = Signal::from_samples(&[1.0, 2.0], 1000.0);
        let b = Signal::from_samples(&[1.0, 2.0], 8000.0);
        assert!(a.add(&b).is_err());
    }

    #[test]
    fn test_add_and_scale() {
        let a = Signal::from_samples(&[1.0, 2.0, 3.0], 1000.0);
        let b = Signal::from_samples(&[1.0, 1.0], 1000.0);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.samples(), &[2.0, 3.0, 3.0]);

        let scaled = sum.scale(0.5);
        assert_eq!(scaled.samples(), &[1.0, 1.5, 1.5]);
    }
}
