//! sinefit-core: amplitude, frequency, and phase estimation for noisy sinusoids
//!
//! This library implements four classic techniques for recovering the
//! parameters of a single real sinusoid from noisy samples:
//!
//! - [`BinDftEstimator`] - direct DFT coefficient at a known frequency bin
//! - [`PeakSearch`] - windowed coarse-to-fine DFT frequency search
//! - [`ZoomDftEstimator`] - zero-padded (fine-resolution) DFT evaluation
//! - [`linear_fit`] / [`GaussNewtonFit`] - linear and nonlinear least-squares
//!
//! All estimators share one model convention:
//!
//! ```text
//! y[n] = offset + amplitude * cos(2*pi*frequency*t[n] + phase)
//! ```
//!
//! # Core Types
//!
//! - [`Signal`] - samples with sample rate
//! - [`Sinusoid`] - the four model parameters
//! - [`WindowShape`] - spectral windows for leakage control

pub mod bin_dft;
pub mod dft;
pub mod least_squares;
pub mod search;
pub mod signal;
pub mod sinusoid;
pub mod window;
pub mod zoom;

pub mod utils;

// Re-export main types at crate root
pub use bin_dft::BinDftEstimator;
pub use least_squares::{linear_fit, GaussNewtonFit, SinusoidFit};
pub use search::PeakSearch;
pub use signal::Signal;
pub use sinusoid::Sinusoid;
pub use window::WindowShape;
pub use zoom::ZoomDftEstimator;

use thiserror::Error;

/// Errors that can occur in sinefit-core operations
#[derive(Error, Debug)]
pub enum SinefitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV decoding error: {0}")]
    WavDecode(#[from] hound::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Linear algebra error: {0}")]
    Linalg(String),
}

pub type Result<T> = std::result::Result<T, SinefitError>;
