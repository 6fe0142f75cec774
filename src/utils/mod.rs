//! Utility modules for signal processing
//!
//! Low-level helpers used by the estimators: an FFT wrapper for the
//! coarse spectrum scan, and pseudo-inverse plumbing for the
//! least-squares fits.

pub mod fft;
pub mod linalg;

pub use fft::Fft;
pub use linalg::{pseudo_inverse, solve_least_squares};
