//! Least-squares sinusoid fits
//!
//! Two fits over the model `y = c + A*cos(2*pi*f*t + phi)`:
//!
//! - [`linear_fit`]: frequency known. The model is linear in
//!   `(A*cos(phi), -A*sin(phi), c)`, so one pseudo-inverse solve recovers
//!   amplitude, phase, and offset exactly (up to noise).
//! - [`GaussNewtonFit`]: all four parameters unknown. The model is
//!   linearized around the current estimate via its Jacobian and iterated
//!   until the residual norm stops changing.

use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};

use crate::sinusoid::wrap_phase;
use crate::utils::linalg::{pseudo_inverse, solve_least_squares};
use crate::{Result, Signal, SinefitError, Sinusoid};

/// Fit amplitude, phase, and offset at a known frequency
///
/// Builds the design matrix with columns `[cos(theta), sin(theta), 1]` where
/// `theta = 2*pi*frequency*t`, solves through the Moore-Penrose
/// pseudo-inverse, and recovers amplitude and phase from the two quadrature
/// coefficients by trigonometric identity.
///
/// # Errors
/// Returns an error for an empty signal, fewer than three samples, a
/// frequency outside `(0, Nyquist]`, or a failed pseudo-inverse.
///
/// # Example
/// ```
/// use sinefit_core::{linear_fit, Signal, Sinusoid};
/// use std::f64::consts::PI;
///
/// let truth = Sinusoid::new(2.0, 10.0, PI / 4.0, 0.1);
/// let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);
///
/// let est = linear_fit(&signal, 10.0).unwrap();
/// assert!((est.amplitude - 2.0).abs() < 1e-9);
/// assert!((est.offset - 0.1).abs() < 1e-9);
/// ```
pub fn linear_fit(signal: &Signal, frequency: f64) -> Result<Sinusoid> {
    let n = signal.num_samples();
    if n < 3 {
        return Err(SinefitError::InvalidParameter(
            "linear fit needs at least three samples".to_string(),
        ));
    }

    let nyquist = signal.sample_rate() / 2.0;
    if frequency <= 0.0 || frequency > nyquist {
        return Err(SinefitError::InvalidParameter(format!(
            "fit frequency {} Hz outside (0, {}] Hz",
            frequency, nyquist
        )));
    }

    let design = DMatrix::from_fn(n, 3, |i, j| {
        let theta = 2.0 * PI * frequency * signal.time_of(i);
        match j {
            0 => theta.cos(),
            1 => theta.sin(),
            _ => 1.0,
        }
    });
    let y = DVector::from_column_slice(signal.samples());

    let coeffs = pseudo_inverse(&design)? * y;
    let (a, b, c) = (coeffs[0], coeffs[1], coeffs[2]);

    // a*cos(theta) + b*sin(theta) = A*cos(theta + phi)
    // with A = hypot(a, b) and phi = atan2(-b, a)
    Ok(Sinusoid::new(a.hypot(b), frequency, (-b).atan2(a), c))
}

/// Result of an iterative nonlinear fit
#[derive(Debug, Clone, Copy)]
pub struct SinusoidFit {
    /// The fitted parameters
    pub estimate: Sinusoid,
    /// Number of Gauss-Newton iterations taken
    pub iterations: usize,
    /// Whether the residual norm change fell below the tolerance
    pub converged: bool,
    /// Euclidean norm of the final residual vector
    pub residual_norm: f64,
}

/// Gauss-Newton fit of all four sinusoid parameters
///
/// Starting from an initial guess, each iteration linearizes the model
/// around the current estimate, solves the linearized least-squares problem,
/// and applies the (optionally damped) update. Iteration stops when the
/// change in residual norm falls below the tolerance or the iteration cap
/// is reached; non-convergence is reported, not hidden.
#[derive(Debug, Clone, Copy)]
pub struct GaussNewtonFit {
    /// Maximum number of iterations
    max_iterations: usize,
    /// Convergence tolerance on the residual norm change
    tolerance: f64,
    /// Update damping factor (1.0 is a full Gauss-Newton step)
    step_size: f64,
}

impl Default for GaussNewtonFit {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            tolerance: 1e-10,
            step_size: 1.0,
        }
    }
}

impl GaussNewtonFit {
    /// Create a fit with the default configuration
    /// (300 iterations, 1e-10 tolerance, full steps)
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Override the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reduce the step size (can improve stability for poor initial guesses)
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Run the fit from an initial parameter guess
    ///
    /// # Errors
    /// Returns an error for a signal with fewer samples than the four model
    /// parameters, or a failed least-squares solve.
    pub fn fit(&self, signal: &Signal, initial: Sinusoid) -> Result<SinusoidFit> {
        let n = signal.num_samples();
        if n < 4 {
            return Err(SinefitError::InvalidParameter(
                "Gauss-Newton fit needs at least four samples".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SinefitError::InvalidParameter(
                "iteration cap must be at least one".to_string(),
            ));
        }

        let y = DVector::from_column_slice(signal.samples());
        let times: Vec<f64> = (0..n).map(|i| signal.time_of(i)).collect();

        let mut params = initial;
        let mut last_norm = f64::INFINITY;
        let mut iterations = 0;
        let mut converged = false;

        for _ in 0..self.max_iterations {
            iterations += 1;

            // Jacobian of the model at the current estimate:
            //   d/dA   =  cos(theta + phi)
            //   d/df   = -A * 2*pi*t * sin(theta + phi)
            //   d/dphi = -A * sin(theta + phi)
            //   d/dc   =  1
            let jacobian = DMatrix::from_fn(n, 4, |i, j| {
                let t = times[i];
                let angle = 2.0 * PI * params.frequency * t + params.phase;
                match j {
                    0 => angle.cos(),
                    1 => -params.amplitude * 2.0 * PI * t * angle.sin(),
                    2 => -params.amplitude * angle.sin(),
                    _ => 1.0,
                }
            });

            let residual = DVector::from_fn(n, |i, _| y[i] - params.sample(times[i]));
            let delta = solve_least_squares(&jacobian, &residual)?;

            params.amplitude += self.step_size * delta[0];
            params.frequency += self.step_size * delta[1];
            params.phase += self.step_size * delta[2];
            params.offset += self.step_size * delta[3];

            let norm = DVector::from_fn(n, |i, _| y[i] - params.sample(times[i])).norm();
            if (norm - last_norm).abs() < self.tolerance {
                converged = true;
                last_norm = norm;
                break;
            }
            last_norm = norm;
        }

        // A negative-amplitude solution is the same sinusoid with the phase
        // flipped by pi; canonicalize before reporting.
        if params.amplitude < 0.0 {
            params.amplitude = -params.amplitude;
            params.phase += PI;
        }
        params.phase = wrap_phase(params.phase);

        Ok(SinusoidFit {
            estimate: params,
            iterations,
            converged,
            residual_norm: last_norm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_fit_noiseless() {
        // The original scenario: A = 2, f = 10 Hz, phi = pi/4, fs = 1000
        let truth = Sinusoid::new(2.0, 10.0, PI / 4.0, 0.1);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);

        let est = linear_fit(&signal, 10.0).unwrap();

        assert_relative_eq!(est.amplitude, 2.0, epsilon = 1e-9);
        assert_relative_eq!(est.phase, PI / 4.0, epsilon = 1e-9);
        assert_relative_eq!(est.offset, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_fit_noisy() {
        let truth = Sinusoid::new(2.0, 10.0, PI / 4.0, 0.0);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
            .add_gaussian_noise(0.1, 42)
            .unwrap();

        let est = linear_fit(&signal, 10.0).unwrap();

        assert!((est.amplitude - 2.0).abs() / 2.0 < 0.01);
        assert!((est.phase - PI / 4.0).abs() < 0.01);
        assert!(est.offset.abs() < 0.02);
    }

    #[test]
    fn test_linear_fit_rejects_bad_input() {
        let tiny = Signal::from_samples(&[1.0, 2.0], 1000.0);
        assert!(linear_fit(&tiny, 10.0).is_err());

        let signal = Signal::from_samples(&[0.0; 100], 1000.0);
        assert!(linear_fit(&signal, 0.0).is_err());
        assert!(linear_fit(&signal, 600.0).is_err());
    }

    #[test]
    fn test_gauss_newton_noiseless() {
        let truth = Sinusoid::new(2.0, 10.555, PI / 4.0, 0.1);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);

        let initial = Sinusoid::new(2.5, 10.6, 0.5, 0.0);
        let fit = GaussNewtonFit::new().fit(&signal, initial).unwrap();

        assert!(fit.converged, "did not converge in {} iterations", fit.iterations);
        assert_relative_eq!(fit.estimate.amplitude, 2.0, epsilon = 1e-6);
        assert_relative_eq!(fit.estimate.frequency, 10.555, epsilon = 1e-6);
        assert_relative_eq!(fit.estimate.phase, PI / 4.0, epsilon = 1e-6);
        assert_relative_eq!(fit.estimate.offset, 0.1, epsilon = 1e-6);
        assert!(fit.residual_norm < 1e-6);
    }

    #[test]
    fn test_gauss_newton_noisy() {
        let truth = Sinusoid::new(2.0, 10.555, PI / 4.0, 0.1);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0)
            .add_gaussian_noise(0.1, 42)
            .unwrap();

        let initial = Sinusoid::new(2.2, 10.57, 0.6, 0.05);
        let fit = GaussNewtonFit::new().fit(&signal, initial).unwrap();

        assert!(fit.converged);
        assert!((fit.estimate.amplitude - 2.0).abs() / 2.0 < 0.02);
        assert!((fit.estimate.frequency - 10.555).abs() / 10.555 < 0.001);
        assert!((fit.estimate.phase - PI / 4.0).abs() < 0.05);
        assert!((fit.estimate.offset - 0.1).abs() < 0.05);
    }

    #[test]
    fn test_gauss_newton_reports_non_convergence() {
        let truth = Sinusoid::new(2.0, 10.555, PI / 4.0, 0.1);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);

        let initial = Sinusoid::new(2.5, 10.4, 0.0, 0.0);
        let fit = GaussNewtonFit::new()
            .with_max_iterations(2)
            .fit(&signal, initial)
            .unwrap();

        assert!(!fit.converged);
        assert_eq!(fit.iterations, 2);
    }

    #[test]
    fn test_gauss_newton_rejects_short_signal() {
        let signal = Signal::from_samples(&[1.0, 2.0, 3.0], 1000.0);
        let result = GaussNewtonFit::new().fit(&signal, Sinusoid::new(1.0, 10.0, 0.0, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_gauss_newton_damped_step() {
        // Half steps take longer but reach the same solution
        let truth = Sinusoid::new(2.0, 10.555, PI / 4.0, 0.1);
        let signal = Signal::from_sinusoid(&truth, 1000, 1000.0);

        let initial = Sinusoid::new(2.5, 10.6, 0.5, 0.0);
        let full = GaussNewtonFit::new().fit(&signal, initial).unwrap();
        let damped = GaussNewtonFit::new()
            .with_step_size(0.5)
            .fit(&signal, initial)
            .unwrap();

        assert!(damped.converged);
        assert!(damped.iterations >= full.iterations);
        assert_relative_eq!(
            damped.estimate.frequency,
            full.estimate.frequency,
            epsilon = 1e-6
        );
    }
}
