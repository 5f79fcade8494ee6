//! Integral-bound solver: given a non-negative integrable
//! function, a lower bound, and a target, find the smallest upper bound `b`
//! such that `∫ₐᵇ f = target`, or `+inf` if no such `b` exists within
//! `max_upper_bound`.
//!
//! Two stages: [`bracket`] doubles the candidate upper bound until the
//! integral reaches `target`, then [`bisect`] narrows the bracket.
//! `MaxBoundReached` is swallowed locally and becomes `Ok(f64::INFINITY)`
//! rather than surfacing.

use crate::error::IntegralBoundError;
use crate::numeric::quadrature::integrate;

/// Numerical knobs for [`find_integral_bound`]. A small serde-derived
/// options struct loaded from config, with each field defaulting
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NumericalOptions {
	pub max_upper_bound: f64,
	pub tolerance: f64,
	pub max_iterations: u32,
}

impl Default for NumericalOptions {
	fn default() -> Self {
		Self {
			max_upper_bound: 1000.0,
			tolerance: 1e-4,
			max_iterations: 1000,
		}
	}
}

/// Bracket stage: repeatedly double the candidate upper bound until the
/// integral from `a` reaches `target`, or give up once `max_upper_bound` is
/// exceeded.
fn bracket(
	f: &dyn Fn(f64) -> f64,
	a: f64,
	target: f64,
	max_upper_bound: f64,
) -> Option<(f64, f64)> {
	let mut hi = a;

	while hi < max_upper_bound {
		let next_hi = (hi + 1.0) * 2.0;
		let (value, _) = integrate(f, a, next_hi);

		if value >= target {
			return Some((hi.max(a), next_hi));
		}

		hi = next_hi;
	}

	None
}

/// Bisection stage: narrow `(lo, hi)` until the integral from `a` to the
/// midpoint is within `tolerance` of `target`.
fn bisect(
	f: &dyn Fn(f64) -> f64,
	a: f64,
	target: f64,
	limits: (f64, f64),
	max_iterations: u32,
	tolerance: f64,
) -> Result<f64, IntegralBoundError> {
	let (mut lo, mut hi) = limits;

	for _ in 0..max_iterations {
		let mid = (lo + hi) / 2.0;
		let (value, _) = integrate(f, a, mid);
		let diff = value - target;

		if diff.abs() <= tolerance {
			return Ok(mid);
		}

		if value < target {
			lo = mid;
		} else {
			hi = mid;
		}
	}

	Err(IntegralBoundError::ToleranceNotReached { tolerance })
}

/// Find the smallest `b >= a` such that `|∫ₐᵇ f - target| <= tolerance`, or
/// `+inf` if no such `b` exists in `[a, max_upper_bound]`.
pub fn find_integral_bound(
	f: &dyn Fn(f64) -> f64,
	a: f64,
	target: f64,
	options: NumericalOptions,
) -> Result<f64, IntegralBoundError> {
	match bracket(f, a, target, options.max_upper_bound) {
		None => Ok(f64::INFINITY),
		Some(limits) => bisect(
			f,
			a,
			target,
			limits,
			options.max_iterations,
			options.tolerance,
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_function() {
		// integral of x from 0 is x^2/2; x^2/2=1 at x=sqrt(2)
		let b = find_integral_bound(&|x: f64| x, 0.0, 1.0, NumericalOptions::default()).unwrap();
		assert!((b - std::f64::consts::SQRT_2).abs() < 1e-7);
	}

	#[test]
	fn indicator_function() {
		let f = |x: f64| if (5.0..10.0).contains(&x) { 1.0 } else { 0.0 };
		let b = find_integral_bound(&f, 0.0, 1.0, NumericalOptions::default()).unwrap();
		assert!((b - 6.0).abs() < 1e-7);
	}

	#[test]
	fn max_bound_reached_returns_infinity() {
		let options = NumericalOptions {
			max_upper_bound: 5.0,
			..Default::default()
		};
		let b = find_integral_bound(&|x: f64| x, 0.0, 100.0, options).unwrap();
		assert!(b.is_infinite());
	}

	#[test]
	fn iteration_cap_errors() {
		let options = NumericalOptions {
			max_iterations: 1,
			..Default::default()
		};
		let err = find_integral_bound(&|x: f64| x, 0.0, 100.0, options).unwrap_err();
		assert!(matches!(err, IntegralBoundError::ToleranceNotReached { .. }));
	}

	#[test]
	fn monotone_in_target() {
		let f = |x: f64| x + 1.0;
		let small = find_integral_bound(&f, 0.0, 1.0, NumericalOptions::default()).unwrap();
		let large = find_integral_bound(&f, 0.0, 10.0, NumericalOptions::default()).unwrap();
		assert!(small < large);
	}
}
