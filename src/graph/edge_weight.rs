//! Edge-weight functions: a pure total
//! function `ℝ≥0 → ℝ≥0`, treated as a first-class value that may close over
//! per-edge data.
//!
//! A shared closure (`Arc<dyn Fn>`): the same function value is installed
//! on both directions of an undirected edge, and is callable concurrently
//! when the summarizer's `parallel` feature is used.

use std::sync::Arc;

use crate::graph::convention::Convention;
use crate::numeric::closest::closest_sorted_array_search;

/// A shared, callable edge-weight function `w(t)`.
#[derive(Clone)]
pub struct EdgeWeightFn(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl EdgeWeightFn {
	/// Wrap an arbitrary closure as an edge-weight function.
	pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
		Self(Arc::new(f))
	}

	/// A weight function constant in time.
	pub fn constant(value: f64) -> Self {
		Self::new(move |_t| value)
	}

	/// The convention's default weight function, used for any pair of known
	/// vertices with no explicitly-defined edge.
	pub fn default_for(convention: Convention) -> Self {
		Self::new(move |t| convention.default_weight(t))
	}

	/// A weight function backed by a sampled distance array: at time `t`,
	/// finds the nearest sample timestamp and returns `samples[index] / scale`.
	///
	/// This is the shape the distances accessor/adapter installs:
	/// `w(t) = d[nearest_index(timestamps, t)] / c`.
	pub fn nearest_sample(samples: Arc<[f64]>, timestamps: Arc<[f64]>, scale: f64) -> Self {
		Self::new(move |t| {
			let (index, _) = closest_sorted_array_search(&timestamps, t)
				.expect("nearest_sample edge weight installed with an empty timestamp array");
			samples[index] / scale
		})
	}

	/// Evaluate the weight at time `t`.
	pub fn call(&self, t: f64) -> f64 {
		(self.0)(t)
	}
}

impl std::fmt::Debug for EdgeWeightFn {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "EdgeWeightFn(..)")
	}
}
