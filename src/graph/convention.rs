//! Conventions tagging a [`crate::graph::dynamic::DynamicWeightedGraph`]:
//! what an edge weight *means*, and what "no edge" defaults to.

use serde::{Deserialize, Serialize};

/// What an edge weight represents, and by extension what the default weight
/// function for an undefined edge should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Convention {
	/// `w(t)` is a rate of progress; an undefined edge can never be crossed
	/// (`+inf`).
	TraversalTime,
	/// `w(t)` is an instantaneous cost; an undefined edge can never be
	/// crossed (`+inf`).
	Cost,
	/// `w(t)` is an instantaneous capacity; an undefined edge carries no
	/// flow (`0`).
	Capacity,
}

impl Convention {
	/// The default weight at time `t` for a pair of vertices with no
	/// explicitly-defined edge.
	pub fn default_weight(self, _t: f64) -> f64 {
		match self {
			Convention::TraversalTime | Convention::Cost => f64::INFINITY,
			Convention::Capacity => 0.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn traversal_time_defaults_to_infinite() {
		assert!(Convention::TraversalTime.default_weight(0.0).is_infinite());
	}

	#[test]
	fn capacity_defaults_to_zero() {
		assert_eq!(Convention::Capacity.default_weight(42.0), 0.0);
	}
}
