//! The distances-to-dynamic-graph adapter: turns
//! [`DistancesData`] into a [`DynamicWeightedGraph`] with a single shared
//! nearest-sample weight function per undirected pair.

use std::sync::Arc;

use crate::accessor::DistancesData;
use crate::error::GraphError;
use crate::graph::{Convention, DynamicWeightedGraph, EdgeWeightFn};

/// The default constant (km/time-unit) used to convert a sampled distance
/// into a traversal time: the speed of light in km/s.
pub const FUNDAMENTAL_SPEED_CONSTANT: f64 = 299_792.0;

/// Converts [`DistancesData`] into a [`DynamicWeightedGraph`] on the
/// traversal-time convention.
pub struct DistancesToDynamicWeightedGraphAdapter {
	pub speed_constant: f64,
}

impl Default for DistancesToDynamicWeightedGraphAdapter {
	fn default() -> Self {
		Self {
			speed_constant: FUNDAMENTAL_SPEED_CONSTANT,
		}
	}
}

impl DistancesToDynamicWeightedGraphAdapter {
	pub fn with_speed_constant(speed_constant: f64) -> Self {
		Self { speed_constant }
	}

	/// Perform the conversion.
	pub fn adapt(&self, data: &DistancesData) -> Result<DynamicWeightedGraph, GraphError> {
		let mut graph = DynamicWeightedGraph::new(
			"traversal_time_graph",
			Convention::TraversalTime,
			false,
		);

		for satellite in &data.satellites {
			graph.add_vertex(satellite.clone())?;
		}

		let timestamps: Arc<[f64]> = Arc::from(data.distance_sample_timestamps.clone());

		for (source, targets) in &data.distances {
			for (target, samples) in targets {
				// Only one direction must be set per undirected pair; the
				// adjacency is symmetric in `data`.
				if graph.has_edge_weight(source, target) {
					continue;
				}

				let samples: Arc<[f64]> = Arc::from(samples.clone());
				let weight =
					EdgeWeightFn::nearest_sample(samples, timestamps.clone(), self.speed_constant);
				graph.define_edge_weight(source, target, weight)?;
			}
		}

		Ok(graph)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use indexmap::IndexMap;

	fn sample_data() -> DistancesData {
		let mut distances: IndexMap<String, IndexMap<String, Vec<f64>>> = IndexMap::new();
		let mut ab = IndexMap::new();
		ab.insert("b".to_string(), vec![299_792.0, 599_584.0]);
		distances.insert("a".to_string(), ab);
		let mut ba = IndexMap::new();
		ba.insert("a".to_string(), vec![299_792.0, 599_584.0]);
		distances.insert("b".to_string(), ba);

		DistancesData {
			satellites: vec!["a".to_string(), "b".to_string()],
			distances,
			distance_sample_timestamps: vec![0.0, 10.0],
		}
	}

	#[test]
	fn adapts_into_shared_undirected_edge() {
		let adapter = DistancesToDynamicWeightedGraphAdapter::default();
		let graph = adapter.adapt(&sample_data()).unwrap();

		assert!(graph.has_vertex("a"));
		assert!(graph.has_vertex("b"));
		assert!(graph.has_edge_weight("a", "b"));

		let w_ab = graph.get_edge_weight_fn("a", "b").unwrap();
		let w_ba = graph.get_edge_weight_fn("b", "a").unwrap();
		// distance 299_792.0 / speed constant 299_792.0 = 1.0 traversal time
		assert!((w_ab.call(0.0) - 1.0).abs() < 1e-9);
		assert!((w_ba.call(0.0) - 1.0).abs() < 1e-9);
	}
}
