//! The connections-to-zigzag adapter: builds a simplex/time
//! filtration from [`ConnectionsData`] and hands it to a pluggable
//! [`ZigzagEngine`], which computes the actual persistence diagrams.
//!
//! The filtration has one 0-simplex per vertex (appearing at time 0) and
//! one 1-simplex per unordered pair with a flattened rise/set time list;
//! a pair already added in the other order is skipped so a real engine
//! never sees a duplicate simplex.

use crate::accessor::ConnectionsData;

/// A simplex/time filtration: `simplices[i]` is the vertex-index list for
/// the `i`-th simplex, and `times[i]` the flattened list of times at which
/// it appears in the filtration.
#[derive(Debug, Clone, PartialEq)]
pub struct ZigzagFiltration {
	pub satellites: Vec<String>,
	pub simplices: Vec<Vec<usize>>,
	pub times: Vec<Vec<f64>>,
}

/// A pluggable computational-topology backend. The core never depends on a
/// concrete implementation; a real one (e.g. a `dionysus`/`ripser`
/// equivalent, should one ever enter the ecosystem) would be wired in at
/// the call site.
pub trait ZigzagEngine {
	type Output;

	fn compute(&self, filtration: &ZigzagFiltration) -> Self::Output;
}

/// A test/placeholder engine that performs no actual homology computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullZigzagEngine;

impl ZigzagEngine for NullZigzagEngine {
	type Output = ZigzagFiltration;

	/// Returns the filtration it was handed, unchanged — useful for tests
	/// that only care the adapter built the right filtration.
	fn compute(&self, filtration: &ZigzagFiltration) -> ZigzagFiltration {
		filtration.clone()
	}
}

/// Converts [`ConnectionsData`] into a [`ZigzagFiltration`] and hands it to
/// an `E: ZigzagEngine`.
pub struct ConnectionsToZigzagAdapter<E> {
	engine: E,
}

impl<E: ZigzagEngine> ConnectionsToZigzagAdapter<E> {
	pub fn new(engine: E) -> Self {
		Self { engine }
	}

	/// Build the filtration without running the engine.
	pub fn build_filtration(data: &ConnectionsData) -> ZigzagFiltration {
		let mut simplices: Vec<Vec<usize>> = Vec::new();
		let mut times: Vec<Vec<f64>> = Vec::new();

		for (index, _) in data.satellites.iter().enumerate() {
			simplices.push(vec![index]);
			times.push(vec![0.0]);
		}

		for (source, targets) in &data.connections {
			for (target, windows) in targets {
				let source_index = data
					.satellites
					.iter()
					.position(|s| s == source)
					.expect("source is drawn from data.satellites");
				let target_index = data
					.satellites
					.iter()
					.position(|s| s == target)
					.expect("target is drawn from data.satellites");

				// Already added as [target, source] from the other
				// direction's iteration; adding it again would duplicate
				// the simplex (and crash a real homology engine).
				if simplices.contains(&vec![target_index, source_index]) {
					continue;
				}

				simplices.push(vec![source_index, target_index]);

				let mut simplex_times = Vec::new();
				for (rise, set) in windows {
					simplex_times.push(*rise);
					simplex_times.push(*set);
				}
				times.push(simplex_times);
			}
		}

		ZigzagFiltration {
			satellites: data.satellites.clone(),
			simplices,
			times,
		}
	}

	/// Build the filtration and run the engine over it.
	pub fn adapt(&self, data: &ConnectionsData) -> E::Output {
		let filtration = Self::build_filtration(data);
		self.engine.compute(&filtration)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use indexmap::IndexMap;

	fn sample_data() -> ConnectionsData {
		let mut connections: IndexMap<String, IndexMap<String, Vec<(f64, f64)>>> = IndexMap::new();
		let mut a = IndexMap::new();
		a.insert("b".to_string(), vec![(1.0, 2.0)]);
		connections.insert("a".to_string(), a);
		let mut b = IndexMap::new();
		b.insert("a".to_string(), vec![(1.0, 2.0)]);
		connections.insert("b".to_string(), b);

		ConnectionsData {
			satellites: vec!["a".to_string(), "b".to_string()],
			connections,
		}
	}

	#[test]
	fn builds_one_simplex_per_vertex_plus_one_per_undirected_pair() {
		let filtration = ConnectionsToZigzagAdapter::<NullZigzagEngine>::build_filtration(&sample_data());
		assert_eq!(filtration.simplices.len(), 3); // 2 vertices + 1 edge
		assert!(filtration.simplices.contains(&vec![0]));
		assert!(filtration.simplices.contains(&vec![1]));
		assert!(
			filtration.simplices.contains(&vec![0, 1])
				^ filtration.simplices.contains(&vec![1, 0])
		);
	}

	#[test]
	fn null_engine_returns_the_filtration_unchanged() {
		let adapter = ConnectionsToZigzagAdapter::new(NullZigzagEngine);
		let filtration = adapter.adapt(&sample_data());
		assert_eq!(filtration.satellites, vec!["a".to_string(), "b".to_string()]);
	}
}
