//! The foremost-journey solver: Dijkstra over departure
//! times, where each relaxation solves an integral-bound equation instead of
//! adding a static weight.
//!
//! Vertex selection uses a `priority_queue::PriorityQueue` keyed by arrival
//! time for decrease-key-style greedy selection. Each relaxation updates the
//! predecessor to the vertex just finalized (`π(v) ← u`), so the
//! predecessor chain always reconstructs to a real multi-hop path back to
//! the source.

use std::cmp::Reverse;

use indexmap::{IndexMap, IndexSet};
use noisy_float::types::{n64, N64};
use priority_queue::PriorityQueue;

use crate::error::SolverError;
use crate::graph::DynamicWeightedGraph;
use crate::numeric::{find_integral_bound, NumericalOptions};

/// Earliest-arrival times and a predecessor tree rooted at the source,
/// produced by a single [`solve`] invocation.
#[derive(Debug, Clone)]
pub struct ForemostJourneys {
	source: String,
	arrival: IndexMap<String, f64>,
	predecessor: IndexMap<String, Option<String>>,
}

impl ForemostJourneys {
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Earliest arrival time at `v`, or `+inf` if unreachable / unknown.
	pub fn arrival_time(&self, v: &str) -> f64 {
		self.arrival.get(v).copied().unwrap_or(f64::INFINITY)
	}

	/// Reconstruct the journey from the source to `v`, earliest hop first.
	/// Empty if `v` is unreachable (no predecessor was ever set).
	///
	/// Fails with [`SolverError::BrokenPredecessorChain`] if the chain
	/// doesn't lead back to the source before running out of predecessors
	/// (an internal invariant violation; should never happen on a
	/// consistent [`ForemostJourneys`]).
	pub fn reconstruct_path(&self, v: &str) -> Result<Vec<String>, SolverError> {
		if v == self.source {
			return Ok(vec![self.source.clone()]);
		}

		let Some(Some(_)) = self.predecessor.get(v) else {
			return Ok(Vec::new());
		};

		let mut path = vec![v.to_string()];
		let mut current = v.to_string();

		loop {
			match self.predecessor.get(&current) {
				Some(Some(prev)) => {
					path.push(prev.clone());
					if *prev == self.source {
						break;
					}
					current = prev.clone();
				}
				_ => return Err(SolverError::BrokenPredecessorChain(v.to_string())),
			}
		}

		path.reverse();
		Ok(path)
	}
}

/// Replace `+inf` (and any other non-finite value) with `0` inside an
/// integrand, so a temporarily broken link contributes nothing to the
/// integral rather than poisoning it with a non-finite value.
fn zero_for_nonfinite(w: impl Fn(f64) -> f64) -> impl Fn(f64) -> f64 {
	move |t| {
		let value = w(t);
		if value.is_finite() {
			value
		} else {
			0.0
		}
	}
}

/// Solve for the foremost journeys from `source` departing at `t0`.
///
/// Fails with [`SolverError::Graph`] (wrapping `GraphError::UnknownVertex`)
/// if `source` isn't in `graph`.
pub fn solve(
	graph: &DynamicWeightedGraph,
	source: &str,
	t0: f64,
	options: NumericalOptions,
) -> Result<ForemostJourneys, SolverError> {
	if !graph.has_vertex(source) {
		return Err(crate::error::GraphError::UnknownVertex(source.to_string()).into());
	}

	let mut arrival: IndexMap<String, f64> = IndexMap::new();
	let mut predecessor: IndexMap<String, Option<String>> = IndexMap::new();
	let mut pq: PriorityQueue<String, Reverse<N64>> = PriorityQueue::new();

	for v in graph.vertices() {
		let tau = if v == source { t0 } else { f64::INFINITY };
		arrival.insert(v.to_string(), tau);
		predecessor.insert(v.to_string(), None);
		pq.push(v.to_string(), Reverse(n64(tau)));
	}

	let mut finalized: IndexSet<String> = IndexSet::new();

	while let Some((u, _)) = pq.pop() {
		finalized.insert(u.clone());
		let tau_u = arrival[&u];

		if tau_u.is_infinite() {
			// Every remaining vertex is unreachable from here on; no
			// relaxation through an infinite-arrival vertex can improve
			// anything, so stop early.
			continue;
		}

		for v in graph.vertices() {
			if v == u || finalized.contains(v) {
				continue;
			}

			let w = graph.get_edge_weight_fn(&u, v)?;
			let integrand = zero_for_nonfinite(move |t| w.call(t));
			let delta = find_integral_bound(&integrand, tau_u, 1.0, options)?.max(0.0);
			let candidate = tau_u + delta;

			if candidate < arrival[v] {
				arrival.insert(v.to_string(), candidate);
				predecessor.insert(v.to_string(), Some(u.clone()));
				pq.change_priority(v, Reverse(n64(candidate)));
			}
		}
	}

	Ok(ForemostJourneys {
		source: source.to_string(),
		arrival,
		predecessor,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Convention, EdgeWeightFn};

	fn line_graph() -> DynamicWeightedGraph {
		let mut g = DynamicWeightedGraph::new("g", Convention::TraversalTime, false);
		g.add_vertex("a").unwrap();
		g.add_vertex("b").unwrap();
		g.add_vertex("c").unwrap();
		g.define_edge_weight("a", "b", EdgeWeightFn::constant(1.0))
			.unwrap();
		g.define_edge_weight("b", "c", EdgeWeightFn::constant(1.0))
			.unwrap();
		g
	}

	#[test]
	fn source_arrival_is_departure_time() {
		let g = line_graph();
		let result = solve(&g, "a", 5.0, NumericalOptions::default()).unwrap();
		assert_eq!(result.arrival_time("a"), 5.0);
	}

	#[test]
	fn arrival_increases_with_hops() {
		let g = line_graph();
		let result = solve(&g, "a", 0.0, NumericalOptions::default()).unwrap();
		assert!(result.arrival_time("b") >= result.arrival_time("a"));
		assert!(result.arrival_time("c") >= result.arrival_time("b"));
		assert!((result.arrival_time("b") - 1.0).abs() < 1e-6);
		assert!((result.arrival_time("c") - 2.0).abs() < 1e-6);
	}

	#[test]
	fn path_reconstruction_follows_corrected_predecessor() {
		let g = line_graph();
		let result = solve(&g, "a", 0.0, NumericalOptions::default()).unwrap();
		let path = result.reconstruct_path("c").unwrap();
		assert_eq!(path, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
	}

	#[test]
	fn unreachable_vertex_has_empty_path() {
		let mut g = DynamicWeightedGraph::new("g", Convention::TraversalTime, false);
		g.add_vertex("a").unwrap();
		g.add_vertex("isolated").unwrap();
		let result = solve(&g, "a", 0.0, NumericalOptions::default()).unwrap();
		assert!(result.arrival_time("isolated").is_infinite());
		assert!(result.reconstruct_path("isolated").unwrap().is_empty());
	}

	#[test]
	fn unknown_source_fails() {
		let g = line_graph();
		let err = solve(&g, "nowhere", 0.0, NumericalOptions::default()).unwrap_err();
		assert!(matches!(err, SolverError::Graph(_)));
	}
}
