//! The summary graph: a static vertex set plus per-edge
//! accumulated participation fractions, produced by the summarizer and
//! summed across sampling workers.
//!
//! Same `IndexMap`-adjacency shape as
//! [`crate::graph::dynamic::DynamicWeightedGraph`], except edge values here
//! are plain `f64` accumulators rather than functions.

use indexmap::{IndexMap, IndexSet};

use crate::error::SummaryGraphError;

/// A vertex set plus per-edge accumulated `f64` weight.
#[derive(Debug, Clone)]
pub struct SummaryGraph {
	pub name: String,
	vertex_set: IndexSet<String>,
	edge_set: IndexMap<String, IndexMap<String, f64>>,
}

impl SummaryGraph {
	/// Construct a new, empty summary graph.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			vertex_set: IndexSet::new(),
			edge_set: IndexMap::new(),
		}
	}

	pub fn vertices(&self) -> impl Iterator<Item = &str> {
		self.vertex_set.iter().map(String::as_str)
	}

	pub fn vertex_count(&self) -> usize {
		self.vertex_set.len()
	}

	pub fn has_vertex(&self, vertex: &str) -> bool {
		self.vertex_set.contains(vertex)
	}

	/// Add a vertex to the vertex set.
	///
	/// Fails with [`SummaryGraphError::DuplicateVertex`] if already present.
	pub fn add_vertex(&mut self, vertex: impl Into<String>) -> Result<(), SummaryGraphError> {
		let vertex = vertex.into();
		if self.has_vertex(&vertex) {
			return Err(SummaryGraphError::DuplicateVertex(vertex));
		}
		self.vertex_set.insert(vertex.clone());
		self.edge_set.insert(vertex, IndexMap::new());
		Ok(())
	}

	pub fn has_edge_weight(&self, source: &str, target: &str) -> bool {
		if !self.has_vertex(source) || !self.has_vertex(target) {
			return false;
		}
		self.edge_set
			.get(source)
			.is_some_and(|row| row.contains_key(target))
	}

	/// The weight accumulated on `(source, target)`, or `0.0` if unset.
	///
	/// Fails if either vertex is unknown.
	pub fn get_edge_weight(&self, source: &str, target: &str) -> Result<f64, SummaryGraphError> {
		if !self.has_vertex(source) {
			return Err(SummaryGraphError::UnknownVertex(source.to_string()));
		}
		if !self.has_vertex(target) {
			return Err(SummaryGraphError::UnknownVertex(target.to_string()));
		}
		Ok(self
			.edge_set
			.get(source)
			.and_then(|row| row.get(target))
			.copied()
			.unwrap_or(0.0))
	}

	/// Overwrite the weight on `(source, target)`. Both endpoints must exist.
	pub fn set_edge_weight(
		&mut self,
		source: &str,
		target: &str,
		weight: f64,
	) -> Result<(), SummaryGraphError> {
		if !self.has_vertex(source) {
			return Err(SummaryGraphError::UnknownVertex(source.to_string()));
		}
		if !self.has_vertex(target) {
			return Err(SummaryGraphError::UnknownVertex(target.to_string()));
		}
		self.edge_set
			.get_mut(source)
			.expect("source vertex checked above")
			.insert(target.to_string(), weight);
		Ok(())
	}

	/// Add `delta` to the weight on `(source, target)`, starting from `0.0`
	/// if unset. Both endpoints must exist.
	pub fn accumulate_edge_weight(
		&mut self,
		source: &str,
		target: &str,
		delta: f64,
	) -> Result<(), SummaryGraphError> {
		let current = self.get_edge_weight(source, target)?;
		self.set_edge_weight(source, target, current + delta)
	}

	/// Pointwise-sum two summary graphs over the same vertex set, producing
	/// a new summary graph. Used to reduce per-worker accumulators when the
	/// summarizer's `parallel` feature fans sampling out across threads.
	///
	/// Fails with [`SummaryGraphError::VertexSetMismatch`] if the vertex sets
	/// (as sets, independent of insertion order) differ.
	pub fn sum(&self, other: &SummaryGraph) -> Result<SummaryGraph, SummaryGraphError> {
		let self_vertices: IndexSet<&str> = self.vertex_set.iter().map(String::as_str).collect();
		let other_vertices: IndexSet<&str> = other.vertex_set.iter().map(String::as_str).collect();
		if self_vertices != other_vertices {
			return Err(SummaryGraphError::VertexSetMismatch);
		}

		let mut result = SummaryGraph::new(self.name.clone());
		for vertex in self.vertices() {
			result.add_vertex(vertex).expect("vertex set is disjoint by construction");
		}

		for source in self.vertices() {
			for target in self.vertices() {
				let weight = self.get_edge_weight(source, target)? + other.get_edge_weight(source, target)?;
				if weight != 0.0 {
					result.set_edge_weight(source, target, weight)?;
				}
			}
		}

		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph_with(vertices: &[&str]) -> SummaryGraph {
		let mut g = SummaryGraph::new("g");
		for v in vertices {
			g.add_vertex(*v).unwrap();
		}
		g
	}

	#[test]
	fn unset_edge_defaults_to_zero() {
		let g = graph_with(&["a", "b"]);
		assert_eq!(g.get_edge_weight("a", "b").unwrap(), 0.0);
	}

	#[test]
	fn accumulate_adds_to_existing() {
		let mut g = graph_with(&["a", "b"]);
		g.accumulate_edge_weight("a", "b", 0.25).unwrap();
		g.accumulate_edge_weight("a", "b", 0.25).unwrap();
		assert_eq!(g.get_edge_weight("a", "b").unwrap(), 0.5);
	}

	#[test]
	fn sum_adds_pointwise() {
		let mut a = graph_with(&["a", "b"]);
		a.set_edge_weight("a", "b", 0.3).unwrap();
		let mut b = graph_with(&["a", "b"]);
		b.set_edge_weight("a", "b", 0.4).unwrap();

		let summed = a.sum(&b).unwrap();
		assert!((summed.get_edge_weight("a", "b").unwrap() - 0.7).abs() < 1e-12);
	}

	#[test]
	fn sum_rejects_mismatched_vertex_sets() {
		let a = graph_with(&["a", "b"]);
		let b = graph_with(&["a", "c"]);
		assert_eq!(a.sum(&b).unwrap_err(), SummaryGraphError::VertexSetMismatch);
	}

	#[test]
	fn duplicate_vertex_fails() {
		let mut g = graph_with(&["a"]);
		assert_eq!(
			g.add_vertex("a").unwrap_err(),
			SummaryGraphError::DuplicateVertex("a".to_string())
		);
	}
}
