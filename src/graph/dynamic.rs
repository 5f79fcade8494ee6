//! The dynamic weighted graph: a vertex set plus
//! per-edge time-parameterized weight functions, read-only once the solver
//! runs over it.
//!
//! Adjacency is a direct `IndexMap<String, IndexMap<String, EdgeWeightFn>>`:
//! `IndexMap` keeps vertex and edge iteration in insertion order, which
//! keeps tie-breaking in the solver deterministic.

use indexmap::{IndexMap, IndexSet};

use crate::error::GraphError;
use crate::graph::convention::Convention;
use crate::graph::edge_weight::EdgeWeightFn;

/// A vertex set plus per-edge time-parameterized weight functions.
#[derive(Debug, Clone)]
pub struct DynamicWeightedGraph {
	pub name: String,
	pub convention: Convention,
	pub directed: bool,
	vertex_set: IndexSet<String>,
	edge_set: IndexMap<String, IndexMap<String, EdgeWeightFn>>,
}

impl DynamicWeightedGraph {
	/// Construct a new, empty dynamic weighted graph.
	pub fn new(name: impl Into<String>, convention: Convention, directed: bool) -> Self {
		Self {
			name: name.into(),
			convention,
			directed,
			vertex_set: IndexSet::new(),
			edge_set: IndexMap::new(),
		}
	}

	/// Iterate over the vertex set, in insertion order.
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
	/// Fails with [`GraphError::DuplicateVertex`] if already present.
	pub fn add_vertex(&mut self, vertex: impl Into<String>) -> Result<(), GraphError> {
		let vertex = vertex.into();
		if self.has_vertex(&vertex) {
			return Err(GraphError::DuplicateVertex(vertex));
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

	/// Place a weight function on an edge. Both endpoints must already exist;
	/// the edge must not already have a weight.
	///
	/// For undirected graphs the reverse key is populated with the *same*
	/// function value (shared, not copied).
	pub fn define_edge_weight(
		&mut self,
		source: &str,
		target: &str,
		weight: EdgeWeightFn,
	) -> Result<(), GraphError> {
		if !self.has_vertex(source) {
			return Err(GraphError::UnknownVertex(source.to_string()));
		}
		if !self.has_vertex(target) {
			return Err(GraphError::UnknownVertex(target.to_string()));
		}
		if self.has_edge_weight(source, target) {
			return Err(GraphError::DuplicateEdge(
				source.to_string(),
				target.to_string(),
			));
		}

		self.edge_set
			.get_mut(source)
			.expect("source vertex checked above")
			.insert(target.to_string(), weight.clone());

		if !self.directed {
			self.edge_set
				.get_mut(target)
				.expect("target vertex checked above")
				.insert(source.to_string(), weight);
		}

		Ok(())
	}

	/// Get the weight function for `(source, target)`: the defined one if
	/// present, else the convention's default. Defined for every pair of
	/// known vertices regardless of whether an edge exists.
	///
	/// Fails only if either vertex is unknown.
	pub fn get_edge_weight_fn(&self, source: &str, target: &str) -> Result<EdgeWeightFn, GraphError> {
		if !self.has_vertex(source) {
			return Err(GraphError::UnknownVertex(source.to_string()));
		}
		if !self.has_vertex(target) {
			return Err(GraphError::UnknownVertex(target.to_string()));
		}

		if let Some(row) = self.edge_set.get(source) {
			if let Some(w) = row.get(target) {
				return Ok(w.clone());
			}
		}

		Ok(EdgeWeightFn::default_for(self.convention))
	}
}
