//! Error taxonomy: one `thiserror` variant per surfaced failure
//! mode, composed into [`SumgraphError`] at the crate boundary.

use thiserror::Error;

/// Errors from the sorted-array nearest-neighbor search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClosestSearchError {
	#[error("array is empty")]
	EmptyArray,
}

/// Errors from the integral-bound solver.
///
/// `MaxBoundReached` is intentionally not part of this enum: the bracket
/// stage recovers it locally and returns `+inf`, so it never surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegralBoundError {
	#[error("max iterations reached but integral solution was not found (target within tolerance {tolerance})")]
	ToleranceNotReached { tolerance: f64 },
}

/// Errors from [`crate::graph::dynamic::DynamicWeightedGraph`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	#[error("vertex {0} is already in vertex_set")]
	DuplicateVertex(String),
	#[error("vertex {0} is not in graph")]
	UnknownVertex(String),
	#[error("edge weight already defined between {0} and {1}")]
	DuplicateEdge(String, String),
}

/// Errors from [`crate::graph::summary::SummaryGraph`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryGraphError {
	#[error("vertex {0} is already in vertex_set")]
	DuplicateVertex(String),
	#[error("vertex {0} is not in graph")]
	UnknownVertex(String),
	#[error("edge weight already defined between {0} and {1}")]
	DuplicateEdge(String, String),
	#[error("vertex sets do not match between the two summary graphs being summed")]
	VertexSetMismatch,
}

/// Errors from the foremost-journey solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
	#[error(transparent)]
	Graph(#[from] GraphError),
	#[error(transparent)]
	IntegralBound(#[from] IntegralBoundError),
	#[error("predecessor chain for vertex {0} is broken: hit an unset predecessor before reaching the source")]
	BrokenPredecessorChain(String),
}

/// Errors from the journey-traversal summarizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizerError {
	#[error("journey traversal summarization only works with the traversal time convention")]
	WrongConvention,
	#[error(transparent)]
	Solver(#[from] SolverError),
	#[error(transparent)]
	SummaryGraph(#[from] SummaryGraphError),
	#[error("summarization was cancelled")]
	Cancelled,
}

/// Errors from accessors.
#[derive(Error, Debug)]
pub enum AccessorError {
	#[error("io error reading accessor input: {0}")]
	Io(#[from] std::io::Error),
	#[error("csv error reading accessor input: {0}")]
	Csv(#[from] csv::Error),
	#[error("could not parse header: {0}")]
	UnparseableHeader(String),
	#[error("could not parse numeric value: {0:?}")]
	UnparseableValue(String),
	#[error("datafile does not contain a unique secondary analysis block (found {0})")]
	AmbiguousAnalysisBlock(usize),
	#[error("could not parse visibility percentage from {0:?}")]
	UnparseablePercentage(String),
	#[error("missing expected column: {0}")]
	MissingColumn(String),
}

/// Crate-wide umbrella error, used at CLI/adapter boundaries.
#[derive(Error, Debug)]
pub enum SumgraphError {
	#[error(transparent)]
	ClosestSearch(#[from] ClosestSearchError),
	#[error(transparent)]
	IntegralBound(#[from] IntegralBoundError),
	#[error(transparent)]
	Graph(#[from] GraphError),
	#[error(transparent)]
	SummaryGraph(#[from] SummaryGraphError),
	#[error(transparent)]
	Solver(#[from] SolverError),
	#[error(transparent)]
	Summarizer(#[from] SummarizerError),
	#[error(transparent)]
	Accessor(#[from] AccessorError),
	#[error(transparent)]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	#[error(transparent)]
	Yaml(#[from] serde_yaml::Error),
}
