//! Graph types: the dynamic weighted graph the solver reads
//! from, and the summary graph the summarizer writes into.

pub mod convention;
pub mod dynamic;
pub mod edge_weight;
pub mod summary;

pub use convention::Convention;
pub use dynamic::DynamicWeightedGraph;
pub use edge_weight::EdgeWeightFn;
pub use summary::SummaryGraph;
