//! Adapters: turn accessor data shapes into the crate's graph
//! types (or, for zigzag, into the input shape an external topology engine
//! would consume).

pub mod connections_to_zigzag;
pub mod distances_to_dynamic_graph;

pub use connections_to_zigzag::{ConnectionsToZigzagAdapter, NullZigzagEngine, ZigzagEngine, ZigzagFiltration};
pub use distances_to_dynamic_graph::{DistancesToDynamicWeightedGraphAdapter, FUNDAMENTAL_SPEED_CONSTANT};
