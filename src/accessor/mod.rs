//! Accessors: tabular input parsers that are an external
//! collaborator to the core, yielding the in-memory data shapes adapters
//! turn into graphs.

pub mod connections;
pub mod data_type;
pub mod distances;
pub mod file_based;
pub mod pared_down;

pub use connections::ConnectionsAccessor;
pub use data_type::{ConnectionsData, DistancesData, ParedDownData};
pub use distances::DistancesAccessor;
pub use file_based::{Accessor, FileBasedAccessor};
pub use pared_down::ParedDownAccessor;
