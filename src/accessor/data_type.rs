//! Data shapes yielded by accessors: the accessor interface
//! yields an in-memory structure, never a graph directly — adapters (see
//! [`crate::adapter`]) turn these into the crate's graph types.

use indexmap::IndexMap;

pub type SatelliteName = String;
pub type VisibilityPercentage = f64;

/// Data yielded by [`crate::accessor::distances::DistancesAccessor`]:
/// pairwise sampled link distances plus the shared sample timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistancesData {
	pub satellites: Vec<SatelliteName>,
	pub distances: IndexMap<SatelliteName, IndexMap<SatelliteName, Vec<f64>>>,
	pub distance_sample_timestamps: Vec<f64>,
}

/// Data yielded by [`crate::accessor::connections::ConnectionsAccessor`]:
/// pairwise rise/set visibility windows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionsData {
	pub satellites: Vec<SatelliteName>,
	pub connections: IndexMap<SatelliteName, IndexMap<SatelliteName, Vec<(f64, f64)>>>,
}

/// Data yielded by [`crate::accessor::pared_down::ParedDownAccessor`]: a
/// symmetric visibility-percentage matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParedDownData {
	pub satellites: Vec<SatelliteName>,
	pub visibility: IndexMap<SatelliteName, IndexMap<SatelliteName, VisibilityPercentage>>,
}
