//! The foremost-journey solver: source-to-all shortest
//! time-respecting journeys in a dynamic weighted graph, given a departure
//! time.

pub mod foremost;

pub use foremost::{solve, ForemostJourneys};
