//! Summarizes a time-varying weighted graph into a static summary graph by
//! sampling foremost-journey participation across a simulation window.
//!
//! The core is three tightly coupled subsystems: a
//! [`graph::DynamicWeightedGraph`] whose edges carry time-parameterized
//! weight functions, a [`solver`] that computes earliest-arrival journeys
//! through it, and a [`summarize::JourneyTraversalSummarizer`] that samples
//! the solver across a time window into a [`graph::SummaryGraph`].
//! Surrounding functionality — tabular [`accessor`]s, the [`adapter`]s that
//! turn their output into graphs, and the CLI — is ambient plumbing around
//! that core.

pub mod accessor;
pub mod adapter;
pub mod error;
pub mod graph;
pub mod numeric;
pub mod solver;
pub mod summarize;

pub use error::SumgraphError;
pub use graph::{Convention, DynamicWeightedGraph, EdgeWeightFn, SummaryGraph};
pub use solver::{solve, ForemostJourneys};
pub use summarize::{JourneyTraversalSummarizer, SamplingConfig};
