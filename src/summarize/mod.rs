//! The journey-traversal summarizer: samples the
//! foremost-journey solver across a time window and accumulates edge
//! participation into a summary graph.
//!
//! Three nested loops: time samples, then sources, then targets. The
//! `parallel` feature fans the outer loop out across `rayon` workers, each
//! accumulating into its own summary graph, reduced by pointwise sum
//! afterwards.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::SummarizerError;
use crate::graph::{Convention, DynamicWeightedGraph, SummaryGraph};
use crate::numeric::NumericalOptions;
use crate::solver::solve;

/// The sampling window and resolution for a summarization run: a small
/// serde-derived config struct, the same shape `NumericalOptions` uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
	pub start_time: f64,
	pub end_time: f64,
	pub iterations: u32,
}

/// Samples the foremost-journey solver across `config`'s window and
/// accumulates edge participation into a summary graph.
pub struct JourneyTraversalSummarizer<'g> {
	graph: &'g DynamicWeightedGraph,
	config: SamplingConfig,
	numerical_options: NumericalOptions,
}

impl<'g> JourneyTraversalSummarizer<'g> {
	/// Construct a summarizer over `graph`. Fails with
	/// [`SummarizerError::WrongConvention`] unless `graph` uses the
	/// traversal-time convention — rejected at construction rather than at
	/// summarize-time.
	pub fn new(
		graph: &'g DynamicWeightedGraph,
		config: SamplingConfig,
		numerical_options: NumericalOptions,
	) -> Result<Self, SummarizerError> {
		if graph.convention != Convention::TraversalTime {
			return Err(SummarizerError::WrongConvention);
		}
		Ok(Self {
			graph,
			config,
			numerical_options,
		})
	}

	fn sample_departure_times(&self) -> Vec<f64> {
		let n = self.config.iterations;
		let delta = (self.config.end_time - self.config.start_time) / n as f64;
		(0..n)
			.map(|k| self.config.start_time + k as f64 * delta)
			.collect()
	}

	fn participation_weight(&self) -> f64 {
		1.0 / self.config.iterations as f64
	}

	fn empty_summary(&self) -> Result<SummaryGraph, SummarizerError> {
		let mut summary = SummaryGraph::new(format!("{}_summary", self.graph.name));
		for v in self.graph.vertices() {
			summary.add_vertex(v)?;
		}
		Ok(summary)
	}

	/// Accumulate one time sample's contribution (every source, every
	/// reconstructed target path) into `summary`.
	fn accumulate_sample(&self, t_k: f64, phi: f64, summary: &mut SummaryGraph) -> Result<(), SummarizerError> {
		for source in self.graph.vertices() {
			let journeys = solve(self.graph, source, t_k, self.numerical_options)?;
			for target in self.graph.vertices() {
				let path = journeys.reconstruct_path(target)?;
				for pair in path.windows(2) {
					summary.accumulate_edge_weight(&pair[0], &pair[1], phi)?;
				}
			}
		}
		Ok(())
	}

	/// Run the summarization sequentially, single-threaded. Checks `cancel`
	/// between time samples; aborts with
	/// [`SummarizerError::Cancelled`] without returning a partial summary.
	pub fn summarize(&self, cancel: Option<&AtomicBool>) -> Result<SummaryGraph, SummarizerError> {
		let mut summary = self.empty_summary()?;
		let phi = self.participation_weight();

		for t_k in self.sample_departure_times() {
			if cancel.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
				return Err(SummarizerError::Cancelled);
			}
			self.accumulate_sample(t_k, phi, &mut summary)?;
		}

		Ok(summary)
	}

	/// Run the summarization with the outer loop over time samples fanned
	/// out across a `rayon` thread pool; each worker accumulates into its
	/// own summary graph, reduced by pointwise sum afterwards.
	///
	/// Cancellation is still checked, just per-worker rather than strictly
	/// between every sample — the observable result is identical up to
	/// floating-point associativity.
	#[cfg(feature = "parallel")]
	pub fn summarize_parallel(&self, cancel: Option<&AtomicBool>) -> Result<SummaryGraph, SummarizerError> {
		use rayon::prelude::*;

		let phi = self.participation_weight();
		let samples = self.sample_departure_times();

		let partials: Vec<SummaryGraph> = samples
			.into_par_iter()
			.map(|t_k| -> Result<SummaryGraph, SummarizerError> {
				if cancel.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
					return Err(SummarizerError::Cancelled);
				}
				let mut local = self.empty_summary()?;
				self.accumulate_sample(t_k, phi, &mut local)?;
				Ok(local)
			})
			.collect::<Result<Vec<_>, _>>()?;

		let mut total = self.empty_summary()?;
		for partial in partials {
			total = total.sum(&partial)?;
		}
		Ok(total)
	}
}
