//! CLI entry point: accessor path(s) in, summary-graph or foremost-journey
//! JSON out.
//!
//! `env_logger::init_from_env` at startup, one `clap` derive subcommand per
//! solver.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use clap::{Parser, Subcommand};
use serde::Serialize;

use sumgraph::accessor::{Accessor, DistancesAccessor};
use sumgraph::adapter::DistancesToDynamicWeightedGraphAdapter;
use sumgraph::numeric::closest_sorted_array_search;
use sumgraph::numeric::NumericalOptions;
use sumgraph::solver::solve;
use sumgraph::summarize::{JourneyTraversalSummarizer, SamplingConfig};
use sumgraph::SumgraphError;

#[derive(Parser)]
#[command(name = "sumgraph", version, about = "Summarize a dynamic weighted graph's foremost journeys")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Sample the foremost-journey solver across a time window, writing a
	/// summary graph as JSON.
	Summarize {
		/// Path to a distances-format CSV.
		#[arg(long)]
		distances: PathBuf,
		#[arg(long)]
		start: f64,
		#[arg(long)]
		end: f64,
		#[arg(long)]
		iterations: u32,
		/// Distance-to-traversal-time scaling constant.
		#[arg(long, default_value_t = DistancesToDynamicWeightedGraphAdapter::default().speed_constant)]
		speed_constant: f64,
		#[arg(long)]
		output: PathBuf,
		/// Run the sampling loop with the `parallel` feature's rayon fan-out.
		#[arg(long, default_value_t = false)]
		parallel: bool,
		/// Path to a YAML file overriding the integral-bound solver's
		/// numerical knobs (see `NumericalOptions`). Defaults are used for
		/// any field the file omits.
		#[arg(long)]
		options: Option<PathBuf>,
	},
	/// Solve one foremost-journey instance, writing arrival times and paths
	/// as JSON.
	Solve {
		#[arg(long)]
		distances: PathBuf,
		#[arg(long)]
		source: String,
		#[arg(long)]
		departure: f64,
		#[arg(long, default_value_t = DistancesToDynamicWeightedGraphAdapter::default().speed_constant)]
		speed_constant: f64,
		#[arg(long)]
		output: PathBuf,
		/// Path to a YAML file overriding the integral-bound solver's
		/// numerical knobs (see `NumericalOptions`). Defaults are used for
		/// any field the file omits.
		#[arg(long)]
		options: Option<PathBuf>,
	},
	/// Look up the nearest entry in a sorted array of sample times.
	Closest {
		/// Comma-separated ascending sample times.
		#[arg(long, value_delimiter = ',')]
		array: Vec<f64>,
		#[arg(long)]
		target: f64,
	},
}

#[derive(Serialize)]
struct SummaryEdge {
	source: String,
	target: String,
	weight: f64,
}

#[derive(Serialize)]
struct SummarizeOutput {
	vertices: Vec<String>,
	edges: Vec<SummaryEdge>,
}

#[derive(Serialize)]
struct JourneyResult {
	vertex: String,
	arrival_time: f64,
	path: Vec<String>,
}

#[derive(Serialize)]
struct SolveOutput {
	source: String,
	departure_time: f64,
	journeys: Vec<JourneyResult>,
}

/// Load [`NumericalOptions`] from a YAML file, falling back to its defaults
/// when no path is given. A small serde-derived struct read with
/// `serde_yaml`, the same shape as the sampling config.
fn load_numerical_options(path: &Option<PathBuf>) -> Result<NumericalOptions, SumgraphError> {
	match path {
		Some(path) => {
			let file = File::open(path)?;
			Ok(serde_yaml::from_reader(file)?)
		}
		None => Ok(NumericalOptions::default()),
	}
}

fn run() -> Result<(), SumgraphError> {
	let cli = Cli::parse();

	match cli.command {
		Command::Summarize {
			distances,
			start,
			end,
			iterations,
			speed_constant,
			output,
			parallel,
			options,
		} => {
			log::info!("reading distances accessor: {}", distances.display());
			let mut accessor = DistancesAccessor::new(distances);
			accessor.run()?;

			let adapter = DistancesToDynamicWeightedGraphAdapter::with_speed_constant(speed_constant);
			let graph = adapter.adapt(accessor.data())?;

			let config = SamplingConfig {
				start_time: start,
				end_time: end,
				iterations,
			};
			let numerical_options = load_numerical_options(&options)?;
			let summarizer = JourneyTraversalSummarizer::new(&graph, config, numerical_options)?;

			let cancel = AtomicBool::new(false);
			let summary = if parallel {
				#[cfg(feature = "parallel")]
				{
					summarizer.summarize_parallel(Some(&cancel))?
				}
				#[cfg(not(feature = "parallel"))]
				{
					log::warn!("built without the `parallel` feature; running sequentially");
					summarizer.summarize(Some(&cancel))?
				}
			} else {
				summarizer.summarize(Some(&cancel))?
			};

			let vertices: Vec<String> = summary.vertices().map(String::from).collect();
			let mut edges = Vec::new();
			for source in &vertices {
				for target in &vertices {
					let weight = summary.get_edge_weight(source, target)?;
					if weight != 0.0 {
						edges.push(SummaryEdge {
							source: source.clone(),
							target: target.clone(),
							weight,
						});
					}
				}
			}

			let result = SummarizeOutput { vertices, edges };
			let mut file = File::create(&output)?;
			file.write_all(serde_json::to_string_pretty(&result)?.as_bytes())?;
			log::info!("wrote summary graph to {}", output.display());
		}

		Command::Solve {
			distances,
			source,
			departure,
			speed_constant,
			output,
			options,
		} => {
			log::info!("reading distances accessor: {}", distances.display());
			let mut accessor = DistancesAccessor::new(distances);
			accessor.run()?;

			let adapter = DistancesToDynamicWeightedGraphAdapter::with_speed_constant(speed_constant);
			let graph = adapter.adapt(accessor.data())?;

			let numerical_options = load_numerical_options(&options)?;
			let journeys = solve(&graph, &source, departure, numerical_options)?;

			let mut results = Vec::new();
			for vertex in graph.vertices() {
				let path = journeys.reconstruct_path(vertex)?;
				results.push(JourneyResult {
					vertex: vertex.to_string(),
					arrival_time: journeys.arrival_time(vertex),
					path,
				});
			}

			let result = SolveOutput {
				source,
				departure_time: departure,
				journeys: results,
			};
			let mut file = File::create(&output)?;
			file.write_all(serde_json::to_string_pretty(&result)?.as_bytes())?;
			log::info!("wrote foremost-journey result to {}", output.display());
		}

		Command::Closest { array, target } => {
			let (index, value) = closest_sorted_array_search(&array, target)?;
			println!("{index} {value}");
		}
	}

	Ok(())
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"));

	if let Err(err) = run() {
		log::error!("{err}");
		std::process::exit(1);
	}
}
