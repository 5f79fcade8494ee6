//! The connections accessor: tabular rise/set visibility
//! windows between satellite pairs, terminated by a sentinel block.
//!
//! Skips a six-line preamble, then reads rows matching `<u> sees <v>` in
//! the `Analysis` column until a sentinel row where `Analysis` itself
//! equals `"Analysis"`.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use crate::accessor::data_type::ConnectionsData;
use crate::accessor::file_based::{Accessor, FileBasedAccessor, FileBasedAccessorState};
use crate::error::AccessorError;

const NAME_SEPARATOR: &str = " sees ";
const SKIPPED_LINES: [usize; 6] = [0, 1, 2, 3, 4, 6];

fn extract_satellite_names(header: &str) -> Result<(String, String), AccessorError> {
	let parts: Vec<&str> = header.split(NAME_SEPARATOR).collect();
	match parts.as_slice() {
		[source, target] => Ok(((*source).to_string(), (*target).to_string())),
		_ => Err(AccessorError::UnparseableHeader(header.to_string())),
	}
}

/// Accessor for the connections tabular format.
pub struct ConnectionsAccessor {
	state: FileBasedAccessorState,
	data: ConnectionsData,
}

impl ConnectionsAccessor {
	pub fn new(filepath: impl Into<std::path::PathBuf>) -> Self {
		Self {
			state: FileBasedAccessorState::new(filepath),
			data: ConnectionsData::default(),
		}
	}

	/// Parse connections data from any buffered reader. Pure and I/O-free.
	pub fn parse<R: BufRead>(reader: R) -> Result<ConnectionsData, AccessorError> {
		let skip: HashSet<usize> = SKIPPED_LINES.into_iter().collect();
		let mut kept_lines = Vec::new();
		for (i, line) in reader.lines().enumerate() {
			let line = line?;
			if !skip.contains(&i) {
				kept_lines.push(line);
			}
		}
		let joined = kept_lines.join("\n");

		let mut csv_reader = csv::ReaderBuilder::new()
			.has_headers(true)
			.from_reader(joined.as_bytes());

		let raw_headers = csv_reader.headers()?.clone();
		// Only the first four columns matter; the rest is an adjacency matrix
		// we don't need.
		let headers: Vec<String> = raw_headers.iter().take(4).map(String::from).collect();
		let analysis_index = headers
			.iter()
			.position(|h| h == "Analysis")
			.ok_or_else(|| AccessorError::MissingColumn("Analysis".to_string()))?;
		let rise_index = headers
			.iter()
			.position(|h| h == "Rise")
			.ok_or_else(|| AccessorError::MissingColumn("Rise".to_string()))?;
		let set_index = headers
			.iter()
			.position(|h| h == "Set")
			.ok_or_else(|| AccessorError::MissingColumn("Set".to_string()))?;

		let records: Vec<csv::StringRecord> = csv_reader.records().collect::<Result<_, _>>()?;

		let sentinel_positions: Vec<usize> = records
			.iter()
			.enumerate()
			.filter(|(_, r)| r.get(analysis_index) == Some("Analysis"))
			.map(|(i, _)| i)
			.collect();
		if sentinel_positions.len() != 1 {
			return Err(AccessorError::AmbiguousAnalysisBlock(sentinel_positions.len()));
		}
		let cutoff = sentinel_positions[0];

		let mut satellites: Vec<String> = Vec::new();
		let mut connections: IndexMap<String, IndexMap<String, Vec<(f64, f64)>>> = IndexMap::new();

		for record in &records[..cutoff] {
			let analysis = record
				.get(analysis_index)
				.ok_or_else(|| AccessorError::MissingColumn("Analysis".to_string()))?;
			let (source, target) = extract_satellite_names(analysis)?;

			if !satellites.contains(&source) {
				satellites.push(source.clone());
			}
			if !satellites.contains(&target) {
				satellites.push(target.clone());
			}
			connections.entry(source.clone()).or_default();
			connections.entry(target.clone()).or_default();

			let rise: f64 = record
				.get(rise_index)
				.and_then(|s| s.trim().parse().ok())
				.ok_or_else(|| AccessorError::MissingColumn("Rise".to_string()))?;
			let set: f64 = record
				.get(set_index)
				.and_then(|s| s.trim().parse().ok())
				.ok_or_else(|| AccessorError::MissingColumn("Set".to_string()))?;

			connections
				.get_mut(&source)
				.expect("inserted above")
				.entry(target.clone())
				.or_default()
				.push((rise, set));
			connections
				.get_mut(&target)
				.expect("inserted above")
				.entry(source)
				.or_default()
				.push((rise, set));
		}

		Ok(ConnectionsData {
			satellites,
			connections,
		})
	}
}

impl Accessor for ConnectionsAccessor {
	type Data = ConnectionsData;

	fn run(&mut self) -> Result<(), AccessorError> {
		let file = File::open(&self.state.filepath)?;
		self.data = Self::parse(BufReader::new(file))?;
		Ok(())
	}

	fn data(&self) -> &ConnectionsData {
		&self.data
	}
}

impl FileBasedAccessor for ConnectionsAccessor {
	fn filepath(&self) -> &Path {
		&self.state.filepath
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	const FIXTURE: &str = "\
header,,,
generated-at,,,
,,,
simulation-window,,,
start-stop,,,
Analysis,Rise,Set,X
units,,,
a sees b,1.0,2.0,0
a sees b,5.0,6.0,0
Analysis,,,
a,b,c,d
";

	#[test]
	fn parses_rise_set_pairs_both_directions() {
		let data = ConnectionsAccessor::parse(Cursor::new(FIXTURE)).unwrap();
		assert_eq!(data.satellites, vec!["a".to_string(), "b".to_string()]);
		assert_eq!(data.connections["a"]["b"], vec![(1.0, 2.0), (5.0, 6.0)]);
		assert_eq!(data.connections["b"]["a"], vec![(1.0, 2.0), (5.0, 6.0)]);
	}

	#[test]
	fn missing_sentinel_row_is_ambiguous() {
		let without_sentinel = FIXTURE.replace("Analysis,,,\n", "");
		let err = ConnectionsAccessor::parse(Cursor::new(without_sentinel)).unwrap_err();
		assert!(matches!(err, AccessorError::AmbiguousAnalysisBlock(0)));
	}
}
