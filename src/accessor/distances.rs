//! The distances accessor: augmented CSV of sampled
//! satellite-to-satellite link distances.
//!
//! Skips a six-line preamble, then reads a header row of `Dist:<u>_<v>`
//! columns (plus a trailing ignored column and a `TIME_UNITS`
//! sample-timestamp column).

use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;

use crate::accessor::data_type::DistancesData;
use crate::accessor::file_based::{Accessor, FileBasedAccessor, FileBasedAccessorState};
use crate::error::AccessorError;

const HEADER_PREFIX: &str = "Dist:";
const NAME_SEPARATOR: char = '_';
const TIME_UNITS_COLUMN: &str = "TIME_UNITS";

/// Line indices (0-based) skipped before the CSV header: the file-identity
/// header, the data-window timestamp row, a blank line, the generation
/// timestamp row, the simulation start/stop row, and the units row.
const SKIPPED_LINES: [usize; 6] = [0, 1, 2, 3, 4, 6];

fn extract_satellite_names(header: &str) -> Result<(String, String), AccessorError> {
	let stripped = header
		.strip_prefix(HEADER_PREFIX)
		.ok_or_else(|| AccessorError::UnparseableHeader(header.to_string()))?;
	let parts: Vec<&str> = stripped.split(NAME_SEPARATOR).collect();
	match parts.as_slice() {
		[source, target] => Ok(((*source).to_string(), (*target).to_string())),
		_ => Err(AccessorError::UnparseableHeader(header.to_string())),
	}
}

/// Accessor for the distances tabular format.
pub struct DistancesAccessor {
	state: FileBasedAccessorState,
	data: DistancesData,
}

impl DistancesAccessor {
	/// Record `filepath` without reading it; call [`Accessor::run`] to
	/// actually parse it.
	pub fn new(filepath: impl Into<std::path::PathBuf>) -> Self {
		Self {
			state: FileBasedAccessorState::new(filepath),
			data: DistancesData::default(),
		}
	}

	/// Parse distances data from any buffered reader, skipping the
	/// preamble lines and trailing column exactly as the file-based
	/// `run()` does. Pure and I/O-free — the entry point fixtures use.
	pub fn parse<R: BufRead>(reader: R) -> Result<DistancesData, AccessorError> {
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
		// The trailing column is not valid data.
		let header_count = raw_headers.len().saturating_sub(1);
		let headers: Vec<String> = raw_headers.iter().take(header_count).map(String::from).collect();

		let time_units_index = headers
			.iter()
			.position(|h| h == TIME_UNITS_COLUMN)
			.ok_or_else(|| AccessorError::MissingColumn(TIME_UNITS_COLUMN.to_string()))?;

		let distance_columns: Vec<(usize, String, String)> = headers
			.iter()
			.enumerate()
			.filter(|(i, _)| *i != time_units_index)
			.map(|(i, h)| extract_satellite_names(h).map(|(s, t)| (i, s, t)))
			.collect::<Result<_, _>>()?;

		let mut columns: Vec<Vec<f64>> = vec![Vec::new(); header_count];

		for record in csv_reader.records() {
			let record = record?;
			for (i, column) in columns.iter_mut().enumerate() {
				let raw = record.get(i).unwrap_or("");
				let value: f64 = raw
					.trim()
					.parse()
					.map_err(|_| AccessorError::UnparseableValue(raw.to_string()))?;
				column.push(value);
			}
		}
		let distance_sample_timestamps = columns[time_units_index].clone();

		let mut satellites: Vec<String> = Vec::new();
		let mut distances: IndexMap<String, IndexMap<String, Vec<f64>>> = IndexMap::new();

		for (column_index, source, target) in distance_columns {
			if !satellites.contains(&source) {
				satellites.push(source.clone());
			}
			if !satellites.contains(&target) {
				satellites.push(target.clone());
			}

			let samples = columns[column_index].clone();
			distances
				.entry(source.clone())
				.or_default()
				.insert(target.clone(), samples.clone());
			distances.entry(target).or_default().insert(source, samples);
		}

		Ok(DistancesData {
			satellites,
			distances,
			distance_sample_timestamps,
		})
	}
}

impl Accessor for DistancesAccessor {
	type Data = DistancesData;

	fn run(&mut self) -> Result<(), AccessorError> {
		let file = File::open(&self.state.filepath)?;
		self.data = Self::parse(BufReader::new(file))?;
		Ok(())
	}

	fn data(&self) -> &DistancesData {
		&self.data
	}
}

impl FileBasedAccessor for DistancesAccessor {
	fn filepath(&self) -> &Path {
		&self.state.filepath
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	const FIXTURE: &str = "\
header,,,,
generated-at,,,,
,,,,
simulation-window,,,,
start-stop,,,,
TIME_UNITS,Dist:a_b,Dist:a_c,ignored
units,,,
0.0,10.0,30.0,0
1.0,20.0,40.0,0
";

	#[test]
	fn parses_satellites_and_distances() {
		let data = DistancesAccessor::parse(Cursor::new(FIXTURE)).unwrap();
		assert_eq!(data.satellites, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
		assert_eq!(data.distance_sample_timestamps, vec![0.0, 1.0]);
		assert_eq!(data.distances["a"]["b"], vec![10.0, 20.0]);
		assert_eq!(data.distances["b"]["a"], vec![10.0, 20.0]);
		assert_eq!(data.distances["a"]["c"], vec![30.0, 40.0]);
	}

	#[test]
	fn rejects_unparseable_header() {
		let bad = FIXTURE.replace("Dist:a_b", "Dist:ab");
		let err = DistancesAccessor::parse(Cursor::new(bad)).unwrap_err();
		assert!(matches!(err, AccessorError::UnparseableHeader(_)));
	}
}
