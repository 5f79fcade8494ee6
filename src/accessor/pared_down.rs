//! The pared-down accessor: a plain CSV of
//! `<u> sees <v>` / `Percent True` rows, expanded into a symmetric
//! visibility matrix.
//!
//! Every satellite pair defaults to `0.0`; each row then overwrites both
//! directions with its parsed percentage.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use crate::accessor::data_type::ParedDownData;
use crate::accessor::file_based::{Accessor, FileBasedAccessor, FileBasedAccessorState};
use crate::error::AccessorError;

const NAME_SEPARATOR: &str = " sees ";

fn extract_satellite_names(label: &str) -> Result<(String, String), AccessorError> {
	let parts: Vec<&str> = label.split(NAME_SEPARATOR).collect();
	match parts.as_slice() {
		[source, target] => Ok(((*source).to_string(), (*target).to_string())),
		_ => Err(AccessorError::UnparseableHeader(label.to_string())),
	}
}

fn parse_percentage(raw: &str) -> Result<f64, AccessorError> {
	raw.trim()
		.trim_end_matches('%')
		.parse()
		.map_err(|_| AccessorError::UnparseablePercentage(raw.to_string()))
}

/// Accessor for the pared-down visibility-matrix format.
pub struct ParedDownAccessor {
	state: FileBasedAccessorState,
	data: ParedDownData,
}

impl ParedDownAccessor {
	pub fn new(filepath: impl Into<std::path::PathBuf>) -> Self {
		Self {
			state: FileBasedAccessorState::new(filepath),
			data: ParedDownData::default(),
		}
	}

	/// Parse pared-down visibility data from any buffered reader. Pure and
	/// I/O-free — this is what the fixture-backed integration test exercises.
	pub fn parse<R: BufRead>(reader: R) -> Result<ParedDownData, AccessorError> {
		let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
		let headers = csv_reader.headers()?.clone();
		let analysis_index = headers
			.iter()
			.position(|h| h == "Analysis")
			.ok_or_else(|| AccessorError::MissingColumn("Analysis".to_string()))?;
		let percent_index = headers
			.iter()
			.position(|h| h == "Percent True")
			.ok_or_else(|| AccessorError::MissingColumn("Percent True".to_string()))?;

		let mut pairs: Vec<(String, String, f64)> = Vec::new();
		let mut satellites: Vec<String> = Vec::new();

		for record in csv_reader.records() {
			let record = record?;
			let label = record
				.get(analysis_index)
				.ok_or_else(|| AccessorError::MissingColumn("Analysis".to_string()))?;
			let (source, target) = extract_satellite_names(label)?;
			let percent = parse_percentage(
				record
					.get(percent_index)
					.ok_or_else(|| AccessorError::MissingColumn("Percent True".to_string()))?,
			)?;

			if !satellites.contains(&source) {
				satellites.push(source.clone());
			}
			if !satellites.contains(&target) {
				satellites.push(target.clone());
			}
			pairs.push((source, target, percent));
		}

		let mut visibility: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
		for i in &satellites {
			visibility.insert(i.clone(), IndexMap::new());
		}
		for (i, j) in itertools::iproduct!(&satellites, &satellites) {
			visibility.get_mut(i).expect("inserted above").insert(j.clone(), 0.0);
		}

		for (source, target, percent) in pairs {
			visibility
				.get_mut(&source)
				.expect("satellite collected above")
				.insert(target.clone(), percent);
			visibility
				.get_mut(&target)
				.expect("satellite collected above")
				.insert(source, percent);
		}

		Ok(ParedDownData {
			satellites,
			visibility,
		})
	}
}

impl Accessor for ParedDownAccessor {
	type Data = ParedDownData;

	fn run(&mut self) -> Result<(), AccessorError> {
		let file = File::open(&self.state.filepath)?;
		self.data = Self::parse(BufReader::new(file))?;
		Ok(())
	}

	fn data(&self) -> &ParedDownData {
		&self.data
	}
}

impl FileBasedAccessor for ParedDownAccessor {
	fn filepath(&self) -> &Path {
		&self.state.filepath
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	const FIXTURE: &str = "\
Analysis,Percent True
a sees b,63.22%
a sees c,10.00%
";

	#[test]
	fn builds_symmetric_zero_diagonal_matrix() {
		let data = ParedDownAccessor::parse(Cursor::new(FIXTURE)).unwrap();
		assert_eq!(data.satellites, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
		assert_eq!(data.visibility["a"]["b"], 63.22);
		assert_eq!(data.visibility["b"]["a"], 63.22);
		assert_eq!(data.visibility["a"]["a"], 0.0);
		assert_eq!(data.visibility["b"]["c"], 0.0);
	}

	#[test]
	fn rejects_unparseable_percentage() {
		let bad = FIXTURE.replace("63.22%", "sixty");
		let err = ParedDownAccessor::parse(Cursor::new(bad)).unwrap_err();
		assert!(matches!(err, AccessorError::UnparseablePercentage(_)));
	}
}
