//! The in-memory LEGO sets table.
//!
//! Loading reads the whole file, infers a schema, and parses every cell into
//! a typed `Option<Value>`. The dataset is immutable after load; every
//! derived series (ranked aggregates, per-year counts, plot points) is built
//! fresh from it.

use std::{fs::File, io, io::BufReader, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::debug;
use thiserror::Error;

use crate::{
    data::{Value, parse_typed_value},
    io_utils,
    schema::Schema,
};

pub const YEAR_COLUMN: &str = "year";
pub const PARTS_COLUMN: &str = "num_parts";

/// The classified failure: the input file could not be opened or read.
/// Everything downstream (malformed cells, missing columns) propagates as a
/// plain diagnostic.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error reading file: {kind:?} {message}")]
    Read { kind: io::ErrorKind, message: String },
}

#[derive(Debug)]
pub struct Dataset {
    pub schema: Schema,
    rows: Vec<Vec<Option<Value>>>,
    year_idx: usize,
    parts_idx: usize,
}

impl Dataset {
    pub fn load(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<Self> {
        let file = File::open(path).map_err(|err| LoadError::Read {
            kind: err.kind(),
            message: err.to_string(),
        })?;
        let mut reader = io_utils::open_csv_reader(BufReader::new(file), delimiter, true);
        let headers =
            io_utils::reader_headers(&mut reader, encoding).map_err(classify_read_error)?;

        let mut raw_rows = Vec::new();
        for (row_idx, record) in reader.byte_records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(classify_csv_error(err)),
                Err(err) => {
                    return Err(err).with_context(|| format!("Reading row {}", row_idx + 2));
                }
            };
            raw_rows.push(io_utils::decode_record(&record, encoding)?);
        }

        // Full scan: the rows are all in memory, and a sample cap would let a
        // column that changes shape in late rows mis-infer and fail the typed
        // parse.
        let schema = Schema::infer(&headers, &raw_rows, 0);
        let year_idx = schema
            .column_index(YEAR_COLUMN)
            .with_context(|| format!("CSV missing '{YEAR_COLUMN}' column"))?;
        let parts_idx = schema
            .column_index(PARTS_COLUMN)
            .with_context(|| format!("CSV missing '{PARTS_COLUMN}' column"))?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (row_idx, raw) in raw_rows.iter().enumerate() {
            let mut typed = Vec::with_capacity(schema.columns.len());
            for (col, cell) in schema.columns.iter().zip(raw) {
                let value = parse_typed_value(cell, &col.datatype)
                    .with_context(|| format!("Column '{}' in row {}", col.name, row_idx + 2))?;
                typed.push(value);
            }
            rows.push(typed);
        }

        debug!(
            "Loaded {} row(s) across {} column(s) from {:?}",
            rows.len(),
            schema.columns.len(),
            path
        );
        Ok(Self {
            schema,
            rows,
            year_idx,
            parts_idx,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(year, num_parts)` for every row where both cells parsed to an
    /// integer view. Feeds the aggregation and the scatter plot.
    pub fn year_parts(&self) -> Vec<(i64, i64)> {
        self.rows
            .iter()
            .filter_map(|row| {
                let year = row.get(self.year_idx)?.as_ref()?.as_i64()?;
                let parts = row.get(self.parts_idx)?.as_ref()?.as_i64()?;
                Some((year, parts))
            })
            .collect()
    }

    /// Release year of every row carrying one. Feeds the bar chart count.
    pub fn years(&self) -> Vec<i64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(self.year_idx)?.as_ref()?.as_i64())
            .collect()
    }

    /// Per-column count of present cells.
    pub fn non_null_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.schema.columns.len()];
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    counts[idx] += 1;
                }
            }
        }
        counts
    }

    /// Per-column deep byte estimate: the inline cell slot plus any string
    /// heap storage.
    pub fn column_bytes(&self) -> Vec<usize> {
        let slot = std::mem::size_of::<Option<Value>>();
        let mut bytes = vec![self.rows.len() * slot; self.schema.columns.len()];
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if let Some(value) = cell {
                    bytes[idx] += value.heap_size();
                }
            }
        }
        bytes
    }

    /// Total deep memory estimate for the whole table.
    pub fn memory_usage(&self) -> usize {
        let row_overhead = self.rows.capacity() * std::mem::size_of::<Vec<Option<Value>>>();
        row_overhead + self.column_bytes().iter().sum::<usize>()
    }
}

// An I/O failure while reading (not just opening) the file is still a read
// failure, e.g. the input path naming a directory. CSV syntax errors stay
// plain diagnostics.
fn classify_csv_error(err: csv::Error) -> anyhow::Error {
    if let csv::ErrorKind::Io(io_err) = err.kind() {
        LoadError::Read {
            kind: io_err.kind(),
            message: io_err.to_string(),
        }
        .into()
    } else {
        err.into()
    }
}

fn classify_read_error(err: anyhow::Error) -> anyhow::Error {
    match err.downcast::<csv::Error>() {
        Ok(csv_err) => classify_csv_error(csv_err),
        Err(other) => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;
    use std::io::Write;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sets.csv");
        let mut file = File::create(&path).expect("create csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        (dir, path)
    }

    #[test]
    fn load_builds_typed_rows_and_series() {
        let (_dir, path) = write_csv(
            "set_num,name,year,theme_id,num_parts\n\
             0011-2,Town Mini-Figures,1979,67,12\n\
             0012-1,Space Mini-Figures,1979,143,12\n\
             0013-1,Castle Figures,1987,199,\n",
        );
        let dataset = Dataset::load(&path, b',', UTF_8).expect("load");
        assert_eq!(dataset.row_count(), 3);
        assert_eq!(dataset.year_parts(), vec![(1979, 12), (1979, 12)]);
        assert_eq!(dataset.years(), vec![1979, 1979, 1987]);
        assert_eq!(dataset.non_null_counts(), vec![3, 3, 3, 3, 2]);
        assert!(dataset.memory_usage() > 0);
    }

    #[test]
    fn load_classifies_a_missing_file() {
        let err = Dataset::load(std::path::Path::new("no-such-sets.csv"), b',', UTF_8)
            .expect_err("should fail");
        let load_err = err.downcast_ref::<LoadError>().expect("classified error");
        let LoadError::Read { kind, .. } = load_err;
        assert_eq!(*kind, io::ErrorKind::NotFound);
        assert!(format!("{load_err}").starts_with("Error reading file: NotFound"));
    }

    #[test]
    fn load_classifies_a_directory_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Dataset::load(dir.path(), b',', UTF_8).expect_err("should fail");
        let load_err = err.downcast_ref::<LoadError>().expect("classified error");
        assert!(format!("{load_err}").starts_with("Error reading file:"));
    }

    #[test]
    fn late_rows_still_shape_the_inferred_types() {
        let mut body = String::from("set_num,name,year,theme_id,num_parts\n");
        for idx in 0..2400 {
            body.push_str(&format!("{idx:04}-1,Set {idx},1990,1,10\n"));
        }
        body.push_str("2400-1,Half Brick,1991,1,10.5\n");
        let (_dir, path) = write_csv(&body);

        let dataset = Dataset::load(&path, b',', UTF_8).expect("load");
        assert_eq!(dataset.row_count(), 2401);
        // num_parts widened to float; only whole values keep an integer view.
        assert_eq!(dataset.year_parts().len(), 2400);
        assert_eq!(dataset.years().len(), 2401);
    }

    #[test]
    fn load_requires_the_year_and_parts_columns() {
        let (_dir, path) = write_csv("set_num,name\n0011-2,Town Mini-Figures\n");
        let err = Dataset::load(&path, b',', UTF_8).expect_err("should fail");
        assert!(format!("{err:#}").contains("missing 'year' column"));
    }

    #[test]
    fn column_bytes_sum_into_memory_usage() {
        let (_dir, path) = write_csv("set_num,year,num_parts\nA-1,2000,10\nB-2,2001,20\n");
        let dataset = Dataset::load(&path, b',', UTF_8).expect("load");
        let column_total: usize = dataset.column_bytes().iter().sum();
        assert!(dataset.memory_usage() >= column_total);
    }
}
