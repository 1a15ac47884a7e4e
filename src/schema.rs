//! Column model and sampling type inference.
//!
//! The schema is transient: it is inferred from the rows already in memory
//! and never persisted. Inference classifies each sampled cell and widens
//! the column type across observations (integer widens to float, anything
//! mixed collapses to string).

use std::fmt;

/// Supported column data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone)]
pub struct ColumnMeta {
    pub name: String,
    pub datatype: ColumnType,
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub columns: Vec<ColumnMeta>,
}

impl Schema {
    /// Infers one column type per header by scanning up to `sample_rows`
    /// rows (0 means a full scan).
    pub fn infer(headers: &[String], rows: &[Vec<String>], sample_rows: usize) -> Self {
        let sampled = if sample_rows == 0 {
            rows
        } else {
            &rows[..rows.len().min(sample_rows)]
        };
        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| ColumnMeta {
                name: name.clone(),
                datatype: infer_column_type(sampled, idx),
            })
            .collect();
        Self { columns }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }
}

fn infer_column_type(rows: &[Vec<String>], column_index: usize) -> ColumnType {
    let mut inferred: Option<ColumnType> = None;
    for row in rows {
        let Some(cell) = row.get(column_index) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        let observed = classify_cell(cell);
        inferred = Some(match inferred {
            None => observed,
            Some(current) => widen(current, observed),
        });
        if inferred == Some(ColumnType::String) {
            break;
        }
    }
    inferred.unwrap_or(ColumnType::String)
}

fn classify_cell(cell: &str) -> ColumnType {
    if cell.parse::<i64>().is_ok() {
        ColumnType::Integer
    } else if cell.parse::<f64>().is_ok() {
        ColumnType::Float
    } else if cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false") {
        ColumnType::Boolean
    } else {
        ColumnType::String
    }
}

fn widen(current: ColumnType, observed: ColumnType) -> ColumnType {
    use ColumnType::*;
    match (current, observed) {
        (a, b) if a == b => a,
        (Integer, Float) | (Float, Integer) => Float,
        _ => String,
    }
}
