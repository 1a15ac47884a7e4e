//! The data overview step: schema, non-null counts, and the deep memory
//! footprint of the loaded table.

use crate::{dataset::Dataset, table};

pub fn print_overview(dataset: &Dataset) {
    let headers = vec![
        "column".to_string(),
        "type".to_string(),
        "non_null".to_string(),
        "bytes".to_string(),
    ];
    let rows = overview_rows(dataset);
    println!("Data information:");
    println!(
        "{} row(s) across {} column(s)",
        dataset.row_count(),
        dataset.schema.columns.len()
    );
    table::print_table(&headers, &rows);
    println!("Total bytes in use: {} B", dataset.memory_usage());
}

fn overview_rows(dataset: &Dataset) -> Vec<Vec<String>> {
    let non_null = dataset.non_null_counts();
    let bytes = dataset.column_bytes();
    dataset
        .schema
        .columns
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            vec![
                col.name.clone(),
                col.datatype.to_string(),
                non_null[idx].to_string(),
                bytes[idx].to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;
    use std::io::Write;

    #[test]
    fn overview_rows_cover_every_column() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sets.csv");
        let mut file = std::fs::File::create(&path).expect("create csv");
        file.write_all(b"set_num,name,year,num_parts\n001-1,Gears,1965,43\n")
            .expect("write csv");
        let dataset = Dataset::load(&path, b',', UTF_8).expect("load");

        let rows = overview_rows(&dataset);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2][0], "year");
        assert_eq!(rows[2][1], "integer");
        assert_eq!(rows[2][2], "1");
        assert_eq!(rows[0][1], "string");
    }
}
