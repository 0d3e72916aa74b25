use log::debug;

use crate::error::{FovError, FovResult};
use crate::models::{ColumnLayout, StarRecord, StarTable};
use crate::parsing::RawTable;

/// Parse one catalog cell as a float.
fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Select `columns` from every data row of `raw` and convert them to numbers.
///
/// The resulting layout is `[id, columns...]` in request order and each record
/// gets `id = row_index - 1`, i.e. its 1-based data row number.
///
/// # Errors
/// - [`FovError::DuplicateColumn`] if a name is requested twice
/// - [`FovError::ColumnNotFound`] if a name is absent from the header
/// - [`FovError::MalformedRow`] on the first empty or non-numeric cell; no
///   record is kept and the whole projection fails
pub fn project_columns<S: AsRef<str>>(raw: &RawTable, columns: &[S]) -> FovResult<StarTable> {
    let layout = ColumnLayout::from_requested(columns)?;

    // Resolve every column once, before touching data
    let header_positions = columns
        .iter()
        .map(|c| raw.column_index(c.as_ref()))
        .collect::<FovResult<Vec<usize>>>()?;

    let mut records = Vec::with_capacity(raw.data_row_count());
    for (row_index, row) in raw.data_rows() {
        let row_number = row_index - 1;
        let mut fields = Vec::with_capacity(columns.len());

        for (name, &pos) in columns.iter().zip(&header_positions) {
            let cell = row.get(pos).map(String::as_str).unwrap_or("");
            let value = parse_cell(cell)
                .ok_or_else(|| FovError::malformed_row(row_number, name.as_ref(), cell))?;
            fields.push(value);
        }

        records.push(StarRecord::new(row_number, fields));
    }

    debug!(
        "Projected {} records over {} columns",
        records.len(),
        columns.len()
    );

    Ok(StarTable::new(layout, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnRole;
    use crate::parsing::parse_tsv_str;

    fn catalog(rows: &str) -> RawTable {
        parse_tsv_str(&format!("skip\nid\tra_ep2000\tdec_ep2000\tb\n{}", rows)).unwrap()
    }

    #[test]
    fn test_project_assigns_row_ids_and_order() {
        let raw = catalog("7\t10.0\t1.0\t5.0\n8\t20.0\t2.0\t3.0\n");
        let table = project_columns(&raw, &["b", "ra_ep2000"]).unwrap();

        assert_eq!(table.layout.position(&ColumnRole::Brightness), Some(1));
        assert_eq!(table.layout.position(&ColumnRole::RightAscension), Some(2));
        assert_eq!(table.records[0], StarRecord::new(1, vec![5.0, 10.0]));
        assert_eq!(table.records[1], StarRecord::new(2, vec![3.0, 20.0]));
        assert!(table.is_consistent());
    }

    #[test]
    fn test_project_missing_column_fails_before_rows() {
        let raw = catalog("1\tbad\t0.0\t5.0\n");
        let err = project_columns(&raw, &["ra_ep2000", "vmag"]).unwrap_err();
        assert!(matches!(err, FovError::ColumnNotFound { ref column } if column == "vmag"));
    }

    #[test]
    fn test_project_malformed_row_reports_row_number() {
        let raw = catalog("1\t10.0\t0.0\t5.0\n2\t11.0\t0.0\tabc\n3\t12.0\t0.0\t1.0\n");
        let err = project_columns(&raw, &["ra_ep2000", "b"]).unwrap_err();
        match err {
            FovError::MalformedRow { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "b");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_project_empty_cell_is_malformed() {
        let raw = catalog("1\t10.0\t\t5.0\n");
        let err = project_columns(&raw, &["dec_ep2000"]).unwrap_err();
        assert!(matches!(err, FovError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_project_short_row_is_malformed() {
        let raw = catalog("1\t10.0\n");
        let err = project_columns(&raw, &["b"]).unwrap_err();
        assert!(matches!(err, FovError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_project_ignores_unrequested_bad_cells() {
        let raw = catalog("x\t10.0\t0.0\t5.0\n");
        let table = project_columns(&raw, &["ra_ep2000"]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_project_without_data_rows() {
        let raw = catalog("");
        let table = project_columns(&raw, &["b"]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_project_blank_line_is_malformed_row() {
        let raw = catalog("1\t10.0\t0.0\t5.0\n\n3\t12.0\t0.0\t1.0\n");
        let err = project_columns(&raw, &["ra_ep2000", "b"]).unwrap_err();
        assert!(matches!(err, FovError::MalformedRow { row: 2, ref column, .. } if column == "ra_ep2000"));
    }

    #[test]
    fn test_project_blank_first_line_keeps_header() {
        let raw = parse_tsv_str("\nid\tra_ep2000\tdec_ep2000\tb\n1\t10.0\t0.0\t5.0\n").unwrap();
        let table = project_columns(&raw, &["ra_ep2000", "b"]).unwrap();
        assert_eq!(table.ids(), vec![1]);
        assert_eq!(table.records[0].fields, vec![10.0, 5.0]);
    }

    #[test]
    fn test_project_without_header() {
        let raw = parse_tsv_str("skip\n").unwrap();
        let err = project_columns(&raw, &["b"]).unwrap_err();
        assert!(matches!(err, FovError::MissingHeader));
    }
}
