use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::FovResult;
use crate::models::StarTable;

/// Header written above exported stars.
pub const DEFAULT_EXPORT_HEADER: [&str; 5] = ["Id", "Ra", "Dec", "Brightness", "Distance"];

/// `<dir>/<timestamp>.csv`
pub fn export_path_for(dir: &Path, timestamp: i64) -> PathBuf {
    dir.join(format!("{}.csv", timestamp))
}

/// Export path named after the current time in seconds since the epoch.
pub fn timestamped_export_path(dir: &Path) -> PathBuf {
    export_path_for(dir, chrono::Utc::now().timestamp())
}

/// Format a float the way catalog values are usually written (`10.0`, `3.25`).
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// True when `header` does not name every layout position.
pub fn header_mismatch<S: AsRef<str>>(header: &[S], table: &StarTable) -> bool {
    header.len() != table.layout.width()
}

/// Write `header` and then one row per record: the integer id followed by the
/// remaining fields in layout order.
///
/// The header is written as given even when its width differs from the
/// table layout; a warning is logged in that case.
pub fn write_csv_to<W: Write, S: AsRef<str>>(
    writer: W,
    header: &[S],
    table: &StarTable,
) -> FovResult<()> {
    if header_mismatch(header, table) {
        warn!(
            "Export header has {} columns but records have {}",
            header.len(),
            table.layout.width()
        );
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record(header.iter().map(|h| h.as_ref()))?;
    for record in &table.records {
        let mut row = Vec::with_capacity(record.width());
        row.push(record.id.to_string());
        row.extend(record.fields.iter().map(|v| format_value(*v)));
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `table` to a new timestamped CSV file in `dir` and return its path.
pub fn export_table<S: AsRef<str>>(
    dir: &Path,
    header: &[S],
    table: &StarTable,
) -> FovResult<PathBuf> {
    let path = timestamped_export_path(dir);
    write_table_to_path(&path, header, table)?;
    Ok(path)
}

/// Write `table` to `path`; the file is flushed and closed before returning.
pub fn write_table_to_path<S: AsRef<str>>(
    path: &Path,
    header: &[S],
    table: &StarTable,
) -> FovResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv_to(&mut writer, header, table)?;
    writer.flush()?;
    info!("Exported {} stars to {}", table.len(), path.display());
    Ok(())
}
