//! File and terminal I/O around the pipeline.
//!
//! - [`export`]: Write final stars to a timestamped CSV file
//! - [`prompt`]: Ask for query values that were not configured

pub mod export;
pub mod prompt;

pub use export::{
    export_path_for, export_table, format_value, header_mismatch, timestamped_export_path,
    write_csv_to, write_table_to_path, DEFAULT_EXPORT_HEADER,
};
pub use prompt::{complete_query, prompt_value};
