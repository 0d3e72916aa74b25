//! Readers for delimited star catalogs.
//!
//! Catalog files are tab-separated: the first line is ignored, the second
//! names the columns and every following line is one star.
//!
//! # Example
//!
//! ```no_run
//! use star_fov::parsing::read_tsv;
//! use std::path::Path;
//!
//! let table = read_tsv(Path::new("small_dataset.tsv")).expect("Failed to read catalog");
//! println!("{} data rows", table.data_row_count());
//! ```

pub mod tsv_parser;


pub use tsv_parser::{parse_delimited_str, parse_tsv_str, read_delimited, read_tsv, RawTable};
