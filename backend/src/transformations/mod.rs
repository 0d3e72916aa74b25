//! Table transformations applied between loading and export.
//!
//! # Modules
//!
//! - [`projection`]: Pick named columns from raw rows and convert them to records
//! - [`filtering`]: Keep stars inside a field of view, truncate to the top N
//! - [`ranking`]: Stable sort by any column of the layout
//! - [`distance`]: Append the distance to the target as a new column
//!
//! # Example
//!
//! ```no_run
//! use star_fov::models::{ColumnRole, FieldOfView, SkyPosition};
//! use star_fov::parsing::read_tsv;
//! use star_fov::transformations::{project_columns, select_stars_in_fov, sort_by_column};
//! use std::path::Path;
//!
//! # fn example() -> star_fov::error::FovResult<()> {
//! let raw = read_tsv(Path::new("small_dataset.tsv"))?;
//! let table = project_columns(&raw, &["ra_ep2000", "dec_ep2000", "b"])?;
//! let fov = FieldOfView::new(
//!     SkyPosition::from_degrees(10.0, 0.0),
//!     qtty::Degrees::new(2.0),
//!     qtty::Degrees::new(2.0),
//! );
//! let mut stars = select_stars_in_fov(&fov, &table.records, &table.layout)?;
//! sort_by_column(&mut stars, &ColumnRole::Brightness, &table.layout)?;
//! # Ok(())
//! # }
//! ```

pub mod distance;
pub mod filtering;
pub mod projection;
pub mod ranking;

pub use distance::annotate_distances;
pub use filtering::{select_stars_in_fov, take_top_stars};
pub use projection::project_columns;
pub use ranking::sort_by_column;
