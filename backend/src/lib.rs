//! # Star FOV
//!
//! Select the stars of a point-source catalog that fall inside a rectangular
//! field of view around a target, rank them and export the result.
//!
//! ## Pipeline
//!
//! 1. **Projection**: pick named columns from the raw table and give every row
//!    a sequential id ([`transformations::project_columns`])
//! 2. **FOV selection**: keep rows inside the window around the target
//!    ([`transformations::select_stars_in_fov`])
//! 3. **Ranking**: stable sort by brightness, keep the top N
//!    ([`transformations::sort_by_column`], [`transformations::take_top_stars`])
//! 4. **Distance**: append the distance to the target and re-rank by it
//!    ([`transformations::annotate_distances`])
//!
//! [`services::run_pipeline`] chains the stages over an in-memory table;
//! [`services::run_catalog_pipeline`] adds reading the catalog file and CSV export.
//!
//! ## Architecture
//!
//! - [`models`]: Sky positions, fields of view, records and their column layout
//! - [`parsing`]: Delimited catalog reader
//! - [`transformations`]: The pipeline stages
//! - [`services`]: Orchestration
//! - [`io`]: CSV export and interactive prompts
//! - [`config`]: TOML configuration with environment overrides
//! - [`error`]: Error types
//!
//! ## Limitations
//!
//! Geometry is a planar approximation in degrees. A window that wraps below
//! RA 0° only matches the `[360 + left, 360]` segment, and distances are
//! Euclidean in the (RA, Dec) plane rather than great-circle separations.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;
pub mod transformations;

pub use error::{FovError, FovResult};
