//! Orchestration of the selection pipeline.
//!
//! `project -> select in FOV -> sort by brightness -> top N -> distance -> sort by distance`

use log::{debug, info, warn};
use qtty::Degrees;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::FovResult;
use crate::io::export_table;
use crate::models::{ColumnRole, FieldOfView, SkyPosition, StarTable};
use crate::parsing::{read_delimited, RawTable};
use crate::transformations::{
    annotate_distances, project_columns, select_stars_in_fov, sort_by_column, take_top_stars,
};

/// What to look for: a window around a target and how many stars to keep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarQuery {
    pub fov: FieldOfView,
    pub count: usize,
}

impl StarQuery {
    pub fn new(
        ra: f64,
        dec: f64,
        count: usize,
        fov_horizontal: f64,
        fov_vertical: f64,
    ) -> Self {
        Self {
            fov: FieldOfView::new(
                SkyPosition::from_degrees(ra, dec),
                Degrees::new(fov_horizontal),
                Degrees::new(fov_vertical),
            ),
            count,
        }
    }

    pub fn target(&self) -> SkyPosition {
        self.fov.center
    }
}

/// Everything needed to run the pipeline over an in-memory table.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRequest {
    /// Catalog columns to project, in record order
    pub columns: Vec<String>,
    /// Column for the initial ranking
    pub sort_column: ColumnRole,
    pub query: StarQuery,
    /// Append distance and re-rank by it (export variant)
    pub annotate_distance: bool,
}

impl PipelineRequest {
    pub fn new(query: StarQuery) -> Self {
        let defaults = AppConfig::default();
        Self::from_config(&defaults, query, true)
    }

    pub fn from_config(config: &AppConfig, query: StarQuery, annotate_distance: bool) -> Self {
        Self {
            columns: config.catalog.columns.clone(),
            sort_column: ColumnRole::from_name(&config.ranking.sort_column),
            query,
            annotate_distance,
        }
    }
}

/// Pipeline result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    /// Stars inside the FOV before truncation to `count`
    pub selected_count: usize,
    /// Final stars in output order
    pub table: StarTable,
    /// CSV file written, if the result was exported
    pub export_path: Option<PathBuf>,
}

/// Run every stage over `raw`; any stage error aborts the run.
pub fn run_pipeline(raw: &RawTable, request: &PipelineRequest) -> FovResult<PipelineOutput> {
    let projected = project_columns(raw, &request.columns)?;
    let StarTable {
        mut layout,
        records,
    } = projected;
    debug!("Projected {} stars", records.len());

    let mut stars = select_stars_in_fov(&request.query.fov, &records, &layout)?;
    let selected_count = stars.len();

    sort_by_column(&mut stars, &request.sort_column, &layout)?;
    let mut stars = take_top_stars(stars, request.query.count)?;
    if stars.len() < request.query.count {
        warn!(
            "Only {} stars found in the field of view ({} requested)",
            stars.len(),
            request.query.count
        );
    }

    if request.annotate_distance {
        annotate_distances(&mut stars, &mut layout, &request.query.target())?;
        sort_by_column(&mut stars, &ColumnRole::Distance, &layout)?;
    }

    let table = StarTable::new(layout, stars);
    debug_assert!(table.is_consistent());
    info!(
        "Selected {} stars in the field of view, kept {}",
        selected_count,
        table.len()
    );

    Ok(PipelineOutput {
        selected_count,
        table,
        export_path: None,
    })
}

/// Read the configured catalog, run the pipeline and export when enabled.
pub fn run_catalog_pipeline(
    config: &AppConfig,
    query: StarQuery,
    annotate_distance: bool,
) -> FovResult<PipelineOutput> {
    let delimiter = config.catalog.delimiter_byte()?;
    let raw = read_delimited(&config.catalog.path, delimiter)?;
    info!(
        "Loaded {} catalog rows from {}",
        raw.data_row_count(),
        config.catalog.path.display()
    );

    let request = PipelineRequest::from_config(config, query, annotate_distance);
    let mut output = run_pipeline(&raw, &request)?;

    if config.export.enabled && annotate_distance {
        let path = export_table(&config.export.directory, &config.export.header, &output.table)?;
        output.export_path = Some(path);
    }

    Ok(output)
}
