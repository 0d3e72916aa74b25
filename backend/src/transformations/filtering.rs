use log::debug;

use crate::error::{FovError, FovResult};
use crate::models::{ColumnLayout, ColumnRole, FieldOfView, StarRecord};

/// Keep the records whose `ra_ep2000`/`dec_ep2000` fall inside `fov`.
///
/// Returns a new list in the original relative order; it may be empty.
///
/// # Errors
/// - [`FovError::InvalidFov`] if the window crosses a pole
/// - [`FovError::ColumnNotFound`] if the layout has no RA or Dec column
pub fn select_stars_in_fov(
    fov: &FieldOfView,
    records: &[StarRecord],
    layout: &ColumnLayout,
) -> FovResult<Vec<StarRecord>> {
    let edges = fov.edges()?;
    let ra_pos = layout.require(&ColumnRole::RightAscension)?;
    let dec_pos = layout.require(&ColumnRole::Declination)?;

    let selected: Vec<StarRecord> = records
        .iter()
        .filter(|r| match (r.value(ra_pos), r.value(dec_pos)) {
            (Some(ra), Some(dec)) => edges.contains(ra, dec),
            _ => false,
        })
        .cloned()
        .collect();

    debug!(
        "FOV [{:.4}, {:.4}] x [{:.4}, {:.4}] selected {} of {} records",
        edges.left,
        edges.right,
        edges.bottom,
        edges.top,
        selected.len(),
        records.len()
    );

    Ok(selected)
}

/// Keep the first `min(count, len)` records.
///
/// Fewer than `count` records is not an error.
///
/// # Errors
/// [`FovError::EmptyFov`] if `records` is empty.
pub fn take_top_stars(mut records: Vec<StarRecord>, count: usize) -> FovResult<Vec<StarRecord>> {
    if records.is_empty() {
        return Err(FovError::EmptyFov);
    }
    records.truncate(count);
    Ok(records)
}
