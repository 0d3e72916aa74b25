use log::debug;

use crate::error::FovResult;
use crate::models::{ColumnLayout, ColumnRole, SkyPosition, StarRecord};

/// Append the planar distance to `target` to every record.
///
/// Registers [`ColumnRole::Distance`] at the next free layout position and
/// returns that position. The distance is `sqrt(dRA² + dDec²)` in degrees,
/// not a great-circle separation.
///
/// # Errors
/// - [`crate::error::FovError::DuplicateColumn`] if the layout already has a distance column
/// - [`crate::error::FovError::ColumnNotFound`] if RA or Dec is missing
pub fn annotate_distances(
    records: &mut [StarRecord],
    layout: &mut ColumnLayout,
    target: &SkyPosition,
) -> FovResult<usize> {
    let ra_pos = layout.require(&ColumnRole::RightAscension)?;
    let dec_pos = layout.require(&ColumnRole::Declination)?;
    let distance_pos = layout.push(ColumnRole::Distance)?;

    for record in records.iter_mut() {
        let ra = record.value(ra_pos).unwrap_or(f64::NAN);
        let dec = record.value(dec_pos).unwrap_or(f64::NAN);
        record.push_field(target.planar_distance(ra, dec));
        debug_assert_eq!(record.width(), layout.width());
    }

    debug!("Annotated {} records with distance", records.len());
    Ok(distance_pos)
}
