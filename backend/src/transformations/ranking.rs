use crate::error::FovResult;
use crate::models::{ColumnLayout, ColumnRole, StarRecord};

/// Stable ascending sort of `records` by one column, in place.
///
/// Adjacent records are swapped only when the left key is strictly greater,
/// so equal keys (and NaN, which never compares greater) keep their input order.
///
/// # Errors
/// [`crate::error::FovError::ColumnNotFound`] if `column` is not in `layout`.
pub fn sort_by_column(
    records: &mut [StarRecord],
    column: &ColumnRole,
    layout: &ColumnLayout,
) -> FovResult<()> {
    let pos = layout.require(column)?;
    let key = |r: &StarRecord| r.value(pos).unwrap_or(f64::NAN);

    let n = records.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if key(&records[j]) > key(&records[j + 1]) {
                records.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    Ok(())
}
