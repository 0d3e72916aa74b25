//! Target positions and rectangular fields of view.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::error::{FovError, FovResult};

/// A position on the sky in equatorial degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    /// Right ascension in degrees
    pub ra: Degrees,
    /// Declination in degrees
    pub dec: Degrees,
}

impl SkyPosition {
    pub fn new(ra: Degrees, dec: Degrees) -> Self {
        Self { ra, dec }
    }

    /// Convenience constructor from raw degree values.
    pub fn from_degrees(ra: f64, dec: f64) -> Self {
        Self::new(Degrees::new(ra), Degrees::new(dec))
    }

    /// Planar distance in the (RA, Dec) degree plane.
    ///
    /// This is not a great-circle distance: RA and Dec are treated as
    /// Cartesian axes and the RA seam is ignored.
    pub fn planar_distance(&self, ra: f64, dec: f64) -> f64 {
        let d_ra = self.ra.value() - ra;
        let d_dec = self.dec.value() - dec;
        (d_ra * d_ra + d_dec * d_dec).sqrt()
    }
}

/// A rectangular field of view centred on a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    pub center: SkyPosition,
    /// Full horizontal (RA) width
    pub horizontal: Degrees,
    /// Full vertical (Dec) height
    pub vertical: Degrees,
}

/// The four edges of a field of view, valid for one selection call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovEdges {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl FieldOfView {
    pub fn new(center: SkyPosition, horizontal: Degrees, vertical: Degrees) -> Self {
        Self {
            center,
            horizontal,
            vertical,
        }
    }

    /// Compute and validate the window edges.
    ///
    /// Edges use the truncating remainder (`%`), so `left` and `bottom` stay
    /// negative when the window crosses zero. Both vertical edges are taken
    /// modulo 360 as well; only the pole check gives them meaning.
    ///
    /// # Errors
    /// [`FovError::InvalidFov`] when the top edge is above 90° or the bottom
    /// edge is below -90°.
    pub fn edges(&self) -> FovResult<FovEdges> {
        let half_h = self.horizontal.value() / 2.0;
        let half_v = self.vertical.value() / 2.0;
        let ra = self.center.ra.value();
        let dec = self.center.dec.value();

        let edges = FovEdges {
            right: (ra + half_h) % 360.0,
            left: (ra - half_h) % 360.0,
            top: (dec + half_v) % 360.0,
            bottom: (dec - half_v) % 360.0,
        };

        if edges.top > 90.0 {
            return Err(FovError::invalid_fov(format!(
                "the upper edge of fov cannot be more than 90 degrees (got {})",
                edges.top
            )));
        }
        if edges.bottom < -90.0 {
            return Err(FovError::invalid_fov(format!(
                "the bottom edge of fov cannot be less than -90 degrees (got {})",
                edges.bottom
            )));
        }

        Ok(edges)
    }
}

impl FovEdges {
    /// RA membership.
    ///
    /// When `left` wrapped below zero only the `[360 + left, 360]` segment is
    /// tested; the `[0, right]` half of the wrapped window is never considered.
    pub fn contains_ra(&self, ra: f64) -> bool {
        if self.left < 0.0 {
            360.0 + self.left <= ra && ra <= 360.0
        } else {
            self.left <= ra && ra <= self.right
        }
    }

    pub fn contains_dec(&self, dec: f64) -> bool {
        self.bottom <= dec && dec <= self.top
    }

    pub fn contains(&self, ra: f64, dec: f64) -> bool {
        self.contains_ra(ra) && self.contains_dec(dec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fov(ra: f64, dec: f64, h: f64, v: f64) -> FieldOfView {
        FieldOfView::new(
            SkyPosition::from_degrees(ra, dec),
            Degrees::new(h),
            Degrees::new(v),
        )
    }

    #[test]
    fn test_edges_simple_window() {
        let edges = fov(10.0, 0.0, 2.0, 2.0).edges().unwrap();
        assert_eq!(edges.left, 9.0);
        assert_eq!(edges.right, 11.0);
        assert_eq!(edges.bottom, -1.0);
        assert_eq!(edges.top, 1.0);
    }

    #[test]
    fn test_edges_reject_north_pole() {
        let err = fov(0.0, 89.5, 1.0, 2.0).edges().unwrap_err();
        assert!(matches!(err, FovError::InvalidFov { .. }));
    }

    #[test]
    fn test_edges_reject_south_pole() {
        let err = fov(180.0, -89.5, 1.0, 2.0).edges().unwrap_err();
        assert!(matches!(err, FovError::InvalidFov { .. }));
    }

    #[test]
    fn test_edges_touching_pole_is_valid() {
        let edges = fov(0.0, 89.0, 1.0, 2.0).edges().unwrap();
        assert_eq!(edges.top, 90.0);
    }

    #[test]
    fn test_wrapped_left_edge_only_checks_high_segment() {
        let edges = fov(0.5, 0.0, 2.0, 2.0).edges().unwrap();
        assert_eq!(edges.left, -0.5);
        assert!(edges.contains_ra(359.8));
        assert!(edges.contains_ra(360.0));
        // Known limitation: the [0, right] half of the wrapped window is skipped
        assert!(!edges.contains_ra(0.5));
        assert!(!edges.contains_ra(1.0));
    }

    #[test]
    fn test_planar_distance() {
        let target = SkyPosition::from_degrees(10.0, 0.0);
        assert_eq!(target.planar_distance(10.0, 0.0), 0.0);
        assert!((target.planar_distance(13.0, 4.0) - 5.0).abs() < 1e-12);
    }
}
