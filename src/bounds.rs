//! Bounding region over route points and markers.
//!
//! Pure geometry: padding is applied by the map composer in pixels and
//! never enters the region itself.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::polyline::GeoPoint;

/// Minimal axis-aligned rectangle covering a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub southwest: GeoPoint,
    pub northeast: GeoPoint,
}

impl BoundingRegion {
    /// Computes the region covering every point.
    ///
    /// Returns [`ViewError::EmptyBoundsInput`] if `points` yields nothing.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Result<Self> {
        let mut points = points.into_iter();
        let first = points.next().ok_or(ViewError::EmptyBoundsInput)?;

        let mut region = Self {
            southwest: *first,
            northeast: *first,
        };
        for point in points {
            region.southwest.lat = region.southwest.lat.min(point.lat);
            region.southwest.lng = region.southwest.lng.min(point.lng);
            region.northeast.lat = region.northeast.lat.max(point.lat);
            region.northeast.lng = region.northeast.lng.max(point.lng);
        }

        Ok(region)
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&point.lat)
            && (self.southwest.lng..=self.northeast.lng).contains(&point.lng)
    }
}

/// Computes the region over every point of every sequence plus the markers.
pub fn compute_bounds(point_sets: &[&[GeoPoint]], markers: &[GeoPoint]) -> Result<BoundingRegion> {
    BoundingRegion::from_points(point_sets.iter().copied().flatten().chain(markers))
}
