#[cfg(test)]
#[path = "../tests/stability/gz_curve_test.rs"]
mod tests;
//
use crate::{data::kn_table::KnPoint, math::OwnedSet};
use std::ops::Deref;
///
/// One point of the righting-arm series.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GzPoint {
    /// Heel angle, degrees.
    pub heel_deg: f64,
    /// Righting arm about the keel, meters.
    pub kn: f64,
    /// Righting arm corrected for the actual KG, meters,
    /// positive righting.
    pub gz: f64,
}
///
/// Righting-arm series over the heel grid of the cross curves.
#[derive(Clone, PartialEq, Debug)]
pub struct GzCurve {
    points: OwnedSet<GzPoint>,
}
//
//
impl GzCurve {
    ///
    /// Derives the series from interpolated KN values and given KG.
    ///
    /// Per grid point: GZ = KN - KG * sin(heel).
    /// Total over the grid, KG is an unconstrained real.
    pub fn new(kn_points: &[KnPoint], kg: f64) -> Self {
        let points = kn_points
            .iter()
            .map(|point| GzPoint {
                heel_deg: point.heel_deg,
                kn: point.kn,
                gz: point.kn - kg * point.heel_deg.to_radians().sin(),
            })
            .collect();
        Self { points }
    }
}
//
//
impl Deref for GzCurve {
    type Target = [GzPoint];
    //
    //
    fn deref(&self) -> &Self::Target {
        self.points.deref()
    }
}
