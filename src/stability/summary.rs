#[cfg(test)]
#[path = "../tests/stability/summary_test.rs"]
mod tests;
//
use super::gz_curve::{GzCurve, GzPoint};
///
/// Scalar digest of a [GzCurve].
#[derive(Clone, PartialEq, Debug)]
pub struct StabilitySummary {
    /// Greatest righting arm over the sampled grid, meters.
    pub max_gz: f64,
    /// Heel angle of the greatest righting arm, degrees,
    /// reported at grid resolution.
    pub max_gz_heel_deg: f64,
    /// Heel range with positive righting arm, degrees.
    pub positive_range: Option<(f64, f64)>,
    /// _true_ if no sampled heel angle develops a positive righting arm.
    pub unstable: bool,
}
//
//
impl StabilitySummary {
    ///
    /// Builds the digest of `curve`.
    ///
    /// A tie of the maximum resolves to the lowest heel angle.
    pub fn from_curve(curve: &GzCurve) -> Self {
        let Some(first) = curve.first() else {
            return Self {
                max_gz: 0.0,
                max_gz_heel_deg: 0.0,
                positive_range: None,
                unstable: true,
            };
        };
        let mut max_point = first;
        for point in curve.iter().skip(1) {
            if point.gz > max_point.gz {
                max_point = point;
            }
        }
        Self {
            max_gz: max_point.gz,
            max_gz_heel_deg: max_point.heel_deg,
            positive_range: Self::positive_range(curve),
            unstable: max_point.gz <= 0.0,
        }
    }
    ///
    /// The contiguous run of positive righting arm anchored
    /// at the lowest sampled angle.
    ///
    /// The upper bound is interpolated linearly between the last positive
    /// and the first negative grid points. A series positive through
    /// the whole grid closes at the last sampled angle. A series going
    /// negative before ever being positive has no range at all.
    fn positive_range(curve: &[GzPoint]) -> Option<(f64, f64)> {
        let first = curve.first()?;
        if first.gz < 0.0 {
            return None;
        }
        let lower = first.heel_deg;
        let mut seen_positive = first.gz > 0.0;
        for (prev, point) in curve.iter().zip(curve.iter().skip(1)) {
            if point.gz < 0.0 {
                if !seen_positive {
                    return None;
                }
                let t = prev.gz / (prev.gz - point.gz);
                let upper = prev.heel_deg + t * (point.heel_deg - prev.heel_deg);
                return Some((lower, upper));
            }
            if point.gz > 0.0 {
                seen_positive = true;
            }
        }
        seen_positive.then(|| (lower, curve[curve.len() - 1].heel_deg))
    }
}
