#[cfg(test)]
#[path = "../tests/math/axis_test.rs"]
mod tests;
//
use super::{bound::Bound, OwnedSet};
use crate::error::Error;
use std::{cmp::Ordering, ops::Deref};
///
/// Ordering method (similar to [Ord]) with given approximation.
pub(crate) trait ApproxOrd<Rhs = Self> {
    ///
    /// Compare with precision.
    fn approx_cmp(&self, rhs: &Rhs, precision: u8) -> Ordering;
}
//
//
macro_rules! impl_approx_ord {
    ($($ty:ty),+) => {
        $(
            impl ApproxOrd<$ty> for $ty {
                fn approx_cmp(&self, rhs: &$ty, precision: u8) -> Ordering {
                    let base = 10 as $ty;
                    let pr = precision as i32;
                    let this = (self * base.powi(pr)).trunc();
                    let other = (rhs * base.powi(pr)).trunc();
                    this.total_cmp(&other)
                }
            }
        )+
    };
}
//
//
impl_approx_ord! { f32, f64 }
///
/// Strictly increasing sequence of knots, the lookup side of a reference table.
#[derive(Clone, Debug)]
pub(crate) struct Axis {
    knots: OwnedSet<f64>,
    precision: u8,
}
//
//
impl Axis {
    ///
    /// Returns an instance validated with given precision.
    ///
    /// `label` points at the rejected axis in the error message.
    pub(crate) fn new<S>(label: &str, knots: S, precision: u8) -> Result<Self, Error>
    where
        S: Into<OwnedSet<f64>>,
    {
        let knots: OwnedSet<f64> = knots.into();
        if knots.len() < 2 {
            return Err(Error::Data(format!(
                "Axis.new | axis='{}' has {} knot(s), at least 2 required",
                label,
                knots.len()
            )));
        }
        if let Some(id) = knots.iter().position(|knot| !knot.is_finite()) {
            return Err(Error::Data(format!(
                "Axis.new | axis='{}' has a non-finite knot at id={}",
                label, id
            )));
        }
        if let Some(id) = knots
            .windows(2)
            .position(|win| win[0].approx_cmp(&win[1], precision) != Ordering::Less)
        {
            return Err(Error::Data(format!(
                "Axis.new | axis='{}' is not strictly increasing at id={}",
                label, id
            )));
        }
        Ok(Self { knots, precision })
    }
    ///
    /// Position of `val` relative to the knots.
    pub(crate) fn bracket(&self, val: f64) -> Bound {
        use Ordering::*;
        //
        let pr = self.precision;
        let last = self.knots.len() - 1;
        if let Less = val.approx_cmp(&self.knots[0], pr) {
            return Bound::Below;
        }
        if let Greater = val.approx_cmp(&self.knots[last], pr) {
            return Bound::Above;
        }
        let insert_id = self
            .knots
            .partition_point(|knot| knot.approx_cmp(&val, pr) == Less);
        match self.knots[insert_id].approx_cmp(&val, pr) {
            Equal => Bound::Knot(insert_id),
            _ => Bound::Span(insert_id - 1, insert_id),
        }
    }
    ///
    /// Interpolation fraction of `val` within the span starting at `start`.
    ///
    /// Meaningful for `val` inside the span only, see [Axis::bracket].
    pub(crate) fn fraction(&self, start: usize, val: f64) -> f64 {
        let k0 = self.knots[start];
        let k1 = self.knots[start + 1];
        (val - k0) / (k1 - k0)
    }
}
//
//
impl Deref for Axis {
    type Target = [f64];
    //
    //
    fn deref(&self) -> &Self::Target {
        self.knots.deref()
    }
}
