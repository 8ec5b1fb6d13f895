///
/// Position of a lookup value relative to a monotonic axis.
#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum Bound {
    ///
    /// Below the first knot.
    Below,
    ///
    /// Exact match of the knot with the index.
    Knot(usize),
    ///
    /// In between two neighboring knots.
    Span(usize, usize),
    ///
    /// Above the last knot.
    Above,
}
