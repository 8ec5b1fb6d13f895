///
/// Loading condition of one computation request.
///
/// Created from external input, consumed once, never mutated,
/// a new instance replaces it on the next request.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VesselState {
    /// Mean draft, meters.
    pub draft: f64,
    /// Center of gravity above keel, meters.
    pub kg: f64,
}
//
//
impl VesselState {
    ///
    /// Creates a new instance.
    pub fn new(draft: f64, kg: f64) -> Self {
        Self { draft, kg }
    }
}
