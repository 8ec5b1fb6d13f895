#[cfg(test)]
#[path = "../tests/stability/metacentre_test.rs"]
mod tests;
//
///
/// Closed-form initial-stability estimate.
///
/// KB is taken as 0.52 of the draft and BM as half of the squared draft,
/// preliminary approximations for a typical cargo hull. These scalars
/// supplement the KN-based series and take no part in deriving it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Metacentre {
    /// Center of buoyancy above keel, meters.
    pub kb: f64,
    /// Metacentric radius, meters.
    pub bm: f64,
    /// Metacentre above keel, meters.
    pub km: f64,
    /// Metacentric height, meters.
    pub gm: f64,
}
//
//
impl Metacentre {
    ///
    /// Estimates the scalars for given draft and KG.
    pub fn new(draft: f64, kg: f64) -> Self {
        let kb = 0.52 * draft;
        let bm = draft * draft / 2.0;
        let km = kb + bm;
        Self {
            kb,
            bm,
            km,
            gm: km - kg,
        }
    }
}
