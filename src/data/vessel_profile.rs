use super::{hydrostatic_table::HydrostaticTable, kn_table::KnTable};
///
/// Reference data of one vessel.
///
/// It bundles the tables the stability pipeline interpolates over
/// and is injected into the calculator at construction,
/// so the same pipeline serves any vessel variant.
pub struct VesselProfile {
    ///
    /// Vessel name, used for reporting only.
    pub name: String,
    ///
    /// Draft to displacement table.
    pub hydrostatics: HydrostaticTable,
    ///
    /// Cross curves of stability.
    pub kn: KnTable,
}
//
//
impl VesselProfile {
    ///
    /// Creates a new instance.
    pub fn new(name: impl Into<String>, hydrostatics: HydrostaticTable, kn: KnTable) -> Self {
        Self {
            name: name.into(),
            hydrostatics,
            kn,
        }
    }
}
