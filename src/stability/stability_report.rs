use super::{
    gz_curve::GzCurve, metacentre::Metacentre, summary::StabilitySummary,
    vessel_state::VesselState, warning::Warning,
};
///
/// Complete output of one stability computation.
#[derive(Clone, PartialEq, Debug)]
pub struct StabilityReport {
    ///
    /// The request the report answers.
    pub state: VesselState,
    ///
    /// Displacement interpolated from the hydrostatic table, tonnes.
    pub displacement: f64,
    ///
    /// Supplementary closed-form initial-stability scalars.
    pub metacentre: Metacentre,
    ///
    /// Righting-arm series over the heel grid.
    pub curve: GzCurve,
    ///
    /// Scalar digest of the series.
    pub summary: StabilitySummary,
    ///
    /// Advisory signals, the report stays fully populated.
    pub warnings: Vec<Warning>,
}
