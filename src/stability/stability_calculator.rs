#[cfg(test)]
#[path = "../tests/stability/stability_calculator_test.rs"]
mod tests;
//
use super::{
    curve_key::CurveKey, gz_curve::GzCurve, metacentre::Metacentre,
    stability_report::StabilityReport, summary::StabilitySummary, vessel_state::VesselState,
    warning::Warning,
};
use crate::{data::vessel_profile::VesselProfile, error::Error};
use indexmap::IndexMap;
use sal_sync::services::entity::dbg_id::DbgId;
use std::{cell::RefCell, rc::Rc};
///
/// Front of the stability pipeline.
///
/// Owns the reference data of one vessel and memoizes finished reports
/// by request, oldest entries leave first.
pub struct StabilityCalculator {
    dbgid: DbgId,
    profile: Rc<VesselProfile>,
    ///
    /// Finished reports in request order.
    reports: RefCell<IndexMap<CurveKey, Rc<StabilityReport>>>,
}
//
//
impl StabilityCalculator {
    ///
    /// Lower bound of KG typical for cargo vessels, meters.
    const KG_TYPICAL_MIN: f64 = 0.0;
    ///
    /// Upper bound of KG typical for cargo vessels, meters.
    const KG_TYPICAL_MAX: f64 = 20.0;
    ///
    /// Upper limit of memoized reports.
    const MEMO_CAPACITY: usize = 64;
    ///
    /// Creates a new instance over `profile`.
    pub fn new(parent: &DbgId, profile: Rc<VesselProfile>) -> Self {
        let dbgid = DbgId::with_parent(parent, "StabilityCalculator");
        log::debug!("{}.new | vessel='{}'", dbgid, profile.name);
        Self {
            dbgid,
            profile,
            reports: RefCell::new(IndexMap::new()),
        }
    }
    ///
    /// Computes the full report for `state`.
    ///
    /// A draft outside the hydrostatic table fails the whole request,
    /// no partial series is produced. Advisory conditions (clamped
    /// displacement, negative stability, negative GM estimate, unusual KG)
    /// complete the pipeline with warnings attached to the full report.
    /// Repeated byte-identical requests share the memoized report.
    pub fn calculate(&self, state: &VesselState) -> Result<Rc<StabilityReport>, Error> {
        let dbgid = DbgId(format!("{}.calculate", self.dbgid));
        let key = CurveKey::from(state);
        if let Some(report) = self.reports.borrow().get(&key) {
            log::debug!(
                "{} | draft={} kg={}: memoized report",
                dbgid,
                state.draft,
                state.kg
            );
            return Ok(Rc::clone(report));
        }
        let displacement = self.profile.hydrostatics.displacement_for(state.draft)?;
        let mut warnings = vec![];
        let (kn_points, clamped_to) = self.profile.kn.kn_for(displacement);
        if let Some(clamped_to) = clamped_to {
            warnings.push(Warning::DisplacementClamped {
                requested: displacement,
                clamped_to,
            });
        }
        if !(Self::KG_TYPICAL_MIN..=Self::KG_TYPICAL_MAX).contains(&state.kg) {
            warnings.push(Warning::UnusualKg { kg: state.kg });
        }
        let curve = GzCurve::new(&kn_points, state.kg);
        let summary = StabilitySummary::from_curve(&curve);
        if summary.unstable {
            warnings.push(Warning::NegativeStability);
        }
        let metacentre = Metacentre::new(state.draft, state.kg);
        if metacentre.gm <= 0.0 {
            warnings.push(Warning::NegativeGm);
        }
        for warning in &warnings {
            log::warn!(
                "{} | draft={} kg={}: {}",
                dbgid,
                state.draft,
                state.kg,
                warning
            );
        }
        log::debug!(
            "{} | draft={} kg={}: displacement={} max_gz={} at {} deg",
            dbgid,
            state.draft,
            state.kg,
            displacement,
            summary.max_gz,
            summary.max_gz_heel_deg
        );
        let report = Rc::new(StabilityReport {
            state: *state,
            displacement,
            metacentre,
            curve,
            summary,
            warnings,
        });
        let mut reports = self.reports.borrow_mut();
        if reports.len() >= Self::MEMO_CAPACITY {
            reports.shift_remove_index(0);
        }
        reports.insert(key, Rc::clone(&report));
        Ok(report)
    }
}
