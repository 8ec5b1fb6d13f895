#[cfg(test)]
#[path = "../tests/data/hydrostatic_table_test.rs"]
mod tests;
//
use crate::{
    error::Error,
    math::{axis::Axis, bound::Bound, OwnedSet},
};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Draft to displacement reference table.
///
/// Knots come from the vessel's hydrostatic particulars,
/// strictly increasing in draft.
pub struct HydrostaticTable {
    dbgid: DbgId,
    drafts: Axis,
    displacements: OwnedSet<f64>,
}
//
//
impl HydrostaticTable {
    ///
    /// Creates a validated instance from (draft, displacement) knots.
    ///
    /// Both values of each knot must be finite and positive,
    /// drafts must be strictly increasing within given precision.
    pub fn new<S>(parent: &DbgId, knots: S, precision: u8) -> Result<Self, Error>
    where
        S: Into<OwnedSet<(f64, f64)>>,
    {
        let dbgid = DbgId::with_parent(parent, "HydrostaticTable");
        let knots: OwnedSet<(f64, f64)> = knots.into();
        for (id, &(draft, displacement)) in knots.iter().enumerate() {
            if !(draft.is_finite() && draft > 0.0) {
                return Err(Error::Data(format!(
                    "{}.new | draft at id={} is not a positive finite value: {}",
                    dbgid, id, draft
                )));
            }
            if !(displacement.is_finite() && displacement > 0.0) {
                return Err(Error::Data(format!(
                    "{}.new | displacement at id={} is not a positive finite value: {}",
                    dbgid, id, displacement
                )));
            }
        }
        let drafts = Axis::new(
            "drafts",
            knots.iter().map(|&(draft, _)| draft).collect::<Vec<_>>(),
            precision,
        )
        .map_err(|why| Error::Data(format!("{}.new | {}", dbgid, why)))?;
        let displacements = knots
            .iter()
            .map(|&(_, displacement)| displacement)
            .collect();
        log::debug!("{}.new | {} knot(s) accepted", dbgid, knots.len());
        Ok(Self {
            dbgid,
            drafts,
            displacements,
        })
    }
    ///
    /// Displacement interpolated at `draft`, tonnes.
    ///
    /// Piecewise-linear between the bracketing knots, exact at the knots.
    /// A draft outside the table domain fails, extrapolation is not performed.
    pub fn displacement_for(&self, draft: f64) -> Result<f64, Error> {
        let dbgid = DbgId(format!("{}.displacement_for", self.dbgid));
        match self.drafts.bracket(draft) {
            Bound::Knot(id) => Ok(self.displacements[id]),
            Bound::Span(start, end) => {
                let t = self.drafts.fraction(start, draft);
                let d0 = self.displacements[start];
                let d1 = self.displacements[end];
                let val = d0 + (d1 - d0) * t;
                log::debug!(
                    "{} | draft={} between knots {} and {}: displacement={}",
                    dbgid,
                    draft,
                    start,
                    end,
                    val
                );
                Ok(val)
            }
            Bound::Below | Bound::Above => {
                let err = Error::OutOfRange(format!(
                    "{} | draft={} is outside the table domain {}..{}",
                    dbgid,
                    draft,
                    self.drafts[0],
                    self.drafts[self.drafts.len() - 1]
                ));
                log::warn!("{}", err);
                Err(err)
            }
        }
    }
}
