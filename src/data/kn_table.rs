#[cfg(test)]
#[path = "../tests/data/kn_table_test.rs"]
mod tests;
//
use crate::{
    error::Error,
    math::{axis::Axis, bound::Bound, OwnedSet},
};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// One cross-curve sample: KN at a heel angle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct KnPoint {
    /// Heel angle, degrees.
    pub heel_deg: f64,
    /// Righting arm about the keel, meters.
    pub kn: f64,
}
///
/// Cross curves of stability, KN over (displacement, heel angle).
///
/// Rows follow the displacement axis, columns follow the heel axis.
pub struct KnTable {
    dbgid: DbgId,
    displacements: Axis,
    heels: Axis,
    rows: OwnedSet<OwnedSet<f64>>,
}
//
//
impl KnTable {
    ///
    /// Creates a validated instance.
    ///
    /// `heels` is the heel-angle grid in degrees, `rows` holds one
    /// (displacement, KN per grid angle) entry per reference displacement.
    /// Both axes must be strictly increasing within given precision,
    /// every row must match the grid length.
    pub fn new(
        parent: &DbgId,
        heels: Vec<f64>,
        rows: Vec<(f64, Vec<f64>)>,
        precision: u8,
    ) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "KnTable");
        let heels = Axis::new("heels", heels, precision)
            .map_err(|why| Error::Data(format!("{}.new | {}", dbgid, why)))?;
        let displacements = Axis::new(
            "displacements",
            rows.iter()
                .map(|&(displacement, _)| displacement)
                .collect::<Vec<_>>(),
            precision,
        )
        .map_err(|why| Error::Data(format!("{}.new | {}", dbgid, why)))?;
        let rows: OwnedSet<OwnedSet<f64>> = rows
            .into_iter()
            .map(|(_, row)| OwnedSet::from(row))
            .collect();
        for (id, row) in rows.iter().enumerate() {
            if row.len() != heels.len() {
                return Err(Error::Data(format!(
                    "{}.new | row at id={} has {} value(s), grid expects {}",
                    dbgid,
                    id,
                    row.len(),
                    heels.len()
                )));
            }
            if let Some(col_id) = row.iter().position(|kn| !kn.is_finite()) {
                return Err(Error::Data(format!(
                    "{}.new | row at id={} has a non-finite KN at id={}",
                    dbgid, id, col_id
                )));
            }
        }
        log::debug!(
            "{}.new | {} row(s) over {} angle(s) accepted",
            dbgid,
            rows.len(),
            heels.len()
        );
        Ok(Self {
            dbgid,
            displacements,
            heels,
            rows,
        })
    }
    ///
    /// KN over the whole heel grid, interpolated at `displacement`.
    ///
    /// Each heel column is interpolated piecewise-linearly along
    /// the displacement axis. A displacement outside the axis is clamped
    /// to the nearest boundary row, the second value of the result carries
    /// the boundary displacement used so the caller can warn about it.
    pub fn kn_for(&self, displacement: f64) -> (Vec<KnPoint>, Option<f64>) {
        let dbgid = DbgId(format!("{}.kn_for", self.dbgid));
        let last = self.displacements.len() - 1;
        let (row, clamped_to) = match self.displacements.bracket(displacement) {
            Bound::Knot(id) => (self.rows[id].to_vec(), None),
            Bound::Span(start, end) => {
                let t = self.displacements.fraction(start, displacement);
                let row = self.rows[start]
                    .iter()
                    .zip(self.rows[end].iter())
                    .map(|(&kn0, &kn1)| kn0 + (kn1 - kn0) * t)
                    .collect();
                (row, None)
            }
            Bound::Below => {
                let boundary = self.displacements[0];
                log::warn!(
                    "{} | displacement={} below the axis, clamped to {}",
                    dbgid,
                    displacement,
                    boundary
                );
                (self.rows[0].to_vec(), Some(boundary))
            }
            Bound::Above => {
                let boundary = self.displacements[last];
                log::warn!(
                    "{} | displacement={} above the axis, clamped to {}",
                    dbgid,
                    displacement,
                    boundary
                );
                (self.rows[last].to_vec(), Some(boundary))
            }
        };
        let points = self
            .heels
            .iter()
            .zip(row)
            .map(|(&heel_deg, kn)| KnPoint { heel_deg, kn })
            .collect();
        (points, clamped_to)
    }
}
