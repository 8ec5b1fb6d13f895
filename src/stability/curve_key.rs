//!
//! Each completed report is memoized behind a [CurveKey].
//!
//! It implements all required traits to be used as type of [IndexMap] key.
//!
//! [IndexMap]: indexmap::IndexMap
//
use super::vessel_state::VesselState;
///
/// Memo key of a (draft, KG) request.
///
/// Bit representation keeps the key hashable, byte-identical
/// inputs land on the same entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(super) struct CurveKey {
    draft_bits: u64,
    kg_bits: u64,
}
//
//
impl From<&VesselState> for CurveKey {
    fn from(state: &VesselState) -> Self {
        Self {
            draft_bits: state.draft.to_bits(),
            kg_bits: state.kg.to_bits(),
        }
    }
}
