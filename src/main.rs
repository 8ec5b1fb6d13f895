use std::rc::Rc;
use data::del_monte::del_monte;
use sal_sync::services::entity::dbg_id::DbgId;
use crate::stability::{stability_calculator::StabilityCalculator, vessel_state::VesselState};
//
mod data;
mod error;
mod math;
mod stability;
//
fn main() {
    let dbgid = DbgId("main".to_string());
    let profile = Rc::new(del_monte(&dbgid).unwrap());
    let calculator = StabilityCalculator::new(&dbgid, profile);
    for draft in [4.0, 8.0, 10.0, 12.0] {
        for kg in [7.0, 8.5, 11.0] {
            let state = VesselState::new(draft, kg);
            let report = calculator.calculate(&state).unwrap();
            dbg!(
                state,
                report.displacement,
                report.metacentre.gm,
                &report.summary,
                &report.warnings
            );
        }
    }
}
