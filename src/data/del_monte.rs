//!
//! Built-in reference data of MV Del Monte.
//
use super::{hydrostatic_table::HydrostaticTable, kn_table::KnTable, vessel_profile::VesselProfile};
use crate::error::Error;
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Comparison precision of the table axes, decimal digits.
const PRECISION: u8 = 3;
///
/// Reference data of MV Del Monte.
///
/// Hydrostatic knots cover drafts of 2.0 to 14.0 m,
/// cross curves cover displacements of 10 000 to 85 000 t
/// over heel angles of 0 to 90 degrees with a 5 degree step.
pub fn del_monte(parent: &DbgId) -> Result<VesselProfile, Error> {
    let hydrostatics = HydrostaticTable::new(
        parent,
        vec![
            (2.0, 10000.0),
            (3.0, 13276.0),
            (4.0, 17070.0),
            (5.0, 21381.0),
            (6.0, 26210.0),
            (7.0, 31556.0),
            (8.0, 37419.0),
            (9.0, 43800.0),
            (10.0, 50698.0),
            (11.0, 58114.0),
            (12.0, 66048.0),
            (13.0, 74498.0),
            (14.0, 83467.0),
        ],
        PRECISION,
    )?;
    let heels = vec![
        0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
        75.0, 80.0, 85.0, 90.0,
    ];
    #[rustfmt::skip]
    let rows = vec![
        (10000.0, vec![0.000, 0.991, 1.960, 2.885, 3.747, 4.531, 5.225, 5.822, 6.319, 6.718, 7.025, 7.250, 7.405, 7.503, 7.559, 7.587, 7.597, 7.600, 7.600]),
        (20000.0, vec![0.000, 0.959, 1.896, 2.790, 3.624, 4.383, 5.054, 5.631, 6.112, 6.498, 6.795, 7.012, 7.162, 7.257, 7.312, 7.338, 7.349, 7.351, 7.351]),
        (30000.0, vec![0.000, 0.926, 1.831, 2.696, 3.502, 4.234, 4.883, 5.440, 5.905, 6.278, 6.565, 6.775, 6.920, 7.012, 7.064, 7.090, 7.100, 7.102, 7.102]),
        (40000.0, vec![0.000, 0.894, 1.767, 2.601, 3.379, 4.086, 4.712, 5.250, 5.698, 6.058, 6.335, 6.537, 6.677, 6.766, 6.817, 6.842, 6.851, 6.853, 6.853]),
        (50000.0, vec![0.000, 0.861, 1.703, 2.507, 3.256, 3.937, 4.541, 5.059, 5.491, 5.838, 6.104, 6.300, 6.435, 6.520, 6.569, 6.593, 6.602, 6.604, 6.604]),
        (60000.0, vec![0.000, 0.829, 1.639, 2.412, 3.133, 3.789, 4.369, 4.868, 5.284, 5.618, 5.874, 6.063, 6.192, 6.274, 6.322, 6.345, 6.353, 6.355, 6.356]),
        (70000.0, vec![0.000, 0.796, 1.575, 2.318, 3.011, 3.641, 4.198, 4.678, 5.077, 5.398, 5.644, 5.825, 5.950, 6.029, 6.074, 6.096, 6.105, 6.107, 6.107]),
        (85000.0, vec![0.000, 0.748, 1.478, 2.176, 2.827, 3.418, 3.942, 4.392, 4.767, 5.068, 5.299, 5.469, 5.586, 5.660, 5.703, 5.723, 5.731, 5.733, 5.733]),
    ];
    let kn = KnTable::new(parent, heels, rows, PRECISION)?;
    Ok(VesselProfile::new("MV Del Monte", hydrostatics, kn))
}
