use super::*;
use crate::data::{del_monte::del_monte, hydrostatic_table::HydrostaticTable, kn_table::KnTable};
use debugging::session::debug_session::{Backtrace, DebugSession, LogLevel};
use std::{sync::Once, time::Duration};
use testing::stuff::max_test_duration::TestDuration;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    //
    // Implement your initialisation code to be called only once for current test file.
    INIT.call_once(|| {})
}
///
/// Small profile: drafts of 1..3 m, cross curves covering 1500..2500 t only,
/// so the lowest drafts clamp on the displacement axis.
fn profile(parent: &DbgId) -> VesselProfile {
    let hydrostatics = HydrostaticTable::new(
        parent,
        vec![(1.0, 1000.0), (2.0, 2000.0), (3.0, 3000.0)],
        3,
    )
    .unwrap();
    let kn = KnTable::new(
        parent,
        vec![0.0, 30.0, 60.0, 90.0],
        vec![
            (1500.0, vec![0.0, 3.0, 5.0, 5.5]),
            (2500.0, vec![0.0, 2.5, 4.5, 5.0]),
        ],
        3,
    )
    .unwrap();
    VesselProfile::new("test vessel", hydrostatics, kn)
}
///
/// Identical requests yield identical reports,
/// repeated ones share the memoized allocation.
#[test]
fn calculate_deterministic() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("stability_calculator_test.calculate_deterministic".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let state = VesselState::new(1.75, 1.2);
    let first = StabilityCalculator::new(&dbgid, Rc::new(profile(&dbgid)))
        .calculate(&state)
        .unwrap();
    let calculator = StabilityCalculator::new(&dbgid, Rc::new(profile(&dbgid)));
    let second = calculator.calculate(&state).unwrap();
    let memoized = calculator.calculate(&state).unwrap();
    println!("{} | first={:?}", dbgid, first);
    assert_eq!(
        *first, *second,
        "{} | reports of identical requests differ",
        dbgid
    );
    assert!(
        Rc::ptr_eq(&second, &memoized),
        "{} | repeated request is not memoized",
        dbgid
    );
    test_duration.exit();
}
///
/// Draft outside the hydrostatic table aborts the whole request.
#[test]
fn calculate_out_of_range() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("stability_calculator_test.calculate_out_of_range".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let calculator = StabilityCalculator::new(&dbgid, Rc::new(profile(&dbgid)));
    #[rustfmt::skip]
    let test_data = [
        // 0
        0.5,
        3.5,
    ];
    for (step, draft) in test_data.into_iter().enumerate() {
        let result = calculator.calculate(&VesselState::new(draft, 1.0));
        let is_out_of_range = matches!(result, Err(Error::OutOfRange(_)));
        println!("{} | step={} draft={} is_out_of_range={}", dbgid, step, draft, is_out_of_range);
        assert!(
            is_out_of_range,
            "{} | step={} draft={} expected Err(Error::OutOfRange)",
            dbgid,
            step,
            draft
        );
    }
    test_duration.exit();
}
///
/// Displacement below the cross-curve axis completes with
/// the clamp advisory and a fully populated report.
#[test]
fn calculate_clamped() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("stability_calculator_test.calculate_clamped".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let calculator = StabilityCalculator::new(&dbgid, Rc::new(profile(&dbgid)));
    let report = calculator.calculate(&VesselState::new(1.0, 1.0)).unwrap();
    println!("{} | report={:?}", dbgid, report);
    assert_eq!(report.displacement, 1000.0, "{} | unexpected displacement", dbgid);
    assert!(
        report.warnings.contains(&Warning::DisplacementClamped {
            requested: 1000.0,
            clamped_to: 1500.0,
        }),
        "{} | warnings={:?} miss the clamp advisory",
        dbgid,
        report.warnings
    );
    assert_eq!(report.curve.len(), 4, "{} | unexpected grid length", dbgid);
    assert!(
        !report.summary.unstable,
        "{} | unexpected unstable flag",
        dbgid
    );
    test_duration.exit();
}
///
/// Excessive KG completes with the negative-stability advisories attached.
#[test]
fn calculate_unstable() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("stability_calculator_test.calculate_unstable".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let calculator = StabilityCalculator::new(&dbgid, Rc::new(profile(&dbgid)));
    let report = calculator.calculate(&VesselState::new(2.0, 30.0)).unwrap();
    println!("{} | summary={:?} warnings={:?}", dbgid, report.summary, report.warnings);
    assert!(report.summary.unstable, "{} | expected unstable", dbgid);
    for warning in [
        Warning::UnusualKg { kg: 30.0 },
        Warning::NegativeStability,
        Warning::NegativeGm,
    ] {
        assert!(
            report.warnings.contains(&warning),
            "{} | warnings={:?} miss {:?}",
            dbgid,
            report.warnings,
            warning
        );
    }
    assert_eq!(
        report.curve.len(),
        4,
        "{} | advisory must not truncate the series",
        dbgid
    );
    test_duration.exit();
}
///
/// With KG of zero the pipeline reproduces the interpolated KN values.
#[test]
fn calculate_zero_kg_identity() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("stability_calculator_test.calculate_zero_kg_identity".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let calculator = StabilityCalculator::new(&dbgid, Rc::new(profile(&dbgid)));
    let report = calculator.calculate(&VesselState::new(2.0, 0.0)).unwrap();
    for (step, point) in report.curve.iter().enumerate() {
        println!("{} | step={} point={:?}", dbgid, step, point);
        assert_eq!(
            point.gz, point.kn,
            "{} | step={} heel={} gz={} kn={}",
            dbgid, step, point.heel_deg, point.gz, point.kn
        );
    }
    test_duration.exit();
}
///
/// MV Del Monte at 8.0 m draft and KG of 8.5 m.
#[test]
fn calculate_del_monte() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let dbgid = DbgId("stability_calculator_test.calculate_del_monte".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let calculator = StabilityCalculator::new(&dbgid, Rc::new(del_monte(&dbgid).unwrap()));
    let report = calculator.calculate(&VesselState::new(8.0, 8.5)).unwrap();
    println!("{} | summary={:?}", dbgid, report.summary);
    assert_eq!(
        report.displacement, 37419.0,
        "{} | displacement={} target=37419",
        dbgid, report.displacement
    );
    assert_eq!(
        report.curve[0].gz, 0.0,
        "{} | gz at zero heel={} target=0",
        dbgid, report.curve[0].gz
    );
    assert_eq!(
        report.summary.max_gz_heel_deg % 5.0,
        0.0,
        "{} | max angle={} is not a grid point",
        dbgid,
        report.summary.max_gz_heel_deg
    );
    assert_eq!(
        report.summary.max_gz_heel_deg, 25.0,
        "{} | max angle={} target=25",
        dbgid, report.summary.max_gz_heel_deg
    );
    assert!(
        (report.summary.max_gz - 0.5319).abs() < 1e-3,
        "{} | max_gz={} target~0.5319",
        dbgid,
        report.summary.max_gz
    );
    let (lower, upper) = report.summary.positive_range.unwrap();
    assert_eq!(lower, 0.0, "{} | lower bound={} target=0", dbgid, lower);
    assert!(
        (upper - 47.36).abs() < 0.1,
        "{} | upper bound={} target~47.36",
        dbgid,
        upper
    );
    assert!(
        report.warnings.is_empty(),
        "{} | unexpected warnings={:?}",
        dbgid,
        report.warnings
    );
    test_duration.exit();
}
