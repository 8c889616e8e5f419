//! End-to-end checks of the documented validation scenarios
//!
//! Each test starts from a legal reference design, breaks exactly one rule
//! and checks the verdict and the report wording.

mod common;

use chassis_audit::core::config::ValidationOptions;
use chassis_audit::design::{EquipmentMount, LocationId};
use chassis_audit::validation::report::Report;
use chassis_audit::validation::weight::check_weight;
use chassis_audit::validation::{validate, ValidationStage, ValidatorKind};

#[test]
fn test_reference_designs_are_legal() {
    let options = ValidationOptions::default();
    for design in common::all() {
        let verdict = validate(&design, &options);
        assert!(verdict.passed, "{}: {}", design.display_name(), verdict.report);
        assert!(verdict.report.is_empty());
        assert_eq!(verdict.stage, ValidationStage::Done);
    }
}

/// Half a ton light is inside tolerance when underweight reporting is off
#[test]
fn test_scenario_underweight_within_tolerance_passes() {
    let options = ValidationOptions::default();
    let mut report = Report::new();
    assert!(check_weight(50.0, 49.5, &options, &mut report));
    assert!(report.is_empty());

    let strict = ValidationOptions {
        show_underweight: true,
        ..ValidationOptions::default()
    };
    assert!(!check_weight(50.0, 49.5, &strict, &mut report));
    assert!(report.mentions("49.5 is less than 50"));
}

#[test]
fn test_scenario_overweight_fails() {
    let options = ValidationOptions::default();
    let mut report = Report::new();
    assert!(!check_weight(50.0, 51.0, &options, &mut report));
    let text = report.to_text();
    assert!(text.contains("51"));
    assert!(text.contains("greater than"));
    assert!(text.contains("50"));

    let mut design = common::hunchback();
    design.tonnage = 49.0;
    let (passed, text) = validate(&design, &options).into_parts();
    assert!(!passed);
    assert!(text.contains("Weight: 50 is greater than 49"));
}

#[test]
fn test_scenario_bay_ammunition_shortfall_names_the_bay() {
    let mut design = common::jumpship();
    design.mounts[2] = EquipmentMount::new("ISAC10 Ammo", LocationId::Hull)
        .sized(2.0)
        .with_shots(15);
    let verdict = validate(&design, &ValidationOptions::default());
    assert!(!verdict.passed);
    assert_eq!(verdict.kind, Some(ValidatorKind::Capital));
    assert!(verdict.report.mentions("Nose AC/10 Bay: 15 shots"));
    assert!(verdict.report.mentions("20 required"));
}

#[test]
fn test_scenario_mismatched_pair_mounted_manipulators() {
    let mut design = common::squad();
    design.mounts[0] = EquipmentMount::new("BACargoLifter", LocationId::LeftArm);
    let verdict = validate(&design, &ValidationOptions::default());
    assert!(!verdict.passed);
    assert!(verdict.report.mentions("must match when pair-mounted"));

    design.mounts[1] = EquipmentMount::new("BACargoLifter", LocationId::RightArm);
    let verdict = validate(&design, &ValidationOptions::default());
    assert!(!verdict.report.mentions("pair-mounted"), "{}", verdict.report);
}

#[test]
fn test_scenario_support_vehicle_slot_overage() {
    let mut design = common::hauler();
    for _ in 0..5 {
        design.mounts.push(EquipmentMount::new("Searchlight", LocationId::Body));
    }
    let verdict = validate(&design, &ValidationOptions::default());
    assert!(!verdict.passed);
    assert!(verdict.report.mentions("Item slots: 10 used of 9 available (1 over)"));
}

#[test]
fn test_every_violation_is_reported_in_one_pass() {
    let mut design = common::hunchback();
    design.tonnage = 49.0;
    design.jump_mp = 6;
    let verdict = validate(&design, &ValidationOptions::default());
    assert!(!verdict.passed);
    assert!(verdict.report.mentions("greater than"));
    assert!(verdict.report.len() >= 2, "{}", verdict.report);
}
