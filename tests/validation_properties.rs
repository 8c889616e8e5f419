//! Properties every validation run must hold

mod common;

use chassis_audit::catalog::{catalog, UnitClass};
use chassis_audit::core::config::ValidationOptions;
use chassis_audit::core::rounding::Granularity;
use chassis_audit::core::types::RulesLevel;
use chassis_audit::design::{EquipmentMount, LocationId};
use chassis_audit::validation::base::BaseValidator;
use chassis_audit::validation::combinations::correct_fire_control;
use chassis_audit::validation::report::Report;
use chassis_audit::validation::weight::final_rounding;
use chassis_audit::validation::{validate, validate_all};
use proptest::prelude::*;

const RULES_LEVELS: [RulesLevel; 5] = [
    RulesLevel::Introductory,
    RulesLevel::Standard,
    RulesLevel::Advanced,
    RulesLevel::Experimental,
    RulesLevel::Unofficial,
];

#[test]
fn test_validation_is_deterministic() {
    let options = ValidationOptions::default();
    let mut designs = common::all();
    let mut broken = common::hunchback();
    broken.tonnage = 45.0;
    broken.mounts.push(EquipmentMount::new("ISArtemisIV", LocationId::LeftArm));
    designs.push(broken);

    for design in &designs {
        assert_eq!(validate(design, &options), validate(design, &options));
    }
    let (first, _) = validate_all(&designs, &options);
    let (second, _) = validate_all(&designs, &options);
    assert_eq!(first, second);
}

#[test]
fn test_weight_is_the_sum_of_rounded_categories() {
    let options = ValidationOptions::default();
    for design in common::all() {
        common::with_validator(&design, &options, |validator| {
            let breakdown = validator.weight_breakdown();
            let summed: f64 = breakdown.entries().iter().map(|(_, tons)| tons).sum();
            assert_eq!(
                validator.calculate_weight(),
                final_rounding(summed, breakdown.is_kilogram_standard()),
                "{}",
                design.display_name()
            );
            assert_eq!(validator.calculate_weight(), design.tonnage, "{}", design.display_name());
        });
    }
}

#[test]
fn test_mirrored_designs_get_the_same_verdict() {
    let options = ValidationOptions::default();
    let mut lopsided = common::fighter();
    lopsided.mounts[3] = EquipmentMount::new("ISMediumLaser", LocationId::LeftWing);
    let mut designs = common::all();
    designs.push(lopsided);

    for design in &designs {
        let original = validate(design, &options);
        let mirrored = validate(&common::mirrored(design), &options);
        assert_eq!(original.passed, mirrored.passed, "{}", design.display_name());
        assert_eq!(original.report.len(), mirrored.report.len(), "{}", design.display_name());
    }
}

proptest! {
    #[test]
    fn artemis_count_must_match_launchers(devices in 0usize..4) {
        let mut design = common::fighter();
        for _ in 0..devices {
            design.mounts.push(EquipmentMount::new("ISArtemisIV", LocationId::Nose));
        }
        let options = ValidationOptions::default();
        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Fighter);
        let mut report = Report::new();
        let ok = correct_fire_control(&base, &mut report);
        prop_assert_eq!(ok, devices <= 1);
        prop_assert_eq!(report.mentions("count ("), devices > 1);
    }

    #[test]
    fn raising_the_rules_level_never_breaks_tech(
        which in 0usize..6,
        lower in 0usize..5,
        raise in 0usize..5,
        year in 2300u16..3150,
    ) {
        let higher = (lower + raise).min(RULES_LEVELS.len() - 1);
        let mut design = common::all().swap_remove(which);
        design.year = year;
        let options = ValidationOptions::default();

        design.rules_level = RULES_LEVELS[lower];
        let low_ok = common::with_validator(&design, &options, |v| v.correct_tech(&mut Report::new()));
        design.rules_level = RULES_LEVELS[higher];
        let high_ok = common::with_validator(&design, &options, |v| v.correct_tech(&mut Report::new()));
        prop_assert!(!low_ok || high_ok);
    }

    #[test]
    fn rounding_is_idempotent(tons in 0.0f64..2_500_000.0, idx in 0usize..5) {
        let grid = Granularity::ALL[idx];
        let ops: [fn(Granularity, f64) -> f64; 4] = [
            Granularity::ceil,
            Granularity::floor,
            Granularity::round,
            Granularity::ceil_max_half,
        ];
        for round in ops {
            let once = round(grid, tons);
            prop_assert_eq!(round(grid, once), once);
        }
    }
}
