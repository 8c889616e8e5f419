//! Single entry point: classify a design, pick its validator, run the stages

use super::report::Report;
use super::units::{
    BattleArmorValidator, CapitalValidator, FighterValidator, HandheldValidator, MekValidator,
    SmallCraftValidator, SupportVehicleValidator, VehicleValidator,
};
use super::validator::{UnitValidator, ValidationStage};
use crate::catalog::{catalog, EquipmentCatalog};
use crate::core::config::ValidationOptions;
use crate::core::error::{AuditError, Result};
use crate::design::{UnitDesign, UnitDetails};
use serde::Serialize;
use std::fmt;

/// Which validator a design is checked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ValidatorKind {
    Mek,
    Vehicle,
    SupportVehicle,
    Fighter,
    SmallCraft,
    Capital,
    BattleArmor,
    Handheld,
}

impl ValidatorKind {
    pub const ALL: [ValidatorKind; 8] = [
        ValidatorKind::Mek,
        ValidatorKind::Vehicle,
        ValidatorKind::SupportVehicle,
        ValidatorKind::Fighter,
        ValidatorKind::SmallCraft,
        ValidatorKind::Capital,
        ValidatorKind::BattleArmor,
        ValidatorKind::Handheld,
    ];

    /// Pick the validator for a design
    ///
    /// The category tag decides. A walking or spaceflight movement mode on a
    /// category that cannot use it, or the reverse, means the design cannot
    /// be placed in any category.
    pub fn classify(design: &UnitDesign) -> Result<Self> {
        let kind = match &design.details {
            UnitDetails::Mek(_) => ValidatorKind::Mek,
            UnitDetails::Vehicle(_) => ValidatorKind::Vehicle,
            UnitDetails::SupportVehicle(_) => ValidatorKind::SupportVehicle,
            UnitDetails::Fighter(_) => ValidatorKind::Fighter,
            UnitDetails::SmallCraft(_) => ValidatorKind::SmallCraft,
            UnitDetails::Capital(_) => ValidatorKind::Capital,
            UnitDetails::BattleArmor(_) => ValidatorKind::BattleArmor,
            UnitDetails::Handheld(_) => ValidatorKind::Handheld,
            UnitDetails::Unsupported { kind } => {
                return Err(AuditError::Unclassifiable {
                    category: kind.clone(),
                })
            }
        };

        let mode = design.movement_mode;
        if mode.is_legged() != (kind == ValidatorKind::Mek)
            || mode.is_aerospace() != kind.is_aerospace()
        {
            return Err(AuditError::CategoryMismatch { mode });
        }
        Ok(kind)
    }

    pub fn is_aerospace(self) -> bool {
        matches!(
            self,
            ValidatorKind::Fighter | ValidatorKind::SmallCraft | ValidatorKind::Capital
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ValidatorKind::Mek => "Mek",
            ValidatorKind::Vehicle => "Combat Vehicle",
            ValidatorKind::SupportVehicle => "Support Vehicle",
            ValidatorKind::Fighter => "Aerospace Fighter",
            ValidatorKind::SmallCraft => "Small Craft",
            ValidatorKind::Capital => "Capital Ship",
            ValidatorKind::BattleArmor => "Battle Armor",
            ValidatorKind::Handheld => "Handheld Weapon",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one validation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub report: Report,
    /// `None` when the design could not be classified
    pub kind: Option<ValidatorKind>,
    /// The stage the run ended in
    pub stage: ValidationStage,
}

impl Verdict {
    fn unclassified(error: AuditError) -> Self {
        let mut report = Report::new();
        report.add(error.to_string());
        Self {
            passed: false,
            report,
            kind: None,
            stage: ValidationStage::Unclassified,
        }
    }

    /// Pass flag and report text
    pub fn into_parts(self) -> (bool, String) {
        (self.passed, self.report.to_text())
    }
}

/// Validate a design against the built-in catalog
pub fn validate(design: &UnitDesign, options: &ValidationOptions) -> Verdict {
    validate_with_catalog(design, options, catalog())
}

pub fn validate_with_catalog(
    design: &UnitDesign,
    options: &ValidationOptions,
    catalog: &EquipmentCatalog,
) -> Verdict {
    let kind = match ValidatorKind::classify(design) {
        Ok(kind) => kind,
        Err(err) => {
            tracing::warn!(unit = %design.display_name(), error = %err, "Could not classify design");
            return Verdict::unclassified(err);
        }
    };

    if options.skip {
        tracing::debug!(unit = %design.display_name(), "Validation skipped");
        return Verdict {
            passed: true,
            report: Report::new(),
            kind: Some(kind),
            stage: ValidationStage::Done,
        };
    }

    let mut report = Report::new();
    let passed = match &design.details {
        UnitDetails::Mek(d) => run_stages(&MekValidator::new(design, d, options, catalog), &mut report),
        UnitDetails::Vehicle(d) => {
            run_stages(&VehicleValidator::new(design, d, options, catalog), &mut report)
        }
        UnitDetails::SupportVehicle(d) => run_stages(
            &SupportVehicleValidator::new(design, d, options, catalog),
            &mut report,
        ),
        UnitDetails::Fighter(d) => {
            run_stages(&FighterValidator::new(design, d, options, catalog), &mut report)
        }
        UnitDetails::SmallCraft(d) => run_stages(
            &SmallCraftValidator::new(design, d, options, catalog),
            &mut report,
        ),
        UnitDetails::Capital(d) => {
            run_stages(&CapitalValidator::new(design, d, options, catalog), &mut report)
        }
        UnitDetails::BattleArmor(d) => run_stages(
            &BattleArmorValidator::new(design, d, options, catalog),
            &mut report,
        ),
        UnitDetails::Handheld(d) => {
            run_stages(&HandheldValidator::new(design, d, options, catalog), &mut report)
        }
        UnitDetails::Unsupported { kind } => {
            return Verdict::unclassified(AuditError::Unclassifiable {
                category: kind.clone(),
            })
        }
    };

    tracing::debug!(
        unit = %design.display_name(),
        kind = %kind,
        passed,
        lines = report.len(),
        "Validated design"
    );
    Verdict {
        passed,
        report,
        kind: Some(kind),
        stage: ValidationStage::Done,
    }
}

fn run_stages<V: UnitValidator>(validator: &V, report: &mut Report) -> bool {
    validator.correct_entity(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MovementMode;
    use crate::validation::units::mek::tests::hunchback;

    #[test]
    fn test_reference_mek_passes_through_facade() {
        let design = hunchback();
        let verdict = validate(&design, &ValidationOptions::default());
        assert!(verdict.passed, "{}", verdict.report);
        assert_eq!(verdict.kind, Some(ValidatorKind::Mek));
        assert_eq!(verdict.stage, ValidationStage::Done);
    }

    #[test]
    fn test_unsupported_category_is_one_line() {
        let mut design = hunchback();
        design.details = UnitDetails::Unsupported {
            kind: "ProtoMek".into(),
        };
        let verdict = validate(&design, &ValidationOptions::default());
        assert!(!verdict.passed);
        assert_eq!(verdict.kind, None);
        assert_eq!(verdict.stage, ValidationStage::Unclassified);
        let (passed, text) = verdict.into_parts();
        assert!(!passed);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("ProtoMek"));
    }

    #[test]
    fn test_legged_mode_on_a_vehicle_is_a_mismatch() {
        let mut design = hunchback();
        design.movement_mode = MovementMode::Tracked;
        assert!(matches!(
            ValidatorKind::classify(&design),
            Err(AuditError::CategoryMismatch { mode: MovementMode::Tracked })
        ));
    }

    #[test]
    fn test_skip_short_circuits_to_a_pass() {
        let mut design = hunchback();
        design.tonnage = 20.0;
        let options = ValidationOptions {
            skip: true,
            ..ValidationOptions::default()
        };
        let verdict = validate(&design, &options);
        assert!(verdict.passed);
        assert!(verdict.report.is_empty());
        assert_eq!(verdict.stage, ValidationStage::Done);
    }

    #[test]
    fn test_overweight_report_names_both_weights() {
        let mut design = hunchback();
        design.tonnage = 49.0;
        let (passed, text) = validate(&design, &ValidationOptions::default()).into_parts();
        assert!(!passed);
        assert!(text.contains("Weight: 50 is greater than 49"));
    }
}
