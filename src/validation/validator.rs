//! The per-category validator interface and the stage sequence it runs through

use super::base::BaseValidator;
use super::report::Report;
use super::weight::{check_weight, WeightBreakdown, WeightCategory};
use crate::catalog::TechAdvancement;
use serde::Serialize;
use std::fmt;

/// Progress of one validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ValidationStage {
    Unclassified,
    Classified,
    WeightChecked,
    SlotsChecked,
    ArmorChecked,
    TechChecked,
    CombinationsChecked,
    Done,
}

impl ValidationStage {
    /// The stage after this one; `Done` is terminal
    pub fn next(self) -> Self {
        match self {
            ValidationStage::Unclassified => ValidationStage::Classified,
            ValidationStage::Classified => ValidationStage::WeightChecked,
            ValidationStage::WeightChecked => ValidationStage::SlotsChecked,
            ValidationStage::SlotsChecked => ValidationStage::ArmorChecked,
            ValidationStage::ArmorChecked => ValidationStage::TechChecked,
            ValidationStage::TechChecked => ValidationStage::CombinationsChecked,
            ValidationStage::CombinationsChecked | ValidationStage::Done => ValidationStage::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == ValidationStage::Done
    }
}

impl fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One implementation per unit category
///
/// The `weight_*` methods return category weights already rounded on their
/// own grid. The `correct_*` methods append to the report and return whether
/// the design passed that sub-domain.
pub trait UnitValidator {
    fn base(&self) -> &BaseValidator<'_>;

    fn weight_engine(&self) -> f64;
    fn weight_structure(&self) -> f64;
    fn weight_controls(&self) -> f64;
    fn weight_heat_sinks(&self) -> f64;
    fn weight_armor(&self) -> f64;

    fn weight_misc(&self) -> f64 {
        self.base().weight_misc()
    }

    fn weight_weapons(&self) -> f64 {
        self.base().weight_weapons()
    }

    fn weight_ammo(&self) -> f64 {
        self.base().weight_ammo()
    }

    fn weight_carrying_capacity(&self) -> f64 {
        self.base().weight_carrying_capacity()
    }

    fn weight_armored_components(&self) -> f64 {
        self.base().weight_armored_components()
    }

    /// Weights only this category has (gyro, turret, fuel, drive core, ...)
    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        Vec::new()
    }

    /// Very light units skip the final half-ton ceiling
    fn uses_kilogram_standard(&self) -> bool {
        false
    }

    fn weight_breakdown(&self) -> WeightBreakdown {
        let mut breakdown = WeightBreakdown::new(self.uses_kilogram_standard());
        breakdown.add(WeightCategory::Engine, self.weight_engine());
        breakdown.add(WeightCategory::Structure, self.weight_structure());
        breakdown.add(WeightCategory::Controls, self.weight_controls());
        breakdown.add(WeightCategory::HeatSinks, self.weight_heat_sinks());
        breakdown.add(WeightCategory::Armor, self.weight_armor());
        breakdown.add(WeightCategory::Misc, self.weight_misc());
        breakdown.add(WeightCategory::Weapons, self.weight_weapons());
        breakdown.add(WeightCategory::Ammo, self.weight_ammo());
        breakdown.add(WeightCategory::CarryingCapacity, self.weight_carrying_capacity());
        breakdown.add(WeightCategory::ArmoredComponents, self.weight_armored_components());
        for (category, tons) in self.extra_weights() {
            breakdown.add(category, tons);
        }
        breakdown
    }

    fn calculate_weight(&self) -> f64 {
        self.weight_breakdown().total()
    }

    /// The mass the calculated weight is compared against
    fn declared_weight(&self) -> f64 {
        self.base().design.tonnage
    }

    fn correct_weight(&self, report: &mut Report) -> bool {
        check_weight(
            self.declared_weight(),
            self.calculate_weight(),
            self.base().options,
            report,
        )
    }

    fn correct_slots(&self, report: &mut Report) -> bool;
    fn correct_armor(&self, report: &mut Report) -> bool;
    fn correct_heat_sinks(&self, report: &mut Report) -> bool;

    /// Tech records of selections that are not equipment mounts
    fn component_tech(&self) -> Vec<(&'static str, TechAdvancement)>;

    fn correct_tech(&self, report: &mut Report) -> bool {
        let base = self.base();
        base.correct_failed_equipment(report) & base.correct_tech(&self.component_tech(), report)
    }

    fn correct_combinations(&self, report: &mut Report) -> bool;
    fn correct_movement(&self, report: &mut Report) -> bool;

    /// Run the check that moves a validation out of `stage`
    fn correct_stage(&self, stage: ValidationStage, report: &mut Report) -> bool {
        match stage {
            ValidationStage::Unclassified | ValidationStage::Done => true,
            ValidationStage::Classified => self.correct_weight(report),
            ValidationStage::WeightChecked => self.correct_slots(report),
            ValidationStage::SlotsChecked => {
                self.correct_armor(report) & self.correct_heat_sinks(report)
            }
            ValidationStage::ArmorChecked => self.correct_tech(report),
            ValidationStage::TechChecked => {
                self.correct_combinations(report) & self.correct_movement(report)
            }
            ValidationStage::CombinationsChecked => {
                if self.base().options.print_weight_breakdown {
                    for line in self.weight_breakdown().to_string().lines() {
                        report.add(line);
                    }
                }
                true
            }
        }
    }

    /// Every check in stage order; the result is the AND of all of them
    fn correct_entity(&self, report: &mut Report) -> bool {
        let mut stage = ValidationStage::Classified;
        let mut ok = true;
        while !stage.is_done() {
            let passed = self.correct_stage(stage, report);
            tracing::trace!(%stage, passed, "Stage checked");
            ok &= passed;
            stage = stage.next();
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_sequence_is_linear() {
        let mut stage = ValidationStage::Unclassified;
        let mut seen = vec![stage];
        while !stage.is_done() {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(seen.len(), 8);
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ValidationStage::Done.next(), ValidationStage::Done);
    }
}
