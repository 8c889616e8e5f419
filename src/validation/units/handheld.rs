//! Handheld weapons carried by walking units

use crate::catalog::{EquipmentCatalog, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::MovementMode;
use crate::design::{EngineKind, HandheldDetails, LocationId, UnitDesign};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;

pub const ARMOR_POINTS_PER_TON: f64 = 16.0;

pub struct HandheldValidator<'a> {
    base: BaseValidator<'a>,
}

impl<'a> HandheldValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        _details: &HandheldDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        Self {
            base: BaseValidator::new(design, options, catalog, UnitClass::Handheld),
        }
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    /// Armor is capped by the weight of what it protects
    pub fn max_armor(&self) -> u32 {
        let item_tons = self.weight_weapons() + self.weight_ammo() + self.weight_misc();
        (item_tons * 4.0).floor() as u32
    }
}

impl UnitValidator for HandheldValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    fn weight_engine(&self) -> f64 {
        0.0
    }

    fn weight_structure(&self) -> f64 {
        0.0
    }

    fn weight_controls(&self) -> f64 {
        0.0
    }

    fn weight_heat_sinks(&self) -> f64 {
        0.0
    }

    fn weight_armor(&self) -> f64 {
        let points = f64::from(self.design().total_armor_points());
        Granularity::HalfTon.ceil(points / ARMOR_POINTS_PER_TON)
    }

    fn weight_carrying_capacity(&self) -> f64 {
        0.0
    }

    fn weight_armored_components(&self) -> f64 {
        0.0
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        self.base.correct_locations(&[LocationId::Gun], report)
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if !design.armor.legal_for(UnitClass::Handheld) {
            ok = report.fail(format!("{} cannot armor a handheld weapon", design.armor.name()));
        }
        let points = design.total_armor_points();
        if points > self.max_armor() {
            ok = report.fail(format!(
                "Armor: {} points exceeds the maximum of {}",
                points,
                self.max_armor()
            ));
        }
        ok
    }

    fn correct_heat_sinks(&self, report: &mut Report) -> bool {
        if self.design().heat_sinks.count > 0 {
            return report.fail("Handheld weapons cannot mount heat sinks");
        }
        true
    }

    fn component_tech(&self) -> Vec<(&'static str, TechAdvancement)> {
        let design = self.design();
        vec![(design.armor.name(), design.armor.tech())]
    }

    fn correct_combinations(&self, report: &mut Report) -> bool {
        let mut ok = combinations::correct_generic(&self.base, report);
        if self.base.weapons().next().is_none() {
            ok = report.fail("A handheld weapon needs at least one weapon");
        }
        ok
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if design.engine.kind != EngineKind::None {
            ok = report.fail(format!(
                "Handheld weapons have no engine ({} declared)",
                design.engine.kind.name()
            ));
        }
        if design.movement_mode != MovementMode::None {
            ok = report.fail(format!(
                "Handheld weapons do not move on their own ({} declared)",
                design.movement_mode
            ));
        }
        ok
    }
}
