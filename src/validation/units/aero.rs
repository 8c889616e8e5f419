//! Aerospace and conventional fighters

use super::arcs::{arc_slots_used, armor_slot_cost, correct_mirrored_arcs};
use crate::catalog::{EquipmentCatalog, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::MovementMode;
use crate::design::components::{fusion_table_weight, MAX_ENGINE_RATING};
use crate::design::{EngineKind, FighterDetails, LocationId, UnitDesign};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::WeightCategory;

use LocationId::*;

/// Firing arcs in the order special armor claims their slots
pub const ARCS: [LocationId; 4] = [Nose, LeftWing, RightWing, Aft];

pub const SLOTS_PER_ARC: u32 = 5;

pub struct FighterValidator<'a> {
    base: BaseValidator<'a>,
    fighter: &'a FighterDetails,
}

impl<'a> FighterValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        fighter: &'a FighterDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::Fighter);
        let mut validator = Self { base, fighter };
        let engine = validator.weight_engine();
        validator.base = validator.base.with_engine_weight(engine);
        validator
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    pub fn locations(&self) -> Vec<LocationId> {
        vec![Nose, LeftWing, RightWing, Aft, Fuselage]
    }

    /// Engine rating for the safe thrust: tons × (thrust − 2)
    pub fn expected_rating(&self) -> u32 {
        let design = self.design();
        (design.tonnage * f64::from(design.walk_mp.saturating_sub(2))) as u32
    }

    /// Structural integrity the airframe gets without extra weight
    pub fn minimum_structural_integrity(&self) -> u32 {
        let design = self.design();
        design.walk_mp.max((design.tonnage / 10.0).ceil() as u32)
    }

    pub fn max_armor(&self) -> u32 {
        let factor = if self.fighter.conventional { 1.0 } else { 8.0 };
        (self.design().tonnage * factor).floor() as u32
    }

    pub fn arc_capacity(&self, arc: LocationId) -> u32 {
        let design = self.design();
        let armor_slots = design.armor.aero_slots(design.is_clan());
        let index = ARCS.iter().position(|a| *a == arc).unwrap_or(0) as u32;
        SLOTS_PER_ARC.saturating_sub(armor_slot_cost(index, armor_slots))
    }
}

impl UnitValidator for FighterValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    /// Conventional fighters shield fusion plants like ground vehicles do
    fn weight_engine(&self) -> f64 {
        let engine = &self.design().engine;
        let Some(multiplier) = engine.kind.table_multiplier() else {
            return 0.0;
        };
        let shielding = if self.fighter.conventional && engine.kind.is_fusion() {
            1.5
        } else {
            1.0
        };
        self.base
            .options
            .rounding
            .engine
            .ceil(fusion_table_weight(engine.rating) * multiplier * shielding)
    }

    /// Integrity above the free minimum costs one percent of the airframe per point
    fn weight_structure(&self) -> f64 {
        let extra = self
            .fighter
            .structural_integrity
            .saturating_sub(self.minimum_structural_integrity());
        self.base
            .options
            .rounding
            .structure
            .ceil(self.design().tonnage * f64::from(extra) / 100.0)
    }

    fn weight_controls(&self) -> f64 {
        if self.fighter.conventional {
            self.base
                .options
                .rounding
                .controls
                .ceil_max_half(self.design().tonnage * 0.1)
        } else {
            self.fighter.cockpit.tons()
        }
    }

    fn weight_heat_sinks(&self) -> f64 {
        let design = self.design();
        f64::from(design.heat_sinks.count.saturating_sub(design.engine.kind.free_heat_sinks()))
    }

    fn weight_armor(&self) -> f64 {
        self.base.weight_standard_armor()
    }

    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        vec![(WeightCategory::Fuel, Granularity::HalfTon.ceil(self.fighter.fuel_tons))]
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let mut ok = self.base.correct_locations(&self.locations(), report);
        for arc in ARCS {
            let used = arc_slots_used(&self.base, &[], arc);
            let capacity = self.arc_capacity(arc);
            if used > capacity {
                ok = report.fail(format!(
                    "{} has {} weapon slots used, {} available",
                    arc, used, capacity
                ));
            }
        }
        for (_, _, eq) in self.base.weapons().filter(|(_, mount, _)| mount.location == Fuselage) {
            ok = report.fail(format!("{} cannot be mounted in the fuselage", eq.name));
        }
        ok
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if !design.armor.legal_for(UnitClass::Fighter) {
            ok = report.fail(format!("{} cannot be used on a fighter", design.armor.name()));
        }
        let total = design.total_armor_points();
        let max = self.max_armor();
        if total > max {
            ok = report.fail(format!(
                "Armor: {} points exceeds the maximum of {}",
                total, max
            ));
        }
        if design.locations.iter().any(|loc| loc.id == Fuselage && loc.armor > 0) {
            ok = report.fail("The fuselage cannot carry armor");
        }
        ok
    }

    fn correct_heat_sinks(&self, report: &mut Report) -> bool {
        let design = self.design();
        let sinks = design.heat_sinks;
        if self.fighter.conventional {
            let heat = self.base.energy_weapon_heat();
            let dissipation = sinks.count * sinks.kind.dissipation();
            if dissipation < heat {
                return report.fail(format!(
                    "Heat sinks: {} dissipation cannot cover {} heat from energy weapons",
                    dissipation, heat
                ));
            }
        } else if design.engine.kind.is_fusion() && sinks.count < 10 {
            return report.fail(format!(
                "Heat sinks: {} is fewer than the 10 a fusion engine requires",
                sinks.count
            ));
        }
        true
    }

    fn component_tech(&self) -> Vec<(&'static str, TechAdvancement)> {
        let design = self.design();
        let mut components = vec![
            (design.engine.kind.name(), design.engine.kind.tech()),
            (design.armor.name(), design.armor.tech()),
        ];
        if !self.fighter.conventional {
            components.push((self.fighter.cockpit.name(), self.fighter.cockpit.tech()));
        }
        components
    }

    fn correct_combinations(&self, report: &mut Report) -> bool {
        let mut ok = combinations::correct_generic(&self.base, report)
            & correct_mirrored_arcs(&self.base, LeftWing, RightWing, report);
        if !self.fighter.conventional && !self.fighter.cockpit.legal_for_fighter() {
            ok = report.fail(format!(
                "{} cannot be fitted to a fighter",
                self.fighter.cockpit.name()
            ));
        }
        let si = self.fighter.structural_integrity;
        let minimum = self.minimum_structural_integrity();
        if si < minimum {
            ok = report.fail(format!(
                "Structural integrity {} is below the minimum of {}",
                si, minimum
            ));
        }
        ok
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        let design = self.design();
        let engine = &design.engine;
        let mut ok = true;

        if design.movement_mode != MovementMode::Aerodyne {
            ok = report.fail(format!("Fighters fly as aerodynes, not {}", design.movement_mode));
        }
        let (min, max) = if self.fighter.conventional {
            (5.0, 50.0)
        } else {
            (5.0, 100.0)
        };
        if design.tonnage < min || design.tonnage > max || design.tonnage % 5.0 != 0.0 {
            ok = report.fail(format!(
                "Fighter tonnage {} must be a multiple of 5 between {} and {}",
                design.tonnage, min, max
            ));
        }
        if design.walk_mp < 3 {
            ok = report.fail(format!("Safe thrust {} is below the minimum of 3", design.walk_mp));
        }

        if !self.fighter.conventional && !engine.kind.is_fusion() {
            ok = report.fail(format!(
                "{} cannot power an aerospace fighter",
                engine.kind.name()
            ));
        }
        if engine.kind == EngineKind::None || engine.kind.table_multiplier().is_none() {
            return report.fail(format!("{} cannot power a fighter", engine.kind.name()));
        }
        let expected = self.expected_rating();
        if engine.rating != expected {
            ok = report.fail(format!(
                "Engine rating {} does not match safe thrust {} on {} tons ({} expected)",
                engine.rating, design.walk_mp, design.tonnage, expected
            ));
        }
        if engine.rating > MAX_ENGINE_RATING {
            ok = report.fail(format!("Engine rating {} exceeds 500", engine.rating));
        }
        ok
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::core::types::{RulesLevel, TechBase};
    use crate::design::*;

    /// A 50 ton aerospace fighter that is legal and weighs exactly 50 tons
    pub fn fighter() -> UnitDesign {
        UnitDesign {
            chassis: "Test Fighter".into(),
            model: "TF-1".into(),
            tonnage: 50.0,
            year: 3025,
            tech_base: TechBase::InnerSphere,
            mixed_tech: false,
            rules_level: RulesLevel::Introductory,
            movement_mode: MovementMode::Aerodyne,
            omni: false,
            walk_mp: 6,
            jump_mp: 0,
            engine: Engine::new(EngineKind::Fusion, 200),
            armor: ArmorKind::Standard,
            structure: StructureKind::Standard,
            heat_sinks: HeatSinks {
                kind: HeatSinkKind::Single,
                count: 10,
            },
            locations: vec![
                Location::new(Nose, 50),
                Location::new(LeftWing, 36),
                Location::new(RightWing, 36),
                Location::new(Aft, 30),
                Location::new(Fuselage, 0),
            ],
            mounts: vec![
                EquipmentMount::new("ISLRM20", Nose),
                EquipmentMount::new("ISMediumLaser", Nose),
                EquipmentMount::new("ISMediumLaser", Nose),
                EquipmentMount::new("ISLargeLaser", LeftWing),
                EquipmentMount::new("ISLargeLaser", RightWing),
                EquipmentMount::new("ISMediumLaser", Aft),
                EquipmentMount::new("ISLRM20 Ammo", Fuselage).sized(1.0),
            ],
            crew: CrewData::default(),
            bays: Vec::new(),
            failed_equipment: Vec::new(),
            details: UnitDetails::Fighter(FighterDetails {
                conventional: false,
                cockpit: CockpitKind::Standard,
                fuel_tons: 5.0,
                structural_integrity: 6,
            }),
        }
    }

    fn validator<'a>(design: &'a UnitDesign, options: &'a ValidationOptions) -> FighterValidator<'a> {
        let UnitDetails::Fighter(fighter) = &design.details else {
            panic!("not a fighter");
        };
        FighterValidator::new(design, fighter, options, catalog())
    }

    #[test]
    fn test_reference_fighter_is_legal() {
        let design = fighter();
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        let breakdown = validator.weight_breakdown();
        assert_eq!(breakdown.get(WeightCategory::Engine), 8.5);
        assert_eq!(breakdown.get(WeightCategory::Structure), 0.0);
        assert_eq!(breakdown.get(WeightCategory::Armor), 9.5);
        assert_eq!(breakdown.get(WeightCategory::Fuel), 5.0);
        assert_eq!(validator.calculate_weight(), 50.0);

        let mut report = Report::new();
        assert!(validator.correct_entity(&mut report), "{}", report);
    }

    #[test]
    fn test_unmirrored_wings_fail() {
        let mut design = fighter();
        design.mounts.push(EquipmentMount::new("ISMediumLaser", LeftWing));
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("Left Wing must mirror Right Wing"));
    }

    #[test]
    fn test_arc_slots_and_fuselage() {
        let mut design = fighter();
        for _ in 0..3 {
            design.mounts.push(EquipmentMount::new("ISSmallLaser", Nose));
        }
        design.mounts.push(EquipmentMount::new("ISSmallLaser", Fuselage));
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_slots(&mut report));
        assert!(report.mentions("Nose has 6 weapon slots used, 5 available"));
        assert!(report.mentions("cannot be mounted in the fuselage"));
    }

    #[test]
    fn test_ferro_aluminum_costs_nose_and_wing_slots() {
        let mut design = fighter();
        design.armor = ArmorKind::FerroAluminum;
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        let capacities: Vec<u32> = ARCS.iter().map(|arc| validator.arc_capacity(*arc)).collect();
        assert_eq!(capacities, [4, 4, 5, 5]);
    }

    #[test]
    fn test_structural_integrity_floor_and_surcharge() {
        let mut design = fighter();
        if let UnitDetails::Fighter(details) = &mut design.details {
            details.structural_integrity = 8;
        }
        let options = ValidationOptions::default();
        // two points above the free six, one percent of 50 t each
        assert_eq!(validator(&design, &options).weight_structure(), 1.0);

        if let UnitDetails::Fighter(details) = &mut design.details {
            details.structural_integrity = 4;
        }
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("below the minimum of 6"));
    }

    #[test]
    fn test_engine_rating_follows_thrust() {
        let mut design = fighter();
        design.walk_mp = 7;
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_movement(&mut report));
        assert!(report.mentions("250 expected"));
    }
}
