//! Small craft and DropShips

use super::arcs::{
    arc_slots_used, armor_slot_cost, correct_bay_doors, correct_mirrored_arcs, correct_weapon_bays,
    hottest_arc_heat,
};
use crate::catalog::{EquipmentCatalog, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::MovementMode;
use crate::design::{LocationId, SmallCraftDetails, UnitDesign};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::WeightCategory;

use LocationId::*;

/// Armored arcs, in the order special armor claims weapon slots
const ARCS: [LocationId; 4] = [Nose, LeftWing, RightWing, Aft];

/// Weapon arcs; DropShips add the aft-side arcs
const DROPSHIP_ARCS: [LocationId; 6] = [Nose, LeftWing, RightWing, LeftAft, RightAft, Aft];

pub const SMALL_CRAFT_MAX_TONS: f64 = 200.0;
pub const DROPSHIP_MAX_TONS: f64 = 100_000.0;

pub struct SmallCraftValidator<'a> {
    base: BaseValidator<'a>,
    craft: &'a SmallCraftDetails,
}

impl<'a> SmallCraftValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        craft: &'a SmallCraftDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::SmallCraft);
        let mut validator = Self { base, craft };
        let engine = validator.weight_engine();
        validator.base = validator.base.with_engine_weight(engine);
        validator
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    fn is_spheroid(&self) -> bool {
        self.design().movement_mode == MovementMode::Spheroid
    }

    pub fn weapon_arcs(&self) -> &'static [LocationId] {
        if self.craft.dropship {
            &DROPSHIP_ARCS
        } else {
            &ARCS
        }
    }

    pub fn locations(&self) -> Vec<LocationId> {
        let mut locations = self.weapon_arcs().to_vec();
        locations.push(Hull);
        locations
    }

    pub fn arc_capacity(&self, arc: LocationId) -> u32 {
        let design = self.design();
        let per_arc = if self.craft.dropship { 12 } else { 5 };
        let armor_slots = design.armor.aero_slots(design.is_clan());
        match ARCS.iter().position(|a| *a == arc) {
            Some(index) => per_arc - armor_slot_cost(index as u32, armor_slots).min(per_arc),
            None => per_arc,
        }
    }

    /// Heat sinks carried without weight, from engine tonnage and hull shape
    pub fn free_heat_sinks(&self) -> u32 {
        let engine = self.weight_engine();
        let free = match (self.craft.military, self.is_spheroid()) {
            (true, true) => (engine * 6.8).sqrt(),
            (true, false) => engine / 20.0,
            (false, true) => (engine * 1.3).sqrt(),
            (false, false) => engine / 40.0,
        };
        free.floor() as u32
    }

    pub fn max_arc_armor(&self) -> u32 {
        self.craft.structural_integrity * 4
    }

    /// Pilots, gunners and technicians the craft cannot fly without
    pub fn minimum_crew(&self) -> u32 {
        let design = self.design();
        let base = if self.craft.dropship {
            4 + (design.tonnage / 5000.0).ceil() as u32 + self.craft.weapon_bays.len() as u32
        } else {
            2 + (self.base.weapons().count() as u32).div_ceil(4)
        };
        base + self.base.equipment_crew()
    }
}

impl UnitValidator for SmallCraftValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    fn weight_engine(&self) -> f64 {
        let design = self.design();
        let factor = if self.craft.primitive { 0.0845 } else { 0.065 };
        self.base
            .options
            .rounding
            .engine
            .ceil(design.tonnage * f64::from(design.walk_mp) * factor)
    }

    fn weight_structure(&self) -> f64 {
        self.base
            .options
            .rounding
            .structure
            .ceil(self.design().tonnage * f64::from(self.craft.structural_integrity) / 200.0)
    }

    /// Bridge and flight controls
    fn weight_controls(&self) -> f64 {
        let factor = if self.craft.primitive { 0.015 } else { 0.0075 };
        self.base
            .options
            .rounding
            .controls
            .ceil(self.design().tonnage * factor)
    }

    fn weight_heat_sinks(&self) -> f64 {
        f64::from(
            self.design()
                .heat_sinks
                .count
                .saturating_sub(self.free_heat_sinks()),
        )
    }

    fn weight_armor(&self) -> f64 {
        self.base.weight_standard_armor()
    }

    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        vec![(WeightCategory::Fuel, Granularity::HalfTon.ceil(self.craft.fuel_tons))]
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let mut ok = self.base.correct_locations(&self.locations(), report);
        for &arc in self.weapon_arcs() {
            let used = arc_slots_used(&self.base, &self.craft.weapon_bays, arc);
            let capacity = self.arc_capacity(arc);
            if used > capacity {
                ok = report.fail(format!(
                    "{} has {} weapon slots used, {} available",
                    arc, used, capacity
                ));
            }
        }
        for (_, _, eq) in self.base.weapons().filter(|(_, mount, _)| mount.location == Hull) {
            ok = report.fail(format!("{} must be mounted in a firing arc", eq.name));
        }
        ok
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if !design.armor.legal_for(UnitClass::SmallCraft) {
            ok = report.fail(format!("{} cannot be used on this craft", design.armor.name()));
        }
        let max = self.max_arc_armor();
        for loc in &design.locations {
            if loc.total_armor() > max {
                ok = report.fail(format!(
                    "{} armor {} exceeds the maximum of {}",
                    loc.id,
                    loc.total_armor(),
                    max
                ));
            }
        }
        ok
    }

    fn correct_heat_sinks(&self, report: &mut Report) -> bool {
        let sinks = self.design().heat_sinks;
        let dissipation = sinks.count * sinks.kind.dissipation();
        let (arc, heat) = hottest_arc_heat(&self.base, self.weapon_arcs());
        if dissipation < heat {
            return report.fail(format!(
                "Heat sinks: {} dissipation cannot cover {} heat from the {} arc",
                dissipation, heat, arc
            ));
        }
        true
    }

    fn component_tech(&self) -> Vec<(&'static str, TechAdvancement)> {
        let design = self.design();
        vec![
            (design.engine.kind.name(), design.engine.kind.tech()),
            (design.armor.name(), design.armor.tech()),
        ]
    }

    fn correct_combinations(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = combinations::correct_generic(&self.base, report)
            & correct_mirrored_arcs(&self.base, LeftWing, RightWing, report);
        if self.craft.dropship {
            ok &= correct_mirrored_arcs(&self.base, LeftAft, RightAft, report);
            ok &= correct_weapon_bays(&self.base, &self.craft.weapon_bays, report);
        }

        let doors = if self.craft.dropship {
            7 + (design.tonnage / 10_000.0).floor() as u32
        } else {
            2
        };
        ok &= correct_bay_doors(&self.base, doors, report);

        let crew = self.minimum_crew();
        if design.crew.crew < crew {
            ok = report.fail(format!(
                "Crew: {} is fewer than the {} required",
                design.crew.crew, crew
            ));
        }
        let aboard = design.crew.crew + design.crew.passengers;
        if design.crew.berths() < aboard {
            ok = report.fail(format!(
                "Quarters: {} berths for {} crew and passengers",
                design.crew.berths(),
                aboard
            ));
        }
        ok
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if !matches!(design.movement_mode, MovementMode::Aerodyne | MovementMode::Spheroid) {
            ok = report.fail(format!(
                "Craft must be aerodyne or spheroid, not {}",
                design.movement_mode
            ));
        }
        let (min, max) = if self.craft.dropship {
            (SMALL_CRAFT_MAX_TONS, DROPSHIP_MAX_TONS)
        } else {
            (100.0, SMALL_CRAFT_MAX_TONS)
        };
        let out_of_range = if self.craft.dropship {
            design.tonnage <= min || design.tonnage > max
        } else {
            design.tonnage < min || design.tonnage > max
        };
        if out_of_range {
            ok = report.fail(format!(
                "Tonnage {} is outside the {} to {} ton range",
                design.tonnage, min, max
            ));
        }
        if design.walk_mp == 0 {
            ok = report.fail("Craft must have a safe thrust of at least 1");
        }
        if !design.engine.kind.is_fusion() {
            ok = report.fail(format!("{} cannot power this craft", design.engine.kind.name()));
        }
        if self.craft.structural_integrity < design.walk_mp {
            ok = report.fail(format!(
                "Structural integrity {} is below the safe thrust of {}",
                self.craft.structural_integrity, design.walk_mp
            ));
        }
        ok
    }
}
