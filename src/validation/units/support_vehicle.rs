//! Support vehicle rules
//!
//! Support vehicles weigh their chassis from a motive/size table scaled by
//! structural tech rating and chassis modifications. Vehicles under five tons
//! use the kilogram standard throughout.

use crate::catalog::{AmmoFamily, EquipmentCatalog, EquipmentFlag as F, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::MovementMode;
use crate::design::components::support_armor_tons_per_point;
use crate::design::{ArmorKind, ChassisMod, EngineKind, LocationId, SupportVehicleDetails, UnitDesign};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::WeightCategory;
use ahash::AHashSet;
use std::fmt;

use LocationId::*;

/// Vehicles under this mass use the kilogram standard
const SMALL_LIMIT: f64 = 5.0;

/// Structural tech rating multipliers, A through F
const STRUCTURE_TECH_MULTIPLIER: [f64; 6] = [1.6, 1.3, 1.15, 1.0, 0.85, 0.66];

/// Item slots taken by barrier armor, by armor tech rating
const ARMOR_SLOTS: [u32; 6] = [2, 2, 1, 1, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Upper bound of the medium class and of the large class per motive type
fn size_bounds(mode: MovementMode) -> Option<(f64, f64)> {
    match mode {
        MovementMode::Wheeled => Some((80.0, 160.0)),
        MovementMode::Tracked => Some((100.0, 300.0)),
        MovementMode::Hover => Some((50.0, 100.0)),
        MovementMode::Vtol => Some((30.0, 60.0)),
        MovementMode::Naval | MovementMode::Hydrofoil | MovementMode::Submarine => {
            Some((300.0, 100_000.0))
        }
        MovementMode::Wige => Some((80.0, 240.0)),
        MovementMode::Rail => Some((300.0, 600.0)),
        MovementMode::Airship => Some((300.0, 1_000.0)),
        MovementMode::FixedWing => Some((100.0, 200.0)),
        _ => None,
    }
}

/// Base chassis value per motive type and size class
fn base_chassis_value(mode: MovementMode, size: SizeClass) -> Option<f64> {
    let row = match mode {
        MovementMode::Airship => [0.2, 0.25, 0.3],
        MovementMode::FixedWing => [0.08, 0.1, 0.15],
        MovementMode::Hover | MovementMode::Vtol => [0.2, 0.25, 0.3],
        MovementMode::Naval | MovementMode::Hydrofoil | MovementMode::Submarine => {
            [0.12, 0.15, 0.17]
        }
        MovementMode::Tracked => [0.13, 0.15, 0.25],
        MovementMode::Wheeled => [0.12, 0.15, 0.18],
        MovementMode::Wige => [0.12, 0.15, 0.17],
        MovementMode::Rail => [0.15, 0.2, 0.3],
        _ => return None,
    };
    Some(row[size as usize])
}

pub struct SupportVehicleValidator<'a> {
    base: BaseValidator<'a>,
    support: &'a SupportVehicleDetails,
}

impl<'a> SupportVehicleValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        support: &'a SupportVehicleDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::SupportVehicle);
        let mut validator = Self { base, support };
        let engine = validator.weight_engine();
        validator.base = validator.base.with_engine_weight(engine);
        validator
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    fn is_small(&self) -> bool {
        self.design().tonnage < SMALL_LIMIT
    }

    /// Kilogram-standard vehicles round every category to the kilogram
    fn grid(&self, configured: Granularity) -> Granularity {
        if self.is_small() {
            Granularity::Kilogram
        } else {
            configured
        }
    }

    pub fn size_class(&self) -> Option<SizeClass> {
        let design = self.design();
        let (medium, large) = size_bounds(design.movement_mode)?;
        if design.tonnage < SMALL_LIMIT {
            Some(SizeClass::Small)
        } else if design.tonnage <= medium {
            Some(SizeClass::Medium)
        } else if design.tonnage <= large {
            Some(SizeClass::Large)
        } else {
            None
        }
    }

    pub fn locations(&self) -> Vec<LocationId> {
        match self.design().movement_mode {
            MovementMode::FixedWing => vec![Nose, LeftWing, RightWing, Aft, Fuselage, Body],
            MovementMode::Vtol => vec![Front, LeftSide, RightSide, Rear, Turret, Rotor, Body],
            _ => vec![Front, LeftSide, RightSide, Rear, Turret, RearTurret, Body],
        }
    }

    pub fn slot_capacity(&self) -> u32 {
        5 + (self.design().tonnage / 10.0).floor() as u32
    }

    /// Item slots used by armor, equipment, ammunition, quarters and bays
    pub fn slots_used(&self) -> u32 {
        let design = self.design();
        let armor = if design.total_armor_points() > 0 {
            ARMOR_SLOTS[self.support.armor_tech.index()]
        } else {
            0
        };

        let mut families: AHashSet<AmmoFamily> = AHashSet::new();
        let mut equipment = 0;
        for (_, _, eq) in self.base.resolved() {
            match eq.ammo_stats() {
                Some(stats) => {
                    families.insert(stats.ammo.family);
                }
                None => equipment += eq.vehicle_slots,
            }
        }

        let quarters: AHashSet<_> = design.crew.quarters.iter().map(|q| q.kind).collect();
        let bays: AHashSet<_> = design.bays.iter().map(|bay| bay.kind).collect();

        armor + equipment + families.len() as u32 + quarters.len() as u32 + bays.len() as u32
    }

    pub fn minimum_crew(&self) -> u32 {
        let weapons = self.base.weapons().count() as u32;
        1 + weapons.div_ceil(2) + self.base.equipment_crew()
    }

    fn chassis_multiplier(&self) -> f64 {
        self.support
            .chassis_mods
            .iter()
            .map(|m| m.multiplier())
            .product()
    }

    fn turret_weight(&self) -> f64 {
        let tons: f64 = self
            .base
            .weapons()
            .filter(|(_, mount, _)| mount.location.is_turret())
            .map(|(_, mount, eq)| self.base.mount_tonnage(mount, eq))
            .sum();
        self.grid(self.base.options.rounding.turret).ceil(tons * 0.1)
    }

    fn power_amplifier_weight(&self) -> f64 {
        let kind = self.design().engine.kind;
        if kind.is_fusion() || kind == EngineKind::Fission || kind == EngineKind::None {
            return 0.0;
        }
        let tons: f64 = self
            .base
            .weapons()
            .filter(|(_, _, eq)| eq.has_flag(F::Energy))
            .map(|(_, mount, eq)| self.base.mount_tonnage(mount, eq))
            .sum();
        self.grid(self.base.options.rounding.power_amp).ceil(tons * 0.1)
    }

    fn correct_chassis_mods(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mods = &self.support.chassis_mods;
        let mut ok = true;

        for chassis_mod in mods {
            if let Some(modes) = chassis_mod.allowed_modes() {
                if !modes.contains(&design.movement_mode) {
                    ok = report.fail(format!(
                        "{} cannot be applied to a {} chassis",
                        chassis_mod, design.movement_mode
                    ));
                }
            }
        }
        for (a, b) in ChassisMod::EXCLUSIVE {
            if self.support.has_mod(a) && self.support.has_mod(b) {
                ok = report.fail(format!("{} and {} chassis modifications are exclusive", a, b));
            }
        }

        let external = design.engine.kind == EngineKind::External;
        if external != self.support.has_mod(ChassisMod::ExternalPowerPickup) {
            ok = report.fail(
                "An external power pickup is required with, and only with, an external engine",
            );
        }
        if design.engine.kind == EngineKind::None && !self.support.has_mod(ChassisMod::Trailer) {
            ok = report.fail("Only trailers may be built without an engine");
        }
        if design.omni != self.support.has_mod(ChassisMod::Omni) {
            ok = report.fail("Omni designs require the Omni chassis modification");
        }
        if self.support.has_mod(ChassisMod::UltraLight) && !self.is_small() {
            ok = report.fail("The Ultra-Light modification is limited to small support vehicles");
        }
        ok
    }

    fn correct_crew(&self, report: &mut Report) -> bool {
        let design = self.design();
        let minimum = self.minimum_crew();
        let mut ok = true;
        if design.crew.crew < minimum {
            ok = report.fail(format!(
                "Crew: {} is fewer than the {} required",
                design.crew.crew, minimum
            ));
        }
        let housed = design.crew.crew.saturating_sub(minimum) + design.crew.passengers;
        let berths = design.crew.berths();
        if berths < housed {
            ok = report.fail(format!(
                "Quarters: {} berths for {} additional crew and passengers",
                berths, housed
            ));
        }
        ok
    }
}

impl UnitValidator for SupportVehicleValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    fn weight_engine(&self) -> f64 {
        let design = self.design();
        let Some(multiplier) = design.engine.kind.support_multiplier(self.support.engine_tech) else {
            return 0.0;
        };
        let cruise = f64::from(design.walk_mp);
        let tons = design.tonnage * (cruise * cruise + 4.0) / 100.0 * multiplier;
        self.grid(self.base.options.rounding.engine).ceil(tons)
    }

    /// Chassis weight: tons x base value x structural tech x every modification
    fn weight_structure(&self) -> f64 {
        let design = self.design();
        let Some(base_value) = self
            .size_class()
            .and_then(|size| base_chassis_value(design.movement_mode, size))
        else {
            return 0.0;
        };
        let tech = STRUCTURE_TECH_MULTIPLIER[self.support.structural_tech.index()];
        let tons = design.tonnage * base_value * tech * self.chassis_multiplier();
        self.grid(self.base.options.rounding.structure).ceil(tons)
    }

    fn weight_controls(&self) -> f64 {
        let tons = self.design().tonnage * 0.05;
        if self.is_small() {
            Granularity::Kilogram.ceil(tons)
        } else {
            self.base.options.rounding.controls.ceil_max_half(tons)
        }
    }

    fn weight_heat_sinks(&self) -> f64 {
        let design = self.design();
        f64::from(design.heat_sinks.count.saturating_sub(design.engine.kind.free_heat_sinks()))
    }

    fn weight_armor(&self) -> f64 {
        let design = self.design();
        let points = design.total_armor_points();
        if points == 0 {
            return 0.0;
        }
        match support_armor_tons_per_point(self.support.barrier_rating, self.support.armor_tech) {
            Some(per_point) => {
                self.grid(self.base.options.rounding.armor).ceil(f64::from(points) * per_point)
            }
            None => 0.0,
        }
    }

    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        vec![
            (WeightCategory::Turret, self.turret_weight()),
            (WeightCategory::PowerAmplifiers, self.power_amplifier_weight()),
            (
                WeightCategory::Fuel,
                self.grid(Granularity::HalfTon).ceil(self.support.fuel_tons),
            ),
        ]
    }

    fn uses_kilogram_standard(&self) -> bool {
        self.is_small()
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let mut ok = self.base.correct_locations(&self.locations(), report);
        let used = self.slots_used();
        let capacity = self.slot_capacity();
        if used > capacity {
            ok = report.fail(format!(
                "Item slots: {} used of {} available ({} over)",
                used,
                capacity,
                used - capacity
            ));
        }
        ok
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let points = design.total_armor_points();
        let mut ok = true;
        if points == 0 {
            return true;
        }
        if design.armor != ArmorKind::SupportVehicle {
            ok = report.fail(format!(
                "{} cannot be used on a support vehicle",
                design.armor.name()
            ));
        }
        if support_armor_tons_per_point(self.support.barrier_rating, self.support.armor_tech)
            .is_none()
        {
            ok = report.fail(format!(
                "BAR {} armor cannot be built at tech rating {}",
                self.support.barrier_rating, self.support.armor_tech
            ));
        }
        let max = (design.tonnage * 3.5).floor() as u32 + 40;
        if points > max {
            ok = report.fail(format!(
                "Armor: {} points exceeds the maximum of {}",
                points, max
            ));
        }
        ok
    }

    fn correct_heat_sinks(&self, report: &mut Report) -> bool {
        let design = self.design();
        let heat = self.base.energy_weapon_heat();
        let dissipation = design.heat_sinks.count * design.heat_sinks.kind.dissipation();
        if dissipation < heat {
            return report.fail(format!(
                "Heat sinks: {} dissipation cannot cover {} heat from energy weapons",
                dissipation, heat
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
        combinations::correct_generic(&self.base, report)
            & self.correct_chassis_mods(report)
            & self.correct_crew(report)
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        match self.size_class() {
            None if size_bounds(design.movement_mode).is_none() => {
                return report.fail(format!(
                    "{} is not a support vehicle motive type",
                    design.movement_mode
                ));
            }
            None => {
                ok = report.fail(format!(
                    "{} tons exceeds the largest {} support vehicle",
                    design.tonnage, design.movement_mode
                ));
            }
            Some(_) => {}
        }
        let engine = design.engine.kind;
        if engine == EngineKind::None {
            return ok;
        }
        if engine.support_multiplier(self.support.engine_tech).is_none() {
            ok = report.fail(format!(
                "{} cannot be built at tech rating {}",
                engine.name(),
                self.support.engine_tech
            ));
        }
        if design.walk_mp == 0 {
            ok = report.fail("Powered support vehicles need a cruising speed");
        }
        if design.jump_mp > 0 {
            ok = report.fail("Support vehicles cannot jump");
        }
        ok
    }
}
