//! Combat vehicle rules: tracked, wheeled, hover, VTOL, naval and WiGE

use crate::catalog::{AmmoType, EquipmentCatalog, EquipmentFlag as F, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::types::MovementMode;
use crate::design::components::{fusion_table_weight, MAX_ENGINE_RATING};
use crate::design::{EngineKind, LocationId, UnitDesign, VehicleDetails};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::WeightCategory;
use ahash::AHashSet;

use LocationId::*;

const REQUIRED_LOCATIONS: [LocationId; 4] = [Front, LeftSide, RightSide, Rear];

/// Heaviest standard and superheavy vehicle per motive type
pub fn tonnage_limits(mode: MovementMode) -> Option<(f64, f64)> {
    match mode {
        MovementMode::Tracked => Some((100.0, 200.0)),
        MovementMode::Wheeled => Some((80.0, 160.0)),
        MovementMode::Hover => Some((50.0, 100.0)),
        MovementMode::Vtol => Some((30.0, 60.0)),
        MovementMode::Naval | MovementMode::Submarine => Some((300.0, 555.0)),
        MovementMode::Hydrofoil => Some((100.0, 100.0)),
        MovementMode::Wige => Some((80.0, 160.0)),
        _ => None,
    }
}

/// Rating points the motive system absorbs before movement
pub fn suspension_factor(mode: MovementMode, tonnage: f64) -> u32 {
    let banded = |bands: &[(f64, u32)]| {
        bands
            .iter()
            .find(|(max, _)| tonnage <= *max)
            .or(bands.last())
            .map(|(_, factor)| *factor)
            .unwrap_or(0)
    };
    match mode {
        MovementMode::Wheeled => 20,
        MovementMode::Naval | MovementMode::Submarine => 30,
        MovementMode::Hover => banded(&[(10.0, 40), (20.0, 85), (30.0, 130), (40.0, 175), (50.0, 235)]),
        MovementMode::Vtol => banded(&[(10.0, 50), (20.0, 95), (30.0, 140)]),
        MovementMode::Hydrofoil => banded(&[
            (10.0, 60),
            (20.0, 105),
            (30.0, 150),
            (40.0, 195),
            (50.0, 255),
            (60.0, 300),
            (70.0, 345),
            (80.0, 390),
            (90.0, 435),
            (100.0, 480),
        ]),
        MovementMode::Wige => banded(&[(15.0, 45), (30.0, 80), (45.0, 115), (80.0, 140)]),
        _ => 0,
    }
}

pub struct VehicleValidator<'a> {
    base: BaseValidator<'a>,
    vehicle: &'a VehicleDetails,
}

impl<'a> VehicleValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        vehicle: &'a VehicleDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::Vehicle);
        let mut validator = Self { base, vehicle };
        let engine = validator.weight_engine();
        validator.base = validator.base.with_engine_weight(engine);
        validator
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    pub fn locations(&self) -> Vec<LocationId> {
        let mut locations = vec![Front, LeftSide, RightSide, Rear, Turret, RearTurret, Body];
        if self.design().movement_mode == MovementMode::Vtol {
            locations.push(Rotor);
        }
        locations
    }

    pub fn slot_capacity(&self) -> u32 {
        let tons = self.design().tonnage as u32;
        if self.vehicle.superheavy {
            5 + tons / 10
        } else {
            5 + tons / 5
        }
    }

    /// Item slots used; every ammunition type takes one slot however many tons are carried
    pub fn slots_used(&self) -> u32 {
        let design = self.design();
        let mut ammo_types: AHashSet<AmmoType> = AHashSet::new();
        let mut slots = 0;
        for (_, _, eq) in self.base.resolved() {
            match eq.ammo_stats() {
                Some(stats) => {
                    if ammo_types.insert(stats.ammo) {
                        slots += 1;
                    }
                }
                None => slots += eq.vehicle_slots,
            }
        }
        slots + design.armor.vehicle_slots(design.is_clan()) + design.structure.vehicle_slots(design.is_clan())
    }

    pub fn max_armor(&self) -> u32 {
        (self.design().tonnage * 3.5).floor() as u32 + 40
    }

    pub fn required_crew(&self) -> u32 {
        (self.design().tonnage / 15.0).ceil() as u32 + self.base.equipment_crew()
    }

    /// Engine rating the cruising speed needs, rounded up to a multiple of 5
    pub fn expected_rating(&self) -> u32 {
        let design = self.design();
        let raw = (f64::from(design.walk_mp) * design.tonnage) as i64
            - i64::from(suspension_factor(design.movement_mode, design.tonnage));
        let rating = raw.max(10) as u32;
        rating.div_ceil(5) * 5
    }

    fn turret_weight(&self) -> f64 {
        let grid = self.base.options.rounding.turret;
        [Turret, RearTurret]
            .iter()
            .map(|turret| {
                let tons: f64 = self
                    .base
                    .weapons()
                    .filter(|(_, mount, _)| mount.location == *turret)
                    .map(|(_, mount, eq)| self.base.mount_tonnage(mount, eq))
                    .sum();
                grid.ceil(tons * 0.1)
            })
            .sum()
    }

    fn power_amplifier_weight(&self) -> f64 {
        let kind = self.design().engine.kind;
        if kind.is_fusion() || kind == EngineKind::Fission {
            return 0.0;
        }
        let tons: f64 = self
            .base
            .weapons()
            .filter(|(_, _, eq)| eq.has_flag(F::Energy))
            .map(|(_, mount, eq)| self.base.mount_tonnage(mount, eq))
            .sum();
        self.base.options.rounding.power_amp.ceil(tons * 0.1)
    }
}

impl UnitValidator for VehicleValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    /// Fusion and fission plants carry half again their weight in shielding
    fn weight_engine(&self) -> f64 {
        let engine = &self.design().engine;
        let Some(multiplier) = engine.kind.table_multiplier() else {
            return 0.0;
        };
        let shielding = if engine.kind.is_fusion() || engine.kind == EngineKind::Fission {
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

    fn weight_structure(&self) -> f64 {
        let design = self.design();
        self.base
            .options
            .rounding
            .structure
            .ceil(design.tonnage / 10.0 * design.structure.weight_multiplier())
    }

    fn weight_controls(&self) -> f64 {
        self.base
            .options
            .rounding
            .controls
            .ceil_max_half(self.design().tonnage * 0.05)
    }

    fn weight_heat_sinks(&self) -> f64 {
        let design = self.design();
        f64::from(design.heat_sinks.count.saturating_sub(design.engine.kind.free_heat_sinks()))
    }

    fn weight_armor(&self) -> f64 {
        self.base.weight_standard_armor()
    }

    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        let design = self.design();
        let lift = if design.movement_mode.needs_lift_equipment() {
            self.base.options.rounding.lift.ceil_max_half(design.tonnage * 0.1)
        } else {
            0.0
        };
        vec![
            (WeightCategory::Lift, lift),
            (WeightCategory::Turret, self.turret_weight()),
            (WeightCategory::PowerAmplifiers, self.power_amplifier_weight()),
        ]
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let mut ok = self.base.correct_locations(&self.locations(), report);
        let used = self.slots_used();
        let capacity = self.slot_capacity();
        if used > capacity {
            ok = report.fail(format!(
                "Vehicle uses {} item slots, {} available",
                used, capacity
            ));
        }
        for (_, _, eq) in self.base.weapons().filter(|(_, mount, _)| mount.location == Rotor) {
            ok = report.fail(format!("{} cannot be mounted on the rotor", eq.name));
        }
        ok
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if !design.armor.legal_for(UnitClass::Vehicle) {
            ok = report.fail(format!("{} cannot be used on a vehicle", design.armor.name()));
        }
        if !design.structure.legal_for(UnitClass::Vehicle) {
            ok = report.fail(format!("{} cannot be used on a vehicle", design.structure.name()));
        }
        let total = design.total_armor_points();
        let max = self.max_armor();
        if total > max {
            ok = report.fail(format!(
                "Armor: {} points exceeds the maximum of {}",
                total, max
            ));
        }
        if let Some(rotor) = design.location(Rotor) {
            if rotor.total_armor() > 2 {
                ok = report.fail(format!(
                    "Rotor armor {} exceeds the maximum of 2",
                    rotor.total_armor()
                ));
            }
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
            (design.structure.name(), design.structure.tech()),
            (design.armor.name(), design.armor.tech()),
        ]
    }

    fn correct_combinations(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = combinations::correct_generic(&self.base, report);
        if design.has_location(RearTurret) && !design.has_location(Turret) {
            ok = report.fail("A rear turret requires a main turret");
        }
        for turret in [Turret, RearTurret] {
            if design.mounts_at(turret).next().is_some() && !design.has_location(turret) {
                ok = report.fail(format!("Equipment is mounted in a {} the vehicle lacks", turret));
            }
        }
        let crew = self.required_crew();
        if design.crew.crew < crew {
            ok = report.fail(format!(
                "Crew: {} is fewer than the {} required",
                design.crew.crew, crew
            ));
        }
        ok
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        let design = self.design();
        let engine = &design.engine;
        let mut ok = true;

        for location in REQUIRED_LOCATIONS {
            if !design.has_location(location) {
                ok = report.fail(format!("Vehicle is missing its {} location", location));
            }
        }
        if design.movement_mode == MovementMode::Vtol && !design.has_location(Rotor) {
            ok = report.fail("VTOLs require a rotor");
        }

        let Some((standard, superheavy)) = tonnage_limits(design.movement_mode) else {
            return report.fail(format!(
                "{} is not a combat vehicle motive type",
                design.movement_mode
            ));
        };
        let limit = if self.vehicle.superheavy { superheavy } else { standard };
        if design.tonnage > limit {
            ok = report.fail(format!(
                "{} vehicles may not exceed {} tons",
                design.movement_mode, limit
            ));
        }
        if self.vehicle.superheavy && design.tonnage <= standard {
            ok = report.fail(format!(
                "Superheavy {} vehicles must exceed {} tons",
                design.movement_mode, standard
            ));
        }
        if design.jump_mp > 0 {
            ok = report.fail("Combat vehicles cannot jump");
        }

        if engine.kind == EngineKind::None {
            if !self.vehicle.trailer {
                ok = report.fail("Only trailers may be built without an engine");
            }
            return ok;
        }
        if engine.kind.table_multiplier().is_none() {
            return report.fail(format!("{} cannot power a combat vehicle", engine.kind.name()));
        }
        let expected = self.expected_rating();
        if engine.rating != expected {
            ok = report.fail(format!(
                "Engine rating {} does not match cruising MP {} on {} tons ({} expected)",
                engine.rating, design.walk_mp, design.tonnage, expected
            ));
        }
        if engine.rating > MAX_ENGINE_RATING {
            ok = report.fail(format!("Engine rating {} exceeds 500", engine.rating));
        } else if engine.rating > 400 && !engine.large {
            ok = report.fail(format!("Engine rating {} requires a large engine", engine.rating));
        }
        ok
    }
}
