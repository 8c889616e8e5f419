//! JumpShips, WarShips and space stations
//!
//! Capital hulls carry their armor at capital scale: points per ton come
//! from a hull-mass tier rather than the armor type alone, and structural
//! integrity contributes free armor points.

use super::arcs::{
    arc_slots_used, armor_slot_cost, correct_bay_doors, correct_mirrored_arcs, correct_weapon_bays,
    hottest_arc_heat,
};
use crate::catalog::{EquipmentCatalog, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::MovementMode;
use crate::design::{CapitalClass, CapitalDetails, LocationId, UnitDesign};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::WeightCategory;

use LocationId::*;

/// Armored arcs, in the order special armor claims weapon slots
const ARMOR_ARCS: [LocationId; 6] = [Nose, LeftFront, RightFront, LeftAft, RightAft, Aft];

const WARSHIP_ARCS: [LocationId; 8] = [
    Nose,
    LeftFront,
    RightFront,
    LeftBroadside,
    RightBroadside,
    LeftAft,
    RightAft,
    Aft,
];

/// Armor multiplier and truncation for primitive hulls
const PRIMITIVE_ARMOR_FACTOR: f64 = 0.66;

/// Absorbs binary noise before truncating armor points
const POINT_EPSILON: f64 = 1e-9;

pub const DOCKING_HARDPOINT_TONS: f64 = 1000.0;
pub const GRAV_DECK_DIAMETER: (u32, u32) = (10, 1500);

/// Weight of one gravity deck by diameter in meters
pub fn grav_deck_tons(diameter: u32) -> f64 {
    if diameter < 100 {
        50.0
    } else if diameter < 250 {
        100.0
    } else {
        500.0
    }
}

/// Legal hull mass range per class
pub fn tonnage_range(class: CapitalClass) -> (f64, f64) {
    match class {
        CapitalClass::JumpShip => (50_000.0, 500_000.0),
        CapitalClass::WarShip => (100_000.0, 2_500_000.0),
        CapitalClass::SpaceStation => (2_000.0, 2_500_000.0),
    }
}

pub struct CapitalValidator<'a> {
    base: BaseValidator<'a>,
    ship: &'a CapitalDetails,
}

impl<'a> CapitalValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        ship: &'a CapitalDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::Capital);
        let mut validator = Self { base, ship };
        let engine = validator.weight_engine();
        validator.base = validator.base.with_engine_weight(engine);
        validator
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    fn is_warship(&self) -> bool {
        self.ship.class == CapitalClass::WarShip
    }

    pub fn weapon_arcs(&self) -> &'static [LocationId] {
        if self.is_warship() {
            &WARSHIP_ARCS
        } else {
            &ARMOR_ARCS
        }
    }

    pub fn locations(&self) -> Vec<LocationId> {
        let mut locations = self.weapon_arcs().to_vec();
        locations.push(Hull);
        locations
    }

    /// Capital armor points per ton, to one decimal
    pub fn armor_points_per_ton(&self) -> f64 {
        let design = self.design();
        let clan = design.is_clan();
        let tier = if design.tonnage < 150_000.0 {
            0.8
        } else if design.tonnage < 250_000.0 {
            0.6
        } else {
            0.4
        };
        let clan_bonus = if clan { 0.2 } else { 0.0 };
        Granularity::TenthTon.round((tier + clan_bonus) * design.armor.capital_multiplier(clan))
    }

    /// Free armor points from structural integrity
    pub fn structural_armor_bonus(&self) -> f64 {
        f64::from(self.ship.structural_integrity) * 0.6
    }

    /// Armor points bought by `tons` of armor
    ///
    /// Primitive hulls truncate the bought points and the structural bonus
    /// separately after the 0.66 reduction, so they can come out one point
    /// short of truncating the sum.
    pub fn armor_points(&self, tons: f64) -> u32 {
        let bought = tons * self.armor_points_per_ton();
        let bonus = self.structural_armor_bonus();
        let truncate = |points: f64| (points + POINT_EPSILON).floor();
        if self.ship.primitive {
            (truncate(bought * PRIMITIVE_ARMOR_FACTOR) + truncate(bonus * PRIMITIVE_ARMOR_FACTOR)) as u32
        } else {
            truncate(bought + bonus) as u32
        }
    }

    pub fn arc_capacity(&self, arc: LocationId) -> u32 {
        let design = self.design();
        let per_arc = if self.is_warship() { 20 } else { 12 };
        let armor_slots = design.armor.aero_slots(design.is_clan());
        match ARMOR_ARCS.iter().position(|a| *a == arc) {
            Some(index) => per_arc - armor_slot_cost(index as u32, armor_slots).min(per_arc),
            None => per_arc,
        }
    }

    pub fn free_heat_sinks(&self) -> u32 {
        let engine = self.weight_engine();
        let factor = if self.is_warship() { 6.8 } else { 1.3 };
        (engine * factor).sqrt().floor() as u32
    }

    pub fn max_docking_hardpoints(&self) -> u32 {
        (self.design().tonnage / 50_000.0).floor() as u32 + 1
    }

    /// Two decks below 100,000 t, three below 250,000 t, four from there up
    pub fn max_grav_decks(&self) -> usize {
        let tons = self.design().tonnage;
        if tons < 100_000.0 {
            2
        } else if tons < 250_000.0 {
            3
        } else {
            4
        }
    }

    pub fn max_bay_doors(&self) -> u32 {
        8 + (self.design().tonnage / 100_000.0).floor() as u32
    }

    /// Officers and ratings by hull class plus one gunner per weapon bay
    pub fn minimum_crew(&self) -> u32 {
        let tons = self.design().tonnage;
        let hull = match self.ship.class {
            CapitalClass::JumpShip => 6 + (tons / 50_000.0).ceil() as u32,
            CapitalClass::WarShip => 6 + (tons / 5_000.0).ceil() as u32,
            CapitalClass::SpaceStation => 4 + (tons / 50_000.0).ceil() as u32,
        };
        hull + self.ship.weapon_bays.len() as u32 + self.base.equipment_crew()
    }

    fn drive_core_weight(&self) -> f64 {
        if !self.ship.kf_drive {
            return 0.0;
        }
        let mut fraction = if self.is_warship() { 0.4525 } else { 0.95 };
        if self.ship.lithium_fusion_battery {
            fraction += 0.01;
        }
        Granularity::HalfTon.ceil(self.design().tonnage * fraction)
    }

    fn jump_sail_weight(&self) -> f64 {
        if !self.ship.jump_sail {
            return 0.0;
        }
        Granularity::HalfTon.ceil(30.0 + self.design().tonnage / 7500.0)
    }

    fn fittings_weight(&self) -> f64 {
        let docking = f64::from(self.ship.docking_hardpoints) * DOCKING_HARDPOINT_TONS;
        let decks: f64 = self.ship.grav_decks.iter().map(|d| grav_deck_tons(*d)).sum();
        docking + decks
    }
}

impl UnitValidator for CapitalValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    /// Station-keeping drives for JumpShips and stations, transit drives for WarShips
    fn weight_engine(&self) -> f64 {
        let design = self.design();
        let tons = if self.is_warship() {
            design.tonnage * f64::from(design.walk_mp) * 0.06
        } else {
            design.tonnage * 0.012
        };
        self.base.options.rounding.engine.ceil(tons)
    }

    fn weight_structure(&self) -> f64 {
        if !self.is_warship() {
            return 0.0;
        }
        self.base
            .options
            .rounding
            .structure
            .ceil(f64::from(self.ship.structural_integrity) * self.design().tonnage / 1000.0)
    }

    fn weight_controls(&self) -> f64 {
        self.base
            .options
            .rounding
            .controls
            .ceil(self.design().tonnage * 0.0025)
    }

    fn weight_heat_sinks(&self) -> f64 {
        f64::from(
            self.design()
                .heat_sinks
                .count
                .saturating_sub(self.free_heat_sinks()),
        )
    }

    /// Smallest armor tonnage on the armor grid that buys the allocated points
    fn weight_armor(&self) -> f64 {
        let total = self.design().total_armor_points();
        let grid = self.base.options.rounding.armor;
        let mut rate = self.armor_points_per_ton();
        let mut bonus = self.structural_armor_bonus();
        if self.ship.primitive {
            rate *= PRIMITIVE_ARMOR_FACTOR;
            bonus = (bonus * PRIMITIVE_ARMOR_FACTOR + POINT_EPSILON).floor();
        }
        let mut tons = grid.ceil((f64::from(total) - bonus).max(0.0) / rate);
        let step = 1.0 / grid.steps_per_ton();
        while self.armor_points(tons) < total {
            tons += step;
        }
        tons
    }

    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        vec![
            (WeightCategory::DriveCore, self.drive_core_weight()),
            (WeightCategory::JumpSail, self.jump_sail_weight()),
            (WeightCategory::Fuel, Granularity::HalfTon.ceil(self.ship.fuel_tons)),
            (WeightCategory::Misc, self.fittings_weight()),
        ]
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let mut ok = self.base.correct_locations(&self.locations(), report);
        for &arc in self.weapon_arcs() {
            let used = arc_slots_used(&self.base, &self.ship.weapon_bays, arc);
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
        if !design.armor.legal_for(UnitClass::Capital) {
            ok = report.fail(format!("{} cannot be used on a capital ship", design.armor.name()));
        }
        for loc in &design.locations {
            if !ARMOR_ARCS.contains(&loc.id) && loc.total_armor() > 0 {
                ok = report.fail(format!("{} cannot carry armor", loc.id));
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
        let ship = self.ship;
        let mut ok = combinations::correct_generic(&self.base, report)
            & correct_weapon_bays(&self.base, &ship.weapon_bays, report)
            & correct_mirrored_arcs(&self.base, LeftFront, RightFront, report)
            & correct_mirrored_arcs(&self.base, LeftAft, RightAft, report)
            & correct_bay_doors(&self.base, self.max_bay_doors(), report);
        if self.is_warship() {
            ok &= correct_mirrored_arcs(&self.base, LeftBroadside, RightBroadside, report);
        }

        let hardpoints = self.max_docking_hardpoints();
        if ship.docking_hardpoints > hardpoints {
            ok = report.fail(format!(
                "Docking hardpoints: {} exceeds the limit of {}",
                ship.docking_hardpoints, hardpoints
            ));
        }
        if ship.grav_decks.len() > self.max_grav_decks() {
            ok = report.fail(format!(
                "Gravity decks: {} exceeds the limit of {}",
                ship.grav_decks.len(),
                self.max_grav_decks()
            ));
        }
        let (min_diameter, max_diameter) = GRAV_DECK_DIAMETER;
        for diameter in &ship.grav_decks {
            if !(min_diameter..=max_diameter).contains(diameter) {
                ok = report.fail(format!(
                    "Gravity deck diameter {} m is outside {} to {} m",
                    diameter, min_diameter, max_diameter
                ));
            }
        }

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
        let ship = self.ship;
        let mut ok = true;

        let (min, max) = tonnage_range(ship.class);
        if design.tonnage < min || design.tonnage > max {
            ok = report.fail(format!(
                "{} tonnage {} is outside the {} to {} ton range",
                ship.class, design.tonnage, min, max
            ));
        }
        let expected_mode = if self.is_warship() {
            MovementMode::Spheroid
        } else {
            MovementMode::StationKeeping
        };
        if design.movement_mode != expected_mode {
            ok = report.fail(format!(
                "{} must use {} movement, not {}",
                ship.class, expected_mode, design.movement_mode
            ));
        }
        if self.is_warship() && design.walk_mp == 0 {
            ok = report.fail("WarShips need a safe thrust of at least 1");
        }
        if !self.is_warship() && design.walk_mp > 0 {
            ok = report.fail(format!("{} drives only keep station", ship.class));
        }
        if !design.engine.kind.is_fusion() {
            ok = report.fail(format!("{} cannot power a capital ship", design.engine.kind.name()));
        }
        if self.ship.structural_integrity == 0 {
            ok = report.fail("Structural integrity must be at least 1");
        }

        match ship.class {
            CapitalClass::SpaceStation => {
                if ship.kf_drive || ship.jump_sail {
                    ok = report.fail("Space stations cannot mount a jump drive or jump sail");
                }
            }
            _ => {
                if !ship.kf_drive {
                    ok = report.fail(format!("{}s require a jump drive", ship.class));
                }
            }
        }
        if ship.lithium_fusion_battery && !ship.kf_drive {
            ok = report.fail("A lithium-fusion battery requires a jump drive");
        }
        if ship.primitive && ship.class != CapitalClass::JumpShip {
            ok = report.fail("Only JumpShips may be built to primitive standards");
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

    /// A 100,000 ton JumpShip that is legal and weighs exactly 100,000 tons
    pub fn jumpship() -> UnitDesign {
        UnitDesign {
            chassis: "Test JumpShip".into(),
            model: "TJ-1".into(),
            tonnage: 100_000.0,
            year: 3025,
            tech_base: TechBase::InnerSphere,
            mixed_tech: false,
            rules_level: RulesLevel::Introductory,
            movement_mode: MovementMode::StationKeeping,
            omni: false,
            walk_mp: 0,
            jump_mp: 0,
            engine: Engine::new(EngineKind::Fusion, 0),
            armor: ArmorKind::Standard,
            structure: StructureKind::Standard,
            heat_sinks: HeatSinks {
                kind: HeatSinkKind::Single,
                count: 39,
            },
            locations: vec![
                Location::new(Nose, 9),
                Location::new(LeftFront, 8),
                Location::new(RightFront, 8),
                Location::new(LeftAft, 8),
                Location::new(RightAft, 8),
                Location::new(Aft, 8),
            ],
            mounts: vec![
                EquipmentMount::new("ISAC10", Nose),
                EquipmentMount::new("ISAC10", Nose),
                EquipmentMount::new("ISAC10 Ammo", Hull).sized(2.0),
            ],
            crew: CrewData {
                crew: 9,
                passengers: 0,
                quarters: vec![Quarters {
                    kind: QuartersKind::Crew,
                    capacity: 9,
                }],
            },
            bays: vec![TransportBay {
                kind: BayKind::Cargo,
                capacity: 2000.0,
                doors: 1,
            }],
            failed_equipment: Vec::new(),
            details: UnitDetails::Capital(CapitalDetails {
                class: CapitalClass::JumpShip,
                fuel_tons: 357.0,
                structural_integrity: 1,
                kf_drive: true,
                lithium_fusion_battery: false,
                jump_sail: true,
                docking_hardpoints: 1,
                grav_decks: Vec::new(),
                weapon_bays: vec![WeaponBay {
                    name: "Nose AC/10 Bay".into(),
                    location: Nose,
                    weapons: vec![0, 1],
                    ammo: vec![2],
                }],
                primitive: false,
            }),
        }
    }

    fn validator<'a>(design: &'a UnitDesign, options: &'a ValidationOptions) -> CapitalValidator<'a> {
        let UnitDetails::Capital(ship) = &design.details else {
            panic!("not a capital ship");
        };
        CapitalValidator::new(design, ship, options, catalog())
    }

    fn details(design: &mut UnitDesign) -> &mut CapitalDetails {
        match &mut design.details {
            UnitDetails::Capital(ship) => ship,
            _ => panic!("not a capital ship"),
        }
    }

    #[test]
    fn test_reference_jumpship_is_legal() {
        let design = jumpship();
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        let breakdown = validator.weight_breakdown();
        assert_eq!(breakdown.get(WeightCategory::Engine), 1200.0);
        assert_eq!(breakdown.get(WeightCategory::Controls), 250.0);
        assert_eq!(breakdown.get(WeightCategory::DriveCore), 95_000.0);
        assert_eq!(breakdown.get(WeightCategory::JumpSail), 43.5);
        assert_eq!(breakdown.get(WeightCategory::Armor), 60.5);
        assert_eq!(breakdown.get(WeightCategory::HeatSinks), 0.0);
        assert_eq!(validator.calculate_weight(), 100_000.0);

        let mut report = Report::new();
        assert!(validator.correct_entity(&mut report), "{}", report);
    }

    #[test]
    fn test_armor_tiers() {
        let mut design = jumpship();
        let options = ValidationOptions::default();
        assert_eq!(validator(&design, &options).armor_points_per_ton(), 0.8);
        design.tonnage = 200_000.0;
        assert_eq!(validator(&design, &options).armor_points_per_ton(), 0.6);
        design.tonnage = 300_000.0;
        design.tech_base = TechBase::Clan;
        assert_eq!(validator(&design, &options).armor_points_per_ton(), 0.6);
        design.armor = ArmorKind::FerroCarbide;
        // (0.4 + 0.2) x 1.2 = 0.72, one decimal
        assert_eq!(validator(&design, &options).armor_points_per_ton(), 0.7);
    }

    #[test]
    fn test_primitive_armor_truncates_each_term() {
        let mut design = jumpship();
        details(&mut design).structural_integrity = 25;
        details(&mut design).primitive = true;
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        // bought 10 x 0.8 x 0.66 = 5.28 -> 5, bonus 15 x 0.66 = 9.9 -> 9
        assert_eq!(validator.armor_points(10.0), 14);
        // truncating the sum would have given floor(15.18) = 15
        assert_eq!(((8.0 + 15.0) * PRIMITIVE_ARMOR_FACTOR).floor(), 15.0);
    }

    #[test]
    fn test_bay_ammo_must_cover_ten_engagements() {
        let mut design = jumpship();
        design.mounts[2] = EquipmentMount::new("ISAC10 Ammo", Hull).with_shots(15);
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("Nose AC/10 Bay: 15 shots"));
        assert!(report.mentions("20 required"));
    }

    #[test]
    fn test_empty_bay_fails() {
        let mut design = jumpship();
        details(&mut design).weapon_bays.push(WeaponBay {
            name: "Aft Bay".into(),
            location: Aft,
            weapons: Vec::new(),
            ammo: Vec::new(),
        });
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("Aft Bay contains no weapons"));
    }

    #[test]
    fn test_hull_fittings_are_capped() {
        let mut design = jumpship();
        details(&mut design).docking_hardpoints = 4;
        details(&mut design).grav_decks = vec![100, 100, 100, 5];
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("Docking hardpoints: 4 exceeds the limit of 3"));
        assert!(report.mentions("Gravity decks: 4 exceeds the limit of 3"));
        assert!(report.mentions("diameter 5 m"));
    }

    #[test]
    fn test_grav_deck_tiers_start_at_their_threshold() {
        let options = ValidationOptions::default();
        let mut design = jumpship();
        for (tons, limit) in [
            (99_999.0, 2),
            (100_000.0, 3),
            (249_999.0, 3),
            (250_000.0, 4),
        ] {
            design.tonnage = tons;
            assert_eq!(validator(&design, &options).max_grav_decks(), limit, "{} t", tons);
        }
    }

    #[test]
    fn test_warship_drive_and_structure() {
        let mut design = jumpship();
        design.tonnage = 500_000.0;
        design.walk_mp = 3;
        design.movement_mode = MovementMode::Spheroid;
        details(&mut design).class = CapitalClass::WarShip;
        details(&mut design).structural_integrity = 50;
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        assert_eq!(validator.weight_engine(), 90_000.0);
        assert_eq!(validator.weight_structure(), 25_000.0);
        assert_eq!(validator.drive_core_weight(), 226_250.0);
        assert_eq!(validator.arc_capacity(LeftBroadside), 20);
    }

    #[test]
    fn test_stations_cannot_jump() {
        let mut design = jumpship();
        details(&mut design).class = CapitalClass::SpaceStation;
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_movement(&mut report));
        assert!(report.mentions("cannot mount a jump drive"));
    }
}
