//! Walking chassis rules
//!
//! Bipeds, quads and tripods, including superheavy (over 100 t) and
//! land-air variants.

use crate::catalog::{EquipmentCatalog, EquipmentFlag as F, EquipmentType, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::types::MovementMode;
use crate::design::components::{fusion_table_weight, MAX_ENGINE_RATING};
use crate::design::{
    ArmorKind, CockpitKind, EngineKind, EquipmentMount, GyroKind, HeatSinkKind, LocationId,
    MekDetails, UnitDesign,
};
use crate::validation::base::BaseValidator;
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::WeightCategory;

use LocationId::*;

const BIPED_LOCATIONS: [LocationId; 8] = [
    Head, CenterTorso, LeftTorso, RightTorso, LeftArm, RightArm, LeftLeg, RightLeg,
];
const QUAD_LOCATIONS: [LocationId; 8] = [
    Head, CenterTorso, LeftTorso, RightTorso, FrontLeftLeg, FrontRightLeg, LeftLeg, RightLeg,
];
const TRIPOD_LOCATIONS: [LocationId; 9] = [
    Head, CenterTorso, LeftTorso, RightTorso, LeftArm, RightArm, LeftLeg, RightLeg, CenterLeg,
];

/// Internal structure points (center torso, side torso, arm, leg) for 10-200 t in 5 t steps
const STRUCTURE_POINTS: [[u32; 4]; 39] = [
    [4, 3, 1, 2],
    [5, 4, 2, 3],
    [6, 5, 3, 4],
    [8, 6, 4, 6],
    [10, 7, 5, 7],
    [11, 8, 6, 8],
    [12, 10, 6, 10],
    [14, 11, 7, 11],
    [16, 12, 8, 12],
    [18, 13, 9, 13],
    [20, 14, 10, 14],
    [21, 15, 10, 15],
    [22, 15, 11, 15],
    [23, 16, 12, 16],
    [25, 17, 13, 17],
    [27, 18, 14, 18],
    [29, 19, 15, 19],
    [30, 20, 16, 20],
    [31, 21, 17, 21],
    [32, 22, 17, 22],
    [33, 23, 18, 23],
    [35, 24, 19, 24],
    [36, 25, 20, 25],
    [38, 26, 21, 26],
    [39, 27, 21, 27],
    [41, 28, 22, 28],
    [42, 29, 23, 29],
    [44, 31, 24, 31],
    [45, 32, 25, 32],
    [47, 33, 26, 33],
    [48, 34, 26, 34],
    [50, 35, 27, 35],
    [51, 36, 28, 36],
    [53, 37, 29, 37],
    [54, 38, 30, 38],
    [56, 39, 31, 39],
    [57, 40, 31, 40],
    [59, 41, 32, 41],
    [60, 42, 33, 42],
];

fn structure_row(tonnage: f64) -> Option<[u32; 4]> {
    if tonnage.fract() != 0.0 {
        return None;
    }
    let tons = tonnage as u32;
    if tons % 5 != 0 || !(10..=200).contains(&tons) {
        return None;
    }
    Some(STRUCTURE_POINTS[((tons - 10) / 5) as usize])
}

/// Internal structure points of one location
pub fn internal_structure(tonnage: f64, location: LocationId) -> u32 {
    let Some([ct, st, arm, leg]) = structure_row(tonnage) else {
        return 0;
    };
    match location {
        Head if tonnage > 100.0 => 4,
        Head => 3,
        CenterTorso => ct,
        LeftTorso | RightTorso => st,
        LeftArm | RightArm => arm,
        _ if location.is_leg() => leg,
        _ => 0,
    }
}

/// Exclusive mek features for the pairwise combination table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feature {
    StealthArmor,
    NullSignature,
    VoidSignature,
    Chameleon,
    TargetingComputer,
    C3,
    C3i,
    Tsm,
    IndustrialTsm,
    Aes,
}

impl Feature {
    fn name(self) -> &'static str {
        match self {
            Feature::StealthArmor => "stealth armor",
            Feature::NullSignature => "a null signature system",
            Feature::VoidSignature => "a void signature system",
            Feature::Chameleon => "a chameleon light polarization shield",
            Feature::TargetingComputer => "a targeting computer",
            Feature::C3 => "C3 equipment",
            Feature::C3i => "improved C3 equipment",
            Feature::Tsm => "triple strength myomer",
            Feature::IndustrialTsm => "industrial triple strength myomer",
            Feature::Aes => "an actuator enhancement system",
        }
    }
}

const EXCLUSIVE_FEATURES: [(Feature, Feature); 13] = [
    (Feature::StealthArmor, Feature::NullSignature),
    (Feature::StealthArmor, Feature::VoidSignature),
    (Feature::StealthArmor, Feature::Chameleon),
    (Feature::NullSignature, Feature::TargetingComputer),
    (Feature::VoidSignature, Feature::TargetingComputer),
    (Feature::NullSignature, Feature::C3),
    (Feature::VoidSignature, Feature::C3),
    (Feature::NullSignature, Feature::C3i),
    (Feature::VoidSignature, Feature::C3i),
    (Feature::C3, Feature::C3i),
    (Feature::Tsm, Feature::IndustrialTsm),
    (Feature::Tsm, Feature::Aes),
    (Feature::IndustrialTsm, Feature::Aes),
];

pub struct MekValidator<'a> {
    base: BaseValidator<'a>,
    mek: &'a MekDetails,
}

impl<'a> MekValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        mek: &'a MekDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::Mek);
        let mut validator = Self { base, mek };
        let engine = validator.weight_engine();
        validator.base = validator.base.with_engine_weight(engine);
        validator
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    fn is_superheavy(&self) -> bool {
        self.design().tonnage > 100.0
    }

    fn is_quad(&self) -> bool {
        self.design().movement_mode == MovementMode::Quad
    }

    pub fn locations(&self) -> &'static [LocationId] {
        match self.design().movement_mode {
            MovementMode::Quad => &QUAD_LOCATIONS,
            MovementMode::Tripod => &TRIPOD_LOCATIONS,
            _ => &BIPED_LOCATIONS,
        }
    }

    fn slot_capacity(location: LocationId) -> u32 {
        if location == Head || location.is_leg() {
            6
        } else {
            12
        }
    }

    /// Slots taken by engine, gyro, cockpit and actuators
    fn system_slots(&self, location: LocationId) -> u32 {
        let design = self.design();
        let cockpit = self.mek.cockpit.layout();
        match location {
            Head => cockpit.head,
            CenterTorso => {
                design.engine.kind.center_torso_slots() + self.mek.gyro.slots() + cockpit.center_torso
            }
            LeftTorso | RightTorso => {
                design
                    .engine
                    .kind
                    .side_torso_slots(design.is_clan(), design.engine.large)
                    + cockpit.side_torso
            }
            LeftArm | RightArm => self.mek.actuators.arm_slots(location),
            _ if location.is_leg() => 4,
            _ => 0,
        }
    }

    /// Slots an item needs; superheavy chassis pack two items per slot
    fn required_slots(&self, mount: &EquipmentMount, eq: &EquipmentType) -> u32 {
        let slots = self.base.mount_slots(mount, eq);
        if self.is_superheavy() {
            slots.div_ceil(2)
        } else {
            slots
        }
    }

    fn placed_slots(&self, mount: &EquipmentMount, eq: &EquipmentType) -> (u32, u32) {
        let required = self.required_slots(mount, eq);
        let primary = mount
            .slots
            .unwrap_or_else(|| required.saturating_sub(mount.secondary_slots));
        (primary, mount.secondary_slots)
    }

    fn max_armor(&self, location: LocationId) -> u32 {
        if location == Head {
            if self.is_superheavy() {
                12
            } else {
                9
            }
        } else {
            2 * internal_structure(self.design().tonnage, location)
        }
    }

    fn filler_requirement(&self, flag: F) -> u32 {
        let design = self.design();
        let clan = design.is_clan();
        let slots = match flag {
            F::StructureFiller => design.structure.mek_slots(clan),
            _ => design.armor.mek_slots(clan),
        };
        if self.is_superheavy() {
            slots.div_ceil(2)
        } else {
            slots
        }
    }

    fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::StealthArmor => self
                .design()
                .locations
                .iter()
                .any(|loc| loc.armor_kind.unwrap_or(self.design().armor) == ArmorKind::Stealth),
            Feature::NullSignature => self.base.has_flag(F::NullSignature),
            Feature::VoidSignature => self.base.has_flag(F::VoidSignature),
            Feature::Chameleon => self.base.has_flag(F::Chameleon),
            Feature::TargetingComputer => self.base.has_flag(F::TargetingComputer),
            Feature::C3 => self.base.has_flag(F::C3Master) || self.base.has_flag(F::C3Slave),
            Feature::C3i => self.base.has_flag(F::C3i),
            Feature::Tsm => self.base.has_flag(F::Tsm),
            Feature::IndustrialTsm => self.base.has_flag(F::IndustrialTsm),
            Feature::Aes => self.base.has_flag(F::Aes),
        }
    }

    fn correct_actuator_rules(&self, report: &mut Report) -> bool {
        let actuators = &self.mek.actuators;
        let mut ok = true;
        for arm in [LeftArm, RightArm] {
            if actuators.has_hand(arm) && !actuators.has_lower_arm(arm) {
                ok = report.fail(format!(
                    "{} has a hand actuator without a lower arm actuator",
                    arm
                ));
            }
        }

        for (_, mount, eq) in self.base.resolved() {
            let location = mount.location;
            if eq.has_flag(F::LegOnly) && !location.is_leg() {
                ok = report.fail(format!("{} must be mounted in a leg", eq.name));
                continue;
            }
            if eq.has_flag(F::ArmOnly) {
                if self.is_quad() {
                    if !location.is_torso() {
                        ok = report.fail(format!(
                            "{} must be mounted in a torso on a four-legged chassis",
                            eq.name
                        ));
                    }
                    continue;
                }
                if !location.is_arm() {
                    ok = report.fail(format!("{} must be mounted in an arm", eq.name));
                    continue;
                }
            }
            if !location.is_arm() {
                continue;
            }
            if eq.has_flag(F::RequiresHand) && !actuators.has_hand(location) {
                ok = report.fail(format!(
                    "{} requires a hand actuator in the {}",
                    eq.name, location
                ));
            }
            if eq.has_flag(F::RequiresLowerArm) && !actuators.has_lower_arm(location) {
                ok = report.fail(format!(
                    "{} requires a lower arm actuator in the {}",
                    eq.name, location
                ));
            }
            if eq.has_flag(F::ForbidsHand) && actuators.has_hand(location) {
                ok = report.fail(format!(
                    "{} cannot be mounted with a hand actuator in the {}",
                    eq.name, location
                ));
            }
        }
        ok
    }

    fn correct_systems(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mek = self.mek;
        let mut ok = true;

        if (mek.cockpit == CockpitKind::Interface) != (mek.gyro == GyroKind::None) {
            ok = report.fail("An interface cockpit must be paired with no gyro, and no gyro requires an interface cockpit");
        }
        if mek.cockpit.is_superheavy() != self.is_superheavy() {
            ok = report.fail(format!(
                "{} does not suit a {} ton chassis",
                mek.cockpit.name(),
                design.tonnage
            ));
        }
        if mek.cockpit == CockpitKind::Tripod && design.movement_mode != MovementMode::Tripod {
            ok = report.fail("Tripod cockpits require a tripod chassis");
        }
        if mek.gyro == GyroKind::Superheavy && !self.is_superheavy() {
            ok = report.fail("Superheavy gyros require a superheavy chassis");
        }
        if mek.industrial && design.movement_mode == MovementMode::Tripod && !self.is_superheavy() {
            // Industrial tripods are only built at superheavy scale
            ok = report.fail("Industrial tripods must be superheavy");
        }

        let masc = self.base.count_flag(F::Masc);
        if masc > 1 {
            ok = report.fail(format!("Only one MASC system may be mounted ({} found)", masc));
        }

        if self.has_feature(Feature::StealthArmor) && !self.base.has_flag(F::Ecm) {
            ok = report.fail("Stealth armor requires an ECM suite");
        }

        for (a, b) in EXCLUSIVE_FEATURES {
            if self.has_feature(a) && self.has_feature(b) {
                ok = report.fail(format!("{} cannot be combined with {}", capitalize(a.name()), b.name()));
            }
        }

        let lam_gear = self.base.has_flag(F::LandingGear) && self.base.has_flag(F::Avionics);
        if mek.lam {
            if design.tonnage > 55.0 {
                ok = report.fail("Land-air meks may not exceed 55 tons");
            }
            if design.engine.kind.is_xl_family() {
                ok = report.fail(format!(
                    "Land-air meks cannot use a {}",
                    design.engine.kind.name()
                ));
            }
            if !lam_gear {
                ok = report.fail("Land-air meks require landing gear and avionics");
            }
            if design.movement_mode != MovementMode::Biped {
                ok = report.fail("Land-air meks must be bipeds");
            }
        } else if self.base.has_flag(F::LandingGear) || self.base.has_flag(F::Avionics) {
            ok = report.fail("Landing gear and avionics may only be mounted on land-air meks");
        }
        ok
    }

    fn correct_engine(&self, report: &mut Report) -> bool {
        let design = self.design();
        let engine = &design.engine;
        let mut ok = true;

        if engine.kind.table_multiplier().is_none() {
            return report.fail(format!("{} cannot power a Mek", engine.kind.name()));
        }
        if engine.rating % 5 != 0 {
            ok = report.fail(format!("Engine rating {} is not a multiple of 5", engine.rating));
        }
        if engine.rating > MAX_ENGINE_RATING {
            ok = report.fail(format!("Engine rating {} exceeds 500", engine.rating));
        } else if engine.rating > 400 && !engine.large {
            ok = report.fail(format!("Engine rating {} requires a large engine", engine.rating));
        }
        let expected = f64::from(design.walk_mp) * design.tonnage;
        if design.walk_mp == 0 || (f64::from(engine.rating) - expected).abs() > 1e-6 {
            ok = report.fail(format!(
                "Engine rating {} does not match walking MP {} on {} tons",
                engine.rating, design.walk_mp, design.tonnage
            ));
        }
        ok
    }

    fn correct_jump(&self, report: &mut Report) -> bool {
        let design = self.design();
        let jets: Vec<_> = self.base.with_flag(F::JumpJet).collect();
        let improved = jets.iter().filter(|(_, _, eq)| eq.has_flag(F::ImprovedJumpJet)).count();
        let jet_count = jets.len() as u32;
        let booster = self.base.has_flag(F::JumpBooster);
        let wing = self.base.has_flag(F::PartialWing);
        let mut ok = true;

        if self.is_superheavy() && (jet_count > 0 || design.jump_mp > 0) {
            return report.fail("Superheavy meks cannot mount jump jets");
        }
        if improved > 0 && improved < jets.len() {
            ok = report.fail("Standard and improved jump jets cannot be mixed");
        }

        let jets_match = if booster {
            jet_count <= design.jump_mp
        } else if wing {
            design.jump_mp >= jet_count && design.jump_mp - jet_count <= 2
        } else {
            jet_count == design.jump_mp
        };
        if !jets_match {
            ok = report.fail(format!(
                "{} jump jets mounted for {} jump MP",
                jet_count, design.jump_mp
            ));
        }
        if !booster && !wing && design.jump_mp > design.run_mp() {
            ok = report.fail(format!(
                "Jump MP {} exceeds running MP {}",
                design.jump_mp,
                design.run_mp()
            ));
        }
        if improved == 0 && jet_count > design.walk_mp {
            ok = report.fail(format!(
                "Jump MP {} exceeds walking MP {} without improved jump jets",
                jet_count, design.walk_mp
            ));
        }
        ok
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl UnitValidator for MekValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    fn weight_engine(&self) -> f64 {
        let engine = &self.design().engine;
        match engine.kind.table_multiplier() {
            Some(multiplier) => self
                .base
                .options
                .rounding
                .engine
                .ceil(fusion_table_weight(engine.rating) * multiplier),
            None => 0.0,
        }
    }

    fn weight_structure(&self) -> f64 {
        let design = self.design();
        let scale = if self.is_superheavy() { 2.0 } else { 1.0 };
        self.base
            .options
            .rounding
            .structure
            .ceil(design.tonnage / 10.0 * design.structure.weight_multiplier() * scale)
    }

    fn weight_controls(&self) -> f64 {
        self.mek.cockpit.tons()
    }

    fn weight_heat_sinks(&self) -> f64 {
        let design = self.design();
        let free = design.engine.kind.free_heat_sinks();
        f64::from(design.heat_sinks.count.saturating_sub(free))
    }

    fn weight_armor(&self) -> f64 {
        self.base.weight_standard_armor()
    }

    fn extra_weights(&self) -> Vec<(WeightCategory, f64)> {
        let rating = self.design().engine.rating;
        let gyro = f64::from(rating.div_ceil(100)) * self.mek.gyro.weight_multiplier();
        vec![(
            WeightCategory::Gyro,
            self.base.options.rounding.gyro.ceil_max_half(gyro),
        )]
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let design = self.design();
        let locations = self.locations();
        let mut ok = self.base.correct_locations(locations, report);

        let mut used: Vec<u32> = locations.iter().map(|loc| self.system_slots(*loc)).collect();
        let slot_index = |loc: LocationId| locations.iter().position(|l| *l == loc);

        let mut spread: Vec<(&str, u32, u32)> = Vec::new();
        for (_, mount, eq) in self.base.resolved() {
            let (primary, secondary) = self.placed_slots(mount, eq);
            if let Some(idx) = slot_index(mount.location) {
                used[idx] += primary;
            }
            if let Some(second) = mount.secondary_location {
                if !eq.has_flag(F::Splittable) {
                    ok = report.fail(format!("{} cannot be split between locations", eq.name));
                } else if !mount.location.adjacent_on_mek(second) {
                    ok = report.fail(format!(
                        "{} is split between {} and {}, which are not adjacent",
                        eq.name, mount.location, second
                    ));
                }
                if let Some(idx) = slot_index(second) {
                    used[idx] += secondary;
                }
            }
            if mount.rear_mounted && !mount.location.is_torso() {
                ok = report.fail(format!(
                    "{} is rear-mounted in the {}; only torsos mount rear-facing",
                    eq.name, mount.location
                ));
            }

            let required = self.required_slots(mount, eq);
            if eq.has_flag(F::Spreadable) {
                match spread.iter_mut().find(|(name, _, _)| *name == eq.internal_name) {
                    Some(entry) => entry.1 += primary + secondary,
                    None => spread.push((eq.internal_name, primary + secondary, required)),
                }
            } else if primary + secondary != required {
                ok = report.fail(format!(
                    "{} occupies {} slots but needs {}",
                    eq.name,
                    primary + secondary,
                    required
                ));
            }
        }

        for (name, placed, required) in spread {
            let Some(eq) = self.base.catalog.get(name) else {
                continue;
            };
            if eq.has_flag(F::StructureFiller) || eq.has_flag(F::ArmorFiller) {
                continue;
            }
            if placed != required {
                ok = report.fail(format!(
                    "{} occupies {} slots but needs {}",
                    eq.name, placed, required
                ));
            }
        }

        for flag in [F::StructureFiller, F::ArmorFiller] {
            if flag == F::ArmorFiller && design.is_patchwork() {
                continue;
            }
            let placed: u32 = self
                .base
                .with_flag(flag)
                .map(|(_, mount, eq)| {
                    let (primary, secondary) = self.placed_slots(mount, eq);
                    primary + secondary
                })
                .sum();
            let required = self.filler_requirement(flag);
            if placed != required {
                let what = if flag == F::StructureFiller {
                    design.structure.name()
                } else {
                    design.armor.name()
                };
                ok = report.fail(format!(
                    "{} requires {} critical slots, {} allocated",
                    what, required, placed
                ));
            }
        }

        for (loc, slots) in locations.iter().zip(&used) {
            let capacity = Self::slot_capacity(*loc);
            if *slots > capacity {
                ok = report.fail(format!(
                    "{} has {} critical slots used, {} available",
                    loc, slots, capacity
                ));
            }
        }
        ok
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;

        let mut kinds = vec![design.armor];
        kinds.extend(design.locations.iter().filter_map(|loc| loc.armor_kind));
        kinds.dedup();
        for kind in kinds {
            if !kind.legal_for(UnitClass::Mek) {
                ok = report.fail(format!("{} cannot be used on a Mek", kind.name()));
            }
        }

        if structure_row(design.tonnage).is_none() {
            ok = report.fail(format!(
                "Mek tonnage {} must be a multiple of 5 between 10 and 200",
                design.tonnage
            ));
        }
        if !design.structure.legal_for(UnitClass::Mek) {
            ok = report.fail(format!("{} cannot be used on a Mek", design.structure.name()));
        }

        for loc in &design.locations {
            let max = self.max_armor(loc.id);
            if loc.total_armor() > max {
                ok = report.fail(format!(
                    "{} armor {} exceeds the maximum of {}",
                    loc.id,
                    loc.total_armor(),
                    max
                ));
            }
            if loc.rear_armor > 0 && !loc.id.is_torso() {
                ok = report.fail(format!("{} cannot carry rear armor", loc.id));
            }
        }
        ok
    }

    fn correct_heat_sinks(&self, report: &mut Report) -> bool {
        let design = self.design();
        let sinks = design.heat_sinks;
        let mut ok = true;

        if design.engine.kind.is_fusion() && sinks.count < 10 {
            ok = report.fail(format!(
                "Heat sinks: {} is fewer than the 10 a fusion engine requires",
                sinks.count
            ));
        }

        let integral = if design.engine.kind.is_fusion() {
            (design.engine.rating / 25).min(sinks.count)
        } else {
            0
        };
        let mounted: Vec<_> = self.base.with_flag(F::HeatSink).collect();
        let expected = sinks.count - integral;
        if mounted.len() as u32 != expected {
            ok = report.fail(format!(
                "Heat sinks: {} mounted, {} required outside the engine",
                mounted.len(),
                expected
            ));
        }
        let double = sinks.kind == HeatSinkKind::Double;
        if mounted
            .iter()
            .any(|(_, _, eq)| eq.has_flag(F::DoubleHeatSink) != double)
        {
            ok = report.fail("Heat sinks: mounted sinks do not match the declared heat sink type");
        }
        ok
    }

    fn component_tech(&self) -> Vec<(&'static str, TechAdvancement)> {
        let design = self.design();
        let mut components = vec![
            (design.engine.kind.name(), design.engine.kind.tech()),
            (design.structure.name(), design.structure.tech()),
            (design.armor.name(), design.armor.tech()),
            (self.mek.cockpit.name(), self.mek.cockpit.tech()),
            (self.mek.gyro.name(), self.mek.gyro.tech()),
        ];
        for loc in &design.locations {
            if let Some(kind) = loc.armor_kind {
                if kind != design.armor {
                    components.push((kind.name(), kind.tech()));
                }
            }
        }
        let sink_name = design.heat_sinks.kind.catalog_name(design.is_clan());
        if let Some(eq) = self.base.catalog.get(sink_name) {
            components.push((eq.name, eq.tech));
        }
        components
    }

    fn correct_combinations(&self, report: &mut Report) -> bool {
        combinations::correct_generic(&self.base, report)
            & self.correct_systems(report)
            & self.correct_actuator_rules(report)
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        if self.design().engine.kind == EngineKind::None {
            return report.fail("Meks require an engine");
        }
        self.correct_engine(report) & self.correct_jump(report)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::core::types::{RulesLevel, TechBase};
    use crate::design::*;

    /// A 50 ton, 3025-era medium mek that is legal and weighs exactly 50 tons
    pub fn hunchback() -> UnitDesign {
        let mounts = vec![
            EquipmentMount::new("ISAC20", RightTorso),
            EquipmentMount::new("ISAC20 Ammo", LeftTorso).sized(2.0).with_slots(2),
            EquipmentMount::new("ISMediumLaser", LeftArm),
            EquipmentMount::new("ISMediumLaser", RightArm),
            EquipmentMount::new("ISSmallLaser", Head),
            EquipmentMount::new("Heat Sink", LeftLeg),
            EquipmentMount::new("Heat Sink", LeftLeg),
            EquipmentMount::new("Heat Sink", RightLeg),
            EquipmentMount::new("Heat Sink", RightLeg),
            EquipmentMount::new("Heat Sink", LeftTorso),
        ];
        UnitDesign {
            chassis: "Hunchback".into(),
            model: "HBK-4G".into(),
            tonnage: 50.0,
            year: 3025,
            tech_base: TechBase::InnerSphere,
            mixed_tech: false,
            rules_level: RulesLevel::Introductory,
            movement_mode: MovementMode::Biped,
            omni: false,
            walk_mp: 4,
            jump_mp: 0,
            engine: Engine::new(EngineKind::Fusion, 200),
            armor: ArmorKind::Standard,
            structure: StructureKind::Standard,
            heat_sinks: HeatSinks {
                kind: HeatSinkKind::Single,
                count: 13,
            },
            locations: vec![
                Location::new(Head, 9),
                Location::new(CenterTorso, 26).with_rear(5),
                Location::new(LeftTorso, 20).with_rear(4),
                Location::new(RightTorso, 20).with_rear(4),
                Location::new(LeftArm, 16),
                Location::new(RightArm, 16),
                Location::new(LeftLeg, 20),
                Location::new(RightLeg, 20),
            ],
            mounts,
            crew: CrewData::default(),
            bays: Vec::new(),
            failed_equipment: Vec::new(),
            details: UnitDetails::Mek(MekDetails {
                cockpit: CockpitKind::Standard,
                gyro: GyroKind::Standard,
                actuators: Actuators::default(),
                lam: false,
                industrial: false,
            }),
        }
    }

    fn check(design: &UnitDesign, options: &ValidationOptions) -> (bool, Report) {
        let UnitDetails::Mek(mek) = &design.details else {
            panic!("not a mek");
        };
        let validator = MekValidator::new(design, mek, options, catalog());
        let mut report = Report::new();
        let ok = validator.correct_entity(&mut report);
        (ok, report)
    }

    #[test]
    fn test_reference_design_is_legal() {
        let design = hunchback();
        let options = ValidationOptions::default();
        let (ok, report) = check(&design, &options);
        assert!(ok, "{}", report);
        assert!(report.is_empty());
    }

    #[test]
    fn test_reference_design_weight_breakdown() {
        let design = hunchback();
        let options = ValidationOptions::default();
        let UnitDetails::Mek(mek) = &design.details else {
            unreachable!()
        };
        let validator = MekValidator::new(&design, mek, &options, catalog());
        let breakdown = validator.weight_breakdown();
        assert_eq!(breakdown.get(WeightCategory::Engine), 8.5);
        assert_eq!(breakdown.get(WeightCategory::Structure), 5.0);
        assert_eq!(breakdown.get(WeightCategory::Gyro), 2.0);
        assert_eq!(breakdown.get(WeightCategory::Controls), 3.0);
        assert_eq!(breakdown.get(WeightCategory::HeatSinks), 3.0);
        assert_eq!(breakdown.get(WeightCategory::Armor), 10.0);
        assert_eq!(breakdown.get(WeightCategory::Weapons), 16.5);
        assert_eq!(breakdown.get(WeightCategory::Ammo), 2.0);
        assert_eq!(validator.calculate_weight(), 50.0);
    }

    #[test]
    fn test_gyro_variants() {
        let mut design = hunchback();
        design.engine.rating = 250;
        design.walk_mp = 5;
        let options = ValidationOptions::default();
        for (gyro, tons) in [
            (GyroKind::Standard, 3.0),
            (GyroKind::Xl, 1.5),
            (GyroKind::Compact, 4.5),
            (GyroKind::Heavy, 6.0),
            (GyroKind::None, 0.0),
        ] {
            let mek = MekDetails {
                cockpit: CockpitKind::Standard,
                gyro,
                actuators: Actuators::default(),
                lam: false,
                industrial: false,
            };
            let validator = MekValidator::new(&design, &mek, &options, catalog());
            assert_eq!(validator.extra_weights()[0].1, tons, "{:?}", gyro);
        }
    }

    #[test]
    fn test_no_gyro_requires_interface_cockpit() {
        let mut design = hunchback();
        if let UnitDetails::Mek(mek) = &mut design.details {
            mek.gyro = GyroKind::None;
        }
        let (ok, report) = check(&design, &ValidationOptions::default());
        assert!(!ok);
        assert!(report.mentions("interface cockpit"));
    }

    #[test]
    fn test_armor_cap_per_location() {
        let mut design = hunchback();
        design.locations[4].armor = 17;
        let (ok, report) = check(&design, &ValidationOptions::default());
        assert!(!ok);
        assert!(report.mentions("Left Arm armor 17 exceeds the maximum of 16"));
    }

    #[test]
    fn test_slot_overflow() {
        let mut design = hunchback();
        design.mounts.push(EquipmentMount::new("ISLRM20", RightTorso));
        let (ok, report) = check(&design, &ValidationOptions::default());
        assert!(!ok);
        assert!(report.mentions("Right Torso has 15 critical slots used, 12 available"));
    }

    #[test]
    fn test_heat_sink_mount_count() {
        let mut design = hunchback();
        design.mounts.pop();
        let (ok, report) = check(&design, &ValidationOptions::default());
        assert!(!ok);
        assert!(report.mentions("4 mounted, 5 required"));
    }

    #[test]
    fn test_hatchet_needs_hand() {
        let mut design = hunchback();
        design.rules_level = RulesLevel::Standard;
        design.year = 3067;
        // Drop the small laser and the ammo to keep the weight in range
        design.mounts.retain(|m| m.equipment != "ISSmallLaser");
        design.mounts.push(EquipmentMount::new("Hatchet", LeftArm).with_slots(4));
        if let UnitDetails::Mek(mek) = &mut design.details {
            mek.actuators.left_hand = false;
        }
        let (ok, report) = check(&design, &ValidationOptions::default());
        assert!(!ok);
        assert!(report.mentions("Hatchet requires a hand actuator in the Left Arm"));
    }

    #[test]
    fn test_jump_may_not_exceed_walk() {
        let mut design = hunchback();
        design.jump_mp = 5;
        for _ in 0..5 {
            design.mounts.push(EquipmentMount::new("JumpJet", CenterTorso));
        }
        let (ok, report) = check(&design, &ValidationOptions::default());
        assert!(!ok);
        assert!(report.mentions("exceeds walking MP 4"));
    }

    #[test]
    fn test_structure_table() {
        assert_eq!(internal_structure(50.0, CenterTorso), 16);
        assert_eq!(internal_structure(100.0, LeftLeg), 21);
        assert_eq!(internal_structure(200.0, LeftArm), 33);
        assert_eq!(internal_structure(150.0, Head), 4);
        assert_eq!(internal_structure(52.0, CenterTorso), 0);
    }
}
