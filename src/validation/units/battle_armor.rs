//! Powered-armor squads
//!
//! Every trooper is weighed and slotted on its own. Mounts without a trooper
//! number belong to the whole squad and count against every suit. The
//! squad's calculated weight is that of its heaviest trooper.

use crate::catalog::{EquipmentCatalog, EquipmentFlag as F, TechAdvancement, UnitClass};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::MovementMode;
use crate::design::{BaChassis, BaWeightClass, BattleArmorDetails, LocationId, UnitDesign};
use crate::validation::base::{BaseValidator, Resolved};
use crate::validation::combinations;
use crate::validation::report::Report;
use crate::validation::validator::UnitValidator;
use crate::validation::weight::{check_weight, WeightBreakdown, WeightCategory};

use LocationId::{Body, LeftArm, RightArm};

pub const MAX_TROOPERS: u8 = 6;

// Per weight class tables, PA(L) through Assault
const CHASSIS_KG_IS: [f64; 5] = [80.0, 100.0, 175.0, 300.0, 550.0];
const CHASSIS_KG_CLAN: [f64; 5] = [130.0, 150.0, 250.0, 400.0, 700.0];
const MAX_TROOPER_TONS: [f64; 5] = [0.4, 0.75, 1.0, 1.5, 2.0];
const MAX_ARMOR: [u32; 5] = [2, 6, 10, 14, 18];
const BODY_SLOTS: [u32; 5] = [2, 4, 4, 6, 6];
const ARM_SLOTS: [u32; 5] = [2, 2, 3, 3, 4];
const GROUND_MP_KG: [f64; 5] = [25.0, 30.0, 40.0, 80.0, 160.0];
const JUMP_MP_KG: [f64; 5] = [25.0, 25.0, 50.0, 125.0, 250.0];
const MAX_WALK_MP: [u32; 5] = [3, 3, 3, 2, 2];
const MAX_JUMP_MP: [u32; 5] = [3, 3, 3, 2, 0];

/// Lightest legal trooper of a weight class, exclusive
pub fn min_trooper_tons(class: BaWeightClass) -> f64 {
    match class.index() {
        0 => 0.0,
        i => MAX_TROOPER_TONS[i - 1],
    }
}

pub fn max_trooper_tons(class: BaWeightClass) -> f64 {
    MAX_TROOPER_TONS[class.index()]
}

pub struct BattleArmorValidator<'a> {
    base: BaseValidator<'a>,
    squad: &'a BattleArmorDetails,
}

impl<'a> BattleArmorValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        squad: &'a BattleArmorDetails,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
    ) -> Self {
        let base = BaseValidator::new(design, options, catalog, UnitClass::BattleArmor);
        Self { base, squad }
    }

    fn design(&self) -> &'a UnitDesign {
        self.base.design
    }

    fn class_index(&self) -> usize {
        self.squad.weight_class.index()
    }

    fn is_quad(&self) -> bool {
        self.squad.chassis == BaChassis::Quad
    }

    pub fn locations(&self) -> Vec<LocationId> {
        if self.is_quad() {
            vec![Body]
        } else {
            vec![Body, LeftArm, RightArm]
        }
    }

    /// Trooper numbers, starting at 1
    pub fn troopers(&self) -> impl Iterator<Item = u8> {
        1..=self.squad.troopers.max(1)
    }

    /// Mounts carried by one trooper, squad-wide mounts included
    pub fn trooper_mounts(&self, trooper: u8) -> impl Iterator<Item = Resolved<'a>> + '_ {
        self.base
            .resolved()
            .filter(move |(_, mount, _)| mount.trooper.map_or(true, |t| t == trooper))
    }

    /// Slot capacity of a location on one suit; quads fold their arm space into the body
    pub fn slot_capacity(&self, location: LocationId) -> u32 {
        let i = self.class_index();
        match location {
            Body if self.is_quad() => BODY_SLOTS[i] + 2,
            Body => BODY_SLOTS[i],
            LeftArm | RightArm if !self.is_quad() => ARM_SLOTS[i],
            _ => 0,
        }
    }

    pub fn max_armor(&self) -> u32 {
        MAX_ARMOR[self.class_index()]
    }

    /// Weight of one trooper by category, in tons
    pub fn trooper_breakdown(&self, trooper: u8) -> WeightBreakdown {
        let design = self.design();
        let i = self.class_index();
        let chassis = if design.is_clan() {
            CHASSIS_KG_CLAN[i]
        } else {
            CHASSIS_KG_IS[i]
        };
        let ground = f64::from(design.walk_mp.saturating_sub(1)) * GROUND_MP_KG[i];
        let jump = f64::from(design.jump_mp) * JUMP_MP_KG[i];
        let armor_kg = design
            .armor
            .ba_kg_per_point()
            .map(|kg| kg * f64::from(design.total_armor_points()))
            .unwrap_or(0.0);

        let mut weapons = 0.0;
        let mut manipulators = 0.0;
        let mut ammo = 0.0;
        let mut misc = 0.0;
        for (_, mount, eq) in self.trooper_mounts(trooper) {
            let tons = self.base.mount_tonnage(mount, eq);
            if eq.is_weapon() {
                weapons += tons;
            } else if eq.is_ammo() {
                ammo += tons;
            } else if eq.has_flag(F::Manipulator) {
                manipulators += tons;
            } else {
                misc += tons;
            }
        }

        let kg = |tons: f64| Granularity::Kilogram.round(tons);
        let mut breakdown = WeightBreakdown::new(true);
        breakdown.add(WeightCategory::Structure, kg(chassis / 1000.0));
        breakdown.add(WeightCategory::Engine, kg((ground + jump) / 1000.0));
        breakdown.add(WeightCategory::Armor, kg(armor_kg / 1000.0));
        breakdown.add(WeightCategory::Manipulators, kg(manipulators));
        breakdown.add(WeightCategory::Weapons, kg(weapons));
        breakdown.add(WeightCategory::Ammo, kg(ammo));
        breakdown.add(WeightCategory::Misc, kg(misc));
        breakdown
    }

    /// The trooper whose suit weighs the most; ties go to the lowest number
    pub fn heaviest_trooper(&self) -> u8 {
        let mut heaviest = (1, f64::MIN);
        for trooper in self.troopers() {
            let tons = self.trooper_breakdown(trooper).total();
            if tons > heaviest.1 {
                heaviest = (trooper, tons);
            }
        }
        heaviest.0
    }

    fn heaviest_category(&self, category: WeightCategory) -> f64 {
        self.trooper_breakdown(self.heaviest_trooper()).get(category)
    }

    /// Every suit must fall inside its weight class
    fn correct_weight_class(&self, report: &mut Report) -> bool {
        let class = self.squad.weight_class;
        let (min, max) = (min_trooper_tons(class), max_trooper_tons(class));
        let mut ok = true;
        for trooper in self.troopers() {
            let tons = self.trooper_breakdown(trooper).total();
            if tons > max + 1e-9 {
                ok = report.fail(format!(
                    "Trooper {} weighs {:.0} kg, more than the {:.0} kg a {} suit allows",
                    trooper,
                    tons * 1000.0,
                    max * 1000.0,
                    class.name()
                ));
            } else if tons <= min + 1e-9 {
                ok = report.fail(format!(
                    "Trooper {} weighs {:.0} kg, too light for a {} suit",
                    trooper,
                    tons * 1000.0,
                    class.name()
                ));
            }
        }
        ok
    }

    /// At most one manipulator per arm; pair-mounted types need their twin on the other arm
    fn correct_manipulators(&self, report: &mut Report) -> bool {
        let mut ok = true;
        let manipulators: Vec<_> = self.base.with_flag(F::Manipulator).collect();
        if self.is_quad() {
            if let Some((_, _, eq)) = manipulators.first() {
                return report.fail(format!("Quad suits cannot mount manipulators ({})", eq.name));
            }
            return true;
        }

        for (_, mount, eq) in &manipulators {
            if !mount.location.is_arm() {
                ok = report.fail(format!("{} must be mounted in an arm", eq.name));
            }
        }
        for trooper in self.troopers() {
            let on_arm = |arm: LocationId| -> Vec<_> {
                manipulators
                    .iter()
                    .filter(|(_, mount, _)| {
                        mount.location == arm && mount.trooper.map_or(true, |t| t == trooper)
                    })
                    .map(|(_, _, eq)| *eq)
                    .collect()
            };
            let left = on_arm(LeftArm);
            let right = on_arm(RightArm);
            for (arm, fitted) in [(LeftArm, &left), (RightArm, &right)] {
                if fitted.len() > 1 {
                    ok = report.fail(format!(
                        "Trooper {}: {} carries {} manipulators, only one is allowed",
                        trooper,
                        arm,
                        fitted.len()
                    ));
                }
            }
            if let (Some(l), Some(r)) = (left.first(), right.first()) {
                let paired = l.has_flag(F::PairMounted) || r.has_flag(F::PairMounted);
                if paired && l.internal_name != r.internal_name {
                    ok = report.fail(format!(
                        "Trooper {}: {} and {} must match when pair-mounted",
                        trooper, l.name, r.name
                    ));
                }
            } else if let Some(single) = left.first().or(right.first()) {
                if single.has_flag(F::PairMounted) {
                    ok = report.fail(format!(
                        "Trooper {}: {} must be mounted on both arms",
                        trooper, single.name
                    ));
                }
            }
        }
        ok
    }

    fn correct_trooper_numbers(&self, report: &mut Report) -> bool {
        let mut ok = true;
        for (_, mount, eq) in self.base.resolved() {
            if let Some(trooper) = mount.trooper {
                if trooper == 0 || trooper > self.squad.troopers {
                    ok = report.fail(format!(
                        "{} is assigned to trooper {}, but the squad has {}",
                        eq.name, trooper, self.squad.troopers
                    ));
                }
            }
        }
        ok
    }
}

impl UnitValidator for BattleArmorValidator<'_> {
    fn base(&self) -> &BaseValidator<'_> {
        &self.base
    }

    fn weight_engine(&self) -> f64 {
        self.heaviest_category(WeightCategory::Engine)
    }

    fn weight_structure(&self) -> f64 {
        self.heaviest_category(WeightCategory::Structure)
    }

    fn weight_controls(&self) -> f64 {
        0.0
    }

    fn weight_heat_sinks(&self) -> f64 {
        0.0
    }

    fn weight_armor(&self) -> f64 {
        self.heaviest_category(WeightCategory::Armor)
    }

    fn weight_misc(&self) -> f64 {
        self.heaviest_category(WeightCategory::Misc)
    }

    fn weight_weapons(&self) -> f64 {
        self.heaviest_category(WeightCategory::Weapons)
    }

    fn weight_ammo(&self) -> f64 {
        self.heaviest_category(WeightCategory::Ammo)
    }

    fn weight_carrying_capacity(&self) -> f64 {
        0.0
    }

    fn weight_armored_components(&self) -> f64 {
        0.0
    }

    fn uses_kilogram_standard(&self) -> bool {
        true
    }

    fn weight_breakdown(&self) -> WeightBreakdown {
        self.trooper_breakdown(self.heaviest_trooper())
    }

    fn correct_weight(&self, report: &mut Report) -> bool {
        check_weight(
            self.declared_weight(),
            self.calculate_weight(),
            self.base.options,
            report,
        ) & self.correct_weight_class(report)
    }

    fn correct_slots(&self, report: &mut Report) -> bool {
        let mut ok = self.base.correct_locations(&self.locations(), report);
        for trooper in self.troopers() {
            for location in self.locations() {
                let used: u32 = self
                    .trooper_mounts(trooper)
                    .filter(|(_, mount, _)| mount.location == location)
                    .map(|(_, _, eq)| eq.ba_slots)
                    .sum();
                let capacity = self.slot_capacity(location);
                if used > capacity {
                    ok = report.fail(format!(
                        "Trooper {}: {} uses {} slots, {} available",
                        trooper, location, used, capacity
                    ));
                }
            }
        }
        ok
    }

    fn correct_armor(&self, report: &mut Report) -> bool {
        let design = self.design();
        let mut ok = true;
        if !design.armor.legal_for(UnitClass::BattleArmor) {
            ok = report.fail(format!("{} cannot be used on powered armor", design.armor.name()));
        }
        let points = design.total_armor_points();
        if points > self.max_armor() {
            ok = report.fail(format!(
                "Armor: {} points exceeds the {} maximum of {}",
                points,
                self.squad.weight_class.name(),
                self.max_armor()
            ));
        }
        ok
    }

    fn correct_heat_sinks(&self, report: &mut Report) -> bool {
        if self.design().heat_sinks.count > 0 {
            return report.fail("Powered armor cannot mount heat sinks");
        }
        true
    }

    fn component_tech(&self) -> Vec<(&'static str, TechAdvancement)> {
        let design = self.design();
        vec![(design.armor.name(), design.armor.tech())]
    }

    fn correct_combinations(&self, report: &mut Report) -> bool {
        combinations::correct_generic(&self.base, report)
            & self.correct_manipulators(report)
            & self.correct_trooper_numbers(report)
    }

    fn correct_movement(&self, report: &mut Report) -> bool {
        let design = self.design();
        let i = self.class_index();
        let mut ok = true;

        if !(1..=MAX_TROOPERS).contains(&self.squad.troopers) {
            ok = report.fail(format!(
                "Squads have 1 to {} troopers, not {}",
                MAX_TROOPERS, self.squad.troopers
            ));
        }
        if !matches!(
            design.movement_mode,
            MovementMode::Ground | MovementMode::Jump | MovementMode::Umu
        ) {
            ok = report.fail(format!(
                "{} is not a powered armor movement mode",
                design.movement_mode
            ));
        }
        if design.walk_mp == 0 || design.walk_mp > MAX_WALK_MP[i] {
            ok = report.fail(format!(
                "Ground MP {} is outside 1 to {} for a {} suit",
                design.walk_mp,
                MAX_WALK_MP[i],
                self.squad.weight_class.name()
            ));
        }
        if design.jump_mp > MAX_JUMP_MP[i] {
            ok = report.fail(format!(
                "Jump MP {} exceeds the {} maximum of {}",
                design.jump_mp,
                self.squad.weight_class.name(),
                MAX_JUMP_MP[i]
            ));
        }
        if design.movement_mode == MovementMode::Jump && design.jump_mp == 0 {
            ok = report.fail("Jump-capable suits need at least 1 jump MP");
        }
        if design.engine.kind.table_multiplier().is_some() {
            ok = report.fail("Powered armor does not mount an engine");
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

    /// A four-trooper medium squad whose suits weigh exactly 940 kg
    pub fn squad() -> UnitDesign {
        UnitDesign {
            chassis: "Test Suit".into(),
            model: "TS-BA".into(),
            tonnage: 0.94,
            year: 3067,
            tech_base: TechBase::InnerSphere,
            mixed_tech: false,
            rules_level: RulesLevel::Standard,
            movement_mode: MovementMode::Jump,
            omni: false,
            walk_mp: 1,
            jump_mp: 3,
            engine: Engine::none(),
            armor: ArmorKind::BaStandard,
            structure: StructureKind::Standard,
            heat_sinks: HeatSinks::default(),
            locations: vec![Location::new(Body, 8)],
            mounts: vec![
                EquipmentMount::new("BABattleClaw", LeftArm),
                EquipmentMount::new("BABasicManipulator", RightArm),
                EquipmentMount::new("BASmallLaser", Body),
            ],
            crew: CrewData::default(),
            bays: Vec::new(),
            failed_equipment: Vec::new(),
            details: UnitDetails::BattleArmor(BattleArmorDetails {
                weight_class: BaWeightClass::Medium,
                chassis: BaChassis::Humanoid,
                troopers: 4,
            }),
        }
    }

    fn validator<'a>(design: &'a UnitDesign, options: &'a ValidationOptions) -> BattleArmorValidator<'a> {
        let UnitDetails::BattleArmor(squad) = &design.details else {
            panic!("not powered armor");
        };
        BattleArmorValidator::new(design, squad, options, catalog())
    }

    #[test]
    fn test_reference_squad_is_legal() {
        let design = squad();
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        let breakdown = validator.weight_breakdown();
        assert_eq!(breakdown.get(WeightCategory::Structure), 0.175);
        assert_eq!(breakdown.get(WeightCategory::Engine), 0.15);
        assert_eq!(breakdown.get(WeightCategory::Armor), 0.4);
        assert_eq!(breakdown.get(WeightCategory::Manipulators), 0.015);
        assert!(breakdown.is_kilogram_standard());
        assert_eq!(validator.calculate_weight(), 0.94);

        let mut report = Report::new();
        assert!(validator.correct_entity(&mut report), "{}", report);
    }

    #[test]
    fn test_heaviest_trooper_sets_squad_weight() {
        let mut design = squad();
        design.mounts.push(EquipmentMount::new("BAMachineGun", Body).for_trooper(2));
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        assert_eq!(validator.heaviest_trooper(), 2);
        assert_eq!(validator.calculate_weight(), 1.04);

        let mut report = Report::new();
        assert!(!validator.correct_weight(&mut report));
        assert!(report.mentions("Trooper 2 weighs 1040 kg, more than the 1000 kg"));
        assert!(!report.mentions("Trooper 1 weighs"));
    }

    #[test]
    fn test_pair_mounted_manipulators_must_match() {
        let mut design = squad();
        design.mounts[0] = EquipmentMount::new("BACargoLifter", LeftArm);
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("Cargo Lifter and Basic Manipulator must match when pair-mounted"));

        design.mounts[1] = EquipmentMount::new("BACargoLifter", RightArm);
        let mut report = Report::new();
        assert!(validator(&design, &options).correct_combinations(&mut report), "{}", report);
    }

    #[test]
    fn test_one_manipulator_per_arm() {
        let mut design = squad();
        design.mounts.push(EquipmentMount::new("BAVibroClaw", LeftArm));
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_combinations(&mut report));
        assert!(report.mentions("Left Arm carries 2 manipulators"));
    }

    #[test]
    fn test_squad_mounts_count_for_every_trooper() {
        let mut design = squad();
        for _ in 0..4 {
            design.mounts.push(EquipmentMount::new("BAMachineGun", Body));
        }
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!validator(&design, &options).correct_slots(&mut report));
        for trooper in 1..=4 {
            assert!(report.mentions(&format!("Trooper {}: Body uses 5 slots, 4 available", trooper)));
        }
    }

    #[test]
    fn test_trooper_count_and_armor_limits() {
        let mut design = squad();
        design.locations[0].armor = 11;
        if let UnitDetails::BattleArmor(squad) = &mut design.details {
            squad.troopers = 7;
        }
        let options = ValidationOptions::default();
        let validator = validator(&design, &options);
        let mut report = Report::new();
        assert!(!validator.correct_armor(&mut report));
        assert!(report.mentions("11 points exceeds the Medium maximum of 10"));
        assert!(!validator.correct_movement(&mut report));
        assert!(report.mentions("not 7"));
    }
}
