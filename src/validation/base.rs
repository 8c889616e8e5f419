//! Shared validation machinery
//!
//! `BaseValidator` is embedded by value in every category validator. It
//! owns no state beyond borrowed inputs, so every helper is a pure function
//! of the design, the options and the catalog.

use super::report::Report;
use crate::catalog::{
    EquipmentCatalog, EquipmentFlag, EquipmentType, SizingContext, TechAdvancement, UnitClass,
};
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use crate::core::types::{RulesLevel, TechFaction};
use crate::design::{EquipmentMount, LocationId, UnitDesign};
use ahash::AHashSet;

/// A mount paired with its catalog entry
pub type Resolved<'a> = (usize, &'a EquipmentMount, &'a EquipmentType);

#[derive(Debug, Clone, Copy)]
pub struct BaseValidator<'a> {
    pub design: &'a UnitDesign,
    pub options: &'a ValidationOptions,
    pub catalog: &'a EquipmentCatalog,
    pub class: UnitClass,
    engine_weight: f64,
}

impl<'a> BaseValidator<'a> {
    pub fn new(
        design: &'a UnitDesign,
        options: &'a ValidationOptions,
        catalog: &'a EquipmentCatalog,
        class: UnitClass,
    ) -> Self {
        Self {
            design,
            options,
            catalog,
            class,
            engine_weight: 0.0,
        }
    }

    /// Record the engine weight items such as superchargers scale with
    pub fn with_engine_weight(mut self, engine_weight: f64) -> Self {
        self.engine_weight = engine_weight;
        self
    }

    // === LOOKUP ===

    pub fn equipment(&self, mount: &EquipmentMount) -> Option<&'a EquipmentType> {
        self.catalog.get(&mount.equipment)
    }

    /// Every mount whose equipment resolves, in mount order
    pub fn resolved(&self) -> impl Iterator<Item = Resolved<'a>> + '_ {
        let catalog = self.catalog;
        self.design
            .mounts
            .iter()
            .enumerate()
            .filter_map(move |(idx, mount)| catalog.get(&mount.equipment).map(|eq| (idx, mount, eq)))
    }

    pub fn resolved_at(&self, location: LocationId) -> impl Iterator<Item = Resolved<'a>> + '_ {
        self.resolved()
            .filter(move |(_, mount, _)| mount.occupies(location))
    }

    pub fn with_flag(&self, flag: EquipmentFlag) -> impl Iterator<Item = Resolved<'a>> + '_ {
        self.resolved().filter(move |(_, _, eq)| eq.has_flag(flag))
    }

    pub fn count_flag(&self, flag: EquipmentFlag) -> usize {
        self.with_flag(flag).count()
    }

    pub fn has_flag(&self, flag: EquipmentFlag) -> bool {
        self.with_flag(flag).next().is_some()
    }

    pub fn weapons(&self) -> impl Iterator<Item = Resolved<'a>> + '_ {
        self.resolved().filter(|(_, _, eq)| eq.is_weapon())
    }

    /// Whether an item counts as clan-built for its sizing rules
    fn builds_as_clan(&self, eq: &EquipmentType) -> bool {
        match eq.tech.faction {
            TechFaction::Clan => true,
            TechFaction::InnerSphere => false,
            TechFaction::Both => self.design.is_clan(),
        }
    }

    pub fn sizing(&self, mount: &EquipmentMount, eq: &EquipmentType) -> SizingContext {
        SizingContext {
            unit_tonnage: self.design.tonnage,
            engine_rating: self.design.engine.rating,
            engine_weight: self.engine_weight,
            direct_fire_tonnage: self.direct_fire_tonnage(),
            clan: self.builds_as_clan(eq),
            mount_size: mount.size,
        }
    }

    /// Unrounded weight of one mount
    pub fn mount_tonnage(&self, mount: &EquipmentMount, eq: &EquipmentType) -> f64 {
        eq.tonnage_for(&self.sizing(mount, eq))
    }

    /// Critical slots one mount needs on a walking chassis
    pub fn mount_slots(&self, mount: &EquipmentMount, eq: &EquipmentType) -> u32 {
        eq.slots_for(&self.sizing(mount, eq))
    }

    /// Raw tonnage of direct-fire weapons, the targeting computer basis
    pub fn direct_fire_tonnage(&self) -> f64 {
        self.resolved()
            .filter(|(_, _, eq)| eq.is_weapon() && eq.has_flag(EquipmentFlag::DirectFire))
            .map(|(_, mount, eq)| {
                eq.tonnage_for(&SizingContext {
                    unit_tonnage: self.design.tonnage,
                    clan: self.builds_as_clan(eq),
                    mount_size: mount.size,
                    ..Default::default()
                })
            })
            .sum()
    }

    /// Total heat of energy weapons (vehicle heat sink requirement)
    pub fn energy_weapon_heat(&self) -> u32 {
        self.weapons()
            .filter(|(_, _, eq)| eq.has_flag(EquipmentFlag::Energy))
            .filter_map(|(_, _, eq)| eq.weapon_stats().map(|stats| stats.heat))
            .sum()
    }

    /// Additional crew required by installed equipment
    pub fn equipment_crew(&self) -> u32 {
        self.resolved()
            .map(|(_, mount, eq)| {
                if eq.has_flag(EquipmentFlag::Communications) {
                    eq.crew * mount.size.ceil().max(1.0) as u32
                } else {
                    eq.crew
                }
            })
            .sum()
    }

    // === WEIGHTS ===

    pub fn weight_weapons(&self) -> f64 {
        let tons: f64 = self
            .weapons()
            .map(|(_, mount, eq)| self.mount_tonnage(mount, eq))
            .sum();
        self.options.rounding.weapons.ceil(tons)
    }

    /// Miscellaneous equipment; heat sinks are weighed with the heat sink category
    pub fn weight_misc(&self) -> f64 {
        let mut general = 0.0;
        let mut targeting = 0.0;
        for (_, mount, eq) in self.resolved() {
            if !eq.is_misc() || eq.has_flag(EquipmentFlag::HeatSink) {
                continue;
            }
            if eq.has_flag(EquipmentFlag::TargetingComputer) {
                targeting += self.mount_tonnage(mount, eq);
            } else {
                general += self.mount_tonnage(mount, eq);
            }
        }
        self.options.rounding.weapons.ceil(general)
            + self.options.rounding.targeting_computer.ceil(targeting)
    }

    pub fn weight_ammo(&self) -> f64 {
        let tons: f64 = self
            .resolved()
            .filter(|(_, _, eq)| eq.is_ammo())
            .map(|(_, mount, eq)| self.mount_tonnage(mount, eq))
            .sum();
        self.options.rounding.weapons.ceil(tons)
    }

    /// Transport bays and quarters
    pub fn weight_carrying_capacity(&self) -> f64 {
        let bays: f64 = self.design.bays.iter().map(|bay| bay.tons()).sum();
        let quarters: f64 = self
            .design
            .crew
            .quarters
            .iter()
            .map(|q| q.kind.tons_per_person() * f64::from(q.capacity))
            .sum();
        Granularity::HalfTon.ceil(bays + quarters)
    }

    /// Half a ton per critical slot of armored components
    pub fn weight_armored_components(&self) -> f64 {
        let slots: u32 = self
            .resolved()
            .filter(|(_, mount, _)| mount.armored)
            .map(|(_, mount, eq)| self.mount_slots(mount, eq))
            .sum();
        Granularity::HalfTon.ceil(f64::from(slots) * 0.5)
    }

    /// Armor weight from points per ton; patchwork locations round separately
    pub fn weight_standard_armor(&self) -> f64 {
        let design = self.design;
        let grid = self.options.rounding.armor;
        let clan = design.is_clan();
        if design.is_patchwork() {
            design
                .locations
                .iter()
                .map(|loc| {
                    let kind = loc.armor_kind.unwrap_or(design.armor);
                    grid.ceil(f64::from(loc.total_armor()) / kind.points_per_ton(clan))
                })
                .sum()
        } else {
            grid.ceil(f64::from(design.total_armor_points()) / design.armor.points_per_ton(clan))
        }
    }

    // === GENERIC CHECKS ===

    /// Report equipment the loader or catalog could not resolve
    pub fn correct_failed_equipment(&self, report: &mut Report) -> bool {
        if !self.options.show_failed_equipment {
            return true;
        }
        let unresolved = self
            .design
            .mounts
            .iter()
            .filter(|mount| !self.catalog.contains(&mount.equipment))
            .map(|mount| mount.equipment.as_str());
        let failed = self.design.failed_equipment.iter().map(String::as_str);

        let mut ok = true;
        let mut seen = AHashSet::new();
        for name in unresolved.chain(failed) {
            if self.options.ignores_failed(name) || !seen.insert(name) {
                continue;
            }
            ok = report.fail(format!("Failed to load equipment: {}", name));
        }
        ok
    }

    /// Every mount must sit in a location the category has and the item must suit the category
    pub fn correct_locations(&self, valid: &[LocationId], report: &mut Report) -> bool {
        let mut ok = true;
        for loc in &self.design.locations {
            if !valid.contains(&loc.id) {
                ok = report.fail(format!("Unit has no {} location", loc.id));
            }
        }
        for (_, mount, eq) in self.resolved() {
            let locations = std::iter::once(mount.location).chain(mount.secondary_location);
            for location in locations {
                if !valid.contains(&location) {
                    ok = report.fail(format!(
                        "{} is mounted in {}, which this unit does not have",
                        eq.name, location
                    ));
                }
            }
            if !eq.usable_by.contains(self.class) {
                ok = report.fail(format!("{} cannot be mounted on this unit type", eq.name));
            }
        }
        ok
    }

    /// Rules level, faction and introduction year of every mount and component
    pub fn correct_tech(
        &self,
        components: &[(&'static str, TechAdvancement)],
        report: &mut Report,
    ) -> bool {
        let design = self.design;
        let mut ok = true;

        if design.mixed_tech && design.rules_level < RulesLevel::Advanced {
            ok = report.fail(format!(
                "Mixed tech designs require Advanced rules ({} declared)",
                design.rules_level
            ));
        }

        for (name, tech) in components {
            ok &= self.check_tech_record(name, tech, design.rules_level, report);
        }

        let ammo_level = self.options.ammo_rules_level.unwrap_or(design.rules_level);
        let mut seen = AHashSet::new();
        for (_, _, eq) in self.resolved() {
            if !seen.insert(eq.internal_name) {
                continue;
            }
            let level = if eq.is_ammo() {
                ammo_level
            } else {
                design.rules_level
            };
            ok &= self.check_tech_record(eq.name, &eq.tech, level, report);
        }
        ok
    }

    fn check_tech_record(
        &self,
        name: &str,
        tech: &TechAdvancement,
        level: RulesLevel,
        report: &mut Report,
    ) -> bool {
        let design = self.design;
        let mut ok = true;
        if level < tech.rules_level {
            ok = report.fail(format!(
                "{} requires {} rules ({} declared)",
                name, tech.rules_level, level
            ));
        }
        if !design.mixed_tech && !tech.faction.admits(design.tech_base) {
            ok = report.fail(format!(
                "{} is not available to {} designs",
                name, design.tech_base
            ));
        }
        if self.options.show_incorrect_intro_year {
            if let Some(intro) = tech.intro_year(design.tech_base, design.mixed_tech) {
                if u32::from(intro) > u32::from(design.year) + u32::from(self.options.intro_year_margin) {
                    ok = report.fail(format!(
                        "{} was introduced in {}, after the design year {}",
                        name, intro, design.year
                    ));
                }
            }
        }
        ok
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Small design builders shared by the validator unit tests

    use crate::core::types::{MovementMode, RulesLevel, TechBase};
    use crate::design::*;

    pub fn bare_design(tonnage: f64, movement_mode: MovementMode, details: UnitDetails) -> UnitDesign {
        UnitDesign {
            chassis: "Test".into(),
            model: "T-1".into(),
            tonnage,
            year: 3067,
            tech_base: TechBase::InnerSphere,
            mixed_tech: false,
            rules_level: RulesLevel::Standard,
            movement_mode,
            omni: false,
            walk_mp: 0,
            jump_mp: 0,
            engine: Engine::none(),
            armor: ArmorKind::Standard,
            structure: StructureKind::Standard,
            heat_sinks: HeatSinks::default(),
            locations: Vec::new(),
            mounts: Vec::new(),
            crew: CrewData::default(),
            bays: Vec::new(),
            failed_equipment: Vec::new(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::bare_design;
    use super::*;
    use crate::catalog::catalog;
    use crate::core::types::MovementMode;
    use crate::design::{HandheldDetails, UnitDetails};

    fn handheld() -> UnitDesign {
        bare_design(
            2.0,
            MovementMode::None,
            UnitDetails::Handheld(HandheldDetails::default()),
        )
    }

    #[test]
    fn test_failed_equipment_honours_ignore_list() {
        let mut design = handheld();
        design.failed_equipment = vec!["Mystery Box".into(), "Prototype Gizmo".into()];
        design.mounts.push(EquipmentMount::new("NotInCatalog", LocationId::Gun));
        let mut options = ValidationOptions::default();
        options.ignore_failed_equipment = vec!["prototype gizmo".into()];

        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Handheld);
        let mut report = Report::new();
        assert!(!base.correct_failed_equipment(&mut report));
        assert_eq!(
            report.lines(),
            [
                "Failed to load equipment: NotInCatalog",
                "Failed to load equipment: Mystery Box"
            ]
        );
    }

    #[test]
    fn test_rules_level_and_intro_year() {
        let mut design = handheld();
        design.rules_level = crate::core::types::RulesLevel::Introductory;
        design.year = 3000;
        design.mounts.push(EquipmentMount::new("ISERLargeLaser", LocationId::Gun));
        let options = ValidationOptions::default();
        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Handheld);

        let mut report = Report::new();
        assert!(!base.correct_tech(&[], &mut report));
        assert!(report.mentions("requires Standard rules"));
        assert!(report.mentions("introduced in 3037"));
    }

    #[test]
    fn test_faction_mismatch_unless_mixed() {
        let mut design = handheld();
        design.mounts.push(EquipmentMount::new("CLERMediumLaser", LocationId::Gun));
        let options = ValidationOptions::default();

        let mut report = Report::new();
        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Handheld);
        assert!(!base.correct_tech(&[], &mut report));
        assert!(report.mentions("not available to Inner Sphere"));

        design.mixed_tech = true;
        design.rules_level = crate::core::types::RulesLevel::Advanced;
        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Handheld);
        let mut report = Report::new();
        assert!(base.correct_tech(&[], &mut report), "{}", report);
    }

    #[test]
    fn test_mount_location_must_exist() {
        let mut design = handheld();
        design.mounts.push(EquipmentMount::new("ISMediumLaser", LocationId::Nose));
        let options = ValidationOptions::default();
        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Handheld);
        let mut report = Report::new();
        assert!(!base.correct_locations(&[LocationId::Gun], &mut report));
        assert!(report.mentions("Nose"));
    }

    #[test]
    fn test_targeting_computer_rounds_to_its_own_grid() {
        let mut design = bare_design(
            65.0,
            MovementMode::Tracked,
            UnitDetails::Vehicle(Default::default()),
        );
        design.mounts.push(EquipmentMount::new("ISERLargeLaser", LocationId::Front));
        design.mounts.push(EquipmentMount::new("ISERLargeLaser", LocationId::Front));
        design.mounts.push(EquipmentMount::new("ISTargeting Computer", LocationId::Body));
        let options = ValidationOptions::default();
        let base = BaseValidator::new(&design, &options, catalog(), UnitClass::Vehicle);
        // 10 t of direct fire weapons: 2.5 t rounds up to 3 t
        assert_eq!(base.direct_fire_tonnage(), 10.0);
        assert_eq!(base.weight_misc(), 3.0);
        assert_eq!(base.weight_weapons(), 10.0);
    }
}
