//! Equipment catalog entries
//!
//! An entry is immutable once built. Weight and slot requirements that depend
//! on the unit carrying the item are expressed as sizing rules evaluated
//! against a [`SizingContext`].

use super::flags::{EquipmentFlag, EquipmentFlags, UnitClasses};
use super::tech::TechAdvancement;
use crate::core::rounding::Granularity;
use crate::core::types::RulesLevel;
use serde::{Deserialize, Serialize};

/// Ammunition lineage; ammo feeds any weapon of the same family and rack size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AmmoFamily {
    Autocannon,
    UltraAutocannon,
    RotaryAutocannon,
    LbxAutocannon,
    Gauss,
    MachineGun,
    Lrm,
    Srm,
    StreakSrm,
    Mrm,
    Atm,
    AntiMissile,
    Narc,
    CapitalMissile,
    NavalAutocannon,
}

impl AmmoFamily {
    /// Shots a bay must carry per weapon for one engagement
    ///
    /// Rapid-fire families fire several rounds per turn.
    pub fn engagement_multiplier(self) -> u32 {
        match self {
            AmmoFamily::UltraAutocannon => 2,
            AmmoFamily::RotaryAutocannon => 6,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AmmoFamily::Autocannon => "Autocannon",
            AmmoFamily::UltraAutocannon => "Ultra Autocannon",
            AmmoFamily::RotaryAutocannon => "Rotary Autocannon",
            AmmoFamily::LbxAutocannon => "LB-X Autocannon",
            AmmoFamily::Gauss => "Gauss",
            AmmoFamily::MachineGun => "Machine Gun",
            AmmoFamily::Lrm => "LRM",
            AmmoFamily::Srm => "SRM",
            AmmoFamily::StreakSrm => "Streak SRM",
            AmmoFamily::Mrm => "MRM",
            AmmoFamily::Atm => "ATM",
            AmmoFamily::AntiMissile => "Anti-Missile",
            AmmoFamily::Narc => "Narc",
            AmmoFamily::CapitalMissile => "Capital Missile",
            AmmoFamily::NavalAutocannon => "Naval Autocannon",
        }
    }
}

/// Ammunition compatibility key: family plus rack size or caliber
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AmmoType {
    pub family: AmmoFamily,
    pub rack: u16,
}

impl AmmoType {
    pub const fn new(family: AmmoFamily, rack: u16) -> Self {
        Self { family, rack }
    }
}

/// Broad weapon grouping used for bay composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    Laser,
    Ppc,
    Flamer,
    Autocannon,
    Gauss,
    MachineGun,
    Missile,
    PointDefense,
    CapitalMissile,
    NavalAutocannon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub heat: u32,
    pub class: WeaponClass,
    pub ammo: Option<AmmoType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmmoStats {
    pub ammo: AmmoType,
    /// Shots per unit of mount size (one ton for ordinary ammunition)
    pub shots_per_unit: u32,
    /// Sub-munition name ("Standard", "Swarm", ...)
    pub munition: &'static str,
}

/// The closed three-way equipment variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquipmentKind {
    Weapon(WeaponStats),
    Ammo(AmmoStats),
    Misc,
}

/// Unit properties sizing rules depend on
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizingContext {
    pub unit_tonnage: f64,
    pub engine_rating: u32,
    pub engine_weight: f64,
    /// Total tonnage of direct-fire weapons (targeting computer basis)
    pub direct_fire_tonnage: f64,
    pub clan: bool,
    /// Variable size of the mount (ammo tons, cargo capacity)
    pub mount_size: f64,
}

/// Weight rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tonnage {
    Fixed(f64),
    /// Tons per unit of mount size
    PerSize(f64),
    /// Fraction of the unit's tonnage, rounded up to half a ton
    UnitFraction(f64),
    /// Fraction of the unit's tonnage, rounded up to a whole ton
    UnitFractionWhole(f64),
    /// Direct-fire weapon tonnage / 4 (Inner Sphere) or / 5 (Clan), unrounded
    TargetingComputer,
    /// Unit tonnage / 20 (Inner Sphere) or / 25 (Clan), rounded to whole tons
    Masc,
    /// Per-jet weight by unit weight class
    JumpJet { improved: bool },
    /// One tenth of engine weight, rounded up to half a ton
    Supercharger,
}

/// Critical slot rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Slots {
    Fixed(u32),
    /// One slot per ton of the item's own weight
    PerTon,
    /// One slot per unit of mount size
    PerSize,
    /// Fraction of the unit's tonnage, rounded up
    UnitFraction(f64),
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentType {
    pub internal_name: &'static str,
    pub name: &'static str,
    pub kind: EquipmentKind,
    pub flags: EquipmentFlags,
    pub usable_by: UnitClasses,
    pub tonnage: Tonnage,
    pub slots: Slots,
    /// Item slots on combat and support vehicles
    pub vehicle_slots: u32,
    /// Slots per trooper on powered armor
    pub ba_slots: u32,
    /// Additional crew the item requires
    pub crew: u32,
    pub tech: TechAdvancement,
}

impl EquipmentType {
    fn new(internal_name: &'static str, name: &'static str, kind: EquipmentKind) -> Self {
        Self {
            internal_name,
            name,
            kind,
            flags: EquipmentFlags::EMPTY,
            usable_by: UnitClasses::VEHICLES_AND_CRAFT,
            tonnage: Tonnage::Fixed(0.0),
            slots: Slots::Fixed(1),
            vehicle_slots: 1,
            ba_slots: 1,
            crew: 0,
            tech: TechAdvancement::universal(RulesLevel::Introductory, 2300),
        }
    }

    pub fn weapon(internal_name: &'static str, name: &'static str, stats: WeaponStats) -> Self {
        Self::new(internal_name, name, EquipmentKind::Weapon(stats))
    }

    pub fn ammo(internal_name: &'static str, name: &'static str, stats: AmmoStats) -> Self {
        Self::new(internal_name, name, EquipmentKind::Ammo(stats))
            .with_tonnage(Tonnage::PerSize(1.0))
            .with_slots(Slots::PerTon)
    }

    pub fn misc(internal_name: &'static str, name: &'static str) -> Self {
        Self::new(internal_name, name, EquipmentKind::Misc)
    }

    pub fn tons(mut self, tons: f64) -> Self {
        self.tonnage = Tonnage::Fixed(tons);
        self
    }

    pub fn with_tonnage(mut self, tonnage: Tonnage) -> Self {
        self.tonnage = tonnage;
        self
    }

    pub fn slots(mut self, slots: u32) -> Self {
        self.slots = Slots::Fixed(slots);
        self
    }

    pub fn with_slots(mut self, slots: Slots) -> Self {
        self.slots = slots;
        self
    }

    pub fn vehicle_slots(mut self, slots: u32) -> Self {
        self.vehicle_slots = slots;
        self
    }

    pub fn ba_slots(mut self, slots: u32) -> Self {
        self.ba_slots = slots;
        self
    }

    pub fn crew(mut self, crew: u32) -> Self {
        self.crew = crew;
        self
    }

    pub fn flags(mut self, flags: &[EquipmentFlag]) -> Self {
        for flag in flags {
            self.flags.insert(*flag);
        }
        self
    }

    pub fn usable_by(mut self, classes: UnitClasses) -> Self {
        self.usable_by = classes;
        self
    }

    pub fn tech(mut self, tech: TechAdvancement) -> Self {
        self.tech = tech;
        self
    }

    pub fn has_flag(&self, flag: EquipmentFlag) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, EquipmentKind::Weapon(_))
    }

    pub fn is_ammo(&self) -> bool {
        matches!(self.kind, EquipmentKind::Ammo(_))
    }

    pub fn is_misc(&self) -> bool {
        matches!(self.kind, EquipmentKind::Misc)
    }

    pub fn weapon_stats(&self) -> Option<&WeaponStats> {
        match &self.kind {
            EquipmentKind::Weapon(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn ammo_stats(&self) -> Option<&AmmoStats> {
        match &self.kind {
            EquipmentKind::Ammo(stats) => Some(stats),
            _ => None,
        }
    }

    /// Weight of one mount of this item on the given unit
    pub fn tonnage_for(&self, ctx: &SizingContext) -> f64 {
        match self.tonnage {
            Tonnage::Fixed(tons) => tons,
            Tonnage::PerSize(per) => per * ctx.mount_size,
            Tonnage::UnitFraction(fraction) => Granularity::HalfTon.ceil(ctx.unit_tonnage * fraction),
            Tonnage::UnitFractionWhole(fraction) => Granularity::Ton.ceil(ctx.unit_tonnage * fraction),
            Tonnage::TargetingComputer => {
                let divisor = if ctx.clan { 5.0 } else { 4.0 };
                ctx.direct_fire_tonnage / divisor
            }
            Tonnage::Masc => {
                let divisor = if ctx.clan { 25.0 } else { 20.0 };
                (ctx.unit_tonnage / divisor).round().max(1.0)
            }
            Tonnage::JumpJet { improved } => {
                let per_jet = if ctx.unit_tonnage <= 55.0 {
                    0.5
                } else if ctx.unit_tonnage <= 85.0 {
                    1.0
                } else {
                    2.0
                };
                if improved {
                    per_jet * 2.0
                } else {
                    per_jet
                }
            }
            Tonnage::Supercharger => Granularity::HalfTon.ceil(ctx.engine_weight / 10.0),
        }
    }

    /// Critical slots one mount of this item requires
    pub fn slots_for(&self, ctx: &SizingContext) -> u32 {
        match self.slots {
            Slots::Fixed(slots) => slots,
            Slots::PerTon => Granularity::Ton.ceil(self.tonnage_for(ctx)).max(1.0) as u32,
            Slots::PerSize => ctx.mount_size.ceil().max(1.0) as u32,
            Slots::UnitFraction(fraction) => Granularity::Ton.ceil(ctx.unit_tonnage * fraction) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(unit_tonnage: f64) -> SizingContext {
        SizingContext {
            unit_tonnage,
            mount_size: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_jet_weight_by_class() {
        let jet = EquipmentType::misc("JumpJet", "Jump Jet")
            .with_tonnage(Tonnage::JumpJet { improved: false });
        assert_eq!(jet.tonnage_for(&ctx(50.0)), 0.5);
        assert_eq!(jet.tonnage_for(&ctx(55.0)), 0.5);
        assert_eq!(jet.tonnage_for(&ctx(60.0)), 1.0);
        assert_eq!(jet.tonnage_for(&ctx(90.0)), 2.0);

        let improved = EquipmentType::misc("ImprovedJump Jet", "Improved Jump Jet")
            .with_tonnage(Tonnage::JumpJet { improved: true });
        assert_eq!(improved.tonnage_for(&ctx(60.0)), 2.0);
    }

    #[test]
    fn test_masc_weight_and_slots() {
        let masc = EquipmentType::misc("ISMASC", "MASC")
            .with_tonnage(Tonnage::Masc)
            .with_slots(Slots::PerTon);
        assert_eq!(masc.tonnage_for(&ctx(75.0)), 4.0);
        assert_eq!(masc.slots_for(&ctx(75.0)), 4);

        let mut clan = ctx(75.0);
        clan.clan = true;
        assert_eq!(masc.tonnage_for(&clan), 3.0);
    }

    #[test]
    fn test_targeting_computer_basis() {
        let tc = EquipmentType::misc("ISTargeting Computer", "Targeting Computer")
            .with_tonnage(Tonnage::TargetingComputer)
            .with_slots(Slots::PerTon);
        let mut context = ctx(65.0);
        context.direct_fire_tonnage = 13.0;
        assert_eq!(tc.tonnage_for(&context), 3.25);
        assert_eq!(tc.slots_for(&context), 4);
    }

    #[test]
    fn test_hatchet_scales_with_unit() {
        let hatchet = EquipmentType::misc("Hatchet", "Hatchet")
            .with_tonnage(Tonnage::UnitFractionWhole(1.0 / 15.0))
            .with_slots(Slots::UnitFraction(1.0 / 15.0));
        assert_eq!(hatchet.tonnage_for(&ctx(50.0)), 4.0);
        assert_eq!(hatchet.slots_for(&ctx(50.0)), 4);
        assert_eq!(hatchet.tonnage_for(&ctx(30.0)), 2.0);
        assert_eq!(hatchet.slots, Slots::UnitFraction(1.0 / 15.0));
        assert_ne!(hatchet.slots, Slots::UnitFraction(1.0 / 10.0));
    }

    #[test]
    fn test_engagement_multipliers() {
        assert_eq!(AmmoFamily::Autocannon.engagement_multiplier(), 1);
        assert_eq!(AmmoFamily::UltraAutocannon.engagement_multiplier(), 2);
        assert_eq!(AmmoFamily::RotaryAutocannon.engagement_multiplier(), 6);
    }
}
