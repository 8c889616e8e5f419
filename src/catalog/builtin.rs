//! Built-in equipment table
//!
//! Internal names follow the conventional "IS"/"CL" prefixes. The table is
//! read once into the global catalog and never modified afterwards.

use super::equipment::{
    AmmoFamily, AmmoStats, AmmoType, EquipmentType, Slots, Tonnage, WeaponClass, WeaponStats,
};
use super::flags::{EquipmentFlag as F, UnitClass, UnitClasses};
use super::tech::{FactionDates, TechAdvancement};
use crate::core::types::{RulesLevel, TechFaction};

use RulesLevel::{Advanced, Experimental, Introductory, Standard};

/// Standard-scale gear: everything except powered armor, plus handheld weapons
fn standard_scale() -> UnitClasses {
    UnitClasses::VEHICLES_AND_CRAFT.union(UnitClasses::of(&[UnitClass::Handheld]))
}

fn mek_only() -> UnitClasses {
    UnitClasses::of(&[UnitClass::Mek])
}

fn capital_only() -> UnitClasses {
    UnitClasses::of(&[UnitClass::Capital])
}

fn battle_armor_only() -> UnitClasses {
    UnitClasses::of(&[UnitClass::BattleArmor])
}

fn stats(heat: u32, class: WeaponClass, ammo: Option<AmmoType>) -> WeaponStats {
    WeaponStats { heat, class, ammo }
}

fn energy(
    internal: &'static str,
    name: &'static str,
    tons: f64,
    slots: u32,
    heat: u32,
    class: WeaponClass,
    tech: TechAdvancement,
) -> EquipmentType {
    EquipmentType::weapon(internal, name, stats(heat, class, None))
        .tons(tons)
        .slots(slots)
        .flags(&[F::Energy, F::DirectFire])
        .usable_by(standard_scale())
        .tech(tech)
}

fn ballistic(
    internal: &'static str,
    name: &'static str,
    tons: f64,
    slots: u32,
    heat: u32,
    class: WeaponClass,
    ammo: AmmoType,
    tech: TechAdvancement,
) -> EquipmentType {
    EquipmentType::weapon(internal, name, stats(heat, class, Some(ammo)))
        .tons(tons)
        .slots(slots)
        .flags(&[F::Ballistic, F::DirectFire])
        .usable_by(standard_scale())
        .tech(tech)
}

fn missile(
    internal: &'static str,
    name: &'static str,
    tons: f64,
    slots: u32,
    heat: u32,
    ammo: AmmoType,
    tech: TechAdvancement,
) -> EquipmentType {
    EquipmentType::weapon(internal, name, stats(heat, WeaponClass::Missile, Some(ammo)))
        .tons(tons)
        .slots(slots)
        .flags(&[F::Missile, F::OneShotCapable])
        .usable_by(standard_scale())
        .tech(tech)
}

fn ammo(
    internal: &'static str,
    name: &'static str,
    ammo: AmmoType,
    shots_per_unit: u32,
    munition: &'static str,
    tech: TechAdvancement,
) -> EquipmentType {
    EquipmentType::ammo(
        internal,
        name,
        AmmoStats {
            ammo,
            shots_per_unit,
            munition,
        },
    )
    .usable_by(standard_scale())
    .tech(tech)
}

fn filler(internal: &'static str, name: &'static str, flag: F, tech: TechAdvancement) -> EquipmentType {
    EquipmentType::misc(internal, name)
        .slots(1)
        .vehicle_slots(0)
        .flags(&[flag, F::Spreadable, F::OmniFixedOnly])
        .usable_by(mek_only())
        .tech(tech)
}

fn manipulator(internal: &'static str, name: &'static str, tons: f64, pair: bool) -> EquipmentType {
    let item = EquipmentType::misc(internal, name)
        .tons(tons)
        .ba_slots(0)
        .flags(&[F::Manipulator, F::OmniFixedOnly])
        .usable_by(battle_armor_only())
        .tech(TechAdvancement::universal(Standard, 2868));
    if pair {
        item.flags(&[F::PairMounted])
    } else {
        item
    }
}

/// Every entry of the built-in catalog
pub fn builtin_entries() -> Vec<EquipmentType> {
    use AmmoFamily as A;
    use WeaponClass as W;

    let intro = |year| TechAdvancement::universal(Introductory, year);
    let is_std = |year| TechAdvancement::inner_sphere(Standard, year);
    let is_adv = |year| TechAdvancement::inner_sphere(Advanced, year);
    let cl_std = |year| TechAdvancement::clan(Standard, year);
    let cl_adv = |year| TechAdvancement::clan(Advanced, year);

    let ac2 = AmmoType::new(A::Autocannon, 2);
    let ac5 = AmmoType::new(A::Autocannon, 5);
    let ac10 = AmmoType::new(A::Autocannon, 10);
    let ac20 = AmmoType::new(A::Autocannon, 20);
    let lbx10 = AmmoType::new(A::LbxAutocannon, 10);
    let uac5 = AmmoType::new(A::UltraAutocannon, 5);
    let uac10 = AmmoType::new(A::UltraAutocannon, 10);
    let rac5 = AmmoType::new(A::RotaryAutocannon, 5);
    let gauss = AmmoType::new(A::Gauss, 1);
    let mg = AmmoType::new(A::MachineGun, 1);
    let lrm5 = AmmoType::new(A::Lrm, 5);
    let lrm10 = AmmoType::new(A::Lrm, 10);
    let lrm15 = AmmoType::new(A::Lrm, 15);
    let lrm20 = AmmoType::new(A::Lrm, 20);
    let srm2 = AmmoType::new(A::Srm, 2);
    let srm4 = AmmoType::new(A::Srm, 4);
    let srm6 = AmmoType::new(A::Srm, 6);
    let streak6 = AmmoType::new(A::StreakSrm, 6);
    let mrm10 = AmmoType::new(A::Mrm, 10);
    let mrm20 = AmmoType::new(A::Mrm, 20);
    let atm6 = AmmoType::new(A::Atm, 6);
    let ams = AmmoType::new(A::AntiMissile, 1);
    let narc = AmmoType::new(A::Narc, 1);
    let nac10 = AmmoType::new(A::NavalAutocannon, 10);
    let killer_whale = AmmoType::new(A::CapitalMissile, 1);

    vec![
        // === Energy weapons ===
        energy("ISSmallLaser", "Small Laser", 0.5, 1, 1, W::Laser, intro(2400)),
        energy("ISMediumLaser", "Medium Laser", 1.0, 1, 3, W::Laser, intro(2300)),
        energy("ISLargeLaser", "Large Laser", 5.0, 2, 8, W::Laser, intro(2316)),
        energy("ISERLargeLaser", "ER Large Laser", 5.0, 2, 12, W::Laser, is_std(3037)),
        energy("ISPPC", "PPC", 7.0, 3, 10, W::Ppc, intro(2460)),
        energy("ISERPPC", "ER PPC", 7.0, 3, 15, W::Ppc, is_std(3037)),
        energy("ISFlamer", "Flamer", 1.0, 1, 3, W::Flamer, intro(2025)),
        energy("CLERSmallLaser", "ER Small Laser", 0.5, 1, 2, W::Laser, cl_std(2825)),
        energy("CLERMediumLaser", "ER Medium Laser", 1.0, 1, 5, W::Laser, cl_std(2824)),
        energy("CLERLargeLaser", "ER Large Laser", 4.0, 1, 12, W::Laser, cl_std(2820)),
        energy("CLERPPC", "ER PPC", 6.0, 2, 15, W::Ppc, cl_std(2826)),
        // === Ballistic weapons ===
        ballistic("ISMachineGun", "Machine Gun", 0.5, 1, 0, W::MachineGun, mg, intro(1950)),
        ballistic("ISAC2", "AC/2", 6.0, 1, 1, W::Autocannon, ac2, intro(2300)),
        ballistic("ISAC5", "AC/5", 8.0, 4, 1, W::Autocannon, ac5, intro(2250)),
        ballistic("ISAC10", "AC/10", 12.0, 7, 3, W::Autocannon, ac10, intro(2460)),
        ballistic("ISAC20", "AC/20", 14.0, 10, 7, W::Autocannon, ac20, intro(2500))
            .flags(&[F::Splittable]),
        ballistic("ISLBXAC10", "LB 10-X AC", 11.0, 6, 2, W::Autocannon, lbx10, is_std(3035)),
        ballistic("ISUltraAC5", "Ultra AC/5", 9.0, 5, 1, W::Autocannon, uac5, is_std(3035)),
        ballistic("ISRotaryAC5", "Rotary AC/5", 10.0, 6, 1, W::Autocannon, rac5, is_std(3062)),
        ballistic("ISGaussRifle", "Gauss Rifle", 15.0, 7, 1, W::Gauss, gauss, is_std(3040))
            .flags(&[F::Splittable]),
        ballistic("CLMachineGun", "Machine Gun", 0.25, 1, 0, W::MachineGun, mg, cl_std(2825)),
        ballistic("CLUltraAC10", "Ultra AC/10", 10.0, 4, 3, W::Autocannon, uac10, cl_std(2825)),
        ballistic("CLGaussRifle", "Gauss Rifle", 12.0, 6, 1, W::Gauss, gauss, cl_std(2828)),
        // === Missile weapons ===
        missile("ISLRM5", "LRM 5", 2.0, 1, 2, lrm5, intro(2300)).flags(&[F::ArtemisCompatible]),
        missile("ISLRM10", "LRM 10", 5.0, 2, 4, lrm10, intro(2305)).flags(&[F::ArtemisCompatible]),
        missile("ISLRM15", "LRM 15", 7.0, 3, 5, lrm15, intro(2315)).flags(&[F::ArtemisCompatible]),
        missile("ISLRM20", "LRM 20", 10.0, 5, 6, lrm20, intro(2322)).flags(&[F::ArtemisCompatible]),
        missile("ISSRM2", "SRM 2", 1.0, 1, 2, srm2, intro(2370)).flags(&[F::ArtemisCompatible]),
        missile("ISSRM4", "SRM 4", 2.0, 1, 3, srm4, intro(2370)).flags(&[F::ArtemisCompatible]),
        missile("ISSRM6", "SRM 6", 3.0, 2, 4, srm6, intro(2370)).flags(&[F::ArtemisCompatible]),
        missile("ISMRM10", "MRM 10", 3.0, 2, 4, mrm10, is_std(3058)).flags(&[F::ApolloCompatible]),
        missile("ISMRM20", "MRM 20", 7.0, 3, 6, mrm20, is_std(3058)).flags(&[F::ApolloCompatible]),
        missile("CLLRM10", "LRM 10", 2.5, 1, 4, lrm10, cl_std(2820))
            .flags(&[F::ArtemisCompatible, F::ArtemisVCompatible]),
        missile("CLSRM6", "SRM 6", 1.5, 1, 4, srm6, cl_std(2820))
            .flags(&[F::ArtemisCompatible, F::ArtemisVCompatible]),
        missile("CLStreakSRM6", "Streak SRM 6", 3.0, 2, 4, streak6, cl_std(2826)),
        missile("CLATM6", "ATM 6", 3.5, 3, 4, atm6, cl_std(3054)),
        EquipmentType::weapon("ISAntiMissileSystem", "Anti-Missile System", stats(1, W::PointDefense, Some(ams)))
            .tons(0.5)
            .usable_by(UnitClasses::VEHICLES_AND_CRAFT)
            .tech(TechAdvancement::universal(Standard, 2617)),
        EquipmentType::weapon("ISNarc", "Narc Missile Beacon", stats(0, W::Missile, Some(narc)))
            .tons(3.0)
            .slots(2)
            .flags(&[F::Missile])
            .usable_by(UnitClasses::VEHICLES_AND_CRAFT)
            .tech(is_std(3035)),
        // === Capital weapons ===
        EquipmentType::weapon("NAC10", "Naval Autocannon/10", stats(30, W::NavalAutocannon, Some(nac10)))
            .tons(2000.0)
            .flags(&[F::Ballistic, F::CapitalScale])
            .usable_by(capital_only())
            .tech(TechAdvancement::universal(Standard, 2305)),
        EquipmentType::weapon("NL55", "Naval Laser 55", stats(85, W::Laser, None))
            .tons(1100.0)
            .flags(&[F::Energy, F::CapitalScale])
            .usable_by(capital_only())
            .tech(TechAdvancement::universal(Standard, 2820)),
        EquipmentType::weapon("KillerWhale", "Killer Whale", stats(20, W::CapitalMissile, Some(killer_whale)))
            .tons(150.0)
            .flags(&[F::Missile, F::CapitalScale])
            .usable_by(capital_only())
            .tech(TechAdvancement::universal(Standard, 2305)),
        // === Powered armor weapons ===
        EquipmentType::weapon("BASmallLaser", "Small Laser (BA)", stats(1, W::Laser, None))
            .tons(0.2)
            .ba_slots(1)
            .flags(&[F::Energy, F::DirectFire])
            .usable_by(battle_armor_only())
            .tech(TechAdvancement::universal(Standard, 2868)),
        EquipmentType::weapon("BAMachineGun", "Machine Gun (BA)", stats(0, W::MachineGun, None))
            .tons(0.1)
            .ba_slots(1)
            .flags(&[F::Ballistic, F::DirectFire])
            .usable_by(battle_armor_only())
            .tech(TechAdvancement::universal(Standard, 2868)),
        EquipmentType::weapon("BASRM2", "SRM 2 (BA)", stats(0, W::Missile, None))
            .tons(0.18)
            .ba_slots(2)
            .flags(&[F::Missile])
            .usable_by(battle_armor_only())
            .tech(TechAdvancement::universal(Standard, 2868)),
        EquipmentType::weapon("BAFlamer", "Flamer (BA)", stats(0, W::Flamer, None))
            .tons(0.15)
            .ba_slots(1)
            .flags(&[F::Energy])
            .usable_by(battle_armor_only())
            .tech(TechAdvancement::universal(Standard, 2868)),
        // === Ammunition ===
        ammo("ISAC2 Ammo", "AC/2 Ammo", ac2, 45, "Standard", intro(2300)),
        ammo("ISAC5 Ammo", "AC/5 Ammo", ac5, 20, "Standard", intro(2250)),
        ammo("ISAC10 Ammo", "AC/10 Ammo", ac10, 10, "Standard", intro(2460)),
        ammo("ISAC20 Ammo", "AC/20 Ammo", ac20, 5, "Standard", intro(2500)),
        ammo("ISLBXAC10 Ammo", "LB 10-X Ammo", lbx10, 10, "Slug", is_std(3035)),
        ammo("ISLBXAC10 CL Ammo", "LB 10-X Cluster Ammo", lbx10, 10, "Cluster", is_std(3035)),
        ammo("ISUltraAC5 Ammo", "Ultra AC/5 Ammo", uac5, 20, "Standard", is_std(3035)),
        ammo("ISRotaryAC5 Ammo", "Rotary AC/5 Ammo", rac5, 20, "Standard", is_std(3062)),
        ammo("ISGauss Ammo", "Gauss Ammo", gauss, 8, "Standard", is_std(3040)),
        ammo("ISMG Ammo", "Machine Gun Ammo", mg, 200, "Standard", intro(1950)),
        ammo("ISLRM5 Ammo", "LRM 5 Ammo", lrm5, 24, "Standard", intro(2300)),
        ammo("ISLRM10 Ammo", "LRM 10 Ammo", lrm10, 12, "Standard", intro(2305)),
        ammo("ISLRM10 Swarm Ammo", "LRM 10 Swarm Ammo", lrm10, 12, "Swarm", is_adv(3052)),
        ammo("ISLRM15 Ammo", "LRM 15 Ammo", lrm15, 8, "Standard", intro(2315)),
        ammo("ISLRM20 Ammo", "LRM 20 Ammo", lrm20, 6, "Standard", intro(2322)),
        ammo("ISSRM2 Ammo", "SRM 2 Ammo", srm2, 50, "Standard", intro(2370)),
        ammo("ISSRM4 Ammo", "SRM 4 Ammo", srm4, 25, "Standard", intro(2370)),
        ammo("ISSRM6 Ammo", "SRM 6 Ammo", srm6, 15, "Standard", intro(2370)),
        ammo("ISSRM6 Inferno Ammo", "SRM 6 Inferno Ammo", srm6, 15, "Inferno", intro(2370)),
        ammo("ISMRM10 Ammo", "MRM 10 Ammo", mrm10, 24, "Standard", is_std(3058)),
        ammo("ISMRM20 Ammo", "MRM 20 Ammo", mrm20, 12, "Standard", is_std(3058)),
        ammo("ISAMS Ammo", "AMS Ammo", ams, 12, "Standard", TechAdvancement::universal(Standard, 2617)),
        ammo("ISNarc Ammo", "Narc Pods", narc, 6, "Standard", is_std(3035)),
        ammo("CLMG Ammo", "Machine Gun Ammo", mg, 200, "Standard", cl_std(2825)),
        ammo("CLUltraAC10 Ammo", "Ultra AC/10 Ammo", uac10, 10, "Standard", cl_std(2825)),
        ammo("CLGauss Ammo", "Gauss Ammo", gauss, 8, "Standard", cl_std(2828)),
        ammo("CLLRM10 Ammo", "LRM 10 Ammo", lrm10, 12, "Standard", cl_std(2820)),
        ammo("CLSRM6 Ammo", "SRM 6 Ammo", srm6, 15, "Standard", cl_std(2820)),
        ammo("CLStreakSRM6 Ammo", "Streak SRM 6 Ammo", streak6, 15, "Standard", cl_std(2826)),
        ammo("CLATM6 Ammo", "ATM 6 Ammo", atm6, 10, "Standard", cl_std(3054)),
        ammo("NAC10 Ammo", "NAC/10 Ammo", nac10, 2, "Standard", TechAdvancement::universal(Standard, 2305))
            .usable_by(capital_only()),
        ammo("KillerWhale Ammo", "Killer Whale Missile", killer_whale, 1, "Standard", TechAdvancement::universal(Standard, 2305))
            .with_tonnage(Tonnage::PerSize(50.0))
            .usable_by(capital_only()),
        // === Heat sinks ===
        EquipmentType::misc("Heat Sink", "Heat Sink")
            .tons(1.0)
            .vehicle_slots(0)
            .flags(&[F::HeatSink])
            .tech(intro(2022)),
        EquipmentType::misc("ISDoubleHeatSink", "Double Heat Sink")
            .tons(1.0)
            .slots(3)
            .vehicle_slots(0)
            .flags(&[F::HeatSink, F::DoubleHeatSink])
            .tech(TechAdvancement {
                faction: TechFaction::InnerSphere,
                rules_level: Standard,
                is_dates: FactionDates::prototype(2567, 3040),
                clan_dates: FactionDates::NONE,
            }),
        EquipmentType::misc("CLDoubleHeatSink", "Double Heat Sink")
            .tons(1.0)
            .slots(2)
            .vehicle_slots(0)
            .flags(&[F::HeatSink, F::DoubleHeatSink])
            .tech(cl_std(2825)),
        // === Movement ===
        EquipmentType::misc("JumpJet", "Jump Jet")
            .with_tonnage(Tonnage::JumpJet { improved: false })
            .flags(&[F::JumpJet])
            .usable_by(mek_only())
            .tech(intro(2471)),
        EquipmentType::misc("ImprovedJump Jet", "Improved Jump Jet")
            .with_tonnage(Tonnage::JumpJet { improved: true })
            .slots(2)
            .flags(&[F::JumpJet, F::ImprovedJumpJet])
            .usable_by(mek_only())
            .tech(TechAdvancement::both(Advanced, 3069, 3020)),
        EquipmentType::misc("ISMASC", "MASC")
            .with_tonnage(Tonnage::Masc)
            .with_slots(Slots::PerTon)
            .flags(&[F::Masc, F::Singleton])
            .usable_by(mek_only())
            .tech(is_std(3035)),
        EquipmentType::misc("CLMASC", "MASC")
            .with_tonnage(Tonnage::Masc)
            .with_slots(Slots::PerTon)
            .flags(&[F::Masc, F::Singleton])
            .usable_by(mek_only())
            .tech(cl_std(2827)),
        EquipmentType::misc("Supercharger", "Supercharger")
            .with_tonnage(Tonnage::Supercharger)
            .flags(&[F::Supercharger, F::Singleton])
            .usable_by(UnitClasses::GROUND)
            .tech(TechAdvancement::universal(Advanced, 3068)),
        EquipmentType::misc("PartialWing", "Partial Wing")
            .with_tonnage(Tonnage::UnitFraction(0.05))
            .slots(6)
            .flags(&[F::PartialWing, F::Singleton, F::Spreadable])
            .usable_by(mek_only())
            .tech(TechAdvancement::both(Advanced, 3067, 3061)),
        EquipmentType::misc("MechanicalJumpBooster", "Mechanical Jump Booster")
            .with_tonnage(Tonnage::UnitFraction(0.05))
            .slots(2)
            .flags(&[F::JumpBooster, F::Singleton])
            .usable_by(mek_only())
            .tech(is_adv(3060)),
        // === Myomer and actuator systems ===
        EquipmentType::misc("TSM", "Triple Strength Myomer")
            .slots(6)
            .flags(&[F::Tsm, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_std(3050)),
        EquipmentType::misc("Industrial TSM", "Industrial Triple Strength Myomer")
            .slots(12)
            .flags(&[F::IndustrialTsm, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3045)),
        EquipmentType::misc("ISAES", "Actuator Enhancement System")
            .with_tonnage(Tonnage::UnitFraction(1.0 / 35.0))
            .slots(3)
            .flags(&[F::Aes, F::RequiresHand, F::RequiresLowerArm, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3070)),
        // === Fire control ===
        EquipmentType::misc("ISTargeting Computer", "Targeting Computer")
            .with_tonnage(Tonnage::TargetingComputer)
            .with_slots(Slots::PerTon)
            .flags(&[F::TargetingComputer, F::Singleton])
            .usable_by(UnitClasses::GROUND)
            .tech(is_std(3062)),
        EquipmentType::misc("CLTargeting Computer", "Targeting Computer")
            .with_tonnage(Tonnage::TargetingComputer)
            .with_slots(Slots::PerTon)
            .flags(&[F::TargetingComputer, F::Singleton])
            .usable_by(UnitClasses::GROUND)
            .tech(cl_std(2860)),
        EquipmentType::misc("ISArtemisIV", "Artemis IV FCS")
            .tons(1.0)
            .flags(&[F::ArtemisIv])
            .usable_by(UnitClasses::VEHICLES_AND_CRAFT)
            .tech(TechAdvancement::both(Standard, 2598, 2816)),
        EquipmentType::misc("CLArtemisV", "Artemis V FCS")
            .tons(1.5)
            .slots(2)
            .flags(&[F::ArtemisV])
            .usable_by(UnitClasses::VEHICLES_AND_CRAFT)
            .tech(cl_adv(3085)),
        EquipmentType::misc("ISApollo", "Apollo FCS")
            .tons(1.0)
            .flags(&[F::Apollo])
            .usable_by(UnitClasses::VEHICLES_AND_CRAFT)
            .tech(is_std(3071)),
        // === Protection ===
        EquipmentType::misc("ISCASE", "CASE")
            .tons(0.5)
            .flags(&[F::Case])
            .tech(is_std(3036)),
        EquipmentType::misc("ISCASEII", "CASE II")
            .tons(1.0)
            .flags(&[F::CaseII])
            .tech(is_adv(3064)),
        // === Electronics ===
        EquipmentType::misc("ISGuardianECM", "Guardian ECM Suite")
            .tons(1.5)
            .slots(2)
            .flags(&[F::Ecm, F::ArcSlot])
            .tech(is_std(3045)),
        EquipmentType::misc("CLECMSuite", "ECM Suite")
            .tons(1.0)
            .flags(&[F::Ecm, F::ArcSlot])
            .tech(cl_std(2832)),
        EquipmentType::misc("BeagleActiveProbe", "Beagle Active Probe")
            .tons(1.5)
            .slots(2)
            .flags(&[F::ActiveProbe, F::ArcSlot])
            .tech(is_std(3045)),
        EquipmentType::misc("ISC3MasterUnit", "C3 Master Computer")
            .tons(5.0)
            .slots(5)
            .flags(&[F::C3Master])
            .usable_by(UnitClasses::GROUND)
            .tech(is_std(3050)),
        EquipmentType::misc("ISC3SlaveUnit", "C3 Slave Unit")
            .tons(1.0)
            .flags(&[F::C3Slave, F::Singleton])
            .usable_by(UnitClasses::GROUND)
            .tech(is_std(3050)),
        EquipmentType::misc("ISC3iUnit", "Improved C3 Computer")
            .tons(2.5)
            .slots(2)
            .flags(&[F::C3i, F::Singleton])
            .usable_by(UnitClasses::GROUND)
            .tech(is_std(3062)),
        // === Signature masking ===
        EquipmentType::misc("ISNullSignatureSystem", "Null Signature System")
            .slots(7)
            .flags(&[F::NullSignature, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(2630)),
        EquipmentType::misc("ISVoidSignatureSystem", "Void Signature System")
            .slots(7)
            .flags(&[F::VoidSignature, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3070)),
        EquipmentType::misc("ISChameleonLPS", "Chameleon Light Polarization Shield")
            .slots(6)
            .flags(&[F::Chameleon, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(2630)),
        // === Physical weapons ===
        EquipmentType::misc("Hatchet", "Hatchet")
            .with_tonnage(Tonnage::UnitFractionWhole(1.0 / 15.0))
            .with_slots(Slots::UnitFraction(1.0 / 15.0))
            .flags(&[F::PhysicalWeapon, F::RequiresHand, F::ArmOnly, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_std(3022)),
        EquipmentType::misc("Sword", "Sword")
            .with_tonnage(Tonnage::UnitFraction(1.0 / 20.0))
            .with_slots(Slots::UnitFraction(1.0 / 15.0))
            .flags(&[F::PhysicalWeapon, F::RequiresHand, F::RequiresLowerArm, F::ArmOnly, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_std(3058)),
        EquipmentType::misc("Mace", "Mace")
            .with_tonnage(Tonnage::UnitFraction(1.0 / 10.0))
            .with_slots(Slots::UnitFraction(1.0 / 10.0))
            .flags(&[F::PhysicalWeapon, F::RequiresHand, F::RequiresLowerArm, F::ArmOnly, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3061)),
        EquipmentType::misc("Claws", "Claws")
            .with_tonnage(Tonnage::UnitFractionWhole(1.0 / 15.0))
            .with_slots(Slots::UnitFraction(1.0 / 15.0))
            .flags(&[F::PhysicalWeapon, F::ForbidsHand, F::RequiresLowerArm, F::ArmOnly, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3060)),
        EquipmentType::misc("Lance", "Lance")
            .with_tonnage(Tonnage::UnitFraction(1.0 / 20.0))
            .with_slots(Slots::UnitFraction(1.0 / 20.0))
            .flags(&[F::PhysicalWeapon, F::RequiresLowerArm, F::ArmOnly, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3064)),
        EquipmentType::misc("Talons", "Talons")
            .with_tonnage(Tonnage::UnitFraction(1.0 / 15.0))
            .slots(2)
            .flags(&[F::PhysicalWeapon, F::LegOnly, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3072)),
        EquipmentType::misc("Spikes", "Spikes")
            .tons(0.5)
            .flags(&[F::PhysicalWeapon, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(3051)),
        // === Structure and armor slot fillers ===
        filler("ISEndoSteel", "Endo Steel", F::StructureFiller, is_std(3035)),
        filler("CLEndoSteel", "Endo Steel", F::StructureFiller, cl_std(2827)),
        filler("ISFerroFibrous", "Ferro-Fibrous", F::ArmorFiller, is_std(3040)),
        filler("CLFerroFibrous", "Ferro-Fibrous", F::ArmorFiller, cl_std(2820)),
        filler("ISLightFerroFibrous", "Light Ferro-Fibrous", F::ArmorFiller, is_std(3067)),
        filler("ISHeavyFerroFibrous", "Heavy Ferro-Fibrous", F::ArmorFiller, is_std(3069)),
        filler("ISStealth", "Stealth Armor", F::ArmorFiller, is_std(3063)),
        filler("ISReactive", "Reactive Armor", F::ArmorFiller, is_adv(3081)),
        // === Land-air conversion ===
        EquipmentType::misc("LandingGear", "Landing Gear")
            .slots(3)
            .flags(&[F::LandingGear, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(2690)),
        EquipmentType::misc("Avionics", "Avionics")
            .slots(3)
            .flags(&[F::Avionics, F::Singleton, F::Spreadable, F::OmniFixedOnly])
            .usable_by(mek_only())
            .tech(is_adv(2690)),
        // === Industrial and support equipment ===
        EquipmentType::misc("Cargo", "Cargo")
            .with_tonnage(Tonnage::PerSize(1.0))
            .with_slots(Slots::PerSize)
            .flags(&[F::Cargo])
            .tech(intro(1950)),
        EquipmentType::misc("CommsEquipment", "Communications Equipment")
            .with_tonnage(Tonnage::PerSize(1.0))
            .with_slots(Slots::PerSize)
            .crew(1)
            .flags(&[F::Communications])
            .tech(intro(2000)),
        EquipmentType::misc("FieldKitchen", "Field Kitchen")
            .tons(3.0)
            .slots(3)
            .crew(3)
            .usable_by(UnitClasses::GROUND)
            .tech(intro(1950)),
        EquipmentType::misc("Searchlight", "Searchlight")
            .tons(0.5)
            .usable_by(UnitClasses::GROUND)
            .tech(intro(1950)),
        EquipmentType::misc("LiftHoist", "Lift Hoist")
            .tons(3.0)
            .slots(3)
            .usable_by(UnitClasses::GROUND)
            .tech(intro(1950)),
        // === Powered armor equipment ===
        manipulator("BAArmoredGlove", "Armored Glove", 0.0, false),
        manipulator("BABasicManipulator", "Basic Manipulator", 0.0, false),
        manipulator("BABattleClaw", "Battle Claw", 0.015, false),
        manipulator("BAHeavyBattleClaw", "Heavy Battle Claw", 0.02, false),
        manipulator("BAVibroClaw", "Vibro-Claw", 0.05, false),
        manipulator("BASalvageArm", "Salvage Arm", 0.015, false),
        manipulator("BACargoLifter", "Cargo Lifter", 0.03, true),
        manipulator("BAIndustrialDrill", "Industrial Drill", 0.03, true),
        EquipmentType::misc("BAMagneticClamp", "Magnetic Clamps")
            .tons(0.03)
            .ba_slots(2)
            .flags(&[F::Singleton])
            .usable_by(battle_armor_only())
            .tech(is_std(3062)),
        EquipmentType::misc("BAMechanicalJumpBooster", "Mechanical Jump Booster (BA)")
            .tons(0.05)
            .ba_slots(0)
            .flags(&[F::JumpBooster, F::Singleton])
            .usable_by(battle_armor_only())
            .tech(TechAdvancement::inner_sphere(Experimental, 3070)),
    ]
}
