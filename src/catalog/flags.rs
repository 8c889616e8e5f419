//! Capability flags on catalog entries
//!
//! The flag vocabulary is closed. A set of flags is stored as a bit mask so
//! membership tests are a single AND.

use serde::{Deserialize, Serialize};

/// Named boolean trait of an equipment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EquipmentFlag {
    // Weapon traits
    Energy,
    Ballistic,
    Missile,
    DirectFire,
    CapitalScale,
    ArtemisCompatible,
    ArtemisVCompatible,
    ApolloCompatible,
    OneShotCapable,
    // Heat management
    HeatSink,
    DoubleHeatSink,
    // Movement enhancement
    JumpJet,
    ImprovedJumpJet,
    JumpBooster,
    PartialWing,
    Masc,
    Supercharger,
    // Myomer and actuator systems
    Tsm,
    IndustrialTsm,
    Aes,
    // Fire control
    TargetingComputer,
    ArtemisIv,
    ArtemisV,
    Apollo,
    // Electronics
    Ecm,
    ActiveProbe,
    C3Master,
    C3Slave,
    C3i,
    // Signature masking
    NullSignature,
    VoidSignature,
    Chameleon,
    // Protection
    Case,
    CaseII,
    // Physical weapons
    PhysicalWeapon,
    RequiresHand,
    RequiresLowerArm,
    ForbidsHand,
    ArmOnly,
    LegOnly,
    // Slot fillers for structure and armor types
    StructureFiller,
    ArmorFiller,
    // Land-air configuration
    LandingGear,
    Avionics,
    // Powered armor
    Manipulator,
    PairMounted,
    // Vehicles and craft
    ArcSlot,
    Cargo,
    Communications,
    // Mounting rules
    Singleton,
    OmniFixedOnly,
    Spreadable,
    Splittable,
}

/// Bit set of [`EquipmentFlag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EquipmentFlags(u128);

impl EquipmentFlags {
    pub const EMPTY: EquipmentFlags = EquipmentFlags(0);

    pub fn of(flags: &[EquipmentFlag]) -> Self {
        flags.iter().copied().collect()
    }

    pub fn contains(&self, flag: EquipmentFlag) -> bool {
        self.0 & (1u128 << flag as u8) != 0
    }

    pub fn insert(&mut self, flag: EquipmentFlag) {
        self.0 |= 1u128 << flag as u8;
    }

    pub fn intersects(&self, other: EquipmentFlags) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<EquipmentFlag> for EquipmentFlags {
    fn from_iter<I: IntoIterator<Item = EquipmentFlag>>(iter: I) -> Self {
        let mut set = EquipmentFlags::EMPTY;
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

/// Unit category an item may be installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum UnitClass {
    Mek,
    Vehicle,
    SupportVehicle,
    Fighter,
    SmallCraft,
    Capital,
    BattleArmor,
    Handheld,
}

/// Bit set of [`UnitClass`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnitClasses(u16);

impl UnitClasses {
    pub const NONE: UnitClasses = UnitClasses(0);
    pub const ALL: UnitClasses = UnitClasses(0xff);
    pub const GROUND: UnitClasses = UnitClasses(
        1 << UnitClass::Mek as u8
            | 1 << UnitClass::Vehicle as u8
            | 1 << UnitClass::SupportVehicle as u8,
    );
    pub const AEROSPACE: UnitClasses = UnitClasses(
        1 << UnitClass::Fighter as u8
            | 1 << UnitClass::SmallCraft as u8
            | 1 << UnitClass::Capital as u8,
    );
    /// Everything except powered armor and handheld weapons
    pub const VEHICLES_AND_CRAFT: UnitClasses = UnitClasses(Self::GROUND.0 | Self::AEROSPACE.0);

    pub fn of(classes: &[UnitClass]) -> Self {
        let mut set = UnitClasses::NONE;
        for class in classes {
            set.0 |= 1 << *class as u8;
        }
        set
    }

    pub fn contains(&self, class: UnitClass) -> bool {
        self.0 & (1 << class as u8) != 0
    }

    pub fn union(self, other: UnitClasses) -> Self {
        UnitClasses(self.0 | other.0)
    }
}
