//! Category-specific design data

use super::components::{ChassisMod, CockpitKind, GyroKind};
use super::location::LocationId;
use crate::core::types::TechRating;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag plus the data only that category carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum UnitDetails {
    Mek(MekDetails),
    Vehicle(VehicleDetails),
    SupportVehicle(SupportVehicleDetails),
    Fighter(FighterDetails),
    SmallCraft(SmallCraftDetails),
    Capital(CapitalDetails),
    BattleArmor(BattleArmorDetails),
    Handheld(HandheldDetails),
    /// Categories this engine has no rules for (infantry, protomeks, ...)
    Unsupported { kind: String },
}

impl UnitDetails {
    pub fn category_name(&self) -> &str {
        match self {
            UnitDetails::Mek(_) => "Mek",
            UnitDetails::Vehicle(_) => "Vehicle",
            UnitDetails::SupportVehicle(_) => "Support Vehicle",
            UnitDetails::Fighter(_) => "Fighter",
            UnitDetails::SmallCraft(_) => "Small Craft",
            UnitDetails::Capital(_) => "Capital Ship",
            UnitDetails::BattleArmor(_) => "Battle Armor",
            UnitDetails::Handheld(_) => "Handheld Weapon",
            UnitDetails::Unsupported { kind } => kind,
        }
    }
}

// === WALKING CHASSIS ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actuators {
    pub left_lower_arm: bool,
    pub left_hand: bool,
    pub right_lower_arm: bool,
    pub right_hand: bool,
}

impl Default for Actuators {
    fn default() -> Self {
        Self {
            left_lower_arm: true,
            left_hand: true,
            right_lower_arm: true,
            right_hand: true,
        }
    }
}

impl Actuators {
    pub fn has_hand(&self, location: LocationId) -> bool {
        match location {
            LocationId::LeftArm => self.left_hand,
            LocationId::RightArm => self.right_hand,
            _ => false,
        }
    }

    pub fn has_lower_arm(&self, location: LocationId) -> bool {
        match location {
            LocationId::LeftArm => self.left_lower_arm,
            LocationId::RightArm => self.right_lower_arm,
            _ => false,
        }
    }

    /// Actuator slots in an arm: shoulder and upper arm plus optional lower arm and hand
    pub fn arm_slots(&self, location: LocationId) -> u32 {
        2 + u32::from(self.has_lower_arm(location)) + u32::from(self.has_hand(location))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MekDetails {
    pub cockpit: CockpitKind,
    pub gyro: GyroKind,
    #[serde(default)]
    pub actuators: Actuators,
    /// Land-air conversion
    #[serde(default)]
    pub lam: bool,
    #[serde(default)]
    pub industrial: bool,
}

// === VEHICLES ===

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    #[serde(default)]
    pub superheavy: bool,
    /// Trailers may be built without an engine
    #[serde(default)]
    pub trailer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportVehicleDetails {
    pub structural_tech: TechRating,
    pub engine_tech: TechRating,
    pub armor_tech: TechRating,
    /// Barrier armor rating (2-10)
    #[serde(default)]
    pub barrier_rating: u32,
    #[serde(default)]
    pub chassis_mods: Vec<ChassisMod>,
    #[serde(default)]
    pub fuel_tons: f64,
}

impl SupportVehicleDetails {
    pub fn has_mod(&self, chassis_mod: ChassisMod) -> bool {
        self.chassis_mods.contains(&chassis_mod)
    }
}

// === AEROSPACE ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterDetails {
    /// Conventional (atmospheric) fighter rather than aerospace fighter
    #[serde(default)]
    pub conventional: bool,
    pub cockpit: CockpitKind,
    pub fuel_tons: f64,
    pub structural_integrity: u32,
}

/// Grouped weapons sharing fire control and ammunition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponBay {
    pub name: String,
    pub location: LocationId,
    /// Indices into the design's mounts
    pub weapons: Vec<usize>,
    #[serde(default)]
    pub ammo: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallCraftDetails {
    #[serde(default)]
    pub dropship: bool,
    #[serde(default = "default_true")]
    pub military: bool,
    #[serde(default)]
    pub primitive: bool,
    pub fuel_tons: f64,
    pub structural_integrity: u32,
    #[serde(default)]
    pub weapon_bays: Vec<WeaponBay>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapitalClass {
    JumpShip,
    WarShip,
    SpaceStation,
}

impl fmt::Display for CapitalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapitalClass::JumpShip => write!(f, "JumpShip"),
            CapitalClass::WarShip => write!(f, "WarShip"),
            CapitalClass::SpaceStation => write!(f, "Space Station"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalDetails {
    pub class: CapitalClass,
    pub fuel_tons: f64,
    pub structural_integrity: u32,
    /// Kearny-Fuchida drive fitted (jumpships and warships)
    #[serde(default = "default_true")]
    pub kf_drive: bool,
    #[serde(default)]
    pub lithium_fusion_battery: bool,
    #[serde(default)]
    pub jump_sail: bool,
    #[serde(default)]
    pub docking_hardpoints: u32,
    /// Gravity deck diameters in meters
    #[serde(default)]
    pub grav_decks: Vec<u32>,
    #[serde(default)]
    pub weapon_bays: Vec<WeaponBay>,
    #[serde(default)]
    pub primitive: bool,
}

// === POWERED ARMOR ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BaWeightClass {
    Pal,
    Light,
    Medium,
    Heavy,
    Assault,
}

impl BaWeightClass {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BaWeightClass::Pal => "PA(L)",
            BaWeightClass::Light => "Light",
            BaWeightClass::Medium => "Medium",
            BaWeightClass::Heavy => "Heavy",
            BaWeightClass::Assault => "Assault",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaChassis {
    #[default]
    Humanoid,
    Quad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleArmorDetails {
    pub weight_class: BaWeightClass,
    #[serde(default)]
    pub chassis: BaChassis,
    pub troopers: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandheldDetails {}
