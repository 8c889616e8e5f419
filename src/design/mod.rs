//! The design under test
//!
//! A design is a fully resolved, read-only description of one unit. Loading
//! it is someone else's job; validators only borrow it.

pub mod components;
pub mod details;
pub mod location;
pub mod mount;

pub use components::{
    ArmorKind, ChassisMod, CockpitKind, Engine, EngineKind, GyroKind, HeatSinkKind, HeatSinks,
    StructureKind,
};
pub use details::{
    Actuators, BaChassis, BaWeightClass, BattleArmorDetails, CapitalClass, CapitalDetails,
    FighterDetails, HandheldDetails, MekDetails, SmallCraftDetails, SupportVehicleDetails,
    UnitDetails, VehicleDetails, WeaponBay,
};
pub use location::{Location, LocationId};
pub use mount::EquipmentMount;

use crate::core::error::Result;
use crate::core::types::{MovementMode, RulesLevel, TechBase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Living space aboard a vehicle or craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuartersKind {
    FirstClass,
    SecondClass,
    Crew,
    Steerage,
}

impl QuartersKind {
    pub fn tons_per_person(self) -> f64 {
        match self {
            QuartersKind::FirstClass => 10.0,
            QuartersKind::SecondClass | QuartersKind::Crew => 7.0,
            QuartersKind::Steerage => 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quarters {
    pub kind: QuartersKind,
    pub capacity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewData {
    #[serde(default)]
    pub crew: u32,
    #[serde(default)]
    pub passengers: u32,
    #[serde(default)]
    pub quarters: Vec<Quarters>,
}

impl CrewData {
    pub fn berths(&self) -> u32 {
        self.quarters.iter().map(|q| q.capacity).sum()
    }
}

/// Cargo or unit transport bay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BayKind {
    Cargo,
    LiquidCargo,
    RefrigeratedCargo,
    Livestock,
    Infantry,
    Vehicle,
    Mek,
    Fighter,
    SmallCraft,
}

impl BayKind {
    /// Tons per unit of capacity (cargo tons or unit cubicles)
    pub fn tons_per_unit(self) -> f64 {
        match self {
            BayKind::Cargo => 1.0,
            BayKind::LiquidCargo => 1.0 / 0.91,
            BayKind::RefrigeratedCargo => 1.0 / 0.87,
            BayKind::Livestock => 1.0 / 0.83,
            BayKind::Infantry => 5.0,
            BayKind::Vehicle => 100.0,
            BayKind::Mek | BayKind::Fighter => 150.0,
            BayKind::SmallCraft => 200.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BayKind::Cargo => "Cargo Bay",
            BayKind::LiquidCargo => "Liquid Cargo Bay",
            BayKind::RefrigeratedCargo => "Refrigerated Cargo Bay",
            BayKind::Livestock => "Livestock Bay",
            BayKind::Infantry => "Infantry Bay",
            BayKind::Vehicle => "Vehicle Bay",
            BayKind::Mek => "Mek Bay",
            BayKind::Fighter => "Fighter Bay",
            BayKind::SmallCraft => "Small Craft Bay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportBay {
    pub kind: BayKind,
    pub capacity: f64,
    #[serde(default)]
    pub doors: u32,
}

impl TransportBay {
    pub fn tons(&self) -> f64 {
        self.kind.tons_per_unit() * self.capacity
    }
}

/// A complete unit design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDesign {
    pub chassis: String,
    #[serde(default)]
    pub model: String,
    /// Declared mass in tons; per trooper for powered armor
    pub tonnage: f64,
    pub year: u16,
    pub tech_base: TechBase,
    #[serde(default)]
    pub mixed_tech: bool,
    pub rules_level: RulesLevel,
    pub movement_mode: MovementMode,
    #[serde(default)]
    pub omni: bool,
    /// Walking, cruising or safe thrust MP
    #[serde(default)]
    pub walk_mp: u32,
    #[serde(default)]
    pub jump_mp: u32,
    pub engine: Engine,
    pub armor: ArmorKind,
    pub structure: StructureKind,
    #[serde(default)]
    pub heat_sinks: HeatSinks,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub mounts: Vec<EquipmentMount>,
    #[serde(default)]
    pub crew: CrewData,
    #[serde(default)]
    pub bays: Vec<TransportBay>,
    /// Equipment names the loader could not resolve
    #[serde(default)]
    pub failed_equipment: Vec<String>,
    pub details: UnitDetails,
}

impl UnitDesign {
    /// Parse a design from its JSON form
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn display_name(&self) -> String {
        if self.model.is_empty() {
            self.chassis.clone()
        } else {
            format!("{} {}", self.chassis, self.model)
        }
    }

    pub fn is_clan(&self) -> bool {
        self.tech_base.is_clan()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.id == id)
    }

    pub fn has_location(&self, id: LocationId) -> bool {
        self.location(id).is_some()
    }

    /// Armor type of a location, honouring patchwork overrides
    pub fn armor_kind_at(&self, id: LocationId) -> ArmorKind {
        self.location(id)
            .and_then(|loc| loc.armor_kind)
            .unwrap_or(self.armor)
    }

    pub fn is_patchwork(&self) -> bool {
        self.locations
            .iter()
            .any(|loc| loc.armor_kind.is_some_and(|kind| kind != self.armor))
    }

    pub fn total_armor_points(&self) -> u32 {
        self.locations.iter().map(Location::total_armor).sum()
    }

    /// Running MP from walking MP
    pub fn run_mp(&self) -> u32 {
        (self.walk_mp * 3).div_ceil(2)
    }

    /// Mounts placed in a location
    pub fn mounts_at(&self, id: LocationId) -> impl Iterator<Item = (usize, &EquipmentMount)> {
        self.mounts
            .iter()
            .enumerate()
            .filter(move |(_, mount)| mount.occupies(id))
    }
}

impl fmt::Display for UnitDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} t)", self.display_name(), self.tonnage)
    }
}
