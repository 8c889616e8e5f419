//! Engine, structure, armor, cockpit, gyro and heat sink selections
//!
//! These are not equipment mounts, so each carries its own tech record and
//! weight tables here.

use crate::catalog::flags::UnitClass;
use crate::catalog::tech::{FactionDates, TechAdvancement};
use crate::core::types::{MovementMode, RulesLevel, TechFaction, TechRating};
use serde::{Deserialize, Serialize};
use std::fmt;

use RulesLevel::{Advanced, Experimental, Introductory, Standard};

fn component_tech(
    faction: TechFaction,
    rules_level: RulesLevel,
    is_year: Option<u16>,
    clan_year: Option<u16>,
) -> TechAdvancement {
    TechAdvancement {
        faction,
        rules_level,
        is_dates: is_year.map(FactionDates::from).unwrap_or(FactionDates::NONE),
        clan_dates: clan_year.map(FactionDates::from).unwrap_or(FactionDates::NONE),
    }
}

// === ENGINES ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    /// Trailers and unpowered items
    None,
    Fusion,
    XlFusion,
    XxlFusion,
    LightFusion,
    CompactFusion,
    Ice,
    FuelCell,
    Fission,
    Steam,
    Battery,
    Solar,
    /// Maglev or power-pickup drive fed from outside the vehicle
    External,
}

impl EngineKind {
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::None => "No Engine",
            EngineKind::Fusion => "Fusion Engine",
            EngineKind::XlFusion => "XL Fusion Engine",
            EngineKind::XxlFusion => "XXL Fusion Engine",
            EngineKind::LightFusion => "Light Fusion Engine",
            EngineKind::CompactFusion => "Compact Fusion Engine",
            EngineKind::Ice => "I.C.E.",
            EngineKind::FuelCell => "Fuel Cell",
            EngineKind::Fission => "Fission Engine",
            EngineKind::Steam => "Steam Engine",
            EngineKind::Battery => "Battery",
            EngineKind::Solar => "Solar",
            EngineKind::External => "External Power",
        }
    }

    pub fn is_fusion(self) -> bool {
        matches!(
            self,
            EngineKind::Fusion
                | EngineKind::XlFusion
                | EngineKind::XxlFusion
                | EngineKind::LightFusion
                | EngineKind::CompactFusion
        )
    }

    /// Engines whose shielding extends into the side torsos
    pub fn is_xl_family(self) -> bool {
        matches!(
            self,
            EngineKind::XlFusion | EngineKind::XxlFusion | EngineKind::LightFusion
        )
    }

    /// Multiplier on the standard fusion weight table, or `None` when the
    /// engine is not built on that table
    pub fn table_multiplier(self) -> Option<f64> {
        match self {
            EngineKind::Fusion => Some(1.0),
            EngineKind::XlFusion => Some(0.5),
            EngineKind::XxlFusion => Some(1.0 / 3.0),
            EngineKind::LightFusion => Some(0.75),
            EngineKind::CompactFusion => Some(1.5),
            EngineKind::Ice => Some(2.0),
            EngineKind::FuelCell => Some(1.2),
            EngineKind::Fission => Some(1.75),
            _ => None,
        }
    }

    /// Support vehicle engine multiplier by engine tech rating
    pub fn support_multiplier(self, rating: TechRating) -> Option<f64> {
        let row: [Option<f64>; 6] = match self {
            EngineKind::Steam => [Some(4.0), Some(3.5), Some(3.0), Some(2.8), Some(2.6), Some(2.5)],
            EngineKind::Ice => [None, Some(3.0), Some(2.0), Some(1.5), Some(1.3), Some(1.0)],
            EngineKind::Battery => [None, None, Some(1.5), Some(1.2), Some(1.0), Some(0.8)],
            EngineKind::FuelCell => [None, None, Some(1.2), Some(1.0), Some(0.9), Some(0.7)],
            EngineKind::Solar => [None, None, Some(5.0), Some(4.5), Some(4.0), Some(3.5)],
            EngineKind::Fission => [None, None, Some(1.75), Some(1.5), Some(1.4), Some(1.3)],
            EngineKind::Fusion => [None, None, Some(1.5), Some(1.0), Some(0.75), Some(0.5)],
            EngineKind::External => [None, None, Some(1.4), Some(1.0), Some(0.8), Some(0.7)],
            _ => [None; 6],
        };
        row[rating.index()]
    }

    /// Critical slots in the center torso of a walking chassis
    pub fn center_torso_slots(self) -> u32 {
        match self {
            EngineKind::None => 0,
            EngineKind::CompactFusion => 3,
            _ => 6,
        }
    }

    /// Critical slots in each side torso of a walking chassis
    pub fn side_torso_slots(self, clan: bool, large: bool) -> u32 {
        let base = match (self, clan) {
            (EngineKind::XlFusion, false) => 3,
            (EngineKind::XlFusion, true) => 2,
            (EngineKind::XxlFusion, false) => 6,
            (EngineKind::XxlFusion, true) => 4,
            (EngineKind::LightFusion, _) => 2,
            _ => 0,
        };
        if large && self != EngineKind::None && self != EngineKind::CompactFusion {
            base + 2
        } else {
            base
        }
    }

    /// Heat sinks provided without weight
    pub fn free_heat_sinks(self) -> u32 {
        if self.is_fusion() {
            10
        } else {
            0
        }
    }

    pub fn tech(self) -> TechAdvancement {
        use TechFaction::*;
        match self {
            EngineKind::None => TechAdvancement::universal(Introductory, 1950),
            EngineKind::Fusion => TechAdvancement::universal(Introductory, 2021),
            EngineKind::XlFusion => TechAdvancement {
                faction: Both,
                rules_level: Standard,
                is_dates: FactionDates::prototype(2556, 3035),
                clan_dates: FactionDates::from(2827),
            },
            EngineKind::XxlFusion => TechAdvancement::both(Experimental, 3055, 3055),
            EngineKind::LightFusion => component_tech(InnerSphere, Standard, Some(3062), None),
            EngineKind::CompactFusion => component_tech(InnerSphere, Standard, Some(3068), None),
            EngineKind::Ice => TechAdvancement::universal(Introductory, 1950),
            EngineKind::FuelCell => TechAdvancement::universal(Standard, 2300),
            EngineKind::Fission => TechAdvancement::universal(Standard, 2470),
            EngineKind::Steam
            | EngineKind::Battery
            | EngineKind::Solar
            | EngineKind::External => TechAdvancement::universal(Introductory, 1950),
        }
    }
}

/// Engine selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub kind: EngineKind,
    pub rating: u32,
    /// Large engines cover ratings above 400
    #[serde(default)]
    pub large: bool,
}

impl Engine {
    pub fn new(kind: EngineKind, rating: u32) -> Self {
        Self {
            kind,
            rating,
            large: false,
        }
    }

    pub fn none() -> Self {
        Self::new(EngineKind::None, 0)
    }
}

/// Weight of a standard fusion engine by rating / 5
const FUSION_ENGINE_TONS: [f64; 101] = [
    0.0, 0.25, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, //
    1.5, 1.5, 1.5, 2.0, 2.0, 2.0, 2.5, 2.5, 3.0, 3.0, //
    3.0, 3.5, 3.5, 4.0, 4.0, 4.0, 4.5, 4.5, 5.0, 5.0, //
    5.5, 5.5, 6.0, 6.0, 6.0, 7.0, 7.0, 7.5, 7.5, 8.0, //
    8.5, 8.5, 9.0, 9.5, 10.0, 10.0, 10.5, 11.0, 11.5, 12.0, //
    12.5, 13.0, 13.5, 14.0, 14.5, 15.5, 16.0, 16.5, 17.5, 18.0, //
    19.0, 19.5, 20.5, 21.5, 22.5, 23.5, 24.5, 25.5, 27.0, 28.5, //
    29.5, 31.5, 33.0, 34.5, 36.5, 38.5, 41.0, 43.5, 46.0, 49.0, //
    52.5, 56.5, 61.0, 66.5, 72.5, 79.5, 87.5, 97.0, 107.5, 119.5, //
    133.5, 150.0, 168.5, 190.0, 214.5, 243.0, 275.5, 313.0, 356.0, 405.5, //
    462.5,
];

pub const MAX_ENGINE_RATING: u32 = 500;

/// Unrounded standard fusion weight for a rating (rounded up to a multiple of 5)
pub fn fusion_table_weight(rating: u32) -> f64 {
    let idx = ((rating + 4) / 5).min(MAX_ENGINE_RATING / 5) as usize;
    FUSION_ENGINE_TONS[idx]
}

// === STRUCTURE ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Standard,
    EndoSteel,
    EndoComposite,
    Composite,
    Reinforced,
    Industrial,
}

impl StructureKind {
    pub fn name(self) -> &'static str {
        match self {
            StructureKind::Standard => "Standard Structure",
            StructureKind::EndoSteel => "Endo Steel",
            StructureKind::EndoComposite => "Endo-Composite",
            StructureKind::Composite => "Composite",
            StructureKind::Reinforced => "Reinforced",
            StructureKind::Industrial => "Industrial Structure",
        }
    }

    pub fn weight_multiplier(self) -> f64 {
        match self {
            StructureKind::Standard => 1.0,
            StructureKind::EndoSteel | StructureKind::Composite => 0.5,
            StructureKind::EndoComposite => 0.75,
            StructureKind::Reinforced | StructureKind::Industrial => 2.0,
        }
    }

    /// Filler slots required on a walking chassis
    pub fn mek_slots(self, clan: bool) -> u32 {
        match (self, clan) {
            (StructureKind::EndoSteel, false) => 14,
            (StructureKind::EndoSteel, true) => 7,
            (StructureKind::EndoComposite, false) => 7,
            (StructureKind::EndoComposite, true) => 4,
            _ => 0,
        }
    }

    /// Item slots consumed on a combat vehicle
    pub fn vehicle_slots(self, clan: bool) -> u32 {
        match (self, clan) {
            (StructureKind::EndoSteel, false) => 2,
            (StructureKind::EndoSteel, true) | (StructureKind::EndoComposite, _) => 1,
            _ => 0,
        }
    }

    pub fn legal_for(self, class: UnitClass) -> bool {
        match self {
            StructureKind::Standard => true,
            StructureKind::Industrial | StructureKind::Composite => class == UnitClass::Mek,
            StructureKind::EndoSteel | StructureKind::EndoComposite | StructureKind::Reinforced => {
                matches!(class, UnitClass::Mek | UnitClass::Vehicle)
            }
        }
    }

    pub fn tech(self) -> TechAdvancement {
        match self {
            StructureKind::Standard => TechAdvancement::universal(Introductory, 2439),
            StructureKind::EndoSteel => TechAdvancement {
                faction: TechFaction::Both,
                rules_level: Standard,
                is_dates: FactionDates::prototype(2487, 3035),
                clan_dates: FactionDates::from(2827),
            },
            StructureKind::EndoComposite => TechAdvancement::both(Advanced, 3067, 3073),
            StructureKind::Composite => {
                component_tech(TechFaction::InnerSphere, Experimental, Some(3061), None)
            }
            StructureKind::Reinforced => TechAdvancement::both(Advanced, 3057, 3057),
            StructureKind::Industrial => TechAdvancement::universal(Introductory, 2350),
        }
    }
}

// === ARMOR ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorKind {
    Standard,
    Industrial,
    HeavyIndustrial,
    Commercial,
    Primitive,
    FerroFibrous,
    LightFerroFibrous,
    HeavyFerroFibrous,
    Stealth,
    Reactive,
    Reflective,
    Hardened,
    FerroLamellor,
    FerroAluminum,
    FerroCarbide,
    LamellorFerroCarbide,
    FerroImpervium,
    BaStandard,
    BaAdvanced,
    BaStealthBasic,
    BaStealth,
    BaReactive,
    BaReflective,
    BaFireResistant,
    /// Barrier-rated support vehicle armor
    SupportVehicle,
}

impl ArmorKind {
    pub fn name(self) -> &'static str {
        match self {
            ArmorKind::Standard => "Standard Armor",
            ArmorKind::Industrial => "Industrial Armor",
            ArmorKind::HeavyIndustrial => "Heavy Industrial Armor",
            ArmorKind::Commercial => "Commercial Armor",
            ArmorKind::Primitive => "Primitive Armor",
            ArmorKind::FerroFibrous => "Ferro-Fibrous",
            ArmorKind::LightFerroFibrous => "Light Ferro-Fibrous",
            ArmorKind::HeavyFerroFibrous => "Heavy Ferro-Fibrous",
            ArmorKind::Stealth => "Stealth Armor",
            ArmorKind::Reactive => "Reactive Armor",
            ArmorKind::Reflective => "Reflective Armor",
            ArmorKind::Hardened => "Hardened Armor",
            ArmorKind::FerroLamellor => "Ferro-Lamellor",
            ArmorKind::FerroAluminum => "Ferro-Aluminum",
            ArmorKind::FerroCarbide => "Ferro-Carbide",
            ArmorKind::LamellorFerroCarbide => "Lamellor Ferro-Carbide",
            ArmorKind::FerroImpervium => "Improved Ferro-Aluminum",
            ArmorKind::BaStandard => "Standard BA Armor",
            ArmorKind::BaAdvanced => "Advanced BA Armor",
            ArmorKind::BaStealthBasic => "Basic Stealth BA Armor",
            ArmorKind::BaStealth => "Stealth BA Armor",
            ArmorKind::BaReactive => "Reactive BA Armor",
            ArmorKind::BaReflective => "Reflective BA Armor",
            ArmorKind::BaFireResistant => "Fire Resistant BA Armor",
            ArmorKind::SupportVehicle => "Support Vehicle Armor",
        }
    }

    /// Armor points per ton at standard scale
    pub fn points_per_ton(self, clan: bool) -> f64 {
        let multiplier = match self {
            ArmorKind::Standard | ArmorKind::HeavyIndustrial => 1.0,
            ArmorKind::Stealth | ArmorKind::Reactive | ArmorKind::Reflective => 1.0,
            ArmorKind::Industrial => 0.625,
            ArmorKind::Commercial => 1.5,
            ArmorKind::Primitive => 0.67,
            ArmorKind::FerroFibrous | ArmorKind::FerroAluminum => {
                if clan {
                    1.2
                } else {
                    1.12
                }
            }
            ArmorKind::LightFerroFibrous => 1.06,
            ArmorKind::HeavyFerroFibrous => 1.24,
            ArmorKind::Hardened => 0.5,
            ArmorKind::FerroLamellor => 0.875,
            _ => 1.0,
        };
        16.0 * multiplier
    }

    /// Multiplier on the capital-scale points per ton
    pub fn capital_multiplier(self, clan: bool) -> f64 {
        match self {
            ArmorKind::FerroAluminum => {
                if clan {
                    1.2
                } else {
                    1.12
                }
            }
            ArmorKind::FerroCarbide => 1.2,
            ArmorKind::LamellorFerroCarbide => 1.3,
            ArmorKind::FerroImpervium => 1.4,
            _ => 1.0,
        }
    }

    /// Kilograms per point of powered armor
    pub fn ba_kg_per_point(self) -> Option<f64> {
        match self {
            ArmorKind::BaStandard => Some(50.0),
            ArmorKind::BaAdvanced => Some(40.0),
            ArmorKind::BaStealthBasic => Some(55.0),
            ArmorKind::BaStealth | ArmorKind::BaReactive => Some(60.0),
            ArmorKind::BaReflective | ArmorKind::BaFireResistant => Some(30.0),
            _ => None,
        }
    }

    /// Filler slots required on a walking chassis
    pub fn mek_slots(self, clan: bool) -> u32 {
        match (self, clan) {
            (ArmorKind::FerroFibrous, false) | (ArmorKind::Reactive, false) => 14,
            (ArmorKind::FerroFibrous, true) | (ArmorKind::Reactive, true) => 7,
            (ArmorKind::LightFerroFibrous, _) => 7,
            (ArmorKind::HeavyFerroFibrous, _) => 21,
            (ArmorKind::Stealth, _) | (ArmorKind::FerroLamellor, _) => 12,
            (ArmorKind::Reflective, false) => 10,
            (ArmorKind::Reflective, true) => 5,
            _ => 0,
        }
    }

    /// Item slots consumed on a combat vehicle
    pub fn vehicle_slots(self, clan: bool) -> u32 {
        match (self, clan) {
            (ArmorKind::FerroFibrous, false) | (ArmorKind::Reflective, false) => 2,
            (ArmorKind::FerroFibrous, true) | (ArmorKind::Reflective, true) => 1,
            (ArmorKind::LightFerroFibrous, _) => 1,
            (ArmorKind::HeavyFerroFibrous, _) | (ArmorKind::Reactive, false) => 3,
            (ArmorKind::Reactive, true) => 2,
            (ArmorKind::Stealth, _) | (ArmorKind::FerroLamellor, _) => 2,
            _ => 0,
        }
    }

    /// Weapon slots consumed on aerospace units
    pub fn aero_slots(self, clan: bool) -> u32 {
        match (self, clan) {
            (ArmorKind::FerroAluminum, false) => 2,
            (ArmorKind::FerroAluminum, true) => 1,
            (ArmorKind::FerroCarbide, _) | (ArmorKind::LamellorFerroCarbide, _) => 1,
            (ArmorKind::FerroImpervium, _) => 1,
            _ => 0,
        }
    }

    /// Which unit categories may carry this armor
    pub fn legal_for(self, class: UnitClass) -> bool {
        use UnitClass::*;
        match self {
            ArmorKind::Standard => matches!(
                class,
                Mek | Vehicle | Fighter | SmallCraft | Capital | Handheld
            ),
            ArmorKind::Industrial | ArmorKind::HeavyIndustrial | ArmorKind::Commercial => {
                matches!(class, Mek | Vehicle)
            }
            ArmorKind::Primitive => matches!(class, Mek | Vehicle | Fighter | SmallCraft | Capital),
            ArmorKind::FerroFibrous
            | ArmorKind::LightFerroFibrous
            | ArmorKind::HeavyFerroFibrous
            | ArmorKind::Stealth
            | ArmorKind::Reactive
            | ArmorKind::Reflective
            | ArmorKind::Hardened
            | ArmorKind::FerroLamellor => matches!(class, Mek | Vehicle),
            ArmorKind::FerroAluminum => matches!(class, Fighter | SmallCraft | Capital),
            ArmorKind::FerroCarbide | ArmorKind::LamellorFerroCarbide | ArmorKind::FerroImpervium => {
                class == Capital
            }
            ArmorKind::BaStandard
            | ArmorKind::BaAdvanced
            | ArmorKind::BaStealthBasic
            | ArmorKind::BaStealth
            | ArmorKind::BaReactive
            | ArmorKind::BaReflective
            | ArmorKind::BaFireResistant => class == BattleArmor,
            ArmorKind::SupportVehicle => class == SupportVehicle,
        }
    }

    pub fn tech(self) -> TechAdvancement {
        use TechFaction::{Clan, InnerSphere};
        match self {
            ArmorKind::Standard => TechAdvancement::universal(Introductory, 2470),
            ArmorKind::Industrial => TechAdvancement::universal(Introductory, 2350),
            ArmorKind::HeavyIndustrial => TechAdvancement::universal(Standard, 2460),
            ArmorKind::Commercial => TechAdvancement::universal(Standard, 2300),
            ArmorKind::Primitive => TechAdvancement::universal(Introductory, 2300),
            ArmorKind::FerroFibrous => TechAdvancement {
                faction: TechFaction::Both,
                rules_level: Standard,
                is_dates: FactionDates::prototype(2571, 3040),
                clan_dates: FactionDates::from(2820),
            },
            ArmorKind::LightFerroFibrous => component_tech(InnerSphere, Standard, Some(3067), None),
            ArmorKind::HeavyFerroFibrous => component_tech(InnerSphere, Standard, Some(3069), None),
            ArmorKind::Stealth => component_tech(InnerSphere, Standard, Some(3063), None),
            ArmorKind::Reactive => TechAdvancement::both(Advanced, 3081, 3065),
            ArmorKind::Reflective => TechAdvancement::both(Advanced, 3074, 3061),
            ArmorKind::Hardened => TechAdvancement::both(Advanced, 3047, 3061),
            ArmorKind::FerroLamellor => component_tech(Clan, Advanced, None, Some(3070)),
            ArmorKind::FerroAluminum => TechAdvancement::both(Standard, 3040, 2820),
            ArmorKind::FerroCarbide => TechAdvancement::universal(Advanced, 2977),
            ArmorKind::LamellorFerroCarbide => TechAdvancement::universal(Advanced, 3109),
            ArmorKind::FerroImpervium => TechAdvancement::universal(Experimental, 3102),
            ArmorKind::BaStandard => TechAdvancement::universal(Standard, 2680),
            ArmorKind::BaAdvanced => component_tech(InnerSphere, Experimental, Some(3057), None),
            ArmorKind::BaStealthBasic => TechAdvancement::universal(Standard, 3050),
            ArmorKind::BaStealth => TechAdvancement::universal(Standard, 3057),
            ArmorKind::BaReactive => TechAdvancement::universal(Advanced, 3075),
            ArmorKind::BaReflective => TechAdvancement::universal(Advanced, 3074),
            ArmorKind::BaFireResistant => component_tech(Clan, Advanced, None, Some(3058)),
            ArmorKind::SupportVehicle => TechAdvancement::universal(Introductory, 1950),
        }
    }
}

impl fmt::Display for ArmorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Support vehicle armor tons per point by barrier rating (rows 2-10) and
/// armor tech rating (columns A-F). `None` marks combinations that cannot be built.
const SUPPORT_ARMOR_TONS_PER_POINT: [[Option<f64>; 6]; 9] = [
    [Some(0.040), Some(0.025), Some(0.016), Some(0.013), Some(0.012), Some(0.011)],
    [Some(0.060), Some(0.038), Some(0.024), Some(0.019), Some(0.017), Some(0.016)],
    [Some(0.080), Some(0.050), Some(0.032), Some(0.026), Some(0.023), Some(0.021)],
    [Some(0.100), Some(0.063), Some(0.040), Some(0.032), Some(0.028), Some(0.026)],
    [None, Some(0.075), Some(0.048), Some(0.038), Some(0.034), Some(0.032)],
    [None, Some(0.088), Some(0.056), Some(0.045), Some(0.040), Some(0.037)],
    [None, Some(0.100), Some(0.064), Some(0.051), Some(0.045), Some(0.042)],
    [None, None, Some(0.072), Some(0.057), Some(0.051), Some(0.047)],
    [None, None, Some(0.080), Some(0.063), Some(0.056), Some(0.052)],
];

/// Tons per point of barrier-rated armor, `None` when the pairing is illegal
pub fn support_armor_tons_per_point(barrier_rating: u32, rating: TechRating) -> Option<f64> {
    if !(2..=10).contains(&barrier_rating) {
        return None;
    }
    SUPPORT_ARMOR_TONS_PER_POINT[(barrier_rating - 2) as usize][rating.index()]
}

// === COCKPITS ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CockpitKind {
    Standard,
    Small,
    CommandConsole,
    Torso,
    Industrial,
    Primitive,
    Superheavy,
    Tripod,
    Interface,
    SmallCommandConsole,
    SuperheavyCommandConsole,
}

/// Critical slots a cockpit takes by location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CockpitLayout {
    pub head: u32,
    pub center_torso: u32,
    /// Per side torso
    pub side_torso: u32,
}

impl CockpitKind {
    pub fn name(self) -> &'static str {
        match self {
            CockpitKind::Standard => "Standard Cockpit",
            CockpitKind::Small => "Small Cockpit",
            CockpitKind::CommandConsole => "Command Console",
            CockpitKind::Torso => "Torso-Mounted Cockpit",
            CockpitKind::Industrial => "Industrial Cockpit",
            CockpitKind::Primitive => "Primitive Cockpit",
            CockpitKind::Superheavy => "Superheavy Cockpit",
            CockpitKind::Tripod => "Tripod Cockpit",
            CockpitKind::Interface => "Interface Cockpit",
            CockpitKind::SmallCommandConsole => "Small Command Console",
            CockpitKind::SuperheavyCommandConsole => "Superheavy Command Console",
        }
    }

    /// Cockpit weight in tons; command consoles include the console
    pub fn tons(self) -> f64 {
        match self {
            CockpitKind::Small => 2.0,
            CockpitKind::Standard | CockpitKind::Industrial => 3.0,
            CockpitKind::Torso
            | CockpitKind::Superheavy
            | CockpitKind::Tripod
            | CockpitKind::Interface => 4.0,
            CockpitKind::Primitive | CockpitKind::SmallCommandConsole => 5.0,
            CockpitKind::CommandConsole => 6.0,
            CockpitKind::SuperheavyCommandConsole => 7.0,
        }
    }

    pub fn layout(self) -> CockpitLayout {
        let head_only = |head| CockpitLayout {
            head,
            center_torso: 0,
            side_torso: 0,
        };
        match self {
            CockpitKind::Small => head_only(4),
            CockpitKind::Torso => CockpitLayout {
                head: 1,
                center_torso: 2,
                side_torso: 1,
            },
            CockpitKind::CommandConsole
            | CockpitKind::Tripod
            | CockpitKind::Interface
            | CockpitKind::SmallCommandConsole
            | CockpitKind::SuperheavyCommandConsole => head_only(6),
            _ => head_only(5),
        }
    }

    pub fn is_superheavy(self) -> bool {
        matches!(
            self,
            CockpitKind::Superheavy | CockpitKind::SuperheavyCommandConsole
        )
    }

    /// Cockpits that can also be fitted to aerospace fighters
    pub fn legal_for_fighter(self) -> bool {
        matches!(
            self,
            CockpitKind::Standard
                | CockpitKind::Small
                | CockpitKind::CommandConsole
                | CockpitKind::Primitive
        )
    }

    pub fn tech(self) -> TechAdvancement {
        use TechFaction::InnerSphere;
        match self {
            CockpitKind::Standard => TechAdvancement::universal(Introductory, 2468),
            CockpitKind::Small => component_tech(InnerSphere, Standard, Some(3067), None),
            CockpitKind::CommandConsole => component_tech(InnerSphere, Advanced, Some(2631), None),
            CockpitKind::Torso => component_tech(InnerSphere, Advanced, Some(3053), None),
            CockpitKind::Industrial => TechAdvancement::universal(Introductory, 2470),
            CockpitKind::Primitive => TechAdvancement::universal(Introductory, 2430),
            CockpitKind::Superheavy => component_tech(InnerSphere, Advanced, Some(3060), None),
            CockpitKind::Tripod => component_tech(InnerSphere, Advanced, Some(2590), None),
            CockpitKind::Interface => component_tech(InnerSphere, Experimental, Some(3074), None),
            CockpitKind::SmallCommandConsole => {
                component_tech(InnerSphere, Advanced, Some(3070), None)
            }
            CockpitKind::SuperheavyCommandConsole => {
                component_tech(InnerSphere, Advanced, Some(3130), None)
            }
        }
    }
}

// === GYROS ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GyroKind {
    Standard,
    Xl,
    Compact,
    Heavy,
    Superheavy,
    None,
}

impl GyroKind {
    pub fn name(self) -> &'static str {
        match self {
            GyroKind::Standard => "Standard Gyro",
            GyroKind::Xl => "XL Gyro",
            GyroKind::Compact => "Compact Gyro",
            GyroKind::Heavy => "Heavy-Duty Gyro",
            GyroKind::Superheavy => "Superheavy Gyro",
            GyroKind::None => "No Gyro",
        }
    }

    pub fn weight_multiplier(self) -> f64 {
        match self {
            GyroKind::Standard => 1.0,
            GyroKind::Xl => 0.5,
            GyroKind::Compact => 1.5,
            GyroKind::Heavy | GyroKind::Superheavy => 2.0,
            GyroKind::None => 0.0,
        }
    }

    pub fn slots(self) -> u32 {
        match self {
            GyroKind::Standard | GyroKind::Heavy => 4,
            GyroKind::Xl => 6,
            GyroKind::Compact | GyroKind::Superheavy => 2,
            GyroKind::None => 0,
        }
    }

    pub fn tech(self) -> TechAdvancement {
        use TechFaction::InnerSphere;
        match self {
            GyroKind::Standard => TechAdvancement::universal(Introductory, 2300),
            GyroKind::Xl => component_tech(InnerSphere, Standard, Some(3067), None),
            GyroKind::Compact => component_tech(InnerSphere, Standard, Some(3068), None),
            GyroKind::Heavy => component_tech(InnerSphere, Standard, Some(3067), None),
            GyroKind::Superheavy => component_tech(InnerSphere, Advanced, Some(3060), None),
            GyroKind::None => component_tech(InnerSphere, Experimental, Some(3074), None),
        }
    }
}

// === HEAT SINKS ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatSinkKind {
    Single,
    Double,
}

impl HeatSinkKind {
    /// Catalog entry mounted for sinks beyond the engine's integral capacity
    pub fn catalog_name(self, clan: bool) -> &'static str {
        match (self, clan) {
            (HeatSinkKind::Single, _) => "Heat Sink",
            (HeatSinkKind::Double, false) => "ISDoubleHeatSink",
            (HeatSinkKind::Double, true) => "CLDoubleHeatSink",
        }
    }

    pub fn dissipation(self) -> u32 {
        match self {
            HeatSinkKind::Single => 1,
            HeatSinkKind::Double => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatSinks {
    pub kind: HeatSinkKind,
    pub count: u32,
}

impl Default for HeatSinks {
    fn default() -> Self {
        Self {
            kind: HeatSinkKind::Single,
            count: 0,
        }
    }
}

// === SUPPORT VEHICLE CHASSIS MODIFICATIONS ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChassisMod {
    Amphibious,
    Armored,
    Bicycle,
    Convertible,
    DuneBuggy,
    EnvironmentalSealing,
    ExternalPowerPickup,
    Hydrofoil,
    Monocycle,
    OffRoad,
    Omni,
    Prop,
    Snowmobile,
    Stol,
    Submersible,
    Tractor,
    Trailer,
    UltraLight,
    Vstol,
}

impl ChassisMod {
    pub fn name(self) -> &'static str {
        match self {
            ChassisMod::Amphibious => "Amphibious",
            ChassisMod::Armored => "Armored",
            ChassisMod::Bicycle => "Bicycle",
            ChassisMod::Convertible => "Convertible",
            ChassisMod::DuneBuggy => "Dune Buggy",
            ChassisMod::EnvironmentalSealing => "Environmental Sealing",
            ChassisMod::ExternalPowerPickup => "External Power Pickup",
            ChassisMod::Hydrofoil => "Hydrofoil",
            ChassisMod::Monocycle => "Monocycle",
            ChassisMod::OffRoad => "Off-Road",
            ChassisMod::Omni => "Omni",
            ChassisMod::Prop => "Prop",
            ChassisMod::Snowmobile => "Snowmobile",
            ChassisMod::Stol => "STOL",
            ChassisMod::Submersible => "Submersible",
            ChassisMod::Tractor => "Tractor",
            ChassisMod::Trailer => "Trailer",
            ChassisMod::UltraLight => "Ultra-Light",
            ChassisMod::Vstol => "VSTOL",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ChassisMod::Amphibious => 1.75,
            ChassisMod::Armored => 1.5,
            ChassisMod::Bicycle => 0.75,
            ChassisMod::Convertible => 1.1,
            ChassisMod::DuneBuggy => 1.5,
            ChassisMod::EnvironmentalSealing => 2.0,
            ChassisMod::ExternalPowerPickup => 1.1,
            ChassisMod::Hydrofoil => 1.7,
            ChassisMod::Monocycle => 1.3,
            ChassisMod::OffRoad => 1.5,
            ChassisMod::Omni => 1.0,
            ChassisMod::Prop => 1.2,
            ChassisMod::Snowmobile => 1.75,
            ChassisMod::Stol => 1.5,
            ChassisMod::Submersible => 1.8,
            ChassisMod::Tractor => 1.2,
            ChassisMod::Trailer => 0.8,
            ChassisMod::UltraLight => 0.5,
            ChassisMod::Vstol => 2.0,
        }
    }

    /// Movement modes the modification may be applied to; `None` means any
    pub fn allowed_modes(self) -> Option<&'static [MovementMode]> {
        use MovementMode::{FixedWing, Hover, Naval, Rail, Tracked, Wheeled};
        match self {
            ChassisMod::Amphibious => Some(&[Wheeled, Tracked]),
            ChassisMod::Bicycle | ChassisMod::Monocycle => Some(&[Wheeled]),
            ChassisMod::Convertible => Some(&[Wheeled, Tracked, Hover]),
            ChassisMod::DuneBuggy | ChassisMod::OffRoad => Some(&[Wheeled]),
            ChassisMod::ExternalPowerPickup => Some(&[Wheeled, Tracked, Rail]),
            ChassisMod::Hydrofoil | ChassisMod::Submersible => Some(&[Naval]),
            ChassisMod::Prop | ChassisMod::Stol | ChassisMod::Vstol => Some(&[FixedWing]),
            ChassisMod::Snowmobile => Some(&[Wheeled, Tracked]),
            ChassisMod::Tractor => Some(&[Wheeled, Tracked, Rail, Naval]),
            ChassisMod::Trailer => Some(&[Wheeled, Tracked, Rail]),
            ChassisMod::Armored
            | ChassisMod::EnvironmentalSealing
            | ChassisMod::Omni
            | ChassisMod::UltraLight => None,
        }
    }

    /// Pairs that may not be combined on one chassis
    pub const EXCLUSIVE: [(ChassisMod, ChassisMod); 4] = [
        (ChassisMod::Bicycle, ChassisMod::Monocycle),
        (ChassisMod::Stol, ChassisMod::Vstol),
        (ChassisMod::Tractor, ChassisMod::Trailer),
        (ChassisMod::Hydrofoil, ChassisMod::Submersible),
    ];
}

impl fmt::Display for ChassisMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fusion_table_lookup() {
        assert_eq!(fusion_table_weight(0), 0.0);
        assert_eq!(fusion_table_weight(200), 8.5);
        assert_eq!(fusion_table_weight(250), 12.5);
        assert_eq!(fusion_table_weight(300), 19.0);
        assert_eq!(fusion_table_weight(500), 462.5);
        // Off-step ratings use the next table row
        assert_eq!(fusion_table_weight(198), 8.5);
    }

    #[test]
    fn test_support_armor_table_gaps() {
        assert_eq!(support_armor_tons_per_point(2, TechRating::A), Some(0.040));
        assert_eq!(support_armor_tons_per_point(6, TechRating::A), None);
        assert_eq!(support_armor_tons_per_point(10, TechRating::B), None);
        assert_eq!(support_armor_tons_per_point(10, TechRating::F), Some(0.052));
        assert_eq!(support_armor_tons_per_point(11, TechRating::F), None);
    }

    #[test]
    fn test_cockpit_weights_span() {
        assert_eq!(CockpitKind::Small.tons(), 2.0);
        assert_eq!(CockpitKind::CommandConsole.tons(), 6.0);
        assert_eq!(CockpitKind::SuperheavyCommandConsole.tons(), 7.0);
    }

    #[test]
    fn test_engine_side_torso_slots() {
        assert_eq!(EngineKind::XlFusion.side_torso_slots(false, false), 3);
        assert_eq!(EngineKind::XlFusion.side_torso_slots(true, false), 2);
        assert_eq!(EngineKind::Fusion.side_torso_slots(false, false), 0);
        assert_eq!(EngineKind::Fusion.side_torso_slots(false, true), 2);
    }

    #[test]
    fn test_armor_category_legality() {
        assert!(ArmorKind::FerroFibrous.legal_for(UnitClass::Mek));
        assert!(!ArmorKind::FerroFibrous.legal_for(UnitClass::Fighter));
        assert!(ArmorKind::FerroAluminum.legal_for(UnitClass::Capital));
        assert!(ArmorKind::BaStealth.legal_for(UnitClass::BattleArmor));
        assert!(!ArmorKind::Standard.legal_for(UnitClass::BattleArmor));
    }

    #[test]
    fn test_chassis_mod_allowed_modes() {
        assert_eq!(ChassisMod::Bicycle.allowed_modes(), Some(&[MovementMode::Wheeled][..]));
        assert_eq!(
            ChassisMod::Hydrofoil.allowed_modes(),
            Some(&[MovementMode::Naval][..])
        );
        assert_eq!(ChassisMod::Armored.allowed_modes(), None);
        assert_eq!(ChassisMod::Omni.allowed_modes(), None);
    }
}
