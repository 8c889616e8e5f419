//! Core type definitions shared by the catalog, the design model and every validator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Technological lineage a design is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechBase {
    InnerSphere,
    Clan,
}

impl TechBase {
    pub fn is_clan(self) -> bool {
        matches!(self, TechBase::Clan)
    }
}

impl fmt::Display for TechBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechBase::InnerSphere => write!(f, "Inner Sphere"),
            TechBase::Clan => write!(f, "Clan"),
        }
    }
}

/// Lineage a catalog component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechFaction {
    InnerSphere,
    Clan,
    /// Available to both lineages
    Both,
}

impl TechFaction {
    /// Whether a design of the given tech base may use this component without mixed tech
    pub fn admits(self, base: TechBase) -> bool {
        match self {
            TechFaction::Both => true,
            TechFaction::InnerSphere => base == TechBase::InnerSphere,
            TechFaction::Clan => base == TechBase::Clan,
        }
    }
}

impl fmt::Display for TechFaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechFaction::InnerSphere => write!(f, "Inner Sphere"),
            TechFaction::Clan => write!(f, "Clan"),
            TechFaction::Both => write!(f, "All"),
        }
    }
}

/// Ordinal rules tier gating which components a design may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RulesLevel {
    Introductory,
    Standard,
    Advanced,
    Experimental,
    Unofficial,
}

impl RulesLevel {
    pub const ALL: [RulesLevel; 5] = [
        RulesLevel::Introductory,
        RulesLevel::Standard,
        RulesLevel::Advanced,
        RulesLevel::Experimental,
        RulesLevel::Unofficial,
    ];
}

impl fmt::Display for RulesLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RulesLevel::Introductory => "Introductory",
            RulesLevel::Standard => "Standard",
            RulesLevel::Advanced => "Advanced",
            RulesLevel::Experimental => "Experimental",
            RulesLevel::Unofficial => "Unofficial",
        };
        write!(f, "{}", name)
    }
}

/// Support vehicle technology rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechRating {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl TechRating {
    /// Index into per-rating tables (A = 0)
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TechRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How a unit moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementMode {
    // Walking chassis
    Biped,
    Quad,
    Tripod,
    // Ground and naval vehicles
    Tracked,
    Wheeled,
    Hover,
    Vtol,
    Naval,
    Hydrofoil,
    Submarine,
    Wige,
    Rail,
    // Atmospheric support vehicles
    Airship,
    FixedWing,
    // Aerospace
    Aerodyne,
    Spheroid,
    StationKeeping,
    // Powered armor
    Ground,
    Jump,
    Umu,
    /// Immobile (handheld weapons, trailers without engines)
    None,
}

impl MovementMode {
    /// Modes that need a lift, rotor or dive system on combat vehicles
    pub fn needs_lift_equipment(self) -> bool {
        matches!(
            self,
            MovementMode::Hover
                | MovementMode::Vtol
                | MovementMode::Wige
                | MovementMode::Hydrofoil
                | MovementMode::Submarine
        )
    }

    pub fn is_legged(self) -> bool {
        matches!(self, MovementMode::Biped | MovementMode::Quad | MovementMode::Tripod)
    }

    /// Modes of craft that fly in space
    pub fn is_aerospace(self) -> bool {
        matches!(
            self,
            MovementMode::Aerodyne | MovementMode::Spheroid | MovementMode::StationKeeping
        )
    }

    pub fn is_naval(self) -> bool {
        matches!(
            self,
            MovementMode::Naval | MovementMode::Hydrofoil | MovementMode::Submarine
        )
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_level_ordering() {
        assert!(RulesLevel::Introductory < RulesLevel::Standard);
        assert!(RulesLevel::Standard < RulesLevel::Advanced);
        assert!(RulesLevel::Advanced < RulesLevel::Experimental);
        assert!(RulesLevel::Experimental < RulesLevel::Unofficial);
    }

    #[test]
    fn test_faction_admits() {
        assert!(TechFaction::Both.admits(TechBase::Clan));
        assert!(TechFaction::Both.admits(TechBase::InnerSphere));
        assert!(TechFaction::Clan.admits(TechBase::Clan));
        assert!(!TechFaction::Clan.admits(TechBase::InnerSphere));
        assert!(!TechFaction::InnerSphere.admits(TechBase::Clan));
    }

    #[test]
    fn test_tech_rating_index() {
        assert_eq!(TechRating::A.index(), 0);
        assert_eq!(TechRating::F.index(), 5);
    }
}
