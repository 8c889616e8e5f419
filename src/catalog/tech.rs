//! Technology advancement records
//!
//! Every component (catalog equipment as well as engines, armor, structure,
//! cockpits and gyros) carries one of these. A component is legal for a
//! design when the design's rules level is at least the component's level
//! and, unless the design is mixed tech, the lineages agree.

use crate::core::types::{RulesLevel, TechBase, TechFaction};
use serde::{Deserialize, Serialize};

/// Availability dates for one lineage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactionDates {
    pub prototype: Option<u16>,
    pub production: Option<u16>,
    pub common: Option<u16>,
}

impl FactionDates {
    pub const NONE: FactionDates = FactionDates {
        prototype: None,
        production: None,
        common: None,
    };

    /// Production available from the given year
    pub const fn from(year: u16) -> Self {
        FactionDates {
            prototype: None,
            production: Some(year),
            common: None,
        }
    }

    /// Prototype in one year, production in another
    pub const fn prototype(prototype: u16, production: u16) -> Self {
        FactionDates {
            prototype: Some(prototype),
            production: Some(production),
            common: None,
        }
    }

    /// Earliest year the component exists in any form
    pub fn intro(&self) -> Option<u16> {
        match (self.prototype, self.production) {
            (Some(p), Some(q)) => Some(p.min(q)),
            (Some(p), None) => Some(p),
            (None, Some(q)) => Some(q),
            (None, None) => self.common,
        }
    }
}

/// Per-component technology record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechAdvancement {
    pub faction: TechFaction,
    pub rules_level: RulesLevel,
    pub is_dates: FactionDates,
    pub clan_dates: FactionDates,
}

impl TechAdvancement {
    /// Inner Sphere only component
    pub const fn inner_sphere(rules_level: RulesLevel, year: u16) -> Self {
        Self {
            faction: TechFaction::InnerSphere,
            rules_level,
            is_dates: FactionDates::from(year),
            clan_dates: FactionDates::NONE,
        }
    }

    /// Clan only component
    pub const fn clan(rules_level: RulesLevel, year: u16) -> Self {
        Self {
            faction: TechFaction::Clan,
            rules_level,
            is_dates: FactionDates::NONE,
            clan_dates: FactionDates::from(year),
        }
    }

    /// Component both lineages build
    pub const fn both(rules_level: RulesLevel, is_year: u16, clan_year: u16) -> Self {
        Self {
            faction: TechFaction::Both,
            rules_level,
            is_dates: FactionDates::from(is_year),
            clan_dates: FactionDates::from(clan_year),
        }
    }

    /// Component predating the lineage split
    pub const fn universal(rules_level: RulesLevel, year: u16) -> Self {
        Self::both(rules_level, year, year)
    }

    /// Whether the component is legal at the given rules level and tech base
    pub fn is_legal(&self, level: RulesLevel, base: TechBase, mixed: bool) -> bool {
        level >= self.rules_level && (mixed || self.faction.admits(base))
    }

    /// First year the design can field the component
    ///
    /// Mixed tech designs may draw on whichever lineage fielded it first.
    pub fn intro_year(&self, base: TechBase, mixed: bool) -> Option<u16> {
        let is = self.is_dates.intro();
        let clan = self.clan_dates.intro();
        if mixed {
            return match (is, clan) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        match base {
            TechBase::InnerSphere => is,
            TechBase::Clan => clan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_level_gate() {
        let tech = TechAdvancement::inner_sphere(RulesLevel::Advanced, 3050);
        assert!(!tech.is_legal(RulesLevel::Standard, TechBase::InnerSphere, false));
        assert!(tech.is_legal(RulesLevel::Advanced, TechBase::InnerSphere, false));
        assert!(tech.is_legal(RulesLevel::Experimental, TechBase::InnerSphere, false));
    }

    #[test]
    fn test_faction_gate_and_mixed_tech() {
        let tech = TechAdvancement::clan(RulesLevel::Standard, 2824);
        assert!(!tech.is_legal(RulesLevel::Standard, TechBase::InnerSphere, false));
        assert!(tech.is_legal(RulesLevel::Standard, TechBase::InnerSphere, true));
        assert!(tech.is_legal(RulesLevel::Standard, TechBase::Clan, false));
    }

    #[test]
    fn test_intro_year_by_faction() {
        let tech = TechAdvancement::both(RulesLevel::Standard, 3040, 2830);
        assert_eq!(tech.intro_year(TechBase::InnerSphere, false), Some(3040));
        assert_eq!(tech.intro_year(TechBase::Clan, false), Some(2830));
        assert_eq!(tech.intro_year(TechBase::InnerSphere, true), Some(2830));

        let is_only = TechAdvancement::inner_sphere(RulesLevel::Standard, 3050);
        assert_eq!(is_only.intro_year(TechBase::Clan, false), None);
    }

    #[test]
    fn test_prototype_precedes_production() {
        let dates = FactionDates::prototype(3035, 3050);
        assert_eq!(dates.intro(), Some(3035));
    }
}
