//! Named locations on a design

use super::components::ArmorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every location any unit category can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationId {
    // Walking chassis
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    FrontLeftLeg,
    FrontRightLeg,
    CenterLeg,
    // Ground vehicles
    Front,
    LeftSide,
    RightSide,
    Rear,
    Turret,
    RearTurret,
    Rotor,
    Body,
    // Aerospace
    Nose,
    LeftWing,
    RightWing,
    Aft,
    Fuselage,
    // Large craft
    LeftFront,
    RightFront,
    LeftAft,
    RightAft,
    LeftBroadside,
    RightBroadside,
    Hull,
    // Handheld weapons
    Gun,
}

impl LocationId {
    pub fn name(self) -> &'static str {
        match self {
            LocationId::Head => "Head",
            LocationId::CenterTorso => "Center Torso",
            LocationId::LeftTorso => "Left Torso",
            LocationId::RightTorso => "Right Torso",
            LocationId::LeftArm => "Left Arm",
            LocationId::RightArm => "Right Arm",
            LocationId::LeftLeg => "Left Leg",
            LocationId::RightLeg => "Right Leg",
            LocationId::FrontLeftLeg => "Front Left Leg",
            LocationId::FrontRightLeg => "Front Right Leg",
            LocationId::CenterLeg => "Center Leg",
            LocationId::Front => "Front",
            LocationId::LeftSide => "Left Side",
            LocationId::RightSide => "Right Side",
            LocationId::Rear => "Rear",
            LocationId::Turret => "Turret",
            LocationId::RearTurret => "Rear Turret",
            LocationId::Rotor => "Rotor",
            LocationId::Body => "Body",
            LocationId::Nose => "Nose",
            LocationId::LeftWing => "Left Wing",
            LocationId::RightWing => "Right Wing",
            LocationId::Aft => "Aft",
            LocationId::Fuselage => "Fuselage",
            LocationId::LeftFront => "Left Front",
            LocationId::RightFront => "Right Front",
            LocationId::LeftAft => "Left Aft",
            LocationId::RightAft => "Right Aft",
            LocationId::LeftBroadside => "Left Broadside",
            LocationId::RightBroadside => "Right Broadside",
            LocationId::Hull => "Hull",
            LocationId::Gun => "Gun",
        }
    }

    pub fn is_torso(self) -> bool {
        matches!(
            self,
            LocationId::CenterTorso | LocationId::LeftTorso | LocationId::RightTorso
        )
    }

    pub fn is_arm(self) -> bool {
        matches!(self, LocationId::LeftArm | LocationId::RightArm)
    }

    pub fn is_leg(self) -> bool {
        matches!(
            self,
            LocationId::LeftLeg
                | LocationId::RightLeg
                | LocationId::FrontLeftLeg
                | LocationId::FrontRightLeg
                | LocationId::CenterLeg
        )
    }

    pub fn is_turret(self) -> bool {
        matches!(self, LocationId::Turret | LocationId::RearTurret)
    }

    /// The location across the unit's centerline, if any
    pub fn mirror(self) -> Option<LocationId> {
        use LocationId::*;
        match self {
            LeftTorso => Some(RightTorso),
            RightTorso => Some(LeftTorso),
            LeftArm => Some(RightArm),
            RightArm => Some(LeftArm),
            LeftLeg => Some(RightLeg),
            RightLeg => Some(LeftLeg),
            FrontLeftLeg => Some(FrontRightLeg),
            FrontRightLeg => Some(FrontLeftLeg),
            LeftSide => Some(RightSide),
            RightSide => Some(LeftSide),
            LeftWing => Some(RightWing),
            RightWing => Some(LeftWing),
            LeftFront => Some(RightFront),
            RightFront => Some(LeftFront),
            LeftAft => Some(RightAft),
            RightAft => Some(LeftAft),
            LeftBroadside => Some(RightBroadside),
            RightBroadside => Some(LeftBroadside),
            _ => None,
        }
    }

    /// Walking chassis locations an item may be split across
    pub fn adjacent_on_mek(self, other: LocationId) -> bool {
        use LocationId::*;
        let pair = |a, b| (self == a && other == b) || (self == b && other == a);
        pair(LeftTorso, CenterTorso)
            || pair(RightTorso, CenterTorso)
            || pair(LeftArm, LeftTorso)
            || pair(RightArm, RightTorso)
            || pair(LeftLeg, LeftTorso)
            || pair(RightLeg, RightTorso)
            || pair(FrontLeftLeg, LeftTorso)
            || pair(FrontRightLeg, RightTorso)
            || pair(CenterLeg, CenterTorso)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One location with its armor allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    #[serde(default)]
    pub armor: u32,
    #[serde(default)]
    pub rear_armor: u32,
    /// Armor type for patchwork designs
    #[serde(default)]
    pub armor_kind: Option<ArmorKind>,
}

impl Location {
    pub fn new(id: LocationId, armor: u32) -> Self {
        Self {
            id,
            armor,
            rear_armor: 0,
            armor_kind: None,
        }
    }

    pub fn with_rear(mut self, rear_armor: u32) -> Self {
        self.rear_armor = rear_armor;
        self
    }

    pub fn total_armor(&self) -> u32 {
        self.armor + self.rear_armor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_is_involution() {
        for id in [LocationId::LeftWing, LocationId::LeftBroadside, LocationId::RightArm] {
            assert_eq!(id.mirror().and_then(LocationId::mirror), Some(id));
        }
        assert_eq!(LocationId::CenterTorso.mirror(), None);
    }

    #[test]
    fn test_mek_adjacency() {
        assert!(LocationId::LeftArm.adjacent_on_mek(LocationId::LeftTorso));
        assert!(LocationId::CenterTorso.adjacent_on_mek(LocationId::RightTorso));
        assert!(!LocationId::LeftArm.adjacent_on_mek(LocationId::CenterTorso));
    }
}
