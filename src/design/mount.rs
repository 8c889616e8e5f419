//! Placed equipment

use super::location::LocationId;
use serde::{Deserialize, Serialize};

fn default_size() -> f64 {
    1.0
}

/// One item placed on a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentMount {
    /// Catalog internal name
    pub equipment: String,
    pub location: LocationId,
    /// Second location of a split mount
    #[serde(default)]
    pub secondary_location: Option<LocationId>,
    /// Slots occupied in the primary location; the catalog value when unset
    #[serde(default)]
    pub slots: Option<u32>,
    /// Slots occupied in the secondary location
    #[serde(default)]
    pub secondary_slots: u32,
    /// Variable size: ammo tons, cargo capacity, capital missiles carried
    #[serde(default = "default_size")]
    pub size: f64,
    /// Index of the mount this one serves (ammo to weapon, fire control to launcher)
    #[serde(default)]
    pub linked: Option<usize>,
    #[serde(default)]
    pub rear_mounted: bool,
    #[serde(default)]
    pub omni_pod: bool,
    #[serde(default)]
    pub one_shot: bool,
    #[serde(default)]
    pub armored: bool,
    /// Powered armor trooper carrying the item; squad-wide when unset
    #[serde(default)]
    pub trooper: Option<u8>,
    /// Loaded shots when fewer than the catalog capacity
    #[serde(default)]
    pub shots: Option<u32>,
}

impl EquipmentMount {
    pub fn new(equipment: impl Into<String>, location: LocationId) -> Self {
        Self {
            equipment: equipment.into(),
            location,
            secondary_location: None,
            slots: None,
            secondary_slots: 0,
            size: 1.0,
            linked: None,
            rear_mounted: false,
            omni_pod: false,
            one_shot: false,
            armored: false,
            trooper: None,
            shots: None,
        }
    }

    pub fn sized(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_slots(mut self, slots: u32) -> Self {
        self.slots = Some(slots);
        self
    }

    pub fn linked_to(mut self, index: usize) -> Self {
        self.linked = Some(index);
        self
    }

    pub fn split(mut self, secondary: LocationId, secondary_slots: u32) -> Self {
        self.secondary_location = Some(secondary);
        self.secondary_slots = secondary_slots;
        self
    }

    pub fn rear(mut self) -> Self {
        self.rear_mounted = true;
        self
    }

    pub fn pod(mut self) -> Self {
        self.omni_pod = true;
        self
    }

    pub fn for_trooper(mut self, trooper: u8) -> Self {
        self.trooper = Some(trooper);
        self
    }

    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self
    }

    pub fn is_split(&self) -> bool {
        self.secondary_location.is_some()
    }

    /// Whether the mount occupies the given location
    pub fn occupies(&self, location: LocationId) -> bool {
        self.location == location || self.secondary_location == Some(location)
    }
}
