//! Read-only equipment catalog
//!
//! Entries are looked up by internal name. The built-in catalog is built once
//! on first use and shared by every validation call without locking.

pub mod builtin;
pub mod equipment;
pub mod flags;
pub mod tech;

pub use equipment::{
    AmmoFamily, AmmoStats, AmmoType, EquipmentKind, EquipmentType, SizingContext, Slots, Tonnage,
    WeaponClass, WeaponStats,
};
pub use flags::{EquipmentFlag, EquipmentFlags, UnitClass, UnitClasses};
pub use tech::{FactionDates, TechAdvancement};

use ahash::AHashMap;
use std::sync::OnceLock;

/// Name-indexed collection of equipment types
#[derive(Debug, Clone)]
pub struct EquipmentCatalog {
    entries: Vec<EquipmentType>,
    by_name: AHashMap<String, usize>,
}

impl EquipmentCatalog {
    /// Build a catalog from entries; later duplicates replace earlier ones
    pub fn from_entries(entries: Vec<EquipmentType>) -> Self {
        let mut by_name = AHashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.internal_name.to_string(), idx).is_some() {
                tracing::warn!(name = entry.internal_name, "Duplicate catalog entry");
            }
        }
        Self { entries, by_name }
    }

    /// The built-in equipment table
    pub fn builtin() -> Self {
        let catalog = Self::from_entries(builtin::builtin_entries());
        tracing::debug!(entries = catalog.len(), "Built equipment catalog");
        catalog
    }

    pub fn get(&self, internal_name: &str) -> Option<&EquipmentType> {
        self.by_name.get(internal_name).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, internal_name: &str) -> bool {
        self.by_name.contains_key(internal_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipmentType> {
        self.entries.iter()
    }
}

// === GLOBAL CATALOG ACCESS ===

static CATALOG: OnceLock<EquipmentCatalog> = OnceLock::new();

/// The shared built-in catalog
pub fn catalog() -> &'static EquipmentCatalog {
    CATALOG.get_or_init(EquipmentCatalog::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_internal_name() {
        let catalog = catalog();
        let laser = catalog.get("ISMediumLaser").unwrap();
        assert_eq!(laser.name, "Medium Laser");
        assert!(laser.has_flag(EquipmentFlag::Energy));
        assert!(catalog.get("NoSuchThing").is_none());
    }

    #[test]
    fn test_global_catalog_is_shared() {
        let a = catalog() as *const EquipmentCatalog;
        let b = catalog() as *const EquipmentCatalog;
        assert_eq!(a, b);
        assert!(!catalog().is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = EquipmentCatalog::from_entries(vec![
            EquipmentType::misc("Widget", "Widget").tons(2.0),
        ]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Widget"));
        assert!(!catalog.contains("ISMediumLaser"));
    }
}
