//! One validator per unit category

pub mod aero;
pub mod arcs;
pub mod battle_armor;
pub mod capital;
pub mod handheld;
pub mod mek;
pub mod small_craft;
pub mod support_vehicle;
pub mod vehicle;

pub use aero::FighterValidator;
pub use battle_armor::BattleArmorValidator;
pub use capital::CapitalValidator;
pub use handheld::HandheldValidator;
pub use mek::MekValidator;
pub use small_craft::SmallCraftValidator;
pub use support_vehicle::SupportVehicleValidator;
pub use vehicle::VehicleValidator;
