pub mod config;
pub mod error;
pub mod rounding;
pub mod types;

pub use config::{RoundingOptions, ValidationOptions};
pub use error::{AuditError, Result};
pub use rounding::Granularity;
pub use types::{MovementMode, RulesLevel, TechBase, TechFaction, TechRating};
