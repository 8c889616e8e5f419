//! Chassis Audit - construction-rules validator for combat unit designs
//!
//! Give it a fully resolved [`design::UnitDesign`] and a set of
//! [`core::ValidationOptions`]; it answers pass or fail with a report of
//! every rule the design breaks.

pub mod catalog;
pub mod core;
pub mod design;
pub mod validation;

pub use crate::core::{AuditError, Result, ValidationOptions};
pub use design::UnitDesign;
pub use validation::{validate, validate_all, ValidatorKind, Verdict};
