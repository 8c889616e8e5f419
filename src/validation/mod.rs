//! The validation engine
//!
//! `facade::validate` is the entry point. Everything below it is pure: a
//! call borrows the design, the options and the catalog, and returns a
//! verdict without touching shared state.

pub mod base;
pub mod batch;
pub mod combinations;
pub mod facade;
pub mod report;
pub mod units;
pub mod validator;
pub mod weight;

pub use batch::{validate_all, BatchSummary, Tally};
pub use facade::{validate, validate_with_catalog, ValidatorKind, Verdict};
pub use report::Report;
pub use validator::{UnitValidator, ValidationStage};
pub use weight::{WeightBreakdown, WeightCategory};
