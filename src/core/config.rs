//! Validation options with documented defaults
//!
//! Options are immutable for the duration of one validation run. They can be
//! built in code, read from a TOML document, or installed once as the
//! process-wide default.

use crate::core::error::{AuditError, Result};
use crate::core::rounding::Granularity;
use crate::core::types::RulesLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rounding grid per weight category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingOptions {
    pub engine: Granularity,
    pub structure: Granularity,
    pub armor: Granularity,
    pub controls: Granularity,
    /// Weapons and miscellaneous equipment
    pub weapons: Granularity,
    /// Targeting computers always round to their own grid
    pub targeting_computer: Granularity,
    pub gyro: Granularity,
    pub turret: Granularity,
    /// Lift, dive and rotor equipment
    pub lift: Granularity,
    pub power_amp: Granularity,
}

impl Default for RoundingOptions {
    fn default() -> Self {
        Self {
            engine: Granularity::HalfTon,
            structure: Granularity::HalfTon,
            armor: Granularity::HalfTon,
            controls: Granularity::HalfTon,
            weapons: Granularity::Kilogram,
            targeting_computer: Granularity::Ton,
            gyro: Granularity::HalfTon,
            turret: Granularity::HalfTon,
            lift: Granularity::HalfTon,
            power_amp: Granularity::HalfTon,
        }
    }
}

/// Options for one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub rounding: RoundingOptions,

    /// How far the calculated weight may exceed the declared weight (tons)
    pub max_overweight: f64,

    /// How far the calculated weight may fall short of the declared weight (tons)
    ///
    /// Only enforced when `show_underweight` is set. Most published designs
    /// carry a little unused tonnage, so underweight is opt-in.
    pub max_underweight: f64,

    /// Report designs heavier than declared
    pub show_overweight: bool,

    /// Report designs lighter than declared
    pub show_underweight: bool,

    /// Report equipment the loader could not resolve
    pub show_failed_equipment: bool,

    /// Report components introduced after the design year
    pub show_incorrect_intro_year: bool,

    /// Years a component may post-date the design before it is flagged
    pub intro_year_margin: u16,

    /// Equipment names whose load failures are not reported
    pub ignore_failed_equipment: Vec<String>,

    /// Rules level ammunition is checked against; the design's own level when unset
    pub ammo_rules_level: Option<RulesLevel>,

    /// Skip every check and pass the design
    pub skip: bool,

    /// Append the per-category weight breakdown to every report
    pub print_weight_breakdown: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            rounding: RoundingOptions::default(),
            max_overweight: 0.25,
            max_underweight: 0.25,
            show_overweight: true,
            show_underweight: false,
            show_failed_equipment: true,
            show_incorrect_intro_year: true,
            intro_year_margin: 5,
            ignore_failed_equipment: Vec::new(),
            ammo_rules_level: None,
            skip: false,
            print_weight_breakdown: false,
        }
    }
}

impl ValidationOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: ValidationOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate options for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_overweight < 0.0 || self.max_underweight < 0.0 {
            return Err(AuditError::InvalidOptions(format!(
                "weight tolerances must be non-negative (over {}, under {})",
                self.max_overweight, self.max_underweight
            )));
        }
        if !self.max_overweight.is_finite() || !self.max_underweight.is_finite() {
            return Err(AuditError::InvalidOptions(
                "weight tolerances must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Whether a failed-to-load equipment name should be left out of the report
    pub fn ignores_failed(&self, name: &str) -> bool {
        self.ignore_failed_equipment
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(name))
    }
}

// === GLOBAL OPTIONS ACCESS ===

use std::sync::OnceLock;

static OPTIONS: OnceLock<ValidationOptions> = OnceLock::new();

/// Get the process-wide options (initializes with defaults if not set)
pub fn options() -> &'static ValidationOptions {
    OPTIONS.get_or_init(ValidationOptions::default)
}

/// Set the process-wide options (can only be called once)
///
/// Returns Err if options were already set.
pub fn set_options(options: ValidationOptions) -> std::result::Result<(), ValidationOptions> {
    OPTIONS.set(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        let options = ValidationOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.max_overweight, 0.25);
        assert!(!options.show_underweight);
        assert_eq!(options.rounding.targeting_computer, Granularity::Ton);
    }

    #[test]
    fn test_toml_overrides_selected_keys() {
        let toml = r#"
max_overweight = 0.5
show_underweight = true
ignore_failed_equipment = ["Prototype Widget"]

[rounding]
armor = "quarter_ton"
"#;
        let options = ValidationOptions::from_toml_str(toml).unwrap();
        assert_eq!(options.max_overweight, 0.5);
        assert!(options.show_underweight);
        assert_eq!(options.rounding.armor, Granularity::QuarterTon);
        // Untouched keys keep defaults
        assert_eq!(options.rounding.engine, Granularity::HalfTon);
        assert_eq!(options.intro_year_margin, 5);
        assert!(options.ignores_failed("prototype widget"));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let result = ValidationOptions::from_toml_str("max_overweight = -1.0");
        assert!(matches!(result, Err(AuditError::InvalidOptions(_))));
    }
}
