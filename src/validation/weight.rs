//! Weight categories, breakdowns and the declared-weight check

use super::report::Report;
use crate::core::config::ValidationOptions;
use crate::core::rounding::Granularity;
use serde::Serialize;
use std::fmt;

const WEIGHT_EPSILON: f64 = 1e-6;

/// Named slice of a design's total weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeightCategory {
    Engine,
    Structure,
    Controls,
    Gyro,
    HeatSinks,
    Armor,
    Misc,
    Weapons,
    Ammo,
    CarryingCapacity,
    ArmoredComponents,
    Turret,
    Lift,
    PowerAmplifiers,
    Fuel,
    DriveCore,
    JumpSail,
    Manipulators,
    Crew,
}

impl WeightCategory {
    pub fn label(self) -> &'static str {
        match self {
            WeightCategory::Engine => "Engine",
            WeightCategory::Structure => "Structure",
            WeightCategory::Controls => "Controls",
            WeightCategory::Gyro => "Gyro",
            WeightCategory::HeatSinks => "Heat Sinks",
            WeightCategory::Armor => "Armor",
            WeightCategory::Misc => "Equipment",
            WeightCategory::Weapons => "Weapons",
            WeightCategory::Ammo => "Ammunition",
            WeightCategory::CarryingCapacity => "Carrying Capacity",
            WeightCategory::ArmoredComponents => "Armored Components",
            WeightCategory::Turret => "Turret",
            WeightCategory::Lift => "Lift/Dive/Rotor",
            WeightCategory::PowerAmplifiers => "Power Amplifiers",
            WeightCategory::Fuel => "Fuel",
            WeightCategory::DriveCore => "Drive Core",
            WeightCategory::JumpSail => "Jump Sail",
            WeightCategory::Manipulators => "Manipulators",
            WeightCategory::Crew => "Crew",
        }
    }
}

/// Per-category weights, each already rounded on its own grid
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightBreakdown {
    entries: Vec<(WeightCategory, f64)>,
    kilogram_standard: bool,
}

impl WeightBreakdown {
    pub fn new(kilogram_standard: bool) -> Self {
        Self {
            entries: Vec::new(),
            kilogram_standard,
        }
    }

    /// Record a category; zero weights are kept so the breakdown lists every category checked
    pub fn add(&mut self, category: WeightCategory, tons: f64) {
        self.entries.push((category, tons));
    }

    pub fn entries(&self) -> &[(WeightCategory, f64)] {
        &self.entries
    }

    pub fn get(&self, category: WeightCategory) -> f64 {
        self.entries
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, tons)| tons)
            .sum()
    }

    /// Plain sum of the category weights
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, tons)| tons).sum()
    }

    /// Sum after the final kilogram pass and, for ton-standard units, the half-ton ceiling
    pub fn total(&self) -> f64 {
        final_rounding(self.sum(), self.kilogram_standard)
    }

    pub fn is_kilogram_standard(&self) -> bool {
        self.kilogram_standard
    }
}

impl fmt::Display for WeightBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, tons) in &self.entries {
            if self.kilogram_standard {
                writeln!(f, "{:<20}{:>10.0} kg", category.label(), tons * 1000.0)?;
            } else {
                writeln!(f, "{:<20}{:>10.2} t", category.label(), tons)?;
            }
        }
        write!(f, "{:<20}{:>10.2} t", "Total", self.total())
    }
}

/// Final rounding applied to a summed weight
pub fn final_rounding(tons: f64, kilogram_standard: bool) -> f64 {
    let kg = Granularity::Kilogram.round(tons);
    if kilogram_standard {
        kg
    } else {
        Granularity::HalfTon.ceil(kg)
    }
}

/// Compare a calculated weight against the declared weight within tolerance
pub fn check_weight(
    declared: f64,
    calculated: f64,
    options: &ValidationOptions,
    report: &mut Report,
) -> bool {
    if options.show_overweight && calculated > declared + options.max_overweight + WEIGHT_EPSILON {
        return report.fail(format!(
            "Weight: {} is greater than {}",
            calculated, declared
        ));
    }
    if options.show_underweight && calculated < declared - options.max_underweight - WEIGHT_EPSILON
    {
        return report.fail(format!("Weight: {} is less than {}", calculated, declared));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance_passes() {
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(check_weight(50.0, 49.5, &options, &mut report));
        assert!(check_weight(50.0, 50.25, &options, &mut report));
        assert!(report.is_empty());
    }

    #[test]
    fn test_overweight_line() {
        let options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(!check_weight(50.0, 51.0, &options, &mut report));
        assert_eq!(report.lines(), ["Weight: 51 is greater than 50"]);
    }

    #[test]
    fn test_underweight_is_opt_in() {
        let mut options = ValidationOptions::default();
        let mut report = Report::new();
        assert!(check_weight(50.0, 45.0, &options, &mut report));

        options.show_underweight = true;
        assert!(!check_weight(50.0, 45.0, &options, &mut report));
        assert!(report.mentions("less than"));
    }

    #[test]
    fn test_breakdown_total_rounds_up() {
        let mut breakdown = WeightBreakdown::new(false);
        breakdown.add(WeightCategory::Engine, 8.5);
        breakdown.add(WeightCategory::Weapons, 3.25);
        assert_eq!(breakdown.sum(), 11.75);
        assert_eq!(breakdown.total(), 12.0);

        let mut kg = WeightBreakdown::new(true);
        kg.add(WeightCategory::Structure, 0.1755);
        assert_eq!(kg.total(), 0.176);
    }
}
