//! Whole-collection runs
//!
//! Designs are independent, so a batch is a parallel map over `validate`
//! followed by a sequential fold into per-category tallies.

use super::facade::{validate_with_catalog, ValidatorKind, Verdict};
use crate::catalog::{catalog, EquipmentCatalog};
use crate::core::config::ValidationOptions;
use crate::core::error::Result;
use crate::design::UnitDesign;
use ahash::AHashMap;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Pass/fail counts bucketed by category
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub by_kind: AHashMap<ValidatorKind, Tally>,
    pub unclassified: usize,
    /// Display names of the designs that failed, in input order
    pub failures: Vec<String>,
}

impl BatchSummary {
    pub fn record(&mut self, name: String, verdict: &Verdict) {
        match verdict.kind {
            Some(kind) => {
                let tally = self.by_kind.entry(kind).or_default();
                if verdict.passed {
                    tally.passed += 1;
                } else {
                    tally.failed += 1;
                }
            }
            None => self.unclassified += 1,
        }
        if !verdict.passed {
            self.failures.push(name);
        }
    }

    pub fn tally(&self, kind: ValidatorKind) -> Tally {
        self.by_kind.get(&kind).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.by_kind.values().map(Tally::total).sum::<usize>() + self.unclassified
    }

    pub fn passed(&self) -> usize {
        self.by_kind.values().map(|tally| tally.passed).sum()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in ValidatorKind::ALL {
            let tally = self.tally(kind);
            if tally.total() > 0 {
                writeln!(
                    f,
                    "{:<20}{:>6} passed{:>6} failed",
                    kind.name(),
                    tally.passed,
                    tally.failed
                )?;
            }
        }
        if self.unclassified > 0 {
            writeln!(f, "{:<20}{:>6}", "Unclassified", self.unclassified)?;
        }
        write!(f, "{:<20}{:>6} of {}", "Total passed", self.passed(), self.total())
    }
}

/// Validate every design against the built-in catalog
pub fn validate_all(designs: &[UnitDesign], options: &ValidationOptions) -> (Vec<Verdict>, BatchSummary) {
    validate_all_with_catalog(designs, options, catalog())
}

pub fn validate_all_with_catalog(
    designs: &[UnitDesign],
    options: &ValidationOptions,
    catalog: &EquipmentCatalog,
) -> (Vec<Verdict>, BatchSummary) {
    // PARALLEL: each design is validated independently
    let verdicts: Vec<Verdict> = designs
        .par_iter()
        .map(|design| validate_with_catalog(design, options, catalog))
        .collect();

    let mut summary = BatchSummary::default();
    for (design, verdict) in designs.iter().zip(&verdicts) {
        summary.record(design.display_name(), verdict);
    }
    tracing::info!(
        designs = designs.len(),
        passed = summary.passed(),
        unclassified = summary.unclassified,
        "Batch validation complete"
    );
    (verdicts, summary)
}

/// Every `.json` file directly inside `dir`, sorted by path
pub fn design_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every design in a directory; files that fail to parse are returned separately
pub fn load_designs(dir: &Path) -> Result<(Vec<UnitDesign>, Vec<(PathBuf, String)>)> {
    let mut designs = Vec::new();
    let mut broken = Vec::new();
    for path in design_files(dir)? {
        match UnitDesign::load(&path) {
            Ok(design) => designs.push(design),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Skipping unreadable design");
                broken.push((path, err.to_string()));
            }
        }
    }
    Ok((designs, broken))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::UnitDetails;
    use crate::validation::units::mek::tests::hunchback;
    use crate::validation::units::vehicle::tests::tank;

    #[test]
    fn test_summary_buckets_by_category() {
        let mut overweight = hunchback();
        overweight.tonnage = 40.0;
        let mut unknown = tank();
        unknown.details = UnitDetails::Unsupported {
            kind: "Infantry".into(),
        };
        let designs = vec![hunchback(), overweight, tank(), unknown];

        let (verdicts, summary) = validate_all(&designs, &ValidationOptions::default());
        assert_eq!(verdicts.len(), 4);
        assert_eq!(summary.tally(ValidatorKind::Mek), Tally { passed: 1, failed: 1 });
        assert_eq!(summary.tally(ValidatorKind::Vehicle), Tally { passed: 1, failed: 0 });
        assert_eq!(summary.unclassified, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.failures.len(), 2);
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let designs = vec![hunchback(), tank()];
        let options = ValidationOptions::default();
        let (verdicts, _) = validate_all(&designs, &options);
        for (design, verdict) in designs.iter().zip(&verdicts) {
            assert_eq!(*verdict, crate::validation::facade::validate(design, &options));
        }
    }
}
