//! Category-independent equipment combination rules
//!
//! Each check reads the design through a [`BaseValidator`], writes zero or
//! more lines and returns whether the design passed. None of them depend on
//! another having run.

use super::base::BaseValidator;
use super::report::Report;
use crate::catalog::EquipmentFlag as F;
use ahash::AHashMap;

/// Run every generic combination check
pub fn correct_generic(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    correct_signature_systems(base, report)
        & correct_singletons(base, report)
        & correct_omni_pods(base, report)
        & correct_physical_weapons(base, report)
        & correct_fire_control(base, report)
        & correct_links(base, report)
        & correct_one_shots(base, report)
}

const SIGNATURE_SYSTEMS: [F; 3] = [F::NullSignature, F::VoidSignature, F::Chameleon];

/// At most one kind of signature-masking system
pub fn correct_signature_systems(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let present: Vec<&str> = SIGNATURE_SYSTEMS
        .iter()
        .filter_map(|flag| base.with_flag(*flag).next().map(|(_, _, eq)| eq.name))
        .collect();
    if present.len() > 1 {
        return report.fail(format!(
            "Signature systems may not be combined: {}",
            present.join(", ")
        ));
    }
    true
}

/// Items of which a unit may carry only one; spread items are one item across several mounts
pub fn correct_singletons(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for (_, _, eq) in base.with_flag(F::Singleton) {
        if eq.has_flag(F::Spreadable) {
            continue;
        }
        match counts.iter_mut().find(|(name, _)| *name == eq.name) {
            Some((_, count)) => *count += 1,
            None => counts.push((eq.name, 1)),
        }
    }
    let mut ok = true;
    for (name, count) in counts {
        if count > 1 {
            ok = report.fail(format!("Only one {} may be mounted ({} found)", name, count));
        }
    }
    ok
}

/// Pod mounts only on omni units, and never for fixed-only equipment
pub fn correct_omni_pods(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let mut ok = true;
    for (_, mount, eq) in base.resolved() {
        if !mount.omni_pod {
            continue;
        }
        if !base.design.omni {
            ok = report.fail(format!("{} is pod-mounted on a non-omni unit", eq.name));
        } else if eq.has_flag(F::OmniFixedOnly) {
            ok = report.fail(format!("{} cannot be pod-mounted", eq.name));
        }
    }
    ok
}

/// One physical weapon per location
pub fn correct_physical_weapons(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let mut per_location = AHashMap::new();
    let mut order = Vec::new();
    for (_, mount, _) in base.with_flag(F::PhysicalWeapon) {
        let count = per_location.entry(mount.location).or_insert(0usize);
        if *count == 0 {
            order.push(mount.location);
        }
        *count += 1;
    }
    let mut ok = true;
    for location in order {
        if per_location.get(&location).copied().unwrap_or(0) > 1 {
            ok = report.fail(format!("{} mounts more than one physical weapon", location));
        }
    }
    ok
}

/// Fire-control families and the launcher trait each one serves
const FIRE_CONTROL: [(F, F, &str); 3] = [
    (F::ArtemisIv, F::ArtemisCompatible, "Artemis IV"),
    (F::ArtemisV, F::ArtemisVCompatible, "Artemis V"),
    (F::Apollo, F::ApolloCompatible, "Apollo"),
];

/// One fire-control device per compatible launcher, each sharing its launcher's location
///
/// A family with no devices fitted is not checked at all: compatible
/// launchers are legal without fire control, so stripping every device
/// from a design never fails here.
pub fn correct_fire_control(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let mut ok = true;
    for (device_flag, launcher_flag, family) in FIRE_CONTROL {
        let devices: Vec<_> = base.with_flag(device_flag).collect();
        if devices.is_empty() {
            continue;
        }
        let launchers: Vec<_> = base
            .weapons()
            .filter(|(_, _, eq)| eq.has_flag(launcher_flag))
            .collect();
        if devices.len() != launchers.len() {
            ok = report.fail(format!(
                "{} fire control count ({}) does not match compatible launchers ({})",
                family,
                devices.len(),
                launchers.len()
            ));
        }
        for (_, device, _) in &devices {
            let colocated = match device.linked {
                Some(target) => launchers
                    .iter()
                    .any(|(idx, launcher, _)| *idx == target && launcher.location == device.location),
                None => launchers
                    .iter()
                    .any(|(_, launcher, _)| launcher.location == device.location),
            };
            if !colocated {
                ok = report.fail(format!(
                    "{} fire control in {} does not share a location with its launcher",
                    family, device.location
                ));
            }
        }
    }
    ok
}

/// Linked-mount references must point at another existing mount
pub fn correct_links(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let count = base.design.mounts.len();
    let mut ok = true;
    for (idx, mount) in base.design.mounts.iter().enumerate() {
        if let Some(target) = mount.linked {
            if target >= count || target == idx {
                ok = report.fail(format!(
                    "{} is linked to invalid mount {}",
                    mount.equipment, target
                ));
            }
        }
    }
    ok
}

/// One-shot mounts only for launchers built for it
pub fn correct_one_shots(base: &BaseValidator<'_>, report: &mut Report) -> bool {
    let mut ok = true;
    for (_, mount, eq) in base.resolved() {
        if mount.one_shot && !eq.has_flag(F::OneShotCapable) {
            ok = report.fail(format!("{} cannot be mounted as one-shot", eq.name));
        }
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, UnitClass};
    use crate::core::config::ValidationOptions;
    use crate::core::types::MovementMode;
    use crate::design::{EquipmentMount, LocationId, UnitDesign, UnitDetails};
    use crate::validation::base::test_support::bare_design;

    fn vehicle() -> UnitDesign {
        bare_design(50.0, MovementMode::Tracked, UnitDetails::Vehicle(Default::default()))
    }

    fn run(design: &UnitDesign, check: fn(&BaseValidator<'_>, &mut Report) -> bool) -> (bool, Report) {
        let options = ValidationOptions::default();
        let base = BaseValidator::new(design, &options, catalog(), UnitClass::Vehicle);
        let mut report = Report::new();
        let ok = check(&base, &mut report);
        (ok, report)
    }

    #[test]
    fn test_artemis_cardinality_and_colocation() {
        let mut design = vehicle();
        design.mounts = vec![
            EquipmentMount::new("ISLRM10", LocationId::Front),
            EquipmentMount::new("ISArtemisIV", LocationId::Front).linked_to(0),
            EquipmentMount::new("ISSRM6", LocationId::Turret),
            EquipmentMount::new("ISArtemisIV", LocationId::Turret).linked_to(2),
        ];
        let (ok, report) = run(&design, correct_fire_control);
        assert!(ok, "{}", report);

        let mut missing = design.clone();
        missing.mounts.pop();
        let (ok, report) = run(&missing, correct_fire_control);
        assert!(!ok);
        assert!(report.mentions("count (1) does not match compatible launchers (2)"));

        let mut moved = design.clone();
        moved.mounts[3].location = LocationId::Front;
        let (ok, report) = run(&moved, correct_fire_control);
        assert!(!ok);
        assert!(report.mentions("does not share a location"));
    }

    #[test]
    fn test_launchers_without_fire_control_are_legal() {
        let mut design = vehicle();
        design.mounts = vec![
            EquipmentMount::new("ISLRM10", LocationId::Front),
            EquipmentMount::new("ISArtemisIV", LocationId::Front).linked_to(0),
        ];
        let (ok, report) = run(&design, correct_fire_control);
        assert!(ok, "{}", report);

        design.mounts.pop();
        let (ok, report) = run(&design, correct_fire_control);
        assert!(ok, "{}", report);
        assert!(report.is_empty());
    }

    #[test]
    fn test_singletons_skip_spread_items() {
        let mut design = vehicle();
        design.mounts = vec![
            EquipmentMount::new("ISC3SlaveUnit", LocationId::Body),
            EquipmentMount::new("ISC3SlaveUnit", LocationId::Body),
        ];
        let (ok, report) = run(&design, correct_singletons);
        assert!(!ok);
        assert!(report.mentions("Only one C3 Slave Unit"));
    }

    #[test]
    fn test_pod_mounts_need_omni() {
        let mut design = vehicle();
        design.mounts = vec![EquipmentMount::new("ISMediumLaser", LocationId::Front).pod()];
        let (ok, _) = run(&design, correct_omni_pods);
        assert!(!ok);
        design.omni = true;
        let (ok, _) = run(&design, correct_omni_pods);
        assert!(ok);
    }

    #[test]
    fn test_links_must_be_in_range() {
        let mut design = vehicle();
        design.mounts = vec![EquipmentMount::new("ISAC5 Ammo", LocationId::Body).linked_to(4)];
        let (ok, report) = run(&design, correct_links);
        assert!(!ok);
        assert!(report.mentions("invalid mount 4"));
    }

    #[test]
    fn test_one_shot_needs_capable_launcher() {
        let mut design = vehicle();
        let mut laser = EquipmentMount::new("ISMediumLaser", LocationId::Front);
        laser.one_shot = true;
        let mut srm = EquipmentMount::new("ISSRM4", LocationId::Front);
        srm.one_shot = true;
        design.mounts = vec![laser, srm];
        let (ok, report) = run(&design, correct_one_shots);
        assert!(!ok);
        assert_eq!(report.len(), 1);
    }
}
