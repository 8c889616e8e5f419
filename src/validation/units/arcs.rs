//! Firing-arc helpers shared by the aerospace categories
//!
//! Slot costs of special armor, mirrored weapon loads and weapon bay
//! accounting.

use crate::catalog::{AmmoType, EquipmentFlag as F};
use crate::design::{LocationId, WeaponBay};
use crate::validation::base::BaseValidator;
use crate::validation::report::Report;
use std::collections::BTreeMap;

/// Engagements of ammunition a bay must carry per weapon
pub const BAY_ENGAGEMENTS: u32 = 10;

/// Slots one arc loses to armor that costs `armor_slots` in total
///
/// The cost is spread over the arcs in order, so `arc_index` 0 pays first.
pub fn armor_slot_cost(arc_index: u32, armor_slots: u32) -> u32 {
    if armor_slots <= arc_index {
        0
    } else {
        (armor_slots - arc_index).div_ceil(4)
    }
}

/// Weapon counts per internal name in one location
fn weapon_load(base: &BaseValidator<'_>, location: LocationId) -> BTreeMap<&'static str, u32> {
    let mut load = BTreeMap::new();
    for (_, mount, eq) in base.weapons() {
        if mount.location == location {
            *load.entry(eq.internal_name).or_insert(0) += 1;
        }
    }
    load
}

/// Paired arcs must carry the same weapons in the same numbers
pub fn correct_mirrored_arcs(
    base: &BaseValidator<'_>,
    left: LocationId,
    right: LocationId,
    report: &mut Report,
) -> bool {
    let left_load = weapon_load(base, left);
    let right_load = weapon_load(base, right);
    let mut ok = true;
    let names: Vec<&str> = left_load
        .keys()
        .chain(right_load.keys())
        .copied()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    for name in names {
        let l = left_load.get(name).copied().unwrap_or(0);
        let r = right_load.get(name).copied().unwrap_or(0);
        if l != r {
            let display = base.catalog.get(name).map(|eq| eq.name).unwrap_or(name);
            ok = report.fail(format!(
                "{} must mirror {}: {} {} against {}",
                left, right, display, l, r
            ));
        }
    }
    ok
}

/// Bay composition and ammunition coverage
///
/// Every bay needs at least one weapon in its own location, and the ammunition
/// linked to the bay must cover [`BAY_ENGAGEMENTS`] engagements per weapon
/// for every ammunition type its weapons fire.
pub fn correct_weapon_bays(base: &BaseValidator<'_>, bays: &[WeaponBay], report: &mut Report) -> bool {
    let mounts = &base.design.mounts;
    let mut ok = true;

    for bay in bays {
        if bay.weapons.is_empty() {
            ok = report.fail(format!("{} contains no weapons", bay.name));
            continue;
        }

        let mut needed: BTreeMap<AmmoType, u32> = BTreeMap::new();
        for &idx in &bay.weapons {
            let weapon = mounts.get(idx).and_then(|mount| {
                base.equipment(mount)
                    .filter(|eq| eq.is_weapon())
                    .map(|eq| (mount, eq))
            });
            let Some((mount, eq)) = weapon else {
                ok = report.fail(format!(
                    "{} references mount {}, which is not a weapon",
                    bay.name, idx
                ));
                continue;
            };
            if mount.location != bay.location {
                ok = report.fail(format!(
                    "{} in {} is mounted outside the bay's arc ({})",
                    eq.name, bay.name, bay.location
                ));
            }
            if let Some(ammo) = eq.weapon_stats().and_then(|stats| stats.ammo) {
                *needed.entry(ammo).or_insert(0) +=
                    BAY_ENGAGEMENTS * ammo.family.engagement_multiplier();
            }
        }

        let mut carried: BTreeMap<AmmoType, u32> = BTreeMap::new();
        for &idx in &bay.ammo {
            let ammo = mounts
                .get(idx)
                .and_then(|mount| base.equipment(mount).and_then(|eq| eq.ammo_stats()).map(|s| (mount, s)));
            let Some((mount, stats)) = ammo else {
                ok = report.fail(format!(
                    "{} references mount {}, which is not ammunition",
                    bay.name, idx
                ));
                continue;
            };
            let shots = mount
                .shots
                .unwrap_or_else(|| (mount.size * f64::from(stats.shots_per_unit)).floor() as u32);
            *carried.entry(stats.ammo).or_insert(0) += shots;
        }

        for (ammo, required) in needed {
            let shots = carried.get(&ammo).copied().unwrap_or(0);
            if shots < required {
                ok = report.fail(format!(
                    "{}: {} shots of {} ammunition, {} required",
                    bay.name,
                    shots,
                    ammo.family.name(),
                    required
                ));
            }
        }
    }

    for (idx, _, eq) in base.weapons() {
        if !bays.iter().any(|bay| bay.weapons.contains(&idx)) {
            ok = report.fail(format!("{} is not assigned to a weapon bay", eq.name));
        }
    }
    ok
}

/// Weapon slots used in one arc: bays count once, loose weapons and arc-slot systems once each
pub fn arc_slots_used(base: &BaseValidator<'_>, bays: &[WeaponBay], location: LocationId) -> u32 {
    let bay_slots = bays.iter().filter(|bay| bay.location == location).count() as u32;
    let loose = base
        .resolved()
        .filter(|(idx, mount, eq)| {
            mount.location == location
                && (eq.is_weapon() || eq.has_flag(F::ArcSlot))
                && !bays.iter().any(|bay| bay.weapons.contains(idx))
        })
        .count() as u32;
    bay_slots + loose
}

/// Weapon heat of the hottest arc; large craft only fire one arc's worth at a time
pub fn hottest_arc_heat(base: &BaseValidator<'_>, arcs: &[LocationId]) -> (LocationId, u32) {
    arcs.iter()
        .map(|arc| {
            let heat = base
                .weapons()
                .filter(|(_, mount, _)| mount.location == *arc)
                .filter_map(|(_, _, eq)| eq.weapon_stats().map(|stats| stats.heat))
                .sum();
            (*arc, heat)
        })
        .fold((LocationId::Hull, 0), |best, arc| if arc.1 > best.1 { arc } else { best })
}

/// Total bay doors against a hull limit
pub fn correct_bay_doors(base: &BaseValidator<'_>, limit: u32, report: &mut Report) -> bool {
    let doors: u32 = base.design.bays.iter().map(|bay| bay.doors).sum();
    if doors > limit {
        return report.fail(format!("Bay doors: {} exceeds the limit of {}", doors, limit));
    }
    true
}
