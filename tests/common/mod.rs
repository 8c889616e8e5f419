//! Reference designs shared by the integration tests and benchmarks
//!
//! Every design here is legal and weighs exactly its declared tonnage.

#![allow(dead_code)]

use chassis_audit::catalog::catalog;
use chassis_audit::core::config::ValidationOptions;
use chassis_audit::core::types::{MovementMode, RulesLevel, TechBase, TechRating};
use chassis_audit::design::*;
use chassis_audit::validation::units::*;
use chassis_audit::validation::UnitValidator;
use LocationId::*;

fn blank(chassis: &str, tonnage: f64, movement_mode: MovementMode, details: UnitDetails) -> UnitDesign {
    UnitDesign {
        chassis: chassis.into(),
        model: String::new(),
        tonnage,
        year: 3025,
        tech_base: TechBase::InnerSphere,
        mixed_tech: false,
        rules_level: RulesLevel::Introductory,
        movement_mode,
        omni: false,
        walk_mp: 0,
        jump_mp: 0,
        engine: Engine::none(),
        armor: ArmorKind::Standard,
        structure: StructureKind::Standard,
        heat_sinks: HeatSinks::default(),
        locations: Vec::new(),
        mounts: Vec::new(),
        crew: CrewData::default(),
        bays: Vec::new(),
        failed_equipment: Vec::new(),
        details,
    }
}

/// HBK-4G, 50 tons
pub fn hunchback() -> UnitDesign {
    let mut design = blank(
        "Hunchback",
        50.0,
        MovementMode::Biped,
        UnitDetails::Mek(MekDetails {
            cockpit: CockpitKind::Standard,
            gyro: GyroKind::Standard,
            actuators: Actuators::default(),
            lam: false,
            industrial: false,
        }),
    );
    design.model = "HBK-4G".into();
    design.walk_mp = 4;
    design.engine = Engine::new(EngineKind::Fusion, 200);
    design.heat_sinks = HeatSinks {
        kind: HeatSinkKind::Single,
        count: 13,
    };
    design.locations = vec![
        Location::new(Head, 9),
        Location::new(CenterTorso, 26).with_rear(5),
        Location::new(LeftTorso, 20).with_rear(4),
        Location::new(RightTorso, 20).with_rear(4),
        Location::new(LeftArm, 16),
        Location::new(RightArm, 16),
        Location::new(LeftLeg, 20),
        Location::new(RightLeg, 20),
    ];
    design.mounts = vec![
        EquipmentMount::new("ISAC20", RightTorso),
        EquipmentMount::new("ISAC20 Ammo", LeftTorso).sized(2.0).with_slots(2),
        EquipmentMount::new("ISMediumLaser", LeftArm),
        EquipmentMount::new("ISMediumLaser", RightArm),
        EquipmentMount::new("ISSmallLaser", Head),
        EquipmentMount::new("Heat Sink", LeftLeg),
        EquipmentMount::new("Heat Sink", LeftLeg),
        EquipmentMount::new("Heat Sink", RightLeg),
        EquipmentMount::new("Heat Sink", RightLeg),
        EquipmentMount::new("Heat Sink", LeftTorso),
    ];
    design
}

/// 50 ton tracked tank with a turret AC/10
pub fn tank() -> UnitDesign {
    let mut design = blank(
        "Test Tank",
        50.0,
        MovementMode::Tracked,
        UnitDetails::Vehicle(VehicleDetails::default()),
    );
    design.walk_mp = 4;
    design.engine = Engine::new(EngineKind::Ice, 200);
    design.locations = vec![
        Location::new(Front, 40),
        Location::new(LeftSide, 30),
        Location::new(RightSide, 30),
        Location::new(Rear, 20),
        Location::new(Turret, 24),
    ];
    design.mounts = vec![
        EquipmentMount::new("ISAC10", Turret),
        EquipmentMount::new("ISMachineGun", Front),
        EquipmentMount::new("ISAC10 Ammo", Body).sized(2.0),
        EquipmentMount::new("ISMG Ammo", Body).sized(0.5),
    ];
    design.crew.crew = 4;
    design
}

/// 40 ton wheeled cargo hauler with a 9 item-slot budget, 5 of them used
pub fn hauler() -> UnitDesign {
    let mut design = blank(
        "Hauler",
        40.0,
        MovementMode::Wheeled,
        UnitDetails::SupportVehicle(SupportVehicleDetails {
            structural_tech: TechRating::D,
            engine_tech: TechRating::D,
            armor_tech: TechRating::D,
            barrier_rating: 6,
            chassis_mods: Vec::new(),
            fuel_tons: 0.0,
        }),
    );
    design.walk_mp = 4;
    design.engine = Engine::new(EngineKind::Ice, 0);
    design.armor = ArmorKind::SupportVehicle;
    design.locations = vec![
        Location::new(Front, 30),
        Location::new(LeftSide, 25),
        Location::new(RightSide, 25),
        Location::new(Rear, 20),
    ];
    design.mounts = vec![
        EquipmentMount::new("ISMachineGun", Front),
        EquipmentMount::new("ISMachineGun", Front),
        EquipmentMount::new("ISMG Ammo", Body).sized(0.5),
        EquipmentMount::new("Cargo", Body).sized(14.5),
    ];
    design.crew.crew = 2;
    design
}

/// 50 ton aerospace fighter with mirrored wing lasers
pub fn fighter() -> UnitDesign {
    let mut design = blank(
        "Test Fighter",
        50.0,
        MovementMode::Aerodyne,
        UnitDetails::Fighter(FighterDetails {
            conventional: false,
            cockpit: CockpitKind::Standard,
            fuel_tons: 5.0,
            structural_integrity: 6,
        }),
    );
    design.walk_mp = 6;
    design.engine = Engine::new(EngineKind::Fusion, 200);
    design.heat_sinks = HeatSinks {
        kind: HeatSinkKind::Single,
        count: 10,
    };
    design.locations = vec![
        Location::new(Nose, 50),
        Location::new(LeftWing, 36),
        Location::new(RightWing, 36),
        Location::new(Aft, 30),
        Location::new(Fuselage, 0),
    ];
    design.mounts = vec![
        EquipmentMount::new("ISLRM20", Nose),
        EquipmentMount::new("ISMediumLaser", Nose),
        EquipmentMount::new("ISMediumLaser", Nose),
        EquipmentMount::new("ISLargeLaser", LeftWing),
        EquipmentMount::new("ISLargeLaser", RightWing),
        EquipmentMount::new("ISMediumLaser", Aft),
        EquipmentMount::new("ISLRM20 Ammo", Fuselage).sized(1.0),
    ];
    design
}

/// 100,000 ton JumpShip with one nose AC/10 bay
pub fn jumpship() -> UnitDesign {
    let mut design = blank(
        "Test JumpShip",
        100_000.0,
        MovementMode::StationKeeping,
        UnitDetails::Capital(CapitalDetails {
            class: CapitalClass::JumpShip,
            fuel_tons: 357.0,
            structural_integrity: 1,
            kf_drive: true,
            lithium_fusion_battery: false,
            jump_sail: true,
            docking_hardpoints: 1,
            grav_decks: Vec::new(),
            weapon_bays: vec![WeaponBay {
                name: "Nose AC/10 Bay".into(),
                location: Nose,
                weapons: vec![0, 1],
                ammo: vec![2],
            }],
            primitive: false,
        }),
    );
    design.engine = Engine::new(EngineKind::Fusion, 0);
    design.heat_sinks = HeatSinks {
        kind: HeatSinkKind::Single,
        count: 39,
    };
    design.locations = vec![
        Location::new(Nose, 9),
        Location::new(LeftFront, 8),
        Location::new(RightFront, 8),
        Location::new(LeftAft, 8),
        Location::new(RightAft, 8),
        Location::new(Aft, 8),
    ];
    design.mounts = vec![
        EquipmentMount::new("ISAC10", Nose),
        EquipmentMount::new("ISAC10", Nose),
        EquipmentMount::new("ISAC10 Ammo", Hull).sized(2.0),
    ];
    design.crew = CrewData {
        crew: 9,
        passengers: 0,
        quarters: vec![Quarters {
            kind: QuartersKind::Crew,
            capacity: 9,
        }],
    };
    design.bays = vec![TransportBay {
        kind: BayKind::Cargo,
        capacity: 2000.0,
        doors: 1,
    }];
    design
}

/// Four medium suits of 940 kg each
pub fn squad() -> UnitDesign {
    let mut design = blank(
        "Test Suit",
        0.94,
        MovementMode::Jump,
        UnitDetails::BattleArmor(BattleArmorDetails {
            weight_class: BaWeightClass::Medium,
            chassis: BaChassis::Humanoid,
            troopers: 4,
        }),
    );
    design.year = 3067;
    design.rules_level = RulesLevel::Standard;
    design.walk_mp = 1;
    design.jump_mp = 3;
    design.armor = ArmorKind::BaStandard;
    design.locations = vec![Location::new(Body, 8)];
    design.mounts = vec![
        EquipmentMount::new("BABattleClaw", LeftArm),
        EquipmentMount::new("BABasicManipulator", RightArm),
        EquipmentMount::new("BASmallLaser", Body),
    ];
    design
}

/// Every reference design
pub fn all() -> Vec<UnitDesign> {
    vec![hunchback(), tank(), hauler(), fighter(), jumpship(), squad()]
}

/// Swap every left location for its right twin
pub fn mirrored(design: &UnitDesign) -> UnitDesign {
    let mut mirrored = design.clone();
    let flip = |id: LocationId| id.mirror().unwrap_or(id);
    for location in &mut mirrored.locations {
        location.id = flip(location.id);
    }
    for mount in &mut mirrored.mounts {
        mount.location = flip(mount.location);
        mount.secondary_location = mount.secondary_location.map(flip);
    }
    mirrored
}

/// Run `f` against the category validator for `design`
pub fn with_validator<R>(
    design: &UnitDesign,
    options: &ValidationOptions,
    f: impl FnOnce(&dyn UnitValidator) -> R,
) -> R {
    let catalog = catalog();
    match &design.details {
        UnitDetails::Mek(d) => f(&MekValidator::new(design, d, options, catalog)),
        UnitDetails::Vehicle(d) => f(&VehicleValidator::new(design, d, options, catalog)),
        UnitDetails::SupportVehicle(d) => f(&SupportVehicleValidator::new(design, d, options, catalog)),
        UnitDetails::Fighter(d) => f(&FighterValidator::new(design, d, options, catalog)),
        UnitDetails::SmallCraft(d) => f(&SmallCraftValidator::new(design, d, options, catalog)),
        UnitDetails::Capital(d) => f(&CapitalValidator::new(design, d, options, catalog)),
        UnitDetails::BattleArmor(d) => f(&BattleArmorValidator::new(design, d, options, catalog)),
        UnitDetails::Handheld(d) => f(&HandheldValidator::new(design, d, options, catalog)),
        UnitDetails::Unsupported { kind } => panic!("no validator for {}", kind),
    }
}
