//! Engine reference table and the plasma-enhanced comparison figures.

use std::sync::LazyLock;

use log::debug;

use crate::model::{CryogenicEngine, Diagram, DiagramKind, EngineCycle, EngineSource, EngineSpec};

/// Literal engine rows. [`ENGINES`] derives the published table from these.
pub const ENGINE_SOURCES: &[EngineSource] = &[
    EngineSource {
        id: "Raptor",
        name: "SpaceX Raptor",
        country: "USA",
        propellants: "CH4/LOX",
        fuel: "Liquid Methane",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 30.0,
        engine_cycle: EngineCycle::FullFlowStagedCombustion,
        base_thrust_kn: 2200.0,
        base_isp_s: 380.0,
        dry_weight_kg: 1600.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.2,
        },
    },
    EngineSource {
        id: "BE-4",
        name: "Blue Origin BE-4",
        country: "USA",
        propellants: "CH4/LOX",
        fuel: "Liquid Methane",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 13.4,
        engine_cycle: EngineCycle::OxygenRichStagedCombustion,
        base_thrust_kn: 2400.0,
        base_isp_s: 372.0,
        dry_weight_kg: 6000.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.15,
        },
    },
    EngineSource {
        id: "SSME",
        name: "Aerojet Rocketdyne RS-25 (SSME)",
        country: "USA",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 22.6,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 2279.0,
        base_isp_s: 452.0,
        dry_weight_kg: 3500.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.5,
        },
    },
    EngineSource {
        id: "RD-180",
        name: "NPO Energomash RD-180",
        country: "Russia",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 26.7,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 4152.0,
        base_isp_s: 338.0,
        dry_weight_kg: 5480.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.0,
        },
    },
    EngineSource {
        id: "RD-171M",
        name: "NPO Energomash RD-171M",
        country: "Russia",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 24.5,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 7904.0,
        base_isp_s: 337.0,
        dry_weight_kg: 9500.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 0.9,
        },
    },
    EngineSource {
        id: "CE-20",
        name: "ISRO CE-20",
        country: "India",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 6.0,
        engine_cycle: EngineCycle::GasGenerator,
        base_thrust_kn: 200.0,
        base_isp_s: 442.0,
        dry_weight_kg: 588.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.3,
        },
    },
    EngineSource {
        id: "RL-10B-2",
        name: "Aerojet Rocketdyne RL-10B-2",
        country: "USA",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 4.4,
        engine_cycle: EngineCycle::Expander,
        base_thrust_kn: 110.0,
        base_isp_s: 466.0,
        dry_weight_kg: 277.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.6,
        },
    },
    EngineSource {
        id: "RD-0120",
        name: "KBKhA RD-0120",
        country: "Russia",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 21.8,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 2000.0,
        base_isp_s: 455.0,
        dry_weight_kg: 3450.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.4,
        },
    },
    EngineSource {
        id: "LE-5B",
        name: "MHI LE-5B",
        country: "Japan",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 3.6,
        engine_cycle: EngineCycle::ExpanderBleed,
        base_thrust_kn: 137.0,
        base_isp_s: 448.0,
        dry_weight_kg: 285.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.45,
        },
    },
    EngineSource {
        id: "F-1",
        name: "Rocketdyne F-1",
        country: "USA",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 9.7,
        engine_cycle: EngineCycle::GasGenerator,
        base_thrust_kn: 7740.0,
        base_isp_s: 304.0,
        dry_weight_kg: 8400.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 0.8,
        },
    },
    EngineSource {
        id: "M1D-Vac",
        name: "SpaceX Merlin 1D (Vac)",
        country: "USA",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 9.7,
        engine_cycle: EngineCycle::GasGenerator,
        base_thrust_kn: 981.0,
        base_isp_s: 348.0,
        dry_weight_kg: 470.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.65,
        },
    },
    EngineSource {
        id: "Vulcain-2.1",
        name: "ArianeGroup Vulcain 2.1",
        country: "Europe",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 11.7,
        engine_cycle: EngineCycle::GasGenerator,
        base_thrust_kn: 1340.0,
        base_isp_s: 432.0,
        dry_weight_kg: 2100.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.35,
        },
    },
    EngineSource {
        id: "Vinci",
        name: "ArianeGroup Vinci",
        country: "Europe",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 6.1,
        engine_cycle: EngineCycle::Expander,
        base_thrust_kn: 180.0,
        base_isp_s: 465.0,
        dry_weight_kg: 550.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.7,
        },
    },
    EngineSource {
        id: "RD-191",
        name: "NPO Energomash RD-191",
        country: "Russia",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 25.8,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 2085.0,
        base_isp_s: 337.0,
        dry_weight_kg: 2200.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.05,
        },
    },
    EngineSource {
        id: "NK-33",
        name: "Kuznetsov NK-33",
        country: "Russia",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 14.5,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 1687.0,
        base_isp_s: 331.0,
        dry_weight_kg: 1225.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.1,
        },
    },
    EngineSource {
        id: "YF-100",
        name: "CASC YF-100",
        country: "China",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 18.0,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 1200.0,
        base_isp_s: 335.0,
        dry_weight_kg: 1890.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.0,
        },
    },
    EngineSource {
        id: "YF-77",
        name: "CASC YF-77",
        country: "China",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 10.2,
        engine_cycle: EngineCycle::GasGenerator,
        base_thrust_kn: 700.0,
        base_isp_s: 438.0,
        dry_weight_kg: 1350.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.4,
        },
    },
    EngineSource {
        id: "YF-115",
        name: "CASC YF-115",
        country: "China",
        propellants: "RP-1/LOX",
        fuel: "RP-1 Kerosene",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 12.2,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 182.0,
        base_isp_s: 341.0,
        dry_weight_kg: 330.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.55,
        },
    },
    EngineSource {
        id: "LE-7A",
        name: "MHI LE-7A",
        country: "Japan",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 12.3,
        engine_cycle: EngineCycle::StagedCombustion,
        base_thrust_kn: 1098.0,
        base_isp_s: 440.0,
        dry_weight_kg: 1815.0,
        diagram: Diagram {
            kind: DiagramKind::Staged,
            nozzle_ratio: 1.4,
        },
    },
    EngineSource {
        id: "LE-9",
        name: "MHI LE-9",
        country: "Japan",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 10.0,
        engine_cycle: EngineCycle::ExpanderBleed,
        base_thrust_kn: 1471.0,
        base_isp_s: 426.0,
        dry_weight_kg: 2400.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.3,
        },
    },
    EngineSource {
        id: "BE-3U",
        name: "Blue Origin BE-3U",
        country: "USA",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 8.0,
        engine_cycle: EngineCycle::ExpanderBleed,
        base_thrust_kn: 710.0,
        base_isp_s: 450.0,
        dry_weight_kg: 1000.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.6,
        },
    },
    EngineSource {
        id: "J-2X",
        name: "Aerojet Rocketdyne J-2X",
        country: "USA",
        propellants: "LH2/LOX",
        fuel: "Liquid Hydrogen",
        oxidizer: "Liquid Oxygen",
        chamber_pressure_mpa: 15.2,
        engine_cycle: EngineCycle::GasGenerator,
        base_thrust_kn: 1310.0,
        base_isp_s: 448.0,
        dry_weight_kg: 2477.0,
        diagram: Diagram {
            kind: DiagramKind::GasGenerator,
            nozzle_ratio: 1.5,
        },
    },
];

/// Engine table with thrust-to-weight ratios filled in, built on first access.
pub static ENGINES: LazyLock<Vec<CryogenicEngine>> = LazyLock::new(|| {
    let engines: Vec<CryogenicEngine> = ENGINE_SOURCES.iter().map(CryogenicEngine::from).collect();
    debug!("built engine table with {} entries", engines.len());
    engines
});

/// Borrow the engine table.
pub fn engines() -> &'static [CryogenicEngine] {
    &ENGINES
}

// Enhanced figures are estimates carried verbatim; they are not derived from ENGINES.
pub const ENGINE_SPECS: &[EngineSpec] = &[
    EngineSpec {
        engine: "CE-20",
        country: "India (ISRO)",
        propellants: "LH₂/LOX",
        base_thrust: "200 kN",
        enhanced_thrust: "225 kN",
        thrust_gain: "+12.3%",
        base_isp: "442s",
        enhanced_isp: "465s",
        isp_gain: "+23s",
    },
    EngineSpec {
        engine: "RL-10B-2",
        country: "USA (Aerojet)",
        propellants: "LH₂/LOX",
        base_thrust: "110 kN",
        enhanced_thrust: "119 kN",
        thrust_gain: "+8.1%",
        base_isp: "466s",
        enhanced_isp: "488s",
        isp_gain: "+22s",
    },
    EngineSpec {
        engine: "SSME/RS-25",
        country: "USA (Aerojet)",
        propellants: "LH₂/LOX",
        base_thrust: "2279 kN",
        enhanced_thrust: "2831 kN",
        thrust_gain: "+24.2%",
        base_isp: "452s",
        enhanced_isp: "477s",
        isp_gain: "+25s",
    },
    EngineSpec {
        engine: "RD-0120",
        country: "Russia",
        propellants: "LH₂/LOX",
        base_thrust: "200 kN",
        enhanced_thrust: "248 kN",
        thrust_gain: "+24.2%",
        base_isp: "455s",
        enhanced_isp: "480s",
        isp_gain: "+25s",
    },
    EngineSpec {
        engine: "LE-5B",
        country: "Japan (MHI)",
        propellants: "LH₂/LOX",
        base_thrust: "137 kN",
        enhanced_thrust: "151 kN",
        thrust_gain: "+9.7%",
        base_isp: "448s",
        enhanced_isp: "470s",
        isp_gain: "+22s",
    },
    EngineSpec {
        engine: "Raptor",
        country: "USA (SpaceX)",
        propellants: "CH₄/LOX",
        base_thrust: "2200 kN",
        enhanced_thrust: "2707 kN",
        thrust_gain: "+23.0%",
        base_isp: "380s",
        enhanced_isp: "401s",
        isp_gain: "+21s",
    },
    EngineSpec {
        engine: "BE-4",
        country: "USA (Blue Origin)",
        propellants: "CH₄/LOX",
        base_thrust: "2400 kN",
        enhanced_thrust: "2861 kN",
        thrust_gain: "+19.2%",
        base_isp: "372s",
        enhanced_isp: "392s",
        isp_gain: "+20s",
    },
    EngineSpec {
        engine: "RD-180",
        country: "Russia",
        propellants: "RP-1/LOX",
        base_thrust: "4152 kN",
        enhanced_thrust: "5014 kN",
        thrust_gain: "+20.8%",
        base_isp: "338s",
        enhanced_isp: "353s",
        isp_gain: "+15s",
    },
    EngineSpec {
        engine: "RD-171M",
        country: "Russia",
        propellants: "RP-1/LOX",
        base_thrust: "7904 kN",
        enhanced_thrust: "9544 kN",
        thrust_gain: "+20.8%",
        base_isp: "337s",
        enhanced_isp: "352s",
        isp_gain: "+15s",
    },
];
