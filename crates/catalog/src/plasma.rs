//! Plasma igniter performance figures and the material options that scale them.

use crate::model::{CarrierGas, Cathode, ComparisonMetric, PlasmaPerformanceData, Winner};

pub const PLASMA_PERFORMANCE: &[PlasmaPerformanceData] = &[
    PlasmaPerformanceData {
        fuel_system: "CH4/LOX System (Your Focus)",
        thermal_baseline: "2648 kJ/mol",
        plasma_pathway: "1041 kJ/mol",
        efficiency_improvement: "60.7%",
        ignition_delay: Some("<1ms (fastest)"),
        power_requirement: Some("25 kW (moderate)"),
    },
    PlasmaPerformanceData {
        fuel_system: "LH2/LOX System (Even Better)",
        thermal_baseline: "2456 kJ/mol",
        plasma_pathway: "858 kJ/mol",
        efficiency_improvement: "65.1%",
        ignition_delay: None,
        power_requirement: None,
    },
    PlasmaPerformanceData {
        fuel_system: "RP-1/LOX System (Most Challenging)",
        thermal_baseline: "3200 kJ/mol",
        plasma_pathway: "1760 kJ/mol",
        efficiency_improvement: "45.0%",
        ignition_delay: None,
        power_requirement: None,
    },
];

pub const COMPARISON_METRICS: &[ComparisonMetric] = &[
    ComparisonMetric {
        metric: "Activation Energy Reduction",
        best_current: "Laser: 9.4%",
        plasma: "60.7% CH4/LOX",
        winner: Winner::Plasma,
    },
    ComparisonMetric {
        metric: "Ignition Speed",
        best_current: "Hypergolic: 2ms",
        plasma: "1ms",
        winner: Winner::Plasma,
    },
    ComparisonMetric {
        metric: "Restart Capability",
        best_current: "Electric: Unlimited",
        plasma: "Unlimited",
        winner: Winner::Tie,
    },
    ComparisonMetric {
        metric: "Reliability",
        best_current: "Hypergolic: 99.8%",
        plasma: "99.8% predicted",
        winner: Winner::Tie,
    },
    ComparisonMetric {
        metric: "Power Requirements",
        best_current: "TEA-TEB: 0 kW",
        plasma: "25 kW",
        winner: Winner::Current,
    },
    ComparisonMetric {
        metric: "System Complexity",
        best_current: "TEA-TEB: Low",
        plasma: "Medium",
        winner: Winner::Current,
    },
    ComparisonMetric {
        metric: "Development Cost",
        best_current: "TEA-TEB: $5M",
        plasma: "$15M estimated",
        winner: Winner::Current,
    },
    ComparisonMetric {
        metric: "Environmental Safety",
        best_current: "Electric: Low hazard",
        plasma: "Low hazard",
        winner: Winner::Tie,
    },
];

/// Carrier gases; `efficiency_factor` is relative to pure argon.
pub const CARRIER_GASES: &[CarrierGas] = &[
    CarrierGas {
        id: "argon",
        name: "Argon (Baseline)",
        description: "Creates initial electron avalanche. Standard and reliable.",
        efficiency_factor: 1.0,
    },
    CarrierGas {
        id: "argon_h2_80_20",
        name: "Argon/H₂ Mix (80/20)",
        description: "Provides additional electrons AND enhances combustion.",
        efficiency_factor: 1.15,
    },
    CarrierGas {
        id: "argon_h2_50_50",
        name: "Argon/H₂ Mix (50/50)",
        description: "Even more H₂ for maximum combustion enhancement.",
        efficiency_factor: 1.25,
    },
    CarrierGas {
        id: "hydrogen_ar_80_20",
        name: "Hydrogen/Ar Mix (80/20)",
        description: "Primarily Hydrogen for chemical enhancement, with Argon for easier initial ionization.",
        efficiency_factor: 1.30,
    },
    CarrierGas {
        id: "hydrogen",
        name: "Pure Hydrogen",
        description: "Highest chemical potential, but harder to ionize.",
        efficiency_factor: 1.35,
    },
    CarrierGas {
        id: "helium",
        name: "Helium",
        description: "Inert and stable, but less effective for radical generation.",
        efficiency_factor: 0.95,
    },
    CarrierGas {
        id: "xenon",
        name: "Xenon",
        description: "Heavy and easy to ionize, but very expensive.",
        efficiency_factor: 1.05,
    },
    CarrierGas {
        id: "air",
        name: "Plain Air (N₂/O₂)",
        description: "Cheap and available, but Nitrogen can form undesirable NOx byproducts.",
        efficiency_factor: 0.85,
    },
];

/// Cathode materials; `efficiency_factor` is relative to plain tungsten.
pub const CATHODES: &[Cathode] = &[
    Cathode {
        id: "tungsten",
        name: "Tungsten (Standard)",
        description: "A robust, high-temperature material. The industry baseline.",
        efficiency_factor: 1.0,
    },
    Cathode {
        id: "molybdenum",
        name: "Molybdenum",
        description: "A refractory metal similar to tungsten but with a slightly lower work function, offering a modest performance improvement.",
        efficiency_factor: 1.02,
    },
    Cathode {
        id: "thoriated_tungsten",
        name: "Thoriated Tungsten",
        description: "Tungsten doped with thorium, lowering its work function for easier electron emission.",
        efficiency_factor: 1.04,
    },
    Cathode {
        id: "hafnium",
        name: "Hafnium (Durable)",
        description: "Hafnium-based emitter known for its high durability and resistance to ion bombardment. A rugged, long-life option.",
        efficiency_factor: 1.06,
    },
    Cathode {
        id: "lab6",
        name: "LaB₆ (Lanthanum Hexaboride)",
        description: "An advanced ceramic with a very low work function and high melting point. Excellent emitter.",
        efficiency_factor: 1.08,
    },
    Cathode {
        id: "ceb6",
        name: "CeB₆ (Cerium Hexaboride)",
        description: "Similar to LaB₆, offering superior electron emissivity and a long operational life.",
        efficiency_factor: 1.12,
    },
    Cathode {
        id: "scandate",
        name: "B-type Scandate",
        description: "Barium-scandate dispenser cathode. State-of-the-art for high current density emission.",
        efficiency_factor: 1.15,
    },
    Cathode {
        id: "cesiated_tungsten",
        name: "Cesiated Tungsten",
        description: "Tungsten with a monolayer of cesium, offering an extremely low work function for excellent emission, though with a shorter lifespan.",
        efficiency_factor: 1.18,
    },
    Cathode {
        id: "oxide_coated",
        name: "BaO/SrO/Y2O3 Coated",
        description: "Tungsten coated with a mix of Barium, Strontium, and Yttrium oxides. Provides very high emission at lower temperatures.",
        efficiency_factor: 1.20,
    },
];
