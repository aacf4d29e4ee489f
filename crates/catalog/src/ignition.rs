//! Conventional ignition systems, their field failures, and plasma igniter timing.

use crate::model::{IgniterTiming, IgnitionSystem, RealFailure};

/// Ignition systems in service today, ordered as presented.
pub const IGNITION_SYSTEMS: &[IgnitionSystem] = &[
    IgnitionSystem {
        name: "1. TEA-TEB Pyrophoric",
        how_it_works: "Triethylaluminum + Triethylborane burns instantly with oxygen.",
        activation_energy: "2800 kJ/mol",
        problems: &[
            "Limited supply (can't restart indefinitely)",
            "highly toxic",
            "pyrophoric storage hazards",
        ],
        efficiency: "83.1% of thermal baseline",
    },
    IgnitionSystem {
        name: "2. Spark Plug Electric",
        how_it_works: "High voltage spark (15 kW) heats propellants to ignition temperature.",
        activation_energy: "3200 kJ/mol",
        problems: &[
            "Corona discharge in vacuum",
            "spark plug degradation",
            "high power draw",
        ],
        efficiency: "79.2% of thermal baseline",
    },
    IgnitionSystem {
        name: "3. Laser Ignition",
        how_it_works: "Focused laser creates plasma hotspot for ignition.",
        activation_energy: "2400 kJ/mol",
        problems: &[
            "Complex optics",
            "$25M development cost",
            "optical access challenges",
        ],
        efficiency: "90.9% of thermal baseline (BEST CURRENT SYSTEM)",
    },
    IgnitionSystem {
        name: "4. Coil-on-Plug",
        how_it_works: "Combined ignition coil and spark plug eliminates high-voltage cables.",
        activation_energy: "3000 kJ/mol",
        problems: &["Still suffers vacuum issues", "60ms ignition delay"],
        efficiency: "86.7% of thermal baseline",
    },
];

pub const REAL_FAILURES: &[RealFailure] = &[
    RealFailure {
        engine: "Space Shuttle Main Engine (SSME) Development",
        period: Some("1970s-1980s"),
        problem: "Hard starts and combustion instability during development.",
        root_cause: "Uneven fuel/oxidizer mixing during ignition transient.",
        solution_adopted: "Complex spark ignition with precise timing.",
        how_plasma_helps: "Instant radical generation ensures uniform ignition from the start.",
    },
    RealFailure {
        engine: "RL-10 Upper Stage Engine",
        period: None,
        problem: "Restart failures in vacuum conditions.",
        root_cause: "Insufficient ignition energy in the harsh space environment.",
        solution_adopted: "Improved spark plug design, higher voltage.",
        how_plasma_helps: "Generates overwhelming ignition energy, works reliably in vacuum.",
    },
    RealFailure {
        engine: "BE-4 Development Issues",
        period: Some("2015-2020"),
        problem: "Ignition delays during development testing.",
        root_cause: "Methane ignition challenges, TEA-TEB supply optimization issues.",
        solution_adopted: "Refined TEA-TEB injection system.",
        how_plasma_helps: "Eliminates TEA-TEB dependency, providing unlimited and instant restarts.",
    },
];

/// Plasma igniter start-up stages. The last two rows are totals, not stages.
pub const IGNITER_TIMING: &[IgniterTiming] = &[
    IgniterTiming {
        stage: "Plasma Formation",
        duration: "0.01 ms",
        basis: "Electron avalanche",
    },
    IgniterTiming {
        stage: "O₂ Dissociation",
        duration: "0.1 ms",
        basis: "O=O bond breaking",
    },
    IgniterTiming {
        stage: "Radical Generation",
        duration: "1 ms",
        basis: "O- chemistry initiation",
    },
    IgniterTiming {
        stage: "Ignition Propagation",
        duration: "5 ms",
        basis: "Flame front spread",
    },
    IgniterTiming {
        stage: "Combustion Stabilization",
        duration: "10 ms",
        basis: "Steady burn establishment",
    },
    IgniterTiming {
        stage: "TOTAL MINIMUM TIME",
        duration: "16.1 ms",
        basis: "Sum of all processes",
    },
    IgniterTiming {
        stage: "RECOMMENDED TIME",
        duration: "50 ms",
        basis: "Proven reliable operation",
    },
];
