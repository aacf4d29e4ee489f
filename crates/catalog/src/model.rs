//! Record types backing the reference tables.
//!
//! Static tables borrow `&'static str` literals. The engine table is the one
//! exception: its records own their strings so supplementary catalogs loaded
//! at runtime share the same type.

use std::fmt;

use atlas_core::performance::thrust_to_weight_ratio;
use serde::{Deserialize, Serialize};

/// Conventional ignition approach and its drawbacks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnitionSystem {
    pub name: &'static str,
    pub how_it_works: &'static str,
    pub activation_energy: &'static str,
    pub problems: &'static [&'static str],
    pub efficiency: &'static str,
}

/// Thermal versus plasma-assisted activation energy for a propellant pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlasmaPerformanceData {
    pub fuel_system: &'static str,
    pub thermal_baseline: &'static str,
    pub plasma_pathway: &'static str,
    pub efficiency_improvement: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignition_delay: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_requirement: Option<&'static str>,
}

/// Which side of a head-to-head comparison comes out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    Plasma,
    Tie,
    Current,
}

impl Winner {
    pub const ALL: [Winner; 3] = [Winner::Plasma, Winner::Tie, Winner::Current];

    pub fn as_str(self) -> &'static str {
        match self {
            Winner::Plasma => "PLASMA",
            Winner::Tie => "TIE",
            Winner::Current => "CURRENT",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the best-current-system versus plasma-igniter scorecard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetric {
    pub metric: &'static str,
    pub best_current: &'static str,
    #[serde(rename = "yourPlasma")]
    pub plasma: &'static str,
    pub winner: Winner,
}

/// Documented ignition problem on a flight or development engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealFailure {
    pub engine: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<&'static str>,
    pub problem: &'static str,
    pub root_cause: &'static str,
    pub solution_adopted: &'static str,
    pub how_plasma_helps: &'static str,
}

/// Stage of the plasma igniter start-up sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IgniterTiming {
    pub stage: &'static str,
    #[serde(rename = "time")]
    pub duration: &'static str,
    pub basis: &'static str,
}

/// Power-cycle architecture of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineCycle {
    #[serde(rename = "Full-Flow Staged Combustion")]
    FullFlowStagedCombustion,
    #[serde(rename = "Oxygen-Rich Staged Combustion")]
    OxygenRichStagedCombustion,
    #[serde(rename = "Staged Combustion")]
    StagedCombustion,
    #[serde(rename = "Gas-Generator")]
    GasGenerator,
    #[serde(rename = "Expander Cycle")]
    Expander,
    #[serde(rename = "Expander Bleed Cycle")]
    ExpanderBleed,
}

impl EngineCycle {
    pub fn label(self) -> &'static str {
        match self {
            EngineCycle::FullFlowStagedCombustion => "Full-Flow Staged Combustion",
            EngineCycle::OxygenRichStagedCombustion => "Oxygen-Rich Staged Combustion",
            EngineCycle::StagedCombustion => "Staged Combustion",
            EngineCycle::GasGenerator => "Gas-Generator",
            EngineCycle::Expander => "Expander Cycle",
            EngineCycle::ExpanderBleed => "Expander Bleed Cycle",
        }
    }
}

impl fmt::Display for EngineCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Schematic family used when drawing an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramKind {
    Staged,
    GasGenerator,
}

impl DiagramKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramKind::Staged => "staged",
            DiagramKind::GasGenerator => "gas-generator",
        }
    }
}

/// Drawing hints for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    #[serde(rename = "type")]
    pub kind: DiagramKind,
    pub nozzle_ratio: f64,
}

/// Literal engine row as authored in the built-in table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSource {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub propellants: &'static str,
    pub fuel: &'static str,
    pub oxidizer: &'static str,
    pub chamber_pressure_mpa: f64,
    pub engine_cycle: EngineCycle,
    pub base_thrust_kn: f64,
    pub base_isp_s: f64,
    pub dry_weight_kg: f64,
    pub diagram: Diagram,
}

/// Descriptive fields of an engine that carry no derived state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineProfile {
    pub id: String,
    pub name: String,
    pub country: String,
    pub propellants: String,
    pub fuel: String,
    pub oxidizer: String,
    #[serde(rename = "chamberPressure")]
    pub chamber_pressure_mpa: f64,
    pub engine_cycle: EngineCycle,
    #[serde(rename = "baseIsp")]
    pub base_isp_s: f64,
    pub diagram: Diagram,
}

/// Cryogenic or kerosene engine with its derived thrust-to-weight ratio.
///
/// Thrust, dry weight and the ratio are private so the ratio can never drift
/// from its inputs; the setters recompute it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryogenicEngine {
    #[serde(flatten)]
    profile: EngineProfile,
    #[serde(rename = "baseThrust")]
    base_thrust_kn: f64,
    dry_weight_kg: f64,
    thrust_to_weight_ratio: u32,
}

impl CryogenicEngine {
    pub fn new(profile: EngineProfile, base_thrust_kn: f64, dry_weight_kg: f64) -> Self {
        Self {
            profile,
            base_thrust_kn,
            dry_weight_kg,
            thrust_to_weight_ratio: thrust_to_weight_ratio(base_thrust_kn, dry_weight_kg),
        }
    }

    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn base_thrust_kn(&self) -> f64 {
        self.base_thrust_kn
    }

    pub fn dry_weight_kg(&self) -> f64 {
        self.dry_weight_kg
    }

    pub fn thrust_to_weight_ratio(&self) -> u32 {
        self.thrust_to_weight_ratio
    }

    pub fn set_base_thrust_kn(&mut self, base_thrust_kn: f64) {
        self.base_thrust_kn = base_thrust_kn;
        self.refresh_ratio();
    }

    pub fn set_dry_weight_kg(&mut self, dry_weight_kg: f64) {
        self.dry_weight_kg = dry_weight_kg;
        self.refresh_ratio();
    }

    fn refresh_ratio(&mut self) {
        self.thrust_to_weight_ratio = thrust_to_weight_ratio(self.base_thrust_kn, self.dry_weight_kg);
    }
}

impl From<&EngineSource> for CryogenicEngine {
    fn from(source: &EngineSource) -> Self {
        let profile = EngineProfile {
            id: source.id.to_string(),
            name: source.name.to_string(),
            country: source.country.to_string(),
            propellants: source.propellants.to_string(),
            fuel: source.fuel.to_string(),
            oxidizer: source.oxidizer.to_string(),
            chamber_pressure_mpa: source.chamber_pressure_mpa,
            engine_cycle: source.engine_cycle,
            base_isp_s: source.base_isp_s,
            diagram: source.diagram,
        };
        CryogenicEngine::new(profile, source.base_thrust_kn, source.dry_weight_kg)
    }
}

/// Gas fed through the igniter to seed the discharge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierGas {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub efficiency_factor: f64,
}

/// Electron-emitting electrode material.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cathode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub efficiency_factor: f64,
}

/// Baseline versus plasma-enhanced figures, quoted as display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSpec {
    pub engine: &'static str,
    pub country: &'static str,
    pub propellants: &'static str,
    pub base_thrust: &'static str,
    pub enhanced_thrust: &'static str,
    pub thrust_gain: &'static str,
    #[serde(rename = "baseISP")]
    pub base_isp: &'static str,
    #[serde(rename = "enhancedISP")]
    pub enhanced_isp: &'static str,
    pub isp_gain: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_engine() -> CryogenicEngine {
        let source = EngineSource {
            id: "test",
            name: "Test Engine",
            country: "Nowhere",
            propellants: "CH4/LOX",
            fuel: "Liquid Methane",
            oxidizer: "Liquid Oxygen",
            chamber_pressure_mpa: 10.0,
            engine_cycle: EngineCycle::GasGenerator,
            base_thrust_kn: 981.0,
            base_isp_s: 300.0,
            dry_weight_kg: 1000.0,
            diagram: Diagram {
                kind: DiagramKind::GasGenerator,
                nozzle_ratio: 1.0,
            },
        };
        CryogenicEngine::from(&source)
    }

    #[test]
    fn setters_recompute_ratio() {
        let mut engine = sample_engine();
        assert_eq!(engine.thrust_to_weight_ratio(), 100);

        engine.set_base_thrust_kn(1962.0);
        assert_eq!(engine.thrust_to_weight_ratio(), 200);

        engine.set_dry_weight_kg(4000.0);
        assert_eq!(engine.thrust_to_weight_ratio(), 50);
    }

    #[test]
    fn engine_serializes_with_display_keys() {
        let value = serde_json::to_value(sample_engine()).unwrap();
        assert_eq!(value["id"], "test");
        assert_eq!(value["baseThrust"], 981.0);
        assert_eq!(value["dryWeightKg"], 1000.0);
        assert_eq!(value["thrustToWeightRatio"], 100);
        assert_eq!(value["chamberPressure"], 10.0);
        assert_eq!(value["engineCycle"], "Gas-Generator");
        assert_eq!(value["diagram"]["type"], "gas-generator");
        assert_eq!(value["diagram"]["nozzleRatio"], 1.0);
    }

    #[test]
    fn winner_tags_match_labels() {
        for winner in Winner::ALL {
            let json = serde_json::to_string(&winner).unwrap();
            assert_eq!(json, format!("\"{}\"", winner.as_str()));
            let back: Winner = serde_json::from_str(&json).unwrap();
            assert_eq!(back, winner);
        }
    }

    #[test]
    fn engine_cycle_label_matches_serde_name() {
        let cycles = [
            EngineCycle::FullFlowStagedCombustion,
            EngineCycle::OxygenRichStagedCombustion,
            EngineCycle::StagedCombustion,
            EngineCycle::GasGenerator,
            EngineCycle::Expander,
            EngineCycle::ExpanderBleed,
        ];
        for cycle in cycles {
            let json = serde_json::to_string(&cycle).unwrap();
            assert_eq!(json, format!("\"{cycle}\""));
        }
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let failure = RealFailure {
            engine: "RL-10",
            period: None,
            problem: "p",
            root_cause: "r",
            solution_adopted: "s",
            how_plasma_helps: "h",
        };
        let value = serde_json::to_value(&failure).unwrap();
        assert!(value.get("period").is_none());
        assert_eq!(value["rootCause"], "r");
    }
}
