//! Reference tables for rocket engines, ignition systems, and plasma ignition.
//!
//! Every table is an ordered, read-only slice in the order the entries were
//! authored. The crate deliberately offers no lookup or filtering; consumers
//! iterate the slices themselves.

pub mod engines;
pub mod ignition;
pub mod model;
pub mod plasma;

pub use engines::{ENGINE_SOURCES, ENGINE_SPECS, ENGINES, engines};
pub use ignition::{IGNITER_TIMING, IGNITION_SYSTEMS, REAL_FAILURES};
pub use model::{
    CarrierGas, Cathode, ComparisonMetric, CryogenicEngine, Diagram, DiagramKind, EngineCycle,
    EngineProfile, EngineSource, EngineSpec, IgniterTiming, IgnitionSystem,
    PlasmaPerformanceData, RealFailure, Winner,
};
pub use plasma::{CARRIER_GASES, CATHODES, COMPARISON_METRICS, PLASMA_PERFORMANCE};

/// Borrowed view over all nine tables.
///
/// The engine slice can be swapped for a merged catalog with
/// [`Catalog::with_engines`]; the static tables are always the built-in ones.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub ignition_systems: &'a [IgnitionSystem],
    pub plasma_performance: &'a [PlasmaPerformanceData],
    pub comparison_metrics: &'a [ComparisonMetric],
    pub real_failures: &'a [RealFailure],
    pub igniter_timing: &'a [IgniterTiming],
    pub engines: &'a [CryogenicEngine],
    pub carrier_gases: &'a [CarrierGas],
    pub cathodes: &'a [Cathode],
    pub engine_specs: &'a [EngineSpec],
}

impl Catalog<'static> {
    pub fn builtin() -> Self {
        Catalog {
            ignition_systems: IGNITION_SYSTEMS,
            plasma_performance: PLASMA_PERFORMANCE,
            comparison_metrics: COMPARISON_METRICS,
            real_failures: REAL_FAILURES,
            igniter_timing: IGNITER_TIMING,
            engines: engines(),
            carrier_gases: CARRIER_GASES,
            cathodes: CATHODES,
            engine_specs: ENGINE_SPECS,
        }
    }
}

impl<'a> Catalog<'a> {
    pub fn with_engines(self, engines: &'a [CryogenicEngine]) -> Catalog<'a> {
        Catalog { engines, ..self }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use atlas_core::performance::thrust_to_weight_ratio;

    use super::*;

    fn find_engine(id: &str) -> &'static CryogenicEngine {
        engines().iter().find(|e| e.id() == id).unwrap()
    }

    #[test]
    fn every_table_is_populated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.ignition_systems.len(), 4);
        assert_eq!(catalog.plasma_performance.len(), 3);
        assert_eq!(catalog.comparison_metrics.len(), 8);
        assert_eq!(catalog.real_failures.len(), 3);
        assert_eq!(catalog.igniter_timing.len(), 7);
        assert_eq!(catalog.engines.len(), 22);
        assert_eq!(catalog.carrier_gases.len(), 8);
        assert_eq!(catalog.cathodes.len(), 9);
        assert_eq!(catalog.engine_specs.len(), 9);
    }

    #[test]
    fn engine_ratios_follow_inputs() {
        for engine in engines() {
            assert_eq!(
                engine.thrust_to_weight_ratio(),
                thrust_to_weight_ratio(engine.base_thrust_kn(), engine.dry_weight_kg()),
                "{}",
                engine.id()
            );
        }
    }

    #[test]
    fn published_ratios() {
        assert_eq!(find_engine("Raptor").thrust_to_weight_ratio(), 140);
        assert_eq!(find_engine("RD-171M").thrust_to_weight_ratio(), 85);
        assert_eq!(find_engine("F-1").thrust_to_weight_ratio(), 94);
        assert_eq!(find_engine("M1D-Vac").thrust_to_weight_ratio(), 213);
    }

    #[test]
    fn engines_preserve_authored_order() {
        let ids: Vec<&str> = engines().iter().map(|e| e.id()).collect();
        let sources: Vec<&str> = ENGINE_SOURCES.iter().map(|s| s.id).collect();
        assert_eq!(ids, sources);
        assert_eq!(ids.first(), Some(&"Raptor"));
        assert_eq!(ids.last(), Some(&"J-2X"));
    }

    #[test]
    fn repeated_access_yields_identical_tables() {
        let first = engines();
        let second = engines();
        assert!(std::ptr::eq(first, second));

        let rebuilt: Vec<CryogenicEngine> = ENGINE_SOURCES.iter().map(CryogenicEngine::from).collect();
        assert_eq!(first, rebuilt.as_slice());
    }

    #[test]
    fn comparison_winners_cover_declared_tags() {
        let seen: HashSet<Winner> = COMPARISON_METRICS.iter().map(|m| m.winner).collect();
        assert!(seen.iter().all(|w| Winner::ALL.contains(w)));
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn material_factors_are_positive_and_ids_unique() {
        let mut gas_ids = HashSet::new();
        for gas in CARRIER_GASES {
            assert!(gas.efficiency_factor > 0.0, "{}", gas.id);
            assert!(gas_ids.insert(gas.id), "duplicate carrier gas {}", gas.id);
        }
        let mut cathode_ids = HashSet::new();
        for cathode in CATHODES {
            assert!(cathode.efficiency_factor > 0.0, "{}", cathode.id);
            assert!(cathode_ids.insert(cathode.id), "duplicate cathode {}", cathode.id);
        }
    }

    #[test]
    fn engine_ids_are_unique() {
        let ids: HashSet<&str> = ENGINE_SOURCES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), ENGINE_SOURCES.len());
    }

    #[test]
    fn with_engines_replaces_only_engines() {
        let extra: Vec<CryogenicEngine> = ENGINE_SOURCES[..2].iter().map(CryogenicEngine::from).collect();
        let catalog = Catalog::builtin().with_engines(&extra);
        assert_eq!(catalog.engines.len(), 2);
        assert_eq!(catalog.cathodes.len(), CATHODES.len());
    }
}
