//! Export helpers for handing the reference tables to a presentation layer.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while writing exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Returned when a table name is not one of [`Table::ALL`].
#[derive(Debug, Error)]
#[error("unknown table `{0}`")]
pub struct UnknownTable(pub String);

/// Names of the exportable tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    IgnitionSystems,
    PlasmaPerformance,
    ComparisonMetrics,
    RealFailures,
    IgniterTiming,
    Engines,
    CarrierGases,
    Cathodes,
    EngineSpecs,
}

impl Table {
    pub const ALL: [Table; 9] = [
        Table::IgnitionSystems,
        Table::PlasmaPerformance,
        Table::ComparisonMetrics,
        Table::RealFailures,
        Table::IgniterTiming,
        Table::Engines,
        Table::CarrierGases,
        Table::Cathodes,
        Table::EngineSpecs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::IgnitionSystems => "ignition-systems",
            Table::PlasmaPerformance => "plasma-performance",
            Table::ComparisonMetrics => "comparison-metrics",
            Table::RealFailures => "real-failures",
            Table::IgniterTiming => "igniter-timing",
            Table::Engines => "engines",
            Table::CarrierGases => "carrier-gases",
            Table::Cathodes => "cathodes",
            Table::EngineSpecs => "engine-specs",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Table::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| UnknownTable(s.to_string()))
    }
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod json {
    use std::io::Write;

    use atlas_catalog::{
        Catalog, CarrierGas, Cathode, ComparisonMetric, CryogenicEngine, EngineSpec,
        IgniterTiming, IgnitionSystem, PlasmaPerformanceData, RealFailure,
    };
    use chrono::{DateTime, Utc};
    use log::debug;
    use serde::Serialize;
    use serde_json::{to_writer_pretty, Value};

    use super::{ExportError, Table};

    /// Every table in one document, keyed the way the web front-end imports them.
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Bundle<'a> {
        pub generated_at: DateTime<Utc>,
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

    impl<'a> Bundle<'a> {
        pub fn new(catalog: &Catalog<'a>, generated_at: DateTime<Utc>) -> Self {
            Bundle {
                generated_at,
                ignition_systems: catalog.ignition_systems,
                plasma_performance: catalog.plasma_performance,
                comparison_metrics: catalog.comparison_metrics,
                real_failures: catalog.real_failures,
                igniter_timing: catalog.igniter_timing,
                engines: catalog.engines,
                carrier_gases: catalog.carrier_gases,
                cathodes: catalog.cathodes,
                engine_specs: catalog.engine_specs,
            }
        }
    }

    /// Write the whole catalog as pretty-printed JSON.
    pub fn write_bundle<W: Write>(
        mut writer: W,
        catalog: &Catalog<'_>,
        generated_at: DateTime<Utc>,
    ) -> Result<(), ExportError> {
        let bundle = Bundle::new(catalog, generated_at);
        to_writer_pretty(&mut writer, &bundle)?;
        writeln!(writer)?;
        writer.flush()?;
        debug!("wrote JSON bundle with {} engines", catalog.engines.len());
        Ok(())
    }

    /// JSON value for a single table.
    pub fn table_value(catalog: &Catalog<'_>, table: Table) -> Result<Value, ExportError> {
        let value = match table {
            Table::IgnitionSystems => serde_json::to_value(catalog.ignition_systems)?,
            Table::PlasmaPerformance => serde_json::to_value(catalog.plasma_performance)?,
            Table::ComparisonMetrics => serde_json::to_value(catalog.comparison_metrics)?,
            Table::RealFailures => serde_json::to_value(catalog.real_failures)?,
            Table::IgniterTiming => serde_json::to_value(catalog.igniter_timing)?,
            Table::Engines => serde_json::to_value(catalog.engines)?,
            Table::CarrierGases => serde_json::to_value(catalog.carrier_gases)?,
            Table::Cathodes => serde_json::to_value(catalog.cathodes)?,
            Table::EngineSpecs => serde_json::to_value(catalog.engine_specs)?,
        };
        Ok(value)
    }

    /// Write one table as a pretty-printed JSON array.
    pub fn write_table<W: Write>(
        mut writer: W,
        catalog: &Catalog<'_>,
        table: Table,
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, &table_value(catalog, table)?)?;
        writeln!(writer)?;
        writer.flush()?;
        debug!("wrote JSON table {table}");
        Ok(())
    }
}

pub mod tabular {
    //! Flat CSV views. Headers are snake_case; list fields are joined with
    //! `"; "` and absent values are left empty so every row has the same width.

    use std::io::Write;

    use atlas_catalog::Catalog;
    use log::debug;
    use serde::Serialize;

    use super::{ExportError, Table};

    const LIST_SEPARATOR: &str = "; ";

    #[derive(Serialize)]
    struct IgnitionSystemRow<'a> {
        name: &'a str,
        how_it_works: &'a str,
        activation_energy: &'a str,
        problems: String,
        efficiency: &'a str,
    }

    #[derive(Serialize)]
    struct PlasmaPerformanceRow<'a> {
        fuel_system: &'a str,
        thermal_baseline: &'a str,
        plasma_pathway: &'a str,
        efficiency_improvement: &'a str,
        ignition_delay: Option<&'a str>,
        power_requirement: Option<&'a str>,
    }

    #[derive(Serialize)]
    struct ComparisonMetricRow<'a> {
        metric: &'a str,
        best_current: &'a str,
        plasma: &'a str,
        winner: &'a str,
    }

    #[derive(Serialize)]
    struct RealFailureRow<'a> {
        engine: &'a str,
        period: Option<&'a str>,
        problem: &'a str,
        root_cause: &'a str,
        solution_adopted: &'a str,
        how_plasma_helps: &'a str,
    }

    #[derive(Serialize)]
    struct IgniterTimingRow<'a> {
        stage: &'a str,
        time: &'a str,
        basis: &'a str,
    }

    #[derive(Serialize)]
    struct EngineRow<'a> {
        id: &'a str,
        name: &'a str,
        country: &'a str,
        propellants: &'a str,
        fuel: &'a str,
        oxidizer: &'a str,
        chamber_pressure_mpa: f64,
        engine_cycle: &'a str,
        base_thrust_kn: f64,
        base_isp_s: f64,
        dry_weight_kg: f64,
        thrust_to_weight_ratio: u32,
        diagram_type: &'a str,
        nozzle_ratio: f64,
    }

    #[derive(Serialize)]
    struct MaterialRow<'a> {
        id: &'a str,
        name: &'a str,
        description: &'a str,
        efficiency_factor: f64,
    }

    #[derive(Serialize)]
    struct EngineSpecRow<'a> {
        engine: &'a str,
        country: &'a str,
        propellants: &'a str,
        base_thrust: &'a str,
        enhanced_thrust: &'a str,
        thrust_gain: &'a str,
        base_isp: &'a str,
        enhanced_isp: &'a str,
        isp_gain: &'a str,
    }

    /// Write one table as CSV with a header row.
    pub fn write_table<W: Write>(
        writer: W,
        catalog: &Catalog<'_>,
        table: Table,
    ) -> Result<(), ExportError> {
        let mut out = csv::Writer::from_writer(writer);
        let rows = match table {
            Table::IgnitionSystems => {
                for s in catalog.ignition_systems {
                    out.serialize(IgnitionSystemRow {
                        name: s.name,
                        how_it_works: s.how_it_works,
                        activation_energy: s.activation_energy,
                        problems: s.problems.join(LIST_SEPARATOR),
                        efficiency: s.efficiency,
                    })?;
                }
                catalog.ignition_systems.len()
            }
            Table::PlasmaPerformance => {
                for p in catalog.plasma_performance {
                    out.serialize(PlasmaPerformanceRow {
                        fuel_system: p.fuel_system,
                        thermal_baseline: p.thermal_baseline,
                        plasma_pathway: p.plasma_pathway,
                        efficiency_improvement: p.efficiency_improvement,
                        ignition_delay: p.ignition_delay,
                        power_requirement: p.power_requirement,
                    })?;
                }
                catalog.plasma_performance.len()
            }
            Table::ComparisonMetrics => {
                for m in catalog.comparison_metrics {
                    out.serialize(ComparisonMetricRow {
                        metric: m.metric,
                        best_current: m.best_current,
                        plasma: m.plasma,
                        winner: m.winner.as_str(),
                    })?;
                }
                catalog.comparison_metrics.len()
            }
            Table::RealFailures => {
                for f in catalog.real_failures {
                    out.serialize(RealFailureRow {
                        engine: f.engine,
                        period: f.period,
                        problem: f.problem,
                        root_cause: f.root_cause,
                        solution_adopted: f.solution_adopted,
                        how_plasma_helps: f.how_plasma_helps,
                    })?;
                }
                catalog.real_failures.len()
            }
            Table::IgniterTiming => {
                for t in catalog.igniter_timing {
                    out.serialize(IgniterTimingRow {
                        stage: t.stage,
                        time: t.duration,
                        basis: t.basis,
                    })?;
                }
                catalog.igniter_timing.len()
            }
            Table::Engines => {
                for e in catalog.engines {
                    let profile = e.profile();
                    out.serialize(EngineRow {
                        id: &profile.id,
                        name: &profile.name,
                        country: &profile.country,
                        propellants: &profile.propellants,
                        fuel: &profile.fuel,
                        oxidizer: &profile.oxidizer,
                        chamber_pressure_mpa: profile.chamber_pressure_mpa,
                        engine_cycle: profile.engine_cycle.label(),
                        base_thrust_kn: e.base_thrust_kn(),
                        base_isp_s: profile.base_isp_s,
                        dry_weight_kg: e.dry_weight_kg(),
                        thrust_to_weight_ratio: e.thrust_to_weight_ratio(),
                        diagram_type: profile.diagram.kind.as_str(),
                        nozzle_ratio: profile.diagram.nozzle_ratio,
                    })?;
                }
                catalog.engines.len()
            }
            Table::CarrierGases => {
                for g in catalog.carrier_gases {
                    out.serialize(MaterialRow {
                        id: g.id,
                        name: g.name,
                        description: g.description,
                        efficiency_factor: g.efficiency_factor,
                    })?;
                }
                catalog.carrier_gases.len()
            }
            Table::Cathodes => {
                for c in catalog.cathodes {
                    out.serialize(MaterialRow {
                        id: c.id,
                        name: c.name,
                        description: c.description,
                        efficiency_factor: c.efficiency_factor,
                    })?;
                }
                catalog.cathodes.len()
            }
            Table::EngineSpecs => {
                for s in catalog.engine_specs {
                    out.serialize(EngineSpecRow {
                        engine: s.engine,
                        country: s.country,
                        propellants: s.propellants,
                        base_thrust: s.base_thrust,
                        enhanced_thrust: s.enhanced_thrust,
                        thrust_gain: s.thrust_gain,
                        base_isp: s.base_isp,
                        enhanced_isp: s.enhanced_isp,
                        isp_gain: s.isp_gain,
                    })?;
                }
                catalog.engine_specs.len()
            }
        };
        out.flush()?;
        debug!("wrote CSV table {table} ({rows} rows)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_catalog::Catalog;
    use chrono::{TimeZone, Utc};

    fn csv_lines(table: Table) -> Vec<String> {
        let mut buf = Vec::new();
        tabular::write_table(&mut buf, &Catalog::builtin(), table).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn table_names_round_trip() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>().unwrap(), table);
        }
        assert_eq!("Carrier_Gases".parse::<Table>().unwrap(), Table::CarrierGases);
        assert!("boosters".parse::<Table>().is_err());
    }

    #[test]
    fn bundle_uses_front_end_keys() {
        let mut buf = Vec::new();
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        json::write_bundle(&mut buf, &Catalog::builtin(), stamp).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["generatedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(value["engines"][0]["id"], "Raptor");
        assert_eq!(value["engines"][0]["thrustToWeightRatio"], 140);
        assert_eq!(value["comparisonMetrics"][4]["winner"], "CURRENT");
        assert_eq!(value["comparisonMetrics"][0]["yourPlasma"], "60.7% CH4/LOX");
        assert_eq!(value["ignitionSystems"][0]["problems"].as_array().unwrap().len(), 3);
        assert_eq!(value["igniterTiming"][0]["time"], "0.01 ms");
        assert_eq!(value["engineSpecs"][0]["baseISP"], "442s");
        assert!(value["plasmaPerformance"][1].get("ignitionDelay").is_none());
    }

    #[test]
    fn json_table_is_an_array() {
        let value = json::table_value(&Catalog::builtin(), Table::Cathodes).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4]["id"], "lab6");
        assert_eq!(rows[4]["efficiencyFactor"], 1.08);
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let lines = csv_lines(Table::Engines);
        assert_eq!(lines.len(), 23);
        assert!(lines[0].starts_with("id,name,country,propellants"));
        assert!(lines[0].ends_with("thrust_to_weight_ratio,diagram_type,nozzle_ratio"));
        assert!(lines[1].starts_with("Raptor,SpaceX Raptor,USA,CH4/LOX"));
        assert!(lines[1].contains(",140,staged,"));
    }

    #[test]
    fn csv_keeps_rows_rectangular_with_missing_optionals() {
        let lines = csv_lines(Table::PlasmaPerformance);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "fuel_system,thermal_baseline,plasma_pathway,efficiency_improvement,ignition_delay,power_requirement"
        );
        assert!(lines[2].ends_with("65.1%,,"));
    }

    #[test]
    fn csv_joins_problem_lists() {
        let lines = csv_lines(Table::IgnitionSystems);
        assert!(lines[4].contains("Still suffers vacuum issues; 60ms ignition delay"));
    }

    #[test]
    fn writer_for_path_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cathodes.json");
        {
            let writer = writer_for_path(&path).unwrap();
            json::write_table(writer, &Catalog::builtin(), Table::Cathodes).unwrap();
        }
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.trim_start().starts_with('['));
    }
}
