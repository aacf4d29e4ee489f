//! Supplementary engine catalogs for the Ignition Atlas.
//!
//! Built-in tables live in `atlas_catalog`. This crate reads extra engines
//! from YAML or TOML, validates the figures the ratio depends on, and appends
//! them to a copy of the built-in engine table.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use atlas_catalog::{CryogenicEngine, Diagram, DiagramKind, EngineCycle, EngineProfile};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Engine record as written in catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    pub id: String,
    pub name: String,
    pub country: String,
    pub propellants: String,
    pub fuel: String,
    pub oxidizer: String,
    pub chamber_pressure_mpa: f64,
    pub engine_cycle: EngineCycle,
    pub base_thrust_kn: f64,
    pub base_isp_s: f64,
    pub dry_weight_kg: f64,
    pub diagram: DiagramConfig,
}

/// Diagram hints in catalog files; `type` matches the JSON export.
#[derive(Debug, Deserialize, Clone)]
pub struct DiagramConfig {
    #[serde(rename = "type")]
    pub kind: DiagramKind,
    pub nozzle_ratio: f64,
}

/// Errors that can occur while loading supplementary catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("engine `{id}` is invalid: {reason}")]
    InvalidEngine { id: String, reason: String },
    #[error("engine `{0}` already exists in the catalog")]
    DuplicateEngine(String),
}

impl TryFrom<EngineConfig> for CryogenicEngine {
    type Error = ConfigError;

    fn try_from(value: EngineConfig) -> Result<Self, Self::Error> {
        let checks = [
            ("base_thrust_kn", value.base_thrust_kn),
            ("dry_weight_kg", value.dry_weight_kg),
            ("chamber_pressure_mpa", value.chamber_pressure_mpa),
            ("base_isp_s", value.base_isp_s),
            ("diagram.nozzle_ratio", value.diagram.nozzle_ratio),
        ];
        for (field, v) in checks {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::InvalidEngine {
                    id: value.id,
                    reason: format!("{field} must be positive and finite, got {v}"),
                });
            }
        }
        if value.id.trim().is_empty() {
            return Err(ConfigError::InvalidEngine {
                id: value.id,
                reason: "id must not be empty".to_string(),
            });
        }

        let profile = EngineProfile {
            id: value.id,
            name: value.name,
            country: value.country,
            propellants: value.propellants,
            fuel: value.fuel,
            oxidizer: value.oxidizer,
            chamber_pressure_mpa: value.chamber_pressure_mpa,
            engine_cycle: value.engine_cycle,
            base_isp_s: value.base_isp_s,
            diagram: Diagram {
                kind: value.diagram.kind,
                nozzle_ratio: value.diagram.nozzle_ratio,
            },
        };
        Ok(CryogenicEngine::new(profile, value.base_thrust_kn, value.dry_weight_kg))
    }
}

/// Load engine records without converting them.
pub fn load_engine_configs<P: AsRef<Path>>(path: P) -> Result<Vec<EngineConfig>, ConfigError> {
    load_records(path)
}

/// Load and validate a supplementary engine catalog.
///
/// `path` may be a YAML list, a single-record TOML file, or a directory of
/// TOML files (read in sorted order).
pub fn load_engines<P: AsRef<Path>>(path: P) -> Result<Vec<CryogenicEngine>, ConfigError> {
    let path = path.as_ref();
    let engines = load_engine_configs(path)?
        .into_iter()
        .map(CryogenicEngine::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("loaded {} engines from {}", engines.len(), path.display());
    Ok(engines)
}

/// Append `extra` after `builtin`, rejecting ids that are already present.
pub fn merge_engines(
    builtin: &[CryogenicEngine],
    extra: Vec<CryogenicEngine>,
) -> Result<Vec<CryogenicEngine>, ConfigError> {
    let mut seen: HashSet<String> = builtin.iter().map(|e| e.id().to_string()).collect();
    let mut merged = builtin.to_vec();
    for engine in extra {
        if !seen.insert(engine.id().to_string()) {
            return Err(ConfigError::DuplicateEngine(engine.id().to_string()));
        }
        merged.push(engine);
    }
    Ok(merged)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if has_extension(path, "toml") {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| has_extension(path, "toml"))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}
