//! Reference data for rocket engines and plasma ignition.
//!
//! The member crates are re-exported here so front-ends (the table exporter,
//! a web build step) depend on a single crate.

pub use atlas_catalog as catalog;
pub use atlas_config as config;
pub use atlas_core as physics;
pub use atlas_export as export;

pub use atlas_catalog::Catalog;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
