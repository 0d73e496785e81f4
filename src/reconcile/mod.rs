//! Composition reconciliation.
//!
//! Fills missing oxide, metal, carbonate and carbon fields of a
//! [`CompositionRecord`] from whichever equivalent fields are present.
//!
//! # Architecture
//!
//! - **Rules**: Loaded from TOML config (or embedded defaults)
//! - **Evaluation**: One ordered pass per table, fill-if-unknown, no fixpoint
//! - **Carbon**: TC/TOC/TIC triangulation with negative results left unknown
//!
//! # Example
//!
//! ```ignore
//! use petronorm::composition::CompositionRecord;
//! use petronorm::reconcile::{ReconciliationEngine, DEFAULT_UNIT_RATIO};
//!
//! let engine = ReconciliationEngine::default();
//! let mut record = CompositionRecord::standard().with("Fe", 10_000.0);
//!
//! let report = engine.reconcile(&mut record, DEFAULT_UNIT_RATIO);
//! println!("filled {} fields, Fe2O3T = {}", report.total_filled(), record.value("Fe2O3T"));
//! ```

mod engine;
mod iron;
mod rules;
mod types;

use std::sync::OnceLock;

use crate::composition::CompositionRecord;

pub use engine::{ReconciliationEngine, DEFAULT_UNIT_RATIO};
pub use iron::{convert_feo, feo_conversion, FE2O3_TO_FEO};
pub use rules::{default_rules, load_rules};
pub use types::*;

/// Shared engine over the embedded default rules.
pub fn default_engine() -> &'static ReconciliationEngine {
    static ENGINE: OnceLock<ReconciliationEngine> = OnceLock::new();
    ENGINE.get_or_init(ReconciliationEngine::default)
}

/// Copy of `record` with oxides filled from metals using the default rules.
pub fn oxide_conversion(record: &CompositionRecord, unit_ratio: f64) -> CompositionRecord {
    default_engine().oxide_conversion(record, unit_ratio)
}

/// Copy of `record` with metals filled from oxides using the default rules.
pub fn metal_conversion(record: &CompositionRecord, unit_ratio: f64) -> CompositionRecord {
    default_engine().metal_conversion(record, unit_ratio)
}

/// Copy of `record` with carbonates and carbon fractions reconciled.
pub fn carbonate_conversion(record: &CompositionRecord, unit_ratio: f64) -> CompositionRecord {
    default_engine().carbonate_conversion(record, unit_ratio)
}
