//! petronorm: bulk-rock composition reconciliation and CIPW norms.
//!
//! - [`composition`]: species-keyed concentration records with explicit unknowns
//! - [`reconcile`]: fill-if-unknown conversion between metals, oxides,
//!   carbonates and carbon fractions
//! - [`norm`]: CIPW normative mineral allocation

pub mod composition;
mod error;
pub mod norm;
pub mod reconcile;

pub use composition::CompositionRecord;
pub use error::PetronormError;
pub use norm::{cipw_norm, NormativeMineralAssemblage};
pub use reconcile::{ReconciliationEngine, DEFAULT_UNIT_RATIO};

/// Install the global tracing subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
