//! Bulk-rock composition records.
//!
//! A [`CompositionRecord`] maps species names (oxides, metals, carbonates
//! and carbon fractions) to concentrations, with unknown values held as
//! `None` rather than a NaN sentinel.

mod reader;
pub mod species;
mod types;

pub use reader::{read_records, records_from_json};
pub use types::CompositionRecord;

pub(crate) use types::known;
