//! CIPW normative mineralogy.
//!
//! Maps eleven major-element oxide weight percentages onto eleven
//! normative minerals under anhydrous, equilibrium assumptions.
//!
//! # Example
//!
//! ```ignore
//! use petronorm::norm::cipw_norm;
//!
//! let norm = cipw_norm(49.2, 1.8, 15.7, 2.3, 8.5, 0.17, 7.6, 11.0, 2.6, 0.4, 0.2);
//! for (mineral, wt) in norm.iter() {
//!     println!("{}: {:.2}", mineral.name(), wt);
//! }
//! ```

mod cipw;
pub mod molar;
mod types;

pub use cipw::{cipw_norm, cipw_norm_record};
pub use types::{Mineral, NormativeMineralAssemblage, OxideInput};
