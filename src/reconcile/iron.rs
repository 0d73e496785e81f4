//! Iron oxide speciation: collapse FeO / Fe2O3 / Fe2O3T onto total iron as FeO.

use crate::composition::{known, CompositionRecord};

const FE: f64 = 55.845;
const O: f64 = 15.999;

/// FeO per unit Fe2O3, on a per-iron basis.
pub const FE2O3_TO_FEO: f64 = (FE + O) / (FE + 1.5 * O);

/// Total iron expressed as FeO (FeOT), in wt%.
///
/// Unknown inputs are NaN. Precedence:
/// 1. `feot` if known
/// 2. `fe2o3t` converted to FeO
/// 3. `feo` plus converted `fe2o3`, where a missing term contributes zero
///
/// Returns NaN only when none of the four inputs is known.
pub fn feo_conversion(feo: f64, fe2o3: f64, feot: f64, fe2o3t: f64) -> f64 {
    feot_from(known(feo), known(fe2o3), known(feot), known(fe2o3t)).unwrap_or(f64::NAN)
}

pub(crate) fn feot_from(
    feo: Option<f64>,
    fe2o3: Option<f64>,
    feot: Option<f64>,
    fe2o3t: Option<f64>,
) -> Option<f64> {
    feot.or_else(|| fe2o3t.map(|v| v * FE2O3_TO_FEO))
        .or_else(|| nan_add(feo, fe2o3.map(|v| v * FE2O3_TO_FEO)))
}

/// Sum that treats an unknown term as zero unless both are unknown.
pub(crate) fn nan_add(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
    }
}

/// Fill `FeOT` in place from whichever iron species the record knows.
///
/// Returns whether `FeOT` was written.
pub fn convert_feo(record: &mut CompositionRecord) -> bool {
    if !record.is_unknown("FeOT") {
        return false;
    }
    let feot = feot_from(
        record.get("FeO"),
        record.get("Fe2O3"),
        None,
        record.get("Fe2O3T"),
    );
    record.fill("FeOT", feot)
}
