//! CIPW norm: sequential molar allocation of oxides into normative minerals.
//!
//! Cations are assigned in a fixed order (apatite, ilmenite, magnetite,
//! feldspars, corundum, pyroxenes). Silica undersaturation is resolved by
//! converting orthopyroxene to olivine first and albite to nepheline only
//! when olivine alone cannot absorb the deficit.

use tracing::trace;

use super::molar::{self, blend};
use super::types::{NormativeMineralAssemblage, OxideInput};
use crate::composition::CompositionRecord;

/// Compute the CIPW norm from oxide weight percentages.
///
/// Inputs and outputs are in weight percent. Unknown inputs are NaN and
/// propagate. Negative intermediate quantities are not clamped.
#[allow(clippy::too_many_arguments)]
pub fn cipw_norm(
    sio2: f64,
    tio2: f64,
    al2o3: f64,
    fe2o3: f64,
    feo: f64,
    mno: f64,
    mgo: f64,
    cao: f64,
    na2o: f64,
    k2o: f64,
    p2o5: f64,
) -> NormativeMineralAssemblage {
    // Weight percent to moles
    let sio2 = sio2 / molar::SIO2;
    let tio2 = tio2 / molar::TIO2;
    let mut al2o3 = al2o3 / molar::AL2O3;
    let fe2o3 = fe2o3 / molar::FE2O3;
    let mut feo = feo / molar::FEO;
    let mno = mno / molar::MNO;
    let mgo = mgo / molar::MGO;
    let mut cao = cao / molar::CAO;
    let na2o = na2o / molar::NA2O;
    let k2o = k2o / molar::K2O;
    let p2o5 = p2o5 / molar::P2O5;

    // Mn2+ substitutes for Fe2+
    feo += mno;

    cao -= 10.0 / 3.0 * p2o5;
    let apatite = 2.0 / 3.0 * p2o5;

    feo -= tio2;
    let ilmenite = tio2;

    feo -= fe2o3;
    let magnetite = fe2o3;

    al2o3 -= k2o;
    let mut orthoclase = k2o;

    al2o3 -= na2o;
    let mut albite = na2o;

    let anorthite;
    if cao > al2o3 {
        anorthite = al2o3;
        cao -= al2o3;
        al2o3 = 0.0;
    } else {
        anorthite = cao;
        al2o3 -= cao;
        cao = 0.0;
    }
    let corundum = al2o3;

    let mut fmo = feo + mgo;
    let mg_number = mgo / fmo;

    let diopside = if cao > 0.0 {
        fmo -= cao;
        cao
    } else {
        0.0
    };
    let mut orthopyroxene = fmo;

    // Silica demand of everything but the Fe-Mg silicates
    let psi_fixed = 6.0 * orthoclase + 6.0 * albite + 2.0 * anorthite + 2.0 * diopside;
    let psi1 = psi_fixed + orthopyroxene;

    let quartz;
    let mut nepheline = 0.0;
    let mut olivine = 0.0;
    if psi1 < sio2 {
        quartz = sio2 - psi1;
    } else {
        quartz = 0.0;
        let psi3 = sio2 - psi_fixed;
        if fmo > 2.0 * psi3 {
            // All Fe-Mg into olivine, then desilicate albite
            orthopyroxene = 0.0;
            olivine = fmo / 2.0;
            let psi4 = 6.0 * orthoclase + 2.0 * anorthite + 2.0 * diopside + olivine;
            let psi5 = sio2 - psi4;
            albite = (psi5 - 2.0 * na2o) / 4.0;
            nepheline = na2o - albite;
        } else {
            orthopyroxene = 2.0 * psi3 - fmo;
            olivine = fmo - psi3;
        }
    }
    trace!(
        "psi1={} sio2={} fmo={} mg#={} quartz={} olivine={} nepheline={}",
        psi1,
        sio2,
        fmo,
        mg_number,
        quartz,
        olivine,
        nepheline
    );

    // Na2O/K2O units to formula units
    orthoclase *= 2.0;
    nepheline *= 2.0;
    albite *= 2.0;

    let an_fraction = anorthite / (anorthite + albite);
    let plagioclase_wt = blend(an_fraction, molar::ANORTHITE, molar::ALBITE);
    let diopside_wt = blend(mg_number, molar::DIOPSIDE, molar::HEDENBERGITE);
    let orthopyroxene_wt = blend(mg_number, molar::ENSTATITE, molar::FERROSILITE);
    let olivine_wt = blend(mg_number, molar::FORSTERITE, molar::FAYALITE);

    NormativeMineralAssemblage {
        quartz: weigh(quartz, molar::QUARTZ),
        orthoclase: weigh(orthoclase, molar::ORTHOCLASE),
        plagioclase: weigh(albite + anorthite, plagioclase_wt),
        corundum: weigh(corundum, molar::CORUNDUM),
        nepheline: weigh(nepheline, molar::NEPHELINE),
        diopside: weigh(diopside, diopside_wt),
        orthopyroxene: weigh(orthopyroxene, orthopyroxene_wt),
        olivine: weigh(olivine, olivine_wt),
        magnetite: weigh(magnetite, molar::MAGNETITE),
        ilmenite: weigh(ilmenite, molar::ILMENITE),
        apatite: weigh(apatite, molar::APATITE),
    }
}

/// Moles to weight. An exactly-zero quantity weighs zero even when its
/// solid-solution formula weight is undefined.
fn weigh(moles: f64, formula_weight: f64) -> f64 {
    if moles == 0.0 {
        0.0
    } else {
        moles * formula_weight
    }
}

impl OxideInput {
    pub fn norm(&self) -> NormativeMineralAssemblage {
        cipw_norm(
            self.sio2, self.tio2, self.al2o3, self.fe2o3, self.feo, self.mno, self.mgo, self.cao,
            self.na2o, self.k2o, self.p2o5,
        )
    }
}

/// CIPW norm of the oxides held in `record`.
pub fn cipw_norm_record(record: &CompositionRecord) -> NormativeMineralAssemblage {
    OxideInput::from_record(record).norm()
}
