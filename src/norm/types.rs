use serde::Serialize;

use crate::composition::species::CIPW_OXIDES;
use crate::composition::CompositionRecord;

/// The eleven normative minerals, in canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mineral {
    Quartz,
    Orthoclase,
    Plagioclase,
    Corundum,
    Nepheline,
    Diopside,
    Orthopyroxene,
    Olivine,
    Magnetite,
    Ilmenite,
    Apatite,
}

impl Mineral {
    pub const ALL: [Mineral; 11] = [
        Mineral::Quartz,
        Mineral::Orthoclase,
        Mineral::Plagioclase,
        Mineral::Corundum,
        Mineral::Nepheline,
        Mineral::Diopside,
        Mineral::Orthopyroxene,
        Mineral::Olivine,
        Mineral::Magnetite,
        Mineral::Ilmenite,
        Mineral::Apatite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mineral::Quartz => "quartz",
            Mineral::Orthoclase => "orthoclase",
            Mineral::Plagioclase => "plagioclase",
            Mineral::Corundum => "corundum",
            Mineral::Nepheline => "nepheline",
            Mineral::Diopside => "diopside",
            Mineral::Orthopyroxene => "orthopyroxene",
            Mineral::Olivine => "olivine",
            Mineral::Magnetite => "magnetite",
            Mineral::Ilmenite => "ilmenite",
            Mineral::Apatite => "apatite",
        }
    }
}

/// A CIPW normative assemblage, each mineral in weight percent.
///
/// Values may be NaN when inputs were unknown or a solid-solution ratio
/// was 0/0, and may be negative for strongly undersaturated inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NormativeMineralAssemblage {
    pub quartz: f64,
    pub orthoclase: f64,
    pub plagioclase: f64,
    pub corundum: f64,
    pub nepheline: f64,
    pub diopside: f64,
    pub orthopyroxene: f64,
    pub olivine: f64,
    pub magnetite: f64,
    pub ilmenite: f64,
    pub apatite: f64,
}

impl NormativeMineralAssemblage {
    pub fn get(&self, mineral: Mineral) -> f64 {
        match mineral {
            Mineral::Quartz => self.quartz,
            Mineral::Orthoclase => self.orthoclase,
            Mineral::Plagioclase => self.plagioclase,
            Mineral::Corundum => self.corundum,
            Mineral::Nepheline => self.nepheline,
            Mineral::Diopside => self.diopside,
            Mineral::Orthopyroxene => self.orthopyroxene,
            Mineral::Olivine => self.olivine,
            Mineral::Magnetite => self.magnetite,
            Mineral::Ilmenite => self.ilmenite,
            Mineral::Apatite => self.apatite,
        }
    }

    /// `(mineral, wt%)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Mineral, f64)> + '_ {
        Mineral::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// Sum of all eleven minerals.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }
}

/// The eleven oxide inputs of the CIPW norm, in weight percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OxideInput {
    pub sio2: f64,
    pub tio2: f64,
    pub al2o3: f64,
    pub fe2o3: f64,
    pub feo: f64,
    pub mno: f64,
    pub mgo: f64,
    pub cao: f64,
    pub na2o: f64,
    pub k2o: f64,
    pub p2o5: f64,
}

impl OxideInput {
    /// Read the norm oxides from a record; unknown values become NaN.
    ///
    /// When both FeO and Fe2O3 are unknown but FeOT is known, all iron is
    /// taken as FeO with zero Fe2O3.
    pub fn from_record(record: &CompositionRecord) -> Self {
        let [sio2, tio2, al2o3, mut fe2o3, mut feo, mno, mgo, cao, na2o, k2o, p2o5] =
            CIPW_OXIDES.map(|k| record.value(k));
        if fe2o3.is_nan() && feo.is_nan() {
            if let Some(feot) = record.get("FeOT") {
                fe2o3 = 0.0;
                feo = feot;
            }
        }

        Self {
            sio2,
            tio2,
            al2o3,
            fe2o3,
            feo,
            mno,
            mgo,
            cao,
            na2o,
            k2o,
            p2o5,
        }
    }
}
