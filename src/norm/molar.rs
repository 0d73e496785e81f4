//! Molar masses (g/mol) of the norm oxides and of the normative minerals.
//!
//! Mineral formula weights are built from the oxide masses, so a norm
//! conserves mass on the oxide basis.

pub const SIO2: f64 = 60.0843;
pub const TIO2: f64 = 79.8658;
pub const AL2O3: f64 = 101.9613;
pub const FE2O3: f64 = 159.6882;
pub const FEO: f64 = 71.8444;
pub const MNO: f64 = 70.9374;
pub const MGO: f64 = 40.3044;
pub const CAO: f64 = 56.0774;
pub const NA2O: f64 = 61.9789;
pub const K2O: f64 = 94.1960;
pub const P2O5: f64 = 141.9445;
pub const H2O: f64 = 18.0153;

/// SiO2
pub const QUARTZ: f64 = SIO2;
/// KAlSi3O8
pub const ORTHOCLASE: f64 = (K2O + AL2O3 + 6.0 * SIO2) / 2.0;
/// NaAlSi3O8
pub const ALBITE: f64 = (NA2O + AL2O3 + 6.0 * SIO2) / 2.0;
/// CaAl2Si2O8
pub const ANORTHITE: f64 = CAO + AL2O3 + 2.0 * SIO2;
/// Al2O3
pub const CORUNDUM: f64 = AL2O3;
/// NaAlSiO4
pub const NEPHELINE: f64 = (NA2O + AL2O3 + 2.0 * SIO2) / 2.0;
/// CaMgSi2O6
pub const DIOPSIDE: f64 = CAO + MGO + 2.0 * SIO2;
/// CaFeSi2O6
pub const HEDENBERGITE: f64 = CAO + FEO + 2.0 * SIO2;
/// MgSiO3
pub const ENSTATITE: f64 = MGO + SIO2;
/// FeSiO3
pub const FERROSILITE: f64 = FEO + SIO2;
/// Mg2SiO4
pub const FORSTERITE: f64 = 2.0 * MGO + SIO2;
/// Fe2SiO4
pub const FAYALITE: f64 = 2.0 * FEO + SIO2;
/// Fe3O4
pub const MAGNETITE: f64 = FE2O3 + FEO;
/// FeTiO3
pub const ILMENITE: f64 = FEO + TIO2;
/// Ca5(PO4)3(OH)
pub const APATITE: f64 = 5.0 * CAO + 1.5 * P2O5 + 0.5 * H2O;

/// Linear end-member blend: `x * a + (1 - x) * b`.
pub fn blend(x: f64, a: f64, b: f64) -> f64 {
    x * a + (1.0 - x) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_weights_match_tabulated() {
        for (name, computed, tabulated) in [
            ("orthoclase", ORTHOCLASE, 278.33),
            ("albite", ALBITE, 262.22),
            ("anorthite", ANORTHITE, 278.21),
            ("nepheline", NEPHELINE, 142.05),
            ("diopside", DIOPSIDE, 216.55),
            ("hedenbergite", HEDENBERGITE, 248.09),
            ("enstatite", ENSTATITE, 100.39),
            ("ferrosilite", FERROSILITE, 131.93),
            ("forsterite", FORSTERITE, 140.69),
            ("fayalite", FAYALITE, 203.77),
            ("magnetite", MAGNETITE, 231.53),
            ("ilmenite", ILMENITE, 151.71),
            ("apatite", APATITE, 502.31),
        ] {
            assert!(
                (computed - tabulated).abs() < 0.02,
                "{}: computed {} vs tabulated {}",
                name,
                computed,
                tabulated
            );
        }
    }

    #[test]
    fn test_blend_end_members() {
        assert_eq!(blend(1.0, FORSTERITE, FAYALITE), FORSTERITE);
        assert_eq!(blend(0.0, FORSTERITE, FAYALITE), FAYALITE);
        assert!(blend(f64::NAN, FORSTERITE, FAYALITE).is_nan());
    }
}
