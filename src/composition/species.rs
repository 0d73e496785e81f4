//! Static species vocabulary.
//!
//! Immutable lookup tables naming every species the reconciliation engine and
//! the norm calculator know about. Records built with
//! [`CompositionRecord::standard`](super::CompositionRecord::standard) carry
//! exactly these keys.

/// Major and trace metals, conventionally in ppm by mass.
pub const METALS: [&str; 19] = [
    "Si", "Ti", "Al", "Fe", "Mg", "Ca", "Mn", "Li", "Na", "K", "P", "Cr", "Ni", "Co", "S", "H",
    "Sr", "Ba", "C",
];

/// Oxides and volatiles, conventionally in weight percent.
pub const OXIDES: [&str; 22] = [
    "SiO2", "TiO2", "Al2O3", "FeO", "Fe2O3", "FeOT", "Fe2O3T", "MgO", "CaO", "MnO", "Li2O",
    "Na2O", "K2O", "P2O5", "Cr2O3", "NiO", "CoO", "SrO", "BaO", "SO3", "H2O", "CO2",
];

pub const CARBONATES: [&str; 2] = ["CaCO3", "MgCO3"];

/// Total carbon, total organic carbon, total inorganic carbon (wt%).
pub const CARBON: [&str; 3] = ["TC", "TOC", "TIC"];

/// The eleven oxides consumed by the CIPW norm, in argument order.
pub const CIPW_OXIDES: [&str; 11] = [
    "SiO2", "TiO2", "Al2O3", "Fe2O3", "FeO", "MnO", "MgO", "CaO", "Na2O", "K2O", "P2O5",
];

/// Every species a standard record carries.
pub fn recognized_species() -> impl Iterator<Item = &'static str> {
    METALS
        .iter()
        .chain(OXIDES.iter())
        .chain(CARBONATES.iter())
        .chain(CARBON.iter())
        .copied()
}

/// True if `name` is part of the standard vocabulary.
pub fn is_recognized(name: &str) -> bool {
    recognized_species().any(|s| s == name)
}
