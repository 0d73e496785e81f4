//! Type definitions for the composition reconciliation engine.
//!
//! Rule tables are deserialized from TOML; the report is serialized to
//! JSON alongside reconciled records.

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from conversion_rules.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Metal -> oxide rules, applied in order by `convert_oxides`
    pub oxide: Vec<ConversionRule>,
    /// Oxide -> metal rules, applied in order by `convert_metals`
    pub metal: Vec<ConversionRule>,
    /// Constants for the carbonate/carbon network
    pub carbonate: CarbonateFactors,
}

/// A directional fill rule: `dest` is derived from `source` by `factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRule {
    /// Species read (e.g., "Fe")
    pub source: String,
    /// Species filled when unknown (e.g., "Fe2O3T")
    pub dest: String,
    /// Stoichiometric molar-mass ratio dest/source
    pub factor: f64,
}

/// Stoichiometric constants for carbonate and carbon reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CarbonateFactors {
    /// CO2 per unit CaCO3
    pub caco3_co2: f64,
    /// CO2 per unit MgCO3
    pub mgco3_co2: f64,
    /// CaO per unit CaCO3
    pub caco3_cao: f64,
    /// MgO per unit MgCO3
    pub mgco3_mgo: f64,
    /// CO2 per unit inorganic carbon
    pub tic_co2: f64,
}

impl CarbonateFactors {
    /// Inorganic carbon per unit CO2.
    pub fn co2_tic(&self) -> f64 {
        1.0 / self.tic_co2
    }
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Summary of a full reconciliation pass over one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReconcileReport {
    /// 1 if FeOT was filled from FeO/Fe2O3/Fe2O3T
    pub feo_filled: usize,
    /// Fields filled by metal -> oxide rules
    pub oxides_filled: usize,
    /// Fields filled by oxide -> metal rules
    pub metals_filled: usize,
    /// Fields filled by the carbonate network
    pub carbon_filled: usize,
    /// Carbon fractions whose triangulation came out negative
    pub inconsistent: Vec<String>,
}

impl ReconcileReport {
    pub fn total_filled(&self) -> usize {
        self.feo_filled + self.oxides_filled + self.metals_filled + self.carbon_filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_rule_deserialize() {
        let toml = r#"
            source = "Fe"
            dest = "FeOT"
            factor = 1.2864883642672
        "#;
        let rule: ConversionRule = toml::from_str(toml).unwrap();
        assert_eq!(rule.source, "Fe");
        assert_eq!(rule.dest, "FeOT");
        assert!((rule.factor - 1.2864883642672).abs() < 1e-15);
    }

    #[test]
    fn test_co2_tic_is_inverse() {
        let factors = CarbonateFactors {
            caco3_co2: 0.44,
            mgco3_co2: 0.52,
            caco3_cao: 0.56,
            mgco3_mgo: 0.48,
            tic_co2: 44.009 / 12.011,
        };
        assert!((factors.co2_tic() * factors.tic_co2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_serialize() {
        let report = ReconcileReport {
            oxides_filled: 3,
            inconsistent: vec!["TOC".to_string()],
            ..Default::default()
        };
        assert_eq!(report.total_filled(), 3);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("oxides_filled"));
        assert!(json.contains("TOC"));
    }
}
