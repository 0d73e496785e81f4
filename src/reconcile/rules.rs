//! TOML rule loading for the reconciliation engine.
//!
//! Provides two loading methods:
//! - `default_rules()` - Loads embedded rules compiled into the binary
//! - `load_rules(path)` - Loads custom rules from a file path

use anyhow::Result;
use std::path::Path;

use super::types::{ConversionRule, RulesConfig};
use crate::error::PetronormError;

/// Default rules embedded in the binary at compile time.
/// These are loaded from `config/conversion_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/conversion_rules.toml");

/// Load and validate rules from a TOML file at the given path.
///
/// # Returns
/// * `Ok(RulesConfig)` - Parsed rules configuration
/// * `Err` - If the file cannot be read, the TOML is invalid, or a rule
///   fails [`RulesConfig::validate`]
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RulesConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Get the default rules embedded in the binary.
///
/// 17 metal -> oxide rules, 9 oxide -> metal rules and the carbonate
/// network constants.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_rules() -> RulesConfig {
    toml::from_str(DEFAULT_RULES).expect("embedded conversion_rules.toml must be valid TOML")
}

impl RulesConfig {
    /// Reject empty keys and factors that are not finite and positive.
    pub fn validate(&self) -> Result<(), PetronormError> {
        for rule in self.oxide.iter().chain(self.metal.iter()) {
            validate_rule(rule)?;
        }

        let c = &self.carbonate;
        for (name, factor) in [
            ("caco3_co2", c.caco3_co2),
            ("mgco3_co2", c.mgco3_co2),
            ("caco3_cao", c.caco3_cao),
            ("mgco3_mgo", c.mgco3_mgo),
            ("tic_co2", c.tic_co2),
        ] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(PetronormError::RuleConfig(format!(
                    "carbonate factor {} must be finite and positive, got {}",
                    name, factor
                )));
            }
        }
        Ok(())
    }
}

fn validate_rule(rule: &ConversionRule) -> Result<(), PetronormError> {
    let invalid = |reason: &str| PetronormError::InvalidRule {
        source_key: rule.source.clone(),
        dest: rule.dest.clone(),
        reason: reason.to_string(),
    };

    if rule.source.is_empty() || rule.dest.is_empty() {
        return Err(invalid("species names must not be empty"));
    }
    if rule.source == rule.dest {
        return Err(invalid("source and destination must differ"));
    }
    if !(rule.factor.is_finite() && rule.factor > 0.0) {
        return Err(invalid("factor must be finite and positive"));
    }
    Ok(())
}
