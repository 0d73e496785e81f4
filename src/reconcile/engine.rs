//! Rule evaluation engine for composition reconciliation.
//!
//! The `ReconciliationEngine` fills unknown oxide, metal and carbon fields
//! from equivalent known fields. Every write is fill-if-unknown, so a
//! known value is never overwritten.

use tracing::{debug, warn};

use crate::composition::CompositionRecord;

use super::iron::{convert_feo, nan_add};
use super::rules::default_rules;
use super::types::*;

/// Conventional ratio between ppm (metals) and wt% (oxides).
pub const DEFAULT_UNIT_RATIO: f64 = 10_000.0;

/// How a rule factor combines with the unit ratio.
#[derive(Clone, Copy)]
enum Scale {
    Divide,
    Multiply,
}

/// The reconciliation engine.
///
/// Applies fixed, ordered conversion tables to a caller-owned record.
/// Rules run once in declaration order with no fixpoint iteration: a value
/// produced by one rule is not revisited as a source within the same call.
pub struct ReconciliationEngine {
    rules: RulesConfig,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ReconciliationEngine {
    /// Create a new engine with the given configuration.
    ///
    /// # Arguments
    /// * `rules` - Rule configuration (typically from `default_rules()` or `load_rules()`)
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Fill oxides (wt%) from metals (ppm). Returns the number of fields filled.
    pub fn convert_oxides(&self, record: &mut CompositionRecord, unit_ratio: f64) -> usize {
        let filled = apply_rules(&self.rules.oxide, record, unit_ratio, Scale::Divide);
        debug!("Filled {} oxide fields from metals", filled);
        filled
    }

    /// Copying form of [`convert_oxides`](Self::convert_oxides).
    pub fn oxide_conversion(&self, record: &CompositionRecord, unit_ratio: f64) -> CompositionRecord {
        let mut out = record.clone();
        self.convert_oxides(&mut out, unit_ratio);
        out
    }

    /// Fill metals (ppm) from oxides (wt%). Returns the number of fields filled.
    pub fn convert_metals(&self, record: &mut CompositionRecord, unit_ratio: f64) -> usize {
        let filled = apply_rules(&self.rules.metal, record, unit_ratio, Scale::Multiply);
        debug!("Filled {} metal fields from oxides", filled);
        filled
    }

    /// Copying form of [`convert_metals`](Self::convert_metals).
    pub fn metal_conversion(&self, record: &CompositionRecord, unit_ratio: f64) -> CompositionRecord {
        let mut out = record.clone();
        self.convert_metals(&mut out, unit_ratio);
        out
    }

    /// Reconcile carbonates, CO2 and the TC/TOC/TIC carbon fractions.
    ///
    /// Returns the number of fields filled and the names of carbon
    /// fractions whose triangulation came out negative and were left unknown.
    pub fn reconcile_carbonates(
        &self,
        record: &mut CompositionRecord,
        unit_ratio: f64,
    ) -> (usize, Vec<String>) {
        let f = self.rules.carbonate;
        let co2_tic = f.co2_tic();
        let mut filled = 0;
        let mut inconsistent = Vec::new();

        // CO2 from the combined carbonates
        if record.contains("CaCO3") && record.contains("MgCO3") && record.contains("CO2") {
            let co2 = nan_add(
                record.get("CaCO3").map(|v| v * f.caco3_co2),
                record.get("MgCO3").map(|v| v * f.mgco3_co2),
            );
            filled += record.fill("CO2", co2) as usize;
        }

        // Oxides and CO2 from individual carbonates, CO2 from TIC
        for (source, dest, factor) in [
            ("CaCO3", "CaO", f.caco3_cao),
            ("CaCO3", "CO2", f.caco3_co2),
            ("MgCO3", "MgO", f.mgco3_mgo),
            ("MgCO3", "CO2", f.mgco3_co2),
            ("TIC", "CO2", f.tic_co2),
        ] {
            filled += record.fill(dest, record.get(source).map(|v| v * factor)) as usize;
        }

        // C is ppm, TC is wt%
        filled += record.fill("TC", record.get("C").map(|v| v / unit_ratio)) as usize;

        filled += record.fill("TIC", record.get("CO2").map(|v| v * co2_tic)) as usize;

        if record.contains("TC") && record.contains("TOC") && record.contains("TIC") {
            let tc = match (record.get("TOC"), record.get("TIC")) {
                (Some(toc), Some(tic)) => Some(toc + tic),
                _ => None,
            };
            filled += record.fill("TC", tc) as usize;

            for (dest, minuend, subtrahend) in [("TOC", "TC", "TIC"), ("TIC", "TC", "TOC")] {
                if !record.is_unknown(dest) {
                    continue;
                }
                if let (Some(a), Some(b)) = (record.get(minuend), record.get(subtrahend)) {
                    let diff = a - b;
                    if diff < 0.0 {
                        warn!(
                            "{} = {} - {} is negative ({}); leaving {} unknown",
                            dest, minuend, subtrahend, diff, dest
                        );
                        inconsistent.push(dest.to_string());
                    } else {
                        filled += record.fill(dest, Some(diff)) as usize;
                    }
                }
            }

            filled += record.fill("CO2", record.get("TIC").map(|v| v * f.tic_co2)) as usize;
        }

        // Backfill C (ppm) from the best available carbon estimate
        if record.is_unknown("C") {
            let toc = record.get("TOC");
            let tic = record.get("TIC");
            let tic_from_co2 = record.get("CO2").map(|v| v * co2_tic);
            let candidates = [
                record.get("TC"),
                toc.zip(tic).map(|(a, b)| a + b),
                toc.zip(tic_from_co2).map(|(a, b)| a + b),
                toc,
                tic,
                tic_from_co2,
            ];
            let c = candidates.into_iter().flatten().next();
            filled += record.fill("C", c.map(|v| v * unit_ratio)) as usize;
        }

        debug!(
            "Filled {} carbon fields ({} inconsistent)",
            filled,
            inconsistent.len()
        );
        (filled, inconsistent)
    }

    /// Copying form of [`reconcile_carbonates`](Self::reconcile_carbonates).
    pub fn carbonate_conversion(
        &self,
        record: &CompositionRecord,
        unit_ratio: f64,
    ) -> CompositionRecord {
        let mut out = record.clone();
        self.reconcile_carbonates(&mut out, unit_ratio);
        out
    }

    /// Run every stage in order: iron, oxides, metals, carbonates.
    pub fn reconcile(&self, record: &mut CompositionRecord, unit_ratio: f64) -> ReconcileReport {
        let feo_filled = convert_feo(record) as usize;
        let oxides_filled = self.convert_oxides(record, unit_ratio);
        let metals_filled = self.convert_metals(record, unit_ratio);
        let (carbon_filled, inconsistent) = self.reconcile_carbonates(record, unit_ratio);

        ReconcileReport {
            feo_filled,
            oxides_filled,
            metals_filled,
            carbon_filled,
            inconsistent,
        }
    }
}

/// Apply a rule table once, in order. Sources are read from the record as it
/// was before the pass, so nothing filled here feeds a later rule.
fn apply_rules(
    rules: &[ConversionRule],
    record: &mut CompositionRecord,
    unit_ratio: f64,
    scale: Scale,
) -> usize {
    let snapshot = record.clone();
    let mut filled = 0;
    for rule in rules {
        let value = snapshot.get(&rule.source).map(|v| match scale {
            Scale::Divide => v * rule.factor / unit_ratio,
            Scale::Multiply => v * rule.factor * unit_ratio,
        });
        if record.fill(&rule.dest, value) {
            filled += 1;
        }
    }
    filled
}
