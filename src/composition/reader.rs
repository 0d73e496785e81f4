use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::types::CompositionRecord;

/// Parse a JSON array of sample maps.
///
/// Each element is an object of species name to number or `null`. Every
/// sample is laid over the standard vocabulary, so species it does not
/// list are present and unknown. Keys outside the vocabulary are kept.
pub fn records_from_json(json: &str) -> Result<Vec<CompositionRecord>> {
    let parsed: Vec<CompositionRecord> = serde_json::from_str(json)?;
    let records = parsed
        .iter()
        .map(|sample| {
            let mut record = CompositionRecord::standard();
            for (key, value) in sample.species() {
                record.set(key, value.unwrap_or(f64::NAN));
            }
            record
        })
        .collect();
    Ok(records)
}

/// Read composition records from a JSON file on disk.
pub fn read_records(path: &Path) -> Result<Vec<CompositionRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples from {:?}", path))?;
    let records = records_from_json(&content)
        .with_context(|| format!("Failed to parse samples in {:?}", path))?;

    for (i, record) in records.iter().enumerate() {
        debug!(
            "Sample {} has {} species ({} known)",
            i,
            record.len(),
            record.known_count()
        );
    }
    info!("Read {} samples from {:?}", records.len(), path);

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_from_json() {
        let json = r#"[
            {"SiO2": 50.1, "FeO": null},
            {"Fe": 10000, "Fe2O3T": null}
        ]"#;
        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("SiO2"), Some(50.1));
        assert!(records[0].is_unknown("FeO"));
        assert_eq!(records[1].get("Fe"), Some(10000.0));
    }

    #[test]
    fn test_sparse_sample_gets_full_vocabulary() {
        let json = r#"[{"Si": 338000.0, "Fe": 14000.0, "Ba_isotope": 1.5}]"#;
        let records = records_from_json(json).unwrap();
        let record = &records[0];

        assert_eq!(record.len(), CompositionRecord::standard().len() + 1);
        assert_eq!(record.known_count(), 3);
        assert!(record.is_unknown("SiO2"));
        assert!(record.is_unknown("TOC"));
        assert_eq!(record.get("Ba_isotope"), Some(1.5));
    }

    #[test]
    fn test_sparse_sample_reconciles() {
        let json = r#"[{"Si": 338000.0, "Fe": 14000.0, "Mg": 3000.0}]"#;
        let mut records = records_from_json(json).unwrap();
        let engine = crate::reconcile::ReconciliationEngine::default();
        let report = engine.reconcile(&mut records[0], crate::DEFAULT_UNIT_RATIO);

        assert!(report.oxides_filled >= 3, "report {:?}", report);
        let sio2 = records[0].get("SiO2").unwrap();
        assert!((sio2 - 33.8 * 2.13932704290547).abs() < 1e-9);
        assert!(records[0].get("FeOT").is_some());
    }

    #[test]
    fn test_records_from_json_rejects_strings() {
        let json = r#"[{"SiO2": "fifty"}]"#;
        assert!(records_from_json(json).is_err());
    }
}
