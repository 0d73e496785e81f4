use std::path::PathBuf;

use petronorm::composition::{read_records, CompositionRecord};
use petronorm::reconcile::{
    carbonate_conversion, default_rules, feo_conversion, metal_conversion, oxide_conversion,
    ReconciliationEngine, DEFAULT_UNIT_RATIO,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn samples() -> Vec<CompositionRecord> {
    read_records(&fixture_path("samples.json")).expect("Failed to read fixture")
}

/// Every value known before must be unchanged after.
fn assert_fill_only(before: &CompositionRecord, after: &CompositionRecord) {
    for (key, value) in before.species() {
        if let Some(v) = value {
            assert_eq!(after.get(key), Some(v), "Known field '{}' was modified", key);
        }
    }
    assert_eq!(before.len(), after.len(), "Reconciliation must not add keys");
}

#[test]
fn test_fixture_loads() {
    let records = samples();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("SiO2"), Some(49.2));
    assert!(records[1].is_unknown("SiO2"));
}

#[test]
fn test_feo_conversion_literal() {
    let v = feo_conversion(f64::NAN, 10.0, f64::NAN, f64::NAN);
    assert!((v - 8.998).abs() < 1e-3, "got {}", v);
}

#[test]
fn test_metal_to_oxide_literal() {
    let record = CompositionRecord::with_species(["Fe2O3T"]).with("Fe", 10_000.0);
    let out = oxide_conversion(&record, DEFAULT_UNIT_RATIO);
    let v = out.get("Fe2O3T").unwrap();
    assert!((v - 1.4297).abs() < 1e-4, "got {}", v);
}

#[test]
fn test_every_conversion_is_fill_only() {
    for record in samples() {
        for out in [
            oxide_conversion(&record, DEFAULT_UNIT_RATIO),
            metal_conversion(&record, DEFAULT_UNIT_RATIO),
            carbonate_conversion(&record, DEFAULT_UNIT_RATIO),
        ] {
            assert_fill_only(&record, &out);
        }
    }
}

#[test]
fn test_every_conversion_is_idempotent() {
    for record in samples() {
        let once = oxide_conversion(&record, DEFAULT_UNIT_RATIO);
        assert_eq!(oxide_conversion(&once, DEFAULT_UNIT_RATIO), once);

        let once = metal_conversion(&record, DEFAULT_UNIT_RATIO);
        assert_eq!(metal_conversion(&once, DEFAULT_UNIT_RATIO), once);

        let once = carbonate_conversion(&record, DEFAULT_UNIT_RATIO);
        assert_eq!(carbonate_conversion(&once, DEFAULT_UNIT_RATIO), once);
    }
}

#[test]
fn test_metal_sample_gets_oxides() {
    let records = samples();
    let out = oxide_conversion(&records[1], DEFAULT_UNIT_RATIO);
    let sio2 = out.get("SiO2").unwrap();
    assert!((sio2 - 33.8 * 2.13932704290547).abs() < 1e-9, "SiO2 {}", sio2);
    assert!(out.get("FeOT").is_some());
    assert!(out.get("Fe2O3T").is_some());
    assert!(out.get("K2O").is_some());
}

#[test]
fn test_oxide_sample_gets_metals() {
    let records = samples();
    let out = metal_conversion(&records[0], DEFAULT_UNIT_RATIO);
    let mn = out.get("Mn").unwrap();
    assert!((mn - 0.2 * 0.7744619872751028 * 1e4).abs() < 1e-6);
    assert!(out.get("P").is_some());
}

#[test]
fn test_carbonate_sample() {
    let records = samples();
    let f = default_rules().carbonate;
    let out = carbonate_conversion(&records[2], DEFAULT_UNIT_RATIO);

    let co2 = out.get("CO2").unwrap();
    assert!((co2 - (12.0 * f.caco3_co2 + 3.0 * f.mgco3_co2)).abs() < 1e-9);

    let tic = out.get("TIC").unwrap();
    assert!((tic - co2 / f.tic_co2).abs() < 1e-9);

    let toc = out.get("TOC").unwrap();
    assert!((toc - (2.5 - tic)).abs() < 1e-9);
    assert!(toc >= 0.0);

    assert!((out.get("C").unwrap() - 25_000.0).abs() < 1e-6);
}

#[test]
fn test_full_reconcile_then_norm() {
    let engine = ReconciliationEngine::default();
    let mut record = samples().remove(1);
    let report = engine.reconcile(&mut record, DEFAULT_UNIT_RATIO);
    assert!(report.oxides_filled >= 10, "report {:?}", report);

    let norm = petronorm::norm::cipw_norm_record(&record);
    assert!(norm.quartz > 0.0, "granitic sample should carry quartz");
    assert!(norm.orthoclase > 0.0);
}
