use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use petronorm::composition::read_records;
use petronorm::norm::{cipw_norm_record, NormativeMineralAssemblage};
use petronorm::reconcile::{default_rules, load_rules, ReconcileReport, ReconciliationEngine};
use petronorm::{CompositionRecord, PetronormError, DEFAULT_UNIT_RATIO};

const USAGE: &str = "usage: petronorm <samples.json> [--rules <rules.toml>] [--unit-ratio <ratio>]";

struct Args {
    samples: PathBuf,
    rules: Option<PathBuf>,
    unit_ratio: f64,
}

#[derive(Serialize)]
struct SampleOutput {
    record: CompositionRecord,
    report: ReconcileReport,
    norm: NormativeMineralAssemblage,
}

fn parse_args() -> Result<Args> {
    let mut samples = None;
    let mut rules = None;
    let mut unit_ratio = DEFAULT_UNIT_RATIO;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rules" => {
                rules = Some(PathBuf::from(args.next().context("--rules needs a path")?));
            }
            "--unit-ratio" => {
                let raw = args.next().context("--unit-ratio needs a number")?;
                unit_ratio = raw
                    .parse()
                    .with_context(|| format!("invalid unit ratio {:?}", raw))?;
            }
            "-h" | "--help" => bail!(USAGE),
            _ if samples.is_none() => samples = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {:?}\n{}", arg, USAGE),
        }
    }

    if !(unit_ratio.is_finite() && unit_ratio > 0.0) {
        return Err(PetronormError::Input(format!(
            "unit ratio must be finite and positive, got {}",
            unit_ratio
        ))
        .into());
    }

    Ok(Args {
        samples: samples.context(USAGE)?,
        rules,
        unit_ratio,
    })
}

fn main() -> Result<()> {
    petronorm::init_logging();
    let args = parse_args()?;

    let rules = match &args.rules {
        Some(path) => {
            info!("Loading conversion rules from {:?}", path);
            load_rules(path)?
        }
        None => default_rules(),
    };
    let engine = ReconciliationEngine::new(rules);

    let outputs = process(read_records(&args.samples)?, &engine, args.unit_ratio);

    info!("Computed norms for {} samples", outputs.len());
    println!("{}", serde_json::to_string_pretty(&outputs)?);
    Ok(())
}

/// Reconcile each sample, then compute its norm.
fn process(
    records: Vec<CompositionRecord>,
    engine: &ReconciliationEngine,
    unit_ratio: f64,
) -> Vec<SampleOutput> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, mut record)| {
            let report = engine.reconcile(&mut record, unit_ratio);
            if !report.inconsistent.is_empty() {
                warn!(
                    "Sample {}: inconsistent carbon fractions {:?}",
                    i, report.inconsistent
                );
            }
            let norm = cipw_norm_record(&record);
            SampleOutput {
                record,
                report,
                norm,
            }
        })
        .collect()
}
