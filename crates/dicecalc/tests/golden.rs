//! Golden file integration tests.
//!
//! Verifies both engines against known distributions from
//! tests/testdata/dice_golden.json.

use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigInt;
use serde::Deserialize;

use dicecalc_core::engine::Engine;
use dicecalc_core::observers::NoOpObserver;
use dicecalc_core::options::Options;
use dicecalc_core::registry::{DefaultFactory, EngineFactory};
use dicecalc_core::Distribution;

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    faces: u32,
    num: u32,
    counts: Option<Vec<String>>,
    max: Option<String>,
    total: Option<String>,
    total_digits: Option<usize>,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/dice_golden.json")
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn compute(engine: &dyn Engine, faces: u32, num: u32) -> Distribution {
    let observer = NoOpObserver::new();
    let opts = Options::default();
    engine.calculate(&observer, 0, faces, num, &opts).unwrap()
}

fn check_engine(engine: &Arc<dyn Engine>, golden: &GoldenData) {
    for entry in &golden.values {
        let roll = format!("{}d{}", entry.num, entry.faces);
        let dist = compute(engine.as_ref(), entry.faces, entry.num);

        if let Some(ref counts) = entry.counts {
            let expected: Vec<BigInt> = counts
                .iter()
                .map(|s| BigInt::from_str(s).unwrap())
                .collect();
            assert_eq!(dist.counts(), expected, "{} {roll} counts", engine.name());
        }
        if let Some(ref max) = entry.max {
            let expected = BigInt::from_str(max).unwrap();
            assert_eq!(dist.max_count(), &expected, "{} {roll} max", engine.name());
        }
        if let Some(ref total) = entry.total {
            let expected = BigInt::from_str(total).unwrap();
            assert_eq!(dist.total(), expected, "{} {roll} total", engine.name());
        }
        if let Some(digits) = entry.total_digits {
            assert_eq!(
                dist.total().to_string().len(),
                digits,
                "{} {roll} total digits",
                engine.name()
            );
        }
    }
}

#[test]
fn golden_sequential_exact() {
    let golden = load_golden();
    let factory = DefaultFactory::new();
    let engine = factory.get("seq").unwrap();
    check_engine(&engine, &golden);
}

#[test]
fn golden_parallel_exact() {
    let golden = load_golden();
    let factory = DefaultFactory::new();
    let engine = factory.get("par").unwrap();
    check_engine(&engine, &golden);
}

#[test]
fn golden_cross_engine_consistency() {
    let golden = load_golden();
    let factory = DefaultFactory::new();
    let sequential = factory.get("seq").unwrap();
    let parallel = factory.get("par").unwrap();

    for entry in &golden.values {
        let seq_dist = compute(sequential.as_ref(), entry.faces, entry.num);
        let par_dist = compute(parallel.as_ref(), entry.faces, entry.num);
        assert_eq!(seq_dist, par_dist, "{}d{}", entry.num, entry.faces);
    }
}
