//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use dicecalc_core::engine::{DiceError, Engine};
use dicecalc_core::observer::ProgressObserver;
use dicecalc_core::observers::NoOpObserver;
use dicecalc_core::options::Options;

use crate::interfaces::CalculationResult;

/// Execute calculations with all given engines.
pub fn execute_calculations(
    engines: &[Arc<dyn Engine>],
    faces: u32,
    num: u32,
    opts: &Options,
) -> Vec<CalculationResult> {
    execute_calculations_with_observer(engines, faces, num, opts, &NoOpObserver::new())
}

/// Execute calculations with all given engines and a progress observer.
pub fn execute_calculations_with_observer(
    engines: &[Arc<dyn Engine>],
    faces: u32,
    num: u32,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> Vec<CalculationResult> {
    if engines.len() == 1 {
        // Single engine: run directly
        let engine = &engines[0];
        let start = Instant::now();
        let outcome = engine.calculate(observer, 0, faces, num, opts);
        let duration = start.elapsed();
        debug!(engine = engine.name(), ?duration, "engine finished");

        return vec![CalculationResult {
            algorithm: engine.name().to_string(),
            outcome,
            duration,
        }];
    }

    // Multiple engines: run in parallel using rayon
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    engines
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(i, engine)| {
            let start = Instant::now();
            let outcome = engine.calculate(observer, i, faces, num, opts);
            let duration = start.elapsed();
            debug!(engine = engine.name(), ?duration, "engine finished");

            CalculationResult {
                algorithm: engine.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Every successful engine must have produced the identical distribution;
/// exact arithmetic leaves no tolerance to hide behind.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), DiceError> {
    let valid_results: Vec<&CalculationResult> = results
        .iter()
        .filter(|r| r.outcome.is_ok())
        .collect();

    if valid_results.is_empty() {
        return Err(DiceError::Calculation("no valid results".into()));
    }

    let first_value = valid_results[0].outcome.as_ref().expect("filtered to Ok");
    for result in &valid_results[1..] {
        if result.outcome.as_ref().expect("filtered to Ok") != first_value {
            return Err(DiceError::Mismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use dicecalc_core::engine::DiceCalculator;
    use dicecalc_core::parallel::ParallelConvolution;
    use dicecalc_core::sequential::SequentialConvolution;
    use num_bigint::BigInt;

    fn sequential() -> Arc<dyn Engine> {
        Arc::new(DiceCalculator::new(Arc::new(SequentialConvolution::new())))
    }

    fn parallel() -> Arc<dyn Engine> {
        Arc::new(DiceCalculator::new(Arc::new(ParallelConvolution::new())))
    }

    fn ok_result(name: &str, faces: u32, num: u32) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome: dicecalc_core::distribution(faces, num),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_engine() {
        let opts = Options::default();
        let results = execute_calculations(&[parallel()], 6, 2, &opts);
        assert_eq!(results.len(), 1);
        let dist = results[0].outcome.as_ref().unwrap();
        assert_eq!(dist.max_count(), &BigInt::from(6));
    }

    #[test]
    fn execute_multiple_engines_parallel() {
        let opts = Options::default();
        let results = execute_calculations(&[sequential(), parallel()], 6, 12, &opts);
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(r.outcome.is_ok(), "engine {} failed", r.algorithm);
        }
        assert_eq!(
            results[0].outcome.as_ref().unwrap(),
            results[1].outcome.as_ref().unwrap()
        );
    }

    #[test]
    fn execute_invalid_input_is_reported() {
        let opts = Options::default();
        let results = execute_calculations(&[parallel()], 0, 3, &opts);
        assert_eq!(results.len(), 1);
        assert!(results[0].outcome.is_err());
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok_result("A", 6, 4), ok_result("B", 6, 4)];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok_result("A", 6, 4), ok_result("B", 6, 5)];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(DiceError::Mismatch)
        ));
    }

    #[test]
    fn analyze_single_valid_result() {
        let results = vec![ok_result("A", 6, 4)];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![CalculationResult {
            algorithm: "A".into(),
            outcome: Err(DiceError::Calculation("failed".into())),
            duration: Duration::from_millis(1),
        }];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(DiceError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        let results: Vec<CalculationResult> = vec![];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(DiceError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![
            ok_result("A", 6, 4),
            CalculationResult {
                algorithm: "B".into(),
                outcome: Err(DiceError::Calculation("failed".into())),
                duration: Duration::from_millis(2),
            },
            ok_result("C", 6, 4),
        ];
        // A and C match, B is ignored
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn execute_with_observer_reports_done() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        use dicecalc_core::observer::FrozenObserver;
        use dicecalc_core::progress::ProgressUpdate;

        struct CountingObserver {
            count: AtomicUsize,
        }
        impl ProgressObserver for CountingObserver {
            fn on_progress(&self, _update: &ProgressUpdate) {
                self.count.fetch_add(1, Ordering::Relaxed);
            }
            fn freeze(&self) -> FrozenObserver {
                FrozenObserver::new(0.01)
            }
        }

        let observer = CountingObserver {
            count: AtomicUsize::new(0),
        };
        let opts = Options::default();
        let results =
            execute_calculations_with_observer(&[parallel()], 6, 10, &opts, &observer);
        assert_eq!(results.len(), 1);
        assert!(results[0].outcome.is_ok());
        // At least the done notification must have arrived
        assert!(observer.count.load(Ordering::Relaxed) >= 1);
    }
}
