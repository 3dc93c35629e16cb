//! Engine selection logic.

use std::sync::Arc;

use dicecalc_core::engine::{DiceError, Engine};
use dicecalc_core::registry::EngineFactory;

/// Get engines to run based on the `--algo` selection.
pub fn get_engines_to_run(
    algo: &str,
    factory: &dyn EngineFactory,
) -> Result<Vec<Arc<dyn Engine>>, DiceError> {
    match algo {
        "all" => {
            let names = factory.available();
            let mut engines = Vec::new();
            for name in names {
                engines.push(factory.get(name)?);
            }
            Ok(engines)
        }
        name => {
            let engine = factory.get(name)?;
            Ok(vec![engine])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicecalc_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let engines = get_engines_to_run("all", &factory).unwrap();
        assert_eq!(engines.len(), 2);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let engines = get_engines_to_run("par", &factory).unwrap();
        assert_eq!(engines.len(), 1);
        assert_eq!(engines[0].name(), "ParallelScan");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_engines_to_run("unknown", &factory);
        assert!(result.is_err());
    }
}
