#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use dicecalc_core::engine::{DiceCalculator, Engine};
use dicecalc_core::observers::NoOpObserver;
use dicecalc_core::options::Options;
use dicecalc_core::parallel::ParallelConvolution;
use dicecalc_core::sequential::SequentialConvolution;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Keep both dimensions small enough for the sequential oracle
    let faces = u32::from(data[0]) % 64 + 1;
    let num = u32::from(u16::from_le_bytes([data[1], data[2]])) % 256 + 1;
    let workers = usize::from(data.get(3).copied().unwrap_or(1)) % 16 + 1;

    let sequential: Arc<dyn Engine> =
        Arc::new(DiceCalculator::new(Arc::new(SequentialConvolution::new())));
    let parallel: Arc<dyn Engine> =
        Arc::new(DiceCalculator::new(Arc::new(ParallelConvolution::new())));

    let observer = NoOpObserver::new();
    let opts = Options {
        workers,
        ..Default::default()
    }
    .normalize();

    let seq_result = sequential.calculate(&observer, 0, faces, num, &opts);
    let par_result = parallel.calculate(&observer, 0, faces, num, &opts);

    match (seq_result, par_result) {
        (Ok(s), Ok(p)) => {
            assert_eq!(s, p, "Sequential != ParallelScan at {num}d{faces}");
        }
        (s, p) => panic!("engine failure at {num}d{faces}: {s:?} / {p:?}"),
    }
});
