#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use dicecalc_core::Distribution;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let faces = u32::from(data[0]) % 64 + 1;
    let num = u32::from(u16::from_le_bytes([data[1], data[2]])) % 256 + 1;

    let dist = dicecalc_core::distribution(faces, num).expect("valid input");

    // Mass conservation
    assert_eq!(dist.total(), BigInt::from(faces).pow(num));

    // Symmetry of the materialized array
    assert!(Distribution::is_symmetric(&dist.counts()));
});
