use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;

const DETERMINISTIC_SEED: [u8; 32] = [
    1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

/// Build a ChaCha rng whose stream only depends on `seed`.
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> ChaChaRng {
    ChaChaRng::from_seed(DETERMINISTIC_SEED)
}

/// Should be used only for tests, not for any real world usage.
///
/// The stream is reproducible when `DETERMINISTIC_TEST_RNG=1` is set.
#[cfg(feature = "std")]
pub fn test_rng() -> ChaChaRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    if is_deterministic {
        ChaChaRng::from_seed(DETERMINISTIC_SEED)
    } else {
        ChaChaRng::from_entropy()
    }
}
