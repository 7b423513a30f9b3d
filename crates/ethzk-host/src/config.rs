// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_std::rand::{rngs::StdRng, SeedableRng};
use tracing::warn;

pub const RNG_SEED_ENV: &str = "ETHZK_RNG_SEED";

/// Host settings. Only randomness is configurable: a fixed seed makes setup
/// and proofs reproducible, otherwise the OS supplies entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub rng_seed: Option<u64>,
}

impl HostConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng_seed: Some(seed) }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// An unparsable seed is logged and ignored.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let rng_seed = get(RNG_SEED_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!(var = RNG_SEED_ENV, value = %raw, error = %e, "ignoring invalid seed");
                None
            }
        });
        Self { rng_seed }
    }

    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
