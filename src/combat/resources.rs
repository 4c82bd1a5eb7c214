//! Combat domain: RNG resource for attack selection.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable RNG behind attack-variant selection, so tests can pin the
/// sequence.
#[derive(Resource, Debug)]
pub struct AttackRng(pub ChaCha8Rng);

impl Default for AttackRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_os_rng())
    }
}

impl AttackRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
