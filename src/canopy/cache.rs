use std::cell::OnceCell;

use crate::{
    canopy::generator::{CanopyParams, LeafPoint},
    foundation::{error::BloomResult, rng::Rng64},
};

/// Lazily generated, then frozen, canopy for the landing screen.
///
/// The first read runs the generator; every later read returns the same leaves, so re-renders
/// never reshuffle the tree.
#[derive(Debug)]
pub struct LandingCanopy {
    params: CanopyParams,
    leaves: OnceCell<Vec<LeafPoint>>,
}

impl LandingCanopy {
    /// Create an empty cache; parameters are validated up front.
    pub fn new(params: CanopyParams) -> BloomResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            leaves: OnceCell::new(),
        })
    }

    /// Parameters this canopy was (or will be) generated with.
    pub fn params(&self) -> &CanopyParams {
        &self.params
    }

    /// Whether the leaves have been generated yet.
    pub fn is_generated(&self) -> bool {
        self.leaves.get().is_some()
    }

    /// The memoized leaves, generating them on first access.
    pub fn leaves(&self) -> &[LeafPoint] {
        self.leaves.get_or_init(|| {
            let mut rng = match self.params.seed {
                Some(seed) => Rng64::new(seed),
                None => Rng64::from_entropy(),
            };
            self.params.generate(&mut rng)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canopy/cache.rs"]
mod tests;
