//! Uniform page sampler
//!
//! Every page in `[0, pages)` has probability `1/pages` on each draw.

use rand::distributions::Uniform;
use rand::{Rng, RngCore};

use super::Sampler;

pub struct UniformSampler {
    pages: u32,
    dist: Uniform<u32>,
}

impl UniformSampler {
    /// # Panics
    ///
    /// Panics if `pages` is 0.
    pub fn new(pages: u32) -> Self {
        assert!(pages > 0, "Uniform sampler needs at least one page");
        UniformSampler { pages, dist: Uniform::new(0, pages) }
    }
}

impl Sampler for UniformSampler {
    fn pages(&self) -> u32 {
        self.pages
    }

    #[inline]
    fn next_page(&self, rng: &mut dyn RngCore) -> u32 {
        rng.sample(&self.dist)
    }
}
