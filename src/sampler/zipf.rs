//! Zipfian page sampler
//!
//! Rank `k` (1-based) has probability `(1/k^s) / H` with
//! `H = sum(1/i^s)` for `i = 1..=pages`. Rank `k` maps to page `k - 1`, so
//! page 0 is the hottest.
//!
//! # Performance
//!
//! The CDF table is built once in `new` (O(pages)). Each draw is an
//! inverse-transform lookup by binary search (O(log pages)).

use log::debug;
use rand::{Rng, RngCore};

use super::{check_skew, Sampler};
use crate::error::{Error, Result};

pub struct ZipfSampler {
    s: f64,
    cdf: Vec<f64>,
}

impl ZipfSampler {
    /// Builds the CDF for `pages` ranks with skew `s`.
    ///
    /// Fails with `InvalidParameter` if `s` is not a finite value above 0
    /// or `pages` is 0.
    pub fn new(pages: u32, s: f64) -> Result<Self> {
        check_skew(s)?;
        if pages == 0 {
            return Err(Error::InvalidParameter("cannot sample from zero pages".to_string()));
        }
        let n = pages as usize;

        // H(N,s) = sum of k^(-s) for k = 1..=N
        let h_n_s: f64 = (1..=n).map(|k| (k as f64).powf(-s)).sum();

        let mut cdf = Vec::with_capacity(n);
        let mut cumulative = 0.0;
        for k in 1..=n {
            cumulative += (k as f64).powf(-s) / h_n_s;
            cdf.push(cumulative);
        }
        // Accumulated rounding can leave the tail just under 1.0
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        debug!("zipf: pages={} s={} H={} cdf[N-1]={}", pages, s, h_n_s, cumulative);
        Ok(ZipfSampler { s, cdf })
    }

    pub fn skew(&self) -> f64 {
        self.s
    }

    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Smallest 0-based rank `k` with `u <= cdf[k]`.
    pub fn rank_of(&self, u: f64) -> usize {
        let k = self.cdf.partition_point(|&c| c < u);
        k.min(self.cdf.len() - 1)
    }
}

impl Sampler for ZipfSampler {
    fn pages(&self) -> u32 {
        self.cdf.len() as u32
    }

    fn next_page(&self, rng: &mut dyn RngCore) -> u32 {
        let u: f64 = rng.gen();
        // rank k + 1 is page k
        self.rank_of(u) as u32
    }
}
