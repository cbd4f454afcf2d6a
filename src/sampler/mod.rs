//! Page index samplers
//!
//! A sampler draws page indices in `[0, pages)` from a fixed distribution.
//! Two are provided:
//!
//! - **Uniform**: every page is equally likely
//! - **Zipfian**: rank `k` has weight `1/k^s`, rank 1 being page 0
//!
//! Samplers hold no random state themselves. The caller passes the RNG to
//! every draw, so one seeded generator makes a whole run reproducible.

use rand::RngCore;

use crate::error::{Error, Result};

pub mod uniform;
pub mod zipf;

pub use uniform::UniformSampler;
pub use zipf::ZipfSampler;

pub const DEFAULT_SKEW: f64 = 1.0;

/// Which distribution page indices are drawn from.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum DistributionSpec {
    Uniform,
    Zipfian { s: f64 },
}

impl DistributionSpec {
    /// Resolves a distribution name and skew as given on the command line.
    ///
    /// The skew is only checked for `zipfian`.
    pub fn from_name(name: &str, s: f64) -> Result<Self> {
        match name {
            "uniform" => Ok(DistributionSpec::Uniform),
            "zipfian" => {
                check_skew(s)?;
                Ok(DistributionSpec::Zipfian { s })
            }
            other => Err(Error::InvalidParameter(format!(
                "unknown distribution '{}', expected 'uniform' or 'zipfian'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Zipfian { .. } => "zipfian",
        }
    }
}

pub(crate) fn check_skew(s: f64) -> Result<()> {
    if !(s.is_finite() && s > 0.0) {
        return Err(Error::InvalidParameter(format!("skew must be a finite value > 0, got {}", s)));
    }
    Ok(())
}

pub trait Sampler {
    /// Number of pages the sampler draws from.
    fn pages(&self) -> u32;

    /// Draws one page index in `[0, pages)`.
    fn next_page(&self, rng: &mut dyn RngCore) -> u32;

    /// A fresh sequence of `count` independent draws.
    fn sample<'a>(&'a self, rng: &'a mut dyn RngCore, count: u32) -> Pages<'a>
    where
        Self: Sized + 'a,
    {
        Pages { sampler: self, rng, remaining: count }
    }
}

/// Builds the sampler for `spec`. Zipf tables are computed here, before any draw.
pub fn from_spec(spec: DistributionSpec, pages: u32) -> Result<Box<dyn Sampler>> {
    if pages == 0 {
        return Err(Error::InvalidParameter("cannot sample from zero pages".to_string()));
    }
    let sampler: Box<dyn Sampler> = match spec {
        DistributionSpec::Uniform => Box::new(UniformSampler::new(pages)),
        DistributionSpec::Zipfian { s } => Box::new(ZipfSampler::new(pages, s)?),
    };
    Ok(sampler)
}

/// Lazy, finite run of page draws. Consumed once.
pub struct Pages<'a> {
    sampler: &'a dyn Sampler,
    rng: &'a mut dyn RngCore,
    remaining: u32,
}

impl<'a> Pages<'a> {
    pub fn new(sampler: &'a dyn Sampler, rng: &'a mut dyn RngCore, count: u32) -> Self {
        Pages { sampler, rng, remaining: count }
    }
}

impl Iterator for Pages<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.next_page(&mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_resolve() {
        assert_eq!(DistributionSpec::from_name("uniform", 1.0).unwrap(), DistributionSpec::Uniform);
        assert_eq!(
            DistributionSpec::from_name("zipfian", 1.5).unwrap(),
            DistributionSpec::Zipfian { s: 1.5 }
        );
        // skew is ignored for uniform
        assert_eq!(DistributionSpec::from_name("uniform", -3.0).unwrap(), DistributionSpec::Uniform);
    }

    #[test]
    fn unknown_name_is_invalid() {
        for name in ["normal", "Uniform", ""] {
            assert!(matches!(DistributionSpec::from_name(name, 1.0), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn non_positive_skew_is_invalid() {
        for s in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(DistributionSpec::from_name("zipfian", s), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn pages_yields_exactly_count() {
        let mut rng = StdRng::seed_from_u64(3);
        for spec in [DistributionSpec::Uniform, DistributionSpec::Zipfian { s: 1.0 }] {
            let sampler = from_spec(spec, 16).unwrap();
            assert_eq!(sampler.pages(), 16);
            let pages = Pages::new(sampler.as_ref(), &mut rng, 100);
            assert_eq!(pages.len(), 100);
            let drawn: Vec<u32> = pages.collect();
            assert_eq!(drawn.len(), 100);
            assert!(drawn.iter().all(|&p| p < 16));
        }
    }

    #[test]
    fn zero_pages_is_invalid() {
        assert!(matches!(from_spec(DistributionSpec::Uniform, 0), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn empty_run() {
        let mut rng = StdRng::seed_from_u64(3);
        let sampler = UniformSampler::new(8);
        assert_eq!(sampler.sample(&mut rng, 0).count(), 0);
    }
}
