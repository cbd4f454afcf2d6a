use std::io::{BufRead, Write};

use log::info;
use rand::RngCore;

use crate::address::AddressSpace;
use crate::config::Config;
use crate::error::{error, Error, Result};
use crate::sampler::{self, DistributionSpec, Pages};

/// A complete access trace over one address space.
///
/// The whole trace is built before any of it is written, so a failed
/// generation never leaves a partial trace on the output.
#[derive(Debug)]
pub struct Trace {
    space: AddressSpace,
    addrs: Vec<u32>,
}

impl Trace {
    /// Draws `config.total_accesses` pages from `spec` and encodes each one
    /// with a fresh random offset.
    pub fn generate<R: RngCore>(spec: DistributionSpec, config: &Config, rng: &mut R) -> Result<Trace> {
        config.validate()?;
        let space = config.address_space();
        let sampler = sampler::from_spec(spec, space.pages())?;
        info!("sampling {} pages from a {} distribution", config.total_accesses, spec.as_str());

        let mut pages = Vec::with_capacity(config.total_accesses as usize);
        pages.extend(Pages::new(sampler.as_ref(), &mut *rng, config.total_accesses));

        let mut addrs = Vec::with_capacity(pages.len());
        for page in pages {
            addrs.push(space.encode(page, &mut *rng)?);
        }
        Ok(Trace { space, addrs })
    }

    pub fn addrs(&self) -> &[u32] {
        &self.addrs
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn space(&self) -> AddressSpace {
        self.space
    }

    /// Writes the count header, one `0x`-prefixed zero-padded hex address
    /// per line, and a closing blank line.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        let width = self.space.hex_width();
        writeln!(out, "{}", self.addrs.len())?;
        for addr in &self.addrs {
            writeln!(out, "0x{:0width$x}", addr, width = width)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Reads a trace in the format `write_to` produces.
    pub fn parse<R: BufRead>(reader: R, space: AddressSpace) -> Result<Trace> {
        space.validate()?;
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => error!(MalformedTrace, "empty input, expected a count header"),
        };
        let count = match header.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => error!(MalformedTrace, "header '{}' is not a count", header),
        };

        let mut addrs = Vec::new();
        let mut seen_blank = false;
        for (idx, line) in lines.enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                seen_blank = true;
                continue;
            }
            if seen_blank {
                error!(MalformedTrace, "address after blank line at line {}", idx + 2);
            }
            let digits = match line.strip_prefix("0x").or_else(|| line.strip_prefix("0X")) {
                Some(d) => d,
                None => error!(MalformedTrace, "line {} '{}' has no 0x prefix", idx + 2, line),
            };
            let addr = match u32::from_str_radix(digits, 16) {
                Ok(a) => a,
                Err(_) => error!(MalformedTrace, "line {} '{}' is not a hex address", idx + 2, line),
            };
            if !space.contains(addr) {
                return Err(Error::OutOfRange { page: space.decode(addr), pages: space.pages() });
            }
            addrs.push(addr);
        }

        if addrs.len() != count {
            error!(MalformedTrace, "header says {} addresses but found {}", count, addrs.len());
        }
        Ok(Trace { space, addrs })
    }

    /// Access count of every page, indexed by page.
    pub fn page_histogram(&self) -> Vec<u32> {
        let mut hist = vec![0u32; self.space.pages() as usize];
        for &addr in &self.addrs {
            hist[self.space.decode(addr) as usize] += 1;
        }
        hist
    }
}
