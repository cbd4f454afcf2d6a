//! Virtual address layout: a page index in the high bits, an offset in the low bits.

use rand::{Rng, RngCore};

use crate::error::{error, Error, Result};
use crate::utils::bits;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct AddressSpace {
    pages: u32,
    offset_bits: u32,
}

impl AddressSpace {
    pub fn new(pages: u32, offset_bits: u32) -> Self {
        AddressSpace { pages, offset_bits }
    }

    /// Checks that the space is non-empty and every address fits a u32.
    pub fn validate(&self) -> Result<()> {
        if self.pages == 0 {
            error!(InvalidConfig, "The number of pages must be at least 1.");
        }
        if self.offset_bits >= bits::bit_size::<u32>() as u32
            || (self.pages as u64) << self.offset_bits > u32::MAX as u64 + 1
        {
            error!(InvalidConfig, "{} pages of {} offset bits do not fit a 32-bit address.", self.pages, self.offset_bits);
        }
        Ok(())
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of distinct offsets in one page.
    pub fn page_size(&self) -> u32 {
        1 << self.offset_bits
    }

    /// Largest address in the space, `pages * 2^offset_bits - 1`.
    pub fn max_addr(&self) -> u32 {
        ((self.pages as u64) << self.offset_bits).saturating_sub(1) as u32
    }

    /// Hex digits needed to print any address of the space.
    pub fn hex_width(&self) -> usize {
        bits::hex_digits(self.max_addr())
    }

    /// Builds an address from `page` and an offset drawn uniformly from `rng`.
    pub fn encode(&self, page: u32, rng: &mut dyn RngCore) -> Result<u32> {
        let offset = rng.gen_range(0..self.page_size());
        self.encode_with(page, offset)
    }

    pub fn encode_with(&self, page: u32, offset: u32) -> Result<u32> {
        if page >= self.pages {
            return Err(Error::OutOfRange { page, pages: self.pages });
        }
        debug_assert!(offset < self.page_size());
        Ok(bits::join_at(page, offset, self.offset_bits))
    }

    /// Recovers the page index of `addr`, discarding the offset.
    pub fn decode(&self, addr: u32) -> u32 {
        bits::split_at(addr, self.offset_bits).0
    }

    pub fn contains(&self, addr: u32) -> bool {
        addr <= self.max_addr()
    }
}
