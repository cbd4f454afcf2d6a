use std::fs::File;
use std::io::{prelude::*, BufReader};

use crate::address::AddressSpace;
use crate::error::{error, Result};

pub const DEFAULT_PAGES: u32 = 512;
pub const DEFAULT_OFFSET_BITS: u32 = 3;
pub const DEFAULT_TOTAL_ACCESSES: u32 = 10000;

const MAX_PAGES: u32 = 1 << 20;
const MAX_OFFSET_BITS: u32 = 12;
const NUM_FIELDS: usize = 3;

/// Sizes of the address space and of the trace drawn from it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Config {
    pub pages: u32,
    pub offset_bits: u32,
    pub total_accesses: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pages: DEFAULT_PAGES,
            offset_bits: DEFAULT_OFFSET_BITS,
            total_accesses: DEFAULT_TOTAL_ACCESSES,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Config> {
        let file = File::open(path)?;
        Config::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Config> {
        let lines = reader
            .lines()
            .filter_map(|line| line.ok())
            .filter(|line| !line.is_empty() && line.contains(':'));

        // Assume config file is always in correct order
        let opts = {
            let mut fields = Vec::<String>::new();
            for line in lines {
                if let Some(idx) = line.find(':') {
                    let (_left_field, right_field) = line.split_at(idx + 1);
                    fields.push(right_field.trim().to_owned());
                }
            }
            fields
        };

        if opts.len() != NUM_FIELDS {
            error!(InvalidConfig, "Expected {} configuration parameters, found {}.", NUM_FIELDS, opts.len());
        }

        let field = |idx: usize, name: &str| -> Result<u32> {
            match opts[idx].parse::<u32>() {
                Ok(v) => Ok(v),
                Err(e) => error!(InvalidConfig, "Field {} ({}) is '{}': {}", idx, name, opts[idx], e),
            }
        };

        let config = Config {
            pages: field(0, "pages")?,
            offset_bits: field(1, "offset bits")?,
            total_accesses: field(2, "total accesses")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pages > MAX_PAGES {
            error!(InvalidConfig, "The number of pages is {} but max is {}.", self.pages, MAX_PAGES);
        }
        if self.offset_bits > MAX_OFFSET_BITS {
            error!(InvalidConfig, "Offset is {} bits but max is {}.", self.offset_bits, MAX_OFFSET_BITS);
        }
        if self.total_accesses == 0 {
            error!(InvalidConfig, "The number of accesses must be at least 1.");
        }
        self.address_space().validate()
    }

    pub fn address_space(&self) -> AddressSpace {
        AddressSpace::new(self.pages, self.offset_bits)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of pages is {}.", self.pages)?;
        writeln!(f, "Each page contains {} offsets.", 1u64 << self.offset_bits)?;
        writeln!(f, "Number of bits used for the page offset is {}.", self.offset_bits)?;
        write!(f, "The trace holds {} accesses.", self.total_accesses)
    }
}
