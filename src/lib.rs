//! Synthetic virtual address traces for memory hierarchy simulators.
//!
//! Page indices are drawn from a uniform or Zipfian distribution, joined with
//! a random in-page offset and printed one hex address per line.

pub mod address;
pub mod config;
pub mod error;
pub mod logging;
pub mod sampler;
pub mod trace;
pub mod utils;

pub use error::{Error, Result};
