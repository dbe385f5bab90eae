//! Rate accounting.
//!
//! Raw counts flow in from an ingestion source and are kept by the
//! [`Accumulator`]. On every reporting tick the current interval and the
//! lifetime total are turned into human-scaled [`Scaled`] quantities.

mod accumulator;
mod scale;

#[cfg(test)]
mod tests;

pub use accumulator::Accumulator;
pub use scale::*;
