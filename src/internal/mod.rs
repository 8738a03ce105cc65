//! Internal implementation details.
//!
//! Types in this module are not part of the public API and may change
//! without notice between minor versions. The driver re-exports the
//! pieces callers need.
//!
//! # Contents
//!
//! - [`ring`]: circular index arithmetic shared by both rings
//! - [`descriptor`]: DMA descriptor layout and bit fields
//! - [`register`]: interrupt and status register bit definitions
//! - [`rx`]: receive descriptor ring
//! - [`tx`]: transmit descriptor ring
//! - [`constants`]: sizes and magic numbers

pub(crate) mod constants;
pub(crate) mod descriptor;
pub(crate) mod register;
pub(crate) mod ring;
pub(crate) mod rx;
pub(crate) mod tx;
