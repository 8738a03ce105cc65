//! ISR-safe access helpers built on the `critical-section` crate.

pub mod primitives;
pub mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedGmac;
