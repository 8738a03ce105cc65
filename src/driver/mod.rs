//! Driver-facing API: the [`gmac::Gmac`] driver plus its configuration,
//! error, event and interrupt-status types.

pub mod config;
pub mod error;
pub mod events;
pub mod gmac;
pub mod interrupt;
