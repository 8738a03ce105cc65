//! SAM GMAC Data Plane Driver
//!
//! A `no_std`, `no_alloc` Rust implementation of the Gigabit Ethernet MAC
//! (GMAC) data plane found on the Microchip/Atmel SAM E70 and SAM4E
//! families.
//!
//! The driver covers the lock-free descriptor-ring protocol between
//! software and the GMAC DMA: buffer hand-off over the receive and
//! transmit rings, interrupt dispatch, and recovery from the error
//! states the hardware can park itself in. Register access and buffer
//! allocation stay behind traits so the same core runs against real
//! hardware or host-side mocks.
//!
//! # Architecture
//!
//! 1. **Driver** ([`driver::gmac`]): The [`Gmac`] type, tying the rings
//!    to the HAL and the buffer pool
//! 2. **Rings** (`internal`): Receive and transmit descriptor rings with
//!    their shadow buffer tables
//! 3. **Seams** ([`hal`], [`buffer`]): [`GmacHal`] for register access,
//!    [`BufferPool`] for frame memory, [`GmacEvents`] for interrupt
//!    callbacks
//!
//! # Concurrency Model
//!
//! The task context and the interrupt context never negotiate over a
//! lock. Each receive descriptor carries an ownership bit the hardware
//! sets on delivery and software clears on release; each transmit
//! descriptor carries a used bit with the opposite hand-off direction.
//! Software only ever touches slots the bits say it owns, so the worst
//! a concurrent interrupt can do is make more slots available.
//!
//! Wrap a static driver in [`sync::SharedGmac`] (feature
//! `critical-section`) to share it between the two contexts safely.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for status and error types
//! - `critical-section`: Enable the ISR-safe [`sync::SharedGmac`] wrapper
//!
//! # Example
//!
//! ```ignore
//! use sam_gmac::{Gmac, GmacConfig, WakeHint};
//!
//! let mut gmac: Gmac<8, 8, BoardHal> = Gmac::new(BoardHal::take());
//!
//! let config = GmacConfig::new()
//!     .with_mac_address([0x02, 0x00, 0x00, 0x12, 0x34, 0x56]);
//! gmac.init(config, &mut pool)?;
//!
//! // task context
//! while gmac.poll_rx() != 0 {
//!     let frame = gmac.read_rx(&mut pool)?;
//!     stack.deliver(frame);
//! }
//!
//! // interrupt context
//! let hint = gmac.handle_interrupt(&mut pool, &mut events);
//! if hint.should_wake() {
//!     yield_from_isr();
//! }
//! ```
//!
//! # Memory Requirements
//!
//! The driver itself only embeds the descriptor arrays and shadow
//! tables (8 bytes of descriptor plus one buffer handle per slot);
//! frame memory lives in the caller's [`BufferPool`].

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod buffer;
pub mod driver;
pub mod hal;
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use buffer::{BufferPool, FrameBuffer, ReceivedFrame};
pub use driver::config::{Duplex, GmacConfig, Speed, State};
pub use driver::error::{
    ConfigError, ConfigResult, DmaError, DmaResult, Error, IoError, IoResult, Result, TxRejected,
};
pub use driver::events::{GmacEvents, WakeHint};
pub use driver::gmac::{Gmac, GmacDefault, GmacLarge, GmacSmall};
pub use driver::interrupt::{InterruptStatus, RxEvent, TxEvent};
pub use hal::GmacHal;

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::{CriticalSectionCell, SharedGmac};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types and integration points.
pub mod constants {
    pub use crate::internal::constants::{
        CRC_SIZE, DEFAULT_MAC_ADDR, DEFAULT_RX_SLOTS, DEFAULT_TX_SLOTS, DESCRIPTOR_ALIGN,
        DMA_BUFFER_UNIT, ETH_HEADER_SIZE, MAX_FRAME_SIZE, MTU, RX_DATA_OFFSET, RX_UNIT_SIZE,
        TX_PRIORITY_QUEUES, TX_UNIT_SIZE,
    };
}
