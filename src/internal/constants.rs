//! Centralized Constants
//!
//! Single source of truth for the magic numbers used throughout the GMAC
//! data plane.
//!
//! # Note
//!
//! Hardware register and descriptor bit definitions remain in their
//! respective modules (`register.rs`, `descriptor/bits.rs`) as they are
//! specific to those hardware blocks.

// =============================================================================
// Frame and Buffer Sizes
// =============================================================================

/// Maximum Ethernet frame size the GMAC is configured for (MAXFS)
pub const MAX_FRAME_SIZE: usize = 1536;

/// Standard Ethernet MTU (Maximum Transmission Unit)
pub const MTU: usize = 1500;

/// Ethernet header size (dst MAC + src MAC + EtherType)
pub const ETH_HEADER_SIZE: usize = 14;

/// CRC/FCS size at end of frame
pub const CRC_SIZE: usize = 4;

/// Default per-slot receive buffer unit size.
///
/// Programmed into the DMA receive buffer size field in multiples of
/// [`DMA_BUFFER_UNIT`]; large enough that a maximum-size frame fits in
/// one slot.
pub const RX_UNIT_SIZE: usize = 1536;

/// Maximum payload a single transmit descriptor can carry.
///
/// Multi-descriptor transmit is not supported, so this is also the
/// largest frame `enqueue` accepts.
pub const TX_UNIT_SIZE: usize = 1536;

/// Granularity of the DMA receive buffer size field (DRBS)
pub const DMA_BUFFER_UNIT: usize = 64;

/// Receive payload offset in bytes.
///
/// Receive buffers are described to the hardware 2 bytes before the
/// payload so the transported protocol header lands word-aligned.
pub const RX_DATA_OFFSET: usize = 2;

/// Default MAC address (locally administered) used when none is provided
pub const DEFAULT_MAC_ADDR: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];

// =============================================================================
// Ring Geometry
// =============================================================================

/// Default number of receive descriptors/buffers
pub const DEFAULT_RX_SLOTS: usize = 8;

/// Default number of transmit descriptors/buffers
pub const DEFAULT_TX_SLOTS: usize = 8;

/// Required alignment of the descriptor arrays in bytes
pub const DESCRIPTOR_ALIGN: usize = 8;

/// Number of transmit priority sub-queues the hardware exposes beyond
/// queue 0. Unused by this driver; each is parked on a null descriptor.
pub const TX_PRIORITY_QUEUES: usize = 5;
