//! GMAC DMA descriptor bit field constants.
//!
//! Layout per the SAM E70/SAM4E datasheet: each descriptor is two
//! 32-bit words shared with the DMA engine.

#![allow(dead_code)]

// =============================================================================
// RX Descriptor Word 0 - Address and Ownership
// =============================================================================

/// RX descriptor word 0 (address) bit field constants
pub mod rxd_addr {
    /// Ownership - set by the DMA after writing a buffer; software clears
    /// it to hand the slot back
    pub const OWNERSHIP: u32 = 1 << 0;
    /// Wrap - this is the last descriptor, DMA restarts at index 0
    pub const WRAP: u32 = 1 << 1;
    /// Buffer address mask (word-aligned)
    pub const ADDR_MASK: u32 = 0xFFFF_FFFC;
}

// =============================================================================
// RX Descriptor Word 1 - Status
// =============================================================================

/// RX descriptor word 1 (status) bit field constants
pub mod rxd_status {
    /// Frame length mask (bits 0..=12)
    pub const LEN_MASK: u32 = 0x1FFF;
    /// FCS status when FCS stripping is enabled
    pub const FCS_STATUS: u32 = 1 << 13;
    /// Start of Frame - this slot begins a logical frame
    pub const SOF: u32 = 1 << 14;
    /// End of Frame - this slot ends a logical frame
    pub const EOF: u32 = 1 << 15;
    /// Canonical Form Indicator of a VLAN tagged frame
    pub const CFI: u32 = 1 << 16;
    /// VLAN priority shift (3 bits)
    pub const VLAN_PRIORITY_SHIFT: u32 = 17;
    /// VLAN priority mask
    pub const VLAN_PRIORITY_MASK: u32 = 0x7 << 17;
    /// Priority tag detected
    pub const PRIORITY_DETECTED: u32 = 1 << 20;
    /// VLAN tag detected
    pub const VLAN_DETECTED: u32 = 1 << 21;
    /// Type ID match register index shift (2 bits)
    pub const TYPE_ID_SHIFT: u32 = 22;
    /// Type ID match register index mask
    pub const TYPE_ID_MASK: u32 = 0x3 << 22;
    /// Type ID register match found
    pub const TYPE_ID_MATCH: u32 = 1 << 24;
    /// Specific address register index shift (2 bits)
    pub const ADDR_MATCH_SHIFT: u32 = 25;
    /// Specific address register index mask
    pub const ADDR_MATCH_MASK: u32 = 0x3 << 25;
    /// Specific address register match found
    pub const ADDR_MATCH: u32 = 1 << 27;
    /// Unicast hash match
    pub const UNICAST_HASH: u32 = 1 << 29;
    /// Multicast hash match
    pub const MULTICAST_HASH: u32 = 1 << 30;
    /// Broadcast address detected
    pub const BROADCAST: u32 = 1 << 31;
}

// =============================================================================
// TX Descriptor Word 1 - Status and Control
// =============================================================================

/// TX descriptor word 1 (status) bit field constants.
///
/// Word 0 of a TX descriptor is the plain buffer address (0 when idle).
pub mod txd_status {
    /// Frame length mask (bits 0..=13)
    pub const LEN_MASK: u32 = 0x3FFF;
    /// Last buffer of the frame
    pub const LAST: u32 = 1 << 15;
    /// Do not append CRC to this frame
    pub const NO_CRC: u32 = 1 << 16;
    /// Checksum generation error shift (3 bits)
    pub const CHECKSUM_ERR_SHIFT: u32 = 20;
    /// Checksum generation error mask
    pub const CHECKSUM_ERR_MASK: u32 = 0x7 << 20;
    /// Late collision detected during transmission
    pub const LATE_COLLISION: u32 = 1 << 26;
    /// Buffers exhausted in mid-frame
    pub const EXHAUSTED: u32 = 1 << 27;
    /// Transmit underrun
    pub const UNDERRUN: u32 = 1 << 28;
    /// Retry limit exceeded, transmit error detected
    pub const RETRY_EXCEEDED: u32 = 1 << 29;
    /// Wrap - this is the last descriptor, DMA restarts at index 0
    pub const WRAP: u32 = 1 << 30;
    /// Used - set when software may fill the slot; cleared to hand the
    /// slot to the DMA, set again by hardware after transmission
    pub const USED: u32 = 1 << 31;

    /// All per-frame transmit error bits
    pub const ALL_ERRORS: u32 = LATE_COLLISION | EXHAUSTED | UNDERRUN | RETRY_EXCEEDED;
}
