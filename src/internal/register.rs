//! GMAC status register bit definitions.
//!
//! Only the registers the data plane reads or clears are described here:
//! the interrupt status register (ISR), receive status register (RSR)
//! and transmit status register (TSR). Programming of the configuration
//! registers happens behind the [`crate::hal::GmacHal`] seam.

#![allow(dead_code)]

// =============================================================================
// Interrupt Status Register (ISR)
// =============================================================================

/// Interrupt Status Register bit constants
pub mod isr {
    /// Management Frame Sent
    pub const MFS: u32 = 1 << 0;
    /// Receive Complete - a frame has been stored in memory
    pub const RCOMP: u32 = 1 << 1;
    /// Receive Used Bit Read - DMA found no free receive slot
    pub const RXUBR: u32 = 1 << 2;
    /// Transmit Used Bit Read - DMA read a slot it does not own
    pub const TXUBR: u32 = 1 << 3;
    /// Transmit Underrun
    pub const TUR: u32 = 1 << 4;
    /// Retry Limit Exceeded
    pub const RLEX: u32 = 1 << 5;
    /// Transmit Frame Corruption due to AHB error
    pub const TFC: u32 = 1 << 6;
    /// Transmit Complete - a frame has been sent
    pub const TCOMP: u32 = 1 << 7;
    /// Receive Overrun
    pub const ROVR: u32 = 1 << 10;
    /// HRESP Not OK - AHB bus error
    pub const HRESP: u32 = 1 << 11;
    /// Pause Frame with Non-Zero Pause Quantum Received
    pub const PFNZ: u32 = 1 << 12;
    /// Pause Time Zero
    pub const PTZ: u32 = 1 << 13;
}

/// Interrupt causes the driver enables at start-up.
pub const DEFAULT_INT_MASK: u32 = isr::RLEX
    | isr::RCOMP
    | isr::RXUBR
    | isr::ROVR
    | isr::TCOMP
    | isr::TUR
    | isr::TFC
    | isr::HRESP
    | isr::PFNZ
    | isr::PTZ;

// =============================================================================
// Receive Status Register (RSR)
// =============================================================================

/// Receive Status Register bit constants
pub mod rsr {
    /// Buffer Not Available - DMA hit a slot it does not own
    pub const BNA: u32 = 1 << 0;
    /// Frame Received - at least one frame stored in memory
    pub const REC: u32 = 1 << 1;
    /// Receive Overrun
    pub const RXOVR: u32 = 1 << 2;
    /// HRESP Not OK while receiving
    pub const HNO: u32 = 1 << 3;

    /// All write-one-to-clear RSR bits
    pub const ALL: u32 = BNA | REC | RXOVR | HNO;
    /// Bits that indicate a receive error condition
    pub const ERRORS: u32 = BNA | RXOVR | HNO;
}

// =============================================================================
// Transmit Status Register (TSR)
// =============================================================================

/// Transmit Status Register bit constants
pub mod tsr {
    /// Used Bit Read - DMA read a slot still marked used
    pub const UBR: u32 = 1 << 0;
    /// Collision Occurred
    pub const COL: u32 = 1 << 1;
    /// Retry Limit Exceeded - frame abandoned after too many retries
    pub const RLE: u32 = 1 << 2;
    /// Transmit Go - transmission in progress
    pub const TXGO: u32 = 1 << 3;
    /// Transmit Frame Corruption due to AHB error
    pub const TFC: u32 = 1 << 4;
    /// Transmit Complete - a frame has been sent
    pub const TXCOMP: u32 = 1 << 5;
    /// HRESP Not OK while transmitting
    pub const HRESP: u32 = 1 << 8;

    /// All write-one-to-clear TSR bits
    pub const ALL: u32 = UBR | COL | RLE | TXGO | TFC | TXCOMP | HRESP;
}
