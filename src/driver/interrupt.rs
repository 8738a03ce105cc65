//! Decoded views of the GMAC interrupt and status registers.
//!
//! The dispatcher decodes each register word into one of these types as
//! soon as it is read and works on the named flags from there; the same
//! decoded values reach the callbacks, logging and tests. Each decodes
//! with `from_raw` and re-encodes with `to_raw`.

use crate::internal::register::{isr, rsr, tsr};

// =============================================================================
// Interrupt Status Register
// =============================================================================

/// Decoded GMAC interrupt status register (ISR).
///
/// The hardware clears this register on read, so a decoded value
/// represents every event since the previous read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// Frame received (RCOMP)
    pub rx_complete: bool,
    /// Receive descriptor ran out of free slots (RXUBR)
    pub rx_used_bit_read: bool,
    /// Receive FIFO overrun (ROVR)
    pub rx_overrun: bool,
    /// Frame transmitted (TCOMP)
    pub tx_complete: bool,
    /// Transmit FIFO underrun (TUR)
    pub tx_underrun: bool,
    /// Transmit frame corrupted by bus error (TFC)
    pub tx_frame_corruption: bool,
    /// Retry limit exceeded on transmit (RLEX)
    pub tx_retry_limit_exceeded: bool,
    /// AHB bus error during a DMA access (HRESP)
    pub bus_error: bool,
    /// PAUSE frame with non-zero quantum received (PFNZ)
    pub pause_received: bool,
    /// PAUSE timer reached zero (PTZ)
    pub pause_time_zero: bool,
}

impl InterruptStatus {
    /// Decode a raw ISR value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            rx_complete: raw & isr::RCOMP != 0,
            rx_used_bit_read: raw & isr::RXUBR != 0,
            rx_overrun: raw & isr::ROVR != 0,
            tx_complete: raw & isr::TCOMP != 0,
            tx_underrun: raw & isr::TUR != 0,
            tx_frame_corruption: raw & isr::TFC != 0,
            tx_retry_limit_exceeded: raw & isr::RLEX != 0,
            bus_error: raw & isr::HRESP != 0,
            pause_received: raw & isr::PFNZ != 0,
            pause_time_zero: raw & isr::PTZ != 0,
        }
    }

    /// Re-encode into the raw register layout.
    #[must_use]
    pub const fn to_raw(&self) -> u32 {
        let mut raw = 0;
        if self.rx_complete {
            raw |= isr::RCOMP;
        }
        if self.rx_used_bit_read {
            raw |= isr::RXUBR;
        }
        if self.rx_overrun {
            raw |= isr::ROVR;
        }
        if self.tx_complete {
            raw |= isr::TCOMP;
        }
        if self.tx_underrun {
            raw |= isr::TUR;
        }
        if self.tx_frame_corruption {
            raw |= isr::TFC;
        }
        if self.tx_retry_limit_exceeded {
            raw |= isr::RLEX;
        }
        if self.bus_error {
            raw |= isr::HRESP;
        }
        if self.pause_received {
            raw |= isr::PFNZ;
        }
        if self.pause_time_zero {
            raw |= isr::PTZ;
        }
        raw
    }

    /// True when any decoded flag is set.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.to_raw() != 0
    }

    /// True when any error condition is present.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.rx_used_bit_read
            || self.rx_overrun
            || self.tx_underrun
            || self.tx_frame_corruption
            || self.tx_retry_limit_exceeded
            || self.bus_error
    }
}

// =============================================================================
// Receive Status Register
// =============================================================================

/// Decoded receive status register (RSR), as handed to the receive
/// event callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxEvent {
    /// At least one frame landed in the ring (REC)
    pub frame_received: bool,
    /// The DMA found no free descriptor for an incoming frame (BNA)
    pub buffer_not_available: bool,
    /// Receive FIFO overran (RXOVR)
    pub overrun: bool,
    /// HRESP not OK during a receive access (HNO)
    pub bus_error: bool,
}

impl RxEvent {
    /// Decode a raw RSR value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            frame_received: raw & rsr::REC != 0,
            buffer_not_available: raw & rsr::BNA != 0,
            overrun: raw & rsr::RXOVR != 0,
            bus_error: raw & rsr::HNO != 0,
        }
    }

    /// Re-encode into the raw register layout.
    #[must_use]
    pub const fn to_raw(&self) -> u32 {
        let mut raw = 0;
        if self.frame_received {
            raw |= rsr::REC;
        }
        if self.buffer_not_available {
            raw |= rsr::BNA;
        }
        if self.overrun {
            raw |= rsr::RXOVR;
        }
        if self.bus_error {
            raw |= rsr::HNO;
        }
        raw
    }

    /// True when any decoded flag is set.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.to_raw() != 0
    }

    /// True when any error condition is present.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.buffer_not_available || self.overrun || self.bus_error
    }
}

// =============================================================================
// Transmit Status Register
// =============================================================================

/// Decoded transmit status register (TSR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxEvent {
    /// A frame finished transmitting (TXCOMP)
    pub complete: bool,
    /// A collision occurred (COL)
    pub collision: bool,
    /// Retry limit exceeded; the transmit circuit halted (RLE)
    pub retry_limit_exceeded: bool,
    /// Transmitter is active (TXGO)
    pub transmit_active: bool,
    /// Transmit FIFO underran mid-frame (UBR/TFC)
    pub frame_corruption: bool,
    /// HRESP not OK during a transmit access (HRESP)
    pub bus_error: bool,
}

impl TxEvent {
    /// Decode a raw TSR value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            complete: raw & tsr::TXCOMP != 0,
            collision: raw & tsr::COL != 0,
            retry_limit_exceeded: raw & tsr::RLE != 0,
            transmit_active: raw & tsr::TXGO != 0,
            frame_corruption: raw & (tsr::UBR | tsr::TFC) != 0,
            bus_error: raw & tsr::HRESP != 0,
        }
    }

    /// Re-encode into the raw register layout.
    ///
    /// `frame_corruption` covers both UBR and TFC, so it re-encodes as
    /// both bits.
    #[must_use]
    pub const fn to_raw(&self) -> u32 {
        let mut raw = 0;
        if self.complete {
            raw |= tsr::TXCOMP;
        }
        if self.collision {
            raw |= tsr::COL;
        }
        if self.retry_limit_exceeded {
            raw |= tsr::RLE;
        }
        if self.transmit_active {
            raw |= tsr::TXGO;
        }
        if self.frame_corruption {
            raw |= tsr::UBR | tsr::TFC;
        }
        if self.bus_error {
            raw |= tsr::HRESP;
        }
        raw
    }

    /// True when any error condition is present.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.retry_limit_exceeded || self.frame_corruption || self.bus_error
    }
}
