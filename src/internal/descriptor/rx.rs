//! RX DMA descriptor for frame reception.

use super::VolatileCell;
use super::bits::{rxd_addr, rxd_status};

/// Which party currently holds the buffer behind a receive slot.
///
/// The DMA engine may write into a [`SlotOwner::Hardware`] slot; a
/// [`SlotOwner::Software`] slot has been written by the DMA and not yet
/// handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotOwner {
    /// The DMA engine may write a received frame into the buffer
    Hardware,
    /// Software has the frame and has not yet returned a buffer
    Software,
}

/// RX DMA descriptor (8 bytes, SAM GMAC layout).
#[repr(C, align(8))]
pub struct RxDescriptor {
    /// Word 0: buffer address, ownership and wrap bits
    addr: VolatileCell<u32>,
    /// Word 1: frame length, SOF/EOF and match status
    status: VolatileCell<u32>,
}

impl RxDescriptor {
    /// Size of the descriptor in bytes
    pub const SIZE: usize = 8;

    /// Create a new zeroed RX descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            addr: VolatileCell::new(0),
            status: VolatileCell::new(0),
        }
    }

    /// Install a buffer address, resetting the slot to hardware ownership.
    ///
    /// The address must be word-aligned; `wrap` marks the final ring slot.
    pub fn install_buffer(&self, address: u32, wrap: bool) {
        let mut word = address & rxd_addr::ADDR_MASK;
        if wrap {
            word |= rxd_addr::WRAP;
        }
        self.addr.set(word);
        self.status.set(0);
    }

    /// Replace only the buffer address, preserving ownership and wrap bits.
    ///
    /// Used when swapping a fresh buffer into a slot that still holds a
    /// received frame; the slot stays software-owned until released.
    pub fn swap_buffer(&self, address: u32) {
        self.addr
            .update(|word| (word & !rxd_addr::ADDR_MASK) | (address & rxd_addr::ADDR_MASK));
    }

    /// Which party owns the slot right now.
    #[inline(always)]
    #[must_use]
    pub fn owner(&self) -> SlotOwner {
        if (self.addr.get() & rxd_addr::OWNERSHIP) != 0 {
            SlotOwner::Software
        } else {
            SlotOwner::Hardware
        }
    }

    /// Whether the DMA has written this slot and software has not yet
    /// handed it back.
    #[inline(always)]
    #[must_use]
    pub fn is_software_owned(&self) -> bool {
        self.owner() == SlotOwner::Software
    }

    /// Hand the slot back to the DMA engine for reuse.
    #[inline(always)]
    pub fn release_to_hardware(&self) {
        self.addr.update(|word| word & !rxd_addr::OWNERSHIP);
    }

    /// Whether this slot begins a logical frame.
    #[inline(always)]
    #[must_use]
    pub fn is_start_of_frame(&self) -> bool {
        (self.status.get() & rxd_status::SOF) != 0
    }

    /// Whether this slot ends a logical frame.
    #[inline(always)]
    #[must_use]
    pub fn is_end_of_frame(&self) -> bool {
        (self.status.get() & rxd_status::EOF) != 0
    }

    /// Whether the frame is fully contained in this single slot.
    #[inline(always)]
    #[must_use]
    pub fn is_whole_frame(&self) -> bool {
        let status = self.status.get();
        (status & (rxd_status::SOF | rxd_status::EOF)) == (rxd_status::SOF | rxd_status::EOF)
    }

    /// Frame length in bytes as reported by the DMA.
    #[inline(always)]
    #[must_use]
    pub fn frame_length(&self) -> u32 {
        self.status.get() & rxd_status::LEN_MASK
    }

    /// Whether the wrap marker is set on this slot.
    #[inline(always)]
    #[must_use]
    pub fn is_wrap(&self) -> bool {
        (self.addr.get() & rxd_addr::WRAP) != 0
    }

    /// Buffer address currently described to the hardware.
    #[inline(always)]
    #[must_use]
    pub fn buffer_addr(&self) -> u32 {
        self.addr.get() & rxd_addr::ADDR_MASK
    }

    /// Raw word 0 for debugging.
    #[inline(always)]
    #[must_use]
    pub fn raw_addr(&self) -> u32 {
        self.addr.get()
    }

    /// Raw word 1 for debugging.
    #[inline(always)]
    #[must_use]
    pub fn raw_status(&self) -> u32 {
        self.status.get()
    }
}

impl Default for RxDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: RxDescriptor uses volatile cells for all DMA-accessed fields
unsafe impl Sync for RxDescriptor {}
unsafe impl Send for RxDescriptor {}

#[cfg(test)]
impl RxDescriptor {
    /// Simulate the DMA writing a frame segment into this slot.
    pub fn simulate_dma_write(&self, len: u32, sof: bool, eof: bool) {
        let mut status = len & rxd_status::LEN_MASK;
        if sof {
            status |= rxd_status::SOF;
        }
        if eof {
            status |= rxd_status::EOF;
        }
        self.status.set(status);
        self.addr.update(|word| word | rxd_addr::OWNERSHIP);
    }
}
