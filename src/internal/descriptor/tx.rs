//! TX DMA descriptor for frame transmission.

use super::VolatileCell;
use super::bits::txd_status;

/// TX DMA descriptor (8 bytes, SAM GMAC layout).
#[repr(C, align(8))]
pub struct TxDescriptor {
    /// Word 0: buffer address (0 when the slot is idle)
    addr: VolatileCell<u32>,
    /// Word 1: used/wrap/last flags, frame length and error status
    status: VolatileCell<u32>,
}

impl TxDescriptor {
    /// Size of the descriptor in bytes
    pub const SIZE: usize = 8;

    /// Create a new zeroed TX descriptor.
    ///
    /// A zeroed descriptor reads as hardware-owned; call
    /// [`TxDescriptor::mark_free`] before use.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            addr: VolatileCell::new(0),
            status: VolatileCell::new(0),
        }
    }

    /// Whether software may fill this slot.
    #[inline(always)]
    #[must_use]
    pub fn is_used(&self) -> bool {
        (self.status.get() & txd_status::USED) != 0
    }

    /// Mark the slot free for software, clearing any stale frame state.
    ///
    /// `wrap` marks the final ring slot.
    pub fn mark_free(&self, wrap: bool) {
        let mut status = txd_status::USED;
        if wrap {
            status |= txd_status::WRAP;
        }
        self.status.set(status);
    }

    /// Hand the slot to the DMA with a frame of `len` bytes.
    ///
    /// Single-descriptor frames only, so `LAST` always accompanies the
    /// length. The whole word, including the cleared `USED` bit, is
    /// published in one volatile store.
    pub fn submit(&self, len: u32, wrap: bool) {
        let mut status = (len & txd_status::LEN_MASK) | txd_status::LAST;
        if wrap {
            status |= txd_status::WRAP;
        }
        self.status.set(status);
    }

    /// Buffer address currently queued in this slot.
    #[inline(always)]
    #[must_use]
    pub fn buffer_addr(&self) -> u32 {
        self.addr.get()
    }

    /// Set the buffer address word.
    #[inline(always)]
    pub fn set_buffer_addr(&self, address: u32) {
        self.addr.set(address);
    }

    /// Whether the wrap marker is set on this slot.
    #[inline(always)]
    #[must_use]
    pub fn is_wrap(&self) -> bool {
        (self.status.get() & txd_status::WRAP) != 0
    }

    /// Whether the hardware reported a per-frame transmit error.
    #[inline(always)]
    #[must_use]
    pub fn has_error(&self) -> bool {
        (self.status.get() & txd_status::ALL_ERRORS) != 0
    }

    /// Frame length field of the status word.
    #[inline(always)]
    #[must_use]
    pub fn frame_length(&self) -> u32 {
        self.status.get() & txd_status::LEN_MASK
    }

    /// Raw status word for debugging.
    #[inline(always)]
    #[must_use]
    pub fn raw_status(&self) -> u32 {
        self.status.get()
    }
}

impl Default for TxDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: TxDescriptor uses volatile cells for all DMA-accessed fields
unsafe impl Sync for TxDescriptor {}
unsafe impl Send for TxDescriptor {}

#[cfg(test)]
impl TxDescriptor {
    /// Simulate the DMA finishing transmission of this slot.
    ///
    /// Hardware sets `USED` on the first descriptor of a sent frame and
    /// leaves the remaining status bits describing the outcome.
    pub fn simulate_dma_complete(&self) {
        self.status.update(|status| status | txd_status::USED);
    }
}
