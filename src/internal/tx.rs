//! Transmit descriptor ring.
//!
//! Software owns a window of the ring between `tail` (oldest frame still
//! in flight) and `head` (next free slot). `enqueue` claims the head
//! slot and hands its buffer to the hardware; the interrupt path reaps
//! completed slots from the tail and returns their buffers through the
//! event callback.
//!
//! The hardware's used bit and the head/tail indexes must agree before a
//! slot is touched, so a concurrent completion interrupt can only ever
//! widen the free window, never corrupt it.
//!
//! Like the receive ring, the descriptor arrays are handed to the DMA by
//! address and must not move after `reset`.

use crate::buffer::{BufferPool, FrameBuffer};
use crate::driver::error::TxRejected;
use crate::driver::events::{GmacEvents, WakeHint};
use crate::hal::GmacHal;
use crate::internal::constants::{TX_PRIORITY_QUEUES, TX_UNIT_SIZE};
use crate::internal::descriptor::TxDescriptor;
use crate::internal::ring;

/// Transmit ring with `N` descriptor/buffer slots.
#[repr(C)]
pub(crate) struct TxRing<const N: usize> {
    descriptors: [TxDescriptor; N],
    /// Permanently-consumed descriptor the unused priority queues park on
    null_descriptor: TxDescriptor,
    buffers: [Option<FrameBuffer>; N],
    head: usize,
    tail: usize,
}

impl<const N: usize> TxRing<N> {
    pub const fn new() -> Self {
        Self {
            descriptors: [const { TxDescriptor::new() }; N],
            null_descriptor: TxDescriptor::new(),
            buffers: [const { None }; N],
            head: 0,
            tail: 0,
        }
    }

    /// Physical base address of the descriptor array.
    pub fn base_addr(&self) -> u32 {
        self.descriptors.as_ptr() as usize as u32
    }

    fn null_addr(&self) -> u32 {
        core::ptr::from_ref(&self.null_descriptor) as usize as u32
    }

    /// Return the ring to its pristine state.
    ///
    /// Disables the transmit circuit, hands every in-flight buffer back
    /// to `pool`, marks all slots free and republishes the ring and
    /// priority queue bases. Used both at startup and to recover after
    /// the hardware halts on a retry-limit error; the caller re-enables
    /// transmit when it is ready.
    pub fn reset<H: GmacHal, P: BufferPool>(&mut self, hal: &mut H, pool: &mut P) {
        hal.enable_transmit(false);

        for slot in &mut self.buffers {
            if let Some(buffer) = slot.take() {
                pool.release(buffer);
            }
        }

        self.head = 0;
        self.tail = 0;
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            descriptor.set_buffer_addr(0);
            descriptor.mark_free(index == N - 1);
        }
        self.null_descriptor.set_buffer_addr(0);
        self.null_descriptor.mark_free(true);

        hal.set_tx_ring_base(self.base_addr());
        // the unused priority queues all park on the one null descriptor
        for queue in 1..=TX_PRIORITY_QUEUES {
            hal.set_tx_priority_queue_base(queue, self.null_addr());
        }
    }

    /// Hand a frame to the hardware.
    ///
    /// Ownership of `buffer` transfers to the ring on success and comes
    /// back through the completion callback. On rejection the buffer is
    /// returned inside the error so the caller can retry or drop it.
    ///
    /// At most `N - 1` frames can be in flight at once; the slot kept
    /// free disambiguates a full ring from an empty one.
    pub fn enqueue<H: GmacHal>(
        &mut self,
        hal: &mut H,
        buffer: FrameBuffer,
        len: usize,
    ) -> Result<(), TxRejected> {
        if len == 0 || len > TX_UNIT_SIZE {
            return Err(TxRejected::InvalidLength(buffer));
        }

        let descriptor = &self.descriptors[self.head];
        if ring::is_full(self.head, self.tail, N) || !descriptor.is_used() {
            return Err(TxRejected::Busy(buffer));
        }

        descriptor.set_buffer_addr(buffer.dma_address());
        // publishing the status word clears the used bit last
        descriptor.submit(len as u32, self.head == N - 1);
        self.buffers[self.head] = Some(buffer);
        self.head = ring::advance(self.head, N);

        hal.start_transmission();
        Ok(())
    }

    /// Reap completed slots from the tail of the ring.
    ///
    /// Walks forward while the hardware has set the used bit, handing
    /// each finished buffer to `events` in submission order. Stops at
    /// the first frame still in flight.
    pub fn complete<E: GmacEvents>(&mut self, events: &mut E) -> WakeHint {
        let mut hint = WakeHint::None;

        while !ring::is_empty(self.head, self.tail) {
            let descriptor = &self.descriptors[self.tail];
            if !descriptor.is_used() {
                break;
            }

            if let Some(buffer) = self.buffers[self.tail].take() {
                hint = hint.combine(events.on_transmit_complete(buffer));
            }
            descriptor.set_buffer_addr(0);
            self.tail = ring::advance(self.tail, N);
        }

        hint
    }

    /// Number of frames currently in flight.
    pub fn load(&self) -> usize {
        ring::count(self.head, self.tail, N)
    }

    #[cfg(test)]
    pub fn descriptor(&self, index: usize) -> &TxDescriptor {
        &self.descriptors[index]
    }

    #[cfg(test)]
    pub fn indexes(&self) -> (usize, usize) {
        (self.head, self.tail)
    }
}
