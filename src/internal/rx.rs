//! Receive descriptor ring.
//!
//! The ring pairs a DMA-visible descriptor array with a shadow array of
//! owned buffer handles. The hardware writes frames into the buffers and
//! flips each descriptor's ownership bit; software walks the ring from
//! `read_index`, hands out completed frames and returns slots to the
//! hardware.
//!
//! Delivery is zero-copy: `read` swaps a fresh buffer into the slot and
//! moves the filled one out to the caller. A frame that did not fit in a
//! single slot cannot be delivered; its slots are drained back to the
//! hardware so the ring recovers on its own.
//!
//! The descriptor array is handed to the DMA by physical address, so the
//! ring must not move in memory once `reset` has programmed it.

use crate::buffer::{BufferPool, FrameBuffer, ReceivedFrame};
use crate::driver::error::{DmaError, DmaResult, Error, IoError};
use crate::hal::GmacHal;
use crate::internal::constants::RX_DATA_OFFSET;
use crate::internal::descriptor::RxDescriptor;
use crate::internal::ring;

/// Receive ring with `N` descriptor/buffer slots.
#[repr(C)]
pub(crate) struct RxRing<const N: usize> {
    descriptors: [RxDescriptor; N],
    buffers: [Option<FrameBuffer>; N],
    read_index: usize,
    unit_size: usize,
}

impl<const N: usize> RxRing<N> {
    pub const fn new() -> Self {
        Self {
            descriptors: [const { RxDescriptor::new() }; N],
            buffers: [const { None }; N],
            read_index: 0,
            unit_size: 0,
        }
    }

    /// Physical base address of the descriptor array.
    pub fn base_addr(&self) -> u32 {
        self.descriptors.as_ptr() as usize as u32
    }

    /// Populate every slot with a fresh buffer and program the ring base.
    ///
    /// Disables the receive circuit and releases any buffers still held
    /// from a previous run, so the reset is idempotent. The caller
    /// re-enables reception afterwards; on
    /// [`DmaError::NoBufferAvailable`] the ring is left empty and the
    /// receive circuit must stay disabled.
    pub fn reset<H: GmacHal, P: BufferPool>(
        &mut self,
        hal: &mut H,
        pool: &mut P,
        unit_size: usize,
    ) -> DmaResult<()> {
        hal.enable_receive(false);

        for slot in &mut self.buffers {
            if let Some(buffer) = slot.take() {
                pool.release(buffer);
            }
        }
        self.unit_size = unit_size;

        for index in 0..N {
            let Some(buffer) = pool.acquire(unit_size) else {
                for slot in &mut self.buffers {
                    if let Some(buffer) = slot.take() {
                        pool.release(buffer);
                    }
                }
                return Err(DmaError::NoBufferAvailable);
            };
            self.descriptors[index].install_buffer(buffer.dma_address(), index == N - 1);
            self.buffers[index] = Some(buffer);
        }
        self.read_index = 0;
        hal.set_rx_ring_base(self.base_addr());
        Ok(())
    }

    /// Length of the next whole frame waiting at `read_index`, or 0.
    ///
    /// Walks software-owned slots starting at `read_index`. A readable
    /// slot that is not a whole frame (missing start-of-frame or
    /// end-of-frame) is the remnant of an oversized or torn reception;
    /// it is released back to the hardware and the walk continues, so
    /// the ring heals itself without outside help.
    pub fn poll(&mut self) -> u32 {
        let mut index = self.read_index;
        while self.descriptors[index].is_software_owned() {
            if self.descriptors[index].is_whole_frame() {
                return self.descriptors[index].frame_length();
            }

            self.descriptors[index].release_to_hardware();
            index = ring::advance(index, N);
            self.read_index = index;
        }
        0
    }

    /// Take the next completed frame out of the ring.
    ///
    /// The slot is restocked with a buffer from `pool` before the filled
    /// one is handed out. When the pool is empty the ring is left
    /// untouched so the frame can be retried later; receiving continues
    /// to back up until a buffer frees up, which the hardware reports as
    /// buffer-not-available.
    ///
    /// The returned length includes the receive data offset bytes in
    /// front of the payload.
    pub fn read<P: BufferPool>(&mut self, pool: &mut P) -> Result<ReceivedFrame, Error> {
        let pending = self.poll();
        if pending == 0 {
            return Err(IoError::NoData.into());
        }

        // poll left read_index on a whole-frame slot
        let index = self.read_index;
        let Some(replacement) = pool.acquire(self.unit_size) else {
            return Err(DmaError::NoBufferAvailable.into());
        };
        let Some(received) = self.buffers[index].take() else {
            pool.release(replacement);
            return Err(DmaError::RingCorrupted.into());
        };

        // Frames land unit off by the data offset; account for it but
        // never report more than the buffer holds.
        let len = core::cmp::min(pending as usize + RX_DATA_OFFSET, received.capacity());

        self.descriptors[index].swap_buffer(replacement.dma_address());
        self.buffers[index] = Some(replacement);

        // Return every slot of the frame to the hardware, through the
        // end-of-frame marker.
        let mut next = index;
        loop {
            let descriptor = &self.descriptors[next];
            let end = descriptor.is_end_of_frame();
            descriptor.release_to_hardware();
            next = ring::advance(next, N);
            if end {
                break;
            }
        }
        self.read_index = next;

        Ok(ReceivedFrame {
            len,
            buffer: received,
        })
    }

    /// Release every held buffer back to the pool.
    ///
    /// Call with the receive circuit disabled; the ring is unusable
    /// until the next `reset`.
    pub fn drain<P: BufferPool>(&mut self, pool: &mut P) {
        for slot in &mut self.buffers {
            if let Some(buffer) = slot.take() {
                pool.release(buffer);
            }
        }
    }

    #[cfg(test)]
    pub fn descriptor(&self, index: usize) -> &RxDescriptor {
        &self.descriptors[index]
    }

    #[cfg(test)]
    pub fn read_index(&self) -> usize {
        self.read_index
    }

    #[cfg(test)]
    pub fn take_buffer(&mut self, index: usize) -> Option<FrameBuffer> {
        self.buffers[index].take()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::boxed::Box;

    use super::*;
    use crate::internal::constants::RX_UNIT_SIZE;
    use crate::testing::{MockHal, MockPool};

    const SLOTS: usize = 4;

    fn ready_ring(pool: &mut MockPool) -> (Box<RxRing<SLOTS>>, MockHal) {
        let mut hal = MockHal::new();
        let mut ring = Box::new(RxRing::<SLOTS>::new());
        ring.reset(&mut hal, pool, RX_UNIT_SIZE).unwrap();
        (ring, hal)
    }

    #[test]
    fn reset_fills_all_slots_and_programs_base() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (ring, hal) = ready_ring(&mut pool);

        assert_eq!(pool.available(), 8 - SLOTS);
        assert_eq!(hal.rx_ring_base, Some(ring.base_addr()));
        for index in 0..SLOTS {
            assert!(!ring.descriptor(index).is_software_owned());
            assert_eq!(ring.descriptor(index).is_wrap(), index == SLOTS - 1);
        }
    }

    #[test]
    fn reset_without_enough_buffers_fails_clean() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        pool.limit_acquires(SLOTS - 1);

        let mut hal = MockHal::new();
        let mut ring = Box::new(RxRing::<SLOTS>::new());
        let result = ring.reset(&mut hal, &mut pool, RX_UNIT_SIZE);

        assert_eq!(result, Err(DmaError::NoBufferAvailable));
        // partial acquisitions went back to the pool
        assert_eq!(pool.available(), 8);
    }

    #[test]
    fn reset_twice_reaches_the_same_state_without_leaks() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, mut hal) = ready_ring(&mut pool);

        // leave one slot software-owned so the second reset has state to undo
        ring.descriptor(1).simulate_dma_write(64, true, true);
        ring.reset(&mut hal, &mut pool, RX_UNIT_SIZE).unwrap();

        // first-round buffers went back exactly once, stock is unchanged
        assert_eq!(pool.released.len(), SLOTS);
        assert_eq!(pool.available(), 8 - SLOTS);
        assert_eq!(ring.read_index(), 0);
        assert_eq!(hal.rx_enables.last(), Some(&false));
        for index in 0..SLOTS {
            assert!(!ring.descriptor(index).is_software_owned());
            assert_eq!(ring.descriptor(index).is_wrap(), index == SLOTS - 1);
        }
    }

    #[test]
    fn empty_ring_has_no_data() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);

        assert_eq!(ring.poll(), 0);
        let result = ring.read(&mut pool);
        assert!(matches!(result, Err(Error::Io(IoError::NoData))));
    }

    #[test]
    fn whole_frame_is_delivered_and_slot_restocked() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);

        ring.descriptor(0).simulate_dma_write(128, true, true);
        assert_eq!(ring.poll(), 128);

        let frame = ring.read(&mut pool).unwrap();
        assert_eq!(frame.len, 128 + RX_DATA_OFFSET);

        // slot went back to the hardware with a fresh buffer installed
        assert!(!ring.descriptor(0).is_software_owned());
        assert_ne!(ring.descriptor(0).buffer_addr(), 0);
        assert_eq!(ring.read_index(), 1);

        pool.release(frame.buffer);
    }

    #[test]
    fn delivered_length_is_capped_at_buffer_capacity() {
        let mut pool = MockPool::new(8, 256);
        let mut hal = MockHal::new();
        let mut ring = Box::new(RxRing::<SLOTS>::new());
        ring.reset(&mut hal, &mut pool, 256).unwrap();

        ring.descriptor(0).simulate_dma_write(255, true, true);
        let frame = ring.read(&mut pool).unwrap();
        assert_eq!(frame.len, 256);

        pool.release(frame.buffer);
    }

    #[test]
    fn partial_slots_are_healed_before_a_whole_frame() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);

        // slot 0 carries a tail fragment, slot 1 a whole frame
        ring.descriptor(0).simulate_dma_write(64, false, true);
        ring.descriptor(1).simulate_dma_write(200, true, true);

        assert_eq!(ring.poll(), 200);
        assert_eq!(ring.read_index(), 1);
        assert!(!ring.descriptor(0).is_software_owned());

        let frame = ring.read(&mut pool).unwrap();
        assert_eq!(frame.len, 200 + RX_DATA_OFFSET);
        assert_eq!(ring.read_index(), 2);

        pool.release(frame.buffer);
    }

    #[test]
    fn spanning_frame_is_drained_without_delivery() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);

        // one frame spanning slots 0..=2, no slot whole on its own
        ring.descriptor(0).simulate_dma_write(0, true, false);
        ring.descriptor(1).simulate_dma_write(0, false, false);
        ring.descriptor(2).simulate_dma_write(3000, false, true);

        let result = ring.read(&mut pool);
        assert!(matches!(result, Err(Error::Io(IoError::NoData))));

        // all three slots healed, ring ready past the fragment
        assert_eq!(ring.read_index(), 3);
        for index in 0..3 {
            assert!(!ring.descriptor(index).is_software_owned());
        }
    }

    #[test]
    fn delivery_works_across_wraparound() {
        let mut pool = MockPool::new(16, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);

        // consume three whole frames to park read_index at the last slot
        for index in 0..SLOTS {
            ring.descriptor(index).simulate_dma_write(100, true, true);
        }
        for _ in 0..SLOTS {
            let frame = ring.read(&mut pool).unwrap();
            pool.release(frame.buffer);
        }
        assert_eq!(ring.read_index(), 0);

        // next frame lands in slot 0 again
        ring.descriptor(0).simulate_dma_write(77, true, true);
        let frame = ring.read(&mut pool).unwrap();
        assert_eq!(frame.len, 77 + RX_DATA_OFFSET);
        pool.release(frame.buffer);
    }

    #[test]
    fn exhausted_pool_leaves_frame_in_place() {
        let mut pool = MockPool::new(SLOTS, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);
        assert_eq!(pool.available(), 0);

        ring.descriptor(0).simulate_dma_write(128, true, true);

        let result = ring.read(&mut pool);
        assert!(matches!(
            result,
            Err(Error::Dma(DmaError::NoBufferAvailable))
        ));

        // the slot still holds the frame; a retry with stock succeeds
        assert!(ring.descriptor(0).is_software_owned());
        pool.release(MockPool::new(1, RX_UNIT_SIZE).acquire(RX_UNIT_SIZE).unwrap());
        let frame = ring.read(&mut pool).unwrap();
        assert_eq!(frame.len, 128 + RX_DATA_OFFSET);
        pool.release(frame.buffer);
    }

    #[test]
    fn missing_shadow_buffer_is_reported_not_ignored() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);

        ring.descriptor(0).simulate_dma_write(128, true, true);
        let stranded = ring.take_buffer(0).unwrap();

        let stock_before = pool.available();
        let result = ring.read(&mut pool);
        assert!(matches!(result, Err(Error::Dma(DmaError::RingCorrupted))));
        // the replacement went back to the pool
        assert_eq!(pool.available(), stock_before);

        pool.release(stranded);
    }

    #[test]
    fn drain_returns_every_buffer() {
        let mut pool = MockPool::new(8, RX_UNIT_SIZE);
        let (mut ring, _hal) = ready_ring(&mut pool);
        assert_eq!(pool.available(), 8 - SLOTS);

        ring.drain(&mut pool);
        assert_eq!(pool.available(), 8);
    }
}
