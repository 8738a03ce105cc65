//! Frame buffer hand-off between the allocator, the rings and the DMA.
//!
//! The data plane never copies payload: buffers move whole between the
//! external allocator, the descriptor rings and the hardware. Ownership
//! of a [`FrameBuffer`] is transferred at every API boundary: `read`
//! swaps a replacement in and moves the received buffer out, `enqueue`
//! takes its argument, and the completion callback hands the sent buffer
//! back.

use core::ptr::NonNull;

/// Owned handle to one externally-allocated network buffer.
///
/// The handle is move-only; whoever holds it has exclusive access to the
/// underlying memory. The GMAC requires word-aligned buffer addresses,
/// which the constructor enforces.
#[derive(Debug)]
pub struct FrameBuffer {
    ptr: NonNull<u8>,
    capacity: usize,
}

impl FrameBuffer {
    /// Wrap a raw allocation in an owned handle.
    ///
    /// Returns `None` when `ptr` is null, misaligned for DMA (not
    /// 4-byte aligned) or `capacity` is zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `capacity` bytes for
    /// as long as the handle (or the hardware it is described to) may
    /// access it, and no other party may access that memory while the
    /// handle exists.
    pub unsafe fn from_raw(ptr: *mut u8, capacity: usize) -> Option<Self> {
        if capacity == 0 || (ptr as usize) % 4 != 0 {
            return None;
        }
        NonNull::new(ptr).map(|ptr| Self { ptr, capacity })
    }

    /// Bus address to program into a descriptor.
    #[inline(always)]
    #[must_use]
    pub fn dma_address(&self) -> u32 {
        self.ptr.as_ptr() as usize as u32
    }

    /// Usable size of the buffer in bytes.
    #[inline(always)]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to the start of the buffer.
    #[inline(always)]
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Raw mutable pointer to the start of the buffer.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// View the buffer contents.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        // Safety: the from_raw contract gives the handle exclusive access
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// Mutable view of the buffer contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // Safety: the from_raw contract gives the handle exclusive access
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// Release the handle without touching the memory, returning the raw
    /// pointer to whoever manages the allocation.
    #[must_use]
    pub fn into_raw(self) -> *mut u8 {
        self.ptr.as_ptr()
    }
}

// Safety: FrameBuffer represents exclusive ownership of its memory; it
// may move between the task context and the interrupt context.
unsafe impl Send for FrameBuffer {}

/// External allocator of frame-sized buffers.
///
/// The receive path cannot operate without a standby buffer: when
/// `acquire` returns `None` during a refill, the driver reports
/// [`crate::driver::error::DmaError::NoBufferAvailable`] and leaves the
/// ring untouched.
pub trait BufferPool {
    /// Hand out a buffer with capacity of at least `min_size` bytes.
    fn acquire(&mut self, min_size: usize) -> Option<FrameBuffer>;

    /// Take back a buffer that is no longer referenced by the driver.
    fn release(&mut self, buffer: FrameBuffer);
}

/// A frame delivered by the receive ring.
#[derive(Debug)]
pub struct ReceivedFrame {
    /// Number of meaningful bytes, including the receive data offset
    pub len: usize,
    /// The buffer the DMA wrote the frame into; ownership is the caller's
    pub buffer: FrameBuffer,
}
