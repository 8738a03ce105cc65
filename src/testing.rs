//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the GMAC driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use std::boxed::Box;
use std::vec;
use std::vec::Vec;

use crate::buffer::{BufferPool, FrameBuffer};
use crate::driver::config::GmacConfig;
use crate::driver::events::{GmacEvents, WakeHint};
use crate::driver::interrupt::RxEvent;
use crate::hal::GmacHal;

// =============================================================================
// Mock HAL
// =============================================================================

/// Mock register-level HAL that records every call and serves scripted
/// status register values.
///
/// The interrupt status register models the hardware's clear-on-read
/// behavior: values pushed with [`MockHal::push_isr`] are consumed one
/// per read, after which reads return zero.
#[derive(Default)]
pub struct MockHal {
    /// Configuration passed to `configure`, if any
    pub configured: Option<GmacConfig>,
    /// History of `enable_receive` calls
    pub rx_enables: Vec<bool>,
    /// History of `enable_transmit` calls
    pub tx_enables: Vec<bool>,
    /// Last programmed receive ring base
    pub rx_ring_base: Option<u32>,
    /// Last programmed transmit ring base
    pub tx_ring_base: Option<u32>,
    /// `(queue, address)` pairs programmed for priority queues
    pub priority_queue_bases: Vec<(usize, u32)>,
    /// Number of `start_transmission` calls
    pub tx_kicks: usize,
    /// Scripted ISR values, consumed front-first by `interrupt_status`
    pub isr_queue: Vec<u32>,
    /// Value returned by `rx_status`
    pub rsr_value: u32,
    /// Value returned by `tx_status`
    pub tsr_value: u32,
    /// Masks passed to `clear_rx_status`
    pub cleared_rx: Vec<u32>,
    /// Masks passed to `clear_tx_status`
    pub cleared_tx: Vec<u32>,
    /// Number of `clear_statistics` calls
    pub stats_clears: usize,
    /// History of `enable_statistics_write` calls
    pub stats_write_enables: Vec<bool>,
    /// Number of `disable_interrupts` calls
    pub interrupt_disables: usize,
    /// Masks passed to `enable_interrupts`
    pub enabled_masks: Vec<u32>,
    /// Number of `invalidate_dcache_before_rx` calls
    pub dcache_invalidations: usize,
}

impl MockHal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a value for the next `interrupt_status` read.
    pub fn push_isr(&mut self, value: u32) {
        self.isr_queue.push(value);
    }

    /// True when both circuits were most recently enabled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.rx_enables.last() == Some(&true) && self.tx_enables.last() == Some(&true)
    }
}

impl GmacHal for MockHal {
    fn configure(&mut self, config: &GmacConfig) {
        self.configured = Some(config.clone());
    }

    fn enable_receive(&mut self, enable: bool) {
        self.rx_enables.push(enable);
    }

    fn enable_transmit(&mut self, enable: bool) {
        self.tx_enables.push(enable);
    }

    fn set_rx_ring_base(&mut self, address: u32) {
        self.rx_ring_base = Some(address);
    }

    fn set_tx_ring_base(&mut self, address: u32) {
        self.tx_ring_base = Some(address);
    }

    fn set_tx_priority_queue_base(&mut self, queue: usize, address: u32) {
        self.priority_queue_bases.push((queue, address));
    }

    fn start_transmission(&mut self) {
        self.tx_kicks += 1;
    }

    fn interrupt_status(&mut self) -> u32 {
        if self.isr_queue.is_empty() {
            0
        } else {
            self.isr_queue.remove(0)
        }
    }

    fn rx_status(&mut self) -> u32 {
        self.rsr_value
    }

    fn clear_rx_status(&mut self, mask: u32) {
        self.cleared_rx.push(mask);
        self.rsr_value &= !mask;
    }

    fn tx_status(&mut self) -> u32 {
        self.tsr_value
    }

    fn clear_tx_status(&mut self, mask: u32) {
        self.cleared_tx.push(mask);
        self.tsr_value &= !mask;
    }

    fn clear_statistics(&mut self) {
        self.stats_clears += 1;
    }

    fn enable_statistics_write(&mut self, enable: bool) {
        self.stats_write_enables.push(enable);
    }

    fn disable_interrupts(&mut self) {
        self.interrupt_disables += 1;
    }

    fn enable_interrupts(&mut self, mask: u32) {
        self.enabled_masks.push(mask);
    }

    fn invalidate_dcache_before_rx(&mut self) {
        self.dcache_invalidations += 1;
    }
}

// =============================================================================
// Mock Buffer Pool
// =============================================================================

/// Fixed-stock buffer pool backed by leaked host allocations.
///
/// Buffers are word-aligned as the hardware requires. Released buffers
/// are logged by pointer and returned to stock, so tests can assert on
/// exactly which allocations came back.
pub struct MockPool {
    stock: Vec<FrameBuffer>,
    /// Pointers of every buffer handed to `release`, in order
    pub released: Vec<*const u8>,
    /// Remaining `acquire` calls to serve; `None` means unlimited
    pub acquire_budget: Option<usize>,
    capacity: usize,
}

impl MockPool {
    /// Create a pool holding `count` buffers of `capacity` bytes each.
    #[must_use]
    pub fn new(count: usize, capacity: usize) -> Self {
        let stock = (0..count).map(|_| Self::allocate(capacity)).collect();
        Self {
            stock,
            released: Vec::new(),
            acquire_budget: None,
            capacity,
        }
    }

    /// Allow only `n` further successful `acquire` calls.
    pub fn limit_acquires(&mut self, n: usize) {
        self.acquire_budget = Some(n);
    }

    /// Number of buffers currently in stock.
    #[must_use]
    pub fn available(&self) -> usize {
        self.stock.len()
    }

    fn allocate(capacity: usize) -> FrameBuffer {
        // u32 backing keeps the allocation word-aligned for the DMA
        let words = capacity.div_ceil(4);
        let ptr = Box::leak(vec![0u32; words].into_boxed_slice()).as_mut_ptr() as *mut u8;
        unsafe { FrameBuffer::from_raw(ptr, capacity) }
            .unwrap_or_else(|| unreachable!("leaked Vec<u32> is non-null and aligned"))
    }
}

impl BufferPool for MockPool {
    fn acquire(&mut self, min_size: usize) -> Option<FrameBuffer> {
        if min_size > self.capacity {
            return None;
        }
        if let Some(budget) = &mut self.acquire_budget {
            if *budget == 0 {
                return None;
            }
            *budget -= 1;
        }
        self.stock.pop()
    }

    fn release(&mut self, buffer: FrameBuffer) {
        self.released.push(buffer.as_ptr());
        self.stock.push(buffer);
    }
}

// =============================================================================
// Mock Event Sink
// =============================================================================

/// Event sink recording every callback from the interrupt dispatcher.
#[derive(Default)]
pub struct MockEvents {
    /// Receive events in arrival order
    pub rx_events: Vec<RxEvent>,
    /// Buffers handed back by transmit completion, in order
    pub completed: Vec<FrameBuffer>,
    /// Hint returned from `on_receive_event`
    pub rx_wake: WakeHint,
    /// Hint returned from `on_transmit_complete`
    pub tx_wake: WakeHint,
}

impl MockEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn waking() -> Self {
        Self {
            rx_wake: WakeHint::Wake,
            tx_wake: WakeHint::Wake,
            ..Self::default()
        }
    }
}

impl GmacEvents for MockEvents {
    fn on_receive_event(&mut self, event: RxEvent) -> WakeHint {
        self.rx_events.push(event);
        self.rx_wake
    }

    fn on_transmit_complete(&mut self, buffer: FrameBuffer) -> WakeHint {
        self.completed.push(buffer);
        self.tx_wake
    }
}
