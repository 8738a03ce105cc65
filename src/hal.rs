//! Hardware access seam.
//!
//! The data plane owns the descriptor rings and buffer hand-off but
//! never touches memory-mapped registers directly. Everything it needs
//! from the peripheral goes through [`GmacHal`], which a board crate
//! implements against the real register block and tests implement with
//! a mock.

use crate::driver::config::GmacConfig;

/// Register-level operations the data plane requires from the GMAC
/// peripheral.
///
/// Implementations perform raw register reads and writes; the trait
/// carries no state of its own. All methods take `&mut self` so a mock
/// can record calls.
pub trait GmacHal {
    /// Program the network configuration register from `config`.
    ///
    /// Called once during initialization with receive and transmit
    /// disabled.
    fn configure(&mut self, config: &GmacConfig);

    /// Enable or disable the receive circuit.
    fn enable_receive(&mut self, enable: bool);

    /// Enable or disable the transmit circuit.
    fn enable_transmit(&mut self, enable: bool);

    /// Program the receive descriptor ring base address.
    fn set_rx_ring_base(&mut self, address: u32);

    /// Program the transmit descriptor ring base address.
    fn set_tx_ring_base(&mut self, address: u32);

    /// Program the base address of one transmit priority queue.
    ///
    /// `queue` is 1-based; queue 0 is the main ring programmed through
    /// [`Self::set_tx_ring_base`]. Unused queues are parked on a single
    /// permanently-consumed descriptor.
    fn set_tx_priority_queue_base(&mut self, queue: usize, address: u32);

    /// Tell the DMA to start (or resume) walking the transmit ring.
    fn start_transmission(&mut self);

    /// Read the interrupt status register.
    ///
    /// The hardware clears the register on read, so one read consumes
    /// all pending events.
    fn interrupt_status(&mut self) -> u32;

    /// Read the receive status register.
    fn rx_status(&mut self) -> u32;

    /// Clear the given bits of the receive status register.
    fn clear_rx_status(&mut self, mask: u32);

    /// Read the transmit status register.
    fn tx_status(&mut self) -> u32;

    /// Clear the given bits of the transmit status register.
    fn clear_tx_status(&mut self, mask: u32);

    /// Zero the statistics counters.
    fn clear_statistics(&mut self);

    /// Allow or forbid software writes to the statistics counters.
    fn enable_statistics_write(&mut self, enable: bool);

    /// Mask all GMAC interrupt sources.
    fn disable_interrupts(&mut self);

    /// Unmask the interrupt sources in `mask`.
    fn enable_interrupts(&mut self, mask: u32);

    /// Make DMA-written descriptor and buffer memory visible to the CPU.
    ///
    /// Cores with a data cache over the descriptor region must
    /// invalidate it here; the receive path calls this before every
    /// descriptor scan. The default is a no-op for uncached memory.
    fn invalidate_dcache_before_rx(&mut self) {}
}
