//! GMAC data plane driver.
//!
//! [`Gmac`] ties the receive and transmit rings to a register-level HAL
//! and an external buffer pool. The task context calls `read_rx` and
//! `transmit`; the interrupt context calls `handle_interrupt`. The two
//! contexts never share a descriptor slot: the hardware's ownership bits
//! arbitrate the receive ring, and the used bit plus the head/tail
//! indexes arbitrate the transmit ring.
//!
//! The driver embeds its descriptor arrays, so a `Gmac` handed to the
//! hardware must live at a fixed address, typically in a `static`
//! wrapped by [`crate::sync::SharedGmac`].

use crate::buffer::{BufferPool, FrameBuffer, ReceivedFrame};
use crate::driver::config::{GmacConfig, State};
use crate::driver::error::{ConfigError, Error, IoError, TxRejected};
use crate::driver::events::{GmacEvents, WakeHint};
use crate::driver::interrupt::{InterruptStatus, RxEvent, TxEvent};
use crate::hal::GmacHal;
use crate::internal::constants::{DEFAULT_RX_SLOTS, DEFAULT_TX_SLOTS};
use crate::internal::register::{DEFAULT_INT_MASK, rsr, tsr};
use crate::internal::rx::RxRing;
use crate::internal::tx::TxRing;

/// GMAC driver with `RX` receive and `TX` transmit descriptor slots.
///
/// Both ring sizes must be at least 2; one transmit slot always stays
/// free to keep full and empty distinguishable.
pub struct Gmac<const RX: usize, const TX: usize, H: GmacHal> {
    hal: H,
    rx: RxRing<RX>,
    tx: TxRing<TX>,
    config: GmacConfig,
    state: State,
}

/// Driver with the default ring sizes, suitable for most stations.
pub type GmacDefault<H> = Gmac<DEFAULT_RX_SLOTS, DEFAULT_TX_SLOTS, H>;

/// Memory-lean driver for low-traffic applications.
pub type GmacSmall<H> = Gmac<4, 4, H>;

/// Driver with deep rings for high-throughput use.
pub type GmacLarge<H> = Gmac<16, 16, H>;

impl<const RX: usize, const TX: usize, H: GmacHal> Gmac<RX, TX, H> {
    /// Create an uninitialized driver around a HAL.
    ///
    /// No hardware access happens until [`Self::init`].
    pub const fn new(hal: H) -> Self {
        Self {
            hal,
            rx: RxRing::new(),
            tx: TxRing::new(),
            config: GmacConfig::new(),
            state: State::Uninitialized,
        }
    }

    /// Bring the peripheral up with `config`.
    ///
    /// Quiesces the hardware, programs the configuration, stocks the
    /// receive ring from `pool` and enables both circuits plus the
    /// interrupt sources the dispatcher handles.
    ///
    /// On [`crate::driver::error::DmaError::NoBufferAvailable`] the
    /// receive circuit is left disabled and the driver stays
    /// uninitialized, so `init` can be retried once the pool has stock.
    pub fn init<P: BufferPool>(&mut self, config: GmacConfig, pool: &mut P) -> Result<(), Error> {
        if self.state != State::Uninitialized {
            return Err(ConfigError::AlreadyInitialized.into());
        }
        if RX < 2 || TX < 2 {
            return Err(ConfigError::InvalidConfig.into());
        }
        config.validate()?;

        // quiesce before touching the rings
        self.hal.enable_receive(false);
        self.hal.enable_transmit(false);
        self.hal.disable_interrupts();
        self.hal.clear_statistics();
        self.hal.clear_rx_status(rsr::ALL);
        self.hal.clear_tx_status(tsr::ALL);
        // flush anything pending in the clear-on-read interrupt register
        let _ = self.hal.interrupt_status();

        self.hal.configure(&config);

        self.rx.reset(&mut self.hal, pool, config.rx_unit_size)?;
        self.tx.reset(&mut self.hal, pool);

        self.hal.enable_transmit(true);
        self.hal.enable_receive(true);
        self.hal.enable_statistics_write(true);
        self.hal.enable_interrupts(DEFAULT_INT_MASK);

        self.config = config;
        self.state = State::Running;
        Ok(())
    }

    /// Rebuild both rings and re-enable the circuits.
    ///
    /// Buffers held by the rings go back to `pool` and fresh ones are
    /// acquired, exactly as during `init`, but the configuration is kept.
    pub fn reset<P: BufferPool>(&mut self, pool: &mut P) -> Result<(), Error> {
        if self.state == State::Uninitialized {
            return Err(IoError::InvalidState.into());
        }

        self.rx.reset(&mut self.hal, pool, self.config.rx_unit_size)?;
        self.tx.reset(&mut self.hal, pool);

        self.hal.enable_transmit(true);
        self.hal.enable_receive(true);
        self.state = State::Running;
        Ok(())
    }

    /// Stop all traffic without giving up the ring buffers.
    ///
    /// A halted driver can be brought back with [`Self::reset`].
    pub fn halt(&mut self) {
        self.hal.disable_interrupts();
        self.hal.enable_receive(false);
        self.hal.enable_transmit(false);
        self.state = State::Halted;
    }

    /// Shut down and return every buffer the driver holds to `pool`.
    pub fn release<P: BufferPool>(&mut self, pool: &mut P) {
        self.halt();
        self.rx.drain(pool);
        self.tx.reset(&mut self.hal, pool);
        self.state = State::Uninitialized;
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GmacConfig {
        &self.config
    }

    /// Length of the next complete received frame, or 0 when none is
    /// waiting.
    ///
    /// Also drains undeliverable partial receptions from the ring as a
    /// side effect.
    pub fn poll_rx(&mut self) -> u32 {
        if self.state != State::Running {
            return 0;
        }
        self.hal.invalidate_dcache_before_rx();
        self.rx.poll()
    }

    /// Take the next received frame out of the ring.
    ///
    /// The returned buffer belongs to the caller; its slot is restocked
    /// from `pool` before delivery.
    pub fn read_rx<P: BufferPool>(&mut self, pool: &mut P) -> Result<ReceivedFrame, Error> {
        if self.state != State::Running {
            return Err(IoError::InvalidState.into());
        }
        self.hal.invalidate_dcache_before_rx();
        self.rx.read(pool)
    }

    /// Queue `len` bytes of `buffer` for transmission.
    ///
    /// The buffer comes back through the completion callback once sent,
    /// or inside the rejection when the ring has no free slot. A driver
    /// that is not running rejects with [`TxRejected::Busy`].
    pub fn transmit(&mut self, buffer: FrameBuffer, len: usize) -> Result<(), TxRejected> {
        if self.state != State::Running {
            return Err(TxRejected::Busy(buffer));
        }
        self.tx.enqueue(&mut self.hal, buffer, len)
    }

    /// Number of frames queued for transmission and not yet reaped.
    #[must_use]
    pub fn tx_load(&self) -> usize {
        self.tx.load()
    }

    /// Service a GMAC interrupt.
    ///
    /// Reads and classifies the status registers, heals a transmit halt
    /// after a retry-limit error, reaps transmit completions and reports
    /// receive activity through `events`. Returns the aggregated wake
    /// hint for the caller's interrupt epilogue.
    ///
    /// Runs in interrupt context; everything here is non-blocking.
    pub fn handle_interrupt<P: BufferPool, E: GmacEvents>(
        &mut self,
        pool: &mut P,
        events: &mut E,
    ) -> WakeHint {
        let mut hint = WakeHint::None;

        let status = InterruptStatus::from_raw(self.hal.interrupt_status());
        let mut rx_event = RxEvent::from_raw(self.hal.rx_status());
        let tx_event = TxEvent::from_raw(self.hal.tx_status());

        if status.rx_complete
            || rx_event.frame_received
            || rx_event.overrun
            || rx_event.buffer_not_available
        {
            self.hal.clear_rx_status(rx_event.to_raw());

            // a completion interrupt counts as a reception even when the
            // status register was read too late to show it
            if status.rx_complete {
                rx_event.frame_received = true;
            }

            hint = hint.combine(events.on_receive_event(rx_event));
        }

        if status.tx_complete
            || tx_event.complete
            || tx_event.collision
            || tx_event.retry_limit_exceeded
        {
            // the transmit circuit halts on a retry-limit error; rebuild
            // the ring and restart it before reaping
            if tx_event.retry_limit_exceeded {
                self.tx.reset(&mut self.hal, pool);
                self.hal.enable_transmit(true);
            }

            self.hal.clear_tx_status(tx_event.to_raw());
            hint = hint.combine(self.tx.complete(events));
        }

        hint
    }

    #[cfg(test)]
    pub(crate) fn hal(&self) -> &H {
        &self.hal
    }

    #[cfg(test)]
    pub(crate) fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    #[cfg(test)]
    pub(crate) fn rx_ring(&mut self) -> &mut RxRing<RX> {
        &mut self.rx
    }

    #[cfg(test)]
    pub(crate) fn tx_ring(&mut self) -> &mut TxRing<TX> {
        &mut self.tx
    }
}
