//! Deferred-wakeup plumbing between the interrupt handler and the task
//! context.
//!
//! The interrupt dispatcher does no scheduling itself. It reports what
//! happened through [`GmacEvents`] and aggregates the callbacks'
//! [`WakeHint`]s; the caller decides whether a context switch is needed
//! when the handler returns.

use crate::buffer::FrameBuffer;
use crate::driver::interrupt::RxEvent;

/// Whether an event callback unblocked a higher-priority task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeHint {
    /// Nothing was woken
    #[default]
    None,
    /// A task was made runnable; yield on interrupt exit
    Wake,
}

impl WakeHint {
    /// Merge two hints; a wake from either side is preserved.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (WakeHint::None, WakeHint::None) => WakeHint::None,
            _ => WakeHint::Wake,
        }
    }

    /// True when a context switch should be requested.
    #[must_use]
    pub const fn should_wake(&self) -> bool {
        matches!(self, WakeHint::Wake)
    }
}

/// Callbacks invoked from the interrupt dispatcher.
///
/// Both methods run in interrupt context and must not block. Typical
/// implementations post to a queue or signal a semaphore and return
/// [`WakeHint::Wake`] when that unblocked a task.
pub trait GmacEvents {
    /// One or more receive events occurred.
    ///
    /// `event` summarizes the receive status register at the time of the
    /// interrupt; frames are drained later from task context.
    fn on_receive_event(&mut self, event: RxEvent) -> WakeHint;

    /// A transmitted frame completed and its buffer is being handed back.
    ///
    /// Called once per reaped descriptor, in submission order.
    fn on_transmit_complete(&mut self, buffer: FrameBuffer) -> WakeHint;
}
