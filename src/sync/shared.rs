//! ISR-safe driver wrapper using critical sections.
//!
//! The driver is touched from two contexts: the application task (read,
//! transmit) and the GMAC interrupt (dispatch). [`SharedGmac`] serializes
//! them with a critical section so a static driver can be reached from
//! both without `unsafe`.

use super::primitives::CriticalSectionCell;
use crate::driver::gmac::Gmac;
use crate::hal::GmacHal;

/// ISR-safe GMAC wrapper using critical sections.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure.
///
/// # Example
///
/// ```ignore
/// static GMAC: SharedGmac<8, 8, BoardHal> = SharedGmac::new(Gmac::new(BoardHal));
///
/// GMAC.with(|gmac| {
///     gmac.transmit(buffer, len).ok();
/// });
/// ```
pub struct SharedGmac<const RX: usize, const TX: usize, H: GmacHal> {
    inner: CriticalSectionCell<Gmac<RX, TX, H>>,
}

impl<const RX: usize, const TX: usize, H: GmacHal> SharedGmac<RX, TX, H> {
    /// Wrap a driver (const, suitable for static initialization).
    pub const fn new(gmac: Gmac<RX, TX, H>) -> Self {
        Self {
            inner: CriticalSectionCell::new(gmac),
        }
    }

    /// Execute a closure with exclusive access to the driver.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Gmac<RX, TX, H>) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Gmac<RX, TX, H>) -> R,
    {
        self.inner.try_with(f)
    }
}
