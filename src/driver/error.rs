//! Error types for the GMAC driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Initialization and configuration failures
//! - [`DmaError`]: Descriptor ring and buffer pool issues
//! - [`IoError`]: Runtime TX/RX failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods. Transmit rejection is special: it carries the
//! caller's buffer back, so it has its own type, [`TxRejected`].

use crate::buffer::FrameBuffer;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
///
/// These errors occur during driver setup or ring initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Driver already initialized
    AlreadyInitialized,
    /// Invalid configuration parameter
    InvalidConfig,
    /// Receive unit size is zero or not a multiple of the DMA burst unit
    InvalidUnitSize,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::AlreadyInitialized => "already initialized",
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::InvalidUnitSize => "invalid receive unit size",
        }
    }
}

// =============================================================================
// DMA Errors
// =============================================================================

/// Descriptor ring and buffer pool errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DmaError {
    /// The buffer pool could not supply a buffer
    NoBufferAvailable,
    /// A readable descriptor has no buffer recorded for it
    RingCorrupted,
}

impl core::fmt::Display for DmaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DmaError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DmaError::NoBufferAvailable => "no buffer available",
            DmaError::RingCorrupted => "descriptor ring corrupted",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime TX/RX errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// No complete frame is waiting in the receive ring
    NoData,
    /// Invalid state for operation (e.g., not running)
    InvalidState,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::NoData => "no frame available",
            IoError::InvalidState => "invalid state for operation",
        }
    }
}

// =============================================================================
// Transmit Rejection
// =============================================================================

/// A transmit request the ring could not take.
///
/// Both variants return the caller's buffer, so a rejected frame can be
/// retried or released without losing the allocation.
#[derive(Debug)]
pub enum TxRejected {
    /// Every usable transmit slot is pending completion; retry after the
    /// next transmit interrupt
    Busy(FrameBuffer),
    /// Frame length is zero or exceeds the transmit unit size
    InvalidLength(FrameBuffer),
}

impl TxRejected {
    /// Recover the buffer from the rejection.
    #[must_use]
    pub fn into_buffer(self) -> FrameBuffer {
        match self {
            TxRejected::Busy(buffer) | TxRejected::InvalidLength(buffer) => buffer,
        }
    }

    /// True when the rejection is transient backpressure.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, TxRejected::Busy(_))
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::AlreadyInitialized)) => { /* ... */ }
///     Err(Error::Dma(DmaError::NoBufferAvailable)) => { /* ... */ }
///     Err(Error::Io(IoError::NoData)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// DMA error
    Dma(DmaError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Dma(e) => write!(f, "dma: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DmaError> for Error {
    fn from(e: DmaError) -> Self {
        Error::Dma(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for GMAC operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for DMA operations
pub type DmaResult<T> = core::result::Result<T, DmaError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
