//! Configuration types for the GMAC driver

use crate::internal::constants::{DEFAULT_MAC_ADDR, DMA_BUFFER_UNIT, RX_UNIT_SIZE};

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Rings not yet initialized; no DMA activity
    #[default]
    Uninitialized,
    /// Rings initialized and circuits enabled
    Running,
    /// Circuits disabled after a halt; rings keep their buffers
    Halted,
}

/// Complete GMAC configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GmacConfig {
    /// MAC address (6 bytes)
    pub mac_address: [u8; 6],
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
    /// Per-slot receive buffer unit size in bytes; must be a non-zero
    /// multiple of the DMA buffer granularity
    pub rx_unit_size: usize,
    /// Strip the frame check sequence from received frames
    pub strip_fcs: bool,
    /// Accept broadcast frames
    pub accept_broadcast: bool,
    /// Enable receive checksum offload
    pub rx_checksum_offload: bool,
    /// Enable transmit checksum offload
    pub tx_checksum_offload: bool,
    /// Copy all frames regardless of address filtering (promiscuous)
    pub copy_all_frames: bool,
    /// Discard IEEE 802.3 PAUSE frames instead of delivering them
    pub discard_pause_frames: bool,
}

impl Default for GmacConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GmacConfig {
    /// Create a new configuration with defaults.
    ///
    /// Defaults match a typical station: 100 Mbps full duplex, FCS
    /// stripped, broadcast accepted, checksum offload on both paths,
    /// PAUSE frames discarded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mac_address: DEFAULT_MAC_ADDR,
            speed: Speed::Mbps100,
            duplex: Duplex::Full,
            rx_unit_size: RX_UNIT_SIZE,
            strip_fcs: true,
            accept_broadcast: true,
            rx_checksum_offload: true,
            tx_checksum_offload: true,
            copy_all_frames: false,
            discard_pause_frames: true,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the MAC address
    ///
    /// If not set, a default locally-administered address
    /// (02:00:00:00:00:01) is used.
    #[must_use]
    pub const fn with_mac_address(mut self, addr: [u8; 6]) -> Self {
        self.mac_address = addr;
        self
    }

    /// Set the link speed
    #[must_use]
    pub const fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// Set the duplex mode
    #[must_use]
    pub const fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = duplex;
        self
    }

    /// Set the per-slot receive buffer unit size
    #[must_use]
    pub const fn with_rx_unit_size(mut self, size: usize) -> Self {
        self.rx_unit_size = size;
        self
    }

    /// Enable or disable FCS stripping on receive
    #[must_use]
    pub const fn with_strip_fcs(mut self, enabled: bool) -> Self {
        self.strip_fcs = enabled;
        self
    }

    /// Accept or reject broadcast frames
    #[must_use]
    pub const fn with_accept_broadcast(mut self, enabled: bool) -> Self {
        self.accept_broadcast = enabled;
        self
    }

    /// Enable or disable receive checksum offload
    #[must_use]
    pub const fn with_rx_checksum_offload(mut self, enabled: bool) -> Self {
        self.rx_checksum_offload = enabled;
        self
    }

    /// Enable or disable transmit checksum offload
    #[must_use]
    pub const fn with_tx_checksum_offload(mut self, enabled: bool) -> Self {
        self.tx_checksum_offload = enabled;
        self
    }

    /// Enable or disable copy-all (promiscuous) mode
    #[must_use]
    pub const fn with_copy_all_frames(mut self, enabled: bool) -> Self {
        self.copy_all_frames = enabled;
        self
    }

    /// Discard or deliver PAUSE frames
    #[must_use]
    pub const fn with_discard_pause_frames(mut self, enabled: bool) -> Self {
        self.discard_pause_frames = enabled;
        self
    }

    /// Check the configuration for internally inconsistent values.
    pub const fn validate(&self) -> Result<(), super::error::ConfigError> {
        if self.rx_unit_size == 0 || self.rx_unit_size % DMA_BUFFER_UNIT != 0 {
            return Err(super::error::ConfigError::InvalidUnitSize);
        }
        Ok(())
    }
}
