//! Shared registry of protocol phase deadlines.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default frame round-trip deadline in microseconds.
pub const DEFAULT_FRAME_RETURN_US: u64 = 2_000;
/// Default deadline for the conservative link variant in microseconds.
pub const DEFAULT_SAFE_US: u64 = 20_000;
/// Default slave EEPROM (SII) access deadline in microseconds.
pub const DEFAULT_EEPROM_US: u64 = 20_000;
/// Default mailbox-write cycle deadline in microseconds.
pub const DEFAULT_TX_MAILBOX_US: u64 = 20_000;
/// Default mailbox-read cycle deadline in microseconds.
pub const DEFAULT_RX_MAILBOX_US: u64 = 700_000;
/// Default state-change confirmation deadline in microseconds.
pub const DEFAULT_STATE_CHANGE_US: u64 = 2_000_000;

/// Identifies one of the six protocol phases with a configurable deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutKind {
    /// A transmitted frame observed back at the transmitter.
    FrameReturn,
    /// A transfer over the conservative link variant (e.g. wireless media).
    Safe,
    /// A slave EEPROM (SII) access.
    Eeprom,
    /// One mailbox-write service cycle.
    TxMailbox,
    /// One mailbox-read service cycle.
    RxMailbox,
    /// A slave or network state change, confirmed.
    StateChange,
}

impl TimeoutKind {
    /// All six phases, in wire-logic order.
    pub const ALL: [TimeoutKind; 6] = [
        TimeoutKind::FrameReturn,
        TimeoutKind::Safe,
        TimeoutKind::Eeprom,
        TimeoutKind::TxMailbox,
        TimeoutKind::RxMailbox,
        TimeoutKind::StateChange,
    ];
}

/// Single shared source of truth for protocol timing thresholds.
///
/// Holds one deadline per protocol phase. The registry is created once with
/// the fixed defaults, then passed by reference (usually behind `Arc`) into
/// every component that waits on the bus. Any holder may overwrite any field
/// at any time; readers observe the new value on their next load.
///
/// The registry supplies timeout values, it does not enforce them, and it
/// performs no range checks on writes. A zero deadline makes the consuming
/// phase expire immediately; keeping values sane is the caller's job.
pub struct TimeoutRegistry {
    frame_return_us: AtomicU64,
    safe_us: AtomicU64,
    eeprom_us: AtomicU64,
    tx_mailbox_us: AtomicU64,
    rx_mailbox_us: AtomicU64,
    state_change_us: AtomicU64,
}

impl TimeoutRegistry {
    /// Create a registry populated with the fixed defaults.
    pub const fn new() -> Self {
        Self {
            frame_return_us: AtomicU64::new(DEFAULT_FRAME_RETURN_US),
            safe_us: AtomicU64::new(DEFAULT_SAFE_US),
            eeprom_us: AtomicU64::new(DEFAULT_EEPROM_US),
            tx_mailbox_us: AtomicU64::new(DEFAULT_TX_MAILBOX_US),
            rx_mailbox_us: AtomicU64::new(DEFAULT_RX_MAILBOX_US),
            state_change_us: AtomicU64::new(DEFAULT_STATE_CHANGE_US),
        }
    }

    /// Current deadline for the given phase.
    pub fn get(&self, kind: TimeoutKind) -> Duration {
        Duration::from_micros(self.cell(kind).load(Ordering::Relaxed))
    }

    /// Overwrite the deadline for the given phase.
    ///
    /// Effective immediately for every subsequent read from any thread.
    /// Durations wider than `u64::MAX` microseconds are stored saturated.
    pub fn set(&self, kind: TimeoutKind, timeout: Duration) {
        let us = u64::try_from(timeout.as_micros()).unwrap_or(u64::MAX);
        self.cell(kind).store(us, Ordering::Relaxed);
    }

    /// Allowance for an exchange retried up to three times at the
    /// frame-return deadline.
    ///
    /// Recomputed from the current [`TimeoutKind::FrameReturn`] value on
    /// every call, so an override is reflected on the very next read.
    pub fn retry_triple(&self) -> Duration {
        let us = self.frame_return_us.load(Ordering::Relaxed);
        Duration::from_micros(us.saturating_mul(3))
    }

    fn cell(&self, kind: TimeoutKind) -> &AtomicU64 {
        match kind {
            TimeoutKind::FrameReturn => &self.frame_return_us,
            TimeoutKind::Safe => &self.safe_us,
            TimeoutKind::Eeprom => &self.eeprom_us,
            TimeoutKind::TxMailbox => &self.tx_mailbox_us,
            TimeoutKind::RxMailbox => &self.rx_mailbox_us,
            TimeoutKind::StateChange => &self.state_change_us,
        }
    }
}

impl Default for TimeoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
