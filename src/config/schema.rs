//! Configuration schema definitions.
//!
//! Defines the on-disk shape of the timing overrides. All values are
//! microseconds, matching what the bus logic feeds into its deadline
//! computations.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::timeouts::registry::{
    DEFAULT_EEPROM_US, DEFAULT_FRAME_RETURN_US, DEFAULT_RX_MAILBOX_US, DEFAULT_SAFE_US,
    DEFAULT_STATE_CHANGE_US, DEFAULT_TX_MAILBOX_US,
};
use crate::timeouts::{TimeoutKind, TimeoutRegistry};

/// Deadline for each protocol phase, in microseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Max time for a transmitted frame to be observed back at the transmitter.
    pub frame_return_us: u64,

    /// Max time for a transfer over the conservative link variant.
    pub safe_us: u64,

    /// Max time for a slave EEPROM (SII) access to complete.
    pub eeprom_us: u64,

    /// Max time for one mailbox-write service cycle.
    pub tx_mailbox_us: u64,

    /// Max time for one mailbox-read service cycle.
    pub rx_mailbox_us: u64,

    /// Max time to wait for a state change to be confirmed.
    pub state_change_us: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_return_us: DEFAULT_FRAME_RETURN_US,
            safe_us: DEFAULT_SAFE_US,
            eeprom_us: DEFAULT_EEPROM_US,
            tx_mailbox_us: DEFAULT_TX_MAILBOX_US,
            rx_mailbox_us: DEFAULT_RX_MAILBOX_US,
            state_change_us: DEFAULT_STATE_CHANGE_US,
        }
    }
}

impl TimingConfig {
    /// Install every field into the shared registry.
    pub fn apply(&self, registry: &TimeoutRegistry) {
        for (kind, us) in self.fields() {
            registry.set(kind, Duration::from_micros(us));
        }
    }

    /// Read the registry's current deadlines back into a config value.
    pub fn snapshot(registry: &TimeoutRegistry) -> Self {
        let us = |kind: TimeoutKind| u64::try_from(registry.get(kind).as_micros()).unwrap_or(u64::MAX);
        Self {
            frame_return_us: us(TimeoutKind::FrameReturn),
            safe_us: us(TimeoutKind::Safe),
            eeprom_us: us(TimeoutKind::Eeprom),
            tx_mailbox_us: us(TimeoutKind::TxMailbox),
            rx_mailbox_us: us(TimeoutKind::RxMailbox),
            state_change_us: us(TimeoutKind::StateChange),
        }
    }

    /// Field name and value for each entry, in schema order.
    pub(crate) fn named_fields(&self) -> [(&'static str, u64); 6] {
        [
            ("frame_return_us", self.frame_return_us),
            ("safe_us", self.safe_us),
            ("eeprom_us", self.eeprom_us),
            ("tx_mailbox_us", self.tx_mailbox_us),
            ("rx_mailbox_us", self.rx_mailbox_us),
            ("state_change_us", self.state_change_us),
        ]
    }

    fn fields(&self) -> [(TimeoutKind, u64); 6] {
        [
            (TimeoutKind::FrameReturn, self.frame_return_us),
            (TimeoutKind::Safe, self.safe_us),
            (TimeoutKind::Eeprom, self.eeprom_us),
            (TimeoutKind::TxMailbox, self.tx_mailbox_us),
            (TimeoutKind::RxMailbox, self.rx_mailbox_us),
            (TimeoutKind::StateChange, self.state_change_us),
        ]
    }
}
