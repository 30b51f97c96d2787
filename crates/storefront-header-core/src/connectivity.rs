//! Connectivity signals consumed by the header
//!
//! `has_been_offline` is a latch: once the session has seen the network
//! drop it stays set, even after the connection comes back.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Point-in-time connectivity as seen by the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivitySnapshot {
    pub is_online: bool,
    pub has_been_offline: bool,
}

impl Default for ConnectivitySnapshot {
    fn default() -> Self {
        Self::online()
    }
}

impl ConnectivitySnapshot {
    pub fn new(is_online: bool, has_been_offline: bool) -> Self {
        Self {
            is_online,
            has_been_offline,
        }
    }

    pub fn online() -> Self {
        Self::new(true, false)
    }

    /// Snapshot for a page that starts with the given connectivity
    pub fn initial(is_online: bool) -> Self {
        Self::new(is_online, !is_online)
    }

    /// Successor snapshot after the host reports `is_online`.
    /// Any offline observation (previous or new) sets the latch.
    pub fn next(self, is_online: bool) -> Self {
        Self {
            is_online,
            has_been_offline: self.has_been_offline || !self.is_online || !is_online,
        }
    }

    /// Whether the online/offline indicator belongs on the page
    pub fn shows_indicator(&self) -> bool {
        !self.is_online || self.has_been_offline
    }
}

/// Holds the session's connectivity
#[derive(Debug)]
pub struct ConnectivityTracker {
    current: RwLock<ConnectivitySnapshot>,
}

impl ConnectivityTracker {
    pub fn new(is_online: bool) -> Self {
        Self::from_snapshot(ConnectivitySnapshot::initial(is_online))
    }

    pub fn from_snapshot(snapshot: ConnectivitySnapshot) -> Self {
        Self {
            current: RwLock::new(snapshot),
        }
    }

    /// Apply a host online/offline report and return the new snapshot
    pub fn set_online(&self, is_online: bool) -> ConnectivitySnapshot {
        let mut current = self.current.write();
        let next = current.next(is_online);
        if next != *current {
            if next.is_online {
                info!("Connection restored");
            } else {
                info!("Connection lost");
            }
            *current = next;
        }
        debug!(snapshot = ?next, "Connectivity reported");
        next
    }

    pub fn snapshot(&self) -> ConnectivitySnapshot {
        *self.current.read()
    }
}

impl Default for ConnectivityTracker {
    fn default() -> Self {
        Self::from_snapshot(ConnectivitySnapshot::online())
    }
}
