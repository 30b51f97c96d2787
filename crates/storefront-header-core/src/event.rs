//! Input events a header instance reacts to
//!
//! Intersection changes are not listed here: they arrive through the
//! observer's own subscription.

use crate::logo::LogoStatus;

/// Events routed by [`HeaderSession::dispatch`](crate::session::HeaderSession::dispatch)
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderEvent {
    /// Search trigger was activated
    SearchTriggerActivated,
    /// Router moved to a new location
    Navigated(String),
    /// Host reported online (`true`) or offline (`false`)
    ConnectivityChanged(bool),
    /// Page-level loading flag changed
    PageLoadingChanged(bool),
    /// Logo collaborator reported a new status
    LogoChanged(LogoStatus),
}

/// State slice touched by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSlice {
    SearchOverlay,
    Connectivity,
    PageLoading,
    Logo,
}

impl HeaderEvent {
    /// The only slice this event may write
    pub fn slice(&self) -> StateSlice {
        match self {
            HeaderEvent::SearchTriggerActivated | HeaderEvent::Navigated(_) => {
                StateSlice::SearchOverlay
            }
            HeaderEvent::ConnectivityChanged(_) => StateSlice::Connectivity,
            HeaderEvent::PageLoadingChanged(_) => StateSlice::PageLoading,
            HeaderEvent::LogoChanged(_) => StateSlice::Logo,
        }
    }
}
