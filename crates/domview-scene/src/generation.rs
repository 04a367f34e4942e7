//! Load generations
//!
//! Each structure load takes a [`LoadTicket`]. Starting a newer load
//! invalidates every older ticket, so results that arrive late are dropped
//! instead of overwriting the view of the current structure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Issues load tickets and tracks the current generation
#[derive(Debug, Default)]
pub struct LoadTracker {
    current: AtomicU64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load; all previously issued tickets become stale
    pub fn begin(&self) -> LoadTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        log::trace!("Load generation {} started", generation);
        LoadTicket(generation)
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.current()
    }

    /// Pass `value` through if `ticket` is still current, drop it otherwise
    pub fn accept<T>(&self, ticket: LoadTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!(
                "Discarding result of stale load generation {} (current {})",
                ticket.0,
                self.current()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_invalidates_older() {
        let tracker = LoadTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert_eq!(tracker.accept(first, "old"), None);
        assert_eq!(tracker.accept(second, "new"), Some("new"));
    }

    #[test]
    fn test_fresh_tracker_has_no_current_ticket() {
        let tracker = LoadTracker::new();
        assert_eq!(tracker.current(), 0);
        assert_eq!(tracker.begin().generation(), 1);
    }
}
