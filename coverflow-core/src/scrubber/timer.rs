//! Cancellable settle timer
//!
//! The only scheduled work in the engine. Time is supplied by the caller, so
//! "firing" means a poll observed the deadline. Every arm hands out a fresh
//! token; stale tokens never fire and cancelling them does nothing.

use std::time::{Duration, Instant};

/// Handle for one armed settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleToken(u64);

#[derive(Debug, Clone, Default)]
pub struct SettleTimer {
    next_id: u64,
    pending: Option<(SettleToken, Instant)>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a settle that fires `duration` after `now`, superseding any
    /// pending one.
    pub fn arm(&mut self, now: Instant, duration: Duration) -> SettleToken {
        self.next_id = self.next_id.wrapping_add(1);
        let token = SettleToken(self.next_id);
        self.pending = Some((token, now + duration));
        token
    }

    /// Cancel `token` if it is still pending. Returns whether anything was
    /// cancelled; fired, cancelled and superseded tokens are a no-op.
    pub fn cancel(&mut self, token: SettleToken) -> bool {
        match self.pending {
            Some((pending, _)) if pending == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self, token: SettleToken) -> bool {
        matches!(self.pending, Some((pending, _)) if pending == token)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Fire the pending settle if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<SettleToken> {
        let (token, deadline) = self.pending?;
        if now >= deadline {
            self.pending = None;
            Some(token)
        } else {
            None
        }
    }
}
