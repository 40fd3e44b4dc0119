//! Run control for user interrupts: a shared abort token.
//!
//! The CLI hands a clone of the token to its Ctrl-C handler; the fetcher polls
//! it from libcurl's progress callback and between transfers, so an interrupt
//! stops the run at the current point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cheaply cloneable abort flag shared between the run and a signal handler.
#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abort. Idempotent; safe to call from a signal handler thread.
    pub fn request_abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let token = AbortToken::new();
        let handler_copy = token.clone();
        assert!(!token.is_aborted());
        handler_copy.request_abort();
        assert!(token.is_aborted());
        handler_copy.request_abort();
        assert!(token.is_aborted());
    }
}
