use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ThicknessError;

/// Stop request for a running thickness search.
///
/// Clones share one flag: keep a clone, hand another to the search, and
/// call [`cancel`](Self::cancel) from any thread. The search polls the flag
/// between oracle calls, so a single planarity test is never interrupted.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    requested: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stop was requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    /// [`ThicknessError::Cancelled`] once a stop was requested.
    #[inline]
    pub fn check(&self) -> Result<(), ThicknessError> {
        if self.is_cancelled() {
            Err(ThicknessError::Cancelled)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn cancel(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let a = CancelToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
    }

    #[test]
    fn check_reports_cancellation() {
        let token = CancelToken::new();
        assert_eq!(token.check(), Ok(()));
        token.clone().cancel();
        assert_eq!(token.check(), Err(ThicknessError::Cancelled));
    }
}
