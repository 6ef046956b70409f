//! Cooperative cancellation between polylines

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Checked once before each polyline is processed
pub trait AbortCheck {
    fn should_abort(&self) -> bool;
}

impl<F> AbortCheck for F
where
    F: Fn() -> bool,
{
    fn should_abort(&self) -> bool {
        self()
    }
}

impl AbortCheck for AtomicBool {
    fn should_abort(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Never aborts
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverAbort;

impl AbortCheck for NeverAbort {
    fn should_abort(&self) -> bool {
        false
    }
}

/// Shared flag that can be raised from another thread
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that processing stop before the next polyline
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.should_abort()
    }
}

impl AbortCheck for AbortFlag {
    fn should_abort(&self) -> bool {
        self.is_aborted()
    }
}
