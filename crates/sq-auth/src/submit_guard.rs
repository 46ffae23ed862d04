use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Duplicate-submission guard for one form.
///
/// While a [`SubmitPermit`] is alive further `try_acquire` calls return
/// `None`; there is no queueing. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<SubmitPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission; re-enables the form on drop.
#[derive(Debug)]
pub struct SubmitPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
