//! Cancellable one-shot timer for banner hides.
//!
//! Holds at most one pending `gloo_timers` timeout. Scheduling again replaces
//! (and so cancels) the previous one; dropping the holder cancels as well.
//! Non-browser builds never fire.

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// A single pending delayed callback.
#[derive(Default)]
pub struct HideTimer {
    #[cfg(feature = "csr")]
    pending: Option<Timeout>,
}

impl HideTimer {
    /// Run `callback` after `delay_ms`, cancelling anything already pending.
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "csr")]
        {
            self.pending = Some(Timeout::new(delay_ms, callback));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Cancel the pending callback, if any.
    pub fn cancel(&mut self) {
        #[cfg(feature = "csr")]
        {
            self.pending = None;
        }
    }
}

impl std::fmt::Debug for HideTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        #[cfg(feature = "csr")]
        let pending = self.pending.is_some();
        #[cfg(not(feature = "csr"))]
        let pending = false;
        f.debug_struct("HideTimer").field("pending", &pending).finish()
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;
