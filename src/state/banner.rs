//! Transient message banners (cart notice, registration success).
//!
//! DESIGN
//! ======
//! A banner hides itself after a delay. Each `show` bumps an epoch and the
//! scheduled hide carries the epoch it was scheduled for, so a hide left over
//! from an earlier showing can never take down a newer one. The host also
//! cancels the pending timer on re-show; the epoch covers any callback that
//! was already queued when the cancel happened.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Visibility, text, and epoch of one transient banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    visible: bool,
    text: String,
    epoch: u64,
}

impl Banner {
    /// Show `text` and return the epoch a scheduled hide must present.
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.visible = true;
        self.text = text.into();
        self.epoch
    }

    /// Hide immediately and drop the text.
    pub fn clear(&mut self) {
        self.visible = false;
        self.text.clear();
    }

    /// Scheduled hide. Only applies if no newer `show` happened since `epoch`.
    ///
    /// Returns whether the banner was hidden.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.visible {
            return false;
        }
        self.clear();
        true
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `base` plus `modifier` while visible, e.g. `cart-message success`.
    #[must_use]
    pub fn class(&self, base: &str, modifier: &str) -> String {
        if self.visible { format!("{base} {modifier}") } else { base.to_owned() }
    }
}
