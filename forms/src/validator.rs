//! Validation orchestration: single field, whole form, blur, and input.
//!
//! [`FormValidator`] owns an injected [`RuleTable`] and answers two kinds of
//! question. The pure ones (`validate_field`, `evaluate`, `blur_updates`,
//! `input_updates`) return decisions. The effectful ones (`validate_form`,
//! `on_blur`, `on_input`) push those decisions to an [`ErrorDisplay`].
//!
//! Interactive feedback is deliberately asymmetric. Blur reports both
//! outcomes. Input only ever clears a field's own error, so nothing flashes red
//! mid-keystroke; the one exception is that editing the password re-checks a
//! non-empty confirmation and shows or clears its error either way.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use crate::display::{ErrorDisplay, apply_updates};
use crate::field::FieldId;
use crate::rules::RuleTable;
use crate::snapshot::FormSnapshot;

/// Outcome of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(&'static str),
}

impl Verdict {
    #[must_use]
    pub fn passed(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Verdict for every ruled field, in rule-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    verdicts: Vec<(FieldId, Verdict)>,
}

impl FormReport {
    /// True only if every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|(_, v)| v.passed())
    }

    /// Verdict for `field`; `None` if the table has no rule for it.
    #[must_use]
    pub fn verdict(&self, field: FieldId) -> Option<Verdict> {
        self.verdicts.iter().find(|(f, _)| *f == field).map(|(_, v)| *v)
    }

    /// One display update per field: clear on pass, show on fail.
    #[must_use]
    pub fn updates(&self) -> Vec<FieldUpdate> {
        self.verdicts
            .iter()
            .map(|&(field, verdict)| FieldUpdate { field, change: Change::from(verdict) })
            .collect()
    }
}

/// What to do to a field's error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Show(&'static str),
    Clear,
}

impl From<Verdict> for Change {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Pass => Self::Clear,
            Verdict::Fail(message) => Self::Show(message),
        }
    }
}

/// A display change addressed to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: FieldId,
    pub change: Change,
}

/// Registration-form validator over an injected rule table.
#[derive(Debug, Clone)]
pub struct FormValidator {
    rules: RuleTable,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl FormValidator {
    #[must_use]
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    // --- Single field ---

    /// Whether `value` satisfies `field`'s rule. Fields without a rule pass.
    #[must_use]
    pub fn validate_field(&self, field: FieldId, value: &str, snapshot: &FormSnapshot) -> bool {
        self.verdict(field, value, snapshot).is_none_or(Verdict::passed)
    }

    /// String-keyed form of [`FormValidator::validate_field`] for DOM ids.
    ///
    /// Ids that do not name a managed field always pass.
    #[must_use]
    pub fn validate_named(&self, name: &str, value: &str, snapshot: &FormSnapshot) -> bool {
        FieldId::from_dom_id(name).is_none_or(|field| self.validate_field(field, value, snapshot))
    }

    fn verdict(&self, field: FieldId, value: &str, snapshot: &FormSnapshot) -> Option<Verdict> {
        self.rules
            .get(field)
            .map(|rule| if rule.check(value, snapshot) { Verdict::Pass } else { Verdict::Fail(rule.message) })
    }

    // --- Whole form ---

    /// Evaluate every rule against one snapshot. Never short-circuits.
    #[must_use]
    pub fn evaluate(&self, snapshot: &FormSnapshot) -> FormReport {
        let verdicts = self
            .rules
            .iter()
            .map(|rule| {
                let verdict = if rule.check(snapshot.get(rule.field), snapshot) {
                    Verdict::Pass
                } else {
                    Verdict::Fail(rule.message)
                };
                (rule.field, verdict)
            })
            .collect();
        FormReport { verdicts }
    }

    /// Evaluate the form and update every field's display. Returns the gate
    /// for submission.
    pub fn validate_form(&self, snapshot: &FormSnapshot, mut display: impl ErrorDisplay) -> bool {
        let report = self.evaluate(snapshot);
        apply_updates(&mut display, &report.updates());
        report.is_valid()
    }

    // --- Interactive ---

    /// Display updates for `field` losing focus with `value`.
    ///
    /// `value` overrides the snapshot's entry for `field`.
    #[must_use]
    pub fn blur_updates(&self, field: FieldId, value: &str, snapshot: &FormSnapshot) -> Vec<FieldUpdate> {
        let snapshot = snapshot.clone().with(field, value);
        let mut updates = Vec::with_capacity(2);
        if let Some(verdict) = self.verdict(field, value, &snapshot) {
            updates.push(FieldUpdate { field, change: Change::from(verdict) });
        }
        updates.extend(self.recheck_confirmation(field, &snapshot));
        updates
    }

    /// Display updates for `field` receiving keystroke input `value`.
    ///
    /// Only a passing field is updated (cleared); failures wait for blur or
    /// submit. The confirmation re-check after a password edit is reported
    /// either way.
    #[must_use]
    pub fn input_updates(&self, field: FieldId, value: &str, snapshot: &FormSnapshot) -> Vec<FieldUpdate> {
        let snapshot = snapshot.clone().with(field, value);
        let mut updates = Vec::with_capacity(2);
        if self.verdict(field, value, &snapshot).is_some_and(Verdict::passed) {
            updates.push(FieldUpdate { field, change: Change::Clear });
        }
        updates.extend(self.recheck_confirmation(field, &snapshot));
        updates
    }

    /// After a password change, re-check a confirmation the user already typed.
    fn recheck_confirmation(&self, field: FieldId, snapshot: &FormSnapshot) -> Option<FieldUpdate> {
        if field != FieldId::Password {
            return None;
        }
        let confirmation = snapshot.get(FieldId::ConfirmPassword);
        if confirmation.is_empty() {
            return None;
        }
        self.verdict(FieldId::ConfirmPassword, confirmation, snapshot)
            .map(|verdict| FieldUpdate { field: FieldId::ConfirmPassword, change: Change::from(verdict) })
    }

    /// [`FormValidator::blur_updates`] applied to `display`.
    pub fn on_blur(&self, field: FieldId, value: &str, snapshot: &FormSnapshot, mut display: impl ErrorDisplay) {
        apply_updates(&mut display, &self.blur_updates(field, value, snapshot));
    }

    /// [`FormValidator::input_updates`] applied to `display`.
    pub fn on_input(&self, field: FieldId, value: &str, snapshot: &FormSnapshot, mut display: impl ErrorDisplay) {
        apply_updates(&mut display, &self.input_updates(field, value, snapshot));
    }
}
