//! Rule table: one predicate and one message per managed field.
//!
//! Rules are plain function pointers so a [`RuleTable`] is cheap to clone and
//! can be built once at startup, then handed to the validator. Nothing mutates
//! a table after construction; replacing a rule means building a new table.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{
    EMAIL_INVALID, EMAIL_PATTERN, FULL_NAME_REQUIRED, MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT, PASSWORDS_MISMATCH,
    is_js_whitespace,
};
use crate::field::FieldId;
use crate::snapshot::FormSnapshot;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Predicate signature: the field's own value plus the snapshot it was read from.
pub type Predicate = fn(&str, &FormSnapshot) -> bool;

/// A field's validation predicate and the message shown when it fails.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub field: FieldId,
    pub predicate: Predicate,
    pub message: &'static str,
}

impl ValidationRule {
    #[must_use]
    pub fn new(field: FieldId, predicate: Predicate, message: &'static str) -> Self {
        Self { field, predicate, message }
    }

    /// Evaluate the predicate.
    #[must_use]
    pub fn check(&self, value: &str, snapshot: &FormSnapshot) -> bool {
        (self.predicate)(value, snapshot)
    }
}

/// Ordered set of rules, at most one per field.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<ValidationRule>,
}

impl RuleTable {
    /// A table with no rules. Every field validates.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registration form's rules, in definition order.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(ValidationRule::new(FieldId::FullName, full_name_present, FULL_NAME_REQUIRED))
            .with_rule(ValidationRule::new(FieldId::Email, email_shaped, EMAIL_INVALID))
            .with_rule(ValidationRule::new(FieldId::Password, password_long_enough, PASSWORD_TOO_SHORT))
            .with_rule(ValidationRule::new(FieldId::ConfirmPassword, passwords_match, PASSWORDS_MISMATCH))
    }

    /// Add `rule`, replacing any existing rule for the same field in place.
    #[must_use]
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        match self.rules.iter_mut().find(|r| r.field == rule.field) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Rule for `field`, if the table has one.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&ValidationRule> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// Rules in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.iter()
    }
}

// =============================================================
// Predicates
// =============================================================

/// Full name: anything other than whitespace.
#[must_use]
pub fn full_name_present(value: &str, _snapshot: &FormSnapshot) -> bool {
    !value.trim_matches(is_js_whitespace).is_empty()
}

/// Email: `local@domain.tld` shape, no whitespace, exactly one `@`.
#[must_use]
pub fn email_shaped(value: &str, _snapshot: &FormSnapshot) -> bool {
    !value.contains(is_js_whitespace) && EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Password: at least [`MIN_PASSWORD_LEN`] UTF-16 code units.
#[must_use]
pub fn password_long_enough(value: &str, _snapshot: &FormSnapshot) -> bool {
    value.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Confirmation: identical to the snapshot's password.
#[must_use]
pub fn passwords_match(value: &str, snapshot: &FormSnapshot) -> bool {
    value == snapshot.get(FieldId::Password)
}
