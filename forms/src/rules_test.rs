use super::*;

fn empty() -> FormSnapshot {
    FormSnapshot::new()
}

// =============================================================
// Standard table
// =============================================================

#[test]
fn standard_table_has_one_rule_per_field_in_order() {
    let table = RuleTable::standard();
    let fields: Vec<FieldId> = table.iter().map(|r| r.field).collect();
    assert_eq!(fields, FieldId::ALL.to_vec());
}

#[test]
fn standard_messages() {
    let table = RuleTable::standard();
    let message = |field| table.get(field).map(|r| r.message);
    assert_eq!(message(FieldId::FullName), Some("Full name is required"));
    assert_eq!(message(FieldId::Email), Some("Please enter a valid email address"));
    assert_eq!(message(FieldId::Password), Some("Password must be at least 8 characters long"));
    assert_eq!(message(FieldId::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn empty_table_has_no_rules() {
    let table = RuleTable::empty();
    assert_eq!(table.iter().count(), 0);
    assert!(table.get(FieldId::Email).is_none());
}

#[test]
fn with_rule_replaces_in_place() {
    fn always(_: &str, _: &FormSnapshot) -> bool {
        true
    }
    let table = RuleTable::standard().with_rule(ValidationRule::new(FieldId::Email, always, "unused"));
    let fields: Vec<FieldId> = table.iter().map(|r| r.field).collect();
    assert_eq!(fields, FieldId::ALL.to_vec());
    assert!(table.get(FieldId::Email).is_some_and(|r| r.check("not an email", &empty())));
}

// =============================================================
// Whitespace
// =============================================================

#[test]
fn js_whitespace_is_unicode_whitespace_without_nel_plus_bom() {
    for c in (0..=0xFFFF).filter_map(char::from_u32) {
        let expected = (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}';
        assert_eq!(is_js_whitespace(c), expected, "U+{:04X}", u32::from(c));
    }
}

// =============================================================
// Full name
// =============================================================

#[test]
fn full_name_requires_non_whitespace() {
    assert!(full_name_present("Jo", &empty()));
    assert!(full_name_present("  Jo  ", &empty()));
    assert!(!full_name_present("", &empty()));
    assert!(!full_name_present("   \t\n", &empty()));
}

#[test]
fn full_name_trims_browser_whitespace() {
    assert!(!full_name_present("\u{FEFF}", &empty()));
    assert!(!full_name_present("\u{A0}\u{3000}\u{2028}", &empty()));
    assert!(full_name_present("\u{FEFF}Jo\u{FEFF}", &empty()));
    // NEL is not whitespace to the browser.
    assert!(full_name_present("\u{85}", &empty()));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_simple_addresses() {
    assert!(email_shaped("a@b.com", &empty()));
    assert!(email_shaped("jo@x.com", &empty()));
    assert!(email_shaped("first.last@mail.example.org", &empty()));
}

#[test]
fn email_accepts_dots_anywhere_after_at() {
    assert!(email_shaped("a@b.c.d", &empty()));
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!email_shaped("bad-email", &empty()));
    assert!(!email_shaped("a@b", &empty()));
    assert!(!email_shaped("@b.com", &empty()));
    assert!(!email_shaped("a@.com", &empty()));
    assert!(!email_shaped("a@b.", &empty()));
    assert!(!email_shaped("", &empty()));
}

#[test]
fn email_rejects_whitespace_and_double_at() {
    assert!(!email_shaped("a b@c.com", &empty()));
    assert!(!email_shaped(" a@b.com", &empty()));
    assert!(!email_shaped("a@@b.com", &empty()));
    assert!(!email_shaped("a@b@c.com", &empty()));
}

#[test]
fn email_whitespace_follows_browser_set() {
    assert!(!email_shaped("a\u{FEFF}b@c.d", &empty()));
    assert!(!email_shaped("a@b.c\u{FEFF}", &empty()));
    assert!(!email_shaped("a@b\u{A0}c.d", &empty()));
    assert!(!email_shaped("a@b.c\n", &empty()));
    assert!(email_shaped("a\u{85}b@c.d", &empty()));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_length_boundary() {
    assert!(!password_long_enough("1234567", &empty()));
    assert!(password_long_enough("12345678", &empty()));
    assert!(password_long_enough("abcdefghij", &empty()));
    assert!(!password_long_enough("", &empty()));
}

#[test]
fn password_has_no_complexity_requirement() {
    assert!(password_long_enough("aaaaaaaa", &empty()));
    assert!(password_long_enough("        ", &empty()));
}

#[test]
fn password_length_counts_utf16_units() {
    // Each of these emoji is a surrogate pair: 4 emoji = 8 units.
    assert!(password_long_enough("😀😀😀😀", &empty()));
    assert!(!password_long_enough("😀😀😀", &empty()));
}

// =============================================================
// Confirm password
// =============================================================

#[test]
fn confirmation_compares_against_snapshot_password() {
    let snapshot = FormSnapshot::new().with(FieldId::Password, "abcdefgh");
    assert!(passwords_match("abcdefgh", &snapshot));
    assert!(!passwords_match("xyz", &snapshot));
    assert!(!passwords_match("abcdefgh ", &snapshot));
}

#[test]
fn empty_confirmation_matches_empty_password() {
    assert!(passwords_match("", &empty()));
}
