//! Shared constants for the forms crate.

// ── Rule thresholds ─────────────────────────────────────────────

/// Minimum password length, in UTF-16 code units (browser `value.length`).
pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose email shape: one `@`, then at least one dot in the domain part.
///
/// Whitespace is excluded separately with [`is_js_whitespace`]; the regex
/// crate's `\s` disagrees with the browser on U+0085 and U+FEFF.
pub const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+$";

/// Whitespace as browser `String.prototype.trim` and `/\s/` see it.
///
/// Unicode `White_Space` (Rust's `char::is_whitespace`) minus U+0085 NEL,
/// plus U+FEFF ZERO WIDTH NO-BREAK SPACE.
#[must_use]
pub const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// ── Messages ────────────────────────────────────────────────────

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

// ── Presentation ────────────────────────────────────────────────

/// Marker class applied to an input that passed validation.
pub const VALID_CLASS: &str = "valid";

/// Marker class applied to an input that failed validation.
pub const INVALID_CLASS: &str = "invalid";
