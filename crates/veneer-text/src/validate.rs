//! String validation: digit checks, number shapes, email addresses and the
//! Luhn checksum.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Any run of Unicode decimal digits (including none).
static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| compile(r"^[\p{Nd}]*$"));

/// Any run of ASCII digits (including none).
static ASCII_DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]*$"));

/// Digits with at most one decimal separator from the supported set.
static NUMBER: Lazy<Regex> = Lazy::new(|| compile(r"^[\p{Nd}]*[.,٬·٫]?[\p{Nd}]*$"));

/// Loose email shape: local part, `@`, dotted domain labels, 2+ letter TLD.
static EMAIL: Lazy<Regex> = Lazy::new(|| compile(r"^.+@([A-Za-z0-9-]+\.)+[A-Za-z]{2}[A-Za-z]*$"));

/// Email addresses longer than this are rejected outright.
const MAX_EMAIL_LENGTH: usize = 254;

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("built-in validation pattern must compile")
}

/// Returns whether the string consists only of Unicode decimal digits.
///
/// The empty string vacuously qualifies, matching the behavior of the other
/// run checks in this module.
pub fn contains_only_digits(s: &str) -> bool {
    DIGITS_ONLY.is_match(s)
}

/// Returns whether the string consists only of ASCII digits `0-9`.
pub fn contains_only_ascii_digits(s: &str) -> bool {
    ASCII_DIGITS_ONLY.is_match(s)
}

/// Returns whether the string is shaped like an unsigned decimal number:
/// digit runs around at most one decimal separator (`.`, `,`, `٬`, `·`, `٫`).
pub fn is_valid_number(s: &str) -> bool {
    NUMBER.is_match(s)
}

/// Returns whether the string is an acceptable email address.
pub fn is_valid_email(s: &str) -> bool {
    s.chars().count() <= MAX_EMAIL_LENGTH && EMAIL.is_match(s)
}

/// Returns whether the string passes the Luhn checksum.
///
/// Non-digit input fails immediately. Starting from the rightmost digit,
/// every second digit is doubled (with 9 preserved and two-digit products
/// reduced); the total must be divisible by 10.
pub fn is_valid_luhn(s: &str) -> bool {
    if !contains_only_ascii_digits(s) {
        return false;
    }

    let sum: u32 = s
        .bytes()
        .rev()
        .enumerate()
        .map(|(index, byte)| {
            let digit = u32::from(byte - b'0');
            match (index % 2 == 1, digit) {
                (true, 9) => 9,
                (true, _) => (digit * 2) % 9,
                (false, _) => digit,
            }
        })
        .sum();

    sum % 10 == 0
}

/// Returns whether the whole string matches the given case-insensitive
/// pattern.
///
/// An invalid pattern is reported via `tracing` and treated as non-matching.
pub fn matches_fully(s: &str, pattern: &str) -> bool {
    let Some(regex) = user_regex(pattern) else {
        return false;
    };

    regex
        .find(s)
        .is_some_and(|m| m.start() == 0 && m.end() == s.len())
}

/// Returns whether the string has at least one match for the given
/// case-insensitive pattern.
pub fn has_matches(s: &str, pattern: &str) -> bool {
    user_regex(pattern).is_some_and(|regex| regex.is_match(s))
}

fn user_regex(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(error) => {
            warn!(pattern, %error, "failed to compile validation pattern");
            None
        }
    }
}
