//! Field validation predicates.
//!
//! These are the single source of truth for both submit-time and blur-time
//! validation. All predicates operate on already-trimmed input except where
//! noted; none of them touch the network.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Minimum accepted applicant age, inclusive.
pub const MIN_AGE: i32 = 15;
/// Maximum accepted applicant age, inclusive.
pub const MAX_AGE: i32 = 25;

/// Longest accepted email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("phone pattern compiles"));

static BECE_AGGREGATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("aggregate pattern compiles"));

static BECE_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("index pattern compiles"));

/// Names (people, schools, districts): at least two characters after
/// trimming.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

/// Emails: exactly one `@` with a dot somewhere in the domain part, no
/// whitespace, bounded length.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && value.len() <= MAX_EMAIL_LEN && EMAIL.is_match(value)
}

/// Phone numbers: digits plus `+ - ( )` and spaces, with 10 to 15 actual
/// digits once separators are stripped.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    if value.is_empty() || !PHONE_CHARSET.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

/// Date of birth: a valid `YYYY-MM-DD` date that is not in the future and
/// puts the applicant's age within [`MIN_AGE`, `MAX_AGE`] as of `today`.
///
/// `today` is injected so age boundaries stay testable; production callers
/// pass the current local date.
#[must_use]
pub fn is_valid_date_of_birth(value: &str, today: NaiveDate) -> bool {
    let Ok(birth) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return false;
    };
    if birth > today {
        return false;
    }
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// Date of birth against the current local date.
#[must_use]
pub fn is_valid_date_of_birth_today(value: &str) -> bool {
    is_valid_date_of_birth(value, chrono::Local::now().date_naive())
}

/// BECE aggregate: a one- or two-digit number in 6..=30.
#[must_use]
pub fn is_valid_bece_aggregate(value: &str) -> bool {
    if !BECE_AGGREGATE.is_match(value) {
        return false;
    }
    value.parse::<u8>().is_ok_and(|n| (6..=30).contains(&n))
}

/// BECE index number: exactly ten digits.
#[must_use]
pub fn is_valid_bece_index(value: &str) -> bool {
    BECE_INDEX.is_match(value)
}

/// Residential addresses: at least ten characters after trimming.
#[must_use]
pub fn is_valid_address(value: &str) -> bool {
    value.trim().chars().count() >= 10
}

/// Free-text messages: at least ten characters after trimming.
#[must_use]
pub fn is_valid_message(value: &str) -> bool {
    value.trim().chars().count() >= 10
}
