//! Display-time masking strategies.
//!
//! Every strategy is a pure function over chars (not bytes), deterministic,
//! and total: malformed input falls back to a coarser masking or passes
//! through unchanged, but never errors. Re-masking an already masked value
//! is garbage-in/garbage-out by contract — it must not panic, nothing more.

use chrono::NaiveDate;
use fieldshield_types::MaskingType;
use regex::Regex;
use std::sync::LazyLock;

static TEL_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,3})-?(\d{3,4})-?(\d{4})$").expect("tel pattern"));

static NATIONAL_FULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{6})-?(\d{7})$").expect("national id pattern"));

// Re-masking support: digits already mixed with '*' from a previous pass.
static NATIONAL_PARTIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\d*]{6})-?([\d*]{7})$").expect("partial national id pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]{2})([A-Za-z0-9_]+)(@.*)$").expect("email pattern")
});

/// Renders `value` into its masked display form.
///
/// Empty input is returned as-is.
pub fn mask(kind: MaskingType, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match kind {
        MaskingType::Name => name(value),
        MaskingType::BirthDate => birth_date(value),
        MaskingType::UserId => user_id(value),
        MaskingType::Phone | MaskingType::WorkPhone => tel_no(value),
        MaskingType::NationalId => national_id(value),
        MaskingType::EmployeeNo => employee_no(value),
        MaskingType::Email => email(value),
        MaskingType::EmailHard => email_hard(value),
    }
}

/// Keep the first char, mask the rest. The shared fallback for values that
/// fit no richer pattern.
fn keep_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.count();
            format!("{first}{}", "*".repeat(rest))
        }
        None => String::new(),
    }
}

// 홍*동 / J*n / John ****** Smith
fn name(value: &str) -> String {
    if !value.contains(' ') {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() < 3 {
            let kept: String = chars[..chars.len() - 1].iter().collect();
            return format!("{kept}*");
        }
        let first = chars[0];
        let last = chars[chars.len() - 1];
        return format!("{first}{}{last}", "*".repeat(chars.len() - 2));
    }

    // Foreign names: first and last tokens stay, middle tokens mask fully.
    let tokens: Vec<&str> = value.split(' ').collect();
    let masked: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if i == 0 || i == tokens.len() - 1 {
                (*token).to_string()
            } else {
                "*".repeat(token.chars().count())
            }
        })
        .collect();
    masked.join(" ")
}

// 1***/**/**
fn birth_date(value: &str) -> String {
    let parsed = NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"));

    let Ok(date) = parsed else {
        return keep_first(value);
    };

    let formatted = date.format("%Y/%m/%d").to_string();
    let mut out = String::with_capacity(formatted.len());
    let mut chars = formatted.chars();
    if let Some(first) = chars.next() {
        out.push(first);
    }
    for c in chars {
        out.push(if c.is_ascii_digit() { '*' } else { c });
    }
    out
}

// ab****@****** or a*****
fn user_id(value: &str) -> String {
    if value.contains('@') {
        email_hard(value)
    } else {
        keep_first(value)
    }
}

// 010-****-5678
fn tel_no(value: &str) -> String {
    match TEL_NO.captures(value) {
        Some(caps) => format!("{}-{}-{}", &caps[1], "*".repeat(caps[2].len()), &caps[3]),
        None => value.to_string(),
    }
}

// 8*****-1******
fn national_id(value: &str) -> String {
    let clean: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() {
        return clean;
    }

    if let Some(caps) = NATIONAL_FULL.captures(&clean) {
        return format!("{}-{}", first_digit_kept(&caps[1]), first_digit_kept(&caps[2]));
    }
    if let Some(caps) = NATIONAL_PARTIAL.captures(&clean) {
        return format!("{}-{}", first_digit_kept(&caps[1]), first_digit_kept(&caps[2]));
    }

    keep_first(&clean)
}

/// Keeps the first digit of a group, masks everything else. On a group
/// already containing '*' the first remaining digit survives.
fn first_digit_kept(group: &str) -> String {
    let mut kept = false;
    group
        .chars()
        .map(|c| {
            if c.is_ascii_digit() && !kept {
                kept = true;
                c
            } else {
                '*'
            }
        })
        .collect()
}

// 1234****
fn employee_no(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let keep = chars.len() / 2;
    let kept: String = chars[..keep].iter().collect();
    format!("{kept}{}", "*".repeat(chars.len() - keep))
}

// ab****@test.com
fn email(value: &str) -> String {
    if !value.contains('@') {
        return keep_first(value);
    }
    match EMAIL.captures(value) {
        Some(caps) => format!("{}{}{}", &caps[1], "*".repeat(caps[2].len()), &caps[3]),
        // '@' present but the local part is too short or not word chars:
        // passed through, mirroring the platform's established behavior.
        None => value.to_string(),
    }
}

// ab****@********
fn email_hard(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    match chars.iter().position(|&c| c == '@') {
        Some(at) if at > 2 => {
            let kept: String = chars[..2].iter().collect();
            format!("{kept}{}@{}", "*".repeat(at - 2), "*".repeat(chars.len() - at - 1))
        }
        Some(at) if at > 0 => {
            let kept: String = chars[..at].iter().collect();
            format!("{kept}@{}", "*".repeat(chars.len() - at - 1))
        }
        _ => value.to_string(),
    }
}
