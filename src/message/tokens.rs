//! Pure token predicates used by the classifier and the payload packer.

use once_cell::sync::Lazy;
use regex::Regex;

static CALLSIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9]?[0-9][A-Z]{1,3}$|^[A-Z0-9][A-Z][0-9][A-Z]{1,3}$").unwrap()
});

static NONSTD_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{2,4}/[A-Z0-9]{1,2}[A-Z]{1,3}$").unwrap());

static NONSTD_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{1,2}[0-9][A-Z]{1,3}/[A-Z0-9]{2,}$").unwrap());

static GRID4: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-R]{2}[0-9]{2}$").unwrap());

static GRID6: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-R]{2}[0-9]{2}[A-X]{2}$").unwrap());

static SIGNAL_REPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-][0-9]{2}$").unwrap());

static FIELD_DAY_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+[A-F]$").unwrap());

static CONTEST_SERIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

/// Rover or portable designator carried as a callsign suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSuffix {
    None,
    /// `/R`
    Rover,
    /// `/P`
    Portable,
}

/// Split a trailing `/R` or `/P` designator off a token.
pub fn base_call(token: &str) -> (&str, CallSuffix) {
    if let Some(base) = token.strip_suffix("/R") {
        return (base, CallSuffix::Rover);
    }
    if let Some(base) = token.strip_suffix("/P") {
        return (base, CallSuffix::Portable);
    }
    (token, CallSuffix::None)
}

/// Standard callsign, ignoring a `/R` or `/P` suffix.
pub fn is_callsign(token: &str) -> bool {
    let (base, _) = base_call(token);
    CALLSIGN.is_match(base)
}

/// Compound callsign such as `PJ4/K1ABC` or `K1ABC/7Z`.
pub fn is_nonstd_callsign(token: &str) -> bool {
    NONSTD_PREFIX.is_match(token) || NONSTD_SUFFIX.is_match(token)
}

/// Four-character Maidenhead locator.
pub fn is_grid4(token: &str) -> bool {
    GRID4.is_match(token)
}

/// Six-character extended Maidenhead locator.
pub fn is_grid6(token: &str) -> bool {
    GRID6.is_match(token)
}

/// Signed two-digit signal report, `+NN` or `-NN`.
pub fn is_signal_report(token: &str) -> bool {
    SIGNAL_REPORT.is_match(token)
}

/// ARRL Field Day class such as `6A` or `17B`.
pub fn is_field_day_class(token: &str) -> bool {
    FIELD_DAY_CLASS.is_match(token)
}

/// Three-digit RTTY Roundup contest number.
pub fn is_contest_serial(token: &str) -> bool {
    CONTEST_SERIAL.is_match(token)
}

/// Entirely hexadecimal digits.
pub fn is_hex(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit())
}
