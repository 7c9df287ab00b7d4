//! FT8 message subtypes and the classification rules that pick one.
//!
//! Classification is keyword driven and order sensitive: the more restricted
//! forms are tested first and the first match wins, falling through to free
//! text (at most 13 characters) and finally `Unknown`.

use std::fmt::Display;

use super::tokens;

/// The message subtype, tagged with the `i3` code carried in the payload
/// trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    FreeText,
    Dxpedition,
    FieldDay,
    FieldDayExt,
    Telemetry,
    Standard,
    EuVhf,
    RttyRoundup,
    NonstdCall,
    EuVhfExt,
    Unknown,
}

impl Subtype {
    /// The 3-bit type code packed into payload bits 73-75.
    ///
    /// `Unknown` has no wire representation.
    pub fn i3(self) -> Option<u8> {
        match self {
            Subtype::FreeText
            | Subtype::Dxpedition
            | Subtype::FieldDay
            | Subtype::FieldDayExt
            | Subtype::Telemetry => Some(0),
            Subtype::Standard => Some(1),
            Subtype::EuVhf => Some(2),
            Subtype::RttyRoundup => Some(3),
            Subtype::NonstdCall => Some(4),
            Subtype::EuVhfExt => Some(5),
            Subtype::Unknown => None,
        }
    }
}

impl Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Subtype::FreeText => "free text",
            Subtype::Dxpedition => "DXpedition",
            Subtype::FieldDay => "field day",
            Subtype::FieldDayExt => "field day with acknowledgement",
            Subtype::Telemetry => "telemetry",
            Subtype::Standard => "standard",
            Subtype::EuVhf => "EU VHF",
            Subtype::RttyRoundup => "RTTY roundup",
            Subtype::NonstdCall => "non-standard callsign",
            Subtype::EuVhfExt => "EU VHF extended grid",
            Subtype::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Classify a tokenized message. First match wins.
pub fn classify(keywords: &[&str]) -> Subtype {
    if is_dxpedition(keywords) {
        Subtype::Dxpedition
    } else if is_telemetry(keywords) {
        Subtype::Telemetry
    } else if is_field_day(keywords, true) {
        // the acknowledged form is more restricted, check it first
        Subtype::FieldDayExt
    } else if is_field_day(keywords, false) {
        Subtype::FieldDay
    } else if is_standard(keywords) {
        Subtype::Standard
    } else if is_rtty_roundup(keywords) {
        Subtype::RttyRoundup
    } else if is_eu_vhf_ext(keywords) {
        Subtype::EuVhfExt
    } else if is_nonstd(keywords) {
        Subtype::NonstdCall
    } else if keywords.iter().map(|k| k.len()).sum::<usize>() <= 13 {
        Subtype::FreeText
    } else {
        Subtype::Unknown
    }
}

fn is_dxpedition(keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|k| matches!(*k, "RRR" | "RR73" | "73") || tokens::is_signal_report(k))
}

fn is_telemetry(keywords: &[&str]) -> bool {
    keywords.len() == 1 && tokens::is_hex(keywords[0])
}

fn is_field_day(keywords: &[&str], require_ack: bool) -> bool {
    let mut has_callsign = false;
    let mut has_class = false;
    let mut has_ack = false;

    for keyword in keywords {
        if tokens::is_field_day_class(keyword) {
            has_class = true;
        } else if *keyword == "R" {
            has_ack = true;
        } else if tokens::is_callsign(keyword) {
            has_callsign = true;
        }
    }

    has_callsign && has_class && (!require_ack || has_ack)
}

fn is_standard(keywords: &[&str]) -> bool {
    let has_callsign = keywords.iter().any(|k| tokens::is_callsign(k));
    let has_grid = keywords.iter().any(|k| tokens::is_grid4(k));
    has_callsign && has_grid
}

fn is_rtty_roundup(keywords: &[&str]) -> bool {
    let has_callsign = keywords.iter().any(|k| tokens::is_callsign(k));
    let has_serial = keywords.iter().any(|k| tokens::is_contest_serial(k));
    has_callsign && has_serial
}

fn is_eu_vhf_ext(keywords: &[&str]) -> bool {
    let has_callsign = keywords.iter().any(|k| tokens::is_callsign(k));
    let has_grid6 = keywords.iter().any(|k| tokens::is_grid6(k));
    has_callsign && has_grid6
}

fn is_nonstd(keywords: &[&str]) -> bool {
    keywords.iter().any(|k| tokens::is_nonstd_callsign(k))
}
