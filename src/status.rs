/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Order-status categories (tag 39 values).
//!
//! [`OrdStatus`] is the fixed set of FIX 4.4 OrdStatus codes. Callers that
//! request categories may hand over either a named status or a raw code
//! string; [`Category`] carries both and normalises to the code.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// FIX OrdStatus (tag 39) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrdStatus {
    New,
    PartiallyFilled,
    Filled,
    DoneForDay,
    Cancelled,
    Replaced,
    PendingCancel,
    Stopped,
    Rejected,
    Suspended,
    PendingNew,
    Calculated,
    Expired,
    AcceptedForBidding,
    PendingReplace,
}

impl OrdStatus {
    /// Every status, in code order.
    pub const ALL: [OrdStatus; 15] = [
        OrdStatus::New,
        OrdStatus::PartiallyFilled,
        OrdStatus::Filled,
        OrdStatus::DoneForDay,
        OrdStatus::Cancelled,
        OrdStatus::Replaced,
        OrdStatus::PendingCancel,
        OrdStatus::Stopped,
        OrdStatus::Rejected,
        OrdStatus::Suspended,
        OrdStatus::PendingNew,
        OrdStatus::Calculated,
        OrdStatus::Expired,
        OrdStatus::AcceptedForBidding,
        OrdStatus::PendingReplace,
    ];

    /// The single-character wire code.
    pub const fn code(self) -> char {
        match self {
            OrdStatus::New => '0',
            OrdStatus::PartiallyFilled => '1',
            OrdStatus::Filled => '2',
            OrdStatus::DoneForDay => '3',
            OrdStatus::Cancelled => '4',
            OrdStatus::Replaced => '5',
            OrdStatus::PendingCancel => '6',
            OrdStatus::Stopped => '7',
            OrdStatus::Rejected => '8',
            OrdStatus::Suspended => '9',
            OrdStatus::PendingNew => 'A',
            OrdStatus::Calculated => 'B',
            OrdStatus::Expired => 'C',
            OrdStatus::AcceptedForBidding => 'D',
            OrdStatus::PendingReplace => 'E',
        }
    }

    /// Upper-snake-case name, e.g. `PARTIALLY_FILLED`.
    pub const fn name(self) -> &'static str {
        match self {
            OrdStatus::New => "NEW",
            OrdStatus::PartiallyFilled => "PARTIALLY_FILLED",
            OrdStatus::Filled => "FILLED",
            OrdStatus::DoneForDay => "DONE_FOR_DAY",
            OrdStatus::Cancelled => "CANCELLED",
            OrdStatus::Replaced => "REPLACED",
            OrdStatus::PendingCancel => "PENDING_CANCEL",
            OrdStatus::Stopped => "STOPPED",
            OrdStatus::Rejected => "REJECTED",
            OrdStatus::Suspended => "SUSPENDED",
            OrdStatus::PendingNew => "PENDING_NEW",
            OrdStatus::Calculated => "CALCULATED",
            OrdStatus::Expired => "EXPIRED",
            OrdStatus::AcceptedForBidding => "ACCEPTED_FOR_BIDDING",
            OrdStatus::PendingReplace => "PENDING_REPLACE",
        }
    }

    /// Look up a status by its wire code.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

impl fmt::Display for OrdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a wire code (`"2"`, `"a"`) or a name (`"filled"`,
/// `"Partially_Filled"`), case-insensitively.
impl FromStr for OrdStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(status) = Self::from_code(c.to_ascii_uppercase()) {
                return Ok(status);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidCategory(s.to_string()))
    }
}

/// A requested report category: a named status or a raw tag-39 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Named(OrdStatus),
    Raw(String),
}

impl Category {
    /// The tag-39 value this category counts.
    pub fn code(&self) -> Cow<'_, str> {
        match self {
            Category::Named(status) => Cow::Owned(status.code().to_string()),
            Category::Raw(code) => Cow::Borrowed(code.as_str()),
        }
    }

    /// Resolve a configuration string: a known status name or code becomes
    /// [`Category::Named`]; anything else is kept verbatim as a raw code.
    pub fn parse_lenient(s: &str) -> Self {
        match s.parse::<OrdStatus>() {
            Ok(status) => Category::Named(status),
            Err(_) => Category::Raw(s.trim().to_string()),
        }
    }
}

impl From<OrdStatus> for Category {
    fn from(status: OrdStatus) -> Self {
        Category::Named(status)
    }
}

impl From<&str> for Category {
    fn from(code: &str) -> Self {
        Category::Raw(code.to_string())
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        Category::Raw(code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Named(status) => write!(f, "{status}"),
            Category::Raw(code) => f.write_str(code),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
