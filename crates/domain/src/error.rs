// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while interpreting ticket and reservation snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A reservation has neither an `id` nor an `externalId`.
    ///
    /// This is an upstream contract breach; callers must not retry.
    MissingIdentity {
        /// The property code of the offending reservation (may be empty).
        property_code: String,
        /// The raw checkout date of the offending reservation (may be empty).
        check_out_date: String,
    },
    /// The configured timezone is not a known IANA name.
    InvalidTimezone(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A wire value did not match any known variant.
    UnknownValue {
        /// The kind of value being parsed (e.g. "ticket status").
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdentity {
                property_code,
                check_out_date,
            } => {
                write!(
                    f,
                    "Reservation for property '{property_code}' checking out '{check_out_date}' has neither id nor externalId"
                )
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::UnknownValue { kind, value } => write!(f, "Unknown {kind}: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
