// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stayops_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while deriving the maintenance feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// The selected period cannot be turned into a date window.
    #[error("Invalid period: {reason}")]
    InvalidPeriod {
        /// Why the period was rejected.
        reason: String,
    },
}
