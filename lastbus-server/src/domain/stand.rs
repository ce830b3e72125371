//! Bus stand types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest stand code we accept.
const MAX_CODE_LEN: usize = 64;

/// Error returned when parsing an invalid stand code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stand code: {reason}")]
pub struct InvalidStandCode {
    reason: &'static str,
}

/// A validated bus stand identifier.
///
/// Stand codes name both a catalog entry and the dataset file that holds
/// its schedules, so they are restricted to ASCII letters, digits, `-` and
/// `_`. Case is preserved; comparisons against the catalog are
/// case-insensitive (see [`StandCode::matches`]).
///
/// # Examples
///
/// ```
/// use lastbus_server::domain::StandCode;
///
/// let code = StandCode::parse("thanjavur-new").unwrap();
/// assert_eq!(code.as_str(), "thanjavur-new");
///
/// // Path separators are rejected
/// assert!(StandCode::parse("../etc").is_err());
/// assert!(StandCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StandCode(String);

impl StandCode {
    /// Parse a stand code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStandCode> {
        if s.is_empty() {
            return Err(InvalidStandCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_CODE_LEN {
            return Err(InvalidStandCode {
                reason: "must be at most 64 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(InvalidStandCode {
                reason: "must contain only ASCII letters, digits, '-' or '_'",
            });
        }

        Ok(StandCode(s.to_string()))
    }

    /// Returns the stand code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw identifier.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Debug for StandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StandCode({})", self.0)
    }
}

impl fmt::Display for StandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bus stand as listed in the stand catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stand {
    /// Unique identifier, also the dataset name.
    pub value: String,
    /// Display name.
    pub label: String,
}

impl Stand {
    /// The stand's identifier as a validated code.
    pub fn code(&self) -> Result<StandCode, InvalidStandCode> {
        StandCode::parse(&self.value)
    }
}
