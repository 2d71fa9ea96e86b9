//! Record validation contract and the structured error it reports.
//!
//! Validators collect every violated constraint for a record before
//! returning, so a single error carries all of the problems a user needs to
//! fix on that line or form.

mod schemas;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use schemas::{parse_closure_date, ClosureSchema, FrnSchema, FRN_MAX_DIGITS};

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ValidationDetail {
    /// Detail without a field path, used for whole-file problems.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            kind: None,
        }
    }

    pub fn field(path: &str, rule: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.to_string()),
            kind: Some(format!("{path}.{rule}")),
        }
    }
}

/// Structured, multi-violation error returned by validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub details: Vec<ValidationDetail>,
}

impl ValidationError {
    pub fn single(detail: ValidationDetail) -> Self {
        Self {
            details: vec![detail],
        }
    }

    /// Converts collected violations into a result; no violations means valid.
    pub fn from_details(details: Vec<ValidationDetail>) -> Result<(), Self> {
        if details.is_empty() {
            Ok(())
        } else {
            Err(Self { details })
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.details
            .iter()
            .map(|detail| detail.message.clone())
            .collect()
    }

    pub fn first_message(&self) -> Option<&str> {
        self.details.first().map(|detail| detail.message.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .details
            .iter()
            .map(|detail| detail.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationError {}

/// Validates one candidate record, reporting every violation at once.
pub trait RecordValidator<T: ?Sized>: Send + Sync {
    fn validate(&self, record: &T) -> Result<(), ValidationError>;
}

impl<T, F> RecordValidator<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, record: &T) -> Result<(), ValidationError> {
        self(record)
    }
}
