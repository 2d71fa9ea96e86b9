//! All-or-nothing ingestion of uploaded closure and hold files.

mod closures;
mod holds;
mod reader;

use crate::validation::{ValidationDetail, ValidationError};
use serde::{Deserialize, Serialize};

pub use closures::{process_closure_data, ClosureRecord, CLOSURE_FIELD_COUNT};
pub use holds::{process_hold_data, HoldRecord};

pub const FORMAT_ERROR_MESSAGE: &str = "The file is not in the expected format";

/// Reason an uploaded file was rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{}", FORMAT_ERROR_MESSAGE)]
    Format,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl UploadError {
    /// The `errors` payload reported back to the uploader.
    pub fn details(&self) -> ValidationError {
        match self {
            UploadError::Format => {
                ValidationError::single(ValidationDetail::message(FORMAT_ERROR_MESSAGE))
            }
            UploadError::Validation(error) => error.clone(),
        }
    }
}

/// Wire shape of a processed upload: `{ uploadData: [...] }` or `{ errors: {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadOutcome<T> {
    UploadData(Vec<T>),
    Errors(ValidationError),
}

impl<T> UploadOutcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, UploadOutcome::Errors(_))
    }
}

impl<T> From<Result<Vec<T>, UploadError>> for UploadOutcome<T> {
    fn from(result: Result<Vec<T>, UploadError>) -> Self {
        match result {
            Ok(records) => UploadOutcome::UploadData(records),
            Err(error) => UploadOutcome::Errors(error.details()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_error_displays_the_upload_message() {
        assert_eq!(UploadError::Format.to_string(), FORMAT_ERROR_MESSAGE);
    }

    #[test]
    fn format_error_details_carry_the_fixed_message_only() {
        let outcome: UploadOutcome<ClosureRecord> = Err(UploadError::Format).into();
        assert_eq!(
            serde_json::to_value(&outcome).expect("serializes"),
            json!({ "errors": { "details": [{ "message": FORMAT_ERROR_MESSAGE }] } })
        );
    }

    #[test]
    fn success_serializes_under_upload_data() {
        let outcome: UploadOutcome<HoldRecord> = Ok(vec![HoldRecord {
            frn: "1234".to_string(),
            hold_category_id: 3,
        }])
        .into();
        assert!(!outcome.is_error());
        assert_eq!(
            serde_json::to_value(&outcome).expect("serializes"),
            json!({ "uploadData": [{ "frn": "1234", "holdCategoryId": 3 }] })
        );
    }
}
