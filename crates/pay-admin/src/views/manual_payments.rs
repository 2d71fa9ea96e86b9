use serde::Serialize;

use crate::repository::ManualPaymentSummary;

pub const ACCEPTED_EXTENSION: &str = ".csv";

/// Why a manual payment file was refused before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManualPaymentRejection {
    #[error("Select a file to upload")]
    Empty,
    #[error("The selected file must be a CSV")]
    NotCsv,
    /// Only reachable by direct service callers; over HTTP the router's body
    /// limit answers 413 before the handler runs.
    #[error("The selected file must be smaller than {max_bytes} bytes")]
    TooLarge { max_bytes: usize },
}

/// Checks name, size and content type of an uploaded manual payment file.
pub fn check_manual_payment_file(
    file_name: &str,
    size_bytes: usize,
    max_bytes: usize,
) -> Result<(), ManualPaymentRejection> {
    if file_name.trim().is_empty() || size_bytes == 0 {
        return Err(ManualPaymentRejection::Empty);
    }

    let is_csv = mime_guess::from_path(file_name.trim())
        .iter()
        .any(|mime| mime.essence_str() == "text/csv");
    if !is_csv {
        return Err(ManualPaymentRejection::NotCsv);
    }

    if size_bytes > max_bytes {
        return Err(ManualPaymentRejection::TooLarge { max_bytes });
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPaymentView {
    pub accepted_extension: &'static str,
    pub max_bytes: usize,
    pub uploads: Vec<ManualPaymentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ManualPaymentView {
    pub fn new(max_bytes: usize, uploads: Vec<ManualPaymentSummary>) -> Self {
        Self {
            accepted_extension: ACCEPTED_EXTENSION,
            max_bytes,
            uploads,
            error_message: None,
        }
    }

    pub fn with_rejection(mut self, rejection: &ManualPaymentRejection) -> Self {
        self.error_message = Some(rejection.to_string());
        self
    }
}
