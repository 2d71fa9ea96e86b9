use serde::Serialize;

use crate::uploads::UploadError;

/// Bulk upload page: where to post the file and any errors from the last attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkUploadView {
    pub title: &'static str,
    pub action: &'static str,
    pub hint: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl BulkUploadView {
    pub fn closures() -> Self {
        Self {
            title: "Bulk upload agreement closures",
            action: "/api/v1/closures/bulk",
            hint: "One closure per line: FRN, agreement number, closure date",
            errors: Vec::new(),
        }
    }

    pub fn holds() -> Self {
        Self {
            title: "Bulk upload payment holds",
            action: "/api/v1/holds/bulk",
            hint: "FRNs separated by commas or new lines",
            errors: Vec::new(),
        }
    }

    pub fn with_upload_error(mut self, error: &UploadError) -> Self {
        self.errors = error.details().messages();
        self
    }
}
