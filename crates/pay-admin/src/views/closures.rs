use serde::{Deserialize, Serialize};

use crate::uploads::ClosureRecord;
use crate::validation::ValidationError;

/// Fields posted from the add-closure form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosureForm {
    pub frn: String,
    pub agreement_number: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

impl ClosureForm {
    /// Joins the date parts as `YYYY-MM-DD`.
    ///
    /// Non-numeric parts are passed through unpadded so the schema rejects
    /// them rather than the form silently fixing them.
    pub fn closure_date(&self) -> String {
        let parts = [self.year.trim(), self.month.trim(), self.day.trim()];
        if parts.iter().all(|part| part.is_empty()) {
            return String::new();
        }

        match (
            parts[0].parse::<u32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) {
            (Ok(year), Ok(month), Ok(day)) => format!("{year:04}-{month:02}-{day:02}"),
            _ => parts.join("-"),
        }
    }

    pub fn to_record(&self) -> ClosureRecord {
        ClosureRecord {
            frn: self.frn.trim().to_string(),
            agreement_number: self.agreement_number.trim().to_string(),
            closure_date: self.closure_date(),
        }
    }
}

/// State of the add-closure page, echoing submitted values on error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureFormView {
    pub frn: String,
    pub agreement_number: String,
    pub day: String,
    pub month: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ClosureFormView {
    pub fn from_form(form: &ClosureForm, error: Option<&ValidationError>) -> Self {
        Self {
            frn: form.frn.clone(),
            agreement_number: form.agreement_number.clone(),
            day: form.day.clone(),
            month: form.month.clone(),
            year: form.year.clone(),
            error_message: error.and_then(|e| e.first_message()).map(str::to_string),
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClosureListView {
    pub total: usize,
    pub closures: Vec<ClosureRecord>,
}

impl From<Vec<ClosureRecord>> for ClosureListView {
    fn from(closures: Vec<ClosureRecord>) -> Self {
        Self {
            total: closures.len(),
            closures,
        }
    }
}
