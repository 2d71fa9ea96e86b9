use super::{reader, UploadError};
use crate::validation::RecordValidator;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const CLOSURE_FIELD_COUNT: usize = 3;

/// One line of a closure file: `frn,agreementNumber,closureDate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureRecord {
    pub frn: String,
    pub agreement_number: String,
    pub closure_date: String,
}

/// Parses and validates an uploaded closure file.
///
/// Every line is shape-checked before any record is validated, so a line with
/// the wrong field count fails the file even when an earlier record is
/// invalid. After that the first record the validator rejects fails the whole
/// batch; no partial results are returned.
pub fn process_closure_data<V>(
    content: &str,
    validator: &V,
) -> Result<Vec<ClosureRecord>, UploadError>
where
    V: RecordValidator<ClosureRecord> + ?Sized,
{
    let mut candidates = Vec::new();

    for (index, row) in reader::rows(content).enumerate() {
        let row = row.map_err(|_| UploadError::Format)?;
        if row.len() != CLOSURE_FIELD_COUNT {
            debug!(
                line = index + 1,
                fields = row.len(),
                "closure line has wrong shape"
            );
            return Err(UploadError::Format);
        }

        candidates.push(ClosureRecord {
            frn: row[0].to_string(),
            agreement_number: row[1].to_string(),
            closure_date: row[2].to_string(),
        });
    }

    for (index, record) in candidates.iter().enumerate() {
        if let Err(error) = validator.validate(record) {
            debug!(
                line = index + 1,
                violations = error.details.len(),
                "closure line failed validation"
            );
            return Err(UploadError::Validation(error));
        }
    }

    Ok(candidates)
}
