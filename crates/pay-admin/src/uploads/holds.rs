use super::{reader, UploadError};
use crate::validation::RecordValidator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A payment hold placed on an FRN under one hold category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldRecord {
    pub frn: String,
    pub hold_category_id: u32,
}

/// Parses a bulk hold file: FRNs separated by commas and/or line breaks.
///
/// Blank entries are skipped. A file with no FRNs is a format error, and the
/// first FRN the validator rejects fails the whole batch.
pub fn process_hold_data<V>(
    content: &str,
    hold_category_id: u32,
    validator: &V,
) -> Result<Vec<HoldRecord>, UploadError>
where
    V: RecordValidator<str> + ?Sized,
{
    let mut upload_data = Vec::new();

    for row in reader::rows(content) {
        let row = row.map_err(|_| UploadError::Format)?;
        for frn in row.iter().filter(|field| !field.is_empty()) {
            if let Err(error) = validator.validate(frn) {
                debug!(position = upload_data.len() + 1, "bulk hold FRN failed validation");
                return Err(UploadError::Validation(error));
            }

            upload_data.push(HoldRecord {
                frn: frn.to_string(),
                hold_category_id,
            });
        }
    }

    if upload_data.is_empty() {
        return Err(UploadError::Format);
    }

    Ok(upload_data)
}
