use super::{RecordValidator, ValidationDetail, ValidationError};
use crate::uploads::ClosureRecord;
use chrono::{DateTime, NaiveDate};

pub const FRN_MAX_DIGITS: usize = 10;
const AGREEMENT_NUMBER_MAX_LEN: usize = 50;

/// Default schema for closure records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosureSchema;

/// Schema for a single FRN value, as found in bulk hold files and hold forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrnSchema;

impl RecordValidator<ClosureRecord> for ClosureSchema {
    fn validate(&self, record: &ClosureRecord) -> Result<(), ValidationError> {
        let mut details = Vec::new();
        check_frn(&record.frn, &mut details);
        check_agreement_number(&record.agreement_number, &mut details);
        check_closure_date(&record.closure_date, &mut details);
        ValidationError::from_details(details)
    }
}

impl RecordValidator<str> for FrnSchema {
    fn validate(&self, frn: &str) -> Result<(), ValidationError> {
        let mut details = Vec::new();
        check_frn(frn, &mut details);
        ValidationError::from_details(details)
    }
}

fn check_frn(value: &str, details: &mut Vec<ValidationDetail>) {
    let frn = value.trim();
    if frn.is_empty() {
        details.push(ValidationDetail::field(
            "frn",
            "required",
            "The FRN is required",
        ));
        return;
    }

    if !frn.chars().all(|c| c.is_ascii_digit()) {
        details.push(ValidationDetail::field(
            "frn",
            "base",
            "The FRN must be a number",
        ));
        return;
    }

    if frn.len() > FRN_MAX_DIGITS {
        details.push(ValidationDetail::field(
            "frn",
            "max",
            format!("The FRN must be no more than {FRN_MAX_DIGITS} digits"),
        ));
    }
}

fn check_agreement_number(value: &str, details: &mut Vec<ValidationDetail>) {
    let agreement_number = value.trim();
    if agreement_number.is_empty() {
        details.push(ValidationDetail::field(
            "agreementNumber",
            "required",
            "The agreement number is required",
        ));
    } else if agreement_number.chars().count() > AGREEMENT_NUMBER_MAX_LEN {
        details.push(ValidationDetail::field(
            "agreementNumber",
            "max",
            format!("The agreement number must be no more than {AGREEMENT_NUMBER_MAX_LEN} characters"),
        ));
    }
}

fn check_closure_date(value: &str, details: &mut Vec<ValidationDetail>) {
    if value.trim().is_empty() {
        details.push(ValidationDetail::field(
            "closureDate",
            "required",
            "The closure date is required",
        ));
    } else if parse_closure_date(value).is_none() {
        details.push(ValidationDetail::field(
            "closureDate",
            "base",
            "The closure date must be a valid date",
        ));
    }
}

/// Parses the date formats accepted in closure files and forms.
pub fn parse_closure_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(frn: &str, agreement_number: &str, closure_date: &str) -> ClosureRecord {
        ClosureRecord {
            frn: frn.to_string(),
            agreement_number: agreement_number.to_string(),
            closure_date: closure_date.to_string(),
        }
    }

    fn paths(error: &ValidationError) -> Vec<&str> {
        error
            .details
            .iter()
            .filter_map(|detail| detail.path.as_deref())
            .collect()
    }

    #[test]
    fn accepts_well_formed_record() {
        assert!(ClosureSchema
            .validate(&record("1234567890", "AG1", "2020-01-01"))
            .is_ok());
    }

    #[test]
    fn reports_every_violation_for_a_record() {
        let error = ClosureSchema
            .validate(&record("", "", "not-a-date"))
            .expect_err("invalid record");

        assert_eq!(paths(&error), vec!["frn", "agreementNumber", "closureDate"]);
        assert_eq!(error.details[2].kind.as_deref(), Some("closureDate.base"));
    }

    #[test]
    fn rejects_non_numeric_and_oversized_frns() {
        let error = FrnSchema.validate("12AB").expect_err("letters rejected");
        assert_eq!(error.details[0].kind.as_deref(), Some("frn.base"));

        let error = FrnSchema.validate("12345678901").expect_err("too long");
        assert_eq!(error.details[0].kind.as_deref(), Some("frn.max"));
    }

    #[test]
    fn rejects_long_agreement_numbers() {
        let long = "A".repeat(AGREEMENT_NUMBER_MAX_LEN + 1);
        let error = ClosureSchema
            .validate(&record("1234", &long, "2020-01-01"))
            .expect_err("too long");
        assert_eq!(paths(&error), vec!["agreementNumber"]);
    }

    #[test]
    fn parse_closure_date_supports_iso_uk_and_rfc3339() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date");
        assert_eq!(parse_closure_date("2024-03-31"), Some(expected));
        assert_eq!(parse_closure_date("31/03/2024"), Some(expected));
        assert_eq!(parse_closure_date("2024-03-31T09:30:00Z"), Some(expected));
        assert_eq!(parse_closure_date("2024-02-30"), None);
        assert_eq!(parse_closure_date("  "), None);
    }
}
