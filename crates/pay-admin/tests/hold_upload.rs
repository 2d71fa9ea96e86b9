use pay_admin::catalog::hold_categories;
use pay_admin::uploads::{process_hold_data, UploadError};
use pay_admin::validation::FrnSchema;

#[test]
fn mixed_separators_yield_one_hold_per_frn() {
    let content = "1234567890, 1234567891\r\n\r\n1234567892,\n1234567893";

    let holds = process_hold_data(content, 3, &FrnSchema).expect("valid hold file");

    let frns: Vec<_> = holds.iter().map(|hold| hold.frn.as_str()).collect();
    assert_eq!(
        frns,
        vec!["1234567890", "1234567891", "1234567892", "1234567893"]
    );
    assert!(holds.iter().all(|hold| hold.hold_category_id == 3));
}

#[test]
fn file_without_frns_is_a_format_error() {
    assert_eq!(
        process_hold_data("\n,,\n", 1, &FrnSchema),
        Err(UploadError::Format)
    );
}

#[test]
fn oversized_frn_fails_the_batch() {
    let error = process_hold_data("1234567890\n12345678901", 1, &FrnSchema)
        .expect_err("eleven digits rejected");

    assert_eq!(
        error.details().messages(),
        vec!["The FRN must be no more than 10 digits"]
    );
}

#[test]
fn every_category_is_uploadable() {
    for category in hold_categories() {
        let holds =
            process_hold_data("1234567890", category.id, &FrnSchema).expect("valid hold file");
        assert_eq!(holds[0].hold_category_id, category.id);
    }
}
