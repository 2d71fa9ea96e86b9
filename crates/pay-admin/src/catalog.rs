//! Fixed reference data: report types and hold categories.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    PaymentRequests,
    SuppressedPayments,
    ApListing,
    ArListing,
    RequestEditor,
    ClaimLevel,
}

impl ReportType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PaymentRequests,
            Self::SuppressedPayments,
            Self::ApListing,
            Self::ArListing,
            Self::RequestEditor,
            Self::ClaimLevel,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentRequests => "Payment request statuses",
            Self::SuppressedPayments => "Suppressed payment requests",
            Self::ApListing => "AP Ledger Listing",
            Self::ArListing => "AR Ledger Listing",
            Self::RequestEditor => "Request Editor report",
            Self::ClaimLevel => "Claim level report",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PaymentRequests => "ffc-payment-requests-report.csv",
            Self::SuppressedPayments => "ffc-suppressed-payments-report.csv",
            Self::ApListing => "ffc-ap-listing-report.csv",
            Self::ArListing => "ffc-ar-listing-report.csv",
            Self::RequestEditor => "ffc-request-editor-report.csv",
            Self::ClaimLevel => "ffc-claim-level-report.csv",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::PaymentRequests => "payment-requests",
            Self::SuppressedPayments => "suppressed-payments",
            Self::ApListing => "ap-listing",
            Self::ArListing => "ar-listing",
            Self::RequestEditor => "request-editor",
            Self::ClaimLevel => "claim-level",
        }
    }
}

/// Reason a payment hold is placed, scoped to one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldCategory {
    pub id: u32,
    pub name: &'static str,
    pub scheme_name: &'static str,
}

const HOLD_CATEGORIES: &[HoldCategory] = &[
    HoldCategory { id: 1, name: "Bank account anomaly", scheme_name: "SFI" },
    HoldCategory { id: 2, name: "Dax rejection", scheme_name: "SFI" },
    HoldCategory { id: 3, name: "Awaiting debt enrichment", scheme_name: "SFI" },
    HoldCategory { id: 4, name: "Manual ledger hold", scheme_name: "Lump Sums" },
    HoldCategory { id: 5, name: "Top up", scheme_name: "Vet Visits" },
    HoldCategory { id: 6, name: "Recovery", scheme_name: "CS" },
    HoldCategory { id: 7, name: "Closure", scheme_name: "Delinked" },
];

static HOLD_CATEGORY_INDEX: OnceLock<HashMap<u32, HoldCategory>> = OnceLock::new();

pub fn hold_categories() -> &'static [HoldCategory] {
    HOLD_CATEGORIES
}

pub fn hold_category(id: u32) -> Option<HoldCategory> {
    HOLD_CATEGORY_INDEX
        .get_or_init(|| {
            HOLD_CATEGORIES
                .iter()
                .map(|category| (category.id, *category))
                .collect()
        })
        .get(&id)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn report_slugs_and_file_names_are_unique() {
        let slugs: HashSet<_> = ReportType::ordered().iter().map(|r| r.slug()).collect();
        let files: HashSet<_> = ReportType::ordered().iter().map(|r| r.file_name()).collect();
        assert_eq!(slugs.len(), ReportType::ordered().len());
        assert_eq!(files.len(), ReportType::ordered().len());
    }

    #[test]
    fn hold_category_lookup_matches_list() {
        for category in hold_categories() {
            assert_eq!(hold_category(category.id), Some(*category));
        }
        assert_eq!(hold_category(999), None);
    }
}
