use serde::Serialize;

use crate::catalog::ReportType;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLink {
    pub report_type: ReportType,
    pub label: &'static str,
    pub file_name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportListView {
    pub reports: Vec<ReportLink>,
}

impl ReportListView {
    pub fn all() -> Self {
        let reports = ReportType::ordered()
            .into_iter()
            .map(|report_type| ReportLink {
                report_type,
                label: report_type.label(),
                file_name: report_type.file_name(),
            })
            .collect();
        Self { reports }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_reports_in_catalog_order() {
        let view = ReportListView::all();
        assert_eq!(view.reports.len(), ReportType::ordered().len());
        assert_eq!(view.reports[0].label, "Payment request statuses");

        let value = serde_json::to_value(&view.reports[2]).expect("serializes");
        assert_eq!(value["reportType"], "ap-listing");
        assert_eq!(value["fileName"], "ffc-ap-listing-report.csv");
    }
}
