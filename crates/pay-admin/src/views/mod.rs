//! View-models backing the admin pages.

mod closures;
mod holds;
mod manual_payments;
mod navigation;
mod reports;
mod uploads;

pub use closures::{ClosureForm, ClosureFormView, ClosureListView};
pub use holds::{HoldEntryView, HoldForm, HoldFormView, SelectItem};
pub use manual_payments::{
    check_manual_payment_file, ManualPaymentRejection, ManualPaymentView, ACCEPTED_EXTENSION,
};
pub use navigation::{NavLink, NavigationView};
pub use reports::{ReportLink, ReportListView};
pub use uploads::BulkUploadView;
