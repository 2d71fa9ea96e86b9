use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::hold_category;
use crate::config::UploadConfig;
use crate::repository::{
    ClosureRepository, HoldRepository, ManualPaymentRepository, ManualPaymentSummary,
    ManualPaymentUpload, RepositoryError,
};
use crate::uploads::{
    process_closure_data, process_hold_data, ClosureRecord, HoldRecord, UploadError,
};
use crate::validation::{
    ClosureSchema, FrnSchema, RecordValidator, ValidationDetail, ValidationError,
};
use crate::views::{check_manual_payment_file, ClosureForm, HoldForm, ManualPaymentRejection};

/// Service composing the upload processors, validators and downstream stores.
pub struct AdminService<C, H, M> {
    closures: Arc<C>,
    holds: Arc<H>,
    manual_payments: Arc<M>,
    closure_validator: Arc<dyn RecordValidator<ClosureRecord>>,
    frn_validator: Arc<dyn RecordValidator<str>>,
    max_upload_bytes: usize,
}

impl<C, H, M> AdminService<C, H, M>
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    pub fn new(
        closures: Arc<C>,
        holds: Arc<H>,
        manual_payments: Arc<M>,
        upload: &UploadConfig,
    ) -> Self {
        Self {
            closures,
            holds,
            manual_payments,
            closure_validator: Arc::new(ClosureSchema),
            frn_validator: Arc::new(FrnSchema),
            max_upload_bytes: upload.max_bytes,
        }
    }

    /// Replace the default schemas, e.g. with stricter or test validators.
    pub fn with_validators(
        mut self,
        closure_validator: Arc<dyn RecordValidator<ClosureRecord>>,
        frn_validator: Arc<dyn RecordValidator<str>>,
    ) -> Self {
        self.closure_validator = closure_validator;
        self.frn_validator = frn_validator;
        self
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn closures(&self) -> Result<Vec<ClosureRecord>, AdminServiceError> {
        Ok(self.closures.list()?)
    }

    /// Validate and store a closure entered through the form.
    pub fn add_closure(&self, form: &ClosureForm) -> Result<ClosureRecord, AdminServiceError> {
        let record = form.to_record();
        self.closure_validator.validate(&record)?;
        self.closures.add(record.clone())?;
        info!(agreement_number = %record.agreement_number, "closure added");
        Ok(record)
    }

    /// Process a bulk closure file; nothing is stored unless every line is valid.
    pub fn upload_closures(
        &self,
        content: &str,
    ) -> Result<Vec<ClosureRecord>, AdminServiceError> {
        let records = match process_closure_data(content, self.closure_validator.as_ref()) {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, "closure upload rejected");
                return Err(error.into());
            }
        };

        let stored = self.closures.save_batch(records.clone())?;
        info!(stored, "closure upload accepted");
        Ok(records)
    }

    pub fn remove_closure(&self, agreement_number: &str) -> Result<(), AdminServiceError> {
        self.closures.remove(agreement_number)?;
        info!(%agreement_number, "closure removed");
        Ok(())
    }

    pub fn holds(&self) -> Result<Vec<HoldRecord>, AdminServiceError> {
        Ok(self.holds.list()?)
    }

    /// Validate and store a hold entered through the form.
    pub fn add_hold(&self, form: &HoldForm) -> Result<HoldRecord, AdminServiceError> {
        let frn = form.frn.trim();
        let mut details = match self.frn_validator.validate(frn) {
            Ok(()) => Vec::new(),
            Err(error) => error.details,
        };

        match form.hold_category_id {
            Some(id) if hold_category(id).is_some() => {}
            Some(_) => details.push(ValidationDetail::field(
                "holdCategoryId",
                "valid",
                "Select a valid hold category",
            )),
            None => details.push(ValidationDetail::field(
                "holdCategoryId",
                "required",
                "Select a hold category",
            )),
        }
        ValidationError::from_details(details)?;

        let hold = HoldRecord {
            frn: frn.to_string(),
            hold_category_id: form.hold_category_id.unwrap_or_default(),
        };
        self.holds.add(hold.clone())?;
        info!(frn = %hold.frn, hold_category_id = hold.hold_category_id, "hold added");
        Ok(hold)
    }

    /// Process a bulk hold file, adding or removing holds in one category.
    pub fn upload_holds(
        &self,
        content: &str,
        hold_category_id: u32,
        remove: bool,
    ) -> Result<Vec<HoldRecord>, AdminServiceError> {
        if hold_category(hold_category_id).is_none() {
            return Err(AdminServiceError::UnknownHoldCategory(hold_category_id));
        }

        let validator = self.frn_validator.as_ref();
        let holds = match process_hold_data(content, hold_category_id, validator) {
            Ok(holds) => holds,
            Err(error) => {
                warn!(%error, hold_category_id, "bulk hold upload rejected");
                return Err(error.into());
            }
        };

        let affected = if remove {
            self.holds.remove_bulk(holds.clone())?
        } else {
            self.holds.add_bulk(holds.clone())?
        };
        info!(affected, hold_category_id, remove, "bulk hold upload accepted");
        Ok(holds)
    }

    pub fn manual_payment_uploads(&self) -> Result<Vec<ManualPaymentSummary>, AdminServiceError> {
        Ok(self.manual_payments.list()?)
    }

    pub fn upload_manual_payment(
        &self,
        upload: ManualPaymentUpload,
    ) -> Result<ManualPaymentSummary, AdminServiceError> {
        let size_bytes = upload.content.len();
        if let Err(rejection) =
            check_manual_payment_file(&upload.file_name, size_bytes, self.max_upload_bytes)
        {
            warn!(file_name = %upload.file_name, %rejection, "manual payment upload rejected");
            return Err(rejection.into());
        }

        let summary = self.manual_payments.store(upload)?;
        info!(
            file_name = %summary.file_name,
            size_bytes = summary.size_bytes,
            "manual payment file stored"
        );
        Ok(summary)
    }
}

/// Error raised by the admin service.
#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("unknown hold category {0}")]
    UnknownHoldCategory(u32),
    #[error(transparent)]
    ManualPayment(#[from] ManualPaymentRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
