use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::uploads::{ClosureRecord, HoldRecord};

/// Manual payment file accepted for downstream processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualPaymentUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub uploaded_by: Option<String>,
}

/// What the service reports back about stored manual payment files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPaymentSummary {
    pub file_name: String,
    pub size_bytes: usize,
    pub uploaded_by: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Downstream store for agreement closures.
pub trait ClosureRepository: Send + Sync {
    /// Stores a single closure; an existing closure for the agreement is a conflict.
    fn add(&self, record: ClosureRecord) -> Result<(), RepositoryError>;
    /// Stores a validated batch, replacing closures for the same agreements.
    fn save_batch(&self, records: Vec<ClosureRecord>) -> Result<usize, RepositoryError>;
    fn list(&self) -> Result<Vec<ClosureRecord>, RepositoryError>;
    fn remove(&self, agreement_number: &str) -> Result<(), RepositoryError>;
}

/// Downstream store for payment holds.
pub trait HoldRepository: Send + Sync {
    fn add(&self, hold: HoldRecord) -> Result<(), RepositoryError>;
    fn add_bulk(&self, holds: Vec<HoldRecord>) -> Result<usize, RepositoryError>;
    fn remove_bulk(&self, holds: Vec<HoldRecord>) -> Result<usize, RepositoryError>;
    fn list(&self) -> Result<Vec<HoldRecord>, RepositoryError>;
}

/// Downstream store for manual payment files.
pub trait ManualPaymentRepository: Send + Sync {
    fn store(&self, upload: ManualPaymentUpload) -> Result<ManualPaymentSummary, RepositoryError>;
    fn list(&self) -> Result<Vec<ManualPaymentSummary>, RepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
