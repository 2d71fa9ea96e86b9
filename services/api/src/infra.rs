use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use pay_admin::repository::{
    ClosureRepository, HoldRepository, ManualPaymentRepository, ManualPaymentSummary,
    ManualPaymentUpload, RepositoryError,
};
use pay_admin::uploads::{ClosureRecord, HoldRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".to_string()))
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Closures keyed by agreement number.
#[derive(Default, Clone)]
pub(crate) struct InMemoryClosureRepository {
    records: Arc<Mutex<BTreeMap<String, ClosureRecord>>>,
}

impl ClosureRepository for InMemoryClosureRepository {
    fn add(&self, record: ClosureRecord) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.contains_key(&record.agreement_number) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.agreement_number.clone(), record);
        Ok(())
    }

    fn save_batch(&self, records: Vec<ClosureRecord>) -> Result<usize, RepositoryError> {
        let mut guard = lock(&self.records)?;
        let count = records.len();
        for record in records {
            guard.insert(record.agreement_number.clone(), record);
        }
        Ok(count)
    }

    fn list(&self) -> Result<Vec<ClosureRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.values().cloned().collect())
    }

    fn remove(&self, agreement_number: &str) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        match guard.remove(agreement_number) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryHoldRepository {
    holds: Arc<Mutex<BTreeSet<(String, u32)>>>,
}

impl HoldRepository for InMemoryHoldRepository {
    fn add(&self, hold: HoldRecord) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.holds)?;
        if guard.insert((hold.frn, hold.hold_category_id)) {
            Ok(())
        } else {
            Err(RepositoryError::Conflict)
        }
    }

    fn add_bulk(&self, holds: Vec<HoldRecord>) -> Result<usize, RepositoryError> {
        let mut guard = lock(&self.holds)?;
        Ok(holds
            .into_iter()
            .filter(|hold| guard.insert((hold.frn.clone(), hold.hold_category_id)))
            .count())
    }

    fn remove_bulk(&self, holds: Vec<HoldRecord>) -> Result<usize, RepositoryError> {
        let mut guard = lock(&self.holds)?;
        Ok(holds
            .into_iter()
            .filter(|hold| guard.remove(&(hold.frn.clone(), hold.hold_category_id)))
            .count())
    }

    fn list(&self) -> Result<Vec<HoldRecord>, RepositoryError> {
        let guard = lock(&self.holds)?;
        Ok(guard
            .iter()
            .map(|(frn, hold_category_id)| HoldRecord {
                frn: frn.clone(),
                hold_category_id: *hold_category_id,
            })
            .collect())
    }
}

/// Keeps uploaded manual payment files in memory until a downstream store exists.
#[derive(Default, Clone)]
pub(crate) struct InMemoryManualPaymentRepository {
    files: Arc<Mutex<Vec<(ManualPaymentUpload, ManualPaymentSummary)>>>,
}

impl ManualPaymentRepository for InMemoryManualPaymentRepository {
    fn store(&self, upload: ManualPaymentUpload) -> Result<ManualPaymentSummary, RepositoryError> {
        let summary = ManualPaymentSummary {
            file_name: upload.file_name.clone(),
            size_bytes: upload.content.len(),
            uploaded_by: upload.uploaded_by.clone(),
            uploaded_at: Utc::now(),
        };
        let mut guard = lock(&self.files)?;
        guard.push((upload, summary.clone()));
        Ok(summary)
    }

    fn list(&self) -> Result<Vec<ManualPaymentSummary>, RepositoryError> {
        let guard = lock(&self.files)?;
        Ok(guard.iter().map(|(_, summary)| summary.clone()).collect())
    }
}
