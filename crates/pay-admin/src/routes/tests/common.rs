use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::auth::{Role, ROLES_HEADER, USER_NAME_HEADER};
use crate::config::UploadConfig;
use crate::repository::{
    ClosureRepository, HoldRepository, ManualPaymentRepository, ManualPaymentSummary,
    ManualPaymentUpload, RepositoryError,
};
use crate::routes::admin_router;
use crate::service::AdminService;
use crate::uploads::{ClosureRecord, HoldRecord};

pub(super) type TestService = AdminService<MemoryClosures, MemoryHolds, MemoryManualPayments>;

pub(super) struct Stores {
    pub(super) closures: Arc<MemoryClosures>,
    pub(super) holds: Arc<MemoryHolds>,
    pub(super) manual_payments: Arc<MemoryManualPayments>,
}

pub(super) fn build_service(max_bytes: usize) -> (TestService, Stores) {
    let stores = Stores {
        closures: Arc::new(MemoryClosures::default()),
        holds: Arc::new(MemoryHolds::default()),
        manual_payments: Arc::new(MemoryManualPayments::default()),
    };
    let service = AdminService::new(
        stores.closures.clone(),
        stores.holds.clone(),
        stores.manual_payments.clone(),
        &UploadConfig { max_bytes },
    );
    (service, stores)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    admin_router(Arc::new(service))
}

pub(super) fn router() -> (axum::Router, Stores) {
    let (service, stores) = build_service(64 * 1024);
    (router_with_service(service), stores)
}

pub(super) fn request(method: &str, uri: &str, roles: &[Role], body: Body) -> Request<Body> {
    let role_names = roles
        .iter()
        .map(|role| role.name())
        .collect::<Vec<_>>()
        .join(",");

    Request::builder()
        .method(method)
        .uri(uri)
        .header(ROLES_HEADER, role_names)
        .header(USER_NAME_HEADER, "Test User")
        .body(body)
        .expect("request builds")
}

pub(super) fn json_request(method: &str, uri: &str, roles: &[Role], payload: Value) -> Request<Body> {
    let mut request = request(
        method,
        uri,
        roles,
        Body::from(serde_json::to_vec(&payload).expect("payload serializes")),
    );
    request.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    request
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn closure(frn: &str, agreement_number: &str) -> ClosureRecord {
    ClosureRecord {
        frn: frn.to_string(),
        agreement_number: agreement_number.to_string(),
        closure_date: "2025-06-30".to_string(),
    }
}

#[derive(Default)]
pub(super) struct MemoryClosures {
    records: Mutex<BTreeMap<String, ClosureRecord>>,
}

impl MemoryClosures {
    pub(super) fn count(&self) -> usize {
        self.records.lock().expect("closure mutex poisoned").len()
    }
}

impl ClosureRepository for MemoryClosures {
    fn add(&self, record: ClosureRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("closure mutex poisoned");
        if guard.contains_key(&record.agreement_number) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.agreement_number.clone(), record);
        Ok(())
    }

    fn save_batch(&self, records: Vec<ClosureRecord>) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("closure mutex poisoned");
        let count = records.len();
        for record in records {
            guard.insert(record.agreement_number.clone(), record);
        }
        Ok(count)
    }

    fn list(&self) -> Result<Vec<ClosureRecord>, RepositoryError> {
        let guard = self.records.lock().expect("closure mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn remove(&self, agreement_number: &str) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("closure mutex poisoned");
        guard
            .remove(agreement_number)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[derive(Default)]
pub(super) struct MemoryHolds {
    holds: Mutex<Vec<HoldRecord>>,
}

impl MemoryHolds {
    pub(super) fn snapshot(&self) -> Vec<HoldRecord> {
        self.holds.lock().expect("hold mutex poisoned").clone()
    }
}

impl HoldRepository for MemoryHolds {
    fn add(&self, hold: HoldRecord) -> Result<(), RepositoryError> {
        let mut guard = self.holds.lock().expect("hold mutex poisoned");
        if guard.contains(&hold) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(hold);
        Ok(())
    }

    fn add_bulk(&self, holds: Vec<HoldRecord>) -> Result<usize, RepositoryError> {
        let mut guard = self.holds.lock().expect("hold mutex poisoned");
        let before = guard.len();
        for hold in holds {
            if !guard.contains(&hold) {
                guard.push(hold);
            }
        }
        Ok(guard.len() - before)
    }

    fn remove_bulk(&self, holds: Vec<HoldRecord>) -> Result<usize, RepositoryError> {
        let mut guard = self.holds.lock().expect("hold mutex poisoned");
        let before = guard.len();
        guard.retain(|existing| !holds.contains(existing));
        Ok(before - guard.len())
    }

    fn list(&self) -> Result<Vec<HoldRecord>, RepositoryError> {
        Ok(self.snapshot())
    }
}

#[derive(Default)]
pub(super) struct MemoryManualPayments {
    uploads: Mutex<Vec<ManualPaymentSummary>>,
}

impl ManualPaymentRepository for MemoryManualPayments {
    fn store(&self, upload: ManualPaymentUpload) -> Result<ManualPaymentSummary, RepositoryError> {
        let summary = ManualPaymentSummary {
            file_name: upload.file_name,
            size_bytes: upload.content.len(),
            uploaded_by: upload.uploaded_by,
            uploaded_at: Utc::now(),
        };
        self.uploads
            .lock()
            .expect("upload mutex poisoned")
            .push(summary.clone());
        Ok(summary)
    }

    fn list(&self) -> Result<Vec<ManualPaymentSummary>, RepositoryError> {
        Ok(self.uploads.lock().expect("upload mutex poisoned").clone())
    }
}

pub(super) struct UnavailableManualPayments;

impl ManualPaymentRepository for UnavailableManualPayments {
    fn store(&self, _upload: ManualPaymentUpload) -> Result<ManualPaymentSummary, RepositoryError> {
        Err(RepositoryError::Unavailable("file store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ManualPaymentSummary>, RepositoryError> {
        Err(RepositoryError::Unavailable("file store offline".to_string()))
    }
}

pub(super) struct UnavailableClosures;

impl ClosureRepository for UnavailableClosures {
    fn add(&self, _record: ClosureRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("payments api offline".to_string()))
    }

    fn save_batch(&self, _records: Vec<ClosureRecord>) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("payments api offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ClosureRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("payments api offline".to_string()))
    }

    fn remove(&self, _agreement_number: &str) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("payments api offline".to_string()))
    }
}
