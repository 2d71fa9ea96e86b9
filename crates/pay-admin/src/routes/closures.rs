use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::{authorize, error_response, SharedService};
use crate::auth::AdminArea;
use crate::repository::{
    ClosureRepository, HoldRepository, ManualPaymentRepository, RepositoryError,
};
use crate::service::AdminServiceError;
use crate::uploads::{ClosureRecord, UploadOutcome};
use crate::views::{BulkUploadView, ClosureForm, ClosureFormView, ClosureListView};

pub(crate) async fn list_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Closures) {
        return denied;
    }

    match service.closures() {
        Ok(closures) => Json(ClosureListView::from(closures)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_form_handler(headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&headers, AdminArea::Closures) {
        return denied;
    }
    Json(ClosureFormView::default()).into_response()
}

pub(crate) async fn add_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
    Json(form): Json<ClosureForm>,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Closures) {
        return denied;
    }

    match service.add_closure(&form) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(AdminServiceError::Invalid(error)) => {
            let view = ClosureFormView::from_form(&form, Some(&error));
            (StatusCode::BAD_REQUEST, Json(json!({ "view": view }))).into_response()
        }
        Err(AdminServiceError::Repository(RepositoryError::Conflict)) => {
            let view = ClosureFormView::from_form(&form, None)
                .with_error("A closure already exists for this agreement");
            (StatusCode::CONFLICT, Json(json!({ "view": view }))).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn bulk_form_handler(headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&headers, AdminArea::Closures) {
        return denied;
    }
    Json(BulkUploadView::closures()).into_response()
}

pub(crate) async fn bulk_upload_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
    body: String,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Closures) {
        return denied;
    }

    match service.upload_closures(&body) {
        Ok(records) => {
            let outcome = UploadOutcome::<ClosureRecord>::UploadData(records);
            (StatusCode::CREATED, Json(outcome)).into_response()
        }
        Err(AdminServiceError::Upload(error)) => {
            let payload = json!({
                "errors": error.details(),
                "view": BulkUploadView::closures().with_upload_error(&error),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn remove_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
    Path(agreement_number): Path<String>,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Closures) {
        return denied;
    }

    match service.remove_closure(&agreement_number) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
