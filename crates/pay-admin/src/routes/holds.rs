use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{authorize, error_response, SharedService};
use crate::auth::AdminArea;
use crate::catalog::hold_categories;
use crate::repository::{ClosureRepository, HoldRepository, ManualPaymentRepository};
use crate::service::AdminServiceError;
use crate::uploads::{HoldRecord, UploadOutcome};
use crate::views::{BulkUploadView, HoldEntryView, HoldForm, HoldFormView};

#[derive(Debug, Deserialize)]
pub(crate) struct BulkHoldQuery {
    pub(crate) category: u32,
    #[serde(default)]
    pub(crate) remove: bool,
}

pub(crate) async fn list_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Holds) {
        return denied;
    }

    match service.holds() {
        Ok(holds) => {
            let entries: Vec<HoldEntryView> = holds.iter().map(HoldEntryView::from).collect();
            Json(json!({ "total": entries.len(), "holds": entries })).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_form_handler(headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&headers, AdminArea::Holds) {
        return denied;
    }
    Json(HoldFormView::default()).into_response()
}

pub(crate) async fn add_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
    Json(form): Json<HoldForm>,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Holds) {
        return denied;
    }

    match service.add_hold(&form) {
        Ok(hold) => (StatusCode::CREATED, Json(HoldEntryView::from(&hold))).into_response(),
        Err(AdminServiceError::Invalid(error)) => {
            let message = error.first_message().map(str::to_string);
            let view = HoldFormView::new(&form, message);
            (StatusCode::BAD_REQUEST, Json(json!({ "view": view }))).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn bulk_form_handler(headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&headers, AdminArea::Holds) {
        return denied;
    }
    Json(json!({
        "view": BulkUploadView::holds(),
        "categories": hold_categories(),
    }))
    .into_response()
}

pub(crate) async fn bulk_upload_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
    Query(query): Query<BulkHoldQuery>,
    body: String,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::Holds) {
        return denied;
    }

    match service.upload_holds(&body, query.category, query.remove) {
        Ok(holds) => {
            let status = if query.remove {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            (status, Json(UploadOutcome::<HoldRecord>::UploadData(holds))).into_response()
        }
        Err(AdminServiceError::Upload(error)) => {
            let payload = json!({
                "errors": error.details(),
                "view": BulkUploadView::holds().with_upload_error(&error),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}
