use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{authorize, error_response, SharedService};
use crate::auth::AdminArea;
use crate::repository::{
    ClosureRepository, HoldRepository, ManualPaymentRepository, ManualPaymentUpload,
};
use crate::service::AdminServiceError;
use crate::views::ManualPaymentView;

#[derive(Debug, Deserialize)]
pub(crate) struct ManualPaymentQuery {
    #[serde(default)]
    pub(crate) file_name: String,
}

pub(crate) async fn view_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    if let Err(denied) = authorize(&headers, AdminArea::ManualPayments) {
        return denied;
    }

    match service.manual_payment_uploads() {
        Ok(uploads) => {
            Json(ManualPaymentView::new(service.max_upload_bytes(), uploads)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn upload_handler<C, H, M>(
    State(service): State<SharedService<C, H, M>>,
    headers: HeaderMap,
    Query(query): Query<ManualPaymentQuery>,
    body: Bytes,
) -> Response
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    let user = match authorize(&headers, AdminArea::ManualPayments) {
        Ok(user) => user,
        Err(denied) => return denied,
    };

    let upload = ManualPaymentUpload {
        file_name: query.file_name,
        content: body.to_vec(),
        uploaded_by: user.name,
    };

    match service.upload_manual_payment(upload) {
        Ok(summary) => (StatusCode::CREATED, Json(summary)).into_response(),
        Err(AdminServiceError::ManualPayment(rejection)) => {
            let uploads = match service.manual_payment_uploads() {
                Ok(uploads) => uploads,
                Err(error) => return error_response(error),
            };
            let view = ManualPaymentView::new(service.max_upload_bytes(), uploads)
                .with_rejection(&rejection);
            (StatusCode::BAD_REQUEST, Json(json!({ "view": view }))).into_response()
        }
        Err(other) => error_response(other),
    }
}
