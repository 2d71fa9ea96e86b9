//! HTTP endpoints for the admin pages, gated by the caller's forwarded roles.

mod closures;
mod holds;
mod manual_payments;
mod reports;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::Router;

use crate::auth::{AdminArea, UserContext};
use crate::error::AppError;
use crate::repository::{ClosureRepository, HoldRepository, ManualPaymentRepository};
use crate::service::AdminService;

pub(crate) type SharedService<C, H, M> = Arc<AdminService<C, H, M>>;

/// Router builder exposing the closure, hold, manual payment and report endpoints.
pub fn admin_router<C, H, M>(service: SharedService<C, H, M>) -> Router
where
    C: ClosureRepository + 'static,
    H: HoldRepository + 'static,
    M: ManualPaymentRepository + 'static,
{
    let body_limit = service.max_upload_bytes();

    Router::new()
        .route("/api/v1/navigation", get(reports::navigation_handler))
        .route("/api/v1/reports", get(reports::report_list_handler))
        .route("/api/v1/closures", get(closures::list_handler::<C, H, M>))
        .route(
            "/api/v1/closures/add",
            get(closures::add_form_handler).post(closures::add_handler::<C, H, M>),
        )
        .route(
            "/api/v1/closures/bulk",
            get(closures::bulk_form_handler).post(closures::bulk_upload_handler::<C, H, M>),
        )
        .route(
            "/api/v1/closures/:agreement_number",
            delete(closures::remove_handler::<C, H, M>),
        )
        .route("/api/v1/holds", get(holds::list_handler::<C, H, M>))
        .route(
            "/api/v1/holds/add",
            get(holds::add_form_handler).post(holds::add_handler::<C, H, M>),
        )
        .route(
            "/api/v1/holds/bulk",
            get(holds::bulk_form_handler).post(holds::bulk_upload_handler::<C, H, M>),
        )
        .route(
            "/api/v1/manual-payments",
            get(manual_payments::view_handler::<C, H, M>)
                .post(manual_payments::upload_handler::<C, H, M>),
        )
        // Same limit the service enforces on manual payment files.
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(service)
}

/// Resolves the caller and checks they hold the role for `area`.
pub(crate) fn authorize(headers: &HeaderMap, area: AdminArea) -> Result<UserContext, Response> {
    let user = UserContext::from_headers(headers);
    match user.require(area) {
        Ok(()) => Ok(user),
        Err(error) => Err(AppError::from(error).into_response()),
    }
}

pub(crate) fn error_response(error: impl Into<AppError>) -> Response {
    error.into().into_response()
}
