use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::authorize;
use crate::auth::{AdminArea, UserContext};
use crate::views::{NavigationView, ReportListView};

pub(crate) async fn navigation_handler(headers: HeaderMap) -> Json<NavigationView> {
    let user = UserContext::from_headers(&headers);
    Json(NavigationView::for_user(&user))
}

pub(crate) async fn report_list_handler(headers: HeaderMap) -> Response {
    if let Err(denied) = authorize(&headers, AdminArea::Reports) {
        return denied;
    }
    Json(ReportListView::all()).into_response()
}
