use crate::auth::AccessError;
use crate::config::ConfigError;
use crate::repository::RepositoryError;
use crate::service::AdminServiceError;
use crate::telemetry::TelemetryError;
use crate::uploads::UploadError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Server(axum::Error),
    Upload(UploadError),
    Access(AccessError),
    Service(AdminServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Access(_) => StatusCode::FORBIDDEN,
            AppError::Service(err) => match err {
                AdminServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                AdminServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
                AdminServiceError::Repository(RepositoryError::Unavailable(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                AdminServiceError::Upload(_)
                | AdminServiceError::Invalid(_)
                | AdminServiceError::UnknownHoldCategory(_)
                | AdminServiceError::ManualPayment(_) => StatusCode::BAD_REQUEST,
            },
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Upload(err) => write!(f, "upload rejected: {}", err),
            AppError::Access(err) => write!(f, "forbidden: {}", err),
            AppError::Service(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Serialization(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Upload(err) => Some(err),
            AppError::Access(err) => Some(err),
            AppError::Service(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<UploadError> for AppError {
    fn from(value: UploadError) -> Self {
        Self::Upload(value)
    }
}

impl From<AccessError> for AppError {
    fn from(value: AccessError) -> Self {
        Self::Access(value)
    }
}

impl From<AdminServiceError> for AppError {
    fn from(value: AdminServiceError) -> Self {
        Self::Service(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminArea;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(AppError::Upload(UploadError::Format).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Access(AccessError::Forbidden {
                area: AdminArea::Holds
            })
            .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Service(AdminServiceError::Repository(RepositoryError::NotFound)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Config(ConfigError::InvalidPort).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn serialization_failures_keep_their_own_variant() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let error = AppError::from(source);
        assert!(matches!(error, AppError::Serialization(_)));
        assert!(error.to_string().starts_with("serialization error:"));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
