//! Payments administration: bulk closure and hold uploads, manual payment
//! files, report listings and the role checks guarding them.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod repository;
pub mod routes;
pub mod service;
pub mod telemetry;
pub mod uploads;
pub mod validation;
pub mod views;

pub use routes::admin_router;
pub use service::{AdminService, AdminServiceError};
pub use uploads::{process_closure_data, ClosureRecord, UploadError, UploadOutcome};
