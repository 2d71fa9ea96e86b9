use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryClosureRepository, InMemoryHoldRepository, InMemoryManualPaymentRepository,
};
use crate::routes::with_admin_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pay_admin::config::AppConfig;
use pay_admin::error::AppError;
use pay_admin::service::AdminService;
use pay_admin::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let admin_service = Arc::new(AdminService::new(
        Arc::new(InMemoryClosureRepository::default()),
        Arc::new(InMemoryHoldRepository::default()),
        Arc::new(InMemoryManualPaymentRepository::default()),
        &config.upload,
    ));

    let app = with_admin_routes(admin_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_upload_bytes = config.upload.max_bytes,
        "payments admin service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
