use crate::cli::ServeArgs;
use crate::infra::{load_registry, AppState};
use crate::routes::with_blood_bank_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bloodlink::config::AppConfig;
use bloodlink::error::AppError;
use bloodlink::telemetry;
use bloodlink::workflows::inventory::HospitalInventory;
use bloodlink::workflows::BloodBankService;
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

    let registry = load_registry(None, &config.registry)?;
    let service = Arc::new(BloodBankService::new(
        registry,
        HospitalInventory::seed(),
        config.inventory.thresholds,
    ));

    let app = with_blood_bank_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "blood bank service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
