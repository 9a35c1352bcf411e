use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::donors::{DonorCriteria, DonorSearchResult};
use super::inventory::{AvailabilityEntry, InventorySnapshot, StockStatus, UrgencyStatus};
use super::service::BloodBankService;

/// Router builder exposing donor search and inventory status endpoints.
pub fn blood_bank_router(service: Arc<BloodBankService>) -> Router {
    Router::new()
        .route("/api/v1/donors", get(search_handler))
        .route("/api/v1/inventory", get(inventory_handler))
        .route("/api/v1/inventory/availability", get(availability_handler))
        .route("/api/v1/inventory/classify/:units", get(classify_stock_handler))
        .route("/api/v1/requests/urgency/:urgency", get(classify_urgency_handler))
        .with_state(service)
}

pub(crate) async fn search_handler(
    State(service): State<Arc<BloodBankService>>,
    Query(criteria): Query<DonorCriteria>,
) -> Json<DonorSearchResult> {
    Json(service.search_donors(&criteria))
}

pub(crate) async fn inventory_handler(
    State(service): State<Arc<BloodBankService>>,
) -> Json<InventorySnapshot> {
    Json(service.inventory_snapshot())
}

pub(crate) async fn availability_handler(
    State(service): State<Arc<BloodBankService>>,
) -> Json<Vec<AvailabilityEntry>> {
    Json(service.availability())
}

pub(crate) async fn classify_stock_handler(
    State(service): State<Arc<BloodBankService>>,
    Path(units): Path<u32>,
) -> Json<StockStatus> {
    Json(service.classify_stock(units))
}

pub(crate) async fn classify_urgency_handler(
    State(service): State<Arc<BloodBankService>>,
    Path(urgency): Path<String>,
) -> Json<UrgencyStatus> {
    Json(service.classify_urgency(&urgency))
}
