//! Blood stock tiers, request urgency and the hospital inventory board.

mod board;
mod classifier;
pub mod domain;

pub use board::{
    AvailabilityEntry, HospitalInventory, InventorySnapshot, LevelCountEntry, RequestView,
    StockStatusView,
};
pub use classifier::{classify_stock, classify_urgency, urgency_status, StockStatus, UrgencyStatus};
pub use domain::{
    BloodRequest, RequestId, StockLevel, StockRecord, StockThresholds, ThresholdError, Urgency,
};
