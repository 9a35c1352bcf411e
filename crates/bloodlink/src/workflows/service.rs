use super::donors::{DonorCriteria, DonorRegistry, DonorSearchResult};
use super::inventory::{
    classify_stock, classify_urgency, AvailabilityEntry, HospitalInventory, InventorySnapshot,
    StockStatus, StockThresholds, UrgencyStatus,
};
use tracing::debug;

/// Service composing the donor registry, the hospital inventory and the
/// configured stock thresholds. Immutable after construction.
#[derive(Debug, Clone)]
pub struct BloodBankService {
    registry: DonorRegistry,
    inventory: HospitalInventory,
    thresholds: StockThresholds,
}

impl BloodBankService {
    pub fn new(
        registry: DonorRegistry,
        inventory: HospitalInventory,
        thresholds: StockThresholds,
    ) -> Self {
        Self {
            registry,
            inventory,
            thresholds,
        }
    }

    pub fn seeded(thresholds: StockThresholds) -> Self {
        Self::new(DonorRegistry::seed(), HospitalInventory::seed(), thresholds)
    }

    pub fn registry(&self) -> &DonorRegistry {
        &self.registry
    }

    pub fn thresholds(&self) -> &StockThresholds {
        &self.thresholds
    }

    pub fn search_donors(&self, criteria: &DonorCriteria) -> DonorSearchResult {
        self.registry.search(criteria)
    }

    pub fn inventory_snapshot(&self) -> InventorySnapshot {
        let snapshot = self.inventory.snapshot(&self.thresholds);
        debug!(
            hospital = %snapshot.hospital,
            shortages = snapshot.shortages.len(),
            requests = snapshot.requests.len(),
            "inventory snapshot built"
        );
        snapshot
    }

    pub fn availability(&self) -> Vec<AvailabilityEntry> {
        self.inventory.availability(&self.thresholds)
    }

    pub fn classify_stock(&self, units: u32) -> StockStatus {
        let status = classify_stock(units, &self.thresholds);
        debug!(units, level = status.label, "stock classified");
        status
    }

    pub fn classify_urgency(&self, raw: &str) -> UrgencyStatus {
        let status = classify_urgency(raw);
        debug!(raw, urgency = status.label, "urgency classified");
        status
    }
}
