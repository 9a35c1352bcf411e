use super::classifier::{classify_stock, urgency_status};
use super::domain::{BloodRequest, RequestId, StockLevel, StockRecord, StockThresholds, Urgency};
use crate::workflows::donors::BloodGroup;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StockStatusView {
    pub blood_group: BloodGroup,
    pub units: u32,
    pub level: StockLevel,
    pub level_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestView {
    pub id: RequestId,
    pub patient: String,
    pub blood_group: BloodGroup,
    pub units: u32,
    pub units_label: String,
    pub urgency: Urgency,
    pub urgency_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelCountEntry {
    pub level: StockLevel,
    pub level_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityEntry {
    pub blood_group: BloodGroup,
    pub level: StockLevel,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySnapshot {
    pub hospital: String,
    pub thresholds: StockThresholds,
    pub stock: Vec<StockStatusView>,
    pub requests: Vec<RequestView>,
    pub level_counts: Vec<LevelCountEntry>,
    pub shortages: Vec<BloodGroup>,
}

/// Stock and open requests for a single hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalInventory {
    pub hospital: String,
    pub stock: Vec<StockRecord>,
    pub requests: Vec<BloodRequest>,
}

impl HospitalInventory {
    pub fn seed() -> Self {
        let stock = [
            (BloodGroup::APositive, 25),
            (BloodGroup::ANegative, 8),
            (BloodGroup::BPositive, 18),
            (BloodGroup::BNegative, 5),
            (BloodGroup::OPositive, 30),
            (BloodGroup::ONegative, 3),
            (BloodGroup::AbPositive, 12),
            (BloodGroup::AbNegative, 6),
        ]
        .into_iter()
        .map(|(group, units)| StockRecord::new(group, units))
        .collect();

        let requests = [
            (1, "John Doe", BloodGroup::ONegative, 2, Urgency::Critical),
            (2, "Jane Smith", BloodGroup::BPositive, 1, Urgency::High),
            (3, "Mike Johnson", BloodGroup::APositive, 3, Urgency::Medium),
        ]
        .into_iter()
        .map(|(id, patient, blood_group, units, urgency)| BloodRequest {
            id: RequestId(id),
            patient: patient.to_string(),
            blood_group,
            units,
            urgency,
        })
        .collect();

        Self {
            hospital: "City General Hospital".to_string(),
            stock,
            requests,
        }
    }

    pub fn snapshot(&self, thresholds: &StockThresholds) -> InventorySnapshot {
        let stock: Vec<StockStatusView> = self
            .stock
            .iter()
            .map(|record| {
                let status = classify_stock(record.units, thresholds);
                StockStatusView {
                    blood_group: record.blood_group,
                    units: record.units,
                    level: status.level,
                    level_label: status.label,
                }
            })
            .collect();

        let requests = self
            .requests
            .iter()
            .map(|request| {
                let status = urgency_status(request.urgency);
                RequestView {
                    id: request.id,
                    patient: request.patient.clone(),
                    blood_group: request.blood_group,
                    units: request.units,
                    units_label: units_label(request.units),
                    urgency: status.urgency,
                    urgency_label: status.label,
                }
            })
            .collect();

        let level_counts = StockLevel::ordered()
            .into_iter()
            .map(|level| LevelCountEntry {
                level,
                level_label: level.label(),
                count: stock.iter().filter(|view| view.level == level).count(),
            })
            .collect();

        let shortages = stock
            .iter()
            .filter(|view| view.level.is_shortage())
            .map(|view| view.blood_group)
            .collect();

        InventorySnapshot {
            hospital: self.hospital.clone(),
            thresholds: *thresholds,
            stock,
            requests,
            level_counts,
            shortages,
        }
    }

    pub fn availability(&self, thresholds: &StockThresholds) -> Vec<AvailabilityEntry> {
        self.stock
            .iter()
            .map(|record| {
                let level = record.level(thresholds);
                AvailabilityEntry {
                    blood_group: record.blood_group,
                    level,
                    availability: level.availability_label(),
                }
            })
            .collect()
    }
}

fn units_label(units: u32) -> String {
    if units == 1 {
        "1 unit".to_string()
    } else {
        format!("{units} units")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_label_pluralizes() {
        assert_eq!(units_label(1), "1 unit");
        assert_eq!(units_label(3), "3 units");
    }

    #[test]
    fn empty_inventory_has_zero_counts() {
        let inventory = HospitalInventory {
            hospital: "Empty Clinic".to_string(),
            stock: Vec::new(),
            requests: Vec::new(),
        };
        let snapshot = inventory.snapshot(&StockThresholds::default());
        assert!(snapshot.stock.is_empty());
        assert!(snapshot.shortages.is_empty());
        assert_eq!(snapshot.level_counts.len(), 4);
        assert!(snapshot.level_counts.iter().all(|entry| entry.count == 0));
    }
}
