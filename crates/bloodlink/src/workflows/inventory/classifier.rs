use super::domain::{StockLevel, StockThresholds, Urgency};
use serde::Serialize;

/// Stock tier plus the badge label it renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockStatus {
    pub units: u32,
    pub level: StockLevel,
    pub label: &'static str,
    pub severity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgencyStatus {
    pub urgency: Urgency,
    pub label: &'static str,
    pub severity: u8,
}

pub fn classify_stock(units: u32, thresholds: &StockThresholds) -> StockStatus {
    let level = thresholds.level_for(units);
    StockStatus {
        units,
        level,
        label: level.label(),
        severity: level.severity(),
    }
}

/// Total over any input; unknown spellings fall back to `Low`.
pub fn classify_urgency(raw: &str) -> UrgencyStatus {
    urgency_status(Urgency::from_raw(raw))
}

pub fn urgency_status(urgency: Urgency) -> UrgencyStatus {
    UrgencyStatus {
        urgency,
        label: urgency.label(),
        severity: urgency.severity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_labels_follow_level() {
        let thresholds = StockThresholds::default();
        let labels: Vec<&str> = [0, 5, 12, 40]
            .into_iter()
            .map(|units| classify_stock(units, &thresholds).label)
            .collect();
        assert_eq!(labels, vec!["Critical", "Low Stock", "Medium", "Good Stock"]);
    }

    #[test]
    fn urgency_spelling_is_exact() {
        assert_eq!(classify_urgency("high").urgency, Urgency::High);
        assert_eq!(classify_urgency("HIGH").urgency, Urgency::Low);
        assert_eq!(classify_urgency("").label, "Low");
    }
}
