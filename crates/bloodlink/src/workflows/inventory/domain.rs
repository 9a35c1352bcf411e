use crate::workflows::donors::BloodGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Critical,
    Low,
    Medium,
    Good,
}

impl StockLevel {
    /// Most severe first.
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::Low, Self::Medium, Self::Good]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Low => "Low Stock",
            Self::Medium => "Medium",
            Self::Good => "Good Stock",
        }
    }

    pub const fn severity(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Low => 2,
            Self::Medium => 1,
            Self::Good => 0,
        }
    }

    pub const fn is_shortage(self) -> bool {
        matches!(self, Self::Critical | Self::Low)
    }

    /// Label shown on the public availability board.
    pub const fn availability_label(self) -> &'static str {
        match self {
            Self::Critical => "Critical Need",
            Self::Low => "Low Stock",
            Self::Medium | Self::Good => "Available",
        }
    }
}

/// Request urgency. Unrecognized spellings deserialize to `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn severity(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }

    pub fn from_raw(value: &str) -> Self {
        match value {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        Self::from_raw(&value)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive upper bounds for the critical, low and medium tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockThresholds {
    critical_max: u32,
    low_max: u32,
    medium_max: u32,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical_max: 3,
            low_max: 8,
            medium_max: 15,
        }
    }
}

impl StockThresholds {
    pub fn new(critical_max: u32, low_max: u32, medium_max: u32) -> Result<Self, ThresholdError> {
        if critical_max >= low_max || low_max >= medium_max {
            return Err(ThresholdError::NotAscending {
                critical_max,
                low_max,
                medium_max,
            });
        }

        Ok(Self {
            critical_max,
            low_max,
            medium_max,
        })
    }

    pub const fn critical_max(&self) -> u32 {
        self.critical_max
    }

    pub const fn low_max(&self) -> u32 {
        self.low_max
    }

    pub const fn medium_max(&self) -> u32 {
        self.medium_max
    }

    pub const fn level_for(&self, units: u32) -> StockLevel {
        if units <= self.critical_max {
            StockLevel::Critical
        } else if units <= self.low_max {
            StockLevel::Low
        } else if units <= self.medium_max {
            StockLevel::Medium
        } else {
            StockLevel::Good
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error(
        "thresholds must be strictly ascending (critical {critical_max} < low {low_max} < medium {medium_max})"
    )]
    NotAscending {
        critical_max: u32,
        low_max: u32,
        medium_max: u32,
    },
}

/// Units on hand for one blood group. The tier is always derived from
/// `units` through [`StockThresholds`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub blood_group: BloodGroup,
    pub units: u32,
}

impl StockRecord {
    pub fn new(blood_group: BloodGroup, units: u32) -> Self {
        Self { blood_group, units }
    }

    pub fn level(&self, thresholds: &StockThresholds) -> StockLevel {
        thresholds.level_for(self.units)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: RequestId,
    pub patient: String,
    pub blood_group: BloodGroup,
    pub units: u32,
    pub urgency: Urgency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_must_ascend() {
        assert!(StockThresholds::new(3, 8, 15).is_ok());
        assert!(StockThresholds::new(8, 8, 15).is_err());
        assert!(StockThresholds::new(3, 20, 15).is_err());
    }

    #[test]
    fn custom_thresholds_move_the_boundaries() {
        let thresholds = StockThresholds::new(0, 4, 10).expect("ascending thresholds");
        assert_eq!(thresholds.level_for(0), StockLevel::Critical);
        assert_eq!(thresholds.level_for(1), StockLevel::Low);
        assert_eq!(thresholds.level_for(10), StockLevel::Medium);
        assert_eq!(thresholds.level_for(11), StockLevel::Good);
    }

    #[test]
    fn urgency_deserializes_unknown_values_as_low() {
        let parsed: Vec<Urgency> =
            serde_json::from_str(r#"["critical","high","medium","low","asap"]"#)
                .expect("urgency list parses");
        assert_eq!(
            parsed,
            vec![
                Urgency::Critical,
                Urgency::High,
                Urgency::Medium,
                Urgency::Low,
                Urgency::Low,
            ]
        );
    }

    #[test]
    fn urgency_serializes_in_snake_case() {
        let encoded = serde_json::to_string(&Urgency::High).expect("serializes");
        assert_eq!(encoded, r#""high""#);
    }

    #[test]
    fn severity_ranks_follow_tier_order() {
        let ranks: Vec<u8> = StockLevel::ordered().iter().map(|l| l.severity()).collect();
        assert_eq!(ranks, vec![3, 2, 1, 0]);
        assert!(Urgency::Critical.severity() > Urgency::High.severity());
    }
}
