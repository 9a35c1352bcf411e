use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight ABO/Rh groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::APositive,
            Self::ANegative,
            Self::BPositive,
            Self::BNegative,
            Self::AbPositive,
            Self::AbNegative,
            Self::OPositive,
            Self::ONegative,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }

    /// Exact, case-sensitive lookup by canonical spelling.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|group| group.label() == value)
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not one of A+, A-, B+, B-, AB+, AB-, O+, O-")]
pub struct UnknownBloodGroup(pub String);

impl FromStr for BloodGroup {
    type Err = UnknownBloodGroup;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_label(value).ok_or_else(|| UnknownBloodGroup(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonorId(pub u32);

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered donor as held in the registry snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub blood_group: BloodGroup,
    pub location: String,
    pub phone: String,
    pub last_donation: NaiveDate,
}

/// User-entered search constraints. `None` and empty strings are both
/// treated as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorCriteria {
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl DonorCriteria {
    pub fn new(blood_group: Option<&str>, location: Option<&str>) -> Self {
        Self {
            blood_group: blood_group.map(str::to_string),
            location: location.map(str::to_string),
        }
    }

    pub fn blood_group(group: &str) -> Self {
        Self::new(Some(group), None)
    }

    pub fn location(location: &str) -> Self {
        Self::new(None, Some(location))
    }

    pub(crate) fn blood_group_constraint(&self) -> Option<&str> {
        non_empty(self.blood_group.as_deref())
    }

    pub(crate) fn location_constraint(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.blood_group_constraint().is_none() && self.location_constraint().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
