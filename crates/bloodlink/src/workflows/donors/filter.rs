use super::domain::{Donor, DonorCriteria};
use serde::Serialize;

impl DonorCriteria {
    /// True when the donor satisfies every supplied constraint.
    pub fn matches(&self, donor: &Donor) -> bool {
        let group_ok = self
            .blood_group_constraint()
            .map_or(true, |group| donor.blood_group.label() == group);
        if !group_ok {
            return false;
        }

        self.location_constraint().map_or(true, |needle| {
            donor
                .location
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }
}

/// Returns the donors matching `criteria`, preserving registry order.
pub fn filter_donors(donors: &[Donor], criteria: &DonorCriteria) -> Vec<Donor> {
    if criteria.is_unconstrained() {
        return donors.to_vec();
    }

    donors
        .iter()
        .filter(|donor| criteria.matches(donor))
        .cloned()
        .collect()
}

/// Outcome of a registry search, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorSearchResult {
    pub criteria: DonorCriteria,
    pub filtered: bool,
    pub matched: usize,
    pub registry_size: usize,
    pub headline: String,
    pub donors: Vec<Donor>,
}

impl DonorSearchResult {
    pub(crate) fn build(registry: &[Donor], criteria: &DonorCriteria) -> Self {
        let donors = filter_donors(registry, criteria);
        let matched = donors.len();
        Self {
            criteria: criteria.clone(),
            filtered: !criteria.is_unconstrained(),
            matched,
            registry_size: registry.len(),
            headline: headline(matched),
            donors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }
}

pub fn headline(matched: usize) -> String {
    if matched == 1 {
        "1 Donor Found".to_string()
    } else {
        format!("{matched} Donors Found")
    }
}
