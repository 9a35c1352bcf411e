use super::domain::{BloodGroup, Donor, DonorCriteria, DonorId};
use super::filter::DonorSearchResult;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum RegistryImportError {
    #[error("failed to read donor registry: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid donor registry CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown blood group '{value}'")]
    UnknownBloodGroup { row: usize, value: String },
    #[error("row {row}: last_donation '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: donor id {id} appears more than once")]
    DuplicateId { row: usize, id: DonorId },
}

/// Read-only donor snapshot owned by the presentation side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorRegistry {
    donors: Vec<Donor>,
}

impl DonorRegistry {
    pub fn new(donors: Vec<Donor>) -> Self {
        Self { donors }
    }

    /// The six-donor demonstration registry.
    pub fn seed() -> Self {
        let seed = [
            (1, "John Smith", BloodGroup::OPositive, "New York", "+1 (555) 123-4567", (2024, 1, 15)),
            (2, "Sarah Johnson", BloodGroup::APositive, "New York", "+1 (555) 234-5678", (2024, 2, 20)),
            (3, "Michael Brown", BloodGroup::BPositive, "Boston", "+1 (555) 345-6789", (2024, 1, 10)),
            (4, "Emily Davis", BloodGroup::ONegative, "Chicago", "+1 (555) 456-7890", (2024, 3, 5)),
            (5, "David Wilson", BloodGroup::AbPositive, "New York", "+1 (555) 567-8901", (2024, 2, 15)),
            (6, "Lisa Anderson", BloodGroup::ANegative, "Boston", "+1 (555) 678-9012", (2024, 1, 25)),
        ];

        let donors = seed
            .into_iter()
            .map(|(id, name, blood_group, location, phone, (y, m, d))| Donor {
                id: DonorId(id),
                name: name.to_string(),
                blood_group,
                location: location.to_string(),
                phone: phone.to_string(),
                last_donation: NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid"),
            })
            .collect();

        Self { donors }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RegistryImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let registry = Self::from_reader(file)?;
        info!(path = %path.display(), donors = registry.len(), "donor registry imported");
        Ok(registry)
    }

    /// Parses `id,name,blood_group,location,phone,last_donation` rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RegistryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut donors = Vec::new();

        for (index, record) in csv_reader.deserialize::<DonorRow>().enumerate() {
            // Header is line 1.
            let row = index + 2;
            let donor = record?.into_donor(row)?;
            if !seen.insert(donor.id) {
                return Err(RegistryImportError::DuplicateId { row, id: donor.id });
            }
            donors.push(donor);
        }

        Ok(Self { donors })
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    pub fn search(&self, criteria: &DonorCriteria) -> DonorSearchResult {
        let result = DonorSearchResult::build(&self.donors, criteria);
        debug!(
            blood_group = ?criteria.blood_group,
            location = ?criteria.location,
            matched = result.matched,
            "donor search evaluated"
        );
        result
    }

    /// Equivalent to a search with no constraints.
    pub fn reset(&self) -> DonorSearchResult {
        self.search(&DonorCriteria::default())
    }
}

#[derive(Debug, Deserialize)]
struct DonorRow {
    id: u32,
    name: String,
    blood_group: String,
    location: String,
    #[serde(default)]
    phone: String,
    last_donation: String,
}

impl DonorRow {
    fn into_donor(self, row: usize) -> Result<Donor, RegistryImportError> {
        let blood_group = BloodGroup::from_label(&self.blood_group).ok_or_else(|| {
            RegistryImportError::UnknownBloodGroup {
                row,
                value: self.blood_group.clone(),
            }
        })?;
        let last_donation = NaiveDate::parse_from_str(&self.last_donation, "%Y-%m-%d")
            .map_err(|_| RegistryImportError::InvalidDate {
                row,
                value: self.last_donation.clone(),
            })?;

        Ok(Donor {
            id: DonorId(self.id),
            name: self.name,
            blood_group,
            location: self.location,
            phone: self.phone,
            last_donation,
        })
    }
}
