//! Donor registry and the blood-group / location search over it.

pub mod domain;
mod filter;
mod registry;

pub use domain::{BloodGroup, Donor, DonorCriteria, DonorId, UnknownBloodGroup};
pub use filter::{filter_donors, headline, DonorSearchResult};
pub use registry::{DonorRegistry, RegistryImportError};
