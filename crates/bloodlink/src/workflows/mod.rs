pub mod donors;
pub mod inventory;
pub mod router;
pub mod service;

pub use router::blood_bank_router;
pub use service::BloodBankService;
