//! # ABDM Core
//!
//! Core logic for the ABDM mock health-record service.
//!
//! This crate contains the pure data operations:
//! - Seed derivation from a validated identifier
//! - Deterministic generation of a nested [`HealthRecord`]
//! - Startup configuration (optional anchor date)
//!
//! **No API concerns**: HTTP routing, response envelopes and status codes belong in `api-rest`
//! and `api-shared`.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod record;
pub mod seed;

pub use abdm_types::{Identifier, IdentifierError, IdentifierKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CoreConfig;
pub use error::{RecordError, RecordResult};
pub use generator::RecordGenerator;
pub use record::{
    Address, HealthRecord, InsuranceInfo, LabTest, LaboratoryResults, MedicalHistory, PatientInfo,
    Surgery, Visit, VitalsReading,
};
pub use seed::Seed;
