//! Health record model.
//!
//! These types mirror the JSON returned under `data` by the health-records endpoint. A record is
//! built once per request and never mutated afterwards, so all fields are plain owned values.
//! Dates serialise as `YYYY-MM-DD`.

use abdm_types::IdentifierKind;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A complete synthetic health record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRecord {
    pub patient_info: PatientInfo,
    pub medical_history: MedicalHistory,
    /// Exactly four visits, oldest first.
    pub recent_visits: Vec<Visit>,
    pub laboratory_results: LaboratoryResults,
    pub insurance_info: InsuranceInfo,
    /// Exactly three readings, newest first, 30 days apart.
    pub vitals_history: Vec<VitalsReading>,
}

/// Patient demographics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientInfo {
    pub name: String,
    /// The identifier exactly as supplied by the caller.
    pub identifier: String,
    pub identifier_type: IdentifierKind,
    pub age: u8,
    pub gender: String,
    pub blood_group: String,
    pub marital_status: String,
    pub occupation: String,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub city: String,
    pub state: String,
    /// Six-digit postal code.
    pub pincode: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistory {
    /// One to three distinct conditions.
    pub chronic_conditions: Vec<String>,
    /// Up to two distinct allergies.
    pub allergies: Vec<String>,
    /// One or two `"<relation> - <condition>"` entries.
    pub family_history: Vec<String>,
    /// Empty, or a single past procedure.
    pub surgeries: Vec<Surgery>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Surgery {
    pub procedure: String,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub hospital: String,
    pub surgeon: String,
}

/// An outpatient visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Visit {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub hospital: String,
    pub department: String,
    pub doctor: String,
    pub diagnosis: String,
    pub prescribed_medications: Vec<String>,
    #[schema(value_type = String, format = Date)]
    pub follow_up_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LaboratoryResults {
    pub latest_tests: Vec<LabTest>,
    #[schema(value_type = String, format = Date)]
    pub test_date: NaiveDate,
    pub laboratory: String,
}

/// A lab panel. Parameter values carry their unit, e.g. `"13.2 g/dL"`.
///
/// Parameters keep the panel's reporting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabTest {
    pub name: String,
    #[schema(value_type = Object)]
    pub parameters: IndexMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InsuranceInfo {
    pub policy_number: String,
    pub insurance_provider: String,
    pub policy_type: String,
    /// Sum insured, in rupees.
    pub coverage_amount: u64,
    #[schema(value_type = String, format = Date)]
    pub valid_until: NaiveDate,
    pub tpa: String,
}

/// A single set of vital signs, formatted with units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VitalsReading {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub oxygen_saturation: String,
    pub respiratory_rate: String,
    pub weight: String,
    pub bmi: String,
}
