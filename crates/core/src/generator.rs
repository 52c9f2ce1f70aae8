//! Deterministic health-record generation.
//!
//! A [`RecordGenerator`] turns a validated [`Identifier`] into a [`HealthRecord`]. Every random
//! choice is drawn from one [`ChaCha8Rng`] seeded with the identifier's [`Seed`], in a fixed order:
//!
//! 1. patient demographics
//! 2. medical history (conditions, allergies, family history, optional surgery)
//! 3. four visits (dates first, then one visit body per date)
//! 4. laboratory panels, test date and laboratory
//! 5. insurance profile
//! 6. three vitals readings
//!
//! The generator holds no mutable state. Each call builds its own RNG, so concurrent requests
//! cannot disturb each other's sequences. Dates are offsets from [`Clock::today`]; with a
//! [`FixedClock`](crate::FixedClock) the whole record is reproducible.

use crate::clock::{Clock, SystemClock};
use crate::constants::*;
use crate::record::{
    Address, HealthRecord, InsuranceInfo, LabTest, LaboratoryResults, MedicalHistory, PatientInfo,
    Surgery, Visit, VitalsReading,
};
use crate::seed::Seed;
use crate::{CoreConfig, RecordResult};
use abdm_types::Identifier;
use chrono::{Duration, NaiveDate};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Builds synthetic health records.
#[derive(Clone, Debug)]
pub struct RecordGenerator {
    clock: Arc<dyn Clock>,
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl RecordGenerator {
    /// Creates a generator anchored to the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Creates a generator from resolved startup configuration.
    pub fn from_config(cfg: &CoreConfig) -> Self {
        Self::new(cfg.clock())
    }

    /// Generates the record for `identifier`.
    ///
    /// Infallible: the identifier has already been validated. Two identifiers with the same
    /// four-digit suffix produce the same record on the same day, apart from the echoed
    /// `identifier` and `identifier_type`.
    pub fn generate(&self, identifier: &Identifier) -> HealthRecord {
        let seed = Seed::from_identifier(identifier);
        let today = self.clock.today();
        let mut rng = seed.rng();

        let patient_info = patient_info(&mut rng, identifier);
        let medical_history = medical_history(&mut rng, today);
        let recent_visits = recent_visits(&mut rng, today);
        let laboratory_results = laboratory_results(&mut rng, today);
        let insurance_info = insurance_info(&mut rng, today);
        let vitals_history = vitals_history(&mut rng, today);

        tracing::debug!(
            %seed,
            identifier_type = %identifier.kind(),
            %today,
            "generated health record"
        );

        HealthRecord {
            patient_info,
            medical_history,
            recent_visits,
            laboratory_results,
            insurance_info,
            vitals_history,
        }
    }

    /// Validates `input` and generates its record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidIdentifier`](crate::RecordError::InvalidIdentifier) if
    /// `input` is not a valid Aadhaar or ABHA number.
    pub fn generate_from_str(&self, input: &str) -> RecordResult<HealthRecord> {
        let identifier = Identifier::parse(input)?;
        Ok(self.generate(&identifier))
    }
}

fn pick(rng: &mut ChaCha8Rng, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_owned()
}

fn sample(rng: &mut ChaCha8Rng, pool: &[&str], amount: usize) -> Vec<String> {
    pool.choose_multiple(rng, amount)
        .map(|s| (*s).to_owned())
        .collect()
}

fn doctor(rng: &mut ChaCha8Rng) -> String {
    format!("{DOCTOR_TITLE} {}", pick(rng, LAST_NAMES))
}

fn days_before(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

fn patient_info(rng: &mut ChaCha8Rng, identifier: &Identifier) -> PatientInfo {
    let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));

    PatientInfo {
        name,
        identifier: identifier.as_str().to_owned(),
        identifier_type: identifier.kind(),
        age: rng.gen_range(25..=75),
        gender: pick(rng, GENDERS),
        blood_group: pick(rng, BLOOD_GROUPS),
        marital_status: pick(rng, MARITAL_STATUSES),
        occupation: pick(rng, OCCUPATIONS),
        address: Address {
            city: pick(rng, CITIES),
            state: pick(rng, STATES),
            pincode: rng.gen_range(100_000..=999_999u32).to_string(),
        },
    }
}

fn medical_history(rng: &mut ChaCha8Rng, today: NaiveDate) -> MedicalHistory {
    let condition_count = rng.gen_range(1..=3);
    let chronic_conditions = sample(rng, CONDITIONS, condition_count);

    let allergy_count = rng.gen_range(0..=2);
    let allergies = sample(rng, ALLERGIES, allergy_count);

    let family_count = rng.gen_range(1..=2);
    let family_history = (0..family_count)
        .map(|_| {
            let relation = pick(rng, FAMILY_RELATIONS);
            let condition = pick(rng, FAMILY_CONDITIONS);
            format!("{relation} - {condition}")
        })
        .collect();

    let surgeries = if rng.gen_bool(SURGERY_PROBABILITY) {
        vec![Surgery {
            procedure: pick(rng, SURGICAL_PROCEDURES),
            date: days_before(today, rng.gen_range(30..=SURGERY_MAX_AGE_DAYS)),
            hospital: pick(rng, HOSPITALS),
            surgeon: doctor(rng),
        }]
    } else {
        Vec::new()
    };

    MedicalHistory {
        chronic_conditions,
        allergies,
        family_history,
        surgeries,
    }
}

fn recent_visits(rng: &mut ChaCha8Rng, today: NaiveDate) -> Vec<Visit> {
    let window_start = days_before(today, VISIT_WINDOW_DAYS);
    let mut dates: Vec<NaiveDate> = (0..VISIT_COUNT)
        .map(|_| window_start + Duration::days(rng.gen_range(0..=VISIT_WINDOW_DAYS)))
        .collect();
    dates.sort();

    dates
        .into_iter()
        .map(|date| {
            let hospital = pick(rng, HOSPITALS);
            let department = pick(rng, DEPARTMENTS);
            let doctor = doctor(rng);
            let diagnosis = pick(rng, CONDITIONS);
            let medication_count = rng.gen_range(2..=4);
            let prescribed_medications = sample(rng, MEDICATIONS, medication_count);
            let follow_up_date = date + Duration::days(rng.gen_range(15..=FOLLOW_UP_MAX_DAYS));

            Visit {
                date,
                hospital,
                department,
                doctor,
                diagnosis,
                prescribed_medications,
                follow_up_date,
            }
        })
        .collect()
}

/// One lab parameter: display name, range, decimal places and unit suffix.
struct LabParameter {
    name: &'static str,
    low: f64,
    high: f64,
    decimals: usize,
    unit: &'static str,
}

const fn param(
    name: &'static str,
    low: f64,
    high: f64,
    decimals: usize,
    unit: &'static str,
) -> LabParameter {
    LabParameter {
        name,
        low,
        high,
        decimals,
        unit,
    }
}

const LAB_PANELS: &[(&str, &[LabParameter])] = &[
    (
        "Complete Blood Count (CBC)",
        &[
            param("Hemoglobin", 11.0, 15.5, 1, " g/dL"),
            param("WBC Count", 4000.0, 11000.0, 0, " cells/mcL"),
            param("Platelet Count", 150000.0, 450000.0, 0, " /mcL"),
        ],
    ),
    (
        "Lipid Profile",
        &[
            param("Total Cholesterol", 150.0, 240.0, 0, " mg/dL"),
            param("Triglycerides", 100.0, 200.0, 0, " mg/dL"),
            param("HDL Cholesterol", 40.0, 60.0, 0, " mg/dL"),
            param("LDL Cholesterol", 70.0, 160.0, 0, " mg/dL"),
        ],
    ),
    (
        "Diabetes Profile",
        &[
            param("Fasting Blood Sugar", 70.0, 180.0, 0, " mg/dL"),
            param("Post Prandial Blood Sugar", 100.0, 200.0, 0, " mg/dL"),
            param("HbA1c", 5.0, 8.0, 1, "%"),
        ],
    ),
];

fn laboratory_results(rng: &mut ChaCha8Rng, today: NaiveDate) -> LaboratoryResults {
    let latest_tests = LAB_PANELS
        .iter()
        .map(|(name, parameters)| LabTest {
            name: (*name).to_owned(),
            parameters: parameters
                .iter()
                .map(|p| {
                    let value = rng.gen_range(p.low..=p.high);
                    let formatted = format!("{value:.prec$}{}", p.unit, prec = p.decimals);
                    (p.name.to_owned(), formatted)
                })
                .collect::<IndexMap<_, _>>(),
        })
        .collect();

    LaboratoryResults {
        latest_tests,
        test_date: days_before(today, rng.gen_range(1..=30)),
        laboratory: pick(rng, LABORATORIES),
    }
}

fn insurance_info(rng: &mut ChaCha8Rng, today: NaiveDate) -> InsuranceInfo {
    InsuranceInfo {
        policy_number: format!(
            "{POLICY_NUMBER_PREFIX}{}",
            rng.gen_range(100_000..=999_999u32)
        ),
        insurance_provider: pick(rng, INSURANCE_PROVIDERS),
        policy_type: pick(rng, POLICY_TYPES),
        coverage_amount: COVERAGE_AMOUNTS.choose(rng).copied().unwrap_or_default(),
        valid_until: today + Duration::days(POLICY_VALIDITY_DAYS),
        tpa: pick(rng, THIRD_PARTY_ADMINISTRATORS),
    }
}

fn vitals_history(rng: &mut ChaCha8Rng, today: NaiveDate) -> Vec<VitalsReading> {
    (0..VITALS_COUNT as i64)
        .map(|i| {
            let systolic: u32 = rng.gen_range(110..=140);
            let diastolic: u32 = rng.gen_range(70..=90);
            VitalsReading {
                date: days_before(today, i * VITALS_INTERVAL_DAYS),
                blood_pressure: format!("{systolic}/{diastolic} mmHg"),
                heart_rate: format!("{} bpm", rng.gen_range(60..=100u32)),
                temperature: format!("{:.1}°F", rng.gen_range(97.0..=99.0f64)),
                oxygen_saturation: format!("{}%", rng.gen_range(95..=100u32)),
                respiratory_rate: format!("{} /min", rng.gen_range(12..=20u32)),
                weight: format!("{} kg", rng.gen_range(55..=85u32)),
                bmi: format!("{:.1}", rng.gen_range(18.5..=29.9f64)),
            }
        })
        .collect()
}
