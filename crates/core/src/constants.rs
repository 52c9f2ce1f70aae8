//! Constants used throughout the ABDM core crate.
//!
//! All enumerated pools the generator samples from live here as immutable static tables, along
//! with the numeric ranges and offsets that shape a record. Keeping them in one place makes the
//! synthetic data easy to review and keeps generation free of per-call allocations for literals.

/// Given names used for patients.
pub const FIRST_NAMES: &[&str] = &[
    "Aarav", "Advait", "Arjun", "Ishaan", "Reyansh", "Vihaan", "Aanya", "Diya", "Kiara", "Myra",
    "Prisha", "Zara",
];

/// Family names, shared by patients, doctors and surgeons.
pub const LAST_NAMES: &[&str] = &[
    "Patel", "Kumar", "Singh", "Sharma", "Verma", "Gupta", "Malhotra", "Reddy", "Iyer", "Mehta",
];

pub const GENDERS: &[&str] = &["Male", "Female"];

pub const BLOOD_GROUPS: &[&str] = &["A+", "B+", "O+", "AB+", "A-", "B-", "O-", "AB-"];

pub const MARITAL_STATUSES: &[&str] = &["Married", "Single", "Widowed"];

pub const OCCUPATIONS: &[&str] = &[
    "Service",
    "Business",
    "Healthcare",
    "Education",
    "Homemaker",
    "Retired",
];

pub const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Kolkata",
];

/// States are drawn independently of the city, as in the source data.
pub const STATES: &[&str] = &[
    "Maharashtra",
    "Delhi",
    "Karnataka",
    "Tamil Nadu",
    "Telangana",
    "West Bengal",
];

/// Chronic conditions; also used as visit diagnoses.
pub const CONDITIONS: &[&str] = &[
    "Type 2 Diabetes Mellitus",
    "Essential Hypertension",
    "Coronary Artery Disease",
    "Hypothyroidism",
    "Tuberculosis",
    "Dengue Fever",
    "Chronic Kidney Disease",
    "COPD",
    "Bronchial Asthma",
    "Rheumatoid Arthritis",
    "Anemia",
    "Fatty Liver Disease",
    "Vitamin D Deficiency",
    "Vitamin B12 Deficiency",
];

pub const ALLERGIES: &[&str] = &[
    "Penicillin",
    "Sulfa Drugs",
    "Aspirin",
    "Dairy Products",
    "Pollen",
    "Dust",
];

pub const FAMILY_RELATIONS: &[&str] = &["Father", "Mother", "Sibling"];

pub const FAMILY_CONDITIONS: &[&str] = &["Diabetes", "Hypertension", "Heart Disease", "Cancer"];

pub const SURGICAL_PROCEDURES: &[&str] = &[
    "Laparoscopic Cholecystectomy",
    "Appendectomy",
    "Total Knee Replacement",
    "Coronary Angioplasty",
    "Cataract Surgery",
];

pub const MEDICATIONS: &[&str] = &[
    "Metformin 500mg BD",
    "Telmisartan 40mg OD",
    "Aspirin 75mg OD",
    "Atorvastatin 10mg HS",
    "Levothyroxine 25mcg OD",
    "Amlodipine 5mg OD",
    "Pantoprazole 40mg OD",
    "Rosuvastatin 10mg HS",
    "Glimepiride 1mg OD",
    "Montelukast 10mg HS",
    "Methylcobalamin 1500mcg OD",
];

pub const HOSPITALS: &[&str] = &[
    "AIIMS Delhi",
    "Medanta - The Medicity, Gurugram",
    "Apollo Hospitals, Chennai",
    "Fortis Memorial Research Institute",
    "Manipal Hospitals, Bangalore",
    "Max Super Speciality Hospital, Delhi",
    "Kokilaben Hospital, Mumbai",
    "Narayana Health City, Bangalore",
    "Tata Memorial Hospital, Mumbai",
];

pub const DEPARTMENTS: &[&str] = &[
    "General Medicine",
    "Cardiology",
    "Endocrinology",
    "Orthopedics",
    "Gastroenterology",
    "Pulmonology",
];

pub const LABORATORIES: &[&str] = &[
    "Thyrocare",
    "Dr Lal PathLabs",
    "SRL Diagnostics",
    "Metropolis Healthcare",
    "Apollo Diagnostics",
];

pub const INSURANCE_PROVIDERS: &[&str] = &[
    "Star Health Insurance",
    "LIC Health Insurance",
    "HDFC ERGO Health",
    "Max Bupa Health Insurance",
    "New India Assurance",
    "National Insurance",
];

pub const POLICY_TYPES: &[&str] = &[
    "Family Floater",
    "Individual Health Plan",
    "Senior Citizen Health Plan",
    "Critical Illness Cover",
];

/// Sum insured options, in rupees.
pub const COVERAGE_AMOUNTS: &[u64] = &[500_000, 1_000_000, 2_000_000, 5_000_000, 10_000_000];

pub const THIRD_PARTY_ADMINISTRATORS: &[&str] = &[
    "Medi Assist",
    "MD India",
    "Paramount Health",
    "Family Health Plan",
    "Vipul MedCorp",
];

/// Number of visits in `recent_visits`.
pub const VISIT_COUNT: usize = 4;

/// Number of entries in `vitals_history`.
pub const VITALS_COUNT: usize = 3;

/// Days between consecutive vitals readings.
pub const VITALS_INTERVAL_DAYS: i64 = 30;

/// Visits fall within this many days before "now".
pub const VISIT_WINDOW_DAYS: i64 = 365;

/// Insurance policies are valid for this many days from "now".
pub const POLICY_VALIDITY_DAYS: i64 = 365;

/// Longest surgery look-back, in days.
pub const SURGERY_MAX_AGE_DAYS: i64 = 730;

/// Longest gap between a visit and its follow-up, in days.
pub const FOLLOW_UP_MAX_DAYS: i64 = 45;

/// Distance either side of an anchor date that must stay representable. Covers every offset the
/// generator applies.
pub const ANCHOR_MARGIN_DAYS: i64 = SURGERY_MAX_AGE_DAYS + VISIT_WINDOW_DAYS + FOLLOW_UP_MAX_DAYS;

/// Probability that a patient has a surgery on record.
pub const SURGERY_PROBABILITY: f64 = 0.5;

/// Prefix of a generated policy number.
pub const POLICY_NUMBER_PREFIX: &str = "POL";

/// Title prepended to doctor and surgeon surnames.
pub const DOCTOR_TITLE: &str = "Dr.";
