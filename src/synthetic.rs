// File: src/synthetic.rs
// Random demo data for exercising the reports.
use crate::model::ProcedureRecord;
use chrono::{Duration, NaiveDate};

pub const DEFAULT_COUNT: usize = 50;
/// Generated dates fall within this many days before `today`, inclusive.
pub const MAX_AGE_DAYS: i64 = 365;
pub const NOTE: &str = "Test record";

pub const HOSPITALS: [&str; 6] = [
    "Nairobi Hosp",
    "Kijabe Hosp",
    "MTRH Eldoret",
    "Meru Hosp",
    "Mombasa Hosp",
    "Kisii Hosp",
];
pub const REGIONS: [&str; 5] = ["Nairobi/Kijabe", "Eldoret", "Meru", "Mombasa", "Kisii"];
pub const PROCEDURES: [&str; 5] = [
    "Arthroplasty",
    "Fracture Fixation",
    "Spinal Surgery",
    "Knee Replacement",
    "Hip Replacement",
];
pub const SURGEONS: [&str; 4] = ["Dr. A", "Dr. B", "Dr. C", "Dr. D"];

fn pick<'a>(rng: &mut fastrand::Rng, options: &[&'a str]) -> &'a str {
    options[rng.usize(..options.len())]
}

/// Generates `count` records dated within the past year of `today`, with
/// staff drawn from `staff`. An empty roster leaves `staff` blank.
pub fn generate(
    count: usize,
    staff: &[String],
    today: NaiveDate,
    rng: &mut fastrand::Rng,
) -> Vec<ProcedureRecord> {
    (0..count)
        .map(|_| {
            let age = rng.i64(0..=MAX_AGE_DAYS);
            let staff_member = if staff.is_empty() {
                String::new()
            } else {
                staff[rng.usize(..staff.len())].clone()
            };
            ProcedureRecord {
                date: today - Duration::days(age),
                hospital: pick(rng, &HOSPITALS).to_string(),
                region: pick(rng, &REGIONS).to_string(),
                procedure: pick(rng, &PROCEDURES).to_string(),
                surgeon: pick(rng, &SURGEONS).to_string(),
                staff: staff_member,
                notes: NOTE.to_string(),
            }
        })
        .collect()
}
