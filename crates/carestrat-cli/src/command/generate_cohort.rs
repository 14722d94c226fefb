use std::path::PathBuf;

use carestrat_features::{ConditionCode, IntakeRecord};
use rand::{Rng, SeedableRng as _};
use rand_distr::Normal;
use rand_pcg::Pcg32;

use crate::util::Output;

/// Background prevalence per condition in the synthetic population.
const CONDITION_PREVALENCE: [(ConditionCode, f64); 11] = [
    (ConditionCode::HeartFailure, 0.22),
    (ConditionCode::Diabetes, 0.38),
    (ConditionCode::KidneyDisease, 0.18),
    (ConditionCode::Cancer, 0.12),
    (ConditionCode::Copd, 0.20),
    (ConditionCode::Depression, 0.25),
    (ConditionCode::IschemicHeart, 0.30),
    (ConditionCode::StrokeTia, 0.08),
    (ConditionCode::Dementia, 0.10),
    (ConditionCode::Osteoporosis, 0.15),
    (ConditionCode::Arthritis, 0.28),
];

const MEAN_AGE: f64 = 76.0;
const AGE_SIGMA: f64 = 7.5;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateCohortArg {
    /// Number of patients to generate
    #[arg(long, default_value_t = 100)]
    num_patients: usize,
    /// RNG seed; the same seed always yields the same cohort
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateCohortArg) -> anyhow::Result<()> {
    let cohort = generate_cohort(arg.num_patients, arg.seed);
    Output::save_json(&cohort, arg.output.clone())
}

fn generate_cohort(num_patients: usize, seed: u64) -> Vec<IntakeRecord> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..num_patients)
        .map(|index| generate_patient(&mut rng, index))
        .collect()
}

/// One raw intake record in upload-form shape: condition keys are present
/// only when the condition is set, matching checkbox submission semantics.
#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_patient<R>(rng: &mut R, index: usize) -> IntakeRecord
where
    R: Rng + ?Sized,
{
    // Normal::new only fails on a non-finite sigma.
    let age_distr = Normal::new(MEAN_AGE, AGE_SIGMA).unwrap();
    let age = rng.sample(age_distr).clamp(65.0, 99.0).round() as i64;

    let mut record = IntakeRecord::new();
    record.insert("desynpuf_id", format!("SYN{index:08}").as_str());
    record.insert("age", age);
    record.insert("gender_male", i64::from(rng.random_bool(0.44)));
    let race_white = rng.random_bool(0.78);
    record.insert("race_white", i64::from(race_white));
    record.insert(
        "race_black",
        i64::from(!race_white && rng.random_bool(0.5)),
    );

    // Condition burden rises with age.
    let age_factor = 1.0 + (age - 65) as f64 / 100.0;
    let mut condition_count = 0_i64;
    for (condition, prevalence) in CONDITION_PREVALENCE {
        if rng.random_bool((prevalence * age_factor).min(1.0)) {
            record.insert(condition.code(), 1);
            condition_count += 1;
        }
    }
    record.insert("chronic_condition_count", condition_count);

    let admissions = rng.random_range(0..=3) + i64::from(condition_count >= 4);
    record.insert("inpatient_admissions", admissions);
    record.insert(
        "inpatient_days",
        if admissions > 0 {
            admissions * rng.random_range(3..=9)
        } else {
            0
        },
    );
    let outpatient_visits = rng.random_range(0..=6) + condition_count * 2;
    record.insert("outpatient_visits", outpatient_visits);

    let costs = 1_500.0
        + 11_000.0 * admissions as f64
        + 320.0 * outpatient_visits as f64
        + rng.random_range(0.0..2_500.0);
    record.insert("total_medicare_costs", (costs * 100.0).round() / 100.0);

    record
}
