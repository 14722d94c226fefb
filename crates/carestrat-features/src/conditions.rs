//! The fixed chronic-condition vocabulary.
//!
//! Risk models are trained against eleven chronic-condition indicator
//! columns. Each condition has an intake flag code (`sp_*`), a human-readable
//! display name used in attribution output, and membership in the
//! "high-impact" subset that feeds the `high_impact_conditions` engineered
//! feature.

use arrayvec::ArrayVec;

use crate::record::IntakeRecord;

/// One of the eleven chronic conditions tracked by the risk models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditionCode {
    HeartFailure,
    Diabetes,
    KidneyDisease,
    Cancer,
    Copd,
    Depression,
    IschemicHeart,
    StrokeTia,
    Dementia,
    Osteoporosis,
    Arthritis,
}

/// Prefix shared by every condition-flag intake field.
pub const FLAG_PREFIX: &str = "sp_";

impl ConditionCode {
    /// Every tracked condition, in canonical column order.
    pub const ALL: [ConditionCode; 11] = [
        ConditionCode::HeartFailure,
        ConditionCode::Diabetes,
        ConditionCode::KidneyDisease,
        ConditionCode::Cancer,
        ConditionCode::Copd,
        ConditionCode::Depression,
        ConditionCode::IschemicHeart,
        ConditionCode::StrokeTia,
        ConditionCode::Dementia,
        ConditionCode::Osteoporosis,
        ConditionCode::Arthritis,
    ];

    /// The subset whose presence drives the `high_impact_conditions` count.
    pub const HIGH_IMPACT: [ConditionCode; 4] = [
        ConditionCode::HeartFailure,
        ConditionCode::KidneyDisease,
        ConditionCode::Cancer,
        ConditionCode::Copd,
    ];

    /// The intake flag code, which is also the model feature-column name.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ConditionCode::HeartFailure => "sp_chf",
            ConditionCode::Diabetes => "sp_diabetes",
            ConditionCode::KidneyDisease => "sp_chrnkidn",
            ConditionCode::Cancer => "sp_cncr",
            ConditionCode::Copd => "sp_copd",
            ConditionCode::Depression => "sp_depressn",
            ConditionCode::IschemicHeart => "sp_ischmcht",
            ConditionCode::StrokeTia => "sp_strketia",
            ConditionCode::Dementia => "sp_alzhdmta",
            ConditionCode::Osteoporosis => "sp_osteoprs",
            ConditionCode::Arthritis => "sp_ra_oa",
        }
    }

    /// The display name used in attribution output.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ConditionCode::HeartFailure => "Heart Failure",
            ConditionCode::Diabetes => "Diabetes",
            ConditionCode::KidneyDisease => "Kidney Disease",
            ConditionCode::Cancer => "Cancer",
            ConditionCode::Copd => "COPD",
            ConditionCode::Depression => "Depression",
            ConditionCode::IschemicHeart => "Ischemic Heart",
            ConditionCode::StrokeTia => "Stroke/TIA",
            ConditionCode::Dementia => "Dementia",
            ConditionCode::Osteoporosis => "Osteoporosis",
            ConditionCode::Arthritis => "Arthritis",
        }
    }
}

/// Whether an intake field name is a condition flag (case-insensitive).
#[must_use]
pub fn is_flag_key(name: &str) -> bool {
    name.as_bytes()
        .get(..FLAG_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(FLAG_PREFIX.as_bytes()))
}

/// The conditions a patient actually has, capped by the vocabulary size.
pub type PresentConditions = ArrayVec<ConditionCode, 11>;

/// The conditions whose flag is set to 1 in an enriched record.
#[must_use]
pub fn present_conditions(record: &IntakeRecord) -> PresentConditions {
    ConditionCode::ALL
        .into_iter()
        .filter(|condition| record.flag_set(condition.code()))
        .collect()
}
