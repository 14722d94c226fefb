//! Engineered-feature derivation from raw intake fields.
//!
//! Raw intake records (upload forms, CSV rows) carry demographics, condition
//! checkboxes, and utilization counts. The models additionally expect a set of
//! engineered columns computed from those fields. [`enrich_intake`] produces a
//! new record containing both.
//!
//! # Derivation Rules
//!
//! - **Condition flags**: every `sp_*` field is dropped from passthrough and
//!   re-derived over the fixed eleven-code vocabulary as 1 when the key is
//!   present in the raw input (checkbox semantics: presence means checked,
//!   whatever the submitted value) and 0 otherwise
//! - **Coercion**: remaining string values become numbers when they look
//!   numeric (see [`FeatureValue::coerce_text`](crate::record::FeatureValue::coerce_text));
//!   identifiers stay text
//! - **Age bands**: `age_65_74`, `age_75_84`, `age_85_plus` - mutually
//!   exclusive, all zero below 65
//! - **`high_impact_conditions`**: count of set flags among the four
//!   high-impact codes
//! - **`prior_hospitalization`**: `inpatient_admissions > 0`
//! - **`frequent_ed_user`**: `outpatient_visits > 10`
//! - **`high_cost_patient`**: `total_medicare_costs > 20000`
//!
//! Derivation is a pure function of its input. Missing numeric fields read as
//! 0 for every threshold, so a partial intake form never fails here.

use crate::{
    conditions::{self, ConditionCode},
    record::IntakeRecord,
};

/// Builds the enriched record: coerced passthrough fields plus re-derived
/// condition flags plus engineered features.
#[must_use]
pub fn enrich_intake(raw: &IntakeRecord) -> IntakeRecord {
    let mut enriched: IntakeRecord = raw
        .iter()
        .filter(|(name, _)| !conditions::is_flag_key(name))
        .map(|(name, value)| (name, value.coerced()))
        .collect();

    for condition in ConditionCode::ALL {
        let flag = i64::from(raw.contains(condition.code()));
        enriched.insert(condition.code(), flag);
    }

    let age = enriched.numeric_or_zero("age");
    enriched.insert("age_65_74", i64::from((65.0..75.0).contains(&age)));
    enriched.insert("age_75_84", i64::from((75.0..85.0).contains(&age)));
    enriched.insert("age_85_plus", i64::from(age >= 85.0));

    let high_impact: i64 = ConditionCode::HIGH_IMPACT
        .into_iter()
        .map(|condition| i64::from(enriched.flag_set(condition.code())))
        .sum();
    enriched.insert("high_impact_conditions", high_impact);

    enriched.insert(
        "prior_hospitalization",
        i64::from(enriched.numeric_or_zero("inpatient_admissions") > 0.0),
    );
    enriched.insert(
        "frequent_ed_user",
        i64::from(enriched.numeric_or_zero("outpatient_visits") > 10.0),
    );
    enriched.insert(
        "high_cost_patient",
        i64::from(enriched.numeric_or_zero("total_medicare_costs") > 20_000.0),
    );

    enriched
}

#[cfg(test)]
mod tests {
    use crate::record::FeatureValue;

    use super::*;

    fn record(fields: &[(&str, FeatureValue)]) -> IntakeRecord {
        fields
            .iter()
            .map(|(name, value)| (*name, value.clone()))
            .collect()
    }

    fn age_bands(age: i64) -> (f64, f64, f64) {
        let enriched = enrich_intake(&record(&[("age", FeatureValue::Int(age))]));
        (
            enriched.numeric_or_zero("age_65_74"),
            enriched.numeric_or_zero("age_75_84"),
            enriched.numeric_or_zero("age_85_plus"),
        )
    }

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(age_bands(64), (0.0, 0.0, 0.0));
        assert_eq!(age_bands(65), (1.0, 0.0, 0.0));
        assert_eq!(age_bands(74), (1.0, 0.0, 0.0));
        assert_eq!(age_bands(75), (0.0, 1.0, 0.0));
        assert_eq!(age_bands(84), (0.0, 1.0, 0.0));
        assert_eq!(age_bands(85), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_condition_flags_from_key_presence() {
        let raw = record(&[
            ("SP_CHF", FeatureValue::Text("on".to_owned())),
            ("sp_copd", FeatureValue::Int(0)),
        ]);
        let enriched = enrich_intake(&raw);

        // Presence means checked, whatever the submitted value.
        assert_eq!(enriched.numeric("sp_chf"), Some(1.0));
        assert_eq!(enriched.numeric("sp_copd"), Some(1.0));
        assert_eq!(enriched.numeric("sp_diabetes"), Some(0.0));
        for condition in ConditionCode::ALL {
            assert!(enriched.contains(condition.code()));
        }
    }

    #[test]
    fn test_high_impact_count() {
        let raw = record(&[
            ("sp_chf", FeatureValue::Int(1)),
            ("sp_cncr", FeatureValue::Int(1)),
            ("sp_diabetes", FeatureValue::Int(1)),
        ]);
        let enriched = enrich_intake(&raw);
        // Diabetes is not in the high-impact subset.
        assert_eq!(enriched.numeric("high_impact_conditions"), Some(2.0));
    }

    #[test]
    fn test_utilization_flags() {
        let raw = record(&[
            ("inpatient_admissions", FeatureValue::Int(2)),
            ("outpatient_visits", FeatureValue::Int(11)),
            ("total_medicare_costs", FeatureValue::Int(20_000)),
        ]);
        let enriched = enrich_intake(&raw);
        assert_eq!(enriched.numeric("prior_hospitalization"), Some(1.0));
        assert_eq!(enriched.numeric("frequent_ed_user"), Some(1.0));
        // Threshold is strict: exactly 20000 is not high-cost.
        assert_eq!(enriched.numeric("high_cost_patient"), Some(0.0));
    }

    #[test]
    fn test_thresholds_default_to_zero_when_absent() {
        let enriched = enrich_intake(&IntakeRecord::new());
        assert_eq!(enriched.numeric("prior_hospitalization"), Some(0.0));
        assert_eq!(enriched.numeric("frequent_ed_user"), Some(0.0));
        assert_eq!(enriched.numeric("high_cost_patient"), Some(0.0));
        assert_eq!(enriched.numeric("high_impact_conditions"), Some(0.0));
    }

    #[test]
    fn test_string_coercion_passthrough() {
        let raw = record(&[
            ("age", FeatureValue::Text("76".to_owned())),
            ("total_medicare_costs", FeatureValue::Text("21500.5".to_owned())),
            ("desynpuf_id", FeatureValue::Text("A1B2C3".to_owned())),
        ]);
        let enriched = enrich_intake(&raw);
        assert_eq!(enriched.get("age"), Some(&FeatureValue::Int(76)));
        assert_eq!(
            enriched.get("total_medicare_costs"),
            Some(&FeatureValue::Float(21500.5)),
        );
        assert_eq!(
            enriched.get("desynpuf_id"),
            Some(&FeatureValue::Text("A1B2C3".to_owned())),
        );
    }

    #[test]
    fn test_pure_input_untouched() {
        let raw = record(&[("age", FeatureValue::Text("85".to_owned()))]);
        let before = raw.clone();
        let _ = enrich_intake(&raw);
        assert_eq!(raw, before);
    }
}
