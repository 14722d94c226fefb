//! Projection of an enriched record onto a model's feature columns.
//!
//! A fitted model carries its canonical ordered feature-column list. The
//! normalizer resolves each column against the record (case-insensitively,
//! since records canonicalize names at insertion) and emits the values in
//! column order. Columns the record does not carry, and columns holding text,
//! read as 0 - a partial intake form scores rather than fails. Record fields
//! no column asks for are ignored.

use crate::record::IntakeRecord;

/// Builds the ordered feature vector for a model's column list.
///
/// Total over all inputs: every required column resolves, defaulting to 0.0
/// when absent or non-numeric.
///
/// # Examples
///
/// ```
/// use carestrat_features::{IntakeRecord, normalize};
///
/// let mut record = IntakeRecord::new();
/// record.insert("AGE", 76);
/// record.insert("name", "Jane Doe");
///
/// let columns = ["age".to_owned(), "sp_chf".to_owned()];
/// assert_eq!(normalize::feature_vector(&record, &columns), vec![76.0, 0.0]);
/// ```
#[must_use]
pub fn feature_vector(record: &IntakeRecord, columns: &[String]) -> Vec<f64> {
    columns
        .iter()
        .map(|column| record.numeric_or_zero(column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_owned()).collect()
    }

    #[test]
    fn test_canonical_record_is_extracted_verbatim() {
        let mut record = IntakeRecord::new();
        record.insert("age", 76);
        record.insert("sp_chf", 1);
        record.insert("total_medicare_costs", 18_000.0);

        let cols = columns(&["age", "sp_chf", "total_medicare_costs"]);
        assert_eq!(feature_vector(&record, &cols), vec![76.0, 1.0, 18_000.0]);
    }

    #[test]
    fn test_missing_columns_default_to_zero() {
        let mut record = IntakeRecord::new();
        record.insert("age", 82);

        let cols = columns(&["age", "sp_diabetes", "outpatient_visits"]);
        assert_eq!(feature_vector(&record, &cols), vec![82.0, 0.0, 0.0]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut record = IntakeRecord::new();
        record.insert("age", 70);
        record.insert("name", "Jane Doe");
        record.insert("desynpuf_id", "A1B2C3");

        let cols = columns(&["age"]);
        assert_eq!(feature_vector(&record, &cols), vec![70.0]);
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let mut record = IntakeRecord::new();
        record.insert("INPATIENT_ADMISSIONS", 3);

        let cols = columns(&["inpatient_admissions"]);
        assert_eq!(feature_vector(&record, &cols), vec![3.0]);
    }

    #[test]
    fn test_empty_columns() {
        let record = IntakeRecord::new();
        assert!(feature_vector(&record, &[]).is_empty());
    }
}
