//! Patient intake records with case-insensitive field access.
//!
//! Intake data arrives from heterogeneous sources (upload forms, persisted
//! analysis rows) whose field names disagree on casing (`SP_CHF` vs `sp_chf`,
//! `Age` vs `age`) and whose values may be strings even when they mean
//! numbers. [`IntakeRecord`] canonicalizes names to lowercase at insertion,
//! and [`FeatureValue::coerce_text`] implements the numeric coercion rules for
//! string values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single scalar intake value.
///
/// Deserializes untagged from JSON: integers stay integers, other numbers
/// become floats, strings stay text. Text is the passthrough representation
/// for identifiers and names that are not model features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FeatureValue {
    /// Coerces a raw string the way upload forms are interpreted: all-digit
    /// strings become integers, float-parseable strings become floats, and
    /// everything else stays text.
    ///
    /// # Examples
    ///
    /// ```
    /// use carestrat_features::FeatureValue;
    ///
    /// assert_eq!(FeatureValue::coerce_text("76"), FeatureValue::Int(76));
    /// assert_eq!(FeatureValue::coerce_text("12.5"), FeatureValue::Float(12.5));
    /// assert_eq!(
    ///     FeatureValue::coerce_text("A1B2"),
    ///     FeatureValue::Text("A1B2".to_owned()),
    /// );
    /// ```
    #[must_use]
    pub fn coerce_text(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(int) = raw.parse::<i64>() {
                return FeatureValue::Int(int);
            }
        }
        match raw.parse::<f64>() {
            Ok(float) => FeatureValue::Float(float),
            Err(_) => FeatureValue::Text(raw.to_owned()),
        }
    }

    /// Applies [`coerce_text`](Self::coerce_text) to text values and leaves
    /// numeric values untouched.
    #[must_use]
    pub fn coerced(&self) -> Self {
        match self {
            FeatureValue::Text(raw) => Self::coerce_text(raw),
            value => value.clone(),
        }
    }

    /// The numeric reading of this value, if it has one. Text never reads as
    /// a number; coercion happens explicitly via [`coerce_text`](Self::coerce_text).
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(int) => Some(*int as f64),
            FeatureValue::Float(float) => Some(*float),
            FeatureValue::Text(_) => None,
        }
    }

    /// Whether this value is the set state of a 0/1 flag.
    #[must_use]
    pub fn is_set_flag(&self) -> bool {
        self.as_f64().is_some_and(|v| (v - 1.0).abs() < f64::EPSILON)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Int(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Float(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_owned())
    }
}

/// A patient intake record: field name to scalar value, with field names
/// folded to lowercase at every insertion point.
///
/// Lookups are therefore case-insensitive, and serializing a record always
/// produces canonical lowercase field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, FeatureValue>",
    into = "BTreeMap<String, FeatureValue>"
)]
pub struct IntakeRecord {
    fields: BTreeMap<String, FeatureValue>,
}

impl IntakeRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, folding the name to lowercase. A later insertion with
    /// the same name (in any casing) wins.
    pub fn insert<V>(&mut self, name: &str, value: V)
    where
        V: Into<FeatureValue>,
    {
        self.fields.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Case-insensitive field lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.fields.get(&name.to_ascii_lowercase())
        } else {
            self.fields.get(name)
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The numeric reading of a field, if present and numeric.
    #[must_use]
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FeatureValue::as_f64)
    }

    /// The numeric reading of a field, defaulting to 0 when the field is
    /// absent or non-numeric. This is the reading used for every threshold
    /// comparison and model feature.
    #[must_use]
    pub fn numeric_or_zero(&self, name: &str) -> f64 {
        self.numeric(name).unwrap_or(0.0)
    }

    /// Whether a field holds a set 0/1 flag.
    #[must_use]
    pub fn flag_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(FeatureValue::is_set_flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<BTreeMap<String, FeatureValue>> for IntakeRecord {
    fn from(fields: BTreeMap<String, FeatureValue>) -> Self {
        let mut record = IntakeRecord::new();
        for (name, value) in fields {
            record.insert(&name, value);
        }
        record
    }
}

impl From<IntakeRecord> for BTreeMap<String, FeatureValue> {
    fn from(record: IntakeRecord) -> Self {
        record.fields
    }
}

impl<S> FromIterator<(S, FeatureValue)> for IntakeRecord
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, FeatureValue)>,
    {
        let mut record = IntakeRecord::new();
        for (name, value) in iter {
            record.insert(name.as_ref(), value);
        }
        record
    }
}
