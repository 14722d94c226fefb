//! Intake feature handling for clinical risk scoring.
//!
//! This crate turns an arbitrary patient intake record into the exact ordered
//! feature vector a fitted risk model expects. It knows nothing about models
//! themselves; it only prepares their input.
//!
//! # Processing Pipeline
//!
//! Intake records pass through three steps:
//!
//! 1. **Coercion** ([`record`]): field names are folded to lowercase and
//!    numeric-looking string values become numbers
//! 2. **Derivation** ([`derive`]): engineered features (age bands, condition
//!    flags, utilization flags) are computed from the raw fields
//! 3. **Normalization** ([`normalize`]): the enriched record is projected onto
//!    a model's ordered feature-column list, absent columns defaulting to zero
//!
//! The chronic-condition vocabulary shared by all three steps lives in
//! [`conditions`].

pub use self::{
    conditions::{ConditionCode, PresentConditions, present_conditions},
    record::{FeatureValue, IntakeRecord},
};

pub mod conditions;
pub mod derive;
pub mod normalize;
pub mod record;
