//! Patient risk scoring on top of a loaded model bundle.
//!
//! This crate composes the feature layer and the model layer into the
//! operations external callers invoke:
//!
//! - [`scorer::RiskScorer`] - derive, normalize, predict: one
//!   [`ScoreSet`](carestrat_model::ScoreSet) per patient
//! - [`tier`] - the fixed 5-tier intervention policy over the primary
//!   (30-day hospitalization) score, and the cost-savings arithmetic
//! - [`attribution`] - apportioning mortality risk across a patient's
//!   present chronic conditions from the mortality classifier's learned
//!   weights
//! - [`pipeline::ScoringPipeline`] - the single entry point producing a
//!   complete [`ScoringResult`](pipeline::ScoringResult)
//!
//! Everything here is synchronous and performs no I/O: a scoring call runs to
//! completion on the calling thread, and an abandoned call leaves no trace.
//! The bundle is injected (`Arc<ModelBundle>`) by the process's composition
//! root - load once, share everywhere.

pub use self::{
    attribution::{ConditionAttributor, ConditionImpactMap},
    pipeline::{ScoringPipeline, ScoringResult},
    scorer::RiskScorer,
    tier::{PreventionEstimate, RiskTier, TierPolicy},
};

pub mod attribution;
pub mod pipeline;
pub mod scorer;
pub mod tier;
