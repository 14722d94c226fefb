use std::{path::PathBuf, sync::Arc};

use carestrat_features::IntakeRecord;
use carestrat_scoring::ConditionAttributor;

use crate::{model, util, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExplainArg {
    /// Path to the fitted feature transform JSON
    #[arg(long)]
    transform: PathBuf,
    /// Path to the risk model bundle JSON
    #[arg(long)]
    models: PathBuf,
    /// Patient record JSON file (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Standalone explainability: attribution over an already-persisted record,
/// without re-running the full scoring pipeline.
pub(crate) fn run(arg: &ExplainArg) -> anyhow::Result<()> {
    let bundle = model::open_bundle(&arg.transform, &arg.models)?;
    let record: IntakeRecord = util::read_json_input("patient record", arg.input.as_deref())?;

    let attributor = ConditionAttributor::new(Arc::new(bundle));
    let impacts = attributor.condition_impacts(&record);

    Output::save_json(&impacts, arg.output.clone())
}
