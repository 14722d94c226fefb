use std::{path::PathBuf, sync::Arc};

use carestrat_features::IntakeRecord;
use carestrat_scoring::ScoringPipeline;

use crate::{model, util, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Path to the fitted feature transform JSON
    #[arg(long)]
    transform: PathBuf,
    /// Path to the risk model bundle JSON
    #[arg(long)]
    models: PathBuf,
    /// Intake record JSON file (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let bundle = model::open_bundle(&arg.transform, &arg.models)?;
    let record: IntakeRecord = util::read_json_input("intake record", arg.input.as_deref())?;

    let pipeline = ScoringPipeline::new(Arc::new(bundle));
    let result = pipeline.score(&record)?;

    Output::save_json(&result, arg.output.clone())
}
