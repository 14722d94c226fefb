use clap::{Parser, Subcommand};

use self::{
    explain::ExplainArg, generate_cohort::GenerateCohortArg, inspect_model::InspectModelArg,
    score::ScoreArg,
};

mod explain;
mod generate_cohort;
mod inspect_model;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score one patient intake record against the loaded risk models
    Score(#[clap(flatten)] ScoreArg),
    /// Attribute mortality risk across a patient's present conditions
    Explain(#[clap(flatten)] ExplainArg),
    /// Print metadata of a persisted model bundle
    InspectModel(#[clap(flatten)] InspectModelArg),
    /// Generate a synthetic patient cohort for demos and fixtures
    GenerateCohort(#[clap(flatten)] GenerateCohortArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Explain(arg) => explain::run(&arg)?,
        Mode::InspectModel(arg) => inspect_model::run(&arg)?,
        Mode::GenerateCohort(arg) => generate_cohort::run(&arg)?,
    }
    Ok(())
}
