use crate::reports;
use clap::Args;
use formcheck::api;
use formcheck::config::{OutputArgs, OutputFormat, SelectionArgs, SignalArgs};
use formcheck::FcResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Capture file (JSON)
    pub file: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub signals: SignalArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: AnalyzeArgs) -> FcResult<()> {
    let report = api::analyze_file(
        &args.file,
        args.selection.activity,
        &args.signals.to_signals(),
    )?;

    match args.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => reports::print_form_report(&report),
    }
    Ok(())
}
