use crate::reports;
use clap::Args;
use formcheck::api;
use formcheck::config::{OutputArgs, OutputFormat, SelectionArgs};
use formcheck::{FcResult, FormCheckError};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Capture files (JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: BatchArgs) -> FcResult<()> {
    let entries = api::analyze_batch(&args.files, args.selection.activity);

    match args.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Table => reports::print_batch_summary(&entries),
    }

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    if failed > 0 {
        return Err(FormCheckError::Validation(format!(
            "{} of {} captures could not be analyzed",
            failed,
            entries.len()
        )));
    }
    Ok(())
}
