use anyhow::Result;
use tracing::{info, info_span};
use workout_cli::pipeline::flatten_inputs;
use workout_cli::types::FlattenRun;
use workout_model::ParsedPart;
use workout_output::{OutputPaths, write_views};
use workout_parse::parse_cell;

use crate::cli::{FlattenArgs, ParseCellArgs};

/// What `flatten` did, for the summary.
#[derive(Debug)]
pub struct FlattenOutcome {
    pub run: FlattenRun,
    /// `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}

pub fn run_flatten(args: &FlattenArgs) -> Result<FlattenOutcome> {
    let span = info_span!("flatten_command", input_count = args.inputs.len());
    let _guard = span.enter();

    let config = args.parser.to_config();
    let run = flatten_inputs(&args.inputs, &config)?;

    if args.dry_run {
        info!(row_count = run.rows.len(), "dry run; no files written");
        return Ok(FlattenOutcome { run, outputs: None });
    }

    let paths = OutputPaths::from_prefix(&args.out_prefix);
    write_views(&run.rows, &paths)?;
    Ok(FlattenOutcome {
        run,
        outputs: Some(paths),
    })
}

pub fn run_parse_cell(args: &ParseCellArgs) -> Vec<ParsedPart> {
    parse_cell(&args.text, &args.parser.to_config())
}
