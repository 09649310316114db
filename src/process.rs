//! The `process` subcommand: the full remap-and-rollup pipeline.
//!
//! The stage order is fixed: load, build mappings, remap channel/language,
//! remap custom fields, aggregate dimension groups, annotate point totals,
//! write. Every stage consumes an immutable frame and produces a new one, so
//! a failing stage leaves no partial output behind.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    aggregate, cli::ProcessArgs, error::RollupError, frame::Frame, io_utils,
    mappings::MappingSet, remap, table,
};

pub fn execute(args: &ProcessArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let mappings_delimiter = io_utils::resolve_input_delimiter(&args.mappings, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let output_path = args.output.as_deref();
    let writing_to_stdout = output_path.is_none_or(io_utils::is_dash);
    let output_delimiter =
        io_utils::resolve_output_delimiter(output_path, args.output_delimiter, delimiter);

    info!(
        "Processing '{}' with mappings '{}' -> {} (delimiter '{}')",
        args.input.display(),
        args.mappings.display(),
        output_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".into()),
        crate::printable_delimiter(delimiter)
    );

    let activity = io_utils::read_frame(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading activity log from {:?}", args.input))?;
    let reference = io_utils::read_frame(&args.mappings, mappings_delimiter, encoding)
        .with_context(|| format!("Loading mapping reference from {:?}", args.mappings))?;

    let mut result = run_pipeline(&activity, &reference)?;
    if let Some(limit) = args.limit {
        result = result.truncated(limit);
    }

    if args.table && !writing_to_stdout {
        debug!("--table requested but output will remain CSV because a file path was provided");
    }
    if args.table && writing_to_stdout {
        table::print_table(result.headers(), result.rows());
    } else {
        io_utils::write_frame(&result, output_path, output_delimiter)?;
    }
    info!(
        "Wrote {} aggregated row(s) from {} input row(s)",
        result.row_count(),
        activity.row_count()
    );
    Ok(())
}

/// Runs the remap, aggregation, and annotation stages over already-loaded
/// frames. Exposed for library callers; file I/O stays with [`execute`].
pub fn run_pipeline(activity: &Frame, reference: &Frame) -> Result<Frame, RollupError> {
    info!("Building mapping tables");
    let mappings = MappingSet::from_frame(reference)?;
    debug!(
        "Mapping table sizes: channel={}, language={}, custom-fields={}",
        mappings.channel.len(),
        mappings.language.len(),
        mappings.custom_fields.len()
    );

    info!("Remapping channel and language columns");
    let remapped = remap::remap_channel_language(activity, &mappings.channel, &mappings.language)?;

    info!("Remapping custom-fields tokens");
    let remapped = remap::remap_custom_fields(&remapped, &mappings.custom_fields)?;

    info!("Aggregating duplicate dimension groups");
    let aggregated = aggregate::aggregate_dimensions(&remapped)?;

    info!("Annotating per-id point totals");
    aggregate::annotate_total_points(&aggregated)
}
