use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let frame = io_utils::read_frame(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading {:?}", args.input))?;
    let preview = frame.truncated(args.rows);
    table::print_table(preview.headers(), preview.rows());
    info!(
        "Displayed {} of {} row(s) from {:?}",
        preview.row_count(),
        frame.row_count(),
        args.input
    );
    Ok(())
}
