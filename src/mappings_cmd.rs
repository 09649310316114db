//! The `mappings` subcommand: inspect the lookup tables derived from a
//! reference file, as an ASCII table or JSON.

use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::MappingsArgs,
    io_utils,
    mappings::{CHANNEL_FIELD, CUSTOM_FIELDS_FIELD, LANGUAGE_FIELD, MappingSet},
    table,
};

pub fn execute(args: &MappingsArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.mappings, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let reference = io_utils::read_frame(&args.mappings, delimiter, encoding)
        .with_context(|| format!("Loading mapping reference from {:?}", args.mappings))?;
    let set = MappingSet::from_frame(&reference)?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&set).context("Serializing mapping tables")?;
        println!("{rendered}");
        return Ok(());
    }

    let headers = vec!["field".to_string(), "source".to_string(), "target".to_string()];
    let mut rows = Vec::new();
    for (field, mapping) in [
        (CHANNEL_FIELD, &set.channel),
        (LANGUAGE_FIELD, &set.language),
        (CUSTOM_FIELDS_FIELD, &set.custom_fields),
    ] {
        for (source, target) in mapping.sorted_entries() {
            rows.push(vec![field.to_string(), source.to_string(), target.to_string()]);
        }
    }
    table::print_table(&headers, &rows);
    info!("Listed {} mapping(s) from {:?}", rows.len(), args.mappings);
    Ok(())
}
