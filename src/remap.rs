//! Dimension remapping stages.
//!
//! Both stages add new columns holding the remapped values and retain the
//! originals untouched; no row is added, removed, or reordered. Lookups are
//! replace-or-keep, so a value outside its mapping table passes through
//! unchanged rather than erroring.

use itertools::Itertools;

use crate::{error::RollupError, frame::Frame, mappings::MappingTable};

pub const CHANNEL_COLUMN: &str = "Channel";
pub const LANGUAGE_COLUMN: &str = "Language";
pub const CUSTOM_FIELDS_COLUMN: &str = "CustomFields";

pub const CHANNEL_OUT_COLUMN: &str = "ChannelB";
pub const LANGUAGE_OUT_COLUMN: &str = "LanguageB";
pub const CUSTOM_FIELDS_OUT_COLUMN: &str = "CustomFieldsB";

pub const TOKEN_DELIMITER: &str = ";";

/// Adds `ChannelB` and `LanguageB` columns holding the remapped channel and
/// language values.
pub fn remap_channel_language(
    frame: &Frame,
    channel: &MappingTable,
    language: &MappingTable,
) -> Result<Frame, RollupError> {
    frame.ensure_not_empty()?;
    let indices = frame.require_columns(&[CHANNEL_COLUMN, LANGUAGE_COLUMN])?;
    channel.ensure_usable(CHANNEL_COLUMN)?;
    language.ensure_usable(LANGUAGE_COLUMN)?;

    let channels = remapped_column(frame, indices[0], channel);
    let languages = remapped_column(frame, indices[1], language);
    Ok(frame
        .with_column(CHANNEL_OUT_COLUMN, channels)
        .with_column(LANGUAGE_OUT_COLUMN, languages))
}

/// Adds a `CustomFieldsB` column holding the token-wise remapped
/// custom-fields string.
pub fn remap_custom_fields(
    frame: &Frame,
    mapping: &MappingTable,
) -> Result<Frame, RollupError> {
    frame.ensure_not_empty()?;
    let indices = frame.require_columns(&[CUSTOM_FIELDS_COLUMN])?;
    mapping.ensure_usable(CUSTOM_FIELDS_COLUMN)?;

    let values = frame
        .rows()
        .iter()
        .map(|row| remap_tokens(cell(row, indices[0]), mapping))
        .collect();
    Ok(frame.with_column(CUSTOM_FIELDS_OUT_COLUMN, values))
}

/// Remaps each `;`-delimited token independently, preserving token order and
/// count. Tokens absent from the mapping pass through unchanged, including
/// empty tokens left by a trailing delimiter.
pub fn remap_tokens(raw: &str, mapping: &MappingTable) -> String {
    raw.split(TOKEN_DELIMITER)
        .map(|token| mapping.resolve(token))
        .join(TOKEN_DELIMITER)
}

fn remapped_column(frame: &Frame, index: usize, mapping: &MappingTable) -> Vec<String> {
    frame
        .rows()
        .iter()
        .map(|row| mapping.resolve(cell(row, index)).to_string())
        .collect()
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
