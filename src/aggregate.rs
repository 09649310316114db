//! Collapses rows that share a post-remap dimension tuple and annotates the
//! result with per-id point totals.
//!
//! Groups are keyed by `(id, ChannelB, LanguageB, CustomFieldsB)` and emitted
//! in order of each tuple's first appearance, not sorted. Within a group the
//! points fact sums by integer addition and the duration fact sums in total
//! seconds, re-encoded to text once per group.

use std::collections::HashMap;

use crate::{
    duration::{encode_duration, parse_duration},
    error::RollupError,
    frame::Frame,
    remap::{
        CHANNEL_COLUMN, CHANNEL_OUT_COLUMN, CUSTOM_FIELDS_COLUMN, CUSTOM_FIELDS_OUT_COLUMN,
        LANGUAGE_COLUMN, LANGUAGE_OUT_COLUMN,
    },
};

pub const ID_COLUMN: &str = "id";
pub const DURATION_COLUMN: &str = "Duration";
pub const POINTS_COLUMN: &str = "PointsGained";
pub const TOTAL_POINTS_COLUMN: &str = "TotalPointsGained";

const KEY_SEPARATOR: &str = "\u{1f}";

struct DimensionGroup {
    id: String,
    channel: String,
    language: String,
    custom_fields: String,
    points: i64,
    seconds: i64,
}

/// Collapses each set of rows sharing a post-remap dimension tuple into one
/// row, renaming the remapped columns back onto the original dimension names.
/// Output order is the order of first appearance of each distinct tuple.
pub fn aggregate_dimensions(frame: &Frame) -> Result<Frame, RollupError> {
    frame.ensure_not_empty()?;
    let indices = frame.require_columns(&[
        DURATION_COLUMN,
        ID_COLUMN,
        CHANNEL_OUT_COLUMN,
        LANGUAGE_OUT_COLUMN,
        CUSTOM_FIELDS_OUT_COLUMN,
        POINTS_COLUMN,
    ])?;
    let duration_idx = indices[0];
    let id_idx = indices[1];
    let channel_idx = indices[2];
    let language_idx = indices[3];
    let custom_fields_idx = indices[4];
    let points_idx = indices[5];

    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DimensionGroup> = Vec::new();

    for (row_idx, row) in frame.rows().iter().enumerate() {
        let seconds = parse_duration(cell(row, duration_idx))?;
        let points = parse_points(cell(row, points_idx), row_idx)?;
        let key = [
            cell(row, id_idx),
            cell(row, channel_idx),
            cell(row, language_idx),
            cell(row, custom_fields_idx),
        ]
        .join(KEY_SEPARATOR);

        match slots.get(&key) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.points += points;
                group.seconds += seconds;
            }
            None => {
                slots.insert(key, groups.len());
                groups.push(DimensionGroup {
                    id: cell(row, id_idx).to_string(),
                    channel: cell(row, channel_idx).to_string(),
                    language: cell(row, language_idx).to_string(),
                    custom_fields: cell(row, custom_fields_idx).to_string(),
                    points,
                    seconds,
                });
            }
        }
    }

    let mut result = Frame::new([
        ID_COLUMN,
        CHANNEL_COLUMN,
        LANGUAGE_COLUMN,
        CUSTOM_FIELDS_COLUMN,
        DURATION_COLUMN,
        POINTS_COLUMN,
    ]);
    for group in groups {
        result.push_row(vec![
            group.id,
            group.channel,
            group.language,
            group.custom_fields,
            encode_duration(group.seconds),
            group.points.to_string(),
        ]);
    }
    Ok(result)
}

/// Adds a `TotalPointsGained` column holding, for every row, the sum of
/// `PointsGained` across all rows sharing its id. A windowed sum: row count
/// is unchanged and re-running the annotation on its own output is a no-op.
pub fn annotate_total_points(frame: &Frame) -> Result<Frame, RollupError> {
    frame.ensure_not_empty()?;
    let indices = frame.require_columns(&[ID_COLUMN, POINTS_COLUMN])?;
    let id_idx = indices[0];
    let points_idx = indices[1];

    let mut totals: HashMap<&str, i64> = HashMap::new();
    for (row_idx, row) in frame.rows().iter().enumerate() {
        let points = parse_points(cell(row, points_idx), row_idx)?;
        *totals.entry(cell(row, id_idx)).or_insert(0) += points;
    }

    let values = frame
        .rows()
        .iter()
        .map(|row| totals[cell(row, id_idx)].to_string())
        .collect();
    Ok(frame.with_column(TOTAL_POINTS_COLUMN, values))
}

fn parse_points(raw: &str, row_idx: usize) -> Result<i64, RollupError> {
    raw.trim().parse::<i64>().map_err(|_| {
        RollupError::Format(format!(
            "Failed to parse {POINTS_COLUMN} '{raw}' in row {}",
            row_idx + 1
        ))
    })
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
