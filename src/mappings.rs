//! Mapping tables derived from the reference dataset.
//!
//! The reference table carries one row per mapping entry: `Field` selects
//! which table the entry belongs to, `SoftwareA` holds the source-system key
//! and `SoftwareB` the target-system value. Filtering on a field name no row
//! references yields an empty table rather than an error; emptiness is only
//! rejected once a table is actually asked to drive a remap.

use std::collections::HashMap;

use serde::Serialize;

use crate::{error::RollupError, frame::Frame};

pub const FIELD_COLUMN: &str = "Field";
pub const SOURCE_COLUMN: &str = "SoftwareA";
pub const TARGET_COLUMN: &str = "SoftwareB";

pub const CHANNEL_FIELD: &str = "Channel";
pub const LANGUAGE_FIELD: &str = "Language";
pub const CUSTOM_FIELDS_FIELD: &str = "CustomFields";

/// Immutable string-to-string lookup for one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    /// Folds entries in iteration order; a repeated source key keeps the
    /// last-seen target.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        MappingTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Replace-or-keep lookup: returns the mapped value when `value` is a
    /// known key and the original value otherwise.
    pub fn resolve<'a>(&'a self, value: &'a str) -> &'a str {
        self.entries.get(value).map(String::as_str).unwrap_or(value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remap preconditions require a usable, non-empty table.
    pub fn ensure_usable(&self, label: &str) -> Result<(), RollupError> {
        if self.entries.is_empty() {
            Err(RollupError::Validation(format!(
                "{label} mapping table must be a non-empty map of strings"
            )))
        } else {
            Ok(())
        }
    }

    /// Entries in source-key order, for deterministic rendering.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries = self
            .entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// The three per-dimension lookup tables built once per run.
#[derive(Debug, Clone, Serialize)]
pub struct MappingSet {
    pub channel: MappingTable,
    pub language: MappingTable,
    pub custom_fields: MappingTable,
}

impl MappingSet {
    pub fn from_frame(reference: &Frame) -> Result<Self, RollupError> {
        reference.ensure_not_empty()?;
        let indices =
            reference.require_columns(&[FIELD_COLUMN, SOURCE_COLUMN, TARGET_COLUMN])?;
        let (field_idx, source_idx, target_idx) = (indices[0], indices[1], indices[2]);

        let table_for = |field: &str| {
            MappingTable::from_entries(reference.rows().iter().filter_map(|row| {
                (row.get(field_idx).map(String::as_str) == Some(field)).then(|| {
                    (
                        row.get(source_idx).cloned().unwrap_or_default(),
                        row.get(target_idx).cloned().unwrap_or_default(),
                    )
                })
            }))
        };

        Ok(MappingSet {
            channel: table_for(CHANNEL_FIELD),
            language: table_for(LANGUAGE_FIELD),
            custom_fields: table_for(CUSTOM_FIELDS_FIELD),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_frame() -> Frame {
        let mut frame = Frame::new([FIELD_COLUMN, SOURCE_COLUMN, TARGET_COLUMN]);
        for (field, source, target) in [
            ("Channel", "channel1", "Channel1"),
            ("Channel", "channel2", "Channel2"),
            ("Language", "en", "en-US"),
            ("Language", "en_us", "en-US"),
            ("CustomFields", "Area=account", "area=Accounting"),
        ] {
            frame.push_row(vec![field.to_string(), source.to_string(), target.to_string()]);
        }
        frame
    }

    #[test]
    fn from_frame_splits_tables_by_field() {
        let set = MappingSet::from_frame(&reference_frame()).unwrap();
        assert_eq!(set.channel.len(), 2);
        assert_eq!(set.channel.get("channel1"), Some("Channel1"));
        assert_eq!(set.language.get("en_us"), Some("en-US"));
        assert_eq!(set.custom_fields.get("Area=account"), Some("area=Accounting"));
    }

    #[test]
    fn unknown_field_rows_land_nowhere() {
        let mut frame = reference_frame();
        frame.push_row(vec![
            "Region".to_string(),
            "emea".to_string(),
            "EMEA".to_string(),
        ]);
        let set = MappingSet::from_frame(&frame).unwrap();
        assert_eq!(set.channel.len(), 2);
        assert_eq!(set.language.len(), 2);
        assert_eq!(set.custom_fields.len(), 1);
    }

    #[test]
    fn duplicate_source_keys_last_seen_wins() {
        let mut frame = reference_frame();
        frame.push_row(vec![
            "Channel".to_string(),
            "channel1".to_string(),
            "Channel1-Rebranded".to_string(),
        ]);
        let set = MappingSet::from_frame(&frame).unwrap();
        assert_eq!(set.channel.get("channel1"), Some("Channel1-Rebranded"));
    }

    #[test]
    fn empty_reference_is_rejected() {
        let frame = Frame::new([FIELD_COLUMN, SOURCE_COLUMN, TARGET_COLUMN]);
        let err = MappingSet::from_frame(&frame).unwrap_err();
        assert!(matches!(err, RollupError::Validation(_)));
    }

    #[test]
    fn missing_target_column_is_rejected() {
        let mut frame = Frame::new([FIELD_COLUMN, SOURCE_COLUMN]);
        frame.push_row(vec!["Channel".to_string(), "channel1".to_string()]);
        let err = MappingSet::from_frame(&frame).unwrap_err();
        assert_eq!(
            err,
            RollupError::Validation("Table must contain column(s): SoftwareB".to_string())
        );
    }

    #[test]
    fn resolve_keeps_unknown_values() {
        let set = MappingSet::from_frame(&reference_frame()).unwrap();
        assert_eq!(set.channel.resolve("channel1"), "Channel1");
        assert_eq!(set.channel.resolve("channel9"), "channel9");
    }

    #[test]
    fn ensure_usable_rejects_empty_tables() {
        let empty = MappingTable::default();
        assert!(empty.ensure_usable("Channel").is_err());
        let set = MappingSet::from_frame(&reference_frame()).unwrap();
        assert!(set.channel.ensure_usable("Channel").is_ok());
    }
}
