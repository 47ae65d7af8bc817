use crate::schema::{FieldKind, FieldSchema};
use crate::MappingError;
use std::collections::BTreeMap;

pub const MAX_TAGS: usize = 50;
pub const MAX_TAG_KEY_LEN: usize = 512;
pub const MAX_TAG_VALUE_LEN: usize = 256;

/// Drops null-valued tags and unwraps the rest.
pub fn flatten_tags(tags: &BTreeMap<String, Option<String>>) -> BTreeMap<String, String> {
    tags.iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.clone(), v.clone())))
        .collect()
}

pub fn validate_tags(tags: &BTreeMap<String, String>) -> Result<(), MappingError> {
    if tags.len() > MAX_TAGS {
        return Err(MappingError::TooManyTags {
            max: MAX_TAGS,
            count: tags.len(),
        });
    }
    for (key, value) in tags {
        if key.chars().count() > MAX_TAG_KEY_LEN {
            return Err(MappingError::TagKeyTooLong {
                key: key.clone(),
                max: MAX_TAG_KEY_LEN,
            });
        }
        if value.chars().count() > MAX_TAG_VALUE_LEN {
            return Err(MappingError::TagValueTooLong {
                key: key.clone(),
                max: MAX_TAG_VALUE_LEN,
            });
        }
    }
    Ok(())
}

/// Data sources expose tags read-only.
pub fn schema() -> FieldSchema {
    FieldSchema::computed(FieldKind::Map(Box::new(FieldKind::String)))
}
