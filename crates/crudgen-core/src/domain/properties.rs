//! Localization `.properties` content.
//!
//! Output is plain `key=value` lines under `#` banners. Field entries are
//! sorted by field name so regenerating the same type is byte-identical.

use std::fmt::Write as _;

use crate::domain::{
    entities::field_descriptor::FieldDescriptor,
    error::DomainError,
    resource_key::{generic_keys, instance_keys},
};

const TYPE_BANNER: &str = "#####################";
const COMMON_BANNER: &str = "###########################";
const SEPARATOR: &str = "#---------------------";

/// Per-type block: instance keys followed by one label and help key per field.
///
/// `fields` should be the skip-ignoring view selection; it is re-sorted by
/// name here.
pub fn type_properties(type_name: &str, fields: &[FieldDescriptor]) -> Result<String, DomainError> {
    let mut out = String::new();
    out.push_str(TYPE_BANNER);
    out.push_str("\n# ");
    out.push_str(type_name);
    out.push('\n');
    out.push_str(TYPE_BANNER);
    out.push('\n');
    out.push_str("#labels used when creating / editing record\n");

    for key in instance_keys() {
        push_entry(&mut out, &key.key_for(type_name)?, &key.value_for(type_name)?);
    }
    out.push_str(SEPARATOR);
    out.push('\n');

    let mut sorted: Vec<&FieldDescriptor> = fields.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    for field in sorted {
        push_entry(&mut out, field.resource_key(), field.name_capitalized());
        push_entry(&mut out, field.resource_help_key(), "");
    }

    Ok(out)
}

/// Application-scope block holding every generic key.
pub fn common_properties() -> Result<String, DomainError> {
    let mut out = String::new();
    out.push_str(COMMON_BANNER);
    out.push_str("\n# \n# C O M M O N   P R O P S\n");
    out.push_str("# --------------------------\n");
    out.push_str("# place into application scope properties\n");
    out.push_str(COMMON_BANNER);
    out.push('\n');

    for key in generic_keys() {
        push_entry(&mut out, key.key()?, key.value()?);
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    Ok(out)
}

fn push_entry(out: &mut String, key: &str, value: &str) {
    // writing into a String cannot fail
    let _ = writeln!(out, "{key}={value}");
}

/// Caller-owned accumulator for the application-wide properties file.
///
/// Each appended block is followed by a blank line; [`content`](Self::content)
/// adds the final newline written on flush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedProperties {
    buffer: String,
    blocks: usize,
}

impl MergedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, block: &str) {
        self.buffer.push_str(block);
        self.buffer.push_str("\n\n");
        self.blocks += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }

    /// Number of appended blocks.
    pub fn len(&self) -> usize {
        self.blocks
    }

    /// Text written when the accumulator is flushed.
    pub fn content(&self) -> String {
        format!("{}\n", self.buffer)
    }
}
