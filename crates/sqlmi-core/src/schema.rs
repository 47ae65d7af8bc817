//! Field descriptions used to register a data source with the host tool.
//!
//! These are plain data. Nothing here reads or writes values; the typed
//! input and output records carry the values themselves.

use crate::validate::{validate_resource_group_name, validate_server_name, ValidationError};
use std::collections::BTreeMap;

pub type Schema = BTreeMap<&'static str, FieldSchema>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int,
    Bool,
    Map(Box<FieldKind>),
    List {
        max_items: Option<usize>,
        element: Box<FieldKind>,
    },
    Block(Schema),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    ServerName,
    ResourceGroupName,
}

impl Validation {
    pub fn check(self, field: &str, value: &str) -> Result<(), ValidationError> {
        match self {
            Validation::ServerName => validate_server_name(field, value),
            Validation::ResourceGroupName => validate_resource_group_name(field, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub role: FieldRole,
    pub validation: Option<Validation>,
}

impl FieldSchema {
    pub fn required(kind: FieldKind) -> Self {
        Self {
            kind,
            role: FieldRole::Required,
            validation: None,
        }
    }

    pub fn optional(kind: FieldKind) -> Self {
        Self {
            kind,
            role: FieldRole::Optional,
            validation: None,
        }
    }

    pub fn computed(kind: FieldKind) -> Self {
        Self {
            kind,
            role: FieldRole::Computed,
            validation: None,
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn is_computed(&self) -> bool {
        self.role == FieldRole::Computed
    }
}

/// Data sources accept a location as an informational filter and report the
/// normalized location of what they find.
pub fn location_for_data_source() -> FieldSchema {
    FieldSchema::optional(FieldKind::String)
}

pub fn resource_group_name_for_data_source() -> FieldSchema {
    FieldSchema::required(FieldKind::String).with_validation(Validation::ResourceGroupName)
}
