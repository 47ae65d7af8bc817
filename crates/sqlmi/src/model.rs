use serde::{Deserialize, Serialize};
use sqlmi_core::{IdentityOutput, Validation, ValidationError};
use std::collections::BTreeMap;

/// User-supplied lookup keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,
    pub resource_group_name: String,
    /// Informational only. Never compared with the fetched record.
    #[serde(default)]
    pub location: Option<String>,
}

impl Input {
    pub fn new(name: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_group_name: resource_group_name.into(),
            location: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        Validation::ServerName.check("name", &self.name)?;
        Validation::ResourceGroupName.check("resource_group_name", &self.resource_group_name)
    }
}

/// Every field the data source produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    pub resource_group_name: String,
    pub location: String,
    pub sku_name: String,
    pub administrator_login: String,
    pub vcores: i64,
    pub storage_size_in_gb: i64,
    pub license_type: String,
    pub subnet_id: String,
    pub collation: String,
    pub public_data_endpoint_enabled: bool,
    pub minimum_tls_version: String,
    pub proxy_override: String,
    pub timezone_id: String,
    pub fqdn: String,
    pub dns_zone_partner_id: String,
    pub storage_account_type: String,
    pub identity: Vec<IdentityOutput>,
    pub tags: BTreeMap<String, String>,
}

/// The identifier the host tool persists between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    id: Option<String>,
}

impl ResourceState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn is_tracked(&self) -> bool {
        self.id.is_some()
    }
}
