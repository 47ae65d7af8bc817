//! Core domain types and client traits for sqlmi-rs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

pub mod id;
pub mod identity;
pub mod location;
pub mod schema;
pub mod tags;
pub mod validate;

pub use id::{ManagedInstanceId, ParseError};
pub use identity::{flatten_identity, IdentityOutput};
pub use location::normalize_location;
pub use schema::{FieldKind, FieldRole, FieldSchema, Schema, Validation};
pub use tags::{flatten_tags, validate_tags};
pub use validate::{validate_resource_group_name, validate_server_name, ValidationError};

/// A managed instance as returned by the management API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedInstance {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub sku: Option<Sku>,
    pub identity: Option<ResourceIdentity>,
    pub properties: Option<ManagedInstanceProperties>,
    pub tags: Option<BTreeMap<String, Option<String>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    pub name: Option<String>,
    pub tier: Option<String>,
    pub family: Option<String>,
    pub capacity: Option<i64>,
}

/// The managed identity attached to an instance. `kind` is the raw wire
/// string and is passed through to outputs unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentity {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub principal_id: Option<String>,
    pub tenant_id: Option<String>,
    pub user_assigned_identities: Option<BTreeMap<String, UserAssignedIdentity>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignedIdentity {
    pub principal_id: Option<String>,
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedInstanceProperties {
    pub administrator_login: Option<String>,
    pub subnet_id: Option<String>,
    pub license_type: Option<String>,
    pub v_cores: Option<i64>,
    #[serde(rename = "storageSizeInGB")]
    pub storage_size_in_gb: Option<i64>,
    pub collation: Option<String>,
    pub public_data_endpoint_enabled: Option<bool>,
    pub minimal_tls_version: Option<String>,
    pub proxy_override: Option<String>,
    pub timezone_id: Option<String>,
    pub fully_qualified_domain_name: Option<String>,
    pub dns_zone: Option<String>,
    pub dns_zone_partner: Option<String>,
    pub storage_account_type: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub base_url: Option<Url>,
    pub subscription_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("resource not found")]
    NotFound,
    #[error("authentication error")]
    Authentication,
    #[error("throttled")]
    Throttled,
    #[error("provider error (status {status}, code {code}): {message}")]
    Provider {
        status: u16,
        code: String,
        message: String,
    },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }
}

/// Errors raised while flattening a fetched record into output fields.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("a maximum of {max} tags can be applied, got {count}")]
    TooManyTags { max: usize, count: usize },
    #[error("tag key {key:?} exceeds {max} characters")]
    TagKeyTooLong { key: String, max: usize },
    #[error("value for tag {key:?} exceeds {max} characters")]
    TagValueTooLong { key: String, max: usize },
}

/// Read access to managed instances within a single subscription.
#[async_trait]
pub trait ManagedInstancesClient: Send + Sync {
    fn info(&self) -> ClientInfo;

    /// Fetches one instance. Absence is reported as [`ClientError::NotFound`].
    async fn get(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<ManagedInstance, ClientError>;
}
