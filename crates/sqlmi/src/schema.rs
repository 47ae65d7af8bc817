use crate::Timeouts;
use sqlmi_core::schema::{location_for_data_source, resource_group_name_for_data_source};
use sqlmi_core::{identity, tags, FieldKind, FieldSchema, Schema, Validation};

pub const TYPE_NAME: &str = "azurerm_sql_managed_instance";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceDefinition {
    pub type_name: &'static str,
    pub schema: Schema,
    pub timeouts: Timeouts,
}

pub fn data_source() -> DataSourceDefinition {
    let computed = FieldSchema::computed;

    let schema: Schema = [
        (
            "name",
            FieldSchema::required(FieldKind::String).with_validation(Validation::ServerName),
        ),
        ("location", location_for_data_source()),
        ("resource_group_name", resource_group_name_for_data_source()),
        ("sku_name", computed(FieldKind::String)),
        ("administrator_login", computed(FieldKind::String)),
        ("vcores", computed(FieldKind::Int)),
        ("storage_size_in_gb", computed(FieldKind::Int)),
        ("license_type", computed(FieldKind::String)),
        ("subnet_id", computed(FieldKind::String)),
        ("collation", computed(FieldKind::String)),
        ("public_data_endpoint_enabled", computed(FieldKind::Bool)),
        ("minimum_tls_version", computed(FieldKind::String)),
        ("proxy_override", computed(FieldKind::String)),
        ("timezone_id", computed(FieldKind::String)),
        ("fqdn", computed(FieldKind::String)),
        ("dns_zone_partner_id", computed(FieldKind::String)),
        ("identity", identity::schema()),
        ("storage_account_type", computed(FieldKind::String)),
        ("tags", tags::schema()),
    ]
    .into_iter()
    .collect();

    DataSourceDefinition {
        type_name: TYPE_NAME,
        schema,
        timeouts: Timeouts::default(),
    }
}
