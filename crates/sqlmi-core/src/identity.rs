//! Managed identity flattening, shared by every resource that can carry an
//! identity block.

use crate::schema::{FieldKind, FieldSchema, Schema};
use crate::ResourceIdentity;
use serde::{Deserialize, Serialize};

/// One element of the flattened `identity` output list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityOutput {
    #[serde(rename = "type")]
    pub kind: String,
    pub principal_id: String,
    pub tenant_id: String,
}

/// An absent identity, or one whose type is `None`, flattens to an empty
/// list. Anything else becomes exactly one element carrying the wire type
/// as is.
pub fn flatten_identity(identity: Option<&ResourceIdentity>) -> Vec<IdentityOutput> {
    let Some(identity) = identity else {
        return Vec::new();
    };
    let kind = identity.kind.clone().unwrap_or_default();
    if kind.trim().is_empty() || kind.trim().eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    vec![IdentityOutput {
        kind,
        principal_id: identity.principal_id.clone().unwrap_or_default(),
        tenant_id: identity.tenant_id.clone().unwrap_or_default(),
    }]
}

pub fn schema() -> FieldSchema {
    let element: Schema = [
        ("type", FieldSchema::computed(FieldKind::String)),
        ("principal_id", FieldSchema::computed(FieldKind::String)),
        ("tenant_id", FieldSchema::computed(FieldKind::String)),
    ]
    .into_iter()
    .collect();

    FieldSchema::computed(FieldKind::List {
        max_items: Some(1),
        element: Box::new(FieldKind::Block(element)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserAssignedIdentity;
    use std::collections::BTreeMap;

    fn identity(kind: &str) -> ResourceIdentity {
        ResourceIdentity {
            kind: Some(kind.to_string()),
            principal_id: Some("principal".to_string()),
            tenant_id: Some("tenant".to_string()),
            user_assigned_identities: None,
        }
    }

    #[test]
    fn absent_identity_flattens_to_empty_list() {
        assert!(flatten_identity(None).is_empty());
        assert!(flatten_identity(Some(&identity("None"))).is_empty());
        assert!(flatten_identity(Some(&ResourceIdentity::default())).is_empty());
    }

    #[test]
    fn system_assigned_identity_flattens_to_one_element() {
        let flat = flatten_identity(Some(&identity("SystemAssigned")));
        assert_eq!(
            flat,
            vec![IdentityOutput {
                kind: "SystemAssigned".to_string(),
                principal_id: "principal".to_string(),
                tenant_id: "tenant".to_string(),
            }]
        );
    }

    #[test]
    fn combined_identity_type_is_kept_verbatim() {
        let mut raw = identity("SystemAssigned,UserAssigned");
        raw.user_assigned_identities = Some(BTreeMap::from([(
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.ManagedIdentity/userAssignedIdentities/uai1".to_string(),
            UserAssignedIdentity::default(),
        )]));

        let flat = flatten_identity(Some(&raw));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].kind, "SystemAssigned,UserAssigned");
    }

    #[test]
    fn unrecognised_identity_type_passes_through() {
        for kind in ["UserAssigned, SystemAssigned", "Federated"] {
            let flat = flatten_identity(Some(&identity(kind)));
            assert_eq!(flat.len(), 1);
            assert_eq!(flat[0].kind, kind);
            assert_eq!(flat[0].principal_id, "principal");
        }
    }

    #[test]
    fn flattened_identity_serializes_with_type_key() {
        let flat = flatten_identity(Some(&identity("SystemAssigned")));
        let value = serde_json::to_value(&flat).unwrap();
        assert_eq!(value[0]["type"], "SystemAssigned");
        assert_eq!(value[0]["principal_id"], "principal");
        assert_eq!(value[0].as_object().unwrap().len(), 3);
    }

    #[test]
    fn schema_allows_a_single_computed_block() {
        let schema = schema();
        assert!(schema.is_computed());
        match schema.kind {
            FieldKind::List { max_items, element } => {
                assert_eq!(max_items, Some(1));
                let FieldKind::Block(block) = *element else {
                    panic!("identity elements should be blocks");
                };
                let keys: Vec<&str> = block.keys().copied().collect();
                assert_eq!(keys, vec!["principal_id", "tenant_id", "type"]);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
