//! Resource identifiers for managed instances.
//!
//! The canonical form is
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Sql/managedInstances/{name}`.
//! Segment keys are matched case-insensitively, values are kept verbatim.

use std::fmt;
use std::str::FromStr;

const PROVIDER_NAMESPACE: &str = "Microsoft.Sql";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagedInstanceId {
    pub subscription_id: String,
    pub resource_group: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("id is empty")]
    Empty,
    #[error("id {0:?} is not a resource path: expected key/value segments starting with '/'")]
    Malformed(String),
    #[error("id {id:?} is missing the {segment:?} segment")]
    MissingSegment { id: String, segment: &'static str },
    #[error("id {id:?} has an empty value for {segment:?}")]
    EmptySegment { id: String, segment: String },
    #[error("id {id:?} has an unexpected segment {segment:?}")]
    UnexpectedSegment { id: String, segment: String },
    #[error("id {id:?} belongs to provider {provider:?}, expected \"Microsoft.Sql\"")]
    WrongProvider { id: String, provider: String },
}

impl ManagedInstanceId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            name: name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let path = input
            .strip_prefix('/')
            .ok_or_else(|| ParseError::Malformed(input.to_string()))?;
        let parts: Vec<&str> = path.trim_end_matches('/').split('/').collect();
        if parts.len() % 2 != 0 {
            return Err(ParseError::Malformed(input.to_string()));
        }

        let mut subscription_id = None;
        let mut resource_group = None;
        let mut provider = None;
        let mut name = None;

        for pair in parts.chunks(2) {
            let (key, value) = (pair[0], pair[1]);
            if value.is_empty() {
                return Err(ParseError::EmptySegment {
                    id: input.to_string(),
                    segment: key.to_string(),
                });
            }
            let slot = match key.to_ascii_lowercase().as_str() {
                "subscriptions" => &mut subscription_id,
                "resourcegroups" => &mut resource_group,
                "providers" => &mut provider,
                "managedinstances" => &mut name,
                _ => {
                    return Err(ParseError::UnexpectedSegment {
                        id: input.to_string(),
                        segment: key.to_string(),
                    })
                }
            };
            if slot.replace(value.to_string()).is_some() {
                return Err(ParseError::UnexpectedSegment {
                    id: input.to_string(),
                    segment: key.to_string(),
                });
            }
        }

        let missing = |segment| ParseError::MissingSegment {
            id: input.to_string(),
            segment,
        };
        let subscription_id = subscription_id.ok_or_else(|| missing("subscriptions"))?;
        let resource_group = resource_group.ok_or_else(|| missing("resourceGroups"))?;
        let provider = provider.ok_or_else(|| missing("providers"))?;
        let name = name.ok_or_else(|| missing("managedInstances"))?;

        if !provider.eq_ignore_ascii_case(PROVIDER_NAMESPACE) {
            return Err(ParseError::WrongProvider {
                id: input.to_string(),
                provider,
            });
        }

        Ok(Self {
            subscription_id,
            resource_group,
            name,
        })
    }
}

impl fmt::Display for ManagedInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}/providers/{}/managedInstances/{}",
            self.subscription_id, self.resource_group, PROVIDER_NAMESPACE, self.name
        )
    }
}

impl FromStr for ManagedInstanceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str =
        "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Sql/managedInstances/mi1";

    #[test]
    fn parses_canonical_id() {
        let id = ManagedInstanceId::parse(VALID).unwrap();
        assert_eq!(id.subscription_id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(id.resource_group, "rg1");
        assert_eq!(id.name, "mi1");
        assert_eq!(id.to_string(), VALID);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let id: ManagedInstanceId =
            "/subscriptions/s1/resourcegroups/rg1/providers/microsoft.sql/managedinstances/mi1"
                .parse()
                .unwrap();
        assert_eq!(id, ManagedInstanceId::new("s1", "rg1", "mi1"));
    }

    #[test]
    fn rejects_empty_and_relative_ids() {
        assert_eq!(ManagedInstanceId::parse(""), Err(ParseError::Empty));
        assert!(matches!(
            ManagedInstanceId::parse("subscriptions/s1"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            ManagedInstanceId::parse("/subscriptions/s1/resourceGroups"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_missing_name_segment() {
        let err = ManagedInstanceId::parse(
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Sql",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSegment {
                segment: "managedInstances",
                ..
            }
        ));
    }

    #[test]
    fn rejects_other_resource_types() {
        let err = ManagedInstanceId::parse(
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Sql/servers/srv1",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedSegment { segment, .. } if segment == "servers"));
    }

    #[test]
    fn rejects_wrong_provider() {
        let err = ManagedInstanceId::parse(
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Web/managedInstances/mi1",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::WrongProvider { .. }));
    }

    #[test]
    fn rejects_nested_child_resources() {
        let err = ManagedInstanceId::parse(&format!("{VALID}/databases/db1")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedSegment { .. }));
    }
}
