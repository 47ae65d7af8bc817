use crate::{Input, Output, ReadContext, ReadError, ResourceState};
use sqlmi_core::{
    flatten_identity, flatten_tags, normalize_location, validate_tags, ManagedInstance,
    ManagedInstanceId, ManagedInstancesClient,
};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Populated(Box<Output>),
    /// The instance no longer exists and its id was removed from state.
    Absent,
}

impl ReadOutcome {
    pub fn output(&self) -> Option<&Output> {
        match self {
            ReadOutcome::Populated(output) => Some(output),
            ReadOutcome::Absent => None,
        }
    }
}

/// Reads the instance whose id is held in `state`.
///
/// The id is parsed before anything touches the network. A not-found
/// response clears the id and succeeds with [`ReadOutcome::Absent`]; every
/// other failure is returned with the id attached and leaves `state` as is.
pub async fn read(
    client: &dyn ManagedInstancesClient,
    state: &mut ResourceState,
    ctx: &ReadContext,
) -> Result<ReadOutcome, ReadError> {
    let raw_id = state.id().unwrap_or_default().to_string();
    let id = ManagedInstanceId::parse(&raw_id)?;

    let fetched = ctx
        .run(&raw_id, client.get(&id.resource_group, &id.name))
        .await
        .map_err(|error| {
            warn!(id = %raw_id, %error, "managed instance read aborted");
            error
        })?;

    let instance = match fetched {
        Ok(instance) => instance,
        Err(error) if error.is_not_found() => {
            info!(id = %raw_id, "SQL Managed Instance not found, removing from state");
            state.clear_id();
            return Ok(ReadOutcome::Absent);
        }
        Err(source) => {
            return Err(ReadError::Fetch { id: raw_id, source });
        }
    };

    let output = flatten_instance(&raw_id, &id, &instance)?;
    Ok(ReadOutcome::Populated(Box::new(output)))
}

/// Validates `input`, records the id it names in `state`, then reads it.
pub async fn lookup(
    client: &dyn ManagedInstancesClient,
    input: &Input,
    state: &mut ResourceState,
    ctx: &ReadContext,
) -> Result<ReadOutcome, ReadError> {
    input.validate()?;
    let id = ManagedInstanceId::new(
        client.info().subscription_id,
        input.resource_group_name.as_str(),
        input.name.as_str(),
    );
    state.set_id(id.to_string());
    read(client, state, ctx).await
}

fn flatten_instance(
    raw_id: &str,
    id: &ManagedInstanceId,
    instance: &ManagedInstance,
) -> Result<Output, ReadError> {
    let mut output = Output {
        name: id.name.clone(),
        resource_group_name: id.resource_group.clone(),
        ..Output::default()
    };

    if let Some(location) = &instance.location {
        output.location = normalize_location(location);
    }
    if let Some(sku) = &instance.sku {
        output.sku_name = sku.name.clone().unwrap_or_default();
    }

    output.identity = flatten_identity(instance.identity.as_ref());

    if let Some(props) = &instance.properties {
        output.license_type = props.license_type.clone().unwrap_or_default();
        output.administrator_login = props.administrator_login.clone().unwrap_or_default();
        output.subnet_id = props.subnet_id.clone().unwrap_or_default();
        output.storage_size_in_gb = props.storage_size_in_gb.unwrap_or_default();
        output.vcores = props.v_cores.unwrap_or_default();
        output.fqdn = props.fully_qualified_domain_name.clone().unwrap_or_default();
        output.collation = props.collation.clone().unwrap_or_default();
        output.public_data_endpoint_enabled =
            props.public_data_endpoint_enabled.unwrap_or_default();
        output.minimum_tls_version = props.minimal_tls_version.clone().unwrap_or_default();
        output.proxy_override = props.proxy_override.clone().unwrap_or_default();
        output.timezone_id = props.timezone_id.clone().unwrap_or_default();
        output.dns_zone_partner_id = props.dns_zone_partner.clone().unwrap_or_default();
        output.storage_account_type = props.storage_account_type.clone().unwrap_or_default();
    }

    let tags = instance
        .tags
        .as_ref()
        .map(flatten_tags)
        .unwrap_or_default();
    validate_tags(&tags).map_err(|source| ReadError::Mapping {
        id: raw_id.to_string(),
        field: "tags",
        source,
    })?;
    output.tags = tags;

    Ok(output)
}
