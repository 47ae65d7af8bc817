use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use sqlmi_core::{ClientError, ClientInfo, ManagedInstance, ManagedInstancesClient};
use std::env;
use std::fmt;
use tracing::debug;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_API_VERSION: &str = "2020-11-01-preview";

#[derive(Clone)]
pub struct ArmClient {
    pub access_token: String,
    pub subscription_id: String,
    pub base_url: Url,
    pub api_version: String,
    client: HttpClient,
}

impl fmt::Debug for ArmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArmClient")
            .field("access_token", &"<redacted>")
            .field("subscription_id", &self.subscription_id)
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl ArmClient {
    pub fn new(
        access_token: impl Into<String>,
        subscription_id: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(DEFAULT_ENDPOINT).map_err(|e| ClientError::Internal(e.to_string()))?;
        Self::with_base_url(access_token, subscription_id, base_url)
    }

    pub fn with_base_url(
        access_token: impl Into<String>,
        subscription_id: impl Into<String>,
        base_url: Url,
    ) -> Result<Self, ClientError> {
        let client = HttpClient::builder()
            .build()
            .map_err(|e| ClientError::Internal(format!("failed to build http client: {e}")))?;
        Ok(Self {
            access_token: access_token.into(),
            subscription_id: subscription_id.into(),
            base_url,
            api_version: DEFAULT_API_VERSION.to_string(),
            client,
        })
    }

    /// Reads `ARM_ACCESS_TOKEN`, `ARM_SUBSCRIPTION_ID` and the optional
    /// `ARM_ENDPOINT` / `ARM_SQL_API_VERSION` overrides.
    pub fn from_env() -> Result<Self, ClientError> {
        let access_token = env::var("ARM_ACCESS_TOKEN").map_err(|_| ClientError::Authentication)?;
        let subscription_id = env::var("ARM_SUBSCRIPTION_ID")
            .map_err(|_| ClientError::Internal("ARM_SUBSCRIPTION_ID is not set".to_string()))?;
        let mut client = match env::var("ARM_ENDPOINT") {
            Ok(raw) => {
                let base_url = Url::parse(&raw)
                    .map_err(|e| ClientError::Internal(format!("invalid ARM_ENDPOINT: {e}")))?;
                Self::with_base_url(access_token, subscription_id, base_url)?
            }
            Err(_) => Self::new(access_token, subscription_id)?,
        };
        if let Ok(api_version) = env::var("ARM_SQL_API_VERSION") {
            client.api_version = api_version;
        }
        Ok(client)
    }

    fn instance_url(&self, resource_group: &str, name: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Internal(format!("base url {} cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .extend([
                "subscriptions",
                self.subscription_id.as_str(),
                "resourceGroups",
                resource_group,
                "providers",
                "Microsoft.Sql",
                "managedInstances",
                name,
            ]);
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);
        Ok(url)
    }
}

#[async_trait]
impl ManagedInstancesClient for ArmClient {
    fn info(&self) -> ClientInfo {
        ClientInfo {
            name: "arm".to_string(),
            base_url: Some(self.base_url.clone()),
            subscription_id: self.subscription_id.clone(),
        }
    }

    async fn get(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<ManagedInstance, ClientError> {
        let url = self.instance_url(resource_group, name)?;
        debug!(%url, "fetching managed instance");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        debug!(status = status.as_u16(), "managed instance response");
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(parse_http_error(status, text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read response body: {e}")))?;
        serde_json::from_str::<ManagedInstance>(&body)
            .map_err(|e| ClientError::Decode(format!("invalid managed instance payload: {e}")))
    }
}

fn parse_http_error(status: StatusCode, body: String) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Authentication,
        StatusCode::TOO_MANY_REQUESTS => ClientError::Throttled,
        _ => {
            let (code, message) = extract_arm_error(body);
            ClientError::Provider {
                status: status.as_u16(),
                code,
                message,
            }
        }
    }
}

fn extract_arm_error(body: String) -> (String, String) {
    let error = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("error").cloned());
    let field = |key: &str| {
        error
            .as_ref()
            .and_then(|e| e.get(key))
            .and_then(Value::as_str)
            .map(ToString::to_string)
    };
    match (field("code"), field("message")) {
        (Some(code), Some(message)) => (code, message),
        (Some(code), None) => (code, body),
        (None, Some(message)) => ("Unknown".to_string(), message),
        (None, None) => ("Unknown".to_string(), body),
    }
}
