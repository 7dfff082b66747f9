//! HTTP client for the IBM Cloud resource-management APIs

use crate::lookup::{InstanceLookup, ResourceGroupLookup, ServiceKeyLookup};
use crate::models::{InstanceQuery, ListResponse, ResourceGroup, ServiceInstance, ServiceKey};
use crate::session::{Session, SessionProvider};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use svckeys_core::{Error, Result};
use tokio::sync::OnceCell;
use url::Url;
use zeroize::Zeroizing;

/// Base URLs of the three services a run talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub iam: Url,
    pub resource_controller: Url,
    pub resource_manager: Url,
}

impl Endpoints {
    pub fn parse(iam: &str, resource_controller: &str, resource_manager: &str) -> Result<Self> {
        Ok(Self {
            iam: parse_endpoint("IAM", iam)?,
            resource_controller: parse_endpoint("resource controller", resource_controller)?,
            resource_manager: parse_endpoint("resource manager", resource_manager)?,
        })
    }

    pub fn iam_url(&self, path: &str) -> String {
        join(&self.iam, path)
    }

    pub fn controller_url(&self, path: &str) -> String {
        join(&self.resource_controller, path)
    }

    pub fn manager_url(&self, path: &str) -> String {
        join(&self.resource_manager, path)
    }
}

fn parse_endpoint(service: &str, value: &str) -> Result<Url> {
    Url::parse(value)
        .map_err(|e| Error::configuration(format!("invalid {service} endpoint '{value}': {e}")))
}

fn join(base: &Url, path: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), path)
}

/// Build the HTTP client shared by the session provider and the lookups.
///
/// No timeout is set; the transport defaults apply.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("svckeys/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))
}

struct Login {
    provider: Box<dyn SessionProvider>,
    api_key: Zeroizing<String>,
}

/// Resource groups, instances and keys over the v2 REST API
pub struct ResourceClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    session: OnceCell<Session>,
    login: Option<Login>,
}

impl ResourceClient {
    /// Client bound to an already established session
    pub fn new(http: reqwest::Client, endpoints: Endpoints, session: Session) -> Self {
        Self {
            http,
            endpoints,
            session: OnceCell::new_with(Some(session)),
            login: None,
        }
    }

    /// Client that authenticates with `api_key` on its first request
    pub fn connect(
        http: reqwest::Client,
        endpoints: Endpoints,
        provider: impl SessionProvider + 'static,
        api_key: Zeroizing<String>,
    ) -> Self {
        Self {
            http,
            endpoints,
            session: OnceCell::new(),
            login: Some(Login {
                provider: Box::new(provider),
                api_key,
            }),
        }
    }

    async fn session(&self) -> Result<&Session> {
        self.session
            .get_or_try_init(|| async {
                let login = self.login.as_ref().ok_or_else(|| {
                    Error::authentication("no session and no API key to log in with")
                })?;
                login.provider.authenticate(&login.api_key).await
            })
            .await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let session = self.session().await?;
        tracing::debug!(%url, ?query, "{operation}");
        let response = self
            .http
            .get(&url)
            .bearer_auth(session.bearer())
            .query(query)
            .send()
            .await
            .map_err(|e| Error::remote_api(operation, e.to_string(), None))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote_api(
                operation,
                error_message(&body, status),
                Some(status.as_u16()),
            ));
        }

        let list: ListResponse<T> = response.json().await.map_err(|e| {
            Error::remote_api(
                operation,
                format!("invalid response body: {e}"),
                Some(status.as_u16()),
            )
        })?;
        Ok(list.resources)
    }
}

// Prefer the API's own message over the raw body
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|v| {
        v.get("message")
            .or_else(|| v.pointer("/errors/0/message"))
            .and_then(|m| m.as_str())
    });
    match message {
        Some(m) => m.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    }
}

#[async_trait]
impl ResourceGroupLookup for ResourceClient {
    async fn find_by_name(&self, account_id: &str, name: &str) -> Result<Vec<ResourceGroup>> {
        let url = self.endpoints.manager_url("v2/resource_groups");
        self.list(
            "find resource group",
            url,
            &[("account_id", account_id), ("name", name)],
        )
        .await
    }
}

#[async_trait]
impl InstanceLookup for ResourceClient {
    async fn list_instances(&self, query: &InstanceQuery) -> Result<Vec<ServiceInstance>> {
        let url = self.endpoints.controller_url("v2/resource_instances");
        self.list(
            "list resource instances",
            url,
            &[
                ("name", query.name.as_str()),
                ("resource_group_id", query.resource_group_id.as_str()),
            ],
        )
        .await
    }
}

#[async_trait]
impl ServiceKeyLookup for ResourceClient {
    async fn get_keys(&self, key_name: &str) -> Result<Vec<ServiceKey>> {
        let url = self.endpoints.controller_url("v2/resource_keys");
        self.list("list resource keys", url, &[("name", key_name)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join_ignores_trailing_slash() {
        let endpoints = Endpoints::parse(
            "https://iam.cloud.ibm.com/",
            "https://resource-controller.cloud.ibm.com",
            "http://127.0.0.1:8080",
        )
        .unwrap();
        assert_eq!(
            endpoints.iam_url("identity/token"),
            "https://iam.cloud.ibm.com/identity/token"
        );
        assert_eq!(
            endpoints.controller_url("v2/resource_keys"),
            "https://resource-controller.cloud.ibm.com/v2/resource_keys"
        );
        assert_eq!(
            endpoints.manager_url("v2/resource_groups"),
            "http://127.0.0.1:8080/v2/resource_groups"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_a_configuration_error() {
        let err = Endpoints::parse("not a url", "https://a", "https://b").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_error_message_extraction() {
        let status = reqwest::StatusCode::NOT_FOUND;
        assert_eq!(error_message(r#"{"message": "gone"}"#, status), "gone");
        assert_eq!(
            error_message(r#"{"errors": [{"message": "no such key"}]}"#, status),
            "no such key"
        );
        assert_eq!(error_message("plain failure\n", status), "plain failure");
        assert_eq!(error_message("", status), "Not Found");
    }
}
