//! Authenticated sessions against IBM Cloud IAM

use crate::client::Endpoints;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use svckeys_core::{Error, Result};
use zeroize::Zeroizing;

const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// A bearer token for the resource-management APIs
pub struct Session {
    access_token: Zeroizing<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Zeroizing::new(access_token.into()),
        }
    }

    pub fn bearer(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Exchanges an API key for a session
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn authenticate(&self, api_key: &str) -> Result<Session>;
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// IAM API-key grant (`POST /identity/token`)
pub struct IamSessionProvider {
    http: reqwest::Client,
    token_url: String,
}

impl IamSessionProvider {
    pub fn new(http: reqwest::Client, endpoints: &Endpoints) -> Self {
        Self {
            http,
            token_url: endpoints.iam_url("identity/token"),
        }
    }
}

#[async_trait]
impl SessionProvider for IamSessionProvider {
    async fn authenticate(&self, api_key: &str) -> Result<Session> {
        let form = [("grant_type", APIKEY_GRANT_TYPE), ("apikey", api_key)];
        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::authentication(format!("IAM request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::authentication(format!(
                "IAM returned {status}: {}",
                body.trim()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::authentication(format!("invalid IAM token response: {e}")))?;
        tracing::debug!("obtained IAM access token");
        Ok(Session::new(token.access_token))
    }
}
