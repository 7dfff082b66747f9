//! Service-key retrieval for resolved requests

use crate::lookup::ServiceKeyLookup;
use svckeys_core::{CredentialBundle, CredentialRequest, ResolvedKeyPair, Result};

pub struct KeyFetcher<'a> {
    keys: &'a dyn ServiceKeyLookup,
}

impl<'a> KeyFetcher<'a> {
    pub fn new(keys: &'a dyn ServiceKeyLookup) -> Self {
        Self { keys }
    }

    /// Fetch the public and private keys of the request's instance.
    ///
    /// Unresolved requests and unset key names yield empty halves without a
    /// remote call. Lookup errors are returned as-is.
    pub async fn fetch(&self, request: &CredentialRequest) -> Result<ResolvedKeyPair> {
        let Some(instance_id) = request.resource_instance_id.as_deref() else {
            return Ok(ResolvedKeyPair::default());
        };

        let public = self
            .fetch_bundle(request.public_key_name.as_deref(), instance_id)
            .await?;
        let private = self
            .fetch_bundle(request.private_key_name.as_deref(), instance_id)
            .await?;
        Ok(ResolvedKeyPair::new(public, private))
    }

    async fn fetch_bundle(
        &self,
        key_name: Option<&str>,
        instance_id: &str,
    ) -> Result<CredentialBundle> {
        let Some(key_name) = key_name else {
            return Ok(CredentialBundle::new());
        };

        let bundle = self
            .keys
            .get_keys(key_name)
            .await?
            .into_iter()
            .find(|key| key.source_crn == instance_id)
            .map(|key| key.credentials)
            .unwrap_or_default();

        if bundle.is_empty() {
            tracing::debug!(key = %key_name, instance = %instance_id, "no key for instance");
        }
        Ok(bundle)
    }
}
