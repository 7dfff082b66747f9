//! In-memory lookup fake for tests
//!
//! Records every lookup it serves so callers can assert on call counts.

use crate::lookup::{InstanceLookup, ResourceGroupLookup, ServiceKeyLookup};
use crate::models::{InstanceQuery, ResourceGroup, ServiceInstance, ServiceKey};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use svckeys_core::{CredentialBundle, Error, Result};

#[derive(Default)]
pub struct InMemoryCloud {
    groups: HashMap<(String, String), Vec<ResourceGroup>>,
    instances: HashMap<InstanceQuery, Vec<ServiceInstance>>,
    keys: HashMap<String, Vec<ServiceKey>>,
    failing_keys: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryCloud {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_group(mut self, account: &str, name: &str, id: &str) -> Self {
        self.groups
            .entry((account.to_string(), name.to_string()))
            .or_default()
            .push(ResourceGroup {
                id: id.to_string(),
                name: name.to_string(),
            });
        self
    }

    #[must_use]
    pub fn with_instance(mut self, name: &str, group_id: &str, crn: &str, region: &str) -> Self {
        let query = InstanceQuery {
            name: name.to_string(),
            resource_group_id: group_id.to_string(),
        };
        self.instances.entry(query).or_default().push(ServiceInstance {
            crn: crn.to_string(),
            name: name.to_string(),
            region_id: region.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_key(mut self, key_name: &str, source_crn: &str, credentials: CredentialBundle) -> Self {
        self.keys.entry(key_name.to_string()).or_default().push(ServiceKey {
            name: key_name.to_string(),
            source_crn: source_crn.to_string(),
            credentials,
        });
        self
    }

    /// Make lookups of `key_name` fail with a remote API error
    #[must_use]
    pub fn with_failing_key(mut self, key_name: &str, message: &str) -> Self {
        self.failing_keys
            .insert(key_name.to_string(), message.to_string());
        self
    }

    /// Every lookup served so far, as `"<kind>:<argument>"`
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn calls_of(&self, kind: &str) -> Vec<String> {
        let prefix = format!("{kind}:");
        self.calls()
            .into_iter()
            .filter_map(|call| call.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }

    fn record(&self, kind: &str, argument: &str) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(format!("{kind}:{argument}"));
    }
}

#[async_trait]
impl ResourceGroupLookup for InMemoryCloud {
    async fn find_by_name(&self, account_id: &str, name: &str) -> Result<Vec<ResourceGroup>> {
        self.record("group", name);
        Ok(self
            .groups
            .get(&(account_id.to_string(), name.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl InstanceLookup for InMemoryCloud {
    async fn list_instances(&self, query: &InstanceQuery) -> Result<Vec<ServiceInstance>> {
        self.record("instance", &query.name);
        Ok(self.instances.get(query).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ServiceKeyLookup for InMemoryCloud {
    async fn get_keys(&self, key_name: &str) -> Result<Vec<ServiceKey>> {
        self.record("key", key_name);
        if let Some(message) = self.failing_keys.get(key_name) {
            return Err(Error::remote_api(
                "list resource keys",
                message.clone(),
                Some(404),
            ));
        }
        Ok(self.keys.get(key_name).cloned().unwrap_or_default())
    }
}
