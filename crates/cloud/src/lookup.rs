//! Consumed interfaces of the cloud provider

use crate::models::{InstanceQuery, ResourceGroup, ServiceInstance, ServiceKey};
use async_trait::async_trait;
use svckeys_core::Result;

/// Resource groups by human-readable name
#[async_trait]
pub trait ResourceGroupLookup: Send + Sync {
    async fn find_by_name(&self, account_id: &str, name: &str) -> Result<Vec<ResourceGroup>>;
}

/// Service instances by name within a resource group
#[async_trait]
pub trait InstanceLookup: Send + Sync {
    async fn list_instances(&self, query: &InstanceQuery) -> Result<Vec<ServiceInstance>>;
}

/// Service keys by key name, across all instances
#[async_trait]
pub trait ServiceKeyLookup: Send + Sync {
    async fn get_keys(&self, key_name: &str) -> Result<Vec<ServiceKey>>;
}
