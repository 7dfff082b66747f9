//! Resource group and instance resolution
//!
//! Misses are not errors at this stage: they are collected next to the
//! resolved data and the affected requests stay unresolved, which makes the
//! key fetcher skip them.

use crate::lookup::{InstanceLookup, ResourceGroupLookup};
use crate::models::InstanceQuery;
use indexmap::IndexMap;
use svckeys_core::{CredentialRequest, Error, RegionalDetails, Result, ServiceType};

/// Resource group name to provider-internal group id
pub type ResourceGroupIds = IndexMap<String, String>;

/// A resolution result together with the misses reported on the way
#[derive(Debug)]
pub struct Resolved<T> {
    pub value: T,
    pub misses: Vec<Error>,
}

pub struct ResourceResolver<'a> {
    groups: &'a dyn ResourceGroupLookup,
    instances: &'a dyn InstanceLookup,
}

impl<'a> ResourceResolver<'a> {
    pub fn new(groups: &'a dyn ResourceGroupLookup, instances: &'a dyn InstanceLookup) -> Self {
        Self { groups, instances }
    }

    /// Look up every distinct resource group name in `details` exactly once
    pub async fn resolve_groups(
        &self,
        account: &str,
        details: &RegionalDetails,
    ) -> Resolved<ResourceGroupIds> {
        let mut ids = ResourceGroupIds::new();
        let mut misses = Vec::new();

        for name in details.resource_group_names() {
            match self.groups.find_by_name(account, name).await {
                Ok(groups) => match groups.into_iter().next() {
                    Some(group) => {
                        tracing::debug!(resource_group = %name, id = %group.id, "resolved resource group");
                        ids.insert(name.to_string(), group.id);
                    }
                    None => {
                        tracing::warn!(resource_group = %name, "resource group not found");
                        misses.push(Error::resource_group_not_found(account, name));
                    }
                },
                Err(e) => {
                    tracing::warn!(resource_group = %name, error = %e, "resource group lookup failed");
                    misses.push(e);
                }
            }
        }

        Resolved { value: ids, misses }
    }

    /// Fill in the instance CRN of every request that lacks one.
    ///
    /// Returns a new set of requests; those that already carry an instance id
    /// are passed through untouched.
    pub async fn resolve_instances(
        &self,
        details: &RegionalDetails,
        groups: &ResourceGroupIds,
        region: &str,
    ) -> Resolved<RegionalDetails> {
        let mut resolved: Vec<(ServiceType, CredentialRequest)> = Vec::with_capacity(details.len());
        let mut misses = Vec::new();

        for (service, request) in details.iter() {
            if request.is_resolved() {
                resolved.push((service, request.clone()));
                continue;
            }

            match self.resolve_instance(request, groups, region).await {
                Ok(crn) => {
                    tracing::debug!(instance = %request.name, %crn, "resolved instance");
                    resolved.push((service, request.clone().with_instance_id(crn)));
                }
                Err(miss) => {
                    tracing::warn!(
                        instance = %request.name,
                        resource_group = %request.resource_group,
                        error = %miss,
                        "instance not resolved"
                    );
                    misses.push(miss);
                    resolved.push((service, request.clone()));
                }
            }
        }

        Resolved {
            value: resolved.into_iter().collect(),
            misses,
        }
    }

    async fn resolve_instance(
        &self,
        request: &CredentialRequest,
        groups: &ResourceGroupIds,
        region: &str,
    ) -> Result<String> {
        let not_found = || Error::instance_not_found(&request.name, &request.resource_group);

        let group_id = groups.get(&request.resource_group).ok_or_else(not_found)?;
        let query = InstanceQuery {
            name: request.name.clone(),
            resource_group_id: group_id.clone(),
        };

        self.instances
            .list_instances(&query)
            .await?
            .into_iter()
            .find(|instance| instance.region_id == region)
            .map(|instance| instance.crn)
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCloud;
    use svckeys_core::Manifest;

    fn manifest() -> Manifest {
        Manifest::from_json(
            r#"{
                "account": "acc",
                "region": "us-south",
                "data": {
                    "redis": [
                        {"output": "r1", "resource_group": "prod", "name": "cache"},
                        {"output": "r2", "resource_group": "prod", "name": "pinned", "resource_instance_id": "crn:pinned"}
                    ],
                    "kafka": [
                        {"output": "k1", "resource_group": "prod", "name": "events"}
                    ],
                    "cloudant": [
                        {"output": "c1", "resource_group": "missing", "name": "docs"}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    fn cloud() -> InMemoryCloud {
        InMemoryCloud::new()
            .with_group("acc", "prod", "grp-prod")
            .with_instance("cache", "grp-prod", "crn:cache:eu", "eu-de")
            .with_instance("cache", "grp-prod", "crn:cache:us", "us-south")
            .with_instance("cache", "grp-prod", "crn:cache:us-2", "us-south")
            .with_instance("events", "grp-prod", "crn:events:eu", "eu-de")
    }

    #[tokio::test]
    async fn test_each_group_name_is_looked_up_once() {
        let cloud = cloud();
        let manifest = manifest();
        let resolver = ResourceResolver::new(&cloud, &cloud);

        let groups = resolver.resolve_groups("acc", &manifest.data).await;
        assert_eq!(cloud.calls_of("group"), vec!["prod", "missing"]);
        assert_eq!(groups.value.get("prod").map(String::as_str), Some("grp-prod"));
        assert!(!groups.value.contains_key("missing"));
        assert_eq!(groups.misses.len(), 1);
        assert!(matches!(
            &groups.misses[0],
            Error::ResourceGroupNotFound { name, .. } if name == "missing"
        ));
    }

    #[tokio::test]
    async fn test_instances_resolve_to_first_in_region() {
        let cloud = cloud();
        let manifest = manifest();
        let resolver = ResourceResolver::new(&cloud, &cloud);
        let groups = resolver.resolve_groups("acc", &manifest.data).await.value;

        let resolved = resolver
            .resolve_instances(&manifest.data, &groups, "us-south")
            .await;
        let details = resolved.value;

        assert_eq!(
            details.redis[0].resource_instance_id.as_deref(),
            Some("crn:cache:us")
        );
        assert_eq!(
            details.redis[1].resource_instance_id.as_deref(),
            Some("crn:pinned")
        );
        assert!(!details.kafka[0].is_resolved());
        assert!(!details.cloudant[0].is_resolved());
        assert_eq!(resolved.misses.len(), 2);

        // pinned ids and unknown groups never reach the instance API
        assert_eq!(cloud.calls_of("instance"), vec!["cache", "events"]);
        // the input is left as it was
        assert!(!manifest.data.redis[0].is_resolved());
    }

    #[tokio::test]
    async fn test_explicit_instance_id_is_a_noop() {
        let cloud = InMemoryCloud::new();
        let resolver = ResourceResolver::new(&cloud, &cloud);
        let details = RegionalDetails {
            redis: vec![CredentialRequest {
                output: "r".to_string(),
                resource_group: "prod".to_string(),
                resource_instance_id: Some("crn:given".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let resolved = resolver
            .resolve_instances(&details, &ResourceGroupIds::new(), "us-south")
            .await;
        assert_eq!(resolved.value, details);
        assert!(resolved.misses.is_empty());
        assert!(cloud.calls().is_empty());
    }
}
