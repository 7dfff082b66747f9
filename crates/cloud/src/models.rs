//! Records returned by the resource-management API

use serde::{Deserialize, Serialize};
use svckeys_core::CredentialBundle;

/// Envelope of every list endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub crn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceKey {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source_crn: String,
    #[serde(default)]
    pub credentials: CredentialBundle,
}

/// Filter for instance listings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceQuery {
    pub name: String,
    pub resource_group_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_key_list_decodes() {
        let body = r#"{
            "rows_count": 1,
            "resources": [{
                "name": "reader",
                "source_crn": "crn:v1:bluemix:public:databases-for-redis:us-south:a/1:abc::",
                "credentials": {"connection": {"cli": {"arguments": [["-u", "rediss://h"]]}}}
            }]
        }"#;
        let list: ListResponse<ServiceKey> = serde_json::from_str(body).unwrap();
        assert_eq!(list.resources.len(), 1);
        assert_eq!(list.resources[0].name, "reader");
        assert!(list.resources[0].credentials.contains_key("connection"));
    }

    #[test]
    fn test_missing_resources_is_empty() {
        let list: ListResponse<ResourceGroup> = serde_json::from_str("{}").unwrap();
        assert!(list.resources.is_empty());
    }
}
