//! The input manifest: which service instances to turn into secrets

use super::service::ServiceType;
use crate::errors::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Top-level input document for one account/region pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub data: RegionalDetails,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read manifest", e))?;
        serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("failed to parse manifest '{}': {e}", path.display()), e)
        })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::json(e.to_string(), e))
    }
}

/// Credential requests grouped by service type, each in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegionalDetails {
    #[serde(default)]
    pub redis: Vec<CredentialRequest>,
    #[serde(default)]
    pub kafka: Vec<CredentialRequest>,
    #[serde(default)]
    pub cloudant: Vec<CredentialRequest>,
}

impl RegionalDetails {
    pub fn requests(&self, service: ServiceType) -> &[CredentialRequest] {
        match service {
            ServiceType::Redis => &self.redis,
            ServiceType::Kafka => &self.kafka,
            ServiceType::Cloudant => &self.cloudant,
        }
    }

    fn requests_mut(&mut self, service: ServiceType) -> &mut Vec<CredentialRequest> {
        match service {
            ServiceType::Redis => &mut self.redis,
            ServiceType::Kafka => &mut self.kafka,
            ServiceType::Cloudant => &mut self.cloudant,
        }
    }

    /// Every request tagged with its service type: redis, then kafka, then
    /// cloudant, each sequence in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceType, &CredentialRequest)> {
        ServiceType::ALL
            .into_iter()
            .flat_map(move |service| self.requests(service).iter().map(move |r| (service, r)))
    }

    pub fn len(&self) -> usize {
        self.redis.len() + self.kafka.len() + self.cloudant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct resource group names, in order of first appearance
    pub fn resource_group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, request) in self.iter() {
            if !names.contains(&request.resource_group.as_str()) {
                names.push(&request.resource_group);
            }
        }
        names
    }
}

impl FromIterator<(ServiceType, CredentialRequest)> for RegionalDetails {
    fn from_iter<I: IntoIterator<Item = (ServiceType, CredentialRequest)>>(iter: I) -> Self {
        let mut details = RegionalDetails::default();
        for (service, request) in iter {
            details.requests_mut(service).push(request);
        }
        details
    }
}

/// One desired output secret
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialRequest {
    /// Output file base name, also used as the Secret's name
    pub output: String,
    pub resource_group: String,
    /// Instance name, only consulted when no instance id is given
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub public_key_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub private_key_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub resource_instance_id: Option<String>,
}

impl CredentialRequest {
    pub fn is_resolved(&self) -> bool {
        self.resource_instance_id.is_some()
    }

    #[must_use]
    pub fn with_instance_id(mut self, crn: impl Into<String>) -> Self {
        let crn = crn.into();
        self.resource_instance_id = (!crn.is_empty()).then_some(crn);
        self
    }
}

// Empty strings in the manifest mean "not set"
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "account": "acc-123",
        "region": "us-south",
        "data": {
            "redis": [
                {"output": "redis-a", "resource_group": "prod", "name": "cache-a", "public_key_name": "reader"},
                {"output": "redis-b", "resource_group": "shared", "name": "cache-b", "resource_instance_id": "crn:v1:redis-b"}
            ],
            "cloudant": [
                {"output": "db", "resource_group": "prod", "name": "docs", "public_key_name": "", "private_key_name": "writer"}
            ]
        }
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.account, "acc-123");
        assert_eq!(manifest.region, "us-south");
        assert_eq!(manifest.data.redis.len(), 2);
        assert!(manifest.data.kafka.is_empty());
        assert_eq!(manifest.data.len(), 3);

        let db = &manifest.data.cloudant[0];
        assert_eq!(db.public_key_name, None);
        assert_eq!(db.private_key_name.as_deref(), Some("writer"));
        assert!(!db.is_resolved());
        assert!(manifest.data.redis[1].is_resolved());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let err = Manifest::from_json(r#"{"data": {"redis": [{"resource_group": "prod"}]}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_iter_follows_service_then_declared_order() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        let order: Vec<_> = manifest
            .data
            .iter()
            .map(|(service, request)| (service, request.output.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (ServiceType::Redis, "redis-a"),
                (ServiceType::Redis, "redis-b"),
                (ServiceType::Cloudant, "db"),
            ]
        );
    }

    #[test]
    fn test_resource_group_names_are_distinct() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.data.resource_group_names(), vec!["prod", "shared"]);
    }

    #[test]
    fn test_collect_rebuilds_details() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        let rebuilt: RegionalDetails = manifest
            .data
            .iter()
            .map(|(service, request)| (service, request.clone()))
            .collect();
        assert_eq!(rebuilt, manifest.data);
    }

    #[test]
    fn test_with_instance_id() {
        let request = CredentialRequest::default().with_instance_id("crn:v1:x");
        assert_eq!(request.resource_instance_id.as_deref(), Some("crn:v1:x"));
        assert!(!CredentialRequest::default().with_instance_id("").is_resolved());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Manifest::load(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));

        let path = temp_dir.path().join("manifest.json");
        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Manifest::load(&path).unwrap().account, "acc-123");
    }

    #[test]
    fn test_load_reports_malformed_json() {
        use std::error::Error as _;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");
        fs::write(&path, "{not json").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("failed to parse manifest"));
    }
}
