//! Kubernetes Secret output document

use crate::constants::{SECRET_API_VERSION, SECRET_KIND};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized credential fields, keyed by output field name
pub type SecretData = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretMetadata {
    pub name: String,
    pub namespace: String,
}

/// A `v1/Secret` manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: SecretMetadata,
    pub data: SecretData,
}

impl SecretDocument {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, data: SecretData) -> Self {
        Self {
            api_version: SECRET_API_VERSION.to_string(),
            kind: SECRET_KIND.to_string(),
            metadata: SecretMetadata {
                name: name.into(),
                namespace: namespace.into(),
            },
            data,
        }
    }

    /// Serialize as 2-space indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::json(format!("failed to serialize secret: {e}"), e))
    }
}
