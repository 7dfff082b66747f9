//! Typed shapes of the credential bundles each service type issues
//!
//! Bundles arrive as untyped JSON from the service-key API. Decoding them
//! into these structs turns a missing or mistyped field into a
//! `SchemaMismatch` error instead of a silent default.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use svckeys_core::{CredentialBundle, Error, Result, ServiceType};

/// Decode a bundle into the typed shape for `service`
pub fn decode<T: DeserializeOwned>(service: ServiceType, bundle: &CredentialBundle) -> Result<T> {
    serde_json::from_value(Value::Object(bundle.clone()))
        .map_err(|e| Error::schema_mismatch(service.as_str(), e.to_string()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisCredentials {
    pub connection: RedisConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConnection {
    pub cli: RedisCli,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisCli {
    pub arguments: Vec<Vec<String>>,
    pub certificate: RedisCertificate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisCertificate {
    pub certificate_base64: String,
}

impl RedisCredentials {
    /// The connection URL, `connection.cli.arguments[0][1]`
    pub fn url(&self) -> Result<&str> {
        self.connection
            .cli
            .arguments
            .first()
            .and_then(|args| args.get(1))
            .map(String::as_str)
            .ok_or_else(|| {
                Error::schema_mismatch(
                    ServiceType::Redis.as_str(),
                    "connection.cli.arguments[0][1] is missing",
                )
            })
    }

    pub fn certificate(&self) -> &str {
        &self.connection.cli.certificate.certificate_base64
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KafkaCredentials {
    pub user: String,
    pub password: String,
    pub kafka_brokers_sasl: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudantCredentials {
    pub username: String,
    pub password: String,
    pub host: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(value: Value) -> CredentialBundle {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_decode_redis() {
        let creds: RedisCredentials = decode(
            ServiceType::Redis,
            &bundle(json!({
                "connection": {"cli": {
                    "arguments": [["-u", "rediss://x:y@host:6379/0"]],
                    "certificate": {"certificate_base64": "Q0VSVA=="}
                }}
            })),
        )
        .unwrap();
        assert_eq!(creds.url().unwrap(), "rediss://x:y@host:6379/0");
        assert_eq!(creds.certificate(), "Q0VSVA==");
    }

    #[test]
    fn test_redis_short_arguments_are_a_mismatch() {
        let creds: RedisCredentials = decode(
            ServiceType::Redis,
            &bundle(json!({
                "connection": {"cli": {
                    "arguments": [["-u"]],
                    "certificate": {"certificate_base64": "Q0VSVA=="}
                }}
            })),
        )
        .unwrap();
        assert!(matches!(creds.url(), Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_wrong_type_is_a_mismatch() {
        let err = decode::<KafkaCredentials>(
            ServiceType::Kafka,
            &bundle(json!({"user": "u", "password": 42, "kafka_brokers_sasl": []})),
        )
        .unwrap_err();
        match err {
            Error::SchemaMismatch { service_type, .. } => assert_eq!(service_type, "kafka"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_field_is_a_mismatch() {
        let err = decode::<CloudantCredentials>(
            ServiceType::Cloudant,
            &bundle(json!({"username": "u", "password": "p"})),
        )
        .unwrap_err();
        assert!(err.to_string().contains("host"));
    }
}
