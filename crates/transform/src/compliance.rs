//! The `compliance` parser group

use crate::encoding::FieldEncoding;
use crate::schema::{decode, CloudantCredentials, KafkaCredentials, RedisCredentials};
use svckeys_core::{ResolvedKeyPair, Result, SecretData, ServiceType};

pub const PARSER_GROUP: &str = "compliance";

/// Emits `redis_url` (without a trailing `/0` database index) and `redis_cert`
pub fn redis(keys: &ResolvedKeyPair, encoding: FieldEncoding) -> Result<SecretData> {
    let creds: RedisCredentials = decode(ServiceType::Redis, keys.primary())?;
    let url = creds.url()?;
    let url = url.strip_suffix("/0").unwrap_or(url);

    let mut data = SecretData::new();
    data.insert("redis_url".to_string(), encoding.apply(url));
    data.insert("redis_cert".to_string(), encoding.apply(creds.certificate()));
    Ok(data)
}

/// Emits `kafkaSaslUsername` and `kafkaSaslPassword`
pub fn kafka(keys: &ResolvedKeyPair, encoding: FieldEncoding) -> Result<SecretData> {
    let creds: KafkaCredentials = decode(ServiceType::Kafka, keys.primary())?;
    // Brokers are shape-checked but not part of the secret yet
    tracing::debug!(
        brokers = %creds.kafka_brokers_sasl.join(","),
        "kafka brokers not emitted"
    );

    let mut data = SecretData::new();
    data.insert("kafkaSaslUsername".to_string(), encoding.apply(&creds.user));
    data.insert("kafkaSaslPassword".to_string(), encoding.apply(&creds.password));
    Ok(data)
}

/// Emits `cloudant_username`, `cloudant_password` and an https `cloudant_url`
pub fn cloudant(keys: &ResolvedKeyPair, encoding: FieldEncoding) -> Result<SecretData> {
    let creds: CloudantCredentials = decode(ServiceType::Cloudant, keys.primary())?;
    let url = format!("https://{}", creds.host);

    let mut data = SecretData::new();
    data.insert("cloudant_username".to_string(), encoding.apply(&creds.username));
    data.insert("cloudant_password".to_string(), encoding.apply(&creds.password));
    data.insert("cloudant_url".to_string(), encoding.apply(&url));
    Ok(data)
}
