//! Registry of transformation rules keyed by parser group and service type

use crate::compliance;
use crate::encoding::FieldEncoding;
use std::collections::HashMap;
use svckeys_core::{Error, ResolvedKeyPair, Result, SecretData, ServiceType};

/// A transformation from a key pair to the fields of one secret
pub type TransformFn = fn(&ResolvedKeyPair, FieldEncoding) -> Result<SecretData>;

/// Lookup table from `(parser group, service type)` to a transformation
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<(String, ServiceType), TransformFn>,
}

impl ParserRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in parser group
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(compliance::PARSER_GROUP, ServiceType::Redis, compliance::redis);
        registry.register(compliance::PARSER_GROUP, ServiceType::Kafka, compliance::kafka);
        registry.register(
            compliance::PARSER_GROUP,
            ServiceType::Cloudant,
            compliance::cloudant,
        );
        registry
    }

    /// Register (or replace) the transformation for a group and service type
    pub fn register(&mut self, group: impl Into<String>, service: ServiceType, parser: TransformFn) {
        self.parsers.insert((group.into(), service), parser);
    }

    pub fn get(&self, group: &str, service: ServiceType) -> Result<TransformFn> {
        self.parsers
            .get(&(group.to_string(), service))
            .copied()
            .ok_or_else(|| Error::unknown_parser(group, service.as_str()))
    }

    /// Fail early when `group` lacks a parser for any of `services`
    pub fn ensure_supports(
        &self,
        group: &str,
        services: impl IntoIterator<Item = ServiceType>,
    ) -> Result<()> {
        for service in services {
            self.get(group, service)?;
        }
        Ok(())
    }

    pub fn transform(
        &self,
        group: &str,
        service: ServiceType,
        keys: &ResolvedKeyPair,
        encoding: FieldEncoding,
    ) -> Result<SecretData> {
        let parser = self.get(group, service)?;
        parser(keys, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_cover_every_service_type() {
        let registry = ParserRegistry::with_defaults();
        assert!(registry
            .ensure_supports("compliance", ServiceType::ALL)
            .is_ok());
    }

    #[test]
    fn test_unknown_group_is_reported() {
        let registry = ParserRegistry::with_defaults();
        let err = registry.get("audit", ServiceType::Redis).unwrap_err();
        match err {
            Error::UnknownParser {
                parser_group,
                service_type,
            } => {
                assert_eq!(parser_group, "audit");
                assert_eq!(service_type, "redis");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_registration() {
        fn constant(_: &ResolvedKeyPair, encoding: FieldEncoding) -> Result<SecretData> {
            let mut data = SecretData::new();
            data.insert("token".to_string(), encoding.apply("fixed"));
            Ok(data)
        }

        let mut registry = ParserRegistry::new();
        assert!(registry.get("custom", ServiceType::Kafka).is_err());
        registry.register("custom", ServiceType::Kafka, constant);

        let data = registry
            .transform(
                "custom",
                ServiceType::Kafka,
                &ResolvedKeyPair::default(),
                FieldEncoding::Base64,
            )
            .unwrap();
        assert_eq!(data["token"], "Zml4ZWQ=");
        assert!(registry.ensure_supports("custom", [ServiceType::Redis]).is_err());
    }

    #[test]
    fn test_transform_dispatches_by_service_type() {
        let registry = ParserRegistry::with_defaults();
        let keys = ResolvedKeyPair::new(
            json!({"username": "u", "password": "p", "host": "h.example.com"})
                .as_object()
                .cloned()
                .unwrap(),
            Default::default(),
        );
        let data = registry
            .transform("compliance", ServiceType::Cloudant, &keys, FieldEncoding::Plain)
            .unwrap();
        assert_eq!(data["cloudant_url"], "https://h.example.com");
    }
}
