//! Service type tags

use std::fmt::{self, Display};

/// The kinds of cloud service whose keys can be turned into secrets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceType {
    Redis,
    Kafka,
    Cloudant,
}

impl ServiceType {
    /// All service types in the order a manifest is processed
    pub const ALL: [ServiceType; 3] = [ServiceType::Redis, ServiceType::Kafka, ServiceType::Cloudant];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Redis => "redis",
            ServiceType::Kafka => "kafka",
            ServiceType::Cloudant => "cloudant",
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_manifest_keys() {
        assert_eq!(ServiceType::Redis.to_string(), "redis");
        assert_eq!(ServiceType::Kafka.to_string(), "kafka");
        assert_eq!(ServiceType::Cloudant.to_string(), "cloudant");
    }

    #[test]
    fn test_processing_order() {
        assert_eq!(
            ServiceType::ALL,
            [ServiceType::Redis, ServiceType::Kafka, ServiceType::Cloudant]
        );
    }
}
