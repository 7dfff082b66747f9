//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a JSON error with a custom message
    #[must_use]
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            message: message.into(),
            source,
        }
    }

    /// Create an authentication error
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Create a remote API error
    #[must_use]
    pub fn remote_api(
        operation: impl Into<String>,
        message: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Error::RemoteApi {
            operation: operation.into(),
            message: message.into(),
            status,
        }
    }

    #[must_use]
    pub fn resource_group_not_found(account: impl Into<String>, name: impl Into<String>) -> Self {
        Error::ResourceGroupNotFound {
            account: account.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn instance_not_found(name: impl Into<String>, resource_group: impl Into<String>) -> Self {
        Error::InstanceNotFound {
            name: name.into(),
            resource_group: resource_group.into(),
        }
    }

    /// Create a schema mismatch error for a credential bundle
    #[must_use]
    pub fn schema_mismatch(service_type: impl Into<String>, message: impl Into<String>) -> Self {
        Error::SchemaMismatch {
            service_type: service_type.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unknown_parser(parser_group: impl Into<String>, service_type: impl Into<String>) -> Self {
        Error::UnknownParser {
            parser_group: parser_group.into(),
            service_type: service_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = Error::remote_api("list resource keys", "key does not exist", Some(404));
        assert_eq!(
            err.to_string(),
            "list resource keys failed with HTTP 404: key does not exist"
        );

        let err = Error::instance_not_found("my-redis", "prod");
        assert_eq!(
            err.to_string(),
            "The resource my-redis doesn't exists in the given resource group: prod"
        );
    }
}
