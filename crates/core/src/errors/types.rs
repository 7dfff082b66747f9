//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for svckeys operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for svckeys operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid configuration (flags, environment, parser choice)
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Session creation against the identity provider failed
    Authentication { message: String },

    /// A call to the remote resource-management API failed
    RemoteApi {
        operation: String,
        message: String,
        status: Option<u16>,
    },

    /// A resource group name has no match in the account
    ResourceGroupNotFound { account: String, name: String },

    /// No instance with the requested name exists in the target region
    InstanceNotFound {
        name: String,
        resource_group: String,
    },

    /// A credential bundle does not have the shape its service type requires
    SchemaMismatch {
        service_type: String,
        message: String,
    },

    /// No transformation registered for the parser group and service type
    UnknownParser {
        parser_group: String,
        service_type: String,
    },
}
