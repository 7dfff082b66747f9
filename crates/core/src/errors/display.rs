//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::Authentication { message } => {
                write!(f, "authentication failed: {message}")
            }
            Error::RemoteApi {
                operation,
                message,
                status,
            } => match status {
                Some(code) => write!(f, "{operation} failed with HTTP {code}: {message}"),
                None => write!(f, "{operation} failed: {message}"),
            },
            Error::ResourceGroupNotFound { account, name } => {
                write!(f, "resource group '{name}' not found in account '{account}'")
            }
            Error::InstanceNotFound {
                name,
                resource_group,
            } => {
                write!(
                    f,
                    "The resource {name} doesn't exists in the given resource group: {resource_group}"
                )
            }
            Error::SchemaMismatch {
                service_type,
                message,
            } => {
                write!(f, "malformed {service_type} credentials: {message}")
            }
            Error::UnknownParser {
                parser_group,
                service_type,
            } => {
                write!(
                    f,
                    "no parser registered for service type '{service_type}' in parser group '{parser_group}'"
                )
            }
        }
    }
}
