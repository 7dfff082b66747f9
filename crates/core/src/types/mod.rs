//! Core domain types for `svckeys`.
//!
//! - **`service`**: The supported service types and their processing order
//! - **`manifest`**: The input document describing which secrets to produce
//! - **`credentials`**: Raw service-key material fetched from the provider
//! - **`secret`**: The Kubernetes Secret document written to disk

pub mod credentials;
pub mod manifest;
pub mod secret;
pub mod service;

pub use credentials::*;
pub use manifest::*;
pub use secret::*;
pub use service::*;
