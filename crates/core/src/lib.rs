//! Core domain types, errors, and constants for `svckeys`.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias shared by every crate in
//!   the workspace.
//! - **`types`**: The input manifest, the credential bundles fetched from the
//!   cloud provider and the Kubernetes Secret document written to disk.
//! - **`constants`**: Environment variable names, defaults and endpoints.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
