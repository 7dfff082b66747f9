//! `svckeys`: write IBM Cloud service keys as Kubernetes Secret manifests
//!
//! A run reads a manifest of service instances, resolves each to its
//! resource group and CRN, fetches its service keys, normalizes the
//! credentials per service type and writes one Secret file per request.

pub mod config;
pub mod flags;
pub mod orchestrator;
pub mod writer;

pub use config::{Config, OutputSettings};
pub use flags::{normalize_args, Cli};
pub use orchestrator::{run, Orchestrator, Remote, RunSummary};
pub use writer::SecretWriter;
