//! Remote side of svckeys
//!
//! The provider is consumed through the lookup traits in [`lookup`], so the
//! resolution and fetching logic runs the same against the real IBM Cloud
//! HTTP API ([`client`]) and the in-memory test fake (`memory`, behind the
//! `testing` feature).

pub mod client;
pub mod keys;
pub mod lookup;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod models;
pub mod resolver;
pub mod session;

pub use client::{Endpoints, ResourceClient};
pub use keys::KeyFetcher;
pub use lookup::{InstanceLookup, ResourceGroupLookup, ServiceKeyLookup};
#[cfg(any(test, feature = "testing"))]
pub use memory::InMemoryCloud;
pub use models::{InstanceQuery, ResourceGroup, ServiceInstance, ServiceKey};
pub use resolver::{Resolved, ResourceGroupIds, ResourceResolver};
pub use session::{IamSessionProvider, Session, SessionProvider};
