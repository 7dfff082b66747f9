//! Credential transformation for svckeys
//!
//! Turns the raw credentials of a service key into the normalized field set
//! written into a Kubernetes Secret. Rules are grouped into named parser
//! groups and looked up through a [`ParserRegistry`].

pub mod compliance;
pub mod encoding;
pub mod registry;
pub mod schema;

pub use encoding::FieldEncoding;
pub use registry::{ParserRegistry, TransformFn};
