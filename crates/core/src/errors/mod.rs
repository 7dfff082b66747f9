//! Error types for svckeys operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
