//! Shared utilities for svckeys

pub mod atomic_file;
pub mod logging;

pub use atomic_file::*;
pub use logging::*;
