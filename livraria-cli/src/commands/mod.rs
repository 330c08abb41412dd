//! CLI command implementations

mod catalog;

pub use catalog::catalog;
