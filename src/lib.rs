//! Scaffolds the Selfie Project directory skeleton, or any tree described in TOML.

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod runner;
mod templates;
pub mod tree;

pub use builder::{BuildReport, StructureBuilder};
pub use error::ScaffoldError;
pub use tree::{Node, Tree, TreeStats};
