//! CLI command implementations

pub mod completions;
pub mod export;
pub mod import;
pub mod init;
pub mod part;
pub mod stats;
