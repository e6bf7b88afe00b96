//! Core module - fundamental types and utilities

pub mod config;
pub mod identity;
pub mod project;
pub mod store;

pub use config::Config;
pub use identity::{IdParseError, PartId};
pub use project::{Project, ProjectError};
pub use store::{PartStore, StoreError};
