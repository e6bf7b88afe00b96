//! Entity types

pub mod part;

pub use part::{Part, PartDraft};
