//! partstock: automotive replacement-parts inventory
//!
//! A Unix-style tool for tracking replacement parts as plain text
//! YAML files and producing filtered CSV extracts for spreadsheet use.

pub mod cli;
pub mod core;
pub mod entities;
pub mod export;
