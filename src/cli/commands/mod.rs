//! CLI command implementations

pub mod explore;
pub mod export;
