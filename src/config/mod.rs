//! Configuration module for wishcraft
//!
//! Provides types, discovery and parsing for `wishcraft.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
