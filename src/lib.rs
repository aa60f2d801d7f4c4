//! WishCraft - deterministic prompt composer for greeting and festival posters
//!
//! This library provides functionality to:
//! - Describe a poster as a structured [`models::SelectionState`]
//! - Manage built-in and user-defined festivals through a persistence port
//! - Compose the selection into one multi-line prompt for an external
//!   image generator, in lenient or strict mode
//! - Keep a short history of saved prompts
//!
//! ```
//! use wishcraft::composer::compose;
//! use wishcraft::models::SelectionState;
//! use wishcraft::registry::FestivalCatalog;
//!
//! let mut state = SelectionState::default();
//! state.name = "Aanya".to_string();
//! let prompt = compose(&state, &FestivalCatalog::builtin());
//! assert!(prompt.contains("\"Happy Birthday, Aanya!\""));
//! ```

pub mod catalog;
pub mod cli;
pub mod composer;
pub mod config;
pub mod festivals;
pub mod greeting;
pub mod history;
pub mod models;
pub mod negative;
pub mod palette;
pub mod registry;
pub mod storage;
pub mod suggest;

#[cfg(feature = "wasm")]
pub mod wasm;
