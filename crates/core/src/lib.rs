//! Core types for gamedex
//!
//! Domain types, the model-response extractor and configuration shared by
//! all other crates.

mod config;
mod constants;
mod env_config;
mod error;
mod game;
mod json_utils;
mod metadata;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use game::*;
pub use json_utils::*;
pub use metadata::*;
