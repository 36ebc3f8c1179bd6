//! LLM integration for game recognition
//!
//! Sends a photo plus a fixed instruction prompt to a vision-capable chat
//! completion endpoint and returns the model's raw text answer.

mod ai_types;
mod client;
mod error;
mod recognition;

#[cfg(test)]
mod client_tests;

pub use client::{LlmClient, truncate};
pub use error::LlmError;
pub use recognition::{
    RECOGNITION_MAX_TOKENS, RECOGNITION_SYSTEM_PROMPT, RECOGNITION_USER_PROMPT, VisionModel,
};
