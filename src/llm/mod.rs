//! DeepSeek chat-completion client.

mod client;
mod error;
mod types;

pub use client::{ClientConfig, DeepSeekClient};
pub use error::ChatError;
pub use types::{ChatRequest, Message, Role};
