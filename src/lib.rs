//! Deepchart - a thin gateway that turns BI questions into DeepSeek chart analyses.

pub mod analyst;
pub mod config;
pub mod handlers;
pub mod llm;
pub mod server;
