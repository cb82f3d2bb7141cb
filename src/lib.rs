// Re-export modules for testing purposes

pub mod components;
pub mod config;
pub mod logging;
pub mod provider;
pub mod tools;

// Re-export common types and structures
pub use crate::components::*;
pub use crate::config::ApiConfig;
pub use crate::tools::{ToolKind, ToolResult, ToolSpec};
