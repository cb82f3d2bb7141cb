pub mod analytics;
pub mod browse_movies;
pub mod browse_tv;
pub mod chat;
pub mod decade_analysis;
pub mod design_tokens;
pub mod episode_graph;
pub mod episodes;
pub mod format;
pub mod genre_analysis;
pub mod health;
pub mod message;
pub mod movie_comparison;
pub mod movie_details;
pub mod movie_search;
pub mod series_comparison;
pub mod series_info;
pub mod series_search;
pub mod tool_invocation;
pub mod tool_panel;
pub mod top_episodes;
pub mod top_movies;
pub mod worst_episodes;

pub use chat::ChatTab;
pub use message::{Message, MessagePart, MessageRole, MessageView, ToolPart, ToolState};
pub use tool_invocation::detect_tool_invocation;
pub use tool_panel::{tool_status_message, ToolResultPanel, ToolStatusLine};
