use dioxus::prelude::*;
use serde_json::Value;

use crate::components::analytics::AnalyticsView;
use crate::components::browse_movies::BrowseMoviesView;
use crate::components::browse_tv::BrowseTvView;
use crate::components::decade_analysis::DecadeAnalysisView;
use crate::components::episode_graph::EpisodeGraphView;
use crate::components::episodes::EpisodesView;
use crate::components::genre_analysis::GenreAnalysisView;
use crate::components::health::HealthView;
use crate::components::movie_comparison::MovieComparisonView;
use crate::components::movie_details::MovieDetailsView;
use crate::components::movie_search::MovieSearchView;
use crate::components::series_comparison::SeriesComparisonView;
use crate::components::series_info::SeriesInfoView;
use crate::components::series_search::SeriesSearchView;
use crate::components::tool_panel::{tool_status_message, ToolDetails, ToolResultPanel, ToolStatusLine};
use crate::components::top_episodes::TopEpisodesView;
use crate::components::top_movies::TopMoviesView;
use crate::components::worst_episodes::WorstEpisodesView;
use crate::tools::{ToolKind, ToolResult};

#[derive(Debug, Clone, PartialEq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
    Thinking,
}

/// Lifecycle of one tool invocation inside a message.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolState {
    /// Arguments still streaming from the model.
    InputStreaming,
    /// Arguments complete, execution pending or in flight.
    InputAvailable,
    /// Finished; carries the parsed result or the error sentinel.
    OutputAvailable(ToolResult),
}

/// One tool segment of a message. `kind` is `None` when the wire name did
/// not resolve to a known tool; such parts render nothing by design.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPart {
    pub id: String,
    pub tool_name: String,
    pub kind: Option<ToolKind>,
    pub input: Value,
    pub state: ToolState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessagePart {
    Reasoning(String),
    Text(String),
    Tool(ToolPart),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub parts: Vec<MessagePart>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn new(role: MessageRole, parts: Vec<MessagePart>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            parts,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn text(role: MessageRole, content: impl Into<String>) -> Self {
        Self::new(role, vec![MessagePart::Text(content.into())])
    }

    /// Concatenated text content, used when replaying history to the model.
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                MessagePart::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_provider_format(&self) -> crate::provider::ChatMessage {
        let role = match self.role {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
            MessageRole::Thinking => "assistant",
        };
        crate::provider::ChatMessage {
            role: role.to_string(),
            content: self.text_content(),
        }
    }
}

/// Split `<think>` blocks out of a completion into an optional reasoning
/// part followed by the remaining text.
pub fn split_reasoning(content: &str) -> (Option<String>, String) {
    let Ok(re) = regex::Regex::new(r"(?s)<think>(.*?)</think>") else {
        return (None, content.trim().to_string());
    };
    let mut reasoning_chunks = Vec::new();
    for cap in re.captures_iter(content) {
        let chunk = cap[1].trim();
        if !chunk.is_empty() {
            reasoning_chunks.push(chunk.to_string());
        }
    }
    let text = re.replace_all(content, "").trim().to_string();
    let reasoning = if reasoning_chunks.is_empty() {
        None
    } else {
        Some(reasoning_chunks.join("\n\n"))
    };
    (reasoning, text)
}

/// Collapsible reasoning block; only rendered when the reasoning text is
/// non-empty after trimming.
#[component]
fn ReasoningBlock(reasoning: String) -> Element {
    let mut open = use_signal(|| false);
    let is_open = *open.read();
    let trimmed = reasoning.trim().to_string();
    if trimmed.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "reasoning-block",
            button {
                class: "tool-trigger",
                onclick: move |_| {
                    let current = *open.read();
                    open.set(!current);
                },
                span { "Reasoning" }
                span { class: if is_open { "chevron open" } else { "chevron" }, "⌄" }
            }
            if is_open {
                div { class: "reasoning-content",
                    for paragraph in trimmed.split("\n\n") {
                        if !paragraph.trim().is_empty() {
                            p { class: "message-paragraph muted", "{paragraph}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render one completed tool result by dispatching on the typed variant.
/// The match is exhaustive: adding a variant without a renderer is a
/// compile error.
fn render_tool_result(result: ToolResult) -> Element {
    match result {
        ToolResult::SeriesInfo(data) => rsx! { SeriesInfoView { data } },
        ToolResult::Episodes(data) => rsx! { EpisodesView { data } },
        ToolResult::TopEpisodes(data) => rsx! { TopEpisodesView { data } },
        ToolResult::WorstEpisodes(data) => rsx! { WorstEpisodesView { data } },
        ToolResult::Analytics(data) => rsx! { AnalyticsView { data } },
        ToolResult::EpisodeGraph(data) => rsx! { EpisodeGraphView { data } },
        ToolResult::SeriesSearch(data) => rsx! { SeriesSearchView { data } },
        ToolResult::SeriesComparison(data) => rsx! { SeriesComparisonView { data } },
        ToolResult::MovieSearch(data) => rsx! { MovieSearchView { data } },
        ToolResult::MovieDetails(data) => rsx! { MovieDetailsView { data } },
        ToolResult::MovieComparison(data) => rsx! { MovieComparisonView { data } },
        ToolResult::TopMovies(data) => rsx! { TopMoviesView { data } },
        ToolResult::BrowseMovies(data) => rsx! { BrowseMoviesView { data } },
        ToolResult::BrowseTv(data) => rsx! { BrowseTvView { data } },
        ToolResult::GenreAnalysis(data) => rsx! { GenreAnalysisView { data } },
        ToolResult::DecadeAnalysis(data) => rsx! { DecadeAnalysisView { data } },
        ToolResult::Health(data) => rsx! { HealthView { data } },
        // The error variant is handled by the panel wrapper; reaching this
        // arm directly still renders the inline panel.
        ToolResult::Error { error } => rsx! {
            div { class: "tool-error-panel", p { "{error}" } }
        },
    }
}

/// Render a single tool part according to its lifecycle state.
fn render_tool_part(part: &ToolPart) -> Element {
    // Unknown tool types must not crash rendering: silent fallthrough.
    let Some(kind) = part.kind else {
        return rsx! {};
    };

    match &part.state {
        ToolState::InputStreaming | ToolState::InputAvailable => {
            let message = tool_status_message(kind, &part.input, false);
            let input = part.input.clone();
            rsx! {
                ToolStatusLine { message }
                ToolDetails { input }
            }
        }
        ToolState::OutputAvailable(result) => {
            let message = tool_status_message(kind, &part.input, true);
            let error = result.error_text().map(str::to_string);
            let body = if error.is_none() {
                render_tool_result(result.clone())
            } else {
                rsx! {}
            };
            rsx! {
                ToolResultPanel { message, error, {body} }
            }
        }
    }
}

#[derive(PartialEq, Props, Clone)]
pub struct MessageViewProps {
    pub message: Message,
    /// True while this message is being edited; its text parts render as a
    /// textarea instead of paragraphs.
    #[props(default = false)]
    pub editing: bool,
    pub on_edit_save: EventHandler<String>,
    pub on_edit_cancel: EventHandler<()>,
}

/// Renders a chat message part by part: reasoning, text, tool panels.
#[component]
pub fn MessageView(props: MessageViewProps) -> Element {
    let message = props.message.clone();
    let editing = props.editing;
    let on_edit_save = props.on_edit_save;
    let on_edit_cancel = props.on_edit_cancel;
    let mut draft = use_signal(|| message.text_content());

    let role_class = match message.role {
        MessageRole::User => "user-message",
        MessageRole::Assistant => "assistant-message",
        MessageRole::System => "system-message",
        MessageRole::Thinking => "thinking-message",
    };
    let sender = match message.role {
        MessageRole::User => "You",
        MessageRole::Assistant => "Assistant",
        MessageRole::System => "System",
        MessageRole::Thinking => "Thinking...",
    };
    let time = message.timestamp.format("%H:%M").to_string();
    let is_thinking = message.role == MessageRole::Thinking;

    rsx! {
        div { class: "message {role_class}",
            div { class: "message-content",
                div { class: "message-header",
                    div { class: "message-sender", "{sender}" }
                    div { class: "message-time", "{time}" }
                }
                div { class: "message-body",
                    if is_thinking {
                        div { class: "typing-indicator",
                            div { class: "dot" }
                            div { class: "dot" }
                            div { class: "dot" }
                        }
                    } else if editing {
                        div { class: "message-editor",
                            textarea {
                                class: "edit-input",
                                value: "{draft}",
                                oninput: move |evt| draft.set(evt.value().clone()),
                            }
                            div { class: "editor-actions",
                                button {
                                    class: "btn-cancel",
                                    onclick: move |_| on_edit_cancel.call(()),
                                    "Cancel"
                                }
                                button {
                                    class: "btn-execute",
                                    onclick: move |_| on_edit_save.call(draft.read().clone()),
                                    "Save & Resend"
                                }
                            }
                        }
                    } else {
                        for (index, part) in message.parts.iter().enumerate() {
                            match part {
                                MessagePart::Reasoning(reasoning) => rsx! {
                                    ReasoningBlock { key: "{message.id}-{index}", reasoning: reasoning.clone() }
                                },
                                MessagePart::Text(text) => rsx! {
                                    div { key: "{message.id}-{index}",
                                        for paragraph in text.split("\n\n") {
                                            if !paragraph.trim().is_empty() {
                                                p { class: "message-paragraph", "{paragraph}" }
                                            }
                                        }
                                    }
                                },
                                MessagePart::Tool(tool_part) => rsx! {
                                    div { key: "{tool_part.id}", {render_tool_part(tool_part)} }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
