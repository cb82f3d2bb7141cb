use dioxus::prelude::*;
use serde_json::Value;

use crate::tools::ToolKind;

/// Natural-language status line for a tool invocation, e.g.
/// "Finding the best episodes of Breaking Bad".
pub fn tool_status_message(kind: ToolKind, input: &Value, is_complete: bool) -> String {
    let arg = |key: &str| input.get(key).and_then(Value::as_str).map(str::to_string);

    match kind {
        ToolKind::GetTopEpisodes => {
            if let Some(series) = arg("series") {
                return if is_complete {
                    format!("Found the best episodes of {}", series)
                } else {
                    format!("Finding the best episodes of {}", series)
                };
            }
        }
        ToolKind::SearchMovies => {
            let mut parts: Vec<String> = Vec::new();
            if let Some(genre) = arg("genre") {
                parts.push(genre);
            }
            parts.push("movies".to_string());
            let start = input.get("start_year").and_then(Value::as_i64);
            let end = input.get("end_year").and_then(Value::as_i64);
            match (start, end) {
                (Some(s), Some(e)) => parts.push(format!("from {}-{}", s, e)),
                (Some(s), None) => parts.push(format!("from {}", s)),
                _ => {}
            }
            if let Some(rating) = input.get("min_rating").and_then(Value::as_f64) {
                parts.push(format!("rated {}+", rating));
            }
            let search_terms = parts.join(" ");
            return if is_complete {
                format!("Found {}", search_terms)
            } else {
                format!("Searching for {}", search_terms)
            };
        }
        ToolKind::SearchSeries => {
            if let Some(query) = arg("query") {
                return if is_complete {
                    format!("Found TV series: {}", query)
                } else {
                    format!("Searching for TV series: {}", query)
                };
            }
        }
        ToolKind::CompareSeries => {
            return if is_complete {
                "Compared TV series".to_string()
            } else {
                "Comparing TV series".to_string()
            };
        }
        ToolKind::CompareMovies => {
            return if is_complete {
                "Compared movies".to_string()
            } else {
                "Comparing movies".to_string()
            };
        }
        ToolKind::GetEpisodes => {
            if arg("series").is_some() {
                return if is_complete {
                    "Loaded all episodes".to_string()
                } else {
                    "Loading all episodes".to_string()
                };
            }
        }
        ToolKind::SeriesAnalytics => {
            return if is_complete {
                "Analyzed series data".to_string()
            } else {
                "Analyzing series data".to_string()
            };
        }
        ToolKind::WorstEpisodes => {
            return if is_complete {
                "Found the lowest-rated episodes".to_string()
            } else {
                "Finding the lowest-rated episodes".to_string()
            };
        }
        ToolKind::TopMovies => {
            return if is_complete {
                "Found top-rated movies".to_string()
            } else {
                "Finding top-rated movies".to_string()
            };
        }
        ToolKind::GenreAnalysis => {
            return if is_complete {
                "Analyzed genres".to_string()
            } else {
                "Analyzing genres".to_string()
            };
        }
        ToolKind::DecadeAnalysis => {
            return if is_complete {
                "Analyzed by decade".to_string()
            } else {
                "Analyzing by decade".to_string()
            };
        }
        ToolKind::MovieDetails => {
            return if is_complete {
                "Found movie details".to_string()
            } else {
                "Looking up movie details".to_string()
            };
        }
        ToolKind::ResolveSeries => {
            return if is_complete {
                "Found series information".to_string()
            } else {
                "Looking up series information".to_string()
            };
        }
        ToolKind::CheckHealth => {
            return if is_complete {
                "Database is healthy".to_string()
            } else {
                "Checking database status".to_string()
            };
        }
        _ => {}
    }

    if is_complete {
        "Complete".to_string()
    } else {
        "Searching".to_string()
    }
}

/// Human-readable bullets describing the arguments of an in-flight call.
pub fn contextual_details(input: &Value) -> Vec<String> {
    let mut details = Vec::new();
    let Some(object) = input.as_object() else {
        return details;
    };

    for (key, value) in object {
        if value.is_null() {
            continue;
        }

        let formatted_key = humanize_key(key);

        match value {
            Value::String(s) => details.push(format!("Looking for {}: \"{}\"", formatted_key, s)),
            Value::Number(n) => details.push(format!("Using {}: {}", formatted_key, n)),
            Value::Bool(b) => details.push(format!(
                "{}: {}",
                formatted_key,
                if *b { "enabled" } else { "disabled" }
            )),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                details.push(format!("Checking {}: {}", formatted_key, joined));
            }
            _ => {}
        }
    }

    details
}

/// `minVotes` -> "min votes", `start_year` -> "start year".
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out.trim().to_string()
}

/// Status line while the tool call is streaming in or executing.
#[component]
pub fn ToolStatusLine(message: String) -> Element {
    rsx! {
        div { class: "tool-status",
            span { class: "shimmer-text", "{message}" }
        }
    }
}

/// Collapsible wrapper around a completed tool result. When `error` is set
/// the panel shows the inline error instead of the rendered output.
#[component]
pub fn ToolResultPanel(
    message: String,
    #[props(!optional)] error: Option<String>,
    children: Element,
) -> Element {
    let mut open = use_signal(|| true);
    let is_open = *open.read();

    rsx! {
        div { class: "tool-part",
            button {
                class: "tool-trigger",
                onclick: move |_| {
                    let current = *open.read();
                    open.set(!current);
                },
                span { "{message}" }
                span { class: if is_open { "chevron open" } else { "chevron" }, "⌄" }
            }
            if is_open {
                if let Some(error_text) = error {
                    div { class: "tool-error-panel",
                        p { "{error_text}" }
                    }
                } else {
                    div { class: "tool-output", {children} }
                }
            }
        }
    }
}

/// Argument bullets shown under the status line.
#[component]
pub fn ToolDetails(input: Value) -> Element {
    let details = contextual_details(&input);
    if details.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "tool-details",
            for detail in details {
                div { class: "tool-detail-row",
                    span { class: "tool-detail-dot" }
                    span { "{detail}" }
                }
            }
        }
    }
}
