use regex::Regex;
use serde_json::{json, Value};

use crate::tools::ToolSpec;

/// Detect a tool invocation in a model message.
///
/// The system prompt asks the model to write
/// `I need to use the <name> tool with arguments {...}`; a looser
/// `<name> tool` mention is accepted as well, as long as the name matches a
/// registered tool. Returns the tool name and its JSON arguments (an empty
/// object when none were given).
pub fn detect_tool_invocation(message: &str, available_tools: &[ToolSpec]) -> Option<(String, Value)> {
    let names: Vec<&str> = available_tools.iter().map(|t| t.name.as_str()).collect();

    let mention_regex = Regex::new(r"([a-zA-Z0-9_]+)\s+tool").ok()?;
    for cap in mention_regex.captures_iter(message) {
        let candidate = cap[1].to_string();
        if !names.contains(&candidate.as_str()) {
            continue;
        }
        tracing::debug!(tool = %candidate, "tool mention detected");
        return Some((candidate, extract_arguments(message)));
    }

    let exact_regex = Regex::new(r"I need to use the (?P<tool_name>[a-zA-Z0-9_]+) tool").ok()?;
    if let Some(captures) = exact_regex.captures(message) {
        let tool_name = captures.name("tool_name")?.as_str().to_string();
        if !names.contains(&tool_name.as_str()) {
            tracing::debug!(tool = %tool_name, "mentioned tool is not registered");
            return None;
        }
        return Some((tool_name, extract_arguments(message)));
    }

    None
}

/// First JSON object found in the message, or an empty object. A paste that
/// fails to parse falls back to empty arguments rather than aborting the
/// invocation.
fn extract_arguments(message: &str) -> Value {
    let args_regex = match Regex::new(r"\{[\s\S]*?\}") {
        Ok(re) => re,
        Err(_) => return json!({}),
    };
    if let Some(args_match) = args_regex.find(message) {
        match serde_json::from_str::<Value>(args_match.as_str()) {
            Ok(args) => return args,
            Err(err) => tracing::debug!(%err, "tool arguments were not valid JSON"),
        }
    }
    json!({})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{ToolKind, ALL_TOOLS};

    fn specs() -> Vec<ToolSpec> {
        ALL_TOOLS.iter().map(ToolKind::spec).collect()
    }

    #[test]
    fn detects_the_exact_invocation_format() {
        let message =
            r#"I need to use the resolveSeries tool with arguments {"name": "Breaking Bad"}"#;
        let (name, args) = detect_tool_invocation(message, &specs()).unwrap();
        assert_eq!(name, "resolveSeries");
        assert_eq!(args["name"], "Breaking Bad");
    }

    #[test]
    fn ignores_unknown_tool_names() {
        let message = r#"I need to use the makeCoffee tool with arguments {}"#;
        assert!(detect_tool_invocation(message, &specs()).is_none());
    }

    #[test]
    fn falls_back_to_empty_arguments() {
        let message = "Let me call the checkImdbHealth tool first.";
        let (name, args) = detect_tool_invocation(message, &specs()).unwrap();
        assert_eq!(name, "checkImdbHealth");
        assert_eq!(args, serde_json::json!({}));
    }
}
