use dioxus::prelude::*;
use serde_json::Value;

use crate::components::message::{
    split_reasoning, Message, MessagePart, MessageRole, MessageView, ToolPart, ToolState,
};
use crate::components::tool_invocation::detect_tool_invocation;
use crate::config::ApiConfig;
use crate::provider::{model_catalog, ChatMessage, NamedModel, ProviderClient, DEFAULT_CHAT_MODEL};
use crate::tools::{self, MetadataClient, ParameterValidator, ToolKind, ToolResult, ToolSpec, ALL_TOOLS};

/// System prompt advertising the metadata tools and the invocation format
/// the detector understands.
pub fn build_system_prompt(tools: &[ToolSpec]) -> String {
    let mut prompt = String::from(
        "You are SeriesChat, a helpful assistant for exploring movie and TV metadata. \
         You have access to special tools backed by an IMDb database.\n\n",
    );

    if !tools.is_empty() {
        prompt.push_str("The following tools are available:\n\n");
        for tool in tools {
            prompt.push_str(&format!("- {}: {}\n", tool.name, tool.description));
            prompt.push_str(&format!("  Parameters: {}\n\n", tool.input_schema));
        }

        prompt.push_str("\nIMPORTANT: When you need to use a tool, you MUST use this exact format:\n");
        prompt.push_str("\"I need to use the [tool_name] tool with arguments {\\\"param\\\": \\\"value\\\"}\"\n");
        prompt.push_str("For example: \"I need to use the resolveSeries tool with arguments {\\\"name\\\": \\\"Breaking Bad\\\"}\"\n");
        prompt.push_str("Use one tool per message. The tool runs automatically and its result is shown to the user; ");
        prompt.push_str("a system message will give you the raw result to interpret.\n");
    }

    prompt
}

/// The chat models offered in the selector. Title/artifact models exist in
/// the catalog but are internal.
fn selectable_models() -> Vec<NamedModel> {
    model_catalog()
        .into_iter()
        .filter(|m| m.id.starts_with("chat-model"))
        .collect()
}

/// Run one completion turn: call the provider, attach reasoning/text/tool
/// parts, auto-execute a detected tool call and stream its result back into
/// the history. All metadata tools are read-only GETs, so every detected
/// invocation is safe to auto-execute.
async fn run_turn(
    mut messages: Signal<Vec<Message>>,
    mut is_sending: Signal<bool>,
    provider: ProviderClient,
    model_id: String,
    api_config: ApiConfig,
    thinking_index: usize,
) {
    let specs: Vec<ToolSpec> = ALL_TOOLS.iter().map(ToolKind::spec).collect();

    let chat_history: Vec<ChatMessage> = messages
        .read()
        .iter()
        .filter(|msg| msg.role != MessageRole::Thinking)
        .map(Message::to_provider_format)
        .collect();

    let mut final_messages = vec![ChatMessage {
        role: "system".to_string(),
        content: build_system_prompt(&specs),
    }];
    final_messages.extend(chat_history);

    match provider
        .chat_completion(&model_id, final_messages, Some(0.7), Some(1000))
        .await
    {
        Ok(response) => {
            if thinking_index < messages.read().len() {
                messages.write().remove(thinking_index);
            }

            let Some(choice) = response.choices.first() else {
                is_sending.set(false);
                return;
            };
            let content = choice.message.content.clone();
            let (reasoning, text) = split_reasoning(&content);

            let mut parts = Vec::new();
            if let Some(reasoning_text) = reasoning {
                parts.push(MessagePart::Reasoning(reasoning_text));
            }

            let invocation = detect_tool_invocation(&text, &specs);
            if !text.is_empty() {
                parts.push(MessagePart::Text(text));
            }

            if let Some((tool_name, suggested_args)) = invocation {
                let kind = ToolKind::from_name(&tool_name);
                let (args, validation_error) = match kind {
                    Some(kind) => match ParameterValidator::fix_parameters(
                        &kind.spec(),
                        suggested_args.clone(),
                    ) {
                        Ok(fixed) => (fixed, None),
                        Err(err) => (suggested_args.clone(), Some(err.to_string())),
                    },
                    None => (suggested_args.clone(), None),
                };

                let state = match &validation_error {
                    Some(err) => ToolState::OutputAvailable(ToolResult::error(err.clone())),
                    None => ToolState::InputAvailable,
                };
                let tool_part = ToolPart {
                    id: uuid::Uuid::new_v4().to_string(),
                    tool_name: tool_name.clone(),
                    kind,
                    input: args.clone(),
                    state,
                };
                parts.push(MessagePart::Tool(tool_part));

                let message_index = messages.read().len();
                messages
                    .write()
                    .push(Message::new(MessageRole::Assistant, parts));

                if validation_error.is_none() {
                    if let Some(kind) = kind {
                        execute_tool(messages, api_config, kind, args, message_index).await;
                    }
                }
            } else {
                messages
                    .write()
                    .push(Message::new(MessageRole::Assistant, parts));
            }
        }
        Err(err) => {
            tracing::error!(%err, "chat completion failed");
            if thinking_index < messages.read().len() {
                messages.write()[thinking_index] =
                    Message::text(MessageRole::System, format!("Error: {}", err));
            }
        }
    }

    is_sending.set(false);
}

/// Execute one tool call and flip its part to `OutputAvailable` in place.
/// The part renders independently the moment its own state transitions.
async fn execute_tool(
    mut messages: Signal<Vec<Message>>,
    api_config: ApiConfig,
    kind: ToolKind,
    args: Value,
    message_index: usize,
) {
    let client = MetadataClient::new(api_config);
    let result = tools::execute(&client, kind, &args).await;
    let summary = result.summary_for_model();

    if message_index < messages.read().len() {
        let mut all = messages.write();
        if let Some(part) = all[message_index]
            .parts
            .iter_mut()
            .find_map(|part| match part {
                MessagePart::Tool(tool_part) if tool_part.kind == Some(kind) => Some(tool_part),
                _ => None,
            })
        {
            part.state = ToolState::OutputAvailable(result);
        }
    }

    // Feed the raw result back so the model can interpret it on the next
    // turn, mirroring how executed tool output joins the history.
    messages.write().push(Message::text(
        MessageRole::System,
        format!("Tool '{}' returned result:\n\n{}", kind.name(), summary),
    ));
}

#[derive(PartialEq, Props, Clone)]
pub struct ChatTabProps {
    #[props(!optional)]
    pub api_key: Option<String>,
    pub api_config: ApiConfig,
}

/// The chat surface: model selector, message history, input row.
#[component]
pub fn ChatTab(props: ChatTabProps) -> Element {
    let mut messages = use_signal(Vec::<Message>::new);
    let mut input = use_signal(String::new);
    let mut is_sending = use_signal(|| false);
    let mut selected_model = use_signal(|| DEFAULT_CHAT_MODEL.to_string());
    let mut editing_message = use_signal(|| None::<String>);

    let api_key = props
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
        .unwrap_or_default();
    let provider = use_signal(move || ProviderClient::new(api_key));
    let api_config = props.api_config.clone();

    let models = selectable_models();
    let current_model = selected_model.read().clone();
    let model_description = models
        .iter()
        .find(|m| m.id == current_model)
        .map(|m| m.description.to_string())
        .unwrap_or_default();

    let send_config = api_config.clone();
    let mut send_message = move |_| {
        let user_input = input.read().trim().to_string();
        if user_input.is_empty() || *is_sending.read() {
            return;
        }

        messages
            .write()
            .push(Message::text(MessageRole::User, user_input));
        input.set(String::new());
        is_sending.set(true);

        let thinking_index = messages.read().len();
        messages
            .write()
            .push(Message::new(MessageRole::Thinking, Vec::new()));

        let provider_instance = provider.read().clone();
        let model_id = selected_model.read().clone();
        let config = send_config.clone();
        spawn(async move {
            run_turn(
                messages,
                is_sending,
                provider_instance,
                model_id,
                config,
                thinking_index,
            )
            .await;
        });
    };

    let edit_config = api_config.clone();
    let save_edit = move |(message_id, new_text): (String, String)| {
        let position = messages
            .read()
            .iter()
            .position(|m| m.id == message_id);
        let Some(position) = position else {
            return;
        };

        // Replace the edited message and drop everything after it, then
        // regenerate from the truncated history.
        {
            let mut all = messages.write();
            all.truncate(position + 1);
            all[position] = Message::text(MessageRole::User, new_text);
        }
        editing_message.set(None);
        is_sending.set(true);

        let thinking_index = messages.read().len();
        messages
            .write()
            .push(Message::new(MessageRole::Thinking, Vec::new()));

        let provider_instance = provider.read().clone();
        let model_id = selected_model.read().clone();
        let config = edit_config.clone();
        spawn(async move {
            run_turn(
                messages,
                is_sending,
                provider_instance,
                model_id,
                config,
                thinking_index,
            )
            .await;
        });
    };
    let save_edit = use_callback(save_edit);

    let mut send_message_ref = send_message.clone();
    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key().to_string() == "Enter" && !evt.modifiers().shift() {
            evt.prevent_default();
            send_message_ref(());
        }
    };

    let message_list = messages.read().clone();
    let editing_id = editing_message.read().clone();
    let sending = *is_sending.read();
    let input_value = input.read().clone();
    let input_empty = input.read().trim().is_empty();

    rsx! {
        div { class: "chat-container",
            // Model selector
            div { class: "model-selector",
                div { class: "model-selector-header",
                    h3 { class: "model-title", "Model" }
                    span { class: "caption", "{model_description}" }
                }
                select {
                    class: "model-dropdown",
                    value: "{current_model}",
                    onchange: move |evt| selected_model.set(evt.value().clone()),
                    for model in models.iter() {
                        option { value: "{model.id}", "{model.name}" }
                    }
                }
            }

            // Messages area
            div { class: "chat-messages",
                if message_list.is_empty() {
                    div { class: "empty-chat",
                        div { class: "empty-chat-icon", "💬" }
                        div { class: "empty-chat-title", "No messages yet" }
                        div { class: "empty-chat-subtitle",
                            "Ask about any movie or TV series to get started"
                        }
                    }
                } else {
                    for message in message_list.iter() {
                        {
                            let is_editing = editing_id.as_deref() == Some(message.id.as_str());
                            let message_id = message.id.clone();
                            let edit_id = message.id.clone();
                            let can_edit = message.role == MessageRole::User && !sending;
                            let message_clone = message.clone();
                            rsx! {
                                div { class: "message-row", key: "{message.id}",
                                    MessageView {
                                        message: message_clone,
                                        editing: is_editing,
                                        on_edit_save: move |text: String| save_edit.call((edit_id.clone(), text)),
                                        on_edit_cancel: move |_| editing_message.set(None),
                                    }
                                    if can_edit && !is_editing {
                                        button {
                                            class: "edit-link",
                                            onclick: move |_| editing_message.set(Some(message_id.clone())),
                                            "Edit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Input area
            div { class: "chat-input-container",
                textarea {
                    class: "chat-input",
                    placeholder: "Ask about a movie or series...",
                    value: "{input_value}",
                    disabled: sending,
                    oninput: move |evt| input.set(evt.value().clone()),
                    onkeydown: handle_keydown,
                }
                button {
                    class: "chat-send-button",
                    disabled: sending || input_empty,
                    onclick: move |_| send_message(()),
                    "➤"
                }
            }
        }
    }
}
