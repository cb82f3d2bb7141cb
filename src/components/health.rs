use dioxus::prelude::*;

use crate::components::design_tokens::{SEMANTIC_ERROR, SEMANTIC_SUCCESS};
use crate::components::format::group_digits;
use crate::tools::HealthData;

/// Database status card for the health-check tool.
#[component]
pub fn HealthView(data: HealthData) -> Element {
    let healthy = data.is_healthy();
    let colors = if healthy { SEMANTIC_SUCCESS } else { SEMANTIC_ERROR };
    let status_icon = if healthy { "✔" } else { "✖" };
    let status_label = if healthy { "System Operational" } else { "System Error" };
    let database = data.database.clone().unwrap_or_default();
    let titles = data.titles_count.map(group_digits);
    let error_text = data
        .error
        .clone()
        .unwrap_or_else(|| "Unable to connect to IMDb database".to_string());

    rsx! {
        div { class: "card",
            div { class: "card-header",
                span { class: "card-icon {colors.icon}", "{status_icon}" }
                div { class: "card-heading",
                    h3 { class: "card-title", "IMDb Database Status" }
                    p { class: "card-subtitle {colors.icon}", "{status_label}" }
                }
            }
            div { class: "card-body",
                if healthy {
                    div { class: "detail-row spread",
                        span { class: "muted", "Database" }
                        span { class: "mono", "{database}" }
                    }
                    if let Some(count) = titles {
                        div { class: "detail-row spread",
                            span { class: "muted", "Total titles" }
                            span { class: "strong", "{count}" }
                        }
                    }
                } else {
                    div { class: "panel {colors.border} {colors.bg}",
                        p { class: "{colors.icon}", "{error_text}" }
                    }
                }
            }
        }
    }
}
