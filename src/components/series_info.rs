use dioxus::prelude::*;

use crate::components::design_tokens::CATEGORY_SERIES;
use crate::tools::SeriesInfo;

/// Card for a resolved series: title, id, run years, genre badges.
#[component]
pub fn SeriesInfoView(data: SeriesInfo) -> Element {
    let colors = CATEGORY_SERIES;
    let years = data.years_display();
    let genres: Vec<String> = data
        .genres
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                span { class: "card-icon {colors.icon}", "📺" }
                div { class: "card-heading",
                    h3 { class: "card-title", "{data.title}" }
                    p { class: "card-subtitle", "ID: {data.tconst}" }
                }
            }
            div { class: "card-body",
                div { class: "detail-row",
                    span { class: "detail-icon", "🗓" }
                    span { "{years}" }
                }
                if !genres.is_empty() {
                    div { class: "badge-row",
                        for genre in genres {
                            span { class: "{colors.badge}", "{genre}" }
                        }
                    }
                }
            }
        }
    }
}
