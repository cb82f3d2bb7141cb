use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_MOVIES};
use crate::components::format::group_digits;
use crate::tools::MovieDetailsData;

/// Detail card for a single movie.
#[component]
pub fn MovieDetailsView(data: MovieDetailsData) -> Element {
    let colors = CATEGORY_MOVIES;
    let genres = data.genres.clone().unwrap_or_default();
    // (formatted rating, bar class, bar width %)
    let rating_display = data
        .rating
        .map(|r| (format!("{:.1}", r), rating_color(r), r / 10.0 * 100.0));
    let votes_display = data.votes.map(group_digits);

    rsx! {
        div { class: "card",
            div { class: "card-header",
                span { class: "card-icon {colors.icon}", "🎬" }
                div { class: "card-heading",
                    h3 { class: "card-title", "{data.title}" }
                    div { class: "badge-row",
                        span { class: "badge badge-outline", "{data.year}" }
                        span { class: "muted", "{genres}" }
                    }
                }
            }
            div { class: "card-body",
                if let Some((rating_text, bar_class, width)) = rating_display {
                    div { class: "rating-line",
                        span { class: "star", "★" }
                        span { class: "rating-big", "{rating_text}" }
                        span { class: "muted", "/10" }
                    }
                    div { class: "bar-track",
                        div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                    }
                    if let Some(votes) = votes_display {
                        div { class: "detail-row spread top-border",
                            span { class: "muted", "Total Votes" }
                            span { class: "strong", "{votes}" }
                        }
                    }
                } else {
                    div { class: "empty-note", "No rating information available" }
                }
            }
        }
    }
}
