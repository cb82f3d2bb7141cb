use dioxus::prelude::*;

use crate::components::design_tokens::{CATEGORY_SERIES, SEMANTIC_WARNING};
use crate::components::format::{episode_tag, group_digits};
use crate::tools::WorstEpisodesData;

/// Lowest-rated episodes list; the floor entry (or entries, on a tie) gets
/// the "Lowest" badge.
#[component]
pub fn WorstEpisodesView(data: WorstEpisodesData) -> Element {
    let colors = CATEGORY_SERIES;
    let min_rating = data
        .episodes
        .iter()
        .map(|ep| ep.rating)
        .fold(f64::INFINITY, f64::min);
    let lowest = format!("{:.1}", min_rating);
    let min_votes = group_digits(data.min_votes);

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📉" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Lowest Rated Episodes" }
                        p { class: "card-subtitle", "{data.series}" }
                    }
                }
                div { class: "card-section spread",
                    div { class: "detail-row",
                        span { class: "{SEMANTIC_WARNING.icon}", "⚠" }
                        span { class: "muted", "Lowest:" }
                        span { class: "strong", "{lowest}/10" }
                    }
                    div { class: "detail-row",
                        span { class: "muted", "Min votes:" }
                        span { class: "strong", "{min_votes}" }
                    }
                }
            }

            if data.episodes.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No episodes matched the vote threshold" }
                }
            } else {
                div { class: "result-stack tight",
                    for episode in data.episodes.iter() {
                        {
                            let is_lowest = episode.rating == min_rating;
                            let tag = episode_tag(episode.season, episode.episode);
                            let rating = format!("{:.1}", episode.rating);
                            let votes = group_digits(episode.votes);
                            rsx! {
                                div { class: "card", key: "{episode.tconst}",
                                    div { class: "item-head",
                                        div { class: "item-lead",
                                            span { class: "rank-bubble {colors.badge}", "{episode.rank}" }
                                            div { class: "item-text",
                                                div { class: "item-title-row",
                                                    h4 { class: "item-title", "{episode.title}" }
                                                    span { class: "muted", "{tag}" }
                                                }
                                                div { class: "meta-row",
                                                    span { class: "rating-inline",
                                                        span { class: "star", "★" }
                                                        span { class: "strong", "{rating}" }
                                                        span { class: "muted", "/10" }
                                                    }
                                                    span { class: "muted", "👥 {votes}" }
                                                }
                                            }
                                        }
                                        if is_lowest {
                                            span { class: "{SEMANTIC_WARNING.badge}", "Lowest" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
