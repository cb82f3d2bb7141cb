use dioxus::prelude::*;

use crate::components::design_tokens::{CATEGORY_SERIES, SEMANTIC_SUCCESS};
use crate::components::format::{episode_tag, group_digits};
use crate::tools::TopEpisodesData;

/// Weighted top-episodes list. The "Top" badge is an equality check against
/// the maximum rating in the returned set, so ties all carry it.
#[component]
pub fn TopEpisodesView(data: TopEpisodesData) -> Element {
    let colors = CATEGORY_SERIES;
    let max_rating = data
        .episodes
        .iter()
        .map(|ep| ep.rating)
        .fold(f64::NEG_INFINITY, f64::max);
    let mean = format!("{:.2}", data.mean_rating);
    let min_votes = group_digits(data.min_votes);

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📈" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Top Episodes" }
                        p { class: "card-subtitle", "{data.series}" }
                    }
                }
                div { class: "card-section spread",
                    div { class: "detail-row",
                        span { class: "star", "★" }
                        span { class: "muted", "Series avg:" }
                        span { class: "strong", "{mean}" }
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
                            let is_top = episode.rating == max_rating;
                            let rank_class = if episode.rank <= 3 {
                                SEMANTIC_SUCCESS.badge
                            } else {
                                colors.badge
                            };
                            let tag = episode_tag(episode.season, episode.episode);
                            let rating = format!("{:.1}", episode.rating);
                            let votes = group_digits(episode.votes);
                            // The weighted value is only worth a callout when it moved.
                            let weighted = (episode.weighted_rating != episode.rating)
                                .then(|| format!("Weighted: {:.2}", episode.weighted_rating));
                            rsx! {
                                div { class: "card", key: "{episode.tconst}",
                                    div { class: "item-head",
                                        div { class: "item-lead",
                                            span { class: "rank-bubble {rank_class}", "{episode.rank}" }
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
                                                    if let Some(weighted_text) = weighted {
                                                        span { class: "muted", "{weighted_text}" }
                                                    }
                                                }
                                            }
                                        }
                                        if is_top {
                                            span { class: "{SEMANTIC_SUCCESS.badge}", "Top" }
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
