use dioxus::prelude::*;

use crate::components::design_tokens::{rank_color, rating_color, CATEGORY_SERIES};
use crate::components::format::group_digits;
use crate::tools::{BrowseTvData, BrowseTvFilters};

pub fn browse_tv_filter_badges(filters: &BrowseTvFilters) -> Vec<String> {
    let mut badges = Vec::new();
    if let Some(genre) = &filters.genre {
        badges.push(format!("Genre: {}", genre));
    }
    match (filters.start_year, filters.end_year) {
        (Some(start), Some(end)) => badges.push(format!("Years: {}-{}", start, end)),
        (Some(start), None) => badges.push(format!("From: {}", start)),
        (None, Some(end)) => badges.push(format!("Until: {}", end)),
        (None, None) => {}
    }
    if let Some(min_rating) = filters.min_rating {
        badges.push(format!("Rating: {}+", min_rating));
    }
    if let Some(max_rating) = filters.max_rating {
        badges.push(format!("Max Rating: {}", max_rating));
    }
    if let Some(min_votes) = filters.min_votes {
        badges.push(format!("Min Votes/Episode: {}", group_digits(min_votes)));
    }
    if let Some(min_seasons) = filters.min_seasons {
        badges.push(format!("Min Seasons: {}", min_seasons));
    }
    if let Some(max_seasons) = filters.max_seasons {
        badges.push(format!("Max Seasons: {}", max_seasons));
    }
    badges
}

/// Quality-ranked TV browser; the unfiltered ranked-TV results share this
/// shape and component.
#[component]
pub fn BrowseTvView(data: BrowseTvData) -> Element {
    let colors = CATEGORY_SERIES;
    let badges = browse_tv_filter_badges(&data.filters);
    let total = group_digits(data.total_count);

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📺" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Browse TV Series" }
                        p { class: "card-subtitle",
                            "{data.result_count} of {total} series (ranked by quality score)"
                        }
                    }
                }
                if !badges.is_empty() {
                    div { class: "badge-row card-section",
                        for badge in badges {
                            span { class: "badge", "{badge}" }
                        }
                    }
                }
            }

            if data.result_count == 0 {
                div { class: "card empty-state",
                    span { class: "empty-icon", "📺" }
                    p { class: "strong muted", "No series found" }
                    p { class: "muted", "Try adjusting your filters" }
                }
            } else {
                div { class: "card-grid three-col",
                    for show in data.series.iter() {
                        {
                            let genres: Vec<String> = show
                                .genres
                                .as_deref()
                                .unwrap_or("")
                                .split(',')
                                .map(|g| g.trim().to_string())
                                .filter(|g| !g.is_empty())
                                .take(3)
                                .collect();
                            let rank_class = rank_color(show.rank);
                            let rating = format!("{:.1}", show.avg_rating);
                            let score = format!("{:.1}", show.rank_score);
                            let votes = group_digits(show.avg_votes_per_episode);
                            let bar_class = rating_color(show.avg_rating);
                            let width = show.avg_rating / 10.0 * 100.0;
                            let season_plural = if show.total_seasons == 1 { "" } else { "s" };
                            rsx! {
                                div { class: "card", key: "{show.tconst}",
                                    div { class: "item-lead",
                                        span { class: "rank-bubble large {rank_class}", "{show.rank}" }
                                        div { class: "item-text",
                                            h4 { class: "item-title", "{show.title}" }
                                            p { class: "muted", "{show.years}" }
                                        }
                                    }
                                    if !genres.is_empty() {
                                        div { class: "badge-row",
                                            for genre in genres {
                                                span { class: "{colors.badge}", "{genre}" }
                                            }
                                        }
                                    }
                                    div { class: "rating-block top-border",
                                        div { class: "spread",
                                            span { class: "rating-inline",
                                                span { class: "star", "★" }
                                                span { class: "rating-big", "{rating}" }
                                                span { class: "muted", "/10" }
                                            }
                                            span { class: "caption", "📈 {score}" }
                                        }
                                        div { class: "bar-track",
                                            div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                                        }
                                        div { class: "spread",
                                            span { class: "caption",
                                                "{show.total_seasons} season{season_plural}"
                                            }
                                            span { class: "caption", "{show.total_episodes} episodes" }
                                        }
                                        div { class: "caption centered", "{votes} avg votes/episode" }
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
