use dioxus::prelude::*;

use crate::components::design_tokens::CATEGORY_SERIES;
use crate::tools::{SeriesFilters, SeriesSearchData, SeriesSearchHit};

/// One badge per populated filter field; an all-empty filter object renders
/// no badges at all.
pub fn series_filter_badges(filters: &SeriesFilters) -> Vec<String> {
    let mut badges = Vec::new();
    if let Some(genre) = &filters.genre {
        badges.push(format!("Genre: {}", genre));
    }
    if let Some(start_year) = filters.start_year {
        badges.push(format!("From: {}", start_year));
    }
    if let Some(end_year) = filters.end_year {
        badges.push(format!("Until: {}", end_year));
    }
    if let Some(min_rating) = filters.min_rating {
        badges.push(format!("Rating: {}+", min_rating));
    }
    badges
}

fn years_display(hit: &SeriesSearchHit) -> String {
    match hit.end_year {
        Some(end) => format!("{}-{}", hit.start_year, end),
        None => format!("{}-Present", hit.start_year),
    }
}

/// Series search results: header with filter badges, then a card grid with
/// an explicit empty state.
#[component]
pub fn SeriesSearchView(data: SeriesSearchData) -> Element {
    let colors = CATEGORY_SERIES;
    let badges = series_filter_badges(&data.filters);
    let title = match &data.query {
        Some(query) => format!("Series Search: \"{}\"", query),
        None => "Series Search".to_string(),
    };
    let plural = if data.result_count == 1 { "" } else { "s" };

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "🔍" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "{title}" }
                        p { class: "card-subtitle", "{data.result_count} result{plural}" }
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

            if data.series.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No series found matching your criteria" }
                }
            } else {
                div { class: "card-grid two-col",
                    for series in data.series.iter() {
                        {
                            let years = years_display(series);
                            let genres: Vec<String> = series
                                .genres
                                .as_deref()
                                .unwrap_or("")
                                .split(',')
                                .map(|g| g.trim().to_string())
                                .filter(|g| !g.is_empty())
                                .take(4)
                                .collect();
                            let rating = series.avg_rating.map(|r| format!("{:.1}", r));
                            rsx! {
                                div { class: "card hover-card", key: "{series.tconst}",
                                    h4 { class: "item-title", "{series.title}" }
                                    div { class: "meta-row",
                                        span { class: "muted", "🗓 {years}" }
                                        span { class: "muted", "📺 {series.episode_count} episodes" }
                                        if let Some(rating_text) = rating {
                                            span { class: "rating-inline",
                                                span { class: "star", "★" }
                                                span { class: "strong", "{rating_text}" }
                                            }
                                        }
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
                }
            }
        }
    }
}
