use dioxus::prelude::*;

use crate::components::design_tokens::{CATEGORY_SERIES, SEMANTIC_ERROR, SEMANTIC_SUCCESS};
use crate::components::format::episode_tag;
use crate::tools::{ComparedSeries, SeriesComparisonData};

/// Index of the best-rated found series. Missing ratings count as zero and
/// a strictly-greater comparison keeps the first occurrence on ties.
pub fn best_overall_index(series: &[ComparedSeries]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, entry) in series.iter().enumerate() {
        if !entry.found {
            continue;
        }
        let rating = entry
            .statistics
            .as_ref()
            .and_then(|s| s.avg_rating)
            .unwrap_or(0.0);
        match best {
            Some((_, best_rating)) if rating <= best_rating => {}
            _ => best = Some((index, rating)),
        }
    }
    best.map(|(index, _)| index)
}

/// Side-by-side series comparison with a "Top rated" summary, per-series
/// stat grids and best/worst episode callouts. Series the API could not
/// resolve render their own error card.
#[component]
pub fn SeriesComparisonView(data: SeriesComparisonData) -> Element {
    let colors = CATEGORY_SERIES;
    let best_index = best_overall_index(&data.series);
    let best_summary = best_index.and_then(|index| {
        let best = &data.series[index];
        best.statistics
            .as_ref()
            .and_then(|s| s.avg_rating)
            .map(|avg| format!("{} ({:.2}/10)", best.name, avg))
    });

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📊" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Series Comparison" }
                        p { class: "card-subtitle", "{data.comparison_count} series" }
                    }
                }
                if let Some(summary) = best_summary {
                    div { class: "card-section detail-row",
                        span { class: "{SEMANTIC_SUCCESS.badge}", "Top rated" }
                        span { class: "strong", "{summary}" }
                    }
                }
            }

            if data.series.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No series to compare" }
                }
            } else {
                div { class: "result-stack tight",
                    for (index, series) in data.series.iter().enumerate() {
                        if !series.found {
                            {
                                let error = series.error.clone().unwrap_or_default();
                                rsx! {
                                    div {
                                        class: "card panel {SEMANTIC_ERROR.border} {SEMANTIC_ERROR.bg}",
                                        key: "{series.name}",
                                        div { class: "detail-row",
                                            span { class: "{SEMANTIC_ERROR.icon}", "✖" }
                                            span { class: "strong {SEMANTIC_ERROR.icon}", "{series.name}" }
                                            span { class: "{SEMANTIC_ERROR.icon}", "- {error}" }
                                        }
                                    }
                                }
                            }
                        } else {
                            {
                                let is_best = Some(index) == best_index;
                                let card_class = if is_best { "card ring-series" } else { "card" };
                                let stats = series.statistics.clone().unwrap_or(crate::tools::SeriesStatistics {
                                    total_episodes: 0,
                                    avg_rating: None,
                                    max_rating: None,
                                    min_rating: None,
                                    total_seasons: 0,
                                    total_votes: 0,
                                    rating_range: None,
                                });
                                let years = series.years.clone().unwrap_or_default();
                                let genres: Vec<String> = series
                                    .genres
                                    .as_deref()
                                    .unwrap_or("")
                                    .split(',')
                                    .map(|g| g.trim().to_string())
                                    .filter(|g| !g.is_empty())
                                    .collect();
                                let avg = stats.avg_rating.map(|v| format!("{:.1}", v));
                                let max = stats.max_rating.map(|v| format!("{:.1}/10", v));
                                let min = stats.min_rating.map(|v| format!("{:.1}/10", v));
                                let range = stats.rating_range.map(|v| format!("{:.1} pts", v));
                                let votes = format!("{:.0}K", stats.total_votes as f64 / 1000.0);
                                let best_episode = series.best_episode.clone();
                                let worst_episode = series.worst_episode.clone();
                                rsx! {
                                    div { class: "{card_class}", key: "{series.name}",
                                        div { class: "item-head",
                                            div { class: "item-text",
                                                div { class: "item-title-row",
                                                    h4 { class: "item-title", "{series.name}" }
                                                    if is_best {
                                                        span { class: "{SEMANTIC_SUCCESS.badge}", "Top" }
                                                    }
                                                }
                                                p { class: "muted",
                                                    "{years} • {stats.total_seasons} seasons • {stats.total_episodes} episodes"
                                                }
                                            }
                                            if let Some(avg_text) = avg {
                                                div { class: "item-trail column",
                                                    span { class: "rating-inline",
                                                        span { class: "star", "★" }
                                                        span { class: "rating-big", "{avg_text}" }
                                                    }
                                                    span { class: "caption", "average" }
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
                                        div { class: "stat-grid compact",
                                            div { class: "stat",
                                                div { class: "stat-label", "▲ Best" }
                                                if let Some(max_text) = max {
                                                    div { class: "strong", "{max_text}" }
                                                }
                                            }
                                            div { class: "stat",
                                                div { class: "stat-label", "▼ Worst" }
                                                if let Some(min_text) = min {
                                                    div { class: "strong", "{min_text}" }
                                                }
                                            }
                                            div { class: "stat",
                                                div { class: "stat-label", "Range" }
                                                if let Some(range_text) = range {
                                                    div { class: "strong", "{range_text}" }
                                                }
                                            }
                                            div { class: "stat",
                                                div { class: "stat-label", "Votes" }
                                                div { class: "strong", "{votes}" }
                                            }
                                        }
                                        if best_episode.is_some() || worst_episode.is_some() {
                                            div { class: "card-grid two-col top-border",
                                                if let Some(episode) = best_episode {
                                                    {
                                                        let tag = episode_tag(episode.season, episode.episode);
                                                        let rating = format!("{:.1}", episode.rating);
                                                        rsx! {
                                                            div { class: "item-text",
                                                                div { class: "caption", "▲ Best Episode" }
                                                                div { class: "strong", "{episode.title}" }
                                                                div { class: "meta-row",
                                                                    span { class: "muted", "{tag}" }
                                                                    span { class: "rating-inline",
                                                                        span { class: "star", "★" }
                                                                        "{rating}"
                                                                    }
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                                if let Some(episode) = worst_episode {
                                                    {
                                                        let tag = episode_tag(episode.season, episode.episode);
                                                        let rating = format!("{:.1}", episode.rating);
                                                        rsx! {
                                                            div { class: "item-text",
                                                                div { class: "caption", "▼ Worst Episode" }
                                                                div { class: "strong", "{episode.title}" }
                                                                div { class: "meta-row",
                                                                    span { class: "muted", "{tag}" }
                                                                    span { class: "rating-inline",
                                                                        span { class: "star", "★" }
                                                                        "{rating}"
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
                    }
                }
            }
        }
    }
}
