use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_ANALYTICS};
use crate::components::format::group_digits;
use crate::tools::{AnalyticsData, SeasonTrend};

/// Wording for the consistency stat (standard deviation of ratings).
pub fn consistency_label(consistency: f64) -> &'static str {
    if consistency < 0.5 {
        "Very consistent"
    } else if consistency < 1.0 {
        "Consistent"
    } else {
        "Variable"
    }
}

/// Highest and lowest per-season averages in the displayed set. Ties flag
/// every season at the extremum.
pub fn season_rating_bounds(trends: &[SeasonTrend]) -> (f64, f64) {
    let max = trends
        .iter()
        .map(|s| s.avg_rating.unwrap_or(0.0))
        .fold(f64::NEG_INFINITY, f64::max);
    let min = trends
        .iter()
        .filter_map(|s| s.avg_rating)
        .fold(f64::INFINITY, f64::min);
    (max, min)
}

/// Series analytics: overall stats, season trend bars, rating distribution
/// histogram, and season finales.
#[component]
pub fn AnalyticsView(data: AnalyticsData) -> Element {
    let colors = CATEGORY_ANALYTICS;
    let stats = &data.overall_statistics;
    let (max_season_rating, min_season_rating) = season_rating_bounds(&data.season_trends);
    let max_distribution = data
        .rating_distribution
        .iter()
        .map(|d| d.episode_count)
        .max()
        .unwrap_or(0);

    let average = stats.average_rating.map(|v| format!("{:.2}", v));
    let consistency = stats.rating_consistency.map(|v| (format!("{:.2}", v), consistency_label(v)));
    let range = stats.rating_range.map(|v| format!("{:.1}", v));
    let range_bounds = match (stats.min_rating, stats.max_rating) {
        (Some(min), Some(max)) => Some(format!("{:.1} - {:.1}", min, max)),
        _ => None,
    };

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📊" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Series Analytics" }
                        p { class: "card-subtitle", "{data.series}" }
                    }
                }
                div { class: "stat-grid card-section",
                    div { class: "stat",
                        div { class: "stat-label", span { class: "star", "★" } span { "Average" } }
                        if let Some(avg) = average {
                            div { class: "stat-value", "{avg}" }
                        }
                    }
                    div { class: "stat",
                        div { class: "stat-label", "Consistency" }
                        if let Some((value, label)) = consistency {
                            div { class: "stat-value", "{value}" }
                            div { class: "stat-note", "{label}" }
                        }
                    }
                    div { class: "stat",
                        div { class: "stat-label", "Range" }
                        if let Some(range_text) = range {
                            div { class: "stat-value", "{range_text}" }
                        }
                        if let Some(bounds) = range_bounds {
                            div { class: "stat-note", "{bounds}" }
                        }
                    }
                    div { class: "stat",
                        div { class: "stat-label", "Total Episodes" }
                        div { class: "stat-value", "{stats.total_episodes}" }
                        div { class: "stat-note", "{stats.total_seasons} seasons" }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📈" }
                    h4 { class: "section-title", "Season Trends" }
                }
                div { class: "card-body",
                    for season in data.season_trends.iter() {
                        {
                            let avg = season.avg_rating.unwrap_or(0.0);
                            let width = if max_season_rating > 0.0 {
                                avg / max_season_rating * 100.0
                            } else {
                                0.0
                            };
                            let is_highest = season.avg_rating == Some(max_season_rating);
                            let is_lowest = season.avg_rating == Some(min_season_rating);
                            let avg_text = season.avg_rating.map(|v| format!("{:.2}", v));
                            let bounds = match (season.worst_rating, season.best_rating) {
                                (Some(worst), Some(best)) => format!("{:.1} - {:.1}", worst, best),
                                _ => String::new(),
                            };
                            let bar_class = rating_color(avg);
                            rsx! {
                                div { class: "trend-row", key: "{season.season}",
                                    div { class: "spread",
                                        span { class: "muted", "Season {season.season}" }
                                        div { class: "detail-row",
                                            if let Some(text) = avg_text {
                                                span { class: "strong", "{text}" }
                                            }
                                            if is_highest {
                                                span { class: "badge badge-success", "Best" }
                                            }
                                            if is_lowest {
                                                span { class: "badge badge-error", "Worst" }
                                            }
                                        }
                                    }
                                    div { class: "bar-track",
                                        div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                                    }
                                    div { class: "spread",
                                        span { class: "caption", "{season.episode_count} episodes" }
                                        span { class: "caption", "{bounds}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card-grid two-col",
                div { class: "card",
                    div { class: "card-header",
                        span { class: "card-icon muted", "📊" }
                        h4 { class: "section-title", "Rating Distribution" }
                    }
                    div { class: "card-body",
                        for bracket in data.rating_distribution.iter() {
                            {
                                let width = if max_distribution > 0 {
                                    bracket.episode_count as f64 / max_distribution as f64 * 100.0
                                } else {
                                    0.0
                                };
                                rsx! {
                                    div { class: "histogram-row", key: "{bracket.rating_bracket}",
                                        span { class: "histogram-label", "{bracket.rating_bracket}" }
                                        div { class: "bar-track wide",
                                            div { class: "bar-fill bar-analytics", style: "width: {width}%" }
                                        }
                                        span { class: "histogram-count", "{bracket.episode_count}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        span { class: "star", "★" }
                        h4 { class: "section-title", "Season Finales" }
                    }
                    div { class: "card-body",
                        for finale in data.season_finales.iter() {
                            {
                                let rating = format!("{:.1}", finale.rating);
                                let label = format!("S{:02} Finale", finale.season);
                                let votes = group_digits(finale.votes);
                                rsx! {
                                    div { class: "finale-row", key: "{finale.season}-{finale.episode}",
                                        div { class: "item-text",
                                            div { class: "strong", "{label}" }
                                            div { class: "caption", "{finale.title}" }
                                            div { class: "caption", "{votes} votes" }
                                        }
                                        span { class: "rating-inline",
                                            span { class: "star", "★" }
                                            span { class: "strong", "{rating}" }
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
