use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_ANALYTICS};
use crate::components::format::group_digits;
use crate::tools::{DecadeAnalysisData, DecadeStat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTrend {
    Rising,
    Declining,
    Stable,
}

impl RatingTrend {
    pub fn label(&self) -> &'static str {
        match self {
            RatingTrend::Rising => "Rising",
            RatingTrend::Declining => "Declining",
            RatingTrend::Stable => "Stable",
        }
    }
}

/// Summary derived from the decade list, which arrives newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeSummary {
    pub best_index: Option<usize>,
    pub most_prolific_index: Option<usize>,
    pub trend: RatingTrend,
    pub max_rating: f64,
}

/// Best decade by average rating, most prolific by title count, and the
/// direction over the three most recent rated decades (a ±0.1 band counts
/// as stable).
pub fn decade_summary(decades: &[DecadeStat]) -> DecadeSummary {
    if decades.is_empty() {
        return DecadeSummary {
            best_index: None,
            most_prolific_index: None,
            trend: RatingTrend::Stable,
            max_rating: 10.0,
        };
    }

    let mut best_index = 0;
    let mut most_prolific_index = 0;
    for (index, decade) in decades.iter().enumerate() {
        if decade.avg_rating.unwrap_or(0.0) > decades[best_index].avg_rating.unwrap_or(0.0) {
            best_index = index;
        }
        if decade.title_count > decades[most_prolific_index].title_count {
            most_prolific_index = index;
        }
    }

    let max_rating = decades
        .iter()
        .map(|d| d.avg_rating.unwrap_or(0.0))
        .fold(f64::NEG_INFINITY, f64::max);

    // Oldest-to-newest across the three most recent decades with data.
    let recent: Vec<f64> = decades
        .iter()
        .take(3)
        .filter_map(|d| d.avg_rating)
        .rev()
        .collect();
    let trend = if recent.len() >= 2 {
        let diff = recent[recent.len() - 1] - recent[0];
        if diff > 0.1 {
            RatingTrend::Rising
        } else if diff < -0.1 {
            RatingTrend::Declining
        } else {
            RatingTrend::Stable
        }
    } else {
        RatingTrend::Stable
    };

    DecadeSummary {
        best_index: Some(best_index),
        most_prolific_index: Some(most_prolific_index),
        trend,
        max_rating,
    }
}

/// Decade-by-decade rating trends with a best/most-prolific/trend summary
/// and expandable decade rows.
#[component]
pub fn DecadeAnalysisView(data: DecadeAnalysisData) -> Element {
    let mut expanded_decade = use_signal(|| None::<String>);

    let colors = CATEGORY_ANALYTICS;
    let summary = decade_summary(&data.decades);
    let type_label = if data.title_type == "movie" { "Movies" } else { "TV Series" };
    let type_icon = if data.title_type == "movie" { "🎬" } else { "📺" };
    let min_votes = group_digits(data.min_votes);

    let best = summary.best_index.map(|i| data.decades[i].clone());
    let prolific = summary.most_prolific_index.map(|i| data.decades[i].clone());
    let trend_label = summary.trend.label();
    let trend_class = match summary.trend {
        RatingTrend::Rising => "stat-value trend-rising",
        RatingTrend::Declining => "stat-value trend-declining",
        RatingTrend::Stable => "stat-value trend-stable",
    };
    let trend_icon = match summary.trend {
        RatingTrend::Rising => "▲",
        RatingTrend::Declining => "▼",
        RatingTrend::Stable => "",
    };
    let decade_count = data.decades.len();

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "🗓" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Decade Analysis" }
                        p { class: "card-subtitle", "{decade_count} decades" }
                    }
                    div { class: "badge-row",
                        span { class: "badge badge-outline", "{type_icon} {type_label}" }
                        span { class: "badge badge-outline", "{min_votes}+ votes" }
                    }
                }
                if let Some(best_decade) = best {
                    div { class: "stat-grid card-section",
                        div { class: "stat",
                            div { class: "stat-label", "Best Decade" }
                            div { class: "stat-value", "{best_decade.decade}" }
                            if let Some(avg) = best_decade.avg_rating {
                                div { class: "stat-note", {format!("{:.2} avg rating", avg)} }
                            }
                        }
                        if let Some(prolific_decade) = prolific {
                            div { class: "stat",
                                div { class: "stat-label", "Most Prolific" }
                                div { class: "stat-value", "{prolific_decade.decade}" }
                                div { class: "stat-note",
                                    {format!("{} titles", group_digits(prolific_decade.title_count))}
                                }
                            }
                        }
                        div { class: "stat",
                            div { class: "stat-label", "Trend" }
                            div { class: "{trend_class}", "{trend_icon} {trend_label}" }
                            div { class: "stat-note", "Last 30 years" }
                        }
                    }
                }
            }

            if data.decades.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No decades matched the vote threshold" }
                }
            } else {
                div { class: "result-stack tight",
                    for (index, decade) in data.decades.iter().enumerate() {
                        {
                            let is_expanded = expanded_decade.read().as_deref() == Some(decade.decade.as_str());
                            let is_best = summary.best_index == Some(index);
                            let bubble_class = if is_best { "rank-bubble large badge-success" } else { "rank-bubble large badge-analytics" };
                            let decade_key = decade.decade.clone();
                            let short = decade.decade.trim_end_matches('s').to_string();
                            let titles = group_digits(decade.title_count);
                            let votes = group_digits(decade.total_votes);
                            let avg = decade.avg_rating.map(|v| format!("{:.2}", v));
                            let peak = decade.max_rating.map(|v| format!("{:.2}", v));
                            let bar = decade
                                .avg_rating
                                .map(|v| (rating_color(v), if summary.max_rating > 0.0 { v / summary.max_rating * 100.0 } else { 0.0 }));
                            let chevron = if is_expanded { "chevron open" } else { "chevron" };
                            rsx! {
                                button {
                                    class: "season-toggle",
                                    key: "{decade.decade}",
                                    onclick: move |_| {
                                        let current = expanded_decade.read().clone();
                                        expanded_decade.set(if current.as_deref() == Some(decade_key.as_str()) {
                                            None
                                        } else {
                                            Some(decade_key.clone())
                                        });
                                    },
                                    div { class: "card hover-card",
                                        div { class: "item-head",
                                            div { class: "item-lead",
                                                span { class: "{bubble_class}", "{short}" }
                                                div { class: "item-text",
                                                    div { class: "item-title-row",
                                                        h4 { class: "item-title", "{decade.decade}" }
                                                        if is_best {
                                                            span { class: "badge badge-success", "Best" }
                                                        }
                                                    }
                                                    div { class: "meta-row",
                                                        span { class: "muted", "{titles} titles" }
                                                        span { class: "muted", "•" }
                                                        span { class: "muted", "{votes} votes" }
                                                    }
                                                }
                                            }
                                            div { class: "item-trail",
                                                if let Some(avg_text) = avg.clone() {
                                                    div { class: "item-trail column",
                                                        span { class: "rating-big", "{avg_text}" }
                                                        span { class: "caption", "average" }
                                                    }
                                                }
                                                span { class: "{chevron}", "⌄" }
                                            }
                                        }
                                        if let Some((bar_class, width)) = bar {
                                            div { class: "rating-block",
                                                div { class: "bar-track",
                                                    div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                                                }
                                                div { class: "spread",
                                                    span { class: "caption", "Rating Progress" }
                                                    if let Some(peak_text) = peak.clone() {
                                                        span { class: "caption", "Peak: {peak_text}" }
                                                    }
                                                }
                                            }
                                        }
                                        if is_expanded {
                                            div { class: "stat-grid top-border",
                                                div { class: "stat boxed",
                                                    div { class: "stat-label", "Average Rating" }
                                                    if let Some(avg_text) = avg {
                                                        div { class: "stat-value", "{avg_text}" }
                                                    }
                                                }
                                                div { class: "stat boxed",
                                                    div { class: "stat-label", "Peak Rating" }
                                                    if let Some(peak_text) = peak {
                                                        div { class: "stat-value", "{peak_text}" }
                                                    }
                                                }
                                                div { class: "stat boxed",
                                                    div { class: "stat-label", "Total Titles" }
                                                    div { class: "stat-value", "{titles}" }
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
