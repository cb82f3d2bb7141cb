use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_SERIES};
use crate::tools::{Episode, EpisodesData};

/// Aggregates computed per season from the flat episode list. Display-only;
/// the server never sends these.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStats {
    pub season: u32,
    pub episode_count: usize,
    pub avg_rating: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    pub total_votes: u64,
    pub episodes: Vec<Episode>,
}

/// Group episodes by season, ascending, with per-season aggregates.
pub fn season_stats(episodes: &[Episode]) -> Vec<SeasonStats> {
    let mut seasons: std::collections::BTreeMap<u32, Vec<Episode>> = std::collections::BTreeMap::new();
    for episode in episodes {
        seasons.entry(episode.season).or_default().push(episode.clone());
    }

    seasons
        .into_iter()
        .map(|(season, episodes)| {
            let count = episodes.len();
            let avg_rating =
                episodes.iter().map(|ep| ep.rating).sum::<f64>() / count.max(1) as f64;
            let max_rating = episodes.iter().map(|ep| ep.rating).fold(f64::NEG_INFINITY, f64::max);
            let min_rating = episodes.iter().map(|ep| ep.rating).fold(f64::INFINITY, f64::min);
            let total_votes = episodes.iter().map(|ep| ep.votes).sum();
            SeasonStats {
                season,
                episode_count: count,
                avg_rating,
                max_rating,
                min_rating,
                total_votes,
                episodes,
            }
        })
        .collect()
}

/// Mean rating across the whole run.
pub fn overall_average(episodes: &[Episode]) -> f64 {
    if episodes.is_empty() {
        return 0.0;
    }
    episodes.iter().map(|ep| ep.rating).sum::<f64>() / episodes.len() as f64
}

/// Season-by-season episode browser with expandable seasons and
/// season-over-season trend arrows.
#[component]
pub fn EpisodesView(data: EpisodesData) -> Element {
    let mut selected_season = use_signal(|| None::<u32>);

    let colors = CATEGORY_SERIES;
    let seasons = season_stats(&data.episodes);
    let season_count = seasons.len();
    let average = format!("{:.2}", overall_average(&data.episodes));

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📺" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "{data.series}" }
                        p { class: "card-subtitle", "All Episodes" }
                    }
                    div { class: "badge-row",
                        span { class: "badge", "{data.episode_count} episodes" }
                        span { class: "badge", "{season_count} seasons" }
                    }
                }
                div { class: "card-section",
                    div { class: "detail-row",
                        span { class: "star", "★" }
                        span { class: "muted", "Average rating:" }
                        span { class: "strong", "{average}/10" }
                    }
                }
            }

            if seasons.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No rated episodes available for this series" }
                }
            } else {
                div { class: "result-stack tight",
                    for (index, season) in seasons.iter().enumerate() {
                        {
                            let is_selected = *selected_season.read() == Some(season.season);
                            // Compare against the previous season in display order.
                            let trend_up = (index > 0)
                                .then(|| season.avg_rating > seasons[index - 1].avg_rating);
                            let season_number = season.season;
                            let avg = format!("{:.2}", season.avg_rating);
                            let range = format!(
                                "{:.1} - {:.1}",
                                season.min_rating, season.max_rating
                            );
                            let bar_class = rating_color(season.avg_rating);
                            let bar_width = season.avg_rating / 10.0 * 100.0;
                            let chevron = if is_selected { "chevron open" } else { "chevron" };
                            let episodes = season.episodes.clone();
                            rsx! {
                                div { key: "{season.season}",
                                    button {
                                        class: "season-toggle",
                                        onclick: move |_| {
                                            let current = *selected_season.read();
                                            selected_season.set(if current == Some(season_number) {
                                                None
                                            } else {
                                                Some(season_number)
                                            });
                                        },
                                        div { class: "card hover-card",
                                            div { class: "item-head",
                                                div { class: "item-lead",
                                                    span { class: "rank-bubble {colors.badge}", "{season.season}" }
                                                    div { class: "item-text",
                                                        div { class: "item-title-row",
                                                            span { class: "strong", "Season {season.season}" }
                                                            span { class: "muted", "{season.episode_count} episodes" }
                                                        }
                                                        div { class: "meta-row",
                                                            span { class: "rating-inline",
                                                                span { class: "star", "★" }
                                                                span { class: "strong", "{avg}" }
                                                            }
                                                            span { class: "muted", "{range}" }
                                                            if let Some(up) = trend_up {
                                                                if up {
                                                                    span { class: "trend-up", "▲ Up" }
                                                                } else {
                                                                    span { class: "trend-down", "▼ Down" }
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                                div { class: "item-trail",
                                                    div { class: "bar-track narrow",
                                                        div { class: "bar-fill {bar_class}", style: "width: {bar_width}%" }
                                                    }
                                                    span { class: "{chevron}", "⌄" }
                                                }
                                            }
                                        }
                                    }
                                    if is_selected {
                                        div { class: "season-episodes",
                                            for episode in episodes {
                                                {
                                                    let rating = format!("{:.1}", episode.rating);
                                                    rsx! {
                                                        div { class: "episode-row", key: "{episode.tconst}",
                                                            div { class: "episode-label",
                                                                span { class: "muted", {format!("E{:02}", episode.episode)} }
                                                                span { class: "episode-title", "{episode.title}" }
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
                }
            }
        }
    }
}
