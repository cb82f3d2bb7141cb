use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_ANALYTICS};
use crate::components::format::group_digits;
use crate::tools::{GenreAnalysisData, GenreStat};

/// Number of genres shown before the "top 20 of N" footnote kicks in.
pub const GENRE_DISPLAY_CAP: usize = 20;

/// Genres ordered by average rating, best first; unrated genres sink to the
/// bottom. Stable sort keeps input order between equals.
pub fn sorted_genres(genres: &[GenreStat]) -> Vec<GenreStat> {
    let mut sorted = genres.to_vec();
    sorted.sort_by(|a, b| {
        b.avg_rating
            .unwrap_or(0.0)
            .partial_cmp(&a.avg_rating.unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

/// Scale ceiling for the rating bars: the best average, but never below 10
/// so bars stay proportional to the full scale.
pub fn genre_scale_max(genres: &[GenreStat]) -> f64 {
    genres
        .iter()
        .map(|g| g.avg_rating.unwrap_or(0.0))
        .fold(10.0_f64, f64::max)
}

/// Genre performance ranking for movies or TV series.
#[component]
pub fn GenreAnalysisView(data: GenreAnalysisData) -> Element {
    let colors = CATEGORY_ANALYTICS;
    let sorted = sorted_genres(&data.genres);
    let scale_max = genre_scale_max(&sorted);
    let type_label = if data.title_type == "movie" { "Movies" } else { "TV Series" };
    let type_icon = if data.title_type == "movie" { "🎬" } else { "📺" };
    let min_votes = group_digits(data.min_votes);
    let shown: Vec<GenreStat> = sorted.into_iter().take(GENRE_DISPLAY_CAP).collect();
    let overflow = data.genre_count as usize > GENRE_DISPLAY_CAP;

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📊" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Genre Analysis" }
                        p { class: "card-subtitle", "{data.genre_count} genres" }
                    }
                    div { class: "badge-row",
                        span { class: "badge badge-outline", "{type_icon} {type_label}" }
                        span { class: "badge badge-outline", "{min_votes}+ votes" }
                    }
                }
            }

            if shown.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No genres matched the vote threshold" }
                }
            } else {
                div { class: "result-stack tight",
                    for (index, genre) in shown.iter().enumerate() {
                        {
                            let position = index + 1;
                            let avg = genre.avg_rating.map(|v| format!("{:.2}", v));
                            let badge_class = if index < 3 { "badge badge-success" } else { "badge" };
                            let bar = genre.avg_rating.map(|v| (rating_color(v), v / scale_max * 100.0));
                            let range = match (genre.min_rating, genre.max_rating) {
                                (Some(min), Some(max)) => format!("Range: {:.1} - {:.1}", min, max),
                                _ => String::new(),
                            };
                            let titles = group_digits(genre.title_count);
                            let votes = group_digits(genre.total_votes);
                            rsx! {
                                div { class: "card", key: "{genre.genres}",
                                    div { class: "item-head",
                                        div { class: "detail-row",
                                            span { class: "mono muted", "#{position}" }
                                            h4 { class: "strong", "{genre.genres}" }
                                        }
                                        if let Some(avg_text) = avg {
                                            span { class: "{badge_class}", "{avg_text}" }
                                        }
                                    }
                                    if let Some((bar_class, width)) = bar {
                                        div { class: "bar-track",
                                            div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                                        }
                                        div { class: "spread",
                                            span { class: "caption", "{range}" }
                                            span { class: "caption", "{titles} titles" }
                                        }
                                    }
                                    div { class: "spread top-border",
                                        span { class: "muted", "Total Votes" }
                                        span { class: "strong", "{votes}" }
                                    }
                                }
                            }
                        }
                    }
                }
                if overflow {
                    p { class: "muted centered",
                        "Showing top {GENRE_DISPLAY_CAP} of {data.genre_count} genres"
                    }
                }
            }
        }
    }
}
