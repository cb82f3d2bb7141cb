use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_MOVIES, SEMANTIC_ERROR, SEMANTIC_SUCCESS};
use crate::components::format::group_digits;
use crate::tools::{ComparedMovie, MovieComparisonData};

/// Titles of found-and-rated movies ordered by rating, best first. A stable
/// sort keeps input order between equal ratings.
pub fn ranking_order(movies: &[ComparedMovie]) -> Vec<String> {
    let mut rated: Vec<&ComparedMovie> = movies
        .iter()
        .filter(|m| m.found && m.rating.is_some())
        .collect();
    rated.sort_by(|a, b| {
        b.rating
            .unwrap_or(0.0)
            .partial_cmp(&a.rating.unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rated.into_iter().map(|m| m.title.clone()).collect()
}

/// Movie comparison: per-movie cards with rank bubbles, a winner ring, and
/// a final rankings board. Movies the API could not find render an inline
/// not-found card.
#[component]
pub fn MovieComparisonView(data: MovieComparisonData) -> Element {
    let colors = CATEGORY_MOVIES;
    let rankings = ranking_order(&data.movies);
    let winner = rankings.first().cloned();
    let found_count = data.movies.iter().filter(|m| m.found).count();
    let missing_count = data.movies.len() - found_count;

    let winner_summary = winner.as_ref().and_then(|title| {
        data.movies
            .iter()
            .find(|m| &m.title == title)
            .and_then(|m| m.rating)
            .map(|rating| format!("{} ({:.2}/10)", title, rating))
    });

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📊" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Movie Comparison" }
                        p { class: "card-subtitle", "{data.comparison_count} movies" }
                    }
                    div { class: "badge-row",
                        span { class: "badge badge-success", "{found_count} found" }
                        if missing_count > 0 {
                            span { class: "badge badge-error", "{missing_count} missing" }
                        }
                    }
                }
                if let Some(summary) = winner_summary {
                    div { class: "card-section detail-row",
                        span { class: "{SEMANTIC_SUCCESS.badge}", "Highest rated" }
                        span { class: "strong", "{summary}" }
                    }
                }
            }

            if data.movies.is_empty() {
                div { class: "card empty-state",
                    p { class: "muted", "No movies to compare" }
                }
            } else {
                div { class: "card-grid three-col",
                    for movie in data.movies.iter() {
                        {
                            let rank = rankings.iter().position(|t| t == &movie.title).map(|p| p + 1);
                            let is_winner = winner.as_deref() == Some(movie.title.as_str());
                            let card_class = if is_winner { "card ring-movies" } else { "card" };
                            let genres: Vec<String> = movie
                                .genres
                                .as_deref()
                                .unwrap_or("")
                                .split(',')
                                .map(|g| g.trim().to_string())
                                .filter(|g| !g.is_empty())
                                .take(3)
                                .collect();
                            let rating_display = movie
                                .rating
                                .map(|r| (format!("{:.2}", r), rating_color(r), r / 10.0 * 100.0));
                            let votes = movie.votes.map(group_digits);
                            let error = movie
                                .error
                                .clone()
                                .unwrap_or_else(|| "Movie not found in database".to_string());
                            rsx! {
                                div { class: "{card_class}", key: "{movie.title}",
                                    if movie.found {
                                        if let Some(rank_value) = rank {
                                            {
                                                let rank_class = if rank_value <= 3 {
                                                    "rank-bubble badge-success"
                                                } else {
                                                    "rank-bubble badge-movies"
                                                };
                                                rsx! {
                                                    div { class: "detail-row",
                                                        span { class: "{rank_class}", "{rank_value}" }
                                                        if is_winner {
                                                            span { class: "{SEMANTIC_SUCCESS.badge}", "Top" }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                        div { class: "item-text",
                                            h4 { class: "item-title", "{movie.title}" }
                                            if let Some(year) = movie.year {
                                                span { class: "badge badge-outline", "{year}" }
                                            }
                                        }
                                        if !genres.is_empty() {
                                            div { class: "badge-row",
                                                for genre in genres {
                                                    span { class: "{colors.badge}", "{genre}" }
                                                }
                                            }
                                        }
                                        if let Some((rating_text, bar_class, width)) = rating_display {
                                            div { class: "rating-block top-border",
                                                div { class: "rating-line",
                                                    span { class: "star", "★" }
                                                    span { class: "rating-big", "{rating_text}" }
                                                    span { class: "muted", "/10" }
                                                }
                                                div { class: "bar-track",
                                                    div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                                                }
                                                if let Some(votes_text) = votes {
                                                    div { class: "detail-row",
                                                        span { class: "strong", "{votes_text}" }
                                                        span { class: "caption", "votes" }
                                                    }
                                                }
                                            }
                                        } else {
                                            div { class: "empty-note", "No rating available" }
                                        }
                                    } else {
                                        div { class: "detail-row",
                                            span { class: "{SEMANTIC_ERROR.icon}", "⚠" }
                                            div { class: "item-text",
                                                h4 { class: "item-title {SEMANTIC_ERROR.icon}", "{movie.title}" }
                                                p { class: "muted", "{error}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if rankings.len() > 1 {
                div { class: "card",
                    div { class: "card-header",
                        span { class: "star", "★" }
                        h4 { class: "section-title", "Rankings" }
                    }
                    div { class: "card-grid three-col card-body",
                        for (index, title) in rankings.iter().enumerate() {
                            {
                                let position = index + 1;
                                let rank_class = if index == 0 {
                                    "rank-bubble badge-success"
                                } else {
                                    "rank-bubble badge-movies"
                                };
                                let rating = data
                                    .movies
                                    .iter()
                                    .find(|m| &m.title == title)
                                    .and_then(|m| m.rating)
                                    .map(|r| format!("{:.2}/10", r))
                                    .unwrap_or_default();
                                rsx! {
                                    div { class: "ranking-row", key: "{title}",
                                        span { class: "{rank_class}", "{position}" }
                                        div { class: "item-text",
                                            p { class: "strong", "{title}" }
                                            p { class: "caption", "{rating}" }
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
