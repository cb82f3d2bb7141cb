use dioxus::prelude::*;

use crate::components::design_tokens::{CATEGORY_MOVIES, SEMANTIC_SUCCESS};
use crate::components::format::group_digits;
use crate::components::movie_search::year_range_display;
use crate::tools::{TopMovieFilters, TopMoviesData};

/// Filter badges for the top-movies header. Years and min-votes always show
/// (the endpoint applies defaults); genre only when set.
pub fn top_movie_filter_badges(filters: &TopMovieFilters) -> Vec<String> {
    let mut badges = Vec::new();
    if let Some(genre) = &filters.genre {
        badges.push(format!("Genre: {}", genre));
    }
    let years = year_range_display(filters.start_year, filters.end_year)
        .unwrap_or_else(|| "All Time".to_string());
    badges.push(format!("Years: {}", years));
    badges.push(format!("Min votes: {}", group_digits(filters.min_votes)));
    badges
}

/// Top-rated movies list. The progress bar is scaled by vote count against
/// the most-voted entry in the set.
#[component]
pub fn TopMoviesView(data: TopMoviesData) -> Element {
    let colors = CATEGORY_MOVIES;
    let badges = top_movie_filter_badges(&data.filters);
    let max_votes = data.movies.iter().map(|m| m.votes).max().unwrap_or(0);

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📈" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Top Rated Movies" }
                        p { class: "card-subtitle", "{data.result_count} movies" }
                    }
                }
                div { class: "badge-row card-section",
                    for badge in badges {
                        span { class: "badge", "{badge}" }
                    }
                }
            }

            if data.movies.is_empty() {
                div { class: "card empty-state",
                    span { class: "empty-icon", "🎬" }
                    p { class: "strong muted", "No movies found" }
                    p { class: "muted", "Try adjusting your filters" }
                }
            } else {
                div { class: "result-stack tight",
                    for movie in data.movies.iter() {
                        {
                            let rank_class = if movie.rank <= 3 {
                                SEMANTIC_SUCCESS.badge
                            } else {
                                colors.badge
                            };
                            let genres: Vec<String> = movie
                                .genres
                                .as_deref()
                                .unwrap_or("")
                                .split(',')
                                .map(|g| g.trim().to_string())
                                .filter(|g| !g.is_empty())
                                .take(2)
                                .collect();
                            let rating = format!("{:.2}", movie.rating);
                            let votes = group_digits(movie.votes);
                            let width = if max_votes > 0 {
                                movie.votes as f64 / max_votes as f64 * 100.0
                            } else {
                                0.0
                            };
                            let bar_class = crate::components::design_tokens::rating_color(movie.rating);
                            rsx! {
                                div { class: "card", key: "{movie.tconst}",
                                    div { class: "item-lead",
                                        span { class: "rank-bubble {rank_class}", "{movie.rank}" }
                                        div { class: "item-text grow",
                                            div { class: "item-head",
                                                div { class: "item-text",
                                                    h4 { class: "item-title", "{movie.title}" }
                                                    div { class: "badge-row",
                                                        span { class: "badge badge-outline", "{movie.year}" }
                                                        for genre in genres {
                                                            span { class: "{colors.badge}", "{genre}" }
                                                        }
                                                    }
                                                }
                                                div { class: "item-trail column",
                                                    span { class: "rating-inline",
                                                        span { class: "star", "★" }
                                                        span { class: "rating-big", "{rating}" }
                                                    }
                                                    span { class: "caption", "/10" }
                                                }
                                            }
                                            div { class: "spread",
                                                span { class: "muted", "👍 {votes} votes" }
                                                if movie.rank <= 5 {
                                                    span { class: "{SEMANTIC_SUCCESS.badge}", "Top {movie.rank}" }
                                                }
                                            }
                                            div { class: "bar-track narrow",
                                                div { class: "bar-fill {bar_class}", style: "width: {width}%" }
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
