use dioxus::prelude::*;

use crate::components::design_tokens::{rank_color, rating_color, CATEGORY_MOVIES};
use crate::components::format::group_digits;
use crate::tools::{BrowseMovieFilters, BrowseMoviesData};

pub fn browse_movie_filter_badges(filters: &BrowseMovieFilters) -> Vec<String> {
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
        badges.push(format!("Min Votes: {}", group_digits(min_votes)));
    }
    badges
}

/// Quality-ranked movie browser; also renders the unfiltered ranked-movies
/// results, which share this shape.
#[component]
pub fn BrowseMoviesView(data: BrowseMoviesData) -> Element {
    let colors = CATEGORY_MOVIES;
    let badges = browse_movie_filter_badges(&data.filters);
    let total = group_digits(data.total_count);

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "🎬" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Browse Movies" }
                        p { class: "card-subtitle",
                            "{data.result_count} of {total} movies (ranked by quality score)"
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
                    span { class: "empty-icon", "🎬" }
                    p { class: "strong muted", "No movies found" }
                    p { class: "muted", "Try adjusting your filters" }
                }
            } else {
                div { class: "card-grid three-col",
                    for movie in data.movies.iter() {
                        {
                            let genres: Vec<String> = movie
                                .genres
                                .as_deref()
                                .unwrap_or("")
                                .split(',')
                                .map(|g| g.trim().to_string())
                                .filter(|g| !g.is_empty())
                                .take(3)
                                .collect();
                            let rank_class = rank_color(movie.rank);
                            let rating = format!("{:.1}", movie.rating);
                            let score = format!("{:.1}", movie.rank_score);
                            let votes = group_digits(movie.votes);
                            let bar_class = rating_color(movie.rating);
                            let width = movie.rating / 10.0 * 100.0;
                            rsx! {
                                div { class: "card", key: "{movie.tconst}",
                                    div { class: "item-lead",
                                        span { class: "rank-bubble large {rank_class}", "{movie.rank}" }
                                        div { class: "item-text",
                                            h4 { class: "item-title", "{movie.title}" }
                                            span { class: "badge badge-outline", "{movie.year}" }
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
                                        div { class: "spread top-border",
                                            span { class: "caption", "👍 Votes" }
                                            span { class: "strong", "{votes}" }
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
