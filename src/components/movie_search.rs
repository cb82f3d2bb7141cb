use dioxus::prelude::*;

use crate::components::design_tokens::{rating_color, CATEGORY_MOVIES};
use crate::components::format::{compact_votes, group_digits};
use crate::tools::{MovieFilters, MovieSearchData};

/// Year-range badge text: "1990-2020", "1990+", "up to 2020", or nothing.
pub fn year_range_display(start_year: Option<i32>, end_year: Option<i32>) -> Option<String> {
    match (start_year, end_year) {
        (Some(start), Some(end)) => Some(format!("{}-{}", start, end)),
        (Some(start), None) => Some(format!("{}+", start)),
        (None, Some(end)) => Some(format!("up to {}", end)),
        (None, None) => None,
    }
}

pub fn movie_filter_badges(filters: &MovieFilters) -> Vec<String> {
    let mut badges = Vec::new();
    if let Some(genre) = &filters.genre {
        badges.push(format!("Genre: {}", genre));
    }
    if let Some(years) = year_range_display(filters.start_year, filters.end_year) {
        badges.push(format!("Years: {}", years));
    }
    if let Some(min_rating) = filters.min_rating {
        badges.push(format!("Rating: {:.1}+", min_rating));
    }
    if let Some(min_votes) = filters.min_votes {
        badges.push(format!("Votes: {}+", group_digits(min_votes)));
    }
    badges
}

/// Movie search results grid. The top-rated flag only appears when the best
/// rating in the set is at least 8; ties all get flagged.
#[component]
pub fn MovieSearchView(data: MovieSearchData) -> Element {
    let colors = CATEGORY_MOVIES;
    let badges = movie_filter_badges(&data.filters);
    let plural = if data.result_count == 1 { "" } else { "s" };
    let top_rating = data
        .movies
        .iter()
        .filter_map(|m| m.rating)
        .fold(0.0_f64, f64::max);

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "🔍" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Movie Search" }
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
                            let rating_display = movie
                                .rating
                                .map(|r| (format!("{:.1}", r), rating_color(r), r / 10.0 * 100.0));
                            let is_top = movie.rating == Some(top_rating) && top_rating >= 8.0;
                            let votes = compact_votes(movie.votes);
                            rsx! {
                                div { class: "card", key: "{movie.tconst}",
                                    div { class: "item-head",
                                        h4 { class: "item-title", "{movie.title}" }
                                        span { class: "badge badge-outline", "{movie.year}" }
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
                                                span { class: "muted votes", "👍 {votes}" }
                                            }
                                            div { class: "bar-track",
                                                div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                                            }
                                            if is_top {
                                                span { class: "badge badge-success", "Top rated" }
                                            }
                                        }
                                    } else {
                                        div { class: "empty-note", "No rating available" }
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
