#[cfg(test)]
mod tests {
    use serde_json::json;
    use serieschat::components::decade_analysis::{decade_summary, RatingTrend};
    use serieschat::components::episodes::{overall_average, season_stats};
    use serieschat::components::genre_analysis::{genre_scale_max, sorted_genres};
    use serieschat::components::movie_comparison::ranking_order;
    use serieschat::components::movie_search::{movie_filter_badges, year_range_display};
    use serieschat::components::series_comparison::best_overall_index;
    use serieschat::components::series_search::series_filter_badges;
    use serieschat::components::tool_panel::{contextual_details, tool_status_message};
    use serieschat::tools::{
        ComparedMovie, ComparedSeries, DecadeStat, Episode, GenreStat, MovieFilters,
        SeriesFilters, SeriesStatistics, ToolKind,
    };

    fn episode(season: u32, number: u32, rating: f64, votes: u64) -> Episode {
        Episode {
            season,
            episode: number,
            title: format!("S{}E{}", season, number),
            rating,
            votes,
            tconst: format!("tt{}{:03}", season, number),
        }
    }

    #[test]
    fn season_stats_group_and_aggregate() {
        let episodes = vec![
            episode(2, 1, 8.0, 100),
            episode(1, 1, 7.0, 200),
            episode(1, 2, 9.0, 300),
        ];
        let stats = season_stats(&episodes);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].season, 1);
        assert_eq!(stats[0].episode_count, 2);
        assert!((stats[0].avg_rating - 8.0).abs() < 1e-9);
        assert_eq!(stats[0].max_rating, 9.0);
        assert_eq!(stats[0].min_rating, 7.0);
        assert_eq!(stats[0].total_votes, 500);
        assert_eq!(stats[1].season, 2);
    }

    #[test]
    fn overall_average_handles_empty_input() {
        assert_eq!(overall_average(&[]), 0.0);
        let episodes = vec![episode(1, 1, 6.0, 10), episode(1, 2, 8.0, 10)];
        assert!((overall_average(&episodes) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn empty_filters_render_zero_badges() {
        let filters = SeriesFilters {
            genre: None,
            start_year: None,
            end_year: None,
            min_rating: None,
        };
        assert!(series_filter_badges(&filters).is_empty());

        let movie_filters = MovieFilters {
            genre: None,
            start_year: None,
            end_year: None,
            min_rating: None,
            min_votes: None,
        };
        assert!(movie_filter_badges(&movie_filters).is_empty());
    }

    #[test]
    fn a_single_populated_filter_renders_exactly_one_badge() {
        let filters = SeriesFilters {
            genre: Some("Drama".to_string()),
            start_year: None,
            end_year: None,
            min_rating: None,
        };
        let badges = series_filter_badges(&filters);
        assert_eq!(badges, vec!["Genre: Drama".to_string()]);

        let movie_filters = MovieFilters {
            genre: None,
            start_year: None,
            end_year: None,
            min_rating: Some(8.0),
            min_votes: None,
        };
        let badges = movie_filter_badges(&movie_filters);
        assert_eq!(badges, vec!["Rating: 8.0+".to_string()]);
    }

    #[test]
    fn year_ranges_collapse_into_one_badge() {
        assert_eq!(year_range_display(Some(1990), Some(2020)), Some("1990-2020".to_string()));
        assert_eq!(year_range_display(Some(1990), None), Some("1990+".to_string()));
        assert_eq!(year_range_display(None, Some(2020)), Some("up to 2020".to_string()));
        assert_eq!(year_range_display(None, None), None);
    }

    fn compared_series(name: &str, avg: Option<f64>, found: bool) -> ComparedSeries {
        ComparedSeries {
            name: name.to_string(),
            found,
            tconst: found.then(|| format!("tt-{}", name)),
            years: Some("2008-2013".to_string()),
            genres: Some("Drama".to_string()),
            statistics: found.then(|| SeriesStatistics {
                total_episodes: 62,
                avg_rating: avg,
                max_rating: Some(10.0),
                min_rating: Some(7.0),
                total_seasons: 5,
                total_votes: 1_000_000,
                rating_range: Some(3.0),
            }),
            best_episode: None,
            worst_episode: None,
            error: (!found).then(|| format!("Series not found: {}", name)),
        }
    }

    #[test]
    fn the_higher_rated_series_is_flagged_best_overall() {
        let series = vec![
            compared_series("A", Some(9.1), true),
            compared_series("B", Some(8.3), true),
        ];
        assert_eq!(best_overall_index(&series), Some(0));

        // Order independence: the winner is picked by rating, not position.
        let series = vec![
            compared_series("B", Some(8.3), true),
            compared_series("A", Some(9.1), true),
        ];
        assert_eq!(best_overall_index(&series), Some(1));
    }

    #[test]
    fn unresolved_series_never_win_the_comparison() {
        let series = vec![
            compared_series("Missing", None, false),
            compared_series("Found", Some(6.5), true),
        ];
        assert_eq!(best_overall_index(&series), Some(1));
        assert_eq!(best_overall_index(&[]), None);
    }

    fn compared_movie(title: &str, rating: Option<f64>, found: bool) -> ComparedMovie {
        ComparedMovie {
            title: title.to_string(),
            found,
            error: None,
            tconst: Some(format!("tt-{}", title)),
            year: Some(1972),
            genres: Some("Crime,Drama".to_string()),
            rating,
            votes: Some(1_000_000),
        }
    }

    #[test]
    fn movie_rankings_sort_by_rating_descending() {
        let movies = vec![
            compared_movie("Part III", Some(7.6), true),
            compared_movie("Part II", Some(9.0), true),
            compared_movie("Part I", Some(9.2), true),
            compared_movie("Lost One", None, false),
        ];
        let order = ranking_order(&movies);
        assert_eq!(order, vec!["Part I", "Part II", "Part III"]);
    }

    fn decade(decade: &str, start: i32, avg: Option<f64>, titles: u64) -> DecadeStat {
        DecadeStat {
            decade: decade.to_string(),
            decade_start: start,
            title_count: titles,
            avg_rating: avg,
            max_rating: avg.map(|a| a + 0.8),
            total_votes: titles * 1000,
        }
    }

    #[test]
    fn decade_summary_finds_best_and_trend() {
        // Newest decade first, as returned by the API.
        let decades = vec![
            decade("2020s", 2020, Some(7.8), 5000),
            decade("2010s", 2010, Some(7.4), 9000),
            decade("2000s", 2000, Some(7.2), 7000),
            decade("1970s", 1970, Some(8.1), 2000),
        ];
        let summary = decade_summary(&decades);
        assert_eq!(summary.best_index, Some(3));
        assert_eq!(summary.most_prolific_index, Some(1));
        // 2000s -> 2020s climbs by 0.6.
        assert_eq!(summary.trend, RatingTrend::Rising);
    }

    #[test]
    fn flat_recent_decades_read_as_stable() {
        let decades = vec![
            decade("2020s", 2020, Some(7.45), 100),
            decade("2010s", 2010, Some(7.5), 100),
            decade("2000s", 2000, Some(7.4), 100),
        ];
        assert_eq!(decade_summary(&decades).trend, RatingTrend::Stable);
        assert_eq!(decade_summary(&[]).trend, RatingTrend::Stable);
    }

    fn genre(name: &str, avg: Option<f64>) -> GenreStat {
        GenreStat {
            genres: name.to_string(),
            title_count: 100,
            avg_rating: avg,
            max_rating: avg,
            min_rating: avg,
            total_votes: 10_000,
        }
    }

    #[test]
    fn genres_sort_by_average_and_scale_to_at_least_ten() {
        let genres = vec![
            genre("Comedy", Some(6.9)),
            genre("Documentary", Some(7.9)),
            genre("Reality", None),
        ];
        let sorted = sorted_genres(&genres);
        assert_eq!(sorted[0].genres, "Documentary");
        assert_eq!(sorted[2].genres, "Reality");
        // Bars are proportional to the full scale even when every average
        // sits below ten.
        assert_eq!(genre_scale_max(&sorted), 10.0);
    }

    #[test]
    fn status_messages_name_the_series_being_fetched() {
        let input = json!({ "series": "Breaking Bad" });
        assert_eq!(
            tool_status_message(ToolKind::GetTopEpisodes, &input, false),
            "Finding the best episodes of Breaking Bad"
        );
        assert_eq!(
            tool_status_message(ToolKind::GetTopEpisodes, &input, true),
            "Found the best episodes of Breaking Bad"
        );
        assert_eq!(
            tool_status_message(ToolKind::SeriesEpisodeGraph, &input, false),
            "Searching"
        );
    }

    #[test]
    fn contextual_details_skip_null_fields() {
        let input = json!({
            "series": "Breaking Bad",
            "minVotes": 1000,
            "genre": null
        });
        let details = contextual_details(&input);
        assert_eq!(details.len(), 2);
        assert!(details.contains(&"Looking for series: \"Breaking Bad\"".to_string()));
        assert!(details.contains(&"Using min votes: 1000".to_string()));
    }
}
