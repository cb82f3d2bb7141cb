#[cfg(test)]
mod tests {
    use serde_json::json;
    use serieschat::tools::{ToolKind, ToolResult};

    #[test]
    fn parses_a_resolved_series() {
        let body = json!({
            "tconst": "tt0903747",
            "title": "Breaking Bad",
            "startYear": 2008,
            "endYear": 2013,
            "genres": "Crime,Drama,Thriller"
        });
        match ToolResult::parse(ToolKind::ResolveSeries, body) {
            ToolResult::SeriesInfo(info) => {
                assert_eq!(info.tconst, "tt0903747");
                assert_eq!(info.start_year, 2008);
                assert_eq!(info.end_year, Some(2013));
                assert_eq!(info.years_display(), "2008 - 2013");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn running_series_display_present() {
        let body = json!({
            "tconst": "tt11126994",
            "title": "Arcane",
            "startYear": 2021,
            "endYear": null,
            "genres": "Animation,Action,Adventure"
        });
        match ToolResult::parse(ToolKind::ResolveSeries, body) {
            ToolResult::SeriesInfo(info) => assert_eq!(info.years_display(), "2021 - Present"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn error_bodies_become_the_error_variant_regardless_of_tool() {
        let body = json!({ "error": "Series not found: \"Nope\"" });
        let result = ToolResult::parse(ToolKind::GetEpisodes, body);
        assert_eq!(result.error_text(), Some("Series not found: \"Nope\""));
    }

    #[test]
    fn malformed_payloads_surface_as_errors_not_panics() {
        // episodes must be a list; a shape mismatch is converted into the
        // uniform error channel.
        let body = json!({
            "series": "Breaking Bad",
            "tconst": "tt0903747",
            "episode_count": 3,
            "episodes": "not-a-list"
        });
        let result = ToolResult::parse(ToolKind::GetEpisodes, body);
        let error = result.error_text().expect("expected an error variant");
        assert!(error.contains("getEpisodes"));
    }

    #[test]
    fn nullable_ratings_stay_null() {
        let body = json!({
            "query": null,
            "filters": { "genre": null, "start_year": null, "end_year": null,
                         "min_rating": null, "min_votes": null },
            "result_count": 1,
            "movies": [{
                "tconst": "tt0000001",
                "title": "Obscure Film",
                "year": 1950,
                "genres": "Drama",
                "rating": null,
                "votes": 12
            }]
        });
        match ToolResult::parse(ToolKind::SearchMovies, body) {
            ToolResult::MovieSearch(data) => {
                assert_eq!(data.movies[0].rating, None);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn ranked_movies_share_the_browse_shape() {
        let body = json!({
            "filters": { "genre": null, "start_year": null, "end_year": null,
                         "min_rating": null, "max_rating": null, "min_votes": null },
            "total_count": 250000,
            "result_count": 1,
            "offset": 0,
            "limit": 20,
            "movies": [{
                "rank": 1,
                "rank_score": 126.4,
                "tconst": "tt0111161",
                "title": "The Shawshank Redemption",
                "year": 1994,
                "genres": "Drama",
                "rating": 9.3,
                "votes": 2900000
            }]
        });
        match ToolResult::parse(ToolKind::RankedMovies, body) {
            ToolResult::BrowseMovies(data) => {
                assert_eq!(data.movies[0].rank, 1);
                assert_eq!(data.total_count, 250000);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn episode_graph_payload_parses_with_trendlines() {
        let body = json!({
            "series": "Breaking Bad",
            "tconst": "tt0903747",
            "scale": "auto",
            "episodes": [{
                "season": 1, "episode": 1, "title": "Pilot", "rating": 9.0,
                "votes": 50000, "tconst": "tt0959621", "episode_index": 0
            }],
            "seasons": [{
                "season": 1, "episode_count": 7, "avg_rating": 8.9,
                "start_index": 0, "end_index": 6,
                "trendline": { "slope": 0.02, "intercept": 8.8 }
            }],
            "overall_trendline": { "slope": 0.01, "intercept": 8.7 },
            "rating_range": { "min": 8.2, "max": 10.0 }
        });
        match ToolResult::parse(ToolKind::SeriesEpisodeGraph, body) {
            ToolResult::EpisodeGraph(data) => {
                assert_eq!(data.seasons[0].trendline.slope, 0.02);
                assert_eq!(data.episodes[0].episode_index, 0);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn unhealthy_health_payload_keeps_its_error() {
        let body = json!({ "status": "unhealthy", "error": "database is locked" });
        match ToolResult::parse(ToolKind::CheckHealth, body) {
            // A health body with its own error field short-circuits into the
            // uniform error channel, like every other tool.
            ToolResult::Error { error } => assert_eq!(error, "database is locked"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
