#[cfg(test)]
mod tests {
    use serde_json::json;
    use serieschat::tools::{ParameterValidator, ToolKind, ALL_TOOLS};

    #[test]
    fn every_tool_round_trips_through_its_wire_name() {
        for kind in ALL_TOOLS {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ALL_TOOLS.len(), 19);
    }

    #[test]
    fn unknown_tool_names_resolve_to_none() {
        assert_eq!(ToolKind::from_name("makeCoffee"), None);
        assert_eq!(ToolKind::from_name(""), None);
        assert_eq!(ToolKind::from_name("ResolveSeries"), None); // case-sensitive
    }

    #[test]
    fn descriptions_state_the_documented_limits() {
        assert!(ToolKind::CompareSeries.description().contains("Maximum 10"));
        assert!(ToolKind::CompareMovies.description().contains("Maximum 10"));
        assert!(ToolKind::TopMovies.description().contains("minimum votes"));
        assert!(ToolKind::GetTopEpisodes.description().contains("weighted rating"));
    }

    #[test]
    fn valid_arguments_pass_schema_validation() {
        let spec = ToolKind::SearchMovies.spec();
        let args = json!({
            "query": "Godfather",
            "genre": "Crime",
            "min_rating": 8.0,
            "limit": 10
        });
        assert!(ParameterValidator::validate_parameters(&spec, &args).is_ok());
    }

    #[test]
    fn missing_required_arguments_fail_validation() {
        let spec = ToolKind::ResolveSeries.spec();
        let args = json!({});
        assert!(ParameterValidator::validate_parameters(&spec, &args).is_err());
    }

    #[test]
    fn out_of_range_arguments_fail_validation() {
        let spec = ToolKind::SearchMovies.spec();
        let args = json!({ "min_rating": 14.0 });
        assert!(ParameterValidator::validate_parameters(&spec, &args).is_err());
    }

    #[test]
    fn fixer_fills_declared_defaults_for_required_fields() {
        let spec = ToolKind::GenreAnalysis.spec();
        let fixed = ParameterValidator::fix_parameters(&spec, json!({})).unwrap();
        assert_eq!(fixed["title_type"], "movie");
    }

    #[test]
    fn query_builder_skips_absent_fields() {
        let args = json!({ "series": "Breaking Bad" });
        let query = ToolKind::GetTopEpisodes.query_params(&args);
        assert_eq!(query, vec![("series", "Breaking Bad".to_string())]);
    }

    #[test]
    fn query_builder_renames_camel_case_arguments() {
        let args = json!({ "series": "Breaking Bad", "minVotes": 500, "limit": 5 });
        let query = ToolKind::GetTopEpisodes.query_params(&args);
        assert!(query.contains(&("min_votes", "500".to_string())));
        assert!(query.contains(&("limit", "5".to_string())));
    }

    #[test]
    fn series_search_caps_the_limit_at_fifty() {
        let args = json!({ "query": "office", "limit": 120 });
        let query = ToolKind::SearchSeries.query_params(&args);
        assert!(query.contains(&("limit", "50".to_string())));
    }

    #[test]
    fn compare_series_forwards_the_name_list() {
        let args = json!({ "seriesNames": "Breaking Bad,The Wire" });
        let query = ToolKind::CompareSeries.query_params(&args);
        assert_eq!(query, vec![("series_names", "Breaking Bad,The Wire".to_string())]);
    }

    #[test]
    fn health_check_takes_no_parameters() {
        let query = ToolKind::CheckHealth.query_params(&json!({}));
        assert!(query.is_empty());
    }
}
