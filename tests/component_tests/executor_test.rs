#[cfg(test)]
mod tests {
    use serde_json::json;
    use serieschat::tools::{connect_error_message, status_error_message, ToolKind};

    #[test]
    fn lookup_404_produces_a_not_found_message() {
        let args = json!({ "name": "Braking Bad" });
        let message = status_error_message(ToolKind::ResolveSeries, 404, "Not Found", None, &args);
        assert!(message.contains("Series not found"));
        assert!(message.contains("Braking Bad"));
        assert!(message.contains("check the spelling"));
    }

    #[test]
    fn episode_lookup_404_prefers_the_upstream_detail() {
        let args = json!({ "series": "Firefly" });
        let message = status_error_message(
            ToolKind::GetTopEpisodes,
            404,
            "Not Found",
            Some("No episodes found with at least 1000 votes"),
            &args,
        );
        assert_eq!(message, "No episodes found with at least 1000 votes");

        let fallback =
            status_error_message(ToolKind::GetTopEpisodes, 404, "Not Found", None, &args);
        assert_eq!(fallback, "No episodes found for: \"Firefly\"");
    }

    #[test]
    fn compare_series_404_names_the_requested_list() {
        let args = json!({ "seriesNames": "Breaking Bad,Bad Breaking" });
        let message = status_error_message(ToolKind::CompareSeries, 404, "Not Found", None, &args);
        assert!(message.contains("One or more series not found"));
        assert!(message.contains("Breaking Bad,Bad Breaking"));
    }

    #[test]
    fn non_404_failures_use_the_generic_phrasing() {
        let args = json!({ "query": "office" });
        let message = status_error_message(
            ToolKind::SearchSeries,
            500,
            "Internal Server Error",
            None,
            &args,
        );
        assert_eq!(message, "Failed to search series: Internal Server Error");

        let message =
            status_error_message(ToolKind::BrowseTv, 502, "Bad Gateway", None, &json!({}));
        assert_eq!(message, "Failed to browse TV series: Bad Gateway");
    }

    #[test]
    fn detail_reporting_tools_surface_the_detail_on_any_failure() {
        let args = json!({ "title": "The Godfather" });
        let message = status_error_message(
            ToolKind::MovieDetails,
            422,
            "Unprocessable Entity",
            Some("Provide either title or tconst"),
            &args,
        );
        assert_eq!(message, "Provide either title or tconst");

        let fallback =
            status_error_message(ToolKind::MovieDetails, 500, "Internal Server Error", None, &args);
        assert_eq!(fallback, "Failed to get movie details");
    }

    #[test]
    fn health_failures_report_unhealthy() {
        let message = status_error_message(
            ToolKind::CheckHealth,
            503,
            "Service Unavailable",
            None,
            &json!({}),
        );
        assert_eq!(message, "IMDb API is unhealthy: Service Unavailable");
    }

    #[test]
    fn connect_errors_point_at_the_configured_server() {
        let message = connect_error_message("http://127.0.0.1:8000");
        assert!(message.contains("Failed to connect to IMDb API"));
        assert!(message.contains("http://127.0.0.1:8000"));
    }
}
