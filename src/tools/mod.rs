pub mod client;
pub mod results;
pub mod validation;

pub use client::{ApiResponse, FetchError, MetadataClient, connect_error_message};
pub use results::*;
pub use validation::ParameterValidator;

use serde_json::{json, Value};

/// The closed set of metadata tools the assistant can call. Dispatch is by
/// variant, not by string: an unrecognized wire name maps to `None` in
/// [`ToolKind::from_name`] and the renderer skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ToolKind {
    ResolveSeries,
    GetEpisodes,
    GetTopEpisodes,
    WorstEpisodes,
    SeriesAnalytics,
    SeriesEpisodeGraph,
    SearchSeries,
    CompareSeries,
    SearchMovies,
    BrowseMovies,
    BrowseTv,
    TopMovies,
    RankedMovies,
    RankedTv,
    MovieDetails,
    CompareMovies,
    GenreAnalysis,
    DecadeAnalysis,
    CheckHealth,
}

/// A tool as advertised to the model: wire name, natural-language contract,
/// and a JSON Schema for its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

pub const ALL_TOOLS: [ToolKind; 19] = [
    ToolKind::ResolveSeries,
    ToolKind::GetEpisodes,
    ToolKind::GetTopEpisodes,
    ToolKind::WorstEpisodes,
    ToolKind::SeriesAnalytics,
    ToolKind::SeriesEpisodeGraph,
    ToolKind::SearchSeries,
    ToolKind::CompareSeries,
    ToolKind::SearchMovies,
    ToolKind::BrowseMovies,
    ToolKind::BrowseTv,
    ToolKind::TopMovies,
    ToolKind::RankedMovies,
    ToolKind::RankedTv,
    ToolKind::MovieDetails,
    ToolKind::CompareMovies,
    ToolKind::GenreAnalysis,
    ToolKind::DecadeAnalysis,
    ToolKind::CheckHealth,
];

impl ToolKind {
    /// Wire name the model uses to invoke the tool.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::ResolveSeries => "resolveSeries",
            ToolKind::GetEpisodes => "getEpisodes",
            ToolKind::GetTopEpisodes => "getTopEpisodes",
            ToolKind::WorstEpisodes => "worstEpisodes",
            ToolKind::SeriesAnalytics => "seriesAnalytics",
            ToolKind::SeriesEpisodeGraph => "seriesEpisodeGraph",
            ToolKind::SearchSeries => "searchSeries",
            ToolKind::CompareSeries => "compareSeries",
            ToolKind::SearchMovies => "searchMovies",
            ToolKind::BrowseMovies => "browseMovies",
            ToolKind::BrowseTv => "browseTv",
            ToolKind::TopMovies => "topMovies",
            ToolKind::RankedMovies => "rankedMovies",
            ToolKind::RankedTv => "rankedTv",
            ToolKind::MovieDetails => "movieDetails",
            ToolKind::CompareMovies => "compareMovies",
            ToolKind::GenreAnalysis => "genreAnalysis",
            ToolKind::DecadeAnalysis => "decadeAnalysis",
            ToolKind::CheckHealth => "checkImdbHealth",
        }
    }

    /// Unknown names are deliberately not an error; the caller renders
    /// nothing for them.
    pub fn from_name(name: &str) -> Option<ToolKind> {
        ALL_TOOLS.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ToolKind::ResolveSeries => "/resolve_series",
            ToolKind::GetEpisodes => "/episodes",
            ToolKind::GetTopEpisodes => "/top_episodes",
            ToolKind::WorstEpisodes => "/worst_episodes",
            ToolKind::SeriesAnalytics => "/series_analytics",
            ToolKind::SeriesEpisodeGraph => "/series_episode_graph",
            ToolKind::SearchSeries => "/search_series",
            ToolKind::CompareSeries => "/compare_series",
            ToolKind::SearchMovies => "/search_movies",
            ToolKind::BrowseMovies => "/browse_movies",
            ToolKind::BrowseTv => "/browse_tv",
            ToolKind::TopMovies => "/top_movies",
            ToolKind::RankedMovies => "/ranked_movies",
            ToolKind::RankedTv => "/ranked_tv",
            ToolKind::MovieDetails => "/movie_details",
            ToolKind::CompareMovies => "/compare_movies",
            ToolKind::GenreAnalysis => "/genre_analysis",
            ToolKind::DecadeAnalysis => "/decade_analysis",
            ToolKind::CheckHealth => "/health",
        }
    }

    /// The description doubles as the contract the model uses to pick the
    /// tool; it must stay accurate to the parameter semantics.
    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::ResolveSeries => "Find a TV series in the IMDb database by name. Returns series metadata including title, ID (tconst), years, and genres. Use this first when a user asks about any TV show.",
            ToolKind::GetEpisodes => "Retrieve all episodes with ratings for a TV series. Returns season numbers, episode numbers, titles, ratings, and vote counts. Use this to analyze episode data, find patterns, or answer questions about specific episodes.",
            ToolKind::GetTopEpisodes => "Get the highest-rated episodes for a TV series using IMDb's weighted rating formula. This prevents episodes with few votes from dominating rankings. Use this when users ask for 'best episodes', 'top rated', or 'must-watch episodes'.",
            ToolKind::WorstEpisodes => "Get the lowest-rated episodes for a TV series (opposite of top episodes). Useful for finding episodes to skip, understanding quality dips, or analyzing what went wrong in a series. Shows the worst episodes with ratings and vote counts.",
            ToolKind::SeriesAnalytics => "Get comprehensive analytics and insights for a TV series. Includes overall statistics, season-by-season trends, rating distribution, rating consistency, and season finale analysis. Use this for deep dives into show quality patterns and trends.",
            ToolKind::SeriesEpisodeGraph => "Get detailed episode-by-episode rating data for interactive visualization of a TV series. Includes per-season statistics, trendlines for quality analysis over time, and rating ranges. Use this when users want to 'graph', 'visualize', 'chart', or 'see the episode ratings' for a show, or understand quality trends across seasons.",
            ToolKind::SearchSeries => "Advanced search for TV series with multiple filters. Search by name, genre (Drama, Comedy, Thriller, etc.), year range, and minimum rating. Perfect for finding shows that match specific criteria or discovering new series.",
            ToolKind::CompareSeries => "Compare multiple TV series side by side with detailed statistics. Shows average ratings, total episodes, seasons, best/worst episodes, and more. Perfect for 'which is better' questions or comparing similar shows. Provide a comma-separated list of series names.",
            ToolKind::SearchMovies => "Search for movies with advanced filters including title, genre, year range, minimum rating, and vote count. Use this when a user asks to find movies based on multiple criteria or wants to discover films.",
            ToolKind::BrowseMovies => "Browse and discover movies ranked by quality score (ln(1+votes)*rating). Supports advanced filtering by genre, year range, and rating thresholds. Returns ranked results with position numbers showing the highest quality films. Perfect for exploring and discovering movies based on quality metrics.",
            ToolKind::BrowseTv => "Browse and discover TV series ranked by quality score (ln(1+votes)*rating). Supports advanced filtering by genre, year range, seasons, and rating thresholds. Returns ranked results with position numbers. Perfect for exploring and discovering shows based on quality metrics.",
            ToolKind::TopMovies => "Get the top-rated movies with optional filters for genre, year range, and minimum votes. Returns a ranked list of the highest-rated films. Use this when a user asks for the best movies.",
            ToolKind::RankedMovies => "Get the top-ranked movies by quality score (ln(1+votes)*rating). Returns the highest quality films without any filters. Use this when users ask for 'best movies', 'top films', 'greatest movies of all time', or 'highest-rated movies'.",
            ToolKind::RankedTv => "Get the top-ranked TV series by quality score (ln(1+votes)*rating). Returns the highest quality shows without any filters. Use this when users ask for 'best TV shows', 'top series', or 'highest-rated shows of all time'.",
            ToolKind::MovieDetails => "Get detailed information about a specific movie including title, year, genres, rating, and vote count. Use this when a user asks about a specific movie.",
            ToolKind::CompareMovies => "Compare multiple movies side by side, showing their ratings, years, genres, and vote counts. Use this when a user wants to compare films or determine which is better rated.",
            ToolKind::GenreAnalysis => "Analyze rating performance by genre for movies or TV series. Shows which genres have the highest average ratings, most titles, and total votes. Use this when a user wants to understand genre trends or find which genres are best.",
            ToolKind::DecadeAnalysis => "Analyze rating trends across decades (1920s-2020s) for movies or TV series. Shows how average ratings, title counts, and popularity have changed over time. Use this when a user wants to understand historical trends or compare different eras.",
            ToolKind::CheckHealth => "Check if the IMDb database and API are available and functioning. Returns database statistics. Use this to verify system status before making other queries.",
        }
    }

    pub fn input_schema(&self) -> Value {
        match self {
            ToolKind::ResolveSeries => json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "The name of the TV series to search for (e.g., 'Breaking Bad', 'Game of Thrones')"
                    }
                },
                "required": ["name"]
            }),
            ToolKind::GetEpisodes => json!({
                "type": "object",
                "properties": {
                    "series": {
                        "type": "string",
                        "description": "The name of the TV series (e.g., 'Breaking Bad', 'Game of Thrones')"
                    }
                },
                "required": ["series"]
            }),
            ToolKind::GetTopEpisodes => json!({
                "type": "object",
                "properties": {
                    "series": {
                        "type": "string",
                        "description": "The name of the TV series (e.g., 'Breaking Bad', 'Game of Thrones')"
                    },
                    "minVotes": {
                        "type": "number",
                        "description": "Minimum number of votes required for an episode to be included (default: 1000). Higher values ensure more reliable ratings."
                    },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of episodes to return (default: 10)"
                    },
                    "m": {
                        "type": "number",
                        "description": "Weight parameter for the ranking formula (default: 1000). Higher values give more weight to the series average."
                    }
                },
                "required": ["series"]
            }),
            ToolKind::WorstEpisodes => json!({
                "type": "object",
                "properties": {
                    "series": {
                        "type": "string",
                        "description": "The name of the TV series (e.g., 'Breaking Bad', 'Game of Thrones')"
                    },
                    "minVotes": {
                        "type": "number",
                        "description": "Minimum number of votes required (default: 1000). Higher values ensure more reliable ratings."
                    },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of episodes to return (default: 10)"
                    }
                },
                "required": ["series"]
            }),
            ToolKind::SeriesAnalytics => json!({
                "type": "object",
                "properties": {
                    "series": {
                        "type": "string",
                        "description": "The name of the TV series to analyze (e.g., 'Breaking Bad', 'Game of Thrones')"
                    }
                },
                "required": ["series"]
            }),
            ToolKind::SeriesEpisodeGraph => json!({
                "type": "object",
                "properties": {
                    "series": {
                        "type": "string",
                        "description": "The name of the TV series to graph (e.g., 'Breaking Bad', 'Game of Thrones')"
                    },
                    "scale": {
                        "type": "string",
                        "enum": ["auto", "0-10", "autoscale"],
                        "description": "Scale mode for the graph: 'auto' (smart range), '0-10' (full scale), 'autoscale' (tight fit)"
                    }
                },
                "required": ["series"]
            }),
            ToolKind::SearchSeries => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query for series name (partial matches supported)"
                    },
                    "genre": {
                        "type": "string",
                        "description": "Filter by genre (e.g., 'Drama', 'Comedy', 'Sci-Fi', 'Thriller')"
                    },
                    "startYear": {
                        "type": "integer",
                        "description": "Minimum start year (e.g., 2010)"
                    },
                    "endYear": {
                        "type": "integer",
                        "description": "Maximum start year (e.g., 2020)"
                    },
                    "minRating": {
                        "type": "number",
                        "description": "Minimum average rating (0-10, e.g., 8.5)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results to return (default: 20, max: 50)"
                    }
                }
            }),
            ToolKind::CompareSeries => json!({
                "type": "object",
                "properties": {
                    "seriesNames": {
                        "type": "string",
                        "description": "Comma-separated list of series names to compare (e.g., 'Breaking Bad,The Wire,The Sopranos'). Maximum 10 series."
                    }
                },
                "required": ["seriesNames"]
            }),
            ToolKind::SearchMovies => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query for movie title (e.g., 'Godfather', 'Dark Knight')"
                    },
                    "genre": {
                        "type": "string",
                        "description": "Filter by genre (e.g., 'Action', 'Drama', 'Comedy', 'Thriller', 'Sci-Fi', 'Horror')"
                    },
                    "start_year": {
                        "type": "integer",
                        "description": "Minimum release year (e.g., 1990)"
                    },
                    "end_year": {
                        "type": "integer",
                        "description": "Maximum release year (e.g., 2020)"
                    },
                    "min_rating": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 10,
                        "description": "Minimum average rating (e.g., 8.0)"
                    },
                    "min_votes": {
                        "type": "integer",
                        "description": "Minimum number of votes (e.g., 10000 for popular films)"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 50,
                        "default": 20,
                        "description": "Maximum number of movies to return (default: 20)"
                    }
                }
            }),
            ToolKind::BrowseMovies => json!({
                "type": "object",
                "properties": {
                    "genre": {
                        "type": "string",
                        "description": "Filter by genre (e.g., 'Action', 'Drama', 'Comedy', 'Sci-Fi', 'Horror')"
                    },
                    "start_year": {
                        "type": "integer",
                        "description": "Minimum release year (e.g., 1990)"
                    },
                    "end_year": {
                        "type": "integer",
                        "description": "Maximum release year (e.g., 2020)"
                    },
                    "min_rating": {
                        "type": "number",
                        "description": "Minimum average rating (0-10, e.g., 7.5)"
                    },
                    "max_rating": {
                        "type": "number",
                        "description": "Maximum average rating (0-10, e.g., 9.0)"
                    },
                    "min_votes": {
                        "type": "integer",
                        "description": "Minimum number of votes to ensure quality data"
                    },
                    "offset": {
                        "type": "integer",
                        "default": 0,
                        "description": "Pagination offset (default: 0)"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 20,
                        "description": "Number of results to return (default: 20, max: 100)"
                    }
                }
            }),
            ToolKind::BrowseTv => json!({
                "type": "object",
                "properties": {
                    "genre": {
                        "type": "string",
                        "description": "Filter by genre (e.g., 'Drama', 'Comedy', 'Thriller', 'Sci-Fi')"
                    },
                    "start_year": {
                        "type": "integer",
                        "description": "Minimum start year (e.g., 2010)"
                    },
                    "end_year": {
                        "type": "integer",
                        "description": "Maximum start year (e.g., 2020)"
                    },
                    "min_rating": {
                        "type": "number",
                        "description": "Minimum average rating (0-10, e.g., 8.0)"
                    },
                    "max_rating": {
                        "type": "number",
                        "description": "Maximum average rating (0-10, e.g., 9.5)"
                    },
                    "min_votes": {
                        "type": "integer",
                        "description": "Minimum votes per episode to ensure quality data"
                    },
                    "min_seasons": {
                        "type": "integer",
                        "description": "Minimum number of seasons"
                    },
                    "max_seasons": {
                        "type": "integer",
                        "description": "Maximum number of seasons"
                    },
                    "offset": {
                        "type": "integer",
                        "default": 0,
                        "description": "Pagination offset (default: 0)"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 20,
                        "description": "Number of results to return (default: 20, max: 100)"
                    }
                }
            }),
            ToolKind::TopMovies => json!({
                "type": "object",
                "properties": {
                    "genre": {
                        "type": "string",
                        "description": "Filter by genre (e.g., 'Drama', 'Action', 'Sci-Fi', 'Comedy')"
                    },
                    "start_year": {
                        "type": "integer",
                        "description": "Minimum release year (e.g., 1990)"
                    },
                    "end_year": {
                        "type": "integer",
                        "description": "Maximum release year (e.g., 2020)"
                    },
                    "min_votes": {
                        "type": "integer",
                        "default": 10000,
                        "description": "Minimum votes threshold to ensure reliable ratings (default: 10000)"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 20,
                        "description": "Number of movies to return (default: 20)"
                    }
                }
            }),
            ToolKind::RankedMovies | ToolKind::RankedTv => json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 20,
                        "description": "Number of results to return (default: 20, max: 100)"
                    }
                }
            }),
            ToolKind::MovieDetails => json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Movie title (e.g., 'The Godfather')"
                    },
                    "tconst": {
                        "type": "string",
                        "description": "IMDb ID starting with 'tt' (e.g., 'tt0068646')"
                    }
                }
            }),
            ToolKind::CompareMovies => json!({
                "type": "object",
                "properties": {
                    "movie_titles": {
                        "type": "string",
                        "description": "Comma-separated list of movie titles to compare (e.g., 'The Godfather, The Godfather Part II, The Godfather Part III'). Maximum 10 movies."
                    }
                },
                "required": ["movie_titles"]
            }),
            ToolKind::GenreAnalysis | ToolKind::DecadeAnalysis => json!({
                "type": "object",
                "properties": {
                    "title_type": {
                        "type": "string",
                        "enum": ["movie", "tvSeries"],
                        "default": "movie",
                        "description": "Type of content to analyze: 'movie' or 'tvSeries'"
                    },
                    "min_votes": {
                        "type": "integer",
                        "default": 1000,
                        "description": "Minimum votes threshold for titles to include (default: 1000)"
                    }
                },
                "required": ["title_type"]
            }),
            ToolKind::CheckHealth => json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    pub fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }

    /// Verb phrase for the generic "Failed to <action>" error message.
    pub fn failure_action(&self) -> &'static str {
        match self {
            ToolKind::ResolveSeries => "resolve series",
            ToolKind::GetEpisodes => "get episodes",
            ToolKind::GetTopEpisodes => "get top episodes",
            ToolKind::WorstEpisodes => "get worst episodes",
            ToolKind::SeriesAnalytics => "get analytics",
            ToolKind::SeriesEpisodeGraph => "get episode graph",
            ToolKind::SearchSeries => "search series",
            ToolKind::CompareSeries => "compare series",
            ToolKind::SearchMovies => "search movies",
            ToolKind::BrowseMovies => "browse movies",
            ToolKind::BrowseTv => "browse TV series",
            ToolKind::TopMovies => "get top movies",
            ToolKind::RankedMovies => "get ranked movies",
            ToolKind::RankedTv => "get ranked TV series",
            ToolKind::MovieDetails => "get movie details",
            ToolKind::CompareMovies => "compare movies",
            ToolKind::GenreAnalysis => "analyze genres",
            ToolKind::DecadeAnalysis => "analyze decades",
            ToolKind::CheckHealth => "check health",
        }
    }

    /// Friendlier 404 message for lookup-style tools. Returns `None` for
    /// tools where 404 falls through to the generic mapping.
    pub fn not_found_message(&self, detail: Option<&str>, args: &Value) -> Option<String> {
        let arg = |key: &str| {
            args.get(key)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string()
        };
        match self {
            ToolKind::ResolveSeries => Some(format!(
                "Series not found: \"{}\". Please check the spelling or try a different name.",
                arg("name")
            )),
            ToolKind::GetEpisodes => Some(format!(
                "Series or episodes not found for: \"{}\". Please check the spelling or try a different name.",
                arg("series")
            )),
            ToolKind::SeriesAnalytics => Some(format!(
                "Series not found: \"{}\". Please check the spelling or try a different name.",
                arg("series")
            )),
            ToolKind::CompareSeries => Some(format!(
                "One or more series not found. Please check the spelling of: {}",
                arg("seriesNames")
            )),
            ToolKind::GetTopEpisodes | ToolKind::WorstEpisodes => Some(
                detail
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("No episodes found for: \"{}\"", arg("series"))),
            ),
            ToolKind::SeriesEpisodeGraph => Some(
                detail
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Series not found: \"{}\"", arg("series"))),
            ),
            _ => None,
        }
    }

    /// Build the query string for this tool from a validated argument
    /// object. Only present, non-null fields are forwarded.
    pub fn query_params(&self, args: &Value) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        match self {
            ToolKind::ResolveSeries => {
                append(&mut query, args, "name", "name");
            }
            ToolKind::GetEpisodes | ToolKind::SeriesAnalytics => {
                append(&mut query, args, "series", "series");
            }
            ToolKind::GetTopEpisodes => {
                append(&mut query, args, "series", "series");
                append(&mut query, args, "minVotes", "min_votes");
                append(&mut query, args, "limit", "limit");
                append(&mut query, args, "m", "m");
            }
            ToolKind::WorstEpisodes => {
                append(&mut query, args, "series", "series");
                append(&mut query, args, "minVotes", "min_votes");
                append(&mut query, args, "limit", "limit");
            }
            ToolKind::SeriesEpisodeGraph => {
                append(&mut query, args, "series", "series");
                append(&mut query, args, "scale", "scale");
            }
            ToolKind::SearchSeries => {
                append(&mut query, args, "query", "query");
                append(&mut query, args, "genre", "genre");
                append(&mut query, args, "startYear", "start_year");
                append(&mut query, args, "endYear", "end_year");
                append(&mut query, args, "minRating", "min_rating");
                // The endpoint caps results at 50.
                if let Some(limit) = args.get("limit").and_then(Value::as_i64) {
                    query.push(("limit", limit.min(50).to_string()));
                }
            }
            ToolKind::CompareSeries => {
                append(&mut query, args, "seriesNames", "series_names");
            }
            ToolKind::SearchMovies => {
                append(&mut query, args, "query", "query");
                append(&mut query, args, "genre", "genre");
                append(&mut query, args, "start_year", "start_year");
                append(&mut query, args, "end_year", "end_year");
                append(&mut query, args, "min_rating", "min_rating");
                append(&mut query, args, "min_votes", "min_votes");
                append(&mut query, args, "limit", "limit");
            }
            ToolKind::BrowseMovies => {
                append(&mut query, args, "genre", "genre");
                append(&mut query, args, "start_year", "start_year");
                append(&mut query, args, "end_year", "end_year");
                append(&mut query, args, "min_rating", "min_rating");
                append(&mut query, args, "max_rating", "max_rating");
                append(&mut query, args, "min_votes", "min_votes");
                append(&mut query, args, "offset", "offset");
                append(&mut query, args, "limit", "limit");
            }
            ToolKind::BrowseTv => {
                append(&mut query, args, "genre", "genre");
                append(&mut query, args, "start_year", "start_year");
                append(&mut query, args, "end_year", "end_year");
                append(&mut query, args, "min_rating", "min_rating");
                append(&mut query, args, "max_rating", "max_rating");
                append(&mut query, args, "min_votes", "min_votes");
                append(&mut query, args, "min_seasons", "min_seasons");
                append(&mut query, args, "max_seasons", "max_seasons");
                append(&mut query, args, "offset", "offset");
                append(&mut query, args, "limit", "limit");
            }
            ToolKind::TopMovies => {
                append(&mut query, args, "genre", "genre");
                append(&mut query, args, "start_year", "start_year");
                append(&mut query, args, "end_year", "end_year");
                append(&mut query, args, "min_votes", "min_votes");
                append(&mut query, args, "limit", "limit");
            }
            ToolKind::RankedMovies | ToolKind::RankedTv => {
                append(&mut query, args, "limit", "limit");
            }
            ToolKind::MovieDetails => {
                append(&mut query, args, "title", "title");
                append(&mut query, args, "tconst", "tconst");
            }
            ToolKind::CompareMovies => {
                append(&mut query, args, "movie_titles", "movie_titles");
            }
            ToolKind::GenreAnalysis | ToolKind::DecadeAnalysis => {
                append(&mut query, args, "title_type", "title_type");
                append(&mut query, args, "min_votes", "min_votes");
            }
            ToolKind::CheckHealth => {}
        }
        query
    }
}

fn append(
    query: &mut Vec<(&'static str, String)>,
    args: &Value,
    arg: &str,
    wire: &'static str,
) {
    match args.get(arg) {
        Some(Value::String(s)) if !s.is_empty() => query.push((wire, s.clone())),
        Some(Value::Number(n)) => query.push((wire, n.to_string())),
        Some(Value::Bool(b)) => query.push((wire, b.to_string())),
        _ => {}
    }
}

/// Map a non-2xx status onto the user-facing error string. Pure so the
/// contract can be exercised without a network.
pub fn status_error_message(
    kind: ToolKind,
    code: u16,
    status_text: &str,
    detail: Option<&str>,
    args: &Value,
) -> String {
    if code == 404 {
        if let Some(message) = kind.not_found_message(detail, args) {
            return message;
        }
    }

    match kind {
        // These endpoints report failures through the body's detail field;
        // surface it when present.
        ToolKind::SearchMovies
        | ToolKind::MovieDetails
        | ToolKind::CompareMovies
        | ToolKind::TopMovies
        | ToolKind::GenreAnalysis
        | ToolKind::DecadeAnalysis => detail
            .map(str::to_string)
            .unwrap_or_else(|| format!("Failed to {}", kind.failure_action())),
        ToolKind::CheckHealth => format!("IMDb API is unhealthy: {}", status_text),
        _ => format!("Failed to {}: {}", kind.failure_action(), status_text),
    }
}

/// Run one tool invocation: a single GET, no retries. Every failure mode
/// becomes `ToolResult::Error`; this never returns `Err` and never panics.
pub async fn execute(client: &MetadataClient, kind: ToolKind, args: &Value) -> ToolResult {
    let query = kind.query_params(args);
    tracing::info!(tool = kind.name(), "executing tool");

    match client.get_json(kind.endpoint(), &query).await {
        Err(err) => {
            tracing::warn!(tool = kind.name(), %err, "could not reach the metadata API");
            ToolResult::error(connect_error_message(client.base_url()))
        }
        Ok(ApiResponse::Status {
            code,
            status_text,
            detail,
        }) => ToolResult::error(status_error_message(
            kind,
            code,
            &status_text,
            detail.as_deref(),
            args,
        )),
        Ok(ApiResponse::Ok(body)) => ToolResult::parse(kind, body),
    }
}
