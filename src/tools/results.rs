use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ToolKind;

// Payload shapes mirror the metadata API responses verbatim. Rating fields
// are nullable: `None` means "no rating data" and must never render as zero.

/// Resolved series metadata (`/resolve_series`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInfo {
    pub tconst: String,
    pub title: String,
    #[serde(rename = "startYear")]
    pub start_year: i32,
    #[serde(rename = "endYear")]
    pub end_year: Option<i32>,
    pub genres: Option<String>,
}

impl SeriesInfo {
    /// "2008 - 2013", or "2008 - Present" for a running series.
    pub fn years_display(&self) -> String {
        match self.end_year {
            Some(end) => format!("{} - {}", self.start_year, end),
            None => format!("{} - Present", self.start_year),
        }
    }
}

/// One rated episode as returned by `/episodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub rating: f64,
    pub votes: u64,
    pub tconst: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodesData {
    pub series: String,
    pub tconst: String,
    pub episode_count: u32,
    pub episodes: Vec<Episode>,
}

/// Episode ranked by weighted rating (`/top_episodes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEpisode {
    pub rank: u32,
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub rating: f64,
    pub votes: u64,
    pub tconst: String,
    pub weighted_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEpisodesData {
    pub series: String,
    pub tconst: String,
    pub mean_rating: f64,
    pub min_votes: u64,
    pub weight_parameter: f64,
    pub episodes: Vec<TopEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstEpisode {
    pub rank: u32,
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub rating: f64,
    pub votes: u64,
    pub tconst: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstEpisodesData {
    pub series: String,
    pub tconst: String,
    pub min_votes: u64,
    pub episodes: Vec<WorstEpisode>,
}

/// `/series_analytics` summary block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStatistics {
    pub total_episodes: u32,
    pub average_rating: Option<f64>,
    pub rating_consistency: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_rating: Option<f64>,
    pub rating_range: Option<f64>,
    pub average_votes: Option<f64>,
    pub total_seasons: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonTrend {
    pub season: u32,
    pub episode_count: u32,
    pub avg_rating: Option<f64>,
    pub best_rating: Option<f64>,
    pub worst_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBracket {
    pub rating_bracket: String,
    pub episode_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonFinale {
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub rating: f64,
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub series: String,
    pub tconst: String,
    pub overall_statistics: OverallStatistics,
    pub season_trends: Vec<SeasonTrend>,
    pub rating_distribution: Vec<RatingBracket>,
    pub season_finales: Vec<SeasonFinale>,
}

/// Trendline coefficients are fitted server-side; the chart only evaluates
/// `slope * index + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEpisode {
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub rating: f64,
    pub votes: u64,
    pub tconst: String,
    pub episode_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSeason {
    pub season: u32,
    pub episode_count: u32,
    pub avg_rating: f64,
    pub start_index: usize,
    pub end_index: usize,
    pub trendline: Trendline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeGraphData {
    pub series: String,
    pub tconst: String,
    pub scale: String,
    pub episodes: Vec<GraphEpisode>,
    pub seasons: Vec<GraphSeason>,
    pub overall_trendline: Trendline,
    pub rating_range: RatingRange,
}

/// Filters echoed back by `/search_series`. Absent fields must not render
/// as empty badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFilters {
    pub genre: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSearchHit {
    pub tconst: String,
    pub title: String,
    #[serde(rename = "startYear")]
    pub start_year: i32,
    #[serde(rename = "endYear")]
    pub end_year: Option<i32>,
    pub genres: Option<String>,
    #[serde(rename = "avgRating")]
    pub avg_rating: Option<f64>,
    #[serde(rename = "episodeCount")]
    pub episode_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSearchData {
    pub query: Option<String>,
    pub filters: SeriesFilters,
    pub result_count: u32,
    pub series: Vec<SeriesSearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub total_episodes: u32,
    pub avg_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_rating: Option<f64>,
    pub total_seasons: u32,
    pub total_votes: u64,
    pub rating_range: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRef {
    pub title: String,
    pub season: u32,
    pub episode: u32,
    pub rating: f64,
    pub votes: u64,
}

/// One entry of `/compare_series`: either a resolved series with statistics
/// or a not-found marker carrying its own error text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedSeries {
    pub name: String,
    pub found: bool,
    pub tconst: Option<String>,
    pub years: Option<String>,
    pub genres: Option<String>,
    pub statistics: Option<SeriesStatistics>,
    pub best_episode: Option<EpisodeRef>,
    pub worst_episode: Option<EpisodeRef>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesComparisonData {
    pub comparison_count: u32,
    pub series: Vec<ComparedSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieFilters {
    pub genre: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_rating: Option<f64>,
    pub min_votes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieHit {
    pub tconst: String,
    pub title: String,
    pub year: i32,
    pub genres: Option<String>,
    pub rating: Option<f64>,
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSearchData {
    pub query: Option<String>,
    pub filters: MovieFilters,
    pub result_count: u32,
    pub movies: Vec<MovieHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailsData {
    pub tconst: String,
    pub title: String,
    pub year: i32,
    pub genres: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedMovie {
    pub title: String,
    pub found: bool,
    pub error: Option<String>,
    pub tconst: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieComparisonData {
    pub comparison_count: u32,
    pub movies: Vec<ComparedMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMovieFilters {
    pub genre: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMovie {
    pub rank: u32,
    pub tconst: String,
    pub title: String,
    pub year: i32,
    pub genres: Option<String>,
    pub rating: f64,
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMoviesData {
    pub filters: TopMovieFilters,
    pub result_count: u32,
    pub movies: Vec<RankedMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseMovieFilters {
    pub genre: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_votes: Option<u64>,
}

/// Movie ranked by quality score (`ln(1+votes) * rating`), computed
/// upstream and displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseMovie {
    pub rank: u32,
    pub rank_score: f64,
    pub tconst: String,
    pub title: String,
    pub year: i32,
    pub genres: Option<String>,
    pub rating: f64,
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseMoviesData {
    pub filters: BrowseMovieFilters,
    pub total_count: u64,
    pub result_count: u32,
    pub offset: u32,
    pub limit: u32,
    pub movies: Vec<BrowseMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseTvFilters {
    pub genre: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_votes: Option<u64>,
    pub min_seasons: Option<u32>,
    pub max_seasons: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseSeries {
    pub rank: u32,
    pub rank_score: f64,
    pub tconst: String,
    pub title: String,
    pub years: String,
    pub genres: Option<String>,
    pub avg_rating: f64,
    pub total_episodes: u32,
    pub total_seasons: u32,
    pub avg_votes_per_episode: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseTvData {
    pub filters: BrowseTvFilters,
    pub total_count: u64,
    pub result_count: u32,
    pub offset: u32,
    pub limit: u32,
    pub series: Vec<BrowseSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreStat {
    pub genres: String,
    pub title_count: u64,
    pub avg_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_rating: Option<f64>,
    pub total_votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAnalysisData {
    pub title_type: String,
    pub min_votes: u64,
    pub genre_count: u32,
    pub genres: Vec<GenreStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeStat {
    pub decade: String,
    pub decade_start: i32,
    pub title_count: u64,
    pub avg_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub total_votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeAnalysisData {
    pub title_type: String,
    pub min_votes: u64,
    pub decades: Vec<DecadeStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
    pub database: Option<String>,
    pub titles_count: Option<u64>,
    pub error: Option<String>,
}

impl HealthData {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Every tool resolves to one of these variants. The renderer dispatches on
/// the variant; `Error` always renders the inline error panel instead of a
/// chart over absent data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ToolResult {
    SeriesInfo(SeriesInfo),
    Episodes(EpisodesData),
    TopEpisodes(TopEpisodesData),
    WorstEpisodes(WorstEpisodesData),
    Analytics(AnalyticsData),
    EpisodeGraph(EpisodeGraphData),
    SeriesSearch(SeriesSearchData),
    SeriesComparison(SeriesComparisonData),
    MovieSearch(MovieSearchData),
    MovieDetails(MovieDetailsData),
    MovieComparison(MovieComparisonData),
    TopMovies(TopMoviesData),
    BrowseMovies(BrowseMoviesData),
    BrowseTv(BrowseTvData),
    GenreAnalysis(GenreAnalysisData),
    DecadeAnalysis(DecadeAnalysisData),
    Health(HealthData),
    Error { error: String },
}

impl ToolResult {
    pub fn error(message: impl Into<String>) -> Self {
        ToolResult::Error { error: message.into() }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            ToolResult::Error { error } => Some(error),
            _ => None,
        }
    }

    /// Parse a raw API body into the typed variant for `kind`.
    ///
    /// A body carrying an `error` field becomes the error variant no matter
    /// which tool produced it, and a body that does not match the declared
    /// shape surfaces as a validation error through the same channel rather
    /// than panicking at render time.
    pub fn parse(kind: ToolKind, body: Value) -> Self {
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return ToolResult::error(error);
        }

        fn typed<T, F>(kind: ToolKind, body: Value, wrap: F) -> ToolResult
        where
            T: serde::de::DeserializeOwned,
            F: FnOnce(T) -> ToolResult,
        {
            match serde_json::from_value::<T>(body) {
                Ok(data) => wrap(data),
                Err(err) => ToolResult::error(format!(
                    "Unexpected response shape from the IMDb API for {}: {}",
                    kind.name(),
                    err
                )),
            }
        }

        match kind {
            ToolKind::ResolveSeries => typed(kind, body, ToolResult::SeriesInfo),
            ToolKind::GetEpisodes => typed(kind, body, ToolResult::Episodes),
            ToolKind::GetTopEpisodes => typed(kind, body, ToolResult::TopEpisodes),
            ToolKind::WorstEpisodes => typed(kind, body, ToolResult::WorstEpisodes),
            ToolKind::SeriesAnalytics => typed(kind, body, ToolResult::Analytics),
            ToolKind::SeriesEpisodeGraph => typed(kind, body, ToolResult::EpisodeGraph),
            ToolKind::SearchSeries => typed(kind, body, ToolResult::SeriesSearch),
            ToolKind::CompareSeries => typed(kind, body, ToolResult::SeriesComparison),
            ToolKind::SearchMovies => typed(kind, body, ToolResult::MovieSearch),
            ToolKind::MovieDetails => typed(kind, body, ToolResult::MovieDetails),
            ToolKind::CompareMovies => typed(kind, body, ToolResult::MovieComparison),
            ToolKind::TopMovies => typed(kind, body, ToolResult::TopMovies),
            // Ranked listings reuse the browse shapes end to end.
            ToolKind::BrowseMovies | ToolKind::RankedMovies => {
                typed(kind, body, ToolResult::BrowseMovies)
            }
            ToolKind::BrowseTv | ToolKind::RankedTv => typed(kind, body, ToolResult::BrowseTv),
            ToolKind::GenreAnalysis => typed(kind, body, ToolResult::GenreAnalysis),
            ToolKind::DecadeAnalysis => typed(kind, body, ToolResult::DecadeAnalysis),
            ToolKind::CheckHealth => typed(kind, body, ToolResult::Health),
        }
    }

    /// Compact text form appended to the chat history so the model can keep
    /// reasoning about what its tool call returned.
    pub fn summary_for_model(&self) -> String {
        match self {
            ToolResult::Error { error } => format!("Error: {}", error),
            other => serde_json::to_string_pretty(other)
                .unwrap_or_else(|_| "<unserializable tool result>".to_string()),
        }
    }
}
