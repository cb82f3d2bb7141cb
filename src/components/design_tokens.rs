//! Design tokens for the metadata result components.
//! Provides consistent styling across all data visualizations.

/// CSS classes for one content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPalette {
    pub icon: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
}

pub const CATEGORY_MOVIES: CategoryPalette = CategoryPalette {
    icon: "icon-movies",
    bg: "bg-movies",
    border: "border-movies",
    text: "text-movies",
    badge: "badge badge-movies",
};

pub const CATEGORY_SERIES: CategoryPalette = CategoryPalette {
    icon: "icon-series",
    bg: "bg-series",
    border: "border-series",
    text: "text-series",
    badge: "badge badge-series",
};

pub const CATEGORY_ANALYTICS: CategoryPalette = CategoryPalette {
    icon: "icon-analytics",
    bg: "bg-analytics",
    border: "border-analytics",
    text: "text-analytics",
    badge: "badge badge-analytics",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticPalette {
    pub icon: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
    pub badge: &'static str,
}

pub const SEMANTIC_SUCCESS: SemanticPalette = SemanticPalette {
    icon: "icon-success",
    bg: "bg-success",
    border: "border-success",
    badge: "badge badge-success",
};

pub const SEMANTIC_WARNING: SemanticPalette = SemanticPalette {
    icon: "icon-warning",
    bg: "bg-warning",
    border: "border-warning",
    badge: "badge badge-warning",
};

pub const SEMANTIC_ERROR: SemanticPalette = SemanticPalette {
    icon: "icon-error",
    bg: "bg-error",
    border: "border-error",
    badge: "badge badge-error",
};

/// Rating tier class for bar fills. Thresholds are fixed global constants:
/// >=8 excellent, >=7 good, >=6 average, everything else (including
/// out-of-range input) poor.
pub fn rating_color(rating: f64) -> &'static str {
    if rating >= 8.0 {
        "rating-excellent"
    } else if rating >= 7.0 {
        "rating-good"
    } else if rating >= 6.0 {
        "rating-average"
    } else {
        "rating-poor"
    }
}

/// Rank tier class: 1-3 gold, 4-10 green, everything else neutral.
pub fn rank_color(rank: u32) -> &'static str {
    if rank <= 3 {
        "rank-top3"
    } else if rank <= 10 {
        "rank-top10"
    } else {
        "rank-default"
    }
}

/// Translucent band colors for season backgrounds in the episode graph.
pub const SEASON_BAND_COLORS: [&str; 10] = [
    "rgba(99, 102, 241, 0.1)",  // indigo
    "rgba(139, 92, 246, 0.1)",  // violet
    "rgba(236, 72, 153, 0.1)",  // pink
    "rgba(251, 146, 60, 0.1)",  // orange
    "rgba(34, 197, 94, 0.1)",   // green
    "rgba(14, 165, 233, 0.1)",  // sky
    "rgba(168, 85, 247, 0.1)",  // purple
    "rgba(244, 63, 94, 0.1)",   // rose
    "rgba(234, 179, 8, 0.1)",   // yellow
    "rgba(20, 184, 166, 0.1)",  // teal
];

pub fn season_color(season_index: usize) -> &'static str {
    SEASON_BAND_COLORS[season_index % SEASON_BAND_COLORS.len()]
}

/// Solid colors for per-season trendlines and markers, cycled by season
/// number starting at 1.
pub const SEASON_LINE_COLORS: [&str; 5] = [
    "#8b5cf6", // violet
    "#3b82f6", // blue
    "#10b981", // green
    "#f59e0b", // amber
    "#ef4444", // red
];

pub fn season_line_color(season: u32) -> &'static str {
    SEASON_LINE_COLORS[(season.saturating_sub(1) as usize) % SEASON_LINE_COLORS.len()]
}

/// Legend glyphs matching the per-season marker shapes.
pub const SEASON_MARKER_GLYPHS: [&str; 5] = ["●", "◆", "■", "▲", "▼"];

pub fn season_marker_glyph(season: u32) -> &'static str {
    SEASON_MARKER_GLYPHS[(season.saturating_sub(1) as usize) % SEASON_MARKER_GLYPHS.len()]
}
