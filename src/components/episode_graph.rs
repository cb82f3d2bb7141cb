use dioxus::prelude::*;
use std::collections::BTreeSet;

use crate::components::design_tokens::{
    rating_color, season_color, season_line_color, season_marker_glyph, CATEGORY_SERIES,
    SEMANTIC_SUCCESS, SEMANTIC_WARNING,
};
use crate::components::format::{episode_tag, group_digits};
use crate::tools::{EpisodeGraphData, GraphEpisode};

/// Axis scaling strategies for the rating chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Floor/ceiling of the visible ratings with half-a-point padding.
    Auto,
    /// The full 0-10 scale.
    Full,
    /// Tight fit with 0.2 padding.
    Autoscale,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 3] = [ScaleMode::Auto, ScaleMode::Full, ScaleMode::Autoscale];

    pub fn label(&self) -> &'static str {
        match self {
            ScaleMode::Auto => "Auto",
            ScaleMode::Full => "0-10",
            ScaleMode::Autoscale => "Autoscale",
        }
    }

    /// Parse the server's scale hint; anything unrecognized is Auto.
    pub fn from_hint(hint: &str) -> ScaleMode {
        match hint {
            "0-10" => ScaleMode::Full,
            "autoscale" => ScaleMode::Autoscale,
            _ => ScaleMode::Auto,
        }
    }
}

/// Y-axis domain for the visible ratings. An empty visible set falls back
/// to the full 0-10 range; all modes clamp to [0, 10].
pub fn y_domain(mode: ScaleMode, ratings: &[f64]) -> (f64, f64) {
    if ratings.is_empty() {
        return (0.0, 10.0);
    }

    let min_rating = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max_rating = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    match mode {
        ScaleMode::Full => (0.0, 10.0),
        ScaleMode::Autoscale => ((min_rating - 0.2).max(0.0), (max_rating + 0.2).min(10.0)),
        ScaleMode::Auto => (
            (min_rating.floor() - 0.5).max(0.0),
            (max_rating.ceil() + 0.5).min(10.0),
        ),
    }
}

/// First-occurrence-wins extremum picks, matching the reduce used by the
/// summary cards. Rating ties keep the earliest episode.
pub fn best_episode<'a>(episodes: &[&'a GraphEpisode]) -> Option<&'a GraphEpisode> {
    episodes
        .iter()
        .copied()
        .reduce(|best, ep| if ep.rating > best.rating { ep } else { best })
}

pub fn worst_episode<'a>(episodes: &[&'a GraphEpisode]) -> Option<&'a GraphEpisode> {
    episodes
        .iter()
        .copied()
        .reduce(|worst, ep| if ep.rating < worst.rating { ep } else { worst })
}

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 400.0;
const PAD_TOP: f64 = 20.0;
const PAD_RIGHT: f64 = 60.0;
const PAD_BOTTOM: f64 = 40.0;
const PAD_LEFT: f64 = 50.0;

/// Interactive episode ratings chart: season bands, per-season trendlines,
/// an overall trendline toggle, season visibility toggles, and three axis
/// scale modes. The domain is recomputed whenever the visible seasons or
/// the scale mode change.
#[component]
pub fn EpisodeGraphView(data: EpisodeGraphData) -> Element {
    let all_seasons: BTreeSet<u32> = data.seasons.iter().map(|s| s.season).collect();
    let initial_seasons = all_seasons.clone();
    let mut visible_seasons = use_signal(move || initial_seasons);
    let initial_mode = ScaleMode::from_hint(&data.scale);
    let mut scale_mode = use_signal(move || initial_mode);
    let mut show_trendline = use_signal(|| false);
    let mut hovered = use_signal(|| None::<String>);

    let colors = CATEGORY_SERIES;
    let visible = visible_seasons.read().clone();
    let mode = *scale_mode.read();
    let trendline_on = *show_trendline.read();
    let hovered_id = hovered.read().clone();

    let visible_episodes: Vec<&GraphEpisode> = data
        .episodes
        .iter()
        .filter(|ep| visible.contains(&ep.season))
        .collect();
    let has_visible = !visible_episodes.is_empty();
    let visible_ratings: Vec<f64> = visible_episodes.iter().map(|ep| ep.rating).collect();
    let (min_y, max_y) = y_domain(mode, &visible_ratings);
    let y_range = max_y - min_y;

    let inner_width = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
    let inner_height = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let episode_total = data.episodes.len();

    let scale_x = |index: usize| {
        PAD_LEFT + index as f64 / (episode_total.saturating_sub(1).max(1)) as f64 * inner_width
    };
    let scale_y =
        |rating: f64| PAD_TOP + inner_height - (rating - min_y) / y_range.max(0.1) * inner_height;

    let best = best_episode(&visible_episodes).cloned();
    let worst = worst_episode(&visible_episodes).cloned();
    let best_id = best.as_ref().map(|ep| ep.tconst.clone());
    let worst_id = worst.as_ref().map(|ep| ep.tconst.clone());

    // Season background bands, colored by position among visible seasons.
    let band_nodes: Vec<Element> = data
        .seasons
        .iter()
        .filter(|s| visible.contains(&s.season))
        .enumerate()
        .map(|(idx, season)| {
            let color = season_color(idx);
            let x = scale_x(season.start_index);
            let width = (season.end_index - season.start_index + 1) as f64
                / episode_total.max(1) as f64
                * inner_width;
            rsx! {
                rect {
                    key: "band-{season.season}",
                    fill: "{color}",
                    height: "{inner_height}",
                    width: "{width}",
                    x: "{x}",
                    y: "{PAD_TOP}",
                }
            }
        })
        .collect();

    // Gridlines and axis labels, six stops across the domain.
    let label_x = PAD_LEFT - 10.0;
    let axis_bottom = CHART_HEIGHT - PAD_BOTTOM;
    let axis_right = CHART_WIDTH - PAD_RIGHT;
    let grid_nodes: Vec<Element> = (0..=5)
        .map(|i| {
            let value = min_y + i as f64 * y_range / 5.0;
            let label = format!("{:.1}", value);
            let y = scale_y(value);
            let text_y = y + 4.0;
            rsx! {
                g { key: "grid-{i}",
                    line {
                        opacity: "0.2",
                        stroke: "currentColor",
                        stroke_dasharray: "2,2",
                        x1: "{PAD_LEFT}",
                        x2: "{axis_right}",
                        y1: "{y}",
                        y2: "{y}",
                    }
                    text {
                        class: "axis-label",
                        fill: "currentColor",
                        text_anchor: "end",
                        x: "{label_x}",
                        y: "{text_y}",
                        "{label}"
                    }
                }
            }
        })
        .collect();

    // Per-season trendlines from server-fitted slope/intercept, evaluated
    // at the season's episode-index bounds.
    let trend_nodes: Vec<Element> = data
        .seasons
        .iter()
        .filter(|s| visible.contains(&s.season))
        .map(|season| {
            let y1 = season.trendline.slope * season.start_index as f64 + season.trendline.intercept;
            let y2 = season.trendline.slope * season.end_index as f64 + season.trendline.intercept;
            let path = format!(
                "M {} {} L {} {}",
                scale_x(season.start_index),
                scale_y(y1),
                scale_x(season.end_index),
                scale_y(y2)
            );
            let color = season_line_color(season.season);
            rsx! {
                path {
                    key: "trendline-{season.season}",
                    d: "{path}",
                    fill: "none",
                    opacity: "0.6",
                    stroke: "{color}",
                    stroke_linecap: "round",
                    stroke_width: "2.5",
                }
            }
        })
        .collect();

    let overall_path = (trendline_on && has_visible).then(|| {
        let last_index = episode_total.saturating_sub(1);
        let y1 = data.overall_trendline.intercept;
        let y2 =
            data.overall_trendline.slope * last_index as f64 + data.overall_trendline.intercept;
        format!(
            "M {} {} L {} {}",
            scale_x(0),
            scale_y(y1),
            scale_x(last_index),
            scale_y(y2)
        )
    });

    // Data points; the best/worst episodes get fixed accent fills and the
    // marker shape cycles by season.
    let marker_nodes: Vec<Element> = visible_episodes
        .iter()
        .map(|ep| {
            let is_hovered = hovered_id.as_deref() == Some(ep.tconst.as_str());
            let is_best = best_id.as_deref() == Some(ep.tconst.as_str());
            let is_worst = worst_id.as_deref() == Some(ep.tconst.as_str());
            let fill = if is_best {
                "#22c55e"
            } else if is_worst {
                "#ef4444"
            } else {
                season_line_color(ep.season)
            };
            let size: f64 = if is_hovered { 7.0 } else { 4.5 };
            let stroke_width = if is_hovered { "2.5" } else { "1.5" };
            let cx = scale_x(ep.episode_index);
            let cy = scale_y(ep.rating);
            let tconst = ep.tconst.clone();
            let shape = (ep.season.saturating_sub(1) as usize) % 5;
            let double = size * 2.0;
            let rect_x = cx - size;
            let rect_y = cy - size;
            let diamond = format!(
                "{},{} {},{} {},{} {},{}",
                cx, cy - size, cx + size, cy, cx, cy + size, cx - size, cy
            );
            let triangle_up = format!(
                "{},{} {},{} {},{}",
                cx, cy - size, cx + size, cy + size, cx - size, cy + size
            );
            let triangle_down = format!(
                "{},{} {},{} {},{}",
                cx, cy + size, cx + size, cy - size, cx - size, cy - size
            );
            rsx! {
                g { key: "{tconst}",
                    circle {
                        class: "hover-target",
                        cx: "{cx}",
                        cy: "{cy}",
                        fill: "transparent",
                        r: "12",
                        onmouseenter: move |_| hovered.set(Some(tconst.clone())),
                    }
                    match shape {
                        0 => rsx! {
                            circle {
                                cx: "{cx}",
                                cy: "{cy}",
                                fill: "{fill}",
                                pointer_events: "none",
                                r: "{size}",
                                stroke: "white",
                                stroke_width: "{stroke_width}",
                            }
                        },
                        1 => rsx! {
                            polygon {
                                fill: "{fill}",
                                pointer_events: "none",
                                points: "{diamond}",
                                stroke: "white",
                                stroke_width: "{stroke_width}",
                            }
                        },
                        2 => rsx! {
                            rect {
                                fill: "{fill}",
                                height: "{double}",
                                pointer_events: "none",
                                stroke: "white",
                                stroke_width: "{stroke_width}",
                                width: "{double}",
                                x: "{rect_x}",
                                y: "{rect_y}",
                            }
                        },
                        3 => rsx! {
                            polygon {
                                fill: "{fill}",
                                pointer_events: "none",
                                points: "{triangle_up}",
                                stroke: "white",
                                stroke_width: "{stroke_width}",
                            }
                        },
                        _ => rsx! {
                            polygon {
                                fill: "{fill}",
                                pointer_events: "none",
                                points: "{triangle_down}",
                                stroke: "white",
                                stroke_width: "{stroke_width}",
                            }
                        },
                    }
                }
            }
        })
        .collect();

    // Pulsing rings around the extremes, hidden while that point is hovered.
    let ring_nodes: Vec<Element> = [
        (best.as_ref(), "#22c55e"),
        (worst.as_ref(), "#ef4444"),
    ]
    .into_iter()
    .filter_map(|(episode, color)| {
        let ep = episode?;
        if hovered_id.as_deref() == Some(ep.tconst.as_str()) {
            return None;
        }
        let cx = scale_x(ep.episode_index);
        let cy = scale_y(ep.rating);
        Some(rsx! {
            circle {
                key: "ring-{ep.tconst}",
                class: "pulse",
                cx: "{cx}",
                cy: "{cy}",
                fill: "none",
                r: "8",
                stroke: "{color}",
                stroke_width: "2",
            }
        })
    })
    .collect();

    let hovered_detail = hovered_id
        .as_deref()
        .and_then(|id| data.episodes.iter().find(|ep| ep.tconst == id))
        .map(|episode| {
            let tag = episode_tag(episode.season, episode.episode);
            let rating = format!("{:.1}", episode.rating);
            let votes = group_digits(episode.votes);
            let width = episode.rating / 10.0 * 100.0;
            let bar_class = rating_color(episode.rating);
            let badge_class = if best_id.as_deref() == Some(episode.tconst.as_str()) {
                "badge badge-success"
            } else if worst_id.as_deref() == Some(episode.tconst.as_str()) {
                "badge badge-error"
            } else {
                colors.badge
            };
            rsx! {
                div { class: "card hover-detail",
                    div { class: "item-head",
                        div { class: "item-text",
                            div { class: "strong", "{episode.title}" }
                            div { class: "caption", "Season {episode.season}, Episode {episode.episode}" }
                        }
                        span { class: "{badge_class}", "{tag}" }
                    }
                    div { class: "meta-row top-border",
                        span { class: "rating-inline",
                            span { class: "star", "★" }
                            span { class: "rating-big", "{rating}" }
                            span { class: "caption", "/10" }
                        }
                        span { class: "caption", "👍 {votes} votes" }
                    }
                    div { class: "bar-track narrow",
                        div { class: "bar-fill {bar_class}", style: "width: {width}%" }
                    }
                }
            }
        });

    let season_toggle_nodes: Vec<Element> = all_seasons
        .iter()
        .copied()
        .map(|season| {
            let is_visible = visible.contains(&season);
            let class = if is_visible { "toggle active-series" } else { "toggle" };
            rsx! {
                button {
                    class: "{class}",
                    key: "{season}",
                    onclick: move |_| {
                        let mut next = visible_seasons.read().clone();
                        if !next.insert(season) {
                            next.remove(&season);
                        }
                        visible_seasons.set(next);
                    },
                    "S{season}"
                }
            }
        })
        .collect();

    let scale_toggle_nodes: Vec<Element> = ScaleMode::ALL
        .into_iter()
        .map(|candidate| {
            let class = if mode == candidate { "toggle active-series" } else { "toggle" };
            let label = candidate.label();
            rsx! {
                button {
                    class: "{class}",
                    key: "{label}",
                    onclick: move |_| scale_mode.set(candidate),
                    "{label}"
                }
            }
        })
        .collect();

    let trendline_class = if trendline_on { "toggle active-series trendline-toggle" } else { "toggle trendline-toggle" };

    let legend_nodes: Vec<Element> = data
        .seasons
        .iter()
        .filter(|s| visible.contains(&s.season))
        .map(|season| {
            let color = season_line_color(season.season);
            let glyph = season_marker_glyph(season.season);
            let avg = format!("{:.2}", season.avg_rating);
            rsx! {
                div { class: "detail-row", key: "{season.season}",
                    span { class: "legend-glyph", style: "color: {color}", "{glyph}" }
                    span { "Season {season.season}" }
                    span { class: "caption", "(avg: {avg})" }
                }
            }
        })
        .collect();

    let summary_nodes: Vec<Element> = [
        (best.as_ref(), "▲", "Best Episode", SEMANTIC_SUCCESS.icon),
        (worst.as_ref(), "▼", "Lowest Rated Episode", SEMANTIC_WARNING.icon),
    ]
    .into_iter()
    .filter_map(|(episode, glyph, heading, icon_class)| {
        let ep = episode?;
        let tag = episode_tag(ep.season, ep.episode);
        let rating = format!("{:.1}", ep.rating);
        let votes = group_digits(ep.votes);
        let title = ep.title.clone();
        Some(rsx! {
            div { class: "card", key: "summary-{heading}",
                div { class: "detail-row section-head",
                    span { class: "{icon_class}", "{glyph}" }
                    h4 { class: "section-title", "{heading}" }
                }
                div { class: "item-text",
                    div { class: "strong", "{title}" }
                    div { class: "meta-row",
                        span { class: "muted", "{tag}" }
                        span { class: "rating-inline",
                            span { class: "star", "★" }
                            "{rating}"
                        }
                        span { class: "muted", "{votes} votes" }
                    }
                }
            }
        })
    })
    .collect();

    let season_count = data.seasons.len();
    let all_visible = visible.len() == all_seasons.len();
    let toggle_all_label = if all_visible { "Hide All" } else { "Show All" };
    let show_toggle_all = all_seasons.len() > 1;
    let all_for_toggle = all_seasons;

    rsx! {
        div { class: "result-stack",
            div { class: "card",
                div { class: "card-header",
                    span { class: "card-icon {colors.icon}", "📺" }
                    div { class: "card-heading",
                        h3 { class: "card-title", "Episode Ratings Graph" }
                        p { class: "card-subtitle", "{data.series}" }
                    }
                    div { class: "badge-row",
                        span { class: "badge", "{episode_total} episodes" }
                        span { class: "badge", "{season_count} seasons" }
                    }
                }

                // Controls
                div { class: "card-section",
                    div { class: "control-row",
                        span { class: "muted", "Seasons:" }
                        {season_toggle_nodes.into_iter()}
                        if show_toggle_all {
                            button {
                                class: "toggle",
                                onclick: move |_| {
                                    if visible_seasons.read().len() == all_for_toggle.len() {
                                        visible_seasons.set(BTreeSet::new());
                                    } else {
                                        visible_seasons.set(all_for_toggle.clone());
                                    }
                                },
                                "{toggle_all_label}"
                            }
                        }
                    }
                    div { class: "control-row",
                        span { class: "muted", "Scale:" }
                        {scale_toggle_nodes.into_iter()}
                        button {
                            class: "{trendline_class}",
                            onclick: move |_| {
                                let current = *show_trendline.read();
                                show_trendline.set(!current);
                            },
                            "∿ Trendline"
                        }
                    }
                }

                // Chart
                div { class: "card-body",
                    if !has_visible {
                        div { class: "empty-state",
                            p { class: "muted", "No episodes selected. Enable at least one season above." }
                        }
                    } else {
                        div { class: "chart-scroll",
                            svg {
                                width: "{CHART_WIDTH}",
                                height: "{CHART_HEIGHT}",
                                onmouseleave: move |_| hovered.set(None),

                                {band_nodes.into_iter()}

                                line {
                                    stroke: "currentColor",
                                    stroke_width: "1",
                                    x1: "{PAD_LEFT}",
                                    x2: "{PAD_LEFT}",
                                    y1: "{PAD_TOP}",
                                    y2: "{axis_bottom}",
                                }

                                {grid_nodes.into_iter()}

                                line {
                                    stroke: "currentColor",
                                    stroke_width: "1",
                                    x1: "{PAD_LEFT}",
                                    x2: "{axis_right}",
                                    y1: "{axis_bottom}",
                                    y2: "{axis_bottom}",
                                }

                                {trend_nodes.into_iter()}

                                if let Some(path_data) = overall_path {
                                    path {
                                        d: "{path_data}",
                                        fill: "none",
                                        opacity: "0.9",
                                        stroke: "#1f2937",
                                        stroke_dasharray: "8,4",
                                        stroke_width: "3",
                                    }
                                }

                                {marker_nodes.into_iter()}
                                {ring_nodes.into_iter()}
                            }

                            if let Some(detail) = hovered_detail {
                                {detail}
                            }
                        }
                    }
                }

                // Legend
                if has_visible {
                    div { class: "card-section legend-row",
                        {legend_nodes.into_iter()}
                    }
                }
            }

            if has_visible {
                div { class: "card-grid two-col",
                    {summary_nodes.into_iter()}
                }
            }
        }
    }
}
