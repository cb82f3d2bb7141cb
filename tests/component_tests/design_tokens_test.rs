#[cfg(test)]
mod tests {
    use serieschat::components::design_tokens::{
        rank_color, rating_color, season_color, season_line_color, season_marker_glyph,
        SEASON_BAND_COLORS,
    };

    #[test]
    fn rating_buckets_have_inclusive_boundaries() {
        assert_eq!(rating_color(8.0), "rating-excellent");
        assert_eq!(rating_color(9.9), "rating-excellent");
        assert_eq!(rating_color(7.0), "rating-good");
        assert_eq!(rating_color(7.9), "rating-good");
        assert_eq!(rating_color(6.0), "rating-average");
        assert_eq!(rating_color(6.9), "rating-average");
        assert_eq!(rating_color(5.9), "rating-poor");
        assert_eq!(rating_color(0.0), "rating-poor");
    }

    #[test]
    fn rating_color_is_total_for_out_of_range_input() {
        // Out-of-range ratings fall through to the boundary buckets rather
        // than panicking.
        assert_eq!(rating_color(-3.0), "rating-poor");
        assert_eq!(rating_color(11.5), "rating-excellent");
        assert_eq!(rating_color(f64::NAN), "rating-poor");
    }

    #[test]
    fn rank_buckets() {
        assert_eq!(rank_color(1), "rank-top3");
        assert_eq!(rank_color(3), "rank-top3");
        assert_eq!(rank_color(4), "rank-top10");
        assert_eq!(rank_color(10), "rank-top10");
        assert_eq!(rank_color(11), "rank-default");
        assert_eq!(rank_color(250), "rank-default");
    }

    #[test]
    fn season_palette_cycles_by_modulo() {
        assert_eq!(season_color(0), SEASON_BAND_COLORS[0]);
        assert_eq!(season_color(9), SEASON_BAND_COLORS[9]);
        assert_eq!(season_color(10), SEASON_BAND_COLORS[0]);
        assert_eq!(season_color(23), SEASON_BAND_COLORS[3]);
    }

    #[test]
    fn season_line_styles_cycle_from_season_one() {
        assert_eq!(season_line_color(1), season_line_color(6));
        assert_ne!(season_line_color(1), season_line_color(2));
        assert_eq!(season_marker_glyph(1), "●");
        assert_eq!(season_marker_glyph(6), "●");
        assert_eq!(season_marker_glyph(5), "▼");
    }
}
