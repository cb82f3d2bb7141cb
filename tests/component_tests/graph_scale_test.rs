#[cfg(test)]
mod tests {
    use serieschat::components::episode_graph::{
        best_episode, worst_episode, y_domain, ScaleMode,
    };
    use serieschat::tools::GraphEpisode;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn auto_mode_floors_and_ceils_with_padding() {
        let (min, max) = y_domain(ScaleMode::Auto, &[7.2, 8.9]);
        assert!(close(min, 6.5), "got {}", min);
        assert!(close(max, 9.5), "got {}", max);
    }

    #[test]
    fn full_mode_is_always_zero_to_ten() {
        let (min, max) = y_domain(ScaleMode::Full, &[7.2, 8.9]);
        assert!(close(min, 0.0));
        assert!(close(max, 10.0));
    }

    #[test]
    fn autoscale_mode_fits_tightly() {
        let (min, max) = y_domain(ScaleMode::Autoscale, &[7.2, 8.9]);
        assert!(close(min, 7.0), "got {}", min);
        assert!(close(max, 9.1), "got {}", max);
    }

    #[test]
    fn domains_clamp_to_the_rating_scale() {
        let (min, max) = y_domain(ScaleMode::Auto, &[0.3, 9.8]);
        assert!(close(min, 0.0));
        assert!(close(max, 10.0));

        let (min, max) = y_domain(ScaleMode::Autoscale, &[0.1, 9.95]);
        assert!(close(min, 0.0));
        assert!(close(max, 10.0));
    }

    #[test]
    fn empty_visible_set_defaults_to_full_range() {
        for mode in ScaleMode::ALL {
            let (min, max) = y_domain(mode, &[]);
            assert!(close(min, 0.0));
            assert!(close(max, 10.0));
        }
    }

    #[test]
    fn scale_hint_parsing() {
        assert_eq!(ScaleMode::from_hint("auto"), ScaleMode::Auto);
        assert_eq!(ScaleMode::from_hint("0-10"), ScaleMode::Full);
        assert_eq!(ScaleMode::from_hint("autoscale"), ScaleMode::Autoscale);
        assert_eq!(ScaleMode::from_hint("bogus"), ScaleMode::Auto);
    }

    fn episode(index: usize, rating: f64) -> GraphEpisode {
        GraphEpisode {
            season: 1,
            episode: index as u32 + 1,
            title: format!("Episode {}", index + 1),
            rating,
            votes: 1000,
            tconst: format!("tt{:07}", index),
            episode_index: index,
        }
    }

    #[test]
    fn extremum_picks_keep_the_first_occurrence_on_ties() {
        let episodes = vec![
            episode(0, 8.5),
            episode(1, 9.2),
            episode(2, 9.2),
            episode(3, 6.1),
            episode(4, 6.1),
        ];
        let refs: Vec<&GraphEpisode> = episodes.iter().collect();

        let best = best_episode(&refs).unwrap();
        assert_eq!(best.episode_index, 1);

        let worst = worst_episode(&refs).unwrap();
        assert_eq!(worst.episode_index, 3);
    }

    #[test]
    fn extremum_picks_handle_empty_sets() {
        let refs: Vec<&GraphEpisode> = Vec::new();
        assert!(best_episode(&refs).is_none());
        assert!(worst_episode(&refs).is_none());
    }
}
