// Property tests over generated datasets
// Shape invariants must hold for any noise source and history length

use pulse_server::pages::{build_page, Page};
use pulse_server::{Dataset, GeneratorOptions, SplitMixNoise};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_series_shape_holds_for_any_salt(salt in any::<u64>()) {
        let dataset = Dataset::generate(&GeneratorOptions::default(), &SplitMixNoise::new(salt)).unwrap();

        prop_assert_eq!(dataset.follower_history().len(), 30);
        prop_assert_eq!(dataset.engagement_history().len(), 30);
        prop_assert_eq!(dataset.recent_posts().len(), 10);

        for pair in dataset.follower_history().windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        for post in dataset.recent_posts() {
            let expected = ((post.likes + post.comments) as f64 / 13000.0 * 100.0 * 100.0).round() / 100.0;
            prop_assert_eq!(post.engagement_rate, expected);
        }

        let growth = dataset.growth_metrics().unwrap();
        prop_assert!(growth.weekly_growth.percentage.is_finite());
    }

    #[test]
    fn prop_pages_build_with_full_week(days in 8usize..60, posts in 1usize..20) {
        let options = GeneratorOptions {
            history_days: days,
            post_count: posts,
            ..Default::default()
        };
        let dataset = Dataset::generate(&options, &SplitMixNoise::new(days as u64)).unwrap();
        for page in Page::ALL {
            prop_assert!(build_page(page, &dataset).is_ok());
        }
    }
}
