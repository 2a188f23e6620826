use pulse_types::{DailyRate, EngagementSummary};

use crate::aggregate::{percent, round_to, rounded_mean, sum_by, top_n_by};
use crate::error::MetricsResult;
use crate::generator::Dataset;

pub const TOP_POSTS: usize = 5;

/// Daily interactions as a percentage of the current follower count.
pub fn engagement_trend(dataset: &Dataset) -> MetricsResult<Vec<DailyRate>> {
    let followers = dataset.current_metrics().followers as f64;
    dataset
        .engagement_history()
        .iter()
        .map(|day| {
            Ok(DailyRate {
                date: day.date,
                value: round_to(percent(day.interactions() as f64, followers, "engagement trend")?, 2),
            })
        })
        .collect()
}

pub fn build(dataset: &Dataset) -> MetricsResult<EngagementSummary> {
    let history = dataset.engagement_history();
    let total_likes = sum_by(history, |d| d.likes);
    let total_comments = sum_by(history, |d| d.comments);

    Ok(EngagementSummary {
        total_likes,
        total_comments,
        average_daily_likes: rounded_mean(total_likes, history.len(), "daily likes")?,
        average_daily_comments: rounded_mean(total_comments, history.len(), "daily comments")?,
        engagement_rate: dataset.current_metrics().engagement_rate,
        engagement_trend: engagement_trend(dataset)?,
        top_posts: top_n_by(dataset.recent_posts(), TOP_POSTS, |p| p.engagement_rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_summary() {
        let dataset = Dataset::standard().unwrap();
        let summary = build(&dataset).unwrap();
        let history = dataset.engagement_history();

        assert_eq!(summary.total_likes, history.iter().map(|d| d.likes).sum::<i64>());
        assert!((250..450).contains(&summary.average_daily_likes));
        assert!((15..40).contains(&summary.average_daily_comments));
        assert_eq!(summary.engagement_trend.len(), 30);
    }

    #[test]
    fn test_top_posts_ordered_by_rate() {
        let dataset = Dataset::standard().unwrap();
        let summary = build(&dataset).unwrap();

        assert_eq!(summary.top_posts.len(), TOP_POSTS);
        assert_eq!(summary.top_posts[0].id, "post_2");
        assert_eq!(summary.top_posts[0].engagement_rate, 3.74);
        for pair in summary.top_posts.windows(2) {
            assert!(pair[0].engagement_rate >= pair[1].engagement_rate);
        }
    }

    #[test]
    fn test_trend_value_matches_formula() {
        let dataset = Dataset::standard().unwrap();
        let trend = engagement_trend(&dataset).unwrap();
        let first = &dataset.engagement_history()[0];
        let expected = round_to((first.likes + first.comments) as f64 / 13045.0 * 100.0, 2);
        assert_eq!(trend[0].value, expected);
    }
}
