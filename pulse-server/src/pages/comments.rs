use pulse_types::{CommentsSummary, ContentTypeComments, DailyRate, WeeklyComments};

use crate::aggregate::{
    group_by_content_type, max_by, percent, round_to, rounded_mean, split_trailing_weeks, sum_by,
    top_n_by,
};
use crate::error::MetricsResult;
use crate::generator::Dataset;

pub const TOP_COMMENTED: usize = 5;

pub fn comment_to_like_ratio(dataset: &Dataset) -> MetricsResult<Vec<DailyRate>> {
    dataset
        .engagement_history()
        .iter()
        .map(|day| {
            Ok(DailyRate {
                date: day.date,
                value: round_to(percent(day.comments as f64, day.likes as f64, "comment to like ratio")?, 1),
            })
        })
        .collect()
}

pub fn comments_by_type(dataset: &Dataset) -> MetricsResult<Vec<ContentTypeComments>> {
    group_by_content_type(dataset.recent_posts())
        .into_iter()
        .map(|(content_type, posts)| {
            let comments = sum_by(&posts, |p| p.comments);
            Ok(ContentTypeComments {
                content_type,
                name: content_type.label().to_string(),
                comments,
                posts: posts.len(),
                average_per_post: rounded_mean(comments, posts.len(), "comments per post")?,
            })
        })
        .collect()
}

pub fn weekly_comparison(dataset: &Dataset) -> MetricsResult<Vec<WeeklyComments>> {
    split_trailing_weeks(dataset.engagement_history())
        .into_iter()
        .map(|(week, days)| {
            let comments = sum_by(days, |d| d.comments);
            Ok(WeeklyComments {
                week,
                comments,
                days: days.len(),
                average_per_day: rounded_mean(comments, days.len(), "weekly comments")?,
            })
        })
        .collect()
}

pub fn build(dataset: &Dataset) -> MetricsResult<CommentsSummary> {
    let history = dataset.engagement_history();
    let current = dataset.current_metrics();
    let total_comments = sum_by(history, |d| d.comments);
    let average_daily_comments = rounded_mean(total_comments, history.len(), "daily comments")?;

    Ok(CommentsSummary {
        snapshot_total_comments: current.total_comments,
        total_comments,
        average_daily_comments,
        max_daily_comments: max_by(history, |d| d.comments, "daily comments")?,
        comment_rate: round_to(
            percent(average_daily_comments as f64, current.followers as f64, "comment rate")?,
            2,
        ),
        comment_to_like_ratio: comment_to_like_ratio(dataset)?,
        comments_by_type: comments_by_type(dataset)?,
        top_commented_posts: top_n_by(dataset.recent_posts(), TOP_COMMENTED, |p| p.comments),
        weekly_comparison: weekly_comparison(dataset)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_types::WeekLabel;

    #[test]
    fn test_comments_summary() {
        let dataset = Dataset::standard().unwrap();
        let summary = build(&dataset).unwrap();

        assert!(summary.max_daily_comments >= summary.average_daily_comments);
        assert_eq!(summary.comment_to_like_ratio.len(), 30);
        for point in &summary.comment_to_like_ratio {
            assert!(point.value > 0.0 && point.value < 20.0);
        }
    }

    #[test]
    fn test_comment_cards() {
        let dataset = Dataset::standard().unwrap();
        let summary = build(&dataset).unwrap();

        assert_eq!(summary.snapshot_total_comments, 8945);
        assert_eq!(summary.total_comments, 758);
        assert_eq!(summary.average_daily_comments, 25);
        // 25 / 13045 * 100
        assert_eq!(summary.comment_rate, 0.19);
    }

    #[test]
    fn test_comments_by_type_totals_match_posts() {
        let dataset = Dataset::standard().unwrap();
        let groups = comments_by_type(&dataset).unwrap();

        let total: i64 = groups.iter().map(|g| g.comments).sum();
        let expected: i64 = dataset.recent_posts().iter().map(|p| p.comments).sum();
        assert_eq!(total, expected);
        assert_eq!(groups.iter().map(|g| g.posts).sum::<usize>(), 10);
    }

    #[test]
    fn test_weekly_comparison_splits_last_fourteen_days() {
        let dataset = Dataset::standard().unwrap();
        let weeks = weekly_comparison(&dataset).unwrap();

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week, WeekLabel::PreviousWeek);
        assert_eq!(weeks[1].week, WeekLabel::ThisWeek);
        let history = dataset.engagement_history();
        let this_week: i64 = history[23..].iter().map(|d| d.comments).sum();
        assert_eq!(weeks[1].comments, this_week);
        assert_eq!(weeks[1].days, 7);
    }

    #[test]
    fn test_top_commented_posts() {
        let dataset = Dataset::standard().unwrap();
        let summary = build(&dataset).unwrap();
        assert_eq!(summary.top_commented_posts.len(), 5);
        // post_6 has the most comments (27)
        assert_eq!(summary.top_commented_posts[0].id, "post_6");
    }
}
