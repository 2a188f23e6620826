use pulse_types::{ContentTypeEngagement, KpiCard, OverviewSummary};

use crate::aggregate::{group_by_content_type, mean_by, round_to, sum_by, trailing};
use crate::error::MetricsResult;
use crate::format::format_compact;
use crate::generator::Dataset;

/// Days of engagement shown in the overview chart
const RECENT_ENGAGEMENT_DAYS: usize = 14;
/// Share of interactions assumed to come from distinct accounts
const UNIQUE_ACCOUNT_FACTOR: f64 = 0.8;

const WEEK_LABEL: &str = "from last week";
const MONTH_LABEL: &str = "from last month";

// Static changes for cards without a backing series
const FOLLOWING_CHANGE: f64 = -0.2;
const LIKES_CHANGE: f64 = 8.2;
const COMMENTS_CHANGE: f64 = 12.5;
const ENGAGEMENT_RATE_CHANGE: f64 = 0.4;
const ACCOUNTS_ENGAGED_CHANGE: f64 = 15.3;

fn count_card(title: &str, value: u64, change: f64, change_label: &str, positive: bool) -> KpiCard {
    KpiCard {
        title: title.to_string(),
        value: value as f64,
        display: format_compact(value),
        change,
        change_label: change_label.to_string(),
        positive,
    }
}

pub fn kpi_cards(dataset: &Dataset) -> MetricsResult<Vec<KpiCard>> {
    let current = dataset.current_metrics();
    let weekly = dataset.growth_metrics()?.weekly_growth.percentage;

    Ok(vec![
        count_card("Followers", current.followers, weekly, WEEK_LABEL, weekly > 0.0),
        count_card("Following", current.following, FOLLOWING_CHANGE, WEEK_LABEL, false),
        count_card("Total Likes", current.total_likes, LIKES_CHANGE, MONTH_LABEL, true),
        count_card("Total Comments", current.total_comments, COMMENTS_CHANGE, MONTH_LABEL, true),
        KpiCard {
            title: "Engagement Rate".to_string(),
            value: current.engagement_rate,
            display: format!("{}%", current.engagement_rate),
            change: ENGAGEMENT_RATE_CHANGE,
            change_label: WEEK_LABEL.to_string(),
            positive: true,
        },
        count_card(
            "Accounts Engaged",
            current.accounts_engaged,
            ACCOUNTS_ENGAGED_CHANGE,
            WEEK_LABEL,
            true,
        ),
    ])
}

pub fn engagement_by_type(dataset: &Dataset) -> MetricsResult<Vec<ContentTypeEngagement>> {
    group_by_content_type(dataset.recent_posts())
        .into_iter()
        .map(|(content_type, posts)| {
            let average = mean_by(&posts, |p| p.engagement_rate, "engagement rate by type")?;
            Ok(ContentTypeEngagement {
                content_type,
                name: content_type.label().to_string(),
                count: posts.len(),
                average_engagement_rate: round_to(average, 2),
                total_likes: sum_by(&posts, |p| p.likes),
                total_comments: sum_by(&posts, |p| p.comments),
            })
        })
        .collect()
}

pub fn build(dataset: &Dataset) -> MetricsResult<OverviewSummary> {
    let posts = dataset.recent_posts();

    let estimated_engaged_accounts = sum_by(posts, |p| {
        (p.interactions() as f64 * UNIQUE_ACCOUNT_FACTOR).floor() as i64
    });

    Ok(OverviewSummary {
        kpis: kpi_cards(dataset)?,
        engagement_by_type: engagement_by_type(dataset)?,
        estimated_engaged_accounts,
        average_post_engagement_rate: mean_by(posts, |p| p.engagement_rate, "post engagement rate")?,
        recent_engagement: trailing(dataset.engagement_history(), RECENT_ENGAGEMENT_DAYS).to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_types::ContentType;

    #[test]
    fn test_kpi_cards() {
        let dataset = Dataset::standard().unwrap();
        let cards = kpi_cards(&dataset).unwrap();

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].title, "Followers");
        assert_eq!(cards[0].display, "13.0K");
        assert!(cards[0].positive);
        assert_eq!(cards[0].change, dataset.growth_metrics().unwrap().weekly_growth.percentage);
        assert!(!cards[1].positive);
        assert_eq!(cards[1].display, "842");
        assert_eq!(cards[4].display, "3.2%");
        assert_eq!(cards[5].change_label, "from last week");
    }

    #[test]
    fn test_engagement_by_type_covers_all_posts() {
        let dataset = Dataset::standard().unwrap();
        let groups = engagement_by_type(&dataset).unwrap();

        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, 10);
        assert_eq!(groups[0].content_type, ContentType::Photo);
        assert_eq!(groups[0].name, "Photo");
        for group in &groups {
            assert!(group.average_engagement_rate > 0.0);
        }
    }

    #[test]
    fn test_overview_totals() {
        let dataset = Dataset::standard().unwrap();
        let summary = build(&dataset).unwrap();

        let expected: i64 = dataset
            .recent_posts()
            .iter()
            .map(|p| ((p.likes + p.comments) as f64 * 0.8).floor() as i64)
            .sum();
        assert_eq!(summary.estimated_engaged_accounts, expected);
        assert_eq!(summary.recent_engagement.len(), 14);
        assert_eq!(summary.recent_engagement.last(), dataset.engagement_history().last());
    }
}
