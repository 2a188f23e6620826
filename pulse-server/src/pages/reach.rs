use pulse_types::{AudienceSlice, ContentTypeReach, DailyRate, ReachSummary, WeeklyReach};

use crate::aggregate::{
    group_by_content_type, max_by, percent, ratio, round_to, rounded_mean, split_trailing_weeks,
    sum_by,
};
use crate::error::MetricsResult;
use crate::generator::Dataset;

/// Reach estimate per interaction on a post
const REACH_MULTIPLIER: f64 = 1.5;

pub fn reach_rate(dataset: &Dataset) -> MetricsResult<Vec<DailyRate>> {
    let followers = dataset.current_metrics().followers as f64;
    dataset
        .engagement_history()
        .iter()
        .map(|day| {
            Ok(DailyRate {
                date: day.date,
                value: round_to(percent(day.accounts_engaged as f64, followers, "reach rate")?, 1),
            })
        })
        .collect()
}

/// Interactions per engaged account
pub fn reach_efficiency(dataset: &Dataset) -> MetricsResult<Vec<DailyRate>> {
    dataset
        .engagement_history()
        .iter()
        .map(|day| {
            Ok(DailyRate {
                date: day.date,
                value: round_to(
                    ratio(day.interactions() as f64, day.accounts_engaged as f64, "reach efficiency")?,
                    2,
                ),
            })
        })
        .collect()
}

pub fn weekly_comparison(dataset: &Dataset) -> MetricsResult<Vec<WeeklyReach>> {
    split_trailing_weeks(dataset.engagement_history())
        .into_iter()
        .map(|(week, days)| {
            let accounts_engaged = sum_by(days, |d| d.accounts_engaged);
            let total_engagement = sum_by(days, |d| d.interactions());
            Ok(WeeklyReach {
                week,
                accounts_engaged,
                total_engagement,
                days: days.len(),
                average_reach_per_day: rounded_mean(accounts_engaged, days.len(), "weekly reach")?,
                average_engagement_per_day: rounded_mean(total_engagement, days.len(), "weekly engagement")?,
                efficiency: round_to(
                    ratio(total_engagement as f64, accounts_engaged as f64, "weekly efficiency")?,
                    2,
                ),
            })
        })
        .collect()
}

/// Fixed new/returning split; there is no audience series to derive it from.
pub fn audience_overlap() -> Vec<AudienceSlice> {
    vec![
        AudienceSlice {
            name: "New Accounts".to_string(),
            value: 65,
        },
        AudienceSlice {
            name: "Returning Accounts".to_string(),
            value: 35,
        },
    ]
}

pub fn reach_by_type(dataset: &Dataset) -> MetricsResult<Vec<ContentTypeReach>> {
    group_by_content_type(dataset.recent_posts())
        .into_iter()
        .map(|(content_type, posts)| {
            let reach = sum_by(&posts, |p| (p.interactions() as f64 * REACH_MULTIPLIER).floor() as i64);
            let engagement = sum_by(&posts, |p| p.interactions());
            Ok(ContentTypeReach {
                content_type,
                name: content_type.label().to_string(),
                average_reach: rounded_mean(reach, posts.len(), "reach per post")?,
                average_engagement: rounded_mean(engagement, posts.len(), "engagement per post")?,
                efficiency: round_to(percent(engagement as f64, reach as f64, "content reach efficiency")?, 1),
            })
        })
        .collect()
}

pub fn build(dataset: &Dataset) -> MetricsResult<ReachSummary> {
    let history = dataset.engagement_history();
    let current = dataset.current_metrics();
    let total_accounts_engaged = sum_by(history, |d| d.accounts_engaged);
    let average_daily_reach = rounded_mean(total_accounts_engaged, history.len(), "daily reach")?;

    Ok(ReachSummary {
        snapshot_accounts_engaged: current.accounts_engaged,
        total_accounts_engaged,
        average_daily_reach,
        max_daily_reach: max_by(history, |d| d.accounts_engaged, "daily reach")?,
        reach_rate_average: round_to(
            percent(average_daily_reach as f64, current.followers as f64, "reach rate")?,
            1,
        ),
        reach_rate: reach_rate(dataset)?,
        reach_efficiency: reach_efficiency(dataset)?,
        weekly_comparison: weekly_comparison(dataset)?,
        audience_overlap: audience_overlap(),
        reach_by_type: reach_by_type(dataset)?,
    })
}
