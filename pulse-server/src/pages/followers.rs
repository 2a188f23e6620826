use pulse_types::{DailyGrowth, FollowerSample, FollowersSummary};

use crate::error::MetricsResult;
use crate::generator::Dataset;

/// Day-over-day follower change; the first day has nothing to compare to.
pub fn daily_growth(history: &[FollowerSample]) -> Vec<DailyGrowth> {
    history
        .iter()
        .enumerate()
        .map(|(index, sample)| DailyGrowth {
            date: sample.date,
            follower_count: sample.follower_count,
            growth: match index {
                0 => 0,
                _ => sample.follower_count - history[index - 1].follower_count,
            },
        })
        .collect()
}

pub fn build(dataset: &Dataset) -> MetricsResult<FollowersSummary> {
    let history = dataset.follower_history();
    let current = dataset.current_metrics();

    Ok(FollowersSummary {
        current_followers: current.followers,
        following: current.following,
        growth: dataset.growth_metrics()?,
        daily_growth: daily_growth(history),
    })
}
