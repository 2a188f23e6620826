use pulse_types::{FollowerSample, Growth, GrowthMetrics};

use crate::error::{MetricsError, MetricsResult};

/// Samples needed to look one week back from the newest entry.
pub const MIN_GROWTH_HISTORY: usize = 8;

/// Weekly and monthly follower growth for an oldest-first history.
///
/// Weekly compares the newest sample with the one seven days earlier,
/// monthly compares it with the oldest sample.
pub fn growth_metrics(history: &[FollowerSample]) -> MetricsResult<GrowthMetrics> {
    if history.len() < MIN_GROWTH_HISTORY {
        return Err(MetricsError::InsufficientHistory {
            required: MIN_GROWTH_HISTORY,
            actual: history.len(),
        });
    }

    let today = &history[history.len() - 1];
    let last_week = &history[history.len() - MIN_GROWTH_HISTORY];
    let last_month = &history[0];

    Ok(GrowthMetrics {
        weekly_growth: growth_between(today, last_week, "weekly")?,
        monthly_growth: growth_between(today, last_month, "monthly")?,
    })
}

fn growth_between(
    current: &FollowerSample,
    baseline: &FollowerSample,
    window: &'static str,
) -> MetricsResult<Growth> {
    if baseline.follower_count == 0 {
        tracing::warn!(window, date = %baseline.date, "Zero follower baseline");
        return Err(MetricsError::ZeroBaseline { window });
    }

    let delta = current.follower_count - baseline.follower_count;
    Ok(Growth {
        followers: delta,
        percentage: delta as f64 / baseline.follower_count as f64 * 100.0,
    })
}
