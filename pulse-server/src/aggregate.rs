//! Single-pass reductions shared by every page summary.

use std::cmp::Ordering;

use pulse_types::{ContentType, PostRecord, WeekLabel};

use crate::error::{MetricsError, MetricsResult};

/// Trailing window used for week-over-week comparisons
pub const COMPARISON_WINDOW: usize = 14;
const WEEK: usize = 7;

pub fn sum_by<T>(items: &[T], field: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(field).sum()
}

pub fn mean_by<T>(items: &[T], field: impl Fn(&T) -> f64, what: &'static str) -> MetricsResult<f64> {
    if items.is_empty() {
        return Err(MetricsError::EmptySeries { what });
    }
    Ok(items.iter().map(field).sum::<f64>() / items.len() as f64)
}

pub fn max_by<T>(items: &[T], field: impl Fn(&T) -> i64, what: &'static str) -> MetricsResult<i64> {
    items
        .iter()
        .map(field)
        .max()
        .ok_or(MetricsError::EmptySeries { what })
}

pub fn ratio(numerator: f64, denominator: f64, what: &'static str) -> MetricsResult<f64> {
    if denominator == 0.0 {
        return Err(MetricsError::ZeroDenominator { what });
    }
    Ok(numerator / denominator)
}

pub fn percent(numerator: f64, denominator: f64, what: &'static str) -> MetricsResult<f64> {
    Ok(ratio(numerator, denominator, what)? * 100.0)
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Nearest integer with halves rounded toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Integer mean rounded half up, as shown on KPI cards.
pub fn rounded_mean(total: i64, count: usize, what: &'static str) -> MetricsResult<i64> {
    Ok(round_half_up(ratio(total as f64, count as f64, what)?))
}

/// Group posts by content type, keeping first-appearance order.
pub fn group_by_content_type(posts: &[PostRecord]) -> Vec<(ContentType, Vec<&PostRecord>)> {
    let mut groups: Vec<(ContentType, Vec<&PostRecord>)> = Vec::new();
    for post in posts {
        match groups.iter_mut().find(|(kind, _)| *kind == post.content_type) {
            Some((_, members)) => members.push(post),
            None => groups.push((post.content_type, vec![post])),
        }
    }
    groups
}

/// Split the trailing fourteen entries into previous and current week.
///
/// Empty weeks are omitted, so a short series may yield one group or none.
pub fn split_trailing_weeks<T>(series: &[T]) -> Vec<(WeekLabel, &[T])> {
    let tail = &series[series.len().saturating_sub(COMPARISON_WINDOW)..];
    let split = tail.len().min(WEEK);
    let (previous, current) = tail.split_at(split);

    [(WeekLabel::PreviousWeek, previous), (WeekLabel::ThisWeek, current)]
        .into_iter()
        .filter(|(_, days)| !days.is_empty())
        .collect()
}

/// Highest `n` items by `key`, ties keep their original order.
pub fn top_n_by<T: Clone, K: PartialOrd>(items: &[T], n: usize, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted.into_iter().take(n).cloned().collect()
}

/// Last `n` entries of a series, or all of it when shorter.
pub fn trailing<T>(series: &[T], n: usize) -> &[T] {
    &series[series.len().saturating_sub(n)..]
}
