//! Derived views consumed by the dashboard pages.
//!
//! Every struct here is computed from a generated dataset and never fed back
//! into it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ContentType, WeekLabel};
use crate::models::{date_format, EngagementSample, GrowthMetrics, PostRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: String,
    pub value: f64,
    /// Pre-formatted value, e.g. `13.0K` or `3.2%`
    pub display: String,
    pub change: f64,
    pub change_label: String,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeEngagement {
    pub content_type: ContentType,
    pub name: String,
    pub count: usize,
    /// Mean post engagement rate, 2 decimals
    pub average_engagement_rate: f64,
    pub total_likes: i64,
    pub total_comments: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub kpis: Vec<KpiCard>,
    pub engagement_by_type: Vec<ContentTypeEngagement>,
    pub estimated_engaged_accounts: i64,
    pub average_post_engagement_rate: f64,
    pub recent_engagement: Vec<EngagementSample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGrowth {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub follower_count: i64,
    pub growth: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowersSummary {
    /// Snapshot values, not the last history sample
    pub current_followers: u64,
    pub following: u64,
    pub growth: GrowthMetrics,
    pub daily_growth: Vec<DailyGrowth>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRate {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    pub total_likes: i64,
    pub total_comments: i64,
    pub average_daily_likes: i64,
    pub average_daily_comments: i64,
    pub engagement_rate: f64,
    /// Daily (likes + comments) / followers, percent with 2 decimals
    pub engagement_trend: Vec<DailyRate>,
    pub top_posts: Vec<PostRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeComments {
    pub content_type: ContentType,
    pub name: String,
    pub comments: i64,
    pub posts: usize,
    pub average_per_post: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComments {
    pub week: WeekLabel,
    pub comments: i64,
    pub days: usize,
    pub average_per_day: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsSummary {
    /// Lifetime total from the account snapshot
    pub snapshot_total_comments: u64,
    pub total_comments: i64,
    pub average_daily_comments: i64,
    pub max_daily_comments: i64,
    /// Average daily comments / followers, percent with 2 decimals
    pub comment_rate: f64,
    /// Daily comments / likes, percent with 1 decimal
    pub comment_to_like_ratio: Vec<DailyRate>,
    pub comments_by_type: Vec<ContentTypeComments>,
    pub top_commented_posts: Vec<PostRecord>,
    pub weekly_comparison: Vec<WeeklyComments>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReach {
    pub week: WeekLabel,
    pub accounts_engaged: i64,
    pub total_engagement: i64,
    pub days: usize,
    pub average_reach_per_day: i64,
    pub average_engagement_per_day: i64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSlice {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeReach {
    pub content_type: ContentType,
    pub name: String,
    pub average_reach: i64,
    pub average_engagement: i64,
    /// Engagement over estimated reach, percent with 1 decimal
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachSummary {
    /// Accounts engaged from the account snapshot
    pub snapshot_accounts_engaged: u64,
    pub total_accounts_engaged: i64,
    pub average_daily_reach: i64,
    pub max_daily_reach: i64,
    /// Average daily reach / followers, percent with 1 decimal
    pub reach_rate_average: f64,
    pub reach_rate: Vec<DailyRate>,
    pub reach_efficiency: Vec<DailyRate>,
    pub weekly_comparison: Vec<WeeklyReach>,
    pub audience_overlap: Vec<AudienceSlice>,
    pub reach_by_type: Vec<ContentTypeReach>,
}
