use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ContentType;

// Custom serde module for NaiveDate to pin the ISO day format
pub(crate) mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Current account snapshot shown on the KPI cards.
///
/// These are fixed literals and are not derived from the history series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetrics {
    pub followers: u64,
    pub following: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub accounts_engaged: u64,
    pub engagement_rate: f64,
}

impl Default for AccountMetrics {
    fn default() -> Self {
        Self {
            followers: 13045,
            following: 842,
            total_likes: 156780,
            total_comments: 8945,
            accounts_engaged: 2340,
            engagement_rate: 3.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerSample {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub follower_count: i64,
    pub following_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSample {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub likes: i64,
    pub comments: i64,
    pub accounts_engaged: i64,
}

impl EngagementSample {
    /// Likes plus comments for the day
    pub fn interactions(&self) -> i64 {
        self.likes + self.comments
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub likes: i64,
    pub comments: i64,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    /// Percentage of the assumed audience, rounded to 2 decimals
    pub engagement_rate: f64,
}

impl PostRecord {
    pub fn interactions(&self) -> i64 {
        self.likes + self.comments
    }
}

/// Follower delta against an earlier sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Growth {
    pub followers: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMetrics {
    pub weekly_growth: Growth,
    pub monthly_growth: Growth,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
