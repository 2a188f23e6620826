use chrono::{Days, NaiveDate};
use pulse_types::{AccountMetrics, ContentType, EngagementSample, FollowerSample, GrowthMetrics, PostRecord};

use crate::aggregate::round_to;
use crate::error::{MetricsError, MetricsResult};
use crate::growth::growth_metrics;
use crate::noise::{NoiseSource, SineNoise};

// Seed multipliers, one per generated field
const FOLLOWER_SEED: i64 = 123;
const FOLLOWING_SEED: i64 = 456;
const LIKES_SEED: i64 = 789;
const COMMENTS_SEED: i64 = 101_112;
const ENGAGED_SEED: i64 = 131_415;
const POST_LIKES_SEED: i64 = 161_718;
const POST_COMMENTS_SEED: i64 = 192_021;
const POST_TYPE_SEED: i64 = 222_324;

const BASE_FOLLOWERS: f64 = 12500.0;
const FOLLOWER_RAMP: f64 = 500.0;
const FOLLOWER_SPREAD: f64 = 100.0;
const BASE_FOLLOWING: f64 = 847.0;
const FOLLOWING_SPREAD: f64 = 20.0;

/// Days between consecutive generated posts
const POST_SPACING_DAYS: u64 = 2;

/// Ten years of daily samples
pub const MAX_HISTORY_DAYS: usize = 3650;
pub const MAX_POST_COUNT: usize = 1000;

/// Parameters for a generated dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// First (oldest) day of both history series
    pub follower_anchor: NaiveDate,
    /// Date of the newest post
    pub post_anchor: NaiveDate,
    pub history_days: usize,
    pub post_count: usize,
    /// Audience size used for per-post engagement rate
    pub audience_size: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            follower_anchor: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid anchor date"),
            post_anchor: NaiveDate::from_ymd_opt(2024, 1, 30).expect("valid anchor date"),
            history_days: 30,
            post_count: 10,
            audience_size: 13000,
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> MetricsResult<()> {
        if self.history_days == 0 {
            return Err(MetricsError::InvalidConfig(
                "history_days must be at least 1".to_string(),
            ));
        }
        if self.history_days > MAX_HISTORY_DAYS {
            return Err(MetricsError::InvalidConfig(format!(
                "history_days must be at most {}, got {}",
                MAX_HISTORY_DAYS, self.history_days
            )));
        }
        if self.post_count > MAX_POST_COUNT {
            return Err(MetricsError::InvalidConfig(format!(
                "post_count must be at most {}, got {}",
                MAX_POST_COUNT, self.post_count
            )));
        }
        if self.audience_size == 0 {
            return Err(MetricsError::InvalidConfig(
                "audience_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Immutable snapshot of every generated series.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    current_metrics: AccountMetrics,
    follower_history: Vec<FollowerSample>,
    engagement_history: Vec<EngagementSample>,
    recent_posts: Vec<PostRecord>,
}

impl Dataset {
    pub fn generate(options: &GeneratorOptions, noise: &dyn NoiseSource) -> MetricsResult<Self> {
        options.validate()?;

        let follower_history = generate_follower_history(options, noise)?;
        let engagement_history = generate_engagement_history(options, noise)?;
        let recent_posts = generate_recent_posts(options, noise)?;

        tracing::debug!(
            history_days = options.history_days,
            posts = recent_posts.len(),
            "Generated metrics dataset"
        );

        Ok(Self {
            current_metrics: AccountMetrics::default(),
            follower_history,
            engagement_history,
            recent_posts,
        })
    }

    /// Default options with sine-hash noise
    pub fn standard() -> MetricsResult<Self> {
        Self::generate(&GeneratorOptions::default(), &SineNoise)
    }

    pub fn current_metrics(&self) -> &AccountMetrics {
        &self.current_metrics
    }

    pub fn follower_history(&self) -> &[FollowerSample] {
        &self.follower_history
    }

    pub fn engagement_history(&self) -> &[EngagementSample] {
        &self.engagement_history
    }

    pub fn recent_posts(&self) -> &[PostRecord] {
        &self.recent_posts
    }

    pub fn growth_metrics(&self) -> MetricsResult<GrowthMetrics> {
        growth_metrics(&self.follower_history)
    }
}

fn add_days(anchor: NaiveDate, days: u64) -> MetricsResult<NaiveDate> {
    anchor
        .checked_add_days(Days::new(days))
        .ok_or_else(|| MetricsError::InvalidConfig(format!("{} + {} days is out of range", anchor, days)))
}

fn sub_days(anchor: NaiveDate, days: u64) -> MetricsResult<NaiveDate> {
    anchor
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| MetricsError::InvalidConfig(format!("{} - {} days is out of range", anchor, days)))
}

/// `i` counts days back from the newest sample; output runs oldest to newest.
pub fn generate_follower_history(
    options: &GeneratorOptions,
    noise: &dyn NoiseSource,
) -> MetricsResult<Vec<FollowerSample>> {
    let days = options.history_days;
    let mut data = Vec::with_capacity(days);

    for i in (0..days).rev() {
        let date = add_days(options.follower_anchor, (days - 1 - i) as u64)?;
        let seed = i as i64;

        let growth_factor = (days - i) as f64 / days as f64;
        let variance = (noise.sample(seed * FOLLOWER_SEED) - 0.5) * FOLLOWER_SPREAD;
        let following_variance = (noise.sample(seed * FOLLOWING_SEED) - 0.5) * FOLLOWING_SPREAD;

        data.push(FollowerSample {
            date,
            follower_count: (BASE_FOLLOWERS + growth_factor * FOLLOWER_RAMP + variance).floor() as i64,
            following_count: (BASE_FOLLOWING + following_variance).floor() as i64,
        });
    }

    Ok(data)
}

pub fn generate_engagement_history(
    options: &GeneratorOptions,
    noise: &dyn NoiseSource,
) -> MetricsResult<Vec<EngagementSample>> {
    let days = options.history_days;
    let mut data = Vec::with_capacity(days);

    for i in (0..days).rev() {
        let date = add_days(options.follower_anchor, (days - 1 - i) as u64)?;
        let seed = i as i64;

        data.push(EngagementSample {
            date,
            likes: (250.0 + noise.sample(seed * LIKES_SEED) * 200.0).floor() as i64,
            comments: (15.0 + noise.sample(seed * COMMENTS_SEED) * 25.0).floor() as i64,
            accounts_engaged: (180.0 + noise.sample(seed * ENGAGED_SEED) * 100.0).floor() as i64,
        });
    }

    Ok(data)
}

pub fn generate_recent_posts(
    options: &GeneratorOptions,
    noise: &dyn NoiseSource,
) -> MetricsResult<Vec<PostRecord>> {
    let mut posts = Vec::with_capacity(options.post_count);
    let audience = options.audience_size as f64;

    for i in 0..options.post_count {
        let date = sub_days(options.post_anchor, i as u64 * POST_SPACING_DAYS)?;
        let seed = i as i64;

        let likes = (180.0 + noise.sample(seed * POST_LIKES_SEED) * 300.0).floor() as i64;
        let comments = (8.0 + noise.sample(seed * POST_COMMENTS_SEED) * 20.0).floor() as i64;
        let engagement_rate = round_to((likes + comments) as f64 / audience * 100.0, 2);

        posts.push(PostRecord {
            id: format!("post_{}", i + 1),
            content_type: ContentType::from_unit(noise.sample(seed * POST_TYPE_SEED)),
            likes,
            comments,
            date,
            engagement_rate,
        });
    }

    Ok(posts)
}
