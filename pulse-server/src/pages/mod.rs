pub mod comments;
pub mod engagement;
pub mod followers;
pub mod overview;
pub mod reach;

use pulse_types::{CommentsSummary, EngagementSummary, FollowersSummary, OverviewSummary, ReachSummary};
use serde::Serialize;

use crate::error::MetricsResult;
use crate::generator::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Followers,
    Engagement,
    Comments,
    Reach,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::Followers,
        Page::Engagement,
        Page::Comments,
        Page::Reach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Followers => "followers",
            Page::Engagement => "engagement",
            Page::Comments => "comments",
            Page::Reach => "reach",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == s.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageSummary {
    Overview(OverviewSummary),
    Followers(FollowersSummary),
    Engagement(EngagementSummary),
    Comments(CommentsSummary),
    Reach(ReachSummary),
}

pub fn build_page(page: Page, dataset: &Dataset) -> MetricsResult<PageSummary> {
    tracing::debug!(page = page.as_str(), "Building page summary");
    Ok(match page {
        Page::Overview => PageSummary::Overview(overview::build(dataset)?),
        Page::Followers => PageSummary::Followers(followers::build(dataset)?),
        Page::Engagement => PageSummary::Engagement(engagement::build(dataset)?),
        Page::Comments => PageSummary::Comments(comments::build(dataset)?),
        Page::Reach => PageSummary::Reach(reach::build(dataset)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorOptions;
    use crate::noise::SineNoise;
    use crate::error::MetricsError;

    #[test]
    fn test_page_parse() {
        assert_eq!(Page::parse("Reach"), Some(Page::Reach));
        assert_eq!(Page::parse("home"), None);
    }

    #[test]
    fn test_every_page_builds() {
        let dataset = Dataset::standard().unwrap();
        for page in Page::ALL {
            assert!(build_page(page, &dataset).is_ok(), "{} failed", page.as_str());
        }
    }

    #[test]
    fn test_short_history_surfaces_error() {
        let options = GeneratorOptions {
            history_days: 5,
            ..Default::default()
        };
        let dataset = Dataset::generate(&options, &SineNoise).unwrap();
        assert_eq!(
            build_page(Page::Followers, &dataset),
            Err(MetricsError::InsufficientHistory { required: 8, actual: 5 })
        );
        // pages without growth still build
        assert!(build_page(Page::Comments, &dataset).is_ok());
    }

    #[test]
    fn test_no_posts_surfaces_error() {
        let options = GeneratorOptions {
            post_count: 0,
            ..Default::default()
        };
        let dataset = Dataset::generate(&options, &SineNoise).unwrap();
        assert!(matches!(
            build_page(Page::Overview, &dataset),
            Err(MetricsError::EmptySeries { .. })
        ));
    }
}
