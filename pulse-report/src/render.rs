use std::fmt::Write;

use pulse_server::format::{format_change, format_thousands};
use pulse_server::pages::PageSummary;
use pulse_types::{
    CommentsSummary, DailyRate, EngagementSummary, FollowersSummary, OverviewSummary, PostRecord,
    ReachSummary,
};

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a page summary as a plain-text report
pub fn render_text(title: &str, summary: &PageSummary) -> String {
    let mut out = String::new();
    let heading = format!("{} report", title);
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", "=".repeat(heading.len()));
    let _ = writeln!(out);

    match summary {
        PageSummary::Overview(s) => render_overview(&mut out, s),
        PageSummary::Followers(s) => render_followers(&mut out, s),
        PageSummary::Engagement(s) => render_engagement(&mut out, s),
        PageSummary::Comments(s) => render_comments(&mut out, s),
        PageSummary::Reach(s) => render_reach(&mut out, s),
    }
    out
}

fn render_overview(out: &mut String, s: &OverviewSummary) {
    for kpi in &s.kpis {
        let _ = writeln!(
            out,
            "{:<18} {:>8}  {} {}",
            kpi.title,
            kpi.display,
            format_change(kpi.change),
            kpi.change_label
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Engagement by content type:");
    for group in &s.engagement_by_type {
        let _ = writeln!(
            out,
            "  {:<6} {:>2} posts  {:.2}% avg  {} likes  {} comments",
            group.name,
            group.count,
            group.average_engagement_rate,
            format_thousands(group.total_likes),
            format_thousands(group.total_comments)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Estimated engaged accounts: {}", format_thousands(s.estimated_engaged_accounts));
    let _ = writeln!(out, "Average post engagement rate: {:.2}%", s.average_post_engagement_rate);
}

fn render_followers(out: &mut String, s: &FollowersSummary) {
    let _ = writeln!(out, "Current followers: {}", format_thousands(s.current_followers as i64));
    let _ = writeln!(out, "Following: {}", s.following);
    let _ = writeln!(
        out,
        "Weekly growth: {:+} ({})",
        s.growth.weekly_growth.followers,
        format_change(s.growth.weekly_growth.percentage)
    );
    let _ = writeln!(
        out,
        "Monthly growth: {:+} ({})",
        s.growth.monthly_growth.followers,
        format_change(s.growth.monthly_growth.percentage)
    );
    let _ = writeln!(out);
    for day in &s.daily_growth {
        let _ = writeln!(out, "  {}  {:>7}  {:+}", day.date, format_thousands(day.follower_count), day.growth);
    }
}

fn render_engagement(out: &mut String, s: &EngagementSummary) {
    let _ = writeln!(out, "Total likes: {}", format_thousands(s.total_likes));
    let _ = writeln!(out, "Total comments: {}", format_thousands(s.total_comments));
    let _ = writeln!(out, "Avg daily likes: {}", s.average_daily_likes);
    let _ = writeln!(out, "Avg daily comments: {}", s.average_daily_comments);
    let _ = writeln!(out, "Engagement rate: {}%", s.engagement_rate);
    render_rates(out, "Daily engagement rate", &s.engagement_trend, "%");
    render_posts(out, "Top performing posts", &s.top_posts);
}

fn render_comments(out: &mut String, s: &CommentsSummary) {
    let _ = writeln!(out, "Lifetime comments: {}", format_thousands(s.snapshot_total_comments as i64));
    let _ = writeln!(out, "Comments this period: {}", format_thousands(s.total_comments));
    let _ = writeln!(out, "Avg daily comments: {}", s.average_daily_comments);
    let _ = writeln!(out, "Peak daily comments: {}", s.max_daily_comments);
    let _ = writeln!(out, "Comment rate: {:.2}%", s.comment_rate);
    let _ = writeln!(out);
    let _ = writeln!(out, "Comments by content type:");
    for group in &s.comments_by_type {
        let _ = writeln!(
            out,
            "  {:<6} {:>4} comments over {} posts ({} avg)",
            group.name, group.comments, group.posts, group.average_per_post
        );
    }
    let _ = writeln!(out);
    for week in &s.weekly_comparison {
        let _ = writeln!(
            out,
            "{}: {} comments in {} days ({} / day)",
            week.week.as_str(),
            week.comments,
            week.days,
            week.average_per_day
        );
    }
    render_rates(out, "Comment to like ratio", &s.comment_to_like_ratio, "%");
    render_posts(out, "Most commented posts", &s.top_commented_posts);
}

fn render_reach(out: &mut String, s: &ReachSummary) {
    let _ = writeln!(out, "Accounts engaged: {}", format_thousands(s.snapshot_accounts_engaged as i64));
    let _ = writeln!(out, "Engaged this period: {}", format_thousands(s.total_accounts_engaged));
    let _ = writeln!(out, "Avg daily reach: {}", s.average_daily_reach);
    let _ = writeln!(out, "Peak daily reach: {}", s.max_daily_reach);
    let _ = writeln!(out, "Reach rate: {:.1}%", s.reach_rate_average);
    let _ = writeln!(out);
    for week in &s.weekly_comparison {
        let _ = writeln!(
            out,
            "{}: {} reach / day, {} engagement / day, efficiency {:.2}",
            week.week.as_str(),
            week.average_reach_per_day,
            week.average_engagement_per_day,
            week.efficiency
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Audience:");
    for slice in &s.audience_overlap {
        let _ = writeln!(out, "  {}: {}%", slice.name, slice.value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Reach by content type:");
    for group in &s.reach_by_type {
        let _ = writeln!(
            out,
            "  {:<6} {} avg reach  {} avg engagement  {:.1}% efficiency",
            group.name, group.average_reach, group.average_engagement, group.efficiency
        );
    }
    render_rates(out, "Daily reach rate", &s.reach_rate, "%");
}

fn render_rates(out: &mut String, title: &str, rates: &[DailyRate], unit: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    for rate in rates {
        let _ = writeln!(out, "  {}  {}{}", rate.date, rate.value, unit);
    }
}

fn render_posts(out: &mut String, title: &str, posts: &[PostRecord]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    for (rank, post) in posts.iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{} {} {} post  {} likes  {} comments  {:.2}%",
            rank + 1,
            post.date,
            post.content_type.label(),
            post.likes,
            post.comments,
            post.engagement_rate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_server::pages::{build_page, Page};
    use pulse_server::Dataset;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("reach"), "Reach");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_overview_text_lists_kpis() {
        let dataset = Dataset::standard().unwrap();
        let summary = build_page(Page::Overview, &dataset).unwrap();
        let text = render_text("Overview", &summary);

        assert!(text.starts_with("Overview report\n==============="));
        assert!(text.contains("Followers"));
        assert!(text.contains("13.0K"));
        assert!(text.contains("-0.2% from last week"));
    }

    #[test]
    fn test_followers_text_shows_growth() {
        let dataset = Dataset::standard().unwrap();
        let summary = build_page(Page::Followers, &dataset).unwrap();
        let text = render_text("Followers", &summary);

        assert!(text.contains("Current followers: 13,045"));
        assert!(text.contains("Following: 842"));
        assert!(text.contains("Weekly growth: +108"));
        assert!(text.contains("Monthly growth: +464"));
        assert!(text.contains("2024-01-30"));
    }

    #[test]
    fn test_comments_text_has_weeks() {
        let dataset = Dataset::standard().unwrap();
        let summary = build_page(Page::Comments, &dataset).unwrap();
        let text = render_text("Comments", &summary);

        assert!(text.contains("Previous Week:"));
        assert!(text.contains("This Week:"));
        assert!(text.contains("Lifetime comments: 8,945"));
        assert!(text.contains("Comment rate: 0.19%"));
    }

    #[test]
    fn test_reach_text_shows_snapshot_and_rate() {
        let dataset = Dataset::standard().unwrap();
        let summary = build_page(Page::Reach, &dataset).unwrap();
        let text = render_text("Reach", &summary);

        assert!(text.contains("Accounts engaged: 2,340"));
        assert!(text.contains("Reach rate: 1.7%"));
    }
}
