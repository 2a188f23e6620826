mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use pulse_server::config::{DatasetSettings, NoiseKind};
use pulse_server::pages::{build_page, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Pulse Metrics Report
///
/// Generates the deterministic engagement dataset and prints one
/// dashboard page summary.
#[derive(Parser, Debug)]
#[command(name = "pulse-report")]
#[command(about = "Print a dashboard page summary from generated metrics", long_about = None)]
struct Args {
    /// Page to report: overview, followers, engagement, comments, reach
    #[arg(short, long, default_value = "overview")]
    page: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Noise source: sine or splitmix
    #[arg(long, env = "PULSE_NOISE", default_value = "sine")]
    noise: String,

    /// Salt for splitmix noise
    #[arg(long, env = "PULSE_SEED", default_value_t = 0)]
    seed: u64,

    /// Days of history to generate
    #[arg(long, default_value_t = 30)]
    days: usize,

    /// Number of recent posts to generate
    #[arg(long, default_value_t = 10)]
    posts: usize,
}

impl Args {
    fn dataset_settings(&self) -> Result<DatasetSettings> {
        let noise = NoiseKind::parse(&self.noise)
            .ok_or_else(|| anyhow!("Unknown noise source '{}'. Use sine or splitmix", self.noise))?;

        Ok(DatasetSettings {
            history_days: self.days,
            post_count: self.posts,
            noise,
            seed: self.seed,
            ..Default::default()
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let page = Page::parse(&args.page).ok_or_else(|| {
        anyhow!(
            "Unknown page '{}'. Valid pages: overview, followers, engagement, comments, reach",
            args.page
        )
    })?;

    let settings = args.dataset_settings()?;
    let dataset = settings
        .build_dataset()
        .context("Failed to generate metrics dataset")?;
    tracing::debug!(days = args.days, posts = args.posts, "Dataset ready");

    let summary = build_page(page, &dataset)
        .with_context(|| format!("Failed to build {} page", page.as_str()))?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let title = render::capitalize(page.as_str());
            print!("{}", render::render_text(&title, &summary));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["pulse-report"]);
        assert_eq!(args.page, "overview");
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.days, 30);
        assert_eq!(args.posts, 10);
    }

    #[test]
    fn test_dataset_settings_from_args() {
        let args = Args::parse_from([
            "pulse-report",
            "--page",
            "reach",
            "--format",
            "json",
            "--noise",
            "splitmix",
            "--seed",
            "9",
            "--days",
            "14",
        ]);
        let settings = args.dataset_settings().unwrap();
        assert_eq!(settings.noise, NoiseKind::SplitMix);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.history_days, 14);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_noise_is_rejected() {
        let args = Args::parse_from(["pulse-report", "--noise", "lcg"]);
        assert!(args.dataset_settings().is_err());
    }

    #[test]
    fn test_huge_post_count_fails_cleanly() {
        let args = Args::parse_from(["pulse-report", "--posts", "100000000000000000"]);
        let settings = args.dataset_settings().unwrap();
        assert!(matches!(
            settings.build_dataset(),
            Err(pulse_server::MetricsError::InvalidConfig(_))
        ));
    }
}
