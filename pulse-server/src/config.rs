use chrono::NaiveDate;
use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{MetricsError, MetricsResult};
use crate::generator::{Dataset, GeneratorOptions};
use crate::noise::{NoiseSource, SineNoise, SplitMixNoise};

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    Sine,
    SplitMix,
}

impl NoiseKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sine" => Some(NoiseKind::Sine),
            "splitmix" => Some(NoiseKind::SplitMix),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    pub follower_anchor: NaiveDate,
    pub post_anchor: NaiveDate,
    pub history_days: usize,
    pub post_count: usize,
    pub audience_size: u64,
    pub noise: NoiseKind,
    /// Salt for splitmix noise, ignored by sine noise
    pub seed: u64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            follower_anchor: options.follower_anchor,
            post_anchor: options.post_anchor,
            history_days: options.history_days,
            post_count: options.post_count,
            audience_size: options.audience_size,
            noise: NoiseKind::Sine,
            seed: 0,
        }
    }
}

impl DatasetSettings {
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            follower_anchor: self.follower_anchor,
            post_anchor: self.post_anchor,
            history_days: self.history_days,
            post_count: self.post_count,
            audience_size: self.audience_size,
        }
    }

    pub fn noise_source(&self) -> Box<dyn NoiseSource> {
        match self.noise {
            NoiseKind::Sine => Box::new(SineNoise),
            NoiseKind::SplitMix => Box::new(SplitMixNoise::new(self.seed)),
        }
    }

    /// Generate the dataset these settings describe.
    pub fn build_dataset(&self) -> MetricsResult<Dataset> {
        let noise = self.noise_source();
        Dataset::generate(&self.generator_options(), noise.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub dataset: DatasetSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Optional settings.toml
        let config_file_name = "settings.toml";

        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Check in pulse-server directory (for development)
        let dev_path = PathBuf::from("pulse-server").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Defaults, then environment variables (highest priority)
        let defaults = DatasetSettings::default();
        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("dataset.follower_anchor", defaults.follower_anchor.to_string())?
            .set_default("dataset.post_anchor", defaults.post_anchor.to_string())?
            .set_default("dataset.history_days", defaults.history_days as u64)?
            .set_default("dataset.post_count", defaults.post_count as u64)?
            .set_default("dataset.audience_size", defaults.audience_size)?
            .set_default("dataset.noise", "sine")?
            .set_default("dataset.seed", defaults.seed)?;

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(noise) = std::env::var("PULSE_NOISE") {
            builder = builder.set_override("dataset.noise", noise.to_lowercase())?;
        }
        if let Ok(seed) = std::env::var("PULSE_SEED") {
            builder = builder.set_override("dataset.seed", seed)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }

    pub fn validate(&self) -> MetricsResult<()> {
        self.dataset.generator_options().validate()?;
        if self.server.host.is_empty() {
            return Err(MetricsError::InvalidConfig("server.host is empty".to_string()));
        }
        Ok(())
    }
}
