// Library exports for pulse-server
// The report tool and integration tests build on these modules

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod growth;
pub mod noise;
pub mod pages;
pub mod state;

pub use error::{MetricsError, MetricsResult};
pub use generator::{Dataset, GeneratorOptions};
pub use growth::growth_metrics;
pub use noise::{pseudo_random, NoiseSource, SineNoise, SplitMixNoise};
