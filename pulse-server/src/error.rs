use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Insufficient history: need at least {required} samples, have {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    #[error("Zero baseline for {window} growth")]
    ZeroBaseline { window: &'static str },

    #[error("Zero denominator while computing {what}")]
    ZeroDenominator { what: &'static str },

    #[error("Empty series while computing {what}")]
    EmptySeries { what: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type MetricsResult<T> = Result<T, MetricsError>;
