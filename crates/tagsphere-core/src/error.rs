//! Error types for configuration and data loading.

use thiserror::Error;

/// Rejected sphere configuration or configuration override.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("focal length {focal_length} must exceed the largest reachable depth {max_depth}")]
    FocalLengthTooSmall { focal_length: f32, max_depth: f32 },
    #[error("{name} bounds are inverted: min {min} > max {max}")]
    InvertedBounds { name: &'static str, min: f32, max: f32 },
    #[error("damping must lie in (0, 1], got {0}")]
    DampingOutOfRange(f32),
    #[error("max speed must be positive, got {0}")]
    NonPositiveMaxSpeed(f32),
    #[error("auto-rotation speed {value} lies outside [{min}, {max}]")]
    AutoSpeedOutOfRange { value: f32, min: f32, max: f32 },
    #[error("unknown palette `{0}`")]
    UnknownPalette(String),
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// Failure to turn a fetched payload into label items.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed label data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("label data must be a JSON array")]
    NotAnArray,
}
