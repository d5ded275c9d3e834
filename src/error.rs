use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Precondition violations detected when a simulation is initialized.
///
/// The step itself never fails; everything that could produce a degenerate
/// boundary or body is rejected up front.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Polygon boundaries need at least three sides.
    #[error("polygon needs at least 3 sides, got {0}")]
    TooFewSides(u32),

    /// Star boundaries need at least two points.
    #[error("star needs at least 2 points, got {0}")]
    TooFewPoints(u32),

    /// Vertex or point count above `consts::MAX_VERTICES`.
    #[error("vertex count {count} exceeds the maximum of {max}")]
    TooManyVertices { count: u32, max: u32 },

    /// Ball radius must be finite and positive.
    #[error("ball size must be finite and > 0, got {0}")]
    InvalidBallSize(f32),

    /// A physics coefficient is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// Configuration JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}
