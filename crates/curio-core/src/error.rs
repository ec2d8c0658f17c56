//! Error types and exit codes for curio
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid budget or weights)
//! - 3: Data error (ranking failure, malformed vectors)

use thiserror::Error;

/// Exit codes for the curio CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad input batch, ranking failure (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during curio operations
#[derive(Error, Debug)]
pub enum CurioError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("total budget must be positive, got {0}")]
    InvalidBudget(i64),

    #[error("seed {seed_id} has negative importance {importance}")]
    NegativeImportance { seed_id: String, importance: f64 },

    #[error("invalid blend weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("duplicate seed id: {0}")]
    DuplicateSeed(String),

    // Data errors (exit code 3)
    #[error("ranking failed for seed {seed_id} against candidate {candidate_id}: {reason}")]
    RankingFailure {
        seed_id: String,
        candidate_id: String,
        reason: String,
    },

    #[error("feature vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("malformed feature vector: {reason}")]
    MalformedVector { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl CurioError {
    /// Create an error for an oracle failure on a specific (seed, candidate) pair
    pub fn ranking_failure(
        seed_id: &str,
        candidate_id: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        CurioError::RankingFailure {
            seed_id: seed_id.to_string(),
            candidate_id: candidate_id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CurioError::UnknownFormat(_)
            | CurioError::UsageError(_)
            | CurioError::InvalidBudget(_)
            | CurioError::NegativeImportance { .. }
            | CurioError::InvalidWeights { .. }
            | CurioError::DuplicateSeed(_) => ExitCode::Usage,

            CurioError::RankingFailure { .. }
            | CurioError::DimensionMismatch { .. }
            | CurioError::MalformedVector { .. } => ExitCode::Data,

            CurioError::Io(_)
            | CurioError::Json(_)
            | CurioError::Toml(_)
            | CurioError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CurioError::UnknownFormat(_) => "unknown_format",
            CurioError::UsageError(_) => "usage_error",
            CurioError::InvalidBudget(_) => "invalid_budget",
            CurioError::NegativeImportance { .. } => "negative_importance",
            CurioError::InvalidWeights { .. } => "invalid_weights",
            CurioError::DuplicateSeed(_) => "duplicate_seed",
            CurioError::RankingFailure { .. } => "ranking_failure",
            CurioError::DimensionMismatch { .. } => "dimension_mismatch",
            CurioError::MalformedVector { .. } => "malformed_vector",
            CurioError::Io(_) => "io_error",
            CurioError::Json(_) => "json_error",
            CurioError::Toml(_) => "toml_error",
            CurioError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for curio operations
pub type Result<T> = std::result::Result<T, CurioError>;
