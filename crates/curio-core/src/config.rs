//! Configuration type definitions

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CurioError, Result};

/// Default weight for the content similarity component
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.6;

/// Default weight for the tag overlap component
pub const DEFAULT_TAG_WEIGHT: f64 = 0.4;

/// Default total recommendation budget per batch
pub const DEFAULT_TOTAL_BUDGET: usize = 25;

/// Weights for blending content and tag similarity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    /// Weight applied to content cosine similarity
    #[serde(default = "default_content_weight")]
    pub content: f64,

    /// Weight applied to tag overlap similarity
    #[serde(default = "default_tag_weight")]
    pub tags: f64,
}

impl BlendWeights {
    /// Check that the weights keep blended scores within [0, 1]
    pub fn validate(&self) -> Result<()> {
        if self.content < 0.0 || self.tags < 0.0 {
            return Err(CurioError::InvalidWeights {
                reason: format!(
                    "weights must be non-negative, got content={} tags={}",
                    self.content, self.tags
                ),
            });
        }
        let sum = self.content + self.tags;
        if sum == 0.0 {
            return Err(CurioError::InvalidWeights {
                reason: "weights must not both be zero".to_string(),
            });
        }
        if sum > 1.0 + 1e-9 {
            return Err(CurioError::InvalidWeights {
                reason: format!("weights must sum to at most 1.0, got {}", sum),
            });
        }
        Ok(())
    }
}

/// Recommendation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Blend weights for candidate scoring
    #[serde(default)]
    pub weights: BlendWeights,

    /// Total recommendation slots per batch
    #[serde(default = "default_total_budget")]
    pub total_budget: usize,

    /// Let seeds with leftover candidates fill quota another seed could not
    /// use (default off: unfilled quota is simply not backfilled)
    #[serde(default)]
    pub backfill: bool,
}

impl RecommendConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: RecommendConfig = toml::from_str(&contents)?;
        config.weights.validate()?;
        Ok(config)
    }
}

fn default_content_weight() -> f64 {
    DEFAULT_CONTENT_WEIGHT
}

fn default_tag_weight() -> f64 {
    DEFAULT_TAG_WEIGHT
}

fn default_total_budget() -> usize {
    DEFAULT_TOTAL_BUDGET
}

impl Default for BlendWeights {
    fn default() -> Self {
        BlendWeights {
            content: default_content_weight(),
            tags: default_tag_weight(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            weights: BlendWeights::default(),
            total_budget: default_total_budget(),
            backfill: false,
        }
    }
}
