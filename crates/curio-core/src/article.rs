//! Article records consumed and produced by the recommender
//!
//! All records are immutable once built: the engine never mutates a seed or
//! candidate, and every derived value is recomputed fresh per invocation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Opaque content feature vector produced by an upstream extractor.
///
/// The core never interprets the components; it only hands pairs of vectors
/// to the similarity oracle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub fn new(components: Vec<f64>) -> Self {
        FeatureVector(components)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// A pool article eligible to be recommended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateArticle {
    /// Article ID
    pub id: String,

    /// Normalized content tokens (tokenized and stopword-filtered upstream)
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Tags attached to the article
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Content feature vector
    pub vector: FeatureVector,
}

/// An article representing one facet of a user's interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedArticle {
    /// Article ID
    pub id: String,

    /// Normalized content tokens (tokenized and stopword-filtered upstream)
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Tags attached to the article
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Content feature vector
    pub vector: FeatureVector,

    /// Externally supplied engagement weight driving this seed's quota share.
    /// Independent of similarity; must be non-negative.
    #[serde(default)]
    pub importance: f64,
}

/// A single recommended article in the final output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Seed the recommendation was drawn for
    pub seed_id: String,

    /// Recommended candidate article
    pub candidate_id: String,

    /// Blended similarity score (0.0 to 1.0)
    pub blended: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_with_defaults() {
        let candidate: CandidateArticle =
            serde_json::from_str(r#"{"id": "a-1", "vector": [0.5, 0.5]}"#).unwrap();
        assert_eq!(candidate.id, "a-1");
        assert!(candidate.tokens.is_empty());
        assert!(candidate.tags.is_empty());
        assert_eq!(candidate.vector.len(), 2);
    }

    #[test]
    fn test_seed_importance_defaults_to_zero() {
        let seed: SeedArticle =
            serde_json::from_str(r#"{"id": "a-1", "vector": [1.0]}"#).unwrap();
        assert_eq!(seed.importance, 0.0);
    }

    #[test]
    fn test_feature_vector_transparent_serde() {
        let vector = FeatureVector::new(vec![0.25, 0.75]);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[0.25,0.75]");
    }
}
