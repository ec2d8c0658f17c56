//! Similarity oracle seam
//!
//! Content similarity is delegated to a collaborator: the engine only needs a
//! cosine score in [0, 1] for a pair of opaque feature vectors. Tokenization,
//! feature extraction, and the vector math itself live outside this crate;
//! the vectors must come from an extractor fit once over the full corpus so
//! that any two of them are comparable.

use crate::article::FeatureVector;
use crate::error::Result;

/// Cosine similarity collaborator for opaque content vectors
pub trait SimilarityOracle {
    /// Cosine similarity in [0, 1] between two content vectors.
    ///
    /// Fails on malformed or incomparable vectors (e.g. dimension mismatch);
    /// the engine propagates the failure tied to the specific seed/candidate
    /// pair rather than substituting a default score.
    fn cosine(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64>;
}
