//! Concrete similarity collaborator wired into the CLI
//!
//! Input batches carry precomputed feature vectors from an upstream
//! extractor fit over the full corpus, so the binary only needs plain cosine
//! over dense vectors. The core crate stays agnostic behind the
//! `SimilarityOracle` trait.

use curio_core::article::FeatureVector;
use curio_core::error::{CurioError, Result};
use curio_core::oracle::SimilarityOracle;

/// Cosine similarity over dense feature vectors
pub struct DenseCosine;

impl SimilarityOracle for DenseCosine {
    fn cosine(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
        if a.len() != b.len() {
            return Err(CurioError::DimensionMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if a.is_empty() {
            return Err(CurioError::MalformedVector {
                reason: "empty feature vector".to_string(),
            });
        }

        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            if !x.is_finite() || !y.is_finite() {
                return Err(CurioError::MalformedVector {
                    reason: "non-finite component".to_string(),
                });
            }
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        // Non-negative components keep cosine in [0, 1]; clamp guards
        // floating-point drift either way
        Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(components: &[f64]) -> FeatureVector {
        FeatureVector::new(components.to_vec())
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let v = vector(&[0.6, 0.8]);
        let score = DenseCosine.cosine(&v, &v.clone()).unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = vector(&[1.0, 0.0]);
        let b = vector(&[0.0, 1.0]);
        assert_eq!(DenseCosine.cosine(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let a = vector(&[0.0, 0.0]);
        let b = vector(&[1.0, 1.0]);
        assert_eq!(DenseCosine.cosine(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let a = vector(&[1.0, 0.0]);
        let b = vector(&[1.0, 0.0, 0.0]);
        assert!(matches!(
            DenseCosine.cosine(&a, &b),
            Err(CurioError::DimensionMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_non_finite_component_is_an_error() {
        let a = vector(&[1.0, f64::NAN]);
        let b = vector(&[1.0, 0.0]);
        assert!(matches!(
            DenseCosine.cosine(&a, &b),
            Err(CurioError::MalformedVector { .. })
        ));
    }

    #[test]
    fn test_empty_vector_is_an_error() {
        let a = vector(&[]);
        let b = vector(&[]);
        assert!(matches!(
            DenseCosine.cosine(&a, &b),
            Err(CurioError::MalformedVector { .. })
        ));
    }
}
