use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::article::{CandidateArticle, SeedArticle};
use crate::config::BlendWeights;
use crate::error::{CurioError, Result};
use crate::oracle::SimilarityOracle;
use crate::recommend::{RankedList, SimilarityScore};

/// Score every candidate against one seed and sort best-first.
///
/// Blends content cosine similarity with tag overlap per the configured
/// weights. A candidate with the same id as the seed is excluded from its own
/// list. Ties on the blended score are broken by candidate id ascending so
/// output ordering is deterministic.
pub fn rank(
    seed: &SeedArticle,
    candidates: &[CandidateArticle],
    weights: &BlendWeights,
    oracle: &dyn SimilarityOracle,
) -> Result<RankedList> {
    let mut scores = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if candidate.id == seed.id {
            continue;
        }

        let content = oracle
            .cosine(&seed.vector, &candidate.vector)
            .map_err(|e| CurioError::ranking_failure(&seed.id, &candidate.id, e))?;
        let tags = tag_similarity(&seed.tags, &candidate.tags);
        let blended = weights.content * content + weights.tags * tags;

        scores.push(SimilarityScore {
            candidate_id: candidate.id.clone(),
            content,
            tags,
            blended,
        });
    }

    scores.sort_by(|a, b| {
        b.blended
            .partial_cmp(&a.blended)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });

    Ok(scores)
}

/// Tag overlap ratio over the sum of both set sizes.
///
/// Note this is not a Jaccard index: identical non-empty sets score 0.5, not
/// 1.0. The denominator counts both sets in full, so k shared tags over two
/// k-sized sets give k/2k. Two empty sets score 0.
pub fn tag_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let common = a.intersection(b).count();
    common as f64 / total as f64
}
