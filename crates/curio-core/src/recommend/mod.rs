//! Recommendation engine: per-seed ranking, quota allocation, and merge
//!
//! The pipeline is pure and synchronous: every seed is ranked against the
//! candidate pool, the total budget is split across seeds proportionally to
//! their importance, and the per-seed lists are merged into one deduplicated
//! output in seed-then-rank order.

mod merge;
mod quota;
mod ranker;

pub use merge::merge;
pub use quota::{allocate, Quota};
pub use ranker::{rank, tag_similarity};

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::article::{CandidateArticle, Recommendation, SeedArticle};
use crate::config::RecommendConfig;
use crate::error::{CurioError, Result};
use crate::oracle::SimilarityOracle;

/// Blended similarity of one candidate against one seed
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityScore {
    /// Candidate article ID
    pub candidate_id: String,
    /// Content cosine similarity (0.0 to 1.0)
    pub content: f64,
    /// Tag overlap similarity (0.0 to 1.0)
    pub tags: f64,
    /// Weighted blend of the two (0.0 to 1.0)
    pub blended: f64,
}

/// Ranked candidates for one seed, best first
pub type RankedList = Vec<SimilarityScore>;

/// Recommendation Engine
pub struct Recommender<'a> {
    oracle: &'a dyn SimilarityOracle,
    config: RecommendConfig,
}

impl<'a> Recommender<'a> {
    /// Create a new Recommender over a similarity oracle
    pub fn new(oracle: &'a dyn SimilarityOracle, config: RecommendConfig) -> Self {
        Recommender { oracle, config }
    }

    /// Produce a recommendation batch of at most `total_budget` articles.
    ///
    /// Each seed contributes in proportion to its importance; the same
    /// candidate is never recommended twice in one batch. An empty seed set
    /// or candidate pool yields an empty (or partial) output, not an error.
    pub fn recommend(
        &self,
        seeds: &[SeedArticle],
        candidates: &[CandidateArticle],
        total_budget: usize,
    ) -> Result<Vec<Recommendation>> {
        if total_budget == 0 {
            return Err(CurioError::InvalidBudget(0));
        }
        self.config.weights.validate()?;
        validate_seeds(seeds)?;

        if seeds.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();

        let mut ranked: HashMap<String, RankedList> = HashMap::with_capacity(seeds.len());
        for seed in seeds {
            let list = rank(seed, candidates, &self.config.weights, self.oracle)?;
            tracing::trace!(seed_id = %seed.id, scored = list.len(), "ranked_seed");
            ranked.insert(seed.id.clone(), list);
        }

        let quotas = allocate(seeds, total_budget)?;
        let output = merge(seeds, &ranked, &quotas, self.config.backfill);

        tracing::debug!(
            seeds = seeds.len(),
            candidates = candidates.len(),
            budget = total_budget,
            selected = output.len(),
            elapsed = ?start.elapsed(),
            "recommend"
        );

        Ok(output)
    }
}

/// Reject negative importances and duplicate seed ids up front.
/// Quotas are keyed by seed id, so duplicates would silently collide.
fn validate_seeds(seeds: &[SeedArticle]) -> Result<()> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(seeds.len());
    for seed in seeds {
        if seed.importance < 0.0 {
            return Err(CurioError::NegativeImportance {
                seed_id: seed.id.clone(),
                importance: seed.importance,
            });
        }
        if !ids.insert(seed.id.as_str()) {
            return Err(CurioError::DuplicateSeed(seed.id.clone()));
        }
    }
    Ok(())
}
