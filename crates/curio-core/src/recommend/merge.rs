use std::collections::{HashMap, HashSet};

use crate::article::{Recommendation, SeedArticle};
use crate::recommend::{Quota, RankedList};

/// Merge per-seed ranked lists into one deduplicated output.
///
/// Seeds are walked in input order; each consumes its quota from the top of
/// its own ranked list, skipping any candidate already selected for a prior
/// seed in this pass. By default a seed whose list runs out before its quota
/// is filled leaves that quota unused. With `backfill` enabled, a second pass
/// in the same seed order hands the unused slots to seeds that still have
/// candidates left.
pub fn merge(
    seeds: &[SeedArticle],
    ranked: &HashMap<String, RankedList>,
    quotas: &Quota,
    backfill: bool,
) -> Vec<Recommendation> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut output = Vec::new();
    let mut cursors: HashMap<&str, usize> = HashMap::with_capacity(seeds.len());

    for seed in seeds {
        let quota = quotas.get(&seed.id).copied().unwrap_or(0);
        let list = match ranked.get(&seed.id) {
            Some(list) => list,
            None => continue,
        };

        let mut position = 0;
        let mut taken = 0;
        while taken < quota && position < list.len() {
            let entry = &list[position];
            position += 1;
            if !seen.insert(entry.candidate_id.clone()) {
                continue;
            }
            output.push(Recommendation {
                seed_id: seed.id.clone(),
                candidate_id: entry.candidate_id.clone(),
                blended: entry.blended,
            });
            taken += 1;
        }
        cursors.insert(seed.id.as_str(), position);
    }

    if backfill {
        let total_quota: usize = quotas.values().sum();
        backfill_pass(seeds, ranked, &mut seen, &mut output, &mut cursors, total_quota);
    }

    output
}

/// Hand unused quota to seeds with candidates remaining, in seed input order
fn backfill_pass<'a>(
    seeds: &'a [SeedArticle],
    ranked: &HashMap<String, RankedList>,
    seen: &mut HashSet<String>,
    output: &mut Vec<Recommendation>,
    cursors: &mut HashMap<&'a str, usize>,
    total_quota: usize,
) {
    for seed in seeds {
        if output.len() >= total_quota {
            break;
        }
        let list = match ranked.get(&seed.id) {
            Some(list) => list,
            None => continue,
        };
        let position = cursors.entry(seed.id.as_str()).or_insert(0);

        while output.len() < total_quota && *position < list.len() {
            let entry = &list[*position];
            *position += 1;
            if !seen.insert(entry.candidate_id.clone()) {
                continue;
            }
            output.push(Recommendation {
                seed_id: seed.id.clone(),
                candidate_id: entry.candidate_id.clone(),
                blended: entry.blended,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::FeatureVector;
    use crate::recommend::SimilarityScore;
    use std::collections::BTreeSet;

    fn seed(id: &str) -> SeedArticle {
        SeedArticle {
            id: id.to_string(),
            tokens: vec![],
            tags: BTreeSet::new(),
            vector: FeatureVector::new(vec![1.0]),
            importance: 1.0,
        }
    }

    fn score(candidate_id: &str, blended: f64) -> SimilarityScore {
        SimilarityScore {
            candidate_id: candidate_id.to_string(),
            content: blended,
            tags: 0.0,
            blended,
        }
    }

    fn ranked_for(entries: Vec<(&str, Vec<SimilarityScore>)>) -> HashMap<String, RankedList> {
        entries
            .into_iter()
            .map(|(id, list)| (id.to_string(), list))
            .collect()
    }

    #[test]
    fn test_seed_then_rank_order() {
        let seeds = vec![seed("s1"), seed("s2")];
        let ranked = ranked_for(vec![
            ("s1", vec![score("a", 0.9), score("b", 0.8)]),
            ("s2", vec![score("c", 0.7), score("d", 0.6)]),
        ]);
        let quotas: Quota = [("s1".to_string(), 2), ("s2".to_string(), 2)].into();

        let output = merge(&seeds, &ranked, &quotas, false);
        let pairs: Vec<(&str, &str)> = output
            .iter()
            .map(|r| (r.seed_id.as_str(), r.candidate_id.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("s1", "a"), ("s1", "b"), ("s2", "c"), ("s2", "d")]
        );
    }

    #[test]
    fn test_cross_seed_deduplication() {
        // "a" tops both lists; the second seed must skip it and keep filling
        let seeds = vec![seed("s1"), seed("s2")];
        let ranked = ranked_for(vec![
            ("s1", vec![score("a", 0.9)]),
            ("s2", vec![score("a", 0.95), score("b", 0.5)]),
        ]);
        let quotas: Quota = [("s1".to_string(), 1), ("s2".to_string(), 1)].into();

        let output = merge(&seeds, &ranked, &quotas, false);
        let ids: Vec<&str> = output.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_exhausted_seed_not_backfilled_by_default() {
        let seeds = vec![seed("s1"), seed("s2")];
        let ranked = ranked_for(vec![
            ("s1", vec![score("a", 0.9)]),
            ("s2", vec![score("b", 0.8), score("c", 0.7), score("d", 0.6)]),
        ]);
        // s1 can only fill 1 of its 3 slots; s2 must not absorb them
        let quotas: Quota = [("s1".to_string(), 3), ("s2".to_string(), 1)].into();

        let output = merge(&seeds, &ranked, &quotas, false);
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn test_backfill_hands_unused_slots_to_other_seeds() {
        let seeds = vec![seed("s1"), seed("s2")];
        let ranked = ranked_for(vec![
            ("s1", vec![score("a", 0.9)]),
            ("s2", vec![score("b", 0.8), score("c", 0.7), score("d", 0.6)]),
        ]);
        let quotas: Quota = [("s1".to_string(), 3), ("s2".to_string(), 1)].into();

        let output = merge(&seeds, &ranked, &quotas, true);
        assert_eq!(output.len(), 4);
        let ids: Vec<&str> = output.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_backfill_never_exceeds_total_quota() {
        let seeds = vec![seed("s1"), seed("s2")];
        let ranked = ranked_for(vec![
            ("s1", vec![score("a", 0.9), score("b", 0.8), score("c", 0.7)]),
            ("s2", vec![score("d", 0.6), score("e", 0.5)]),
        ]);
        let quotas: Quota = [("s1".to_string(), 2), ("s2".to_string(), 2)].into();

        let output = merge(&seeds, &ranked, &quotas, true);
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_missing_ranked_list_is_skipped() {
        let seeds = vec![seed("s1"), seed("s2")];
        let ranked = ranked_for(vec![("s2", vec![score("a", 0.9)])]);
        let quotas: Quota = [("s1".to_string(), 2), ("s2".to_string(), 1)].into();

        let output = merge(&seeds, &ranked, &quotas, false);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].seed_id, "s2");
    }

    #[test]
    fn test_empty_everything() {
        let output = merge(&[], &HashMap::new(), &Quota::new(), false);
        assert!(output.is_empty());
    }
}
