use std::collections::HashMap;

use crate::article::SeedArticle;
use crate::error::{CurioError, Result};

/// Recommendation slots allocated to each seed, keyed by seed id
pub type Quota = HashMap<String, usize>;

/// Split the total budget across seeds proportionally to importance.
///
/// Uses the largest-remainder method: raw proportional quotas are floored,
/// then the leftover units go one at a time to the seeds with the largest
/// fractional remainders (ties broken by seed input order), so the quotas sum
/// to the budget exactly. When total importance is zero, proportional
/// division is undefined and every seed gets an equal share instead.
pub fn allocate(seeds: &[SeedArticle], total_budget: usize) -> Result<Quota> {
    if total_budget == 0 {
        return Err(CurioError::InvalidBudget(0));
    }
    if seeds.is_empty() {
        return Ok(Quota::new());
    }

    for seed in seeds {
        if seed.importance < 0.0 {
            return Err(CurioError::NegativeImportance {
                seed_id: seed.id.clone(),
                importance: seed.importance,
            });
        }
    }

    let total_importance: f64 = seeds.iter().map(|s| s.importance).sum();
    let even_share = 1.0 / seeds.len() as f64;

    let raw: Vec<f64> = seeds
        .iter()
        .map(|seed| {
            let share = if total_importance == 0.0 {
                even_share
            } else {
                seed.importance / total_importance
            };
            share * total_budget as f64
        })
        .collect();

    let mut quotas: Vec<usize> = raw.iter().map(|&r| r.floor() as usize).collect();
    let allocated: usize = quotas.iter().sum();
    let leftover = total_budget.saturating_sub(allocated);

    // Largest fractional remainder first; stable sort keeps input order on ties
    let mut order: Vec<usize> = (0..seeds.len()).collect();
    order.sort_by(|&a, &b| {
        let rem_a = raw[a] - raw[a].floor();
        let rem_b = raw[b] - raw[b].floor();
        rem_b.partial_cmp(&rem_a).unwrap_or(std::cmp::Ordering::Equal)
    });

    for &idx in order.iter().cycle().take(leftover) {
        quotas[idx] += 1;
    }

    Ok(seeds
        .iter()
        .zip(quotas)
        .map(|(seed, quota)| (seed.id.clone(), quota))
        .collect())
}
