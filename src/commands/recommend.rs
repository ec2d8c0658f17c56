//! `curio recommend` command - produce a recommendation batch
//!
//! Reads a JSON batch of seed and candidate articles, runs the engine, and
//! prints the recommendation list in the requested output format.

use std::fs;
use std::io::Read;
use std::time::Instant;

use serde::Deserialize;

use crate::cli::{Cli, OutputFormat, RecommendArgs};
use crate::oracle::DenseCosine;
use curio_core::article::{CandidateArticle, Recommendation, SeedArticle};
use curio_core::config::RecommendConfig;
use curio_core::error::Result;
use curio_core::recommend::Recommender;

/// Input batch shape: seeds plus the candidate pool
#[derive(Debug, Deserialize)]
struct RecommendInput {
    #[serde(default)]
    seeds: Vec<SeedArticle>,
    #[serde(default)]
    candidates: Vec<CandidateArticle>,
}

/// Execute the recommend command
pub fn execute(cli: &Cli, args: &RecommendArgs, start: Instant) -> Result<()> {
    let input = read_input(&args.input)?;
    let config = build_config(cli, args)?;
    let budget = args.budget.unwrap_or(config.total_budget);

    if cli.verbose {
        eprintln!("load_input: {:?}", start.elapsed());
    }

    let oracle = DenseCosine;
    let engine = Recommender::new(&oracle, config);
    let recommendations = engine.recommend(&input.seeds, &input.candidates, budget)?;

    output_recommendations(cli, &recommendations)?;

    if cli.verbose {
        eprintln!("recommend: {:?}", start.elapsed());
    }

    Ok(())
}

fn read_input(path: &str) -> Result<RecommendInput> {
    let contents = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&contents)?)
}

/// Merge config file values with per-invocation flag overrides
fn build_config(cli: &Cli, args: &RecommendArgs) -> Result<RecommendConfig> {
    let mut config = match &cli.config {
        Some(path) => RecommendConfig::load(path)?,
        None => RecommendConfig::default(),
    };

    if let Some(content) = args.content_weight {
        config.weights.content = content;
    }
    if let Some(tags) = args.tag_weight {
        config.weights.tags = tags;
    }
    if args.backfill {
        config.backfill = true;
    }
    config.weights.validate()?;

    Ok(config)
}

fn output_recommendations(cli: &Cli, recommendations: &[Recommendation]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "count": recommendations.len(),
                "recommendations": recommendations,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if recommendations.is_empty() {
                if !cli.quiet {
                    println!("No recommendations.");
                }
                return Ok(());
            }
            for rec in recommendations {
                println!(
                    "{}  (seed: {}, score: {:.4})",
                    rec.candidate_id, rec.seed_id, rec.blended
                );
            }
        }
    }
    Ok(())
}
