use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for curio
pub fn curio() -> Command {
    cargo_bin_cmd!("curio")
}

/// A small two-topic batch: two seeds with 3:1 importance and six candidates
#[allow(dead_code)]
pub fn two_topic_batch() -> String {
    serde_json::json!({
        "seeds": [
            {
                "id": "seed-rust",
                "tags": ["rust", "systems"],
                "vector": [1.0, 0.0],
                "importance": 3.0
            },
            {
                "id": "seed-food",
                "tags": ["cooking"],
                "vector": [0.0, 1.0],
                "importance": 1.0
            }
        ],
        "candidates": [
            { "id": "art-1", "tags": ["rust"], "vector": [1.0, 0.0] },
            { "id": "art-2", "tags": ["rust", "systems"], "vector": [0.9, 0.1] },
            { "id": "art-3", "tags": ["systems"], "vector": [0.8, 0.2] },
            { "id": "art-4", "tags": ["cooking"], "vector": [0.1, 0.9] },
            { "id": "art-5", "tags": ["cooking", "food"], "vector": [0.0, 1.0] },
            { "id": "art-6", "tags": ["food"], "vector": [0.2, 0.8] }
        ]
    })
    .to_string()
}

/// Write a batch to `dir` and return its path
#[allow(dead_code)]
pub fn write_batch(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("batch.json");
    std::fs::write(&path, contents).expect("Failed to write batch file");
    path
}
