//! Curio Core Library
//!
//! Core recommendation logic for the curio article recommender.

pub mod article;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod oracle;
pub mod recommend;
