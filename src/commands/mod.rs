//! Command implementations for curio

pub mod dispatch;
pub mod recommend;
