//! Greedy layout generation pipeline

/// Response assembly from the placement outcome
pub mod assembly;
/// Request orchestration: validate, order, place, assemble
pub mod executor;
/// Unit expansion and deterministic placement order
pub mod ordering;
/// Anchor scanning and commit/reject decisions
pub mod planner;
/// Adjacency-weighted association scoring
pub mod scoring;
