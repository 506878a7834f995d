//! Input/output surface: wire contract, validation, errors, CLI

/// Command-line interface for generating layouts from JSON files
pub mod cli;
/// Engine constants and validation limits
pub mod configuration;
/// Request/response contract and plot validation
pub mod contract;
/// Error types for validation and file handling
pub mod error;
