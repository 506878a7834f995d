//! Deterministic layout engine for companion-planted garden beds
//!
//! The engine discretises a rectangular plot into fixed-size cells, expands a
//! request into individual vegetable units, and places them greedily so that
//! the sum of association scores between spatially adjacent units is
//! maximised. Units that cannot fit are reported as rejected rather than
//! failing the whole request.

#![deny(unsafe_code)]

/// Greedy placement, scoring, ordering, and result assembly
pub mod algorithm;
/// Vegetable and companion-association catalog snapshots
pub mod catalog;
/// Request/response contract, validation, errors, and the CLI surface
pub mod io;
/// Cell rectangles and plot occupancy tracking
pub mod spatial;

pub use algorithm::executor::generate_layout;
pub use io::error::{LayoutError, Result};
