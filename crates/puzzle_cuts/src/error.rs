//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, degenerate edges reaching the tongue stage, and document
//! formatting.
use thiserror::Error;

use crate::geometry::Point;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("degenerate edge from {start} to {end}: endpoints coincide")]
    DegenerateEdge { start: Point, end: Point },

    #[error("failed to format document: {0}")]
    Format(#[from] std::fmt::Error),
}
