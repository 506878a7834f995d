//! Error types for request validation, catalog validation, and file handling

use std::fmt;
use std::path::PathBuf;

use crate::catalog::vegetable::VegetableId;

/// Main error type for layout generation and the CLI surface
///
/// Infeasible placements are never errors; they surface through the rejected
/// list of a successful response.
#[derive(Debug)]
pub enum LayoutError {
    /// A plot side fails the range or cell-multiple validation
    InvalidPlotDimension {
        /// Which side failed, `"width"` or `"height"`
        axis: &'static str,
        /// Offending value in centimetres
        value_cm: u32,
        /// Explanation of the failed rule
        reason: String,
    },

    /// The request references a vegetable id absent from the snapshot
    ///
    /// Treated as a hard input error: it indicates a stale or incorrect
    /// client catalog rather than a placement problem.
    UnknownVegetable {
        /// The unresolved id
        id: VegetableId,
    },

    /// Total requested units exceed the per-request cap
    RequestTooLarge {
        /// Units the request asked for
        requested: u64,
        /// Configured cap
        limit: u64,
    },

    /// An association score falls outside the conventional range
    AssociationOutOfRange {
        /// First vegetable of the pair
        a: VegetableId,
        /// Second vegetable of the pair
        b: VegetableId,
        /// Offending score
        score: i32,
    },

    /// Two catalog entries disagree on the score of one unordered pair
    AssociationConflict {
        /// First vegetable of the pair
        a: VegetableId,
        /// Second vegetable of the pair
        b: VegetableId,
        /// Score recorded first
        existing: i32,
        /// Contradicting score
        conflicting: i32,
    },

    /// Catalog snapshot failed structural validation
    InvalidCatalog {
        /// Description of the inconsistency
        reason: String,
    },

    /// A value could not be rendered as JSON
    Serialize {
        /// What was being rendered
        subject: &'static str,
        /// Underlying serialiser error
        source: serde_json::Error,
    },

    /// A JSON document could not be parsed
    Parse {
        /// Path of the document
        path: PathBuf,
        /// What the document was expected to contain
        expected: &'static str,
        /// Underlying parser error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlotDimension {
                axis,
                value_cm,
                reason,
            } => {
                write!(f, "Invalid plot {axis} of {value_cm} cm: {reason}")
            }
            Self::UnknownVegetable { id } => {
                write!(f, "Request references unknown vegetable id {id}")
            }
            Self::RequestTooLarge { requested, limit } => {
                write!(
                    f,
                    "Request asks for {requested} units, above the limit of {limit}"
                )
            }
            Self::AssociationOutOfRange { a, b, score } => {
                write!(
                    f,
                    "Association score {score} for pair ({a}, {b}) is outside the allowed range"
                )
            }
            Self::AssociationConflict {
                a,
                b,
                existing,
                conflicting,
            } => {
                write!(
                    f,
                    "Conflicting association scores for pair ({a}, {b}): {existing} vs {conflicting}"
                )
            }
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid catalog: {reason}")
            }
            Self::Serialize { subject, source } => {
                write!(f, "Failed to serialise {subject}: {source}")
            }
            Self::Parse {
                path,
                expected,
                source,
            } => {
                write!(
                    f,
                    "Failed to parse {expected} from '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize { source, .. } | Self::Parse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::LayoutError;
    use std::error::Error;

    #[test]
    fn test_display_mentions_offending_value() {
        let err = LayoutError::InvalidPlotDimension {
            axis: "width",
            value_cm: 95,
            reason: "below the 100 cm minimum".to_owned(),
        };
        let message = err.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("95"));
    }

    #[test]
    fn test_serialize_error_names_subject_and_carries_source() {
        let Err(source) = serde_json::from_str::<u32>("not json") else {
            unreachable!("fixture must not parse");
        };
        let err = LayoutError::Serialize {
            subject: "layout response",
            source,
        };
        assert!(err.to_string().contains("layout response"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_filesystem_error_carries_source() {
        let err = LayoutError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());
    }
}
