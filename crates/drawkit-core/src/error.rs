//! Error handling for DrawKit
//!
//! Provides error types for every layer of the editor:
//! - Geometry errors (degenerate lines, too few points, singular transforms)
//! - List errors (z-order requests on unknown items)
//! - Drag errors (edits started with a stale point index, failed creation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a shape's parameters cannot produce well-formed geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Two lines with parallel (or zero-length) directions were intersected
    #[error("Lines are parallel and do not intersect")]
    ParallelLines,

    /// An operation needs more points than the shape has
    #[error("At least {required} points are required, found {actual}")]
    NotEnoughPoints {
        /// The minimum number of points.
        required: usize,
        /// The number of points available.
        actual: usize,
    },

    /// A quadrilateral side index outside 0..=3
    #[error("Side index {index} is out of range for a quadrilateral")]
    SideIndexOutOfRange {
        /// The requested side index.
        index: usize,
    },

    /// The affine transform has no inverse
    #[error("Transform is singular and cannot be inverted")]
    SingularTransform,
}

/// Ordered list error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The unordered index does not appear in the render-order permutation
    #[error("Index {index} not found in ordered indices")]
    IndexNotFound {
        /// The unordered index that was requested.
        index: usize,
    },

    /// An index is past the end of the list
    #[error("Index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The current list length.
        len: usize,
    },

    /// An identifier was released that was never allocated
    #[error("Identifier {id} is not allocated")]
    UnknownId {
        /// The identifier being released.
        id: usize,
    },
}

/// Drag error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragError {
    /// A point drag was started with an index outside the vertex list
    #[error("Point index {index} out of range for shape with {count} points")]
    PointIndexOutOfRange {
        /// The requested point index.
        index: usize,
        /// The number of points on the shape.
        count: usize,
    },

    /// The shape factory could not build a shape from the drag
    #[error("Shape creation failed: {reason}")]
    CreationFailed {
        /// Why creation failed.
        reason: String,
    },
}

/// Main error type for DrawKit
///
/// A unified error type that can represent any error from the editor core.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Ordered list error
    #[error(transparent)]
    List(#[from] ListError),

    /// Drag error
    #[error(transparent)]
    Drag(#[from] DragError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is an ordered list error
    pub fn is_list_error(&self) -> bool {
        matches!(self, Error::List(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
