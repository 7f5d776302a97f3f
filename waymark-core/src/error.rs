//! Error types for the waymark core library.
//!
//! Defines the [`GraphError`] enum shared by every algorithm, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of a [`GraphError`].
///
/// Callers that only need to branch on the category of a failure (bad
/// input, bad index, or no route) can match on this instead of on the
/// individual variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorKind {
    /// A caller-supplied argument violated a precondition.
    InvalidArgument,
    /// A vertex index fell outside `[0, V)`.
    OutOfRange,
    /// No route exists between the requested vertices.
    Unreachable,
}

/// Errors produced by graph construction and the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A graph was built without a vertex count.
    #[error("a graph requires a vertex count")]
    InvalidVertexCount,
    /// An edge carried a negative weight.
    #[error("edge ({from}, {to}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint of the rejected edge.
        from: usize,
        /// Second endpoint of the rejected edge.
        to: usize,
        /// The offending weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({from}, {to}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint of the rejected edge.
        from: usize,
        /// Second endpoint of the rejected edge.
        to: usize,
    },
    /// A directed graph was passed to an algorithm defined only for
    /// undirected graphs.
    #[error("{operation} requires an undirected graph")]
    DirectedGraph {
        /// Name of the rejecting operation.
        operation: &'static str,
    },
    /// A label was not present in the vertex label index.
    #[error("unknown vertex label `{label}`")]
    UnknownLabel {
        /// Display form of the label that failed to resolve.
        label: String,
    },
    /// A vertex index fell outside the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The destination has no predecessor chain back to the source.
    #[error("vertex {destination} is unreachable from vertex {origin}")]
    Unreachable {
        /// Start of the requested route.
        origin: usize,
        /// End of the requested route.
        destination: usize,
    },
    /// A route named consecutive vertices that share no edge.
    #[error("no edge joins vertex {from} to vertex {to}")]
    MissingEdge {
        /// Start of the missing hop.
        from: usize,
        /// End of the missing hop.
        to: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph was built without a vertex count.
        InvalidVertexCount => InvalidVertexCount => "GRAPH_INVALID_VERTEX_COUNT",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A directed graph was passed to an undirected-only algorithm.
        DirectedGraph => DirectedGraph { .. } => "GRAPH_DIRECTED_UNSUPPORTED",
        /// A label was not present in the vertex label index.
        UnknownLabel => UnknownLabel { .. } => "GRAPH_UNKNOWN_LABEL",
        /// A vertex index fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// The destination is unreachable from the source.
        Unreachable => Unreachable { .. } => "GRAPH_UNREACHABLE",
        /// A route named consecutive vertices that share no edge.
        MissingEdge => MissingEdge { .. } => "GRAPH_MISSING_EDGE",
    }
}

impl GraphError {
    /// Returns the broad category of this error.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{GraphError, GraphErrorKind};
    ///
    /// let err = GraphError::VertexOutOfRange { vertex: 9, vertex_count: 3 };
    /// assert_eq!(err.kind(), GraphErrorKind::OutOfRange);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> GraphErrorKind {
        match self {
            Self::InvalidVertexCount
            | Self::NegativeWeight { .. }
            | Self::NonFiniteWeight { .. }
            | Self::DirectedGraph { .. }
            | Self::UnknownLabel { .. } => GraphErrorKind::InvalidArgument,
            Self::VertexOutOfRange { .. } => GraphErrorKind::OutOfRange,
            Self::Unreachable { .. } | Self::MissingEdge { .. } => GraphErrorKind::Unreachable,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
