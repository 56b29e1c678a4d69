//! Error types for matrix URI parsing.

use std::fmt;

use crate::constants::SCHEME;
use crate::entity_kind::EntityKind;

/// Errors that can occur when parsing a matrix URI.
///
/// Every failure is a malformed-input error; the caller must supply a
/// different URI. The [`kind`](ParseError::kind) tells which rule was broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the stable reason code of this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Scheme is missing or is not exactly `matrix`
    InvalidScheme {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// The generic URL parser rejected the input
    InvalidUri(url::ParseError),
    /// Path does not have exactly 2 or 4 segments
    InvalidSegmentCount {
        /// Actual segment count
        actual: usize,
    },
    /// Unrecognized entity tag or event tag
    InvalidEntityDescriptor {
        /// The offending segment
        segment: String,
        /// Index of the segment in the path
        index: usize,
    },
    /// Identifier segment is empty
    EmptyIdentifier,
    /// Event reference on an entity kind that cannot carry one
    EventNotAllowedForKind {
        /// The entity kind of the URI
        kind: EntityKind,
    },
    /// Event identifier segment is empty
    InvalidEventUrl,
}

impl ParseErrorKind {
    /// Returns the stable reason code, suitable for keying user-facing messages.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidScheme { .. } => "InvalidScheme",
            Self::InvalidUri(_) => "InvalidUri",
            Self::InvalidSegmentCount { .. } => "InvalidSegmentCount",
            Self::InvalidEntityDescriptor { .. } => "InvalidEntityDescriptor",
            Self::EmptyIdentifier => "EmptyIdentifier",
            Self::EventNotAllowedForKind { .. } => "EventNotAllowedForKind",
            Self::InvalidEventUrl => "InvalidEventUrl",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse matrix URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidScheme { found } => match found {
                Some(s) => write!(f, "expected scheme '{SCHEME}', found '{s}'"),
                None => write!(f, "missing scheme; URI must start with '{SCHEME}:'"),
            },
            ParseErrorKind::InvalidUri(e) => write!(f, "malformed URI: {e}"),
            ParseErrorKind::InvalidSegmentCount { actual } => write!(
                f,
                "path has {actual} segments; expected 2 (entity) or 4 (entity and event)"
            ),
            ParseErrorKind::InvalidEntityDescriptor { segment, index } => {
                write!(f, "unrecognized descriptor '{segment}' at path segment {index}")
            }
            ParseErrorKind::EmptyIdentifier => write!(f, "entity identifier cannot be empty"),
            ParseErrorKind::EventNotAllowedForKind { kind } => {
                write!(f, "{kind} links cannot reference an event")
            }
            ParseErrorKind::InvalidEventUrl => write!(f, "event identifier cannot be empty"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidUri(e) => Some(e),
            _ => None,
        }
    }
}
