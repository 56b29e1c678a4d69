//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use matrix_uri::prelude::*;
//!
//! let link = ParsedLink::parse("matrix:u/her:example.com").unwrap();
//! assert_eq!(link.kind(), EntityKind::UserId);
//! ```

pub use crate::{
    // Core types
    EntityKind, ParsedLink, QueryParams,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    ACTION_PARAM, EVENT_TAGS, ROOM_ALIAS_TAG, ROOM_ID_TAG, SCHEME, USER_TAG, VIA_PARAM,
};
