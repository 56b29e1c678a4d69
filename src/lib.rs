//! Parser and validator for `matrix:` URIs.
//!
//! This crate decomposes links in the `matrix:` URI scheme into a typed
//! [`ParsedLink`]: the kind of entity referenced, its identifier, an optional
//! event reference, routing hints, an action, a fragment, an optional
//! authority, and any query parameters the scheme does not reserve.
//!
//! # Overview
//!
//! ```text
//! matrix:[//<authority>/]<kind>/<id>[/<e|event>/<event-id>][?query][#fragment]
//! ```
//!
//! | Kind tag | Entity | Event reference allowed |
//! |----------|--------|-------------------------|
//! | `u` | [`EntityKind::UserId`] | no |
//! | `r` | [`EntityKind::RoomAlias`] | yes |
//! | `roomid` | [`EntityKind::RoomId`] | yes |
//!
//! The query keys `via` (repeatable, every value kept) and `action` (last
//! value wins) are reserved; every other pair is kept in order in
//! [`ParsedLink::unknown_params`].
//!
//! # Quick Start
//!
//! ```rust
//! use matrix_uri::{EntityKind, ParseErrorKind};
//!
//! let link = matrix_uri::parse(
//!     "matrix:roomid/rid:example.org/event/lol823y4bcp3qo4?via=example2.org"
//! ).unwrap();
//!
//! assert_eq!(link.kind(), EntityKind::RoomId);
//! assert_eq!(link.id(), "rid:example.org");
//! assert_eq!(link.event_id(), Some("lol823y4bcp3qo4"));
//! assert_eq!(link.via(), ["example2.org"]);
//!
//! let err = matrix_uri::parse("matrix:u/her:example.com/e/lol823y4bcp3qo4").unwrap_err();
//! assert!(matches!(err.kind, ParseErrorKind::EventNotAllowedForKind { .. }));
//! ```
//!
//! Identifiers are not validated beyond being non-empty, and a parsed link
//! is never turned back into a URI string.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod entity_kind;
mod entity_path;
mod error;
mod link;
pub mod prelude;
mod query;

pub use constants::{
    ACTION_PARAM, EVENT_TAGS, ROOM_ALIAS_TAG, ROOM_ID_TAG, SCHEME, USER_TAG, VIA_PARAM,
};
pub use entity_kind::EntityKind;
pub use error::{ParseError, ParseErrorKind};
pub use link::ParsedLink;
pub use query::QueryParams;

/// Parses a matrix URI.
///
/// Shorthand for [`ParsedLink::parse`].
///
/// # Errors
///
/// Returns `ParseError` if the input is not a valid matrix URI.
pub fn parse(input: &str) -> Result<ParsedLink, ParseError> {
    ParsedLink::parse(input)
}
