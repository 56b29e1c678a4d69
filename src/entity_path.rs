//! Path component of a matrix URI.

use crate::constants::EVENT_TAGS;
use crate::entity_kind::EntityKind;
use crate::error::ParseErrorKind;

/// The validated path of a matrix URI: an entity reference with an
/// optional event reference.
///
/// ```text
/// entity_ref := kind_tag "/" identifier [ "/" event_tag "/" event_id ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EntityPath {
    pub(crate) kind: EntityKind,
    pub(crate) id: String,
    pub(crate) event_id: Option<String>,
}

impl EntityPath {
    /// Parses a path with the scheme and authority already stripped.
    ///
    /// Checks run in a fixed order: segment count, kind tag, identifier,
    /// event tag, kind/event compatibility, event identifier.
    pub(crate) fn parse(input: &str) -> Result<Self, ParseErrorKind> {
        let segments: Vec<&str> = input.split('/').collect();

        if segments.len() != 2 && segments.len() != 4 {
            return Err(ParseErrorKind::InvalidSegmentCount {
                actual: segments.len(),
            });
        }

        let kind = EntityKind::from_tag(segments[0]).ok_or_else(|| {
            ParseErrorKind::InvalidEntityDescriptor {
                segment: segments[0].to_string(),
                index: 0,
            }
        })?;

        let id = segments[1];
        if id.is_empty() {
            return Err(ParseErrorKind::EmptyIdentifier);
        }

        let event_id = match segments.as_slice() {
            [_, _, event_tag, event_id] => {
                Some(Self::parse_event(kind, event_tag, event_id)?.to_string())
            }
            _ => None,
        };

        Ok(Self {
            kind,
            id: id.to_string(),
            event_id,
        })
    }

    fn parse_event<'a>(
        kind: EntityKind,
        event_tag: &str,
        event_id: &'a str,
    ) -> Result<&'a str, ParseErrorKind> {
        if !EVENT_TAGS.contains(&event_tag) {
            return Err(ParseErrorKind::InvalidEntityDescriptor {
                segment: event_tag.to_string(),
                index: 2,
            });
        }

        if !kind.allows_event() {
            return Err(ParseErrorKind::EventNotAllowedForKind { kind });
        }

        if event_id.is_empty() {
            return Err(ParseErrorKind::InvalidEventUrl);
        }

        Ok(event_id)
    }
}
