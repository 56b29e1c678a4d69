//! Parsed matrix URI.

use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::constants::SCHEME;
use crate::entity_kind::EntityKind;
use crate::entity_path::EntityPath;
use crate::error::{ParseError, ParseErrorKind};
use crate::query::QueryParams;

/// A parsed and validated matrix URI.
///
/// # Structure
///
/// ```text
/// matrix:[//<authority>/]<kind>/<id>[/<e|event>/<event-id>][?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use matrix_uri::{EntityKind, ParsedLink};
///
/// let link = ParsedLink::parse("matrix:r/us:example.org/e/lol823y4bcp3qo4?via=example2.org").unwrap();
/// assert_eq!(link.kind(), EntityKind::RoomAlias);
/// assert_eq!(link.id(), "us:example.org");
/// assert_eq!(link.event_id(), Some("lol823y4bcp3qo4"));
/// assert_eq!(link.via(), ["example2.org"]);
///
/// // Authority form
/// let link = ParsedLink::parse("matrix://example.com/u/her:example.com?action=chat").unwrap();
/// assert_eq!(link.authority(), Some("example.com"));
/// assert_eq!(link.action(), Some("chat"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedLink {
    id: String,
    kind: EntityKind,
    event_id: Option<String>,
    fragment: Option<String>,
    authority: Option<String>,
    via: Vec<String>,
    action: Option<String>,
    unknown_params: Vec<(String, String)>,
}

impl ParsedLink {
    /// Parses a matrix URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The scheme is not exactly `matrix`
    /// - The input is not a well-formed URI
    /// - The path does not have 2 or 4 segments
    /// - The kind tag or event tag is not recognized
    /// - The identifier or event identifier is empty
    /// - A user link carries an event reference
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match Self::parse_inner(input) {
            Ok(link) => {
                tracing::trace!(kind = %link.kind, id = %link.id, "parsed matrix URI");
                Ok(link)
            }
            Err(kind) => {
                tracing::debug!(reason = kind.code(), input, "rejected matrix URI");
                Err(ParseError {
                    input: input.to_string(),
                    kind,
                })
            }
        }
    }

    /// Returns the entity identifier, without sigil.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the entity kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the referenced event identifier, without sigil.
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    /// Returns the percent-decoded fragment, if present and non-empty.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the authority (`host[:port]`), if the URI used the
    /// `matrix://authority/...` form.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the routing hints, one per `via` parameter, in order.
    #[must_use]
    pub fn via(&self) -> &[String] {
        &self.via
    }

    /// Returns the value of the last `action` parameter.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns every query parameter other than `via` and `action`, in order.
    #[must_use]
    pub fn unknown_params(&self) -> &[(String, String)] {
        &self.unknown_params
    }

    /// Returns the identifier in the protocol's native form, with its sigil.
    ///
    /// ```
    /// use matrix_uri::ParsedLink;
    ///
    /// let link = ParsedLink::parse("matrix:roomid/rid:example.org").unwrap();
    /// assert_eq!(link.identifier(), "!rid:example.org");
    /// ```
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}{}", self.kind.sigil(), self.id)
    }

    /// Returns the event identifier with its `$` sigil.
    #[must_use]
    pub fn event_identifier(&self) -> Option<String> {
        self.event_id.as_ref().map(|e| format!("${e}"))
    }

    /// Returns true if the link refers to a room, by alias or by id.
    #[must_use]
    pub const fn is_room(&self) -> bool {
        self.kind.allows_event()
    }

    /// Returns true if the link refers to a user.
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self.kind, EntityKind::UserId)
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        match Self::raw_scheme(input) {
            Some(scheme) if scheme == SCHEME => {}
            found => return Err(ParseErrorKind::InvalidScheme { found }),
        }

        let url = Url::parse(input).map_err(ParseErrorKind::InvalidUri)?;

        let fragment = url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(|f| percent_decode_str(f).decode_utf8_lossy().into_owned());

        let (authority, path) = Self::split_authority(&url);

        let params = url
            .query()
            .map(QueryParams::parse)
            .unwrap_or_default()
            .into_link_params();

        let EntityPath { kind, id, event_id } = EntityPath::parse(path)?;

        Ok(Self {
            id,
            kind,
            event_id,
            fragment,
            authority,
            via: params.via,
            action: params.action,
            unknown_params: params.unknown,
        })
    }

    /// Returns the scheme as written, before the url crate lowercases it.
    ///
    /// Mirrors the url crate's input cleanup: leading and trailing C0
    /// controls and spaces are trimmed, and tabs and newlines are removed.
    fn raw_scheme(input: &str) -> Option<String> {
        let (scheme, _) = input
            .trim_matches(|c: char| c <= ' ')
            .split_once(':')?;
        Some(scheme.replace(['\t', '\n', '\r'], ""))
    }

    /// Separates the authority from the path.
    ///
    /// The url crate always reports an explicit `//authority` as the host,
    /// leaving a single leading `/` on the path.
    fn split_authority(url: &Url) -> (Option<String>, &str) {
        let path = url.path();
        if !url.has_authority() {
            return (None, path);
        }

        let authority = url
            .host_str()
            .filter(|host| !host.is_empty())
            .map(|host| match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            });

        (authority, path.strip_prefix('/').unwrap_or(path))
    }
}

impl FromStr for ParsedLink {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedLink {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> ParseErrorKind {
        ParsedLink::parse(input).unwrap_err().kind
    }

    #[test]
    fn parse_user_link() {
        let link = ParsedLink::parse("matrix:u/her:example.com").unwrap();
        assert_eq!(link.kind(), EntityKind::UserId);
        assert_eq!(link.id(), "her:example.com");
        assert_eq!(link.event_id(), None);
        assert_eq!(link.authority(), None);
        assert!(link.via().is_empty());
        assert!(link.is_user());
    }

    #[test]
    fn parse_room_alias_with_event() {
        let link = ParsedLink::parse("matrix:r/us:example.org/e/lol823y4bcp3qo4").unwrap();
        assert_eq!(link.kind(), EntityKind::RoomAlias);
        assert_eq!(link.id(), "us:example.org");
        assert_eq!(link.event_id(), Some("lol823y4bcp3qo4"));
        assert!(link.is_room());
    }

    #[test]
    fn parse_room_id_with_event_and_via() {
        let link = ParsedLink::parse(
            "matrix:roomid/rid:example.org/event/lol823y4bcp3qo4?via=example2.org",
        )
        .unwrap();
        assert_eq!(link.kind(), EntityKind::RoomId);
        assert_eq!(link.id(), "rid:example.org");
        assert_eq!(link.event_id(), Some("lol823y4bcp3qo4"));
        assert_eq!(link.via(), ["example2.org"]);
    }

    #[test]
    fn parse_authority_with_repeated_action() {
        let link = ParsedLink::parse(
            "matrix://example.com/r/us:example.org?action=blah&action=chat&client=element",
        )
        .unwrap();
        assert_eq!(link.authority(), Some("example.com"));
        assert_eq!(link.kind(), EntityKind::RoomAlias);
        assert_eq!(link.id(), "us:example.org");
        assert_eq!(link.action(), Some("chat"));
        assert_eq!(
            link.unknown_params(),
            [("client".to_string(), "element".to_string())]
        );
    }

    #[test]
    fn user_with_event_fails() {
        assert_eq!(
            reason("matrix:u/her:example.com/e/lol823y4bcp3qo4"),
            ParseErrorKind::EventNotAllowedForKind {
                kind: EntityKind::UserId
            }
        );
    }

    #[test]
    fn empty_identifier_fails() {
        assert_eq!(reason("matrix:roomid/"), ParseErrorKind::EmptyIdentifier);
    }

    #[test]
    fn authority_includes_port() {
        let link = ParsedLink::parse("matrix://example.com:8448/u/alice").unwrap();
        assert_eq!(link.authority(), Some("example.com:8448"));
        assert_eq!(link.id(), "alice");
    }

    #[test]
    fn empty_authority_is_absent() {
        let link = ParsedLink::parse("matrix:///u/alice").unwrap();
        assert_eq!(link.authority(), None);
        assert_eq!(link.id(), "alice");
    }

    #[test]
    fn authority_form_and_plain_form_agree() {
        let with = ParsedLink::parse("matrix://host.example/u/alice").unwrap();
        let without = ParsedLink::parse("matrix:u/alice").unwrap();
        assert_eq!(with.authority(), Some("host.example"));
        assert_eq!(without.authority(), None);
        assert_eq!(with.id(), without.id());
        assert_eq!(with.kind(), without.kind());
    }

    #[test]
    fn wrong_scheme_fails() {
        assert_eq!(
            reason("https://matrix.to/#/@alice:example.org"),
            ParseErrorKind::InvalidScheme {
                found: Some("https".to_string())
            }
        );
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert!(matches!(
            reason("MATRIX:u/alice"),
            ParseErrorKind::InvalidScheme { .. }
        ));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let link = ParsedLink::parse(" matrix:u/alice").unwrap();
        assert_eq!(link.id(), "alice");

        let link = ParsedLink::parse("\tmat\nrix:u/alice\n").unwrap();
        assert_eq!(link.kind(), EntityKind::UserId);
        assert_eq!(link.id(), "alice");
    }

    #[test]
    fn whitespace_does_not_relax_scheme_case() {
        assert_eq!(
            reason(" MATRIX:u/alice"),
            ParseErrorKind::InvalidScheme {
                found: Some("MATRIX".to_string())
            }
        );
    }

    #[test]
    fn empty_query_tokens_are_unknown_params() {
        let link = ParsedLink::parse("matrix:u/alice?a=1&&b=2").unwrap();
        assert_eq!(
            link.unknown_params(),
            [
                ("a".to_string(), "1".to_string()),
                (String::new(), String::new()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn missing_scheme_fails() {
        assert_eq!(
            reason("u/alice"),
            ParseErrorKind::InvalidScheme { found: None }
        );
    }

    #[test]
    fn malformed_authority_fails() {
        assert!(matches!(
            reason("matrix://example.com:99999/u/alice"),
            ParseErrorKind::InvalidUri(_)
        ));
    }

    #[test]
    fn leading_slash_without_authority_fails() {
        assert_eq!(
            reason("matrix:/u/alice"),
            ParseErrorKind::InvalidSegmentCount { actual: 3 }
        );
    }

    #[test]
    fn fragment_is_decoded() {
        let link = ParsedLink::parse("matrix:u/alice#hello%20world").unwrap();
        assert_eq!(link.fragment(), Some("hello world"));
    }

    #[test]
    fn empty_fragment_is_absent() {
        let link = ParsedLink::parse("matrix:u/alice#").unwrap();
        assert_eq!(link.fragment(), None);
    }

    #[test]
    fn empty_query_yields_no_params() {
        let link = ParsedLink::parse("matrix:u/alice?").unwrap();
        assert!(link.via().is_empty());
        assert_eq!(link.action(), None);
        assert!(link.unknown_params().is_empty());
    }

    #[test]
    fn bare_query_key_has_empty_value() {
        let link = ParsedLink::parse("matrix:u/alice?flag").unwrap();
        assert_eq!(link.unknown_params(), [("flag".to_string(), String::new())]);
    }

    #[test]
    fn identifiers_with_sigils() {
        let link = ParsedLink::parse("matrix:r/us:example.org/e/abc").unwrap();
        assert_eq!(link.identifier(), "#us:example.org");
        assert_eq!(link.event_identifier().as_deref(), Some("$abc"));

        let link = ParsedLink::parse("matrix:u/her:example.com").unwrap();
        assert_eq!(link.identifier(), "@her:example.com");
        assert_eq!(link.event_identifier(), None);
    }

    #[test]
    fn from_str_and_try_from_agree() {
        let input = "matrix:roomid/rid:example.org?via=a.org";
        let parsed: ParsedLink = input.parse().unwrap();
        let converted = ParsedLink::try_from(input).unwrap();
        assert_eq!(parsed, converted);
    }

    #[test]
    fn error_keeps_input() {
        let err = ParsedLink::parse("matrix:x/alice").unwrap_err();
        assert_eq!(err.input, "matrix:x/alice");
        assert_eq!(err.code(), "InvalidEntityDescriptor");
    }
}
