//! Entity kinds addressable by a matrix URI.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ROOM_ALIAS_TAG, ROOM_ID_TAG, USER_TAG};

/// The kind of entity a matrix URI refers to.
///
/// Selected by the first path segment of the URI.
///
/// # Examples
///
/// ```
/// use matrix_uri::EntityKind;
///
/// assert_eq!(EntityKind::from_tag("roomid"), Some(EntityKind::RoomId));
/// assert_eq!(EntityKind::RoomAlias.tag(), "r");
/// assert_eq!(EntityKind::UserId.sigil(), '@');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// A user, tagged `u`
    UserId,
    /// A room alias, tagged `r`
    RoomAlias,
    /// A room identifier, tagged `roomid`
    RoomId,
}

impl EntityKind {
    /// Maps a path tag to its entity kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            USER_TAG => Some(Self::UserId),
            ROOM_ALIAS_TAG => Some(Self::RoomAlias),
            ROOM_ID_TAG => Some(Self::RoomId),
            _ => None,
        }
    }

    /// Returns the path tag used for this kind in a URI.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::UserId => USER_TAG,
            Self::RoomAlias => ROOM_ALIAS_TAG,
            Self::RoomId => ROOM_ID_TAG,
        }
    }

    /// Returns the variant name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserId => "UserId",
            Self::RoomAlias => "RoomAlias",
            Self::RoomId => "RoomId",
        }
    }

    /// Returns the sigil that prefixes this kind of identifier in the
    /// protocol's native syntax.
    #[must_use]
    pub const fn sigil(self) -> char {
        match self {
            Self::UserId => '@',
            Self::RoomAlias => '#',
            Self::RoomId => '!',
        }
    }

    /// Returns true if a URI of this kind may carry an event reference.
    #[must_use]
    pub const fn allows_event(self) -> bool {
        match self {
            Self::UserId => false,
            Self::RoomAlias | Self::RoomId => true,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = &'static str;

    /// Parses a path tag (`u`, `r` or `roomid`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or("unknown entity tag; expected 'u', 'r' or 'roomid'")
    }
}
