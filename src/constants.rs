//! Constants for matrix URI parsing.

/// The URI scheme. Matched case-sensitively.
pub const SCHEME: &str = "matrix";

/// Path tag for user identifiers.
pub const USER_TAG: &str = "u";

/// Path tag for room aliases.
pub const ROOM_ALIAS_TAG: &str = "r";

/// Path tag for room identifiers.
pub const ROOM_ID_TAG: &str = "roomid";

/// Path tags accepted in front of an event identifier.
pub const EVENT_TAGS: [&str; 2] = ["e", "event"];

/// Query key carrying a routing hint. May repeat.
pub const VIA_PARAM: &str = "via";

/// Query key carrying the requested action. The last occurrence wins.
pub const ACTION_PARAM: &str = "action";
