//! System-wide constants for the stablematch matcher.

/// Largest `n` for which brute-force enumeration of all `n!` perfect
/// matchings is permitted.
pub const MAX_ENUMERATION_PARTICIPANTS: usize = 8;

/// Domain separator for the matching root hash.
pub const MATCHING_ROOT_DOMAIN: &[u8] = b"stablematch:matching_root:v1:";
