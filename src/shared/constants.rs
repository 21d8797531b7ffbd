/// Separator between segments of a string jurisdiction path ("kigali-nyarugenge")
pub const PATH_SEPARATOR: char = '-';

/// Prefix of generated administrator ids
pub const ADMIN_ID_PREFIX: &str = "admin";

// =============================================================================
// LEVEL RANKS
// =============================================================================

/// Rank of a national administrator in route guards
pub const RANK_NATIONAL: u8 = 4;

/// Rank of a provincial administrator in route guards
pub const RANK_PROVINCIAL: u8 = 3;

/// Rank of a district administrator in route guards
pub const RANK_DISTRICT: u8 = 2;

/// Rank of a sector administrator in route guards
pub const RANK_SECTOR: u8 = 1;
