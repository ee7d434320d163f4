//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Maximum number of password bytes fed to the hash function
pub const MAX_PASSWORD_BYTES: usize = 72;

// =============================================================================
// Pagination
// =============================================================================

/// First page number (pages are 1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound for a single page
pub const MAX_PAGE_SIZE: u64 = 100;

/// Ascending sort parameter value
pub const SORT_ASC: &str = "asc";

/// Descending sort parameter value
pub const SORT_DESC: &str = "desc";

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT lifetime in seconds
pub const DEFAULT_JWT_EXPIRES_IN_SECONDS: i64 = 3600;

/// Longest accepted JWT lifetime in seconds (one year)
pub const MAX_JWT_EXPIRES_IN_SECONDS: i64 = 365 * 24 * 3600;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
