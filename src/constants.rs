/// Maximum number of samples accepted in a single timing sequence
/// A typing sample of a long passphrase stays well below this
pub const MAX_TIMING_SAMPLES: usize = 4096;

/// Default HTTP bind address
pub const DEFAULT_HTTP_ADDRESS: &str = "localhost:8082";

/// Default per-request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Default idle timeout for pooled storage connections in seconds
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;

/// Maximum pooled SQLite connections
pub const MAX_DB_CONNECTIONS: u32 = 5;

// =============================================================================
// Response Envelope
// =============================================================================

/// Envelope status for successful requests
pub const STATUS_OK: &str = "OK";

/// Envelope status for failed requests
pub const STATUS_ERROR: &str = "ERROR";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a request body that is not valid JSON for the endpoint
pub const ERR_DECODE_REQUEST: &str = "failed to decode request";

/// Error message for an empty username path parameter
pub const ERR_INVALID_USERNAME: &str = "invalid username";

/// Error message for a duplicate username on save
pub const ERR_USER_EXISTS: &str = "user already exists";

/// Error message for lookups and deletes of an unknown username
pub const ERR_USER_NOT_FOUND: &str = "user not found";

/// Error message for a request that exceeded the configured timeout
pub const ERR_REQUEST_TIMEOUT: &str = "request timed out";

/// Error message for a middleware failure other than a timeout
pub const ERR_INTERNAL: &str = "internal server error";
