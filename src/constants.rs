/// Default base URL of the Ahrefs REST API
pub const DEFAULT_BASE_URL: &str = "https://api.ahrefs.com";
/// Default per-attempt request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of calls admitted per rate limit window
pub const DEFAULT_RATE_LIMIT_PER_MIN: i64 = 60;
/// Length of the rate limit window in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECS: u64 = 60;
/// Default header carrying the credential in header auth mode
pub const DEFAULT_API_KEY_HEADER: &str = "Authorization";
/// Default prefix placed before the credential in the auth header
pub const DEFAULT_API_KEY_PREFIX: &str = "Bearer ";
/// Default query parameter carrying the credential in query auth mode
pub const DEFAULT_API_KEY_QUERY_PARAM: &str = "token";
/// Default transport retry budget, shared by connect, read and status retries
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default exponential backoff factor in seconds
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.5;
/// Parameter key that overrides the derived request path
pub const PATH_OVERRIDE_KEY: &str = "path";
/// Statuses retried by the transport
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];
/// Statuses whose `Retry-After` header replaces the computed backoff
pub const RETRY_AFTER_STATUSES: [u16; 2] = [429, 503];
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("ahrefs-client/", env!("CARGO_PKG_VERSION"));
