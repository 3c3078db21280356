//! HTTP middleware stack for the API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, HSTS, etc.)
//! 5. CORS (restricted to the configured client origin)
//! 6. Rate limiting (governor)

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::general_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
