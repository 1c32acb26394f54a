//! Fixed cross-origin policy applied to every API route.

pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Union of the verbs the API routes accept
pub const CORS_ALLOW_METHODS: &str = "POST, GET, OPTIONS";

pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
