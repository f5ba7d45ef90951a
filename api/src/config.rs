//! Base-address configuration for the remote API.
//!
//! The address is supplied at build time through the `EVENTRY_API_URL`
//! environment variable (the client is a static wasm bundle, so there is no
//! process environment to read at runtime). Local development falls back to
//! the conventional dev-server address.

const DEV_FALLBACK: &str = "http://localhost:8080/api";

/// The base address every request path is resolved against.
///
/// Any trailing slash is trimmed so paths can always be written as
/// `"/events"`.
pub fn base_url() -> String {
    option_env!("EVENTRY_API_URL")
        .unwrap_or(DEV_FALLBACK)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
    }
}
