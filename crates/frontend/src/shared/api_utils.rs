//! API utilities for frontend-backend communication
//!
//! Resolves the configured endpoint against the page origin.

/// Origin of the current page, e.g. "http://localhost:8080"
///
/// Returns `None` when window is not available.
pub fn page_origin() -> Option<String> {
    let window = web_sys::window()?;
    window.location().origin().ok()
}

/// Turn a configured endpoint into a full URL
///
/// Absolute URLs are returned unchanged; paths are joined with `origin`.
///
/// # Example
/// ```rust
/// # use tsx_optimizer_frontend::shared::api_utils::resolve_endpoint;
/// assert_eq!(
///     resolve_endpoint("/optimize-code", Some("http://127.0.0.1:8080")),
///     "http://127.0.0.1:8080/optimize-code"
/// );
/// ```
pub fn resolve_endpoint(configured: &str, origin: Option<&str>) -> String {
    if configured.starts_with("http://") || configured.starts_with("https://") {
        return configured.to_string();
    }
    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            configured.trim_start_matches('/')
        ),
        None => configured.to_string(),
    }
}

/// Build the endpoint URL for the current page
pub fn endpoint_url(configured: &str) -> String {
    resolve_endpoint(configured, page_origin().as_deref())
}
