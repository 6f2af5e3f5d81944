pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Backend root, taken from `API_URL` at build time.
pub fn get_backend_url() -> String {
    resolve_backend_url(option_env!("API_URL"))
}

pub fn resolve_backend_url(configured: Option<&str>) -> String {
    match configured {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

/// Joins a backend root and a route with exactly one `/` between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
