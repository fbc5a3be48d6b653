//! Client configuration.

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/admin";

/// Environment variable holding the admin API base URL.
const BASE_URL_VAR: &str = "ADMIN_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the admin API, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build a config from the environment.
    ///
    /// Resolution order:
    /// - `ADMIN_API_URL` at runtime (native builds)
    /// - `ADMIN_API_URL` at compile time (the only option for wasm builds)
    /// - `DEFAULT_BASE_URL`
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .and_then(non_empty)
            .or_else(|| option_env!("ADMIN_API_URL").map(str::to_string).and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Absolute URL of a path below the base, e.g. `bus/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://example.test/api/admin/ ");
        assert_eq!(config.base_url, "http://example.test/api/admin");
        assert_eq!(config.url("/bus"), "http://example.test/api/admin/bus");
        assert_eq!(config.url("schedule/4"), "http://example.test/api/admin/schedule/4");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().url("route"), "http://localhost:8080/api/admin/route");
    }
}
