use std::time::Duration;

/// Base URL used when the build does not set `WORDSUZ_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [5, 10, 25, 50, 100];

/// Records generated when a page switches to mock data.
pub const MOCK_DATASET_SIZE: usize = 50;
/// Artificial delay applied to every mock fetch.
pub const MOCK_LATENCY: Duration = Duration::from_millis(500);

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `WORDSUZ_API_URL` as captured at compile time; the wasm bundle
    /// has no process environment to consult at run time.
    pub fn from_build_env() -> Self {
        match option_env!("WORDSUZ_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Joins `path` onto the base URL, adding the leading slash if missing.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
