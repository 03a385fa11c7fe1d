//! Frontend Configuration
//!
//! Compile-time defaults (`TODO_API_BASE_URL`, `TODO_PAGE_SIZE`,
//! `TODO_LOG_LEVEL`) with a runtime base URL override read from
//! `<meta name="todo-api-base" content="...">`.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3000;
const BASE_URL_META: &str = "meta[name=\"todo-api-base\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend root, without trailing slash
    pub api_base_url: String,
    pub page_size: usize,
    pub log_level: LevelFilter,
    /// How long error/notice banners stay visible
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LevelFilter::Info,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build from raw values; anything missing or invalid keeps its default
    pub fn from_values(base_url: Option<&str>, page_size: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .and_then(normalize_base_url)
                .unwrap_or(defaults.api_base_url),
            page_size: page_size
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.page_size),
            log_level: log_level
                .and_then(|s| s.trim().parse::<LevelFilter>().ok())
                .unwrap_or(defaults.log_level),
            notice_timeout_ms: defaults.notice_timeout_ms,
        }
    }

    /// Values baked in at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_PAGE_SIZE"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    /// Build-time values, then the `<meta>` override from the host page
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Some(url) = meta_base_url().as_deref().and_then(normalize_base_url) {
            config.api_base_url = url;
        }
        config
    }

    /// Absolute URL for an endpoint path such as `/todos/get-all-todos`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(BASE_URL_META).ok()??;
    meta.get_attribute("content")
}
