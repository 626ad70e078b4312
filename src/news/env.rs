use std::collections::HashMap;

pub const FINNHUB_API_KEY: &str = "FINNHUB_API_KEY";
pub const FINNHUB_BASE_URL: &str = "FINNHUB_BASE_URL";
pub const USE_SAMPLE_DATA: &str = "USE_SAMPLE_DATA";
pub const CI: &str = "CI";

/// Source of environment variables. Looked up on every call, never cached.
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;

    /// Like `var`, but treats an empty value as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.trim().is_empty())
    }
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
