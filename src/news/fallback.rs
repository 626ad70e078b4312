use std::sync::Arc;

use crate::news::env::{Environment, CI, FINNHUB_API_KEY, USE_SAMPLE_DATA};

const TRUTHY: [&str; 3] = ["1", "true", "yes"];

pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    TRUTHY.iter().any(|token| value.eq_ignore_ascii_case(token))
}

/// Decides whether sample data should be served instead of calling Finnhub.
#[derive(Clone)]
pub struct FallbackSelector {
    env: Arc<dyn Environment>,
}

impl FallbackSelector {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self { env }
    }

    pub fn use_sample_data(&self) -> bool {
        let forced = self
            .env
            .var(USE_SAMPLE_DATA)
            .is_some_and(|value| is_truthy(&value));
        if forced {
            return true;
        }

        let in_ci = self.env.var(CI).is_some_and(|value| is_truthy(&value));
        in_ci && self.env.non_empty(FINNHUB_API_KEY).is_none()
    }
}
