use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::engine::llm_client::DEFAULT_API_BASE;
use crate::engine::prompt_builder::DEFAULT_LANGUAGE;

/// Persisted preferences. The API key is deliberately not one of them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,

    /// Language the model is asked to write in.
    pub output_language: String,

    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            output_language: DEFAULT_LANGUAGE.into(),
            api_base_url: DEFAULT_API_BASE.into(),
            request_timeout_secs: 60,
        }
    }
}

impl AppSettings {
    pub const UI_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=2.0;

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Clamps values a hand-edited file could have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.ui_scale.is_finite() {
            self.ui_scale = defaults.ui_scale;
        }
        self.ui_scale = self
            .ui_scale
            .clamp(*Self::UI_SCALE_RANGE.start(), *Self::UI_SCALE_RANGE.end());

        if self.output_language.trim().is_empty() {
            self.output_language = defaults.output_language;
        }
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = defaults.api_base_url;
        }

        self
    }
}
