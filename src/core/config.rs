//! Landing page configuration.
//!
//! Every timing, threshold and storage key the controller uses lives here.
//! Defaults reproduce the behavior of the shipped page; a host page can
//! override any subset with a JSON blob in `<body data-landing-config='...'>`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Local storage key holding the submission backup list
pub const DEFAULT_STORAGE_KEY: &str = "lawApplications";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid landing config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Tunables for the landing page controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    /// Local storage key for the submission backup list
    pub storage_key: String,
    /// Simulated network latency of a form submission
    pub submit_delay_ms: u32,
    /// Success modal closes on its own after this long
    pub success_auto_close_ms: u32,
    /// Advertisement modal opens this long after page-ready
    pub ad_popup_delay_ms: u32,
    /// Delay between closing the ad and scrolling to the form
    pub ad_scroll_delay_ms: u32,
    /// Total duration of a stat counter animation
    pub counter_duration_ms: u32,
    /// Nominal frame length used to derive the counter frame count
    pub counter_frame_ms: u32,
    /// Visibility ratio that triggers the stats counters
    pub stats_threshold: f64,
    /// Visibility ratio that triggers card and section reveals
    pub reveal_threshold: f64,
    /// Per-index delay between card reveals of the same batch
    pub card_stagger_ms: u32,
    /// Scroll offset beyond which the header gets the strong shadow
    pub header_shadow_offset: f64,
    /// Hero translation per scrolled pixel
    pub parallax_factor: f64,
    /// Lifetime of a ripple element
    pub ripple_duration_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            submit_delay_ms: 1500,
            success_auto_close_ms: 5000,
            ad_popup_delay_ms: 2000,
            ad_scroll_delay_ms: 300,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            stats_threshold: 0.5,
            reveal_threshold: 0.1,
            card_stagger_ms: 100,
            header_shadow_offset: 100.0,
            parallax_factor: 0.5,
            ripple_duration_ms: 600,
        }
    }
}

impl LandingConfig {
    /// Parse a partial JSON override; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional override, falling back to defaults when absent or blank.
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ConfigError> {
        match json.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.into())
    }

    pub fn success_auto_close(&self) -> Duration {
        Duration::from_millis(self.success_auto_close_ms.into())
    }

    pub fn ad_popup_delay(&self) -> Duration {
        Duration::from_millis(self.ad_popup_delay_ms.into())
    }

    pub fn ad_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.ad_scroll_delay_ms.into())
    }

    pub fn ripple_duration(&self) -> Duration {
        Duration::from_millis(self.ripple_duration_ms.into())
    }

    /// Number of counter updates in one animation (2000 / 16 = 125 by default)
    pub fn counter_frames(&self) -> f64 {
        f64::from(self.counter_duration_ms) / f64::from(self.counter_frame_ms.max(1))
    }
}
