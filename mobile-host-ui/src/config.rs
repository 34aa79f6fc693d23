// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration.
//!
//! The host page may define `window.__MOBILE_HOST_CONFIG` before the module
//! loads. Every field is optional; missing keys fall back to the defaults
//! below.

use crate::error::MobileHostError;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "__MOBILE_HOST_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileHostConfig {
    /// Viewports at or below this width get the mobile widget set.
    pub mobile_max_width: f64,
    pub resize_debounce_ms: u32,
    /// Wait after `orientationchange` before measuring the self-view.
    pub orientation_settle_ms: u32,
    /// Self-view liveness check and layout refresh.
    pub watchdog_period_ms: u32,
    /// Re-read of the local stream for the self-view.
    pub stream_sync_period_ms: u32,
    /// Re-scan for desktop elements that were missing at bind time.
    pub rescan_period_ms: u32,
    pub rescan_max_attempts: u32,
    /// Probe for the optional reaction capability.
    pub reaction_probe_period_ms: u32,
    pub reaction_probe_max_attempts: u32,
    pub spotlight_period_ms: u32,
    pub clock_period_ms: u32,
    pub log_level: String,
}

impl Default for MobileHostConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
            resize_debounce_ms: 250,
            orientation_settle_ms: 300,
            watchdog_period_ms: 2_000,
            stream_sync_period_ms: 1_000,
            rescan_period_ms: 1_000,
            rescan_max_attempts: 30,
            reaction_probe_period_ms: 500,
            reaction_probe_max_attempts: 20,
            spotlight_period_ms: 2_000,
            clock_period_ms: 60_000,
            log_level: "info".to_string(),
        }
    }
}

impl MobileHostConfig {
    /// Console log level, `Info` when the configured name is not recognised.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Read `window.__MOBILE_HOST_CONFIG`, or defaults when it is absent.
pub fn load() -> Result<MobileHostConfig, MobileHostError> {
    let win = web_sys::window().ok_or(MobileHostError::NoWindow)?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(MobileHostConfig::default());
    }
    from_js_value::<MobileHostConfig>(config)
        .map_err(|e| MobileHostError::Config(format!("Failed to parse {CONFIG_GLOBAL}: {e:?}")))
}
