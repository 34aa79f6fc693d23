/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the mobile host controls.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors returned by setup entry points.
///
/// Reactive code paths (observers, timers, click handlers) never return these;
/// they log and carry on.
#[derive(Debug, Error)]
pub enum MobileHostError {
    /// `window` is not reachable (non-browser environment).
    #[error("window is not available")]
    NoWindow,

    /// The document or its `<body>` is not reachable.
    #[error("document is not available")]
    NoDocument,

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// `window.__MOBILE_HOST_CONFIG` could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsValue> for MobileHostError {
    fn from(value: JsValue) -> Self {
        MobileHostError::Dom(format!("{value:?}"))
    }
}
