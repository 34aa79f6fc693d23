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

//! Transient host notifications.

use crate::constants::{TOAST_FADE_MS, TOAST_VISIBLE_MS};
use crate::dom;
use crate::error::MobileHostError;
use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "linear-gradient(135deg, #10b981, #059669)",
            Severity::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
            Severity::Info => "linear-gradient(135deg, #3b82f6, #2563eb)",
        }
    }
}

/// Append a toast to `<body>`. It fades after three seconds and removes
/// itself once the fade is over.
pub fn show_toast(message: &str, severity: Severity) -> Result<HtmlElement, MobileHostError> {
    let document = dom::document()?;
    let body = dom::body()?;
    let toast = dom::append_element(&document, &body, "div", "host-notification-badge show")?;
    toast.style().set_property("background", severity.background())?;

    let icon = document.create_element("i")?;
    icon.set_class_name("fas fa-crown");
    toast.append_child(&icon)?;
    toast.append_child(&document.create_text_node(&format!(" {message}")))?;

    let fading = toast.clone();
    Timeout::new(TOAST_VISIBLE_MS, move || {
        let _ = fading.class_list().remove_1("show");
        Timeout::new(TOAST_FADE_MS, move || fading.remove()).forget();
    })
    .forget();

    log::debug!("toast ({severity:?}): {message}");
    Ok(toast)
}

/// Fire-and-forget variant for click handlers.
pub fn notify(message: &str, severity: Severity) {
    if let Err(e) = show_toast(message, severity) {
        log::warn!("could not show notification {message:?}: {e}");
    }
}
