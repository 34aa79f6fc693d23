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

use gloo_events::EventListener;
use mobile_host_ui::config::{self, MobileHostConfig};
use mobile_host_ui::dom_session::DomHostSession;
use mobile_host_ui::responsive::WindowProbe;
use mobile_host_ui::{ResponsiveGate, SessionHandle};
use std::rc::Rc;

fn start(config: MobileHostConfig) {
    let session = SessionHandle::from(DomHostSession::attach(&config));
    let gate = ResponsiveGate::start(session, config, Rc::new(WindowProbe));
    // The gate lives as long as the page.
    std::mem::forget(gate);
}

fn main() {
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (MobileHostConfig::default(), Some(e)),
    };
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        config.log_level()
    };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    if let Some(e) = config_error {
        log::warn!("{e}; using default configuration");
    }

    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| start(config)).forget();
    } else {
        start(config);
    }
}
