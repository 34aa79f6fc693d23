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

//! mobile-host-ui library root.
//!
//! Mobile host controls layered over the desktop meeting page: a control bar,
//! a slide-up host menu and a draggable self-view, kept in sync with the
//! desktop controls they stand in for.
//!
//! Modules are public so that integration tests (under `tests/`) can drive
//! them. The binary entry-point lives in `main.rs`.

pub mod actions;
pub mod components;
pub mod config;
pub mod constants;
pub mod controller;
pub mod desktop;
pub mod dom;
pub mod dom_session;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod responsive;
pub mod session;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod toast;

pub use controller::Controller;
pub use error::MobileHostError;
pub use responsive::ResponsiveGate;
pub use session::{HostSession, SessionHandle};
