// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decides whether the mobile widget set should be present.
//!
//! The gate re-evaluates on (debounced) window resize. Crossing into the
//! mobile layout mounts a fresh [`Controller`]; crossing out tears it down.

use crate::config::MobileHostConfig;
use crate::controller::Controller;
use crate::session::SessionHandle;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::RefCell;
use std::rc::Rc;

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user agent pattern")
});

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent)
}

pub fn is_mobile_layout(viewport_width: f64, user_agent: &str, max_width: f64) -> bool {
    viewport_width <= max_width || is_mobile_user_agent(user_agent)
}

/// Source of the viewport width and user agent.
pub trait LayoutProbe {
    fn viewport_width(&self) -> f64;
    fn user_agent(&self) -> String;
}

/// Reads `window.innerWidth` and `navigator.userAgent`.
pub struct WindowProbe;

impl LayoutProbe for WindowProbe {
    fn viewport_width(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(f64::MAX)
    }

    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }
}

struct Gate {
    session: SessionHandle,
    config: MobileHostConfig,
    probe: Rc<dyn LayoutProbe>,
    controller: RefCell<Option<Controller>>,
    pending: RefCell<Option<Timeout>>,
}

impl Gate {
    fn evaluate(&self) {
        let mobile = is_mobile_layout(
            self.probe.viewport_width(),
            &self.probe.user_agent(),
            self.config.mobile_max_width,
        );
        let mut controller = self.controller.borrow_mut();
        let attached = controller.as_ref().map(Controller::chrome_attached);
        match (mobile, attached) {
            (true, Some(true)) => {}
            (true, _) => {
                // A stale controller is torn down before the fresh mount.
                controller.take();
                match Controller::mount(self.session.clone(), self.config.clone()) {
                    Ok(mounted) => *controller = Some(mounted),
                    Err(e) => log::error!("failed to mount mobile host controls: {e}"),
                }
            }
            (false, Some(_)) => {
                if let Some(mounted) = controller.take() {
                    mounted.teardown();
                }
            }
            (false, None) => {}
        }
    }
}

/// Mounts and unmounts the widget set as the viewport crosses the mobile
/// threshold. Dropping the gate removes the resize listener and tears down
/// whatever is mounted.
pub struct ResponsiveGate {
    gate: Rc<Gate>,
    _resize: Option<EventListener>,
}

impl ResponsiveGate {
    pub fn start(
        session: SessionHandle,
        config: MobileHostConfig,
        probe: Rc<dyn LayoutProbe>,
    ) -> Self {
        let debounce_ms = config.resize_debounce_ms;
        let gate = Rc::new(Gate {
            session,
            config,
            probe,
            controller: RefCell::new(None),
            pending: RefCell::new(None),
        });
        gate.evaluate();

        let resize = web_sys::window().map(|window| {
            let weak = Rc::downgrade(&gate);
            EventListener::new(&window, "resize", move |_| {
                let Some(gate) = weak.upgrade() else {
                    return;
                };
                let target = Rc::downgrade(&gate);
                // Replacing the pending timeout cancels it.
                *gate.pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
                    if let Some(gate) = target.upgrade() {
                        gate.evaluate();
                    }
                }));
            })
        });

        Self {
            gate,
            _resize: resize,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.gate.controller.borrow().is_some()
    }
}

impl Drop for ResponsiveGate {
    fn drop(&mut self) {
        self.gate.pending.borrow_mut().take();
        self.gate.controller.borrow_mut().take();
    }
}
