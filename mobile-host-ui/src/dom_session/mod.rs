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

//! [`HostSession`] backed by the desktop meeting page.
//!
//! The desktop page signals its state through `data-active` attributes and a
//! participant-count label, and exposes its socket as `window.socket`. This
//! adapter is the only place that observes those; it republishes everything
//! as [`HostState`] channels.

pub mod bindings;

use crate::config::MobileHostConfig;
use crate::constants::{
    ACTIVE_ATTRIBUTE, MEETING_TITLE_ID, PARTICIPANT_COUNT_SOURCE_ID, PARTICIPANT_NAME_SELECTOR,
    SOCKET_ID_ATTRIBUTE, VIDEO_FRAME_SELECTOR, VIDEO_WRAPPER_SELECTOR,
};
use crate::desktop::DesktopControl;
use crate::dom;
use crate::session::{HostSession, HostSignal, ReactionProvider};
use crate::state::{ConnectionQuality, HostState, StateChannel};
use crate::tasks::{AttemptPolicy, PeriodicTask, TaskSpec, TaskStep};
use bindings::SourceBinding;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlVideoElement, MediaStream};

/// Desktop sources mirrored into [`HostState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MirrorSource {
    Camera,
    Microphone,
    HandRaised,
    ParticipantCount,
}

impl MirrorSource {
    const ALL: [MirrorSource; 4] = [
        MirrorSource::Camera,
        MirrorSource::Microphone,
        MirrorSource::HandRaised,
        MirrorSource::ParticipantCount,
    ];

    fn element_id(self) -> &'static str {
        match self {
            MirrorSource::Camera => DesktopControl::Camera.element_id(),
            MirrorSource::Microphone => DesktopControl::Microphone.element_id(),
            MirrorSource::HandRaised => DesktopControl::RaiseHand.element_id(),
            MirrorSource::ParticipantCount => PARTICIPANT_COUNT_SOURCE_ID,
        }
    }
}

pub struct DomHostSession {
    state: HostState,
    bindings: RefCell<Vec<(MirrorSource, SourceBinding)>>,
    rescan: RefCell<Option<PeriodicTask>>,
    socket_hooks: RefCell<Vec<Closure<dyn FnMut()>>>,
    reactions: RefCell<Option<Rc<DomReactions>>>,
}

impl DomHostSession {
    /// Bind to the desktop page. Sources that are not in the page yet are
    /// retried by a bounded re-scan.
    pub fn attach(config: &MobileHostConfig) -> Rc<Self> {
        let session = Rc::new(Self {
            state: HostState::default(),
            bindings: RefCell::new(Vec::new()),
            rescan: RefCell::new(None),
            socket_hooks: RefCell::new(Vec::new()),
            reactions: RefCell::new(None),
        });

        if session.bind_missing() > 0 {
            let weak: Weak<Self> = Rc::downgrade(&session);
            let task = PeriodicTask::spawn(
                TaskSpec {
                    name: "desktop-rescan",
                    period_ms: config.rescan_period_ms,
                    policy: AttemptPolicy::MaxAttempts(config.rescan_max_attempts),
                },
                move || match weak.upgrade() {
                    Some(session) if session.bind_missing() > 0 => TaskStep::Continue,
                    _ => TaskStep::Done,
                },
            );
            *session.rescan.borrow_mut() = Some(task);
        }
        session.hook_socket_events();
        session
    }

    /// Bind every source not bound yet. Returns how many are still missing.
    fn bind_missing(&self) -> usize {
        let mut bindings = self.bindings.borrow_mut();
        let mut missing = 0;
        for source in MirrorSource::ALL {
            if bindings.iter().any(|(bound, _)| *bound == source) {
                continue;
            }
            let Some(element) = dom::element_by_id(source.element_id()) else {
                missing += 1;
                continue;
            };
            let binding = match source {
                MirrorSource::Camera => SourceBinding::attribute(
                    &element,
                    ACTIVE_ATTRIBUTE,
                    self.state.camera_active.clone(),
                ),
                MirrorSource::Microphone => SourceBinding::attribute(
                    &element,
                    ACTIVE_ATTRIBUTE,
                    self.state.mic_active.clone(),
                ),
                MirrorSource::HandRaised => SourceBinding::attribute(
                    &element,
                    ACTIVE_ATTRIBUTE,
                    self.state.hand_raised.clone(),
                ),
                MirrorSource::ParticipantCount => {
                    SourceBinding::count(&element, self.state.participant_count.clone())
                }
            };
            match binding {
                Ok(binding) => {
                    log::debug!("mirroring #{}", source.element_id());
                    bindings.push((source, binding));
                }
                Err(e) => {
                    log::warn!("failed to observe #{}: {e}", source.element_id());
                    missing += 1;
                }
            }
        }
        missing
    }

    fn hook_socket_events(&self) {
        let Some(socket) = socket() else {
            log::debug!("window.socket not present; connection quality unavailable");
            return;
        };
        let Some(on) = js_sys::Reflect::get(&socket, &JsValue::from_str("on"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        else {
            return;
        };

        let mut hooks = self.socket_hooks.borrow_mut();
        for (event, quality) in [
            ("ping", ConnectionQuality::Good),
            ("disconnect", ConnectionQuality::Poor),
        ] {
            let channel = self.state.connection.clone();
            let hook = Closure::<dyn FnMut()>::new(move || channel.set(Some(quality)));
            if let Err(e) = on.call2(&socket, &JsValue::from_str(event), hook.as_ref()) {
                log::warn!("socket.on({event}) failed: {e:?}");
                continue;
            }
            hooks.push(hook);
        }
    }

    fn local_tile(&self) -> Option<HtmlElement> {
        let id = self.session_id()?;
        let document = dom::document().ok()?;
        let root = document.document_element()?;
        dom::query_all(&root, VIDEO_WRAPPER_SELECTOR)
            .into_iter()
            .find(|tile| tile.get_attribute(SOCKET_ID_ATTRIBUTE).as_deref() == Some(id.as_str()))
    }
}

impl HostSession for DomHostSession {
    fn session_id(&self) -> Option<String> {
        let socket = socket()?;
        js_sys::Reflect::get(&socket, &JsValue::from_str("id"))
            .ok()?
            .as_string()
    }

    fn local_stream(&self) -> Option<MediaStream> {
        self.local_tile()?
            .query_selector(VIDEO_FRAME_SELECTOR)
            .ok()??
            .dyn_into::<HtmlVideoElement>()
            .ok()?
            .src_object()
    }

    fn display_name(&self) -> Option<String> {
        self.local_tile()?
            .query_selector(PARTICIPANT_NAME_SELECTOR)
            .ok()??
            .text_content()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    fn meeting_title(&self) -> Option<String> {
        dom::text_of(MEETING_TITLE_ID)
    }

    fn state(&self) -> &HostState {
        &self.state
    }

    fn emit_signal(&self, signal: HostSignal) -> bool {
        let Some(socket) = socket() else {
            log::warn!("cannot send {}: no socket", signal.event_name());
            return false;
        };
        let emit = js_sys::Reflect::get(&socket, &JsValue::from_str("emit"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        match emit.map(|emit| emit.call1(&socket, &JsValue::from_str(signal.event_name()))) {
            Some(Ok(_)) => {
                log::info!("sent {}", signal.event_name());
                true
            }
            Some(Err(e)) => {
                log::warn!("socket.emit({}) failed: {e:?}", signal.event_name());
                false
            }
            None => false,
        }
    }

    fn reactions(&self) -> Option<Rc<dyn ReactionProvider>> {
        if let Some(existing) = self.reactions.borrow().as_ref() {
            return Some(Rc::clone(existing) as Rc<dyn ReactionProvider>);
        }
        if !reaction_manager_present() {
            return None;
        }
        let reactions = Rc::new(DomReactions {
            hand_raised: self.state.hand_raised.clone(),
        });
        *self.reactions.borrow_mut() = Some(Rc::clone(&reactions));
        Some(reactions)
    }
}

/// Raise-hand toggle through the desktop reaction manager. The hand state
/// itself is the session's own mirror of `#rm-raiseHandBtn`.
pub struct DomReactions {
    hand_raised: StateChannel<bool>,
}

impl ReactionProvider for DomReactions {
    fn hand_raised(&self) -> StateChannel<bool> {
        self.hand_raised.clone()
    }

    fn toggle_hand(&self) {
        if DesktopControl::RaiseHand.activate() {
            return;
        }
        // Older pages only expose a global toggle.
        let toggle = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("toggleHandRaise")).ok())
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        match toggle {
            Some(toggle) => {
                if let Err(e) = toggle.call0(&JsValue::NULL) {
                    log::warn!("toggleHandRaise failed: {e:?}");
                }
            }
            None => log::warn!("raise hand unavailable"),
        }
    }
}

fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn socket() -> Option<JsValue> {
    global("socket")
}

fn reaction_manager_present() -> bool {
    if global("reactionManager").is_some() {
        return true;
    }
    global("hostMeetingInstance")
        .and_then(|instance| js_sys::Reflect::get(&instance, &JsValue::from_str("reactionManager")).ok())
        .is_some_and(|manager| !manager.is_undefined() && !manager.is_null())
}
