// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Browser tests for the desktop-page session adapter: `window.socket`
// wiring, the local tile lookup, and the bounded re-scan for desktop
// controls that show up late.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use js_sys::{Array, Function, Object, Reflect};
use mobile_host_ui::constants::{REMOTE_CONTAINER_ID, SELF_HAND_INDICATOR_ID};
use mobile_host_ui::controller::mount_self_view;
use mobile_host_ui::desktop::DesktopControl;
use mobile_host_ui::dom_session::DomHostSession;
use mobile_host_ui::session::HostSignal;
use mobile_host_ui::state::ConnectionQuality;
use mobile_host_ui::{Controller, HostSession, SessionHandle};
use support::{by_id, fast_config, reset_page, settle, DesktopButton, TileContainer};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{HtmlVideoElement, MediaStream};
use yew::platform::time::sleep;

wasm_bindgen_test_configure!(run_in_browser);

/// Stand-in for the page's socket.io client. `on` stores handlers by event
/// name and `emit` records event names. Removed from `window` on drop.
struct FakeSocket {
    socket: Object,
}

impl FakeSocket {
    fn install(id: &str) -> Self {
        let socket = Object::new();
        Reflect::set(&socket, &"id".into(), &id.into()).unwrap();
        Reflect::set(&socket, &"handlers".into(), &Object::new()).unwrap();
        Reflect::set(&socket, &"emitted".into(), &Array::new()).unwrap();
        let on = Function::new_with_args("event, handler", "this.handlers[event] = handler;");
        let emit = Function::new_with_args("event", "this.emitted.push(event);");
        Reflect::set(&socket, &"on".into(), &on).unwrap();
        Reflect::set(&socket, &"emit".into(), &emit).unwrap();
        Reflect::set(&gloo_utils::window(), &"socket".into(), &socket).unwrap();
        Self { socket }
    }

    fn fire(&self, event: &str) {
        let handlers = Reflect::get(&self.socket, &"handlers".into()).unwrap();
        let handler: Function = Reflect::get(&handlers, &event.into())
            .unwrap()
            .dyn_into()
            .expect("handler registered");
        handler.call0(&JsValue::NULL).unwrap();
    }

    fn emitted(&self) -> Vec<String> {
        let emitted: Array = Reflect::get(&self.socket, &"emitted".into())
            .unwrap()
            .dyn_into()
            .unwrap();
        emitted.iter().filter_map(|v| v.as_string()).collect()
    }
}

impl Drop for FakeSocket {
    fn drop(&mut self) {
        Reflect::delete_property(&gloo_utils::window().into(), &"socket".into()).ok();
    }
}

fn set_global(name: &str, value: &JsValue) {
    Reflect::set(&gloo_utils::window(), &name.into(), value).unwrap();
}

fn clear_global(name: &str) {
    Reflect::delete_property(&gloo_utils::window().into(), &name.into()).ok();
}

// ---------------------------------------------------------------------------
// Socket
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn session_id_and_signals_go_through_window_socket() {
    let socket = FakeSocket::install("host-1");
    let session = DomHostSession::attach(&fast_config());

    assert_eq!(session.session_id().as_deref(), Some("host-1"));
    assert!(session.emit_signal(HostSignal::AdmitAll));
    assert!(session.emit_signal(HostSignal::MuteAll));
    assert_eq!(
        socket.emitted(),
        vec!["admit-all-participants", "mute-all-participants"]
    );
}

#[wasm_bindgen_test]
async fn no_socket_means_no_id_and_no_signal() {
    clear_global("socket");
    let session = DomHostSession::attach(&fast_config());
    assert_eq!(session.session_id(), None);
    assert!(!session.emit_signal(HostSignal::AdmitAll));
    assert_eq!(session.state().connection.get(), None);
}

#[wasm_bindgen_test]
async fn socket_events_set_connection_quality() {
    let socket = FakeSocket::install("host-1");
    let session = DomHostSession::attach(&fast_config());
    assert_eq!(session.state().connection.get(), None);

    socket.fire("ping");
    assert_eq!(
        session.state().connection.get(),
        Some(ConnectionQuality::Good)
    );
    socket.fire("disconnect");
    assert_eq!(
        session.state().connection.get(),
        Some(ConnectionQuality::Poor)
    );
}

// ---------------------------------------------------------------------------
// Local tile
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn local_stream_and_name_come_from_own_tile() {
    let _socket = FakeSocket::install("host-1");
    let container = TileContainer::new(REMOTE_CONTAINER_ID);
    container.add_tile("alice", false);
    let mine = container.add_tile("host-1", false);
    let name = gloo_utils::document().create_element("div").unwrap();
    name.set_class_name("participant-name");
    name.set_text_content(Some("  Dana  "));
    mine.append_child(&name).unwrap();
    let stream = MediaStream::new().unwrap();
    let video: HtmlVideoElement = mine
        .query_selector("video")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    video.set_src_object(Some(&stream));

    let session = DomHostSession::attach(&fast_config());
    assert_eq!(session.display_name().as_deref(), Some("Dana"));
    assert_eq!(session.local_stream().map(|s| s.id()), Some(stream.id()));
}

// ---------------------------------------------------------------------------
// Desktop controls
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn late_control_is_bound_by_rescan() {
    clear_global("socket");
    let session = DomHostSession::attach(&fast_config());
    assert!(session.state().mic_active.get(), "default before binding");

    let mic = DesktopButton::new(DesktopControl::Microphone.element_id(), Some("false"));
    sleep(Duration::from_millis(60)).await;
    assert!(!session.state().mic_active.get());

    mic.set_active("true");
    settle().await;
    assert!(session.state().mic_active.get());
}

#[wasm_bindgen_test]
async fn rescan_gives_up_after_attempt_budget() {
    clear_global("socket");
    let config = fast_config();
    let session = DomHostSession::attach(&config);
    let budget = config.rescan_period_ms * (config.rescan_max_attempts + 2);
    sleep(Duration::from_millis(budget as u64)).await;

    let _camera = DesktopButton::new(DesktopControl::Camera.element_id(), Some("false"));
    sleep(Duration::from_millis(60)).await;
    assert!(session.state().camera_active.get(), "never bound");
}

#[wasm_bindgen_test]
async fn hand_is_mirrored_without_reaction_manager() {
    reset_page();
    clear_global("reactionManager");
    clear_global("hostMeetingInstance");
    let button = DesktopButton::new(DesktopControl::RaiseHand.element_id(), Some("false"));
    let session = DomHostSession::attach(&fast_config());
    assert!(session.reactions().is_none());
    let handle = SessionHandle::from(session.clone());
    let root = mount_self_view(&handle, &fast_config()).unwrap();
    settle().await;

    let badge = by_id(SELF_HAND_INDICATOR_ID).unwrap();
    assert_eq!(badge.style().get_property_value("display").unwrap(), "none");

    button.set_active("true");
    settle().await;
    assert!(session.state().hand_raised.get());
    assert_eq!(badge.style().get_property_value("display").unwrap(), "block");

    drop(root);
    reset_page();
}

#[wasm_bindgen_test]
async fn reaction_manager_shares_the_mirrored_hand() {
    reset_page();
    set_global("reactionManager", &Object::new());
    let button = DesktopButton::new(DesktopControl::RaiseHand.element_id(), Some("false"));
    let session = DomHostSession::attach(&fast_config());
    let reactions = session.reactions().expect("reaction manager present");
    assert!(reactions.hand_raised() == session.state().hand_raised);

    let controller = Controller::mount(SessionHandle::from(session.clone()), fast_config()).unwrap();
    settle().await;
    button.set_active("true");
    settle().await;
    assert!(session.state().hand_raised.get());

    controller.teardown();
    clear_global("reactionManager");
    reset_page();
}
