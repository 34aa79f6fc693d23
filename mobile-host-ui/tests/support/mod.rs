// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for mobile-host-ui browser tests.
//
// Provides mount/cleanup helpers, a recording mock session, stand-ins for
// the desktop page's buttons and video tiles, and a small stylesheet so the
// self-view has a real size. Individual test files stay focused on
// assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_events::EventListener;
use mobile_host_ui::config::MobileHostConfig;
use mobile_host_ui::constants::{
    CHROME_ROOT_ID, CONTROL_BAR_ID, MENU_CONTAINER_ID, SELF_VIEW_ID, SELF_VIEW_ROOT_ID,
    SOCKET_ID_ATTRIBUTE,
};
use mobile_host_ui::session::{HostSession, HostSignal, ReactionProvider, SessionHandle};
use mobile_host_ui::state::{HostState, StateChannel};
use mobile_host_ui::storage::CornerStore;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MediaStream};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Remove anything the widgets may have left behind and forget the stored
/// self-view corner.
pub fn reset_page() {
    for id in [
        CHROME_ROOT_ID,
        SELF_VIEW_ROOT_ID,
        CONTROL_BAR_ID,
        MENU_CONTAINER_ID,
        SELF_VIEW_ID,
    ] {
        while let Some(element) = gloo_utils::document().get_element_by_id(id) {
            element.remove();
        }
    }
    for toast in all(".host-notification-badge") {
        toast.remove();
    }
    CornerStore::clear();
}

/// Let observers, timers and the Yew scheduler run.
pub async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn all(selector: &str) -> Vec<Element> {
    let list = gloo_utils::document().query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn count(selector: &str) -> usize {
    all(selector).len()
}

/// Icon class of the first `<i>` inside `element`.
pub fn icon_class(element: &Element) -> String {
    element
        .query_selector("i")
        .unwrap()
        .expect("button has an icon")
        .class_name()
}

/// Give the self-view a fixed size and corner positions, as the page
/// stylesheet would.
pub fn install_self_view_styles() {
    if by_id("test-self-view-styles").is_some() {
        return;
    }
    let document = gloo_utils::document();
    let style = document.create_element("style").unwrap();
    style.set_id("test-self-view-styles");
    style.set_text_content(Some(
        ".host-self-view-container { position: fixed; width: 120px; height: 160px; }
         .position-top-left { top: 60px; left: 8px; }
         .position-top-right { top: 60px; right: 8px; }
         .position-bottom-left { bottom: 100px; left: 8px; }
         .position-bottom-right { bottom: 100px; right: 8px; }
         .host-self-view-container video { width: 100%; height: 100%; }",
    ));
    document.head().unwrap().append_child(&style).unwrap();
}

/// Test configuration with short periods.
pub fn fast_config() -> MobileHostConfig {
    MobileHostConfig {
        resize_debounce_ms: 10,
        orientation_settle_ms: 10,
        watchdog_period_ms: 30,
        stream_sync_period_ms: 30,
        rescan_period_ms: 20,
        rescan_max_attempts: 5,
        reaction_probe_period_ms: 20,
        reaction_probe_max_attempts: 3,
        spotlight_period_ms: 30,
        ..MobileHostConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Desktop page stand-ins
// ---------------------------------------------------------------------------

/// A desktop control button that counts its clicks. Removed on drop.
pub struct DesktopButton {
    pub element: HtmlElement,
    clicks: Rc<Cell<u32>>,
    _listener: EventListener,
}

impl DesktopButton {
    pub fn new(id: &str, active: Option<&str>) -> Self {
        let document = gloo_utils::document();
        let element = document
            .create_element("button")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.set_id(id);
        if let Some(active) = active {
            element.set_attribute("data-active", active).unwrap();
        }
        document.body().unwrap().append_child(&element).unwrap();

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let listener = EventListener::new(&element, "click", move |_| {
            counter.set(counter.get() + 1);
        });
        Self {
            element,
            clicks,
            _listener: listener,
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }

    pub fn set_active(&self, value: &str) {
        self.element.set_attribute("data-active", value).unwrap();
    }
}

impl Drop for DesktopButton {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// `#secondaryVideosSection`-style container. Removed on drop.
pub struct TileContainer {
    pub element: HtmlElement,
}

impl TileContainer {
    pub fn new(id: &str) -> Self {
        let document = gloo_utils::document();
        let element = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        Self { element }
    }

    /// Append a `.video-wrapper` tile for `socket_id`.
    pub fn add_tile(&self, socket_id: &str, hidden: bool) -> HtmlElement {
        let document = gloo_utils::document();
        let tile = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        tile.set_class_name("video-wrapper");
        tile.set_attribute(SOCKET_ID_ATTRIBUTE, socket_id).unwrap();
        if hidden {
            tile.style().set_property("display", "none").unwrap();
        }
        let video = document.create_element("video").unwrap();
        video.set_class_name("video-frame");
        tile.append_child(&video).unwrap();
        self.element.append_child(&tile).unwrap();
        tile
    }

    pub fn density_classes(&self) -> Vec<String> {
        let classes = self.element.class_list();
        (0..classes.length())
            .filter_map(|i| classes.item(i))
            .filter(|c| c.starts_with("mobile-host-participants-"))
            .collect()
    }
}

impl Drop for TileContainer {
    fn drop(&mut self) {
        self.element.remove();
    }
}

// ---------------------------------------------------------------------------
// Mock session
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockReactions {
    pub hand: StateChannel<bool>,
    pub toggles: Cell<u32>,
}

impl ReactionProvider for MockReactions {
    fn hand_raised(&self) -> StateChannel<bool> {
        self.hand.clone()
    }

    fn toggle_hand(&self) {
        self.toggles.set(self.toggles.get() + 1);
        self.hand.update(|raised| !raised);
    }
}

/// Records every outbound call.
pub struct MockSession {
    pub id: Option<String>,
    pub state: HostState,
    pub signals: RefCell<Vec<HostSignal>>,
    pub confirm_answer: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
    pub reactions: RefCell<Option<Rc<MockReactions>>>,
    pub stream: RefCell<Option<MediaStream>>,
}

impl MockSession {
    pub fn new(id: &str) -> Rc<Self> {
        Rc::new(Self {
            id: Some(id.to_string()),
            state: HostState::default(),
            signals: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
            prompts: RefCell::new(Vec::new()),
            reactions: RefCell::new(None),
            stream: RefCell::new(None),
        })
    }

    pub fn handle(self: &Rc<Self>) -> SessionHandle {
        SessionHandle::from(self.clone())
    }

    pub fn with_reactions(self: &Rc<Self>) -> Rc<MockReactions> {
        let reactions = Rc::new(MockReactions::default());
        *self.reactions.borrow_mut() = Some(reactions.clone());
        reactions
    }
}

impl HostSession for MockSession {
    fn session_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn local_stream(&self) -> Option<MediaStream> {
        self.stream.borrow().clone()
    }

    fn display_name(&self) -> Option<String> {
        Some("Test Host".to_string())
    }

    fn state(&self) -> &HostState {
        &self.state
    }

    fn emit_signal(&self, signal: HostSignal) -> bool {
        self.signals.borrow_mut().push(signal);
        true
    }

    fn reactions(&self) -> Option<Rc<dyn ReactionProvider>> {
        self.reactions
            .borrow()
            .clone()
            .map(|r| r as Rc<dyn ReactionProvider>)
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }
}

// ---------------------------------------------------------------------------
// Synthetic input
// ---------------------------------------------------------------------------

pub fn mouse_event(kind: &str, x: i32, y: i32) -> web_sys::MouseEvent {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    web_sys::MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

pub fn dispatch_resize() {
    let event = web_sys::Event::new("resize").unwrap();
    gloo_utils::window().dispatch_event(&event).unwrap();
}
