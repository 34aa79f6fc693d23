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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Floating, draggable preview of the local camera.
//!
//! At rest the widget is pinned to a corner by a CSS class. While dragged it
//! is placed by inline `left`/`top`. Releasing it snaps to the corner whose
//! quadrant holds its centre and persists that corner.

use crate::constants::{SELF_HAND_INDICATOR_ID, SELF_VIEW_ID};
use crate::drag::DragSession;
use crate::geometry::{Corner, Rect, Viewport};
use crate::session::SessionHandle;
use crate::state::Subscription;
use crate::storage::CornerStore;
use crate::tasks::{AttemptPolicy, PeriodicTask, TaskSpec, TaskStep};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlVideoElement, MediaStream, MouseEvent, TouchEvent};
use yew::prelude::*;

/// Where the widget sits. Corner classes and inline coordinates never apply
/// at the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Corner(Corner),
    Free { left: f64, top: f64 },
}

impl Placement {
    pub fn corner_class(self) -> Option<&'static str> {
        match self {
            Placement::Corner(corner) => Some(corner.class_name()),
            Placement::Free { .. } => None,
        }
    }

    pub fn inline_style(self) -> Option<String> {
        match self {
            Placement::Corner(_) => None,
            Placement::Free { left, top } => Some(format!(
                "left: {left}px; top: {top}px; right: auto; bottom: auto;"
            )),
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    /// A resize or rotation started; re-snap once it settles.
    ViewportEvent { settle_ms: u32 },
    ViewportChanged,
    HandRaised(bool),
}

#[derive(Properties, PartialEq)]
pub struct SelfViewProps {
    pub session: SessionHandle,
    pub stream_sync_period_ms: u32,
    pub resize_debounce_ms: u32,
    pub orientation_settle_ms: u32,
}

pub struct SelfView {
    placement: Placement,
    drag: Option<DragSession>,
    hand_raised: bool,
    display_name: Option<String>,
    node_ref: NodeRef,
    video_ref: NodeRef,
    listeners: Vec<EventListener>,
    stream_sync: Option<PeriodicTask>,
    pending_viewport: Option<Timeout>,
    _hand_subscription: Subscription,
}

impl Component for SelfView {
    type Message = Msg;
    type Properties = SelfViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = &ctx.props().session;
        let hand_raised = session.state().hand_raised.clone();
        let on_hand = ctx.link().callback(Msg::HandRaised);

        Self {
            placement: Placement::Corner(CornerStore::load_or_default()),
            drag: None,
            hand_raised: hand_raised.get(),
            display_name: session.display_name(),
            node_ref: NodeRef::default(),
            video_ref: NodeRef::default(),
            listeners: Vec::new(),
            stream_sync: None,
            pending_viewport: None,
            _hand_subscription: hand_raised.subscribe(move |raised| on_hand.emit(*raised)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Press { x, y } => {
                let Some(element) = self.node_ref.cast::<HtmlElement>() else {
                    return false;
                };
                let rect = Rect::from(&element.get_bounding_client_rect());
                self.drag = Some(DragSession::begin((x, y), rect));
                self.placement = Placement::Free {
                    left: rect.left,
                    top: rect.top,
                };
                true
            }
            Msg::Move { x, y } => {
                let (Some(drag), Some(viewport)) = (self.drag, Viewport::current()) else {
                    return false;
                };
                let (left, top) = drag.position_for((x, y), viewport);
                self.placement = Placement::Free { left, top };
                true
            }
            Msg::Release => match self.drag.take() {
                Some(drag) => {
                    let corner = match (self.placement, Viewport::current()) {
                        (Placement::Free { left, top }, Some(viewport)) => {
                            drag.snap_corner((left, top), viewport)
                        }
                        (Placement::Corner(corner), _) => corner,
                        (Placement::Free { .. }, None) => Corner::default(),
                    };
                    self.snap_to(corner);
                    true
                }
                None => false,
            },
            Msg::ViewportEvent { settle_ms } => {
                let link = ctx.link().clone();
                // Replacing the pending timeout cancels it.
                self.pending_viewport = Some(Timeout::new(settle_ms, move || {
                    link.send_message(Msg::ViewportChanged)
                }));
                false
            }
            Msg::ViewportChanged => {
                self.drag = None;
                let corner = self.resting_corner();
                self.snap_to(corner);
                true
            }
            Msg::HandRaised(raised) => {
                let changed = self.hand_raised != raised;
                self.hand_raised = raised;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onmousedown = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            Msg::Press {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            }
        });

        let class = classes!(
            "host-self-view-container",
            self.placement.corner_class(),
            self.drag.is_some().then_some("dragging"),
        );
        let hand_style = if self.hand_raised {
            "display: block;"
        } else {
            "display: none;"
        };

        html! {
            <div
                id={SELF_VIEW_ID}
                ref={self.node_ref.clone()}
                {class}
                style={self.placement.inline_style()}
                {onmousedown}
            >
                <video
                    ref={self.video_ref.clone()}
                    class="video-frame"
                    autoplay=true
                    playsinline=true
                ></video>
                {
                    match &self.display_name {
                        Some(name) => html! { <div class="participant-name">{ name.clone() }</div> },
                        None => html! {},
                    }
                }
                <div class="host-hand-raised-indicator" id={SELF_HAND_INDICATOR_ID} style={hand_style}>
                    <i class="fas fa-hand-paper"></i>
                    {" Hand Raised"}
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(video) = self.video_ref.cast::<HtmlVideoElement>() {
            video.set_muted(true);
            sync_stream(&video, &ctx.props().session);
            let session = ctx.props().session.clone();
            self.stream_sync = Some(PeriodicTask::spawn(
                TaskSpec {
                    name: "self-view-stream",
                    period_ms: ctx.props().stream_sync_period_ms,
                    policy: AttemptPolicy::Unbounded,
                },
                move || {
                    sync_stream(&video, &session);
                    TaskStep::Continue
                },
            ));
        }
        self.attach_listeners(ctx);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.listeners.clear();
        self.pending_viewport.take();
        if let Some(task) = self.stream_sync.take() {
            task.cancel();
        }
    }
}

impl SelfView {
    fn snap_to(&mut self, corner: Corner) {
        self.placement = Placement::Corner(corner);
        CornerStore::save(corner);
        log::debug!("self-view snapped to {corner}");
    }

    /// Corner for the widget's current on-screen position.
    fn resting_corner(&self) -> Corner {
        let rect = self
            .node_ref
            .cast::<HtmlElement>()
            .map(|element| Rect::from(&element.get_bounding_client_rect()));
        match (rect, Viewport::current()) {
            (Some(rect), Some(viewport)) => Corner::containing(rect.center(), viewport),
            _ => match self.placement {
                Placement::Corner(corner) => corner,
                Placement::Free { .. } => Corner::default(),
            },
        }
    }

    fn attach_listeners(&mut self, ctx: &Context<Self>) {
        let link = ctx.link();
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Mouse drags continue outside the widget.
        let on_move = link.callback(|(x, y): (f64, f64)| Msg::Move { x, y });
        self.listeners
            .push(EventListener::new(&document, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_move.emit((event.client_x() as f64, event.client_y() as f64));
                }
            }));
        let on_release = link.callback(|_: ()| Msg::Release);
        self.listeners
            .push(EventListener::new(&document, "mouseup", move |_| {
                on_release.emit(())
            }));

        let props = ctx.props();
        for (event_type, settle_ms) in [
            ("resize", props.resize_debounce_ms),
            ("orientationchange", props.orientation_settle_ms),
        ] {
            let on_viewport = link.callback(|settle_ms: u32| Msg::ViewportEvent { settle_ms });
            self.listeners
                .push(EventListener::new(&window, event_type, move |_| {
                    on_viewport.emit(settle_ms)
                }));
        }

        // Touch listeners must be non-passive to suppress scrolling.
        let Some(container) = self.node_ref.cast::<HtmlElement>() else {
            return;
        };
        let on_touch_start = link.callback(|(x, y): (f64, f64)| Msg::Press { x, y });
        self.listeners.push(EventListener::new_with_options(
            &container,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some((x, y)) = single_touch(event) {
                    event.prevent_default();
                    event.stop_propagation();
                    on_touch_start.emit((x, y));
                }
            },
        ));
        let on_touch_move = link.callback(|(x, y): (f64, f64)| Msg::Move { x, y });
        self.listeners.push(EventListener::new_with_options(
            &container,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some((x, y)) = single_touch(event) {
                    event.prevent_default();
                    on_touch_move.emit((x, y));
                }
            },
        ));
        let on_touch_end = link.callback(|_: ()| Msg::Release);
        self.listeners.push(EventListener::new_with_options(
            &container,
            "touchend",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                on_touch_end.emit(());
            },
        ));
    }
}

fn single_touch(event: &web_sys::Event) -> Option<(f64, f64)> {
    let touches = event.dyn_ref::<TouchEvent>()?.touches();
    if touches.length() != 1 {
        return None;
    }
    let touch = touches.get(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Point the preview at the session's current stream if it has changed.
fn sync_stream(video: &HtmlVideoElement, session: &SessionHandle) {
    let Some(stream) = session.local_stream() else {
        return;
    };
    let current = video.src_object();
    if current.as_ref().is_some_and(|current| same_stream(current, &stream)) {
        return;
    }
    log::debug!("self-view stream replaced");
    video.set_src_object(Some(&stream));
}

fn same_stream(a: &MediaStream, b: &MediaStream) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}
