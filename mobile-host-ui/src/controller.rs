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

//! Owner of the mounted widget set.
//!
//! [`Controller::mount`] renders the chrome and the self-view, hides the local
//! tile, starts the layout observer and the periodic tasks, and returns the
//! handle that owns all of it. Dropping the handle (or calling
//! [`Controller::teardown`]) releases everything it created and nothing else.

use crate::components::chrome::MobileHostChromeProps;
use crate::components::self_view::SelfViewProps;
use crate::components::{MobileHostChrome, SelfView};
use crate::config::MobileHostConfig;
use crate::constants::{
    CHROME_ROOT_ID, CONTROL_BAR_ID, MAIN_VIDEO_SECTION_ID, MEETING_INFO_ID, MENU_CONTAINER_ID,
    REMOTE_CONTAINER_ID, SELF_VIEW_ID, SELF_VIEW_ROOT_ID, STATUS_INDICATORS_ID,
};
use crate::dom;
use crate::error::MobileHostError;
use crate::layout::{self, HiddenTile, ParticipantLayoutObserver};
use crate::session::SessionHandle;
use crate::state::Subscription;
use crate::tasks::{AttemptPolicy, PeriodicTask, TaskSet, TaskSpec, TaskStep};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::Element;
use yew::{AppHandle, BaseComponent, Renderer};

/// A Yew app rendered into its own `<div>` under `<body>`.
pub struct MountedRoot<C: BaseComponent> {
    handle: Option<AppHandle<C>>,
    root: Element,
}

impl<C: BaseComponent> MountedRoot<C> {
    /// Render `C` into a fresh root with id `root_id`. Elements left behind by
    /// an earlier mount (`stale_ids`, and the root id itself) are removed first.
    pub fn mount(
        root_id: &str,
        stale_ids: &[&str],
        props: C::Properties,
    ) -> Result<Self, MobileHostError> {
        for id in stale_ids.iter().copied().chain(std::iter::once(root_id)) {
            let removed = dom::remove_all_by_id(id);
            if removed > 0 {
                log::debug!("removed {removed} stale #{id}");
            }
        }
        let document = dom::document()?;
        let body = dom::body()?;
        let root = dom::append_element(&document, &body, "div", "")?;
        root.set_id(root_id);
        let root: Element = root.into();
        let handle = Renderer::<C>::with_root_and_props(root.clone(), props).render();
        Ok(Self {
            handle: Some(handle),
            root,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The root is in the document and still holds rendered content.
    pub fn is_attached(&self) -> bool {
        self.root.is_connected() && self.root.child_element_count() > 0
    }
}

impl<C: BaseComponent> Drop for MountedRoot<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
        self.root.remove();
    }
}

/// Build the control bar, host menu and header. Safe to call repeatedly; each
/// call replaces what an earlier one left in the document.
pub fn mount_chrome(
    session: &SessionHandle,
    config: &MobileHostConfig,
) -> Result<MountedRoot<MobileHostChrome>, MobileHostError> {
    MountedRoot::mount(
        CHROME_ROOT_ID,
        &[CONTROL_BAR_ID, MENU_CONTAINER_ID, MEETING_INFO_ID, STATUS_INDICATORS_ID],
        MobileHostChromeProps {
            session: session.clone(),
            clock_period_ms: config.clock_period_ms,
        },
    )
}

pub fn mount_self_view(
    session: &SessionHandle,
    config: &MobileHostConfig,
) -> Result<MountedRoot<SelfView>, MobileHostError> {
    MountedRoot::mount(
        SELF_VIEW_ROOT_ID,
        &[SELF_VIEW_ID],
        SelfViewProps {
            session: session.clone(),
            stream_sync_period_ms: config.stream_sync_period_ms,
            resize_debounce_ms: config.resize_debounce_ms,
            orientation_settle_ms: config.orientation_settle_ms,
        },
    )
}

struct Mounted {
    session: SessionHandle,
    config: MobileHostConfig,
    chrome: RefCell<Option<MountedRoot<MobileHostChrome>>>,
    self_view: RefCell<Option<MountedRoot<SelfView>>>,
    hidden_tile: RefCell<Option<HiddenTile>>,
    layout: RefCell<Option<ParticipantLayoutObserver>>,
    hand_forward: RefCell<Option<Subscription>>,
    tasks: RefCell<TaskSet>,
}

pub struct Controller {
    inner: Rc<Mounted>,
}

impl Controller {
    pub fn mount(session: SessionHandle, config: MobileHostConfig) -> Result<Self, MobileHostError> {
        let chrome = mount_chrome(&session, &config)?;
        let self_view = mount_self_view(&session, &config)?;
        let inner = Rc::new(Mounted {
            session,
            config,
            chrome: RefCell::new(Some(chrome)),
            self_view: RefCell::new(Some(self_view)),
            hidden_tile: RefCell::new(None),
            layout: RefCell::new(None),
            hand_forward: RefCell::new(None),
            tasks: RefCell::new(TaskSet::new()),
        });

        inner.hide_local_tile();
        Mounted::start_layout(&inner);
        Mounted::start_watchdog(&inner);
        Mounted::start_reaction_probe(&inner);
        Mounted::start_spotlight(&inner);
        log::info!("mobile host controls mounted");
        Ok(Self { inner })
    }

    pub fn chrome_attached(&self) -> bool {
        self.inner
            .chrome
            .borrow()
            .as_ref()
            .is_some_and(MountedRoot::is_attached)
    }

    pub fn self_view_attached(&self) -> bool {
        self.inner
            .self_view
            .borrow()
            .as_ref()
            .is_some_and(MountedRoot::is_attached)
    }

    /// Periodic tasks still scheduled.
    pub fn running_tasks(&self) -> usize {
        self.inner.tasks.borrow().running()
    }

    /// Release every root, task, observer and hidden tile. Same as dropping
    /// the controller.
    pub fn teardown(self) {
        drop(self);
    }

    fn release(&self) {
        let inner = &self.inner;
        inner.tasks.borrow_mut().cancel_all();
        inner.hand_forward.borrow_mut().take();
        inner.layout.borrow_mut().take();
        inner.hidden_tile.borrow_mut().take();
        inner.self_view.borrow_mut().take();
        inner.chrome.borrow_mut().take();
        log::info!("mobile host controls torn down");
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.release();
    }
}

impl Mounted {
    fn remote_container() -> Option<Element> {
        dom::element_by_id(REMOTE_CONTAINER_ID)
    }

    fn hide_local_tile(&self) {
        if self.hidden_tile.borrow().is_some() {
            return;
        }
        let Some(container) = Self::remote_container() else {
            return;
        };
        if let Some(tile) = HiddenTile::find_local(&container, &self.session) {
            *self.hidden_tile.borrow_mut() = Some(HiddenTile::hide(tile));
        }
    }

    fn try_attach_layout(&self) -> bool {
        if self.layout.borrow().is_some() {
            return true;
        }
        let Some(container) = Self::remote_container() else {
            return false;
        };
        match ParticipantLayoutObserver::attach(container, self.session.clone()) {
            Ok(observer) => {
                *self.layout.borrow_mut() = Some(observer);
                log::debug!("participant layout observer attached");
                true
            }
            Err(e) => {
                log::warn!("participant layout observer failed: {e}");
                false
            }
        }
    }

    fn start_layout(this: &Rc<Self>) {
        if this.try_attach_layout() {
            return;
        }
        let weak = Rc::downgrade(this);
        let task = PeriodicTask::spawn(
            TaskSpec {
                name: "layout-observer",
                period_ms: this.config.rescan_period_ms,
                policy: AttemptPolicy::MaxAttempts(this.config.rescan_max_attempts),
            },
            move || match weak.upgrade() {
                Some(this) if !this.try_attach_layout() => TaskStep::Continue,
                _ => TaskStep::Done,
            },
        );
        this.tasks.borrow_mut().push(task);
    }

    /// Rebuilds a detached self-view; otherwise refreshes the layout class.
    fn start_watchdog(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let task = PeriodicTask::spawn(
            TaskSpec {
                name: "self-view-watchdog",
                period_ms: this.config.watchdog_period_ms,
                policy: AttemptPolicy::Unbounded,
            },
            move || {
                let Some(this) = weak.upgrade() else {
                    return TaskStep::Done;
                };
                this.watchdog_tick();
                TaskStep::Continue
            },
        );
        this.tasks.borrow_mut().push(task);
    }

    fn watchdog_tick(&self) {
        let attached = self
            .self_view
            .borrow()
            .as_ref()
            .is_some_and(MountedRoot::is_attached);
        if !attached {
            log::info!("self-view detached, rebuilding");
            // Drop the old root before mounting so its app is destroyed first.
            self.self_view.borrow_mut().take();
            match mount_self_view(&self.session, &self.config) {
                Ok(root) => *self.self_view.borrow_mut() = Some(root),
                Err(e) => log::warn!("self-view rebuild failed: {e}"),
            }
        } else if let Some(observer) = self.layout.borrow().as_ref() {
            layout::reclassify(observer.container(), &self.session);
        }
        self.hide_local_tile();
    }

    fn forward_reactions(&self) -> bool {
        let Some(reactions) = self.session.reactions() else {
            return false;
        };
        let hand_raised = self.session.state().hand_raised.clone();
        let source = reactions.hand_raised();
        if source == hand_raised {
            // The session already mirrors the hand into its own state.
            return true;
        }
        let subscription = source.subscribe(move |raised| hand_raised.set(*raised));
        *self.hand_forward.borrow_mut() = Some(subscription);
        log::info!("reaction state connected");
        true
    }

    fn start_reaction_probe(this: &Rc<Self>) {
        if this.forward_reactions() {
            return;
        }
        let weak = Rc::downgrade(this);
        let task = PeriodicTask::spawn(
            TaskSpec {
                name: "reaction-probe",
                period_ms: this.config.reaction_probe_period_ms,
                policy: AttemptPolicy::MaxAttempts(this.config.reaction_probe_max_attempts),
            },
            move || match weak.upgrade() {
                Some(this) if !this.forward_reactions() => TaskStep::Continue,
                _ => TaskStep::Done,
            },
        );
        this.tasks.borrow_mut().push(task);
    }

    fn spotlight(&self) {
        let (Some(main), Some(container)) = (
            dom::element_by_id(MAIN_VIDEO_SECTION_ID),
            Self::remote_container(),
        ) else {
            return;
        };
        let self_id = self.session.session_id();
        if let Err(e) = layout::spotlight_first_remote(&main, &container, self_id.as_deref()) {
            log::debug!("spotlight skipped: {e}");
        }
    }

    fn start_spotlight(this: &Rc<Self>) {
        this.spotlight();
        let weak = Rc::downgrade(this);
        let task = PeriodicTask::spawn(
            TaskSpec {
                name: "spotlight",
                period_ms: this.config.spotlight_period_ms,
                policy: AttemptPolicy::Unbounded,
            },
            move || match weak.upgrade() {
                Some(this) => {
                    this.spotlight();
                    TaskStep::Continue
                }
                None => TaskStep::Done,
            },
        );
        this.tasks.borrow_mut().push(task);
    }
}
