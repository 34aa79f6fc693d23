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

//! The contract between the mobile widgets and the meeting they control.
//!
//! A [`HostSession`] is handed to the controller at construction time. It
//! exposes the observable [`HostState`], the local media stream, outbound
//! host signals, and optional capabilities such as [`ReactionProvider`].
//! The widgets never probe globals; anything they need comes through here.

use crate::state::{HostState, StateChannel};
use std::ops::Deref;
use std::rc::Rc;
use web_sys::MediaStream;

/// Fire-and-forget signals the host can send to the meeting server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    AdmitAll,
    MuteAll,
}

impl HostSignal {
    /// Event name on the wire.
    pub fn event_name(self) -> &'static str {
        match self {
            HostSignal::AdmitAll => "admit-all-participants",
            HostSignal::MuteAll => "mute-all-participants",
        }
    }
}

/// Optional raise-hand capability.
pub trait ReactionProvider {
    fn hand_raised(&self) -> StateChannel<bool>;
    fn toggle_hand(&self);
}

pub trait HostSession {
    /// Stable id of the local participant, used to tell self from remotes.
    fn session_id(&self) -> Option<String>;

    /// The current local camera stream. May be replaced at any time (for
    /// example after a device switch), so callers re-read it.
    fn local_stream(&self) -> Option<MediaStream>;

    fn display_name(&self) -> Option<String> {
        None
    }

    fn meeting_title(&self) -> Option<String> {
        None
    }

    fn state(&self) -> &HostState;

    /// Send a signal. Returns `false` when no transport is available.
    fn emit_signal(&self, signal: HostSignal) -> bool;

    fn reactions(&self) -> Option<Rc<dyn ReactionProvider>> {
        None
    }

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Shared, comparable handle to a [`HostSession`], suitable for Yew props.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn HostSession>);

impl<S: HostSession + 'static> From<Rc<S>> for SessionHandle {
    fn from(session: Rc<S>) -> Self {
        Self(session)
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SessionHandle {
    type Target = dyn HostSession;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
