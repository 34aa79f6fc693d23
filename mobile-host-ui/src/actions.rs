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

//! Host menu actions.
//!
//! Most items forward a click to the desktop control that owns the feature.
//! The rest send a [`HostSignal`] or flip local state. Closing the menu is the
//! caller's job and happens for every item.

use crate::constants::END_FOR_ALL_PROMPT;
use crate::desktop::DesktopControl;
use crate::session::{HostSignal, SessionHandle};
use crate::toast::{notify, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    AdmitAll,
    MuteAll,
    LockMeeting,
    Record,
    ScreenShare,
    RaiseHand,
    Chat,
    ShareFiles,
    Settings,
    Notes,
    EndForAll,
}

/// State an item's label and icon depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuView {
    pub locked: bool,
    pub hand_raised: bool,
}

impl HostAction {
    /// Menu order, top to bottom.
    pub const MENU: [HostAction; 11] = [
        HostAction::AdmitAll,
        HostAction::MuteAll,
        HostAction::LockMeeting,
        HostAction::Record,
        HostAction::ScreenShare,
        HostAction::RaiseHand,
        HostAction::Chat,
        HostAction::ShareFiles,
        HostAction::Settings,
        HostAction::Notes,
        HostAction::EndForAll,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            HostAction::AdmitAll => "host-menu-admit-all",
            HostAction::MuteAll => "host-menu-mute-all",
            HostAction::LockMeeting => "host-menu-lock-meeting",
            HostAction::Record => "host-menu-record",
            HostAction::ScreenShare => "host-menu-screen-share",
            HostAction::RaiseHand => "host-menu-raise-hand",
            HostAction::Chat => "host-menu-chat",
            HostAction::ShareFiles => "host-menu-share-files",
            HostAction::Settings => "host-menu-settings",
            HostAction::Notes => "host-menu-notes",
            HostAction::EndForAll => "host-menu-end-for-all",
        }
    }

    pub fn label(self, view: MenuView) -> &'static str {
        match self {
            HostAction::AdmitAll => "Admit All",
            HostAction::MuteAll => "Mute All",
            HostAction::LockMeeting if view.locked => "Unlock Meeting",
            HostAction::LockMeeting => "Lock Meeting",
            HostAction::Record => "Start Recording",
            HostAction::ScreenShare => "Share Screen",
            HostAction::RaiseHand if view.hand_raised => "Lower Hand",
            HostAction::RaiseHand => "Raise Hand",
            HostAction::Chat => "Chat",
            HostAction::ShareFiles => "Share Files",
            HostAction::Settings => "Settings",
            HostAction::Notes => "Notes",
            HostAction::EndForAll => "End for All",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(self, view: MenuView) -> &'static str {
        match self {
            HostAction::AdmitAll => "fa-user-check",
            HostAction::MuteAll => "fa-microphone-slash",
            HostAction::LockMeeting if view.locked => "fa-unlock",
            HostAction::LockMeeting => "fa-lock",
            HostAction::Record => "fa-circle",
            HostAction::ScreenShare => "fa-desktop",
            HostAction::RaiseHand => "fa-hand-paper",
            HostAction::Chat => "fa-comment",
            HostAction::ShareFiles => "fa-file",
            HostAction::Settings => "fa-cog",
            HostAction::Notes => "fa-sticky-note",
            HostAction::EndForAll => "fa-ban",
        }
    }

    /// Extra class on the menu item.
    pub fn modifier_class(self, view: MenuView) -> Option<&'static str> {
        match self {
            HostAction::AdmitAll | HostAction::MuteAll => Some("host-action"),
            HostAction::EndForAll => Some("danger"),
            HostAction::RaiseHand if view.hand_raised => Some("reaction-active"),
            _ => None,
        }
    }

    /// The desktop control a plain forwarding item clicks.
    pub fn desktop_control(self) -> Option<DesktopControl> {
        match self {
            HostAction::AdmitAll | HostAction::MuteAll | HostAction::EndForAll => None,
            HostAction::LockMeeting => Some(DesktopControl::Lock),
            HostAction::Record => Some(DesktopControl::Record),
            HostAction::ScreenShare => Some(DesktopControl::ScreenShare),
            HostAction::RaiseHand => Some(DesktopControl::RaiseHand),
            HostAction::Chat => Some(DesktopControl::Chat),
            HostAction::ShareFiles => Some(DesktopControl::FileShare),
            HostAction::Settings => Some(DesktopControl::Settings),
            HostAction::Notes => Some(DesktopControl::Notes),
        }
    }
}

/// Run `action` against the session.
pub fn perform(action: HostAction, session: &SessionHandle) {
    log::debug!("host action {action:?}");
    match action {
        HostAction::AdmitAll => {
            if session.emit_signal(HostSignal::AdmitAll) {
                notify("Admitted all participants from waiting room", Severity::Success);
            }
        }
        HostAction::MuteAll => {
            if session.emit_signal(HostSignal::MuteAll) {
                notify("Muted all participants", Severity::Info);
            }
        }
        HostAction::LockMeeting => {
            DesktopControl::Lock.activate();
            let locked = &session.state().locked;
            let now_locked = !locked.get();
            locked.set(now_locked);
            notify(
                if now_locked {
                    "Meeting locked"
                } else {
                    "Meeting unlocked"
                },
                Severity::Info,
            );
        }
        HostAction::RaiseHand => {
            if !DesktopControl::RaiseHand.activate() {
                match session.reactions() {
                    Some(reactions) => reactions.toggle_hand(),
                    None => log::warn!("raise hand button not found"),
                }
            }
        }
        HostAction::EndForAll => {
            if session.confirm(END_FOR_ALL_PROMPT) {
                DesktopControl::EndCall.activate();
            } else {
                log::debug!("end for all declined");
            }
        }
        forwarded => {
            if let Some(control) = forwarded.desktop_control() {
                control.activate();
            }
        }
    }
}
