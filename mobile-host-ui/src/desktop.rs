// SPDX-License-Identifier: MIT OR Apache-2.0

//! Desktop controls the mobile widgets forward to.
//!
//! The desktop page owns these buttons. The mobile layer never reimplements
//! what they do; it clicks them.

use crate::dom;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopControl {
    Camera,
    Microphone,
    Participants,
    EndCall,
    Lock,
    Record,
    ScreenShare,
    RaiseHand,
    Chat,
    FileShare,
    Settings,
    Notes,
}

impl DesktopControl {
    pub const ALL: [DesktopControl; 12] = [
        DesktopControl::Camera,
        DesktopControl::Microphone,
        DesktopControl::Participants,
        DesktopControl::EndCall,
        DesktopControl::Lock,
        DesktopControl::Record,
        DesktopControl::ScreenShare,
        DesktopControl::RaiseHand,
        DesktopControl::Chat,
        DesktopControl::FileShare,
        DesktopControl::Settings,
        DesktopControl::Notes,
    ];

    /// Id of the desktop element backing this control.
    pub const fn element_id(self) -> &'static str {
        match self {
            DesktopControl::Camera => "cameraBtn",
            DesktopControl::Microphone => "micBtn",
            DesktopControl::Participants => "memberToggleBtn",
            DesktopControl::EndCall => "endCallBtn",
            DesktopControl::Lock => "vortex-primary-activator-3k7s",
            DesktopControl::Record => "startCaptureBtn",
            DesktopControl::ScreenShare => "screenShareBtn",
            DesktopControl::RaiseHand => "rm-raiseHandBtn",
            DesktopControl::Chat => "chat-btn",
            DesktopControl::FileShare => "floating-share-btn",
            DesktopControl::Settings => "settings-btn",
            DesktopControl::Notes => "notesBtn",
        }
    }

    pub fn find(self) -> Option<HtmlElement> {
        dom::html_element_by_id(self.element_id())
    }

    /// Click the desktop element. Returns `false` when it is not in the page.
    pub fn activate(self) -> bool {
        match self.find() {
            Some(element) => {
                element.click();
                true
            }
            None => {
                log::debug!("desktop control #{} not present, skipping", self.element_id());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn element_ids_are_unique() {
        let ids: HashSet<_> = DesktopControl::ALL.iter().map(|c| c.element_id()).collect();
        assert_eq!(ids.len(), DesktopControl::ALL.len());
    }
}
