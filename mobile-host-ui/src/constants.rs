// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element ids, class names and timing constants shared by the widgets.

// Widgets owned by this crate.
pub const CHROME_ROOT_ID: &str = "mobile-host-chrome-root";
pub const SELF_VIEW_ROOT_ID: &str = "mobile-host-self-view-root";
pub const CONTROL_BAR_ID: &str = "mobile-host-controls-bar";
pub const MORE_BUTTON_ID: &str = "mobile-host-more-btn";
pub const CAMERA_BUTTON_ID: &str = "mobile-host-camera-btn";
pub const MIC_BUTTON_ID: &str = "mobile-host-mic-btn";
pub const PARTICIPANTS_BUTTON_ID: &str = "mobile-host-participants-btn";
pub const PARTICIPANT_BADGE_ID: &str = "mobile-host-participant-count";
pub const END_CALL_BUTTON_ID: &str = "mobile-host-end-call-btn";
pub const MENU_CONTAINER_ID: &str = "host-more-menu-container";
pub const MENU_OVERLAY_ID: &str = "host-more-menu-overlay";
pub const MENU_PANEL_ID: &str = "host-more-menu-panel";
pub const MEETING_INFO_ID: &str = "mobile-host-meeting-info";
pub const STATUS_INDICATORS_ID: &str = "host-status-indicators";
pub const SELF_VIEW_ID: &str = "mobile-host-self-view";
pub const SELF_HAND_INDICATOR_ID: &str = "mobile-host-self-hand-indicator";

// Desktop page elements read by this crate.
pub const REMOTE_CONTAINER_ID: &str = "secondaryVideosSection";
pub const MAIN_VIDEO_SECTION_ID: &str = "mainVideoSection";
pub const MEETING_TITLE_ID: &str = "meetingTitle";
pub const PARTICIPANT_COUNT_SOURCE_ID: &str = "participantCount";
pub const VIDEO_WRAPPER_SELECTOR: &str = ".video-wrapper";
pub const VIDEO_FRAME_SELECTOR: &str = ".video-frame";
pub const PARTICIPANT_NAME_SELECTOR: &str = ".participant-name";
pub const SOCKET_ID_ATTRIBUTE: &str = "data-socket-id";
pub const ACTIVE_ATTRIBUTE: &str = "data-active";
pub const SPOTLIGHT_ATTRIBUTE: &str = "data-spotlight-id";

/// localStorage key holding the self-view corner.
pub const POSITION_STORAGE_KEY: &str = "hostSelfViewPosition";

pub const DENSITY_CLASS_PREFIX: &str = "mobile-host-participants-";
/// Largest density variant; larger rooms reuse it and scroll.
pub const MAX_DENSITY: usize = 15;

pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_FADE_MS: u32 = 300;
pub const CONNECTION_BADGE_MS: u32 = 3_000;

pub const END_FOR_ALL_PROMPT: &str = "Are you sure you want to end the meeting for everyone?";
pub const DEFAULT_MEETING_TITLE: &str = "Host Meeting";
