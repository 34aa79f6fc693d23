// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Browser integration tests for the mobile control bar.
//
// These tests follow the standard pattern for testing Yew function components
// in a real browser via `wasm-bindgen-test`:
//
// 1. Configure `wasm_bindgen_test` to run in a real browser.
// 2. Stand in for the desktop page with plain buttons that count clicks.
// 3. Mount the chrome with `mount_chrome` and a recording `MockSession`.
// 4. Yield to the Yew scheduler and the mutation observers with `settle()`.
// 5. Query the DOM and assert on the rendered output.
// 6. Drop the mounted root and clean the page.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use mobile_host_ui::constants::{
    ACTIVE_ATTRIBUTE, CAMERA_BUTTON_ID, CONTROL_BAR_ID, END_CALL_BUTTON_ID, MENU_CONTAINER_ID,
    MIC_BUTTON_ID, MORE_BUTTON_ID, PARTICIPANTS_BUTTON_ID, PARTICIPANT_BADGE_ID,
};
use mobile_host_ui::controller::mount_chrome;
use mobile_host_ui::desktop::DesktopControl;
use mobile_host_ui::dom_session::bindings::SourceBinding;
use support::{by_id, count, fast_config, icon_class, reset_page, settle, DesktopButton, MockSession};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Test: building twice leaves exactly one bar and one menu
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn building_twice_leaves_one_bar_and_one_menu() {
    reset_page();
    let session = MockSession::new("host");
    let config = fast_config();

    let first = mount_chrome(&session.handle(), &config).unwrap();
    settle().await;
    let second = mount_chrome(&session.handle(), &config).unwrap();
    settle().await;

    assert_eq!(count(&format!("#{CONTROL_BAR_ID}")), 1);
    assert_eq!(count(&format!("#{MENU_CONTAINER_ID}")), 1);
    assert!(!first.root().is_connected(), "first root should be replaced");
    assert!(second.is_attached());

    drop(first);
    drop(second);
    reset_page();
}

// ---------------------------------------------------------------------------
// Test: buttons appear in order
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn bar_buttons_appear_in_order() {
    reset_page();
    let session = MockSession::new("host");
    let chrome = mount_chrome(&session.handle(), &fast_config()).unwrap();
    settle().await;

    let bar = by_id(CONTROL_BAR_ID).expect("control bar rendered");
    let buttons = bar.query_selector_all("button").unwrap();
    let ids: Vec<String> = (0..buttons.length())
        .filter_map(|i| buttons.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .map(|e| e.id())
        .collect();
    assert_eq!(
        ids,
        [
            MORE_BUTTON_ID,
            CAMERA_BUTTON_ID,
            MIC_BUTTON_ID,
            PARTICIPANTS_BUTTON_ID,
            END_CALL_BUTTON_ID,
        ]
    );

    drop(chrome);
    reset_page();
}

// ---------------------------------------------------------------------------
// Test: camera mirror tracks every desktop toggle
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn camera_button_mirrors_desktop_state() {
    reset_page();
    let desktop = DesktopButton::new(DesktopControl::Camera.element_id(), Some("true"));
    let session = MockSession::new("host");
    let _binding = SourceBinding::attribute(
        &desktop.element,
        ACTIVE_ATTRIBUTE,
        session.state.camera_active.clone(),
    )
    .unwrap();
    let chrome = mount_chrome(&session.handle(), &fast_config()).unwrap();
    settle().await;

    let camera = by_id(CAMERA_BUTTON_ID).unwrap();
    assert!(camera.class_list().contains("active"));
    assert!(icon_class(&camera).contains("fa-video"));
    assert!(!icon_class(&camera).contains("fa-video-slash"));

    desktop.set_active("false");
    settle().await;
    assert!(camera.class_list().contains("inactive"));
    assert!(icon_class(&camera).contains("fa-video-slash"));

    desktop.set_active("true");
    settle().await;
    assert!(camera.class_list().contains("active"));
    assert!(!camera.class_list().contains("inactive"));

    drop(chrome);
    reset_page();
}

// ---------------------------------------------------------------------------
// Test: a muted desktop mic shows inactive without any mutation
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn mic_button_starts_inactive_when_desktop_is_muted() {
    reset_page();
    let desktop = DesktopButton::new(DesktopControl::Microphone.element_id(), Some("false"));
    let session = MockSession::new("host");
    let _binding = SourceBinding::attribute(
        &desktop.element,
        ACTIVE_ATTRIBUTE,
        session.state.mic_active.clone(),
    )
    .unwrap();
    let chrome = mount_chrome(&session.handle(), &fast_config()).unwrap();
    settle().await;

    let mic = by_id(MIC_BUTTON_ID).unwrap();
    assert!(mic.class_list().contains("inactive"));
    assert!(icon_class(&mic).contains("fa-microphone-slash"));

    drop(chrome);
    reset_page();
}

// ---------------------------------------------------------------------------
// Test: clicks are forwarded, never reimplemented
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn clicks_forward_to_desktop_controls() {
    reset_page();
    let camera = DesktopButton::new(DesktopControl::Camera.element_id(), Some("true"));
    let mic = DesktopButton::new(DesktopControl::Microphone.element_id(), Some("true"));
    let members = DesktopButton::new(DesktopControl::Participants.element_id(), None);
    let end = DesktopButton::new(DesktopControl::EndCall.element_id(), None);
    let session = MockSession::new("host");
    let chrome = mount_chrome(&session.handle(), &fast_config()).unwrap();
    settle().await;

    by_id(CAMERA_BUTTON_ID).unwrap().click();
    by_id(MIC_BUTTON_ID).unwrap().click();
    by_id(PARTICIPANTS_BUTTON_ID).unwrap().click();
    by_id(END_CALL_BUTTON_ID).unwrap().click();
    settle().await;

    assert_eq!(camera.clicks(), 1);
    assert_eq!(mic.clicks(), 1);
    assert_eq!(members.clicks(), 1);
    assert_eq!(end.clicks(), 1);
    // The mirror only changes when the desktop state does.
    let mirrored = by_id(CAMERA_BUTTON_ID).unwrap();
    assert!(mirrored.class_list().contains("active"));
    assert!(!mirrored.class_list().contains("inactive"));

    drop(chrome);
    reset_page();
}

#[wasm_bindgen_test]
async fn missing_desktop_control_is_ignored() {
    reset_page();
    let session = MockSession::new("host");
    let chrome = mount_chrome(&session.handle(), &fast_config()).unwrap();
    settle().await;

    by_id(END_CALL_BUTTON_ID).unwrap().click();
    settle().await;
    assert!(by_id(CONTROL_BAR_ID).is_some());

    drop(chrome);
    reset_page();
}

// ---------------------------------------------------------------------------
// Test: participant badge
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn participant_badge_shows_count() {
    reset_page();
    let session = MockSession::new("host");
    session.state.participant_count.set(3);
    let chrome = mount_chrome(&session.handle(), &fast_config()).unwrap();
    settle().await;

    let badge = by_id(PARTICIPANT_BADGE_ID).unwrap();
    assert_eq!(badge.text_content().unwrap(), "3");

    session.state.participant_count.set(7);
    settle().await;
    assert_eq!(badge.text_content().unwrap(), "7");

    drop(chrome);
    reset_page();
}
