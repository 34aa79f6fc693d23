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

//! Fixed bottom bar: more menu, camera, mic, participants and end call.

use crate::components::mirror::{use_channel, MirrorButton};
use crate::constants::{
    CAMERA_BUTTON_ID, CONTROL_BAR_ID, END_CALL_BUTTON_ID, MIC_BUTTON_ID, MORE_BUTTON_ID,
    PARTICIPANTS_BUTTON_ID, PARTICIPANT_BADGE_ID,
};
use crate::desktop::DesktopControl;
use crate::session::SessionHandle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub session: SessionHandle,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

fn forward(control: DesktopControl) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        control.activate();
    })
}

#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    let state = props.session.state();
    let participant_count = use_channel(&state.participant_count);

    let on_more = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };
    let on_participants = {
        let on_close_menu = props.on_close_menu.clone();
        Callback::from(move |_: MouseEvent| {
            DesktopControl::Participants.activate();
            on_close_menu.emit(());
        })
    };

    html! {
        <div class="mobile-host-controls-bar" id={CONTROL_BAR_ID}>
            <button
                class={classes!("mobile-host-control-btn", "more-menu", props.menu_open.then_some("active"))}
                id={MORE_BUTTON_ID}
                aria-label="More host options"
                onclick={on_more}
            >
                <i class="fas fa-ellipsis-h"></i>
            </button>
            <MirrorButton
                id={CAMERA_BUTTON_ID}
                label="Toggle camera"
                channel={state.camera_active.clone()}
                icon_on="fa-video"
                icon_off="fa-video-slash"
                onclick={forward(DesktopControl::Camera)}
            />
            <MirrorButton
                id={MIC_BUTTON_ID}
                label="Toggle microphone"
                channel={state.mic_active.clone()}
                icon_on="fa-microphone"
                icon_off="fa-microphone-slash"
                onclick={forward(DesktopControl::Microphone)}
            />
            <button
                class="mobile-host-control-btn host-participants"
                id={PARTICIPANTS_BUTTON_ID}
                aria-label="Manage participants"
                onclick={on_participants}
            >
                <i class="fas fa-users"></i>
                <span class="mobile-host-participant-badge" id={PARTICIPANT_BADGE_ID}>
                    { participant_count }
                </span>
            </button>
            <button
                class="mobile-host-control-btn end-call"
                id={END_CALL_BUTTON_ID}
                aria-label="End meeting for all"
                onclick={forward(DesktopControl::EndCall)}
            >
                <i class="fas fa-phone-slash"></i>
            </button>
        </div>
    }
}
