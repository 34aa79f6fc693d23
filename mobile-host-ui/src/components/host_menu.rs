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

//! Slide-up "Host Options" panel.

use crate::actions::{perform, HostAction, MenuView};
use crate::components::mirror::use_channel;
use crate::constants::{MENU_CONTAINER_ID, MENU_OVERLAY_ID, MENU_PANEL_ID};
use crate::session::SessionHandle;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HostMenuProps {
    pub session: SessionHandle,
    pub state: MenuState,
    pub on_close: Callback<()>,
}

#[function_component(HostMenu)]
pub fn host_menu(props: &HostMenuProps) -> Html {
    let state = props.session.state();
    let view = MenuView {
        locked: use_channel(&state.locked),
        hand_raised: use_channel(&state.hand_raised),
    };
    let active = props.state.is_open().then_some("active");

    let on_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let items = HostAction::MENU.iter().map(|&action| {
        let onclick = {
            let session = props.session.clone();
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| {
                perform(action, &session);
                on_close.emit(());
            })
        };
        // Recording keeps its red dot.
        let icon_style = (action == HostAction::Record).then_some("color: red;");
        html! {
            <button
                key={action.element_id()}
                class={classes!("host-menu-item", action.modifier_class(view))}
                id={action.element_id()}
                {onclick}
            >
                <div class="host-menu-item-icon" style={icon_style}>
                    <i class={classes!("fas", action.icon(view))}></i>
                </div>
                <div class="host-menu-item-label">{ action.label(view) }</div>
            </button>
        }
    });

    html! {
        <div id={MENU_CONTAINER_ID}>
            <div
                class={classes!("host-more-menu-overlay", active)}
                id={MENU_OVERLAY_ID}
                onclick={on_overlay}
            ></div>
            <div class={classes!("host-more-menu-panel", active)} id={MENU_PANEL_ID}>
                <div class="host-menu-handle"></div>
                <h3 class="host-menu-title">{"Host Options"}</h3>
                <div class="host-menu-items-grid">
                    { for items }
                </div>
            </div>
        </div>
    }
}
