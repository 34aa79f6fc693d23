// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::connection_indicator::ConnectionIndicator;
use crate::components::control_bar::ControlBar;
use crate::components::host_menu::{HostMenu, MenuState};
use crate::components::meeting_info::MeetingInfo;
use crate::components::status_indicators::StatusIndicators;
use crate::session::SessionHandle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MobileHostChromeProps {
    pub session: SessionHandle,
    pub clock_period_ms: u32,
}

/// Everything the mobile host sees except the self-view, which lives in its
/// own root so it can be rebuilt on its own.
#[function_component(MobileHostChrome)]
pub fn mobile_host_chrome(props: &MobileHostChromeProps) -> Html {
    let menu = use_state(MenuState::default);

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggled()))
    };
    let on_close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(MenuState::Closed))
    };

    html! {
        <>
            <MeetingInfo session={props.session.clone()} clock_period_ms={props.clock_period_ms} />
            <StatusIndicators session={props.session.clone()} />
            <ConnectionIndicator session={props.session.clone()} />
            <ControlBar
                session={props.session.clone()}
                menu_open={menu.is_open()}
                on_toggle_menu={on_toggle_menu}
                on_close_menu={on_close_menu.clone()}
            />
            <HostMenu session={props.session.clone()} state={*menu} on_close={on_close_menu} />
        </>
    }
}
