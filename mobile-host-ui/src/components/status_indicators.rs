// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::mirror::use_channel;
use crate::constants::STATUS_INDICATORS_ID;
use crate::session::SessionHandle;
use crate::state::StateChannel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct IndicatorProps {
    id: &'static str,
    modifier: &'static str,
    icon: &'static str,
    text: &'static str,
    channel: StateChannel<bool>,
}

#[function_component(Indicator)]
fn indicator(props: &IndicatorProps) -> Html {
    let visible = use_channel(&props.channel);
    html! {
        <div
            class={classes!("host-status-indicator", props.modifier)}
            id={props.id}
            style={(!visible).then_some("display: none;")}
        >
            <i class={classes!("fas", props.icon)}></i>
            { format!(" {}", props.text) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorsProps {
    pub session: SessionHandle,
}

/// Recording, waiting-room and locked badges. Each is shown while its
/// channel is `true`; the channels are owned by whoever drives those features.
#[function_component(StatusIndicators)]
pub fn status_indicators(props: &StatusIndicatorsProps) -> Html {
    let state = props.session.state();
    html! {
        <div class="host-status-indicators" id={STATUS_INDICATORS_ID}>
            <Indicator
                id="host-recording-indicator"
                modifier="recording"
                icon="fa-circle"
                text="Recording"
                channel={state.recording.clone()}
            />
            <Indicator
                id="host-waiting-room-indicator"
                modifier="waiting-room"
                icon="fa-clock"
                text="Waiting Room"
                channel={state.waiting_room.clone()}
            />
            <Indicator
                id="host-locked-indicator"
                modifier="locked"
                icon="fa-lock"
                text="Meeting Locked"
                channel={state.locked.clone()}
            />
        </div>
    }
}
