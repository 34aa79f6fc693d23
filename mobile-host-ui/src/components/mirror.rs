// SPDX-License-Identifier: MIT OR Apache-2.0

//! Control-bar buttons that mirror a desktop control's state.

use crate::state::StateChannel;
use yew::prelude::*;

/// Current value of `channel`, re-rendering on every `set`.
#[hook]
pub fn use_channel<T>(channel: &StateChannel<T>) -> T
where
    T: Clone + PartialEq + 'static,
{
    let value = use_state(|| channel.get());
    {
        let value = value.clone();
        use_effect_with(channel.clone(), move |channel| {
            let subscription = channel.subscribe(move |next: &T| value.set(next.clone()));
            move || drop(subscription)
        });
    }
    (*value).clone()
}

#[derive(Properties, PartialEq)]
pub struct MirrorButtonProps {
    pub id: &'static str,
    pub label: &'static str,
    pub channel: StateChannel<bool>,
    pub icon_on: &'static str,
    pub icon_off: &'static str,
    pub onclick: Callback<MouseEvent>,
}

/// Class and icon always follow the channel. Clicking does not flip the
/// button locally; the desktop control answers through the channel.
#[function_component(MirrorButton)]
pub fn mirror_button(props: &MirrorButtonProps) -> Html {
    let active = use_channel(&props.channel);
    let class = classes!(
        "mobile-host-control-btn",
        if active { "active" } else { "inactive" }
    );
    let icon = if active { props.icon_on } else { props.icon_off };

    html! {
        <button id={props.id} {class} aria-label={props.label} onclick={props.onclick.clone()}>
            <i class={classes!("fas", icon)}></i>
        </button>
    }
}
