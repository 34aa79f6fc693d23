// SPDX-License-Identifier: MIT OR Apache-2.0

//! Briefly shown connection-quality badge.

use crate::constants::CONNECTION_BADGE_MS;
use crate::session::SessionHandle;
use crate::state::ConnectionQuality;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Badge {
    quality: ConnectionQuality,
    visible: bool,
}

#[derive(Properties, PartialEq)]
pub struct ConnectionIndicatorProps {
    pub session: SessionHandle,
}

/// Shows the latest quality for a few seconds after every report, including
/// repeated reports of the same quality.
#[function_component(ConnectionIndicator)]
pub fn connection_indicator(props: &ConnectionIndicatorProps) -> Html {
    let badge = use_state(|| Badge {
        quality: ConnectionQuality::Good,
        visible: false,
    });

    {
        let badge = badge.clone();
        use_effect_with(props.session.state().connection.clone(), move |connection| {
            let hide: RefCell<Option<Timeout>> = RefCell::new(None);
            let subscription = connection.subscribe(move |quality| {
                let Some(quality) = *quality else {
                    return;
                };
                badge.set(Badge {
                    quality,
                    visible: true,
                });
                let badge = badge.clone();
                *hide.borrow_mut() = Some(Timeout::new(CONNECTION_BADGE_MS, move || {
                    badge.set(Badge {
                        quality,
                        visible: false,
                    })
                }));
            });
            move || drop(subscription)
        });
    }

    html! {
        <div class={classes!(
            "host-connection-quality",
            badge.quality.class_name(),
            badge.visible.then_some("show"),
        )}>
            <i class="fas fa-wifi"></i>
            {" "}
            <span>{ badge.quality.label() }</span>
        </div>
    }
}
