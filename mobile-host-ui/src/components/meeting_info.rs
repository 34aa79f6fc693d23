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

//! Meeting header with title, host badge and wall clock.
//!
//! Rendered hidden; the page stylesheet decides whether to reveal it.

use crate::constants::{DEFAULT_MEETING_TITLE, MEETING_INFO_ID};
use crate::session::SessionHandle;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MeetingInfoProps {
    pub session: SessionHandle,
    /// Clock refresh period in milliseconds.
    pub clock_period_ms: u32,
}

#[function_component(MeetingInfo)]
pub fn meeting_info(props: &MeetingInfoProps) -> Html {
    let title = use_memo(props.session.clone(), |session| {
        session
            .meeting_title()
            .unwrap_or_else(|| DEFAULT_MEETING_TITLE.to_string())
    });
    let time = use_state(current_time);

    {
        let time = time.clone();
        use_effect_with(props.clock_period_ms, move |period| {
            let interval = Interval::new(*period, move || time.set(current_time()));
            move || drop(interval)
        });
    }

    html! {
        <div class="mobile-host-meeting-info" id={MEETING_INFO_ID} style="display: none;">
            <div>
                <h3>{ (*title).clone() }<span class="host-badge">{"HOST"}</span></h3>
                <div class="host-connection-indicator">
                    <div class="host-connection-dot"></div>
                    <span>{"Connected"}</span>
                </div>
            </div>
            <div class="time">{ (*time).clone() }</div>
        </div>
    }
}

fn current_time() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes())
}

/// 12-hour `hh:mm AM` clock.
fn format_clock(hours: u32, minutes: u32) -> String {
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour:02}:{minutes:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_clock(0, 5), "12:05 AM");
        assert_eq!(format_clock(9, 30), "09:30 AM");
        assert_eq!(format_clock(12, 0), "12:00 PM");
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }
}
