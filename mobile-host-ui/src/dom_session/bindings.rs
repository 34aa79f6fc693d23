// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mirrors desktop element state into [`StateChannel`]s.
//!
//! Each binding syncs once when it is created, so the channel is never left
//! at a stale default, and then on every observed mutation.

use crate::dom::{self, ObserverGuard};
use crate::error::MobileHostError;
use crate::state::StateChannel;
use web_sys::Element;

/// `data-active="true"` style boolean attribute.
pub fn is_active(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Attribute value after each mutation of a batch.
///
/// A `MutationObserver` delivers records in batches and only the final value
/// is readable from the element. Record `i + 1` carries the value that
/// record `i` produced as its old value, so the sequence of values is the old
/// values shifted by one, ending with the current value.
pub fn values_after_each(old_values: &[Option<String>], current: Option<String>) -> Vec<Option<String>> {
    old_values
        .iter()
        .skip(1)
        .cloned()
        .chain(std::iter::once(current))
        .collect()
}

/// Lenient parse of a participant-count label such as `"12"`, `" 3 "` or
/// `"3 / 10"`. Only the first run of digits counts.
pub fn parse_count(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// A live mirror of one desktop element. Dropping it stops the mirroring.
pub struct SourceBinding {
    _guard: ObserverGuard,
}

impl SourceBinding {
    /// Mirror a boolean attribute, replaying every transition in order.
    pub fn attribute(
        source: &Element,
        attribute: &'static str,
        channel: StateChannel<bool>,
    ) -> Result<Self, MobileHostError> {
        channel.set(is_active(source.get_attribute(attribute).as_deref()));

        let element = source.clone();
        let guard = ObserverGuard::observe(source, &dom::attribute_watch(attribute), move |records| {
            let old_values: Vec<Option<String>> = records.iter().map(|r| r.old_value()).collect();
            let current = element.get_attribute(attribute);
            for value in values_after_each(&old_values, current) {
                channel.set(is_active(value.as_deref()));
            }
        })?;
        Ok(Self { _guard: guard })
    }

    /// Mirror a numeric text label.
    pub fn count(source: &Element, channel: StateChannel<u32>) -> Result<Self, MobileHostError> {
        let sync = {
            let element = source.clone();
            move || {
                let text = element.text_content().unwrap_or_default();
                match parse_count(&text) {
                    Some(count) => channel.set(count),
                    None => log::debug!("ignoring participant count {text:?}"),
                }
            }
        };
        sync();
        let guard = ObserverGuard::observe(source, &dom::text_watch(), move |_| sync())?;
        Ok(Self { _guard: guard })
    }
}
