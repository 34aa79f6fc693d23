// SPDX-License-Identifier: MIT OR Apache-2.0

//! Participant density classes for the remote tile grid.
//!
//! The stylesheet lays out `#secondaryVideosSection` by a single
//! `mobile-host-participants-N` class. The class is recomputed from scratch on
//! every mutation, so the applied class only depends on the tiles currently
//! visible.

use crate::constants::{
    DENSITY_CLASS_PREFIX, MAX_DENSITY, SOCKET_ID_ATTRIBUTE, SPOTLIGHT_ATTRIBUTE,
    VIDEO_FRAME_SELECTOR, VIDEO_WRAPPER_SELECTOR,
};
use crate::dom::{self, ObserverGuard};
use crate::error::MobileHostError;
use crate::session::SessionHandle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlVideoElement, MutationObserverInit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityClass(usize);

impl DensityClass {
    /// `None` for an empty room, otherwise the count capped at the largest variant.
    pub fn for_count(count: usize) -> Option<Self> {
        (count > 0).then(|| Self(count.min(MAX_DENSITY)))
    }

    pub fn level(self) -> usize {
        self.0
    }

    pub fn class_name(self) -> String {
        format!("{DENSITY_CLASS_PREFIX}{}", self.0)
    }

    /// Every variant, smallest first.
    pub fn all() -> impl Iterator<Item = DensityClass> {
        (1..=MAX_DENSITY).map(DensityClass)
    }
}

/// Whether a tile counts as a visible remote participant.
pub fn is_counted(hidden: bool, tile_id: Option<&str>, self_id: Option<&str>) -> bool {
    if hidden {
        return false;
    }
    match (tile_id, self_id) {
        (Some(tile), Some(me)) => tile != me,
        _ => true,
    }
}

fn remote_tiles(container: &Element, self_id: Option<&str>) -> Vec<HtmlElement> {
    dom::query_all(container, VIDEO_WRAPPER_SELECTOR)
        .into_iter()
        .filter(|tile| {
            let tile_id = tile.get_attribute(SOCKET_ID_ATTRIBUTE);
            is_counted(dom::is_display_none(tile), tile_id.as_deref(), self_id)
        })
        .collect()
}

pub fn count_visible_participants(container: &Element, self_id: Option<&str>) -> usize {
    remote_tiles(container, self_id).len()
}

/// Replace whichever density class is present with the one for `count`.
pub fn apply_density(container: &Element, count: usize) -> Option<DensityClass> {
    clear_density(container);
    let density = DensityClass::for_count(count)?;
    if let Err(e) = container.class_list().add_1(&density.class_name()) {
        log::warn!("failed to apply {}: {e:?}", density.class_name());
    }
    Some(density)
}

pub fn clear_density(container: &Element) {
    let classes = container.class_list();
    for density in DensityClass::all() {
        let _ = classes.remove_1(&density.class_name());
    }
}

/// Recount and reapply. Returns the applied class.
pub fn reclassify(container: &Element, session: &SessionHandle) -> Option<DensityClass> {
    let self_id = session.session_id();
    let count = count_visible_participants(container, self_id.as_deref());
    apply_density(container, count)
}

/// Keeps the density class of a container in step with its tiles.
pub struct ParticipantLayoutObserver {
    container: Element,
    _guard: ObserverGuard,
}

impl ParticipantLayoutObserver {
    pub fn attach(container: Element, session: SessionHandle) -> Result<Self, MobileHostError> {
        reclassify(&container, &session);

        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        options.set_attributes(true);
        options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("style")));

        let target = container.clone();
        let guard = ObserverGuard::observe(&container, &options, move |_| {
            reclassify(&target, &session);
        })?;
        Ok(Self {
            container,
            _guard: guard,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }
}

impl Drop for ParticipantLayoutObserver {
    fn drop(&mut self) {
        clear_density(&self.container);
    }
}

/// Hides the local tile while the self-view shows it. Restores the previous
/// inline `display` on drop.
pub struct HiddenTile {
    tile: HtmlElement,
    previous_display: String,
}

impl HiddenTile {
    pub fn hide(tile: HtmlElement) -> Self {
        let style = tile.style();
        let previous_display = style.get_property_value("display").unwrap_or_default();
        if let Err(e) = style.set_property("display", "none") {
            log::debug!("could not hide local tile: {e:?}");
        }
        Self {
            tile,
            previous_display,
        }
    }

    /// The local tile in `container`, if the session id is known and the tile exists.
    pub fn find_local(container: &Element, session: &SessionHandle) -> Option<HtmlElement> {
        let self_id = session.session_id()?;
        dom::query_all(container, VIDEO_WRAPPER_SELECTOR)
            .into_iter()
            .find(|tile| tile.get_attribute(SOCKET_ID_ATTRIBUTE).as_deref() == Some(self_id.as_str()))
    }
}

impl Drop for HiddenTile {
    fn drop(&mut self) {
        let style = self.tile.style();
        let restored = if self.previous_display.is_empty() {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", &self.previous_display)
        };
        if let Err(e) = restored {
            log::debug!("could not restore local tile: {e:?}");
        }
    }
}

/// Show the first remote tile in the main section. Returns `true` when the
/// section content was replaced.
pub fn spotlight_first_remote(
    main: &Element,
    container: &Element,
    self_id: Option<&str>,
) -> Result<bool, MobileHostError> {
    let Some(first) = remote_tiles(container, self_id).into_iter().next() else {
        return Ok(false);
    };
    let id = first.get_attribute(SOCKET_ID_ATTRIBUTE).unwrap_or_default();
    if main.get_attribute(SPOTLIGHT_ATTRIBUTE).as_deref() == Some(id.as_str()) {
        return Ok(false);
    }

    let clone = first.clone_node_with_deep(true)?.unchecked_into::<HtmlElement>();
    clone.remove_attribute("id")?;
    // Cloning does not carry the live stream over.
    let source_video = first
        .query_selector(VIDEO_FRAME_SELECTOR)?
        .and_then(|v| v.dyn_into::<HtmlVideoElement>().ok());
    let cloned_video = clone
        .query_selector(VIDEO_FRAME_SELECTOR)?
        .and_then(|v| v.dyn_into::<HtmlVideoElement>().ok());
    if let (Some(source), Some(cloned)) = (source_video, cloned_video) {
        cloned.set_src_object(source.src_object().as_ref());
        cloned.set_muted(true);
    }

    main.set_inner_html("");
    main.append_child(&clone)?;
    main.set_attribute(SPOTLIGHT_ATTRIBUTE, &id)?;
    log::debug!("spotlight on {id}");
    Ok(true)
}
