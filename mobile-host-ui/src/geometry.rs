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

//! Viewport geometry for the floating self-view: safe-area clamping and
//! corner classification.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn moved_to(&self, left: f64, top: f64) -> Self {
        Self { left, top, ..*self }
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inner size of the browser window.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Self { width, height })
    }
}

/// Distances from each viewport edge the widget must keep clear of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Keeps the self-view off the meeting header and the control bar.
pub const SELF_VIEW_INSETS: SafeInsets = SafeInsets {
    left: 8.0,
    right: 8.0,
    top: 60.0,
    bottom: 100.0,
};

/// Clamp a widget origin into the safe region of the viewport.
///
/// When the widget does not fit, the left/top inset wins.
pub fn clamp_origin(
    left: f64,
    top: f64,
    size: (f64, f64),
    viewport: Viewport,
    insets: SafeInsets,
) -> (f64, f64) {
    let (width, height) = size;
    let max_left = viewport.width - width - insets.right;
    let max_top = viewport.height - height - insets.bottom;
    (
        left.min(max_left).max(insets.left),
        top.min(max_top).max(insets.top),
    )
}

/// The four resting positions of the self-view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    /// CSS class that pins the widget to this corner.
    pub fn class_name(self) -> &'static str {
        match self {
            Corner::TopLeft => "position-top-left",
            Corner::TopRight => "position-top-right",
            Corner::BottomLeft => "position-bottom-left",
            Corner::BottomRight => "position-bottom-right",
        }
    }

    /// Quadrant of the viewport containing `point`.
    pub fn containing(point: (f64, f64), viewport: Viewport) -> Self {
        let (x, y) = point;
        let left = x < viewport.width / 2.0;
        let top = y < viewport.height / 2.0;
        match (top, left) {
            (true, true) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (false, false) => Corner::BottomRight,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown corner: {0}")]
pub struct ParseCornerError(pub String);

impl FromStr for Corner {
    type Err = ParseCornerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Tolerate JSON-quoted values written by older builds.
        let name = s.trim().trim_matches('"');
        Corner::ALL
            .into_iter()
            .find(|corner| corner.as_str() == name)
            .ok_or_else(|| ParseCornerError(s.to_string()))
    }
}
