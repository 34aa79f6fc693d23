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

//! Drag session bookkeeping for the self-view.

use crate::geometry::{clamp_origin, Corner, Rect, Viewport, SELF_VIEW_INSETS};

/// One pointer drag, from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_pointer: (f64, f64),
    start_rect: Rect,
}

impl DragSession {
    pub fn begin(pointer: (f64, f64), rect: Rect) -> Self {
        Self {
            start_pointer: pointer,
            start_rect: rect,
        }
    }

    /// Widget origin when the drag started.
    pub fn origin(&self) -> (f64, f64) {
        (self.start_rect.left, self.start_rect.top)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.start_rect.width, self.start_rect.height)
    }

    /// Origin for the current pointer position, clamped to the safe area.
    pub fn position_for(&self, pointer: (f64, f64), viewport: Viewport) -> (f64, f64) {
        let dx = pointer.0 - self.start_pointer.0;
        let dy = pointer.1 - self.start_pointer.1;
        clamp_origin(
            self.start_rect.left + dx,
            self.start_rect.top + dy,
            self.size(),
            viewport,
            SELF_VIEW_INSETS,
        )
    }

    /// Corner the widget snaps to when released at `origin`.
    pub fn snap_corner(&self, origin: (f64, f64), viewport: Viewport) -> Corner {
        let rect = self.start_rect.moved_to(origin.0, origin.1);
        Corner::containing(rect.center(), viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: Viewport = Viewport {
        width: 390.0,
        height: 844.0,
    };

    fn session() -> DragSession {
        // Widget resting in the top-right corner.
        DragSession::begin((300.0, 100.0), Rect::new(262.0, 60.0, 120.0, 160.0))
    }

    #[test]
    fn zero_delta_keeps_origin() {
        let s = session();
        assert_eq!(s.position_for((300.0, 100.0), PHONE), s.origin());
    }

    #[test]
    fn pointer_delta_moves_widget() {
        let s = session();
        assert_eq!(s.position_for((200.0, 300.0), PHONE), (162.0, 260.0));
    }

    #[test]
    fn any_delta_sequence_stays_in_bounds() {
        let s = session();
        let (w, h) = s.size();
        let mut pointer = (300.0, 100.0);
        let deltas = [
            (-400.0, 0.0),
            (0.0, -400.0),
            (900.0, 900.0),
            (-13.0, 27.0),
            (5.0, -2_000.0),
            (0.5, 0.5),
        ];
        for _ in 0..20 {
            for (dx, dy) in deltas {
                pointer = (pointer.0 + dx, pointer.1 + dy);
                let (x, y) = s.position_for(pointer, PHONE);
                assert!(x >= 8.0 && x <= PHONE.width - w - 8.0, "x={x}");
                assert!(y >= 60.0 && y <= PHONE.height - h - 100.0, "y={y}");
            }
        }
    }

    #[test]
    fn release_snaps_to_quadrant_of_center() {
        let s = session();
        assert_eq!(s.snap_corner((8.0, 60.0), PHONE), Corner::TopLeft);
        assert_eq!(s.snap_corner((262.0, 60.0), PHONE), Corner::TopRight);
        assert_eq!(s.snap_corner((8.0, 584.0), PHONE), Corner::BottomLeft);
        assert_eq!(s.snap_corner((262.0, 584.0), PHONE), Corner::BottomRight);
    }

    #[test]
    fn snap_uses_center_not_origin() {
        let s = session();
        // Origin is left of the midline but the center is right of it.
        assert_eq!(s.snap_corner((150.0, 60.0), PHONE), Corner::TopRight);
    }
}
