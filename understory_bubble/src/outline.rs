// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speech-bubble outlines: a rounded rectangle with one notched edge.
//!
//! ## Shape
//!
//! The outline is built inside `bounds`, the surface-local rectangle left after
//! any shadow inset (see [`BubbleStyle::surface_bounds`]).
//! The body is `bounds` shrunk by [`ArrowSpec::height`] on the edge facing the
//! anchor, and the notch tip reaches back out to the un-shrunk edge.
//!
//! The contour is traced clockwise (in y-down screen space), starting on the
//! top edge just after the top-left corner:
//! top edge, top-right corner, right edge, bottom-right corner, bottom edge,
//! bottom-left corner, left edge, top-left corner.
//! Corners are quadratic joins whose control point is the rectangle corner.
//!
//! ## Notch
//!
//! The notch is centered on the anchor's center line expressed in the
//! surface's local frame (x for [`Side::Top`]/[`Side::Bottom`], y for
//! [`Side::Left`]/[`Side::Right`]; see [`anchor_center_local`]).
//! Its base spans `center ± width` (shifted by `source_margin`) and its tip
//! sits at `center` (shifted by `target_margin`). On vertical edges the
//! margins shift toward smaller y.
//!
//! Without an anchor center there is nothing to point at, and the outline is
//! empty.

use kurbo::{BezPath, Point, Rect, RoundedRectRadii, Size, Vec2};

use crate::types::{ArrowSpec, BubbleStyle, Side, clamp_radii};

/// Inputs for one bubble outline.
///
/// This is a plain value; rebuild the path whenever bounds, style, or side change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BubbleOutline {
    /// Surface-local bounds, already shrunk by any shadow inset.
    pub bounds: Rect,
    /// Per-corner radii of the body.
    pub radii: RoundedRectRadii,
    /// Side of the anchor the bubble sits on.
    pub side: Side,
    /// Notch geometry.
    pub arrow: ArrowSpec,
}

impl BubbleOutline {
    /// Create an outline description. Negative radii and arrow dimensions are clamped to `0`.
    pub fn new(bounds: Rect, radii: RoundedRectRadii, side: Side, arrow: ArrowSpec) -> Self {
        Self {
            bounds,
            radii: clamp_radii(radii),
            side,
            arrow: arrow.normalized(),
        }
    }

    /// Outline for a measured surface of `size` drawn with `style`.
    pub fn for_surface(size: Size, style: &BubbleStyle, side: Side, arrow: ArrowSpec) -> Self {
        Self::new(style.surface_bounds(size), style.radii(), side, arrow)
    }

    /// The rounded body: `bounds` without the strip reserved for the notch.
    pub fn body(&self) -> Rect {
        let h = self.arrow.height;
        let b = self.bounds;
        match self.side {
            Side::Right => Rect::new(b.x0 + h, b.y0, b.x1, b.y1),
            Side::Bottom => Rect::new(b.x0, b.y0 + h, b.x1, b.y1),
            Side::Left => Rect::new(b.x0, b.y0, b.x1 - h, b.y1),
            Side::Top => Rect::new(b.x0, b.y0, b.x1, b.y1 - h),
        }
    }

    /// Build the closed contour.
    ///
    /// `anchor_center` is the anchor's center line in surface-local space.
    /// Returns an empty path when it is `None` or when `bounds` has no area.
    pub fn path(&self, anchor_center: Option<f64>) -> BezPath {
        let mut path = BezPath::new();
        let Some(center) = anchor_center else {
            return path;
        };
        if !(self.bounds.width() > 0.0 && self.bounds.height() > 0.0) {
            return path;
        }

        let outer = self.bounds;
        let Rect {
            x0: left,
            y0: top,
            x1: right,
            y1: bottom,
        } = self.body();
        let RoundedRectRadii {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        } = self.radii;
        let w = self.arrow.width;
        let (source, target) = if self.side.is_horizontal() {
            (
                center - self.arrow.source_margin,
                center - self.arrow.target_margin,
            )
        } else {
            (
                center + self.arrow.source_margin,
                center + self.arrow.target_margin,
            )
        };

        path.move_to((left + tl, top));

        if self.side == Side::Bottom {
            path.line_to((source - w, top));
            path.line_to((target, outer.y0));
            path.line_to((source + w, top));
        }
        path.line_to((right - tr, top));
        path.quad_to((right, top), (right, top + tr));

        if self.side == Side::Left {
            path.line_to((right, source - w));
            path.line_to((outer.x1, target));
            path.line_to((right, source + w));
        }
        path.line_to((right, bottom - br));
        path.quad_to((right, bottom), (right - br, bottom));

        if self.side == Side::Top {
            path.line_to((source + w, bottom));
            path.line_to((target, outer.y1));
            path.line_to((source - w, bottom));
        }
        path.line_to((left + bl, bottom));
        path.quad_to((left, bottom), (left, bottom - bl));

        if self.side == Side::Right {
            path.line_to((left, source + w));
            path.line_to((outer.x0, target));
            path.line_to((left, source - w));
        }
        path.line_to((left, top + tl));
        path.quad_to((left, top), (left + tl, top));

        path.close_path();
        path
    }

    /// Where the notch tip lands for `anchor_center`, in surface-local space.
    pub fn tip(&self, anchor_center: f64) -> Point {
        let b = self.bounds;
        let m = self.arrow.target_margin;
        match self.side {
            Side::Bottom => Point::new(anchor_center + m, b.y0),
            Side::Top => Point::new(anchor_center + m, b.y1),
            Side::Left => Point::new(b.x1, anchor_center - m),
            Side::Right => Point::new(b.x0, anchor_center - m),
        }
    }
}

/// The anchor's center line in the local frame of a surface translated by `translation`.
///
/// Pass the anchor as measured, not an overflow-corrected copy, so the notch
/// keeps pointing at the real target.
pub fn anchor_center_local(anchor: Rect, translation: Vec2, side: Side) -> f64 {
    let c = anchor.center();
    if side.is_horizontal() {
        c.y - translation.y
    } else {
        c.x - translation.x
    }
}
