// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-relative placement with single-pass viewport overflow correction.
//!
//! ## Offset
//!
//! [`compute_offset`] translates a bubble of a given size so that it sits
//! against one side of the anchor, `distance` away from it, and distributes it
//! along the cross axis with [`align_offset`].
//!
//! ## Overflow
//!
//! [`adjust_for_overflow`] applies one of two strategies:
//!
//! - [`Side::Left`]/[`Side::Right`]: when the bubble does not fit beside the
//!   anchor, its width shrinks to the room that is left minus the screen margin
//!   and `distance`. The host must re-measure with that width.
//! - [`Side::Top`]/[`Side::Bottom`]: when the bubble, centered on the anchor,
//!   would cross a viewport edge, the *anchor reference* is moved instead and
//!   alignment is forced to [`Alignment::Center`]. The bubble keeps its width,
//!   so its content does not reflow.
//!
//! Correction is idempotent: feeding the corrected anchor and width back in
//! reports no further change, so a show cycle needs at most two passes.

use kurbo::{Rect, Size, Vec2};

use crate::types::{Alignment, Side};

/// Default gap kept between a shrunk bubble and the viewport edge.
pub const DEFAULT_SCREEN_MARGIN: f64 = 30.0;

/// Centers closer than this are treated as equal when detecting overflow.
const CENTER_EPSILON: f64 = 1e-6;

/// Where a bubble goes relative to its anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Side of the anchor.
    pub side: Side,
    /// Cross-axis alignment.
    pub align: Alignment,
    /// Gap between anchor and bubble along the main axis.
    pub distance: f64,
    /// Gap kept to the viewport edge when the bubble width is shrunk.
    pub screen_margin: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Alignment::Center,
            distance: 0.0,
            screen_margin: DEFAULT_SCREEN_MARGIN,
        }
    }
}

/// Cross-axis offset of a span of length `mine` against a span of length `his`.
///
/// `2 * align_offset(m, h, Center) == h - m` always holds.
pub fn align_offset(mine: f64, his: f64, align: Alignment) -> f64 {
    match align {
        Alignment::Start => 0.0,
        Alignment::Center => (his - mine) / 2.0,
        Alignment::End => his - mine,
    }
}

/// Translation that places a bubble of `size` against `side` of `anchor`.
pub fn compute_offset(
    anchor: Rect,
    size: Size,
    side: Side,
    align: Alignment,
    distance: f64,
) -> Vec2 {
    match side {
        Side::Left | Side::Right => {
            let x = if side == Side::Left {
                anchor.x0 - size.width - distance
            } else {
                anchor.x1 + distance
            };
            let y = anchor.y0 + align_offset(size.height, anchor.height(), align);
            Vec2::new(x, y)
        }
        Side::Top | Side::Bottom => {
            let y = if side == Side::Top {
                anchor.y0 - size.height - distance
            } else {
                anchor.y1 + distance
            };
            let x = anchor.x0 + align_offset(size.width, anchor.width(), align);
            Vec2::new(x, y)
        }
    }
}

/// Outcome of [`adjust_for_overflow`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Overflow {
    /// Whether anything differs from the input.
    pub changed: bool,
    /// Anchor reference to place against. Equal to the input unless a
    /// top/bottom bubble had to be re-centered.
    pub anchor: Rect,
    /// New bubble width for left/right placements that did not fit.
    pub width: Option<f64>,
    /// Alignment to use instead of the configured one.
    pub align: Option<Alignment>,
}

impl Overflow {
    fn unchanged(anchor: Rect) -> Self {
        Self {
            changed: false,
            anchor,
            width: None,
            align: None,
        }
    }
}

/// Detect and correct viewport overflow for a bubble of `size` on `side` of `anchor`.
///
/// Left and right placements that do not fit get a narrower width. Top and
/// bottom placements that cross an edge shift the anchor reference by the
/// overflow, then clip it to `[0, viewport_width]`, and force centered
/// alignment. A bubble wider than the viewport is the one exception: its
/// anchor reference is centered on the viewport instead of shifted.
///
/// Shrunk widths never go below `0`; a zero width means there is no room on
/// that side at all.
pub fn adjust_for_overflow(
    anchor: Rect,
    size: Size,
    side: Side,
    viewport_width: f64,
    distance: f64,
    screen_margin: f64,
) -> Overflow {
    match side {
        Side::Left | Side::Right => {
            let room = if side == Side::Left {
                (size.width > anchor.x0).then(|| anchor.x0 - screen_margin - distance)
            } else {
                (anchor.x1 + size.width > viewport_width)
                    .then(|| viewport_width - anchor.x1 - screen_margin - distance)
            };
            match room.map(|w| w.max(0.0)) {
                Some(width) if width != size.width => Overflow {
                    changed: true,
                    anchor,
                    width: Some(width),
                    align: None,
                },
                _ => Overflow::unchanged(anchor),
            }
        }
        Side::Top | Side::Bottom => {
            if !(viewport_width > 0.0 && size.width >= 0.0) {
                return Overflow::unchanged(anchor);
            }
            let half = size.width / 2.0;
            let center = anchor.center().x;
            let target = if size.width >= viewport_width {
                viewport_width / 2.0
            } else {
                center.max(half).min(viewport_width - half)
            };
            let delta = target - center;
            if delta < CENTER_EPSILON && delta > -CENTER_EPSILON {
                return Overflow::unchanged(anchor);
            }
            let corrected = if size.width >= viewport_width {
                // No shift fits both edges, so the anchor is centered on the viewport instead.
                let reach = (anchor.width() / 2.0).min(target).max(0.0);
                Rect::new(target - reach, anchor.y0, target + reach, anchor.y1)
            } else {
                Rect::new(
                    (anchor.x0 + delta).max(0.0),
                    anchor.y0,
                    (anchor.x1 + delta).min(viewport_width),
                    anchor.y1,
                )
            };
            Overflow {
                changed: true,
                anchor: corrected,
                width: None,
                align: Some(Alignment::Center),
            }
        }
    }
}

/// One resolution pass of a [`PlacementResolver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Translation of the bubble surface, computed against
    /// [`corrected_anchor`](Self::corrected_anchor) with the effective alignment and width.
    pub translation: Vec2,
    /// Anchor reference the translation was computed against.
    pub corrected_anchor: Rect,
    /// Width the host must apply before re-measuring.
    pub width_override: Option<f64>,
    /// Alignment that replaces the configured one.
    pub alignment_override: Option<Alignment>,
    /// Whether overflow correction changed anything. When set, the host
    /// re-measures and the translation is recomputed with
    /// [`PlacementResolver::reposition`].
    pub changed: bool,
}

/// Resolves bubble placement against an anchor and viewport.
///
/// ## Usage
///
/// 1) After the first layout, call [`resolve`](Self::resolve) with the
///    measured anchor, surface size, and viewport width.
/// 2) If the result is [`changed`](PlacementResult::changed), apply
///    [`width_override`](PlacementResult::width_override), let the host lay out
///    again, and call [`reposition`](Self::reposition) with the new size.
///
/// There is never a third pass.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_bubble::{Alignment, Placement, PlacementResolver, Side};
///
/// let resolver = PlacementResolver::new(Placement {
///     side: Side::Right,
///     align: Alignment::Start,
///     distance: 10.0,
///     ..Default::default()
/// });
/// let anchor = Rect::new(100.0, 200.0, 180.0, 230.0);
/// let result = resolver.resolve(anchor, Size::new(120.0, 50.0), 1080.0);
/// assert!(!result.changed);
/// assert_eq!(result.translation, Vec2::new(190.0, 200.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlacementResolver {
    placement: Placement,
}

impl PlacementResolver {
    /// Create a resolver for `placement`.
    pub fn new(placement: Placement) -> Self {
        Self { placement }
    }

    /// The configured placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// First pass: correct overflow and compute the translation.
    pub fn resolve(&self, anchor: Rect, size: Size, viewport_width: f64) -> PlacementResult {
        let Placement {
            side,
            align,
            distance,
            screen_margin,
        } = self.placement;
        let overflow =
            adjust_for_overflow(anchor, size, side, viewport_width, distance, screen_margin);
        let effective = Size::new(overflow.width.unwrap_or(size.width), size.height);
        PlacementResult {
            translation: compute_offset(
                overflow.anchor,
                effective,
                side,
                overflow.align.unwrap_or(align),
                distance,
            ),
            corrected_anchor: overflow.anchor,
            width_override: overflow.width,
            alignment_override: overflow.align,
            changed: overflow.changed,
        }
    }

    /// Second pass: recompute the translation of `previous` for the re-measured `size`.
    ///
    /// No further overflow correction is applied.
    pub fn reposition(&self, previous: &PlacementResult, size: Size) -> Vec2 {
        compute_offset(
            previous.corrected_anchor,
            size,
            self.placement.side,
            previous.alignment_override.unwrap_or(self.placement.align),
            self.placement.distance,
        )
    }
}
