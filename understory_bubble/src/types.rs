// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for bubbles: sides, alignment, arrow geometry, and style.
//!
//! All lengths are in the host's pixel space (`f64`). Every style value that
//! describes a size is clamped to `0` by the `normalized` helpers; nothing in
//! this crate rejects input.

use kurbo::{Insets, Point, Rect, RoundedRectRadii, Size};

/// Which edge of the anchor the bubble sits against.
///
/// The arrow notch is carried by the bubble edge facing the anchor, which is
/// the [`opposite`](Self::opposite) of this side: a bubble placed at
/// [`Bottom`](Self::Bottom) points up from its top edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Left of the anchor; the arrow is on the bubble's right edge.
    Left,
    /// Right of the anchor; the arrow is on the bubble's left edge.
    Right,
    /// Above the anchor; the arrow is on the bubble's bottom edge.
    Top,
    /// Below the anchor; the arrow is on the bubble's top edge.
    #[default]
    Bottom,
}

impl Side {
    /// True for [`Left`](Self::Left) and [`Right`](Self::Right), where the
    /// bubble sits beside the anchor and its cross axis is vertical.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The opposite side. This is the bubble edge that carries the notch.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Cross-axis distribution of the bubble relative to the anchor's extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Bubble and anchor share their leading edge.
    Start,
    /// Bubble is centered on the anchor.
    #[default]
    Center,
    /// Bubble and anchor share their trailing edge.
    End,
}

/// Geometry of the arrow notch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowSpec {
    /// Distance from the bubble body to the notch tip.
    pub height: f64,
    /// Distance from the notch center line to each of its two base corners.
    pub width: f64,
    /// Offset of the notch base along the bubble edge.
    pub source_margin: f64,
    /// Offset of the notch tip along the bubble edge.
    pub target_margin: f64,
}

impl Default for ArrowSpec {
    fn default() -> Self {
        Self {
            height: 15.0,
            width: 15.0,
            source_margin: 0.0,
            target_margin: 0.0,
        }
    }
}

impl ArrowSpec {
    /// Clamp `height` and `width` to be non-negative.
    ///
    /// Margins are signed offsets and are left untouched.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            height: self.height.max(0.0),
            width: self.width.max(0.0),
            ..self
        }
    }

    /// Name of the first dimension that [`normalized`](Self::normalized) would change.
    pub fn negative_field(&self) -> Option<&'static str> {
        if is_negative(self.height) {
            Some("arrow.height")
        } else if is_negative(self.width) {
            Some("arrow.width")
        } else {
            None
        }
    }
}

/// A packed `0xAARRGGBB` color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);

    /// Alpha channel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The shift leaves only the top byte."
    )]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// How the bubble body is filled.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fill {
    /// A single color.
    Solid(Argb),
    /// A two-stop linear gradient between two points in surface-local space.
    LinearGradient {
        /// Gradient start point.
        start: Point,
        /// Gradient end point.
        end: Point,
        /// Color at `start`.
        from: Argb,
        /// Color at `end`.
        to: Argb,
    },
}

impl Default for Fill {
    fn default() -> Self {
        Self::Solid(Argb(0xff1f_7c82))
    }
}

/// Stroke drawn over the outline after the fill.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// Stroke color.
    pub color: Argb,
    /// Stroke width.
    pub width: f64,
}

/// Drop shadow under the bubble. Rendering is up to the host.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Whether the shadow is drawn and its inset reserved.
    pub enabled: bool,
    /// Shadow color.
    pub color: Argb,
    /// Blur radius handed to the host.
    pub blur_radius: f64,
    /// Space reserved on every side of the surface so the shadow is not clipped.
    pub inset: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Argb(0xffaa_aaaa),
            blur_radius: 8.0,
            inset: 4.0,
        }
    }
}

/// Visual style of a bubble.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BubbleStyle {
    /// Uniform corner radius.
    pub corner_radius: f64,
    /// Space between the bubble body and its content.
    pub padding: Insets,
    /// Body fill.
    pub fill: Fill,
    /// Optional stroke.
    pub border: Option<Border>,
    /// Drop shadow.
    pub shadow: Shadow,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            corner_radius: 15.0,
            padding: Insets::new(30.0, 20.0, 30.0, 30.0),
            fill: Fill::default(),
            border: None,
            shadow: Shadow::default(),
        }
    }
}

impl BubbleStyle {
    /// Clamp radius, padding, border width, and shadow dimensions to be non-negative.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            corner_radius: self.corner_radius.max(0.0),
            padding: clamp_insets(self.padding),
            border: self.border.map(|b| Border {
                width: b.width.max(0.0),
                ..b
            }),
            shadow: Shadow {
                blur_radius: self.shadow.blur_radius.max(0.0),
                inset: self.shadow.inset.max(0.0),
                ..self.shadow
            },
            ..self
        }
    }

    /// Name of the first value that [`normalized`](Self::normalized) would change.
    pub fn negative_field(&self) -> Option<&'static str> {
        let p = self.padding;
        let checks = [
            ("corner_radius", self.corner_radius),
            ("padding.left", p.x0),
            ("padding.top", p.y0),
            ("padding.right", p.x1),
            ("padding.bottom", p.y1),
            ("border.width", self.border.map_or(0.0, |b| b.width)),
            ("shadow.blur_radius", self.shadow.blur_radius),
            ("shadow.inset", self.shadow.inset),
        ];
        checks
            .into_iter()
            .find(|&(_, v)| is_negative(v))
            .map(|(name, _)| name)
    }

    /// Uniform radii for the four corners.
    pub fn radii(&self) -> RoundedRectRadii {
        RoundedRectRadii::from_single_radius(self.corner_radius.max(0.0))
    }

    /// Local outline bounds for a surface of `size`: the surface rect shrunk by
    /// the shadow inset when the shadow is enabled.
    pub fn surface_bounds(&self, size: Size) -> Rect {
        let surface = Rect::from_origin_size(Point::ZERO, size);
        if self.shadow.enabled {
            surface - Insets::uniform(self.shadow.inset.max(0.0))
        } else {
            surface
        }
    }

    /// Insets the host applies to the content so it stays clear of the body
    /// edges and of the notch on the edge facing the anchor.
    pub fn content_insets(&self, side: Side, arrow: &ArrowSpec) -> Insets {
        let mut insets = clamp_insets(self.padding);
        let h = arrow.height.max(0.0);
        match side.opposite() {
            Side::Left => insets.x0 += h,
            Side::Top => insets.y0 += h,
            Side::Right => insets.x1 += h,
            Side::Bottom => insets.y1 += h,
        }
        insets
    }
}

/// True for values that normalization replaces with `0` (negative or NaN).
fn is_negative(v: f64) -> bool {
    v.is_nan() || v < 0.0
}

/// Clamp each side of `insets` to be non-negative.
pub fn clamp_insets(insets: Insets) -> Insets {
    Insets::new(
        insets.x0.max(0.0),
        insets.y0.max(0.0),
        insets.x1.max(0.0),
        insets.y1.max(0.0),
    )
}

/// Clamp each corner of `radii` to be non-negative.
pub fn clamp_radii(radii: RoundedRectRadii) -> RoundedRectRadii {
    RoundedRectRadii::new(
        radii.top_left.max(0.0),
        radii.top_right.max(0.0),
        radii.bottom_right.max(0.0),
        radii.bottom_left.max(0.0),
    )
}
