// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bubble --heading-base-level=0

//! Understory Bubble: Kurbo-native speech-bubble geometry.
//!
//! Understory Bubble is the pure geometry half of a tooltip.
//!
//! - [`PlacementResolver`] places a bubble against one side of an anchor rectangle and corrects
//!   viewport overflow in a single pass.
//! - [`BubbleOutline`] builds the closed outline of a rounded bubble with an arrow notch pointing
//!   back at the anchor, as a [`kurbo::BezPath`].
//!
//! Nothing here has side effects or talks to a platform. The tooltip lifecycle that decides *when*
//! to measure, place, and draw lives in `understory_tooltip`.
//!
//! ## API overview
//!
//! - [`Side`], [`Alignment`]: where the bubble goes relative to the anchor.
//! - [`ArrowSpec`], [`BubbleStyle`]: notch geometry and visual style, with non-negative normalization.
//! - [`Placement`]: side, alignment, distance, and screen margin.
//! - [`compute_offset`], [`align_offset`], [`adjust_for_overflow`]: the placement primitives.
//! - [`anchor_center_local`]: maps the anchor center into the bubble surface's local frame.
//!
//! ## Not a layout engine
//!
//! Measuring content is the host's job. This crate only consumes measured sizes, and returns new
//! values from every pass instead of mutating shared layout state.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_bubble::{
//!     anchor_center_local, ArrowSpec, BubbleOutline, BubbleStyle, Placement, PlacementResolver,
//!     Side,
//! };
//!
//! let anchor = Rect::new(200.0, 40.0, 240.0, 60.0);
//! let size = Size::new(100.0, 48.0);
//! let placement = Placement { side: Side::Bottom, distance: 4.0, ..Default::default() };
//!
//! let result = PlacementResolver::new(placement).resolve(anchor, size, 250.0);
//! // The bubble would cross the right edge; the anchor reference was re-centered.
//! assert!(result.changed);
//! assert_eq!(result.translation.x + size.width, 250.0);
//!
//! let style = BubbleStyle::default();
//! let outline = BubbleOutline::for_surface(size, &style, Side::Bottom, ArrowSpec::default());
//! let center = anchor_center_local(anchor, result.translation, Side::Bottom);
//! let path = outline.path(Some(center));
//! assert!(!path.elements().is_empty());
//!
//! // No anchor, nothing to draw.
//! assert!(outline.path(None).elements().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod outline;
pub mod placement;
pub mod types;

pub use outline::{BubbleOutline, anchor_center_local};
pub use placement::{
    DEFAULT_SCREEN_MARGIN, Overflow, Placement, PlacementResolver, PlacementResult,
    adjust_for_overflow, align_offset, compute_offset,
};
pub use types::{Alignment, Argb, ArrowSpec, Border, BubbleStyle, Fill, Shadow, Side};
