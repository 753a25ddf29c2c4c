// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow contract between a [`Tooltip`](crate::Tooltip) and the toolkit that displays it.
//!
//! ## Overview
//!
//! The host owns the display surface: it attaches and detaches the tooltip's
//! node, runs layout passes, draws paths, and runs timers and tweens.
//! The tooltip never blocks. Whenever it needs to wait, it hands the host a
//! [`Wake`] and the host passes it back to [`Tooltip::wake`](crate::Tooltip::wake)
//! when the wait is over.
//!
//! All calls happen on the host's event-loop thread, one callback turn at a time.
//!
//! ## Delivery rules
//!
//! - A wake handed to [`schedule_after_layout`](OverlayHost::schedule_after_layout)
//!   is delivered once, after the next layout pass.
//! - A wake handed to [`schedule_delayed`](OverlayHost::schedule_delayed) is
//!   delivered once after the delay, unless the returned [`TimerId`] is cancelled first.
//! - A wake handed to [`run_animation`](OverlayHost::run_animation) is delivered
//!   once when the tween completes, even for a zero duration.
//!
//! Late or duplicate deliveries are tolerated; the tooltip ignores wakes that
//! do not match its state.

use core::time::Duration;

use kurbo::{BezPath, Rect, Size, Vec2};
use understory_bubble::{Argb, BubbleStyle};

/// Continuation handed to the host and passed back when a wait completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Wake {
    /// The show delay elapsed.
    ShowDelay,
    /// A layout pass settled.
    Layout,
    /// The auto-hide timer elapsed.
    AutoHide,
    /// The enter animation completed.
    EnterFinished,
    /// The exit animation completed.
    ExitFinished,
}

/// Handle of a host timer, used to cancel it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Where a tap landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapRegion {
    /// On the bubble itself.
    Bubble,
    /// On the dimming backdrop around it.
    Backdrop,
    /// On the ghost copy of the anchor drawn above the backdrop.
    Ghost,
}

/// What the host attaches besides the bubble surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlay {
    /// Color of a full-screen backdrop under the bubble. `None` for no backdrop.
    pub backdrop: Option<Argb>,
    /// Whether the host draws a snapshot of the anchor above the backdrop.
    pub ghost_anchor: bool,
}

impl Overlay {
    /// A dimming backdrop with the anchor cloned above it.
    pub fn dimmed(color: Argb) -> Self {
        Self {
            backdrop: Some(color),
            ghost_anchor: true,
        }
    }
}

/// Whether an animation brings the tooltip in or takes it out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    /// Entering.
    Enter,
    /// Exiting.
    Exit,
}

/// An alpha tween for the host to run on the tooltip's node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Enter or exit.
    pub phase: AnimationPhase,
    /// Opacity at the start.
    pub from_alpha: f64,
    /// Opacity at the end.
    pub to_alpha: f64,
    /// Tween length. Zero completes on the next turn.
    pub duration: Duration,
}

/// Display-side collaborator of a [`Tooltip`](crate::Tooltip).
///
/// One host instance serves one tooltip: "the node" below is that tooltip's
/// surface, which the host creates on [`attach`](Self::attach).
pub trait OverlayHost {
    /// Absolute on-screen bounds of the anchor, or `None` if it left the display tree.
    fn measure_anchor(&self) -> Option<Rect>;

    /// Width of the container the tooltip is attached to.
    fn viewport_width(&self) -> f64;

    /// Size of the node as of the last layout pass.
    fn surface_size(&self) -> Size;

    /// Attach the node (initially transparent) and any overlay to the container.
    fn attach(&mut self, overlay: &Overlay);

    /// Remove the node and overlay. Must be a no-op when nothing is attached.
    fn detach(&mut self);

    /// Constrain the node's width for the next layout pass.
    fn set_width(&mut self, width: f64);

    /// Move the node to `translation` in container coordinates.
    fn set_translation(&mut self, translation: Vec2);

    /// Draw `outline` in node-local coordinates with `style`.
    fn draw(&mut self, outline: &BezPath, style: &BubbleStyle);

    /// Erase whatever was drawn on the node.
    fn clear(&mut self);

    /// Deliver `wake` once, after the next layout pass.
    fn schedule_after_layout(&mut self, wake: Wake);

    /// Deliver `wake` once after `delay`.
    fn schedule_delayed(&mut self, wake: Wake, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Unknown or fired timers are ignored.
    fn cancel_timer(&mut self, timer: TimerId);

    /// Run `animation` on the node and deliver `on_complete` when it ends.
    ///
    /// Starting an animation supersedes any animation still running on the node.
    fn run_animation(&mut self, animation: &AnimationSpec, on_complete: Wake);
}
