// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic [`OverlayHost`] with a virtual clock.
//!
//! [`HeadlessHost`] records every call a tooltip makes and delivers wakes in
//! time order when driven with [`HeadlessHost::run_until`]. Layout passes run
//! at the current instant; timers and animations run after their duration.
//! Use it to test lifecycles and to script demos without a toolkit.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{BezPath, Rect, Size, Vec2};
use understory_bubble::BubbleStyle;

use crate::host::{AnimationPhase, AnimationSpec, Overlay, OverlayHost, TimerId, Wake};
use crate::lifecycle::{Tooltip, TooltipEvent};

/// A call a tooltip made on a [`HeadlessHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    /// [`OverlayHost::attach`].
    Attach(Overlay),
    /// [`OverlayHost::detach`].
    Detach,
    /// [`OverlayHost::set_width`].
    SetWidth(f64),
    /// [`OverlayHost::set_translation`].
    SetTranslation(Vec2),
    /// [`OverlayHost::draw`], with the number of path elements.
    Draw {
        /// Elements in the drawn path.
        elements: usize,
    },
    /// [`OverlayHost::clear`].
    Clear,
    /// [`OverlayHost::schedule_after_layout`].
    ScheduleAfterLayout(Wake),
    /// [`OverlayHost::schedule_delayed`].
    ScheduleDelayed {
        /// Continuation.
        wake: Wake,
        /// Delay.
        delay: Duration,
        /// Handle returned to the tooltip.
        timer: TimerId,
    },
    /// [`OverlayHost::cancel_timer`].
    CancelTimer(TimerId),
    /// [`OverlayHost::run_animation`].
    RunAnimation {
        /// Enter or exit.
        phase: AnimationPhase,
        /// Tween length.
        duration: Duration,
        /// Continuation.
        wake: Wake,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PendingKind {
    Layout,
    Timer(TimerId),
    Animation { to_alpha_permille: u16 },
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    due: Duration,
    seq: u64,
    kind: PendingKind,
    wake: Wake,
}

/// In-memory host for one tooltip.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    now: Duration,
    anchor: Option<Rect>,
    viewport_width: f64,
    content: Size,
    width_override: Option<f64>,
    laid_out: Size,
    attached: bool,
    translation: Vec2,
    alpha: f64,
    drawn: Option<BezPath>,
    next_seq: u64,
    next_timer: u64,
    pending: Vec<Pending>,
    calls: Vec<HostCall>,
}

impl HeadlessHost {
    /// A host whose anchor measures `anchor`, inside a container
    /// `viewport_width` wide, showing content of natural size `content`.
    pub fn new(anchor: Option<Rect>, viewport_width: f64, content: Size) -> Self {
        Self {
            now: Duration::ZERO,
            anchor,
            viewport_width,
            content,
            width_override: None,
            laid_out: Size::ZERO,
            attached: false,
            translation: Vec2::ZERO,
            alpha: 0.0,
            drawn: None,
            next_seq: 0,
            next_timer: 0,
            pending: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Change what the anchor measures. `None` simulates an anchor that left the tree.
    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    /// Change the content's natural size and lay it out at once.
    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
        self.width_override = None;
        self.laid_out = content;
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Take the call log, leaving it empty.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        core::mem::take(&mut self.calls)
    }

    /// Whether the node is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last translation applied.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Node opacity as of the last completed animation.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The path on the node, if any.
    pub fn drawn(&self) -> Option<&BezPath> {
        self.drawn.as_ref()
    }

    /// Number of wakes waiting for delivery.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Deliver every wake due at or before `until`, in time order, then advance the clock to `until`.
    ///
    /// Returns the tooltip's events stamped with the time they occurred.
    pub fn run_until(
        &mut self,
        tooltip: &mut Tooltip,
        until: Duration,
    ) -> Vec<(Duration, TooltipEvent)> {
        let mut out = Vec::new();
        while let Some(next) = self.pop_due(Some(until)) {
            self.deliver(tooltip, next, &mut out);
        }
        self.now = self.now.max(until);
        out
    }

    /// Advance the clock by `delta`, delivering what falls due.
    pub fn run_for(
        &mut self,
        tooltip: &mut Tooltip,
        delta: Duration,
    ) -> Vec<(Duration, TooltipEvent)> {
        let until = self.now + delta;
        self.run_until(tooltip, until)
    }

    /// Deliver wakes until none remain. The clock stops at the last delivery.
    pub fn run_until_idle(&mut self, tooltip: &mut Tooltip) -> Vec<(Duration, TooltipEvent)> {
        let mut out = Vec::new();
        while let Some(next) = self.pop_due(None) {
            self.deliver(tooltip, next, &mut out);
        }
        out
    }

    fn deliver(
        &mut self,
        tooltip: &mut Tooltip,
        next: Pending,
        out: &mut Vec<(Duration, TooltipEvent)>,
    ) {
        self.now = self.now.max(next.due);
        match next.kind {
            PendingKind::Layout => {
                self.laid_out = Size::new(
                    self.width_override.unwrap_or(self.content.width),
                    self.content.height,
                );
            }
            PendingKind::Animation { to_alpha_permille } => {
                self.alpha = f64::from(to_alpha_permille) / 1000.0;
            }
            PendingKind::Timer(_) => {}
        }
        let now = self.now;
        out.extend(
            tooltip
                .wake(self, next.wake)
                .into_iter()
                .map(|event| (now, event)),
        );
    }

    fn pop_due(&mut self, until: Option<Duration>) -> Option<Pending> {
        let (index, next) = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| (p.due, p.seq))?;
        if until.is_some_and(|until| next.due > until) {
            return None;
        }
        Some(self.pending.remove(index))
    }

    fn push(&mut self, delay: Duration, kind: PendingKind, wake: Wake) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            kind,
            wake,
        });
    }
}

impl OverlayHost for HeadlessHost {
    fn measure_anchor(&self) -> Option<Rect> {
        self.anchor
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn surface_size(&self) -> Size {
        self.laid_out
    }

    fn attach(&mut self, overlay: &Overlay) {
        self.calls.push(HostCall::Attach(*overlay));
        self.attached = true;
        self.alpha = 0.0;
        self.width_override = None;
        self.laid_out = self.content;
    }

    fn detach(&mut self) {
        self.calls.push(HostCall::Detach);
        if !self.attached {
            return;
        }
        self.attached = false;
        self.drawn = None;
        self.pending
            .retain(|p| !matches!(p.kind, PendingKind::Animation { .. }));
    }

    fn set_width(&mut self, width: f64) {
        self.calls.push(HostCall::SetWidth(width));
        self.width_override = Some(width);
    }

    fn set_translation(&mut self, translation: Vec2) {
        self.calls.push(HostCall::SetTranslation(translation));
        self.translation = translation;
    }

    fn draw(&mut self, outline: &BezPath, _style: &BubbleStyle) {
        self.calls.push(HostCall::Draw {
            elements: outline.elements().len(),
        });
        self.drawn = Some(outline.clone());
    }

    fn clear(&mut self) {
        self.calls.push(HostCall::Clear);
        self.drawn = None;
    }

    fn schedule_after_layout(&mut self, wake: Wake) {
        self.calls.push(HostCall::ScheduleAfterLayout(wake));
        self.push(Duration::ZERO, PendingKind::Layout, wake);
    }

    fn schedule_delayed(&mut self, wake: Wake, delay: Duration) -> TimerId {
        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        self.calls.push(HostCall::ScheduleDelayed { wake, delay, timer });
        self.push(delay, PendingKind::Timer(timer), wake);
        timer
    }

    fn cancel_timer(&mut self, timer: TimerId) {
        self.calls.push(HostCall::CancelTimer(timer));
        self.pending
            .retain(|p| p.kind != PendingKind::Timer(timer));
    }

    fn run_animation(&mut self, animation: &AnimationSpec, on_complete: Wake) {
        self.calls.push(HostCall::RunAnimation {
            phase: animation.phase,
            duration: animation.duration,
            wake: on_complete,
        });
        // A new tween supersedes the running one, whose completion is dropped.
        self.pending
            .retain(|p| !matches!(p.kind, PendingKind::Animation { .. }));
        self.alpha = animation.from_alpha;
        let to_alpha_permille = alpha_permille(animation.to_alpha);
        self.push(
            animation.duration,
            PendingKind::Animation { to_alpha_permille },
            on_complete,
        );
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0..=1000 before the cast; NaN maps to 0"
)]
fn alpha_permille(alpha: f64) -> u16 {
    let scaled = alpha.clamp(0.0, 1.0) * 1000.0;
    // Round half up without `f64::round`, which needs std.
    (scaled + 0.5) as u16
}
