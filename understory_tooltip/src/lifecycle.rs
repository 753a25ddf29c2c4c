// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip state machine.
//!
//! ## Usage
//!
//! 1) Build a [`Tooltip`] from a [`TooltipConfig`] and call [`Tooltip::show`].
//! 2) Forward every [`Wake`] the host was handed to [`Tooltip::wake`], and taps to
//!    [`Tooltip::tap`].
//! 3) React to the returned [`TooltipEvent`]s.
//!
//! ## States
//!
//! ```text
//! Pending ─(show delay)─▶ Measuring ─(layout, maybe twice)─▶ Visible
//!    Visible ─(enter done)─▶ AutoHideArmed ─(timer | tap | close)─▶ Exiting ─(exit done)─▶ Removed
//! ```
//!
//! `Visible` also goes straight to `Exiting` on [`Tooltip::close`] or a bubble tap, and stays put
//! after the enter animation when no [`HideTriggers`] are configured.
//! Closing before `Visible` tears down without events.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{BezPath, Rect, Size, Vec2};
use tracing::{debug, debug_span, trace, warn};
use understory_bubble::{
    BubbleOutline, PlacementResolver, PlacementResult, Side, anchor_center_local,
};

use crate::animation::{FadeAnimation, TooltipAnimation};
use crate::config::{HideTriggers, TooltipConfig};
use crate::error::{Degradation, Trigger};
use crate::host::{OverlayHost, TapRegion, TimerId, Wake};

/// Recorded degradations past this many are logged and dropped.
const MAX_DEGRADATIONS: usize = 32;

/// Where a [`Tooltip`] is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Constructed, not attached.
    #[default]
    Pending,
    /// Attached and invisible, waiting for layout to read geometry.
    Measuring,
    /// Positioned and drawn; the enter animation runs or has run.
    Visible,
    /// Displayed with an auto-hide timer or tap-to-hide armed.
    AutoHideArmed,
    /// The exit animation runs.
    Exiting,
    /// Detached. Terminal.
    Removed,
}

impl LifecycleState {
    /// Whether the bubble is on screen and accepts taps.
    pub fn is_on_screen(self) -> bool {
        matches!(self, Self::Visible | Self::AutoHideArmed)
    }
}

/// What a tooltip reports back to its owner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TooltipEvent {
    /// The enter animation completed. At most once per tooltip.
    Displayed,
    /// The tooltip was detached after having been positioned. At most once per tooltip.
    Hidden,
    /// A tap landed while the tooltip was on screen.
    Tapped(TapRegion),
}

/// One tooltip, from `show` to detachment.
///
/// The tooltip never calls back into its owner. Every entry point takes the
/// host it should drive and returns the events produced during that turn.
///
/// ```
/// use core::time::Duration;
/// use kurbo::{Rect, Size};
/// use understory_tooltip::headless::HeadlessHost;
/// use understory_tooltip::{LifecycleState, Tooltip, TooltipConfig, TooltipEvent};
///
/// let mut host = HeadlessHost::new(
///     Some(Rect::new(100.0, 40.0, 180.0, 70.0)),
///     1080.0,
///     Size::new(160.0, 60.0),
/// );
/// let config = TooltipConfig::default().auto_hide(true, Duration::from_secs(1));
/// let mut tooltip = Tooltip::new(config);
///
/// assert!(tooltip.show(&mut host).is_empty());
/// let events = host.run_until_idle(&mut tooltip);
/// assert_eq!(
///     events,
///     vec![
///         (Duration::from_millis(500), TooltipEvent::Displayed),
///         (Duration::from_millis(1900), TooltipEvent::Hidden),
///     ]
/// );
/// assert_eq!(tooltip.state(), LifecycleState::Removed);
/// ```
#[derive(Debug)]
pub struct Tooltip {
    config: TooltipConfig,
    resolver: PlacementResolver,
    animation: Box<dyn TooltipAnimation>,
    state: LifecycleState,
    /// The one continuation this tooltip accepts next, besides the auto-hide timer.
    awaiting: Option<Wake>,
    show_requested: bool,
    show_timer: Option<TimerId>,
    hide_timer: Option<TimerId>,
    attached: bool,
    anchor: Option<Rect>,
    placement: Option<PlacementResult>,
    size: Size,
    translation: Vec2,
    outline: BezPath,
    degradations: Vec<Degradation>,
}

impl Tooltip {
    /// Create a pending tooltip with the default fade animation.
    ///
    /// Negative style and arrow dimensions are clamped to `0` and recorded as
    /// [`Degradation::InvalidStyleInput`].
    pub fn new(mut config: TooltipConfig) -> Self {
        let mut degradations = Vec::new();
        for field in [config.arrow.negative_field(), config.style.negative_field()]
            .into_iter()
            .flatten()
        {
            let degradation = Degradation::InvalidStyleInput { field };
            warn!(%degradation, "tooltip degraded");
            degradations.push(degradation);
        }
        config.arrow = config.arrow.normalized();
        config.style = config.style.normalized();
        Self {
            resolver: PlacementResolver::new(config.placement),
            config,
            animation: Box::new(FadeAnimation::default()),
            state: LifecycleState::Pending,
            awaiting: None,
            show_requested: false,
            show_timer: None,
            hide_timer: None,
            attached: false,
            anchor: None,
            placement: None,
            size: Size::ZERO,
            translation: Vec2::ZERO,
            outline: BezPath::new(),
            degradations,
        }
    }

    /// Replace the enter and exit animation.
    #[must_use]
    pub fn with_animation(mut self, animation: impl TooltipAnimation + 'static) -> Self {
        self.animation = Box::new(animation);
        self
    }

    /// The normalized configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Conditions absorbed so far, oldest first, up to 32 entries.
    pub fn degradations(&self) -> &[Degradation] {
        &self.degradations
    }

    /// Result of the first placement pass, once the anchor was measured.
    pub fn placement(&self) -> Option<&PlacementResult> {
        self.placement.as_ref()
    }

    /// Current translation of the surface in container coordinates.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Last outline handed to the host. Empty when nothing was drawn.
    pub fn outline(&self) -> &BezPath {
        &self.outline
    }

    /// Start the show cycle. Attaching waits for [`TooltipConfig::show_delay`].
    pub fn show<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Vec<TooltipEvent> {
        if self.state != LifecycleState::Pending || self.show_requested {
            self.ignore(Trigger::Show);
            return Vec::new();
        }
        self.show_requested = true;
        self.awaiting = Some(Wake::ShowDelay);
        self.show_timer = Some(host.schedule_delayed(Wake::ShowDelay, self.config.show_delay));
        debug!(delay = ?self.config.show_delay, "tooltip show requested");
        Vec::new()
    }

    /// Resume after a host continuation completed.
    pub fn wake<H: OverlayHost + ?Sized>(&mut self, host: &mut H, wake: Wake) -> Vec<TooltipEvent> {
        let mut events = Vec::new();
        if wake == Wake::AutoHide
            && self.state == LifecycleState::AutoHideArmed
            && self.hide_timer.is_some()
        {
            self.hide_timer = None;
            debug!("tooltip auto-hide elapsed");
            self.begin_exit(host);
            return events;
        }
        if self.awaiting != Some(wake) {
            self.ignore(Trigger::Wake(wake));
            return events;
        }
        self.awaiting = None;
        match wake {
            Wake::ShowDelay => {
                self.show_timer = None;
                host.attach(&self.config.overlay);
                self.attached = true;
                self.transition(LifecycleState::Measuring);
                self.await_layout(host);
            }
            Wake::Layout => self.on_layout(host),
            Wake::EnterFinished => {
                events.push(TooltipEvent::Displayed);
                let triggers = self.config.triggers;
                if triggers.contains(HideTriggers::AUTO_HIDE) {
                    self.hide_timer =
                        Some(host.schedule_delayed(Wake::AutoHide, self.config.auto_hide_after));
                }
                if !triggers.is_empty() {
                    self.transition(LifecycleState::AutoHideArmed);
                }
            }
            Wake::ExitFinished => {
                self.remove(host);
                events.push(TooltipEvent::Hidden);
            }
            // Only reachable through the armed timer above.
            Wake::AutoHide => {}
        }
        events
    }

    /// Begin the exit animation.
    ///
    /// Before the tooltip is positioned this tears down immediately with no
    /// events. Once exiting or removed it is ignored.
    pub fn close<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Vec<TooltipEvent> {
        match self.state {
            LifecycleState::Pending | LifecycleState::Measuring => {
                if self.show_requested {
                    self.remove(host);
                } else {
                    self.ignore(Trigger::Close);
                }
            }
            LifecycleState::Visible | LifecycleState::AutoHideArmed => self.begin_exit(host),
            LifecycleState::Exiting | LifecycleState::Removed => self.ignore(Trigger::Close),
        }
        Vec::new()
    }

    /// Detach at once, skipping the exit animation.
    pub fn close_now<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> Vec<TooltipEvent> {
        match self.state {
            LifecycleState::Pending | LifecycleState::Measuring => {
                if self.show_requested {
                    self.remove(host);
                } else {
                    self.ignore(Trigger::CloseNow);
                }
                Vec::new()
            }
            LifecycleState::Visible | LifecycleState::AutoHideArmed | LifecycleState::Exiting => {
                self.remove(host);
                alloc::vec![TooltipEvent::Hidden]
            }
            LifecycleState::Removed => {
                self.ignore(Trigger::CloseNow);
                Vec::new()
            }
        }
    }

    /// Report a tap. With [`HideTriggers::CLICK_TO_HIDE`], a bubble tap starts the
    /// exit from `Visible` (including mid enter animation) or `AutoHideArmed`.
    pub fn tap<H: OverlayHost + ?Sized>(
        &mut self,
        host: &mut H,
        region: TapRegion,
    ) -> Vec<TooltipEvent> {
        if !self.state.is_on_screen() {
            self.ignore(Trigger::Tap(region));
            return Vec::new();
        }
        let events = alloc::vec![TooltipEvent::Tapped(region)];
        if region == TapRegion::Bubble
            && self.config.triggers.contains(HideTriggers::CLICK_TO_HIDE)
        {
            self.begin_exit(host);
        }
        events
    }

    /// Follow a scroll of the anchor's scroll container by `delta`.
    ///
    /// The anchor moves by `-delta` on screen, and so does the bubble.
    pub fn ancestor_scrolled<H: OverlayHost + ?Sized>(&mut self, host: &mut H, delta: Vec2) {
        if !self.is_positioned() {
            trace!(?delta, state = ?self.state, "scroll before positioning ignored");
            return;
        }
        self.translation -= delta;
        self.anchor = self.anchor.map(|a| a - delta);
        if let Some(placement) = &mut self.placement {
            placement.corrected_anchor = placement.corrected_anchor - delta;
            placement.translation -= delta;
        }
        host.set_translation(self.translation);
    }

    /// Re-place and redraw after the surface changed size on screen.
    ///
    /// Overflow is checked again against the new size. A width correction is
    /// applied to the host right away and the bubble is placed at that width.
    pub fn surface_resized<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        if !self.is_positioned() || self.state == LifecycleState::Exiting {
            trace!(state = ?self.state, "resize ignored");
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let mut size = host.surface_size();
        let result = self.resolver.resolve(anchor, size, host.viewport_width());
        debug!(?size, changed = result.changed, "surface resized");
        if let Some(width) = result.width_override {
            if width <= 0.0 {
                self.degrade(Degradation::NoRoomForBubble {
                    side: self.side(),
                });
            }
            host.set_width(width);
            size.width = width;
        }
        self.placement = Some(result);
        self.size = size;
        self.translation = result.translation;
        host.set_translation(self.translation);
        self.redraw(host);
    }

    fn is_positioned(&self) -> bool {
        matches!(
            self.state,
            LifecycleState::Visible | LifecycleState::AutoHideArmed | LifecycleState::Exiting
        )
    }

    fn on_layout<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(placement) = self.placement {
            let _span = debug_span!("tooltip_remeasure").entered();
            let size = host.surface_size();
            self.finalize(host, placement, size);
            return;
        }

        let _span = debug_span!("tooltip_measure").entered();
        let anchor = match host.measure_anchor() {
            None => {
                self.degrade(Degradation::DetachedTargetDuringMeasure);
                self.finalize_empty(host);
                return;
            }
            Some(r) if !(r.width() > 0.0 && r.height() > 0.0) => {
                self.degrade(Degradation::MissingAnchor);
                self.finalize_empty(host);
                return;
            }
            Some(r) => r,
        };
        let size = host.surface_size();
        let result = self.resolver.resolve(anchor, size, host.viewport_width());
        debug!(?anchor, ?size, changed = result.changed, "anchor measured");
        self.anchor = Some(anchor);
        self.placement = Some(result);

        if let Some(width) = result.width_override {
            if width <= 0.0 {
                self.degrade(Degradation::NoRoomForBubble {
                    side: self.side(),
                });
            }
            host.set_width(width);
        }
        if result.changed {
            self.await_layout(host);
        } else {
            self.finalize(host, result, size);
        }
    }

    fn finalize<H: OverlayHost + ?Sized>(
        &mut self,
        host: &mut H,
        placement: PlacementResult,
        size: Size,
    ) {
        self.size = size;
        self.translation = self.resolver.reposition(&placement, size);
        host.set_translation(self.translation);
        self.redraw(host);
        self.enter(host);
    }

    fn finalize_empty<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        self.outline = BezPath::new();
        host.clear();
        self.enter(host);
    }

    fn redraw<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        let side = self.side();
        let outline =
            BubbleOutline::for_surface(self.size, &self.config.style, side, self.config.arrow);
        let center = self
            .anchor
            .map(|anchor| anchor_center_local(anchor, self.translation, side));
        self.outline = outline.path(center);
        if self.outline.elements().is_empty() {
            host.clear();
        } else {
            host.draw(&self.outline, &self.config.style);
        }
    }

    fn enter<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        self.transition(LifecycleState::Visible);
        self.awaiting = Some(Wake::EnterFinished);
        host.run_animation(&self.animation.enter(), Wake::EnterFinished);
    }

    fn begin_exit<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(timer) = self.hide_timer.take() {
            host.cancel_timer(timer);
        }
        self.transition(LifecycleState::Exiting);
        self.awaiting = Some(Wake::ExitFinished);
        host.run_animation(&self.animation.exit(), Wake::ExitFinished);
    }

    fn await_layout<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        self.awaiting = Some(Wake::Layout);
        host.schedule_after_layout(Wake::Layout);
    }

    /// Cancel everything outstanding and detach.
    fn remove<H: OverlayHost + ?Sized>(&mut self, host: &mut H) {
        for timer in [self.show_timer.take(), self.hide_timer.take()]
            .into_iter()
            .flatten()
        {
            host.cancel_timer(timer);
        }
        if self.attached {
            host.detach();
            self.attached = false;
        }
        self.awaiting = None;
        self.transition(LifecycleState::Removed);
    }

    fn side(&self) -> Side {
        self.config.placement.side
    }

    fn transition(&mut self, to: LifecycleState) {
        debug!(from = ?self.state, ?to, "tooltip transition");
        self.state = to;
    }

    fn degrade(&mut self, degradation: Degradation) {
        warn!(%degradation, "tooltip degraded");
        self.record(degradation);
    }

    /// Drop a trigger that does not apply in the current state.
    ///
    /// Only triggers that arrive while leaving or gone are recorded; the rest are
    /// early or redundant and only traced.
    fn ignore(&mut self, trigger: Trigger) {
        trace!(?trigger, state = ?self.state, "trigger ignored");
        if matches!(self.state, LifecycleState::Exiting | LifecycleState::Removed) {
            self.record(Degradation::DoubleTransition {
                state: self.state,
                trigger,
            });
        }
    }

    fn record(&mut self, degradation: Degradation) {
        if self.degradations.len() < MAX_DEGRADATIONS {
            self.degradations.push(degradation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::NoAnimation;
    use crate::headless::{HeadlessHost, HostCall};
    use crate::host::AnimationPhase;
    use alloc::vec;
    use core::time::Duration;
    use understory_bubble::{Alignment, Placement};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn right_start() -> Placement {
        Placement {
            side: Side::Right,
            align: Alignment::Start,
            distance: 10.0,
            ..Placement::default()
        }
    }

    fn setup(config: TooltipConfig) -> (HeadlessHost, Tooltip) {
        let host = HeadlessHost::new(
            Some(Rect::new(100.0, 200.0, 180.0, 230.0)),
            1080.0,
            Size::new(120.0, 50.0),
        );
        (host, Tooltip::new(config))
    }

    fn hidden_count(events: &[(Duration, TooltipEvent)]) -> usize {
        events
            .iter()
            .filter(|(_, e)| *e == TooltipEvent::Hidden)
            .count()
    }

    #[test]
    fn auto_hide_timeline() {
        let config = TooltipConfig {
            placement: right_start(),
            ..TooltipConfig::default()
        }
        .auto_hide(true, ms(1000));
        let (mut host, mut tip) = setup(config);

        assert!(tip.show(&mut host).is_empty());
        assert_eq!(tip.state(), LifecycleState::Pending);

        let events = host.run_until(&mut tip, ms(500));
        assert_eq!(events, vec![(ms(500), TooltipEvent::Displayed)]);
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);
        assert_eq!(tip.translation(), Vec2::new(190.0, 200.0));
        assert_eq!(host.translation(), Vec2::new(190.0, 200.0));
        assert!(host.drawn().is_some());

        assert!(host.run_until(&mut tip, ms(1499)).is_empty());
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);
        assert!(host.run_until(&mut tip, ms(1500)).is_empty());
        assert_eq!(tip.state(), LifecycleState::Exiting);

        let events = host.run_until_idle(&mut tip);
        assert_eq!(events, vec![(ms(1900), TooltipEvent::Hidden)]);
        assert_eq!(tip.state(), LifecycleState::Removed);
        assert!(!host.is_attached());
        assert!(tip.degradations().is_empty());
    }

    #[test]
    fn close_while_armed_hides_once() {
        let config = TooltipConfig::default().auto_hide(true, ms(1000));
        let (mut host, mut tip) = setup(config);
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);

        assert!(tip.close(&mut host).is_empty());
        assert_eq!(tip.state(), LifecycleState::Exiting);
        assert!(
            host.calls()
                .iter()
                .any(|c| matches!(c, HostCall::CancelTimer(_)))
        );

        // A second close and a late timer delivery are both no-ops.
        assert!(tip.close(&mut host).is_empty());
        assert!(tip.wake(&mut host, Wake::AutoHide).is_empty());
        assert_eq!(tip.state(), LifecycleState::Exiting);

        let events = host.run_until_idle(&mut tip);
        assert_eq!(events, vec![(ms(1000), TooltipEvent::Hidden)]);
        assert!(tip.wake(&mut host, Wake::AutoHide).is_empty());
        assert!(tip.wake(&mut host, Wake::ExitFinished).is_empty());
        assert_eq!(tip.state(), LifecycleState::Removed);
        assert!(tip.degradations().contains(&Degradation::DoubleTransition {
            state: LifecycleState::Exiting,
            trigger: Trigger::Close,
        }));
    }

    #[test]
    fn tap_beats_timer() {
        let config = TooltipConfig::default()
            .auto_hide(true, ms(1000))
            .click_to_hide(true);
        let (mut host, mut tip) = setup(config);
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));

        assert_eq!(
            tip.tap(&mut host, TapRegion::Bubble),
            vec![TooltipEvent::Tapped(TapRegion::Bubble)]
        );
        assert_eq!(tip.state(), LifecycleState::Exiting);
        // Taps after the first trigger do nothing.
        assert!(tip.tap(&mut host, TapRegion::Bubble).is_empty());

        let events = host.run_until_idle(&mut tip);
        assert_eq!(hidden_count(&events), 1);
        assert_eq!(host.now(), ms(1000));
    }

    #[test]
    fn backdrop_taps_are_reported_without_hiding() {
        let config = TooltipConfig::default().click_to_hide(true);
        let (mut host, mut tip) = setup(config);
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));

        assert_eq!(
            tip.tap(&mut host, TapRegion::Backdrop),
            vec![TooltipEvent::Tapped(TapRegion::Backdrop)]
        );
        assert_eq!(
            tip.tap(&mut host, TapRegion::Ghost),
            vec![TooltipEvent::Tapped(TapRegion::Ghost)]
        );
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);
    }

    #[test]
    fn bubble_tap_without_click_to_hide_keeps_tooltip() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));
        assert_eq!(
            tip.tap(&mut host, TapRegion::Bubble),
            vec![TooltipEvent::Tapped(TapRegion::Bubble)]
        );
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);
    }

    #[test]
    fn detached_anchor_still_cleans_up() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        host.set_anchor(None);
        tip.show(&mut host);

        let events = host.run_until_idle(&mut tip);
        assert_eq!(
            events,
            vec![
                (ms(500), TooltipEvent::Displayed),
                (ms(4900), TooltipEvent::Hidden),
            ]
        );
        assert_eq!(
            tip.degradations(),
            &[Degradation::DetachedTargetDuringMeasure]
        );
        assert!(tip.outline().elements().is_empty());
        assert!(host.drawn().is_none());
        assert!(host.calls().contains(&HostCall::Clear));
    }

    #[test]
    fn zero_sized_anchor_draws_nothing() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        host.set_anchor(Some(Rect::new(10.0, 10.0, 10.0, 10.0)));
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));
        assert_eq!(tip.degradations(), &[Degradation::MissingAnchor]);
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);
        assert!(host.drawn().is_none());
    }

    #[test]
    fn width_overflow_remeasures_once() {
        let config = TooltipConfig {
            placement: Placement {
                side: Side::Right,
                ..Placement::default()
            },
            ..TooltipConfig::default()
        };
        let mut host = HeadlessHost::new(
            Some(Rect::new(100.0, 100.0, 200.0, 130.0)),
            400.0,
            Size::new(220.0, 50.0),
        );
        let mut tip = Tooltip::new(config);
        tip.show(&mut host);
        host.run_until(&mut tip, ms(100));

        let layouts = host
            .calls()
            .iter()
            .filter(|c| **c == HostCall::ScheduleAfterLayout(Wake::Layout))
            .count();
        assert_eq!(layouts, 2);
        assert!(host.calls().contains(&HostCall::SetWidth(170.0)));
        assert_eq!(host.surface_size(), Size::new(170.0, 50.0));
        assert_eq!(tip.translation(), Vec2::new(200.0, 90.0));
        assert_eq!(tip.state(), LifecycleState::Visible);
    }

    #[test]
    fn no_room_is_recorded_and_lifecycle_continues() {
        let config = TooltipConfig {
            placement: Placement {
                side: Side::Right,
                ..Placement::default()
            },
            ..TooltipConfig::default()
        };
        let mut host = HeadlessHost::new(
            Some(Rect::new(300.0, 100.0, 340.0, 130.0)),
            360.0,
            Size::new(60.0, 50.0),
        );
        let mut tip = Tooltip::new(config);
        tip.show(&mut host);
        let events = host.run_until(&mut tip, ms(500));

        assert_eq!(events, vec![(ms(500), TooltipEvent::Displayed)]);
        assert!(host.calls().contains(&HostCall::SetWidth(0.0)));
        assert_eq!(
            tip.degradations(),
            &[Degradation::NoRoomForBubble { side: Side::Right }]
        );
        assert!(tip.outline().elements().is_empty());
    }

    #[test]
    fn close_before_visible_never_attaches() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(50));

        assert!(tip.close(&mut host).is_empty());
        assert_eq!(tip.state(), LifecycleState::Removed);
        assert!(host.run_until_idle(&mut tip).is_empty());
        assert!(
            !host
                .calls()
                .iter()
                .any(|c| matches!(c, HostCall::Attach(_)))
        );
    }

    #[test]
    fn close_during_measurement_detaches_silently() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        // Deliver the show delay but not the layout pass.
        assert!(tip.wake(&mut host, Wake::ShowDelay).is_empty());
        assert_eq!(tip.state(), LifecycleState::Measuring);

        assert!(tip.close_now(&mut host).is_empty());
        assert_eq!(tip.state(), LifecycleState::Removed);
        assert!(!host.is_attached());
    }

    #[test]
    fn close_now_skips_exit_animation() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));

        assert_eq!(tip.close_now(&mut host), vec![TooltipEvent::Hidden]);
        assert_eq!(tip.state(), LifecycleState::Removed);
        assert!(!host.is_attached());
        assert!(host.run_until_idle(&mut tip).is_empty());
        assert!(tip.close_now(&mut host).is_empty());
    }

    #[test]
    fn exit_preempting_enter_skips_displayed() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(300));
        assert_eq!(tip.state(), LifecycleState::Visible);

        tip.close(&mut host);
        let events = host.run_until_idle(&mut tip);
        assert_eq!(events, vec![(ms(700), TooltipEvent::Hidden)]);
    }

    #[test]
    fn bubble_tap_during_enter_fade_hides() {
        let (mut host, mut tip) = setup(TooltipConfig::default().click_to_hide(true));
        tip.show(&mut host);
        host.run_until(&mut tip, ms(300));
        assert_eq!(tip.state(), LifecycleState::Visible);

        let events = tip.tap(&mut host, TapRegion::Bubble);
        assert_eq!(events, vec![TooltipEvent::Tapped(TapRegion::Bubble)]);
        assert_eq!(tip.state(), LifecycleState::Exiting);
        let events = host.run_until_idle(&mut tip);
        assert_eq!(events, vec![(ms(700), TooltipEvent::Hidden)]);
        assert!(!host.is_attached());
    }

    #[test]
    fn no_triggers_stays_visible() {
        let mut config = TooltipConfig::default();
        config.triggers = HideTriggers::empty();
        let (mut host, mut tip) = setup(config);
        tip.show(&mut host);
        let events = host.run_until_idle(&mut tip);
        assert_eq!(events, vec![(ms(500), TooltipEvent::Displayed)]);
        assert_eq!(tip.state(), LifecycleState::Visible);
        tip.close(&mut host);
        assert_eq!(hidden_count(&host.run_until_idle(&mut tip)), 1);
    }

    #[test]
    fn zero_duration_animation_completes() {
        let (mut host, tip) = setup(TooltipConfig::default().auto_hide(true, ms(50)));
        let mut tip = tip.with_animation(NoAnimation);
        tip.show(&mut host);
        let events = host.run_until_idle(&mut tip);
        assert_eq!(
            events,
            vec![
                (ms(100), TooltipEvent::Displayed),
                (ms(150), TooltipEvent::Hidden),
            ]
        );
        assert!(host.calls().iter().any(|c| matches!(
            c,
            HostCall::RunAnimation { phase: AnimationPhase::Exit, duration, .. } if duration.is_zero()
        )));
    }

    #[test]
    fn scroll_moves_bubble_with_anchor() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.ancestor_scrolled(&mut host, Vec2::new(0.0, 5.0));
        assert_eq!(tip.translation(), Vec2::ZERO);

        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));
        let before = tip.translation();
        tip.ancestor_scrolled(&mut host, Vec2::new(0.0, 25.0));
        assert_eq!(tip.translation(), before - Vec2::new(0.0, 25.0));
        assert_eq!(host.translation(), tip.translation());
    }

    #[test]
    fn resize_after_display_redraws() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));
        let before = tip.outline().clone();

        host.set_content_size(Size::new(200.0, 80.0));
        tip.surface_resized(&mut host);
        assert_ne!(tip.outline(), &before);
        // Bottom, centered under an 80px anchor at x=100.
        assert_eq!(tip.translation(), Vec2::new(40.0, 230.0));
        assert_eq!(tip.state(), LifecycleState::AutoHideArmed);
    }

    #[test]
    fn resize_past_the_edge_recenters() {
        let mut host = HeadlessHost::new(
            Some(Rect::new(200.0, 200.0, 280.0, 230.0)),
            300.0,
            Size::new(100.0, 50.0),
        );
        let mut tip = Tooltip::new(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));
        assert_eq!(tip.translation(), Vec2::new(190.0, 230.0));

        // Grown content would cross the right edge if only re-placed.
        host.set_content_size(Size::new(200.0, 80.0));
        tip.surface_resized(&mut host);
        assert_eq!(tip.translation(), Vec2::new(100.0, 230.0));
        assert!(tip.translation().x + 200.0 <= 300.0);
        assert!(tip.placement().is_some_and(|p| p.changed));
    }

    #[test]
    fn ignored_triggers_after_removal_stay_bounded() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until_idle(&mut tip);
        assert_eq!(tip.state(), LifecycleState::Removed);

        for _ in 0..100 {
            tip.tap(&mut host, TapRegion::Bubble);
            tip.wake(&mut host, Wake::AutoHide);
        }
        assert_eq!(tip.degradations().len(), MAX_DEGRADATIONS);
        assert!(tip.degradations().iter().all(|d| matches!(
            d,
            Degradation::DoubleTransition {
                state: LifecycleState::Removed,
                ..
            }
        )));
    }

    #[test]
    fn negative_style_is_normalized() {
        let mut config = TooltipConfig::default();
        config.arrow.height = -3.0;
        config.style.corner_radius = -1.0;
        let tip = Tooltip::new(config);
        assert_eq!(
            tip.degradations(),
            &[
                Degradation::InvalidStyleInput {
                    field: "arrow.height"
                },
                Degradation::InvalidStyleInput {
                    field: "corner_radius"
                },
            ]
        );
        assert_eq!(tip.config().arrow.height, 0.0);
        assert_eq!(tip.config().style.corner_radius, 0.0);
    }

    #[test]
    fn show_twice_is_ignored() {
        let (mut host, mut tip) = setup(TooltipConfig::default());
        tip.show(&mut host);
        tip.show(&mut host);
        assert!(tip.degradations().is_empty());
        let timers = host
            .calls()
            .iter()
            .filter(|c| matches!(c, HostCall::ScheduleDelayed { wake: Wake::ShowDelay, .. }))
            .count();
        assert_eq!(timers, 1);
    }

    #[test]
    fn notch_points_at_real_anchor_after_recentering() {
        // Bottom bubble near the right edge gets shifted left; the tip must not move.
        let mut host = HeadlessHost::new(
            Some(Rect::new(200.0, 40.0, 240.0, 60.0)),
            250.0,
            Size::new(100.0, 48.0),
        );
        let mut tip = Tooltip::new(TooltipConfig::default());
        tip.show(&mut host);
        host.run_until(&mut tip, ms(600));

        let t = tip.translation();
        assert_eq!(t.x + 100.0, 250.0);
        let outline = BubbleOutline::for_surface(
            Size::new(100.0, 48.0),
            &tip.config().style,
            Side::Bottom,
            tip.config().arrow,
        );
        let tip_point = outline.tip(220.0 - t.x);
        assert!(
            tip.outline()
                .elements()
                .contains(&kurbo::PathEl::LineTo(tip_point))
        );
    }
}
