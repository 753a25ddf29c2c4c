// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration with documented defaults.

use core::time::Duration;

use understory_bubble::{ArrowSpec, BubbleStyle, Placement};

use crate::host::Overlay;

bitflags::bitflags! {
    /// Which triggers dismiss a visible tooltip on their own.
    ///
    /// An explicit [`Tooltip::close`](crate::Tooltip::close) always works.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HideTriggers: u8 {
        /// Hide [`TooltipConfig::auto_hide_after`] after the tooltip is displayed.
        const AUTO_HIDE     = 0b0000_0001;
        /// Hide when the bubble is tapped.
        const CLICK_TO_HIDE = 0b0000_0010;
    }
}

impl Default for HideTriggers {
    fn default() -> Self {
        Self::AUTO_HIDE
    }
}

/// Everything a [`Tooltip`](crate::Tooltip) needs besides its host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipConfig {
    /// Side, alignment, distance, and screen margin. Default: below, centered, no gap, 30px margin.
    pub placement: Placement,
    /// Notch geometry. Default: 15x15, no margins.
    pub arrow: ArrowSpec,
    /// Bubble style. Default: radius 15, teal fill, grey shadow.
    pub style: BubbleStyle,
    /// Automatic dismissal. Default: [`HideTriggers::AUTO_HIDE`].
    pub triggers: HideTriggers,
    /// Auto-hide delay counted from the end of the enter animation. Default: 4s.
    pub auto_hide_after: Duration,
    /// Delay between [`Tooltip::show`](crate::Tooltip::show) and attaching,
    /// which lets pending layout settle before the anchor is read. Default: 100ms.
    pub show_delay: Duration,
    /// Backdrop and anchor ghost. Default: none.
    pub overlay: Overlay,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            arrow: ArrowSpec::default(),
            style: BubbleStyle::default(),
            triggers: HideTriggers::default(),
            auto_hide_after: Duration::from_millis(4000),
            show_delay: Duration::from_millis(100),
            overlay: Overlay::default(),
        }
    }
}

impl TooltipConfig {
    /// Set auto-hide on or off, with its delay.
    #[must_use]
    pub fn auto_hide(mut self, enabled: bool, after: Duration) -> Self {
        self.triggers.set(HideTriggers::AUTO_HIDE, enabled);
        self.auto_hide_after = after;
        self
    }

    /// Set click-to-hide on or off.
    #[must_use]
    pub fn click_to_hide(mut self, enabled: bool) -> Self {
        self.triggers.set(HideTriggers::CLICK_TO_HIDE, enabled);
        self
    }
}
