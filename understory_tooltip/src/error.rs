// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal conditions a tooltip absorbs.
//!
//! Nothing here is returned as an `Err` from the public API. Each condition is
//! logged and appended to [`Tooltip::degradations`](crate::Tooltip::degradations);
//! the worst outcome is a tooltip that draws nothing.

use understory_bubble::Side;

use crate::host::{TapRegion, Wake};
use crate::lifecycle::LifecycleState;

/// What asked the tooltip to change state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// [`Tooltip::show`](crate::Tooltip::show).
    Show,
    /// [`Tooltip::close`](crate::Tooltip::close).
    Close,
    /// [`Tooltip::close_now`](crate::Tooltip::close_now).
    CloseNow,
    /// A tap.
    Tap(TapRegion),
    /// A host continuation.
    Wake(Wake),
}

/// A condition the tooltip degraded around instead of failing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Degradation {
    /// The anchor measured with no area.
    #[error("anchor has no area at measurement time; drawing nothing")]
    MissingAnchor,
    /// The anchor left the display tree between `show` and measurement.
    #[error("anchor left the display tree before measurement; drawing nothing")]
    DetachedTargetDuringMeasure,
    /// A trigger arrived in a state that does not accept it.
    #[error("{trigger:?} ignored in state {state:?}")]
    DoubleTransition {
        /// State at the time.
        state: LifecycleState,
        /// The ignored trigger.
        trigger: Trigger,
    },
    /// A negative style or arrow value was clamped to `0`.
    #[error("negative `{field}` clamped to 0")]
    InvalidStyleInput {
        /// Name of the first offending field.
        field: &'static str,
    },
    /// Overflow correction left no width beside the anchor.
    #[error("no room for the bubble on side {side:?}; width clamped to 0")]
    NoRoomForBubble {
        /// The configured side.
        side: Side,
    },
}
