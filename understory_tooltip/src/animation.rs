// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter and exit animations.

use core::fmt::Debug;
use core::time::Duration;

use crate::host::{AnimationPhase, AnimationSpec};

/// Produces the tweens a tooltip asks its host to run.
pub trait TooltipAnimation: Debug {
    /// Tween run once the bubble is positioned and drawn.
    fn enter(&self) -> AnimationSpec;
    /// Tween run before the node is detached.
    fn exit(&self) -> AnimationSpec;
}

/// Alpha fade in and out. This is the default animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FadeAnimation {
    /// Length of each fade.
    pub duration: Duration,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
        }
    }
}

impl TooltipAnimation for FadeAnimation {
    fn enter(&self) -> AnimationSpec {
        AnimationSpec {
            phase: AnimationPhase::Enter,
            from_alpha: 0.0,
            to_alpha: 1.0,
            duration: self.duration,
        }
    }

    fn exit(&self) -> AnimationSpec {
        AnimationSpec {
            phase: AnimationPhase::Exit,
            from_alpha: 1.0,
            to_alpha: 0.0,
            duration: self.duration,
        }
    }
}

/// Appear and disappear at once.
///
/// The host still reports completion, so the lifecycle runs unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoAnimation;

impl TooltipAnimation for NoAnimation {
    fn enter(&self) -> AnimationSpec {
        FadeAnimation {
            duration: Duration::ZERO,
        }
        .enter()
    }

    fn exit(&self) -> AnimationSpec {
        FadeAnimation {
            duration: Duration::ZERO,
        }
        .exit()
    }
}
