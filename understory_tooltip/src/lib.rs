// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a sans-IO tooltip lifecycle.
//!
//! A [`Tooltip`] walks one bubble from `show` to detachment: it waits a short
//! show delay, attaches an invisible surface, measures the anchor after layout,
//! corrects viewport overflow (re-measuring at most once), draws the outline
//! from `understory_bubble`, fades in, and later fades out on a timer, a tap,
//! or an explicit close.
//!
//! The tooltip does no I/O of its own. Everything that touches a display tree
//! goes through the [`OverlayHost`] trait, and every wait is a [`Wake`] the host
//! hands back when it is done. Events come back as return values.
//!
//! ## API overview
//!
//! - [`Tooltip`]: the state machine. Entry points are `show`, `wake`, `close`,
//!   `close_now`, `tap`, `ancestor_scrolled`, and `surface_resized`.
//! - [`TooltipConfig`], [`HideTriggers`]: placement, style, triggers, and timings.
//! - [`OverlayHost`]: what the host implements.
//! - [`TooltipAnimation`]: enter and exit tweens; [`FadeAnimation`] by default.
//! - [`Degradation`]: conditions absorbed along the way, never returned as errors.
//! - [`headless::HeadlessHost`]: a host with a virtual clock for tests and demos.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_tooltip::headless::HeadlessHost;
//! use understory_tooltip::{LifecycleState, TapRegion, Tooltip, TooltipConfig, TooltipEvent};
//!
//! let mut host = HeadlessHost::new(
//!     Some(Rect::new(40.0, 300.0, 120.0, 330.0)),
//!     360.0,
//!     Size::new(200.0, 64.0),
//! );
//! let config = TooltipConfig::default().click_to_hide(true);
//! let mut tooltip = Tooltip::new(config);
//! tooltip.show(&mut host);
//!
//! let events = host.run_for(&mut tooltip, Duration::from_millis(500));
//! assert_eq!(events, vec![(Duration::from_millis(500), TooltipEvent::Displayed)]);
//!
//! // Tapping the bubble starts the fade out; the auto-hide timer is cancelled.
//! let tapped = tooltip.tap(&mut host, TapRegion::Bubble);
//! assert_eq!(tapped, vec![TooltipEvent::Tapped(TapRegion::Bubble)]);
//! assert_eq!(tooltip.state(), LifecycleState::Exiting);
//!
//! let events = host.run_until_idle(&mut tooltip);
//! assert_eq!(events, vec![(Duration::from_millis(900), TooltipEvent::Hidden)]);
//! assert!(!host.is_attached());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod error;
pub mod headless;
pub mod host;
pub mod lifecycle;

pub use animation::{FadeAnimation, NoAnimation, TooltipAnimation};
pub use config::{HideTriggers, TooltipConfig};
pub use error::{Degradation, Trigger};
pub use host::{AnimationPhase, AnimationSpec, Overlay, OverlayHost, TapRegion, TimerId, Wake};
pub use lifecycle::{LifecycleState, Tooltip, TooltipEvent};
