// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full tooltip show cycle against the headless host.
//!
//! Shows a tooltip below a button, lets it auto-hide after one second, and
//! prints the timeline along with every call the tooltip made on its host.
//! Lifecycle transitions are logged at debug level.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_lifecycle`

use core::time::Duration;

use kurbo::{Rect, Size};
use understory_tooltip::headless::HeadlessHost;
use understory_tooltip::{LifecycleState, Tooltip, TooltipConfig, TooltipEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let button = Rect::new(24.0, 120.0, 144.0, 168.0);
    let mut host = HeadlessHost::new(Some(button), 360.0, Size::new(220.0, 72.0));
    let config = TooltipConfig::default().auto_hide(true, Duration::from_secs(1));
    let mut tooltip = Tooltip::new(config);

    tooltip.show(&mut host);
    let events = host.run_until_idle(&mut tooltip);

    println!("== Timeline ==");
    for (at, event) in &events {
        println!("  {:>5}ms  {:?}", at.as_millis(), event);
    }
    println!("== Host calls ==");
    for call in host.calls() {
        println!("  {:?}", call);
    }
    if let Some(placement) = tooltip.placement() {
        println!(
            "== Placement ==\n  corrected={} anchor={:?} translation={:?}",
            placement.changed,
            placement.corrected_anchor,
            tooltip.translation()
        );
    }

    assert_eq!(
        events,
        vec![
            (Duration::from_millis(500), TooltipEvent::Displayed),
            (Duration::from_millis(1900), TooltipEvent::Hidden),
        ]
    );
    assert_eq!(tooltip.state(), LifecycleState::Removed);
}
