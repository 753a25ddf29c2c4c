// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow correction on a narrow screen.
//!
//! Places the same bubble on each side of anchors near the screen edges and
//! prints what the resolver corrected: shrunk widths for left/right
//! placements, re-centered anchors for top/bottom ones.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_overflow`

use kurbo::{Rect, Size};
use understory_bubble::{Alignment, Placement, PlacementResolver, Side};

const VIEWPORT: f64 = 360.0;

fn main() {
    let bubble = Size::new(160.0, 56.0);
    let cases = [
        ("left of a left-edge icon", Side::Left, Rect::new(40.0, 80.0, 80.0, 120.0)),
        ("right of a right-edge icon", Side::Right, Rect::new(280.0, 80.0, 320.0, 120.0)),
        ("below a right-edge icon", Side::Bottom, Rect::new(300.0, 80.0, 340.0, 120.0)),
        ("above a left-edge icon", Side::Top, Rect::new(8.0, 200.0, 48.0, 240.0)),
        ("below a centered icon", Side::Bottom, Rect::new(160.0, 80.0, 200.0, 120.0)),
    ];

    for (label, side, anchor) in cases {
        let resolver = PlacementResolver::new(Placement {
            side,
            align: Alignment::Start,
            distance: 8.0,
            ..Default::default()
        });
        let first = resolver.resolve(anchor, bubble, VIEWPORT);
        let size = Size::new(first.width_override.unwrap_or(bubble.width), bubble.height);
        let translation = if first.changed {
            resolver.reposition(&first, size)
        } else {
            first.translation
        };
        println!("== {label} ==");
        println!(
            "  changed={} width={:?} align={:?}",
            first.changed, first.width_override, first.alignment_override
        );
        println!(
            "  corrected anchor={:?}\n  translation={:?}",
            first.corrected_anchor, translation
        );
        if !side.is_horizontal() && size.width <= VIEWPORT {
            assert!(translation.x >= 0.0 && translation.x + size.width <= VIEWPORT);
        }
    }
}
