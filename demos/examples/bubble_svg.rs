// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emit bubble outlines as SVG.
//!
//! Builds one outline per side with the default style and writes a small SVG
//! document to stdout. Pipe it to a file to look at the notch geometry.
//!
//! Run:
//! - `cargo run -p understory_demos --example bubble_svg > bubbles.svg`

use kurbo::{Rect, Size, Vec2};
use understory_bubble::{
    ArrowSpec, BubbleOutline, BubbleStyle, Fill, Side, anchor_center_local,
};

fn main() {
    let style = BubbleStyle::default();
    let size = Size::new(180.0, 90.0);
    let anchor = Rect::new(70.0, 0.0, 110.0, 40.0);
    let color = match style.fill {
        Fill::Solid(argb) => argb.0 & 0x00ff_ffff,
        Fill::LinearGradient { from, .. } => from.0 & 0x00ff_ffff,
    };

    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="840" height="140">"#);
    for (i, side) in [Side::Top, Side::Bottom, Side::Left, Side::Right]
        .into_iter()
        .enumerate()
    {
        let outline = BubbleOutline::for_surface(size, &style, side, ArrowSpec::default());
        // Pretend the surface sits at the origin, so the anchor center maps straight through.
        let center = anchor_center_local(anchor, Vec2::ZERO, side);
        let path = outline.path(Some(center));
        println!(
            r##"  <path transform="translate({} 20)" fill="#{:06x}" d="{}"/>"##,
            10 + i * 210,
            color,
            path.to_svg()
        );
    }
    println!("</svg>");
}
