//! Text schematic rendering for resolved dividers.
//!
//! Presentation only: reads the divider's values and their part
//! decomposition, feeds nothing back. Taking `&VoltageDivider` means it can
//! only ever see a fully resolved, validated divider.

use std::fmt::Write;

use crate::divider::VoltageDivider;
use crate::unit::Ohm;

/// Draws a divider top to bottom: source, top leg, tap, bottom leg, ground.
///
/// A leg built from catalog parts in series gets one box per part.
///
/// ```text
/// v1 = 5V
///   │
///  [2200Ω]
///   │
///   ├── v2 = 3.308±0.008V
///  [1000Ω]
///   │
///  [3300Ω]
///   │
///  ─┴─
/// ```
pub fn render(divider: &VoltageDivider) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "v1 = {}", divider.v1);
    out.push_str("  │\n");
    leg(&mut out, &divider.r1);
    let _ = writeln!(out, "  ├── v2 = {}", divider.v2);
    leg(&mut out, &divider.r2);
    out.push_str(" ─┴─\n");
    out
}

fn leg(out: &mut String, r: &Ohm) {
    match r.parts() {
        Some(parts) => {
            for part in parts {
                let _ = writeln!(out, " [{}]\n  │", part);
            }
        }
        None => {
            let _ = writeln!(out, " [{}]\n  │", r);
        }
    }
}
