//! Deterministic text dump of a snapshot.

use std::fmt::Write;

use boxwood_core::{LayoutDirection, Margin};

use crate::snapshot::{EntryKind, LayoutSnapshot};

/// Render a snapshot as indented text, one line per entry.
///
/// ```text
/// viewport 800x600 ltr
/// box "root" at (10, 20) size 760x540 margin 10 20 30 40
///   leaf at (20, 40) size 100x100 margin 10 20 30 40 fill #ff0000
/// ```
pub fn to_text(snapshot: &LayoutSnapshot) -> String {
    let mut out = String::new();
    let direction = match snapshot.direction {
        LayoutDirection::Ltr => "ltr",
        LayoutDirection::Rtl => "rtl",
    };
    // Writing into a String cannot fail.
    let _ = writeln!(out, "viewport {} {}", snapshot.viewport, direction);

    for entry in &snapshot.entries {
        for _ in 0..entry.depth {
            out.push_str("  ");
        }
        out.push_str(match entry.kind {
            EntryKind::Box => "box",
            EntryKind::Leaf => "leaf",
        });
        if let Some(name) = &entry.name {
            let _ = write!(out, " {:?}", name);
        }
        let _ = write!(
            out,
            " at ({}, {}) size {}",
            entry.frame.x(),
            entry.frame.y(),
            entry.frame.size
        );
        if entry.margin != Margin::ZERO {
            let m = entry.margin;
            let _ = write!(
                out,
                " margin {} {} {} {}",
                m.start.value(),
                m.top.value(),
                m.end.value(),
                m.bottom.value()
            );
        }
        if let Some(color) = entry.color {
            let _ = write!(out, " fill {}", color.to_hex());
        }
        out.push('\n');
    }

    out
}
