//! SVG rendering of snapshots.

use boxwood_core::{Density, Rect};

use crate::snapshot::{EntryKind, LayoutSnapshot, SnapshotEntry};

/// Render a snapshot to SVG at the given pixel density.
///
/// Boxes with children become groups; leaves become filled rects. Frames
/// are scaled but not rounded.
pub fn to_svg(snapshot: &LayoutSnapshot, density: Density) -> String {
    let width = density.to_px(snapshot.viewport.width);
    let height = density.to_px(snapshot.viewport.height);

    let mut svg = String::new();

    // XML declaration and SVG root
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
        width, height, width, height
    ));

    let mut builder = SvgBuilder {
        svg: &mut svg,
        density,
        open_groups: 0,
    };
    for (index, entry) in snapshot.entries.iter().enumerate() {
        let has_children = snapshot
            .entries
            .get(index + 1)
            .is_some_and(|next| next.depth > entry.depth);
        builder.export_entry(entry, has_children);
    }
    builder.close_groups(0);

    svg.push_str("</svg>\n");
    svg
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    density: Density,
    open_groups: usize,
}

impl<'a> SvgBuilder<'a> {
    fn write_indent(&mut self) {
        for _ in 0..=self.open_groups {
            self.svg.push_str("  ");
        }
    }

    fn close_groups(&mut self, depth: usize) {
        while self.open_groups > depth {
            self.open_groups -= 1;
            self.write_indent();
            self.svg.push_str("</g>\n");
        }
    }

    fn export_entry(&mut self, entry: &SnapshotEntry, has_children: bool) {
        self.close_groups(entry.depth);

        if has_children {
            self.write_indent();
            match &entry.name {
                Some(name) => self.svg.push_str(&format!("<g id=\"{}\">\n", escape_xml(name))),
                None => self.svg.push_str("<g>\n"),
            }
            self.open_groups += 1;
        }

        let mut attrs = self.frame_attrs(&entry.frame);
        match (entry.kind, entry.color) {
            (_, Some(color)) => {
                attrs.push(format!("fill=\"{}\"", color.to_hex()));
                if color.a < 1.0 {
                    attrs.push(format!("fill-opacity=\"{}\"", color.a));
                }
            }
            (EntryKind::Box, None) => {
                attrs.push("fill=\"none\"".to_string());
                attrs.push("stroke=\"#000000\"".to_string());
            }
            (EntryKind::Leaf, None) => attrs.push("fill=\"none\"".to_string()),
        }

        self.write_indent();
        self.svg.push_str(&format!("<rect {} />\n", attrs.join(" ")));
    }

    fn frame_attrs(&self, frame: &Rect) -> Vec<String> {
        vec![
            format!("x=\"{}\"", self.density.coordinate_to_px(frame.x())),
            format!("y=\"{}\"", self.density.coordinate_to_px(frame.y())),
            format!("width=\"{}\"", self.density.to_px(frame.size.width)),
            format!("height=\"{}\"", self.density.to_px(frame.size.height)),
        ]
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxwood_core::{Color, LayoutDirection, Margin, Point, Size};

    fn entry(depth: usize, kind: EntryKind, x: f64, size: u32, color: Option<Color>) -> SnapshotEntry {
        SnapshotEntry {
            depth,
            kind,
            name: None,
            frame: Rect::new(Point::new(x, 0.0), Size::from_ints(size, size)),
            margin: Margin::ZERO,
            color,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
    }

    #[test]
    fn test_export_empty_snapshot() {
        let snapshot = LayoutSnapshot {
            viewport: Size::from_ints(10, 10),
            direction: LayoutDirection::Ltr,
            entries: Vec::new(),
        };
        let svg = to_svg(&snapshot, Density::DEFAULT);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_nested_groups_close_in_order() {
        let snapshot = LayoutSnapshot {
            viewport: Size::from_ints(300, 300),
            direction: LayoutDirection::Ltr,
            entries: vec![
                entry(0, EntryKind::Box, 0.0, 300, None),
                entry(1, EntryKind::Box, 0.0, 200, None),
                entry(2, EntryKind::Leaf, 0.0, 100, Some(Color::RED)),
                entry(1, EntryKind::Leaf, 50.0, 50, Some(Color::BLUE)),
            ],
        };
        let svg = to_svg(&snapshot, Density::DEFAULT);

        assert_eq!(svg.matches("<g>").count(), 2);
        assert_eq!(svg.matches("</g>").count(), 2);
        let inner_close = svg.find("</g>").unwrap();
        let blue = svg.find("#0000ff").unwrap();
        assert!(inner_close < blue);
        assert!(svg.ends_with("  </g>\n</svg>\n"));
    }

    #[test]
    fn test_density_scales_frames() {
        let snapshot = LayoutSnapshot {
            viewport: Size::from_ints(100, 100),
            direction: LayoutDirection::Ltr,
            entries: vec![entry(0, EntryKind::Leaf, 10.0, 20, Some(Color::GREEN))],
        };
        let svg = to_svg(&snapshot, Density::new(2.0).unwrap());

        assert!(svg.contains(r#"width="200" height="200""#));
        assert!(svg.contains(r##"<rect x="20" y="0" width="40" height="40" fill="#00ff00" />"##));
    }
}
