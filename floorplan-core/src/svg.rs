use crate::constants::CANVAS_PADDING;
use crate::model::Blueprint;

/// Renders the ground floor of a blueprint to a self-contained SVG document.
///
/// `scale` is in px per meter (see [`crate::constants::DEFAULT_SCALE`]).
/// Returns the document together with its pixel dimensions, ready for
/// rasterization. Output is a pure function of the blueprint and scale:
/// identical inputs yield byte-identical documents.
///
/// Only floor 0 is drawn; callers wanting another floor filter `rooms` and
/// re-invoke.
pub fn blueprint_to_svg(blueprint: &Blueprint, scale: f64) -> (String, u32, u32) {
    let pad = CANVAS_PADDING;
    let lot_w = blueprint.lot_width * scale;
    let lot_l = blueprint.lot_length * scale;
    let canvas_w = (lot_w + pad * 2.0).ceil() as u32;
    let canvas_h = (lot_l + pad * 2.0).ceil() as u32;

    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {canvas_w} {canvas_h}\" width=\"{canvas_w}\" height=\"{canvas_h}\">\n"
    ));

    // Background
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{canvas_w}\" height=\"{canvas_h}\" fill=\"#0c1929\"/>\n"
    ));

    // One grid cell per meter
    s.push_str(&format!(
        "<defs><pattern id=\"grid\" width=\"{0}\" height=\"{0}\" patternUnits=\"userSpaceOnUse\"><path d=\"M {0} 0 L 0 0 0 {0}\" fill=\"none\" stroke=\"#1e3a5f\" stroke-width=\"0.5\"/></pattern></defs>\n",
        fmt_num(scale)
    ));

    // Lot outline
    s.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#grid)\" stroke=\"#3b82f6\" stroke-width=\"2\"/>\n",
        fmt_num(pad),
        fmt_num(pad),
        fmt_num(lot_w),
        fmt_num(lot_l)
    ));

    for room in blueprint.rooms.iter().filter(|r| r.floor == 0) {
        let x = pad + room.x * scale;
        let y = pad + room.y * scale;
        let w = room.width * scale;
        let h = room.height * scale;

        s.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}20\" stroke=\"{}\" stroke-width=\"2\" rx=\"2\"/>\n",
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            room.color,
            room.color
        ));

        let font_size = (w / 8.0).clamp(10.0, 14.0);
        s.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" fill=\"#e2e8f0\" font-family=\"Inter, sans-serif\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            fmt_num(x + w / 2.0),
            fmt_num(y + h / 2.0),
            fmt_num(font_size),
            svg_escape(&room.display_name)
        ));

        s.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" fill=\"#94a3b8\" font-family=\"JetBrains Mono, monospace\" font-size=\"10\" text-anchor=\"middle\">{}m × {}m</text>\n",
            fmt_num(x + w / 2.0),
            fmt_num(y + h - 8.0),
            fmt_num(room.width),
            fmt_num(room.height)
        ));
    }

    // Compass rose, fixed near the top-right corner
    s.push_str(&format!(
        "<g transform=\"translate({}, {})\">\n",
        fmt_num(lot_w + pad - 30.0),
        fmt_num(pad + 30.0)
    ));
    s.push_str("<circle cx=\"0\" cy=\"0\" r=\"20\" fill=\"none\" stroke=\"#f59e0b\" stroke-width=\"1\"/>\n");
    s.push_str("<text x=\"0\" y=\"-25\" fill=\"#f59e0b\" font-family=\"Inter, sans-serif\" font-size=\"12\" text-anchor=\"middle\">N</text>\n");
    s.push_str("<polygon points=\"0,-15 5,-5 0,-8 -5,-5\" fill=\"#f59e0b\"/>\n");
    s.push_str("</g>\n");

    // Five-meter scale bar near the bottom-left
    s.push_str(&format!(
        "<g transform=\"translate({}, {})\">\n",
        fmt_num(pad),
        fmt_num(lot_l + pad + 15.0)
    ));
    s.push_str(&format!(
        "<line x1=\"0\" y1=\"0\" x2=\"{0}\" y2=\"0\" stroke=\"#94a3b8\" stroke-width=\"2\"/>\n<line x1=\"0\" y1=\"-5\" x2=\"0\" y2=\"5\" stroke=\"#94a3b8\" stroke-width=\"2\"/>\n<line x1=\"{0}\" y1=\"-5\" x2=\"{0}\" y2=\"5\" stroke=\"#94a3b8\" stroke-width=\"2\"/>\n",
        fmt_num(scale * 5.0)
    ));
    s.push_str(&format!(
        "<text x=\"{}\" y=\"15\" fill=\"#94a3b8\" font-family=\"JetBrains Mono, monospace\" font-size=\"10\" text-anchor=\"middle\">5 meters</text>\n",
        fmt_num(scale * 2.5)
    ));
    s.push_str("</g>\n");

    s.push_str("</svg>\n");
    (s, canvas_w, canvas_h)
}

// Near-integers (1e-6) print as integers, everything else with up to two
// decimals, trailing zeros trimmed.
fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-6 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildingArchetype, RoomCategory};
    use crate::constants::DEFAULT_SCALE;
    use crate::model::Room;
    use chrono::{DateTime, Utc};

    fn room(name: &str, category: RoomCategory, x: f64, y: f64, w: f64, h: f64, floor: usize) -> Room {
        Room {
            id: format!("id-{name}"),
            category,
            display_name: name.to_string(),
            x,
            y,
            width: w,
            height: h,
            floor,
            color: category.spec().color.to_string(),
        }
    }

    fn fixture() -> Blueprint {
        let now = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        Blueprint {
            id: "bp0000001".into(),
            project_name: "Fixture".into(),
            building_archetype: BuildingArchetype::House,
            lot_width: 20.0,
            lot_length: 25.0,
            floors: 2,
            rooms: vec![
                room("Living 1", RoomCategory::Living, 1.0, 2.0, 4.0, 3.0, 0),
                room("Bathroom 1", RoomCategory::Bathroom, 6.0, 2.0, 2.0, 2.0, 0),
                room("Bedroom 1", RoomCategory::Bedroom, 0.5, 0.5, 3.0, 3.0, 1),
            ],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn serialization_is_idempotent() {
        let bp = fixture();
        let (a, w1, h1) = blueprint_to_svg(&bp, DEFAULT_SCALE);
        let (b, w2, h2) = blueprint_to_svg(&bp, DEFAULT_SCALE);
        assert_eq!(a, b);
        assert_eq!((w1, h1), (w2, h2));
    }

    #[test]
    fn canvas_size_is_lot_plus_padding() {
        let (_, w, h) = blueprint_to_svg(&fixture(), 40.0);
        assert_eq!(w, 20 * 40 + 40);
        assert_eq!(h, 25 * 40 + 40);
    }

    #[test]
    fn room_rect_coordinates_are_scaled_and_offset() {
        // Living 1 at (1, 2) meters, 4x3: px origin (20 + 40, 20 + 80).
        let (svg, _, _) = blueprint_to_svg(&fixture(), 40.0);
        assert!(svg.contains(
            "<rect x=\"60\" y=\"100\" width=\"160\" height=\"120\" fill=\"#3b82f620\" stroke=\"#3b82f6\" stroke-width=\"2\" rx=\"2\"/>"
        ));
    }

    #[test]
    fn upper_floor_rooms_are_not_drawn() {
        let (svg, _, _) = blueprint_to_svg(&fixture(), 40.0);
        assert!(svg.contains("Living 1"));
        assert!(!svg.contains("Bedroom 1"));
    }

    #[test]
    fn label_font_size_is_clamped() {
        // Living 1 is 160 px wide: 160/8 = 20 clamps to 14.
        // Bathroom 1 is 80 px wide: 80/8 = 10 stays at the floor.
        let (svg, _, _) = blueprint_to_svg(&fixture(), 40.0);
        assert!(svg.contains("font-size=\"14\" text-anchor=\"middle\" dominant-baseline=\"middle\">Living 1<"));
        assert!(svg.contains("font-size=\"10\" text-anchor=\"middle\" dominant-baseline=\"middle\">Bathroom 1<"));
    }

    #[test]
    fn dimension_labels_trim_trailing_zeros() {
        let mut bp = fixture();
        bp.rooms[0].width = 4.5;
        let (svg, _, _) = blueprint_to_svg(&bp, 40.0);
        assert!(svg.contains(">4.5m × 3m</text>"));
    }

    #[test]
    fn elements_are_emitted_in_contract_order() {
        let (svg, _, _) = blueprint_to_svg(&fixture(), 40.0);
        let order = [
            "fill=\"#0c1929\"",
            "<defs><pattern id=\"grid\"",
            "fill=\"url(#grid)\"",
            ">Living 1<",
            ">Bathroom 1<",
            "<circle cx=\"0\" cy=\"0\" r=\"20\"",
            ">5 meters<",
        ];
        let mut last = 0;
        for needle in order {
            let at = svg[last..].find(needle).unwrap_or_else(|| panic!("missing {needle}"));
            last += at + needle.len();
        }
    }

    #[test]
    fn display_names_are_xml_escaped() {
        let mut bp = fixture();
        bp.rooms[0].display_name = "A&B <Suite>".into();
        let (svg, _, _) = blueprint_to_svg(&bp, 40.0);
        assert!(svg.contains(">A&amp;B &lt;Suite&gt;</text>"));
        assert!(!svg.contains("A&B <Suite>"));
    }

    #[test]
    fn compass_and_scale_bar_are_fixed_position() {
        // Lot 20x25 at scale 40: compass at (800 + 20 - 30, 50), scale bar
        // group at (20, 1000 + 20 + 15) with a 200 px bar.
        let (svg, _, _) = blueprint_to_svg(&fixture(), 40.0);
        assert!(svg.contains("<g transform=\"translate(790, 50)\">"));
        assert!(svg.contains("<g transform=\"translate(20, 1035)\">"));
        assert!(svg.contains("x2=\"200\""));
    }

    #[test]
    fn fractional_scale_prints_trimmed() {
        let (svg, _, _) = blueprint_to_svg(&fixture(), 12.5);
        assert!(svg.contains("<pattern id=\"grid\" width=\"12.5\" height=\"12.5\""));
    }
}
