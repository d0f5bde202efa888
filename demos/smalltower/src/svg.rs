//! Minimal SVG presentation layer for composed scenes.

use std::fmt::Write;

use lv_scene::{EntityGroup, Marker, Primitive, Scene};

/// Render a scene as a standalone SVG document.
pub fn render(scene: &Scene, width: f64, height: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}">"#
    );
    out.push_str(
        r#"  <defs>
    <marker id="greentriangle" markerWidth="4" markerHeight="4" refX="2" refY="2" orient="auto">
      <path d="M 0,0 L 4,2 0,4 z" fill="green"/>
    </marker>
  </defs>
"#,
    );

    group(&mut out, "floors", &scene.background);
    group(&mut out, "destinations", &scene.destinations);
    entity_groups(&mut out, "elevators", &scene.elevators);
    group(&mut out, "floorControls", &scene.floor_controls);
    entity_groups(&mut out, "people", &scene.people);

    out.push_str("</svg>\n");
    out
}

fn group(out: &mut String, id: &str, body: &[Primitive]) {
    let _ = writeln!(out, r#"  <g id="{id}">"#);
    for p in body {
        primitive(out, p);
    }
    out.push_str("  </g>\n");
}

fn entity_groups(out: &mut String, id: &str, groups: &[EntityGroup]) {
    let _ = writeln!(out, r#"  <g id="{id}">"#);
    for g in groups {
        let _ = writeln!(out, r#"    <g id="{}" class="clickable">"#, g.anchor);
        for p in &g.body {
            primitive(out, p);
        }
        out.push_str("    </g>\n");
    }
    out.push_str("  </g>\n");
}

fn primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Rect { bbox, fill, stroke } => {
            let _ = writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="{}" height="{}" style="fill:{fill};stroke:{stroke}"/>"#,
                bbox.x, bbox.y, bbox.w, bbox.h
            );
        }
        Primitive::Line { from, to, stroke, marker_end } => {
            let marker = match marker_end {
                Some(Marker::Triangle) => r#" marker-end="url(#greentriangle)""#,
                None => "",
            };
            let _ = writeln!(
                out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" style="stroke:{stroke}"{marker}/>"#,
                from.x, from.y, to.x, to.y
            );
        }
        Primitive::Polygon { points, fill } => {
            let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            let _ = writeln!(
                out,
                r#"    <polygon points="{}" style="fill:{fill};stroke:none"/>"#,
                pts.join(" ")
            );
        }
        Primitive::Circle { center, radius, fill } => {
            let _ = writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{radius}" fill="{fill}"/>"#,
                center.x, center.y
            );
        }
        Primitive::Text { origin, size, fill, bold, content } => {
            let weight = if *bold { ";font-weight:bold" } else { "" };
            let _ = writeln!(
                out,
                r#"    <text x="{}" y="{}" style="font-size:{size}px;fill:{fill}{weight}">{}</text>"#,
                origin.x,
                origin.y,
                escape(content)
            );
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
