//! SVG document sink.
//!
//! Collects draw requests as SVG elements and wraps them in a millimetre
//! document whose viewBox covers everything drawn.

use crate::sink::DrawingSink;
use std::f64::consts::PI;
use tabbox_core::{BearingPattern, MotorMountPattern, Point};

const CUT_STYLE: &str = "fill:none;stroke:#ff0000;stroke-width:0.1";
const LABEL_STYLE: &str = "fill:#0000ff;stroke:none;text-anchor:middle";
const LABEL_SIZE: f64 = 5.0;
const PADDING: f64 = 10.0;

#[derive(Debug, Clone, Default)]
pub struct SvgSink {
    elements: Vec<String>,
    min: Option<Point>,
    max: Option<Point>,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn extend_bounds(&mut self, point: Point, margin: f64) {
        let lo = Point::new(point.x - margin, point.y - margin);
        let hi = Point::new(point.x + margin, point.y + margin);
        self.min = Some(match self.min {
            Some(m) => Point::new(m.x.min(lo.x), m.y.min(lo.y)),
            None => lo,
        });
        self.max = Some(match self.max {
            Some(m) => Point::new(m.x.max(hi.x), m.y.max(hi.y)),
            None => hi,
        });
    }

    fn circle(&mut self, center: Point, diameter: f64) {
        let r = diameter / 2.0;
        self.extend_bounds(center, r);
        self.elements.push(format!(
            r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" style="{}" />"#,
            center.x, center.y, r, CUT_STYLE
        ));
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The complete SVG document.
    pub fn finish(&self) -> String {
        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ => (Point::default(), Point::default()),
        };
        let min_x = min.x - PADDING;
        let min_y = min.y - PADDING;
        let width = max.x - min.x + 2.0 * PADDING;
        let height = max.y - min.y + 2.0 * PADDING;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{:.2}mm" height="{:.2}mm" viewBox="{:.2} {:.2} {:.2} {:.2}" xmlns="http://www.w3.org/2000/svg">
"#,
            width, height, min_x, min_y, width, height
        ));
        svg.push_str(&format!(
            "<!-- Generated by tabbox on {} -->\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl DrawingSink for SvgSink {
    fn polyline(&mut self, points: &[Point], closed: bool) {
        let Some(first) = points.first() else {
            return;
        };
        let mut d = format!("M {:.3} {:.3}", first.x, first.y);
        for p in &points[1..] {
            d.push_str(&format!(" L {:.3} {:.3}", p.x, p.y));
        }
        if closed {
            d.push_str(" Z");
        }
        for p in points {
            self.extend_bounds(*p, 0.0);
        }
        self.elements
            .push(format!(r#"<path d="{}" style="{}" />"#, d, CUT_STYLE));
    }

    fn label(&mut self, position: Point, text: &str) {
        self.elements.push(format!(
            r#"<text x="{:.3}" y="{:.3}" font-size="{:.2}" style="{}">{}</text>"#,
            position.x,
            position.y,
            LABEL_SIZE,
            LABEL_STYLE,
            escape_text(text)
        ));
    }

    fn rectangle(&mut self, center: Point, half_extents: (f64, f64), corner_radius: f64) {
        let (hx, hy) = half_extents;
        self.extend_bounds(Point::new(center.x - hx, center.y - hy), 0.0);
        self.extend_bounds(Point::new(center.x + hx, center.y + hy), 0.0);
        self.elements.push(format!(
            r#"<rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" rx="{:.3}" style="{}" />"#,
            center.x - hx,
            center.y - hy,
            2.0 * hx,
            2.0 * hy,
            corner_radius.max(0.0),
            CUT_STYLE
        ));
    }

    fn bearing(&mut self, center: Point, pattern: &BearingPattern) {
        self.circle(center, pattern.seat_diameter);
        let r = pattern.bolt_circle_diameter / 2.0;
        for i in 0..pattern.bolt_count {
            let angle = 2.0 * PI * f64::from(i) / f64::from(pattern.bolt_count);
            let hole = Point::new(center.x + r * angle.cos(), center.y + r * angle.sin());
            self.circle(hole, pattern.bolt_diameter);
        }
    }

    fn motor_mount(&mut self, center: Point, pattern: &MotorMountPattern) {
        self.circle(center, pattern.pilot_diameter);
        let h = pattern.bolt_spacing / 2.0;
        for (dx, dy) in [(-h, -h), (h, -h), (h, h), (-h, h)] {
            self.circle(Point::new(center.x + dx, center.y + dy), pattern.bolt_diameter);
        }
    }
}
