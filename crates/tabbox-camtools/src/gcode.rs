//! Laser G-code sink
//!
//! Every draw request becomes a polyline cut. Circles and rounded rectangles
//! are flattened. Input arrives in the y-down sink frame; the machine frame
//! is y-up, so the writer mirrors y and shifts the job so its lower-left
//! corner sits at the work offset.

use crate::sink::DrawingSink;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tabbox_core::geometry::bounds;
use tabbox_core::{BearingPattern, MotorMountPattern, Point, Polyline};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeSettings {
    pub laser_passes: u32,
    pub laser_power: u32,
    pub feed_rate: f64,
    pub z_step_down: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Segments used to flatten a full circle
    pub circle_segments: usize,
}

impl Default for GcodeSettings {
    fn default() -> Self {
        Self {
            laser_passes: 1,
            laser_power: 1000,
            feed_rate: 500.0,
            z_step_down: 0.0,
            offset_x: 10.0,
            offset_y: 10.0,
            circle_segments: 48,
        }
    }
}

#[derive(Debug, Clone)]
struct Cut {
    label: Option<String>,
    kind: String,
    points: Polyline,
}

impl Cut {
    fn comment(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}", label, self.kind),
            None => self.kind.clone(),
        }
    }
}

/// Labels arrive after a panel's outline and before its holes: a label names
/// every unlabelled cut before it and every hole after it, until the next
/// outline starts.
#[derive(Debug, Clone, Default)]
pub struct GcodeSink {
    settings: GcodeSettings,
    cuts: Vec<Cut>,
    labeled_upto: usize,
    pending_label: Option<String>,
}

impl GcodeSink {
    pub fn new(settings: GcodeSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn cut_count(&self) -> usize {
        self.cuts.len()
    }

    fn push_cut(&mut self, kind: &str, points: Polyline) {
        if points.len() < 2 {
            return;
        }
        self.cuts.push(Cut {
            label: self.pending_label.clone(),
            kind: kind.to_string(),
            points,
        });
        if self.pending_label.is_some() {
            self.labeled_upto = self.cuts.len();
        }
    }

    fn circle(&self, center: Point, diameter: f64) -> Polyline {
        let r = diameter / 2.0;
        let n = self.settings.circle_segments.max(8);
        (0..=n)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / n as f64;
                Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
            })
            .collect()
    }

    fn rounded_rect(&self, center: Point, half: (f64, f64), radius: f64) -> Polyline {
        let (hx, hy) = half;
        let r = radius.clamp(0.0, hx.min(hy));
        if r <= 0.0 {
            return vec![
                Point::new(center.x - hx, center.y - hy),
                Point::new(center.x + hx, center.y - hy),
                Point::new(center.x + hx, center.y + hy),
                Point::new(center.x - hx, center.y + hy),
                Point::new(center.x - hx, center.y - hy),
            ];
        }

        let steps = (self.settings.circle_segments / 4).max(2);
        let corners = [
            (Point::new(center.x + hx - r, center.y - hy + r), -PI / 2.0),
            (Point::new(center.x + hx - r, center.y + hy - r), 0.0),
            (Point::new(center.x - hx + r, center.y + hy - r), PI / 2.0),
            (Point::new(center.x - hx + r, center.y - hy + r), PI),
        ];
        let mut path = Vec::with_capacity(4 * (steps + 1) + 1);
        for (c, start) in corners {
            for i in 0..=steps {
                let angle = start + (PI / 2.0) * i as f64 / steps as f64;
                path.push(Point::new(c.x + r * angle.cos(), c.y + r * angle.sin()));
            }
        }
        if let Some(first) = path.first().copied() {
            path.push(first);
        }
        path
    }

    /// The complete G-code program.
    pub fn finish(&self) -> String {
        let s = &self.settings;
        let mut gcode = String::new();

        gcode.push_str("; Tabbed Box G-code\n");
        gcode.push_str(&format!(
            "; Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        gcode.push_str(&format!("; Laser passes: {}\n", s.laser_passes));
        gcode.push_str(&format!("; Laser power: S{}\n", s.laser_power));
        gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", s.feed_rate));
        gcode.push_str(&format!("; Offset X: {} mm\n", s.offset_x));
        gcode.push_str(&format!("; Offset Y: {} mm\n", s.offset_y));
        gcode.push_str(";\n");

        gcode.push_str("G21 ; Set units to millimeters\n");
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str("G17 ; XY plane selection\n\n");

        // Sink frame is y-down: machine y = -sink y, then shift to the offset.
        let all = self.cuts.iter().flat_map(|c| c.points.iter());
        let (shift_x, shift_y) = match bounds(all) {
            Some((min, max)) => (s.offset_x - min.x, s.offset_y + max.y),
            None => (s.offset_x, s.offset_y),
        };
        let to_machine = |p: &Point| (p.x + shift_x, shift_y - p.y);

        for (i, cut) in self.cuts.iter().enumerate() {
            gcode.push_str(&format!("; Cut {}: {}\n", i + 1, cut.comment()));
            let Some(first) = cut.points.first() else {
                continue;
            };
            let (fx, fy) = to_machine(first);
            gcode.push_str(&format!("G0 X{:.3} Y{:.3} ; Rapid to start\n", fx, fy));

            for pass in 1..=s.laser_passes {
                let z_depth = -(f64::from(pass) - 1.0) * s.z_step_down;
                gcode.push_str(&format!(
                    "; Pass {}/{} at Z{:.2}\n",
                    pass, s.laser_passes, z_depth
                ));
                if pass > 1 && s.z_step_down != 0.0 {
                    gcode.push_str(&format!("G0 Z{:.2} ; Move to pass depth\n", z_depth));
                }
                gcode.push_str(&format!("M3 S{} ; Laser on\n", s.laser_power));
                for (idx, point) in cut.points.iter().skip(1).enumerate() {
                    let (x, y) = to_machine(point);
                    if idx == 0 {
                        gcode.push_str(&format!("G1 X{:.3} Y{:.3} F{:.0}\n", x, y, s.feed_rate));
                    } else {
                        gcode.push_str(&format!("G1 X{:.3} Y{:.3}\n", x, y));
                    }
                }
                gcode.push_str("M5 ; Laser off\n");
                if pass < s.laser_passes {
                    gcode.push_str(&format!("G0 X{:.3} Y{:.3} ; Return to start\n", fx, fy));
                }
            }
            gcode.push('\n');
        }

        gcode.push_str("M5 ; Ensure laser off\n");
        gcode.push_str("G0 X0 Y0 ; Return to origin\n");
        gcode.push_str("M2 ; Program end\n");
        gcode
    }
}

impl DrawingSink for GcodeSink {
    fn polyline(&mut self, points: &[Point], closed: bool) {
        let mut path = points.to_vec();
        if closed {
            if let Some(first) = points.first().copied() {
                path.push(first);
            }
        }
        self.pending_label = None;
        self.push_cut("outline", path);
    }

    fn label(&mut self, _position: Point, text: &str) {
        for cut in &mut self.cuts[self.labeled_upto..] {
            if cut.label.is_none() {
                cut.label = Some(text.to_string());
            }
        }
        self.labeled_upto = self.cuts.len();
        self.pending_label = Some(text.to_string());
    }

    fn rectangle(&mut self, center: Point, half_extents: (f64, f64), corner_radius: f64) {
        let path = self.rounded_rect(center, half_extents, corner_radius);
        self.push_cut("cutout", path);
    }

    fn bearing(&mut self, center: Point, pattern: &BearingPattern) {
        let r = pattern.bolt_circle_diameter / 2.0;
        for i in 0..pattern.bolt_count {
            let angle = 2.0 * PI * f64::from(i) / f64::from(pattern.bolt_count);
            let hole = Point::new(center.x + r * angle.cos(), center.y + r * angle.sin());
            let path = self.circle(hole, pattern.bolt_diameter);
            self.push_cut("bearing bolt", path);
        }
        let seat = self.circle(center, pattern.seat_diameter);
        self.push_cut("bearing seat", seat);
    }

    fn motor_mount(&mut self, center: Point, pattern: &MotorMountPattern) {
        let h = pattern.bolt_spacing / 2.0;
        for (dx, dy) in [(-h, -h), (h, -h), (h, h), (-h, h)] {
            let path = self.circle(Point::new(center.x + dx, center.y + dy), pattern.bolt_diameter);
            self.push_cut("motor bolt", path);
        }
        let pilot = self.circle(center, pattern.pilot_diameter);
        self.push_cut("motor pilot", pilot);
    }
}
