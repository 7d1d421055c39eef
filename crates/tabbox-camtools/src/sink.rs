//! Drawing sink interface
//!
//! Geometry is computed in a y-up frame. Drawing sinks (SVG documents,
//! laser G-code, recorders) receive a y-down frame. [`Surface`] is the only
//! place the conversion happens; nothing else negates y.

use serde::{Deserialize, Serialize};
use tabbox_core::{BearingPattern, BoxResult, MotorMountPattern, Point};

/// Receiver of draw requests, in sink (y-down) coordinates.
pub trait DrawingSink {
    /// Append a polyline. `closed` joins the last point back to the first.
    fn polyline(&mut self, points: &[Point], closed: bool);

    /// Append a text marker.
    fn label(&mut self, position: Point, text: &str);

    /// Draw a rectangle given its centre and half extents.
    fn rectangle(&mut self, center: Point, half_extents: (f64, f64), corner_radius: f64);

    /// Draw a bearing seat hole pattern centred at `center`.
    fn bearing(&mut self, center: Point, pattern: &BearingPattern);

    /// Draw a motor mount hole pattern centred at `center`.
    fn motor_mount(&mut self, center: Point, pattern: &MotorMountPattern);
}

/// A recorded draw request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Polyline {
        points: Vec<Point>,
        closed: bool,
    },
    Label {
        position: Point,
        text: String,
    },
    Rectangle {
        center: Point,
        half_extents: (f64, f64),
        corner_radius: f64,
    },
    Bearing {
        center: Point,
        pattern: BearingPattern,
    },
    MotorMount {
        center: Point,
        pattern: MotorMountPattern,
    },
}

/// Keeps every request in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn to_json(&self) -> BoxResult<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }
}

impl DrawingSink for RecordingSink {
    fn polyline(&mut self, points: &[Point], closed: bool) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            closed,
        });
    }

    fn label(&mut self, position: Point, text: &str) {
        self.commands.push(DrawCommand::Label {
            position,
            text: text.to_string(),
        });
    }

    fn rectangle(&mut self, center: Point, half_extents: (f64, f64), corner_radius: f64) {
        self.commands.push(DrawCommand::Rectangle {
            center,
            half_extents,
            corner_radius,
        });
    }

    fn bearing(&mut self, center: Point, pattern: &BearingPattern) {
        self.commands.push(DrawCommand::Bearing {
            center,
            pattern: *pattern,
        });
    }

    fn motor_mount(&mut self, center: Point, pattern: &MotorMountPattern) {
        self.commands.push(DrawCommand::MotorMount {
            center,
            pattern: *pattern,
        });
    }
}

/// Boundary between the y-up geometry frame and a y-down sink.
pub struct Surface<'a> {
    sink: &'a mut dyn DrawingSink,
}

impl<'a> Surface<'a> {
    pub fn new(sink: &'a mut dyn DrawingSink) -> Self {
        Self { sink }
    }

    /// Converts a geometry point into sink coordinates.
    pub fn to_sink(point: Point) -> Point {
        Point::new(point.x, -point.y)
    }

    /// Draw a polyline. A path whose last point repeats its first is sent as
    /// a closed path without the duplicate.
    pub fn draw_path(&mut self, points: &[Point]) {
        let closed = points.len() > 2 && points.first() == points.last();
        let open = if closed {
            &points[..points.len() - 1]
        } else {
            points
        };
        let converted: Vec<Point> = open.iter().copied().map(Self::to_sink).collect();
        self.sink.polyline(&converted, closed);
    }

    pub fn draw_label(&mut self, position: Point, text: &str) {
        self.sink.label(Self::to_sink(position), text);
    }

    pub fn draw_rectangle(&mut self, center: Point, half_extents: (f64, f64), corner_radius: f64) {
        self.sink
            .rectangle(Self::to_sink(center), half_extents, corner_radius);
    }

    pub fn draw_bearing(&mut self, center: Point, pattern: &BearingPattern) {
        self.sink.bearing(Self::to_sink(center), pattern);
    }

    pub fn draw_motor_mount(&mut self, center: Point, pattern: &MotorMountPattern) {
        self.sink.motor_mount(Self::to_sink(center), pattern);
    }
}
