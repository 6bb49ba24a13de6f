// Connector curves between a parent and a child.
//
// Both control points sit at the vertical midpoint between the anchors, so
// the curve leaves the parent straight down and enters the child straight
// down.

use serde::Serialize;

use super::ConnectionInfo;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct BezierCurve {
    pub start: PointF,
    pub c1: PointF,
    pub c2: PointF,
    pub end: PointF,
}

impl BezierCurve {
    pub fn from_connection(conn: &ConnectionInfo) -> Self {
        let mid_y = (conn.from_y + conn.to_y) / 2.0;
        Self {
            start: PointF { x: conn.from_x, y: conn.from_y },
            c1: PointF { x: conn.from_x, y: mid_y },
            c2: PointF { x: conn.to_x, y: mid_y },
            end: PointF { x: conn.to_x, y: conn.to_y },
        }
    }

    /// Point on the curve for t in [0, 1].
    pub fn point_at(&self, t: f64) -> PointF {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        PointF {
            x: a * self.start.x + b * self.c1.x + c * self.c2.x + d * self.end.x,
            y: a * self.start.y + b * self.c1.y + c * self.c2.y + d * self.end.y,
        }
    }

    /// SVG path data (`M .. C ..`).
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x, self.start.y,
            self.c1.x, self.c1.y,
            self.c2.x, self.c2.y,
            self.end.x, self.end.y,
        )
    }
}

pub fn bezier_path(conn: &ConnectionInfo) -> String {
    BezierCurve::from_connection(conn).to_svg_path()
}
