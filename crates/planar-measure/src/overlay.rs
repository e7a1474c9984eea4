use planar_measure_core::PixelPoint;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub center: PixelPoint,
    pub radius: i32,
    pub thickness: i32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub thickness: i32,
    pub color: Color,
}

/// Drawing instructions for one frame: a marker per point and the path
/// between consecutive points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub circles: Vec<Circle>,
    pub lines: Vec<Line>,
}

pub const MARKER_RADIUS_PX: i32 = 3;
pub const MARKER_THICKNESS_PX: i32 = 1;
pub const PATH_THICKNESS_PX: i32 = 2;

impl Overlay {
    pub fn from_points(points: &[PixelPoint]) -> Self {
        let circles = points
            .iter()
            .map(|&center| Circle {
                center,
                radius: MARKER_RADIUS_PX,
                thickness: MARKER_THICKNESS_PX,
                color: Color::GREEN,
            })
            .collect();
        let lines = points
            .windows(2)
            .map(|w| Line {
                from: w[0],
                to: w[1],
                thickness: PATH_THICKNESS_PX,
                color: Color::GREEN,
            })
            .collect();
        Self { circles, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_per_point_and_one_line_per_pair() {
        let pts = [
            PixelPoint::new(1, 1),
            PixelPoint::new(10, 1),
            PixelPoint::new(10, 10),
        ];
        let overlay = Overlay::from_points(&pts);
        assert_eq!(overlay.circles.len(), 3);
        assert_eq!(overlay.lines.len(), 2);
        assert_eq!(overlay.lines[1].from, pts[1]);
        assert_eq!(overlay.lines[1].to, pts[2]);
        assert!(overlay
            .circles
            .iter()
            .all(|c| c.radius == MARKER_RADIUS_PX && c.color == Color::GREEN));
    }

    #[test]
    fn single_point_has_no_path() {
        let overlay = Overlay::from_points(&[PixelPoint::new(5, 5)]);
        assert_eq!(overlay.circles.len(), 1);
        assert!(overlay.lines.is_empty());
        assert!(Overlay::from_points(&[]).is_empty());
    }
}
