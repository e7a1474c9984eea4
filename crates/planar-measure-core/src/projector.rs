use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Pixel coordinate in image space: origin top-left, `x` right, `y` down.
pub type PixelPoint = Point2<i32>;

/// Metric coordinate on the plane at depth `Z`, origin on the optical axis.
///
/// Units follow the depth passed to the projector (meters by convention).
pub type WorldPoint = Point2<f64>;

/// Pinhole back-projection onto a plane parallel to the sensor.
///
/// `xg = ((w/2 - x) / f) * Z` and `yg = ((y - h/2) / f) * Z`, i.e. world `x`
/// grows to the left of the principal point and world `y` grows downward.
///
/// No validation is performed: `focal_length` must be positive.
#[inline]
pub fn project(
    pixel: PixelPoint,
    image_width: f64,
    image_height: f64,
    focal_length: f64,
    depth: f64,
) -> WorldPoint {
    let xg = ((image_width / 2.0 - pixel.x as f64) / focal_length) * depth;
    let yg = ((pixel.y as f64 - image_height / 2.0) / focal_length) * depth;
    WorldPoint::new(xg, yg)
}

/// Projection constants for one camera stream.
///
/// The image size is read once from the capture device; the focal length is a
/// calibration approximation in pixels and the depth a single measured
/// distance to the observed plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    pub image_width: f64,
    pub image_height: f64,
    pub focal_length: f64,
    pub depth: f64,
}

impl Projector {
    pub fn new(image_width: f64, image_height: f64, focal_length: f64, depth: f64) -> Self {
        Self {
            image_width,
            image_height,
            focal_length,
            depth,
        }
    }

    /// Image center in pixel coordinates.
    #[inline]
    pub fn principal_point(&self) -> Point2<f64> {
        Point2::new(self.image_width / 2.0, self.image_height / 2.0)
    }

    #[inline]
    pub fn project(&self, pixel: PixelPoint) -> WorldPoint {
        project(
            pixel,
            self.image_width,
            self.image_height,
            self.focal_length,
            self.depth,
        )
    }

    /// Inverse of [`Projector::project`], returning sub-pixel coordinates.
    ///
    /// Requires a non-zero depth in addition to a positive focal length.
    #[inline]
    pub fn unproject(&self, world: WorldPoint) -> Point2<f64> {
        let scale = self.focal_length / self.depth;
        let c = self.principal_point();
        Point2::new(c.x - world.x * scale, c.y + world.y * scale)
    }
}
