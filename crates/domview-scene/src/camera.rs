//! Camera state for a viewer session

use lin_alg::f32::Vec3;
use std::f32::consts::PI;

/// Camera looking at `origin` from `distance` along the view axis
#[derive(Debug, Clone)]
pub struct Camera {
    /// Center of rotation in model space
    pub origin: Vec3,
    /// Distance from the origin
    pub distance: f32,
    /// Front clipping plane distance
    pub clip_front: f32,
    /// Back clipping plane distance
    pub clip_back: f32,
    /// Field of view (degrees)
    pub fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            origin: Vec3::new(0.0, 0.0, 0.0),
            distance: 50.0,
            clip_front: 0.1,
            clip_back: 1000.0,
            fov: 14.0,
        }
    }
}

fn bbox_center(bbox_min: Vec3, bbox_max: Vec3) -> Vec3 {
    Vec3::new(
        (bbox_min.x + bbox_max.x) * 0.5,
        (bbox_min.y + bbox_max.y) * 0.5,
        (bbox_min.z + bbox_max.z) * 0.5,
    )
}

fn bbox_radius(bbox_min: Vec3, bbox_max: Vec3) -> f32 {
    let (dx, dy, dz) = (
        bbox_max.x - bbox_min.x,
        bbox_max.y - bbox_min.y,
        bbox_max.z - bbox_min.z,
    );
    (dx * dx + dy * dy + dz * dz).sqrt() * 0.5
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the bounding box into view
    pub fn zoom_to(&mut self, bbox_min: Vec3, bbox_max: Vec3) {
        let radius = bbox_radius(bbox_min, bbox_max);
        self.origin = bbox_center(bbox_min, bbox_max);

        let fov_rad = self.fov * PI / 180.0;
        let distance = radius / (fov_rad * 0.5).sin();
        self.distance = distance.max(10.0);

        self.clip_front = (self.distance - radius).max(0.1);
        self.clip_back = self.distance + radius + radius;
    }

    /// Center on a bounding box without changing distance
    pub fn center_to(&mut self, bbox_min: Vec3, bbox_max: Vec3) {
        self.origin = bbox_center(bbox_min, bbox_max);
    }

    /// Camera position in model space
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.origin.x, self.origin.y, self.origin.z + self.distance)
    }
}
