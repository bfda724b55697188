use glam::{Vec2, Vec3};

/// Center of the 3x3 footprint grid, a little above the ground.
const GRID_CENTER: Vec3 = Vec3::new(1.5, 1.2, 1.5);

/// Elevation of the classic isometric view: atan(1/sqrt(2)).
const ISO_PITCH: f32 = 0.615_479_7;

/// World units that must fit across the shorter canvas side.
const VIEW_SPAN: f32 = 6.0;

/// Orthographic orbit camera around the grid center.
///
/// `yaw` is the structure's rotation angle. At the start angle (315°) the
/// camera looks from the +x / -z corner, so footprints with a larger
/// `z - x` sit farther away and higher on screen.
#[derive(Debug, Clone, Copy)]
pub struct IsoCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
}

impl IsoCamera {
    pub fn new(yaw: f32) -> Self {
        Self {
            yaw,
            pitch: ISO_PITCH,
            target: GRID_CENTER,
        }
    }

    /// Unit vector from the scene toward the viewer.
    pub fn to_viewer(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Screen-right and screen-up axes in world space.
    pub fn screen_axes(&self) -> (Vec3, Vec3) {
        let d = self.to_viewer();
        let right = Vec3::Y.cross(d).normalize();
        let up = d.cross(right);
        (right, up)
    }

    /// Distance toward the viewer; larger is closer.
    pub fn depth(&self, p: Vec3) -> f32 {
        (p - self.target).dot(self.to_viewer())
    }

    /// Project a world point to canvas pixels (origin top-left, y down).
    pub fn project(&self, p: Vec3, width: f32, height: f32) -> Vec2 {
        let (right, up) = self.screen_axes();
        let rel = p - self.target;
        let scale = width.min(height) / VIEW_SPAN;
        Vec2::new(
            width * 0.5 + rel.dot(right) * scale,
            height * 0.5 - rel.dot(up) * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const START: f32 = 7.0 * std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_axes_orthonormal() {
        for yaw in [0.0, 1.0, START, 4.2] {
            let cam = IsoCamera::new(yaw);
            let (right, up) = cam.screen_axes();
            let d = cam.to_viewer();
            assert!((right.length() - 1.0).abs() < 1e-5);
            assert!((up.length() - 1.0).abs() < 1e-5);
            assert!(right.dot(up).abs() < 1e-5);
            assert!(right.dot(d).abs() < 1e-5);
            assert!(up.y > 0.0, "screen up should point upward");
        }
    }

    #[test]
    fn test_start_view_back_row_is_far_and_high() {
        let cam = IsoCamera::new(START);
        let back = Vec3::new(0.5, 0.5, 2.5); // footprint (0,2), distance 2
        let front = Vec3::new(2.5, 0.5, 0.5); // footprint (2,0), distance -2
        assert!(cam.depth(back) < cam.depth(front));

        let back_px = cam.project(back, 600.0, 400.0);
        let front_px = cam.project(front, 600.0, 400.0);
        assert!(back_px.y < front_px.y);
    }

    #[test]
    fn test_view_diagonal_projects_to_same_point() {
        // Under the true isometric start view, (1,1,-1) points at the viewer.
        let cam = IsoCamera::new(START);
        let a = cam.project(Vec3::new(0.5, 0.5, 1.5), 500.0, 500.0);
        let b = cam.project(Vec3::new(1.5, 1.5, 0.5), 500.0, 500.0);
        assert!(a.distance(b) < 1e-3);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let p = Vec3::new(2.0, 1.0, 0.0);
        let a = IsoCamera::new(START).project(p, 800.0, 600.0);
        let b = IsoCamera::new(START + TAU).project(p, 800.0, 600.0);
        assert!(a.distance(b) < 1e-2);
    }

    #[test]
    fn test_target_projects_to_center() {
        let cam = IsoCamera::new(0.3);
        let c = cam.project(GRID_CENTER, 320.0, 240.0);
        assert!((c - Vec2::new(160.0, 120.0)).length() < 1e-4);
    }
}
