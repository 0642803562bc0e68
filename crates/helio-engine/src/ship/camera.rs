use glam::{Mat3, Quat, Vec3};

/// Third-person follow camera.
///
/// Smoothing is applied once per tick with a fixed factor, not scaled by dt,
/// so the effective smoothing rate is frame-rate-dependent. That matches the
/// tuned feel of the original handling and is deliberate.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    pub position: Vec3,
    pub orientation: Quat,
}

impl FollowCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// One smoothing step: lerp position toward `target_pos`, then slerp
    /// orientation toward looking at `look_target` (from the already-updated
    /// position) with `up` as the camera's up hint.
    pub fn follow(&mut self, target_pos: Vec3, look_target: Vec3, up: Vec3, factor: f32) {
        self.position = self.position.lerp(target_pos, factor);
        let target = look_at_quat(self.position, look_target, up);
        self.orientation = self.orientation.slerp(target, factor).normalize();
    }
}

/// Orientation for a camera at `eye` looking toward `target`.
///
/// Builds the right-handed basis where the camera looks down its local −Z,
/// the convention of the rendering host. Degenerate inputs (eye on target,
/// up parallel to the view direction) fall back to safe axes instead of
/// producing NaN.
pub fn look_at_quat(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let back = eye - target;
    if back.length_squared() < 1e-12 {
        return Quat::IDENTITY;
    }
    let z = back.normalize();
    let mut x = up.cross(z);
    if x.length_squared() < 1e-12 {
        // up is parallel to the view direction; pick any perpendicular
        x = if z.x.abs() < 0.9 { Vec3::X.cross(z) } else { Vec3::Y.cross(z) };
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(q: Quat) -> Vec3 {
        q * Vec3::NEG_Z
    }

    #[test]
    fn looking_down_negative_z_is_identity() {
        let q = look_at_quat(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert!(q.angle_between(Quat::IDENTITY) < 1e-5);
    }

    #[test]
    fn camera_faces_its_target() {
        let eye = Vec3::new(30.0, 10.0, -5.0);
        let target = Vec3::new(-2.0, 4.0, 8.0);
        let q = look_at_quat(eye, target, Vec3::Y);
        let expected = (target - eye).normalize();
        assert!(forward(q).distance(expected) < 1e-5);
    }

    #[test]
    fn degenerate_eye_on_target_is_identity() {
        let q = look_at_quat(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn up_parallel_to_view_does_not_nan() {
        let q = look_at_quat(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(q.is_finite());
        assert!(forward(q).distance(Vec3::NEG_Y) < 1e-5);
    }

    #[test]
    fn follow_moves_part_way() {
        let mut cam = FollowCamera::new(Vec3::ZERO);
        cam.follow(Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y, 0.05);
        assert!((cam.position.x - 5.0).abs() < 1e-4);
    }
}
