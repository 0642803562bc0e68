use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::input::bindings::Action;
use crate::input::tracker::ActionState;
use crate::ship::camera::FollowCamera;
use crate::world::bodies::CelestialBody;
use crate::world::collision::find_collision;

// ── Flight tuning ────────────────────────────────────────────────────

/// Base forward speed, world units per second.
pub const BASE_FORWARD_SPEED: f32 = 3.0;
/// Forward-speed multiplier while Boost is held.
pub const BOOST_MULTIPLIER: f32 = 3.0;
/// Rotation rate around each local axis, radians per second.
pub const ROTATE_RATE: f32 = 1.5;
/// Approximate ship size for sphere-sphere collision.
pub const SHIP_COLLISION_RADIUS: f32 = 1.5;
/// Half-size of the cubic play area the ship is clamped into.
pub const PLAY_AREA_HALF_SIZE: f32 = 1000.0;

/// Start far from the sun, facing it.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, 200.0);

// ── Camera tuning ────────────────────────────────────────────────────

/// Camera offset behind and above the ship, in ship-local space.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 1.0, -2.5);
/// Per-tick camera smoothing factor (position lerp and orientation slerp).
const CAMERA_SMOOTHING: f32 = 0.05;
/// Where the camera rests before the first tick.
const CAMERA_REST_POSITION: Vec3 = Vec3::new(0.0, 50.0, 350.0);

// ── Banking (cosmetic) ───────────────────────────────────────────────

/// Max bank angle induced by yaw, 30 degrees.
const MAX_BANK_ANGLE: f32 = PI / 6.0;
/// Per-tick smoothing factor for the bank accumulator.
const BANK_SMOOTHING: f32 = 0.07;

/// Result of one ship tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipOutcome {
    Flying,
    /// Hit the named body this tick.
    Crashed(String),
}

/// Owns the ship transform and the follow camera; applies input-driven
/// rotation and translation, enforces play-area bounds, and runs collision
/// detection against the celestial bodies.
pub struct ShipController {
    pub position: Vec3,
    pub orientation: Quat,
    camera: FollowCamera,
    /// Yaw-induced roll readout for the renderer. Never fed back into the
    /// orientation.
    bank_angle: f32,
}

/// Initial orientation: yawed half a turn so the ship's forward (+Z local,
/// the model convention) points toward the origin.
pub fn initial_orientation() -> Quat {
    Quat::from_rotation_y(PI)
}

impl ShipController {
    pub fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
            orientation: initial_orientation(),
            camera: FollowCamera::new(CAMERA_REST_POSITION),
            bank_angle: 0.0,
        }
    }

    /// Restore the fixed initial pose and zero the banking accumulator. The
    /// camera is left where it is; it glides back behind the ship over the
    /// next ticks.
    pub fn reset(&mut self) {
        self.position = INITIAL_POSITION;
        self.orientation = initial_orientation();
        self.bank_angle = 0.0;
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn bank_angle(&self) -> f32 {
        self.bank_angle
    }

    /// The ship's forward axis in world space (+Z local).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// One simulation tick: translate, rotate, clamp, collide, then a single
    /// camera update at the end. On a collision the camera update is skipped
    /// and the collided body's name is returned.
    pub fn tick(
        &mut self,
        dt: f32,
        actions: &ActionState,
        bodies: &[CelestialBody],
    ) -> ShipOutcome {
        let mut speed = BASE_FORWARD_SPEED;
        if actions.is_pressed(Action::Boost) {
            speed *= BOOST_MULTIPLIER;
        }
        self.position += self.forward() * (speed * dt);

        // Successive local-axis rotations, pitch then yaw then roll.
        // Reordering changes the felt handling; keep it exactly so.
        let step = ROTATE_RATE * dt;
        if actions.is_pressed(Action::PitchUp) {
            self.rotate_local(Vec3::X, step);
        }
        if actions.is_pressed(Action::PitchDown) {
            self.rotate_local(Vec3::X, -step);
        }
        if actions.is_pressed(Action::YawLeft) {
            self.rotate_local(Vec3::Y, step);
        }
        if actions.is_pressed(Action::YawRight) {
            self.rotate_local(Vec3::Y, -step);
        }
        if actions.is_pressed(Action::RollLeft) {
            self.rotate_local(Vec3::Z, step);
        }
        if actions.is_pressed(Action::RollRight) {
            self.rotate_local(Vec3::Z, -step);
        }

        self.ease_bank(actions);

        self.position = self.position.clamp(
            Vec3::splat(-PLAY_AREA_HALF_SIZE),
            Vec3::splat(PLAY_AREA_HALF_SIZE),
        );

        if let Some(body) = find_collision(self.position, SHIP_COLLISION_RADIUS, bodies) {
            return ShipOutcome::Crashed(body.name.clone());
        }

        let target = self.orientation * CAMERA_OFFSET + self.position;
        let up = self.orientation * Vec3::Y;
        self.camera.follow(target, self.position, up, CAMERA_SMOOTHING);

        ShipOutcome::Flying
    }

    fn rotate_local(&mut self, axis: Vec3, angle: f32) {
        self.orientation = (self.orientation * Quat::from_axis_angle(axis, angle)).normalize();
    }

    fn ease_bank(&mut self, actions: &ActionState) {
        let target = if actions.is_pressed(Action::YawRight) {
            -MAX_BANK_ANGLE
        } else if actions.is_pressed(Action::YawLeft) {
            MAX_BANK_ANGLE
        } else {
            0.0
        };
        self.bank_angle += (target - self.bank_angle) * BANK_SMOOTHING;
    }
}

impl Default for ShipController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::bodies::BodyKind;

    const DT: f32 = 1.0 / 60.0;

    fn no_bodies() -> Vec<CelestialBody> {
        Vec::new()
    }

    fn body_at(name: &str, position: Vec3, radius: f32) -> CelestialBody {
        CelestialBody {
            name: name.to_string(),
            kind: BodyKind::Central { spin_rate: 0.0 },
            position,
            radius,
            spin: 0.0,
            color: 0,
        }
    }

    fn pressed(actions: &[Action]) -> ActionState {
        let mut state = ActionState::default();
        for &a in actions {
            state.set(a, true);
        }
        state
    }

    #[test]
    fn idle_tick_moves_forward_without_rotating() {
        let mut ship = ShipController::new();
        let before = ship.orientation;
        let outcome = ship.tick(DT, &ActionState::default(), &no_bodies());
        assert_eq!(outcome, ShipOutcome::Flying);

        // Initial facing is -Z (toward the sun); displacement = speed * dt
        let expected = INITIAL_POSITION + Vec3::NEG_Z * (BASE_FORWARD_SPEED * DT);
        assert!(ship.position.distance(expected) < 1e-4, "pos {:?}", ship.position);
        assert!(ship.orientation.angle_between(before) < 1e-6);
    }

    #[test]
    fn boost_multiplies_displacement() {
        let mut plain = ShipController::new();
        plain.tick(DT, &ActionState::default(), &no_bodies());
        let plain_dist = plain.position.distance(INITIAL_POSITION);

        let mut boosted = ShipController::new();
        boosted.tick(DT, &pressed(&[Action::Boost]), &no_bodies());
        let boost_dist = boosted.position.distance(INITIAL_POSITION);

        assert!((boost_dist - plain_dist * BOOST_MULTIPLIER).abs() < 1e-5);
    }

    #[test]
    fn pitch_rotates_around_local_x() {
        let mut ship = ShipController::new();
        ship.tick(DT, &pressed(&[Action::PitchUp]), &no_bodies());
        let expected =
            initial_orientation() * Quat::from_axis_angle(Vec3::X, ROTATE_RATE * DT);
        assert!(ship.orientation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn combined_inputs_apply_in_pitch_yaw_roll_order() {
        let mut ship = ShipController::new();
        ship.tick(
            DT,
            &pressed(&[Action::PitchUp, Action::YawLeft, Action::RollLeft]),
            &no_bodies(),
        );
        let step = ROTATE_RATE * DT;
        let expected = initial_orientation()
            * Quat::from_axis_angle(Vec3::X, step)
            * Quat::from_axis_angle(Vec3::Y, step)
            * Quat::from_axis_angle(Vec3::Z, step);
        assert!(ship.orientation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn position_stays_inside_play_area() {
        let mut ship = ShipController::new();
        // Fly boosted for a long time; never leaves the cube
        let boost = pressed(&[Action::Boost]);
        for _ in 0..2000 {
            ship.tick(1.0, &boost, &no_bodies());
            assert!(ship.position.abs().max_element() <= PLAY_AREA_HALF_SIZE);
        }
        // And it actually reached the boundary
        assert_eq!(ship.position.z, -PLAY_AREA_HALF_SIZE);
    }

    #[test]
    fn collision_reports_body_and_skips_camera() {
        let mut ship = ShipController::new();
        let cam_before = ship.camera().position;
        let bodies = vec![body_at("Sun", INITIAL_POSITION, 10.0)];
        let outcome = ship.tick(DT, &ActionState::default(), &bodies);
        assert_eq!(outcome, ShipOutcome::Crashed("Sun".to_string()));
        assert_eq!(ship.camera().position, cam_before);
    }

    #[test]
    fn camera_eases_toward_ship_local_offset() {
        let mut ship = ShipController::new();
        let cam_before = ship.camera().position;
        ship.tick(DT, &ActionState::default(), &no_bodies());
        let target = ship.orientation * CAMERA_OFFSET + ship.position;
        let expected = cam_before.lerp(target, CAMERA_SMOOTHING);
        assert!(ship.camera().position.distance(expected) < 1e-4);
    }

    #[test]
    fn yaw_builds_bank_and_reset_zeroes_it() {
        let mut ship = ShipController::new();
        ship.tick(DT, &pressed(&[Action::YawLeft]), &no_bodies());
        assert!(ship.bank_angle() > 0.0);
        ship.reset();
        assert_eq!(ship.bank_angle(), 0.0);
        assert_eq!(ship.position, INITIAL_POSITION);
        assert!(ship.orientation.angle_between(initial_orientation()) < 1e-6);
    }
}
