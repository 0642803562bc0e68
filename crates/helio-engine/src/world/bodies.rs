use glam::Vec3;
use thiserror::Error;

use crate::world::rng::Rng;

/// Orbital rates are tuned against a 60-updates-per-second baseline; angle
/// advances are scaled by `dt * 60` so behavior is frame-rate independent.
pub const RATE_BASELINE_HZ: f32 = 60.0;

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 50.0;
pub const SUN_SPIN_RATE: f32 = 0.0005;
const SUN_COLOR: u32 = 0xFFDDAA;

/// Static definition of one orbiting body.
#[derive(Debug, Clone)]
pub struct BodyDef {
    pub name: &'static str,
    /// Collision (and visual) radius.
    pub radius: f32,
    pub orbital_radius: f32,
    /// Angular rate along the orbit, radians per baseline update.
    pub orbital_speed: f32,
    /// Cosmetic self-spin rate, radians per baseline update.
    pub rotation_speed: f32,
    /// Renderer hint, 0xRRGGBB.
    pub color: u32,
}

/// What kind of body this is, with the parameters that only make sense for
/// that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    /// Fixed at the system center; spins in place.
    Central { spin_rate: f32 },
    /// Circles the center on the XZ plane.
    Orbiting {
        orbital_radius: f32,
        orbital_speed: f32,
        rotation_speed: f32,
        /// Current angular position along the orbit, radians. Never wrapped;
        /// cosine/sine are periodic.
        angle: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub kind: BodyKind,
    pub position: Vec3,
    /// Collision radius, matches the rendered sphere.
    pub radius: f32,
    /// Cosmetic self-rotation accumulator, radians.
    pub spin: f32,
    /// Renderer hint, 0xRRGGBB.
    pub color: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("body {0:?} has a negative collision radius")]
    NegativeRadius(String),
    #[error("body {0:?} has a negative orbital radius")]
    NegativeOrbitalRadius(String),
}

/// Owns the central body and all orbiting bodies, in insertion order
/// (central first). Positions are recomputed each tick; nothing else mutates
/// them.
#[derive(Debug, PartialEq)]
pub struct SolarSystem {
    bodies: Vec<CelestialBody>,
}

impl SolarSystem {
    /// Create the central body at the origin, then one body per definition,
    /// each at a uniformly random initial orbital angle.
    pub fn new(defs: &[BodyDef], rng: &mut Rng) -> Result<Self, WorldError> {
        for def in defs {
            if def.radius < 0.0 {
                return Err(WorldError::NegativeRadius(def.name.to_string()));
            }
            if def.orbital_radius < 0.0 {
                return Err(WorldError::NegativeOrbitalRadius(def.name.to_string()));
            }
        }
        Ok(Self::build(defs, rng))
    }

    /// The original five-planet layout around the sun.
    pub fn default_system(rng: &mut Rng) -> Self {
        Self::build(&default_defs(), rng)
    }

    fn build(defs: &[BodyDef], rng: &mut Rng) -> Self {
        let mut bodies = Vec::with_capacity(defs.len() + 1);
        bodies.push(CelestialBody {
            name: SUN_NAME.to_string(),
            kind: BodyKind::Central {
                spin_rate: SUN_SPIN_RATE,
            },
            position: Vec3::ZERO,
            radius: SUN_RADIUS,
            spin: 0.0,
            color: SUN_COLOR,
        });
        for def in defs {
            let angle = rng.next_angle();
            bodies.push(CelestialBody {
                name: def.name.to_string(),
                kind: BodyKind::Orbiting {
                    orbital_radius: def.orbital_radius,
                    orbital_speed: def.orbital_speed,
                    rotation_speed: def.rotation_speed,
                    angle,
                },
                position: orbit_position(Vec3::ZERO, def.orbital_radius, angle, 0.0),
                radius: def.radius,
                spin: 0.0,
                color: def.color,
            });
        }
        Self { bodies }
    }

    /// Advance orbital angles and recompute positions. Self-spin is cosmetic
    /// only and never feeds back into positions.
    pub fn tick(&mut self, dt: f32) {
        let scaled = dt * RATE_BASELINE_HZ;
        let center = self.bodies.first().map(|b| b.position).unwrap_or(Vec3::ZERO);
        for body in &mut self.bodies {
            match &mut body.kind {
                BodyKind::Central { spin_rate } => {
                    body.spin += *spin_rate * scaled;
                }
                BodyKind::Orbiting {
                    orbital_radius,
                    orbital_speed,
                    rotation_speed,
                    angle,
                } => {
                    *angle += *orbital_speed * scaled;
                    body.position =
                        orbit_position(center, *orbital_radius, *angle, body.position.y);
                    body.spin += *rotation_speed * scaled;
                }
            }
        }
    }

    /// Read-only snapshot of all bodies, central body first.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Position on a circular XZ orbit, preserving an independently-set height.
fn orbit_position(center: Vec3, orbital_radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(
        center.x + orbital_radius * angle.cos(),
        y,
        center.z + orbital_radius * angle.sin(),
    )
}

/// The original planet table.
pub fn default_defs() -> Vec<BodyDef> {
    vec![
        BodyDef {
            name: "Mercury",
            radius: 2.0,
            orbital_radius: 60.0,
            orbital_speed: 0.0008,
            rotation_speed: 0.005,
            color: 0x888888,
        },
        BodyDef {
            name: "Venus",
            radius: 3.5,
            orbital_radius: 110.0,
            orbital_speed: 0.0005,
            rotation_speed: 0.002,
            color: 0xFFFFEE,
        },
        BodyDef {
            name: "Earth",
            radius: 4.0,
            orbital_radius: 150.0,
            orbital_speed: 0.0004,
            rotation_speed: 0.003,
            color: 0x2266CC,
        },
        BodyDef {
            name: "Mars",
            radius: 2.5,
            orbital_radius: 225.0,
            orbital_speed: 0.0003,
            rotation_speed: 0.0025,
            color: 0xFF4500,
        },
        BodyDef {
            name: "Jupiter",
            radius: 10.0,
            orbital_radius: 400.0,
            orbital_speed: 0.0001,
            rotation_speed: 0.0003,
            color: 0xFFA500,
        },
    ]
}
