use bytemuck::{Pod, Zeroable};

use crate::sim::session::Simulation;
use crate::world::bodies::CelestialBody;

/// Flat scene snapshot the JS renderer reads out of wasm linear memory after
/// each frame. All blocks are tightly packed little-endian f32:
///
/// - header: [phase, body_count, ship_present, generation]
/// - bodies: body_count × [x, y, z, radius, spin, r, g, b]
/// - ship:   [x, y, z, qx, qy, qz, qw, bank]
/// - camera: [x, y, z, qx, qy, qz, qw, 0]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SnapshotHeader {
    pub phase: f32,
    pub body_count: f32,
    pub ship_present: f32,
    pub generation: f32,
}

impl SnapshotHeader {
    pub const FLOATS: usize = 4;
}

/// One drawable celestial body.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub pos: [f32; 3],
    pub radius: f32,
    pub spin: f32,
    pub color: [f32; 3],
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
}

/// A positioned, oriented object (ship or camera). `aux` carries the ship's
/// cosmetic bank angle; zero for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PoseData {
    pub pos: [f32; 3],
    pub quat: [f32; 4],
    pub aux: f32,
}

impl PoseData {
    pub const FLOATS: usize = 8;
}

/// Owns the snapshot buffers and rebuilds them from the simulation once per
/// frame. Buffers are pre-allocated; rebuilding never allocates unless the
/// body count grows.
pub struct SceneSnapshot {
    header: SnapshotHeader,
    bodies: Vec<BodyInstance>,
    ship: PoseData,
    camera: PoseData,
}

impl SceneSnapshot {
    pub fn with_capacity(bodies: usize) -> Self {
        Self {
            header: SnapshotHeader::default(),
            bodies: Vec::with_capacity(bodies),
            ship: PoseData::default(),
            camera: PoseData::default(),
        }
    }

    pub fn rebuild(&mut self, sim: &Simulation) {
        self.bodies.clear();
        for body in sim.world().bodies() {
            self.bodies.push(body_instance(body));
        }

        let ship = sim.ship();
        self.ship = PoseData {
            pos: ship.position.to_array(),
            quat: ship.orientation.to_array(),
            aux: ship.bank_angle(),
        };

        let camera = ship.camera();
        self.camera = PoseData {
            pos: camera.position.to_array(),
            quat: camera.orientation.to_array(),
            aux: 0.0,
        };

        self.header = SnapshotHeader {
            phase: sim.phase().code() as f32,
            body_count: self.bodies.len() as f32,
            ship_present: if sim.ship_present() { 1.0 } else { 0.0 },
            generation: sim.state().generation() as f32,
        };
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.header).as_ptr() as *const f32
    }

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.as_ptr() as *const f32
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.len() as u32
    }

    pub fn ship_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.ship).as_ptr() as *const f32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.camera).as_ptr() as *const f32
    }

    pub fn header(&self) -> &SnapshotHeader {
        &self.header
    }

    pub fn bodies(&self) -> &[BodyInstance] {
        &self.bodies
    }

    pub fn ship(&self) -> &PoseData {
        &self.ship
    }

    pub fn camera(&self) -> &PoseData {
        &self.camera
    }
}

fn body_instance(body: &CelestialBody) -> BodyInstance {
    BodyInstance {
        pos: body.position.to_array(),
        radius: body.radius,
        spin: body.spin,
        color: unpack_rgb(body.color),
    }
}

/// 0xRRGGBB → linear [r, g, b] in [0, 1].
fn unpack_rgb(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::store::MemoryStore;
    use crate::sim::phase::SimulationPhase;

    #[test]
    fn struct_layouts_match_documented_float_counts() {
        assert_eq!(
            std::mem::size_of::<SnapshotHeader>(),
            SnapshotHeader::FLOATS * 4
        );
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::FLOATS * 4);
        assert_eq!(std::mem::size_of::<PoseData>(), PoseData::FLOATS * 4);
    }

    #[test]
    fn rebuild_captures_the_whole_scene() {
        let store = MemoryStore::new();
        let sim = Simulation::new(&store, 7);
        let mut snap = SceneSnapshot::with_capacity(8);
        snap.rebuild(&sim);

        assert_eq!(snap.body_count(), 6); // sun + five planets
        assert_eq!(snap.header().phase, SimulationPhase::StartMenu.code() as f32);
        assert_eq!(snap.header().ship_present, 0.0);
        assert_eq!(snap.bodies()[0].radius, 50.0);
        assert_eq!(snap.ship().pos, [0.0, 0.0, 200.0]);
    }

    #[test]
    fn unpack_rgb_splits_channels() {
        assert_eq!(unpack_rgb(0xFF0000), [1.0, 0.0, 0.0]);
        let [r, g, b] = unpack_rgb(0x2266CC);
        assert!((r - 0x22 as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x66 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0xCC as f32 / 255.0).abs() < 1e-6);
    }
}
