pub mod assets;
pub mod core;
pub mod input;
pub mod render;
pub mod ship;
pub mod sim;
pub mod world;

// Re-export key types at crate root for convenience
pub use crate::assets::manifest::SceneManifest;
pub use crate::core::time::FrameClock;
pub use crate::input::bindings::{is_reserved_symbol, Action, KeyBindingMap, BINDINGS_STORAGE_KEY};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::input::store::{BindingStore, MemoryStore};
pub use crate::input::tracker::{ActionState, InputTracker};
pub use crate::render::snapshot::{BodyInstance, PoseData, SceneSnapshot, SnapshotHeader};
pub use crate::ship::camera::FollowCamera;
pub use crate::ship::controller::{ShipController, ShipOutcome};
pub use crate::sim::phase::{CrashInfo, SessionState, SimulationPhase};
pub use crate::sim::session::Simulation;
pub use crate::world::bodies::{BodyDef, BodyKind, CelestialBody, SolarSystem, WorldError};
pub use crate::world::collision::find_collision;
pub use crate::world::rng::Rng;
