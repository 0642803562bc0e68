use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scene asset manifest, loaded from a JSON file at runtime.
///
/// The host fetches the assets (the model asynchronously, textures as they
/// arrive) and reports the ship-model outcome back through the simulation's
/// model-lifecycle calls. The engine itself never blocks on any of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    /// URL of the ship model (glTF).
    pub ship_model: String,
    /// Per-body texture paths, keyed by body name.
    #[serde(default)]
    pub textures: HashMap<String, String>,
    /// Background starfield parameters.
    #[serde(default)]
    pub starfield: StarfieldConfig,
}

/// Starfield particle cloud parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarfieldConfig {
    /// Number of star particles.
    #[serde(default = "default_star_count")]
    pub count: u32,
    /// Cube half-spread the particles are scattered across.
    #[serde(default = "default_star_spread")]
    pub spread: f32,
}

fn default_star_count() -> u32 {
    20_000
}

fn default_star_spread() -> f32 {
    4000.0
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: default_star_count(),
            spread: default_star_spread(),
        }
    }
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
