use serde::{Deserialize, Serialize};

/// Versioned localStorage key for persisted bindings.
pub const BINDINGS_STORAGE_KEY: &str = "helio.keybindings.v1";

/// Symbols reserved for menu confirm/cancel. Never bindable to an action.
const RESERVED_SYMBOLS: [&str; 2] = ["enter", "escape"];

/// Whether a symbol is reserved for menu navigation.
pub fn is_reserved_symbol(symbol: &str) -> bool {
    RESERVED_SYMBOLS.contains(&symbol)
}

/// A player-control intent, independent of the physical key bound to it.
/// The set is closed and ordered; `ALL` is the canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    Boost,
}

impl Action {
    pub const COUNT: usize = 7;

    pub const ALL: [Action; Action::COUNT] = [
        Action::PitchUp,
        Action::PitchDown,
        Action::YawLeft,
        Action::YawRight,
        Action::RollLeft,
        Action::RollRight,
        Action::Boost,
    ];

    /// Stable index into per-action arrays.
    pub fn index(self) -> usize {
        match self {
            Action::PitchUp => 0,
            Action::PitchDown => 1,
            Action::YawLeft => 2,
            Action::YawRight => 3,
            Action::RollLeft => 4,
            Action::RollRight => 5,
            Action::Boost => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    /// Human-readable name for rebinding menus.
    pub fn display_name(self) -> &'static str {
        match self {
            Action::PitchUp => "Pitch Up",
            Action::PitchDown => "Pitch Down",
            Action::YawLeft => "Yaw Left",
            Action::YawRight => "Yaw Right",
            Action::RollLeft => "Roll Left",
            Action::RollRight => "Roll Right",
            Action::Boost => "Boost",
        }
    }
}

/// Mapping from each action to its bound key symbol.
///
/// Serialized as a flat JSON object so the persisted form stays readable and
/// forward-compatible; on load, each action falls back to its default
/// individually when the stored entry is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindingMap {
    pub pitch_up: String,
    pub pitch_down: String,
    pub yaw_left: String,
    pub yaw_right: String,
    pub roll_left: String,
    pub roll_right: String,
    pub boost: String,
}

impl Default for KeyBindingMap {
    fn default() -> Self {
        Self {
            pitch_up: "w".to_string(),
            pitch_down: "s".to_string(),
            yaw_left: "q".to_string(),
            yaw_right: "e".to_string(),
            roll_left: "a".to_string(),
            roll_right: "d".to_string(),
            boost: " ".to_string(),
        }
    }
}

impl KeyBindingMap {
    fn field_name(action: Action) -> &'static str {
        match action {
            Action::PitchUp => "pitch_up",
            Action::PitchDown => "pitch_down",
            Action::YawLeft => "yaw_left",
            Action::YawRight => "yaw_right",
            Action::RollLeft => "roll_left",
            Action::RollRight => "roll_right",
            Action::Boost => "boost",
        }
    }

    /// The key currently bound to an action.
    pub fn get(&self, action: Action) -> &str {
        match action {
            Action::PitchUp => &self.pitch_up,
            Action::PitchDown => &self.pitch_down,
            Action::YawLeft => &self.yaw_left,
            Action::YawRight => &self.yaw_right,
            Action::RollLeft => &self.roll_left,
            Action::RollRight => &self.roll_right,
            Action::Boost => &self.boost,
        }
    }

    /// Bind an action to a symbol (case-folded). Overwrites the previous
    /// binding for that action only.
    pub fn set(&mut self, action: Action, symbol: &str) {
        let symbol = symbol.to_lowercase();
        let slot = match action {
            Action::PitchUp => &mut self.pitch_up,
            Action::PitchDown => &mut self.pitch_down,
            Action::YawLeft => &mut self.yaw_left,
            Action::YawRight => &mut self.yaw_right,
            Action::RollLeft => &mut self.roll_left,
            Action::RollRight => &mut self.roll_right,
            Action::Boost => &mut self.boost,
        };
        *slot = symbol;
    }

    /// First action bound to the given symbol, in `Action::ALL` order.
    pub fn action_for(&self, symbol: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| self.get(action) == symbol)
    }

    /// Display form of a bound key for UI lists.
    pub fn display_key(key: &str) -> String {
        if key == " " {
            return "SPACE".to_string();
        }
        if key.chars().count() == 1 {
            return key.to_uppercase();
        }
        key.to_string()
    }

    pub fn to_json(&self) -> String {
        // A struct of plain strings cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a persisted map leniently: for each known action, use the stored
    /// value when it is a usable string (non-empty, not reserved), else keep
    /// the default. Unknown fields are ignored; a document that is valid
    /// JSON but not an object yields the defaults. Returns an error only
    /// when the document does not parse at all.
    pub fn from_json_lenient(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let mut map = KeyBindingMap::default();
        let Some(object) = value.as_object() else {
            return Ok(map);
        };
        for action in Action::ALL {
            let stored = object
                .get(Self::field_name(action))
                .and_then(|v| v.as_str())
                .map(str::to_lowercase);
            match stored {
                Some(symbol) if !symbol.is_empty() && !is_reserved_symbol(&symbol) => {
                    map.set(action, &symbol);
                }
                Some(bad) => {
                    log::warn!(
                        "ignoring stored binding {:?} for {}, keeping default",
                        bad,
                        action.display_name()
                    );
                }
                None => {}
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_layout() {
        let map = KeyBindingMap::default();
        assert_eq!(map.get(Action::PitchUp), "w");
        assert_eq!(map.get(Action::YawRight), "e");
        assert_eq!(map.get(Action::Boost), " ");
    }

    #[test]
    fn action_for_finds_bound_key() {
        let map = KeyBindingMap::default();
        assert_eq!(map.action_for("q"), Some(Action::YawLeft));
        assert_eq!(map.action_for("x"), None);
    }

    #[test]
    fn set_case_folds() {
        let mut map = KeyBindingMap::default();
        map.set(Action::Boost, "B");
        assert_eq!(map.get(Action::Boost), "b");
    }

    #[test]
    fn json_round_trip() {
        let mut map = KeyBindingMap::default();
        map.set(Action::PitchUp, "arrowup");
        let json = map.to_json();
        let loaded = KeyBindingMap::from_json_lenient(&json).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn lenient_parse_falls_back_per_action() {
        // pitch_up malformed (number), yaw_left missing, boost reserved
        let json = r#"{ "pitch_up": 7, "pitch_down": "k", "boost": "enter" }"#;
        let map = KeyBindingMap::from_json_lenient(json).unwrap();
        assert_eq!(map.get(Action::PitchUp), "w");
        assert_eq!(map.get(Action::PitchDown), "k");
        assert_eq!(map.get(Action::YawLeft), "q");
        assert_eq!(map.get(Action::Boost), " ");
    }

    #[test]
    fn lenient_parse_rejects_garbage() {
        assert!(KeyBindingMap::from_json_lenient("not json").is_err());
    }

    #[test]
    fn reserved_symbols() {
        assert!(is_reserved_symbol("enter"));
        assert!(is_reserved_symbol("escape"));
        assert!(!is_reserved_symbol("w"));
    }

    #[test]
    fn display_key_forms() {
        assert_eq!(KeyBindingMap::display_key(" "), "SPACE");
        assert_eq!(KeyBindingMap::display_key("w"), "W");
        assert_eq!(KeyBindingMap::display_key("arrowup"), "arrowup");
    }

    #[test]
    fn all_order_is_stable() {
        for (i, action) in Action::ALL.into_iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(action));
        }
        assert_eq!(Action::from_index(Action::COUNT), None);
    }
}
