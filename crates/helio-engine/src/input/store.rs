use crate::input::bindings::KeyBindingMap;

/// Durable storage for the key-binding map.
///
/// The engine persists bindings on every successful rebind and on
/// reset-to-defaults; the web bridge implements this on `localStorage` under
/// the versioned `BINDINGS_STORAGE_KEY`.
pub trait BindingStore {
    /// The raw persisted JSON document, if any.
    fn load(&self) -> Option<String>;
    /// Persist the JSON document. Returns false if the store rejected it.
    fn save(&mut self, json: &str) -> bool;
}

/// Load bindings from a store, falling back to defaults when the store is
/// empty or holds an unparseable document.
pub fn load_bindings(store: &dyn BindingStore) -> KeyBindingMap {
    let Some(json) = store.load() else {
        return KeyBindingMap::default();
    };
    match KeyBindingMap::from_json_lenient(&json) {
        Ok(map) => map,
        Err(err) => {
            log::error!("failed to parse stored key bindings: {err}");
            KeyBindingMap::default()
        }
    }
}

/// Persist the current bindings, logging on store failure.
pub fn save_bindings(store: &mut dyn BindingStore, map: &KeyBindingMap) {
    if !store.save(&map.to_json()) {
        log::error!("failed to save key bindings");
    }
}

/// In-memory store for tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a persisted document.
    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            slot: Some(json.into()),
        }
    }
}

impl BindingStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.clone()
    }

    fn save(&mut self, json: &str) -> bool {
        self.slot = Some(json.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::bindings::Action;

    #[test]
    fn empty_store_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_bindings(&store), KeyBindingMap::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let mut map = KeyBindingMap::default();
        map.set(Action::RollLeft, "j");
        save_bindings(&mut store, &map);
        assert_eq!(load_bindings(&store), map);
    }

    #[test]
    fn malformed_document_falls_back_to_defaults() {
        let store = MemoryStore::with_contents("{{{nope");
        assert_eq!(load_bindings(&store), KeyBindingMap::default());
    }
}
