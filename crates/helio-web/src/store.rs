use helio_engine::{BindingStore, BINDINGS_STORAGE_KEY};

/// `BindingStore` backed by `window.localStorage`.
///
/// Storage can be unavailable (no window in a worker, privacy mode denying
/// access); every failure degrades to "nothing persisted" and the engine
/// falls back to default bindings.
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl BindingStore for LocalStore {
    fn load(&self) -> Option<String> {
        let storage = local_storage()?;
        match storage.get_item(BINDINGS_STORAGE_KEY) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("localStorage read failed; using default bindings");
                None
            }
        }
    }

    fn save(&mut self, json: &str) -> bool {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; bindings not persisted");
            return false;
        };
        storage.set_item(BINDINGS_STORAGE_KEY, json).is_ok()
    }
}
