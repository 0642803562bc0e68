use crate::input::bindings::{is_reserved_symbol, Action, KeyBindingMap};
use crate::input::queue::InputEvent;
use crate::input::store::{load_bindings, save_bindings, BindingStore};

/// Per-action pressed state. Always holds one entry per action; an entry not
/// explicitly set means "not pressed".
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    pressed: [bool; Action::COUNT],
}

impl ActionState {
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub fn clear(&mut self) {
        self.pressed = [false; Action::COUNT];
    }
}

/// Maps raw key events to named action flags through a rebindable binding
/// map, and runs the key-capture protocol for rebinding.
pub struct InputTracker {
    bindings: KeyBindingMap,
    actions: ActionState,
    rebind_pending: Option<Action>,
}

impl InputTracker {
    /// Build a tracker with bindings loaded from the store (defaults when the
    /// store is empty or unreadable).
    pub fn from_store(store: &dyn BindingStore) -> Self {
        Self::with_bindings(load_bindings(store))
    }

    pub fn with_bindings(bindings: KeyBindingMap) -> Self {
        Self {
            bindings,
            actions: ActionState::default(),
            rebind_pending: None,
        }
    }

    pub fn bindings(&self) -> &KeyBindingMap {
        &self.bindings
    }

    pub fn actions(&self) -> &ActionState {
        &self.actions
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.actions.is_pressed(action)
    }

    /// Clear all pressed states (on reset, so the ship stops responding to
    /// keys held before a restart).
    pub fn clear_pressed(&mut self) {
        self.actions.clear();
    }

    /// The action currently waiting for a capture key, if any.
    pub fn rebind_pending(&self) -> Option<Action> {
        self.rebind_pending
    }

    /// Enter rebind-pending mode: the next key-down is captured as the new
    /// binding for `action` instead of updating pressed state.
    pub fn request_rebind(&mut self, action: Action) {
        self.rebind_pending = Some(action);
    }

    /// Leave rebind-pending mode without changing bindings.
    pub fn cancel_rebind(&mut self) {
        self.rebind_pending = None;
    }

    /// Restore the built-in default bindings and persist immediately.
    pub fn reset_to_defaults(&mut self, store: &mut dyn BindingStore) {
        self.bindings = KeyBindingMap::default();
        save_bindings(store, &self.bindings);
    }

    /// Apply one queued input event.
    pub fn apply(&mut self, event: &InputEvent, store: &mut dyn BindingStore) {
        match event {
            InputEvent::KeyDown { symbol } => self.on_key_down(symbol, store),
            InputEvent::KeyUp { symbol } => self.on_key_up(symbol),
        }
    }

    /// Key pressed. While rebind-pending the event is intercepted entirely:
    /// a reserved symbol aborts the rebind, anything else becomes the new
    /// binding (persisted). Pressed state is never touched in that mode, so
    /// the capture key cannot spuriously trigger its old action.
    pub fn on_key_down(&mut self, symbol: &str, store: &mut dyn BindingStore) {
        let symbol = symbol.to_lowercase();
        if let Some(action) = self.rebind_pending.take() {
            if is_reserved_symbol(&symbol) {
                log::warn!(
                    "cannot bind {} to reserved key {:?}",
                    action.display_name(),
                    symbol
                );
                return;
            }
            self.bindings.set(action, &symbol);
            save_bindings(store, &self.bindings);
            return;
        }
        if let Some(action) = self.bindings.action_for(&symbol) {
            self.actions.set(action, true);
        }
    }

    /// Key released: clear pressed state for whatever action the symbol is
    /// bound to.
    pub fn on_key_up(&mut self, symbol: &str) {
        let symbol = symbol.to_lowercase();
        if let Some(action) = self.bindings.action_for(&symbol) {
            self.actions.set(action, false);
        }
    }
}
