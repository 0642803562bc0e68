/// Input event types the simulation understands.
/// Symbols are normalized key names (case-folded by the bridge): "w", " ",
/// "arrowup", "enter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { symbol: String },
    /// A key was released.
    KeyUp { symbol: String },
}

/// A queue of input events.
/// JS writes events into the queue; the simulation drains them once per
/// frame, before any tick work, so event application and tick execution are
/// serialized on the same thread.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Push a key-down event for a raw symbol, case-folding it.
    pub fn push_key_down(&mut self, symbol: &str) {
        self.push(InputEvent::KeyDown {
            symbol: symbol.to_lowercase(),
        });
    }

    /// Push a key-up event for a raw symbol, case-folding it.
    pub fn push_key_up(&mut self, symbol: &str) {
        self.push(InputEvent::KeyUp {
            symbol: symbol.to_lowercase(),
        });
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push_key_down("w");
        q.push_key_up("w");
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn symbols_are_case_folded() {
        let mut q = InputQueue::new();
        q.push_key_down("W");
        let events = q.drain();
        assert_eq!(
            events[0],
            InputEvent::KeyDown {
                symbol: "w".to_string()
            }
        );
    }
}
