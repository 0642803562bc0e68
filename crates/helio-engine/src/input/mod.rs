pub mod bindings;
pub mod queue;
pub mod store;
pub mod tracker;
