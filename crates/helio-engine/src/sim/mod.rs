pub mod phase;
pub mod session;
