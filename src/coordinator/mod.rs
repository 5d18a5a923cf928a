mod coordinator;

pub use coordinator::{Coordinator, DEFAULT_NAMES};
