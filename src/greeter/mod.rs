mod greeter;
mod plan;
mod sink;

pub use greeter::Greeter;
pub use plan::{GreetPlan, DEFAULT_INTERVAL, DEFAULT_REPEATS};
pub use sink::{Captured, Sink};
