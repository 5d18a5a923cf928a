//! Concurrent greeters coordinated by a wait group, plus a couple of small companions.
//!
//! A [`Coordinator`](self::Coordinator) registers one pending completion per name on a
//! [`WaitGroup`](self::WaitGroup), launches a [`Greeter`](self::Greeter) for each name on its own
//! worker thread and blocks until every greeter has signaled that it is done.
//!
//! # Example
//!
//! ```rust
//! use greet_groups::{Coordinator, GreetPlan, Sink};
//! use std::time::Duration;
//!
//! let (sink, captured) = Sink::memory();
//! let coordinator = Coordinator::new(["Minh", "Linh"], GreetPlan::new(5, Duration::from_millis(1)), sink);
//! coordinator.run();
//!
//! let lines = captured.lines();
//! assert_eq!(lines.len(), 10);
//! assert!(lines.iter().all(|line| line.starts_with("Hello ")));
//! ```
//!
//! # Usage
//!
//! * ``run`` greets "Minh" and "Linh" five times each, pausing 200 milliseconds before every greeting,
//! and writes the greetings to standard output. See [`run`](self::run)
//!
//! * ``Coordinator`` runs any list of names with any [`GreetPlan`](self::GreetPlan) into any [`Sink`](self::Sink).
//! See [`Coordinator`](self::Coordinator)
//!
//! * ``WaitGroup`` is the completion counter itself and works with plain threads as well.
//! See [`WaitGroup`](self::WaitGroup)
//!
//! * ``Counter`` hands out an increasing sequence of numbers. See [`Counter`](self::Counter)
//!
//! * ``Shape`` measures areas and perimeters, [`Rect`](self::Rect) being the only shape so far.
//! See [`Shape`](self::Shape)
//!
//! # Greeting Order
//! Greetings of one greeter come out in order. Greetings of different greeters interleave in any order.
//!
//! # Note
//! * ``Coordinator::run`` never times out, it returns once every greeter has called ``done()``
//! * Diagnostics go through the ``log`` facade, nothing but greetings is written to the sink

mod coordinator;
mod counter;
mod error;
mod greeter;
mod shape;
mod waitgroup;

pub use coordinator::{Coordinator, DEFAULT_NAMES};
pub use counter::Counter;
pub use error::{Error, Result};
pub use greeter::{Captured, GreetPlan, Greeter, Sink, DEFAULT_INTERVAL, DEFAULT_REPEATS};
pub use shape::{report_area, Rect, Shape, ShapeError, ShapeKind};
pub use waitgroup::{DoneGuard, WaitGroup};

/// Greets "Minh" and "Linh" concurrently on standard output and returns once both are done
///
/// See [`Coordinator`](coordinator::Coordinator)
/// for more.
pub fn run() {
    Coordinator::default().run();
}
