use std::thread;

use crate::waitgroup::WaitGroup;

use super::{GreetPlan, Sink};

/// Greeter
///
/// A unit of work that greets one name a fixed number of times, pausing before each
/// greeting, then signals its completion on the shared [`WaitGroup`](crate::WaitGroup).
///
/// Greetings of a single greeter come out in order, but nothing orders them against
/// the greetings of other greeters running at the same time.
pub struct Greeter {
    name: String,
    wait_group: WaitGroup,
}

impl Greeter {
    /// Creates a greeter for `name` that reports to `wait_group` when done
    pub fn new(name: impl Into<String>, wait_group: WaitGroup) -> Self {
        Self {
            name: name.into(),
            wait_group,
        }
    }
}

impl Greeter {
    /// Greets according to `plan`, writing each ``Hello <name>`` line into `sink`,
    /// then calls ``done()`` on the wait group exactly once
    ///
    /// Completion is signaled even if writing into `sink` panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use greet_groups::{GreetPlan, Greeter, Sink, WaitGroup};
    /// use std::time::Duration;
    ///
    /// let wait_group = WaitGroup::new();
    /// wait_group.add(1);
    /// let (sink, captured) = Sink::memory();
    /// Greeter::new("Minh", wait_group.clone()).run(GreetPlan::new(2, Duration::ZERO), &sink);
    /// wait_group.wait();
    /// assert_eq!(captured.lines(), vec!["Hello Minh", "Hello Minh"]);
    /// ```
    pub fn run(self, plan: GreetPlan, sink: &Sink) {
        let _done = self.wait_group.done_guard();
        let line = format!("Hello {}", self.name);
        for _ in 0..plan.repeats {
            thread::sleep(plan.interval);
            if let Err(error) = sink.write_line(&line) {
                log::warn!("{} could not write its greeting: {error}", self.name);
            }
        }
        log::debug!("{} finished greeting", self.name);
    }
}
