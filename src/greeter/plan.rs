use std::time::Duration;

/// Number of greetings each greeter prints
pub const DEFAULT_REPEATS: usize = 5;

/// Pause before every greeting
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// How many times a greeter greets and how long it pauses before each greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetPlan {
    pub repeats: usize,
    pub interval: Duration,
}

impl GreetPlan {
    pub fn new(repeats: usize, interval: Duration) -> Self {
        Self { repeats, interval }
    }
}

impl Default for GreetPlan {
    fn default() -> Self {
        Self::new(DEFAULT_REPEATS, DEFAULT_INTERVAL)
    }
}
