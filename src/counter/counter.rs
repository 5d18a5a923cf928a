/// Counter
///
/// Hands out 1, 2, 3, ... on successive calls to ``increment()``.
/// Every counter keeps its own count.
///
/// # Example
///
/// ```rust
/// use greet_groups::Counter;
///
/// let mut first = Counter::new();
/// let mut second = Counter::new();
/// assert_eq!(first.increment(), 1);
/// assert_eq!(first.increment(), 2);
/// assert_eq!(second.increment(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the count and returns the new value
    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// Last value handed out, zero before the first ``increment()``
    pub fn current(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn yields_one_to_n_in_sequence() {
        let mut counter = Counter::new();
        let values: Vec<_> = (0..10).map(|_| counter.increment()).collect();
        assert_eq!(values, (1..=10u64).collect::<Vec<_>>());
        assert_eq!(counter.current(), 10);
    }

    #[test]
    fn instances_are_independent() {
        let mut first = Counter::new();
        let mut second = Counter::new();
        first.increment();
        first.increment();
        first.increment();
        assert_eq!(second.current(), 0);
        assert_eq!(second.increment(), 1);
        assert_eq!(first.increment(), 4);
    }
}
