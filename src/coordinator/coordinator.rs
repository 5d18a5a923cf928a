use threadpool::ThreadPool;

use crate::{
    greeter::{GreetPlan, Greeter, Sink},
    waitgroup::WaitGroup,
};

/// Names greeted by a default ``Coordinator``
pub const DEFAULT_NAMES: [&str; 2] = ["Minh", "Linh"];

/// Coordinator
///
/// Launches one [`Greeter`](crate::Greeter) per name, all running concurrently on their own
/// worker thread, and blocks until every one of them has signaled completion.
///
/// There is no timeout and no cancellation, ``run()`` only returns once every greeter is done.
pub struct Coordinator {
    names: Vec<String>,
    plan: GreetPlan,
    sink: Sink,
}

impl Coordinator {
    /// # Parameters
    ///
    /// * `names`: one greeter is launched per name
    /// * `plan`: how many times and how often each greeter greets
    /// * `sink`: where every greeting line is written
    pub fn new<Names, Name>(names: Names, plan: GreetPlan, sink: Sink) -> Self
    where
        Names: IntoIterator<Item = Name>,
        Name: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            plan,
            sink,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(DEFAULT_NAMES, GreetPlan::default(), Sink::stdout())
    }
}

impl Coordinator {
    /// Runs every greeter concurrently and waits for all of them
    ///
    /// # Example
    ///
    /// ```rust
    /// use greet_groups::{Coordinator, GreetPlan, Sink};
    /// use std::time::Duration;
    ///
    /// let (sink, captured) = Sink::memory();
    /// Coordinator::new(["Minh", "Linh"], GreetPlan::new(5, Duration::from_millis(1)), sink).run();
    ///
    /// let lines = captured.lines();
    /// assert_eq!(lines.len(), 10);
    /// assert_eq!(lines.iter().filter(|line| *line == "Hello Minh").count(), 5);
    /// assert_eq!(lines.iter().filter(|line| *line == "Hello Linh").count(), 5);
    /// ```
    pub fn run(&self) {
        if self.names.is_empty() {
            return;
        }
        let wait_group = WaitGroup::new();
        wait_group.add(self.names.len());

        let pool = threadpool::Builder::new()
            .num_threads(self.names.len())
            .thread_name("greeter".into())
            .build();
        self.launch(&pool, &wait_group);

        wait_group.wait();
        log::debug!("all {} greeters are done", self.names.len());
    }

    fn launch(&self, pool: &ThreadPool, wait_group: &WaitGroup) {
        for name in &self.names {
            let greeter = Greeter::new(name.as_str(), wait_group.clone());
            let (plan, sink) = (self.plan, self.sink.clone());
            log::debug!("launching greeter for {name}");
            pool.execute(move || greeter.run(plan, &sink));
        }
    }
}
