use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

type Writer = Box<dyn Write + Send>;

/// Line writer shared by every greeter
///
/// Each line is written and flushed while the lock is held so lines from
/// concurrently running greeters never tear into each other.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Writer>>,
}

impl Sink {
    /// Wraps any writer
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Sink writing to the process' standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Sink writing into memory, along with the handle used to read it back
    pub fn memory() -> (Self, Captured) {
        let captured = Captured::default();
        (Self::new(captured.clone()), captured)
    }
}

impl Sink {
    pub(crate) fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

/// In-memory output captured through [`Sink::memory`](Sink::memory)
#[derive(Clone, Default)]
pub struct Captured {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Captured {
    /// Every complete line written so far
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buffer.lock())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
