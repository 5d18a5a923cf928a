mod guard;
mod waitgroup;

pub use guard::DoneGuard;
pub use waitgroup::WaitGroup;
